//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::config::Config;
use crate::db::store::{AssignmentStore, UserStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Assignment, roster, and submission storage
    pub assignments: Arc<dyn AssignmentStore>,

    /// User account storage
    pub users: Arc<dyn UserStore>,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        assignments: Arc<dyn AssignmentStore>,
        users: Arc<dyn UserStore>,
        config: Config,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                assignments,
                users,
                config,
            }),
        }
    }

    /// Get a reference to the assignment store
    pub fn assignments(&self) -> &dyn AssignmentStore {
        self.inner.assignments.as_ref()
    }

    /// Get a reference to the user store
    pub fn users(&self) -> &dyn UserStore {
        self.inner.users.as_ref()
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
