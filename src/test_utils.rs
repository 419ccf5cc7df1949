//! Test utilities
//!
//! An in-memory [`AssignmentStore`] with the same atomicity and uniqueness
//! guarantees as the Postgres implementation, plus failure injection, so the
//! service layer can be exercised without a database.

use uuid::Uuid;

use crate::middleware::auth::AuthenticatedUser;
use crate::models::Role;

/// A tutor principal with a fresh id
pub fn tutor_principal() -> AuthenticatedUser {
    let id = Uuid::new_v4();
    AuthenticatedUser {
        id,
        username: format!("tutor-{}", id.simple()),
        role: Role::Tutor,
    }
}

/// A student principal with a fresh id
pub fn student_principal() -> AuthenticatedUser {
    let id = Uuid::new_v4();
    AuthenticatedUser {
        id,
        username: format!("student-{}", id.simple()),
        role: Role::Student,
    }
}

pub mod store {
    use std::collections::HashMap;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicBool, Ordering};

    use async_trait::async_trait;
    use chrono::{DateTime, Utc};
    use uuid::Uuid;

    use crate::db::store::{AssignmentStore, NewAssignment, StudentFeedRow};
    use crate::error::{AppError, AppResult};
    use crate::middleware::auth::AuthenticatedUser;
    use crate::models::{Assignment, Submission, SubmissionWithStudent};

    #[derive(Default)]
    struct Inner {
        assignments: HashMap<Uuid, Assignment>,
        // (assignment_id, student_id) pairs
        roster: Vec<(Uuid, Uuid)>,
        // keyed by (assignment_id, student_id): the uniqueness constraint
        submissions: HashMap<(Uuid, Uuid), Submission>,
        usernames: HashMap<Uuid, String>,
    }

    /// In-memory assignment store with failure injection.
    ///
    /// All state lives behind one mutex; every trait method applies its
    /// checks and mutations under a single lock acquisition, mirroring the
    /// all-or-nothing transactions of the Postgres store.
    #[derive(Default)]
    pub struct MemStore {
        inner: Mutex<Inner>,
        fail_roster_for: Mutex<Option<Uuid>>,
        fail_next_delete: AtomicBool,
    }

    impl MemStore {
        pub fn new() -> Self {
            Self::default()
        }

        /// Make any roster insert for this student id fail, aborting the
        /// surrounding operation.
        pub fn fail_roster_insert_for(&self, student_id: Uuid) {
            *self.fail_roster_for.lock().unwrap() = Some(student_id);
        }

        /// Make the next delete_assignment call fail before mutating.
        pub fn fail_next_delete(&self) {
            self.fail_next_delete.store(true, Ordering::SeqCst);
        }

        /// Register a username so tutor detail views can join it.
        pub fn add_user(&self, principal: &AuthenticatedUser) {
            self.inner
                .lock()
                .unwrap()
                .usernames
                .insert(principal.id, principal.username.clone());
        }

        /// Rewrite an assignment's submission window, bypassing validation,
        /// so tests can move it into the past.
        pub fn shift_window(
            &self,
            assignment_id: Uuid,
            published_at: DateTime<Utc>,
            deadline: DateTime<Utc>,
        ) {
            let mut inner = self.inner.lock().unwrap();
            let a = inner
                .assignments
                .get_mut(&assignment_id)
                .expect("unknown assignment");
            a.published_at = published_at;
            a.deadline = deadline;
        }

        pub fn assignment_count(&self) -> usize {
            self.inner.lock().unwrap().assignments.len()
        }

        pub fn roster_count(&self) -> usize {
            self.inner.lock().unwrap().roster.len()
        }

        pub fn submission_count(&self) -> usize {
            self.inner.lock().unwrap().submissions.len()
        }

        fn check_roster_injection(&self, students: &[Uuid]) -> AppResult<()> {
            if let Some(poisoned) = *self.fail_roster_for.lock().unwrap() {
                if students.contains(&poisoned) {
                    return Err(AppError::Database("injected roster failure".to_string()));
                }
            }
            Ok(())
        }
    }

    #[async_trait]
    impl AssignmentStore for MemStore {
        async fn create_assignment(&self, new: NewAssignment) -> AppResult<Assignment> {
            self.check_roster_injection(&new.students)?;

            let mut inner = self.inner.lock().unwrap();
            let now = Utc::now();
            let assignment = Assignment {
                id: Uuid::new_v4(),
                tutor_id: new.tutor_id,
                description: new.description,
                published_at: new.published_at,
                deadline: new.deadline,
                created_at: now,
                updated_at: now,
            };

            for (i, student_id) in new.students.iter().enumerate() {
                if new.students[..i].contains(student_id) {
                    return Err(AppError::Conflict("Duplicate student in roster".to_string()));
                }
            }

            for student_id in &new.students {
                inner.roster.push((assignment.id, *student_id));
            }
            inner.assignments.insert(assignment.id, assignment.clone());

            Ok(assignment)
        }

        async fn replace_assignment(&self, id: Uuid, new: NewAssignment) -> AppResult<Assignment> {
            self.check_roster_injection(&new.students)?;

            let mut inner = self.inner.lock().unwrap();
            if !inner.assignments.contains_key(&id) {
                return Err(AppError::NotFound("Assignment not found".to_string()));
            }

            inner.roster.retain(|(aid, _)| *aid != id);
            for student_id in &new.students {
                inner.roster.push((id, *student_id));
            }

            let a = inner.assignments.get_mut(&id).unwrap();
            a.description = new.description;
            a.published_at = new.published_at;
            a.deadline = new.deadline;
            a.updated_at = Utc::now();

            Ok(a.clone())
        }

        async fn delete_assignment(&self, id: Uuid) -> AppResult<()> {
            if self.fail_next_delete.swap(false, Ordering::SeqCst) {
                return Err(AppError::Database("injected delete failure".to_string()));
            }

            let mut inner = self.inner.lock().unwrap();
            inner.submissions.retain(|(aid, _), _| *aid != id);
            inner.roster.retain(|(aid, _)| *aid != id);
            inner.assignments.remove(&id);

            Ok(())
        }

        async fn find_assignment(&self, id: Uuid) -> AppResult<Option<Assignment>> {
            Ok(self.inner.lock().unwrap().assignments.get(&id).cloned())
        }

        async fn is_on_roster(&self, assignment_id: Uuid, student_id: Uuid) -> AppResult<bool> {
            Ok(self
                .inner
                .lock()
                .unwrap()
                .roster
                .contains(&(assignment_id, student_id)))
        }

        async fn find_submission(
            &self,
            assignment_id: Uuid,
            student_id: Uuid,
        ) -> AppResult<Option<Submission>> {
            Ok(self
                .inner
                .lock()
                .unwrap()
                .submissions
                .get(&(assignment_id, student_id))
                .cloned())
        }

        async fn insert_submission(
            &self,
            assignment_id: Uuid,
            student_id: Uuid,
            remark: &str,
        ) -> AppResult<Submission> {
            let mut inner = self.inner.lock().unwrap();
            let key = (assignment_id, student_id);

            // The hard uniqueness constraint; checked and inserted under one
            // lock so concurrent duplicates cannot both succeed.
            if inner.submissions.contains_key(&key) {
                return Err(AppError::Conflict("Already submitted".to_string()));
            }

            let submission = Submission {
                id: Uuid::new_v4(),
                assignment_id,
                student_id,
                remark: remark.to_string(),
                created_at: Utc::now(),
            };
            inner.submissions.insert(key, submission.clone());

            Ok(submission)
        }

        async fn submissions_with_students(
            &self,
            assignment_id: Uuid,
        ) -> AppResult<Vec<SubmissionWithStudent>> {
            let inner = self.inner.lock().unwrap();
            Ok(inner
                .submissions
                .values()
                .filter(|s| s.assignment_id == assignment_id)
                .map(|s| SubmissionWithStudent {
                    id: s.id,
                    student_id: s.student_id,
                    username: inner.usernames.get(&s.student_id).cloned().unwrap_or_default(),
                    remark: s.remark.clone(),
                    created_at: s.created_at,
                })
                .collect())
        }

        async fn assignments_by_tutor(&self, tutor_id: Uuid) -> AppResult<Vec<Assignment>> {
            Ok(self
                .inner
                .lock()
                .unwrap()
                .assignments
                .values()
                .filter(|a| a.tutor_id == tutor_id)
                .cloned()
                .collect())
        }

        async fn assignments_for_student(&self, student_id: Uuid) -> AppResult<Vec<StudentFeedRow>> {
            let inner = self.inner.lock().unwrap();
            Ok(inner
                .roster
                .iter()
                .filter(|(_, sid)| *sid == student_id)
                .filter_map(|(aid, _)| inner.assignments.get(aid))
                .map(|a| StudentFeedRow {
                    assignment: a.clone(),
                    submission_id: inner
                        .submissions
                        .get(&(a.id, student_id))
                        .map(|s| s.id),
                })
                .collect())
        }
    }
}
