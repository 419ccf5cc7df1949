//! Postgres implementation of the storage contracts
//!
//! Multi-row mutations run inside a `sqlx::Transaction`. An uncommitted
//! transaction rolls back when dropped, so every early-return and error path
//! leaves prior committed state unchanged without manual rollback calls.

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    db::store::{AssignmentStore, NewAssignment, StudentFeedRow, UserStore},
    error::{AppError, AppResult},
    models::{Assignment, Submission, SubmissionWithStudent, User},
};

/// Storage backed by a Postgres connection pool
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssignmentStore for PgStore {
    async fn create_assignment(&self, new: NewAssignment) -> AppResult<Assignment> {
        let mut tx = self.pool.begin().await?;

        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            INSERT INTO assignments (tutor_id, description, published_at, deadline)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(new.tutor_id)
        .bind(&new.description)
        .bind(new.published_at)
        .bind(new.deadline)
        .fetch_one(&mut *tx)
        .await?;

        for student_id in &new.students {
            sqlx::query(
                r#"INSERT INTO assignment_students (assignment_id, student_id) VALUES ($1, $2)"#,
            )
            .bind(assignment.id)
            .bind(student_id)
            .execute(&mut *tx)
            .await
            .map_err(roster_insert_error)?;
        }

        tx.commit().await?;

        Ok(assignment)
    }

    async fn replace_assignment(&self, id: Uuid, new: NewAssignment) -> AppResult<Assignment> {
        let mut tx = self.pool.begin().await?;

        let assignment = sqlx::query_as::<_, Assignment>(
            r#"
            UPDATE assignments
            SET description = $2, published_at = $3, deadline = $4, updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&new.description)
        .bind(new.published_at)
        .bind(new.deadline)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| AppError::NotFound("Assignment not found".to_string()))?;

        sqlx::query(r#"DELETE FROM assignment_students WHERE assignment_id = $1"#)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        for student_id in &new.students {
            sqlx::query(
                r#"INSERT INTO assignment_students (assignment_id, student_id) VALUES ($1, $2)"#,
            )
            .bind(id)
            .bind(student_id)
            .execute(&mut *tx)
            .await
            .map_err(roster_insert_error)?;
        }

        tx.commit().await?;

        Ok(assignment)
    }

    async fn delete_assignment(&self, id: Uuid) -> AppResult<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(r#"DELETE FROM submissions WHERE assignment_id = $1"#)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(r#"DELETE FROM assignment_students WHERE assignment_id = $1"#)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        sqlx::query(r#"DELETE FROM assignments WHERE id = $1"#)
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(())
    }

    async fn find_assignment(&self, id: Uuid) -> AppResult<Option<Assignment>> {
        let assignment =
            sqlx::query_as::<_, Assignment>(r#"SELECT * FROM assignments WHERE id = $1"#)
                .bind(id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(assignment)
    }

    async fn is_on_roster(&self, assignment_id: Uuid, student_id: Uuid) -> AppResult<bool> {
        let exists: bool = sqlx::query_scalar(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM assignment_students
                WHERE assignment_id = $1 AND student_id = $2
            )
            "#,
        )
        .bind(assignment_id)
        .bind(student_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn find_submission(
        &self,
        assignment_id: Uuid,
        student_id: Uuid,
    ) -> AppResult<Option<Submission>> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"SELECT * FROM submissions WHERE assignment_id = $1 AND student_id = $2"#,
        )
        .bind(assignment_id)
        .bind(student_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(submission)
    }

    async fn insert_submission(
        &self,
        assignment_id: Uuid,
        student_id: Uuid,
        remark: &str,
    ) -> AppResult<Submission> {
        let submission = sqlx::query_as::<_, Submission>(
            r#"
            INSERT INTO submissions (assignment_id, student_id, remark)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(assignment_id)
        .bind(student_id)
        .bind(remark)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match AppError::from(err) {
            // The unique constraint on (assignment_id, student_id) is the
            // source of truth; a racing duplicate surfaces the same way the
            // service-level check does.
            AppError::Conflict(_) => AppError::Conflict("Already submitted".to_string()),
            other => other,
        })?;

        Ok(submission)
    }

    async fn submissions_with_students(
        &self,
        assignment_id: Uuid,
    ) -> AppResult<Vec<SubmissionWithStudent>> {
        let submissions = sqlx::query_as::<_, SubmissionWithStudent>(
            r#"
            SELECT s.id, s.student_id, u.username, s.remark, s.created_at
            FROM submissions s
            JOIN users u ON s.student_id = u.id
            WHERE s.assignment_id = $1
            "#,
        )
        .bind(assignment_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(submissions)
    }

    async fn assignments_by_tutor(&self, tutor_id: Uuid) -> AppResult<Vec<Assignment>> {
        let assignments =
            sqlx::query_as::<_, Assignment>(r#"SELECT * FROM assignments WHERE tutor_id = $1"#)
                .bind(tutor_id)
                .fetch_all(&self.pool)
                .await?;

        Ok(assignments)
    }

    async fn assignments_for_student(&self, student_id: Uuid) -> AppResult<Vec<StudentFeedRow>> {
        #[derive(sqlx::FromRow)]
        struct Row {
            #[sqlx(flatten)]
            assignment: Assignment,
            submission_id: Option<Uuid>,
        }

        let rows = sqlx::query_as::<_, Row>(
            r#"
            SELECT a.id, a.tutor_id, a.description, a.published_at, a.deadline,
                   a.created_at, a.updated_at, s.id AS submission_id
            FROM assignments a
            JOIN assignment_students ast ON ast.assignment_id = a.id
            LEFT JOIN submissions s ON s.assignment_id = a.id AND s.student_id = $1
            WHERE ast.student_id = $1
            "#,
        )
        .bind(student_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|r| StudentFeedRow {
                assignment: r.assignment,
                submission_id: r.submission_id,
            })
            .collect())
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(
        &self,
        username: &str,
        password_hash: &str,
        role: &str,
    ) -> AppResult<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash, role)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .bind(role)
        .fetch_one(&self.pool)
        .await
        .map_err(|err| match AppError::from(err) {
            AppError::Conflict(_) => AppError::AlreadyExists("Username already taken".to_string()),
            other => other,
        })?;

        Ok(user)
    }

    async fn find_user_by_username(&self, username: &str) -> AppResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(r#"SELECT * FROM users WHERE username = $1"#)
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }
}

/// Classify a roster insert failure: a duplicate (assignment_id, student_id)
/// pair is a caller error, not an internal one.
fn roster_insert_error(err: sqlx::Error) -> AppError {
    match AppError::from(err) {
        AppError::Conflict(_) => AppError::Conflict("Duplicate student in roster".to_string()),
        other => other,
    }
}
