//! Student persistence.
//!
//! A student spans two tables: the identity record in `users` and the
//! profile in `students`. Every mutation here runs in one transaction, so
//! either both rows change or neither does. The not-found path rolls back
//! explicitly; any other error drops the transaction, which rolls it back.

use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use wgedu_core::{AppError, hash_password};

use crate::modules::students::model::{CreateStudentDto, Student, UpdateStudentDto};

const STUDENT_COLUMNS: &str = r#"
    s.id, s.user_id, s.first_name, s.last_name, s.email, s.grade,
    s.created_at, s.updated_at, u.username
"#;

pub struct StudentService;

impl StudentService {
    /// All students ordered by last name, then first name.
    #[instrument(skip(db))]
    pub async fn list_students(db: &PgPool) -> Result<Vec<Student>, AppError> {
        let query = format!(
            "SELECT {STUDENT_COLUMNS} FROM students s JOIN users u ON u.id = s.user_id \
             ORDER BY s.last_name, s.first_name"
        );

        let students = sqlx::query_as::<_, Student>(&query)
            .fetch_all(db)
            .await
            .context("Failed to fetch students")
            .map_err(AppError::database)?;

        Ok(students)
    }

    #[instrument(skip(db))]
    pub async fn get_student(db: &PgPool, id: i32) -> Result<Student, AppError> {
        let query = format!(
            "SELECT {STUDENT_COLUMNS} FROM students s JOIN users u ON u.id = s.user_id \
             WHERE s.id = $1"
        );

        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(db)
            .await
            .context("Failed to fetch student by ID")
            .map_err(AppError::database)?
            .ok_or_else(student_not_found)
    }

    /// Creates the identity record and the profile together.
    #[instrument(skip(db, dto), fields(username = %dto.username))]
    pub async fn create_student(db: &PgPool, dto: CreateStudentDto) -> Result<Student, AppError> {
        let hashed_password = hash_password(&dto.password)?;

        let mut tx = db
            .begin()
            .await
            .context("Failed to begin transaction")
            .map_err(AppError::database)?;

        let user_id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO users (username, password, role)
            VALUES ($1, $2, 'student')
            RETURNING id
            "#,
        )
        .bind(&dto.username)
        .bind(&hashed_password)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_write_error)?;

        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (user_id, first_name, last_name, email, grade)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, first_name, last_name, email, grade, created_at, updated_at,
                      (SELECT username FROM users WHERE id = $1) AS username
            "#,
        )
        .bind(user_id)
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(&dto.grade)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_write_error)?;

        tx.commit()
            .await
            .context("Failed to commit transaction")
            .map_err(AppError::database)?;

        tracing::info!(student_id = student.id, user_id, "Student created");
        Ok(student)
    }

    /// Overwrites the profile and, if given, the password.
    #[instrument(skip(db, dto))]
    pub async fn update_student(
        db: &PgPool,
        id: i32,
        dto: UpdateStudentDto,
    ) -> Result<Student, AppError> {
        let hashed_password = dto.new_password().map(hash_password).transpose()?;

        let mut tx = db
            .begin()
            .await
            .context("Failed to begin transaction")
            .map_err(AppError::database)?;

        let Some(user_id) = owning_user_id(&mut tx, id).await? else {
            tx.rollback()
                .await
                .context("Failed to rollback transaction")
                .map_err(AppError::database)?;
            return Err(student_not_found());
        };

        if let Some(hashed_password) = hashed_password {
            sqlx::query("UPDATE users SET password = $1 WHERE id = $2")
                .bind(&hashed_password)
                .bind(user_id)
                .execute(&mut *tx)
                .await
                .context("Failed to update student password")
                .map_err(AppError::database)?;
        }

        let student = sqlx::query_as::<_, Student>(
            r#"
            UPDATE students
            SET first_name = $1, last_name = $2, email = $3, grade = $4, updated_at = NOW()
            WHERE id = $5
            RETURNING id, user_id, first_name, last_name, email, grade, created_at, updated_at,
                      (SELECT username FROM users WHERE id = students.user_id) AS username
            "#,
        )
        .bind(&dto.first_name)
        .bind(&dto.last_name)
        .bind(&dto.email)
        .bind(&dto.grade)
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_write_error)?;

        tx.commit()
            .await
            .context("Failed to commit transaction")
            .map_err(AppError::database)?;

        Ok(student)
    }

    /// Removes the profile and its identity record.
    #[instrument(skip(db))]
    pub async fn delete_student(db: &PgPool, id: i32) -> Result<(), AppError> {
        let mut tx = db
            .begin()
            .await
            .context("Failed to begin transaction")
            .map_err(AppError::database)?;

        let Some(user_id) = owning_user_id(&mut tx, id).await? else {
            tx.rollback()
                .await
                .context("Failed to rollback transaction")
                .map_err(AppError::database)?;
            return Err(student_not_found());
        };

        sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .context("Failed to delete student profile")
            .map_err(AppError::database)?;

        sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(user_id)
            .execute(&mut *tx)
            .await
            .context("Failed to delete student user")
            .map_err(AppError::database)?;

        tx.commit()
            .await
            .context("Failed to commit transaction")
            .map_err(AppError::database)?;

        tracing::info!(student_id = id, user_id, "Student deleted");
        Ok(())
    }
}

/// Locks the profile row so a concurrent delete cannot slip in before the
/// write that follows.
async fn owning_user_id(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    student_id: i32,
) -> Result<Option<i32>, AppError> {
    sqlx::query_scalar::<_, i32>("SELECT user_id FROM students WHERE id = $1 FOR UPDATE")
        .bind(student_id)
        .fetch_optional(&mut **tx)
        .await
        .context("Failed to resolve student user")
        .map_err(AppError::database)
}

fn student_not_found() -> AppError {
    AppError::not_found(anyhow::anyhow!("Student not found"))
}

/// Maps unique violations on `users.username` and `students.email` to 409.
fn map_write_error(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.is_unique_violation()
    {
        return AppError::conflict(anyhow::anyhow!(conflict_message(db_err.constraint())));
    }
    AppError::database(anyhow::Error::from(e).context("Failed to write student"))
}

fn conflict_message(constraint: Option<&str>) -> &'static str {
    match constraint {
        Some("users_username_key") => "Username already exists",
        Some("students_email_key") => "Email already exists",
        _ => "Student already exists",
    }
}
