use std::collections::HashMap;

use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use wgedu_core::AppError;

use crate::modules::subjects::service::SubjectService;
use crate::modules::teachers::model::{AssignedSubjectRow, Subject, Teacher, TeacherRow};

pub struct TeacherService;

impl TeacherService {
    /// All teachers ordered by username, each with their subjects.
    ///
    /// Assignments for every teacher are fetched in one query and grouped in
    /// memory.
    #[instrument(skip(db))]
    pub async fn list_teachers(db: &PgPool) -> Result<Vec<Teacher>, AppError> {
        let rows = sqlx::query_as::<_, TeacherRow>(
            r#"
            SELECT id, username
            FROM users
            WHERE role = 'teacher'
            ORDER BY username
            "#,
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch teachers")
        .map_err(AppError::database)?;

        let ids: Vec<i32> = rows.iter().map(|t| t.id).collect();
        let mut subjects = Self::subjects_for_teachers(db, &ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| Teacher {
                subjects: subjects.remove(&row.id).unwrap_or_default(),
                id: row.id,
                username: row.username,
            })
            .collect())
    }

    #[instrument(skip(db))]
    pub async fn find_teacher(db: &PgPool, id: i32) -> Result<Teacher, AppError> {
        let row = sqlx::query_as::<_, TeacherRow>(
            r#"
            SELECT id, username
            FROM users
            WHERE id = $1 AND role = 'teacher'
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch teacher by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))?;

        let mut subjects = Self::subjects_for_teachers(db, &[row.id]).await?;

        Ok(Teacher {
            subjects: subjects.remove(&row.id).unwrap_or_default(),
            id: row.id,
            username: row.username,
        })
    }

    /// Links a subject to a teacher. Assigning an existing pair is a no-op.
    #[instrument(skip(db))]
    pub async fn assign_subject(
        db: &PgPool,
        teacher_id: i32,
        subject_id: i32,
    ) -> Result<(), AppError> {
        Self::ensure_teacher_exists(db, teacher_id).await?;
        SubjectService::find_by_id(db, subject_id).await?;

        let result = sqlx::query(
            r#"
            INSERT INTO teacher_subjects (teacher_id, subject_id)
            VALUES ($1, $2)
            ON CONFLICT (teacher_id, subject_id) DO NOTHING
            "#,
        )
        .bind(teacher_id)
        .bind(subject_id)
        .execute(db)
        .await
        .context("Failed to assign subject to teacher")
        .map_err(AppError::database)?;

        if result.rows_affected() == 0 {
            tracing::debug!("Subject already assigned");
        }

        Ok(())
    }

    /// Removes a link if it exists. Removing a missing link succeeds.
    #[instrument(skip(db))]
    pub async fn unassign_subject(
        db: &PgPool,
        teacher_id: i32,
        subject_id: i32,
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM teacher_subjects WHERE teacher_id = $1 AND subject_id = $2")
            .bind(teacher_id)
            .bind(subject_id)
            .execute(db)
            .await
            .context("Failed to remove subject from teacher")
            .map_err(AppError::database)?;

        Ok(())
    }

    async fn ensure_teacher_exists(db: &PgPool, teacher_id: i32) -> Result<(), AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM users WHERE id = $1 AND role = 'teacher')",
        )
        .bind(teacher_id)
        .fetch_one(db)
        .await
        .context("Failed to check teacher")
        .map_err(AppError::database)?;

        if !exists {
            return Err(AppError::not_found(anyhow::anyhow!("Teacher not found")));
        }

        Ok(())
    }

    async fn subjects_for_teachers(
        db: &PgPool,
        teacher_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<Subject>>, AppError> {
        if teacher_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, AssignedSubjectRow>(
            r#"
            SELECT ts.teacher_id, s.id, s.grade, s.name, s.description, s.created_at
            FROM teacher_subjects ts
            JOIN subjects s ON s.id = ts.subject_id
            WHERE ts.teacher_id = ANY($1)
            ORDER BY s.grade, s.name
            "#,
        )
        .bind(teacher_ids)
        .fetch_all(db)
        .await
        .context("Failed to fetch teacher subjects")
        .map_err(AppError::database)?;

        Ok(group_by_teacher(rows))
    }
}

/// Buckets assignment rows by teacher, keeping query order within each.
pub fn group_by_teacher(rows: Vec<AssignedSubjectRow>) -> HashMap<i32, Vec<Subject>> {
    let mut grouped: HashMap<i32, Vec<Subject>> = HashMap::new();
    for row in rows {
        grouped.entry(row.teacher_id).or_default().push(row.subject);
    }
    grouped
}
