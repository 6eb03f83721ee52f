use anyhow::Context;
use sqlx::PgPool;
use tracing::instrument;

use wgedu_core::AppError;

use crate::modules::subjects::model::{Grade, GroupedSubjects, Subject};

pub struct SubjectService;

impl SubjectService {
    #[instrument(skip(db))]
    pub async fn list_all(db: &PgPool) -> Result<Vec<Subject>, AppError> {
        let subjects = sqlx::query_as::<_, Subject>(
            r#"
            SELECT id, grade, name, description, created_at
            FROM subjects
            ORDER BY grade, name
            "#,
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch subjects")
        .map_err(AppError::database)?;

        Ok(subjects)
    }

    #[instrument(skip(db))]
    pub async fn list_by_grade(db: &PgPool, grade: Grade) -> Result<Vec<Subject>, AppError> {
        let subjects = sqlx::query_as::<_, Subject>(
            r#"
            SELECT id, grade, name, description, created_at
            FROM subjects
            WHERE grade = $1
            ORDER BY name
            "#,
        )
        .bind(grade.as_str())
        .fetch_all(db)
        .await
        .context("Failed to fetch subjects by grade")
        .map_err(AppError::database)?;

        Ok(subjects)
    }

    #[instrument(skip(db))]
    pub async fn find_by_id(db: &PgPool, id: i32) -> Result<Subject, AppError> {
        sqlx::query_as::<_, Subject>(
            r#"
            SELECT id, grade, name, description, created_at
            FROM subjects
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch subject by ID")
        .map_err(AppError::database)?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Subject not found")))
    }

    #[instrument(skip(db))]
    pub async fn list_grouped(db: &PgPool) -> Result<GroupedSubjects, AppError> {
        let subjects = Self::list_all(db).await?;
        Ok(group_by_grade(subjects))
    }
}

/// Buckets subjects by grade, keeping their relative order.
pub fn group_by_grade(subjects: Vec<Subject>) -> GroupedSubjects {
    let mut grouped = GroupedSubjects::new();
    for subject in subjects {
        grouped.entry(subject.grade).or_default().push(subject);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn subject(id: i32, grade: Grade, name: &str) -> Subject {
        Subject {
            id,
            grade,
            name: name.to_string(),
            description: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_group_by_grade() {
        let grouped = group_by_grade(vec![
            subject(1, Grade::Ib1, "IB1 Biology"),
            subject(2, Grade::Pib, "PIB Physics"),
            subject(3, Grade::Ib1, "IB1 Chemistry"),
        ]);

        let keys: Vec<Grade> = grouped.keys().copied().collect();
        assert_eq!(keys, vec![Grade::Pib, Grade::Ib1]);

        let ib1: Vec<&str> = grouped[&Grade::Ib1].iter().map(|s| s.name.as_str()).collect();
        assert_eq!(ib1, vec!["IB1 Biology", "IB1 Chemistry"]);
    }

    #[test]
    fn test_group_by_grade_empty() {
        assert!(group_by_grade(Vec::new()).is_empty());
    }
}
