//! Demo data: the subject catalog, test accounts and a few teacher
//! assignments.
//!
//! Every step is idempotent. Subjects and accounts are inserted with
//! `ON CONFLICT DO NOTHING`; demo assignments are only made for teacher
//! accounts created in the same run, so assignments an admin has since
//! removed are not brought back on restart.

use std::collections::HashSet;

use anyhow::Context;
use sqlx::PgPool;
use tracing::{info, instrument};

use wgedu_auth::Role;
use wgedu_core::{AppError, hash_password};
use wgedu_models::Grade;

/// Subjects offered in every grade, with their descriptions.
pub const SUBJECTS: [(&str, &str); 6] = [
    ("Physics", "Mechanics, waves, electricity and magnetism"),
    ("Chemistry", "Atomic structure, bonding and reactions"),
    ("Biology", "Cells, genetics, ecology and human physiology"),
    ("Mathematics", "Algebra, functions, calculus and statistics"),
    ("English", "Language and literature"),
    ("Economics", "Micro and macroeconomics, global trade"),
];

/// `(username, password, role)` for every demo account.
pub const DEMO_ACCOUNTS: [(&str, &str, Role); 9] = [
    ("test_admin", "test_admin", Role::Admin),
    ("test_teacher", "test_teacher", Role::Teacher),
    ("test_student", "test_student", Role::Student),
    ("wg", "wg_123", Role::Teacher),
    ("liz", "liz_123", Role::Teacher),
    ("eddie", "eddie_123", Role::Teacher),
    ("yu", "yu_123", Role::Teacher),
    ("tan", "tan_123", Role::Teacher),
    ("li", "li_123", Role::Teacher),
];

/// Each teacher takes the subject in every grade.
pub const DEMO_ASSIGNMENTS: [(&str, &str); 6] = [
    ("wg", "Physics"),
    ("liz", "English"),
    ("eddie", "Mathematics"),
    ("yu", "Chemistry"),
    ("tan", "Biology"),
    ("li", "Economics"),
];

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub subjects: u64,
    pub users: u64,
    pub assignments: u64,
}

pub fn subject_name(grade: Grade, subject: &str) -> String {
    format!("{} {}", grade, subject)
}

#[instrument(skip(db))]
pub async fn ensure_seed_data(db: &PgPool) -> Result<SeedSummary, AppError> {
    let subjects = seed_subjects(db).await?;
    let created_users = seed_users(db).await?;
    let assignments = seed_assignments(db, &created_users).await?;

    let summary = SeedSummary {
        subjects,
        users: created_users.len() as u64,
        assignments,
    };
    info!(?summary, "Seed data ensured");
    Ok(summary)
}

async fn seed_subjects(db: &PgPool) -> Result<u64, AppError> {
    let mut created = 0;
    for grade in Grade::ALL {
        for (subject, description) in SUBJECTS {
            let result = sqlx::query(
                r#"
                INSERT INTO subjects (grade, name, description)
                VALUES ($1, $2, $3)
                ON CONFLICT (grade, name) DO NOTHING
                "#,
            )
            .bind(grade.as_str())
            .bind(subject_name(grade, subject))
            .bind(description)
            .execute(db)
            .await
            .context("Failed to seed subject")
            .map_err(AppError::database)?;
            created += result.rows_affected();
        }
    }
    Ok(created)
}

/// Returns the usernames inserted by this call.
async fn seed_users(db: &PgPool) -> Result<HashSet<String>, AppError> {
    let usernames: Vec<&str> = DEMO_ACCOUNTS.iter().map(|(u, _, _)| *u).collect();
    let existing: HashSet<String> =
        sqlx::query_scalar::<_, String>("SELECT username FROM users WHERE username = ANY($1)")
            .bind(&usernames)
            .fetch_all(db)
            .await
            .context("Failed to check demo accounts")
            .map_err(AppError::database)?
            .into_iter()
            .collect();

    let mut created = HashSet::new();
    for (username, password, role) in DEMO_ACCOUNTS {
        if existing.contains(username) {
            continue;
        }

        let hashed_password = hash_password(password)?;
        let result = sqlx::query(
            r#"
            INSERT INTO users (username, password, role)
            VALUES ($1, $2, $3)
            ON CONFLICT (username) DO NOTHING
            "#,
        )
        .bind(username)
        .bind(&hashed_password)
        .bind(role.as_str())
        .execute(db)
        .await
        .context("Failed to seed demo account")
        .map_err(AppError::database)?;

        if result.rows_affected() > 0 {
            info!(username, role = %role, "Created demo account");
            created.insert(username.to_string());
        }
    }
    Ok(created)
}

async fn seed_assignments(db: &PgPool, created_users: &HashSet<String>) -> Result<u64, AppError> {
    let mut created = 0;
    for (username, subject) in DEMO_ASSIGNMENTS {
        if !created_users.contains(username) {
            continue;
        }

        let result = sqlx::query(
            r#"
            INSERT INTO teacher_subjects (teacher_id, subject_id)
            SELECT u.id, s.id
            FROM users u
            CROSS JOIN subjects s
            WHERE u.username = $1
              AND u.role = 'teacher'
              AND s.name = s.grade || ' ' || $2
            ON CONFLICT (teacher_id, subject_id) DO NOTHING
            "#,
        )
        .bind(username)
        .bind(subject)
        .execute(db)
        .await
        .context("Failed to seed teacher assignment")
        .map_err(AppError::database)?;
        created += result.rows_affected();
    }
    Ok(created)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_name() {
        assert_eq!(subject_name(Grade::Pib, "Physics"), "PIB Physics");
        assert_eq!(subject_name(Grade::Ib2, "English"), "IB2 English");
    }

    #[test]
    fn test_demo_assignments_reference_demo_teachers() {
        for (teacher, subject) in DEMO_ASSIGNMENTS {
            assert!(
                DEMO_ACCOUNTS
                    .iter()
                    .any(|(u, _, role)| *u == teacher && *role == Role::Teacher)
            );
            assert!(SUBJECTS.iter().any(|(s, _)| *s == subject));
        }
    }
}
