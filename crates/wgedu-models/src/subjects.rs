//! Subject catalog models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use utoipa::ToSchema;

/// Programme year a subject belongs to. Ordered PIB < IB1 < IB2.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
pub enum Grade {
    #[serde(rename = "PIB")]
    Pib,
    #[serde(rename = "IB1")]
    Ib1,
    #[serde(rename = "IB2")]
    Ib2,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid grade. Must be PIB, IB1, or IB2")]
pub struct ParseGradeError;

impl Grade {
    pub const ALL: [Grade; 3] = [Grade::Pib, Grade::Ib1, Grade::Ib2];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Pib => "PIB",
            Grade::Ib1 => "IB1",
            Grade::Ib2 => "IB2",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Grade {
    type Err = ParseGradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PIB" => Ok(Grade::Pib),
            "IB1" => Ok(Grade::Ib1),
            "IB2" => Ok(Grade::Ib2),
            _ => Err(ParseGradeError),
        }
    }
}

impl TryFrom<String> for Grade {
    type Error = ParseGradeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Subject {
    pub id: i32,
    #[sqlx(try_from = "String")]
    pub grade: Grade,
    #[schema(example = "PIB Physics")]
    pub name: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
