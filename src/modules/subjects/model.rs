//! Subject catalog models.
//!
//! Re-exported from the `wgedu-models` crate.

use std::collections::BTreeMap;

pub use wgedu_models::subjects::{Grade, ParseGradeError, Subject};

/// Subjects keyed by grade, in PIB, IB1, IB2 order.
pub type GroupedSubjects = BTreeMap<Grade, Vec<Subject>>;
