//! Student record model.
//!
//! # Responsibility
//! - Define the record shape filled by repository backends.
//!
//! # Invariants
//! - `id` is not range-checked here; negative values are legal inputs and
//!   validation is left to the backend.
//! - `name` may be empty.

use serde::{Deserialize, Serialize};

/// Identifier used to address one student record.
pub type StudentId = i64;

/// A single student record.
///
/// `Student::default()` is the empty destination slot passed to
/// [`StudentRepository::first`](crate::repo::student_repo::StudentRepository::first).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
}

impl Student {
    pub fn new(id: StudentId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
