//! Student name lookup.
//!
//! # Responsibility
//! - Translate a student id into that student's name.
//! - Delegate the fetch to an injected `StudentRepository`.
//!
//! # Invariants
//! - Exactly one repository call per lookup.
//! - Repository errors are returned unchanged: not wrapped, not retried.
//! - Ids are forwarded as given; range checks belong to the backend.

use crate::model::student::{Student, StudentId};
use crate::repo::student_repo::{RepoResult, StudentRepository};

/// Returns the name of the student with `id`.
///
/// The backend fills a fresh slot; only its `name` is read back.
pub fn student_name_by_id<R>(repo: &R, id: StudentId) -> RepoResult<String>
where
    R: StudentRepository + ?Sized,
{
    let mut student = Student::default();
    repo.first(&mut student, id)?;
    Ok(student.name)
}

/// Use-case service wrapper holding one repository backend.
pub struct StudentService<R: StudentRepository> {
    repo: R,
}

impl<R: StudentRepository> StudentService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Looks up a student's name by id.
    ///
    /// Returns repository-level errors unchanged.
    pub fn get_student_name_by_id(&self, id: StudentId) -> RepoResult<String> {
        student_name_by_id(&self.repo, id)
    }

    /// Returns the wrapped repository.
    pub fn repo(&self) -> &R {
        &self.repo
    }
}
