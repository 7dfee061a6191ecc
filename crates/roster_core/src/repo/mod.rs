//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the single data-access capability the lookup path depends on.
//! - Isolate SQLite query details from service callers.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`NotFound`) in addition to DB
//!   transport errors.

pub mod student_repo;
