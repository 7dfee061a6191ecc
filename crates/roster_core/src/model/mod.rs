//! Domain model for roster records.
//!
//! # Invariants
//! - Every student is addressed by a caller-supplied integer `StudentId`.
//! - Core code reads records; it never rewrites them on the lookup path.

pub mod student;
