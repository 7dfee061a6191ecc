//! Core use-case services.
//!
//! # Responsibility
//! - Expose lookup entry points over an injected repository.
//! - Keep CLI callers decoupled from storage details.

pub mod student_service;
