//! Student repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the "fetch first record by id into a slot" capability.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - `first` only writes into `dest` after a row was read and parsed.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::migrations::ensure_latest_schema;
use crate::db::DbError;
use crate::model::student::{Student, StudentId};
use log::{debug, error, warn};
use rusqlite::types::Value;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const STUDENT_FIRST_SQL: &str = "SELECT id, name
FROM students
WHERE id = ?1
ORDER BY id ASC
LIMIT 1;";

pub type RepoResult<T> = Result<T, RepoError>;

/// Error reported by a student repository backend.
#[derive(Debug)]
pub enum RepoError {
    /// No record matches the requested id.
    NotFound(StudentId),
    /// Storage or transport failure.
    Db(DbError),
    /// Backend rejected the input or read malformed persisted data.
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "student not found: {id}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "{message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Data-access capability used by the name lookup.
pub trait StudentRepository {
    /// Loads the first student whose id equals `id` into `dest`.
    ///
    /// # Errors
    /// - `RepoError::NotFound` when no student matches.
    /// - Any other backend failure as classified by the implementation.
    fn first(&self, dest: &mut Student, id: StudentId) -> RepoResult<()>;
}

impl<R: StudentRepository + ?Sized> StudentRepository for &R {
    fn first(&self, dest: &mut Student, id: StudentId) -> RepoResult<()> {
        (**self).first(dest, id)
    }
}

impl<R: StudentRepository + ?Sized> StudentRepository for Box<R> {
    fn first(&self, dest: &mut Student, id: StudentId) -> RepoResult<()> {
        (**self).first(dest, id)
    }
}

/// SQLite-backed student repository.
pub struct SqliteStudentRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteStudentRepository<'conn> {
    /// Wraps a connection after checking it is migrated to the latest schema.
    ///
    /// # Errors
    /// - `RepoError::Db(DbError::SchemaNotReady)` for an unmigrated connection.
    /// - `RepoError::Db(DbError::UnsupportedSchemaVersion)` for a newer schema.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        ensure_latest_schema(conn)?;
        Ok(Self { conn })
    }

    /// Inserts one student and returns its id.
    ///
    /// Fails with `RepoError::Db` when the id is already taken.
    pub fn insert_student(&self, student: &Student) -> RepoResult<StudentId> {
        if let Err(err) = self.conn.execute(
            "INSERT INTO students (id, name) VALUES (?1, ?2);",
            params![student.id, student.name.as_str()],
        ) {
            error!(
                "event=student_insert module=repo status=error id={} error={}",
                student.id, err
            );
            return Err(err.into());
        }

        debug!(
            "event=student_insert module=repo status=ok id={}",
            student.id
        );
        Ok(student.id)
    }

    /// Returns the number of stored students.
    pub fn count_students(&self) -> RepoResult<u64> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM students;", [], |row| row.get(0))?;
        u64::try_from(count)
            .map_err(|_| RepoError::InvalidData(format!("invalid student count `{count}`")))
    }
}

impl StudentRepository for SqliteStudentRepository<'_> {
    fn first(&self, dest: &mut Student, id: StudentId) -> RepoResult<()> {
        match query_first(self.conn, id) {
            Ok(student) => {
                debug!("event=student_first module=repo status=ok id={id}");
                *dest = student;
                Ok(())
            }
            Err(RepoError::NotFound(missing)) => {
                debug!("event=student_first module=repo status=not_found id={missing}");
                Err(RepoError::NotFound(missing))
            }
            Err(err) => {
                warn!("event=student_first module=repo status=error id={id} error={err}");
                Err(err)
            }
        }
    }
}

fn query_first(conn: &Connection, id: StudentId) -> RepoResult<Student> {
    let mut stmt = conn.prepare_cached(STUDENT_FIRST_SQL)?;
    let mut rows = stmt.query(params![id])?;
    match rows.next()? {
        Some(row) => parse_student_row(row),
        None => Err(RepoError::NotFound(id)),
    }
}

fn parse_student_row(row: &Row<'_>) -> RepoResult<Student> {
    let id: StudentId = row.get("id")?;
    let name = match row.get::<_, Value>("name")? {
        Value::Text(name) => name,
        Value::Null => {
            return Err(RepoError::InvalidData(format!(
                "invalid null name in students.name for id {id}"
            )));
        }
        other => {
            return Err(RepoError::InvalidData(format!(
                "invalid name type `{:?}` in students.name for id {id}",
                other.data_type()
            )));
        }
    };

    Ok(Student { id, name })
}
