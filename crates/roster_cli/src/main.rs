//! Roster command-line entry point.
//!
//! # Responsibility
//! - Open the configured SQLite database and run student lookups against it.
//! - Map lookup failures to stable exit codes.

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use log::info;
use roster_core::db::open_db;
use roster_core::{
    default_log_level, init_logging, RepoError, SqliteStudentRepository, Student, StudentId,
    StudentService,
};
use std::path::PathBuf;
use std::process::ExitCode;

const EXIT_FAILURE: u8 = 1;
const EXIT_NOT_FOUND: u8 = 2;

/// Look up student names in a roster database.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the SQLite roster database.
    #[arg(long, env = "ROSTER_DB", global = true)]
    db: Option<PathBuf>,

    /// Log level: trace|debug|info|warn|error.
    #[arg(long, env = "ROSTER_LOG_LEVEL", global = true)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. File logging is off when unset.
    #[arg(long, env = "ROSTER_LOG_DIR", global = true)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print the name of the student with the given id.
    Lookup {
        #[arg(allow_negative_numbers = true)]
        id: StudentId,
    },
    /// Store a new student.
    Add {
        #[arg(allow_negative_numbers = true)]
        id: StudentId,
        name: String,
    },
    /// Print core health and version.
    Version,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir).map_err(|err| anyhow!(err))?;
    }

    match cli.command {
        Command::Version => {
            println!("roster_core ping={}", roster_core::ping());
            println!("roster_core version={}", roster_core::core_version());
            Ok(ExitCode::SUCCESS)
        }
        Command::Lookup { id } => {
            let db_path = require_db(cli.db)?;
            let conn = open_db(&db_path)
                .with_context(|| format!("failed to open `{}`", db_path.display()))?;
            let service = StudentService::new(SqliteStudentRepository::try_new(&conn)?);

            match service.get_student_name_by_id(id) {
                Ok(name) => {
                    println!("{name}");
                    Ok(ExitCode::SUCCESS)
                }
                Err(err) => {
                    eprintln!("error: {err}");
                    Ok(ExitCode::from(exit_status_for(&err)))
                }
            }
        }
        Command::Add { id, name } => {
            let db_path = require_db(cli.db)?;
            let conn = open_db(&db_path)
                .with_context(|| format!("failed to open `{}`", db_path.display()))?;
            let repo = SqliteStudentRepository::try_new(&conn)?;
            repo.insert_student(&Student::new(id, name))
                .with_context(|| format!("failed to add student {id}"))?;
            info!("event=cli_add module=cli status=ok id={id}");
            println!("added {id}");
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn require_db(db: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    db.ok_or_else(|| anyhow!("no database configured; pass --db or set ROSTER_DB"))
}

fn exit_status_for(err: &RepoError) -> u8 {
    match err {
        RepoError::NotFound(_) => EXIT_NOT_FOUND,
        RepoError::Db(_) | RepoError::InvalidData(_) => EXIT_FAILURE,
    }
}
