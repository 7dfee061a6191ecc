use roster_core::db::{open_db, open_db_in_memory, DbError};
use roster_core::{
    student_name_by_id, RepoError, SqliteStudentRepository, Student, StudentRepository,
    StudentService,
};
use rusqlite::Connection;

#[test]
fn first_fills_slot_for_existing_student() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();
    repo.insert_student(&Student::new(101, "Iman")).unwrap();

    let mut slot = Student::default();
    repo.first(&mut slot, 101).unwrap();

    assert_eq!(slot, Student::new(101, "Iman"));
}

#[test]
fn lookup_returns_name_from_sqlite() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();
    repo.insert_student(&Student::new(101, "Iman")).unwrap();
    repo.insert_student(&Student::new(105, "Sara")).unwrap();

    assert_eq!(student_name_by_id(&repo, 101).unwrap(), "Iman");
    assert_eq!(student_name_by_id(&repo, 105).unwrap(), "Sara");
}

#[test]
fn missing_student_returns_not_found_and_leaves_slot_untouched() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();

    let mut slot = Student::new(9, "sentinel");
    let err = repo.first(&mut slot, 102).unwrap_err();

    assert!(matches!(err, RepoError::NotFound(102)));
    assert_eq!(slot, Student::new(9, "sentinel"));
}

#[test]
fn negative_id_is_queried_not_rejected() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();

    let err = student_name_by_id(&repo, -1).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(-1)));

    repo.insert_student(&Student::new(-1, "negative")).unwrap();
    assert_eq!(student_name_by_id(&repo, -1).unwrap(), "negative");
}

#[test]
fn empty_name_roundtrips() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();
    repo.insert_student(&Student::new(7, "")).unwrap();

    assert_eq!(student_name_by_id(&repo, 7).unwrap(), "");
}

#[test]
fn non_text_name_is_reported_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("INSERT INTO students (id, name) VALUES (8, x'00ff');")
        .unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();

    let err = student_name_by_id(&repo, 8).unwrap_err();

    assert!(matches!(&err, RepoError::InvalidData(message) if message.contains("students.name")));
}

#[test]
fn duplicate_insert_returns_db_error() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();
    repo.insert_student(&Student::new(1, "first")).unwrap();

    let err = repo.insert_student(&Student::new(1, "second")).unwrap_err();

    assert!(matches!(err, RepoError::Db(DbError::Sqlite(_))));
    assert_eq!(student_name_by_id(&repo, 1).unwrap(), "first");
    assert_eq!(repo.count_students().unwrap(), 1);
}

#[test]
fn repeated_lookups_are_identical() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();
    repo.insert_student(&Student::new(101, "Iman")).unwrap();
    let service = StudentService::new(repo);

    let first = service.get_student_name_by_id(101).unwrap();
    let second = service.get_student_name_by_id(101).unwrap();

    assert_eq!(first, second);
    assert_eq!(service.repo().count_students().unwrap(), 1);
}

#[test]
fn students_persist_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.db");

    {
        let conn = open_db(&path).unwrap();
        let repo = SqliteStudentRepository::try_new(&conn).unwrap();
        repo.insert_student(&Student::new(101, "Iman")).unwrap();
    }

    let conn = open_db(&path).unwrap();
    let repo = SqliteStudentRepository::try_new(&conn).unwrap();
    assert_eq!(student_name_by_id(&repo, 101).unwrap(), "Iman");
}

#[test]
fn try_new_rejects_unmigrated_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let err = SqliteStudentRepository::try_new(&conn).err().unwrap();

    assert!(matches!(
        err,
        RepoError::Db(DbError::SchemaNotReady { db_version: 0, .. })
    ));
}

#[test]
fn try_new_rejects_newer_schema() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();

    let err = SqliteStudentRepository::try_new(&conn).err().unwrap();

    assert!(matches!(
        err,
        RepoError::Db(DbError::UnsupportedSchemaVersion {
            db_version: 999,
            ..
        })
    ));
}
