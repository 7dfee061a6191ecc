use roster_core::Student;
use serde_json::json;

#[test]
fn student_serializes_with_id_and_name_fields() {
    let student = Student::new(101, "Iman");

    let value = serde_json::to_value(&student).unwrap();

    assert_eq!(value, json!({ "id": 101, "name": "Iman" }));
}

#[test]
fn student_deserializes_negative_id_and_empty_name() {
    let student: Student = serde_json::from_value(json!({ "id": -1, "name": "" })).unwrap();

    assert_eq!(student, Student::new(-1, ""));
}
