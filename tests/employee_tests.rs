use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_employee, fs, init_db, setup_test_db};

#[test]
fn test_employee_add_and_list() {
    let db_path = setup_test_db("employee_add_list");
    init_db(&db_path);

    add_employee(&db_path, "Alice", "12", "100");
    add_employee(&db_path, "Bob", "34", "80.5");

    fs().args(["--db", &db_path, "employee", "list"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("Bob"))
        .stdout(contains("80.50"));
}

#[test]
fn test_employee_duplicate_token_rejected() {
    let db_path = setup_test_db("employee_dup");
    init_db(&db_path);
    add_employee(&db_path, "Alice", "12", "100");

    fs().args([
        "--db", &db_path, "employee", "add", "--name", "Carol", "--token", "12", "--rate", "90",
    ])
    .assert()
    .failure()
    .stderr(contains("Token number 12 already exists"));

    fs().args(["--db", &db_path, "employee", "list"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("Carol").not());
}

#[test]
fn test_employee_negative_rate_rejected() {
    let db_path = setup_test_db("employee_negative_rate");
    init_db(&db_path);

    fs().args([
        "--db", &db_path, "employee", "add", "--name", "Eve", "--token", "9", "--rate=-5",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid hourly rate"));
}

#[test]
fn test_employee_edit_in_place() {
    let db_path = setup_test_db("employee_edit");
    init_db(&db_path);
    add_employee(&db_path, "Alice", "12", "100");
    add_employee(&db_path, "Bob", "34", "80");

    fs().args(["--db", &db_path, "employee", "edit", "1", "--rate", "120"])
        .assert()
        .success()
        .stdout(contains("Employee #1 updated"));

    // Taking another employee's token is refused and nothing changes.
    fs().args(["--db", &db_path, "employee", "edit", "1", "--token", "34"])
        .assert()
        .failure()
        .stderr(contains("Token number 34 already exists"));

    fs().args(["--db", &db_path, "employee", "list"])
        .assert()
        .success()
        .stdout(contains("120.00"));
}

#[test]
fn test_employee_edit_invalid_position() {
    let db_path = setup_test_db("employee_edit_invalid");
    init_db(&db_path);
    add_employee(&db_path, "Alice", "12", "100");

    fs().args(["--db", &db_path, "employee", "edit", "5", "--name", "X"])
        .assert()
        .failure()
        .stderr(contains("No record at position #5"));
}

#[test]
fn test_employee_delete_with_confirmation() {
    let db_path = setup_test_db("employee_del");
    init_db(&db_path);
    add_employee(&db_path, "Alice", "12", "100");
    add_employee(&db_path, "Bob", "34", "80");

    fs().args(["--db", &db_path, "employee", "del", "2"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    fs().args(["--db", &db_path, "employee", "del", "2"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Employee Bob (34) deleted"));

    fs().args(["--db", &db_path, "employee", "list"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("Bob").not());
}

#[test]
fn test_deleted_employee_entries_hidden_from_list() {
    let db_path = setup_test_db("employee_del_orphans");
    common::init_db_with_data(&db_path);

    fs().args(["--db", &db_path, "employee", "del", "2", "--yes"])
        .assert()
        .success();

    fs().args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Alice (12)"))
        .stdout(contains("Bob").not());
}
