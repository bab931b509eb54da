use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{add_employee, fs, init_db, init_db_with_data, setup_test_db};

#[test]
fn test_entry_add_computes_sections_and_amount() {
    let db_path = setup_test_db("entry_add_sections");
    init_db(&db_path);
    add_employee(&db_path, "Alice", "12", "100");

    fs().args([
        "--db",
        &db_path,
        "entry",
        "add",
        "--tokens",
        "12",
        "--date",
        "2024-01-02",
        "--hours",
        "2",
        "--minutes",
        "30",
        "--distance",
        "300",
    ])
    .assert()
    .success()
    .stdout(contains("Entry added"))
    .stdout(contains("250.00"));

    fs().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("02 Jan 2024"))
        .stdout(contains("2h 30m"))
        .stdout(contains("300.00 km"))
        .stdout(contains("50.00 km"))
        .stdout(contains("25.00 km"))
        .stdout(contains("75.00 km"));
}

#[test]
fn test_entry_add_two_tokens() {
    let db_path = setup_test_db("entry_add_two_tokens");
    init_db_with_data(&db_path);

    fs().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Alice"))
        .stdout(contains("Bob"))
        .stdout(contains("200.00"))
        .stdout(contains("Day Off"))
        .stdout(contains("Days Off: 1"));
}

#[test]
fn test_entry_unknown_token_rejected() {
    let db_path = setup_test_db("entry_unknown_token");
    init_db(&db_path);
    add_employee(&db_path, "Alice", "12", "100");

    fs().args([
        "--db", &db_path, "entry", "add", "--tokens", "12,99", "--date", "2024-01-02", "--hours",
        "1",
    ])
    .assert()
    .failure()
    .stderr(contains("Token number 99 does not match any employee"));

    fs().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("No entries recorded yet"));
}

#[test]
fn test_entry_token_count_and_repeat_rejected() {
    let db_path = setup_test_db("entry_token_count");
    init_db(&db_path);
    add_employee(&db_path, "Alice", "12", "100");

    fs().args(["--db", &db_path, "entry", "add", "--tokens", "1,2,3"])
        .assert()
        .failure()
        .stderr(contains("one or two token numbers"));

    fs().args(["--db", &db_path, "entry", "add", "--tokens", "12,12"])
        .assert()
        .failure()
        .stderr(contains("two different token numbers"));
}

#[test]
fn test_entry_mandatory_off_day_rejected() {
    let db_path = setup_test_db("entry_off_day");
    init_db_with_data(&db_path);

    // Alice had a day off on 2024-01-01.
    fs().args([
        "--db", &db_path, "entry", "add", "--tokens", "34,12", "--date", "2024-01-08", "--hours",
        "8",
    ])
    .assert()
    .failure()
    .stderr(contains(
        "Person with token 12 is on leave on 2024-01-08",
    ));

    fs().args([
        "--db", &db_path, "entry", "add", "--tokens", "12", "--date", "2024-01-08", "--day-off",
    ])
    .assert()
    .success();

    fs().args([
        "--db", &db_path, "entry", "add", "--tokens", "12", "--date", "2024-01-09", "--hours",
        "8",
    ])
    .assert()
    .success();
}

#[test]
fn test_entry_day_off_ignores_work_fields() {
    let db_path = setup_test_db("entry_day_off_fields");
    init_db(&db_path);
    add_employee(&db_path, "Alice", "12", "100");

    fs().args([
        "--db", &db_path, "entry", "add", "--tokens", "12", "--date", "2024-02-01", "--day-off",
        "--hours", "5",
    ])
    .assert()
    .success()
    .stdout(contains("ignoring --hours"))
    .stdout(contains("Day Off"));
}

#[test]
fn test_entry_invalid_date_rejected() {
    let db_path = setup_test_db("entry_invalid_date");
    init_db(&db_path);
    add_employee(&db_path, "Alice", "12", "100");

    fs().args(["--db", &db_path, "entry", "add", "--tokens", "12", "--date", "02/01/2024"])
        .assert()
        .failure()
        .stderr(contains("Invalid date format"));
}

#[test]
fn test_entry_edit_replaces_in_place() {
    let db_path = setup_test_db("entry_edit");
    init_db_with_data(&db_path);

    fs().args([
        "--db", &db_path, "entry", "edit", "2", "--tokens", "12", "--date", "2024-01-02", "--hours",
        "5",
    ])
    .assert()
    .success()
    .stdout(contains("Entry #2 updated"));

    fs().args(["--db", &db_path, "list", "--search", "12"])
        .assert()
        .success()
        .stdout(contains("5h 30m"))
        .stdout(contains("2h 30m").not());
}

#[test]
fn test_entry_edit_keeps_fields_not_given() {
    let db_path = setup_test_db("entry_edit_partial");
    init_db_with_data(&db_path);

    fs().args(["--db", &db_path, "entry", "edit", "3", "--hours", "5"])
        .assert()
        .success()
        .stdout(contains("34 on 2024-01-02: 5h 30m, 300.00 km"))
        .stdout(contains("440.00"));

    fs().args(["--db", &db_path, "list", "--search", "34"])
        .assert()
        .success()
        .stdout(contains("02 Jan 2024"))
        .stdout(contains("300.00 km"))
        .stdout(contains("75.00 km"))
        .stdout(contains("Total Time: 5h 30m"));
}

#[test]
fn test_entry_edit_checks_off_day_on_stored_date() {
    let db_path = setup_test_db("entry_edit_stored_date");
    init_db_with_data(&db_path);

    // Alice's work entry stays on 2024-01-02, which is not a blocked day.
    fs().args(["--db", &db_path, "entry", "edit", "2", "--minutes", "0"])
        .assert()
        .success()
        .stdout(contains("12 on 2024-01-02: 2h 0m"));
}

#[test]
fn test_entry_edit_toggles_day_off() {
    let db_path = setup_test_db("entry_edit_toggle_day_off");
    init_db_with_data(&db_path);

    fs().args(["--db", &db_path, "entry", "edit", "3", "--day-off"])
        .assert()
        .success()
        .stdout(contains("34 on 2024-01-02: Day Off"));

    fs().args(["--db", &db_path, "entry", "edit", "3", "--work-day", "--hours", "3"])
        .assert()
        .success()
        .stdout(contains("34 on 2024-01-02: 3h 0m, 0.00 km"));

    fs().args(["--db", &db_path, "entry", "edit", "3", "--day-off", "--work-day"])
        .assert()
        .failure();
}

#[test]
fn test_entry_edit_rejection_keeps_entry() {
    let db_path = setup_test_db("entry_edit_rejected");
    init_db_with_data(&db_path);

    fs().args(["--db", &db_path, "entry", "edit", "2", "--tokens", "77", "--hours", "1"])
        .assert()
        .failure();

    fs().args(["--db", &db_path, "list", "--search", "12"])
        .assert()
        .success()
        .stdout(contains("2h 30m"));
}

#[test]
fn test_entry_delete() {
    let db_path = setup_test_db("entry_del");
    init_db_with_data(&db_path);

    fs().args(["--db", &db_path, "entry", "del", "3"])
        .write_stdin("no\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled"));

    fs().args(["--db", &db_path, "entry", "del", "3", "--yes"])
        .assert()
        .success()
        .stdout(contains("Entry deleted"));

    fs().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Bob").not());

    fs().args(["--db", &db_path, "entry", "del", "9", "--yes"])
        .assert()
        .failure()
        .stderr(contains("No record at position #9"));
}

#[test]
fn test_list_search_filters_tokens() {
    let db_path = setup_test_db("list_search");
    init_db_with_data(&db_path);

    fs().args(["--db", &db_path, "list", "--search", "34"])
        .assert()
        .success()
        .stdout(contains("Bob"))
        .stdout(contains("Alice").not());

    fs().args(["--db", &db_path, "list", "--search", "99"])
        .assert()
        .success()
        .stdout(contains("No entries for: 99"));
}

#[test]
fn test_summary_normalizes_minutes() {
    let db_path = setup_test_db("summary_normalized");
    init_db_with_data(&db_path);

    fs().args([
        "--db", &db_path, "entry", "add", "--tokens", "34", "--date", "2024-01-03", "--minutes",
        "45",
    ])
    .assert()
    .success();

    fs().args(["--db", &db_path, "summary", "--search", "34"])
        .assert()
        .success()
        .stdout(contains("Bob (34)"))
        .stdout(contains("Total Time: 3h 15m"))
        .stdout(contains("Days Off").not());
}

#[test]
fn test_summary_days_off_line_follows_count_not_name() {
    let db_path = setup_test_db("summary_days_off_name");
    init_db(&db_path);
    add_employee(&db_path, "Days Off Crew", "8", "60");

    fs().args([
        "--db", &db_path, "entry", "add", "--tokens", "8", "--date", "2024-05-02", "--hours", "2",
    ])
    .assert()
    .success();

    fs().args(["--db", &db_path, "summary"])
        .assert()
        .success()
        .stdout(contains("Days Off Crew (8)"))
        .stdout(contains("Days Off:").not());
}
