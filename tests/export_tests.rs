use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs as stdfs;
use std::path::Path;

mod common;
use common::{fs, init_db, init_db_with_data, setup_test_db, temp_out};

#[test]
fn test_export_csv_all() {
    let db_path = setup_test_db("export_csv_all");
    init_db_with_data(&db_path);
    let out = temp_out("export_csv_all", "csv");

    fs().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = stdfs::read_to_string(&out).expect("read csv");
    let mut lines = content.lines();
    assert_eq!(
        lines.next(),
        Some(
            "position,token,name,date,day_off,hours,minutes,hourly_rate,total_distance,section1,section2,section3,amount"
        )
    );
    assert_eq!(content.lines().count(), 4);
    assert!(content.contains("2024-01-02"));
    assert!(content.contains("Bob"));
}

#[test]
fn test_export_json_filtered() {
    let db_path = setup_test_db("export_json_filtered");
    init_db_with_data(&db_path);
    let out = temp_out("export_json_filtered", "json");

    fs().args([
        "--db", &db_path, "export", "--format", "json", "--file", &out, "--search", "34",
    ])
    .assert()
    .success();

    let content = stdfs::read_to_string(&out).expect("read json");
    let value: serde_json::Value = serde_json::from_str(&content).expect("parse json");
    let rows = value.as_array().expect("array");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["token"], "34");
    assert_eq!(rows[0]["position"], 3);
    assert_eq!(rows[0]["amount"], 200.0);
    assert_eq!(rows[0]["section3"], 75.0);
}

#[test]
fn test_export_xlsx_and_pdf_create_files() {
    let db_path = setup_test_db("export_xlsx_pdf");
    init_db_with_data(&db_path);

    let xlsx = temp_out("export_xlsx_pdf", "xlsx");
    fs().args(["--db", &db_path, "export", "--format", "xlsx", "--file", &xlsx])
        .assert()
        .success();
    let bytes = stdfs::read(&xlsx).expect("read xlsx");
    assert!(bytes.starts_with(b"PK"));

    let pdf = temp_out("export_xlsx_pdf", "pdf");
    fs().args(["--db", &db_path, "export", "--format", "pdf", "--file", &pdf])
        .assert()
        .success();
    let bytes = stdfs::read(&pdf).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_relative_path_rejected() {
    let db_path = setup_test_db("export_relative");
    init_db_with_data(&db_path);

    fs().args(["--db", &db_path, "export", "--file", "relative.csv"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_existing_file_needs_confirmation() {
    let db_path = setup_test_db("export_overwrite");
    init_db_with_data(&db_path);
    let out = temp_out("export_overwrite", "csv");
    stdfs::write(&out, "keep me").expect("seed file");

    fs().args(["--db", &db_path, "export", "--file", &out])
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("existing file not overwritten"));
    assert_eq!(stdfs::read_to_string(&out).unwrap(), "keep me");

    fs().args(["--db", &db_path, "export", "--file", &out, "--force"])
        .assert()
        .success();
    assert!(stdfs::read_to_string(&out).unwrap().starts_with("position,"));
}

#[test]
fn test_export_empty_selection_writes_nothing() {
    let db_path = setup_test_db("export_empty");
    init_db(&db_path);
    let out = temp_out("export_empty", "csv");

    fs().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success()
        .stdout(contains("No entries found"));
    assert!(!Path::new(&out).exists());
}

#[test]
fn test_print_html_view() {
    let db_path = setup_test_db("print_html");
    init_db_with_data(&db_path);
    let out = temp_out("print_html", "html");

    fs().args(["--db", &db_path, "print", "--file", &out])
        .assert()
        .success();

    let html = stdfs::read_to_string(&out).expect("read html");
    assert!(html.contains("<h2>Filtered Entries</h2>"));
    assert!(html.contains("<h2>Driver Summary</h2>"));
    assert_eq!(html.matches("class=\"driver-card\"").count(), 2);
    assert!(html.contains("Day Off"));
    assert_eq!(html.matches("<tr class=\"day-off\">").count(), 1);
    assert!(html.contains("<p class=\"day-off\">Days Off: 1</p>"));
    assert!(html.contains("75.00 km"));
}

#[test]
fn test_print_html_escapes_names() {
    let db_path = setup_test_db("print_html_escape");
    init_db(&db_path);
    common::add_employee(&db_path, "<b>Tom & Co</b>", "7", "50");
    fs().args(["--db", &db_path, "entry", "add", "--tokens", "7", "--hours", "1"])
        .assert()
        .success();
    let out = temp_out("print_html_escape", "html");

    fs().args(["--db", &db_path, "print", "--file", &out])
        .assert()
        .success();

    let html = stdfs::read_to_string(&out).expect("read html");
    assert!(html.contains("&lt;b&gt;Tom &amp; Co&lt;/b&gt;"));
    assert!(!html.contains("<b>Tom"));
}

#[test]
fn test_print_html_day_off_styling_follows_entry_flag() {
    let db_path = setup_test_db("print_html_day_off_name");
    init_db(&db_path);
    common::add_employee(&db_path, "Day Off", "5", "50");
    fs().args([
        "--db", &db_path, "entry", "add", "--tokens", "5", "--date", "2024-04-01", "--hours", "1",
    ])
    .assert()
    .success();
    let out = temp_out("print_html_day_off_name", "html");

    fs().args(["--db", &db_path, "print", "--file", &out])
        .assert()
        .success();

    let html = stdfs::read_to_string(&out).expect("read html");
    assert!(html.contains("<td>Day Off</td>"));
    assert!(!html.contains("class=\"day-off\""));
}

#[test]
fn test_print_pdf_view() {
    let db_path = setup_test_db("print_pdf");
    init_db_with_data(&db_path);
    let out = temp_out("print_pdf", "pdf");

    fs().args([
        "--db", &db_path, "print", "--format", "pdf", "--file", &out, "--search", "12",
    ])
    .assert()
    .success()
    .stdout(contains("PDF print export completed"));

    let bytes = stdfs::read(&out).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_import_replaces_stores() {
    let db_path = setup_test_db("import_replace");
    init_db_with_data(&db_path);

    let employees = temp_out("import_replace_employees", "json");
    let entries = temp_out("import_replace_entries", "json");
    stdfs::write(
        &employees,
        r#"[{"name":"Ravi","token":"101","hourlyRate":150}]"#,
    )
    .unwrap();
    stdfs::write(
        &entries,
        r#"[{"token":"101","date":"2024-03-05","isDayOff":false,"hours":1,"minutes":20,
            "totalDistance":180,"section1":30,"section2":0,"section3":0,"amount":200}]"#,
    )
    .unwrap();

    fs().args([
        "--db", &db_path, "import", "--employees", &employees, "--entries", &entries, "--yes",
    ])
    .assert()
    .success()
    .stdout(contains("Imported 1 employees and 1 entries"));

    fs().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Ravi"))
        .stdout(contains("05 Mar 2024"))
        .stdout(contains("1h 20m"))
        .stdout(contains("Alice").not());
}

#[test]
fn test_import_duplicate_tokens_rejected() {
    let db_path = setup_test_db("import_dup");
    init_db_with_data(&db_path);

    let employees = temp_out("import_dup_employees", "json");
    let entries = temp_out("import_dup_entries", "json");
    stdfs::write(
        &employees,
        r#"[{"name":"A","token":"1","hourlyRate":10},{"name":"B","token":"1","hourlyRate":20}]"#,
    )
    .unwrap();
    stdfs::write(&entries, "[]").unwrap();

    fs().args([
        "--db", &db_path, "import", "--employees", &employees, "--entries", &entries, "--yes",
    ])
    .assert()
    .failure()
    .stderr(contains("Token number 1 already exists"));

    fs().args(["--db", &db_path, "employee", "list"])
        .assert()
        .success()
        .stdout(contains("Alice"));
}

#[test]
fn test_log_records_mutations() {
    let db_path = setup_test_db("log_mutations");
    init_db_with_data(&db_path);

    fs().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("Internal log"))
        .stdout(contains("employee 12"))
        .stdout(contains("entry 34"))
        .stdout(contains("migration_applied"));
}

#[test]
fn test_backup_plain_and_compressed() {
    let db_path = setup_test_db("backup");
    init_db_with_data(&db_path);

    let plain = temp_out("backup_plain", "sqlite");
    fs().args(["--db", &db_path, "backup", "--file", &plain])
        .assert()
        .success()
        .stdout(contains("Backup created"));
    assert!(Path::new(&plain).exists());

    let zipped = temp_out("backup_zipped", "sqlite");
    let zip_path = Path::new(&zipped).with_extension("zip");
    stdfs::remove_file(&zip_path).ok();

    fs().args(["--db", &db_path, "backup", "--file", &zipped, "--compress"])
        .assert()
        .success();
    assert!(zip_path.exists());
    assert!(!Path::new(&zipped).exists());
}

#[test]
fn test_db_info_counts_records() {
    let db_path = setup_test_db("db_info");
    init_db_with_data(&db_path);

    fs().args(["--db", &db_path, "db", "--info", "--check"])
        .assert()
        .success()
        .stdout(contains("Employees:"))
        .stdout(contains("(1 day offs)"))
        .stdout(contains("Integrity check passed"));
}
