//! Console session tests: drive the interactive loop with scripted input
//! and assert on the rendered output and the resulting catalog state.

use std::io::Cursor;
use workshop_console::cli::commands::console;
use workshop_console::{initial_workshops, WorkshopCatalog, WorkshopStatus};

fn run_script(catalog: &mut WorkshopCatalog, script: &str) -> String {
    let mut output = Vec::new();
    console::run(catalog, Cursor::new(script.to_string()), &mut output)
        .expect("console session should not fail");
    String::from_utf8(output).expect("console output should be utf-8")
}

#[test]
fn test_stats_command_reports_seed_totals() {
    let mut catalog = WorkshopCatalog::with_seed(initial_workshops());
    let output = run_script(&mut catalog, "stats\nquit\n");

    assert!(output.contains("Active workshops:  3"));
    assert!(output.contains("Available seats:   36"));
    assert!(output.contains("Canceled:          0"));
    assert!(output.contains("Total workshops:   3"));
}

#[test]
fn test_enroll_flow_updates_seats_and_clears_student_fields() {
    let mut catalog = WorkshopCatalog::with_seed(initial_workshops());
    // ws-1 is pre-selected; two enrollments back to back
    let script = "enroll\nAda Lovelace\nada@example.com\nenroll\nGrace Hopper\ngrace@example.com\nstats\nquit\n";
    let output = run_script(&mut catalog, script);

    assert!(output.contains("Enrollment registered. Check your email for details!"));
    assert!(output.contains("Available seats:   34"));
    assert_eq!(catalog.get("ws-1").unwrap().enrolled, 20);
    assert_eq!(catalog.roster("ws-1").len(), 2);
}

#[test]
fn test_enroll_into_canceled_workshop_shows_error() {
    let mut catalog = WorkshopCatalog::with_seed(initial_workshops());
    let script = "cancel ws-3\nenroll ws-3\nAda Lovelace\nada@example.com\nquit\n";
    let output = run_script(&mut catalog, script);

    assert!(output.contains("Workshop canceled."));
    assert!(output.contains("canceled and no longer accepts enrollments"));
    assert_eq!(catalog.get("ws-3").unwrap().enrolled, 8);
}

#[test]
fn test_add_command_creates_workshop() {
    let mut catalog = WorkshopCatalog::with_seed(initial_workshops());
    let script = concat!(
        "add\n",
        "Rust 101\n",           // title
        "Technology\n",         // category
        "Lab B\n",              // location
        "2025-05-01\n",         // date
        "17:00\n",              // time
        "10\n",                 // capacity
        "Intro to ownership\n", // description
        "stats\n",
        "quit\n",
    );
    let output = run_script(&mut catalog, script);

    assert!(output.contains("Workshop created and published."));
    assert!(output.contains("Total workshops:   4"));
    assert!(output.contains("Available seats:   46"));
    let created = catalog
        .list(&workshop_console::CategoryFilter::parse("Technology"))
        .into_iter()
        .find(|w| w.title == "Rust 101")
        .expect("created workshop should be listed");
    assert_eq!(created.enrolled, 0);
    assert_eq!(created.status, WorkshopStatus::Active);
}

#[test]
fn test_add_with_blank_title_is_rejected_and_catalog_unchanged() {
    let mut catalog = WorkshopCatalog::with_seed(initial_workshops());
    let script = concat!(
        "add\n",
        "\n",           // title left blank
        "Health\n",     // category
        "Gym\n",        // location
        "2025-05-01\n", // date
        "09:00\n",      // time
        "12\n",         // capacity
        "\n",           // description
        "stats\n",
        "quit\n",
    );
    let output = run_script(&mut catalog, script);

    assert!(output.contains("title must not be blank"));
    assert!(output.contains("Total workshops:   3"));
    assert_eq!(catalog.len(), 3);
}

#[test]
fn test_edit_keeps_unanswered_fields() {
    let mut catalog = WorkshopCatalog::with_seed(initial_workshops());
    // retitle ws-1, leave every other field at its current value
    let script = "edit ws-1\nModern Web Development\n\n\n\n\n\n\nlist\nquit\n";
    let output = run_script(&mut catalog, script);

    assert!(output.contains("Workshop updated successfully."));
    assert!(output.contains("Modern Web Development"));

    let workshop = catalog.get("ws-1").unwrap();
    assert_eq!(workshop.title, "Modern Web Development");
    assert_eq!(workshop.capacity, 24);
    assert_eq!(workshop.enrolled, 18);
    assert_eq!(workshop.location, "Lab A");
}

#[test]
fn test_delete_command_removes_workshop() {
    let mut catalog = WorkshopCatalog::with_seed(initial_workshops());
    let output = run_script(&mut catalog, "delete ws-2\nstats\nquit\n");

    assert!(output.contains("Workshop deleted."));
    assert!(output.contains("Total workshops:   2"));
    assert!(catalog.get("ws-2").is_none());
}

#[test]
fn test_delete_unknown_id_reports_not_found() {
    let mut catalog = WorkshopCatalog::with_seed(initial_workshops());
    let output = run_script(&mut catalog, "delete ws-99\nquit\n");

    assert!(output.contains("no workshop found with id `ws-99`"));
    assert_eq!(catalog.len(), 3);
}

#[test]
fn test_filter_command_narrows_listing() {
    let mut catalog = WorkshopCatalog::with_seed(initial_workshops());
    let output = run_script(&mut catalog, "filter Technology\nquit\n");

    assert!(output.contains("filter: Technology"));
    assert!(output.contains("Introduction to Web Development"));
    assert!(!output.contains("Digital Entrepreneurship"));
}

#[test]
fn test_filter_accepts_multi_word_categories() {
    let mut catalog = WorkshopCatalog::with_seed(initial_workshops());
    let output = run_script(&mut catalog, "filter Soft Skills\nquit\n");

    assert!(output.contains("filter: Soft Skills"));
    assert!(output.contains("Soft Skills for Leaders"));
    assert!(!output.contains("Introduction to Web Development"));
}

#[test]
fn test_roster_command_lists_enrolled_students() {
    let mut catalog = WorkshopCatalog::with_seed(initial_workshops());
    let script = "enroll ws-2\nAda Lovelace\nada@example.com\nroster ws-2\nquit\n";
    let output = run_script(&mut catalog, script);

    assert!(output.contains("ROSTER (1 enrolled this session)"));
    assert!(output.contains("Ada Lovelace <ada@example.com>"));
}

#[test]
fn test_unknown_command_is_recoverable() {
    let mut catalog = WorkshopCatalog::with_seed(initial_workshops());
    let output = run_script(&mut catalog, "frobnicate\nstats\nquit\n");

    assert!(output.contains("unknown command 'frobnicate'"));
    assert!(output.contains("Total workshops:   3"));
}

#[test]
fn test_end_of_input_terminates_session() {
    let mut catalog = WorkshopCatalog::with_seed(initial_workshops());
    // no quit: the session ends cleanly at EOF
    let output = run_script(&mut catalog, "stats\n");
    assert!(output.contains("Total workshops:   3"));
}
