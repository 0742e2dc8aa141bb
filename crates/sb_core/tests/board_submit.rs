use sb_core::board::IncidentBoard;
use sb_core::demo::seed_demo_board;
use sb_core::domain::Severity;

const NOW: &str = "2025-05-02T08:00:00Z";

#[test]
fn blank_submit_flags_both_fields_and_appends_nothing() {
    let mut board = seed_demo_board();
    let before = board.incidents().len();

    let err = board.submit_draft(NOW).expect_err("blank draft must fail");
    assert!(err.title && err.description);
    assert!(board.draft_errors().title && board.draft_errors().description);
    assert_eq!(board.incidents().len(), before);
}

#[test]
fn whitespace_only_fields_count_as_blank() {
    let mut board = IncidentBoard::new();
    board.set_draft_title("   ");
    board.set_draft_description("\t\n");

    let err = board.submit_draft(NOW).expect_err("whitespace draft must fail");
    assert!(err.title && err.description);
    assert!(board.incidents().is_empty());
}

#[test]
fn partial_submit_flags_only_the_missing_field() {
    let mut board = seed_demo_board();
    board.set_draft_title("Prompt injection via uploaded document");

    let err = board.submit_draft(NOW).expect_err("missing description must fail");
    assert!(!err.title);
    assert!(err.description);
    assert_eq!(board.incidents().len(), 3, "collection unchanged on failure");
}

#[test]
fn valid_submit_appends_one_record_with_next_id() {
    let mut board = seed_demo_board();
    board.toggle_form();
    board.set_draft_title("Reward Hacking in Eval Harness");
    board.set_draft_description("Agent exploited a scoring bug to inflate benchmark results.");
    board.set_draft_severity(Severity::High);

    let created = board.submit_draft(NOW).expect("valid draft must succeed");
    assert_eq!(created.id, 4);
    assert_eq!(created.title, "Reward Hacking in Eval Harness");
    assert_eq!(created.severity, Severity::High);
    assert_eq!(created.reported_at, NOW);

    assert_eq!(board.incidents().len(), 4);
    assert_eq!(board.incidents().last().unwrap(), &created, "append order = insertion order");
}

#[test]
fn successful_submit_resets_draft_and_hides_form() {
    let mut board = seed_demo_board();
    board.toggle_form();
    board.set_draft_title("t");
    board.set_draft_description("d");
    board.set_draft_severity(Severity::Low);

    board.submit_draft(NOW).expect("valid draft must succeed");

    assert!(!board.show_form());
    assert_eq!(board.draft().title, "");
    assert_eq!(board.draft().description, "");
    assert_eq!(board.draft().severity, Severity::Medium, "severity resets to default");
    assert!(!board.draft_errors().any());
}

#[test]
fn editing_a_field_clears_only_that_error_flag() {
    let mut board = IncidentBoard::new();
    board.submit_draft(NOW).expect_err("blank draft must fail");
    assert!(board.draft_errors().title && board.draft_errors().description);

    board.set_draft_title("Model card omitted known failure modes");
    assert!(!board.draft_errors().title);
    assert!(board.draft_errors().description, "other flag untouched");
}

#[test]
fn cancel_keeps_draft_content() {
    let mut board = seed_demo_board();
    board.toggle_form();
    board.set_draft_title("Half-written report");
    board.toggle_form();

    assert!(!board.show_form());
    assert_eq!(board.draft().title, "Half-written report");
}

#[test]
fn stored_values_keep_surrounding_whitespace() {
    let mut board = IncidentBoard::new();
    let created = board
        .add_incident("  padded title  ", "desc", Severity::Low, NOW)
        .expect("non-blank after trim must pass");
    assert_eq!(created.title, "  padded title  ");
}
