use clap::Parser;
use sensei::cli::Cli;
use std::path::PathBuf;

#[test]
fn defaults_match_documented_interface() {
    let cli = Cli::try_parse_from(vec!["sensei"]).unwrap();

    assert_eq!(cli.model, "gpt-5-mini");
    assert_eq!(cli.timeout, 60);
    assert!(cli.file.is_none());
    assert!(!cli.json);
    assert!(!cli.no_history);
    assert!(!cli.history);
    assert!(!cli.clear_history);
}

#[test]
fn file_positional_is_accepted() {
    let cli = Cli::try_parse_from(vec!["sensei", "src/solution.rs"]).unwrap();

    assert_eq!(cli.file, Some(PathBuf::from("src/solution.rs")));
}

#[test]
fn short_flags_parse() {
    let cli = Cli::try_parse_from(vec![
        "sensei",
        "-m",
        "gemini-2.5-flash",
        "-t",
        "30",
        "-q",
        "What about overflow?",
        "-v",
        "main.py",
    ])
    .unwrap();

    assert_eq!(cli.model, "gemini-2.5-flash");
    assert_eq!(cli.timeout, 30);
    assert_eq!(cli.questions, vec!["What about overflow?"]);
    assert!(cli.verbose);
}

#[test]
fn question_flag_is_repeatable_in_order() {
    let cli = Cli::try_parse_from(vec![
        "sensei",
        "--question",
        "first",
        "--question",
        "second",
        "main.py",
    ])
    .unwrap();

    assert_eq!(cli.questions, vec!["first", "second"]);
}

#[test]
fn timeout_outside_range_is_rejected_at_parse_time() {
    assert!(Cli::try_parse_from(vec!["sensei", "--timeout", "9"]).is_err());
    assert!(Cli::try_parse_from(vec!["sensei", "--timeout", "301"]).is_err());
    assert!(Cli::try_parse_from(vec!["sensei", "--timeout", "10"]).is_ok());
    assert!(Cli::try_parse_from(vec!["sensei", "--timeout", "300"]).is_ok());
}

#[test]
fn non_numeric_timeout_is_rejected() {
    assert!(Cli::try_parse_from(vec!["sensei", "--timeout", "soon"]).is_err());
}

#[test]
fn history_flags_parse_without_a_snippet() {
    let cli = Cli::try_parse_from(vec!["sensei", "--history"]).unwrap();
    assert!(cli.is_history_maintenance());
    assert!(cli.validate().is_ok());

    let cli = Cli::try_parse_from(vec!["sensei", "--clear-history"]).unwrap();
    assert!(cli.is_history_maintenance());
    assert!(cli.validate().is_ok());
}

#[test]
fn history_file_override_parses() {
    let cli = Cli::try_parse_from(vec![
        "sensei",
        "--history-file",
        "/tmp/custom-history.json",
        "--history",
    ])
    .unwrap();

    assert_eq!(
        cli.history_file,
        Some(PathBuf::from("/tmp/custom-history.json"))
    );
}

#[test]
fn unknown_flags_are_rejected() {
    assert!(Cli::try_parse_from(vec!["sensei", "--explain-harder"]).is_err());
}
