//! Tests for the interactive menu, driven by scripted input

use std::io;

use teamtree::application::{ApplicationError, Directory, Shell};
use teamtree::config::{Settings, Style};

#[ctor::ctor]
fn init() {
    teamtree::util::testing::init_test_setup();
}

/// Run a scripted session, returning the final directory and everything printed.
fn run_session(script: &str, settings: Settings) -> (Directory, String) {
    let mut out = Vec::new();
    let mut shell = Shell::new(Directory::new(settings), script.as_bytes(), &mut out);
    shell.run().expect("session runs");
    let directory = shell.into_directory();
    (directory, String::from_utf8(out).expect("utf8 output"))
}

#[test]
fn given_full_session_when_running_then_builds_and_prints_tree() {
    let script = "1\nCEO\n2\nCEO\nCTO\nLEFT\n2\nceo\nCFO\n right \n2\nCTO\nEngineer\nleft\n3\n4\n";

    let (directory, out) = run_session(script, Settings::default());

    assert!(out.contains("CEO added as the team lead."));
    assert!(out.contains("CTO added to the LEFT of CEO"));
    assert!(out.contains("CFO added to the RIGHT of ceo"));
    assert!(out.contains("- CEO\n  - CTO\n    - Engineer\n  - CFO"));
    assert!(out.trim_end().ends_with("Good bye!"));
    assert_eq!(directory.tree().len(), 4);
}

#[test]
fn given_menu_when_running_then_lists_all_options() {
    let (_, out) = run_session("4\n", Settings::default());

    for option in [
        "1. Add Team Lead (root)",
        "2. Add Employee",
        "3. Print Team Structure",
        "4. Exit",
    ] {
        assert!(out.contains(option), "missing {option:?} in {out}");
    }
}

#[test]
fn given_existing_team_lead_when_adding_again_then_warns_without_prompting() {
    // The second "1" must not consume "Other" as a name
    let (directory, out) = run_session("1\nAlice\n1\nOther\n4\n", Settings::default());

    assert!(out.contains("Team lead already exists."));
    assert!(out.contains("Invalid option. Try again."));
    assert_eq!(directory.tree().root().map(|r| r.name()), Some("Alice"));
}

#[test]
fn given_no_team_lead_when_adding_employee_then_reports_empty_tree() {
    let (directory, out) = run_session("2\nAlice\nBob\nleft\n4\n", Settings::default());

    assert!(out.contains("No team lead exists yet. Please add a team lead first."));
    assert!(directory.tree().is_empty());
}

#[test]
fn given_bad_side_when_adding_employee_then_reports_invalid_side() {
    let (directory, out) = run_session("1\nAlice\n2\nAlice\nBob\nup\n4\n", Settings::default());

    assert!(out.contains("Invalid side. Please enter LEFT or RIGHT."));
    assert_eq!(directory.tree().len(), 1);
}

#[test]
fn given_unknown_manager_when_adding_employee_then_reports_not_found() {
    let (_, out) = run_session("1\nAlice\n2\nZed\nBob\nleft\n4\n", Settings::default());

    assert!(out.contains("Manager 'Zed' not found in the current team structure."));
}

#[test]
fn given_taken_side_when_adding_employee_then_reports_occupied() {
    let script = "1\nAlice\n2\nAlice\nBob\nleft\n2\nAlice\nCarol\nLeft\n3\n4\n";

    let (directory, out) = run_session(script, Settings::default());

    assert!(out.contains("LEFT side of Alice is already occupied."));
    assert!(out.contains("- Alice\n  - Bob"));
    assert!(!directory.tree().contains("Carol"));
}

#[test]
fn given_blank_name_when_adding_team_lead_then_rejected() {
    let (directory, out) = run_session("1\n   \n4\n", Settings::default());

    assert!(out.contains("Team lead name must not be empty"));
    assert!(directory.tree().is_empty());
}

#[test]
fn given_empty_tree_when_printing_then_shows_empty_label() {
    let (_, out) = run_session("3\n4\n", Settings::default());

    assert!(out.contains("(empty)"));
}

#[test]
fn given_input_ends_mid_prompt_when_running_then_exits_cleanly() {
    let (directory, out) = run_session("1\nCEO\n2\nCEO\n", Settings::default());

    assert!(out.trim_end().ends_with("Good bye!"));
    assert_eq!(directory.tree().len(), 1);
}

#[test]
fn given_tree_style_when_printing_then_draws_branches() {
    let settings = Settings {
        style: Style::Tree,
        ..Settings::default()
    };

    let (_, out) = run_session("1\nCEO\n2\nCEO\nCTO\nleft\n3\n4\n", settings);

    assert!(out.contains("CEO\n└── CTO"), "{out}");
}

#[test]
fn given_custom_layout_when_printing_then_uses_it() {
    let settings = Settings {
        indent: 4,
        bullet: "*".into(),
        ..Settings::default()
    };

    let (_, out) = run_session("1\nCEO\n2\nCEO\nCTO\nleft\n3\n4\n", settings);

    assert!(out.contains("* CEO\n    * CTO"), "{out}");
}

struct BrokenPipe;

impl io::Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn given_closed_output_when_running_then_io_error() {
    let mut shell = Shell::new(Directory::new(Settings::default()), "4\n".as_bytes(), BrokenPipe);

    let err = shell.run().unwrap_err();

    assert!(matches!(err, ApplicationError::Io { .. }), "{err:?}");
}
