//! Integration tests for the REPL command set, driven by a scripted editor.

use citymaps_foundation::{ErrorKind, Page, Result};
use citymaps_router::Revision;
use citymaps_runtime::{LineEditor, ReadResult, Repl};

/// Editor that replays a fixed script, then reports EOF.
struct ScriptedEditor {
    lines: std::vec::IntoIter<String>,
}

impl ScriptedEditor {
    fn new(lines: &[&str]) -> Self {
        Self {
            lines: lines
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .into_iter(),
        }
    }
}

impl LineEditor for ScriptedEditor {
    fn read_line(&mut self, _prompt: &str) -> Result<ReadResult> {
        Ok(self.lines.next().map_or(ReadResult::Eof, ReadResult::Line))
    }

    fn add_history(&mut self, _line: &str) {}

    fn set_keywords(&mut self, _keywords: Vec<String>) {}
}

fn repl() -> Repl<ScriptedEditor> {
    Repl::with_editor(ScriptedEditor::new(&[])).without_banner()
}

// =============================================================================
// Commands
// =============================================================================

#[test]
fn resolve_and_match() {
    let mut repl = repl();
    let out = repl.eval("/emissions/wanaka").unwrap().unwrap();
    assert!(out.contains("EMISSIONS_CHRISTCHURCH"));

    let out = repl.eval(":match /emissions/wanaka").unwrap().unwrap();
    assert!(out.contains("redirect to EMISSIONS_CHRISTCHURCH"));
}

#[test]
fn routes_and_names() {
    let mut repl = repl();
    let tree = repl.eval(":routes").unwrap().unwrap();
    assert!(tree.contains("/mode-share"));

    let names = repl.eval(":names root").unwrap().unwrap();
    assert!(names.contains("ROOT_ABOUT"));
    assert!(repl.eval(":names nowhere").is_err());
}

#[test]
fn round_command() {
    let mut repl = repl();
    assert_eq!(repl.eval(":round 10 3").unwrap().unwrap(), "10.000");
    assert_eq!(repl.eval(":round -2.5").unwrap().unwrap(), "-3");
    let err = repl.eval(":round").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidInput(_)));
}

#[test]
fn unknown_route_name() {
    let mut repl = repl();
    let err = repl.eval(":go MODE_SHARE_2023_AUCKLAND").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownRouteName(_)));
    let err = repl.eval(":go NOT_A_ROUTE").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnknownSymbol(_)));
}

#[test]
fn help_lists_commands() {
    let mut repl = repl();
    let help = repl.eval(":help").unwrap().unwrap();
    for command in [":go", ":match", ":revision", ":routes", ":names", ":round"] {
        assert!(help.contains(command), "{command} missing from help");
    }
}

// =============================================================================
// Loop
// =============================================================================

#[test]
fn scripted_session() {
    let editor = ScriptedEditor::new(&[
        ":revision mode-share-2023",
        "/mode-share-2023/oamaru",
        ":bogus",
        "/mode-share-2023/queenstown",
    ]);
    let mut repl = Repl::with_editor(editor).without_banner();
    repl.run().unwrap();

    let session = repl.session();
    assert_eq!(session.revision(), Revision::ModeShare2023);
    assert_eq!(session.history().len(), 2);
    assert_eq!(
        session.current().unwrap().page,
        Page::ModeShare2023(citymaps_foundation::City::Christchurch)
    );
}
