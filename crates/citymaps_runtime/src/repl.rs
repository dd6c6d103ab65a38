//! The main REPL implementation.

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::export;
use crate::render;
use crate::session::Session;
use citymaps_foundation::{Error, LocationRegistry, Result, RouteName, Section, round_to_fixed};
use citymaps_router::Revision;
use std::fmt::Write as _;

/// REPL commands, offered for completion.
const COMMANDS: &[&str] = &[
    ":go", ":match", ":revision", ":routes", ":names", ":round", ":export", ":history", ":help",
    ":quit",
];

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor> {
    /// The line editor for input.
    editor: E,

    /// Session state (revision, table, history).
    session: Session,

    /// Whether to show the welcome banner.
    show_banner: bool,

    /// Primary prompt.
    prompt: String,
}

impl Repl<RustylineEditor> {
    /// Creates a new REPL with the default rustyline editor.
    ///
    /// # Errors
    ///
    /// Returns an error if the editor fails to initialize.
    pub fn new() -> Result<Self> {
        let editor = RustylineEditor::new()?;
        Ok(Self::with_editor(editor))
    }
}

impl<E: LineEditor> Repl<E> {
    /// Creates a new REPL with the given editor.
    pub fn with_editor(editor: E) -> Self {
        let mut repl = Self {
            editor,
            session: Session::new(),
            show_banner: true,
            prompt: "citymaps> ".to_string(),
        };
        repl.refresh_keywords();
        repl
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self.refresh_keywords();
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub const fn without_banner(mut self) -> Self {
        self.show_banner = false;
        self
    }

    /// Sets the primary prompt.
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Returns a reference to the session.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Returns a mutable reference to the session.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Runs the REPL loop.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input fails fatally.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print_banner();
        }

        loop {
            match self.read_eval_print() {
                Ok(true) => {}
                Ok(false) => break,
                Err(e) => {
                    self.print_error(&e);
                }
            }
        }

        println!("\nGoodbye!");
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let input = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => {
                println!();
                return Ok(true);
            }
            ReadResult::Eof => return Ok(false),
        };

        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }

        self.editor.add_history(&input);

        if matches!(trimmed, ":quit" | ":q") {
            return Ok(false);
        }

        match self.eval(trimmed) {
            Ok(Some(output)) => println!("{output}"),
            Ok(None) => {}
            Err(e) => self.print_error(&e),
        }

        Ok(true)
    }

    /// Evaluates one line of input: a path to resolve, or a `:command`.
    ///
    /// Returns the text to print, if any.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown commands, bad arguments, unknown route
    /// names or revisions, and failed exports.
    pub fn eval(&mut self, input: &str) -> Result<Option<String>> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(None);
        }
        if !input.starts_with(':') {
            let resolution = self.session.resolve(input);
            return Ok(Some(render::resolution(resolution)));
        }

        let mut words = input.split_whitespace();
        let command = words.next().unwrap_or_default();
        let args: Vec<&str> = words.collect();

        match command {
            ":go" => {
                let name: RouteName = required(&args, 0, ":go NAME")?.parse()?;
                let resolution = self.session.navigate(name)?;
                Ok(Some(render::resolution(resolution)))
            }
            ":match" => {
                let path = required(&args, 0, ":match PATH")?;
                let matched = self.session.match_path(path);
                Ok(Some(render::route_match(self.session.table(), &matched)))
            }
            ":revision" => match args.first() {
                None => Ok(Some(self.describe_revisions())),
                Some(name) => {
                    let revision: Revision = name.parse()?;
                    self.session.set_revision(revision)?;
                    self.refresh_keywords();
                    Ok(Some(format!(
                        "switched to {revision} ({} routes)",
                        self.session.table().len()
                    )))
                }
            },
            ":routes" => Ok(Some(render::route_tree(self.session.table()))),
            ":names" => {
                let section = args.first().map(|s| s.parse::<Section>()).transpose()?;
                Ok(Some(render::names(self.session.table(), section)))
            }
            ":round" => {
                let value = required(&args, 0, ":round VALUE [PLACES]")?;
                let value: f64 = value
                    .parse()
                    .map_err(|_| Error::invalid_input(format!("not a number: '{value}'")))?;
                let places = match args.get(1) {
                    Some(places) => places.parse::<u32>().map_err(|_| {
                        Error::invalid_input(format!("not a decimal place count: '{places}'"))
                    })?,
                    None => 0,
                };
                Ok(Some(round_to_fixed(value, places)))
            }
            ":export" => {
                let path = required(&args, 0, ":export PATH")?;
                export::save_manifest(self.session.table(), path)?;
                Ok(Some(format!("wrote {path}")))
            }
            ":history" => Ok(Some(self.describe_history())),
            ":help" => Ok(Some(help_text())),
            other => Err(Error::invalid_input(format!(
                "unknown command '{other}' (try :help)"
            ))),
        }
    }

    fn describe_revisions(&self) -> String {
        let mut out = String::new();
        for revision in Revision::ALL {
            let marker = if revision == self.session.revision() { "*" } else { " " };
            let _ = writeln!(
                out,
                "{marker} {revision:<16} fallback {}",
                revision.global_fallback()
            );
        }
        out.truncate(out.trim_end().len());
        out
    }

    fn describe_history(&self) -> String {
        if self.session.history().is_empty() {
            return "(no history)".to_string();
        }
        self.session
            .history()
            .iter()
            .enumerate()
            .map(|(i, r)| format!("{:>3}  {} => {}", i + 1, r.requested, r.path))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Offers commands, route symbols, revisions and the active table's
    /// paths for completion.
    fn refresh_keywords(&mut self) {
        let mut keywords: Vec<String> = COMMANDS.iter().map(ToString::to_string).collect();
        keywords.extend(LocationRegistry::all().map(|name| name.as_str().to_string()));
        keywords.extend(Revision::ALL.iter().map(|r| r.as_str().to_string()));
        keywords.extend(
            self.session
                .table()
                .records()
                .filter(|(_, record)| !record.is_catch_all())
                .map(|(_, record)| record.href()),
        );
        self.editor.set_keywords(keywords);
    }

    #[allow(clippy::unused_self)]
    fn print_error(&self, error: &Error) {
        eprintln!("\x1b[31mError: {error}\x1b[0m");
    }

    fn print_banner(&self) {
        println!("\x1b[1;36mcitymaps\x1b[0m v{}", env!("CARGO_PKG_VERSION"));
        println!(
            "Routes of revision {}. Type a path, or :help for commands. Use Ctrl+D to exit.\n",
            self.session.revision()
        );
    }
}

fn required<'a>(args: &[&'a str], index: usize, usage: &str) -> Result<&'a str> {
    args.get(index)
        .copied()
        .ok_or_else(|| Error::invalid_input(format!("usage: {usage}")))
}

fn help_text() -> String {
    [
        "<path>                  resolve a path, following redirects",
        ":go NAME                navigate to a named route",
        ":match PATH             show the route a path matches, without redirects",
        ":revision [NAME]        list revisions, or switch to one",
        ":routes                 print the route tree",
        ":names [SECTION]        list route names and their paths",
        ":round VALUE [PLACES]   format a number to fixed decimal places",
        ":export PATH            write the route manifest as JSON",
        ":history                list resolutions made this session",
        ":help                   show this help",
        ":quit                   exit (or Ctrl+D)",
    ]
    .join("\n")
}
