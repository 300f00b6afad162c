//! The interactive command loop.

use std::io::{self, Stdout, Write};

use clubroll_foundation::{Error, Result};

use crate::editor::{LineEditor, ReadResult, RustylineEditor};
use crate::format;
use crate::session::Session;

const HELP: &str = "\
commands:
  get club NAME              get player NAME
  add club NAME [X Y]        add player NAME CLUB [LEVEL [X Y]]
  update club NAME X Y       update player NAME [CLUB [LEVEL [X Y]]]
  remove club NAME           remove player NAME
  list clubs                 move player NAME CLUB
  import players PATH
  help                       quit";

/// The interactive REPL.
pub struct Repl<E: LineEditor = RustylineEditor, W: Write = Stdout> {
    /// The line editor for input.
    editor: E,

    /// Where results and rejections are printed.
    output: W,

    /// Roster and persistence.
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
    /// Creates a new REPL with the given editor, printing to stdout.
    pub fn with_editor(editor: E) -> Self {
        Self {
            editor,
            output: io::stdout(),
            session: Session::new(),
            show_banner: true,
            prompt: "clubroll> ".to_string(),
        }
    }
}

impl<E: LineEditor, W: Write> Repl<E, W> {
    /// Redirects output.
    #[must_use]
    pub fn with_output<W2: Write>(self, output: W2) -> Repl<E, W2> {
        Repl {
            editor: self.editor,
            output,
            session: self.session,
            show_banner: self.show_banner,
            prompt: self.prompt,
        }
    }

    /// Sets the session for this REPL.
    #[must_use]
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = session;
        self
    }

    /// Disables the welcome banner.
    #[must_use]
    pub fn without_banner(mut self) -> Self {
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
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Returns the editor.
    #[must_use]
    pub fn editor(&self) -> &E {
        &self.editor
    }

    /// Returns the output sink.
    #[must_use]
    pub fn output(&self) -> &W {
        &self.output
    }

    /// Runs the REPL loop until EOF or `quit`.
    ///
    /// Rejected commands are printed and the loop continues.
    ///
    /// # Errors
    ///
    /// Returns the first error that is not a rejection: a failed read, a
    /// failed save, a remote-store failure, or a partial move.
    pub fn run(&mut self) -> Result<()> {
        if self.show_banner {
            self.print(&format!(
                "clubroll {}, type `help` for commands",
                env!("CARGO_PKG_VERSION")
            ))?;
        }

        while self.read_eval_print()? {}
        Ok(())
    }

    /// Executes one read-eval-print iteration.
    ///
    /// Returns `Ok(true)` to continue, `Ok(false)` to exit.
    fn read_eval_print(&mut self) -> Result<bool> {
        let line = match self.editor.read_line(&self.prompt)? {
            ReadResult::Line(line) => line,
            ReadResult::Interrupted => return Ok(true),
            ReadResult::Eof => return Ok(false),
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return Ok(true);
        }
        self.editor.add_history(trimmed);

        match trimmed {
            "quit" | "exit" => return Ok(false),
            "help" => {
                self.print(HELP)?;
                return Ok(true);
            }
            _ => {}
        }

        match self.session.run_line(trimmed) {
            Ok(outcome) => self.print(&format::render(&outcome)?)?,
            Err(e) if e.is_rejection() => self.print(&format!("rejected: {e}"))?,
            Err(e) => return Err(e),
        }
        Ok(true)
    }

    fn print(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{text}")
            .map_err(|e| Error::io(format!("failed to write output: {e}")))
    }
}
