//! Error types for the Clubroll system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// The main error type for Clubroll operations.
#[derive(Debug, Error)]
#[error("{kind}{}", render_context(.context))]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

fn render_context(context: &Option<ErrorContext>) -> String {
    match context {
        Some(ctx) => format!(" ({ctx})"),
        None => String::new(),
    }
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Adds context to this error, replacing any existing context.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Records the operation that failed.
    ///
    /// The first operation recorded becomes the context; later (outer)
    /// operations are appended as frames.
    #[must_use]
    pub fn during(mut self, operation: impl Into<String>, subject: impl Into<String>) -> Self {
        let operation = operation.into();
        let subject = subject.into();
        self.context = Some(match self.context.take() {
            None => ErrorContext::new()
                .with_operation(operation)
                .with_subject(subject),
            Some(ctx) => ctx.with_frame(format!("{operation} {subject:?}")),
        });
        self
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation(message.into()))
    }

    /// Creates a club not found error.
    #[must_use]
    pub fn club_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound(Subject::Club(name.into())))
    }

    /// Creates a player not found error.
    #[must_use]
    pub fn player_not_found(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound(Subject::Player(name.into())))
    }

    /// Creates a duplicate club error.
    #[must_use]
    pub fn club_exists(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyExists(Subject::Club(name.into())))
    }

    /// Creates a duplicate player error naming the club that already holds it.
    #[must_use]
    pub fn player_exists(player: impl Into<String>, club: impl Into<String>) -> Self {
        Self::new(ErrorKind::AlreadyExists(Subject::PlayerInClub {
            player: player.into(),
            club: club.into(),
        }))
    }

    /// Creates a partial move error.
    ///
    /// The player was placed in `to` but could not be detached from `from`.
    #[must_use]
    pub fn partial_move(
        player: impl Into<String>,
        from: impl Into<String>,
        to: impl Into<String>,
        cause: Error,
    ) -> Self {
        Self::new(ErrorKind::PartialMove {
            player: player.into(),
            from: from.into(),
            to: to.into(),
            cause: Box::new(cause),
        })
    }

    /// Creates a remote-store adapter error.
    #[must_use]
    pub fn adapter(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Adapter(message.into()))
    }

    /// Creates an I/O error.
    #[must_use]
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Io(message.into()))
    }

    /// Creates a decode error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Decode(message.into()))
    }

    /// Creates an encode error.
    #[must_use]
    pub fn encode(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Encode(message.into()))
    }

    /// Returns true if the error is a `NotFound` of any subject.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self.kind, ErrorKind::NotFound(_))
    }

    /// Returns true if the error rejects a command without harming state.
    ///
    /// Validation, not-found, and duplicate errors are rejections. Everything
    /// else (adapter, I/O, codec, partial application) is fatal to a front end.
    #[must_use]
    pub fn is_rejection(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::Validation(_) | ErrorKind::NotFound(_) | ErrorKind::AlreadyExists(_)
        )
    }
}

/// The entity an error is about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Subject {
    /// A club, by name.
    Club(String),
    /// A player, by name.
    Player(String),
    /// A player within a specific club.
    PlayerInClub {
        /// The player name.
        player: String,
        /// The club holding the player.
        club: String,
    },
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Club(name) => write!(f, "club {name:?}"),
            Self::Player(name) => write!(f, "player {name:?}"),
            Self::PlayerInClub { player, club } => {
                write!(f, "player {player:?} in club {club:?}")
            }
        }
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A required value was missing or malformed.
    #[error("validation error: {0}")]
    Validation(String),

    /// The club or player does not exist.
    #[error("{0} not found")]
    NotFound(Subject),

    /// The club or player name is already taken.
    #[error("{0} already exists")]
    AlreadyExists(Subject),

    /// A move placed the player in its new club but did not finish.
    #[error("partial move: player {player:?} added to {to:?} but still in {from:?}: {cause}")]
    PartialMove {
        /// The player being moved.
        player: String,
        /// The source club.
        from: String,
        /// The destination club.
        to: String,
        /// Why the second phase failed.
        cause: Box<Error>,
    },

    /// The remote store failed.
    #[error("adapter error: {0}")]
    Adapter(String),

    /// Reading or writing a file failed.
    #[error("io error: {0}")]
    Io(String),

    /// Input could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Output could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorContext {
    /// The operation that failed (e.g. "move player").
    pub operation: Option<String>,
    /// The identifier the operation was applied to.
    pub subject: Option<String>,
    /// Enclosing operations, innermost first.
    pub frames: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the operation name.
    #[must_use]
    pub fn with_operation(mut self, operation: impl Into<String>) -> Self {
        self.operation = Some(operation.into());
        self
    }

    /// Sets the subject identifier.
    #[must_use]
    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    /// Adds an enclosing frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.frames.push(frame.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.operation, &self.subject) {
            (Some(op), Some(subject)) => write!(f, "during {op} {subject:?}")?,
            (Some(op), None) => write!(f, "during {op}")?,
            (None, Some(subject)) => write!(f, "for {subject:?}")?,
            (None, None) => {}
        }
        for frame in &self.frames {
            write!(f, ", in {frame}")?;
        }
        Ok(())
    }
}
