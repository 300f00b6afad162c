//! The line-oriented command surface.
//!
//! A command is `ACTION RESOURCE [ARGS...]`, separated by whitespace:
//!
//! ```text
//! get club NAME              get player NAME
//! add club NAME [X Y]        add player NAME CLUB [LEVEL [X Y]]
//! update club NAME X Y       update player NAME [CLUB [LEVEL [X Y]]]
//! remove club NAME           remove player NAME
//! list clubs                 move player NAME CLUB
//! import players PATH
//! ```

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use clubroll_foundation::{Error, Location, Result};
use clubroll_storage::{Club, Player};

const USAGE: &str = "invalid command sent. need action and resource. example: `add player`";

/// What a command does.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    /// Read one entity.
    Get,
    /// Create an entity.
    Add,
    /// Merge into an entity.
    Update,
    /// Delete an entity.
    Remove,
    /// Relocate a player.
    Move,
    /// Read every club.
    List,
    /// Bulk-merge players from a file.
    Import,
}

impl Action {
    /// Returns the action's keyword.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Add => "add",
            Self::Update => "update",
            Self::Remove => "remove",
            Self::Move => "move",
            Self::List => "list",
            Self::Import => "import",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(Self::Get),
            "add" => Ok(Self::Add),
            "update" => Ok(Self::Update),
            "remove" => Ok(Self::Remove),
            "move" => Ok(Self::Move),
            "list" => Ok(Self::List),
            "import" => Ok(Self::Import),
            _ => Err(Error::validation(format!("unknown action {s:?} found"))),
        }
    }
}

/// What a command acts on.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Resource {
    /// A single club (`club`) or all of them (`clubs`).
    Club,
    /// A single player (`player`) or a batch (`players`).
    Player,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Club => f.write_str("club"),
            Self::Player => f.write_str("player"),
        }
    }
}

impl FromStr for Resource {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "club" | "clubs" => Ok(Self::Club),
            "player" | "players" => Ok(Self::Player),
            _ => Err(Error::validation(format!(
                "unknown resource {s:?} found. options: club, player"
            ))),
        }
    }
}

/// A parsed command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Show one club.
    GetClub(String),
    /// Create a club.
    AddClub(Club),
    /// Change a club's location.
    UpdateClub(Club),
    /// Delete a club and its players.
    RemoveClub(String),
    /// Show every club.
    ListClubs,
    /// Show one player.
    GetPlayer(String),
    /// Create a player; the patch's `club` names the target club.
    AddPlayer(Player),
    /// Merge into an existing player.
    UpdatePlayer(Player),
    /// Delete a player.
    RemovePlayer(String),
    /// Relocate a player.
    MovePlayer {
        /// Player to move.
        name: String,
        /// Destination club.
        club: String,
    },
    /// Bulk-merge players from a CSV file.
    ImportPlayers(PathBuf),
}

impl Command {
    /// Returns true if running the command can change the roster.
    #[must_use]
    pub fn is_mutation(&self) -> bool {
        !matches!(
            self,
            Self::GetClub(_) | Self::ListClubs | Self::GetPlayer(_)
        )
    }

    /// Returns the command's action.
    #[must_use]
    pub fn action(&self) -> Action {
        match self {
            Self::GetClub(_) | Self::GetPlayer(_) => Action::Get,
            Self::AddClub(_) | Self::AddPlayer(_) => Action::Add,
            Self::UpdateClub(_) | Self::UpdatePlayer(_) => Action::Update,
            Self::RemoveClub(_) | Self::RemovePlayer(_) => Action::Remove,
            Self::MovePlayer { .. } => Action::Move,
            Self::ListClubs => Action::List,
            Self::ImportPlayers(_) => Action::Import,
        }
    }

    /// Builds a command from an action, a resource, and positional arguments.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the pair is not a command, a required
    /// argument is missing, or a numeric argument does not parse.
    pub fn from_parts(action: Action, resource: Resource, args: &[&str]) -> Result<Self> {
        let args = Args(args);
        match (resource, action) {
            (Resource::Club, Action::Get) => Ok(Self::GetClub(args.required(0, "name")?)),
            (Resource::Club, Action::Add) => {
                let name = args.required(0, "name")?;
                let (x, y) = args.coordinates(1)?.unwrap_or_default();
                Ok(Self::AddClub(Club::from_args(name, x, y)))
            }
            (Resource::Club, Action::Update) => {
                let mut club = Club::new(args.required(0, "name")?);
                club.location = args
                    .coordinates(1)?
                    .map(|(x, y)| Location::new(x, y));
                Ok(Self::UpdateClub(club))
            }
            (Resource::Club, Action::Remove) => Ok(Self::RemoveClub(args.required(0, "name")?)),
            (Resource::Club, Action::List) => Ok(Self::ListClubs),
            (Resource::Player, Action::Get) => Ok(Self::GetPlayer(args.required(0, "name")?)),
            (Resource::Player, Action::Add) => {
                let player = args.player()?;
                if player.club.is_empty() {
                    return Err(Error::validation("missing argument: club"));
                }
                Ok(Self::AddPlayer(player))
            }
            (Resource::Player, Action::Update) => Ok(Self::UpdatePlayer(args.player()?)),
            (Resource::Player, Action::Remove) => {
                Ok(Self::RemovePlayer(args.required(0, "name")?))
            }
            (Resource::Player, Action::Move) => Ok(Self::MovePlayer {
                name: args.required(0, "name")?,
                club: args.required(1, "club")?,
            }),
            (Resource::Player, Action::Import) => {
                Ok(Self::ImportPlayers(PathBuf::from(args.required(0, "path")?)))
            }
            (Resource::Club, _) => Err(Error::validation(format!(
                "unknown club action {:?} found. options: get, add, update, remove, list",
                action.as_str()
            ))),
            (Resource::Player, _) => Err(Error::validation(format!(
                "unknown player action {:?} found. options: get, add, update, remove, move, import",
                action.as_str()
            ))),
        }
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse(s)
    }
}

/// Parses one command line.
///
/// # Errors
///
/// Returns a validation error describing the first problem found.
pub fn parse(line: &str) -> Result<Command> {
    let words: Vec<&str> = line.split_whitespace().collect();
    let [action, resource, args @ ..] = words.as_slice() else {
        return Err(Error::validation(USAGE));
    };
    Command::from_parts(action.parse::<Action>()?, resource.parse::<Resource>()?, args)
}

/// Positional arguments after the resource.
struct Args<'a>(&'a [&'a str]);

impl Args<'_> {
    fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).copied()
    }

    fn required(&self, index: usize, arg: &str) -> Result<String> {
        self.get(index)
            .map(str::to_string)
            .ok_or_else(|| Error::validation(format!("missing argument: {arg}")))
    }

    fn number(&self, index: usize, arg: &str) -> Result<Option<i32>> {
        self.get(index).map(|value| parse_number(value, arg)).transpose()
    }

    /// Reads an `X Y` pair; both or neither must be present.
    fn coordinates(&self, index: usize) -> Result<Option<(i32, i32)>> {
        match (self.number(index, "x")?, self.number(index + 1, "y")?) {
            (Some(x), Some(y)) => Ok(Some((x, y))),
            (None, None) => Ok(None),
            _ => Err(Error::validation("missing argument: y")),
        }
    }

    /// Reads `NAME [CLUB [LEVEL [X Y]]]`.
    fn player(&self) -> Result<Player> {
        let name = self.required(0, "name")?;
        let club = self.get(1).unwrap_or_default();
        let level = self.number(2, "level")?.unwrap_or_default();
        let (x, y) = self.coordinates(3)?.unwrap_or_default();
        Ok(Player::from_args(name, club, level, x, y))
    }
}

/// Parses a numeric command argument.
///
/// # Errors
///
/// Returns a validation error naming the argument and its value.
pub fn parse_number(value: &str, arg: &str) -> Result<i32> {
    value.parse().map_err(|_| {
        Error::validation(format!("argument for {arg}: {value:?} is not a valid number"))
    })
}
