//! Command-line arguments.
//!
//! `clubroll ACTION RESOURCE` with flags supplying the arguments runs one
//! command; with no positional arguments the REPL starts.

use std::path::PathBuf;

use clap::Parser;
use clubroll_foundation::{Error, Location, Result};
use clubroll_storage::{Club, Player};

use crate::command::{Action, Command, Resource};
use crate::config::{DEFAULT_DATA_PATH, RuntimeConfig};

/// Manage club rosters from the command line.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "clubroll", version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
pub struct Cli {
    /// Location of the club snapshot file.
    #[arg(short, long, env = "CLUBROLL_DATA", default_value = DEFAULT_DATA_PATH)]
    pub data: PathBuf,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// Name of the club, or the player's current club.
    #[arg(short, long, default_value = "")]
    pub club: String,

    /// Name of the player's new club.
    #[arg(short = 'm', long, default_value = "")]
    pub new_club: String,

    /// Name of the player.
    #[arg(short, long, default_value = "")]
    pub name: String,

    /// Player level.
    #[arg(short, long, default_value_t = 0)]
    pub level: i32,

    /// X position.
    #[arg(short = 'x', long, default_value_t = 0)]
    pub pos_x: i32,

    /// Y position.
    #[arg(short = 'y', long, default_value_t = 0)]
    pub pos_y: i32,

    /// Import player records from a CSV file.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// What to do: get, add, update, remove, move, list, import.
    pub action: Option<String>,

    /// What to do it to: club or player.
    pub resource: Option<String>,
}

impl Cli {
    /// Returns the runtime configuration these flags describe.
    #[must_use]
    pub fn config(&self) -> RuntimeConfig {
        RuntimeConfig::at(&self.data).with_verbose(self.verbose)
    }

    /// Returns the command these flags describe, or `None` for the REPL.
    ///
    /// # Errors
    ///
    /// Returns a validation error if only one positional argument is given or
    /// the pair does not name a command.
    pub fn command(&self) -> Result<Option<Command>> {
        let (action, resource) = match (&self.action, &self.resource) {
            (None, None) => return Ok(None),
            (Some(action), Some(resource)) => {
                (action.parse::<Action>()?, resource.parse::<Resource>()?)
            }
            _ => return Err(Error::validation("missing required command & subcommand")),
        };
        self.build(action, resource).map(Some)
    }

    fn build(&self, action: Action, resource: Resource) -> Result<Command> {
        if let (Resource::Player, Action::Add | Action::Update | Action::Import, Some(path)) =
            (resource, action, &self.csv)
        {
            return Ok(Command::ImportPlayers(path.clone()));
        }

        match (resource, action) {
            (Resource::Club, Action::Get) => Ok(Command::GetClub(self.club.clone())),
            (Resource::Club, Action::Add) => Ok(Command::AddClub(Club::from_args(
                self.club.clone(),
                self.pos_x,
                self.pos_y,
            ))),
            (Resource::Club, Action::Update) => Ok(Command::UpdateClub(
                Club::new(self.club.clone()).with_location(Location::new(self.pos_x, self.pos_y)),
            )),
            (Resource::Club, Action::Remove) => Ok(Command::RemoveClub(self.club.clone())),
            (Resource::Club, Action::List) => Ok(Command::ListClubs),
            (Resource::Player, Action::Get) => Ok(Command::GetPlayer(self.name.clone())),
            (Resource::Player, Action::Add) => Ok(Command::AddPlayer(self.player())),
            (Resource::Player, Action::Update) => Ok(Command::UpdatePlayer(self.player())),
            (Resource::Player, Action::Remove) => Ok(Command::RemovePlayer(self.name.clone())),
            (Resource::Player, Action::Move) => Ok(Command::MovePlayer {
                name: self.name.clone(),
                club: self.new_club.clone(),
            }),
            (Resource::Player, Action::Import) => {
                Err(Error::validation("import needs a file: pass --csv PATH"))
            }
            (_, action) => Err(Error::validation(format!(
                "unknown {resource} action {:?} found",
                action.as_str()
            ))),
        }
    }

    fn player(&self) -> Player {
        Player::from_args(
            self.name.clone(),
            self.club.clone(),
            self.level,
            self.pos_x,
            self.pos_y,
        )
    }
}
