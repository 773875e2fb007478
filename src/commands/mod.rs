// Command table of the interactive prompt. Every command writes its output
// to the writer it is given, so the REPL and the tests share the same paths.

mod catch;
mod explore;
mod help;
mod map;
mod pokedex;
pub mod session;

pub use catch::{CHANCE_RANGE, MAX_DIFFICULTY, MIN_DIFFICULTY, difficulty_span, is_caught};
pub use help::render_help;
pub use session::Session;

use std::io::{self, Write};

use crate::client::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore,
    Catch,
    Inspect,
    Pokedex,
}

/// Whether the prompt keeps reading after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("missing {0}")]
    MissingArgument(&'static str),

    #[error("no {kind} named {name}")]
    NotFound { kind: &'static str, name: String },

    #[error("could not reach PokeAPI, try again later ({0})")]
    Api(#[from] ApiError),

    #[error("you need to catch {0} before inspecting it")]
    NotCaught(String),

    #[error("you haven't caught any pokemon yet")]
    EmptyPokedex,

    #[error("could not write output: {0}")]
    Io(#[from] io::Error),
}

impl Command {
    pub const ALL: [Command; 8] = [
        Command::Catch,
        Command::Exit,
        Command::Explore,
        Command::Help,
        Command::Inspect,
        Command::Map,
        Command::MapBack,
        Command::Pokedex,
    ];

    pub fn parse(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|command| command.name() == word)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Map => "map",
            Command::MapBack => "mapb",
            Command::Explore => "explore",
            Command::Catch => "catch",
            Command::Inspect => "inspect",
            Command::Pokedex => "pokedex",
        }
    }

    pub fn usage(&self) -> &'static str {
        match self {
            Command::Explore => "explore <area_name>",
            Command::Catch => "catch <pokemon_name>",
            Command::Inspect => "inspect <pokemon_name>",
            other => other.name(),
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Command::Help => "Displays a help message",
            Command::Exit => "Exit the Pokedex",
            Command::Map => {
                "Displays the names of the next 20 location areas, each call moves one page forward"
            }
            Command::MapBack => "Displays the previous 20 location areas",
            Command::Explore => "Lists the pokemon that can be found in a location area",
            Command::Catch => "Throws a Pokeball at a pokemon",
            Command::Inspect => "Shows the details of a pokemon you have caught",
            Command::Pokedex => "Lists the pokemon you have caught",
        }
    }
}

/// Runs one command against the session.
#[tracing::instrument(level = "debug", name = "Command", skip(session, out))]
pub async fn execute<W: Write>(
    session: &mut Session,
    command: Command,
    args: &[&str],
    out: &mut W,
) -> Result<Flow, CommandError> {
    match command {
        Command::Help => help::help(out)?,
        Command::Exit => return help::exit(out),
        Command::Map => map::map(session, out).await?,
        Command::MapBack => map::map_back(session, out).await?,
        Command::Explore => {
            explore::explore(session, required(args, "location area name")?, out).await?
        }
        Command::Catch => catch::catch(session, required(args, "pokemon name")?, out).await?,
        Command::Inspect => pokedex::inspect(session, required(args, "pokemon name")?, out)?,
        Command::Pokedex => pokedex::pokedex(session, out)?,
    }

    Ok(Flow::Continue)
}

fn required<'a>(args: &[&'a str], what: &'static str) -> Result<&'a str, CommandError> {
    args.first().copied().ok_or(CommandError::MissingArgument(what))
}

// A 404 from PokeAPI means the user typed a name that does not exist.
fn not_found(kind: &'static str, name: &str) -> impl FnOnce(ApiError) -> CommandError {
    let name = name.to_string();
    move |err| {
        if err.is_not_found() {
            CommandError::NotFound { kind, name }
        } else {
            CommandError::Api(err)
        }
    }
}
