//! Command parsing for the interactive loop.

use crate::error::{PokedexError, Result};

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    Exit,
    Map,
    MapBack,
    Explore(String),
    Catch(String),
    Inspect(String),
    Pokedex,
    Cache,
}

impl Command {
    /// Parses one input line.
    ///
    /// A blank line is `Ok(None)`, no command at all. Unknown verbs and
    /// missing arguments are errors the loop reports before prompting again.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Ok(None);
        };
        let arg = words.next();

        let command = match verb {
            "help" => Command::Help,
            "exit" => Command::Exit,
            "map" => Command::Map,
            "mapb" => Command::MapBack,
            "explore" => Command::Explore(required(arg, "explore <location-area>")?),
            "catch" => Command::Catch(required(arg, "catch <pokemon>")?),
            "inspect" => Command::Inspect(required(arg, "inspect <pokemon>")?),
            "pokedex" => Command::Pokedex,
            "cache" => Command::Cache,
            other => return Err(PokedexError::UnknownCommand(other.to_string())),
        };

        Ok(Some(command))
    }
}

fn required(arg: Option<&str>, usage: &'static str) -> Result<String> {
    arg.map(str::to_string)
        .ok_or(PokedexError::MissingArgument(usage))
}
