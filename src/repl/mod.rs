//! REPL Module
//!
//! The interactive loop: prompt, parse, dispatch, print. Command errors are
//! printed and the loop keeps going; only `exit` or end of input leaves it.

mod command;
mod handlers;

pub use command::Command;
pub use handlers::AppState;

use std::io::Write;

use tokio::io::{AsyncBufReadExt, BufReader};

use crate::error::Result;

/// Runs the interactive loop until `exit` or end of input.
pub async fn run(state: &mut AppState) -> Result<()> {
    let stdin = tokio::io::stdin();
    let mut lines = BufReader::new(stdin).lines();

    loop {
        print!("pokedex > ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match Command::parse(&line) {
            Ok(Some(Command::Exit)) => break,
            Ok(Some(command)) => match state.handle(command).await {
                Ok(text) => print!("{}", text),
                Err(err) => println!("{}", err),
            },
            Ok(None) => {}
            Err(err) => println!("{}", err),
        }
    }

    Ok(())
}
