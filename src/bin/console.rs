//! Console Tic-Tac-Toe
//!
//! Reads moves as `row col` (zero-based) from stdin. Commands: `undo`,
//! `new`, `quit`.

use std::error::Error;
use std::io::{self, BufRead, Write};

use clap::Parser;
use tictactoe::config::Cli;
use tictactoe::game::{parse_move, GameSession};
use tictactoe::Outcome;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();
    let mut session = cli.session();

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        while session.is_ai_turn() {
            let comparison = session.ai_move()?;
            if let Some(pos) = comparison.pruned.best_move {
                println!("AI plays {}", pos);
            }
            println!(
                "nodes with pruning: {}, without pruning: {}",
                comparison.pruned.nodes, comparison.unpruned.nodes
            );
        }

        println!("\n{}\n", session.board());

        if session.is_over() {
            match session.outcome() {
                Outcome::Won(winner) => println!("{} wins!", winner),
                _ => println!("It's a tie."),
            }
            print!("Play again? [y/N] ");
            io::stdout().flush()?;
            let again = match lines.next() {
                Some(answer) => answer?.trim().eq_ignore_ascii_case("y"),
                None => false,
            };
            if !again {
                return Ok(());
            }
            session.reset();
            continue;
        }

        print!("{} to move (row col): ", session.current_turn());
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            return Ok(());
        };
        let line = line?;

        match line.trim() {
            "quit" | "q" => return Ok(()),
            "undo" | "u" => report(session.undo()),
            "new" | "n" => session.reset(),
            input => report(play(&mut session, input)),
        }
    }
}

fn play(session: &mut GameSession, input: &str) -> tictactoe::error::Result<()> {
    let pos = parse_move(input, session.board().size())?;
    session.try_place(pos)?;
    Ok(())
}

fn report(result: tictactoe::error::Result<()>) {
    if let Err(e) = result {
        println!("{}", e);
    }
}
