//! Simple interactive CLI mode
//!
//! Reads `start end` pairs line by line and prints a ladder for each.

use super::{SolveConfig, solve_ladder};
use crate::output::{print_ladder_error, print_solve_result};
use std::io::{self, BufRead, Write};

/// Run the interactive prompt until `quit` or end of input
///
/// Returns the number of ladders found.
///
/// # Errors
///
/// Returns an error if reading input or flushing the prompt fails.
pub fn run_simple<S: AsRef<str>, R: BufRead>(dictionary: &[S], mut input: R) -> io::Result<usize> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                Word Ladder - Interactive Mode                ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Enter two words of the same length, e.g. 'cold warm'.");
    println!("Commands: 'help' for this message, 'quit' to exit\n");

    let mut solved = 0;
    let mut line = String::new();

    loop {
        print!("ladder> ");
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            break;
        }

        match parse_line(&line) {
            Prompt::Empty => {}
            Prompt::Quit => break,
            Prompt::Help => {
                println!("Type a start word and an end word separated by a space.");
                println!("Both words must be in the dictionary and have the same length.\n");
            }
            Prompt::Invalid => {
                println!("❌ Expected exactly two words, e.g. 'cat dog'\n");
            }
            Prompt::Pair(start, end) => {
                match solve_ladder(&SolveConfig::new(start, end), dictionary) {
                    Ok(result) => {
                        solved += 1;
                        print_solve_result(&result, false);
                    }
                    Err(e) => print_ladder_error(&e),
                }
                println!();
            }
        }
    }

    println!("👋 Solved {solved} ladder{}", if solved == 1 { "" } else { "s" });
    Ok(solved)
}

/// A parsed prompt line
#[derive(Debug, PartialEq, Eq)]
enum Prompt<'a> {
    Empty,
    Quit,
    Help,
    Pair(&'a str, &'a str),
    Invalid,
}

fn parse_line(line: &str) -> Prompt<'_> {
    let tokens: Vec<&str> = line.split_whitespace().collect();

    match tokens.as_slice() {
        [] => Prompt::Empty,
        [cmd] if matches!(cmd.to_lowercase().as_str(), "quit" | "q" | "exit") => Prompt::Quit,
        [cmd] if matches!(cmd.to_lowercase().as_str(), "help" | "h" | "?") => Prompt::Help,
        [start, end] => Prompt::Pair(*start, *end),
        _ => Prompt::Invalid,
    }
}
