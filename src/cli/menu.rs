// src/cli/menu.rs
use inquire::{InquireError, Select, Text};
use std::error::Error;
use std::fmt;
use std::time::Duration;

use crate::clipboard::SystemClipboard;
use crate::core::config::Config;
use crate::core::GeneratorSession;
use crate::generators::build_rng;
use crate::models::{MAX_LENGTH, MIN_LENGTH};
use crate::utils::on_off;
use super::handlers::render_view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Regenerate,
    SetLength,
    ToggleNumbers(bool),
    ToggleSymbols(bool),
    Copy,
    Exit,
}

impl fmt::Display for MenuAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuAction::Regenerate => write!(f, "🔁  Generate new password"),
            MenuAction::SetLength => write!(f, "📏  Set length ({}-{})", MIN_LENGTH, MAX_LENGTH),
            MenuAction::ToggleNumbers(on) => write!(f, "🔢  Include numbers (0-9): {}", on_off(*on)),
            MenuAction::ToggleSymbols(on) => write!(f, "🔣  Include symbols (@#$%): {}", on_off(*on)),
            MenuAction::Copy => write!(f, "📋  Copy to clipboard"),
            MenuAction::Exit => write!(f, "❌  Exit"),
        }
    }
}

fn parse_length(input: &str) -> Option<usize> {
    input.trim().parse().ok()
}

// The menu only redraws after a choice, so the indicator can outlive the delay on screen
fn copy_notice(reset: Duration) -> String {
    format!(
        "✅ Copied to clipboard (indicator clears after {} ms, shown on next redraw)",
        reset.as_millis()
    )
}

pub fn run_cli_menu(config: &Config, seed: Option<u64>) -> Result<(), Box<dyn Error>> {
    println!("╔══════════════════════════════════════╗");
    println!("║         🔐 PASSWORD GENERATOR        ║");
    println!("╚══════════════════════════════════════╝");

    let mut session = GeneratorSession::new(config.generation_defaults(), build_rng(seed), config.copy_reset)?;
    let mut clipboard = SystemClipboard::new();

    loop {
        println!();
        println!("{}", render_view(&session.view()));
        println!();

        let current = *session.config();
        let options = vec![
            MenuAction::Regenerate,
            MenuAction::SetLength,
            MenuAction::ToggleNumbers(current.include_numbers),
            MenuAction::ToggleSymbols(current.include_symbols),
            MenuAction::Copy,
            MenuAction::Exit,
        ];

        let choice = match Select::new("What would you like to do?", options).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(Box::new(e)),
        };

        match choice {
            MenuAction::Regenerate => session.regenerate()?,
            MenuAction::SetLength => {
                let input = Text::new(&format!("Password length ({}-{}):", MIN_LENGTH, MAX_LENGTH))
                    .with_default(&current.length.to_string())
                    .prompt()?;

                match parse_length(&input) {
                    Some(length) => {
                        session.set_length(length)?;
                        if session.config().length != length {
                            println!("⚠️ Length must be between {} and {}; using {}", MIN_LENGTH, MAX_LENGTH, session.config().length);
                        }
                    }
                    None => println!("❌ '{}' is not a number", input.trim()),
                }
            }
            MenuAction::ToggleNumbers(_) => session.toggle_numbers()?,
            MenuAction::ToggleSymbols(_) => session.toggle_symbols()?,
            MenuAction::Copy => match session.copy(&mut clipboard) {
                Ok(()) => println!("{}", copy_notice(session.copy_reset())),
                Err(e) => println!("❌ Failed to copy to clipboard: {}", e),
            },
            MenuAction::Exit => break,
        }
    }

    log::info!("Interactive session finished");
    println!("👋 Goodbye!");
    Ok(())
}
