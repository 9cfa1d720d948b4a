use colored::Colorize;
use dialoguer::Input;

use crate::cli::{add, lookup, results};
use crate::error::{CgpaError, Result};
use crate::store::RecordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddResult,
    ViewResults,
    CheckCgpa,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::AddResult),
            "2" => Some(Self::ViewResults),
            "3" => Some(Self::CheckCgpa),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

fn print_menu() {
    let rule = "\u{2550}".repeat(34);
    println!();
    println!("{rule}");
    println!("  {}", "CGPA Management".bold());
    println!("{rule}");
    println!("  1  Add new semester result");
    println!("  2  View all results");
    println!("  3  Check student CGPA");
    println!("  4  Exit");
    println!("{rule}");
}

/// Interactive menu loop. A failed action is reported and the loop carries on;
/// only a broken terminal ends it early.
pub fn run(store: &RecordStore) -> Result<()> {
    loop {
        print_menu();
        let input: String = Input::new()
            .with_prompt("Choose an option (1-4)")
            .allow_empty(true)
            .interact_text()?;

        let Some(choice) = MenuChoice::parse(&input) else {
            println!("{}", "Invalid choice. Please enter 1-4.".red());
            continue;
        };

        let outcome = match choice {
            MenuChoice::AddResult => add::run(store),
            MenuChoice::ViewResults => results::run(store, None),
            MenuChoice::CheckCgpa => lookup::prompt(store),
            MenuChoice::Exit => {
                println!("\nGoodbye.");
                return Ok(());
            }
        };

        match outcome {
            Ok(()) => {}
            Err(e @ CgpaError::Prompt(_)) => return Err(e),
            Err(e) => println!("{}", format!("Error: {e}").red()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddResult));
        assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::ViewResults));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::CheckCgpa));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Exit));
    }

    #[test]
    fn test_invalid_menu_input() {
        assert_eq!(MenuChoice::parse(""), None);
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse("one"), None);
    }
}
