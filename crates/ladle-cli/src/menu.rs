//! Interactive menu controller
//!
//! One blocking read-eval loop: display the menu, dispatch one operation
//! to completion, repeat until exit.

use std::io::BufRead;

use ladle_storage::RecipeStore;

use crate::commands;
use crate::output::LINE;
use crate::prompt::read_line;

fn print_menu() {
    println!("{LINE}");
    println!("Welcome to Recipes!");
    println!("What would you like to do?");
    println!("{LINE}");
    println!("1. Create a new recipe");
    println!("2. View all recipes");
    println!("3. Search for a recipe by ingredient");
    println!("4. Edit an existing recipe");
    println!("5. Delete an existing recipe");
    println!("6. Exit");
    println!("{LINE}");
}

/// Run the menu loop until exit or EOF.
pub async fn run<R: BufRead>(input: &mut R, store: &dyn RecipeStore) -> anyhow::Result<()> {
    loop {
        print_menu();
        let selection = match read_line(input, "Please type a number to select an action: ")? {
            Some(s) => s,
            // EOF on the menu prompt behaves as exit
            None => break,
        };

        let outcome = match selection.as_str() {
            "1" => commands::create::run(input, store).await,
            "2" => commands::list::run(store).await,
            "3" => commands::search::run(input, store).await,
            "4" => commands::edit::run(input, store).await,
            "5" => commands::delete::run(input, store).await,
            "6" => {
                println!("\nExiting Recipes.");
                break;
            }
            _ => {
                println!("\nInvalid entry, please type a number between 1 and 6.\n");
                continue;
            }
        };

        // Store and IO failures inside an operation are recoverable:
        // report them and return to the menu.
        if let Err(e) = outcome {
            tracing::warn!("Operation failed: {e:#}");
            println!("Error: {e:#}");
        }
    }

    store.close().await?;
    Ok(())
}
