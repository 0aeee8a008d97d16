//! # Dutchpay CLI Application
//!
//! Terminal front end for the bill-splitting calculator. Prompts for the two
//! inputs, normalizes them the same way the GUI does, and prints the split
//! alongside a JSON payload.

use std::io::{self, BufRead, Write};

use split_core::split::{
    calculate, normalize_amount, normalize_people, SplitInput, DEFAULT_PEOPLE_COUNT,
};

fn prompt_line(prompt: &str) -> String {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return String::new();
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return String::new();
    }

    input
}

fn main() {
    println!("Dutchpay CLI - Bill Split Calculator");
    println!("====================================");
    println!();

    let amount_raw = prompt_line("Enter total amount (won) [0]: ");
    let people_raw = prompt_line("Enter number of people [2]: ");

    let input = SplitInput {
        total_amount: normalize_amount(&amount_raw),
        people_count: if people_raw.trim().is_empty() {
            DEFAULT_PEOPLE_COUNT
        } else {
            normalize_people(&people_raw)
        },
    };

    match calculate(&input) {
        Ok(outcome) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  BILL SPLIT RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("Input:");
            println!("  Total:  {}", input.total_amount);
            println!("  People: {}", input.people_count);
            println!();
            println!("Each person pays: {}", outcome.per_person);
            if outcome.has_remainder() {
                println!(
                    "Rounded up by:    +{} ({} collected)",
                    outcome.remainder, outcome.collected_total
                );
            }
            println!();
            println!("═══════════════════════════════════════");

            println!();
            println!("JSON Output (for LLM/API use):");
            if let Ok(json) = serde_json::to_string_pretty(&outcome) {
                println!("{}", json);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            if let Ok(json) = serde_json::to_string_pretty(&e) {
                eprintln!();
                eprintln!("Error JSON:");
                eprintln!("{}", json);
            }
        }
    }
}
