//! Advanced Calculator
//!
//! This example exercises the full calculator surface: the four arithmetic
//! operations, the pure math utilities, direct history access, and error
//! handling for a zero divisor.
//!
//! Key concepts:
//! - Errors are caught and reported at the boundary; the core never prints
//! - A failed divide leaves the history untouched
//! - Clearing the history is idempotent
//!
//! Run with: cargo run --example advanced_calculator

use std::error::Error;
use tally::core::Calculator;
use tally::math;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Advanced Calculator Application ===");

    let mut calc = Calculator::new();

    // Perform basic calculations
    let sum = calc.add(15.5, 24.3);
    let product = calc.multiply(7.0, 8.0);
    let difference = calc.subtract(100.0, 25.5);
    let quotient = calc.divide(84.0, 12.0)?;

    // Display basic results
    println!("\nBasic Arithmetic Results:");
    println!("15.5 + 24.3 = {sum}");
    println!("7.0 * 8.0 = {product}");
    println!("100.0 - 25.5 = {difference}");
    println!("84.0 / 12.0 = {quotient}");

    // Advanced math operations
    println!("\nAdvanced Math Operations:");
    println!("2^10 = {}", math::power(2.0, 10));
    println!("sqrt(64) = {}", math::square_root(64.0)?);
    println!("5! = {}", math::factorial(5)?);
    println!(
        "Is 17 prime? {}",
        if math::is_prime(17) { "Yes" } else { "No" }
    );

    // Sequence operations
    let numbers = [2.5, 8.1, 3.7, 9.2, 1.4, 6.8];
    println!("\nSequence Operations on {numbers:?}:");
    println!("Average: {}", math::average(&numbers)?);
    println!("Maximum: {}", math::maximum(&numbers)?);
    println!("Minimum: {}", math::minimum(&numbers)?);

    // Show calculation history
    println!();
    print!("{}", calc.history());

    println!("\nTotal calculations performed: {}", calc.history_len());

    // Access the recorded results directly
    let results = calc.history().results();
    println!("\nAccessing calculation history directly:");
    println!(
        "History contains {} results: {}",
        results.len(),
        results
            .iter()
            .map(|r| r.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    // Demonstrate error handling
    println!("\nTesting Error Handling:");
    match calc.divide(10.0, 0.0) {
        Ok(_) => println!("Unexpected success"),
        Err(err) => println!("Caught expected error: {err}"),
    }

    // Clear the history
    println!("\nClearing calculation history...");
    calc.clear_history();
    println!("History size after clearing: {}", calc.history_len());

    println!("\nApplication completed successfully!");
    Ok(())
}
