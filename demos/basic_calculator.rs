//! Basic Calculator
//!
//! This example demonstrates the calculator with its accumulated history.
//!
//! Key concepts:
//! - Owned mutable state with exclusive access
//! - Every operation appends its result to the history
//! - History listing via the Display implementation
//!
//! Run with: cargo run --example basic_calculator

use tally::core::Calculator;

fn main() {
    println!("=== Simple Calculator Application ===");

    let mut calc = Calculator::new();

    // Perform some calculations
    let sum = calc.add(15.5, 24.3);
    let product = calc.multiply(7.0, 8.0);
    let difference = calc.subtract(100.0, 25.5);

    // Display results
    println!("\nResults:");
    println!("15.5 + 24.3 = {sum}");
    println!("7.0 * 8.0 = {product}");
    println!("100.0 - 25.5 = {difference}");

    // Show calculation history
    println!();
    print!("{}", calc.history());

    println!("\nTotal calculations performed: {}", calc.history_len());
    println!("Application completed successfully!");
}
