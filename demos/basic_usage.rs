// ============================================================================
// Basic Usage Example
// ============================================================================

use pi_approximator::prelude::*;
use std::sync::Arc;

fn main() {
    println!("=== Pi Approximator Example ===\n");

    // One-call greedy search from the digits "3" / "1"
    let greedy = approximate(3u32, 1u32, 8).unwrap();
    println!("Greedy (8 digits):    {} error {:e}", greedy, greedy.error());

    // Lookahead search, recording every committed digit
    let handler = Arc::new(RecordingEventHandler::new());
    let approximator = ApproximatorBuilder::new()
        .lookahead(3)
        .build(handler.clone())
        .unwrap();

    let lookahead = approximator.approximate(3u32, 1u32, 8).unwrap();
    println!("Lookahead (8 digits): {} error {:e}", lookahead, lookahead.error());

    println!("\n=== Committed Steps ===");
    for (regime, fraction) in handler.committed_steps() {
        println!(
            "  {:<10} {:>20}  ratio {}",
            regime.to_string(),
            fraction.to_string(),
            fraction.ratio()
        );
    }

    // A start far below pi grows the numerator first
    println!("\n=== Starting From 1/999 ===");
    let small = approximate(1u32, 999u32, 6).unwrap();
    println!("{} (ratio {})", small, small.ratio());

    // Invalid input is reported, never panics
    println!("\n=== Invalid Input ===");
    match approximate(3u32, 0u32, 5) {
        Ok(fraction) => println!("unexpected: {}", fraction),
        Err(e) => println!("rejected: {}", e),
    }
}
