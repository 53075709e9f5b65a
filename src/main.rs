//! Oracle Escrow Lab
//!
//! Experimental project for learning oracle-stamped escrow policies on a
//! UTXO chain.
//!
//! ## Goals
//! - Understand the four-path conditional spend policy (release/return, with
//!   and without an arbiter)
//! - Experiment with detached oracle stamps bound to a (nonce, action) pair
//! - Exercise the authorization evaluator against local mock transactions
//!
//! ## Running the demo
//! ```bash
//! cargo run --bin demo
//! ```

fn main() {
    println!("Oracle Escrow Lab");
    println!("=================");
    println!();
    println!("Run the demo to walk through the four spend paths:");
    println!("  cargo run --bin demo");
}
