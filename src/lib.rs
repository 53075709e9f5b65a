//! Oracle Escrow Lab
//!
//! An escrow spending policy for a UTXO chain: four conditional spend paths,
//! each requiring a spender transaction signature plus an independent oracle
//! "stamp" signature, verified against identity hashes fixed at escrow
//! creation. The stamp is a detached ECDSA signature over the escrow's
//! `nonce || action` message, so it binds a named party's approval to one
//! escrow instance and one action, independent of how the spending
//! transaction is built.

pub mod action;
pub mod error;
pub mod escrow;
pub mod hash;
pub mod policy;
pub mod stamp;
pub mod tx;

pub use action::{Action, Role};
pub use error::{AuthError, EscrowError};
pub use escrow::{EscrowBuilder, EscrowParams};
pub use policy::{evaluate, SpendRequest};
pub use stamp::{sign_stamp, stamp_message, verify_stamp};

use rand::thread_rng;
use secp256k1::{Keypair, PublicKey};

/// Generate a new keypair. Returns the keypair and its public key; hash the
/// key with [`hash::pubkey_hash`] to bind it into an escrow.
pub fn generate_keypair() -> (Keypair, PublicKey) {
    let kp = Keypair::new(secp256k1::SECP256K1, &mut thread_rng());
    let pk = kp.public_key();
    (kp, pk)
}

pub fn print_header(title: &str) {
    println!("\n=== {} ===\n", title);
}

pub fn print_step(num: usize, description: &str) {
    println!("Step {}: {}", num, description);
}

pub fn print_result(label: &str, result: &Result<(), AuthError>) {
    match result {
        Ok(()) => println!("  [{}] PASS", label),
        Err(e) => println!("  [{}] FAIL as expected: {}", label, e),
    }
}
