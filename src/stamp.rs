//! Oracle stamps: detached ECDSA signatures over an application message.
//!
//! A stamp is not a signature over any transaction. It attests that a named
//! party authorizes one specific action for one specific escrow, and can be
//! produced off-chain in advance and combined later with any valid spender
//! signature. The message is `nonce || action_code`, which binds the stamp to
//! both the escrow instance and the action; a stamp cannot be replayed across
//! escrows or across actions within one escrow.

use secp256k1::{ecdsa, Keypair, Message, PublicKey, SECP256K1};

use crate::action::Action;
use crate::hash::le_digest;

/// The message an oracle stamps: the escrow nonce followed by the action code
/// as exactly one byte. Stamp production and verification must agree on this
/// layout byte for byte.
pub fn stamp_message(nonce: &[u8], action: Action) -> Vec<u8> {
    let mut msg = Vec::with_capacity(nonce.len() + 1);
    msg.extend_from_slice(nonce);
    msg.push(action.code());
    msg
}

/// The 32-byte scalar a stamp signature is made over: the double-hash of the
/// message in the chain's little-endian digest convention.
pub fn stamp_digest(message: &[u8]) -> [u8; 32] {
    le_digest(message)
}

/// Produce a stamp over an arbitrary message.
pub fn sign_stamp(message: &[u8], keypair: &Keypair) -> ecdsa::Signature {
    let msg = Message::from_digest_slice(&stamp_digest(message))
        .expect("stamp digest is always 32 bytes");
    SECP256K1.sign_ecdsa(&msg, &keypair.secret_key())
}

/// Verify a stamp over an arbitrary message. Pure and transaction-independent.
pub fn verify_stamp(message: &[u8], pubkey: &PublicKey, sig: &ecdsa::Signature) -> bool {
    let msg = Message::from_digest_slice(&stamp_digest(message))
        .expect("stamp digest is always 32 bytes");
    SECP256K1.verify_ecdsa(&msg, sig, pubkey).is_ok()
}
