//! The escrow authorization policy: one pass/fail decision per spend request.

use secp256k1::{ecdsa, Message, PublicKey, SECP256K1};

use crate::action::Action;
use crate::error::AuthError;
use crate::escrow::EscrowParams;
use crate::hash::pubkey_hash;
use crate::stamp::{stamp_message, verify_stamp};

/// A transient spend request: created and consumed within a single
/// authorization check, never persisted.
#[derive(Debug, Clone)]
pub struct SpendRequest {
    /// Raw action code as it appears in the spend; codes outside 0..=3 reject.
    pub action_code: u8,
    pub spender_pubkey: PublicKey,
    pub spender_sig: ecdsa::Signature,
    pub oracle_pubkey: PublicKey,
    pub oracle_sig: ecdsa::Signature,
}

/// Decide whether a spend request is authorized against an escrow instance.
///
/// `tx_sighash` is the signature-hash of the enclosing spending transaction,
/// supplied by the transaction layer; the spender signature must cover it.
/// The oracle signature is checked against the escrow's `nonce || action`
/// message instead, so a stamp issued for one (escrow, action) pair never
/// authorizes another.
///
/// Evaluation is a single pass with no partial success: the first failing
/// check rejects the whole spend. It reads the params only, so any number of
/// evaluations may run concurrently against one instance.
pub fn evaluate(
    params: &EscrowParams,
    request: &SpendRequest,
    tx_sighash: &[u8; 32],
) -> Result<(), AuthError> {
    let action =
        Action::from_code(request.action_code).ok_or(AuthError::InvalidAction(request.action_code))?;

    let spender_role = action.spender();
    if &pubkey_hash(&request.spender_pubkey) != params.hash_for(spender_role) {
        return Err(AuthError::SpenderIdentityMismatch {
            action,
            expected: spender_role,
        });
    }

    let oracle_role = action.oracle();
    if &pubkey_hash(&request.oracle_pubkey) != params.hash_for(oracle_role) {
        return Err(AuthError::OracleIdentityMismatch {
            action,
            expected: oracle_role,
        });
    }

    let message = stamp_message(&params.nonce, action);
    if !verify_stamp(&message, &request.oracle_pubkey, &request.oracle_sig) {
        return Err(AuthError::OracleSignatureInvalid);
    }

    let msg = Message::from_digest_slice(tx_sighash).expect("sighash is always 32 bytes");
    SECP256K1
        .verify_ecdsa(&msg, &request.spender_sig, &request.spender_pubkey)
        .map_err(|_| AuthError::SpenderSignatureInvalid)?;

    Ok(())
}
