//! Minimal spending-transaction model for local verification.
//!
//! The policy needs a transaction signature-hash for its spender check, and
//! tests and demos need to produce one without a node. This is a single-input
//! mock: enough structure to make the sighash depend on every field the
//! spender commits to, and nothing more. Live-chain transaction construction
//! is a separate concern and lives outside this crate.

use secp256k1::{ecdsa, Keypair, Message, PublicKey, SECP256K1};

use crate::hash::hash256;

/// SIGHASH_ALL with the chain's fork id bit set.
pub const SIG_HASH_ALL_FORKID: u8 = 0x41;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionOutpoint {
    pub transaction_id: [u8; 32],
    pub index: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionOutput {
    pub value: u64,
    pub script_public_key: Vec<u8>,
}

/// A single-input spending transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpendTransaction {
    pub version: u32,
    pub previous_outpoint: TransactionOutpoint,
    pub sequence: u32,
    pub outputs: Vec<TransactionOutput>,
    pub lock_time: u32,
}

impl SpendTransaction {
    /// The digest a spender signature must cover.
    ///
    /// Deterministic serialization of every committed field, double-hashed,
    /// with the sighash-type byte appended to the preimage.
    pub fn signature_hash(&self) -> [u8; 32] {
        let mut preimage = Vec::new();
        preimage.extend_from_slice(&self.version.to_le_bytes());
        preimage.extend_from_slice(&self.previous_outpoint.transaction_id);
        preimage.extend_from_slice(&self.previous_outpoint.index.to_le_bytes());
        preimage.extend_from_slice(&self.sequence.to_le_bytes());
        preimage.extend_from_slice(&(self.outputs.len() as u32).to_le_bytes());
        for output in &self.outputs {
            preimage.extend_from_slice(&output.value.to_le_bytes());
            preimage.extend_from_slice(&(output.script_public_key.len() as u32).to_le_bytes());
            preimage.extend_from_slice(&output.script_public_key);
        }
        preimage.extend_from_slice(&self.lock_time.to_le_bytes());
        preimage.push(SIG_HASH_ALL_FORKID);
        hash256(&preimage)
    }
}

/// Build a mock transaction for local policy evaluation.
///
/// Uses a fixed dummy outpoint; only the outputs and lock_time vary per test.
pub fn build_mock_tx(outputs: Vec<TransactionOutput>, lock_time: u32) -> SpendTransaction {
    SpendTransaction {
        version: 1,
        previous_outpoint: TransactionOutpoint {
            transaction_id: [
                0xc9, 0x97, 0xa5, 0xe5, 0x6e, 0x10, 0x42, 0x02, 0xfa, 0x20, 0x9c, 0x6a, 0x85, 0x2d,
                0xd9, 0x06, 0x60, 0xa2, 0x0b, 0x2d, 0x9c, 0x35, 0x24, 0x23, 0xed, 0xce, 0x25, 0x85,
                0x7f, 0xcd, 0x37, 0x04,
            ],
            index: 0,
        },
        sequence: 0,
        outputs,
        lock_time,
    }
}

/// Sign a transaction's sighash with an ECDSA keypair.
pub fn ecdsa_sign_tx(tx: &SpendTransaction, keypair: &Keypair) -> ecdsa::Signature {
    let msg = Message::from_digest_slice(&tx.signature_hash()).expect("sighash is always 32 bytes");
    SECP256K1.sign_ecdsa(&msg, &keypair.secret_key())
}

/// Check a transaction signature against a public key.
pub fn verify_tx_signature(
    tx: &SpendTransaction,
    pubkey: &PublicKey,
    sig: &ecdsa::Signature,
) -> bool {
    let msg = Message::from_digest_slice(&tx.signature_hash()).expect("sighash is always 32 bytes");
    SECP256K1.verify_ecdsa(&msg, sig, pubkey).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_keypair;

    fn payout(value: u64) -> Vec<TransactionOutput> {
        vec![TransactionOutput {
            value,
            script_public_key: vec![0x76, 0xa9],
        }]
    }

    #[test]
    fn sighash_commits_to_outputs() {
        let a = build_mock_tx(payout(999_900_000), 0);
        let b = build_mock_tx(payout(999_900_001), 0);
        assert_ne!(a.signature_hash(), b.signature_hash());
    }

    #[test]
    fn sighash_commits_to_lock_time() {
        let a = build_mock_tx(payout(1_000), 0);
        let b = build_mock_tx(payout(1_000), 100);
        assert_ne!(a.signature_hash(), b.signature_hash());
    }

    #[test]
    fn sign_then_verify_succeeds() {
        let (kp, pk) = generate_keypair();
        let tx = build_mock_tx(payout(1_000), 0);
        let sig = ecdsa_sign_tx(&tx, &kp);
        assert!(verify_tx_signature(&tx, &pk, &sig));
    }

    #[test]
    fn verify_fails_after_output_changes() {
        let (kp, pk) = generate_keypair();
        let tx = build_mock_tx(payout(1_000), 0);
        let sig = ecdsa_sign_tx(&tx, &kp);
        let altered = build_mock_tx(payout(2_000), 0);
        assert!(!verify_tx_signature(&altered, &pk, &sig));
    }
}
