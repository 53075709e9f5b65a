use ripemd::Ripemd160;
use secp256k1::PublicKey;
use sha2::{Digest, Sha256};

/// HASH160 = RIPEMD160(SHA256(data)), the chain's address-hash convention.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let sha = Sha256::digest(data);
    let ripemd = Ripemd160::digest(sha);
    let mut hash = [0u8; 20];
    hash.copy_from_slice(&ripemd);
    hash
}

/// HASH256 = SHA256(SHA256(data)), the chain's transaction-hash convention.
pub fn hash256(data: &[u8]) -> [u8; 32] {
    let first = Sha256::digest(data);
    let second = Sha256::digest(first);
    let mut hash = [0u8; 32];
    hash.copy_from_slice(&second);
    hash
}

/// HASH256 with the byte order reversed.
///
/// The chain reads signing digests as little-endian big integers, appending a
/// trailing zero sign byte before interpretation; the sign byte leaves the
/// 32-byte value unchanged, so the reversed digest is the exact scalar the
/// signature is made over.
pub fn le_digest(data: &[u8]) -> [u8; 32] {
    let mut digest = hash256(data);
    digest.reverse();
    digest
}

/// Hash a public key to its 20-byte identity hash.
///
/// Keys are hashed in uncompressed (65-byte) point form; identity hashes bound
/// into an escrow must be produced the same way or they will never match.
pub fn pubkey_hash(pubkey: &PublicKey) -> [u8; 20] {
    hash160(&pubkey.serialize_uncompressed())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generate_keypair;

    #[test]
    fn hash256_empty_matches_known_vector() {
        assert_eq!(
            hex::encode(hash256(b"")),
            "5df6e0e2761359d30a8275058e299fcc0381534545f55cf43e41983f5d4c9456"
        );
    }

    #[test]
    fn le_digest_is_reversed_hash256() {
        let data = b"001122334455aabbcc";
        let mut expected = hash256(data);
        expected.reverse();
        assert_eq!(le_digest(data), expected);
    }

    #[test]
    fn hash160_is_deterministic_and_input_sensitive() {
        assert_eq!(hash160(b"escrow"), hash160(b"escrow"));
        assert_ne!(hash160(b"escrow"), hash160(b"escrOw"));
    }

    #[test]
    fn pubkey_hash_uses_uncompressed_form() {
        let (_, pk) = generate_keypair();
        assert_eq!(pubkey_hash(&pk), hash160(&pk.serialize_uncompressed()));
        assert_ne!(pubkey_hash(&pk), hash160(&pk.serialize()));
    }
}
