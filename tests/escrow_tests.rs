//! Tests for escrow construction — builder validation and identity binding.

use oracle_escrow_lab::hash::{hash160, pubkey_hash};
use oracle_escrow_lab::*;

fn dummy_pk() -> secp256k1::PublicKey {
    generate_keypair().1
}

// ---------------------------------------------------------------------------
// EscrowBuilder validation
// ---------------------------------------------------------------------------

mod builder_validation {
    use super::*;

    #[test]
    fn missing_seller_fails() {
        let result = EscrowBuilder::new()
            .buyer(&dummy_pk())
            .arbiter(&dummy_pk())
            .nonce(b"n".to_vec())
            .build();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("seller"));
    }

    #[test]
    fn missing_buyer_fails() {
        let result = EscrowBuilder::new()
            .seller(&dummy_pk())
            .arbiter(&dummy_pk())
            .nonce(b"n".to_vec())
            .build();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("buyer"));
    }

    #[test]
    fn missing_arbiter_fails() {
        let result = EscrowBuilder::new()
            .seller(&dummy_pk())
            .buyer(&dummy_pk())
            .nonce(b"n".to_vec())
            .build();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("arbiter"));
    }

    #[test]
    fn missing_nonce_fails() {
        let result = EscrowBuilder::new()
            .seller(&dummy_pk())
            .buyer(&dummy_pk())
            .arbiter(&dummy_pk())
            .build();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("nonce"));
    }

    #[test]
    fn empty_nonce_fails() {
        let result = EscrowBuilder::new()
            .seller(&dummy_pk())
            .buyer(&dummy_pk())
            .arbiter(&dummy_pk())
            .nonce(Vec::new())
            .build();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("non-empty"));
    }
}

// ---------------------------------------------------------------------------
// Identity binding
// ---------------------------------------------------------------------------

mod identity_binding {
    use super::*;

    #[test]
    fn builder_hashes_uncompressed_keys() {
        let seller = dummy_pk();
        let buyer = dummy_pk();
        let arbiter = dummy_pk();
        let escrow = EscrowBuilder::new()
            .seller(&seller)
            .buyer(&buyer)
            .arbiter(&arbiter)
            .nonce(b"n".to_vec())
            .build()
            .unwrap();

        assert_eq!(escrow.seller_hash, hash160(&seller.serialize_uncompressed()));
        assert_eq!(escrow.buyer_hash, hash160(&buyer.serialize_uncompressed()));
        assert_eq!(escrow.arbiter_hash, hash160(&arbiter.serialize_uncompressed()));
    }

    #[test]
    fn hash_for_selects_the_bound_role() {
        let seller = dummy_pk();
        let buyer = dummy_pk();
        let arbiter = dummy_pk();
        let escrow = EscrowBuilder::new()
            .seller(&seller)
            .buyer(&buyer)
            .arbiter(&arbiter)
            .nonce(b"n".to_vec())
            .build()
            .unwrap();

        assert_eq!(escrow.hash_for(Role::Seller), &pubkey_hash(&seller));
        assert_eq!(escrow.hash_for(Role::Buyer), &pubkey_hash(&buyer));
        assert_eq!(escrow.hash_for(Role::Arbiter), &pubkey_hash(&arbiter));
    }

    #[test]
    fn new_accepts_precomputed_hashes() {
        let escrow = EscrowParams::new([0x11; 20], [0x22; 20], [0x33; 20], b"n".to_vec());
        assert_eq!(escrow.hash_for(Role::Seller), &[0x11; 20]);
        assert_eq!(escrow.hash_for(Role::Buyer), &[0x22; 20]);
        assert_eq!(escrow.hash_for(Role::Arbiter), &[0x33; 20]);
    }
}
