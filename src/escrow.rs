use secp256k1::PublicKey;

use crate::action::Role;
use crate::error::EscrowError;
use crate::hash::pubkey_hash;

/// The fixed fields of one escrow instance.
///
/// All four fields are committed at creation time and never change: the three
/// identity hashes select who may spend and who may stamp, and the nonce makes
/// oracle stamps specific to this instance. The contract commits to a
/// single-use spending condition, so only one action is ever exercised per
/// instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EscrowParams {
    pub seller_hash: [u8; 20],
    pub buyer_hash: [u8; 20],
    pub arbiter_hash: [u8; 20],
    pub nonce: Vec<u8>,
}

impl EscrowParams {
    /// Construct from pre-computed identity hashes.
    ///
    /// The hashes must be HASH160 of *uncompressed* public keys, or identity
    /// checks at spend time will never match.
    pub fn new(
        seller_hash: [u8; 20],
        buyer_hash: [u8; 20],
        arbiter_hash: [u8; 20],
        nonce: Vec<u8>,
    ) -> Self {
        Self {
            seller_hash,
            buyer_hash,
            arbiter_hash,
            nonce,
        }
    }

    /// The identity hash bound for a given role.
    pub fn hash_for(&self, role: Role) -> &[u8; 20] {
        match role {
            Role::Buyer => &self.buyer_hash,
            Role::Seller => &self.seller_hash,
            Role::Arbiter => &self.arbiter_hash,
        }
    }
}

/// Builder for escrow instances from party public keys.
pub struct EscrowBuilder {
    seller_pk: Option<PublicKey>,
    buyer_pk: Option<PublicKey>,
    arbiter_pk: Option<PublicKey>,
    nonce: Option<Vec<u8>>,
}

impl EscrowBuilder {
    pub fn new() -> Self {
        Self {
            seller_pk: None,
            buyer_pk: None,
            arbiter_pk: None,
            nonce: None,
        }
    }

    pub fn seller(mut self, pk: &PublicKey) -> Self {
        self.seller_pk = Some(*pk);
        self
    }

    pub fn buyer(mut self, pk: &PublicKey) -> Self {
        self.buyer_pk = Some(*pk);
        self
    }

    pub fn arbiter(mut self, pk: &PublicKey) -> Self {
        self.arbiter_pk = Some(*pk);
        self
    }

    /// The instance nonce. Must be unique per escrow; a reused nonce lets a
    /// stamp issued for one escrow authorize another.
    pub fn nonce(mut self, nonce: impl Into<Vec<u8>>) -> Self {
        self.nonce = Some(nonce.into());
        self
    }

    pub fn build(self) -> Result<EscrowParams, EscrowError> {
        let seller = self
            .seller_pk
            .ok_or_else(|| EscrowError::InvalidConfig("seller pubkey required".into()))?;
        let buyer = self
            .buyer_pk
            .ok_or_else(|| EscrowError::InvalidConfig("buyer pubkey required".into()))?;
        let arbiter = self
            .arbiter_pk
            .ok_or_else(|| EscrowError::InvalidConfig("arbiter pubkey required".into()))?;
        let nonce = self
            .nonce
            .ok_or_else(|| EscrowError::InvalidConfig("nonce required".into()))?;

        if nonce.is_empty() {
            return Err(EscrowError::InvalidConfig("nonce must be non-empty".into()));
        }

        Ok(EscrowParams {
            seller_hash: pubkey_hash(&seller),
            buyer_hash: pubkey_hash(&buyer),
            arbiter_hash: pubkey_hash(&arbiter),
            nonce,
        })
    }
}

impl Default for EscrowBuilder {
    fn default() -> Self {
        Self::new()
    }
}
