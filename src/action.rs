use std::fmt;

/// The four spend paths of the escrow contract.
///
/// Each action fixes which party must sign the spending transaction and which
/// party must have issued the oracle stamp for it. The discriminant is the
/// on-chain action code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Buyer spends, seller stamps: payment goes through.
    ReleaseBySeller = 0,
    /// Buyer spends, arbiter stamps: arbiter rules for the seller's side.
    ReleaseByArbiter = 1,
    /// Seller spends, buyer stamps: buyer agrees to a refund.
    ReturnByBuyer = 2,
    /// Seller spends, arbiter stamps: arbiter rules for the buyer's side.
    ReturnByArbiter = 3,
}

/// The three identities bound into an escrow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Buyer,
    Seller,
    Arbiter,
}

impl Action {
    pub const ALL: [Action; 4] = [
        Action::ReleaseBySeller,
        Action::ReleaseByArbiter,
        Action::ReturnByBuyer,
        Action::ReturnByArbiter,
    ];

    /// Decode a raw action code. Codes outside 0..=3 are not actions.
    pub fn from_code(code: u8) -> Option<Action> {
        match code {
            0 => Some(Action::ReleaseBySeller),
            1 => Some(Action::ReleaseByArbiter),
            2 => Some(Action::ReturnByBuyer),
            3 => Some(Action::ReturnByArbiter),
            _ => None,
        }
    }

    /// The single-byte code bound into the oracle message.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// The party whose transaction signature authorizes this spend.
    pub fn spender(self) -> Role {
        match self {
            Action::ReleaseBySeller | Action::ReleaseByArbiter => Role::Buyer,
            Action::ReturnByBuyer | Action::ReturnByArbiter => Role::Seller,
        }
    }

    /// The party whose stamp must accompany this spend.
    pub fn oracle(self) -> Role {
        match self {
            Action::ReleaseBySeller => Role::Seller,
            Action::ReturnByBuyer => Role::Buyer,
            Action::ReleaseByArbiter | Action::ReturnByArbiter => Role::Arbiter,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::Buyer => write!(f, "buyer"),
            Role::Seller => write!(f, "seller"),
            Role::Arbiter => write!(f, "arbiter"),
        }
    }
}
