use std::fmt;

use crate::action::{Action, Role};

/// Why a spend request was rejected.
///
/// Every rejection is terminal: the evaluator either authorizes the entire
/// spend or refuses it outright. Callers must treat any variant as
/// "do not broadcast".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// The action code is not one of the four contract actions.
    InvalidAction(u8),
    /// The spender public key does not hash to the identity this action requires.
    SpenderIdentityMismatch { action: Action, expected: Role },
    /// The oracle public key does not hash to the identity this action requires.
    OracleIdentityMismatch { action: Action, expected: Role },
    /// The oracle stamp does not verify over this escrow's (nonce, action) message.
    OracleSignatureInvalid,
    /// The spender signature does not verify over the transaction signature-hash.
    SpenderSignatureInvalid,
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAction(code) => write!(f, "invalid action code: {code}"),
            Self::SpenderIdentityMismatch { action, expected } => {
                write!(f, "spender key is not the {expected} for {action:?}")
            }
            Self::OracleIdentityMismatch { action, expected } => {
                write!(f, "oracle key is not the {expected} for {action:?}")
            }
            Self::OracleSignatureInvalid => {
                write!(f, "oracle stamp does not cover this escrow and action")
            }
            Self::SpenderSignatureInvalid => {
                write!(f, "spender signature does not cover the spending transaction")
            }
        }
    }
}

impl std::error::Error for AuthError {}

/// Errors from escrow construction, as opposed to spend evaluation.
#[derive(Debug)]
pub enum EscrowError {
    InvalidConfig(String),
}

impl fmt::Display for EscrowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(e) => write!(f, "invalid config: {e}"),
        }
    }
}

impl std::error::Error for EscrowError {}
