//! Error types for versus
//!
//! Every fallible operation in the workspace returns [`VersusError`].
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! # Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Value | `InvalidValue`, `NameMismatch`, `UnsupportedOperation`, `WrongKind` |
//! | Comparison | `CategoryMismatch`, `MissingCharacteristicValue`, `ValueNotRanked` |
//! | Ranking | `DuplicateRankedValue`, `InvalidRank`, `ConcurrentRankConflict` |
//! | Not Found | `CharacteristicNotFound`, `ProductNotFound`, `CategoryNotFound` |
//! | System | `DuplicateCharacteristic`, `Config`, `Internal` |
//!
//! Only `ConcurrentRankConflict` is retryable; see [`VersusError::is_conflict`].

use crate::kind::CharacteristicKind;
use crate::types::{CategoryId, ProductId};
use thiserror::Error;

/// Result type alias for versus operations
pub type VersusResult<T> = std::result::Result<T, VersusError>;

/// Errors raised while building, comparing or ranking characteristic values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VersusError {
    // ==================== Value Errors ====================
    /// Raw text does not parse under the characteristic kind
    #[error("invalid value for '{characteristic}': {raw:?} is not a valid {kind} ({reason})")]
    InvalidValue {
        /// Characteristic name
        characteristic: String,
        /// Kind the value was parsed as
        kind: CharacteristicKind,
        /// Offending raw text
        raw: String,
        /// Parser message
        reason: String,
    },

    /// Values of different characteristics were compared
    #[error("cannot compare values of different characteristics: '{left}' and '{right}'")]
    NameMismatch {
        /// Name of the left-hand value
        left: String,
        /// Name of the right-hand value
        right: String,
    },

    /// Operation is not defined for the characteristic kind
    #[error("unsupported operation '{operation}' on '{characteristic}' of kind {kind}")]
    UnsupportedOperation {
        /// Characteristic name
        characteristic: String,
        /// Operation that was attempted
        operation: String,
        /// Kind of the characteristic
        kind: CharacteristicKind,
    },

    /// Characteristic has a different kind than the operation requires
    #[error("wrong kind for '{characteristic}': expected {expected}, got {actual}")]
    WrongKind {
        /// Characteristic name
        characteristic: String,
        /// Required kind
        expected: CharacteristicKind,
        /// Kind found
        actual: CharacteristicKind,
    },

    // ==================== Comparison Errors ====================
    /// Products belong to different categories
    #[error("cannot compare products from different categories: {first} and {second}")]
    CategoryMismatch {
        /// Category of the first product
        first: CategoryId,
        /// Category of the second product
        second: CategoryId,
    },

    /// A product has no recorded value for a characteristic
    #[error("product {product} has no value for '{characteristic}'")]
    MissingCharacteristicValue {
        /// Product lacking the value
        product: ProductId,
        /// Characteristic name
        characteristic: String,
    },

    /// A value is absent from the characteristic's rank list
    #[error("value {value:?} of '{characteristic}' is not ranked")]
    ValueNotRanked {
        /// Characteristic name
        characteristic: String,
        /// Unranked raw value
        value: String,
    },

    // ==================== Ranking Errors ====================
    /// Value already present in the rank list
    #[error("value {value:?} is already ranked for '{characteristic}'")]
    DuplicateRankedValue {
        /// Characteristic name
        characteristic: String,
        /// Duplicate value
        value: String,
    },

    /// Requested rank would leave a gap or is zero
    #[error("invalid rank {rank} for '{characteristic}': expected 1..={max}")]
    InvalidRank {
        /// Characteristic name
        characteristic: String,
        /// Requested rank
        rank: u32,
        /// Highest rank accepted for this insertion
        max: u32,
    },

    /// Rank list was held by a concurrent mutation; safe to retry
    #[error("concurrent rank conflict on '{characteristic}': {reason}")]
    ConcurrentRankConflict {
        /// Characteristic name
        characteristic: String,
        /// Why the transaction was aborted
        reason: String,
    },

    // ==================== Not Found ====================
    /// Characteristic id or name unknown
    #[error("characteristic not found: {characteristic}")]
    CharacteristicNotFound {
        /// Characteristic id or name
        characteristic: String,
    },

    /// Product id unknown
    #[error("product not found: {product}")]
    ProductNotFound {
        /// Product id
        product: ProductId,
    },

    /// Category id unknown
    #[error("category not found: {category}")]
    CategoryNotFound {
        /// Category id
        category: CategoryId,
    },

    // ==================== System Errors ====================
    /// A category already declares a characteristic with this name
    #[error("category {category} already defines '{characteristic}'")]
    DuplicateCharacteristic {
        /// Category id
        category: CategoryId,
        /// Characteristic name
        characteristic: String,
    },

    /// Configuration could not be read or is invalid
    #[error("configuration error: {reason}")]
    Config {
        /// Description
        reason: String,
    },

    /// Internal error (bug or invariant violation)
    #[error("internal error: {reason}")]
    Internal {
        /// Description
        reason: String,
    },
}

impl VersusError {
    /// Build an internal error
    pub fn internal(reason: impl Into<String>) -> Self {
        VersusError::Internal {
            reason: reason.into(),
        }
    }

    /// Build a configuration error
    pub fn config(reason: impl Into<String>) -> Self {
        VersusError::Config {
            reason: reason.into(),
        }
    }

    /// True if the error came from a concurrent rank mutation.
    ///
    /// Callers may retry these with backoff. Nothing in this workspace retries.
    pub fn is_conflict(&self) -> bool {
        matches!(self, VersusError::ConcurrentRankConflict { .. })
    }

    /// Characteristic name the error refers to, if any
    pub fn characteristic(&self) -> Option<&str> {
        match self {
            VersusError::InvalidValue { characteristic, .. }
            | VersusError::UnsupportedOperation { characteristic, .. }
            | VersusError::WrongKind { characteristic, .. }
            | VersusError::MissingCharacteristicValue { characteristic, .. }
            | VersusError::ValueNotRanked { characteristic, .. }
            | VersusError::DuplicateRankedValue { characteristic, .. }
            | VersusError::InvalidRank { characteristic, .. }
            | VersusError::ConcurrentRankConflict { characteristic, .. }
            | VersusError::CharacteristicNotFound { characteristic }
            | VersusError::DuplicateCharacteristic { characteristic, .. } => Some(characteristic),
            VersusError::NameMismatch { left, .. } => Some(left),
            VersusError::CategoryMismatch { .. }
            | VersusError::ProductNotFound { .. }
            | VersusError::CategoryNotFound { .. }
            | VersusError::Config { .. }
            | VersusError::Internal { .. } => None,
        }
    }
}
