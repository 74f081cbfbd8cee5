//! Characteristic values
//!
//! A [`CharacteristicValue`] is a named, typed, immutable value built fresh
//! for each comparison. Its raw text always parses under its kind.
//!
//! ## Comparison Rules
//!
//! - Values are comparable only when their names match (`NameMismatch`).
//! - `equals` is defined for every kind.
//! - `order` is defined for Integer, Float and Boolean; String fails with
//!   `UnsupportedOperation` and must be compared through a rank list.
//! - Both are derived from the single three-way comparison in
//!   [`ParsedValue::three_way`].

use crate::error::{VersusError, VersusResult};
use crate::kind::{CharacteristicKind, ParsedValue};
use serde::Serialize;
use std::cmp::Ordering;

/// A named, typed characteristic value
///
/// The derived `PartialEq` is structural identity (same name, kind and raw
/// text). Use [`CharacteristicValue::equals`] to compare parsed values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacteristicValue {
    name: String,
    kind: CharacteristicKind,
    raw: String,
    #[serde(skip)]
    parsed: ParsedValue,
}

impl CharacteristicValue {
    /// Build a value, parsing `raw` under `kind`
    ///
    /// # Errors
    ///
    /// `InvalidValue` if `raw` does not parse under `kind`.
    pub fn new(
        name: impl Into<String>,
        kind: CharacteristicKind,
        raw: impl Into<String>,
    ) -> VersusResult<Self> {
        let name = name.into();
        let raw = raw.into();
        let parsed = kind.parse(&raw).map_err(|e| VersusError::InvalidValue {
            characteristic: name.clone(),
            kind,
            raw: e.raw,
            reason: e.reason,
        })?;

        Ok(Self {
            name,
            kind,
            raw,
            parsed,
        })
    }

    /// Characteristic name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Value kind
    pub fn kind(&self) -> CharacteristicKind {
        self.kind
    }

    /// Raw text as recorded
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Typed value
    pub fn parsed(&self) -> &ParsedValue {
        &self.parsed
    }

    /// Compare parsed values for equality
    ///
    /// # Errors
    ///
    /// `NameMismatch` if the names differ, `WrongKind` if the kinds differ.
    pub fn equals(&self, other: &CharacteristicValue) -> VersusResult<bool> {
        self.check_comparable(other)?;
        match (&self.parsed, &other.parsed) {
            (ParsedValue::String(a), ParsedValue::String(b)) => Ok(a == b),
            (a, b) => Ok(a.three_way(b) == Some(Ordering::Equal)),
        }
    }

    /// Three-way comparison of parsed values
    ///
    /// # Errors
    ///
    /// `NameMismatch` if the names differ, `WrongKind` if the kinds differ,
    /// `UnsupportedOperation` for String values.
    pub fn order(&self, other: &CharacteristicValue) -> VersusResult<Ordering> {
        self.check_comparable(other)?;
        if !self.kind.is_ordered() {
            return Err(VersusError::UnsupportedOperation {
                characteristic: self.name.clone(),
                operation: "order".to_string(),
                kind: self.kind,
            });
        }
        self.parsed.three_way(&other.parsed).ok_or_else(|| {
            VersusError::internal(format!(
                "no ordering between {:?} and {:?} for '{}'",
                self.parsed, other.parsed, self.name
            ))
        })
    }

    /// Ensure both values belong to the same characteristic
    pub(crate) fn check_comparable(&self, other: &CharacteristicValue) -> VersusResult<()> {
        if self.name != other.name {
            return Err(VersusError::NameMismatch {
                left: self.name.clone(),
                right: other.name.clone(),
            });
        }
        if self.kind != other.kind {
            return Err(VersusError::WrongKind {
                characteristic: self.name.clone(),
                expected: self.kind,
                actual: other.kind,
            });
        }
        Ok(())
    }
}
