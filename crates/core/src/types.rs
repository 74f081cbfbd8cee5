//! Catalog types
//!
//! This module defines the records the comparison core reads from the
//! surrounding catalog:
//! - CategoryId / ProductId / CharacteristicId: numeric identifiers
//! - Category: a product category
//! - Product: a product and the category it belongs to
//! - CharacteristicDef: a typed characteristic declared on a category

use crate::kind::CharacteristicKind;
use crate::strategy::ComparisonStrategy;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CategoryId(u64);

impl CategoryId {
    /// Wrap a raw identifier
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw identifier
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "category#{}", self.0)
    }
}

/// Identifier of a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ProductId(u64);

impl ProductId {
    /// Wrap a raw identifier
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw identifier
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "product#{}", self.0)
    }
}

/// Identifier of a characteristic definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CharacteristicId(u64);

impl CharacteristicId {
    /// Wrap a raw identifier
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw identifier
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for CharacteristicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "characteristic#{}", self.0)
    }
}

/// A product category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Identifier
    pub id: CategoryId,
    /// Display name
    pub name: String,
    /// Free-form description
    pub description: String,
}

/// A product; only its category matters to the comparison core
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Identifier
    pub id: ProductId,
    /// Category the product belongs to
    pub category: CategoryId,
    /// Display title
    pub title: String,
}

/// A characteristic declared on a category
///
/// Names are unique within a category; a comparison report is keyed by them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacteristicDef {
    /// Identifier
    pub id: CharacteristicId,
    /// Owning category
    pub category: CategoryId,
    /// Name shared by every value of this characteristic
    pub name: String,
    /// Primitive kind of the values
    pub kind: CharacteristicKind,
    /// How two values are ranked against each other
    pub strategy: ComparisonStrategy,
}

impl CharacteristicDef {
    /// Human-readable one-line description
    pub fn describe(&self) -> String {
        format!(
            "Characteristic \"{}\". Kind: \"{}\". Comparison strategy: \"{}\"",
            self.name,
            self.kind.name(),
            self.strategy.name()
        )
    }
}
