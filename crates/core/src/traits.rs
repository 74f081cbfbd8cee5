//! Collaborator traits for catalog and rank lookups
//!
//! The comparison engine never owns catalog data. It reads characteristic
//! definitions, recorded product values and rank lists through these traits,
//! so an in-memory catalog and a database-backed one are interchangeable.
//!
//! Thread safety: all methods must be safe to call concurrently from
//! multiple threads (requires Send + Sync).

use crate::error::VersusResult;
use crate::rank::RankingContext;
use crate::types::{CategoryId, CharacteristicDef, CharacteristicId, ProductId};

/// Read access to category characteristics and product values
pub trait CatalogSource: Send + Sync {
    /// Characteristics declared on a category, in declared order
    ///
    /// # Errors
    ///
    /// Returns an error if the category is unknown or the lookup fails.
    fn characteristics(&self, category: CategoryId) -> VersusResult<Vec<CharacteristicDef>>;

    /// Raw value a product recorded for a characteristic
    ///
    /// Returns `None` if the product has no value for it.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    fn product_value(
        &self,
        product: ProductId,
        characteristic: CharacteristicId,
    ) -> VersusResult<Option<String>>;
}

/// Read access to a characteristic's rank list
pub trait RankSource: Send + Sync {
    /// Ranked values of a characteristic, ascending by rank
    ///
    /// An unranked characteristic yields an empty context.
    ///
    /// # Errors
    ///
    /// Returns an error if the lookup fails.
    fn ranking(&self, characteristic: CharacteristicId) -> VersusResult<RankingContext>;
}

impl<T: CatalogSource + ?Sized> CatalogSource for std::sync::Arc<T> {
    fn characteristics(&self, category: CategoryId) -> VersusResult<Vec<CharacteristicDef>> {
        (**self).characteristics(category)
    }

    fn product_value(
        &self,
        product: ProductId,
        characteristic: CharacteristicId,
    ) -> VersusResult<Option<String>> {
        (**self).product_value(product, characteristic)
    }
}

impl<T: RankSource + ?Sized> RankSource for std::sync::Arc<T> {
    fn ranking(&self, characteristic: CharacteristicId) -> VersusResult<RankingContext> {
        (**self).ranking(characteristic)
    }
}
