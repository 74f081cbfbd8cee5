//! Product comparison engine
//!
//! Walks a category's characteristics in declared order and compares the
//! two products' values with each characteristic's strategy. The first
//! failure aborts the whole comparison; there are no partial reports.

use crate::config::VersusConfig;
use crate::report::ComparisonReport;
use rayon::prelude::*;
use std::sync::Arc;
use tracing::{debug, trace, warn};
use versus_core::{
    CatalogSource, CharacteristicDef, CharacteristicValue, Comparator, ComparisonOutcome,
    ComparisonStrategy, Product, RankSource, RankingContext, VersusError, VersusResult,
};

/// Compares products of one category characteristic by characteristic
pub struct ProductComparisonEngine<C, R> {
    catalog: Arc<C>,
    ranks: Arc<R>,
    parallel: bool,
}

impl<C, R> Clone for ProductComparisonEngine<C, R> {
    fn clone(&self) -> Self {
        Self {
            catalog: Arc::clone(&self.catalog),
            ranks: Arc::clone(&self.ranks),
            parallel: self.parallel,
        }
    }
}

impl<C: CatalogSource, R: RankSource> ProductComparisonEngine<C, R> {
    /// Create a sequential engine over a catalog and rank source
    pub fn new(catalog: Arc<C>, ranks: Arc<R>) -> Self {
        Self {
            catalog,
            ranks,
            parallel: false,
        }
    }

    /// Create an engine honouring `[comparison]` settings
    pub fn with_config(catalog: Arc<C>, ranks: Arc<R>, config: &VersusConfig) -> Self {
        Self {
            catalog,
            ranks,
            parallel: config.comparison.parallel,
        }
    }

    /// Whether characteristics are evaluated on the rayon pool
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Compare two products of the same category.
    ///
    /// # Errors
    ///
    /// - `CategoryMismatch` if the products belong to different categories;
    ///   raised before any catalog lookup
    /// - `MissingCharacteristicValue` if either product lacks a value
    /// - any error from parsing or comparing a characteristic's values
    pub fn compare(&self, first: &Product, second: &Product) -> VersusResult<ComparisonReport> {
        if first.category != second.category {
            warn!(
                target: "versus::engine",
                first = %first.id,
                second = %second.id,
                "Comparison rejected: products from different categories"
            );
            return Err(VersusError::CategoryMismatch {
                first: first.category,
                second: second.category,
            });
        }

        let defs = self.catalog.characteristics(first.category)?;
        debug!(
            target: "versus::engine",
            first = %first.id,
            second = %second.id,
            category = %first.category,
            characteristics = defs.len(),
            parallel = self.parallel,
            "Comparison started"
        );

        let result = if self.parallel {
            defs.par_iter()
                .map(|def| self.compare_characteristic(def, first, second))
                .collect::<VersusResult<Vec<_>>>()
        } else {
            defs.iter()
                .map(|def| self.compare_characteristic(def, first, second))
                .collect::<VersusResult<Vec<_>>>()
        };

        let outcomes = match result {
            Ok(outcomes) => outcomes,
            Err(e) => {
                warn!(
                    target: "versus::engine",
                    first = %first.id,
                    second = %second.id,
                    error = %e,
                    "Comparison aborted"
                );
                return Err(e);
            }
        };

        let report = ComparisonReport::new(first.id, second.id, outcomes);
        let score = report.score();
        debug!(
            target: "versus::engine",
            first = %first.id,
            second = %second.id,
            first_wins = score.first_wins,
            second_wins = score.second_wins,
            ties = score.ties,
            "Comparison finished"
        );
        Ok(report)
    }

    fn compare_characteristic(
        &self,
        def: &CharacteristicDef,
        first: &Product,
        second: &Product,
    ) -> VersusResult<(String, ComparisonOutcome)> {
        let a = self.value_of(def, first)?;
        let b = self.value_of(def, second)?;

        let ranking: Option<RankingContext> = match def.strategy {
            ComparisonStrategy::Rating => Some(self.ranks.ranking(def.id)?),
            ComparisonStrategy::SmallerBetter | ComparisonStrategy::BiggerBetter => None,
        };
        let comparator = Comparator::for_strategy(def.strategy, ranking.as_ref())?;
        let outcome = comparator.compare(&a, &b)?;

        trace!(
            target: "versus::engine",
            characteristic = %def.name,
            strategy = %def.strategy,
            signed_cmp = outcome.signed_cmp(),
            "Characteristic compared"
        );
        Ok((def.name.clone(), outcome))
    }

    fn value_of(
        &self,
        def: &CharacteristicDef,
        product: &Product,
    ) -> VersusResult<CharacteristicValue> {
        let raw = self
            .catalog
            .product_value(product.id, def.id)?
            .ok_or_else(|| VersusError::MissingCharacteristicValue {
                product: product.id,
                characteristic: def.name.clone(),
            })?;
        CharacteristicValue::new(def.name.clone(), def.kind, raw)
    }
}
