//! In-memory product catalog
//!
//! Categories own an ordered list of characteristic definitions. Products
//! belong to one category and record raw values keyed by characteristic.
//! Values are validated against the characteristic's kind when recorded,
//! so comparisons only ever see parseable input.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;
use versus_core::{
    CatalogSource, Category, CategoryId, CharacteristicDef, CharacteristicId, CharacteristicKind,
    CharacteristicValue, ComparisonStrategy, Product, ProductId, VersusError, VersusResult,
};

#[derive(Debug, Default)]
struct CatalogState {
    categories: HashMap<CategoryId, Category>,
    /// Declared order per category
    declared: HashMap<CategoryId, Vec<CharacteristicId>>,
    characteristics: HashMap<CharacteristicId, CharacteristicDef>,
    products: HashMap<ProductId, Product>,
    values: HashMap<(ProductId, CharacteristicId), String>,
}

/// Thread-safe in-memory catalog
#[derive(Debug)]
pub struct MemoryCatalog {
    state: RwLock<CatalogState>,
    next_id: AtomicU64,
}

impl MemoryCatalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            state: RwLock::new(CatalogState::default()),
            next_id: AtomicU64::new(1),
        }
    }

    fn allocate(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Register a category
    pub fn create_category(
        &self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Category {
        let category = Category {
            id: CategoryId::new(self.allocate()),
            name: name.into(),
            description: description.into(),
        };
        let mut state = self.state.write();
        state.categories.insert(category.id, category.clone());
        state.declared.insert(category.id, Vec::new());
        category
    }

    /// Look up a category
    pub fn category(&self, id: CategoryId) -> VersusResult<Category> {
        self.state
            .read()
            .categories
            .get(&id)
            .cloned()
            .ok_or(VersusError::CategoryNotFound { category: id })
    }

    /// Declare a characteristic on a category.
    ///
    /// # Errors
    ///
    /// - `CategoryNotFound` if the category is unknown
    /// - `DuplicateCharacteristic` if the name is already declared there
    /// - `UnsupportedOperation` for a string characteristic with an
    ///   ordering strategy; strings can only be rated
    pub fn define_characteristic(
        &self,
        category: CategoryId,
        name: impl Into<String>,
        kind: CharacteristicKind,
        strategy: ComparisonStrategy,
    ) -> VersusResult<CharacteristicDef> {
        let name = name.into();
        if !kind.is_ordered() && !strategy.needs_ranking() {
            return Err(VersusError::UnsupportedOperation {
                characteristic: name,
                operation: strategy.name().to_string(),
                kind,
            });
        }

        let mut state = self.state.write();
        let declared = state
            .declared
            .get(&category)
            .ok_or(VersusError::CategoryNotFound { category })?;
        if declared
            .iter()
            .filter_map(|id| state.characteristics.get(id))
            .any(|def| def.name == name)
        {
            return Err(VersusError::DuplicateCharacteristic {
                category,
                characteristic: name,
            });
        }

        let def = CharacteristicDef {
            id: CharacteristicId::new(self.allocate()),
            category,
            name,
            kind,
            strategy,
        };
        state.characteristics.insert(def.id, def.clone());
        if let Some(declared) = state.declared.get_mut(&category) {
            declared.push(def.id);
        }

        debug!(
            target: "versus::engine",
            category = %category,
            characteristic = %def.name,
            kind = %def.kind,
            strategy = %def.strategy,
            "Characteristic defined"
        );
        Ok(def)
    }

    /// Look up a characteristic definition
    pub fn characteristic(&self, id: CharacteristicId) -> VersusResult<CharacteristicDef> {
        self.state
            .read()
            .characteristics
            .get(&id)
            .cloned()
            .ok_or_else(|| VersusError::CharacteristicNotFound {
                characteristic: id.to_string(),
            })
    }

    /// Register a product in a category
    pub fn add_product(
        &self,
        category: CategoryId,
        title: impl Into<String>,
    ) -> VersusResult<Product> {
        let mut state = self.state.write();
        if !state.categories.contains_key(&category) {
            return Err(VersusError::CategoryNotFound { category });
        }
        let product = Product {
            id: ProductId::new(self.allocate()),
            category,
            title: title.into(),
        };
        state.products.insert(product.id, product.clone());
        Ok(product)
    }

    /// Look up a product
    pub fn product(&self, id: ProductId) -> VersusResult<Product> {
        self.state
            .read()
            .products
            .get(&id)
            .cloned()
            .ok_or(VersusError::ProductNotFound { product: id })
    }

    /// Record (or replace) a product's raw value for a characteristic.
    ///
    /// # Errors
    ///
    /// - `ProductNotFound` / `CharacteristicNotFound` for unknown ids
    /// - `CategoryMismatch` if the characteristic belongs to another category
    /// - `InvalidValue` if `raw` does not parse under the characteristic's kind
    pub fn record_value(
        &self,
        product: ProductId,
        characteristic: CharacteristicId,
        raw: impl Into<String>,
    ) -> VersusResult<CharacteristicValue> {
        let raw = raw.into();
        let mut state = self.state.write();
        let owner = state
            .products
            .get(&product)
            .map(|p| p.category)
            .ok_or(VersusError::ProductNotFound { product })?;
        let def = state
            .characteristics
            .get(&characteristic)
            .ok_or_else(|| VersusError::CharacteristicNotFound {
                characteristic: characteristic.to_string(),
            })?;
        if def.category != owner {
            return Err(VersusError::CategoryMismatch {
                first: owner,
                second: def.category,
            });
        }

        let value = CharacteristicValue::new(def.name.clone(), def.kind, raw.clone())?;
        state.values.insert((product, characteristic), raw);
        Ok(value)
    }

    /// A product's value for the characteristic with the given name
    ///
    /// Returns `None` if the product has not recorded that characteristic.
    pub fn value_by_name(
        &self,
        product: ProductId,
        name: &str,
    ) -> VersusResult<Option<CharacteristicValue>> {
        let state = self.state.read();
        let category = state
            .products
            .get(&product)
            .map(|p| p.category)
            .ok_or(VersusError::ProductNotFound { product })?;
        let def = state
            .declared
            .get(&category)
            .into_iter()
            .flatten()
            .filter_map(|id| state.characteristics.get(id))
            .find(|def| def.name == name)
            .ok_or_else(|| VersusError::CharacteristicNotFound {
                characteristic: name.to_string(),
            })?;

        state
            .values
            .get(&(product, def.id))
            .map(|raw| CharacteristicValue::new(def.name.clone(), def.kind, raw.clone()))
            .transpose()
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogSource for MemoryCatalog {
    fn characteristics(&self, category: CategoryId) -> VersusResult<Vec<CharacteristicDef>> {
        let state = self.state.read();
        let declared = state
            .declared
            .get(&category)
            .ok_or(VersusError::CategoryNotFound { category })?;
        declared
            .iter()
            .map(|id| {
                state.characteristics.get(id).cloned().ok_or_else(|| {
                    VersusError::internal(format!("{} declared but not defined", id))
                })
            })
            .collect()
    }

    fn product_value(
        &self,
        product: ProductId,
        characteristic: CharacteristicId,
    ) -> VersusResult<Option<String>> {
        Ok(self
            .state
            .read()
            .values
            .get(&(product, characteristic))
            .cloned())
    }
}
