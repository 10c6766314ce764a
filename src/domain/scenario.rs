use rand::Rng;
use serde::{Deserialize, Serialize};
use crate::catalog::CatalogError;
use super::{Category, PurchaseRequest};

/// Inclusive price bounds for a scenario, in currency units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Uniform draw from the range, rounded to cents.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        round_cents(rng.gen_range(self.min..=self.max)).clamp(self.min, self.max)
    }

    /// Bounds must be positive whole cents, otherwise rounding a draw could
    /// land outside the range.
    fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min > 0.0
            && self.min <= self.max
            && is_whole_cents(self.min)
            && is_whole_cents(self.max)
    }
}

/// Inclusive quantity bounds for a scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityRange {
    pub min: u32,
    pub max: u32,
}

impl QuantityRange {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// A range that always yields `quantity`.
    pub fn fixed(quantity: u32) -> Self {
        Self { min: quantity, max: quantity }
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u32 {
        rng.gen_range(self.min..=self.max)
    }

    fn is_valid(&self) -> bool {
        self.min >= 1 && self.min <= self.max
    }
}

/// One weighted purchase pattern: which category is bought, which products
/// are eligible and how price and quantity are bounded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub category: Category,
    pub weight: u32,
    pub products: Vec<String>,
    pub price: PriceRange,
    pub quantity: QuantityRange,
}

impl Scenario {
    pub fn new<I, S>(
        category: Category,
        weight: u32,
        products: I,
        price: PriceRange,
        quantity: QuantityRange,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            category,
            weight,
            products: products.into_iter().map(Into::into).collect(),
            price,
            quantity,
        }
    }

    /// Checks the invariants every catalog entry must hold.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.products.is_empty() {
            return Err(CatalogError::EmptyProductPool(self.category));
        }
        if !self.price.is_valid() {
            return Err(CatalogError::InvalidPriceRange {
                category: self.category,
                min: self.price.min,
                max: self.price.max,
            });
        }
        if !self.quantity.is_valid() {
            return Err(CatalogError::InvalidQuantityRange {
                category: self.category,
                min: self.quantity.min,
                max: self.quantity.max,
            });
        }
        if self.weight == 0 {
            return Err(CatalogError::ZeroWeight(self.category));
        }
        Ok(())
    }

    /// Builds a fresh purchase payload from this scenario.
    ///
    /// # Panics
    /// Panics if the product pool is empty; scenarios held by a
    /// [`ScenarioCatalog`](crate::catalog::ScenarioCatalog) are validated.
    pub fn synthesize<R: Rng + ?Sized>(&self, rng: &mut R) -> PurchaseRequest {
        let product = &self.products[rng.gen_range(0..self.products.len())];
        PurchaseRequest {
            categoria: self.category.code(),
            producto_id: product.clone(),
            precio: self.price.sample(rng),
            cantidad_vendida: self.quantity.sample(rng),
        }
    }
}

/// Rounds to two decimal places, half away from zero.
pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn is_whole_cents(value: f64) -> bool {
    round_cents(value) == value
}
