//! # Sample Catalog Planning
//!
//! Pure description of the sample catalog: which names and numbers to seed,
//! and how sample products are spread over existing categories and sellers.
//! The db layer decides which planned rows are actually inserted.
//!
//! ## Sample Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Categories  "Category 1" .. "Category 10"                              │
//! │  Sellers     "Seller 1"   .. "Seller 10"                                │
//! │              number = 1_000_000_000 + i                                 │
//! │  Products    "Product 1"  .. "Product 20"                               │
//! │              category_id ← uniform pick over existing categories        │
//! │              seller_id   ← uniform pick over existing sellers           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Reproducibility
//! [`sample_rng`] with `Some(seed)` yields the same assignment for the same
//! candidate ids. `None` seeds from OS entropy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{CoreError, CoreResult};
use crate::types::{NewProduct, NewSeller};

/// Number of sample categories.
pub const SAMPLE_CATEGORY_COUNT: usize = 10;

/// Number of sample sellers.
pub const SAMPLE_SELLER_COUNT: usize = 10;

/// Number of sample products.
pub const SAMPLE_PRODUCT_COUNT: usize = 20;

/// Base of the synthetic seller contact numbers (seller `i` gets base + i).
pub const SAMPLE_SELLER_NUMBER_BASE: i64 = 1_000_000_000;

/// "Category 1" through "Category 10".
pub fn category_names() -> impl Iterator<Item = String> {
    (1..=SAMPLE_CATEGORY_COUNT).map(|i| format!("Category {i}"))
}

/// "Seller 1" through "Seller 10" with numbers 1_000_000_001..=1_000_000_010.
pub fn sellers() -> impl Iterator<Item = NewSeller> {
    (1..=SAMPLE_SELLER_COUNT).map(|i| {
        NewSeller::new(format!("Seller {i}"), SAMPLE_SELLER_NUMBER_BASE + i as i64)
    })
}

/// "Product 1" through "Product 20".
pub fn product_names() -> impl Iterator<Item = String> {
    (1..=SAMPLE_PRODUCT_COUNT).map(|i| format!("Product {i}"))
}

/// Builds the RNG used for product assignment.
pub fn sample_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Assigns each product name a uniformly random category and seller.
///
/// ## Errors
/// [`CoreError::EmptySamplePool`] if either candidate list is empty.
pub fn assign_products<R, I>(
    names: I,
    category_ids: &[i64],
    seller_ids: &[i64],
    rng: &mut R,
) -> CoreResult<Vec<NewProduct>>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = String>,
{
    if category_ids.is_empty() {
        return Err(CoreError::empty_pool("category"));
    }
    if seller_ids.is_empty() {
        return Err(CoreError::empty_pool("seller"));
    }

    let planned = names
        .into_iter()
        .map(|name| {
            let category_id = category_ids[rng.gen_range(0..category_ids.len())];
            let seller_id = seller_ids[rng.gen_range(0..seller_ids.len())];
            NewProduct::new(name, category_id, seller_id)
        })
        .collect();

    Ok(planned)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_names_and_numbers() {
        let categories: Vec<_> = category_names().collect();
        assert_eq!(categories.len(), 10);
        assert_eq!(categories[0], "Category 1");
        assert_eq!(categories[9], "Category 10");

        let sellers: Vec<_> = sellers().collect();
        assert_eq!(sellers.len(), 10);
        assert_eq!(sellers[0].name, "Seller 1");
        assert_eq!(sellers[0].number, 1_000_000_001);
        assert_eq!(sellers[9].number, 1_000_000_010);

        assert_eq!(product_names().count(), 20);
    }

    #[test]
    fn test_assignment_draws_from_candidates() {
        let categories = [3, 5, 8];
        let sellers = [11, 12];
        let mut rng = sample_rng(Some(7));

        let planned = assign_products(product_names(), &categories, &sellers, &mut rng).unwrap();

        assert_eq!(planned.len(), SAMPLE_PRODUCT_COUNT);
        for product in &planned {
            assert!(categories.contains(&product.category_id));
            assert!(sellers.contains(&product.seller_id));
        }
    }

    #[test]
    fn test_seeded_assignment_is_reproducible() {
        let categories: Vec<i64> = (1..=10).collect();
        let sellers: Vec<i64> = (1..=10).collect();

        let first = assign_products(product_names(), &categories, &sellers, &mut sample_rng(Some(42)))
            .unwrap();
        let second = assign_products(product_names(), &categories, &sellers, &mut sample_rng(Some(42)))
            .unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_pool_is_rejected() {
        let mut rng = sample_rng(Some(1));
        let err = assign_products(product_names(), &[], &[1], &mut rng).unwrap_err();
        assert_eq!(err, CoreError::empty_pool("category"));

        let err = assign_products(product_names(), &[1], &[], &mut rng).unwrap_err();
        assert_eq!(err, CoreError::empty_pool("seller"));
    }
}
