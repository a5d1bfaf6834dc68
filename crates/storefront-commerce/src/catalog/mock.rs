//! Mock catalog data.
//!
//! Builds the fixed demo catalog: five categories with five products
//! each, ids assigned sequentially in table order. Prices and ratings
//! are drawn from the caller's RNG so a seeded run is fully
//! deterministic.

use crate::catalog::product::{Category, Product};
use crate::error::StoreError;
use crate::ids::ProductId;
use crate::money::Money;
use rand::rngs::StdRng;
use rand::Rng;

/// Product names per category, in catalog order.
const PRODUCT_NAMES: [(Category, [&str; 5]); 5] = [
    (
        Category::Electronics,
        ["Laptop", "Smartphone", "Headphones", "Smart Watch", "Tablet"],
    ),
    (
        Category::Clothing,
        ["T-Shirt", "Jeans", "Jacket", "Sneakers", "Dress"],
    ),
    (
        Category::Books,
        [
            "Fiction Novel",
            "Programming Guide",
            "Cookbook",
            "Biography",
            "Science Book",
        ],
    ),
    (
        Category::Home,
        ["Coffee Maker", "Lamp", "Cushion", "Wall Art", "Plant Pot"],
    ),
    (
        Category::Sports,
        [
            "Yoga Mat",
            "Dumbbells",
            "Running Shoes",
            "Tennis Racket",
            "Bicycle",
        ],
    ),
];

/// Image URLs per category, parallel to `PRODUCT_NAMES`.
const PRODUCT_IMAGES: [(Category, [&str; 5]); 5] = [
    (
        Category::Electronics,
        [
            "https://images.unsplash.com/photo-1496181133206-80ce9b88a853?w=400",
            "https://images.unsplash.com/photo-1511707171634-5f897ff02aa9?w=400",
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400",
            "https://images.unsplash.com/photo-1523275335684-37898b6baf30?w=400",
            "https://images.unsplash.com/photo-1544244015-0df4b3ffc6b0?w=400",
        ],
    ),
    (
        Category::Clothing,
        [
            "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400",
            "https://images.unsplash.com/photo-1542272604-787c3835535d?w=400",
            "https://images.unsplash.com/photo-1551028719-00167b16eac5?w=400",
            "https://images.unsplash.com/photo-1460353581641-37baddab0fa2?w=400",
            "https://images.unsplash.com/photo-1595777457583-95e059d581b8?w=400",
        ],
    ),
    (
        Category::Books,
        [
            "https://images.unsplash.com/photo-1544947950-fa07a98d237f?w=400",
            "https://images.unsplash.com/photo-1532012197267-da84d127e765?w=400",
            "https://images.unsplash.com/photo-1589998059171-988d887df646?w=400",
            "https://images.unsplash.com/photo-1519682337058-a94d519337bc?w=400",
            "https://images.unsplash.com/photo-1507842217343-583bb7270b66?w=400",
        ],
    ),
    (
        Category::Home,
        [
            "https://images.unsplash.com/photo-1517668808822-9ebb02f2a0e6?w=400",
            "https://images.unsplash.com/photo-1507473885765-e6ed057f782c?w=400",
            "https://images.unsplash.com/photo-1555041469-a586c61ea9bc?w=400",
            "https://images.unsplash.com/photo-1513519245088-0e12902e35ca?w=400",
            "https://images.unsplash.com/photo-1459411552884-841db9b3cc2a?w=400",
        ],
    ),
    (
        Category::Sports,
        [
            "https://images.unsplash.com/photo-1601925260368-ae2f83cf8b7f?w=400",
            "https://images.unsplash.com/photo-1517836357463-d25dfeac3438?w=400",
            "https://images.unsplash.com/photo-1542291026-7eec264c27ff?w=400",
            "https://images.unsplash.com/photo-1622279457486-62dcc4a431d6?w=400",
            "https://images.unsplash.com/photo-1485965120184-e220f721d03e?w=400",
        ],
    ),
];

/// Whole-dollar price range for generated products, inclusive of the low
/// end and exclusive of the high end.
const PRICE_DOLLARS: std::ops::Range<i64> = 20..520;

/// Build the full mock catalog.
///
/// Validates that the name and image tables line up before generating
/// anything; a mismatch fails the whole load.
pub fn build_catalog(rng: &mut StdRng) -> Result<Vec<Product>, StoreError> {
    let mut products = Vec::with_capacity(25);
    let mut next_id = 1u32;

    for ((category, names), (image_category, images)) in
        PRODUCT_NAMES.iter().zip(PRODUCT_IMAGES.iter())
    {
        if category != image_category {
            return Err(StoreError::CatalogLoad(format!(
                "image table out of order: expected {}, found {}",
                category, image_category
            )));
        }

        for (name, image) in names.iter().zip(images.iter()) {
            let dollars = rng.gen_range(PRICE_DOLLARS);
            let rating = (rng.gen_range(3.0..5.0) * 10.0f64).round() / 10.0;

            products.push(Product {
                id: ProductId::new(next_id),
                title: format!("{} - Premium Quality", name),
                price: Money::from_cents(dollars * 100),
                category: *category,
                rating,
                image: (*image).to_string(),
                description: format!(
                    "High-quality {} with excellent features and durability. \
                     Perfect for everyday use.",
                    name.to_lowercase()
                ),
            });
            next_id += 1;
        }
    }

    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_catalog_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        let products = build_catalog(&mut rng).unwrap();

        assert_eq!(products.len(), 25);
        for (i, p) in products.iter().enumerate() {
            assert_eq!(p.id.value(), i as u32 + 1);
        }
    }

    #[test]
    fn test_value_ranges() {
        let mut rng = StdRng::seed_from_u64(7);
        let products = build_catalog(&mut rng).unwrap();

        for p in &products {
            assert!(p.price.cents() >= 20_00, "price too low: {}", p.price);
            assert!(p.price.cents() < 520_00, "price too high: {}", p.price);
            assert!(p.price.cents() % 100 == 0, "price not whole dollars");
            assert!((3.0..=5.0).contains(&p.rating), "rating {}", p.rating);
        }
    }

    #[test]
    fn test_deterministic_per_seed() {
        let a = build_catalog(&mut StdRng::seed_from_u64(99)).unwrap();
        let b = build_catalog(&mut StdRng::seed_from_u64(99)).unwrap();
        let c = build_catalog(&mut StdRng::seed_from_u64(100)).unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_titles_and_descriptions() {
        let products = build_catalog(&mut StdRng::seed_from_u64(1)).unwrap();

        let laptop = &products[0];
        assert_eq!(laptop.title, "Laptop - Premium Quality");
        assert_eq!(laptop.category, Category::Electronics);
        assert!(laptop.description.contains("laptop"));
        assert!(laptop.image.starts_with("https://"));
    }

    #[test]
    fn test_five_per_category() {
        let products = build_catalog(&mut StdRng::seed_from_u64(5)).unwrap();
        for category in Category::ALL {
            let count = products.iter().filter(|p| p.category == category).count();
            assert_eq!(count, 5);
        }
    }
}
