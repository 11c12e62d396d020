//! Product fixtures

use crate::{
    prices::Price,
    products::{Category, Product, ProductId},
};

fn product(
    id: &str,
    name: &str,
    artisan: &str,
    category: Category,
    price: u64,
    original_price: Option<u64>,
    image: &str,
    rating: f32,
    reviews: u32,
) -> Product {
    Product {
        id: ProductId::from(id),
        name: name.to_string(),
        artisan: artisan.to_string(),
        category,
        price: Price::from_major(price),
        original_price: original_price.map(Price::from_major),
        image: image.to_string(),
        rating,
        reviews,
        new: false,
        featured: false,
    }
}

/// The storefront catalog.
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product {
            new: true,
            featured: true,
            ..product(
                "1",
                "Handcrafted Ceramic Bowl Set",
                "Maria Santos",
                Category::Pottery,
                89,
                Some(120),
                "https://images.unsplash.com/photo-1695740639466-7baecca4224d",
                4.9,
                47,
            )
        },
        Product {
            featured: true,
            ..product(
                "2",
                "Traditional Woven Table Runner",
                "Rajesh Kumar",
                Category::Textiles,
                65,
                None,
                "https://images.unsplash.com/photo-1593671186131-d58817e7dee0",
                4.8,
                32,
            )
        },
        product(
            "3",
            "Silver Pendant Necklace",
            "Elena Popov",
            Category::Jewelry,
            145,
            Some(180),
            "https://images.unsplash.com/photo-1756792339453-bc4aa26fc0cd",
            4.7,
            28,
        ),
        Product {
            new: true,
            ..product(
                "4",
                "Hand-carved Wooden Sculpture",
                "James Wilson",
                Category::WoodArt,
                220,
                None,
                "https://images.unsplash.com/photo-1643944406742-a5c2c7add564",
                4.9,
                19,
            )
        },
        product(
            "5",
            "Embroidered Throw Pillow",
            "Ana Rodriguez",
            Category::Textiles,
            42,
            Some(55),
            "https://images.unsplash.com/photo-1613544591623-38e1d59c20fe",
            4.6,
            15,
        ),
        product(
            "6",
            "Ceramic Tea Set",
            "Maria Santos",
            Category::Pottery,
            125,
            None,
            "https://images.unsplash.com/photo-1695740639466-7baecca4224d",
            4.8,
            41,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_fixture_product_passes_validation() {
        for product in products() {
            assert!(
                product.validate().is_ok(),
                "fixture product {} failed validation",
                product.id
            );
        }
    }

    #[test]
    fn fixture_product_ids_are_unique() {
        let catalog = products();
        let ids: HashSet<&str> = catalog.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(ids.len(), catalog.len(), "duplicate product id in fixtures");
    }

    #[test]
    fn every_category_is_represented() {
        let catalog = products();

        for category in [
            Category::Pottery,
            Category::Textiles,
            Category::Jewelry,
            Category::WoodArt,
        ] {
            assert!(
                catalog.iter().any(|p| p.category == category),
                "no fixture product in category {category}"
            );
        }
    }
}
