//! Static product catalog.
//!
//! The catalog is compiled into the binary and shared read-only by every
//! request. Order matters: filters and recommendations preserve it.

use crate::types::{Category, Product};

static PRODUCTS: [Product; 9] = [
    Product {
        id: 1,
        name: "Personal Protective Equipment KIT (PPE KIT)",
        category: Category::Body,
        brand: "SafetyPro",
        image: "assets/images/products/ppe-kit.jpg",
        affiliate_link: "https://amzn.to/4bcAm6e",
        description: "Complete PPE kit for full body protection",
        rating: 4.5,
        badge: Some("Bestseller"),
    },
    Product {
        id: 2,
        name: "Serplex Gas Mask Set Respirator",
        category: Category::Respiratory,
        brand: "Serplex",
        image: "assets/images/products/gas-mask.jpg",
        affiliate_link: "https://amzn.to/4s4Fr6K",
        description: "Gas mask with respirator for chemical protection",
        rating: 4.3,
        badge: Some("Industrial"),
    },
    Product {
        id: 3,
        name: "Non Woven Polypropylene Disposable Gown",
        category: Category::Body,
        brand: "MediSafe",
        image: "assets/images/products/disposable-gown.jpg",
        affiliate_link: "https://amzn.to/49rqlRr",
        description: "Disposable protective gown for medical use",
        rating: 4.2,
        badge: Some("Medical"),
    },
    Product {
        id: 4,
        name: "CF IND Full Body Safety Harness",
        category: Category::Fall,
        brand: "CF IND",
        image: "assets/images/products/safety-harness.jpg",
        affiliate_link: "https://amzn.to/4jh3StM",
        description: "Full body harness for fall protection",
        rating: 4.7,
        badge: Some("Premium"),
    },
    Product {
        id: 5,
        name: "Karam Magna Premium Full Body Safety Harness",
        category: Category::Fall,
        brand: "Karam",
        image: "assets/images/products/premium-harness.jpg",
        affiliate_link: "https://amzn.to/494Ws89",
        description: "Premium safety harness with comfort padding",
        rating: 4.8,
        badge: Some("Top Rated"),
    },
    Product {
        id: 6,
        name: "Safety Goggles Anti-Fog",
        category: Category::Eye,
        brand: "VisionSafe",
        image: "assets/images/products/safety-goggles.jpg",
        affiliate_link: "#",
        description: "Anti-fog safety goggles with UV protection",
        rating: 4.4,
        badge: None,
    },
    Product {
        id: 7,
        name: "Industrial Safety Helmet",
        category: Category::Head,
        brand: "HardHat Pro",
        image: "assets/images/products/safety-helmet.jpg",
        affiliate_link: "#",
        description: "Industrial safety helmet with chin strap",
        rating: 4.6,
        badge: Some("Bestseller"),
    },
    Product {
        id: 8,
        name: "Safety Shoes Steel Toe",
        category: Category::Foot,
        brand: "FootGuard",
        image: "assets/images/products/safety-shoes.jpg",
        affiliate_link: "#",
        description: "Steel toe safety shoes with slip resistance",
        rating: 4.5,
        badge: None,
    },
    Product {
        id: 9,
        name: "Nitrile Gloves Box of 100",
        category: Category::Hand,
        brand: "GloveMaster",
        image: "assets/images/products/nitrile-gloves.jpg",
        affiliate_link: "#",
        description: "Nitrile gloves box of 100 pieces",
        rating: 4.7,
        badge: Some("Medical"),
    },
];

/// Read-only view over a product list.
#[derive(Debug, Clone, Copy)]
pub struct Catalog {
    products: &'static [Product],
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The catalog shipped with the site.
    pub fn builtin() -> Self {
        Self {
            products: &PRODUCTS,
        }
    }

    /// Wrap an arbitrary static product list (used by tests and demos).
    pub fn from_static(products: &'static [Product]) -> Self {
        Self { products }
    }

    /// All products in catalog order.
    pub fn all(&self) -> &'static [Product] {
        self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Look up a product by its identifier.
    pub fn by_id(&self, id: u32) -> Option<&'static Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Products in the given category, in catalog order.
    ///
    /// `None` means "all".
    pub fn filter(&self, category: Option<Category>) -> Vec<&'static Product> {
        self.products
            .iter()
            .filter(|p| category.map_or(true, |c| p.category == c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_catalog_has_nine_products() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 9);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn test_product_ids_are_unique() {
        let ids: HashSet<u32> = Catalog::builtin().all().iter().map(|p| p.id).collect();
        assert_eq!(ids.len(), 9);
    }

    #[test]
    fn test_ratings_in_range() {
        for p in Catalog::builtin().all() {
            assert!(p.rating > 0.0 && p.rating <= 5.0, "{} has rating {}", p.name, p.rating);
        }
    }

    #[test]
    fn test_by_id() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.by_id(7).unwrap().name, "Industrial Safety Helmet");
        assert!(catalog.by_id(0).is_none());
        assert!(catalog.by_id(10).is_none());
    }

    #[test]
    fn test_filter_all_keeps_catalog_order() {
        let all = Catalog::builtin().filter(None);
        let ids: Vec<u32> = all.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = Catalog::builtin();

        let body: Vec<u32> = catalog.filter(Some(Category::Body)).iter().map(|p| p.id).collect();
        assert_eq!(body, vec![1, 3]);

        let fall: Vec<u32> = catalog.filter(Some(Category::Fall)).iter().map(|p| p.id).collect();
        assert_eq!(fall, vec![4, 5]);
    }

    #[test]
    fn test_filter_empty_category() {
        // No hearing protection is stocked yet.
        assert!(Catalog::builtin().filter(Some(Category::Hearing)).is_empty());
    }
}
