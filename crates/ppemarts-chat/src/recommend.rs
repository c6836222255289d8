//! Keyword-driven product recommendations.
//!
//! Unlike the fallback replies, every matching keyword contributes its
//! category, so "gloves and goggles" recommends hand and eye products.

use rand::seq::index;
use rand::Rng;

use ppemarts_core::config::{FallbackMode, RecommendationConfig};
use ppemarts_core::{Category, Product};

/// Keyword to category table, scanned in order.
static CATEGORY_KEYWORDS: &[(&str, Category)] = &[
    ("mask", Category::Respiratory),
    ("respirator", Category::Respiratory),
    ("breathing", Category::Respiratory),
    ("lung", Category::Respiratory),
    ("n95", Category::Respiratory),
    ("helmet", Category::Head),
    ("hard hat", Category::Head),
    ("head", Category::Head),
    ("goggle", Category::Eye),
    ("glasses", Category::Eye),
    ("eye", Category::Eye),
    ("vision", Category::Eye),
    ("glove", Category::Hand),
    ("hand", Category::Hand),
    ("suit", Category::Body),
    ("gown", Category::Body),
    ("vest", Category::Body),
    ("body", Category::Body),
    ("ppe kit", Category::Body),
    ("shoe", Category::Foot),
    ("boot", Category::Foot),
    ("foot", Category::Foot),
    ("harness", Category::Fall),
    ("fall", Category::Fall),
    ("height", Category::Fall),
    ("lanyard", Category::Fall),
];

/// Picks catalog products relevant to a visitor message.
#[derive(Debug, Clone)]
pub struct Recommender {
    limit: usize,
    fallback: FallbackMode,
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new(&RecommendationConfig::default())
    }
}

impl Recommender {
    pub fn new(config: &RecommendationConfig) -> Self {
        Self {
            limit: config.limit,
            fallback: config.fallback,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Every category with at least one keyword in `message`, in first-match
    /// order and without repeats.
    pub fn matched_categories(&self, message: &str) -> Vec<Category> {
        let lowered = message.to_lowercase();
        let mut categories = Vec::new();
        for (keyword, category) in CATEGORY_KEYWORDS {
            if lowered.contains(keyword) && !categories.contains(category) {
                categories.push(*category);
            }
        }
        categories
    }

    /// Recommend up to `limit` products for `message`.
    ///
    /// With matched categories the result is a catalog-order prefix of the
    /// matching products. Without, the configured fallback applies: a
    /// uniform sample without replacement drawn from `rng`, or nothing.
    pub fn recommend<'a, R>(
        &self,
        message: &str,
        products: &'a [Product],
        rng: &mut R,
    ) -> Vec<&'a Product>
    where
        R: Rng + ?Sized,
    {
        let categories = self.matched_categories(message);

        if categories.is_empty() {
            return match self.fallback {
                FallbackMode::Empty => Vec::new(),
                FallbackMode::RandomSample => {
                    let amount = self.limit.min(products.len());
                    index::sample(rng, products.len(), amount)
                        .into_iter()
                        .map(|i| &products[i])
                        .collect()
                }
            };
        }

        tracing::debug!(?categories, "Recommendation categories matched");

        products
            .iter()
            .filter(|p| categories.contains(&p.category))
            .take(self.limit)
            .collect()
    }
}
