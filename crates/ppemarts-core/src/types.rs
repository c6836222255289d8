use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PpeError;

// =============================================================================
// Enums
// =============================================================================

/// Protection category a product belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Masks and respirators.
    Respiratory,
    /// Helmets and hard hats.
    Head,
    /// Goggles and safety glasses.
    Eye,
    /// Ear plugs and muffs.
    Hearing,
    /// Gloves.
    Hand,
    /// Vests, suits, gowns and kits.
    Body,
    /// Safety shoes and boots.
    Foot,
    /// Harnesses and lanyards.
    Fall,
}

impl Category {
    /// Every category, in the order the site lists them.
    pub const ALL: [Category; 8] = [
        Category::Respiratory,
        Category::Head,
        Category::Eye,
        Category::Hearing,
        Category::Hand,
        Category::Body,
        Category::Foot,
        Category::Fall,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Respiratory => "respiratory",
            Category::Head => "head",
            Category::Eye => "eye",
            Category::Hearing => "hearing",
            Category::Hand => "hand",
            Category::Body => "body",
            Category::Foot => "foot",
            Category::Fall => "fall",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = PpeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PpeError::InvalidInput(format!("unknown category '{}'", s)))
    }
}

/// Equipment types the calculator knows consumption rates for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EquipmentKey {
    Mask,
    Gloves,
    Gown,
    FaceShield,
    Goggles,
    Respirator,
    Harness,
    Helmet,
    Shoes,
}

impl EquipmentKey {
    pub const ALL: [EquipmentKey; 9] = [
        EquipmentKey::Mask,
        EquipmentKey::Gloves,
        EquipmentKey::Gown,
        EquipmentKey::FaceShield,
        EquipmentKey::Goggles,
        EquipmentKey::Respirator,
        EquipmentKey::Harness,
        EquipmentKey::Helmet,
        EquipmentKey::Shoes,
    ];

    /// Wire name, as used by the calculator form.
    pub fn as_str(&self) -> &'static str {
        match self {
            EquipmentKey::Mask => "mask",
            EquipmentKey::Gloves => "gloves",
            EquipmentKey::Gown => "gown",
            EquipmentKey::FaceShield => "faceShield",
            EquipmentKey::Goggles => "goggles",
            EquipmentKey::Respirator => "respirator",
            EquipmentKey::Harness => "harness",
            EquipmentKey::Helmet => "helmet",
            EquipmentKey::Shoes => "shoes",
        }
    }
}

impl fmt::Display for EquipmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EquipmentKey {
    type Err = PpeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EquipmentKey::ALL
            .into_iter()
            .find(|k| k.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PpeError::InvalidInput(format!("unknown equipment item '{}'", s)))
    }
}

/// Named equipment sets offered by the calculator.
///
/// `Custom` has no fixed members; the caller supplies the keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preset {
    #[default]
    Basic,
    Full,
    Respiratory,
    Fall,
    Custom,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Basic,
        Preset::Full,
        Preset::Respiratory,
        Preset::Fall,
        Preset::Custom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Preset::Basic => "basic",
            Preset::Full => "full",
            Preset::Respiratory => "respiratory",
            Preset::Fall => "fall",
            Preset::Custom => "custom",
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preset {
    type Err = PpeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Preset::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PpeError::InvalidInput(format!("unknown preset '{}'", s)))
    }
}

// =============================================================================
// Structs
// =============================================================================

/// A catalog product. Defined in static data and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u32,
    pub name: &'static str,
    pub category: Category,
    pub brand: &'static str,
    /// Relative path to the product image.
    pub image: &'static str,
    /// External affiliate purchase link ("#" when not yet assigned).
    pub affiliate_link: &'static str,
    pub description: &'static str,
    pub rating: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<&'static str>,
}

/// One prior message in a conversation, as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationTurn {
    /// `"user"` for the visitor; anything else is treated as the assistant.
    pub sender: String,
    pub text: String,
}

impl ConversationTurn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: "user".to_string(),
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            sender: "bot".to_string(),
            text: text.into(),
        }
    }

    /// Whether this turn was written by the visitor.
    pub fn is_user(&self) -> bool {
        self.sender == "user"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&Category::Respiratory).unwrap(),
            "\"respiratory\""
        );
        let parsed: Category = serde_json::from_str("\"fall\"").unwrap();
        assert_eq!(parsed, Category::Fall);
        assert!(serde_json::from_str::<Category>("\"arm\"").is_err());
    }

    #[test]
    fn test_category_from_str() {
        assert_eq!("HAND".parse::<Category>().unwrap(), Category::Hand);
        assert_eq!(" eye ".parse::<Category>().unwrap(), Category::Eye);
        let err = "legs".parse::<Category>().unwrap_err();
        assert!(matches!(err, PpeError::InvalidInput(_)));
    }

    #[test]
    fn test_category_display_matches_wire_name() {
        for c in Category::ALL {
            let json = serde_json::to_string(&c).unwrap();
            assert_eq!(json, format!("\"{}\"", c));
        }
    }

    #[test]
    fn test_equipment_key_wire_names() {
        assert_eq!(
            serde_json::to_string(&EquipmentKey::FaceShield).unwrap(),
            "\"faceShield\""
        );
        for key in EquipmentKey::ALL {
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
        assert!(serde_json::from_str::<EquipmentKey>("\"boots\"").is_err());
    }

    #[test]
    fn test_equipment_key_from_str_case_insensitive() {
        assert_eq!(
            "faceshield".parse::<EquipmentKey>().unwrap(),
            EquipmentKey::FaceShield
        );
        assert!("visor".parse::<EquipmentKey>().is_err());
    }

    #[test]
    fn test_preset_default_is_basic() {
        assert_eq!(Preset::default(), Preset::Basic);
        assert_eq!("custom".parse::<Preset>().unwrap(), Preset::Custom);
        assert!("deluxe".parse::<Preset>().is_err());
    }

    #[test]
    fn test_product_serializes_camel_case_and_skips_missing_badge() {
        let product = Product {
            id: 6,
            name: "Safety Goggles Anti-Fog",
            category: Category::Eye,
            brand: "VisionSafe",
            image: "assets/images/products/safety-goggles.jpg",
            affiliate_link: "#",
            description: "Anti-fog safety goggles with UV protection",
            rating: 4.4,
            badge: None,
        };
        let json = serde_json::to_value(product).unwrap();
        assert_eq!(json["affiliateLink"], "#");
        assert_eq!(json["category"], "eye");
        assert!(json.get("badge").is_none());
    }

    #[test]
    fn test_conversation_turn_roles() {
        assert!(ConversationTurn::user("hi").is_user());
        assert!(!ConversationTurn::assistant("hello").is_user());

        let turn: ConversationTurn =
            serde_json::from_str(r#"{"sender":"assistant","text":"ok"}"#).unwrap();
        assert!(!turn.is_user());
    }
}
