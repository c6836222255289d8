//! Equipment consumption table and calculator presets.
//!
//! Rates are stored in thousandths of a unit per worker per day so the
//! calculator can round up with integer arithmetic.

use serde::Serialize;

use crate::types::{EquipmentKey, Preset};

/// Denominator for [`EquipmentItem::rate_millis`].
pub const RATE_SCALE: u64 = 1000;

/// Static definition of one equipment type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquipmentItem {
    pub key: EquipmentKey,
    pub name: &'static str,
    pub description: &'static str,
    /// Unit label ("pieces", "pairs").
    pub unit: &'static str,
    /// Consumption per worker per day, in thousandths.
    pub rate_millis: u32,
}

impl EquipmentItem {
    /// Consumption per worker per day as a decimal, for display.
    pub fn rate(&self) -> f64 {
        f64::from(self.rate_millis) / RATE_SCALE as f64
    }
}

/// JSON view of an equipment item.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EquipmentItemView {
    pub key: EquipmentKey,
    pub name: &'static str,
    pub description: &'static str,
    pub unit: &'static str,
    pub per_worker_per_day: f64,
}

impl From<&EquipmentItem> for EquipmentItemView {
    fn from(item: &EquipmentItem) -> Self {
        Self {
            key: item.key,
            name: item.name,
            description: item.description,
            unit: item.unit,
            per_worker_per_day: item.rate(),
        }
    }
}

static ITEMS: [EquipmentItem; 9] = [
    EquipmentItem {
        key: EquipmentKey::Mask,
        name: "Face Masks",
        description: "Surgical/N95 masks",
        unit: "pieces",
        rate_millis: 2000,
    },
    EquipmentItem {
        key: EquipmentKey::Gloves,
        name: "Gloves",
        description: "Disposable latex/nitrile gloves",
        unit: "pairs",
        rate_millis: 2000,
    },
    EquipmentItem {
        key: EquipmentKey::Gown,
        name: "Disposable Gowns",
        description: "Protective gowns/coveralls",
        unit: "pieces",
        rate_millis: 500,
    },
    EquipmentItem {
        key: EquipmentKey::FaceShield,
        name: "Face Shields",
        description: "Reusable face shields",
        unit: "pieces",
        rate_millis: 200,
    },
    EquipmentItem {
        key: EquipmentKey::Goggles,
        name: "Safety Goggles",
        description: "Protective eyewear",
        unit: "pairs",
        rate_millis: 100,
    },
    EquipmentItem {
        key: EquipmentKey::Respirator,
        name: "Respirators",
        description: "Half/full face respirators",
        unit: "pieces",
        rate_millis: 50,
    },
    EquipmentItem {
        key: EquipmentKey::Harness,
        name: "Safety Harness",
        description: "Full body harness",
        unit: "pieces",
        rate_millis: 10,
    },
    EquipmentItem {
        key: EquipmentKey::Helmet,
        name: "Safety Helmet",
        description: "Hard hats/helmets",
        unit: "pieces",
        rate_millis: 10,
    },
    EquipmentItem {
        key: EquipmentKey::Shoes,
        name: "Safety Shoes",
        description: "Steel-toe boots",
        unit: "pairs",
        rate_millis: 5,
    },
];

/// Every equipment definition, in form order.
pub fn items() -> &'static [EquipmentItem] {
    &ITEMS
}

/// Definition for a key. Every key has exactly one entry.
pub fn item(key: EquipmentKey) -> &'static EquipmentItem {
    // ITEMS is declared in EquipmentKey::ALL order.
    &ITEMS[key as usize]
}

impl Preset {
    /// Fixed members of the preset. Empty for [`Preset::Custom`].
    pub fn members(&self) -> &'static [EquipmentKey] {
        use EquipmentKey::*;
        match self {
            Preset::Basic => &[Mask, Gloves, Gown],
            Preset::Full => &[Mask, Gloves, Gown, FaceShield, Goggles],
            Preset::Respiratory => &[Mask, Gloves, Respirator, Goggles],
            Preset::Fall => &[Helmet, Harness, Shoes, Gloves],
            Preset::Custom => &[],
        }
    }
}

/// Custom checkboxes ticked when the calculator form is reset.
pub const DEFAULT_CUSTOM_ITEMS: [EquipmentKey; 2] = [EquipmentKey::Mask, EquipmentKey::Gloves];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_lookup_matches_key() {
        for key in EquipmentKey::ALL {
            assert_eq!(item(key).key, key);
        }
    }

    #[test]
    fn test_table_order_matches_key_order() {
        let keys: Vec<EquipmentKey> = items().iter().map(|i| i.key).collect();
        assert_eq!(keys, EquipmentKey::ALL.to_vec());
    }

    #[test]
    fn test_rates_strictly_positive() {
        for i in items() {
            assert!(i.rate_millis > 0, "{} has a zero rate", i.name);
        }
    }

    #[test]
    fn test_rate_as_decimal() {
        assert_eq!(item(EquipmentKey::Mask).rate(), 2.0);
        assert_eq!(item(EquipmentKey::Gown).rate(), 0.5);
        assert_eq!(item(EquipmentKey::Shoes).rate(), 0.005);
    }

    #[test]
    fn test_preset_members() {
        assert_eq!(
            Preset::Basic.members(),
            &[EquipmentKey::Mask, EquipmentKey::Gloves, EquipmentKey::Gown]
        );
        assert_eq!(Preset::Full.members().len(), 5);
        assert!(Preset::Fall.members().contains(&EquipmentKey::Harness));
        assert!(Preset::Custom.members().is_empty());
    }

    #[test]
    fn test_view_serializes_rate() {
        let view = EquipmentItemView::from(item(EquipmentKey::FaceShield));
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["key"], "faceShield");
        assert_eq!(json["perWorkerPerDay"], 0.2);
        assert_eq!(json["unit"], "pieces");
    }
}
