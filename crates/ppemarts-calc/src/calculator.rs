//! Monthly quantity computation.

use std::collections::HashSet;

use serde::Serialize;

use ppemarts_core::config::CalculatorConfig;
use ppemarts_core::equipment::{self, RATE_SCALE};
use ppemarts_core::{EquipmentKey, Preset};

use crate::error::CalcError;

/// One row of a calculation result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationLine {
    pub key: EquipmentKey,
    pub name: &'static str,
    pub description: &'static str,
    pub quantity: u64,
    pub unit: &'static str,
    pub per_worker_per_day: f64,
}

/// Result of one calculation, in selection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Calculation {
    pub workers: u32,
    pub work_days: u32,
    pub lines: Vec<CalculationLine>,
    pub total: u64,
}

/// Computes equipment requirements within configured input bounds.
#[derive(Debug, Clone)]
pub struct Calculator {
    max_workers: u32,
    max_work_days: u32,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new(&CalculatorConfig::default())
    }
}

impl Calculator {
    pub fn new(config: &CalculatorConfig) -> Self {
        Self {
            max_workers: config.max_workers,
            max_work_days: config.max_work_days,
        }
    }

    /// Resolve the keys a calculation runs over: the preset's fixed members,
    /// or the caller's list for [`Preset::Custom`].
    pub fn selection(preset: Preset, custom: &[EquipmentKey]) -> Vec<EquipmentKey> {
        match preset {
            Preset::Custom => custom.to_vec(),
            fixed => fixed.members().to_vec(),
        }
    }

    /// Compute `ceil(workers × rate × work_days)` for every selected item.
    pub fn calculate(
        &self,
        workers: u32,
        work_days: u32,
        selection: &[EquipmentKey],
    ) -> Result<Calculation, CalcError> {
        if selection.is_empty() {
            return Err(CalcError::EmptySelection);
        }
        if workers == 0 || workers > self.max_workers {
            return Err(CalcError::InvalidWorkers {
                max: self.max_workers,
            });
        }
        if work_days == 0 || work_days > self.max_work_days {
            return Err(CalcError::InvalidWorkDays {
                max: self.max_work_days,
            });
        }

        let mut seen = HashSet::with_capacity(selection.len());
        if let Some(dup) = selection.iter().find(|k| !seen.insert(**k)) {
            return Err(CalcError::DuplicateItem(*dup));
        }

        let mut lines = Vec::with_capacity(selection.len());
        let mut total = 0u64;
        for &key in selection {
            let item = equipment::item(key);
            let quantity = monthly_quantity(workers, work_days, item.rate_millis)
                .ok_or(CalcError::QuantityOverflow)?;
            total = total
                .checked_add(quantity)
                .ok_or(CalcError::QuantityOverflow)?;
            lines.push(CalculationLine {
                key,
                name: item.name,
                description: item.description,
                quantity,
                unit: item.unit,
                per_worker_per_day: item.rate(),
            });
        }

        tracing::debug!(workers, work_days, items = lines.len(), total, "Calculated PPE requirements");

        Ok(Calculation {
            workers,
            work_days,
            lines,
            total,
        })
    }
}

/// Exact ceiling of `workers × (rate_millis / 1000) × work_days`, or `None`
/// if the intermediate product does not fit in a `u64`.
fn monthly_quantity(workers: u32, work_days: u32, rate_millis: u32) -> Option<u64> {
    u64::from(workers)
        .checked_mul(u64::from(work_days))?
        .checked_mul(u64::from(rate_millis))
        .map(|scaled| scaled.div_ceil(RATE_SCALE))
}
