//! Calculator form state: current inputs plus the last computed result.

use serde::Serialize;

use ppemarts_core::equipment::DEFAULT_CUSTOM_ITEMS;
use ppemarts_core::{EquipmentKey, Preset};

use crate::calculator::{Calculation, Calculator};
use crate::error::CalcError;

pub const DEFAULT_WORKERS: u32 = 10;
pub const DEFAULT_WORK_DAYS: u32 = 22;

/// Values behind the calculator form.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    pub workers: u32,
    pub work_days: u32,
    pub preset: Preset,
    /// Ticked boxes in the custom section; only used when `preset` is custom.
    pub custom_items: Vec<EquipmentKey>,
    pub results: Option<Calculation>,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            work_days: DEFAULT_WORK_DAYS,
            preset: Preset::Basic,
            custom_items: DEFAULT_CUSTOM_ITEMS.to_vec(),
            results: None,
        }
    }
}

impl CalculatorState {
    /// Keys the next computation will run over.
    pub fn selection(&self) -> Vec<EquipmentKey> {
        Calculator::selection(self.preset, &self.custom_items)
    }

    /// Run the calculator on the current inputs and keep the result.
    ///
    /// On error the previous result is left in place.
    pub fn compute(&mut self, calculator: &Calculator) -> Result<&Calculation, CalcError> {
        let calculation = calculator.calculate(self.workers, self.work_days, &self.selection())?;
        Ok(&*self.results.insert(calculation))
    }

    /// Restore default inputs and clear results.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
