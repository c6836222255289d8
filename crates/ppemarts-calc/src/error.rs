//! Error types for the requirement calculator.

use ppemarts_core::error::PpeError;
use ppemarts_core::EquipmentKey;

/// Input the calculator refuses to compute on.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalcError {
    #[error("Please select at least one PPE item for calculation.")]
    EmptySelection,
    #[error("number of workers must be between 1 and {max}")]
    InvalidWorkers { max: u32 },
    #[error("number of work days must be between 1 and {max}")]
    InvalidWorkDays { max: u32 },
    #[error("equipment item '{0}' is selected more than once")]
    DuplicateItem(EquipmentKey),
    #[error("requested quantities are too large to compute")]
    QuantityOverflow,
}

impl From<CalcError> for PpeError {
    fn from(err: CalcError) -> Self {
        PpeError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calc_error_display() {
        assert_eq!(
            CalcError::EmptySelection.to_string(),
            "Please select at least one PPE item for calculation."
        );
        assert_eq!(
            CalcError::InvalidWorkers { max: 500 }.to_string(),
            "number of workers must be between 1 and 500"
        );
        assert_eq!(
            CalcError::DuplicateItem(EquipmentKey::FaceShield).to_string(),
            "equipment item 'faceShield' is selected more than once"
        );
    }

    #[test]
    fn test_calc_error_into_invalid_input() {
        let err: PpeError = CalcError::EmptySelection.into();
        assert!(matches!(err, PpeError::InvalidInput(_)));
    }
}
