//! # Member Calculations
//!
//! Each calculator follows the pattern:
//!
//! - `*Input` - Input parameters (JSON-serializable)
//! - `*Result` - Calculation results (JSON-serializable)
//! - `calculate(input) -> Result<*Result, CalcError>` - Pure calculation function
//!
//! Calculators are independent of one another and hold no state; the same
//! input always yields the same result.
//!
//! ## Available Calculations
//!
//! - [`beam`] - Rectangular beam flexure, shear and span/depth check
//! - [`column`] - Rectangular column under axial load and biaxial bending
//! - [`foundation`] - Square isolated footing sizing and one-way shear

pub mod beam;
pub mod column;
pub mod foundation;

use serde::{Deserialize, Serialize};

use crate::equations::registry::Equation;
use crate::errors::CalcResult;

// Re-export commonly used types
pub use beam::{BeamInput, BeamResult};
pub use column::{ColumnInput, ColumnResult};
pub use foundation::{FoundationInput, FoundationResult};

/// Enum wrapper for all calculation types.
///
/// Lets a single input file describe any member:
///
/// ```json
/// { "type": "Column", "label": "C-1", "width_mm": 300.0, ... }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationItem {
    /// Rectangular beam
    Beam(BeamInput),
    /// Rectangular column, biaxial bending
    Column(ColumnInput),
    /// Square isolated footing
    Foundation(FoundationInput),
}

impl CalculationItem {
    /// Get the user-provided label for this calculation
    pub fn label(&self) -> &str {
        match self {
            CalculationItem::Beam(b) => &b.label,
            CalculationItem::Column(c) => &c.label,
            CalculationItem::Foundation(f) => &f.label,
        }
    }

    /// Get the calculation type as a string
    pub fn calc_type(&self) -> &'static str {
        match self {
            CalculationItem::Beam(_) => "Beam",
            CalculationItem::Column(_) => "Column",
            CalculationItem::Foundation(_) => "Foundation",
        }
    }

    /// Run the matching calculator.
    pub fn evaluate(&self) -> CalcResult<CalculationOutcome> {
        Ok(match self {
            CalculationItem::Beam(input) => CalculationOutcome::Beam(beam::calculate(input)?),
            CalculationItem::Column(input) => CalculationOutcome::Column(column::calculate(input)?),
            CalculationItem::Foundation(input) => {
                CalculationOutcome::Foundation(foundation::calculate(input)?)
            }
        })
    }
}

/// Result of evaluating a [`CalculationItem`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationOutcome {
    Beam(BeamResult),
    Column(ColumnResult),
    Foundation(FoundationResult),
}

impl CalculationOutcome {
    /// Overall pass/fail verdict of the member
    pub fn passes(&self) -> bool {
        match self {
            CalculationOutcome::Beam(r) => r.passes(),
            CalculationOutcome::Column(r) => r.passes(),
            CalculationOutcome::Foundation(r) => r.passes(),
        }
    }

    /// Equations the calculator applied, in evaluation order
    pub fn equations(&self) -> &[Equation] {
        match self {
            CalculationOutcome::Beam(r) => &r.equations,
            CalculationOutcome::Column(r) => &r.equations,
            CalculationOutcome::Foundation(r) => &r.equations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_from_tagged_json() {
        let json = r#"{
            "type": "Foundation",
            "label": "F-1",
            "column_load_kn": 800.0,
            "sbc_kn_per_m2": 200.0,
            "concrete": "M25",
            "steel": "Fe500",
            "column_width_mm": 300.0,
            "thickness_mm": 500.0
        }"#;
        let item: CalculationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.label(), "F-1");
        assert_eq!(item.calc_type(), "Foundation");

        let outcome = item.evaluate().unwrap();
        assert!(matches!(outcome, CalculationOutcome::Foundation(_)));
        assert!(outcome.passes());
        assert_eq!(outcome.equations().first(), Some(&Equation::FootingArea));
        assert!(outcome.equations().contains(&Equation::FootingOneWayShear));
    }

    #[test]
    fn test_item_tag_roundtrip() {
        let item = CalculationItem::Column(ColumnInput {
            label: "C-1".to_string(),
            width_mm: 300.0,
            depth_mm: 400.0,
            cover_mm: 40.0,
            axial_load_kn: 1000.0,
            mux_knm: 60.0,
            muy_knm: 40.0,
            concrete: Default::default(),
            steel: Default::default(),
        });
        let json = serde_json::to_string(&item).unwrap();
        assert!(json.starts_with(r#"{"type":"Column""#));

        let parsed: CalculationItem = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, item);
        assert!(!parsed.evaluate().unwrap().passes());
    }

    #[test]
    fn test_evaluate_propagates_errors() {
        let item = CalculationItem::Column(ColumnInput {
            label: "C-bad".to_string(),
            width_mm: 300.0,
            depth_mm: 400.0,
            cover_mm: 400.0,
            axial_load_kn: 1000.0,
            mux_knm: 60.0,
            muy_knm: 40.0,
            concrete: Default::default(),
            steel: Default::default(),
        });
        assert_eq!(item.evaluate().unwrap_err().error_code(), "INVALID_GEOMETRY");
    }
}
