//! # rebar_core - Preliminary RC Member Design Checks
//!
//! `rebar_core` sizes reinforcement and runs code checks for reinforced
//! concrete beams, columns and isolated footings following simplified
//! IS 456:2000 limit-state formulas. All inputs and outputs are
//! JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: Pure functions that take input and return results
//! - **JSON-First**: All input and result types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use rebar_core::calculations::ColumnInput;
//! use rebar_core::materials::{ConcreteGrade, SteelGrade};
//!
//! let column = ColumnInput {
//!     label: "C-1".to_string(),
//!     width_mm: 300.0,
//!     depth_mm: 400.0,
//!     cover_mm: 40.0,
//!     axial_load_kn: 1000.0,
//!     mux_knm: 60.0,
//!     muy_knm: 40.0,
//!     concrete: ConcreteGrade::M25,
//!     steel: SteelGrade::Fe500,
//! };
//!
//! let result = rebar_core::evaluate_column(&column).unwrap();
//! assert_eq!(result.interaction_ratio, 1.533);
//! assert!(!result.passes());
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Beam, column and footing calculators
//! - [`equations`] - Formulas and the equation registry
//! - [`materials`] - Concrete and steel grades, bar areas
//! - [`loads`] - Beam load cases and support conditions
//! - [`report`] - Plain-text summaries
//! - [`constants`] - Design coefficients
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod calculations;
pub mod constants;
pub mod equations;
pub mod errors;
pub mod loads;
pub mod materials;
pub mod report;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{
    BeamInput, BeamResult, CalculationItem, CalculationOutcome, ColumnInput, ColumnResult,
    FoundationInput, FoundationResult,
};
pub use errors::{CalcError, CalcResult};

/// Evaluate a beam. See [`calculations::beam`].
pub fn evaluate_beam(input: &BeamInput) -> CalcResult<BeamResult> {
    calculations::beam::calculate(input)
}

/// Evaluate a column. See [`calculations::column`].
pub fn evaluate_column(input: &ColumnInput) -> CalcResult<ColumnResult> {
    calculations::column::calculate(input)
}

/// Evaluate an isolated footing. See [`calculations::foundation`].
pub fn evaluate_foundation(input: &FoundationInput) -> CalcResult<FoundationResult> {
    calculations::foundation::calculate(input)
}
