//! # Design Equations
//!
//! All formulas evaluated by the calculators, kept in one place so they can
//! be checked against IS 456 and listed in reports.
//!
//! ## Modules
//!
//! - [`flexure`] - Design moments and tension steel
//! - [`shear`] - Nominal and footing one-way shear stress
//! - [`axial`] - Column minimum steel, squash load, biaxial interaction
//! - [`footing`] - Footing plan size, soil pressure, cantilever moment, spacing
//! - [`registry`] - Equation metadata for reports and EQUATIONS.md
//!
//! ## Sign Conventions
//!
//! All loads, moments and shears are magnitudes (non-negative). Sagging and
//! hogging are not distinguished.

pub mod axial;
pub mod flexure;
pub mod footing;
pub mod registry;
pub mod shear;

pub use axial::{biaxial_interaction, minimum_column_steel, squash_load};
pub use flexure::{
    limiting_moment, point_midspan_moment, point_midspan_shear, required_steel_area, udl_moment,
    udl_shear,
};
pub use footing::{bar_spacing_mm, cantilever_moment, net_soil_pressure, required_footing_area};
pub use registry::{
    generate_equations_appendix, generate_equations_markdown, CodeReference, Equation,
    EquationCategory, EquationMetadata, Variable, ALL_EQUATIONS,
};
pub use shear::{footing_one_way_shear_stress, nominal_shear_stress};

/// Round half away from zero to `places` decimals.
///
/// ```
/// use rebar_core::equations::round_to;
///
/// assert_eq!(round_to(6.0_f64.sqrt(), 2), 2.45);
/// assert_eq!(round_to(1.53329, 3), 1.533);
/// ```
pub fn round_to(value: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (value * scale).round() / scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(322.6522, 2), 322.65);
        assert_eq!(round_to(2.444, 2), 2.44);
        assert_eq!(round_to(-1.2345, 1), -1.2);
    }
}
