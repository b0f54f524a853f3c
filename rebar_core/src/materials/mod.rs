//! # Materials
//!
//! Concrete and reinforcing steel grades accepted by the calculators.
//! Both are closed sets: the design forms only offer M20/M25/M30 concrete and
//! Fe415/Fe500 steel.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::materials::{ConcreteGrade, SteelGrade};
//!
//! let concrete: ConcreteGrade = "M25".parse().unwrap();
//! let steel: SteelGrade = "500".parse().unwrap();
//!
//! assert_eq!(concrete.fck_mpa(), 25.0);
//! assert_eq!(steel.fy_mpa(), 500.0);
//! ```

pub mod concrete;
pub mod steel;

pub use concrete::ConcreteGrade;
pub use steel::{bar_area_mm2, SteelGrade};
