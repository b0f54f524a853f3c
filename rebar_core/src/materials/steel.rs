//! Reinforcing steel grades and bar geometry (IS 1786)

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::errors::{CalcError, CalcResult};

/// Characteristic yield strength grade of reinforcement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SteelGrade {
    /// fy = 415 MPa
    Fe415,
    /// fy = 500 MPa
    #[default]
    Fe500,
}

impl SteelGrade {
    /// Characteristic yield strength fy (MPa)
    pub fn fy_mpa(&self) -> f64 {
        match self {
            SteelGrade::Fe415 => 415.0,
            SteelGrade::Fe500 => 500.0,
        }
    }

    /// Parse "Fe500", "FE415" or the bare strength "500"
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let trimmed = s.trim().to_uppercase();
        let digits = trimmed.strip_prefix("FE").unwrap_or(&trimmed);
        match digits {
            "415" => Ok(SteelGrade::Fe415),
            "500" => Ok(SteelGrade::Fe500),
            _ => Err(CalcError::invalid_input(
                "steel",
                s,
                "Steel grade must be one of Fe415, Fe500",
            )),
        }
    }
}

impl std::str::FromStr for SteelGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SteelGrade::from_str_flexible(s)
    }
}

impl std::fmt::Display for SteelGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Fe{}", self.fy_mpa() as u32)
    }
}

/// Cross-sectional area of one round bar, π/4 · φ² (mm²)
#[inline]
pub fn bar_area_mm2(diameter_mm: f64) -> f64 {
    PI / 4.0 * diameter_mm.powi(2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fy_values() {
        assert_eq!(SteelGrade::Fe415.fy_mpa(), 415.0);
        assert_eq!(SteelGrade::Fe500.fy_mpa(), 500.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("Fe415".parse::<SteelGrade>().unwrap(), SteelGrade::Fe415);
        assert_eq!("500".parse::<SteelGrade>().unwrap(), SteelGrade::Fe500);
        assert!("Fe550".parse::<SteelGrade>().is_err());
    }

    #[test]
    fn test_bar_area() {
        // 16 mm bar: 201.06 mm²
        assert_abs_diff_eq!(bar_area_mm2(16.0), 201.0619, epsilon = 1e-3);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&SteelGrade::Fe415).unwrap();
        assert_eq!(json, "\"Fe415\"");
        let grade: SteelGrade = serde_json::from_str("\"Fe500\"").unwrap();
        assert_eq!(grade, SteelGrade::Fe500);
    }
}
