//! Concrete grades (IS 456 Table 2)
//!
//! Only the three grades offered by the design forms are supported.

use serde::{Deserialize, Serialize};

use crate::constants::SHEAR_CAPACITY_COEFF;
use crate::errors::{CalcError, CalcResult};
use crate::units::Mpa;

/// Characteristic compressive strength grade of concrete
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ConcreteGrade {
    /// fck = 20 MPa
    M20,
    /// fck = 25 MPa
    #[default]
    M25,
    /// fck = 30 MPa
    M30,
}

impl ConcreteGrade {
    /// Characteristic compressive strength fck (MPa)
    pub fn fck_mpa(&self) -> f64 {
        match self {
            ConcreteGrade::M20 => 20.0,
            ConcreteGrade::M25 => 25.0,
            ConcreteGrade::M30 => 30.0,
        }
    }

    /// Permissible shear stress τc = 0.36 √fck
    ///
    /// Simplified: real design tables make τc depend on the tension steel
    /// ratio as well as the grade.
    pub fn shear_capacity(&self) -> Mpa {
        Mpa(SHEAR_CAPACITY_COEFF * self.fck_mpa().sqrt())
    }

    /// Parse "M25", "m25" or the bare strength "25"
    pub fn from_str_flexible(s: &str) -> CalcResult<Self> {
        let trimmed = s.trim().to_uppercase();
        let digits = trimmed.strip_prefix('M').unwrap_or(&trimmed);
        match digits {
            "20" => Ok(ConcreteGrade::M20),
            "25" => Ok(ConcreteGrade::M25),
            "30" => Ok(ConcreteGrade::M30),
            _ => Err(CalcError::invalid_input(
                "concrete",
                s,
                "Concrete grade must be one of M20, M25, M30",
            )),
        }
    }
}

impl std::str::FromStr for ConcreteGrade {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConcreteGrade::from_str_flexible(s)
    }
}

impl std::fmt::Display for ConcreteGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "M{}", self.fck_mpa() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fck_values() {
        let fck: Vec<f64> = [ConcreteGrade::M20, ConcreteGrade::M25, ConcreteGrade::M30]
            .iter()
            .map(|g| g.fck_mpa())
            .collect();
        assert_eq!(fck, vec![20.0, 25.0, 30.0]);
    }

    #[test]
    fn test_shear_capacity() {
        assert_abs_diff_eq!(ConcreteGrade::M25.shear_capacity().0, 1.8, epsilon = 1e-12);
        assert_abs_diff_eq!(ConcreteGrade::M20.shear_capacity().0, 1.6100, epsilon = 1e-4);
    }

    #[test]
    fn test_parse() {
        assert_eq!("M30".parse::<ConcreteGrade>().unwrap(), ConcreteGrade::M30);
        assert_eq!("20".parse::<ConcreteGrade>().unwrap(), ConcreteGrade::M20);
        assert_eq!(" m25 ".parse::<ConcreteGrade>().unwrap(), ConcreteGrade::M25);
        assert!("M35".parse::<ConcreteGrade>().is_err());
    }

    #[test]
    fn test_serde_and_display() {
        assert_eq!(serde_json::to_string(&ConcreteGrade::M20).unwrap(), "\"M20\"");
        assert_eq!(ConcreteGrade::M30.to_string(), "M30");
    }
}
