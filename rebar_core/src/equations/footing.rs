//! Isolated square footing sizing

use crate::constants::SOIL_SAFETY_FACTOR;

/// Required plan area A = Pu / (SBC / FS) in m², with Pu in kN and SBC in kN/m²
#[inline]
pub fn required_footing_area(pu_kn: f64, sbc: f64) -> f64 {
    pu_kn / (sbc / SOIL_SAFETY_FACTOR)
}

/// Net upward soil pressure q = Pu / B² (kN/m²)
#[inline]
pub fn net_soil_pressure(pu_kn: f64, side_m: f64) -> f64 {
    pu_kn / side_m.powi(2)
}

/// Cantilever moment at the column face, Mu = q ((B − c)/2)² / 2 (kN·m per m width)
#[inline]
pub fn cantilever_moment(q: f64, side_m: f64, column_m: f64) -> f64 {
    let projection = (side_m - column_m) / 2.0;
    q * projection.powi(2) / 2.0
}

/// Centre-to-centre spacing giving `ast_per_m` mm² per metre width, floored to whole mm
#[inline]
pub fn bar_spacing_mm(bar_area_mm2: f64, ast_per_m: f64) -> f64 {
    (bar_area_mm2 * 1000.0 / ast_per_m).floor()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_required_area() {
        assert_relative_eq!(required_footing_area(800.0, 200.0), 6.0, max_relative = 1e-12);
    }

    #[test]
    fn test_net_pressure() {
        assert_relative_eq!(net_soil_pressure(800.0, 2.0), 200.0);
    }

    #[test]
    fn test_cantilever_moment() {
        // projection 1.0 m, q 100 => 100 * 1 / 2
        assert_relative_eq!(cantilever_moment(100.0, 2.3, 0.3), 50.0, max_relative = 1e-12);
    }

    #[test]
    fn test_spacing_floors() {
        assert_eq!(bar_spacing_mm(201.0619, 437.0), 460.0);
        assert_eq!(bar_spacing_mm(200.0, 1000.0), 200.0);
    }
}
