//! Oil quantity conversion between mass and volume
//!
//! Spilled oil is reported sometimes by mass and sometimes by volume; the
//! two are related through the oil's density. Each operation normalizes the
//! density to kg/m^3 and the quantity to its SI unit, applies
//! `volume = mass / density` or `mass = volume * density`, and converts the
//! result to the requested unit.

use crate::error::ConversionError;
use crate::registry::UnitRegistry;

/// Convert an oil mass to the equivalent volume at the given density.
pub fn mass_to_volume(
    registry: &UnitRegistry,
    mass: f64,
    mass_unit: &str,
    density: f64,
    density_unit: &str,
    volume_unit: &str,
) -> Result<f64, ConversionError> {
    let density = registry.convert("Density", density_unit, "kg/m^3", density)?;
    let mass = registry.convert("Mass", mass_unit, "kg", mass)?;
    let volume = mass / density;
    registry.convert("Volume", "m^3", volume_unit, volume)
}

/// Convert an oil volume to the equivalent mass at the given density.
pub fn volume_to_mass(
    registry: &UnitRegistry,
    volume: f64,
    volume_unit: &str,
    density: f64,
    density_unit: &str,
    mass_unit: &str,
) -> Result<f64, ConversionError> {
    let density = registry.convert("Density", density_unit, "kg/m^3", density)?;
    let volume = registry.convert("Volume", volume_unit, "m^3", volume)?;
    let mass = volume * density;
    registry.convert("Mass", "kg", mass_unit, mass)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() <= 1e-6 * b.abs().max(1.0), "{} != {}", a, b);
    }

    #[test]
    fn test_mass_to_volume() {
        let registry = UnitRegistry::build().unwrap();
        // 1000 kg at 900 kg/m^3 is 1.111 m^3, or 1111.1 liters
        let liters = mass_to_volume(&registry, 1000.0, "kg", 900.0, "kg/m^3", "liter").unwrap();
        assert_close(liters, 1111.111111111111);
    }

    #[test]
    fn test_volume_to_mass() {
        let registry = UnitRegistry::build().unwrap();
        let kg = volume_to_mass(&registry, 1111.111111111111, "liter", 900.0, "kg/m^3", "kg").unwrap();
        assert_close(kg, 1000.0);
    }

    #[test]
    fn test_round_trip_through_api_density() {
        let registry = UnitRegistry::build().unwrap();
        let volume = mass_to_volume(&registry, 50.0, "ton", 32.0, "api", "bbl").unwrap();
        let mass = volume_to_mass(&registry, volume, "bbl", 32.0, "api", "ton").unwrap();
        assert_close(mass, 50.0);
    }

    #[test]
    fn test_unknown_unit_propagates() {
        let registry = UnitRegistry::build().unwrap();
        let err = mass_to_volume(&registry, 1.0, "kg", 900.0, "kg/m^3", "banana").unwrap_err();
        assert_eq!(
            err,
            ConversionError::UnknownUnit {
                unit: "banana".to_string(),
                category: "Volume".to_string(),
            }
        );
    }
}
