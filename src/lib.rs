//! Spill Units - Physical Unit Conversion
//!
//! Unit conversion for spill response calculations: a fixed table of
//! categories, each with its units and accepted synonyms, and a converter
//! per category. Lookups are insensitive to case and whitespace.
//!
//! Categories:
//! - Length (m, km, ft, nm, etc.)
//! - Oil Concentration (micron, bbl/acre, etc.)
//! - Area (m^2, acre, hectare, etc.)
//! - Volume (m^3, liter, bbl, gal, etc.)
//! - Temperature (K, C, F)
//! - Mass (kg, lb, ton, etc.)
//! - Time (s, min, hr, day)
//! - Velocity (m/s, knots, mph, etc.)
//! - Discharge (m^3/s, cfs, gal/min, etc.)
//! - Kinematic Viscosity (St, cSt, SSU, etc.)
//! - Density (g/cm^3, kg/m^3, API degree, etc.)
//! - Concentration In Water (ppm, ppb, mg/l, etc.)
//!
//! The convenience functions below share one process-wide registry, built
//! on first use. Callers that want an explicit handle can build their own
//! [`UnitRegistry`].
//!
//! ```
//! let feet = spill_units::convert("Length", "meter", "feet", 1.0).unwrap();
//! assert!((feet - 3.2808398950).abs() < 1e-9);
//! ```

mod converter;
mod error;
mod oil;
mod registry;
mod units;

pub use converter::Converter;
pub use error::ConversionError;
pub use registry::{UnitRegistry, REGISTRY};
pub use units::{AffineUnit, CategoryDef, CategoryUnits, LinearUnit, UNIT_TABLE};

/// Convert `value` from `from_unit` to `to_unit` within a category.
pub fn convert(
    category: &str,
    from_unit: &str,
    to_unit: &str,
    value: f64,
) -> Result<f64, ConversionError> {
    REGISTRY.convert(category, from_unit, to_unit, value)
}

/// All category display names.
pub fn list_categories() -> Vec<&'static str> {
    REGISTRY.categories()
}

/// Canonical unit names of one category.
pub fn list_units(category: &str) -> Result<Vec<&'static str>, ConversionError> {
    REGISTRY.units(category)
}

/// The standard abbreviation for a unit (first declared synonym).
pub fn get_abbreviation(category: &str, unit: &str) -> Result<&'static str, ConversionError> {
    REGISTRY.abbreviation(category, unit)
}

/// Whether two unit names are synonyms for the same unit, in the same
/// category. Unknown names yield `false`.
pub fn is_same_unit(unit1: &str, unit2: &str) -> bool {
    REGISTRY.is_same_unit(unit1, unit2)
}

/// Convert an oil mass to volume at the given density.
pub fn oil_mass_to_volume(
    mass: f64,
    mass_unit: &str,
    density: f64,
    density_unit: &str,
    volume_unit: &str,
) -> Result<f64, ConversionError> {
    oil::mass_to_volume(&REGISTRY, mass, mass_unit, density, density_unit, volume_unit)
}

/// Convert an oil volume to mass at the given density.
pub fn oil_volume_to_mass(
    volume: f64,
    volume_unit: &str,
    density: f64,
    density_unit: &str,
    mass_unit: &str,
) -> Result<f64, ConversionError> {
    oil::volume_to_mass(&REGISTRY, volume, volume_unit, density, density_unit, mass_unit)
}
