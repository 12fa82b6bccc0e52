//! Registry of converters, built once from the unit table
//!
//! The registry is the dispatch point for all conversions: it resolves a
//! category name to its converter and owns the global unit identity index
//! used by `is_same_unit`. Everything is constructed once and read-only
//! afterwards, so a single shared instance serves concurrent callers.

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::converter::{simplify, Converter};
use crate::error::ConversionError;
use crate::units::{CategoryDef, UNIT_TABLE};

/// Process-wide registry over the built-in table. Building the table can
/// only fail on a duplicate synonym, which is a configuration fault: no
/// conversion may be served in that case, so first use panics.
pub static REGISTRY: LazyLock<UnitRegistry> =
    LazyLock::new(|| UnitRegistry::build().expect("built-in unit table failed validation"));

/// Identity of a unit in the global index: its category and canonical name,
/// both normalized.
#[derive(Debug, Clone, PartialEq, Eq)]
struct UnitId {
    category: String,
    canonical: String,
}

/// Maps category names to converters and routes conversion requests.
#[derive(Debug)]
pub struct UnitRegistry {
    /// Normalized category name -> converter.
    converters: HashMap<String, Converter>,
    /// Raw synonym -> unit identity, across all categories except the
    /// excluded ones. Keys are deliberately not normalized: Density's "S"
    /// (specific gravity) and Time's "s" (second) must not collide.
    unit_index: HashMap<&'static str, UnitId>,
}

impl UnitRegistry {
    /// Build a registry from the built-in table.
    pub fn build() -> Result<Self, ConversionError> {
        Self::from_table(UNIT_TABLE)
    }

    fn from_table(table: &'static [CategoryDef]) -> Result<Self, ConversionError> {
        let mut converters = HashMap::new();
        let mut unit_index: HashMap<&'static str, UnitId> = HashMap::new();

        for def in table {
            converters.insert(simplify(def.name), Converter::new(def));

            // These two reuse common names (mm, in, kg/m^3) with different
            // semantics, so they stay out of the identity index entirely.
            if def.name == "Oil Concentration" || def.name == "Concentration In Water" {
                continue;
            }

            let category = simplify(def.name);
            for (name, synonyms) in def.names_and_synonyms() {
                let id = UnitId { category: category.clone(), canonical: simplify(name) };
                // Canonical names enter unchecked; only synonyms are
                // subject to the duplicate check.
                unit_index.insert(name, id.clone());
                for syn in synonyms {
                    if def.name == "Volume" && *syn == "oz" {
                        // "oz" means mass; the fluid ounce keeps its other
                        // names. A deliberate one-off, not to be widened.
                        continue;
                    }
                    if unit_index.contains_key(syn) {
                        return Err(ConversionError::DuplicateUnitName((*syn).to_string()));
                    }
                    unit_index.insert(syn, id.clone());
                }
            }
        }

        Ok(UnitRegistry { converters, unit_index })
    }

    /// Look up the converter for a category by any casing/spacing of its
    /// name.
    pub fn converter(&self, category: &str) -> Result<&Converter, ConversionError> {
        let key = simplify(category);
        match self.converters.get(&key) {
            Some(converter) => Ok(converter),
            None => Err(ConversionError::UnknownCategory(key)),
        }
    }

    /// Convert `value` between two units of the named category.
    pub fn convert(
        &self,
        category: &str,
        from_unit: &str,
        to_unit: &str,
        value: f64,
    ) -> Result<f64, ConversionError> {
        self.converter(category)?.convert(from_unit, to_unit, value)
    }

    /// Display names of all categories, in table order.
    pub fn categories(&self) -> Vec<&'static str> {
        UNIT_TABLE.iter().map(|def| def.name).collect()
    }

    /// Canonical display names of the units of one category.
    pub fn units(&self, category: &str) -> Result<Vec<&'static str>, ConversionError> {
        let def = self.converter(category)?.def();
        Ok(def.names_and_synonyms().iter().map(|(name, _)| *name).collect())
    }

    /// The standard abbreviation for a unit: the first synonym in its
    /// declared list. A unit without synonyms has no abbreviation and
    /// reports as unknown.
    pub fn abbreviation(&self, category: &str, unit: &str) -> Result<&'static str, ConversionError> {
        let converter = self.converter(category)?;
        let canonical = converter.resolve(unit)?;
        for (name, synonyms) in converter.def().names_and_synonyms() {
            if simplify(name) == canonical {
                return synonyms.first().copied().ok_or_else(|| ConversionError::UnknownUnit {
                    unit: canonical.to_string(),
                    category: converter.name().to_string(),
                });
            }
        }
        Err(ConversionError::UnknownUnit {
            unit: canonical.to_string(),
            category: converter.name().to_string(),
        })
    }

    /// Whether two unit names are synonyms for the same unit. Unknown names
    /// yield `false` rather than an error.
    pub fn is_same_unit(&self, unit1: &str, unit2: &str) -> bool {
        match (self.unit_index.get(unit1), self.unit_index.get(unit2)) {
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{CategoryUnits, LinearUnit};

    fn assert_close(a: f64, b: f64) {
        assert!((a - b).abs() <= 1e-9 * b.abs().max(1.0), "{} != {}", a, b);
    }

    #[test]
    fn test_build_succeeds() {
        let registry = UnitRegistry::build().unwrap();
        assert_eq!(registry.categories().len(), 12);
    }

    #[test]
    fn test_dispatch() {
        let registry = UnitRegistry::build().unwrap();
        assert_close(registry.convert("Length", "meter", "foot", 1.0).unwrap(), 3.280839895013123);
        assert_close(registry.convert("temperature", "C", "F", 100.0).unwrap(), 212.0);
    }

    #[test]
    fn test_category_name_normalization() {
        let registry = UnitRegistry::build().unwrap();
        let a = registry.convert("Kinematic Viscosity", "cSt", "St", 12.0).unwrap();
        let b = registry.convert("kinematicviscosity", "cst", "st", 12.0).unwrap();
        assert_close(a, b);
    }

    #[test]
    fn test_unit_name_normalization() {
        let registry = UnitRegistry::build().unwrap();
        let a = registry.convert("Length", " Meter ", "FOOT", 1.0).unwrap();
        let b = registry.convert("length", "meter", "foot", 1.0).unwrap();
        assert_close(a, b);
    }

    #[test]
    fn test_unknown_category() {
        let registry = UnitRegistry::build().unwrap();
        let err = registry.convert("weight", "kg", "lb", 1.0).unwrap_err();
        assert_eq!(err, ConversionError::UnknownCategory("weight".to_string()));
    }

    #[test]
    fn test_units_listing() {
        let registry = UnitRegistry::build().unwrap();
        let units = registry.units("Area").unwrap();
        assert!(units.contains(&"square meter"));
        assert!(units.contains(&"hectare"));
        assert!(registry.units("nonsense").is_err());
    }

    #[test]
    fn test_abbreviation() {
        let registry = UnitRegistry::build().unwrap();
        assert_eq!(registry.abbreviation("Mass", "kilogram").unwrap(), "kg");
        assert_eq!(registry.abbreviation("Length", "feet").unwrap(), "ft");
        assert_eq!(registry.abbreviation("Volume", "barrels").unwrap(), "bbl");
    }

    #[test]
    fn test_abbreviation_without_synonyms() {
        let registry = UnitRegistry::build().unwrap();
        let err = registry
            .abbreviation("Concentration In Water", "nanogram per liter")
            .unwrap_err();
        assert!(matches!(err, ConversionError::UnknownUnit { .. }));
    }

    #[test]
    fn test_is_same_unit() {
        let registry = UnitRegistry::build().unwrap();
        assert!(registry.is_same_unit("kg", "kilograms"));
        assert!(registry.is_same_unit("oz", "ounces"));
        assert!(!registry.is_same_unit("kg", "liter"));
        assert!(!registry.is_same_unit("kg", "banana"));
        assert!(!registry.is_same_unit("banana", "banana"));
        // "S" is specific gravity, "s" is the second; the index is
        // case-sensitive on purpose.
        assert!(!registry.is_same_unit("S", "s"));
        assert!(registry.is_same_unit("S", "SG"));
    }

    #[test]
    fn test_oz_resolves_to_mass() {
        let registry = UnitRegistry::build().unwrap();
        assert!(registry.is_same_unit("oz", "ounce"));
        assert!(!registry.is_same_unit("oz", "fluid ounce"));
    }

    #[test]
    fn test_duplicate_synonym_is_fatal() {
        static CLASHING: &[CategoryDef] = &[
            CategoryDef {
                name: "Alpha",
                units: CategoryUnits::Linear(&[LinearUnit {
                    name: "alpha base",
                    factor: 1.0,
                    synonyms: &["ab", "shared"],
                }]),
            },
            CategoryDef {
                name: "Beta",
                units: CategoryUnits::Linear(&[LinearUnit {
                    name: "beta base",
                    factor: 1.0,
                    synonyms: &["bb", "shared"],
                }]),
            },
        ];

        let err = UnitRegistry::from_table(CLASHING).unwrap_err();
        assert_eq!(err, ConversionError::DuplicateUnitName("shared".to_string()));
    }

    #[test]
    fn test_global_registry() {
        assert_close(REGISTRY.convert("Length", "m", "cm", 1.0).unwrap(), 100.0);
    }
}
