//! Per-category converters
//!
//! One `Converter` per category, built once from the table and read-only
//! afterwards. The conversion rule is selected by the table's
//! `CategoryUnits` variant rather than by converter subtypes: linear ratio
//! for most categories, multiplier/offset for temperature, and the API
//! degree reciprocal special case for density.

use std::collections::HashMap;

use crate::error::ConversionError;
use crate::units::{CategoryDef, CategoryUnits, LinearUnit};

/// Normalized canonical name of the API degree unit.
pub(crate) const API_DEGREE: &str = "apidegree";

/// Normalized canonical name of specific gravity at 15°C, the unit API
/// degrees convert through.
pub(crate) const SPECIFIC_GRAVITY: &str = "specificgravity(15°c)";

/// Strip all whitespace and lowercase, so lookups are insensitive to case
/// and spacing. Applied to category names, unit names, and synonyms alike.
pub(crate) fn simplify(s: &str) -> String {
    let lower = s.to_lowercase();
    lower.split_whitespace().collect()
}

#[derive(Debug, Clone, Copy)]
struct AffineCoeff {
    multiplier: f64,
    offset: f64,
}

/// Coefficients keyed by normalized canonical name, tagged with the
/// category's conversion rule.
#[derive(Debug)]
enum ConvertData {
    Linear(HashMap<String, f64>),
    Affine(HashMap<String, AffineCoeff>),
    Density(HashMap<String, f64>),
}

/// Converter for one unit category. Immutable once built; safe to share
/// across threads.
#[derive(Debug)]
pub struct Converter {
    def: &'static CategoryDef,
    /// Normalized synonym (including each canonical name) -> normalized
    /// canonical name.
    synonyms: HashMap<String, String>,
    data: ConvertData,
}

impl Converter {
    pub(crate) fn new(def: &'static CategoryDef) -> Self {
        let mut synonyms = HashMap::new();
        for (name, syns) in def.names_and_synonyms() {
            let canonical = simplify(name);
            synonyms.insert(canonical.clone(), canonical.clone());
            for syn in syns {
                synonyms.insert(simplify(syn), canonical.clone());
            }
        }

        let data = match def.units {
            CategoryUnits::Linear(units) => ConvertData::Linear(factor_map(units)),
            CategoryUnits::Density(units) => ConvertData::Density(factor_map(units)),
            CategoryUnits::Affine(units) => ConvertData::Affine(
                units
                    .iter()
                    .map(|u| {
                        let coeff = AffineCoeff { multiplier: u.multiplier, offset: u.offset };
                        (simplify(u.name), coeff)
                    })
                    .collect(),
            ),
        };

        Converter { def, synonyms, data }
    }

    /// The category's display name, e.g. "Length".
    pub fn name(&self) -> &'static str {
        self.def.name
    }

    pub(crate) fn def(&self) -> &'static CategoryDef {
        self.def
    }

    /// Resolve a unit string to its normalized canonical name.
    pub(crate) fn resolve(&self, unit: &str) -> Result<&str, ConversionError> {
        let key = simplify(unit);
        match self.synonyms.get(&key) {
            Some(canonical) => Ok(canonical.as_str()),
            None => Err(ConversionError::UnknownUnit {
                unit: key,
                category: self.def.name.to_string(),
            }),
        }
    }

    /// Convert `value` from `from_unit` to `to_unit` within this category.
    pub fn convert(&self, from_unit: &str, to_unit: &str, value: f64) -> Result<f64, ConversionError> {
        let from = self.resolve(from_unit)?;
        let to = self.resolve(to_unit)?;

        // resolve only returns names keyed in the coefficient maps, so
        // indexing below cannot miss.
        Ok(match &self.data {
            ConvertData::Linear(factors) => value * factors[from] / factors[to],
            ConvertData::Affine(coeffs) => {
                let from_c = coeffs[from];
                let to_c = coeffs[to];
                (value + from_c.offset) * from_c.multiplier / to_c.multiplier - to_c.offset
            }
            ConvertData::Density(factors) => {
                // API gravity is a reciprocal transform of specific
                // gravity, not a scale factor.
                let (from, value) = if from == API_DEGREE {
                    (SPECIFIC_GRAVITY, 141.5 / (value + 131.5))
                } else {
                    (from, value)
                };
                if to == API_DEGREE {
                    141.5 / (value * factors[from] / factors[SPECIFIC_GRAVITY]) - 131.5
                } else {
                    value * factors[from] / factors[to]
                }
            }
        })
    }
}

fn factor_map(units: &'static [LinearUnit]) -> HashMap<String, f64> {
    units.iter().map(|u| (simplify(u.name), u.factor)).collect()
}
