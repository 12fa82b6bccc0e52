//! Built-in unit table
//!
//! Declarative data only; the conversion arithmetic lives in `converter`.
//! Each category lists its units relative to an implicit base unit with
//! factor 1.0. Conversion factors are from the Handbook of Chemistry and
//! Physics (HCP) except where noted.

use serde::Serialize;

/// A unit related to its category's base unit by a scale factor:
/// `value_in_base = value * factor`.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct LinearUnit {
    /// Canonical unit name, the key for its coefficients.
    pub name: &'static str,
    pub factor: f64,
    /// Accepted alternate spellings; the first entry is the preferred
    /// abbreviation.
    pub synonyms: &'static [&'static str],
}

/// A unit related to its base by both a multiplier and an offset
/// (temperature scales).
#[derive(Debug, Clone, Copy, Serialize)]
pub struct AffineUnit {
    pub name: &'static str,
    pub multiplier: f64,
    pub offset: f64,
    pub synonyms: &'static [&'static str],
}

/// The units of one category, tagged by the conversion rule the category
/// uses. `Density` is linear data with the API degree special case applied
/// by the converter.
#[derive(Debug, Clone, Copy, Serialize)]
pub enum CategoryUnits {
    Linear(&'static [LinearUnit]),
    Affine(&'static [AffineUnit]),
    Density(&'static [LinearUnit]),
}

/// One named category of the unit table.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CategoryDef {
    pub name: &'static str,
    pub units: CategoryUnits,
}

impl CategoryDef {
    /// Canonical names with their declared synonym lists, in table order.
    pub fn names_and_synonyms(&self) -> Vec<(&'static str, &'static [&'static str])> {
        match self.units {
            CategoryUnits::Linear(units) | CategoryUnits::Density(units) => {
                units.iter().map(|u| (u.name, u.synonyms)).collect()
            }
            CategoryUnits::Affine(units) => {
                units.iter().map(|u| (u.name, u.synonyms)).collect()
            }
        }
    }
}

const fn unit(
    name: &'static str,
    factor: f64,
    synonyms: &'static [&'static str],
) -> LinearUnit {
    LinearUnit { name, factor, synonyms }
}

const fn affine(
    name: &'static str,
    multiplier: f64,
    offset: f64,
    synonyms: &'static [&'static str],
) -> AffineUnit {
    AffineUnit { name, multiplier, offset, synonyms }
}

/// The complete unit table. Category order is significant: the duplicate
/// check in the registry walks it front to back (see the `oz` carve-out).
pub static UNIT_TABLE: &[CategoryDef] = &[
    // All lengths in terms of meter.
    CategoryDef {
        name: "Length",
        units: CategoryUnits::Linear(&[
            unit("meter", 1.0, &["m", "meters", "metre"]),
            unit("centimeter", 0.01, &["cm", "centimeters"]),
            unit("millimeter", 0.001, &["mm", "millimeters"]),
            unit("micron", 0.000001, &["microns"]),
            unit("kilometer", 1000.0, &["km", "kilometers"]),
            unit("foot", 0.3048, &["ft", "feet"]),
            unit("inch", 0.0254, &["in", "inches"]),
            unit("yard", 0.9144, &["yrd", "yards"]),
            unit("mile", 1609.344, &["mi", "miles"]),
            unit("nautical mile", 1852.0, &["nm", "nauticalmiles"]),
            unit("fathom", 1.8288, &["fthm", "fathoms"]),
            unit("latitude degree", 111120.0, &["latitudedegrees"]),
            unit("latitude minute", 1852.0, &["latitudeminutes"]),
        ]),
    },
    // Technically length but used differently: oil film thickness over
    // water. Micron is the base unit. Reuses length names, so this category
    // stays out of the global identity index.
    CategoryDef {
        name: "Oil Concentration",
        units: CategoryUnits::Linear(&[
            unit("micron", 1.0, &["microns"]),
            unit("cubic meter per square kilometer", 1.0, &["m^3/km^2"]),
            unit("millimeter", 1000.0, &["mm", "millimeters"]),
            unit("inch", 25400.0, &["in", "inches"]),
            unit("barrel per acre", 39.2866176, &["bbl/acre"]), // calculated from HCP
            unit("barrel per square mile", 0.06138533995, &["bbl/sq.mile"]), // calculated from HCP
            unit("gallon per acre", 0.93539563202687404, &["gal/acre"]), // calculated from HCP
            unit("liter per hectare", 0.1, &["liter/hectare"]), // calculated from HCP
        ]),
    },
    // All areas in terms of square meter.
    CategoryDef {
        name: "Area",
        units: CategoryUnits::Linear(&[
            unit("square meter", 1.0, &["m^2", "sq m"]),
            unit("square centimeter", 0.0001, &["cm^2", "sq cm"]),
            unit("square kilometer", 1e6, &["km^2", "sq km"]),
            unit("acre", 4046.8564, &["acres"]),
            unit("square mile", 2589988.1, &["sq miles"]),
            unit("square nautical mile", 3429904.0, &["sq nm", "nm^2"]), // calculated from HCP
            unit("square yard", 0.83612736, &["sq yards", "squareyards"]),
            unit("square foot", 0.09290304, &["ft^2", "sq foot", "square feet"]),
            unit("square inch", 0.00064516, &["in^2", "sq inch", "square inches"]),
            unit("hectare", 10000.0, &["hectares", "ha"]),
        ]),
    },
    // All volumes in terms of cubic meter.
    CategoryDef {
        name: "Volume",
        units: CategoryUnits::Linear(&[
            unit("cubic meter", 1.0, &["m^3", "cu m", "cubic meters"]),
            unit("cubic kilometer", 1e9, &["km^3", "cu km", "cubic kilometers"]),
            unit("cubic centimeter", 1e-6, &["cm^3", "cu cm", "cc"]),
            unit("barrel (petroleum)", 0.1589873, &["bbl", "barrels", "barrel", "bbls"]),
            unit("liter", 1e-3, &["l", "liters"]),
            unit("gallon", 0.0037854118, &["gal", "gallons", "usgal"]),
            unit("gallon (UK)", 0.004546090, &["ukgal", "gallons(uk)"]),
            unit("million US gallon", 3785.4118, &["milliongallons", "milgal"]),
            unit("cubic foot", 0.028316847, &["ft^3", "cu feet", "cubicfeet"]),
            unit("cubic inch", 16.387064e-6, &["in^3", "cu inch", "cubicinches"]),
            unit("cubic yard", 0.76455486, &["yd^3", "cu yard", "cubicyards"]),
            unit("fluid ounce", 2.9573530e-5, &["oz", "ounces(fluid)", "fluid oz"]),
            unit("fluid ounce (UK)", 2.841306e-5, &["ukoz", "fluid oz(uk)"]),
        ]),
    },
    // All temperatures in terms of Kelvin: base = (value + offset) * multiplier.
    CategoryDef {
        name: "Temperature",
        units: CategoryUnits::Affine(&[
            affine(
                "Kelvin",
                1.0,
                0.0,
                &["K", "degrees k", "degree k", "degrees kelvin", "degree kelvin", "deg k"],
            ),
            affine(
                "Celsius",
                1.0,
                273.16,
                &["C", "degrees c", "degrees celsius", "deg c", "centigrade"],
            ),
            affine(
                "Fahrenheit",
                5.0 / 9.0,
                273.16 * (9.0 / 5.0) - 32.0,
                &["F", "degrees f", "degree f", "degrees fahrenheit", "deg f"],
            ),
        ]),
    },
    // All masses in terms of kilogram; weight is taken to be mass at
    // standard g.
    CategoryDef {
        name: "Mass",
        units: CategoryUnits::Linear(&[
            unit("kilogram", 1.0, &["kg", "kilograms"]),
            unit("pound", 0.45359237, &["lb", "pounds", "lbs"]),
            unit("gram", 0.001, &["g", "grams"]),
            unit("ton", 907.18474, &["tons", "uston"]),
            unit("metric ton (tonne)", 1000.0, &["tonnes", "metric ton", "metric tons"]),
            unit("slug", 14.5939, &["slugs"]),
            unit("ounce", 0.028349523, &["oz", "ounces"]),
            unit("ton (UK)", 1016.0469, &["ukton", "long ton"]),
        ]),
    },
    // All times in terms of second.
    CategoryDef {
        name: "Time",
        units: CategoryUnits::Linear(&[
            unit("second", 1.0, &["s", "sec", "seconds"]),
            unit("minute", 60.0, &["min", "minutes"]),
            unit("hour", 3600.0, &["hr", "hours", "hrs"]),
            unit("day", 86400.0, &["days"]),
        ]),
    },
    // All velocities in terms of meter per second.
    CategoryDef {
        name: "Velocity",
        units: CategoryUnits::Linear(&[
            unit("meter per second", 1.0, &["m/s", "meters per second", "mps"]),
            unit("meter per minute", 0.01666666666, &["m/min", "meters per minute"]),
            unit("centimeter per second", 0.01, &["cm/s"]),
            unit("kilometer per hour", 0.277777, &["km/h", "km/hr"]),
            unit("knot", 0.514444, &["kts", "knots"]),
            unit("mile per hour", 0.44704, &["mph", "miles per hour"]),
            unit("foot per second", 0.3048, &["ft/s", "ft/sec", "feet per second", "feet/s"]),
            unit("foot per minute", 0.00508, &["ft/min", "feet per minute", "feet/min"]),
            unit("foot per hour", 0.000084666, &["ft/hr", "feet per hour", "feet/hour"]),
        ]),
    },
    // All discharges in terms of cubic meter per second.
    CategoryDef {
        name: "Discharge",
        units: CategoryUnits::Linear(&[
            unit("cubic meter per second", 1.0, &["m^3/s", "cu m/s", "cms"]),
            unit("cubic meter per min", 1.0 / 60.0, &["m^3/min"]),
            unit("cubic meter per hour", 1.0 / 3600.0, &["m^3/hr"]),
            unit("liter per second", 0.001, &["l/s", "lps"]),
            unit("liter per minute", 0.001 / 60.0, &["l/min"]),
            unit("cubic foot per second", 0.02831685, &["cfs", "cu feet/s", "feet^3/s"]),
            unit("cubic foot per minute", 0.00047194744, &["ft^3/min"]), // calculated from cm^3/s
            unit("gallon per day", 4.3812636805555563e-08, &["gal/day"]), // calculated from gal/hr
            unit("gallon per hour", 1.0515032833333335e-06, &["gal/hr"]),
            unit("gallon per minute", 6.3090197000000006e-05, &["gal/min", "gpm"]),
            unit("gallon per second", 0.0037854118, &["gal/s", "gal/sec"]),
            unit("barrel per hour", 4.4163138888888885e-05, &["bbl/hr"]),
            unit("barrel per day", 1.84013078e-06, &["bbl/day"]), // calculated from bbl/hr
        ]),
    },
    // Kinematic viscosity in terms of Stokes. The Saybolt entries are the
    // single-factor approximations; ASTM D 2161 has the detailed tables.
    CategoryDef {
        name: "Kinematic Viscosity",
        units: CategoryUnits::Linear(&[
            unit("Stoke", 1.0, &["St", "stokes"]),
            unit("centiStoke", 0.01, &["cSt", "centistokes"]),
            unit("square millimeter per second", 0.01, &["mm^2/s"]),
            unit("square centimeter per second", 1.0, &["cm^2/s"]),
            unit("square meter per second", 10000.0, &["m^2/s"]),
            unit("square inch per second", 6.4516, &["in^2/s", "squareinchespersecond"]),
            unit("Saybolt Universal Second", 1.0 / 462.0, &["SSU", "SUS"]), // from CRC - only good for > 100cSt
            unit("Saybolt Furol Second", 0.02116959064, &["SSF", "SFS"]), // from Fuel Oil Manual: good for 724cSt
        ]),
    },
    // Density in terms of g/cc. Specific gravity is referenced to 15°C, the
    // common standard in the oil industry; the factor is the density of
    // water at 15°C (CRC Handbook). API degree is reciprocal, handled by
    // the converter.
    CategoryDef {
        name: "Density",
        units: CategoryUnits::Density(&[
            unit("gram per cubic centimeter", 1.0, &["g/cm^3", "grams per cubic centimeter"]),
            unit(
                "specific gravity (15°C)",
                0.99913,
                &["S", "specificgravity", "Spec grav", "SG", "specificgravity(15C)"],
            ),
            unit("kilogram per cubic meter", 0.001, &["kg/m^3"]),
            unit("pound per cubic foot", 0.016018463, &["lbs/ft^3"]),
            unit("API degree", 1.0, &["api"]),
        ]),
    },
    // Concentration in water in terms of PPM. Shares names with Density and
    // Mass units, so this category also stays out of the global identity
    // index.
    CategoryDef {
        name: "Concentration In Water",
        units: CategoryUnits::Linear(&[
            unit("part per million", 1.0, &["ppm", "parts per million"]),
            unit("part per billion", 0.001, &["ppb", "parts per billion"]),
            unit("part per thousand", 1000.0, &["ppt", "parts per thousand"]),
            unit("part per trillion", 0.000001, &["parts per trillion", "pptr"]),
            unit("fraction (decimal)", 1e6, &["fraction", "mass per mass"]),
            unit("percent", 1e4, &["%", "parts per hundred", "per cent"]),
            unit("kilogram per cubic meter", 1000.0, &["kg/m^3", "kg/m3"]),
            unit("pound per cubic foot", 16018.463, &["lb/ft^3"]),
            unit("milligram per liter", 1.0, &["mg/l"]),
            unit("milligram per kilogram", 1.0, &["mg/kg"]),
            unit("milligram per milliliter", 1000.0, &["mg/ml"]),
            unit("microgram per liter", 0.001, &["ug/l"]),
            unit("nanogram per liter", 0.000001, &[]),
        ]),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shape() {
        assert_eq!(UNIT_TABLE.len(), 12);

        let names: Vec<&str> = UNIT_TABLE.iter().map(|d| d.name).collect();
        assert!(names.contains(&"Length"));
        assert!(names.contains(&"Temperature"));
        assert!(names.contains(&"Density"));
    }

    #[test]
    fn test_every_unit_has_an_abbreviation_except_nanogram_per_liter() {
        for def in UNIT_TABLE {
            for (name, synonyms) in def.names_and_synonyms() {
                if name == "nanogram per liter" {
                    assert!(synonyms.is_empty());
                } else {
                    assert!(!synonyms.is_empty(), "{} has no synonyms", name);
                }
            }
        }
    }

    #[test]
    fn test_base_units_have_factor_one() {
        let length = &UNIT_TABLE[0];
        match length.units {
            CategoryUnits::Linear(units) => {
                let meter = units.iter().find(|u| u.name == "meter").unwrap();
                assert_eq!(meter.factor, 1.0);
            }
            _ => panic!("Length is a linear category"),
        }
    }

    #[test]
    fn test_fahrenheit_coefficients() {
        let temperature = UNIT_TABLE.iter().find(|d| d.name == "Temperature").unwrap();
        match temperature.units {
            CategoryUnits::Affine(units) => {
                let f = units.iter().find(|u| u.name == "Fahrenheit").unwrap();
                assert!((f.multiplier - 0.5555555555555556).abs() < 1e-15);
                assert!((f.offset - 459.688).abs() < 1e-9);
            }
            _ => panic!("Temperature is an affine category"),
        }
    }
}
