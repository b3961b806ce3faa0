//! FILENAME: core/parser/src/units.rs
//! PURPOSE: Static catalog of the units a notepad value can carry.
//! CONTEXT: The lexer consults this catalog to attach a unit to a number
//! literal (`5 cm`, `2 sq m`, `3 gal`), the parser uses it to resolve the
//! target of a conversion (`... to ft`), and the evaluator uses the factors
//! and temperature functions to convert between compatible units.
//!
//! UNIT FAMILIES:
//! - Currency: usd (only reachable through `$` literals)
//! - Percent: `%`
//! - Measures: a length base raised to a power (1 length, 2 area, 3 volume),
//!   written as `m`, `sq m`, `square m`, `m2`, `cubic cm`, `cm3`, ...
//! - Fixed measures: volume and area units with their own factor
//!   (gal, qt, pt, cup, tbsp, tsp, l, ml, acre, hectare, are)
//! - Temperatures: c, f, k (affine conversions through Kelvin)

use serde::{Deserialize, Serialize};

/// Offset between the Celsius and Kelvin scales.
pub const KELVIN_OFFSET: f64 = 273.15;

/// Fahrenheit degrees per Celsius degree.
const FAHRENHEIT_SCALE: f64 = 9.0 / 5.0;

/// Fahrenheit reading at the freezing point of water.
const FAHRENHEIT_OFFSET: f64 = 32.0;

/// The unit tag carried by every value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(into = "String", try_from = "String")]
pub enum Unit {
    #[default]
    None,
    Usd,
    Percent,
    Measure(Measure),
    Temperature(Temperature),
}

/// A length, area or volume unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Measure {
    /// A length unit raised to `power` (1, 2 or 3).
    Length { base: Length, power: u8 },
    /// A volume or area unit that is not a power of a length.
    Fixed(FixedUnit),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Length {
    Millimeter,
    Centimeter,
    Meter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FixedUnit {
    Gallon,
    Quart,
    Pint,
    Cup,
    Tablespoon,
    Teaspoon,
    Liter,
    Milliliter,
    Acre,
    Hectare,
    Are,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Temperature {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl Length {
    /// Meters per one of this unit.
    pub fn factor(self) -> f64 {
        match self {
            Length::Millimeter => 0.001,
            Length::Centimeter => 0.01,
            Length::Meter => 1.0,
            Length::Kilometer => 1000.0,
            Length::Inch => 0.0254,
            Length::Foot => 0.3048,
            Length::Yard => 0.9144,
            Length::Mile => 1609.344,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Length::Millimeter => "mm",
            Length::Centimeter => "cm",
            Length::Meter => "m",
            Length::Kilometer => "km",
            Length::Inch => "inch",
            Length::Foot => "ft",
            Length::Yard => "yd",
            Length::Mile => "mi",
        }
    }
}

impl FixedUnit {
    /// Factor to cubic meters (volumes) or square meters (areas).
    pub fn factor(self) -> f64 {
        match self {
            FixedUnit::Gallon => 0.003_785_411_784,
            FixedUnit::Quart => 0.000_946_352_946,
            FixedUnit::Pint => 0.000_473_176_473,
            FixedUnit::Cup => 0.000_236_588_236_5,
            FixedUnit::Tablespoon => 0.000_014_786_764_781_25,
            FixedUnit::Teaspoon => 0.000_004_928_921_593_75,
            FixedUnit::Liter => 0.001,
            FixedUnit::Milliliter => 0.000_001,
            FixedUnit::Acre => 4_046.856_422_4,
            FixedUnit::Hectare => 10_000.0,
            FixedUnit::Are => 100.0,
        }
    }

    /// 2 for areas, 3 for volumes.
    pub fn power(self) -> u8 {
        match self {
            FixedUnit::Acre | FixedUnit::Hectare | FixedUnit::Are => 2,
            _ => 3,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            FixedUnit::Gallon => "gal",
            FixedUnit::Quart => "qt",
            FixedUnit::Pint => "pt",
            FixedUnit::Cup => "cup",
            FixedUnit::Tablespoon => "tbsp",
            FixedUnit::Teaspoon => "tsp",
            FixedUnit::Liter => "L",
            FixedUnit::Milliliter => "mL",
            FixedUnit::Acre => "acre",
            FixedUnit::Hectare => "ha",
            FixedUnit::Are => "are",
        }
    }

    fn id(self) -> &'static str {
        match self {
            FixedUnit::Liter => "l",
            FixedUnit::Milliliter => "ml",
            FixedUnit::Hectare => "hectare",
            other => other.symbol(),
        }
    }
}

impl Measure {
    /// Factor to the SI base of the same dimension (m, m^2 or m^3).
    pub fn factor(self) -> f64 {
        match self {
            Measure::Length { base, power } => base.factor().powi(i32::from(power)),
            Measure::Fixed(unit) => unit.factor(),
        }
    }

    /// The dimension: 1 length, 2 area, 3 volume.
    pub fn power(self) -> u8 {
        match self {
            Measure::Length { power, .. } => power,
            Measure::Fixed(unit) => unit.power(),
        }
    }

    /// Display suffix such as `m`, `cm^2` or `gal`.
    pub fn symbol(self) -> String {
        match self {
            Measure::Length { base, power: 1 } => base.symbol().to_string(),
            Measure::Length { base, power } => format!("{}^{}", base.symbol(), power),
            Measure::Fixed(unit) => unit.symbol().to_string(),
        }
    }

    fn id(self) -> String {
        match self {
            Measure::Length { base, power: 1 } => base.symbol().to_string(),
            Measure::Length { base, power } => format!("{}{}", base.symbol(), power),
            Measure::Fixed(unit) => unit.id().to_string(),
        }
    }
}

impl Temperature {
    pub fn to_kelvin(self, amount: f64) -> f64 {
        match self {
            Temperature::Celsius => amount + KELVIN_OFFSET,
            Temperature::Fahrenheit => {
                (amount - FAHRENHEIT_OFFSET) / FAHRENHEIT_SCALE + KELVIN_OFFSET
            }
            Temperature::Kelvin => amount,
        }
    }

    pub fn from_kelvin(self, kelvin: f64) -> f64 {
        match self {
            Temperature::Celsius => kelvin - KELVIN_OFFSET,
            Temperature::Fahrenheit => {
                (kelvin - KELVIN_OFFSET) * FAHRENHEIT_SCALE + FAHRENHEIT_OFFSET
            }
            Temperature::Kelvin => kelvin,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Temperature::Celsius => "°C",
            Temperature::Fahrenheit => "°F",
            Temperature::Kelvin => "K",
        }
    }

    fn id(self) -> &'static str {
        match self {
            Temperature::Celsius => "c",
            Temperature::Fahrenheit => "f",
            Temperature::Kelvin => "k",
        }
    }
}

impl Unit {
    pub fn is_none(self) -> bool {
        self == Unit::None
    }

    /// Canonical identifier (`none`, `usd`, `percent`, `m`, `cm2`, `gal`, `c`).
    pub fn id(self) -> String {
        match self {
            Unit::None => "none".to_string(),
            Unit::Usd => "usd".to_string(),
            Unit::Percent => "percent".to_string(),
            Unit::Measure(measure) => measure.id(),
            Unit::Temperature(temperature) => temperature.id().to_string(),
        }
    }

    /// Resolves a canonical identifier produced by [`Unit::id`].
    pub fn from_id(id: &str) -> Option<Unit> {
        match id {
            "none" => Some(Unit::None),
            "usd" => Some(Unit::Usd),
            "percent" => Some(Unit::Percent),
            other => lookup_words(other, None),
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::None => write!(f, "number"),
            Unit::Usd => write!(f, "$"),
            Unit::Percent => write!(f, "%"),
            Unit::Measure(measure) => write!(f, "{}", measure.symbol()),
            Unit::Temperature(temperature) => write!(f, "{}", temperature.symbol()),
        }
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> String {
        unit.id()
    }
}

impl TryFrom<String> for Unit {
    type Error = String;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        Unit::from_id(&id).ok_or_else(|| format!("unknown unit id: {}", id))
    }
}

// ============================================================================
// LOOKUP
// ============================================================================

/// Returns the power carried by a prefix word (`sq` -> 2, `cubic` -> 3).
pub fn power_prefix(word: &str) -> Option<u8> {
    match word.to_ascii_lowercase().as_str() {
        "sq" | "square" => Some(2),
        "cu" | "cubic" => Some(3),
        _ => None,
    }
}

/// Resolves one word (`m`, `cm2`, `gallons`) or a prefixed pair
/// (`sq`, `cm`) into a unit. Never fails loudly: anything that is not a
/// unit yields `None`.
pub fn lookup_words(first: &str, second: Option<&str>) -> Option<Unit> {
    let first = first.to_ascii_lowercase();

    let Some(second) = second else {
        return lookup_single(&first);
    };

    let prefix = power_prefix(&first)?;
    let second = second.to_ascii_lowercase();
    let (word, suffix) = split_power_suffix(&second);
    let base = length_word(word)?;

    // `sq m2` is redundant but consistent; `sq m3` is contradictory.
    match suffix {
        Some(power) if power != prefix => None,
        _ => Some(Unit::Measure(Measure::Length {
            base,
            power: prefix,
        })),
    }
}

/// Resolves a whitespace separated phrase of one or two words.
pub fn lookup(phrase: &str) -> Option<Unit> {
    let mut words = phrase.split_whitespace();
    let first = words.next()?;
    let second = words.next();
    if words.next().is_some() {
        return None;
    }
    lookup_words(first, second)
}

fn lookup_single(word: &str) -> Option<Unit> {
    if let Some(temperature) = temperature_word(word) {
        return Some(Unit::Temperature(temperature));
    }
    if let Some(fixed) = fixed_word(word) {
        return Some(Unit::Measure(Measure::Fixed(fixed)));
    }

    let (word, suffix) = split_power_suffix(word);
    let base = length_word(word)?;
    Some(Unit::Measure(Measure::Length {
        base,
        power: suffix.unwrap_or(1),
    }))
}

/// Splits a trailing `2`/`3` power digit off a unit word (`cm2` -> `cm`, 2).
fn split_power_suffix(word: &str) -> (&str, Option<u8>) {
    for (digit, power) in [('2', 2), ('3', 3)] {
        if let Some(stem) = word.strip_suffix(digit) {
            if !stem.is_empty() {
                return (stem, Some(power));
            }
        }
    }
    (word, None)
}

fn length_word(word: &str) -> Option<Length> {
    let length = match word {
        "mm" | "millimeter" | "millimeters" | "millimetre" | "millimetres" => Length::Millimeter,
        "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => Length::Centimeter,
        "m" | "meter" | "meters" | "metre" | "metres" => Length::Meter,
        "km" | "kilometer" | "kilometers" | "kilometre" | "kilometres" => Length::Kilometer,
        "inch" | "inches" => Length::Inch,
        "ft" | "foot" | "feet" => Length::Foot,
        "yd" | "yard" | "yards" => Length::Yard,
        "mi" | "mile" | "miles" => Length::Mile,
        _ => return None,
    };
    Some(length)
}

fn fixed_word(word: &str) -> Option<FixedUnit> {
    let fixed = match word {
        "gal" | "gallon" | "gallons" => FixedUnit::Gallon,
        "qt" | "quart" | "quarts" => FixedUnit::Quart,
        "pt" | "pint" | "pints" => FixedUnit::Pint,
        "cup" | "cups" => FixedUnit::Cup,
        "tbsp" | "tablespoon" | "tablespoons" => FixedUnit::Tablespoon,
        "tsp" | "teaspoon" | "teaspoons" => FixedUnit::Teaspoon,
        "l" | "liter" | "liters" | "litre" | "litres" => FixedUnit::Liter,
        "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => FixedUnit::Milliliter,
        "acre" | "acres" => FixedUnit::Acre,
        "ha" | "hectare" | "hectares" => FixedUnit::Hectare,
        "are" | "ares" => FixedUnit::Are,
        _ => return None,
    };
    Some(fixed)
}

fn temperature_word(word: &str) -> Option<Temperature> {
    match word {
        "c" | "celsius" => Some(Temperature::Celsius),
        "f" | "fahrenheit" => Some(Temperature::Fahrenheit),
        "k" | "kelvin" => Some(Temperature::Kelvin),
        _ => None,
    }
}

// ============================================================================
// CONVERSION
// ============================================================================

/// Converts `amount` between two units of the same dimension.
/// Returns None when the units are not convertible into one another.
pub fn convert(amount: f64, from: Unit, to: Unit) -> Option<f64> {
    if from == to {
        return Some(amount);
    }

    match (from, to) {
        (Unit::Measure(from), Unit::Measure(to)) if from.power() == to.power() => {
            Some(amount * from.factor() / to.factor())
        }
        (Unit::Temperature(from), Unit::Temperature(to)) => {
            Some(to.from_kelvin(from.to_kelvin(amount)))
        }
        _ => None,
    }
}
