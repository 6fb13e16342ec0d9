use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A measurement unit for a shopping-list item.
///
/// The set is closed: there is no runtime extension. Lookup is name-keyed
/// (see [`Unit::from_name`]) rather than positional, so reordering the
/// variants can never silently change which unit a selection refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Cm,
    Ft,
    G,
    Gallon,
    Inch,
    Kg,
    Lb,
    Liter,
    M,
    Oz,
    Piece,
}

impl Unit {
    /// Every unit, in presentation order for help output.
    pub const ALL: [Unit; 11] = [
        Unit::Cm,
        Unit::Ft,
        Unit::G,
        Unit::Gallon,
        Unit::Inch,
        Unit::Kg,
        Unit::Lb,
        Unit::Liter,
        Unit::M,
        Unit::Oz,
        Unit::Piece,
    ];

    /// The lowercase label used in display strings and user input.
    pub fn name(self) -> &'static str {
        match self {
            Unit::Cm => "cm",
            Unit::Ft => "ft",
            Unit::G => "g",
            Unit::Gallon => "gallon",
            Unit::Inch => "inch",
            Unit::Kg => "kg",
            Unit::Lb => "lb",
            Unit::Liter => "liter",
            Unit::M => "m",
            Unit::Oz => "oz",
            Unit::Piece => "piece",
        }
    }

    /// Look up a unit by its label, case-insensitively.
    pub fn from_name(name: &str) -> Option<Unit> {
        Unit::ALL
            .iter()
            .copied()
            .find(|u| u.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Unit::from_name(s).ok_or_else(|| {
            let valid = Unit::ALL
                .iter()
                .map(|u| u.name())
                .collect::<Vec<_>>()
                .join(", ");
            format!("unknown unit '{}' (valid units: {})", s, valid)
        })
    }
}

/// A single shopping-list entry.
///
/// Fields are private and mutated only through the validated setters:
/// a setter that rejects its input leaves the current value unchanged and
/// returns `false`, so callers can detect the rejection without a
/// before/after comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShoppingItem {
    description: String,
    amount: f64,
    unit: Unit,
}

impl Default for ShoppingItem {
    fn default() -> Self {
        Self {
            description: "Unknown".to_string(),
            amount: 1.0,
            unit: Unit::Piece,
        }
    }
}

impl ShoppingItem {
    /// Build an item from the three fields. Values are applied through the
    /// setters, so an invalid field keeps its default instead.
    pub fn new(description: &str, amount: f64, unit: Unit) -> Self {
        let mut item = Self::default();
        item.set_description(description);
        item.set_amount(amount);
        item.set_unit(unit);
        item
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Replace the description. Empty text is rejected.
    pub fn set_description(&mut self, description: &str) -> bool {
        if description.is_empty() {
            return false;
        }
        self.description = description.to_string();
        true
    }

    /// Replace the amount. Negative and NaN values are rejected.
    pub fn set_amount(&mut self, amount: f64) -> bool {
        // `>= 0.0` is false for NaN, which rejects it as well
        if amount >= 0.0 {
            self.amount = amount;
            return true;
        }
        false
    }

    /// Replace the unit. Membership is enforced by the type, so this
    /// cannot fail.
    pub fn set_unit(&mut self, unit: Unit) {
        self.unit = unit;
    }

    /// The fixed-width list line: description left-justified to 45
    /// columns, amount right-justified to 6 with two decimals, unit
    /// left-justified to 6. List rendering depends on these exact widths.
    pub fn display_string(&self) -> String {
        format!("{:<45} {:>6.2} {:<6}", self.description, self.amount, self.unit)
    }
}
