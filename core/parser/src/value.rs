//! FILENAME: core/parser/src/value.rs
//! PURPOSE: The numeric-with-unit value every notepad line evaluates to.
//! CONTEXT: Number literals embed a Value in their token; the evaluator
//! produces new Values and never mutates existing ones. Once a Value leaves
//! the evaluator its amount is finite.

use crate::units::Unit;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Value {
    pub amount: f64,
    pub unit: Unit,
}

impl Value {
    /// The empty block total.
    pub const ZERO: Value = Value {
        amount: 0.0,
        unit: Unit::None,
    };

    pub fn new(amount: f64, unit: Unit) -> Self {
        Value { amount, unit }
    }

    /// A plain number without a unit.
    pub fn number(amount: f64) -> Self {
        Value::new(amount, Unit::None)
    }

    pub fn usd(amount: f64) -> Self {
        Value::new(amount, Unit::Usd)
    }

    /// Same unit, new amount.
    pub fn with_amount(self, amount: f64) -> Self {
        Value::new(amount, self.unit)
    }

    pub fn is_unitless(&self) -> bool {
        self.unit.is_none()
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::ZERO
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.unit {
            Unit::None => write!(f, "{}", self.amount),
            Unit::Usd => write!(f, "${}", self.amount),
            unit => write!(f, "{} {}", self.amount, unit),
        }
    }
}
