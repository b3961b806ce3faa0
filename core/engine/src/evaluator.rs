//! FILENAME: core/engine/src/evaluator.rs
//! PURPOSE: Evaluates expression trees to unit-carrying values.
//! CONTEXT: After a line is parsed into an AST, this module traverses the
//! tree against the variable environment built up by earlier lines. The
//! first error anywhere in the tree aborts the walk.
//!
//! UNIT RULES:
//! - + and -: a unitless side is promoted to the other side's unit;
//!   two different units are a mismatch.
//! - *: at most one side may carry a unit.
//! - /: equal units cancel, a unitless divisor keeps the dividend's unit.
//! - ^: neither side may carry a unit.
//! - Functions: max, min (2 args, promoted like +), round, ceil, floor,
//!   abs (1 arg, unit preserved).

use crate::error::EvalError;
use parser::units;
use parser::{BinaryOperator, Expression, UnaryOperator, Unit, Value};
use std::collections::HashMap;

/// Variable name to value, rebuilt on every document pass.
pub type Environment = HashMap<String, Value>;

pub type EvalResult = Result<Value, EvalError>;

/// The expression evaluator.
/// Holds a reference to the environment for variable lookups.
pub struct Evaluator<'a> {
    env: &'a Environment,
}

impl<'a> Evaluator<'a> {
    pub fn new(env: &'a Environment) -> Self {
        Evaluator { env }
    }

    /// Evaluates an AST expression and returns the result.
    pub fn evaluate(&self, expr: &Expression) -> EvalResult {
        match expr {
            Expression::Literal(value) => Ok(*value),
            Expression::Identifier(name) => self.eval_identifier(name),
            Expression::UnaryOp { op, operand } => self.eval_unary_op(op, operand),
            Expression::BinaryOp { left, op, right } => self.eval_binary_op(left, op, right),
            Expression::FunctionCall { name, args } => self.eval_function(name, args),
            Expression::Conversion { operand, target } => {
                convert_value(self.evaluate(operand)?, *target)
            }
        }
    }

    fn eval_identifier(&self, name: &str) -> EvalResult {
        self.env
            .get(name)
            .copied()
            .ok_or_else(|| EvalError::UndefinedVariable(name.to_string()))
    }

    fn eval_unary_op(&self, op: &UnaryOperator, operand: &Expression) -> EvalResult {
        let value = self.evaluate(operand)?;

        match op {
            UnaryOperator::Plus => Ok(value),
            UnaryOperator::Negate => Ok(value.with_amount(-value.amount)),
        }
    }

    fn eval_binary_op(
        &self,
        left: &Expression,
        op: &BinaryOperator,
        right: &Expression,
    ) -> EvalResult {
        let left_val = self.evaluate(left)?;
        let right_val = self.evaluate(right)?;

        match op {
            BinaryOperator::Add => add_values(left_val, right_val),
            BinaryOperator::Subtract => subtract_values(left_val, right_val),
            BinaryOperator::Multiply => multiply_values(left_val, right_val),
            BinaryOperator::Divide => divide_values(left_val, right_val),
            BinaryOperator::Power => power_values(left_val, right_val),
        }
    }

    /// Evaluates a function call. Names match case-insensitively.
    fn eval_function(&self, name: &str, args: &[Expression]) -> EvalResult {
        let name_lower = name.to_ascii_lowercase();

        match name_lower.as_str() {
            "max" => self.fn_pick(&name_lower, args, |l, r| r > l),
            "min" => self.fn_pick(&name_lower, args, |l, r| r < l),
            "round" => self.fn_rounding(&name_lower, args, f64::round),
            "ceil" => self.fn_rounding(&name_lower, args, f64::ceil),
            "floor" => self.fn_rounding(&name_lower, args, f64::floor),
            "abs" => self.fn_rounding(&name_lower, args, f64::abs),
            _ => Err(EvalError::UnknownFunction(name.to_string())),
        }
    }

    fn eval_args(
        &self,
        name: &str,
        args: &[Expression],
        expected: usize,
    ) -> Result<Vec<Value>, EvalError> {
        if args.len() != expected {
            return Err(EvalError::Arity {
                name: name.to_string(),
                expected,
            });
        }
        args.iter().map(|arg| self.evaluate(arg)).collect()
    }

    /// max/min: units are reconciled the way + does it, then the amounts
    /// decide. `prefer_right(l, r)` says when the second argument wins.
    fn fn_pick(
        &self,
        name: &str,
        args: &[Expression],
        prefer_right: fn(f64, f64) -> bool,
    ) -> EvalResult {
        let values = self.eval_args(name, args, 2)?;
        let (left, right) = (values[0], values[1]);
        let unit = common_unit(left.unit, right.unit)?;

        let amount = if prefer_right(left.amount, right.amount) {
            right.amount
        } else {
            left.amount
        };
        Ok(Value::new(amount, unit))
    }

    fn fn_rounding(&self, name: &str, args: &[Expression], rule: fn(f64) -> f64) -> EvalResult {
        let values = self.eval_args(name, args, 1)?;
        let value = values[0];
        Ok(value.with_amount(rule(value.amount)))
    }
}

// ============================================================================
// VALUE ARITHMETIC
// ============================================================================

/// Unit of `left op right` for + and -: equal units stay, a unitless side
/// takes the other side's unit, anything else is a mismatch.
fn common_unit(left: Unit, right: Unit) -> Result<Unit, EvalError> {
    match (left, right) {
        (l, r) if l == r => Ok(l),
        (Unit::None, r) => Ok(r),
        (l, Unit::None) => Ok(l),
        _ => Err(EvalError::UnitMismatch),
    }
}

fn finite(amount: f64, unit: Unit) -> EvalResult {
    if amount.is_finite() {
        Ok(Value::new(amount, unit))
    } else {
        Err(EvalError::OutOfRange)
    }
}

/// Adds two values with one-sided unit promotion. Also used to fold line
/// results into a block total.
pub fn add_values(left: Value, right: Value) -> EvalResult {
    let unit = common_unit(left.unit, right.unit)?;
    finite(left.amount + right.amount, unit)
}

pub fn subtract_values(left: Value, right: Value) -> EvalResult {
    let unit = common_unit(left.unit, right.unit)?;
    finite(left.amount - right.amount, unit)
}

pub fn multiply_values(left: Value, right: Value) -> EvalResult {
    let unit = match (left.unit, right.unit) {
        (Unit::None, r) => r,
        (l, Unit::None) => l,
        _ => return Err(EvalError::MultiplyUnits),
    };
    finite(left.amount * right.amount, unit)
}

pub fn divide_values(left: Value, right: Value) -> EvalResult {
    // Zero check comes first so it wins over any unit complaint
    if right.amount == 0.0 {
        return Err(EvalError::DivisionByZero);
    }

    let unit = match (left.unit, right.unit) {
        (l, Unit::None) => l,
        (l, r) if l == r => Unit::None,
        _ => return Err(EvalError::UnitMismatch),
    };
    finite(left.amount / right.amount, unit)
}

pub fn power_values(left: Value, right: Value) -> EvalResult {
    if !left.is_unitless() || !right.is_unitless() {
        return Err(EvalError::ExponentiateUnits);
    }

    let result = left.amount.powf(right.amount);
    if result.is_finite() {
        Ok(Value::number(result))
    } else {
        Err(EvalError::InvalidExponentiation)
    }
}

/// Re-expresses a value in `target`. Unitless values are simply tagged.
pub fn convert_value(value: Value, target: Unit) -> EvalResult {
    if value.is_unitless() {
        return Ok(Value::new(value.amount, target));
    }

    match units::convert(value.amount, value.unit, target) {
        Some(amount) => finite(amount, target),
        None => Err(EvalError::IncompatibleConversion {
            from: value.unit,
            to: target,
        }),
    }
}
