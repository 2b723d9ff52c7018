//! Evaluation of parsed `@{...}` expressions against record fields

use super::expr::{BinaryOp, Expr};
use crate::field::{display_value, is_falsy};
use crate::record::Metadata;
use serde_json::{Number, Value};

/// Evaluate `expr` with the record's fields in scope.
///
/// Unknown identifiers evaluate to `null`. Errors are reported as plain
/// reasons; the caller attaches the template they came from.
pub fn evaluate(expr: &Expr, scope: &Metadata) -> Result<Value, String> {
    match expr {
        Expr::Literal(value) => Ok(value.clone()),
        Expr::Field(name) => Ok(scope.get(name).cloned().unwrap_or(Value::Null)),
        Expr::Member(target, property) => {
            let target = evaluate(target, scope)?;
            member(&target, property)
        }
        Expr::Call(name, args) => {
            let args = args
                .iter()
                .map(|arg| evaluate(arg, scope))
                .collect::<Result<Vec<_>, _>>()?;
            call(name, &args)
        }
        Expr::Not(inner) => Ok(Value::Bool(is_falsy(&evaluate(inner, scope)?))),
        Expr::Ternary(condition, then, otherwise) => {
            if is_falsy(&evaluate(condition, scope)?) {
                evaluate(otherwise, scope)
            } else {
                evaluate(then, scope)
            }
        }
        Expr::Binary(op, left, right) => {
            let left = evaluate(left, scope)?;
            match op {
                BinaryOp::Or if !is_falsy(&left) => Ok(left),
                BinaryOp::And if is_falsy(&left) => Ok(left),
                BinaryOp::Or | BinaryOp::And => evaluate(right, scope),
                BinaryOp::Eq => Ok(Value::Bool(loose_eq(&left, &evaluate(right, scope)?))),
                BinaryOp::NotEq => Ok(Value::Bool(!loose_eq(&left, &evaluate(right, scope)?))),
                BinaryOp::Add => Ok(add(&left, &evaluate(right, scope)?)),
            }
        }
    }
}

fn member(target: &Value, property: &str) -> Result<Value, String> {
    match target {
        Value::Null => Err(format!("cannot read property '{property}' of null")),
        Value::Object(map) => Ok(map.get(property).cloned().unwrap_or(Value::Null)),
        Value::String(s) if property == "length" => Ok(Value::from(s.chars().count())),
        Value::Array(items) if property == "length" => Ok(Value::from(items.len())),
        _ => Ok(Value::Null),
    }
}

fn call(name: &str, args: &[Value]) -> Result<Value, String> {
    let arity = |expected: usize| -> Result<(), String> {
        if args.len() == expected {
            Ok(())
        } else {
            Err(format!(
                "{name}() takes {expected} argument(s), {} given",
                args.len()
            ))
        }
    };

    match name {
        "upper" => {
            arity(1)?;
            Ok(Value::String(display_value(&args[0]).to_uppercase()))
        }
        "lower" => {
            arity(1)?;
            Ok(Value::String(display_value(&args[0]).to_lowercase()))
        }
        "len" => {
            arity(1)?;
            match &args[0] {
                Value::Null => Ok(Value::from(0)),
                Value::String(s) => Ok(Value::from(s.chars().count())),
                Value::Array(items) => Ok(Value::from(items.len())),
                Value::Object(map) => Ok(Value::from(map.len())),
                other => Err(format!("len() cannot measure {other}")),
            }
        }
        "json" => {
            arity(1)?;
            Ok(Value::String(args[0].to_string()))
        }
        "default" => {
            arity(2)?;
            if args[0].is_null() {
                Ok(args[1].clone())
            } else {
                Ok(args[0].clone())
            }
        }
        other => Err(format!("unknown function '{other}'")),
    }
}

fn loose_eq(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        _ => left == right,
    }
}

fn add(left: &Value, right: &Value) -> Value {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => {
            if let (Some(x), Some(y)) = (a.as_i64(), b.as_i64())
                && let Some(sum) = x.checked_add(y)
            {
                return Value::from(sum);
            }
            let sum = a.as_f64().unwrap_or_default() + b.as_f64().unwrap_or_default();
            Number::from_f64(sum).map(Value::Number).unwrap_or(Value::Null)
        }
        _ => Value::String(format!("{}{}", display_value(left), display_value(right))),
    }
}
