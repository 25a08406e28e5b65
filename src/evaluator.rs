use crate::ast::{Document, Expression};
use crate::error::PathError;
use crate::value::Value;

fn parse_float(literal: &str) -> f64 {
    // The lexer only emits digits around a single dot, so this does not fail in practice.
    literal.parse().unwrap_or(0.0)
}

/// Converts an expression tree into a [`Value`].
///
/// Negation applies to integers and floats only. Anything else evaluates to
/// [`Value::Undefined`].
pub fn evaluate(expression: &Expression) -> Value {
    match expression {
        Expression::Boolean { value, .. } => Value::Bool(*value),
        Expression::Null { .. } => Value::Null,
        Expression::Integer { value, .. } => Value::Int(*value),
        Expression::Float { value, .. } => Value::Float(parse_float(value)),
        Expression::String { value, .. } => Value::String(value.clone()),
        Expression::Prefix { right, .. } => match right.as_ref() {
            Expression::Integer { value, .. } => Value::Int(value.wrapping_neg()),
            Expression::Float { value, .. } => Value::Float(-parse_float(value)),
            _ => Value::Undefined,
        },
        Expression::Object { pairs, .. } => Value::Object(
            pairs
                .iter()
                .map(|(key, value)| (key.clone(), evaluate(value)))
                .collect(),
        ),
        Expression::Array { values, .. } => Value::Array(values.iter().map(evaluate).collect()),
    }
}

/// One step of a path: `[N]` or a bare key.
fn step(current: Value, segment: &str) -> Result<Value, PathError> {
    if segment.starts_with('[') {
        let index = segment
            .strip_prefix('[')
            .and_then(|s| s.strip_suffix(']'))
            .filter(|s| !s.is_empty())
            .and_then(|s| s.parse::<i64>().ok())
            .ok_or_else(|| PathError::IndexSyntax(segment.to_string()))?;

        if index < 0 {
            return Err(PathError::IndexOutOfBounds);
        }

        let Value::Array(values) = current else {
            return Err(PathError::IndexType);
        };

        usize::try_from(index)
            .ok()
            .and_then(|index| values.into_iter().nth(index))
            .ok_or(PathError::IndexOutOfBounds)
    } else {
        let Value::Object(mut object) = current else {
            return Err(PathError::Key(segment.to_string()));
        };

        object
            .remove(segment)
            .ok_or_else(|| PathError::Key(segment.to_string()))
    }
}

impl Document {
    /// Evaluates the whole document. An empty document evaluates to
    /// [`Value::Undefined`].
    pub fn evaluate(&self) -> Value {
        self.root().map(evaluate).unwrap_or(Value::Undefined)
    }

    /// Resolves a path such as `foo.[2].bar` against the evaluated document.
    ///
    /// Segments are separated by `.`; `[N]` indexes into an array and anything
    /// else is an object key. An empty path returns the whole document. The
    /// document is evaluated again on every call.
    pub fn get(&self, path: &str) -> Result<Value, PathError> {
        let root = self.evaluate();

        if path.is_empty() {
            return Ok(root);
        }

        path.split('.').try_fold(root, step)
    }
}
