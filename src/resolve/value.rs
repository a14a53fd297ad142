//! Typed values produced by key path resolution.

use config::{Value, ValueKind};

/// The type a caller expects a configuration value to have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueType {
    /// A string.
    String,
    /// A signed integer.
    Int,
    /// A double-precision number.
    Double,
    /// A single-precision number, read as a double and narrowed.
    Float,
    /// A boolean.
    Bool,
}

/// The outcome of resolving a key path.
///
/// A value that is present but cannot be read as the requested type is
/// reported as [`ResolvedValue::Absent`], exactly like a missing one.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedValue {
    /// A string value.
    String(String),
    /// An integer value.
    Int(i64),
    /// A double-precision value.
    Double(f64),
    /// A single-precision value.
    Float(f32),
    /// A boolean value.
    Bool(bool),
    /// Nothing usable was found.
    Absent,
}

impl ResolvedValue {
    /// Read `value` as `ty`.
    ///
    /// Integers are accepted wherever a number is expected. A fractional
    /// number requested as an integer is truncated toward zero.
    pub fn convert(value: &Value, ty: ValueType) -> Self {
        match (ty, &value.kind) {
            (ValueType::String, ValueKind::String(s)) => Self::String(s.clone()),
            (ValueType::Bool, ValueKind::Boolean(b)) => Self::Bool(*b),
            (ValueType::Int, ValueKind::I64(n)) => Self::Int(*n),
            (ValueType::Int, ValueKind::U64(n)) => {
                i64::try_from(*n).map(Self::Int).unwrap_or(Self::Absent)
            }
            (ValueType::Int, ValueKind::Float(f)) if f.is_finite() => Self::Int(f.trunc() as i64),
            (ValueType::Double | ValueType::Float, _) => match number(&value.kind) {
                Some(d) if ty == ValueType::Float => Self::Float(d as f32),
                Some(d) => Self::Double(d),
                None => Self::Absent,
            },
            _ => Self::Absent,
        }
    }

    /// Whether nothing was found.
    pub fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// The string value, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The integer value, if this is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Any numeric value widened to a double.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Double(d) => Some(*d),
            Self::Float(f) => Some(f64::from(*f)),
            _ => None,
        }
    }

    /// The boolean value, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

fn number(kind: &ValueKind) -> Option<f64> {
    match kind {
        ValueKind::I64(n) => Some(*n as f64),
        ValueKind::U64(n) => Some(*n as f64),
        ValueKind::Float(f) => Some(*f),
        _ => None,
    }
}
