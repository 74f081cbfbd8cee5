//! Characteristic kinds and their parse/format rules
//!
//! A characteristic's values are stored as raw text. The kind decides how
//! that text is read back:
//!
//! | Kind | Code | Accepted text |
//! |------|------|---------------|
//! | Integer | 0 | `i64`, surrounding whitespace ignored |
//! | Float | 1 | finite `f64`, surrounding whitespace ignored |
//! | Boolean | 2 | `true/false`, `1/0`, `yes/no`, any case |
//! | String | 3 | anything |
//!
//! Only Integer, Float and Boolean have an intrinsic order. String values are
//! ordered through a ranked list instead.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// Primitive kind of a characteristic's values
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CharacteristicKind {
    /// 64-bit signed integer
    #[default]
    Integer,
    /// Finite 64-bit float
    Float,
    /// Boolean flag
    Boolean,
    /// Free text
    String,
}

/// A raw value that failed to parse
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{raw:?} is not a valid {kind}: {reason}")]
pub struct ParseValueError {
    /// Kind the text was parsed as
    pub kind: CharacteristicKind,
    /// Offending text
    pub raw: String,
    /// Parser message
    pub reason: String,
}

/// A parsed characteristic value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ParsedValue {
    /// Integer value
    Integer(i64),
    /// Float value, never NaN or infinite
    Float(f64),
    /// Boolean value
    Boolean(bool),
    /// Text value
    String(String),
}

impl CharacteristicKind {
    /// All kinds, in code order
    pub const ALL: [CharacteristicKind; 4] = [
        CharacteristicKind::Integer,
        CharacteristicKind::Float,
        CharacteristicKind::Boolean,
        CharacteristicKind::String,
    ];

    /// Numeric code used by catalog records
    pub const fn code(&self) -> u8 {
        match self {
            CharacteristicKind::Integer => 0,
            CharacteristicKind::Float => 1,
            CharacteristicKind::Boolean => 2,
            CharacteristicKind::String => 3,
        }
    }

    /// Parse from numeric code
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CharacteristicKind::Integer),
            1 => Some(CharacteristicKind::Float),
            2 => Some(CharacteristicKind::Boolean),
            3 => Some(CharacteristicKind::String),
            _ => None,
        }
    }

    /// Short identifier
    pub const fn id(&self) -> &'static str {
        match self {
            CharacteristicKind::Integer => "integer",
            CharacteristicKind::Float => "float",
            CharacteristicKind::Boolean => "boolean",
            CharacteristicKind::String => "string",
        }
    }

    /// Human-readable display name
    pub const fn name(&self) -> &'static str {
        match self {
            CharacteristicKind::Integer => "Integer number",
            CharacteristicKind::Float => "Floating-point number",
            CharacteristicKind::Boolean => "Boolean",
            CharacteristicKind::String => "String",
        }
    }

    /// Whether values of this kind have an intrinsic order
    pub const fn is_ordered(&self) -> bool {
        !matches!(self, CharacteristicKind::String)
    }

    /// Parse raw text into a typed value
    pub fn parse(&self, raw: &str) -> Result<ParsedValue, ParseValueError> {
        let fail = |reason: String| ParseValueError {
            kind: *self,
            raw: raw.to_string(),
            reason,
        };

        match self {
            CharacteristicKind::Integer => raw
                .trim()
                .parse::<i64>()
                .map(ParsedValue::Integer)
                .map_err(|e| fail(e.to_string())),
            CharacteristicKind::Float => {
                let value = raw.trim().parse::<f64>().map_err(|e| fail(e.to_string()))?;
                if !value.is_finite() {
                    return Err(fail("value is not finite".to_string()));
                }
                Ok(ParsedValue::Float(value))
            }
            CharacteristicKind::Boolean => match raw.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(ParsedValue::Boolean(true)),
                "false" | "0" | "no" => Ok(ParsedValue::Boolean(false)),
                _ => Err(fail("expected true/false, 1/0 or yes/no".to_string())),
            },
            CharacteristicKind::String => Ok(ParsedValue::String(raw.to_string())),
        }
    }

    /// Render a typed value as canonical raw text
    ///
    /// Returns `None` if the value belongs to another kind.
    pub fn format(&self, value: &ParsedValue) -> Option<String> {
        if value.kind() != *self {
            return None;
        }
        Some(value.to_string())
    }
}

impl fmt::Display for CharacteristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl ParsedValue {
    /// Kind this value belongs to
    pub const fn kind(&self) -> CharacteristicKind {
        match self {
            ParsedValue::Integer(_) => CharacteristicKind::Integer,
            ParsedValue::Float(_) => CharacteristicKind::Float,
            ParsedValue::Boolean(_) => CharacteristicKind::Boolean,
            ParsedValue::String(_) => CharacteristicKind::String,
        }
    }

    /// Canonical three-way comparison
    ///
    /// `None` when the kinds differ or the kind has no intrinsic order.
    pub fn three_way(&self, other: &ParsedValue) -> Option<Ordering> {
        match (self, other) {
            (ParsedValue::Integer(a), ParsedValue::Integer(b)) => Some(a.cmp(b)),
            // Parsing rejects NaN, so partial_cmp is total here
            (ParsedValue::Float(a), ParsedValue::Float(b)) => a.partial_cmp(b),
            (ParsedValue::Boolean(a), ParsedValue::Boolean(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl fmt::Display for ParsedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParsedValue::Integer(v) => write!(f, "{}", v),
            ParsedValue::Float(v) => write!(f, "{}", v),
            ParsedValue::Boolean(v) => write!(f, "{}", v),
            ParsedValue::String(v) => f.write_str(v),
        }
    }
}
