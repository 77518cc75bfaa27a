//! Observed record properties: fillable attributes and attribute casts.
//!
//! A record type starts from its own declared fillable list and casts, and
//! features layered on top (such as row locking) merge their own entries in.
//! Mass assignment through [`crate::record::Record::fill`] only accepts
//! fillable attributes, and dirty checks compare cast values.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// How a stored attribute value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CastType {
    /// `true`/`false`, `0`/`1`, `"true"`/`"1"` and friends.
    Boolean,
    /// Signed or unsigned integers, including numeric strings.
    Integer,
    /// Any scalar rendered as a string.
    String,
    /// Stored as-is.
    Json,
}

impl CastType {
    /// Parse a cast type from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "bool" | "boolean" => Some(Self::Boolean),
            "int" | "integer" => Some(Self::Integer),
            "string" => Some(Self::String),
            "json" | "array" => Some(Self::Json),
            _ => None,
        }
    }

    /// Apply the cast. Null stays null; values that cannot be cast are
    /// returned unchanged.
    pub fn apply(&self, value: &Value) -> Value {
        match (self, value) {
            (_, Value::Null) | (Self::Json, _) => value.clone(),
            (Self::Boolean, Value::Bool(_)) => value.clone(),
            (Self::Boolean, Value::Number(n)) => Value::Bool(n.as_f64().is_some_and(|f| f != 0.0)),
            (Self::Boolean, Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Value::Bool(true),
                "" | "0" | "false" | "no" | "off" => Value::Bool(false),
                _ => value.clone(),
            },
            (Self::Integer, Value::Number(_)) => value.clone(),
            (Self::Integer, Value::Bool(b)) => Value::from(u64::from(*b)),
            (Self::Integer, Value::String(s)) => {
                let s = s.trim();
                if let Ok(n) = s.parse::<u64>() {
                    Value::from(n)
                } else if let Ok(n) = s.parse::<i64>() {
                    Value::from(n)
                } else {
                    value.clone()
                }
            }
            (Self::String, Value::String(_)) => value.clone(),
            (Self::String, Value::Bool(b)) => Value::String(b.to_string()),
            (Self::String, Value::Number(n)) => Value::String(n.to_string()),
            _ => value.clone(),
        }
    }
}

/// Fillable attributes and casts for one record type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservedProperties {
    fillable: Vec<String>,
    casts: BTreeMap<String, CastType>,
}

impl ObservedProperties {
    /// Create an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge attributes into the fillable list, keeping first-seen order.
    pub fn add_fillable<I, S>(&mut self, fillable: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in fillable {
            let name = name.into();
            if !self.fillable.contains(&name) {
                self.fillable.push(name);
            }
        }
    }

    /// Merge casts. A later cast for the same attribute replaces the earlier one.
    pub fn add_casts<I, S>(&mut self, casts: I)
    where
        I: IntoIterator<Item = (S, CastType)>,
        S: Into<String>,
    {
        for (name, cast) in casts {
            self.casts.insert(name.into(), cast);
        }
    }

    pub fn fillable(&self) -> &[String] {
        &self.fillable
    }

    pub fn casts(&self) -> &BTreeMap<String, CastType> {
        &self.casts
    }

    pub fn is_fillable(&self, name: &str) -> bool {
        self.fillable.iter().any(|f| f == name)
    }

    pub fn cast_of(&self, name: &str) -> Option<CastType> {
        self.casts.get(name).copied()
    }

    /// Cast `value` according to the attribute's registered cast, if any.
    pub fn cast(&self, name: &str, value: &Value) -> Value {
        match self.cast_of(name) {
            Some(cast) => cast.apply(value),
            None => value.clone(),
        }
    }
}
