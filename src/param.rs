//! Flat configuration parameter map.
//!
//! Parameters are named scalars addressed by dotted keys, for example
//! `simulation.timestep` or `bem.solvent.eps`. They can be loaded from a
//! TOML file, where nested tables provide the dots, or assembled
//! programmatically. A missing or ill-typed required parameter is a
//! configuration error and fatal at startup.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

/// A scalar parameter value.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Real(f64),
    Integer(i64),
    Boolean(bool),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Real(v) => write!(f, "{}", v),
            Value::Integer(v) => write!(f, "{}", v),
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Text(v) => write!(f, "{}", v),
        }
    }
}

/// Flat map of named scalar parameters.
#[derive(Debug, Clone, Default)]
pub struct Parameters {
    values: BTreeMap<String, Value>,
}

impl Parameters {
    pub fn new() -> Self {
        Parameters {
            values: BTreeMap::new(),
        }
    }

    /// Loads parameters from a TOML file. Nested tables flatten into dotted
    /// keys: `[simulation] timestep = 0.02` becomes `simulation.timestep`.
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Parses parameters from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let table: toml::Table = text.parse()?;
        let mut params = Parameters::new();
        flatten("", &table, &mut params)?;
        Ok(params)
    }

    /// Inserts or replaces a real-valued parameter.
    pub fn put_real(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), Value::Real(value));
    }

    /// Inserts or replaces an integer parameter.
    pub fn put_integer(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), Value::Integer(value));
    }

    /// Inserts or replaces a boolean parameter.
    pub fn put_boolean(&mut self, key: &str, value: bool) {
        self.values.insert(key.to_string(), Value::Boolean(value));
    }

    /// Inserts or replaces a text parameter.
    pub fn put_text(&mut self, key: &str, value: &str) {
        self.values
            .insert(key.to_string(), Value::Text(value.to_string()));
    }

    /// Returns a required real-valued parameter. Integer values promote to
    /// real.
    pub fn real(&self, key: &str) -> Result<f64, String> {
        match self.values.get(key) {
            Some(Value::Real(v)) => Ok(*v),
            Some(Value::Integer(v)) => Ok(*v as f64),
            Some(other) => Err(format!(
                "{}: parameter is not a real number (found '{}').",
                key, other
            )),
            None => Err(format!("{}: missing required parameter.", key)),
        }
    }

    /// Returns a required integer parameter.
    pub fn integer(&self, key: &str) -> Result<i64, String> {
        match self.values.get(key) {
            Some(Value::Integer(v)) => Ok(*v),
            Some(other) => Err(format!(
                "{}: parameter is not an integer (found '{}').",
                key, other
            )),
            None => Err(format!("{}: missing required parameter.", key)),
        }
    }

    /// Returns an optional real-valued parameter with a default.
    pub fn real_or(&self, key: &str, default: f64) -> f64 {
        self.real(key).unwrap_or(default)
    }

    /// Returns an optional integer parameter with a default.
    pub fn integer_or(&self, key: &str, default: i64) -> i64 {
        self.integer(key).unwrap_or(default)
    }

    /// Returns an optional boolean parameter with a default.
    pub fn boolean_or(&self, key: &str, default: bool) -> bool {
        match self.values.get(key) {
            Some(Value::Boolean(v)) => *v,
            _ => default,
        }
    }

    /// Returns an optional text parameter with a default.
    pub fn text_or(&self, key: &str, default: &str) -> String {
        match self.values.get(key) {
            Some(Value::Text(v)) => v.clone(),
            _ => default.to_string(),
        }
    }

    /// Iterates over all key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.values.iter()
    }
}

fn flatten(
    prefix: &str,
    table: &toml::Table,
    params: &mut Parameters,
) -> Result<(), Box<dyn std::error::Error>> {
    for (name, value) in table {
        let key = if prefix.is_empty() {
            name.clone()
        } else {
            format!("{}.{}", prefix, name)
        };
        match value {
            toml::Value::Float(v) => params.put_real(&key, *v),
            toml::Value::Integer(v) => params.put_integer(&key, *v),
            toml::Value::Boolean(v) => params.put_boolean(&key, *v),
            toml::Value::String(v) => params.put_text(&key, v),
            toml::Value::Table(t) => flatten(&key, t, params)?,
            other => {
                return Err(format!("{}: unsupported parameter type '{}'.", key, other).into());
            }
        }
    }
    Ok(())
}
