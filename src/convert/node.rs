//! Typed YAML value tree.
//!
//! [`YamlNode`] is built once from a parsed [`serde_yaml::Value`] and then
//! matched exhaustively by the flattener. Scalars keep their YAML type so
//! that each one is stringified by a single rule (see [`Scalar`]).

use serde::Deserialize;
use serde_yaml::{Deserializer, Value};

use crate::error::{Result, Yaml2EnvError};

/// A node of a parsed YAML document.
#[derive(Debug, Clone, PartialEq)]
pub enum YamlNode {
    /// Key/value entries in source-document order.
    Mapping(Vec<(String, YamlNode)>),
    /// Ordered elements.
    Sequence(Vec<YamlNode>),
    /// A leaf value.
    Scalar(Scalar),
}

/// A leaf YAML value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    String(String),
}

impl Scalar {
    /// Text written into the environment for this scalar.
    ///
    /// Null renders as `<nil>`. Floats use the shortest decimal that
    /// round-trips, switching to exponent form (`1e+06`, `1e-05`) outside
    /// `[1e-4, 1e6)`; infinities and NaN render as `+Inf`, `-Inf`, `NaN`.
    ///
    /// # Example
    ///
    /// ```
    /// use yaml2env::convert::Scalar;
    ///
    /// assert_eq!(Scalar::Float(2.50).to_env_string(), "2.5");
    /// assert_eq!(Scalar::Null.to_env_string(), "<nil>");
    /// ```
    pub fn to_env_string(&self) -> String {
        match self {
            Scalar::Null => "<nil>".to_string(),
            Scalar::Bool(b) => b.to_string(),
            Scalar::Int(i) => i.to_string(),
            Scalar::UInt(u) => u.to_string(),
            Scalar::Float(f) => format_float(*f),
            Scalar::String(s) => s.clone(),
        }
    }
}

fn format_float(f: f64) -> String {
    if f.is_nan() {
        return "NaN".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }

    // `{:e}` is the shortest round-trip form, e.g. "1.2345675e6" / "1e-5".
    let formatted = format!("{:e}", f);
    let Some((mantissa, exponent)) = formatted.split_once('e') else {
        return formatted;
    };
    let exp: i32 = exponent.parse().unwrap_or(0);
    if f == 0.0 || (-4..6).contains(&exp) {
        return format!("{}", f);
    }

    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{}e{}{:0>2}", mantissa, sign, digits)
}

impl YamlNode {
    /// Parse a YAML document whose root is a mapping.
    ///
    /// Only the first document of a multi-document stream is read, and
    /// merge keys (`<<: *anchor`) are resolved. An empty document or a
    /// `null` root yields an empty mapping. Any other non-mapping root is
    /// rejected, as are mapping keys that are themselves collections.
    ///
    /// # Example
    ///
    /// ```
    /// use yaml2env::convert::YamlNode;
    ///
    /// let node = YamlNode::parse_document("port: 5432").unwrap();
    /// assert!(matches!(node, YamlNode::Mapping(entries) if entries.len() == 1));
    /// ```
    pub fn parse_document(source: &str) -> Result<Self> {
        let mut value = match Deserializer::from_str(source).next() {
            Some(document) => Value::deserialize(document)?,
            None => Value::Null,
        };
        value.apply_merge()?;

        match strip_tags(value) {
            Value::Null => Ok(YamlNode::Mapping(Vec::new())),
            value @ Value::Mapping(_) => Self::from_value(value),
            other => Err(Yaml2EnvError::Parse {
                message: format!(
                    "document root must be a mapping, found {}",
                    kind_name(&other)
                ),
            }),
        }
    }

    /// Convert an arbitrary parsed value into a node tree.
    pub fn from_value(value: Value) -> Result<Self> {
        let node = match strip_tags(value) {
            Value::Mapping(mapping) => {
                let mut entries = Vec::with_capacity(mapping.len());
                for (key, value) in mapping {
                    entries.push((key_to_string(key)?, Self::from_value(value)?));
                }
                YamlNode::Mapping(entries)
            }
            Value::Sequence(items) => YamlNode::Sequence(
                items
                    .into_iter()
                    .map(Self::from_value)
                    .collect::<Result<Vec<_>>>()?,
            ),
            scalar => YamlNode::Scalar(to_scalar(scalar)),
        };
        Ok(node)
    }
}

fn strip_tags(value: Value) -> Value {
    match value {
        Value::Tagged(tagged) => strip_tags(tagged.value),
        other => other,
    }
}

fn to_scalar(value: Value) -> Scalar {
    match value {
        Value::Bool(b) => Scalar::Bool(b),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Scalar::Int(i)
            } else if let Some(u) = n.as_u64() {
                Scalar::UInt(u)
            } else {
                Scalar::Float(n.as_f64().unwrap_or(f64::NAN))
            }
        }
        Value::String(s) => Scalar::String(s),
        // Collections never reach here; treat anything left as null.
        _ => Scalar::Null,
    }
}

fn key_to_string(key: Value) -> Result<String> {
    match strip_tags(key) {
        Value::Mapping(_) | Value::Sequence(_) => Err(Yaml2EnvError::Parse {
            message: "mapping keys must be scalars".to_string(),
        }),
        scalar => Ok(to_scalar(scalar).to_env_string()),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}
