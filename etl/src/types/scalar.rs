use serde::{Deserialize, Serialize};

/// A raw column value whose wire type is unreliable.
///
/// CSV-ingested columns routinely arrive as numbers or strings
/// interchangeably depending on how the upstream export was produced, so raw
/// row payloads model every such column as a [`Scalar`] and normalize from
/// its textual rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Scalar {
    /// Renders the value as text.
    ///
    /// Integer-valued floats render without a fractional part, so the pandas
    /// `123.0` artifact collapses to `123` here; string-typed `"123.0"`
    /// artifacts are handled separately by the dot-zero stripper.
    pub fn to_text(&self) -> String {
        match self {
            Scalar::Bool(value) => value.to_string(),
            Scalar::Int(value) => value.to_string(),
            Scalar::Float(value) => value.to_string(),
            Scalar::Text(value) => value.clone(),
        }
    }
}

/// Renders an optional scalar column as optional text.
pub(crate) fn to_text(value: &Option<Scalar>) -> Option<String> {
    value.as_ref().map(Scalar::to_text)
}
