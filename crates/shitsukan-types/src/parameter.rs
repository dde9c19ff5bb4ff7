//! Parameter schemas (what can be tuned) and parameter values (what is set).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The set of values a parameter accepts.
///
/// The service omits the domain for plain numeric knobs, so a missing
/// `domain` decodes as [`ValueDomain::Any`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValueDomain {
    /// Unconstrained; the service did not describe a domain.
    #[default]
    Any,
    /// Numeric slider between `min` and `max`.
    Range {
        min: f64,
        max: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        step: Option<f64>,
    },
    /// One of an enumerated set of values.
    Choice { options: Vec<Value> },
    /// On/off switch.
    Toggle,
    /// Hex color string.
    Color,
    /// Free text (e.g. a secondary texture reference).
    Text,
}

impl ValueDomain {
    /// Value used when a schema declares no default.
    pub fn baseline(&self) -> Value {
        match self {
            Self::Any => Value::Null,
            Self::Range { min, .. } => serde_json::Number::from_f64(*min)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Self::Choice { options } => options.first().cloned().unwrap_or(Value::Null),
            Self::Toggle => Value::Bool(false),
            Self::Color => Value::String("#ffffff".to_string()),
            Self::Text => Value::String(String::new()),
        }
    }
}

/// One tunable parameter of a texture record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterSchema {
    pub id: String,

    /// Display name shown by the parameter panel.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Group label; the panel buckets schemas by it when grouping is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default)]
    pub domain: ValueDomain,

    /// Declared default. `null` on the wire is treated as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
}

impl ParameterSchema {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            group: None,
            description: None,
            domain: ValueDomain::Any,
            default: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_domain(mut self, domain: ValueDomain) -> Self {
        self.domain = domain;
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    /// The declared default, or the domain baseline when none is declared.
    pub fn initial_value(&self) -> Value {
        match &self.default {
            Some(v) => v.clone(),
            None => self.domain.baseline(),
        }
    }

    /// Name for display: the declared name, else the id.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }
}

/// Current value of one parameter, keyed by schema id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterValue {
    pub id: String,
    pub value: Value,
}

impl ParameterValue {
    pub fn new(id: impl Into<String>, value: impl Into<Value>) -> Self {
        Self { id: id.into(), value: value.into() }
    }
}
