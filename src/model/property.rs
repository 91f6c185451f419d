// src/model/property.rs
//! The property value union keyed by Notion's `type` discriminator.
//!
//! Deserialization dispatches on the `type` field and reads the payload
//! from the key of the same name, the way the API nests it:
//!
//! ```json
//! { "type": "select", "select": { "name": "Done" } }
//! ```
//!
//! Any unrecognized discriminator, and any payload that fails to parse,
//! lands in [`RawProperty::Unknown`] carrying the raw JSON. Deserializing
//! a syntactically valid value therefore never fails.

use serde::Deserialize;
use serde_json::Value;

/// One run of rich text. `plain_text` is the API's pre-rendered form;
/// `text.content` is the authoring-time form. Either may be absent.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RichTextRun {
    #[serde(default)]
    pub plain_text: Option<String>,
    #[serde(default)]
    pub text: Option<TextContent>,
}

impl RichTextRun {
    /// A run carrying only `plain_text` — the common case in responses.
    pub fn plain(text: &str) -> Self {
        Self {
            plain_text: Some(text.to_string()),
            text: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TextContent {
    #[serde(default)]
    pub content: String,
}

/// A selected option. Only the name matters for tabulation.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SelectOption {
    #[serde(default)]
    pub name: String,
}

/// A date or date range. Kept as the API's ISO-8601 strings — values
/// pass through to the table verbatim, never reformatted.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct DateValue {
    #[serde(default)]
    pub start: Option<String>,
    #[serde(default)]
    pub end: Option<String>,
}

/// A user reference as it appears in people/created_by payloads.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct UserRef {
    #[serde(default)]
    pub name: Option<String>,
}

/// A shallow reference to a related page. Deliberately just the ID —
/// resolving relations to titles would require one API call per link.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct RelationRef {
    #[serde(default)]
    pub id: String,
}

/// Result of a formula property, re-tagged by its own nested `type`.
#[derive(Debug, Clone, PartialEq)]
pub enum FormulaResult {
    String(Option<String>),
    Number(Option<f64>),
    Boolean(Option<bool>),
    Date(Option<DateValue>),
    Unknown,
}

/// Result of a rollup property. The `array` variant nests further
/// property-shaped values, which is what makes extraction recursive.
#[derive(Debug, Clone, PartialEq)]
pub enum RollupResult {
    Array(Vec<RawProperty>),
    Number(Option<f64>),
    Unknown,
}

/// One typed property value from a database row.
#[derive(Debug, Clone, PartialEq)]
pub enum RawProperty {
    Title(Vec<RichTextRun>),
    RichText(Vec<RichTextRun>),
    Number(Option<f64>),
    Select(Option<SelectOption>),
    MultiSelect(Vec<SelectOption>),
    Date(Option<DateValue>),
    Checkbox(bool),
    Url(Option<String>),
    Email(Option<String>),
    PhoneNumber(Option<String>),
    People(Vec<UserRef>),
    Relation(Vec<RelationRef>),
    Formula(FormulaResult),
    Rollup(RollupResult),
    CreatedTime(String),
    CreatedBy(UserRef),
    LastEditedTime(String),
    LastEditedBy(UserRef),
    /// A property type this client doesn't recognize yet. Carries the
    /// raw payload so nothing is lost, and extracts to the empty scalar.
    Unknown(Value),
}

impl RawProperty {
    /// Builds a property from its raw JSON object.
    pub fn from_value(value: Value) -> Self {
        let Some(kind) = value.get("type").and_then(Value::as_str) else {
            return RawProperty::Unknown(value);
        };
        let payload = value.get(kind).cloned().unwrap_or(Value::Null);

        match kind {
            "title" => Self::Title(runs_from(payload)),
            "rich_text" => Self::RichText(runs_from(payload)),
            "number" => Self::Number(payload.as_f64()),
            "select" => Self::Select(opt_from(payload)),
            "multi_select" => Self::MultiSelect(vec_from(payload)),
            "date" => Self::Date(opt_from(payload)),
            "checkbox" => Self::Checkbox(payload.as_bool().unwrap_or(false)),
            "url" => Self::Url(string_from(payload)),
            "email" => Self::Email(string_from(payload)),
            "phone_number" => Self::PhoneNumber(string_from(payload)),
            "people" => Self::People(vec_from(payload)),
            "relation" => Self::Relation(vec_from(payload)),
            "formula" => Self::Formula(formula_from(payload)),
            "rollup" => Self::Rollup(rollup_from(payload)),
            "created_time" => Self::CreatedTime(payload.as_str().unwrap_or_default().to_string()),
            "created_by" => Self::CreatedBy(opt_from(payload).unwrap_or_default()),
            "last_edited_time" => {
                Self::LastEditedTime(payload.as_str().unwrap_or_default().to_string())
            }
            "last_edited_by" => Self::LastEditedBy(opt_from(payload).unwrap_or_default()),
            _ => Self::Unknown(value),
        }
    }

    /// The Notion API type name for this value.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Title(_) => "title",
            Self::RichText(_) => "rich_text",
            Self::Number(_) => "number",
            Self::Select(_) => "select",
            Self::MultiSelect(_) => "multi_select",
            Self::Date(_) => "date",
            Self::Checkbox(_) => "checkbox",
            Self::Url(_) => "url",
            Self::Email(_) => "email",
            Self::PhoneNumber(_) => "phone_number",
            Self::People(_) => "people",
            Self::Relation(_) => "relation",
            Self::Formula(_) => "formula",
            Self::Rollup(_) => "rollup",
            Self::CreatedTime(_) => "created_time",
            Self::CreatedBy(_) => "created_by",
            Self::LastEditedTime(_) => "last_edited_time",
            Self::LastEditedBy(_) => "last_edited_by",
            Self::Unknown(value) => value
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("unknown"),
        }
    }
}

impl<'de> Deserialize<'de> for RawProperty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(RawProperty::from_value(value))
    }
}

// --- Payload helpers ---
//
// All of these absorb malformed payloads into defaults. The table layer
// depends on this: a half-broken row must still produce a full record.

fn runs_from(payload: Value) -> Vec<RichTextRun> {
    serde_json::from_value(payload).unwrap_or_default()
}

fn vec_from<T: serde::de::DeserializeOwned>(payload: Value) -> Vec<T> {
    serde_json::from_value(payload).unwrap_or_default()
}

fn opt_from<T: serde::de::DeserializeOwned>(payload: Value) -> Option<T> {
    if payload.is_null() {
        return None;
    }
    serde_json::from_value(payload).ok()
}

fn string_from(payload: Value) -> Option<String> {
    payload.as_str().map(str::to_string)
}

fn formula_from(payload: Value) -> FormulaResult {
    let Some(kind) = payload.get("type").and_then(Value::as_str) else {
        return FormulaResult::Unknown;
    };
    let inner = payload.get(kind).cloned().unwrap_or(Value::Null);

    match kind {
        "string" => FormulaResult::String(string_from(inner)),
        "number" => FormulaResult::Number(inner.as_f64()),
        "boolean" => FormulaResult::Boolean(inner.as_bool()),
        "date" => FormulaResult::Date(opt_from(inner)),
        _ => FormulaResult::Unknown,
    }
}

fn rollup_from(payload: Value) -> RollupResult {
    let Some(kind) = payload.get("type").and_then(Value::as_str) else {
        return RollupResult::Unknown;
    };
    let inner = payload.get(kind).cloned().unwrap_or(Value::Null);

    match kind {
        "array" => {
            let entries = inner
                .as_array()
                .map(|items| items.iter().cloned().map(RawProperty::from_value).collect())
                .unwrap_or_default();
            RollupResult::Array(entries)
        }
        "number" => RollupResult::Number(inner.as_f64()),
        _ => RollupResult::Unknown,
    }
}
