// src/extract/property.rs
//! Flattens one typed property value to a scalar.
//!
//! Dispatch is purely on the property's type; no two types share a
//! branch. The only recursive case is a rollup of type `array`, whose
//! entries are themselves property-shaped and re-enter the extractor.

use super::rich_text::concat_rich_text;
use super::Scalar;
use crate::model::{DateValue, FormulaResult, RawProperty, RollupResult};

/// Extracts the scalar representation of one property value.
///
/// Total for any syntactically valid shape: absent or malformed nested
/// data resolves to the empty scalar, and unrecognized types do too.
pub fn extract_property(property: &RawProperty) -> Scalar {
    match property {
        RawProperty::Title(runs) | RawProperty::RichText(runs) => {
            Scalar::text(concat_rich_text(runs))
        }
        RawProperty::Number(number) => number.map_or(Scalar::Empty, Scalar::Number),
        RawProperty::Select(select) => select
            .as_ref()
            .map_or(Scalar::Empty, |opt| Scalar::text(opt.name.clone())),
        RawProperty::MultiSelect(options) => {
            // API order is meaningful (manual ordering in the UI) — no re-sort
            Scalar::text(
                options
                    .iter()
                    .map(|opt| opt.name.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        }
        RawProperty::Date(date) => extract_date(date.as_ref()),
        RawProperty::Checkbox(checked) => Scalar::Bool(*checked),
        RawProperty::Url(value) | RawProperty::Email(value) | RawProperty::PhoneNumber(value) => {
            value.as_deref().map_or(Scalar::Empty, Scalar::text)
        }
        RawProperty::People(people) => Scalar::text(
            people
                .iter()
                .filter_map(|person| person.name.as_deref())
                .collect::<Vec<_>>()
                .join(", "),
        ),
        RawProperty::Relation(relations) => {
            // Shallow references: resolving IDs to titles would cost one
            // API round-trip per related page.
            Scalar::text(
                relations
                    .iter()
                    .map(|rel| rel.id.as_str())
                    .collect::<Vec<_>>()
                    .join(", "),
            )
        }
        RawProperty::Formula(formula) => extract_formula(formula),
        RawProperty::Rollup(rollup) => extract_rollup(rollup),
        RawProperty::CreatedTime(ts) | RawProperty::LastEditedTime(ts) => Scalar::text(ts.clone()),
        RawProperty::CreatedBy(user) | RawProperty::LastEditedBy(user) => {
            user.name.as_deref().map_or(Scalar::Empty, Scalar::text)
        }
        RawProperty::Unknown(_) => Scalar::Empty,
    }
}

/// `start - end` when both ends are present, bare start otherwise.
fn extract_date(date: Option<&DateValue>) -> Scalar {
    let Some(date) = date else {
        return Scalar::Empty;
    };
    match (date.start.as_deref(), date.end.as_deref()) {
        (Some(start), Some(end)) => Scalar::text(format!("{} - {}", start, end)),
        (Some(start), None) => Scalar::text(start),
        _ => Scalar::Empty,
    }
}

fn extract_formula(formula: &FormulaResult) -> Scalar {
    match formula {
        FormulaResult::String(value) => value.as_deref().map_or(Scalar::Empty, Scalar::text),
        FormulaResult::Number(value) => value.map_or(Scalar::Empty, Scalar::Number),
        FormulaResult::Boolean(value) => value.map_or(Scalar::Empty, Scalar::Bool),
        FormulaResult::Date(date) => extract_date(date.as_ref()),
        FormulaResult::Unknown => Scalar::Empty,
    }
}

fn extract_rollup(rollup: &RollupResult) -> Scalar {
    match rollup {
        RollupResult::Array(entries) => {
            let parts: Vec<String> = entries
                .iter()
                .map(extract_property)
                .filter(|scalar| !scalar.is_empty())
                .map(|scalar| scalar.to_string())
                .collect();
            Scalar::text(parts.join(", "))
        }
        RollupResult::Number(value) => value.map_or(Scalar::Empty, Scalar::Number),
        RollupResult::Unknown => Scalar::Empty,
    }
}
