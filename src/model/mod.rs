// src/model/mod.rs
//! Raw Notion API shapes, one step above JSON.
//!
//! These types are ephemeral: constructed per API page response, walked
//! once by the extraction layer, then discarded. They deliberately model
//! the API's tagged-union shape as closed enums with an explicit
//! `Unknown` catch-all, so schema evolution upstream degrades to empty
//! cells instead of deserialization failures.

mod block;
mod property;
mod row;

pub use block::{BlockPayload, RawBlock};
pub use property::{
    DateValue, FormulaResult, RawProperty, RelationRef, RichTextRun, RollupResult, SelectOption,
    TextContent, UserRef,
};
pub use row::DatabaseRow;
