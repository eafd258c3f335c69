//! Entity records and create-request payloads
//!
//! Payloads are checked with `validate()` before they are turned into
//! records. Invalid input returns ValidationErrors, not panic.

pub mod validation;
pub mod board;
pub mod list;
pub mod card;

pub use validation::{FieldError, ValidationErrors};
pub use board::{Board, NewBoard};
pub use list::{List, NewList};
pub use card::{Card, NewCard};

use serde::{Deserialize, Deserializer};

/// Read an explicit JSON `null` as the field's zero value.
///
/// `#[serde(default)]` only covers absent fields; payload fields use this
/// so `{"name": null}` validates the same as `{}`.
pub(crate) fn null_as_default<'de, D, T>(de: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(de)?.unwrap_or_default())
}
