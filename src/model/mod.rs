//! Token and profile types returned by provider clients.

pub mod discord;
pub mod profile;
pub mod spotify;
pub mod token;

use serde::{Deserialize, Deserializer};

/// Deserializes a field that may be absent or `null`.
///
/// Combined with `#[serde(default)]`, an absent field is `None` and an explicit `null` is
/// `Some(None)`, so the field serializes back exactly as the provider sent it.
pub(crate) fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
