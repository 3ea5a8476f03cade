// tea_catalog/src/models/patch.rs
use serde::{Deserialize, Deserializer};

/// Deserializes a field that is present in the payload, turning
/// `Option<Option<T>>` into a tri-state: missing key (`None`, via
/// `#[serde(default)]`), explicit `null` (`Some(None)`) or a value.
pub(crate) fn present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
  T: Deserialize<'de>,
  D: Deserializer<'de>,
{
  Option::<T>::deserialize(deserializer).map(Some)
}
