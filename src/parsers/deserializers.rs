use serde::{Deserialize, Deserializer};

/// Treats an explicit JSON `null` like a missing field.
///
/// Claude Code writes `null` for some optional fields; the logs should decode
/// the same whether a field is absent or null.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
