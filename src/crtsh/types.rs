// src/crtsh/types.rs
use serde::{Deserialize, Deserializer, Serialize};

const WILDCARD_PREFIX: &str = "*.";

/// Single record from the crt.sh JSON output
///
/// crt.sh returns many more fields (issuer, serial, validity); only the
/// name fields are needed here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertEntry {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub common_name: String,
    /// Newline-separated SAN list
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name_value: String,
}

impl CertEntry {
    /// Names derived from wildcard patterns in this entry, prefix stripped.
    ///
    /// `common_name` comes first, then each `name_value` line in order.
    /// Plain (non-wildcard) names are skipped.
    pub fn wildcard_names(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.common_name.as_str())
            .chain(self.name_value.split('\n'))
            .filter_map(strip_wildcard)
    }
}

/// `*.foo.example.com` -> `foo.example.com`; anything else -> `None`
pub fn strip_wildcard(name: &str) -> Option<&str> {
    name.strip_prefix(WILDCARD_PREFIX)
}

/// Collect the wildcard-derived names of every entry, duplicates included
pub fn extract_wildcard_names(entries: &[CertEntry]) -> Vec<String> {
    entries
        .iter()
        .flat_map(CertEntry::wildcard_names)
        .map(str::to_string)
        .collect()
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
