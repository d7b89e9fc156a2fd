//! Resource key finalization.
//!
//! XAML resource keys come from the human-assigned source name, cleaned to
//! something a `x:Key` attribute accepts, with a disambiguation suffix when
//! the user did not pick a key explicitly.

use crate::config::KeyConfig;
use std::time::{SystemTime, UNIX_EPOCH};

/// Pick the final resource key.
///
/// An explicit key wins as-is (sanitized, no suffix). Otherwise the source
/// name is sanitized, falls back to the configured default when nothing
/// survives, and gets a uniqueness suffix when enabled.
pub fn finalize_key(explicit: Option<&str>, source_name: &str, config: &KeyConfig) -> String {
    if let Some(key) = explicit {
        let key = sanitize_key(key);
        if !key.is_empty() {
            return key;
        }
    }

    let mut key = sanitize_key(source_name);
    if key.is_empty() {
        key = config.default_name.clone();
    }
    if config.unique_suffix {
        key.push('_');
        key.push_str(&timestamp_suffix());
    }
    key
}

/// Keep only ASCII alphanumerics; design-tool layer names carry spaces,
/// slashes, and emoji freely.
fn sanitize_key(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).collect()
}

/// Last six digits of the current unix-epoch milliseconds.
fn timestamp_suffix() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("{:06}", millis % 1_000_000)
}
