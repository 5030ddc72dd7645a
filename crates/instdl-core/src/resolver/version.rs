//! Version derivation from raw matched text.

use crate::catalog::{VersionRule, UNKNOWN};

/// Applies `rule` to the raw version captured from a vendor page.
pub fn derive_version(raw: &str, rule: VersionRule) -> String {
    let raw = raw.trim();
    if raw.is_empty() {
        return UNKNOWN.to_string();
    }
    match rule {
        VersionRule::AsIs => raw.to_string(),
        VersionRule::StripLeadingV => {
            let v = raw.strip_prefix('v').or_else(|| raw.strip_prefix('V')).unwrap_or(raw);
            if v.is_empty() {
                UNKNOWN.to_string()
            } else {
                v.to_string()
            }
        }
        VersionRule::SplitDigits { major } => {
            if !raw.bytes().all(|b| b.is_ascii_digit()) || raw.len() <= major {
                return raw.to_string();
            }
            format!("{}.{}", &raw[..major], &raw[major..])
        }
    }
}
