//! Feature flags.

use serde::{Deserialize, Serialize};

/// Boolean toggles read by components outside this crate.
///
/// Only `enable_rate_limiting` differs between profiles; the other flags
/// carry no behaviour here and are passed through as configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeatureFlags {
    /// Response caching.
    pub enable_caching: bool,

    /// Per-client rate limiting.
    pub enable_rate_limiting: bool,

    /// Audit trail of claim decisions.
    pub enable_audit_trail: bool,

    /// Explanations attached to answers.
    pub enable_explainability: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            enable_caching: true,
            enable_rate_limiting: false,
            enable_audit_trail: true,
            enable_explainability: true,
        }
    }
}

impl FeatureFlags {
    /// Returns the names of the enabled flags.
    #[must_use]
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            self.enable_caching.then_some("caching"),
            self.enable_rate_limiting.then_some("rate_limiting"),
            self.enable_audit_trail.then_some("audit_trail"),
            self.enable_explainability.then_some("explainability"),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_lists_set_flags_in_order() {
        let flags = FeatureFlags::default();
        assert_eq!(
            flags.enabled(),
            vec!["caching", "audit_trail", "explainability"]
        );

        let flags = FeatureFlags {
            enable_rate_limiting: true,
            enable_caching: false,
            ..FeatureFlags::default()
        };
        assert_eq!(
            flags.enabled(),
            vec!["rate_limiting", "audit_trail", "explainability"]
        );
    }
}
