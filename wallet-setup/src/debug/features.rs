//! Debug feature flags
//!
//! Flags are read once when a workflow is constructed and never change for
//! its lifetime. Every flag defaults to off; overrides exist only in debug
//! builds (or with the `debug-mode` cargo feature) and in tests.

use std::collections::BTreeSet;
use std::fmt;

/// A debug-only affordance that can be switched on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DebugFeature {
    /// Render a "skip" control on the seed backup confirmation step.
    SkipWalletBackupConfirmation,
}

impl DebugFeature {
    pub fn all() -> &'static [DebugFeature] {
        &[DebugFeature::SkipWalletBackupConfirmation]
    }

    /// Name used in configuration (`WALLET_DEBUG_FEATURES`).
    pub fn name(&self) -> &'static str {
        match self {
            DebugFeature::SkipWalletBackupConfirmation => "skipWalletBackupConfirmation",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.name() == name)
    }
}

impl fmt::Display for DebugFeature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Immutable set of enabled debug features.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    enabled: BTreeSet<DebugFeature>,
}

impl FeatureFlags {
    pub fn is_enabled(&self, feature: DebugFeature) -> bool {
        self.enabled.contains(&feature)
    }

    /// Build flags from configured feature names.
    ///
    /// Unknown names are logged and ignored. In release builds without the
    /// `debug-mode` feature every name is ignored.
    pub fn from_names<S: AsRef<str>>(names: &[S]) -> Self {
        let mut flags = Self::default();
        if names.is_empty() {
            return flags;
        }
        if !super::debug_features_allowed() {
            tracing::warn!(count = names.len(), "Debug features requested but not available in this build");
            return flags;
        }
        for name in names {
            match DebugFeature::from_name(name.as_ref()) {
                Some(feature) => {
                    tracing::info!(feature = %feature, "Debug feature enabled");
                    flags.enabled.insert(feature);
                }
                None => tracing::warn!(name = name.as_ref(), "Unknown debug feature ignored"),
            }
        }
        flags
    }

    /// Force a feature on or off.
    #[cfg(any(test, debug_assertions, feature = "debug-mode"))]
    pub fn with(mut self, feature: DebugFeature, enabled: bool) -> Self {
        if enabled {
            self.enabled.insert(feature);
        } else {
            self.enabled.remove(&feature);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_features_disabled_by_default() {
        let flags = FeatureFlags::default();
        for feature in DebugFeature::all() {
            assert!(!flags.is_enabled(*feature));
        }
    }

    #[test]
    fn test_feature_name_round_trip() {
        assert_eq!(
            DebugFeature::from_name("skipWalletBackupConfirmation"),
            Some(DebugFeature::SkipWalletBackupConfirmation)
        );
        assert_eq!(DebugFeature::from_name("skip_wallet_backup_confirmation"), None);
    }

    #[test]
    fn test_with_override() {
        let flags = FeatureFlags::default().with(DebugFeature::SkipWalletBackupConfirmation, true);
        assert!(flags.is_enabled(DebugFeature::SkipWalletBackupConfirmation));

        let flags = flags.with(DebugFeature::SkipWalletBackupConfirmation, false);
        assert_eq!(flags, FeatureFlags::default());
    }

    #[test]
    fn test_from_names_ignores_unknown() {
        let flags = FeatureFlags::from_names(&["skipWalletBackupConfirmation", "noSuchFeature"]);
        assert_eq!(
            flags.is_enabled(DebugFeature::SkipWalletBackupConfirmation),
            crate::debug::debug_features_allowed()
        );

        let empty: [&str; 0] = [];
        assert_eq!(FeatureFlags::from_names(&empty), FeatureFlags::default());
    }
}
