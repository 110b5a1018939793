//! Per-crate debug flags
//!
//! Supports flags like `--debug-betterrest-estimator` or `--debug-all`, and the
//! `BETTERREST_DEBUG` environment variable, to turn on debug logging per crate.

use std::collections::BTreeSet;
use std::env;

use crate::KNOWN_CRATES;

/// Crates with debug logging enabled
///
/// # Example
/// ```rust
/// use betterrest_observability::CrateDebugFlags;
///
/// let flags = CrateDebugFlags::from_args(vec!["--debug-betterrest-estimator".to_string()]);
/// assert!(flags.is_enabled("betterrest-estimator"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrateDebugFlags {
    pub enabled_crates: BTreeSet<String>,
}

impl CrateDebugFlags {
    /// Parse debug flags from command-line style arguments
    ///
    /// Looks for arguments matching `--debug-{crate-name}`, plus `--debug-all`.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut flags = CrateDebugFlags::default();
        for arg in args {
            if arg == "--debug-all" {
                flags.enable_all();
            } else if let Some(crate_name) = arg.strip_prefix("--debug-") {
                flags.enable(crate_name);
            }
        }
        flags
    }

    /// Flags from bare crate names, `all` enabling every known crate
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut flags = CrateDebugFlags::default();
        for name in names {
            flags.add_name(name.as_ref());
        }
        flags
    }

    /// Add the crates enabled in `other`
    pub fn merge(&mut self, other: CrateDebugFlags) {
        self.enabled_crates.extend(other.enabled_crates);
    }

    /// Merge crates listed in `BETTERREST_DEBUG` (comma-separated, or `all`)
    pub fn merge_env(&mut self) {
        if let Ok(value) = env::var("BETTERREST_DEBUG") {
            self.merge_list(&value);
        }
    }

    fn merge_list(&mut self, list: &str) {
        for name in list.split(',') {
            self.add_name(name);
        }
    }

    fn add_name(&mut self, name: &str) {
        let name = name.trim();
        if name == "all" {
            self.enable_all();
        } else if !name.is_empty() {
            self.enable(name);
        }
    }

    pub fn enable(&mut self, crate_name: &str) {
        self.enabled_crates.insert(crate_name.to_string());
    }

    pub fn enable_all(&mut self) {
        for crate_name in KNOWN_CRATES {
            self.enable(crate_name);
        }
    }

    /// Check if debug is enabled for a specific crate
    pub fn is_enabled(&self, crate_name: &str) -> bool {
        self.enabled_crates.contains(crate_name)
    }

    /// Check if debug is enabled for any crate
    pub fn any_enabled(&self) -> bool {
        !self.enabled_crates.is_empty()
    }

    /// Filter directives for `EnvFilter`
    ///
    /// Crate names are turned into tracing targets (`-` becomes `_`), e.g.
    /// `"betterrest_estimator=debug,info"`. `default_level` applies to everything else.
    pub fn to_filter_string(&self, default_level: &str) -> String {
        let mut filters: Vec<String> = self
            .enabled_crates
            .iter()
            .map(|crate_name| format!("{}=debug", crate_name.replace('-', "_")))
            .collect();
        filters.push(default_level.to_lowercase());
        filters.join(",")
    }
}

/// Generate help text for debug flags
pub fn debug_flags_help() -> String {
    format!(
        r#"Debug Flags:
  --debug-all                    Enable debug logging for all crates
  --debug-{{crate-name}}           Enable debug logging for specific crate
  --debug {{crate-name}}|all       Same, as a repeatable option

Available crates:
  {}

Environment Variable:
  BETTERREST_DEBUG={{crate-name}}[,{{crate-name}}]  Enable debug for crates (comma-separated)
  BETTERREST_DEBUG=all                           Enable debug for all crates
"#,
        KNOWN_CRATES.join(", ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_crate_flag() {
        let flags = CrateDebugFlags::from_args(vec!["--debug-betterrest-config".to_string()]);
        assert!(flags.is_enabled("betterrest-config"));
        assert!(!flags.is_enabled("betterrest-estimator"));
    }

    #[test]
    fn test_unrelated_args_are_ignored() {
        let flags = CrateDebugFlags::from_args(vec![
            "--wake".to_string(),
            "07:00".to_string(),
            "--debug-betterrest-cli".to_string(),
        ]);
        assert_eq!(flags.enabled_crates.len(), 1);
        assert!(flags.any_enabled());
    }

    #[test]
    fn test_debug_all() {
        let flags = CrateDebugFlags::from_args(vec!["--debug-all".to_string()]);
        for crate_name in KNOWN_CRATES {
            assert!(flags.is_enabled(crate_name), "{} should be enabled", crate_name);
        }
    }

    #[test]
    fn test_from_names_and_lists() {
        let mut flags = CrateDebugFlags::from_names(["betterrest-estimator", " "]);
        assert_eq!(flags.enabled_crates.len(), 1);

        flags.merge_list("betterrest-config, betterrest-cli,");
        assert!(flags.is_enabled("betterrest-config"));
        assert!(flags.is_enabled("betterrest-cli"));

        let all = CrateDebugFlags::from_names(["all"]);
        assert_eq!(all.enabled_crates.len(), KNOWN_CRATES.len());
    }

    #[test]
    fn test_filter_string_uses_targets() {
        let flags = CrateDebugFlags::from_args(vec!["--debug-betterrest-estimator".to_string()]);
        assert_eq!(
            flags.to_filter_string("WARN"),
            "betterrest_estimator=debug,warn"
        );
        assert_eq!(CrateDebugFlags::default().to_filter_string("info"), "info");
    }

    #[test]
    fn test_merge() {
        let mut flags = CrateDebugFlags::from_names(["betterrest-cli"]);
        flags.merge(CrateDebugFlags::from_args(vec![
            "--debug-betterrest-estimator".to_string(),
        ]));
        assert!(flags.is_enabled("betterrest-cli"));
        assert!(flags.is_enabled("betterrest-estimator"));
    }

    #[test]
    fn test_help_lists_both_flag_forms() {
        let help = debug_flags_help();
        assert!(help.contains("--debug-all"));
        assert!(help.contains("--debug {crate-name}|all"));
        assert!(help.contains("betterrest-estimator"));
    }
}
