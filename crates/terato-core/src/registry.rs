//! Check selection.
//!
//! All checks run by default. A selection can instead name the only checks
//! to run (allow-list) or the checks to skip (deny-list), never both.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::checks::Check;
use crate::error::{LintError, LintResult};

/// Which checks a [`CheckRegistry`] runs.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "mode", content = "checks", rename_all = "lowercase")]
pub enum Selection {
    /// Every check.
    #[default]
    All,
    /// Only these checks.
    Only(BTreeSet<Check>),
    /// Every check except these.
    Except(BTreeSet<Check>),
}

/// The closed list of checks plus the active selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckRegistry {
    selection: Selection,
}

impl CheckRegistry {
    /// A registry running every check.
    pub fn all() -> Self {
        Self::default()
    }

    /// Build a registry from optional allow- and deny-lists.
    ///
    /// Supplying both is an error, even if one of them is empty.
    pub fn from_lists(enable: Option<&[Check]>, disable: Option<&[Check]>) -> LintResult<Self> {
        let selection = match (enable, disable) {
            (None, None) => Selection::All,
            (Some(only), None) => Selection::Only(only.iter().copied().collect()),
            (None, Some(except)) => Selection::Except(except.iter().copied().collect()),
            (Some(only), Some(except)) => {
                return Err(LintError::ConflictingSelection {
                    enabled: join_codes(only),
                    disabled: join_codes(except),
                });
            }
        };
        tracing::debug!(?selection, "check selection resolved");
        Ok(Self { selection })
    }

    /// The active selection.
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Returns `true` if `check` runs under this selection.
    pub fn is_enabled(&self, check: Check) -> bool {
        match &self.selection {
            Selection::All => true,
            Selection::Only(only) => only.contains(&check),
            Selection::Except(except) => !except.contains(&check),
        }
    }

    /// Enabled checks, in run order.
    pub fn enabled(&self) -> impl Iterator<Item = Check> + '_ {
        Check::ALL.into_iter().filter(|c| self.is_enabled(*c))
    }
}

fn join_codes(checks: &[Check]) -> String {
    checks.iter().map(|c| c.code()).collect::<Vec<_>>().join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_runs_everything_in_order() {
        let registry = CheckRegistry::all();
        assert_eq!(registry.enabled().collect::<Vec<_>>(), Check::ALL);
    }

    #[test]
    fn allow_list_keeps_run_order() {
        let registry =
            CheckRegistry::from_lists(Some(&[Check::MisusedVerb, Check::Mente]), None).unwrap();
        assert_eq!(
            registry.enabled().collect::<Vec<_>>(),
            vec![Check::Mente, Check::MisusedVerb]
        );
    }

    #[test]
    fn deny_list_removes_checks() {
        let registry = CheckRegistry::from_lists(None, Some(&[Check::Repetition])).unwrap();
        assert!(!registry.is_enabled(Check::Repetition));
        assert!(registry.is_enabled(Check::Mente));
        assert_eq!(registry.enabled().count(), Check::ALL.len() - 1);
    }

    #[test]
    fn both_lists_conflict() {
        let err = CheckRegistry::from_lists(Some(&[Check::Mente]), Some(&[Check::Overused]))
            .unwrap_err();
        assert_eq!(
            err,
            LintError::ConflictingSelection {
                enabled: "mente".into(),
                disabled: "overused".into(),
            }
        );
    }

    #[test]
    fn empty_lists_still_conflict() {
        let empty: &[Check] = &[];
        assert!(CheckRegistry::from_lists(Some(empty), Some(empty)).is_err());
    }
}
