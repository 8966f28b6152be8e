//! Findings grouped by page.
//!
//! [`FindingsAggregator`] collects findings while a run is in progress and
//! turns into a [`LintReport`] once the source is exhausted.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::checks::Finding;

/// Page key of a word; `None` when the source has no pagination.
pub type Page = Option<u32>;

/// Collects findings per page, in the order pages are first seen.
#[derive(Debug, Default)]
pub struct FindingsAggregator {
    pages: IndexMap<Page, Vec<Vec<Finding>>>,
    total: usize,
}

impl FindingsAggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the findings of one check pass over one word.
    ///
    /// An empty group is ignored, so pages with no findings never appear.
    pub fn record(&mut self, page: Page, group: Vec<Finding>) {
        if group.is_empty() {
            return;
        }
        self.total += group.len();
        self.pages.entry(page).or_default().push(group);
    }

    /// Number of findings recorded so far.
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of pages with at least one finding.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Finish aggregation.
    pub fn into_report(self, words_read: usize, words_checked: usize) -> LintReport {
        LintReport {
            pages: self
                .pages
                .into_iter()
                .map(|(page, groups)| PageFindings { page, groups })
                .collect(),
            total_findings: self.total,
            words_read,
            words_checked,
        }
    }
}

/// Findings of a single page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageFindings {
    /// The page, or `None` for unpaginated input.
    pub page: Page,
    /// One group per (word, check) pass that produced findings, in emission order.
    pub groups: Vec<Vec<Finding>>,
}

impl PageFindings {
    /// Every finding of the page, flattened.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.groups.iter().flatten()
    }
}

/// Result of a complete run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintReport {
    /// Pages with findings, in first-seen order.
    pub pages: Vec<PageFindings>,
    /// Number of findings across all pages.
    pub total_findings: usize,
    /// Non-empty tokens read from the source.
    pub words_read: usize,
    /// Tokens that were run through the checks (common words excluded).
    pub words_checked: usize,
}

impl LintReport {
    /// Every finding, in report order.
    pub fn findings(&self) -> impl Iterator<Item = &Finding> {
        self.pages.iter().flat_map(PageFindings::findings)
    }

    /// Returns `true` if the run produced no findings.
    pub const fn is_clean(&self) -> bool {
        self.total_findings == 0
    }
}

impl fmt::Display for LintReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for page in &self.pages {
            if let Some(n) = page.page {
                writeln!(f, "Página {n}:")?;
            }
            for finding in page.findings() {
                writeln!(f, "{finding}")?;
            }
            writeln!(f)?;
        }
        write!(f, "Total: {} avisos", self.total_findings)
    }
}
