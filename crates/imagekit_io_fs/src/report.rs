//! Copy report models and mutable report builder.

use std::collections::BTreeMap;
use std::fmt;

use crate::spec::SpecCopyFailure;

/// Aggregate counters and diagnostics for one `copy_images` run.
#[derive(Debug, Default, Clone)]
pub struct ReportImageCopy {
    /// Number of scanned entries that matched filters.
    pub cnt_matched: u64,
    /// Total scanned source entries.
    pub cnt_scanned: u64,
    /// Number of entries copied successfully.
    pub cnt_copied: u64,
    /// Number of entries skipped by strategy or dry-run.
    pub cnt_skipped: u64,
    /// Basenames of copied entries, in processing order.
    pub l_names_copied: Vec<String>,
    /// Per-entry failures, in processing order.
    pub failures: Vec<SpecCopyFailure>,
    /// Non-fatal warnings collected during listing/copy.
    pub warnings: Vec<String>,
}

impl ReportImageCopy {
    /// Number of collected per-entry failures.
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Number of collected warnings.
    pub fn warning_count(&self) -> usize {
        self.warnings.len()
    }

    /// Machine-readable counters.
    pub fn to_dict(&self) -> BTreeMap<String, u64> {
        let mut dict_counts = BTreeMap::new();
        dict_counts.insert("cnt_matched".to_string(), self.cnt_matched);
        dict_counts.insert("cnt_scanned".to_string(), self.cnt_scanned);
        dict_counts.insert("cnt_copied".to_string(), self.cnt_copied);
        dict_counts.insert("cnt_skipped".to_string(), self.cnt_skipped);
        dict_counts.insert("cnt_failures".to_string(), self.failure_count() as u64);
        dict_counts.insert("cnt_warnings".to_string(), self.warning_count() as u64);
        dict_counts
    }

    /// Human-readable one-line summary.
    pub fn format(&self, prefix: &str) -> String {
        let dict_counts = self.to_dict();
        format!(
            "{prefix} matched={} scanned={} copied={} skipped={} failures={} warnings={}",
            dict_counts["cnt_matched"],
            dict_counts["cnt_scanned"],
            dict_counts["cnt_copied"],
            dict_counts["cnt_skipped"],
            dict_counts["cnt_failures"],
            dict_counts["cnt_warnings"]
        )
    }
}

impl fmt::Display for ReportImageCopy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format("[COPY]"))
    }
}

/// Mutable accumulator for copy statistics.
#[derive(Debug, Default, Clone)]
pub struct ReportImageCopyBuilder {
    /// See [`ReportImageCopy::cnt_matched`].
    pub cnt_matched: u64,
    /// See [`ReportImageCopy::cnt_scanned`].
    pub cnt_scanned: u64,
    /// See [`ReportImageCopy::cnt_copied`].
    pub cnt_copied: u64,
    /// See [`ReportImageCopy::cnt_skipped`].
    pub cnt_skipped: u64,
    /// See [`ReportImageCopy::l_names_copied`].
    pub l_names_copied: Vec<String>,
    /// See [`ReportImageCopy::failures`].
    pub failures: Vec<SpecCopyFailure>,
    /// See [`ReportImageCopy::warnings`].
    pub warnings: Vec<String>,
}

impl ReportImageCopyBuilder {
    /// Increment matched count by one.
    pub fn add_matched(&mut self) {
        self.cnt_matched += 1;
    }

    /// Increment scanned count by one.
    pub fn add_scanned(&mut self) {
        self.cnt_scanned += 1;
    }

    /// Increment copied count by one and record the entry basename.
    pub fn add_copied(&mut self, name: String) {
        self.cnt_copied += 1;
        self.l_names_copied.push(name);
    }

    /// Increment skipped count by one.
    pub fn add_skipped(&mut self) {
        self.cnt_skipped += 1;
    }

    /// Add warning message.
    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Add one name-scoped failure.
    pub fn add_failure(&mut self, name: String, exception: String) {
        self.failures.push(SpecCopyFailure { name, exception });
    }

    /// Finalize builder into immutable report.
    pub fn build(self) -> ReportImageCopy {
        ReportImageCopy {
            cnt_matched: self.cnt_matched,
            cnt_scanned: self.cnt_scanned,
            cnt_copied: self.cnt_copied,
            cnt_skipped: self.cnt_skipped,
            l_names_copied: self.l_names_copied,
            failures: self.failures,
            warnings: self.warnings,
        }
    }
}
