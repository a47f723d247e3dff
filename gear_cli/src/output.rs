//! Output formatting for stat vectors, diffs and breakdowns.

use gear_core::{ComparisonReport, StatDiff, StatKey, StatVector};

/// Message printed when a rendering has no entries.
pub const NO_DIFFERENCE: &str = "No difference";

/// Options for [`render_stat_diff`].
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Keys to render, in order. Empty means every key.
    pub stat_keys: Vec<StatKey>,
    /// Skip keys whose value is zero.
    pub only_non_zero: bool,
    /// Appended to every value, e.g. `%` for potential.
    pub value_suffix: String,
}

impl RenderOptions {
    pub fn non_zero() -> Self {
        RenderOptions {
            only_non_zero: true,
            ..RenderOptions::default()
        }
    }

    pub fn with_keys(mut self, keys: Vec<StatKey>) -> Self {
        self.stat_keys = keys;
        self
    }

    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.value_suffix = suffix.to_string();
        self
    }
}

/// Render a vector as `LABEL: +v` entries separated by two spaces.
///
/// Positive values carry a `+`, negative values their own `-`.
/// Returns [`NO_DIFFERENCE`] when nothing is left to show.
pub fn render_stat_diff(stats: &StatVector, opts: &RenderOptions) -> String {
    let keys: &[StatKey] = if opts.stat_keys.is_empty() {
        &StatKey::ALL
    } else {
        &opts.stat_keys
    };

    let entries: Vec<String> = keys
        .iter()
        .map(|key| (*key, stats.get(*key)))
        .filter(|(_, value)| !(opts.only_non_zero && *value == 0.0))
        .map(|(key, value)| {
            let sign = if value > 0.0 { "+" } else { "" };
            format!("{}: {sign}{value}{}", key.label(), opts.value_suffix)
        })
        .collect();

    if entries.is_empty() {
        NO_DIFFERENCE.to_string()
    } else {
        entries.join("  ")
    }
}

/// Render a vector as plain `LABEL: v` entries (no sign), zeros skipped.
pub fn render_totals(stats: &StatVector, keys: &[StatKey]) -> String {
    let entries: Vec<String> = stats
        .non_zero()
        .filter(|(key, _)| keys.is_empty() || keys.contains(key))
        .map(|(key, value)| format!("{}: {value}", key.label()))
        .collect();
    if entries.is_empty() {
        "(none)".to_string()
    } else {
        entries.join("  ")
    }
}

/// Two lines: headline stat diff and potential diff.
pub fn render_diff(diff: &StatDiff, keys: &[StatKey]) -> String {
    let headline = RenderOptions::non_zero().with_keys(keys.to_vec());
    let potential = headline.clone().with_suffix("%");
    format!(
        "  stats:     {}\n  potential: {}",
        render_stat_diff(&diff.stat_diff, &headline),
        render_stat_diff(&diff.potential_diff, &potential)
    )
}

/// Per-slot diffs followed by the total.
pub fn render_report(report: &ComparisonReport, keys: &[StatKey]) -> String {
    let mut out = String::new();
    for (label, diff) in &report.slots {
        let label = if label.is_empty() { "(unnamed)" } else { label };
        out.push_str(&format!("[{label}]\n{}\n", render_diff(diff, keys)));
    }
    out.push_str(&format!("[total]\n{}", render_diff(&report.total, keys)));
    out
}

/// One line per breakdown source.
pub fn render_breakdown(parts: &[(&str, StatVector)], keys: &[StatKey]) -> String {
    parts
        .iter()
        .map(|(label, stats)| format!("{label:>10}  {}", render_totals(stats, keys)))
        .collect::<Vec<_>>()
        .join("\n")
}
