//! Data-quality accounting for the normalization pass
//!
//! Per-record problems are never raised: each dropped row increments a
//! per-reason counter, and the whole report is surfaced once after
//! normalization completes.

use comfy_table::{Cell, Color, Table, modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL};
use rustc_hash::FxHashMap;

/// Why a raw row was dropped during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropReason {
    MissingName,
    MissingId,
    MissingTitle,
    MissingJournal,
    UnparseableDate,
}

impl DropReason {
    /// All reasons, in report display order.
    pub const ALL: [DropReason; 5] = [
        DropReason::MissingName,
        DropReason::MissingId,
        DropReason::MissingTitle,
        DropReason::MissingJournal,
        DropReason::UnparseableDate,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::MissingName => "missing drug name",
            Self::MissingId => "missing id",
            Self::MissingTitle => "missing title",
            Self::MissingJournal => "missing journal",
            Self::UnparseableDate => "unparseable date",
        }
    }
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Aggregated counters for one normalization pass.
#[derive(Debug, Clone, Default)]
pub struct QualityReport {
    /// Raw rows examined
    pub rows_seen: usize,
    /// Rows that survived validation
    pub rows_kept: usize,
    /// Exact duplicates collapsed (not treated as errors)
    pub duplicates: usize,
    drops: FxHashMap<DropReason, usize>,
}

impl QualityReport {
    pub fn record_drop(&mut self, reason: DropReason) {
        *self.drops.entry(reason).or_default() += 1;
    }

    pub fn dropped(&self, reason: DropReason) -> usize {
        self.drops.get(&reason).copied().unwrap_or(0)
    }

    pub fn total_dropped(&self) -> usize {
        self.drops.values().sum()
    }

    /// Fold another report into this one.
    pub fn merge(&mut self, other: &QualityReport) {
        self.rows_seen += other.rows_seen;
        self.rows_kept += other.rows_kept;
        self.duplicates += other.duplicates;
        for (reason, count) in &other.drops {
            *self.drops.entry(*reason).or_default() += count;
        }
    }

    /// Log a one-line summary; warns when rows were dropped.
    pub fn log(&self) {
        if self.total_dropped() > 0 {
            log::warn!(
                "Normalization kept {} of {} rows ({} dropped, {} duplicates collapsed)",
                fmt_num(self.rows_kept),
                fmt_num(self.rows_seen),
                fmt_num(self.total_dropped()),
                fmt_num(self.duplicates),
            );
        } else {
            log::info!(
                "Normalization kept {} of {} rows ({} duplicates collapsed)",
                fmt_num(self.rows_kept),
                fmt_num(self.rows_seen),
                fmt_num(self.duplicates),
            );
        }
    }

    /// Format the report as a table for terminal display.
    pub fn format_table(&self) -> String {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS)
            .set_header(vec![
                Cell::new("Data Quality")
                    .fg(Color::Cyan)
                    .add_attribute(comfy_table::Attribute::Bold),
                Cell::new("Rows").fg(Color::Cyan),
                Cell::new("%").fg(Color::Cyan),
            ]);

        table.add_row(vec![
            Cell::new("Rows seen"),
            Cell::new(fmt_num(self.rows_seen)),
            Cell::new(""),
        ]);
        table.add_row(vec![
            Cell::new("Rows kept").fg(Color::Green),
            Cell::new(fmt_num(self.rows_kept)).fg(Color::Green),
            Cell::new(format!("{:.1}", pct(self.rows_kept, self.rows_seen))).fg(Color::Green),
        ]);
        table.add_row(vec![
            Cell::new("Duplicates collapsed"),
            Cell::new(fmt_num(self.duplicates)),
            Cell::new(format!("{:.1}", pct(self.duplicates, self.rows_seen))),
        ]);
        for reason in DropReason::ALL {
            let count = self.dropped(reason);
            if count == 0 {
                continue;
            }
            table.add_row(vec![
                Cell::new(format!("Dropped: {reason}")).fg(Color::Yellow),
                Cell::new(fmt_num(count)).fg(Color::Yellow),
                Cell::new(format!("{:.1}", pct(count, self.rows_seen))).fg(Color::Yellow),
            ]);
        }

        format!("\n{table}")
    }
}

/// Format with thousands separators.
fn fmt_num(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Calculate percentage safely.
fn pct(part: usize, total: usize) -> f64 {
    if total > 0 {
        part as f64 / total as f64 * 100.0
    } else {
        0.0
    }
}
