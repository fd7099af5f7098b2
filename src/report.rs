//! Text and JSON renderings of estimator results.
//!
//! The text layouts are fixed-width tables meant for terminals; the JSON
//! documents carry the interchange field names unchanged.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::Serialize;

use crate::layout::{BestSelection, LayoutReport, Sweep};
use crate::shape::PaddedLayout;

/// Pretty-prints a struct as a JSON object with lexicographically sorted
/// top-level keys.
pub fn sorted_json<T: Serialize>(value: &T) -> serde_json::Result<String> {
    let fields: BTreeMap<String, serde_json::Value> =
        serde_json::from_value(serde_json::to_value(value)?)?;
    serde_json::to_string_pretty(&fields)
}

/// Human readable summary of a single evaluation.
pub fn render_layout(report: &LayoutReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "commit-layout");
    let _ = writeln!(out, "Style        : {} ({})", report.style_name, report.style);
    let _ = writeln!(out, "Note         : {}", report.note);
    out.push('\n');
    let _ = writeln!(out, "Leaves       : {}", report.leaves);
    let _ = writeln!(out, "Fanout       : {}", report.fanout);
    let _ = writeln!(out, "Hash bytes   : {}", report.hash_bytes);
    out.push('\n');
    let _ = writeln!(out, "Tree shape:");
    let _ = writeln!(out, "  Height          : {}", report.tree_height);
    let _ = writeln!(out, "  Total nodes     : {}", report.total_nodes);
    let _ = writeln!(out, "  Nodes per level : {:?}", report.nodes_per_level);
    out.push('\n');
    let _ = writeln!(out, "Proof / commitment estimates:");
    let _ = writeln!(
        out,
        "  Branch length   : {} nodes",
        report.proof_branch_length
    );
    let _ = writeln!(out, "  Per-proof bytes : {} bytes", report.per_proof_bytes);
    let _ = writeln!(out, "  Per-proof bits  : {} bits", report.per_proof_bits);
    let _ = writeln!(
        out,
        "  Commitment size : {} bytes (all nodes)",
        report.total_commitment_bytes
    );
    out
}

/// Human readable summary of a padded layout.
pub fn render_padded(layout: &PaddedLayout) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "commit-layout :: tree sizing");
    let _ = writeln!(out, "  leaves           : {}", layout.leaves);
    let _ = writeln!(out, "  arity            : {}", layout.arity);
    out.push('\n');
    let _ = writeln!(out, "  height (levels)  : {}", layout.height);
    let _ = writeln!(out, "  leaf nodes       : {}", layout.leaf_nodes);
    let _ = writeln!(out, "  internal nodes   : {}", layout.internal_nodes);
    let _ = writeln!(out, "  total nodes      : {}", layout.total_nodes);
    out.push('\n');
    let _ = writeln!(out, "  padding leaves   : {}", layout.padding_leaves);
    if layout.padding_leaves > 0 {
        let _ = writeln!(
            out,
            "  padding fraction : {:.4}%",
            layout.padding_fraction() * 100.0
        );
    } else {
        let _ = writeln!(out, "  padding fraction : 0%");
    }
    out
}

/// Comparison table of a fanout selection; the winner is marked with `*`.
pub fn render_selection(selection: &BestSelection) -> String {
    let header = format!(
        "{:>6}  {:>6}  {:>10}  {:>8}  {:>12}  {:>16}  {:>12}",
        "FANOUT", "HEIGHT", "NODES", "BRANCH", "PROOF BYTES", "TOTAL COMM BYTES", "METRIC"
    );
    let mut out = String::new();
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{}", "-".repeat(header.len()));

    for candidate in &selection.candidates {
        let report = &candidate.report;
        let mark = if selection.is_best(candidate) { '*' } else { ' ' };
        let _ = writeln!(
            out,
            "{:>6}  {:>6}  {:>10}  {:>8}  {:>12}  {:>16}  {:>12.2}{}",
            candidate.fanout,
            report.tree_height,
            report.total_nodes,
            report.proof_branch_length,
            report.per_proof_bytes,
            report.total_commitment_bytes,
            candidate.metric_value.as_f64(),
            mark
        );
    }

    out.push('\n');
    let _ = writeln!(
        out,
        "Best fanout for leaves={}, style={}, metric={}: {} (marked with *)",
        selection.leaves,
        selection.style,
        selection.metric,
        selection.chosen_fanout()
    );
    out
}

/// Result table of a sweep.
pub fn render_sweep(sweep: &Sweep) -> String {
    let header = format!(
        "{:>10}  {:>6}  {:>6}  {:>12}  {:>12}  {:>16}",
        "LEAVES", "FANOUT", "HEIGHT", "NODES", "PROOF BYTES", "TOTAL COMM BYTES"
    );
    let mut out = String::new();
    let _ = writeln!(out, "{header}");
    let _ = writeln!(out, "{}", "-".repeat(header.len()));
    for row in &sweep.rows {
        let _ = writeln!(
            out,
            "{:>10}  {:>6}  {:>6}  {:>12}  {:>12}  {:>16}",
            row.leaves,
            row.fanout,
            row.tree_height,
            row.total_nodes,
            row.per_proof_bytes,
            row.total_commitment_bytes
        );
    }
    out
}

/// JSON summary `{style, rows}` of a sweep, two-space indented.
pub fn sweep_summary_json(sweep: &Sweep) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&sweep.summary())
}

/// One compact JSON document per sweep row.
pub fn sweep_raw_lines(sweep: &Sweep) -> serde_json::Result<Vec<String>> {
    sweep.raw_lines().map(|line| serde_json::to_string(&line)).collect()
}
