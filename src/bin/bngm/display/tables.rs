use std::io::Write;

use bngl_model::{ModelSummary, Report, TranslateError};

use crate::util::text::truncate;

const INDENT: &str = "      ";

const BOX_INNER_WIDTH: usize = 62;
const SAFE_TABLE_WIDTH: usize = BOX_INNER_WIDTH - INDENT.len();

pub fn print_summary(out: &mut impl Write, summary: &ModelSummary) {
    let rows = [
        ("Parameters", summary.parameters.to_string()),
        ("Molecule Types", summary.molecule_types.to_string()),
        ("Seed Molecules", summary.seed_molecules.to_string()),
        ("Seed Bonds", summary.seed_bonds.to_string()),
        ("Compartments", summary.compartments.to_string()),
        ("Reaction Rules", summary.rules.to_string()),
        ("Bond Changes", summary.bond_changes.to_string()),
        ("Observables", summary.observables.to_string()),
        ("Obs. Patterns", summary.observable_patterns.to_string()),
    ];
    print_kv_table(out, "Model Summary", &rows);
}

pub fn print_config(out: &mut impl Write, notes: &[String]) {
    if notes.is_empty() {
        return;
    }
    let rows: Vec<_> = notes.iter().map(|n| ("Setting", n.clone())).collect();
    print_kv_table(out, "Translation Settings", &rows);
}

/// Lists skipped units and warnings. Prints nothing for a clean report.
pub fn print_report(out: &mut impl Write, report: &Report) {
    if report.is_clean() {
        return;
    }

    let kind_w = 9usize;
    let sep_overhead = 5;
    let msg_w = SAFE_TABLE_WIDTH.saturating_sub(kind_w + sep_overhead);

    let _ = writeln!(out, "{}┌─ Translation Report ─┐", INDENT);
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{m_line}┐",
        INDENT,
        k_line = "─".repeat(kind_w + 2),
        m_line = "─".repeat(msg_w + 2)
    );
    let _ = writeln!(
        out,
        "{}│ {:<kind_w$} │ {:<msg_w$} │",
        INDENT,
        "Kind",
        "Detail",
        kind_w = kind_w,
        msg_w = msg_w
    );
    let _ = writeln!(
        out,
        "{}├{k_line}┼{m_line}┤",
        INDENT,
        k_line = "─".repeat(kind_w + 2),
        m_line = "─".repeat(msg_w + 2)
    );

    let rows = report
        .skipped
        .iter()
        .map(|e| ("skipped", e))
        .chain(report.warnings.iter().map(|e| ("warning", e)));
    for (kind, err) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<kind_w$} │ {:<msg_w$} │",
            INDENT,
            kind,
            truncate(&issue_text(err), msg_w),
            kind_w = kind_w,
            msg_w = msg_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{m_line}┘",
        INDENT,
        k_line = "─".repeat(kind_w + 2),
        m_line = "─".repeat(msg_w + 2)
    );
}

/// Compact one-line description of a report entry.
fn issue_text(err: &TranslateError) -> String {
    match err {
        TranslateError::UnresolvedReference { item, id, .. } => format!("{item}: unknown id {id}"),
        TranslateError::InvalidBond { item, site, .. } => format!("{item}: self-bond at {site}"),
        TranslateError::AmbiguousRate { rule, count } => format!("{rule}: {count} rate constants"),
        TranslateError::MissingRate { rule } => format!("{rule}: no rate constant"),
        other => other.to_string(),
    }
}

fn print_kv_table(out: &mut impl Write, title: &str, rows: &[(&str, String)]) {
    let key_w = 16usize;
    let sep_overhead = 6;
    let val_w = SAFE_TABLE_WIDTH.saturating_sub(key_w + sep_overhead);

    let _ = writeln!(
        out,
        "{}┌─ {} ─┐",
        INDENT,
        truncate(title, SAFE_TABLE_WIDTH - 6)
    );
    let _ = writeln!(
        out,
        "{}┌{k_line}┬{v_line}┐",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );

    for (key, val) in rows {
        let _ = writeln!(
            out,
            "{}│ {:<key_w$} │ {:>val_w$} │",
            INDENT,
            truncate(key, key_w),
            truncate(val, val_w),
            key_w = key_w,
            val_w = val_w
        );
    }

    let _ = writeln!(
        out,
        "{}└{k_line}┴{v_line}┘",
        INDENT,
        k_line = "─".repeat(key_w + 2),
        v_line = "─".repeat(val_w + 2)
    );
}
