use std::fmt::Write as _;

use crate::report::ReportMeta;
use crate::types::Comparison;

/// Markdown report body: run summary, per-object table, removed/new lists.
pub fn format(cmp: &Comparison, meta: &ReportMeta) -> String {
    let status = cmp.overall_status();
    let mut out = String::new();

    let _ = writeln!(out, "# Histogram comparison: {} {}", status.icon(), status.name());
    let _ = writeln!(out);
    let _ = writeln!(out, "- Monitored: `{}`", meta.monitored);
    let _ = writeln!(out, "- Reference: `{}`", meta.reference);
    let _ = writeln!(out, "- Generated: {}", meta.generated_at);
    let _ = writeln!(
        out,
        "- Objects: {} common \u{b7} {} removed \u{b7} {} new",
        cmp.common.len(),
        cmp.removed.len(),
        cmp.new_objects.len()
    );
    let _ = writeln!(out);

    let _ = writeln!(out, "## Common objects");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Object | Status | Checks |");
    let _ = writeln!(out, "|--------|:------:|--------|");
    for obj in &cmp.common {
        let checks = obj
            .checks
            .iter()
            .map(|c| match &c.summary {
                Some(s) => format!("{} {} ({})", c.status.icon(), c.check, s),
                None => format!("{} {}", c.status.icon(), c.check),
            })
            .collect::<Vec<_>>()
            .join("<br>");
        let _ = writeln!(
            out,
            "| `{}` | {} {} | {} |",
            obj.name,
            obj.status.icon(),
            obj.status.name(),
            checks
        );
    }

    if !cmp.removed.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "## Removed (only in reference)");
        let _ = writeln!(out);
        for name in &cmp.removed {
            let _ = writeln!(out, "- `{name}`");
        }
    }
    if !cmp.new_objects.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "## New (only in monitored)");
        let _ = writeln!(out);
        for name in &cmp.new_objects {
            let _ = writeln!(out, "- `{name}`");
        }
    }

    out
}
