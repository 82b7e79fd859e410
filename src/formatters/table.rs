use crate::checks::Status;
use crate::console::Colors;
use crate::types::Comparison;

/// Console table of per-object results, followed by removed/new sections.
pub fn format(cmp: &Comparison, colors: &Colors) -> String {
    let name_w = cmp
        .common
        .iter()
        .map(|c| c.name.chars().count())
        .chain(std::iter::once("Object".len()))
        .max()
        .unwrap_or(6);

    let gutter = "   ";
    let mut lines = Vec::new();

    let header = format!("{:<name_w$}{gutter}{:<14}{gutter}Checks", "Object", "Status");
    lines.push(colors.bold(&header));
    lines.push("-".repeat(name_w + 14 + 6 + 2 * gutter.len()));

    for obj in &cmp.common {
        let status_cell = format!("{} {}", obj.status.icon(), obj.status.name());
        let checks_cell = obj
            .checks
            .iter()
            .map(|c| format!("{}{}", c.status.icon(), c.check))
            .collect::<Vec<_>>()
            .join(" ");
        let row = format!(
            "{:<name_w$}{gutter}{:<14}{gutter}{}",
            obj.name, status_cell, checks_cell
        );
        lines.push(colors.paint(&row, status_style(obj.status)));
    }

    if !cmp.removed.is_empty() {
        lines.push(String::new());
        lines.push(colors.bold(&format!(
            "Removed (only in reference): {}",
            cmp.removed.len()
        )));
        for name in &cmp.removed {
            lines.push(format!("  - {name}"));
        }
    }
    if !cmp.new_objects.is_empty() {
        lines.push(String::new());
        lines.push(colors.bold(&format!(
            "New (only in monitored): {}",
            cmp.new_objects.len()
        )));
        for name in &cmp.new_objects {
            lines.push(format!("  + {name}"));
        }
    }

    lines.join("\n")
}

pub fn status_style(status: Status) -> &'static str {
    match status {
        Status::Success => "1;32",      // bold green
        Status::Failure => "1;31",      // bold red
        Status::Inconclusive => "1;33", // bold yellow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::checks::{CheckKind, CheckOutcome};
    use crate::types::ComparedObject;

    fn sample() -> Comparison {
        Comparison {
            common: vec![ComparedObject {
                name: "pt_resolution".to_string(),
                status: Status::Failure,
                checks: vec![CheckOutcome {
                    check: CheckKind::KolmogorovTest,
                    status: Status::Failure,
                    summary: None,
                }],
            }],
            removed: vec!["eta_efficiency".to_string()],
            new_objects: vec!["phi_pulls".to_string()],
        }
    }

    #[test]
    fn table_lists_objects_and_sections() {
        let out = format(&sample(), &Colors::disabled());
        assert!(out.contains("pt_resolution"));
        assert!(out.contains("FAILURE"));
        assert!(out.contains("KolmogorovTest"));
        assert!(out.contains("Removed (only in reference): 1"));
        assert!(out.contains("  - eta_efficiency"));
        assert!(out.contains("  + phi_pulls"));
    }
}
