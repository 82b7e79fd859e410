use std::io::IsTerminal;

/// ANSI color policy shared by the console panels and the result table.
pub struct Colors {
    enabled: bool,
}

impl Colors {
    pub fn enabled() -> Self {
        let force = std::env::var("CLICOLOR_FORCE")
            .ok()
            .filter(|v| v != "0")
            .is_some();
        let no_color = std::env::var_os("NO_COLOR").is_some();
        let clicolor_zero = std::env::var("CLICOLOR")
            .ok()
            .map(|v| v == "0")
            .unwrap_or(false);
        let term = std::io::stdout().is_terminal();
        let enabled = if force {
            true
        } else if no_color || clicolor_zero {
            false
        } else {
            term
        };
        Colors { enabled }
    }

    #[cfg(test)]
    pub fn disabled() -> Self {
        Colors { enabled: false }
    }

    pub fn paint(&self, s: &str, code: &str) -> String {
        if self.enabled {
            format!("\x1b[{}m{}\x1b[0m", code, s)
        } else {
            s.to_string()
        }
    }

    pub fn bold(&self, s: &str) -> String {
        if self.enabled {
            format!("\x1b[1m{}\x1b[0m", s)
        } else {
            s.to_string()
        }
    }
}

/// Renders a titled box around `body` lines.
pub fn panel(colors: &Colors, title: &str, body: &[String], style: Option<&str>) -> String {
    let inner = body
        .iter()
        .map(|l| l.chars().count())
        .chain(std::iter::once(title.chars().count() + 2))
        .max()
        .unwrap_or(0);

    let mut lines = Vec::with_capacity(body.len() + 2);
    let top_fill = inner.saturating_sub(title.chars().count());
    lines.push(format!("\u{250c}\u{2500} {} {}\u{2510}", title, "\u{2500}".repeat(top_fill)));
    for line in body {
        let pad = (inner + 2).saturating_sub(line.chars().count());
        lines.push(format!("\u{2502} {}{}\u{2502}", line, " ".repeat(pad)));
    }
    lines.push(format!("\u{2514}{}\u{2518}", "\u{2500}".repeat(inner + 3)));

    match style {
        Some(code) => lines
            .iter()
            .map(|l| colors.paint(l, code))
            .collect::<Vec<_>>()
            .join("\n"),
        None => lines.join("\n"),
    }
}

/// Styled failure line for recoverable, already-diagnosed problems.
pub fn fail(colors: &Colors, message: &str) {
    eprintln!("{}", colors.paint(&format!("\u{2717} {message}"), "1;31"));
}
