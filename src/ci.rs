/// Which CI platform, if any, the tool is running under. Detected once and
/// passed through the orchestration instead of living in a global.
#[derive(Debug, Clone, Copy, Default)]
pub struct CiEnv {
    pub github_actions: bool,
}

impl CiEnv {
    pub fn detect() -> Self {
        CiEnv {
            github_actions: std::env::var_os("GITHUB_ACTIONS").is_some(),
        }
    }
}

/// Formats a GitHub Actions workflow command, e.g. `::error::message`.
///
/// The message payload must not break the single-line protocol, so `%`,
/// CR and LF are percent-encoded.
pub fn github_actions_marker(level: &str, message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::{level}::{escaped}")
}
