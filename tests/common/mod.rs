#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

pub fn bin_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_histcmp"))
}

/// Creates a pair of dummy monitored/reference input files. The fake engine
/// never reads them; they only have to exist for argument validation.
pub fn write_inputs(dir: &Path) -> (PathBuf, PathBuf) {
    let monitored = dir.join("monitored.root");
    let reference = dir.join("reference.root");
    fs::write(&monitored, b"monitored payload").unwrap();
    fs::write(&reference, b"reference payload").unwrap();
    (monitored, reference)
}

/// Writes an executable shell script standing in for the analysis engine:
/// it drains stdin and prints the given comparison JSON.
#[cfg(unix)]
pub fn fake_engine(dir: &Path, comparison_json: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-engine");
    let script = format!("#!/bin/sh\ncat >/dev/null\ncat <<'EOF'\n{comparison_json}\nEOF\n");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Fake engine that copies its stdin to `$HISTCMP_TEST_CAPTURE` before
/// answering, so tests can inspect the request the CLI sent.
#[cfg(unix)]
pub fn capturing_engine(dir: &Path, comparison_json: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("capturing-engine");
    let script = format!(
        "#!/bin/sh\ncat > \"$HISTCMP_TEST_CAPTURE\"\ncat <<'EOF'\n{comparison_json}\nEOF\n"
    );
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Fake engine that exits non-zero with a message on stderr.
#[cfg(unix)]
pub fn broken_engine(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("broken-engine");
    fs::write(
        &path,
        "#!/bin/sh\ncat >/dev/null\necho 'cannot open histogram file' >&2\nexit 3\n",
    )
    .unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Base command with CI/engine environment scrubbed so the ambient test
/// environment cannot leak in.
pub fn histcmp() -> Command {
    let mut cmd = Command::new(bin_path());
    cmd.env_remove("GITHUB_ACTIONS");
    cmd.env_remove("HISTCMP_ENGINE");
    cmd
}

pub const ALL_SUCCESS: &str = r#"{
  "common": [
    {"name": "pt_resolution", "status": "SUCCESS",
     "checks": [{"check": "Chi2Test", "status": "SUCCESS", "summary": "chi2/ndf = 0.97"},
                {"check": "KolmogorovTest", "status": "SUCCESS"}]}
  ],
  "removed": [],
  "new": []
}"#;

pub const ONE_FAILURE: &str = r#"{
  "common": [
    {"name": "pt_resolution", "status": "SUCCESS",
     "checks": [{"check": "Chi2Test", "status": "SUCCESS"}]},
    {"name": "eta_efficiency", "status": "FAILURE",
     "checks": [{"check": "KolmogorovTest", "status": "FAILURE", "summary": "p = 0.0001"}]}
  ],
  "removed": [],
  "new": []
}"#;

pub const ALL_INCONCLUSIVE: &str = r#"{
  "common": [
    {"name": "pt_resolution", "status": "INCONCLUSIVE",
     "checks": [{"check": "RatioCheck", "status": "INCONCLUSIVE"}]}
  ],
  "removed": [],
  "new": []
}"#;

pub const REMOVED_ONLY: &str = r#"{
  "common": [
    {"name": "pt_resolution", "status": "SUCCESS",
     "checks": [{"check": "Chi2Test", "status": "SUCCESS"}]}
  ],
  "removed": ["eta_efficiency"],
  "new": []
}"#;

pub const FAILURE_WITH_NEW: &str = r#"{
  "common": [
    {"name": "eta_efficiency", "status": "FAILURE",
     "checks": [{"check": "Chi2Test", "status": "FAILURE"}]}
  ],
  "removed": [],
  "new": ["phi_pulls"]
}"#;
