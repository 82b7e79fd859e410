use serde::{Deserialize, Serialize};

use crate::checks::{CheckOutcome, Status};

/// One histogram present in both inputs, with its check outcomes and the
/// status the engine reduced them to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparedObject {
    pub name: String,
    pub status: Status,
    #[serde(default)]
    pub checks: Vec<CheckOutcome>,
}

/// Result of comparing two histogram files: the three-way partition of the
/// objects found in them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Comparison {
    /// Objects present in both inputs, annotated with check outcomes.
    #[serde(default)]
    pub common: Vec<ComparedObject>,
    /// Object names present only in the reference input.
    #[serde(default)]
    pub removed: Vec<String>,
    /// Object names present only in the monitored input.
    #[serde(default, rename = "new")]
    pub new_objects: Vec<String>,
}

impl Comparison {
    /// Reduces per-object outcomes to the run verdict.
    ///
    /// FAILURE requires both a failing common object and an unchanged object
    /// set; removed/new entries on their own never force FAILURE. An empty
    /// `common` set is vacuously INCONCLUSIVE.
    pub fn overall_status(&self) -> Status {
        let any_failure = self.common.iter().any(|c| c.status == Status::Failure);
        if any_failure && self.removed.is_empty() && self.new_objects.is_empty() {
            Status::Failure
        } else if self.common.iter().all(|c| c.status == Status::Inconclusive) {
            Status::Inconclusive
        } else {
            Status::Success
        }
    }
}
