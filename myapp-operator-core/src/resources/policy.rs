//! Fixed policy applied to every generated cron job.
//!
//! None of these values come from the `MyApp` spec. [`JobPolicy::default`] holds the
//! values every release uses, [`JobPolicyBuilder`] is there for whoever needs to vary them.

use derive_builder::Builder;

/// Deadline (in seconds) for starting a job that missed its scheduled time.
pub const DEFAULT_STARTING_DEADLINE_SECS: i64 = 100;
pub const DEFAULT_COMMAND: &[&str] = &["python"];
pub const DEFAULT_ARGS: &[&str] = &["-m", "src.driver"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConcurrencyPolicy {
    Allow,
    /// skip a run while the previous one is still going
    Forbid,
    Replace,
}

impl ConcurrencyPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Allow => "Allow",
            Self::Forbid => "Forbid",
            Self::Replace => "Replace",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestartPolicy {
    Always,
    OnFailure,
    Never,
}

impl RestartPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "Always",
            Self::OnFailure => "OnFailure",
            Self::Never => "Never",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PullPolicy {
    Always,
    IfNotPresent,
    Never,
}

impl PullPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Always => "Always",
            Self::IfNotPresent => "IfNotPresent",
            Self::Never => "Never",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(default)]
pub struct JobPolicy {
    pub concurrency_policy: ConcurrencyPolicy,
    pub starting_deadline_seconds: i64,
    /// restart policy of the pods spawned by a single run
    pub restart_policy: RestartPolicy,
    pub image_pull_policy: PullPolicy,
    #[builder(setter(into))]
    pub command: Vec<String>,
    #[builder(setter(into))]
    pub args: Vec<String>,
}

impl Default for JobPolicy {
    fn default() -> Self {
        Self {
            concurrency_policy: ConcurrencyPolicy::Forbid,
            starting_deadline_seconds: DEFAULT_STARTING_DEADLINE_SECS,
            restart_policy: RestartPolicy::Never,
            image_pull_policy: PullPolicy::Always,
            command: to_owned_vec(DEFAULT_COMMAND),
            args: to_owned_vec(DEFAULT_ARGS),
        }
    }
}

fn to_owned_vec(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| (*value).to_owned()).collect()
}
