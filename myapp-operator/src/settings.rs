use std::{env::var, time::Duration};

use derive_builder::Builder;
use myapp_operator_core::{resources::policy::JobPolicy, FIELD_MANAGER};
use thiserror::Error;

pub const WATCH_NAMESPACE_ENV: &str = "MYAPP_OPERATOR_WATCH_NAMESPACE";
pub const REQUEUE_SECS_ENV: &str = "MYAPP_OPERATOR_REQUEUE_SECS";

/// Interval between two successful reconciliations of the same object. Derived resources
/// deleted out-of-band are recreated on the next run, there is no backoff and no jitter.
pub const DEFAULT_REQUEUE_SECS: u64 = 30;

#[derive(Debug, Clone, Builder)]
#[builder(default)]
pub struct ReconcilerSettings {
    /// watch a single namespace instead of the whole cluster
    pub watch_namespace: Option<String>,
    pub requeue_interval: Duration,
    pub field_manager: String,
    pub job_policy: JobPolicy,
}

impl Default for ReconcilerSettings {
    fn default() -> Self {
        Self {
            watch_namespace: None,
            requeue_interval: Duration::from_secs(DEFAULT_REQUEUE_SECS),
            field_manager: FIELD_MANAGER.to_owned(),
            job_policy: JobPolicy::default(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("{} must be a positive number of seconds, got '{}'!", .0, .1)]
    InvalidRequeueInterval(&'static str, String),
    #[error("Couldn't build settings: {}", .0)]
    Builder(ReconcilerSettingsBuilderError),
}

impl ReconcilerSettings {
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::from_lookup(|name| var(name).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, SettingsError> {
        let mut builder = ReconcilerSettingsBuilder::default();

        if let Some(namespace) = lookup(WATCH_NAMESPACE_ENV).filter(|ns| !ns.is_empty()) {
            builder.watch_namespace(Some(namespace));
        }

        if let Some(raw) = lookup(REQUEUE_SECS_ENV) {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| SettingsError::InvalidRequeueInterval(REQUEUE_SECS_ENV, raw.clone()))?;

            builder.requeue_interval(Duration::from_secs(secs));
        }

        builder.build().map_err(SettingsError::Builder)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashMap, time::Duration};

    use super::{ReconcilerSettings, SettingsError, REQUEUE_SECS_ENV, WATCH_NAMESPACE_ENV};

    fn settings_from(vars: &[(&str, &str)]) -> Result<ReconcilerSettings, SettingsError> {
        let vars = vars
            .iter()
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect::<HashMap<_, _>>();

        ReconcilerSettings::from_lookup(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults_watch_everything_and_requeue_every_30_seconds() {
        let settings = settings_from(&[]).unwrap();

        assert_eq!(settings.watch_namespace, None);
        assert_eq!(settings.requeue_interval, Duration::from_secs(30));
        assert_eq!(settings.field_manager, "myapp-operator");
    }

    #[test]
    fn env_overrides_are_applied() {
        let settings =
            settings_from(&[(WATCH_NAMESPACE_ENV, "operators"), (REQUEUE_SECS_ENV, "120")]).unwrap();

        assert_eq!(settings.watch_namespace.as_deref(), Some("operators"));
        assert_eq!(settings.requeue_interval, Duration::from_secs(120));
    }

    #[test]
    fn empty_namespace_means_all_namespaces() {
        let settings = settings_from(&[(WATCH_NAMESPACE_ENV, "")]).unwrap();

        assert_eq!(settings.watch_namespace, None);
    }

    #[test]
    fn invalid_requeue_interval_is_rejected() {
        assert!(matches!(
            settings_from(&[(REQUEUE_SECS_ENV, "soon")]),
            Err(SettingsError::InvalidRequeueInterval(_, _))
        ));
        assert!(matches!(
            settings_from(&[(REQUEUE_SECS_ENV, "0")]),
            Err(SettingsError::InvalidRequeueInterval(_, _))
        ));
    }
}
