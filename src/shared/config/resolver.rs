// Builds the Settings the rest of the service reads.
//
// Purpose
// - Layer three sources at increasing precedence: defaults, the optional env file, process variables.
//
// Responsibilities
// - Resolve once and hand out the same shared instance until the cache is reset.
// - Never fail outward: a missing or unreadable file and bad values only cost that layer or that key.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use tracing::{debug, warn};

use crate::shared::config::coerce::CoercionError;
use crate::shared::config::env_file::{self, EnvFileLocator};
use crate::shared::config::environment::{Environment, ProcessEnvironment};
use crate::shared::config::settings::{KEYS, Settings};

pub struct ConfigResolver<TEnvironment = ProcessEnvironment>
where
    TEnvironment: Environment,
{
    environment: TEnvironment,
    locator: EnvFileLocator,
    cached: OnceLock<Arc<Settings>>,
}

impl ConfigResolver<ProcessEnvironment> {
    pub fn from_process() -> Self {
        Self::new(ProcessEnvironment, EnvFileLocator::from_process())
    }
}

impl<TEnvironment> ConfigResolver<TEnvironment>
where
    TEnvironment: Environment,
{
    pub fn new(environment: TEnvironment, locator: EnvFileLocator) -> Self {
        Self {
            environment,
            locator,
            cached: OnceLock::new(),
        }
    }

    /// Returns the cached settings, building them on first use.
    pub fn resolve(&self) -> Arc<Settings> {
        Arc::clone(self.cached.get_or_init(|| Arc::new(self.build())))
    }

    /// Drops the cached settings so the next `resolve` re-reads every source.
    pub fn reset_cache(&mut self) {
        self.cached.take();
    }

    pub fn environment_mut(&mut self) -> &mut TEnvironment {
        &mut self.environment
    }

    /// The env file the next build would read, if any.
    pub fn env_file(&self) -> Option<PathBuf> {
        self.locator.locate(&self.environment)
    }

    fn build(&self) -> Settings {
        let mut settings = Settings::default();
        if let Some(path) = self.env_file() {
            apply_env_file(&mut settings, &path);
        }
        self.apply_environment(&mut settings);
        settings
    }

    fn apply_environment(&self, settings: &mut Settings) {
        for key in KEYS {
            if let Some(raw) = self.environment.var(key) {
                apply(settings, key, &raw, "environment");
            }
        }
    }
}

fn apply_env_file(settings: &mut Settings, path: &Path) {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "env file unreadable, skipping");
            return;
        }
    };
    debug!(path = %path.display(), "loading env file");
    for (key, raw) in env_file::parse(&contents) {
        apply(settings, &key, &raw, "env file");
    }
}

fn apply(settings: &mut Settings, key: &str, raw: &str, source: &'static str) {
    match settings.set_from_str(key, raw) {
        Ok(()) => {}
        Err(CoercionError::UnknownKey(_)) => debug!(key, source, "ignoring unknown key"),
        Err(err) => warn!(source, error = %err, "configuration value rejected"),
    }
}
