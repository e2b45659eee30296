//! Optional knobs for the lessons, read from TOML.
//!
//! ```toml
//! inputs = ["123", "12a"]
//! loop_bound = 100000000
//! run_boxed = false
//! color = false
//! ```
//!
//! Every key is optional; anything missing keeps the default.

use crate::digits::DEFAULT_INPUTS;
use crate::error::{LessonError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "IDIOM_LESSONS_CONFIG";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LessonConfig {
    pub inputs: Vec<String>,
    pub loop_bound: i64,
    pub run_boxed: bool,
    pub color: bool,
}

impl Default for LessonConfig {
    fn default() -> Self {
        Self {
            inputs: DEFAULT_INPUTS.iter().map(|s| s.to_string()).collect(),
            loop_bound: i64::from(i32::MAX),
            run_boxed: true,
            color: true,
        }
    }
}

impl LessonConfig {
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: LessonConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|e| LessonError::config_read(path, e))?;
        Self::from_toml_str(&source)
    }

    /// Loads the file named by `IDIOM_LESSONS_CONFIG`, or the defaults if unset.
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// `loop_bound` narrowed to the range both loops accept.
    pub fn bound(&self) -> Result<i32> {
        i32::try_from(self.loop_bound)
            .ok()
            .filter(|bound| *bound >= 0)
            .ok_or_else(|| {
                LessonError::invalid_config(format!(
                    "loop_bound must be between 0 and {}, got {}",
                    i32::MAX,
                    self.loop_bound
                ))
            })
    }

    pub fn validate(&self) -> Result<()> {
        self.bound()?;
        Ok(())
    }
}
