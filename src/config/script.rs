use crate::core::{ScriptProvider, Step};
use crate::utils::error::{PersonError, Result};
use crate::utils::validation::{
    validate_non_empty_list, validate_non_empty_string, validate_times, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 以 TOML 描述的執行腳本
///
/// ```toml
/// [script]
/// name = "greeting"
///
/// [[steps]]
/// person = "guido"
/// action = "talk"
/// times = 2
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptConfig {
    pub script: ScriptInfo,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptInfo {
    pub name: String,
    pub description: Option<String>,
}

impl ScriptConfig {
    /// 從 TOML 檔案載入腳本
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Loading script from {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path).map_err(PersonError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析腳本
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PersonError::ConfigParseError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

impl ScriptProvider for ScriptConfig {
    fn name(&self) -> &str {
        &self.script.name
    }

    fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl Validate for ScriptConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("script.name", &self.script.name)?;
        validate_non_empty_list("steps", &self.steps)?;

        for (index, step) in self.steps.iter().enumerate() {
            validate_non_empty_string(&format!("steps[{}].person", index), &step.person)?;
            validate_times(&format!("steps[{}].times", index), step.times)?;
        }

        Ok(())
    }
}
