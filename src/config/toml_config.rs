use crate::utils::error::{ModuleError, Result};
use crate::utils::validation::{validate_one_of, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Whether an absent workload layer is acceptable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadPolicy {
    /// 缺少時解碼為空值
    #[default]
    Optional,
    /// 缺少時拒絕請求
    Required,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdapterConfig {
    pub request: RequestConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RequestConfig {
    pub workload: WorkloadPolicy,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_wire_request: bool,
    pub log_assembled_request: bool,
    /// Only consulted by hosts that install a subscriber from this config.
    pub level: String,
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_wire_request: true,
            log_assembled_request: true,
            level: "info".to_string(),
            format: "compact".to_string(),
        }
    }
}

impl AdapterConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ModuleError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| ModuleError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    pub fn workload_required(&self) -> bool {
        self.request.workload == WorkloadPolicy::Required
    }

    pub fn json_logs(&self) -> bool {
        self.logging.format == "json"
    }
}

impl Validate for AdapterConfig {
    fn validate(&self) -> Result<()> {
        validate_one_of(
            "logging.level",
            &self.logging.level,
            &["error", "warn", "info", "debug", "trace"],
        )?;
        validate_one_of("logging.format", &self.logging.format, &["compact", "json"])?;
        Ok(())
    }
}
