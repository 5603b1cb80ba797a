use crate::domain::model::Layer;
use thiserror::Error;

/// 編解碼失敗的底層原因
#[derive(Error, Debug)]
pub enum CodecError {
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    #[error("{0}")]
    Custom(String),
}

impl CodecError {
    pub fn custom(message: impl Into<String>) -> Self {
        CodecError::Custom(message.into())
    }
}

#[derive(Error, Debug)]
pub enum ModuleError {
    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("{layer} is required but was not supplied")]
    MissingLayer { layer: Layer },

    #[error("unmarshal {layer} failed: {source}")]
    LayerDecodeError {
        layer: Layer,
        #[source]
        source: CodecError,
    },

    #[error("marshal {layer} failed: {source}")]
    LayerEncodeError {
        layer: Layer,
        #[source]
        source: CodecError,
    },

    /// 模組自身回報的錯誤，原樣透傳
    #[error(transparent)]
    ModuleInvocationError(anyhow::Error),

    #[error("marshal resource failed: {source}. resource[{index}] id: {id}")]
    ResourceEncodeError {
        index: usize,
        id: String,
        #[source]
        source: CodecError,
    },

    #[error("marshal patcher failed: {source}")]
    PatchEncodeError {
        #[source]
        source: CodecError,
    },

    #[error("unmarshal resource[{index}] failed: {source}")]
    ResourceDecodeError {
        index: usize,
        #[source]
        source: CodecError,
    },

    #[error("unmarshal patcher failed: {source}")]
    PatchDecodeError {
        #[source]
        source: CodecError,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Which stage of a call produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Assemble,
    Invoke,
    Encode,
    Config,
}

impl ModuleError {
    /// 解碼失敗或缺少的配置層
    pub fn layer(&self) -> Option<Layer> {
        match self {
            ModuleError::LayerDecodeError { layer, .. }
            | ModuleError::LayerEncodeError { layer, .. }
            | ModuleError::MissingLayer { layer } => Some(*layer),
            _ => None,
        }
    }

    pub fn phase(&self) -> Phase {
        match self {
            ModuleError::ValidationError { .. }
            | ModuleError::MissingLayer { .. }
            | ModuleError::LayerDecodeError { .. } => Phase::Assemble,
            ModuleError::ModuleInvocationError(_) => Phase::Invoke,
            ModuleError::LayerEncodeError { .. }
            | ModuleError::ResourceEncodeError { .. }
            | ModuleError::PatchEncodeError { .. }
            | ModuleError::ResourceDecodeError { .. }
            | ModuleError::PatchDecodeError { .. } => Phase::Encode,
            ModuleError::ConfigError { .. } | ModuleError::IoError(_) => Phase::Config,
        }
    }

    /// Recovers the error the module returned, if this is one.
    pub fn into_module_error(self) -> Option<anyhow::Error> {
        match self {
            ModuleError::ModuleInvocationError(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ModuleError>;
