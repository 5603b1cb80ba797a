use crate::domain::model::Layer;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Request as it crosses the transport. Every layer is an independently
/// encoded document; `None` or an empty buffer means the layer was not supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireRequest {
    pub project: String,
    pub stack: String,
    pub app: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workload: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dev_config: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform_config: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secret_store: Option<Vec<u8>>,
}

impl WireRequest {
    pub fn new(
        project: impl Into<String>,
        stack: impl Into<String>,
        app: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            stack: stack.into(),
            app: app.into(),
            ..Default::default()
        }
    }

    /// Bytes carried for `layer`, or `None` when the layer is absent.
    pub fn layer(&self, layer: Layer) -> Option<&[u8]> {
        let raw = match layer {
            Layer::Workload => &self.workload,
            Layer::DevConfig => &self.dev_config,
            Layer::PlatformConfig => &self.platform_config,
            Layer::Context => &self.context,
            Layer::SecretStore => &self.secret_store,
        };
        raw.as_deref().filter(|bytes| !bytes.is_empty())
    }

    pub fn set_layer(&mut self, layer: Layer, bytes: Option<Vec<u8>>) {
        let slot = match layer {
            Layer::Workload => &mut self.workload,
            Layer::DevConfig => &mut self.dev_config,
            Layer::PlatformConfig => &mut self.platform_config,
            Layer::Context => &mut self.context,
            Layer::SecretStore => &mut self.secret_store,
        };
        *slot = bytes;
    }

    pub fn with_layer(mut self, layer: Layer, bytes: impl Into<Vec<u8>>) -> Self {
        self.set_layer(layer, Some(bytes.into()));
        self
    }
}

// 層內容為人類可讀格式，直接以文字輸出到日誌
impl fmt::Display for WireRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "project:{:?} stack:{:?} app:{:?}",
            self.project, self.stack, self.app
        )?;
        for layer in Layer::ALL {
            if let Some(bytes) = self.layer(layer) {
                write!(f, " {}:{:?}", layer, String::from_utf8_lossy(bytes))?;
            }
        }
        Ok(())
    }
}

/// Encoded module output. Success never yields an absent response; "nothing
/// generated" is [`WireResponse::empty`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireResponse {
    #[serde(default)]
    pub resources: Vec<Vec<u8>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patcher: Option<Vec<u8>>,
}

impl WireResponse {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty() && self.patcher.is_none()
    }
}
