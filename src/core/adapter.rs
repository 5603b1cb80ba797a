use crate::config::toml_config::AdapterConfig;
use crate::core::codec::YamlCodec;
use crate::core::request::assemble_request;
use crate::core::response::encode_response;
use crate::domain::ports::{DocumentCodec, FrameworkModule, WireModule};
use crate::domain::wire::{WireRequest, WireResponse};
use crate::utils::error::{ModuleError, Result};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Wraps a [`FrameworkModule`] so it can be served over the wire boundary.
///
/// Each call runs decode -> generate -> encode and stops at the first error.
/// The adapter keeps no per-call state, so one instance can serve concurrent
/// calls.
pub struct ModuleAdapter<M: FrameworkModule, C: DocumentCodec = YamlCodec> {
    module: M,
    codec: C,
    config: AdapterConfig,
}

impl<M: FrameworkModule> ModuleAdapter<M, YamlCodec> {
    pub fn new(module: M) -> Self {
        Self::with_codec(module, YamlCodec)
    }
}

impl<M: FrameworkModule, C: DocumentCodec> ModuleAdapter<M, C> {
    pub fn with_codec(module: M, codec: C) -> Self {
        Self {
            module,
            codec,
            config: AdapterConfig::default(),
        }
    }

    pub fn with_config(mut self, config: AdapterConfig) -> Self {
        self.config = config;
        self
    }

    pub fn module(&self) -> &M {
        &self.module
    }

    pub fn config(&self) -> &AdapterConfig {
        &self.config
    }

    pub async fn generate(
        &self,
        ctx: &CancellationToken,
        request: Option<&WireRequest>,
    ) -> Result<WireResponse> {
        let request = assemble_request(&self.codec, &self.config, request)?;

        // ctx 只轉交給模組，逾時與取消由模組自行處理
        let response = self
            .module
            .generate(ctx, &request)
            .await
            .map_err(ModuleError::ModuleInvocationError)?;

        let Some(response) = response else {
            tracing::info!(
                "no resources generated by request: project={} stack={} app={}",
                request.project,
                request.stack,
                request.app
            );
            return Ok(WireResponse::empty());
        };

        tracing::debug!(
            "module generated {} resources, patcher: {}",
            response.resources.len(),
            response.patcher.is_some()
        );
        encode_response(&self.codec, Some(&response))
    }
}

#[async_trait]
impl<M: FrameworkModule, C: DocumentCodec> WireModule for ModuleAdapter<M, C> {
    async fn generate(
        &self,
        ctx: &CancellationToken,
        request: Option<&WireRequest>,
    ) -> Result<WireResponse> {
        ModuleAdapter::generate(self, ctx, request).await
    }
}
