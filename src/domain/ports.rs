use crate::domain::model::{GeneratorRequest, GeneratorResponse};
use crate::domain::wire::{WireRequest, WireResponse};
use crate::utils::error::{CodecError, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::sync::CancellationToken;

/// Business logic implemented by platform engineers.
///
/// Returning `Ok(None)` means "nothing to generate" and is not an error. The
/// cancellation token belongs to the caller; honoring it is up to the module.
#[async_trait]
pub trait FrameworkModule: Send + Sync {
    async fn generate(
        &self,
        ctx: &CancellationToken,
        request: &GeneratorRequest,
    ) -> anyhow::Result<Option<GeneratorResponse>>;
}

/// The wire-level boundary a host talks to.
#[async_trait]
pub trait WireModule: Send + Sync {
    async fn generate(
        &self,
        ctx: &CancellationToken,
        request: Option<&WireRequest>,
    ) -> Result<WireResponse>;
}

/// Shared document encoding used on both sides of the boundary.
pub trait DocumentCodec: Send + Sync {
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> std::result::Result<T, CodecError>;

    fn encode<T: Serialize>(&self, value: &T) -> std::result::Result<Vec<u8>, CodecError>;
}
