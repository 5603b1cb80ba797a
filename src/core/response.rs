use crate::domain::model::{GeneratorResponse, Patcher, Resource};
use crate::domain::ports::DocumentCodec;
use crate::domain::wire::WireResponse;
use crate::utils::error::{ModuleError, Result};

/// Encodes a module's output. `None` becomes [`WireResponse::empty`].
///
/// Resources are encoded one by one in order; the first failure discards
/// everything encoded so far.
pub fn encode_response<C: DocumentCodec>(
    codec: &C,
    response: Option<&GeneratorResponse>,
) -> Result<WireResponse> {
    let Some(response) = response else {
        tracing::info!("no resources generated, returning empty response");
        return Ok(WireResponse::empty());
    };

    let mut resources = Vec::with_capacity(response.resources.len());
    for (index, res) in response.resources.iter().enumerate() {
        let out = codec
            .encode(res)
            .map_err(|source| ModuleError::ResourceEncodeError {
                index,
                id: res.id.clone(),
                source,
            })?;
        tracing::debug!("encoded resource[{}] {} ({} bytes)", index, res.id, out.len());
        resources.push(out);
    }

    let patcher = match &response.patcher {
        Some(patcher) => Some(
            codec
                .encode(patcher)
                .map_err(|source| ModuleError::PatchEncodeError { source })?,
        ),
        None => None,
    };

    Ok(WireResponse { resources, patcher })
}

/// Decodes a wire response back into typed resources, as a host would.
pub fn decode_response<C: DocumentCodec>(codec: &C, response: &WireResponse) -> Result<GeneratorResponse> {
    let resources = response
        .resources
        .iter()
        .enumerate()
        .map(|(index, bytes)| {
            codec
                .decode::<Resource>(bytes)
                .map_err(|source| ModuleError::ResourceDecodeError { index, source })
        })
        .collect::<Result<Vec<_>>>()?;

    let patcher = match response.patcher.as_deref() {
        Some(bytes) if !bytes.is_empty() => Some(
            codec
                .decode::<Patcher>(bytes)
                .map_err(|source| ModuleError::PatchDecodeError { source })?,
        ),
        _ => None,
    };

    Ok(GeneratorResponse { resources, patcher })
}
