use crate::config::toml_config::AdapterConfig;
use crate::core::codec::{decode_layer, encode_layer};
use crate::domain::model::{GeneratorRequest, Layer};
use crate::domain::ports::DocumentCodec;
use crate::domain::wire::WireRequest;
use crate::utils::error::{ModuleError, Result};

/// Builds a typed [`GeneratorRequest`] from its wire form.
///
/// Layers are decoded in [`Layer::ALL`] order and the first failure aborts the
/// whole assembly. Logging the assembled request is best effort.
pub fn assemble_request<C: DocumentCodec>(
    codec: &C,
    config: &AdapterConfig,
    request: Option<&WireRequest>,
) -> Result<GeneratorRequest> {
    let Some(wire) = request else {
        return Err(ModuleError::ValidationError {
            message: "empty generator request".to_string(),
        });
    };

    if config.logging.log_wire_request {
        tracing::info!("module request received: {}", wire);
    }

    if config.workload_required() && wire.layer(Layer::Workload).is_none() {
        return Err(ModuleError::MissingLayer {
            layer: Layer::Workload,
        });
    }

    let workload = decode_layer(codec, Layer::Workload, wire.layer(Layer::Workload))?;
    let dev_config = decode_layer(codec, Layer::DevConfig, wire.layer(Layer::DevConfig))?;
    let platform_config = decode_layer(
        codec,
        Layer::PlatformConfig,
        wire.layer(Layer::PlatformConfig),
    )?;
    let context = decode_layer(codec, Layer::Context, wire.layer(Layer::Context))?;
    let secret_store = decode_layer(codec, Layer::SecretStore, wire.layer(Layer::SecretStore))?;

    let result = GeneratorRequest {
        project: wire.project.clone(),
        stack: wire.stack.clone(),
        app: wire.app.clone(),
        workload,
        dev_config,
        platform_config,
        context,
        secret_store,
    };

    if config.logging.log_assembled_request {
        match codec.encode(&result) {
            Ok(out) => tracing::info!(
                "new generator request:\n{}",
                String::from_utf8_lossy(&out)
            ),
            Err(e) => tracing::warn!("marshal new generator request failed: {}", e),
        }
    }

    Ok(result)
}

/// Encodes a typed request into its wire form. Used by hosts, and by tests to
/// check that assembly reverses it.
pub fn encode_request<C: DocumentCodec>(codec: &C, request: &GeneratorRequest) -> Result<WireRequest> {
    let mut wire = WireRequest::new(&request.project, &request.stack, &request.app);
    wire.workload = encode_layer(codec, Layer::Workload, &request.workload)?;
    wire.dev_config = encode_layer(codec, Layer::DevConfig, &request.dev_config)?;
    wire.platform_config = encode_layer(codec, Layer::PlatformConfig, &request.platform_config)?;
    wire.context = encode_layer(codec, Layer::Context, &request.context)?;
    wire.secret_store = encode_layer(codec, Layer::SecretStore, &request.secret_store)?;
    Ok(wire)
}
