pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::modules::EchoModule;
pub use config::toml_config::{AdapterConfig, WorkloadPolicy};
pub use core::{adapter::ModuleAdapter, codec::YamlCodec};
pub use domain::model::{
    Accessory, GenericConfig, GeneratorRequest, GeneratorResponse, Layer, Patcher, Resource,
    ResourceType, SecretStore,
};
pub use domain::ports::{DocumentCodec, FrameworkModule, WireModule};
pub use domain::wire::{WireRequest, WireResponse};
pub use utils::error::{CodecError, ModuleError, Result};
