pub mod adapter;
pub mod codec;
pub mod request;
pub mod response;

pub use crate::domain::model::{GeneratorRequest, GeneratorResponse};
pub use crate::domain::ports::{DocumentCodec, FrameworkModule, WireModule};
pub use crate::domain::wire::{WireRequest, WireResponse};
pub use crate::utils::error::Result;
