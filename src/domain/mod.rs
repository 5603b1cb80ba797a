// Domain layer: typed request/response models, wire forms and ports (interfaces).

pub mod model;
pub mod ports;
pub mod wire;
