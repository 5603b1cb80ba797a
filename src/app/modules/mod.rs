pub mod echo_module;

pub use echo_module::EchoModule;
