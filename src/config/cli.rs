use crate::core::request::encode_request;
use crate::domain::model::GeneratorRequest;
use crate::domain::ports::DocumentCodec;
use crate::domain::wire::WireRequest;
use crate::utils::error::{ModuleError, Result};
use std::path::Path;

/// 讀取 CLI 的請求文件：各層以內嵌 YAML 撰寫，再像主機一樣逐層編碼
pub fn load_wire_request<P: AsRef<Path>, C: DocumentCodec>(path: P, codec: &C) -> Result<WireRequest> {
    let content = std::fs::read_to_string(&path)?;
    parse_wire_request(&content, codec)
}

pub fn parse_wire_request<C: DocumentCodec>(content: &str, codec: &C) -> Result<WireRequest> {
    let document: GeneratorRequest =
        serde_yaml::from_str(content).map_err(|e| ModuleError::ConfigError {
            message: format!("request document parsing error: {}", e),
        })?;
    encode_request(codec, &document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::codec::YamlCodec;
    use crate::domain::model::Layer;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_document_to_wire() {
        let wire = parse_wire_request(
            r#"
project: demo
stack: dev
app: web
devConfig:
  image: nginx
"#,
            &YamlCodec,
        )
        .unwrap();

        assert_eq!(wire.project, "demo");
        assert_eq!(wire.layer(Layer::DevConfig), Some(b"image: nginx\n".as_slice()));
        assert_eq!(wire.layer(Layer::Workload), None);
        assert_eq!(wire.layer(Layer::SecretStore), None);
    }

    #[test]
    fn test_document_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"project: p\nstack: s\napp: a\nworkload:\n  replicas: 2\n")
            .unwrap();

        let wire = load_wire_request(temp_file.path(), &YamlCodec).unwrap();
        assert_eq!(wire.layer(Layer::Workload), Some(b"replicas: 2\n".as_slice()));
    }

    #[test]
    fn test_document_requires_identifiers() {
        let err = parse_wire_request("project: p\n", &YamlCodec).unwrap_err();
        assert!(matches!(err, ModuleError::ConfigError { .. }));
    }
}
