use crate::domain::model::{Layer, SecretStore};
use crate::domain::ports::DocumentCodec;
use crate::utils::error::{CodecError, ModuleError, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_yaml::Mapping;

/// YAML on both sides of the boundary, so logged payloads stay readable.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlCodec;

impl DocumentCodec for YamlCodec {
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> std::result::Result<T, CodecError> {
        Ok(serde_yaml::from_slice(bytes)?)
    }

    fn encode<T: Serialize>(&self, value: &T) -> std::result::Result<Vec<u8>, CodecError> {
        Ok(serde_yaml::to_string(value)?.into_bytes())
    }
}

/// A typed configuration layer with a well-defined zero value.
pub trait LayerValue: Serialize + DeserializeOwned + Default {
    fn is_zero(&self) -> bool;
}

impl LayerValue for Mapping {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl LayerValue for SecretStore {
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

/// Decodes one configuration layer.
///
/// Absent bytes and a document that is only `null` both give the zero value;
/// anything that fails to decode is reported against `layer`.
pub fn decode_layer<C, T>(codec: &C, layer: Layer, bytes: Option<&[u8]>) -> Result<T>
where
    C: DocumentCodec,
    T: LayerValue,
{
    let Some(bytes) = bytes else {
        return Ok(T::default());
    };

    let decoded: Option<T> = codec
        .decode(bytes)
        .map_err(|source| ModuleError::LayerDecodeError { layer, source })?;
    Ok(decoded.unwrap_or_default())
}

/// Host-side counterpart of [`decode_layer`]: an empty value stays absent.
pub fn encode_layer<C, T>(codec: &C, layer: Layer, value: &T) -> Result<Option<Vec<u8>>>
where
    C: DocumentCodec,
    T: LayerValue,
{
    if value.is_zero() {
        return Ok(None);
    }
    codec
        .encode(value)
        .map(Some)
        .map_err(|source| ModuleError::LayerEncodeError { layer, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{Accessory, SecretStore};

    #[test]
    fn test_absent_layer_is_zero_value() {
        let workload: Accessory = decode_layer(&YamlCodec, Layer::Workload, None).unwrap();
        assert!(workload.is_empty());

        let store: SecretStore = decode_layer(&YamlCodec, Layer::SecretStore, None).unwrap();
        assert_eq!(store, SecretStore::default());
    }

    #[test]
    fn test_null_document_is_zero_value() {
        let context: Accessory =
            decode_layer(&YamlCodec, Layer::Context, Some(b"~\n".as_slice())).unwrap();
        assert!(context.is_empty());
    }

    #[test]
    fn test_decode_mapping_keeps_order() {
        let bytes = b"zone: b\nregion: us-east-1\nendpoint: https://k8s.local\n";
        let config: Accessory =
            decode_layer(&YamlCodec, Layer::PlatformConfig, Some(bytes.as_slice())).unwrap();

        let keys: Vec<&str> = config.keys().filter_map(|k| k.as_str()).collect();
        assert_eq!(keys, vec!["zone", "region", "endpoint"]);
    }

    #[test]
    fn test_invalid_yaml_names_layer() {
        let err = decode_layer::<_, Accessory>(
            &YamlCodec,
            Layer::DevConfig,
            Some(b"image: [unclosed".as_slice()),
        )
        .unwrap_err();

        assert_eq!(err.layer(), Some(Layer::DevConfig));
        assert!(err.to_string().starts_with("unmarshal devConfig failed"));
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let err = decode_layer::<_, Accessory>(
            &YamlCodec,
            Layer::Workload,
            Some(b"- web\n- worker\n".as_slice()),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            ModuleError::LayerDecodeError {
                layer: Layer::Workload,
                ..
            }
        ));
    }

    #[test]
    fn test_encode_layer_skips_empty_values() {
        let empty = Accessory::new();
        assert!(encode_layer(&YamlCodec, Layer::Workload, &empty)
            .unwrap()
            .is_none());

        let mut workload = Accessory::new();
        workload.insert("replicas".into(), 3.into());
        let bytes = encode_layer(&YamlCodec, Layer::Workload, &workload)
            .unwrap()
            .unwrap();
        assert_eq!(String::from_utf8(bytes).unwrap(), "replicas: 3\n");
    }
}
