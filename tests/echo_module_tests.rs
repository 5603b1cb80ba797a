#![cfg(feature = "cli")]

use module_framework::config::cli::parse_wire_request;
use module_framework::core::request::{assemble_request, encode_request};
use module_framework::core::response::decode_response;
use module_framework::{
    AdapterConfig, EchoModule, GeneratorRequest, ModuleAdapter, WireResponse, YamlCodec,
};
use serde_yaml::Value;
use std::io::Write;
use tempfile::NamedTempFile;
use tokio_util::sync::CancellationToken;

const REQUEST_DOCUMENT: &str = r#"
project: shop
stack: prod
app: checkout
workload:
  service:
    replicas: 3
    ports:
      - port: 8080
devConfig:
  LOG_LEVEL: debug
  WORKERS: 4
platformConfig:
  cpu: 500m
context:
  cluster: east
secretStore:
  provider:
    fake:
      data: []
"#;

#[tokio::test]
async fn test_document_through_adapter() {
    let wire = parse_wire_request(REQUEST_DOCUMENT, &YamlCodec).unwrap();
    let adapter = ModuleAdapter::new(EchoModule);

    let response = adapter
        .generate(&CancellationToken::new(), Some(&wire))
        .await
        .unwrap();
    let decoded = decode_response(&YamlCodec, &response).unwrap();

    assert_eq!(decoded.resources.len(), 1);
    let config_map = &decoded.resources[0];
    assert_eq!(config_map.id, "v1:ConfigMap:checkout:checkout-config");
    let data = config_map.attributes.get("data").unwrap();
    assert_eq!(data.get("WORKERS"), Some(&Value::from("4")));

    let patcher = decoded.patcher.unwrap();
    assert_eq!(
        patcher.labels.get("app.kubernetes.io/name").map(String::as_str),
        Some("checkout")
    );
}

#[tokio::test]
async fn test_no_dev_config_gives_empty_response() {
    let wire = parse_wire_request("project: shop\nstack: prod\napp: checkout\n", &YamlCodec).unwrap();
    let adapter = ModuleAdapter::new(EchoModule);

    let response = adapter
        .generate(&CancellationToken::new(), Some(&wire))
        .await
        .unwrap();

    assert_eq!(response, WireResponse::empty());
}

#[tokio::test]
async fn test_cancelled_call_surfaces_module_error() {
    let wire = parse_wire_request(REQUEST_DOCUMENT, &YamlCodec).unwrap();
    let adapter = ModuleAdapter::new(EchoModule);
    let ctx = CancellationToken::new();
    ctx.cancel();

    let err = adapter.generate(&ctx, Some(&wire)).await.unwrap_err();
    assert_eq!(err.to_string(), "generation cancelled for app checkout");
}

#[test]
fn test_document_round_trip() {
    let original: GeneratorRequest = serde_yaml::from_str(REQUEST_DOCUMENT).unwrap();

    let wire = encode_request(&YamlCodec, &original).unwrap();
    let assembled = assemble_request(&YamlCodec, &AdapterConfig::default(), Some(&wire)).unwrap();

    assert_eq!(assembled, original);
    assert_eq!(
        assembled.secret_store.provider.and_then(|p| p.kind()),
        Some("fake")
    );
}

#[tokio::test]
async fn test_config_file_drives_workload_policy() {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file
        .write_all(b"[request]\nworkload = \"required\"\n")
        .unwrap();
    let config = AdapterConfig::from_file(temp_file.path()).unwrap();

    let adapter = ModuleAdapter::new(EchoModule).with_config(config);
    let wire =
        parse_wire_request("project: p\nstack: s\napp: a\ndevConfig:\n  k: v\n", &YamlCodec).unwrap();

    let err = adapter
        .generate(&CancellationToken::new(), Some(&wire))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "workload is required but was not supplied");
}
