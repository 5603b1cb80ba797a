use crate::domain::model::{GeneratorRequest, GeneratorResponse, Patcher, Resource, ResourceType};
use crate::domain::ports::FrameworkModule;
use async_trait::async_trait;
use serde_yaml::{Mapping, Value};
use tokio_util::sync::CancellationToken;

/// Reference module: renders the developer config as a ConfigMap and labels
/// the workload with the app name. Produces nothing when there is no developer
/// config.
#[derive(Debug, Clone, Default)]
pub struct EchoModule;

impl EchoModule {
    pub fn config_map(request: &GeneratorRequest) -> Resource {
        let name = format!("{}-config", request.app);

        let mut metadata = Mapping::new();
        metadata.insert("name".into(), Value::from(name.as_str()));
        metadata.insert("namespace".into(), Value::from(request.app.as_str()));

        // ConfigMap 的 data 只接受字串值
        let mut data = Mapping::new();
        for (key, value) in &request.dev_config {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => serde_yaml::to_string(other)
                    .map(|s| s.trim_end().to_string())
                    .unwrap_or_default(),
            };
            data.insert(key.clone(), Value::String(rendered));
        }

        let mut attributes = Mapping::new();
        attributes.insert("apiVersion".into(), "v1".into());
        attributes.insert("kind".into(), "ConfigMap".into());
        attributes.insert("metadata".into(), Value::Mapping(metadata));
        attributes.insert("data".into(), Value::Mapping(data));

        Resource::new(
            format!("v1:ConfigMap:{}:{}", request.app, name),
            ResourceType::Kubernetes,
            attributes,
        )
    }
}

#[async_trait]
impl FrameworkModule for EchoModule {
    async fn generate(
        &self,
        ctx: &CancellationToken,
        request: &GeneratorRequest,
    ) -> anyhow::Result<Option<GeneratorResponse>> {
        if ctx.is_cancelled() {
            anyhow::bail!("generation cancelled for app {}", request.app);
        }

        if request.dev_config.is_empty() {
            return Ok(None);
        }

        let mut response = GeneratorResponse::new(vec![Self::config_map(request)]);
        if !request.workload.is_empty() {
            let mut patcher = Patcher::default();
            patcher
                .labels
                .insert("app.kubernetes.io/name".to_string(), request.app.clone());
            response = response.with_patcher(patcher);
        }
        Ok(Some(response))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_dev_config_generates_nothing() {
        let request = GeneratorRequest::new("p", "s", "a");
        let output = EchoModule
            .generate(&CancellationToken::new(), &request)
            .await
            .unwrap();
        assert!(output.is_none());
    }

    #[tokio::test]
    async fn test_config_map_from_dev_config() {
        let mut request = GeneratorRequest::new("p", "s", "web");
        request.dev_config.insert("port".into(), 8080.into());
        request.dev_config.insert("image".into(), "nginx".into());

        let output = EchoModule
            .generate(&CancellationToken::new(), &request)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(output.resources.len(), 1);
        assert!(output.patcher.is_none());
        let resource = &output.resources[0];
        assert_eq!(resource.id, "v1:ConfigMap:web:web-config");
        let data = resource.attributes.get("data").unwrap();
        assert_eq!(data.get("port"), Some(&Value::from("8080")));
        assert_eq!(data.get("image"), Some(&Value::from("nginx")));
    }

    #[tokio::test]
    async fn test_cancelled_token_is_an_error() {
        let ctx = CancellationToken::new();
        ctx.cancel();

        let err = EchoModule
            .generate(&ctx, &GeneratorRequest::new("p", "s", "web"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("cancelled"));
    }
}
