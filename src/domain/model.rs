use serde::{Deserialize, Serialize};
use serde_yaml::Mapping;
use std::collections::BTreeMap;
use std::fmt;

/// Free-form structured value attached to an application, e.g. its workload or
/// a developer's module inputs.
pub type Accessory = Mapping;

/// Key/value configuration supplied by the platform or the workspace.
pub type GenericConfig = Mapping;

/// The five independently encoded configuration sections of a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Workload,
    DevConfig,
    PlatformConfig,
    Context,
    SecretStore,
}

impl Layer {
    /// 解碼順序固定，第一個失敗的層即為回報的層
    pub const ALL: [Layer; 5] = [
        Layer::Workload,
        Layer::DevConfig,
        Layer::PlatformConfig,
        Layer::Context,
        Layer::SecretStore,
    ];

    /// Field name used on the wire and in encoded requests.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Layer::Workload => "workload",
            Layer::DevConfig => "devConfig",
            Layer::PlatformConfig => "platformConfig",
            Layer::Context => "context",
            Layer::SecretStore => "secretStore",
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// Describes an external secret backend. Only one provider is expected to be set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SecretStore {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderSpec>,
}

impl SecretStore {
    pub fn is_empty(&self) -> bool {
        self.provider.is_none()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProviderSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aws: Option<Mapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault: Option<Mapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azure: Option<Mapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alicloud: Option<Mapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viettelcloud: Option<Mapping>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fake: Option<Mapping>,
}

impl ProviderSpec {
    /// 回傳第一個有設定的供應商名稱
    pub fn kind(&self) -> Option<&'static str> {
        [
            ("aws", self.aws.is_some()),
            ("vault", self.vault.is_some()),
            ("azure", self.azure.is_some()),
            ("alicloud", self.alicloud.is_some()),
            ("viettelcloud", self.viettelcloud.is_some()),
            ("fake", self.fake.is_some()),
        ]
        .into_iter()
        .find_map(|(name, set)| set.then_some(name))
    }
}

/// Typed view of a generation request, built from the wire form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratorRequest {
    /// Project name
    pub project: String,
    /// Stack name
    pub stack: String,
    /// Application name, usually also the namespace of generated Kubernetes resources
    pub app: String,
    #[serde(default, skip_serializing_if = "Mapping::is_empty")]
    pub workload: Accessory,
    /// Developer inputs for this module
    #[serde(default, skip_serializing_if = "Mapping::is_empty")]
    pub dev_config: Accessory,
    /// Platform engineer inputs for this module
    #[serde(default, skip_serializing_if = "Mapping::is_empty")]
    pub platform_config: GenericConfig,
    /// Workspace-level settings such as topologies, endpoints and metadata
    #[serde(default, skip_serializing_if = "Mapping::is_empty")]
    pub context: GenericConfig,
    #[serde(default, skip_serializing_if = "SecretStore::is_empty")]
    pub secret_store: SecretStore,
}

impl GeneratorRequest {
    pub fn new(
        project: impl Into<String>,
        stack: impl Into<String>,
        app: impl Into<String>,
    ) -> Self {
        Self {
            project: project.into(),
            stack: stack.into(),
            app: app.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResourceType {
    Kubernetes,
    Terraform,
}

/// One generated infrastructure resource.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ResourceType,
    #[serde(default)]
    pub attributes: Mapping,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub depends_on: Vec<String>,
    #[serde(default, skip_serializing_if = "Mapping::is_empty")]
    pub extensions: Mapping,
}

impl Resource {
    pub fn new(id: impl Into<String>, kind: ResourceType, attributes: Mapping) -> Self {
        Self {
            id: id.into(),
            kind,
            attributes,
            depends_on: Vec::new(),
            extensions: Mapping::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvVar {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Modifications the host applies to other modules' resources once every
/// module has run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patcher {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environments: Vec<EnvVar>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub pod_labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub pod_annotations: BTreeMap<String, String>,
    /// resource id -> patch document
    #[serde(default, skip_serializing_if = "Mapping::is_empty")]
    pub json_patchers: Mapping,
}

/// What a module produced. `None` from a module and an empty response both
/// reach the wire as the empty sentinel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneratorResponse {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub resources: Vec<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patcher: Option<Patcher>,
}

impl GeneratorResponse {
    pub fn new(resources: Vec<Resource>) -> Self {
        Self {
            resources,
            patcher: None,
        }
    }

    pub fn with_patcher(mut self, patcher: Patcher) -> Self {
        self.patcher = Some(patcher);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty() && self.patcher.is_none()
    }
}
