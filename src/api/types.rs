//! Wire types for the catalog API
//!
//! These mirror the JSON bodies returned by the `/api/v1` endpoints. Every
//! field is defaulted, whether the column is missing or `null`, so one sparse
//! row never fails a whole page.

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

/// Owner of a catalog entry
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    #[serde_as(as = "DefaultOnNull")]
    pub username: String,
    #[serde_as(as = "DefaultOnNull")]
    pub nickname: String,
    #[serde_as(as = "DefaultOnNull")]
    pub email: String,
}

/// Git remotes for a catalog entry
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    #[serde_as(as = "DefaultOnNull")]
    pub http_clone_url: String,
    #[serde_as(as = "DefaultOnNull")]
    pub ssh_clone_url: String,
}

/// Namespace a model lives under
///
/// The server sends these keys capitalised.
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Namespace {
    #[serde(rename = "Path")]
    #[serde_as(as = "DefaultOnNull")]
    pub path: String,
    #[serde(rename = "Type")]
    #[serde_as(as = "DefaultOnNull")]
    pub kind: String,
    #[serde(rename = "Avatar")]
    #[serde_as(as = "DefaultOnNull")]
    pub avatar: String,
}

/// A model row as returned by the list endpoint
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Model {
    #[serde_as(as = "DefaultOnNull")]
    pub id: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub nickname: String,
    #[serde_as(as = "DefaultOnNull")]
    pub description: String,
    #[serde_as(as = "DefaultOnNull")]
    pub likes: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub downloads: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub path: String,
    #[serde_as(as = "DefaultOnNull")]
    pub repository_id: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub private: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub user: User,
    #[serde_as(as = "DefaultOnNull")]
    pub repository: Repository,
    #[serde_as(as = "DefaultOnNull")]
    pub default_branch: String,
    #[serde_as(as = "DefaultOnNull")]
    pub created_at: String,
    #[serde_as(as = "DefaultOnNull")]
    pub updated_at: String,
    #[serde_as(as = "DefaultOnNull")]
    pub widget_type: String,
    #[serde_as(as = "DefaultOnNull")]
    pub status: String,
    #[serde_as(as = "DefaultOnNull")]
    pub user_likes: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub source: String,
    #[serde_as(as = "DefaultOnNull")]
    pub sync_status: String,
    #[serde_as(as = "DefaultOnNull")]
    pub enable_inference: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub enable_finetune: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub enable_evaluation: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub base_model: String,
    #[serde_as(as = "DefaultOnNull")]
    pub license: String,
    #[serde_as(as = "DefaultOnNull")]
    pub namespace: Namespace,
}

/// A dataset row as returned by the list endpoint
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dataset {
    #[serde_as(as = "DefaultOnNull")]
    pub id: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub nickname: String,
    #[serde_as(as = "DefaultOnNull")]
    pub description: String,
    #[serde_as(as = "DefaultOnNull")]
    pub likes: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub downloads: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub path: String,
    #[serde_as(as = "DefaultOnNull")]
    pub repository_id: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub repository: Repository,
    #[serde_as(as = "DefaultOnNull")]
    pub private: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub user: User,
    #[serde_as(as = "DefaultOnNull")]
    pub source: String,
    #[serde_as(as = "DefaultOnNull")]
    pub sync_status: String,
    #[serde_as(as = "DefaultOnNull")]
    pub created_at: String,
    #[serde_as(as = "DefaultOnNull")]
    pub updated_at: String,
    #[serde_as(as = "DefaultOnNull")]
    pub hf_path: String,
    #[serde_as(as = "DefaultOnNull")]
    pub ms_path: String,
    #[serde_as(as = "DefaultOnNull")]
    pub csg_path: String,
}

/// Hardware and architecture hints attached to a model detail
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelMetadata {
    #[serde_as(as = "DefaultOnNull")]
    pub model_params: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub tensor_type: String,
    #[serde_as(as = "DefaultOnNull")]
    pub architecture: String,
    #[serde_as(as = "DefaultOnNull")]
    pub mini_gpu_memory_gb: f64,
    #[serde_as(as = "DefaultOnNull")]
    pub model_type: String,
    #[serde_as(as = "DefaultOnNull")]
    pub class_name: String,
}

/// Full model record from `/api/v1/models/{path}`
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelDetail {
    #[serde(flatten)]
    pub model: Model,
    #[serde_as(as = "DefaultOnNull")]
    pub readme: String,
    #[serde_as(as = "DefaultOnNull")]
    pub can_write: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub can_manage: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub sensitive_check_status: String,
    #[serde_as(as = "DefaultOnNull")]
    pub mirror_last_updated_at: String,
    #[serde_as(as = "DefaultOnNull")]
    pub metadata: ModelMetadata,
    #[serde_as(as = "DefaultOnNull")]
    pub report_url: String,
    #[serde_as(as = "DefaultOnNull")]
    pub medium_risk_count: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub high_risk_count: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub hf_path: String,
    #[serde_as(as = "DefaultOnNull")]
    pub ms_path: String,
    #[serde_as(as = "DefaultOnNull")]
    pub csg_path: String,
}

/// Last commit touching a file in a model repository
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCommit {
    #[serde_as(as = "DefaultOnNull")]
    pub id: String,
    #[serde_as(as = "DefaultOnNull")]
    pub message: String,
    #[serde_as(as = "DefaultOnNull")]
    pub author_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub committer_date: String,
}

/// One entry of a model repository tree
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileInfo {
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde(rename = "type")]
    #[serde_as(as = "DefaultOnNull")]
    pub kind: String,
    #[serde_as(as = "DefaultOnNull")]
    pub size: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub commit: FileCommit,
    #[serde_as(as = "DefaultOnNull")]
    pub path: String,
    #[serde_as(as = "DefaultOnNull")]
    pub sha: String,
    #[serde_as(as = "DefaultOnNull")]
    pub lfs: bool,
}

impl FileInfo {
    /// Whether this entry is a directory
    #[must_use]
    pub fn is_dir(&self) -> bool {
        self.kind == "dir"
    }
}

/// Catalog tag
#[serde_as]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tag {
    #[serde_as(as = "DefaultOnNull")]
    pub id: u64,
    #[serde_as(as = "DefaultOnNull")]
    pub name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub category: String,
    #[serde_as(as = "DefaultOnNull")]
    pub group: String,
    #[serde_as(as = "DefaultOnNull")]
    pub scope: String,
    #[serde_as(as = "DefaultOnNull")]
    pub built_in: bool,
    #[serde_as(as = "DefaultOnNull")]
    pub show_name: String,
    #[serde_as(as = "DefaultOnNull")]
    pub created_at: String,
    #[serde_as(as = "DefaultOnNull")]
    pub updated_at: String,
}

impl Tag {
    /// Name shown to the user, falling back to the raw name
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.show_name.is_empty() {
            &self.name
        } else {
            &self.show_name
        }
    }
}

/// `{ data, total }` envelope used by the list endpoints
#[serde_as]
#[derive(Debug, Clone, Deserialize)]
pub struct PageEnvelope<T> {
    pub data: Vec<T>,
    #[serde(default)]
    #[serde_as(as = "DefaultOnNull")]
    pub total: u64,
}

/// `{ data }` envelope used by every other endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct DataEnvelope<T> {
    pub data: T,
}
