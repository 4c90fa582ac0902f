//! Row type shared by every catalog resource

use crate::api::{Dataset, Model};

/// One row of a catalog listing
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogItem {
    Model(Model),
    Dataset(Dataset),
}

impl CatalogItem {
    #[must_use]
    pub fn id(&self) -> u64 {
        match self {
            Self::Model(m) => m.id,
            Self::Dataset(d) => d.id,
        }
    }

    /// Title for display: nickname when set, else name
    #[must_use]
    pub fn title(&self) -> &str {
        let (nickname, name) = match self {
            Self::Model(m) => (&m.nickname, &m.name),
            Self::Dataset(d) => (&d.nickname, &d.name),
        };
        if nickname.is_empty() { name } else { nickname }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Model(m) => &m.path,
            Self::Dataset(d) => &d.path,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            Self::Model(m) => &m.description,
            Self::Dataset(d) => &d.description,
        }
    }

    #[must_use]
    pub fn likes(&self) -> u64 {
        match self {
            Self::Model(m) => m.likes,
            Self::Dataset(d) => d.likes,
        }
    }

    #[must_use]
    pub fn downloads(&self) -> u64 {
        match self {
            Self::Model(m) => m.downloads,
            Self::Dataset(d) => d.downloads,
        }
    }

    #[must_use]
    pub fn updated_at(&self) -> &str {
        match self {
            Self::Model(m) => &m.updated_at,
            Self::Dataset(d) => &d.updated_at,
        }
    }
}

impl From<Model> for CatalogItem {
    fn from(model: Model) -> Self {
        Self::Model(model)
    }
}

impl From<Dataset> for CatalogItem {
    fn from(dataset: Dataset) -> Self {
        Self::Dataset(dataset)
    }
}
