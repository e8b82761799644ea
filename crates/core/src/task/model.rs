//! Task model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ObjectId;

/// Accessibility standard a task is checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Standard {
    Section508,
    WCAG2A,
    WCAG2AA,
    WCAG2AAA,
}

impl Default for Standard {
    fn default() -> Self {
        Self::WCAG2AA
    }
}

/// A configured accessibility-check job
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: ObjectId,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub standard: Standard,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task for the given page
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: ObjectId::generate(),
            name: name.into(),
            url: url.into(),
            standard: Standard::default(),
            created_at: Utc::now(),
        }
    }

    /// Set the id
    pub fn with_id(mut self, id: ObjectId) -> Self {
        self.id = id;
        self
    }

    /// Set the standard
    pub fn with_standard(mut self, standard: Standard) -> Self {
        self.standard = standard;
        self
    }
}
