//! Result model definitions

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ObjectId;

/// Severity of a single issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    Error,
    Warning,
    Notice,
}

/// One accessibility issue found during a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    pub code: String,
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,
}

impl Issue {
    pub fn new(issue_type: IssueType, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            issue_type,
            message: message.into(),
            context: None,
            selector: None,
        }
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    pub fn with_selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = Some(selector.into());
        self
    }
}

/// A recorded outcome of running a task. Immutable once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResult {
    pub id: ObjectId,
    pub task_id: ObjectId,
    pub date: DateTime<Utc>,
    #[serde(rename = "results", default)]
    pub issues: Vec<Issue>,
}

impl TaskResult {
    /// Create a result for the given task run at `date`
    pub fn new(task_id: ObjectId, date: DateTime<Utc>, issues: Vec<Issue>) -> Self {
        Self {
            id: ObjectId::generate(),
            task_id,
            date,
            issues,
        }
    }

    /// Set the id
    pub fn with_id(mut self, id: ObjectId) -> Self {
        self.id = id;
        self
    }

    /// Compact view without the issue payload
    pub fn into_summary(self) -> ResultSummary {
        ResultSummary {
            id: self.id,
            task_id: self.task_id,
            date: self.date,
        }
    }

    /// Full view carrying every issue
    pub fn into_full(self) -> FullResult {
        FullResult {
            id: self.id,
            task_id: self.task_id,
            date: self.date,
            results: self.issues,
        }
    }
}

/// Compact result shape. Has no `results` field at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    pub id: ObjectId,
    pub task_id: ObjectId,
    pub date: DateTime<Utc>,
}

/// Full-detail result shape
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FullResult {
    pub id: ObjectId,
    pub task_id: ObjectId,
    pub date: DateTime<Utc>,
    pub results: Vec<Issue>,
}

/// A result as returned to callers, in either shape
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResultView {
    Summary(ResultSummary),
    Full(FullResult),
}

impl ResultView {
    pub fn id(&self) -> ObjectId {
        match self {
            Self::Summary(r) => r.id,
            Self::Full(r) => r.id,
        }
    }

    pub fn date(&self) -> DateTime<Utc> {
        match self {
            Self::Summary(r) => r.date,
            Self::Full(r) => r.date,
        }
    }

    /// Issue payload, present only in full-detail mode
    pub fn issues(&self) -> Option<&[Issue]> {
        match self {
            Self::Summary(_) => None,
            Self::Full(r) => Some(&r.results),
        }
    }
}
