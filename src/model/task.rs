//! Fulfillment tasks, soft-linked to clients by id.

use serde::{Deserialize, Serialize};

/// Kanban status of a task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Todo,
    #[serde(rename = "In Progress")]
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "Todo",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Review => "Review",
            TaskStatus::Done => "Done",
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }
}

/// A fulfillment task
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,
    /// Soft reference to a client id - never validated, may dangle
    pub client_id: String,
    pub name: String,
    pub phase: String,
    pub current_stage: String,
    pub assigned_role: String,
    pub status: TaskStatus,
    pub deadline: String,
    pub priority: Priority,
    pub asset_links: Vec<String>,
    /// Soft pointer into the protocol vault, if the task follows an SOP
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sop_reference: Option<String>,
    pub notes: String,
    /// Set by the store at creation time (ISO-8601)
    pub created_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<String>,
}

/// Fields supplied to create a task - everything but the id and the
/// store-derived `created_at`.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub client_id: String,
    pub name: String,
    pub phase: String,
    pub current_stage: String,
    pub assigned_role: String,
    pub status: TaskStatus,
    pub deadline: String,
    pub priority: Priority,
    pub asset_links: Vec<String>,
    pub sop_reference: Option<String>,
    pub notes: String,
    pub completed_at: Option<String>,
}

impl TaskDraft {
    pub(crate) fn into_task(self, id: String, created_at: String) -> Task {
        Task {
            id,
            client_id: self.client_id,
            name: self.name,
            phase: self.phase,
            current_stage: self.current_stage,
            assigned_role: self.assigned_role,
            status: self.status,
            deadline: self.deadline,
            priority: self.priority,
            asset_links: self.asset_links,
            sop_reference: self.sop_reference,
            notes: self.notes,
            created_at,
            completed_at: self.completed_at,
        }
    }
}

/// Partial update for a task.
///
/// The two optional entity fields take a double `Option`: `Some(None)` clears
/// the field, `Some(Some(v))` sets it, `None` leaves it alone.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub client_id: Option<String>,
    pub name: Option<String>,
    pub phase: Option<String>,
    pub current_stage: Option<String>,
    pub assigned_role: Option<String>,
    pub status: Option<TaskStatus>,
    pub deadline: Option<String>,
    pub priority: Option<Priority>,
    pub asset_links: Option<Vec<String>>,
    pub sop_reference: Option<Option<String>>,
    pub notes: Option<String>,
    pub completed_at: Option<Option<String>>,
}

impl TaskPatch {
    /// Shallow-merge this patch over `task`
    pub fn apply(self, task: &mut Task) {
        if let Some(v) = self.client_id {
            task.client_id = v;
        }
        if let Some(v) = self.name {
            task.name = v;
        }
        if let Some(v) = self.phase {
            task.phase = v;
        }
        if let Some(v) = self.current_stage {
            task.current_stage = v;
        }
        if let Some(v) = self.assigned_role {
            task.assigned_role = v;
        }
        if let Some(v) = self.status {
            task.status = v;
        }
        if let Some(v) = self.deadline {
            task.deadline = v;
        }
        if let Some(v) = self.priority {
            task.priority = v;
        }
        if let Some(v) = self.asset_links {
            task.asset_links = v;
        }
        if let Some(v) = self.sop_reference {
            task.sop_reference = v;
        }
        if let Some(v) = self.notes {
            task.notes = v;
        }
        if let Some(v) = self.completed_at {
            task.completed_at = v;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Task {
        TaskDraft {
            client_id: "c1".into(),
            name: "Edit launch reel".into(),
            phase: "Production".into(),
            current_stage: "Rough cut".into(),
            assigned_role: "Editor".into(),
            status: TaskStatus::InProgress,
            deadline: "2026-09-05".into(),
            priority: Priority::High,
            asset_links: vec!["https://drive.example/raw".into()],
            sop_reference: None,
            notes: String::new(),
            completed_at: None,
        }
        .into_task("t1".into(), "2026-08-30T00:00:00.000Z".into())
    }

    #[test]
    fn test_status_serializes_with_space() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"status\":\"In Progress\""));
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back.status, TaskStatus::InProgress);
    }

    #[test]
    fn test_absent_optionals_omitted_from_json() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(!json.contains("completedAt"));
        assert!(!json.contains("sopReference"));
    }

    #[test]
    fn test_patch_sets_and_clears_completed_at() {
        let mut task = sample();

        TaskPatch {
            status: Some(TaskStatus::Done),
            completed_at: Some(Some("2026-09-01T10:00:00.000Z".into())),
            ..Default::default()
        }
        .apply(&mut task);
        assert_eq!(task.status, TaskStatus::Done);
        assert_eq!(task.completed_at.as_deref(), Some("2026-09-01T10:00:00.000Z"));

        TaskPatch {
            completed_at: Some(None),
            ..Default::default()
        }
        .apply(&mut task);
        assert_eq!(task.completed_at, None);
        // Status untouched by the second patch
        assert_eq!(task.status, TaskStatus::Done);
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::Critical > Priority::High);
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
    }
}
