use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::project::ProjectId;

pub type SprintId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SprintStatus {
    Planned,
    Active,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sprint {
    pub id: SprintId,
    pub project_id: ProjectId,
    pub title: String,
    pub status: SprintStatus,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Aggregate completion percentage, 0-100.
    pub progress: u8,
    pub total_tasks: u32,
    pub completed_tasks: u32,
    pub team_members: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Sprint {
    pub fn new(
        project_id: ProjectId,
        title: String,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            project_id,
            title,
            status: SprintStatus::Planned,
            start_date,
            end_date,
            progress: 0,
            total_tasks: 0,
            completed_tasks: 0,
            team_members: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn activate(&mut self) {
        self.status = SprintStatus::Active;
        self.updated_at = Utc::now();
    }

    pub fn complete(&mut self) {
        self.status = SprintStatus::Completed;
        self.updated_at = Utc::now();
    }

    /// Completed sprints are read-only and never offered as move targets.
    pub fn is_assignable(&self) -> bool {
        self.status != SprintStatus::Completed
    }

    pub fn record_task_counts(&mut self, completed: u32, total: u32) {
        self.completed_tasks = completed;
        self.total_tasks = total;
        self.progress = if total == 0 {
            0
        } else {
            ((completed as u64 * 100) / total as u64) as u8
        };
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprint() -> Sprint {
        let now = Utc::now();
        Sprint::new(
            Uuid::new_v4(),
            "Sprint 24: User Dashboard".to_string(),
            now,
            now + chrono::Duration::days(14),
        )
    }

    #[test]
    fn test_lifecycle() {
        let mut s = sprint();
        assert_eq!(s.status, SprintStatus::Planned);
        assert!(s.is_assignable());

        s.activate();
        assert_eq!(s.status, SprintStatus::Active);
        assert!(s.is_assignable());

        s.complete();
        assert_eq!(s.status, SprintStatus::Completed);
        assert!(!s.is_assignable());
    }

    #[test]
    fn test_progress_percentage() {
        let mut s = sprint();
        s.record_task_counts(0, 0);
        assert_eq!(s.progress, 0);

        s.record_task_counts(8, 12);
        assert_eq!(s.progress, 66);
        assert_eq!(s.total_tasks, 12);
        assert_eq!(s.completed_tasks, 8);

        s.record_task_counts(10, 10);
        assert_eq!(s.progress, 100);
    }
}
