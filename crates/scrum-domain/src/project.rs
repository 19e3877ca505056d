use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ProjectId = Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: Option<String>,
    pub owner_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn new(name: String, owner_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description: None,
            owner_id,
            created_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollaboratorRole {
    ScrumMaster,
    ProductOwner,
    TeamMember,
}

/// A project member other than the owner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collaborator {
    pub id: Uuid,
    pub project_id: ProjectId,
    pub user_id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub role: CollaboratorRole,
    pub created_at: DateTime<Utc>,
}

impl Collaborator {
    pub fn new(
        project_id: ProjectId,
        user_id: Uuid,
        username: String,
        role: CollaboratorRole,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            project_id,
            user_id,
            username,
            email: None,
            role,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_format() {
        let json = serde_json::to_string(&CollaboratorRole::ScrumMaster).unwrap();
        assert_eq!(json, "\"scrum_master\"");
        let back: CollaboratorRole = serde_json::from_str("\"team_member\"").unwrap();
        assert_eq!(back, CollaboratorRole::TeamMember);
    }
}
