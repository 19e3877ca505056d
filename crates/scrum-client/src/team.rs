//! Project team roster.

use std::sync::Arc;

use scrum_backend::ProjectBackend;
use scrum_core::ScrumResult;
use scrum_domain::{Collaborator, CollaboratorRole, ProjectId};

pub struct TeamRoster {
    collaborators: Vec<Collaborator>,
}

impl TeamRoster {
    pub async fn load(
        backend: Arc<dyn ProjectBackend>,
        project_id: ProjectId,
    ) -> ScrumResult<Self> {
        let collaborators = backend.list_collaborators(project_id).await?;
        Ok(Self { collaborators })
    }

    pub fn collaborators(&self) -> &[Collaborator] {
        &self.collaborators
    }

    pub fn len(&self) -> usize {
        self.collaborators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collaborators.is_empty()
    }

    pub fn with_role(&self, role: CollaboratorRole) -> Vec<&Collaborator> {
        self.collaborators
            .iter()
            .filter(|c| c.role == role)
            .collect()
    }
}
