pub mod chat;
pub mod drag;
pub mod field_update;
pub mod filter;
pub mod profile;
pub mod project;
pub mod sprint;
pub mod task;

pub use chat::{ChatMessage, ChatMessageId};
pub use drag::{DragGesture, DragLocation, DropAction};
pub use field_update::FieldUpdate;
pub use filter::{BacklogRefinement, PriorityFilter, SearchFilter, TaskFilter};
pub use profile::UserProfile;
pub use project::{Collaborator, CollaboratorRole, Project, ProjectId};
pub use sprint::{Sprint, SprintId, SprintStatus};
pub use task::{Task, TaskDraft, TaskId, TaskPriority, TaskStatus, TaskUpdate};
