use clap::{Args, Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "scrum")]
#[command(about = "A scrum project management client", long_about = None)]
#[command(version, arg_required_else_help = true)]
pub struct Cli {
    /// Path to the data file (or set SCRUM_FILE)
    #[arg(value_name = "FILE", env = "SCRUM_FILE")]
    pub file: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Project operations
    Project(ProjectCommand),
    /// Backlog queries
    Backlog(BacklogCommand),
    /// Task operations
    Task(TaskCommand),
    /// Sprint operations
    Sprint(SprintCommand),
    /// Team roster operations
    Team(TeamCommand),
    /// Project chat
    Chat(ChatCommand),
    /// User profiles
    Profile(ProfileCommand),
}

#[derive(Args)]
pub struct ProjectCommand {
    #[command(subcommand)]
    pub action: ProjectAction,
}

#[derive(Subcommand)]
pub enum ProjectAction {
    /// Create a new project
    Create {
        #[arg(long)]
        name: String,
        /// Owner's user id; a fresh id is generated when omitted
        #[arg(long)]
        owner_id: Option<Uuid>,
    },
    /// Get a specific project
    Get {
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Args)]
pub struct BacklogCommand {
    #[command(subcommand)]
    pub action: BacklogAction,
}

#[derive(Subcommand)]
pub enum BacklogAction {
    /// List unscheduled tasks, optionally refined by search and priority
    List {
        #[arg(long)]
        project_id: Uuid,
        /// Case-insensitive substring match on title or description
        #[arg(long)]
        query: Option<String>,
        /// One of: all, low, medium, high
        #[arg(long)]
        priority: Option<String>,
    },
}

#[derive(Args)]
pub struct TaskCommand {
    #[command(subcommand)]
    pub action: TaskAction,
}

#[derive(Subcommand)]
pub enum TaskAction {
    /// Create a backlog item
    Create(TaskCreateArgs),
    /// Update a task's fields
    Update(TaskUpdateArgs),
    /// Permanently delete a task
    Delete {
        #[arg(long)]
        project_id: Uuid,
        #[arg(long)]
        id: Uuid,
    },
    /// Move a backlog task into a sprint (status resets to todo)
    AssignSprint {
        #[arg(long)]
        project_id: Uuid,
        #[arg(long)]
        id: Uuid,
        #[arg(long)]
        sprint_id: Uuid,
    },
}

#[derive(Args)]
pub struct TaskCreateArgs {
    #[arg(long)]
    pub project_id: Uuid,
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: String,
    /// One of: low, medium, high
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub story_points: Option<u32>,
    /// YYYY-MM-DD or RFC 3339
    #[arg(long)]
    pub due_date: Option<String>,
}

#[derive(Args)]
pub struct TaskUpdateArgs {
    #[arg(long)]
    pub id: Uuid,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Column id: backlog, todo, in-progress, review or done
    #[arg(long)]
    pub status: Option<String>,
    /// One of: low, medium, high
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub story_points: Option<u32>,
    #[arg(long)]
    pub clear_story_points: bool,
}

#[derive(Args)]
pub struct SprintCommand {
    #[command(subcommand)]
    pub action: SprintAction,
}

#[derive(Subcommand)]
pub enum SprintAction {
    /// Create a sprint
    Create(SprintCreateArgs),
    /// List sprints; completed ones are hidden unless --all is given
    List {
        #[arg(long)]
        project_id: Uuid,
        #[arg(long)]
        all: bool,
    },
    /// Activate a planned sprint
    Activate {
        #[arg(long)]
        id: Uuid,
    },
    /// Complete a sprint, making it read-only
    Complete {
        #[arg(long)]
        id: Uuid,
    },
}

#[derive(Args)]
pub struct SprintCreateArgs {
    #[arg(long)]
    pub project_id: Uuid,
    #[arg(long)]
    pub title: String,
    /// YYYY-MM-DD or RFC 3339; defaults to now
    #[arg(long)]
    pub start_date: Option<String>,
    /// YYYY-MM-DD or RFC 3339; defaults to start + duration
    #[arg(long)]
    pub end_date: Option<String>,
    #[arg(long, default_value_t = 14)]
    pub duration_days: u32,
}

#[derive(Args)]
pub struct TeamCommand {
    #[command(subcommand)]
    pub action: TeamAction,
}

#[derive(Subcommand)]
pub enum TeamAction {
    /// Add a collaborator to a project
    Add {
        #[arg(long)]
        project_id: Uuid,
        #[arg(long)]
        username: String,
        /// One of: scrum_master, product_owner, team_member
        #[arg(long)]
        role: String,
        #[arg(long)]
        user_id: Option<Uuid>,
        #[arg(long)]
        email: Option<String>,
    },
    /// List a project's collaborators
    List {
        #[arg(long)]
        project_id: Uuid,
    },
}

#[derive(Args)]
pub struct ChatCommand {
    #[command(subcommand)]
    pub action: ChatAction,
}

#[derive(Subcommand)]
pub enum ChatAction {
    /// Send a message to the project chat
    Send {
        #[arg(long)]
        project_id: Uuid,
        #[arg(long)]
        username: String,
        #[arg(long)]
        message: String,
        #[arg(long)]
        user_id: Option<Uuid>,
    },
    /// List chat history, oldest first
    List {
        #[arg(long)]
        project_id: Uuid,
    },
}

#[derive(Args)]
pub struct ProfileCommand {
    #[command(subcommand)]
    pub action: ProfileAction,
}

#[derive(Subcommand)]
pub enum ProfileAction {
    /// Create or update a profile; duplicate usernames are rejected
    Upsert {
        /// Existing profile id; omit to create a new profile
        #[arg(long)]
        id: Option<Uuid>,
        #[arg(long)]
        username: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        avatar_url: Option<String>,
    },
}
