pub mod backlog;
pub mod chat;
pub mod context;
pub mod notice;
pub mod settings;
pub mod team;

pub use backlog::BacklogView;
pub use chat::ChatRoom;
pub use context::{AppContext, Session};
pub use notice::{Notice, NoticeLevel, NoticeLog};
pub use settings::AccountSettings;
pub use team::TeamRoster;
