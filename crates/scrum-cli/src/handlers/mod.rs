pub mod backlog;
pub mod chat;
pub mod profile;
pub mod project;
pub mod sprint;
pub mod task;
pub mod team;

use chrono::{DateTime, Utc};
use scrum_domain::{CollaboratorRole, TaskPriority};

pub(crate) fn parse_datetime(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| {
            chrono::NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .map_err(|_| ())
                .and_then(|d| d.and_hms_opt(0, 0, 0).ok_or(()))
                .map(|dt| dt.and_utc())
        })
        .map_err(|_| {
            format!(
                "Invalid date '{}'. Supported formats: YYYY-MM-DD or RFC 3339 (e.g., 2024-01-15T10:30:00Z)",
                s
            )
        })
}

pub(crate) fn parse_priority(s: &str) -> Result<TaskPriority, String> {
    match s {
        "low" => Ok(TaskPriority::Low),
        "medium" => Ok(TaskPriority::Medium),
        "high" => Ok(TaskPriority::High),
        _ => Err(format!(
            "Invalid priority '{}'. Expected one of: low, medium, high",
            s
        )),
    }
}

pub(crate) fn parse_role(s: &str) -> Result<CollaboratorRole, String> {
    match s {
        "scrum_master" => Ok(CollaboratorRole::ScrumMaster),
        "product_owner" => Ok(CollaboratorRole::ProductOwner),
        "team_member" => Ok(CollaboratorRole::TeamMember),
        _ => Err(format!(
            "Invalid role '{}'. Expected one of: scrum_master, product_owner, team_member",
            s
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_datetime_formats() {
        assert!(parse_datetime("2024-01-15").is_ok());
        assert!(parse_datetime("2024-01-15T10:30:00Z").is_ok());
        assert!(parse_datetime("next tuesday").is_err());
    }

    #[test]
    fn test_parse_priority() {
        assert_eq!(parse_priority("high"), Ok(TaskPriority::High));
        assert!(parse_priority("urgent").is_err());
    }

    #[test]
    fn test_parse_role() {
        assert_eq!(parse_role("scrum_master"), Ok(CollaboratorRole::ScrumMaster));
        assert!(parse_role("manager").is_err());
    }
}
