use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;
use uuid::Uuid;

fn scrum() -> Command {
    Command::cargo_bin("scrum").unwrap()
}

fn parse_json_output(output: &str) -> Value {
    serde_json::from_str(output).expect("Failed to parse JSON output")
}

fn extract_id(json: &Value) -> String {
    json["data"]["id"].as_str().unwrap().to_string()
}

fn run(file: &str, args: &[&str]) -> Value {
    let output = scrum()
        .arg(file)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    parse_json_output(&String::from_utf8_lossy(&output))
}

mod task_tests {
    use super::*;

    #[test]
    fn test_created_task_lands_in_backlog() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("scrum.json");
        let file = file.to_str().unwrap();
        let project_id = Uuid::new_v4().to_string();

        let created = run(
            file,
            &[
                "task",
                "create",
                "--project-id",
                &project_id,
                "--title",
                "Fix login bug",
                "--description",
                "Session cookie expires early",
                "--priority",
                "high",
            ],
        );
        assert!(created["success"].as_bool().unwrap());
        assert_eq!(created["data"]["status"], "backlog");
        assert_eq!(created["data"]["priority"], "high");
        assert!(created["data"]["sprint_id"].is_null());

        let listed = run(file, &["backlog", "list", "--project-id", &project_id]);
        assert_eq!(listed["data"]["count"], 1);
        assert_eq!(listed["data"]["items"][0]["title"], "Fix login bug");
    }

    #[test]
    fn test_empty_title_is_rejected() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("scrum.json");

        scrum()
            .arg(file.to_str().unwrap())
            .args([
                "task",
                "create",
                "--project-id",
                &Uuid::new_v4().to_string(),
                "--title",
                "   ",
                "--description",
                "desc",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Title cannot be empty"));

        assert!(!file.exists());
    }

    #[test]
    fn test_update_moves_task_between_columns() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("scrum.json");
        let file = file.to_str().unwrap();
        let project_id = Uuid::new_v4().to_string();

        let created = run(
            file,
            &[
                "task",
                "create",
                "--project-id",
                &project_id,
                "--title",
                "Fix login bug",
                "--description",
                "Session cookie expires early",
            ],
        );
        let task_id = extract_id(&created);

        let updated = run(
            file,
            &["task", "update", "--id", &task_id, "--status", "in-progress"],
        );
        assert_eq!(updated["data"]["status"], "in-progress");
    }

    #[test]
    fn test_delete_removes_task() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("scrum.json");
        let file = file.to_str().unwrap();
        let project_id = Uuid::new_v4().to_string();

        let created = run(
            file,
            &[
                "task",
                "create",
                "--project-id",
                &project_id,
                "--title",
                "Obsolete item",
                "--description",
                "No longer needed",
            ],
        );
        let task_id = extract_id(&created);

        run(
            file,
            &[
                "task", "delete", "--project-id", &project_id, "--id", &task_id,
            ],
        );

        let listed = run(file, &["backlog", "list", "--project-id", &project_id]);
        assert_eq!(listed["data"]["count"], 0);
    }

    #[test]
    fn test_assign_sprint_forces_todo_and_leaves_backlog() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("scrum.json");
        let file = file.to_str().unwrap();
        let project_id = Uuid::new_v4().to_string();

        let created = run(
            file,
            &[
                "task",
                "create",
                "--project-id",
                &project_id,
                "--title",
                "Fix login bug",
                "--description",
                "Session cookie expires early",
            ],
        );
        let task_id = extract_id(&created);

        let sprint = run(
            file,
            &[
                "sprint",
                "create",
                "--project-id",
                &project_id,
                "--title",
                "Sprint 1",
            ],
        );
        let sprint_id = extract_id(&sprint);

        let moved = run(
            file,
            &[
                "task",
                "assign-sprint",
                "--project-id",
                &project_id,
                "--id",
                &task_id,
                "--sprint-id",
                &sprint_id,
            ],
        );
        assert!(moved["success"].as_bool().unwrap());

        let listed = run(file, &["backlog", "list", "--project-id", &project_id]);
        assert_eq!(listed["data"]["count"], 0);

        let updated = run(
            file,
            &["task", "update", "--id", &task_id, "--priority", "low"],
        );
        assert_eq!(updated["data"]["status"], "todo");
        assert_eq!(updated["data"]["sprint_id"], sprint_id.as_str());
    }
}

mod backlog_tests {
    use super::*;

    fn seed(file: &str, project_id: &str) {
        for (title, description, priority) in [
            ("Fix login bug", "Session cookie expires early", "high"),
            ("Write onboarding docs", "Getting started guide", "low"),
        ] {
            run(
                file,
                &[
                    "task",
                    "create",
                    "--project-id",
                    project_id,
                    "--title",
                    title,
                    "--description",
                    description,
                    "--priority",
                    priority,
                ],
            );
        }
    }

    #[test]
    fn test_query_and_priority_refine_together() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("scrum.json");
        let file = file.to_str().unwrap();
        let project_id = Uuid::new_v4().to_string();
        seed(file, &project_id);

        let listed = run(
            file,
            &[
                "backlog",
                "list",
                "--project-id",
                &project_id,
                "--query",
                "LOGIN",
                "--priority",
                "high",
            ],
        );
        assert_eq!(listed["data"]["count"], 1);
        assert_eq!(listed["data"]["items"][0]["title"], "Fix login bug");

        let nothing = run(
            file,
            &[
                "backlog",
                "list",
                "--project-id",
                &project_id,
                "--query",
                "login",
                "--priority",
                "low",
            ],
        );
        assert_eq!(nothing["data"]["count"], 0);
    }

    #[test]
    fn test_all_priority_filter_keeps_everything() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("scrum.json");
        let file = file.to_str().unwrap();
        let project_id = Uuid::new_v4().to_string();
        seed(file, &project_id);

        let listed = run(
            file,
            &[
                "backlog",
                "list",
                "--project-id",
                &project_id,
                "--priority",
                "all",
            ],
        );
        assert_eq!(listed["data"]["count"], 2);
    }

    #[test]
    fn test_invalid_priority_filter_fails() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("scrum.json");

        scrum()
            .arg(file.to_str().unwrap())
            .args([
                "backlog",
                "list",
                "--project-id",
                &Uuid::new_v4().to_string(),
                "--priority",
                "urgent",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid priority filter"));
    }
}

mod sprint_tests {
    use super::*;

    #[test]
    fn test_completed_sprints_hidden_without_all() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("scrum.json");
        let file = file.to_str().unwrap();
        let project_id = Uuid::new_v4().to_string();

        let s1 = run(
            file,
            &[
                "sprint",
                "create",
                "--project-id",
                &project_id,
                "--title",
                "Sprint 1",
            ],
        );
        run(
            file,
            &[
                "sprint",
                "create",
                "--project-id",
                &project_id,
                "--title",
                "Sprint 2",
            ],
        );
        run(file, &["sprint", "complete", "--id", &extract_id(&s1)]);

        let open = run(file, &["sprint", "list", "--project-id", &project_id]);
        assert_eq!(open["data"]["count"], 1);
        assert_eq!(open["data"]["items"][0]["title"], "Sprint 2");

        let all = run(
            file,
            &["sprint", "list", "--project-id", &project_id, "--all"],
        );
        assert_eq!(all["data"]["count"], 2);
    }

    #[test]
    fn test_end_date_must_follow_start() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("scrum.json");

        scrum()
            .arg(file.to_str().unwrap())
            .args([
                "sprint",
                "create",
                "--project-id",
                &Uuid::new_v4().to_string(),
                "--title",
                "Backwards",
                "--start-date",
                "2026-02-01",
                "--end-date",
                "2026-01-01",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("End date must be after start date"));
    }
}

mod profile_tests {
    use super::*;

    #[test]
    fn test_duplicate_username_is_a_conflict() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("scrum.json");
        let file = file.to_str().unwrap();

        run(
            file,
            &[
                "profile",
                "upsert",
                "--username",
                "alice",
                "--email",
                "alice@example.com",
            ],
        );

        scrum()
            .arg(file)
            .args([
                "profile",
                "upsert",
                "--username",
                "alice",
                "--email",
                "other@example.com",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("already taken"));
    }

    #[test]
    fn test_upsert_with_id_renames() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("scrum.json");
        let file = file.to_str().unwrap();

        let created = run(
            file,
            &[
                "profile",
                "upsert",
                "--username",
                "alice",
                "--email",
                "alice@example.com",
            ],
        );
        let id = extract_id(&created);

        let renamed = run(
            file,
            &[
                "profile",
                "upsert",
                "--id",
                &id,
                "--username",
                "alice2",
                "--email",
                "alice@example.com",
            ],
        );
        assert_eq!(renamed["data"]["username"], "alice2");
        assert_eq!(renamed["data"]["id"], id.as_str());
    }
}

mod chat_tests {
    use super::*;

    #[test]
    fn test_history_comes_back_oldest_first() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("scrum.json");
        let file = file.to_str().unwrap();
        let project_id = Uuid::new_v4().to_string();

        for text in ["standup in 5", "on my way"] {
            run(
                file,
                &[
                    "chat",
                    "send",
                    "--project-id",
                    &project_id,
                    "--username",
                    "alice",
                    "--message",
                    text,
                ],
            );
        }

        let listed = run(file, &["chat", "list", "--project-id", &project_id]);
        assert_eq!(listed["data"]["count"], 2);
        assert_eq!(listed["data"]["items"][0]["message"], "standup in 5");
        assert_eq!(listed["data"]["items"][1]["message"], "on my way");
    }

    #[test]
    fn test_blank_message_is_rejected() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("scrum.json");

        scrum()
            .arg(file.to_str().unwrap())
            .args([
                "chat",
                "send",
                "--project-id",
                &Uuid::new_v4().to_string(),
                "--username",
                "alice",
                "--message",
                "   ",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Message cannot be empty"));
    }
}

mod team_tests {
    use super::*;

    #[test]
    fn test_add_then_list() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("scrum.json");
        let file = file.to_str().unwrap();
        let project_id = Uuid::new_v4().to_string();

        let added = run(
            file,
            &[
                "team",
                "add",
                "--project-id",
                &project_id,
                "--username",
                "alice",
                "--role",
                "scrum_master",
            ],
        );
        assert_eq!(added["data"]["role"], "scrum_master");

        let listed = run(file, &["team", "list", "--project-id", &project_id]);
        assert_eq!(listed["data"]["count"], 1);
        assert_eq!(listed["data"]["items"][0]["username"], "alice");
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("scrum.json");

        scrum()
            .arg(file.to_str().unwrap())
            .args([
                "team",
                "add",
                "--project-id",
                &Uuid::new_v4().to_string(),
                "--username",
                "alice",
                "--role",
                "manager",
            ])
            .assert()
            .failure()
            .stderr(predicate::str::contains("Invalid role"));
    }
}

mod project_tests {
    use super::*;

    #[test]
    fn test_create_then_get() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("scrum.json");
        let file = file.to_str().unwrap();

        let created = run(file, &["project", "create", "--name", "Website Redesign"]);
        let id = extract_id(&created);

        let fetched = run(file, &["project", "get", "--id", &id]);
        assert_eq!(fetched["data"]["name"], "Website Redesign");
    }

    #[test]
    fn test_get_missing_project_fails() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("scrum.json");

        scrum()
            .arg(file.to_str().unwrap())
            .args(["project", "get", "--id", &Uuid::new_v4().to_string()])
            .assert()
            .failure()
            .stderr(predicate::str::contains("not found"));
    }
}
