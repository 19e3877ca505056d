use anyhow::Result;
use std::sync::Arc;

use scrum_backend::{JsonFileBackend, ProjectBackend};
use scrum_client::BacklogView;
use scrum_domain::PriorityFilter;

use crate::cli::BacklogAction;
use crate::output;

pub async fn handle_backlog_command(
    backend: Arc<JsonFileBackend>,
    action: BacklogAction,
) -> Result<()> {
    match action {
        BacklogAction::List {
            project_id,
            query,
            priority,
        } => {
            let backend = backend as Arc<dyn ProjectBackend>;
            let mut view = BacklogView::open(backend, project_id).await;
            if let Some(err) = view.notices.first_error() {
                output::output_error(&err.message);
            }

            if let Some(query) = query {
                view.set_query(query);
            }
            if let Some(priority) = priority {
                match PriorityFilter::parse(&priority) {
                    Some(filter) => view.set_priority_filter(filter),
                    None => output::output_error(&format!(
                        "Invalid priority filter '{}'. Expected one of: all, low, medium, high",
                        priority
                    )),
                }
            }

            output::output_list(view.visible_tasks());
        }
    }
    Ok(())
}
