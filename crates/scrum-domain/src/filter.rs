//! Backlog filtering.
//!
//! Provides the TaskFilter trait and the two client-side refinements the
//! backlog view applies to fetched tasks: free-text search and priority.

use crate::task::{Task, TaskPriority};

/// Trait for filtering tasks by various criteria.
pub trait TaskFilter {
    /// Returns true if the task matches the filter criteria.
    fn matches(&self, task: &Task) -> bool;
}

/// Case-insensitive substring match against title or description.
///
/// An empty query matches every task.
pub struct SearchFilter {
    query: String,
}

impl SearchFilter {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into().to_lowercase(),
        }
    }
}

impl TaskFilter for SearchFilter {
    fn matches(&self, task: &Task) -> bool {
        if self.query.is_empty() {
            return true;
        }
        task.title.to_lowercase().contains(&self.query)
            || task
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&self.query))
    }
}

/// Restrict to an exact priority, or pass everything through.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(TaskPriority),
}

impl PriorityFilter {
    /// Parse the filter value as the UI select presents it.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "all" => Some(PriorityFilter::All),
            "low" => Some(PriorityFilter::Only(TaskPriority::Low)),
            "medium" => Some(PriorityFilter::Only(TaskPriority::Medium)),
            "high" => Some(PriorityFilter::Only(TaskPriority::High)),
            _ => None,
        }
    }
}

impl TaskFilter for PriorityFilter {
    fn matches(&self, task: &Task) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(p) => task.priority == *p,
        }
    }
}

/// The backlog view's two refinements applied in sequence.
///
/// The displayed set is the intersection of both filters; input order is
/// preserved (whatever order the backend returned).
#[derive(Default)]
pub struct BacklogRefinement {
    pub query: String,
    pub priority: PriorityFilter,
}

impl BacklogRefinement {
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        let search = SearchFilter::new(self.query.clone());
        tasks
            .iter()
            .filter(|t| search.matches(t))
            .filter(|t| self.priority.matches(t))
            .cloned()
            .collect()
    }
}
