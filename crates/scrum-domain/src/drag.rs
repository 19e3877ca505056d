//! Drag gesture interpretation.
//!
//! Translates a completed drag-and-drop gesture into a mutation intent. No
//! state is touched here; the caller issues the backend update only when an
//! intent comes back.

use scrum_core::{ScrumError, ScrumResult};

use crate::task::{TaskId, TaskStatus};

/// Where a drag started or ended: a board column and a position within it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragLocation {
    pub column: String,
    pub index: usize,
}

impl DragLocation {
    pub fn new(column: impl Into<String>, index: usize) -> Self {
        Self {
            column: column.into(),
            index,
        }
    }
}

/// A completed drag gesture as reported by the drag-and-drop layer.
#[derive(Debug, Clone)]
pub struct DragGesture {
    pub dragged: TaskId,
    pub source: DragLocation,
    /// None when the gesture was cancelled (dropped outside any column).
    pub destination: Option<DragLocation>,
}

/// The mutation a gesture calls for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropAction {
    /// Cancelled gesture or drop back onto the original slot; nothing to do.
    None,
    /// Set the dragged task's status to the destination column's status.
    SetStatus(TaskStatus),
}

impl DragGesture {
    /// Decide what, if anything, the gesture changes.
    ///
    /// A drop onto the exact source slot is a no-op so redundant writes are
    /// never issued. A destination column the board does not know is a
    /// validation error and produces no request.
    pub fn interpret(&self) -> ScrumResult<DropAction> {
        let Some(destination) = &self.destination else {
            return Ok(DropAction::None);
        };

        if *destination == self.source {
            return Ok(DropAction::None);
        }

        match TaskStatus::from_column_id(&destination.column) {
            Some(status) => Ok(DropAction::SetStatus(status)),
            None => Err(ScrumError::Validation(format!(
                "Unknown column: {}",
                destination.column
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn gesture(source: DragLocation, destination: Option<DragLocation>) -> DragGesture {
        DragGesture {
            dragged: Uuid::new_v4(),
            source,
            destination,
        }
    }

    #[test]
    fn test_cancelled_gesture_is_noop() {
        let g = gesture(DragLocation::new("todo", 0), None);
        assert_eq!(g.interpret().unwrap(), DropAction::None);
    }

    #[test]
    fn test_same_slot_is_noop() {
        let g = gesture(
            DragLocation::new("todo", 0),
            Some(DragLocation::new("todo", 0)),
        );
        assert_eq!(g.interpret().unwrap(), DropAction::None);
    }

    #[test]
    fn test_same_column_different_index_moves() {
        let g = gesture(
            DragLocation::new("todo", 0),
            Some(DragLocation::new("todo", 2)),
        );
        assert_eq!(
            g.interpret().unwrap(),
            DropAction::SetStatus(TaskStatus::Todo)
        );
    }

    #[test]
    fn test_drop_into_done_sets_done() {
        let g = gesture(
            DragLocation::new("todo", 0),
            Some(DragLocation::new("done", 0)),
        );
        assert_eq!(
            g.interpret().unwrap(),
            DropAction::SetStatus(TaskStatus::Done)
        );
    }

    #[test]
    fn test_backlog_column_maps_to_backlog_state() {
        let g = gesture(
            DragLocation::new("review", 1),
            Some(DragLocation::new("backlog", 0)),
        );
        assert_eq!(
            g.interpret().unwrap(),
            DropAction::SetStatus(TaskStatus::Backlog)
        );
    }

    #[test]
    fn test_unknown_column_is_rejected() {
        let g = gesture(
            DragLocation::new("todo", 0),
            Some(DragLocation::new("limbo", 0)),
        );
        assert!(matches!(g.interpret(), Err(ScrumError::Validation(_))));
    }
}
