//! Dashboard checklist

use edupilot_core::{CyclerError, Result};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    pub task: String,
    #[serde(default)]
    pub completed: bool,
}

impl TodoItem {
    pub fn new(task: impl Into<String>, completed: bool) -> Self {
        Self {
            task: task.into(),
            completed,
        }
    }
}

/// Ordered tasks with per-item completion
#[derive(Clone, Debug, Default)]
pub struct TodoList {
    items: Vec<TodoItem>,
}

impl TodoList {
    pub fn new(items: Vec<TodoItem>) -> Self {
        Self { items }
    }

    /// Flip completion of task `index`, returning the new flag
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        let len = self.items.len();
        let item = self
            .items
            .get_mut(index)
            .ok_or(CyclerError::OutOfRange { index, len })?;
        item.completed = !item.completed;
        Ok(item.completed)
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn pending_count(&self) -> usize {
        self.items.iter().filter(|item| !item.completed).count()
    }

    pub fn completed_count(&self) -> usize {
        self.items.len() - self.pending_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_and_counts() {
        let mut todos = TodoList::new(vec![
            TodoItem::new("Complete React Module 3", false),
            TodoItem::new("Review Course Materials", true),
        ]);
        assert_eq!(todos.pending_count(), 1);
        assert_eq!(todos.completed_count(), 1);

        assert_eq!(todos.toggle(0), Ok(true));
        assert_eq!(todos.pending_count(), 0);

        assert_eq!(
            todos.toggle(2),
            Err(CyclerError::OutOfRange { index: 2, len: 2 })
        );
    }
}
