//! List Transitions
//!
//! The record list and its three transitions, kept free of any reactive
//! types. The store applies these under its write guard; components never
//! touch the vector directly.

use serde::{Deserialize, Serialize};

use crate::models::Todo;

/// Ordered to-do records plus the id source for new ones
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TodoList {
    /// Records in insertion order
    pub items: Vec<Todo>,
    /// Next record id, strictly increasing
    next_id: u32,
}

impl TodoList {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a new record unless the trimmed text is empty.
    ///
    /// Returns true when a record was created. The stored text keeps its
    /// original whitespace; only the guard trims. Ids come from a strictly
    /// increasing counter, so every record gets a distinct id even when
    /// adds happen back to back.
    pub fn add(&mut self, text: &str) -> bool {
        if text.trim().is_empty() {
            return false;
        }
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Todo {
            id,
            text: text.to_string(),
            completed: false,
        });
        true
    }

    /// Flip the completed flag of the record with the given id.
    /// Unknown ids are a no-op.
    pub fn toggle(&mut self, id: u32) {
        self.items.iter_mut()
            .find(|todo| todo.id == id)
            .map(|todo| todo.completed = !todo.completed);
    }

    /// Remove the record with the given id, preserving the order of the
    /// rest. Unknown ids are a no-op.
    pub fn remove(&mut self, id: u32) {
        self.items.retain(|todo| todo.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_list(texts: &[&str]) -> TodoList {
        let mut list = TodoList::new();
        for text in texts {
            assert!(list.add(text));
        }
        list
    }

    #[test]
    fn test_add_to_empty_list() {
        let mut list = TodoList::new();

        assert!(list.add("Buy milk"));

        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].text, "Buy milk");
        assert!(!list.items[0].completed);
    }

    #[test]
    fn test_add_rejects_blank_text() {
        let mut list = TodoList::new();

        assert!(!list.add(""));
        assert!(!list.add("   "));

        assert!(list.items.is_empty());
        // Rejected adds must not consume ids either
        assert!(list.add("real"));
        assert_eq!(list.items[0].id, 1);
    }

    #[test]
    fn test_add_keeps_original_whitespace() {
        let mut list = TodoList::new();

        assert!(list.add("  padded  "));

        assert_eq!(list.items[0].text, "  padded  ");
    }

    #[test]
    fn test_add_allows_duplicate_text() {
        let list = make_list(&["same", "same"]);

        assert_eq!(list.items.len(), 2);
        assert_ne!(list.items[0].id, list.items[1].id);
    }

    #[test]
    fn test_ids_strictly_increasing() {
        let list = make_list(&["a", "b", "c"]);

        assert_eq!(list.items[0].id, 1);
        assert_eq!(list.items[1].id, 2);
        assert_eq!(list.items[2].id, 3);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut list = make_list(&["a", "b"]);

        list.remove(2);
        assert!(list.add("c"));

        assert_eq!(list.items[1].id, 3);
    }

    #[test]
    fn test_toggle_flips_only_matching() {
        let mut list = make_list(&["a", "b"]);
        let id_a = list.items[0].id;

        list.toggle(id_a);
        assert!(list.items[0].completed);
        assert!(!list.items[1].completed);

        // Toggle is its own inverse
        list.toggle(id_a);
        assert!(!list.items[0].completed);
        assert!(!list.items[1].completed);
    }

    #[test]
    fn test_toggle_unknown_id_is_noop() {
        let mut list = make_list(&["a", "b"]);
        let before = list.clone();

        list.toggle(999);

        assert_eq!(list, before);
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut list = make_list(&["a", "b", "c"]);
        let id_b = list.items[1].id;

        list.remove(id_b);

        assert_eq!(list.items.len(), 2);
        assert_eq!(list.items[0].text, "a");
        assert_eq!(list.items[1].text, "c");
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut list = make_list(&["a"]);
        let before = list.clone();

        list.remove(999);

        assert_eq!(list, before);
    }

    #[test]
    fn test_add_toggle_delete_flow() {
        let mut list = TodoList::new();

        assert!(list.add("A"));
        assert!(list.add("B"));
        let id_a = list.items[0].id;
        let id_b = list.items[1].id;

        list.toggle(id_a);
        list.remove(id_b);

        assert_eq!(list.items.len(), 1);
        assert_eq!(list.items[0].text, "A");
        assert!(list.items[0].completed);
    }
}
