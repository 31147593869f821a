//! Persistence status flags for editable children.
//!
//! # Invariants
//! - `mark_new` always clears `is_deleted`.
//! - `is_old` is the negation of `is_new`.

use serde::{Deserialize, Serialize};

/// Embeddable new/deleted/child flag set.
///
/// Implementors of the target traits can hold one of these and forward
/// `mark_*` hooks to it instead of tracking flags by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectStatus {
    pub is_new: bool,
    pub is_deleted: bool,
    pub is_child: bool,
}

impl Default for ObjectStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectStatus {
    /// Fresh root-level object: new, not deleted, not a child.
    pub fn new() -> Self {
        Self {
            is_new: true,
            is_deleted: false,
            is_child: false,
        }
    }

    /// Free-floating object that can be inserted as new.
    pub fn mark_new(&mut self) {
        self.is_new = true;
        self.is_deleted = false;
    }

    /// Object whose state matches persisted storage.
    pub fn mark_old(&mut self) {
        self.is_new = false;
    }

    pub fn mark_as_child(&mut self) {
        self.is_child = true;
    }

    /// Flags the object for deletion on the next update.
    pub fn mark_deleted(&mut self) {
        self.is_deleted = true;
    }

    pub fn is_old(&self) -> bool {
        !self.is_new
    }
}

#[cfg(test)]
mod tests {
    use super::ObjectStatus;

    #[test]
    fn new_status_is_new_root() {
        let status = ObjectStatus::new();
        assert!(status.is_new);
        assert!(!status.is_deleted);
        assert!(!status.is_child);
        assert!(!status.is_old());
    }

    #[test]
    fn mark_new_clears_deleted() {
        let mut status = ObjectStatus::new();
        status.mark_old();
        status.mark_deleted();
        assert!(status.is_deleted);

        status.mark_new();
        assert!(status.is_new);
        assert!(!status.is_deleted);
    }

    #[test]
    fn mark_old_and_child_are_independent() {
        let mut status = ObjectStatus::default();
        status.mark_as_child();
        status.mark_old();
        assert!(status.is_child);
        assert!(status.is_old());
    }
}
