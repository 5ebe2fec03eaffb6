use yewdux::Store;

/// A single dismissible, non-blocking message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub message: String,
}

/// Toast queue for API and payment failures. Failures never block the UI;
/// the operation that produced them keeps its pre-attempt state.
#[derive(Debug, Default, Clone, PartialEq, Eq, Store)]
pub struct Notifications {
    next_id: u32,
    pub toasts: Vec<Toast>,
}

impl Notifications {
    /// Queue a new toast.
    pub fn push(&mut self, message: impl Into<String>) {
        self.next_id += 1;
        self.toasts.push(Toast {
            id: self.next_id,
            message: message.into(),
        });
    }

    /// Remove the toast with `id`, if still queued.
    pub fn dismiss(&mut self, id: u32) {
        self.toasts.retain(|toast| toast.id != id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_unique_ids() {
        let mut notifications = Notifications::default();
        notifications.push("first");
        notifications.push("second");
        assert_eq!(notifications.toasts.len(), 2);
        assert_ne!(notifications.toasts[0].id, notifications.toasts[1].id);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut notifications = Notifications::default();
        notifications.push("keep");
        notifications.push("drop");
        let drop_id = notifications.toasts[1].id;
        notifications.dismiss(drop_id);
        assert_eq!(notifications.toasts.len(), 1);
        assert_eq!(notifications.toasts[0].message, "keep");
    }

    #[test]
    fn dismiss_unknown_id_is_a_noop() {
        let mut notifications = Notifications::default();
        notifications.push("only");
        notifications.dismiss(999);
        assert_eq!(notifications.toasts.len(), 1);
    }
}
