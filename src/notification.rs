// src/notification.rs
pub const SUCCESS_MESSAGE: &str = "Mensagem enviada com sucesso! Entraremos em contato em breve.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    pub fn class_name(&self) -> &'static str {
        match self {
            NotificationKind::Success => "notification-success",
            NotificationKind::Error => "notification-error",
            NotificationKind::Info => "notification-info",
        }
    }

    pub fn background(&self) -> &'static str {
        match self {
            NotificationKind::Success => "rgba(34, 197, 94, 0.9)",
            NotificationKind::Error => "rgba(239, 68, 68, 0.9)",
            NotificationKind::Info => "rgba(44, 95, 95, 0.9)",
        }
    }
}

/// A toast to display. `id` distinguishes successive toasts with the same
/// text so the view can replace one with the next.
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: u32,
    pub message: String,
    pub kind: NotificationKind,
}

/// Hands out notifications with increasing ids.
#[derive(Debug, Default)]
pub struct NotificationQueue {
    next_id: u32,
    current: Option<Notification>,
}

impl NotificationQueue {
    /// Replaces whatever is showing with a new toast.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind) -> &Notification {
        self.next_id = self.next_id.wrapping_add(1);
        self.current.insert(Notification {
            id: self.next_id,
            message: message.into(),
            kind,
        })
    }

    /// Clears the toast only if `id` is still the one showing.
    pub fn dismiss(&mut self, id: u32) -> bool {
        match &self.current {
            Some(current) if current.id == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }
}

/// Inline style for the toast container; `shown` selects the on-screen position.
pub fn toast_style(kind: NotificationKind, shown: bool) -> String {
    format!(
        "position: fixed; top: 100px; right: 20px; background: {}; color: white; \
         padding: 1rem 1.5rem; border-radius: 12px; box-shadow: 0 10px 30px rgba(0, 0, 0, 0.3); \
         z-index: 10000; backdrop-filter: blur(10px); border: 1px solid rgba(255, 255, 255, 0.2); \
         transform: translateX({}); transition: transform 0.3s ease; max-width: 400px;",
        kind.background(),
        if shown { "0" } else { "100%" }
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backgrounds() {
        assert_eq!(NotificationKind::Success.background(), "rgba(34, 197, 94, 0.9)");
        assert_eq!(NotificationKind::Error.background(), "rgba(239, 68, 68, 0.9)");
        assert_eq!(NotificationKind::Info.background(), "rgba(44, 95, 95, 0.9)");
        assert_eq!(NotificationKind::default(), NotificationKind::Info);
    }

    #[test]
    fn test_show_replaces_current() {
        let mut queue = NotificationQueue::default();
        let first = queue.show("um", NotificationKind::Info).id;
        let second = queue.show("dois", NotificationKind::Error).id;
        assert_ne!(first, second);
        let current = queue.current().unwrap();
        assert_eq!(current.message, "dois");
        assert_eq!(current.kind, NotificationKind::Error);
    }

    #[test]
    fn test_stale_dismiss_is_ignored() {
        let mut queue = NotificationQueue::default();
        let first = queue.show("um", NotificationKind::Info).id;
        let second = queue.show("dois", NotificationKind::Success).id;
        assert!(!queue.dismiss(first));
        assert_eq!(queue.current().map(|n| n.id), Some(second));
        assert!(queue.dismiss(second));
        assert!(queue.current().is_none());
    }

    #[test]
    fn test_toast_style_position() {
        let hidden = toast_style(NotificationKind::Success, false);
        assert!(hidden.contains("translateX(100%)"));
        assert!(hidden.contains("rgba(34, 197, 94, 0.9)"));
        let shown = toast_style(NotificationKind::Success, true);
        assert!(shown.contains("translateX(0)"));
    }
}
