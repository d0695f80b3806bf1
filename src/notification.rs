//! Findings that do not stop an import
//!
//! A reference to an id the pool does not define, or a picture skipped under
//! `skip_unsupported_pictures`, is recorded here against the object it
//! concerns and the import carries on.

use std::fmt;
use std::ops::Deref;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationType {
    /// Content the decoder leaves out on purpose
    NotSupported,
    Warning,
}

impl NotificationType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::NotSupported => "not supported",
            Self::Warning => "warning",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub notification_type: NotificationType,
    /// Assigned name of the object concerned
    pub object: String,
    pub message: String,
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} ({})", self.object, self.message, self.notification_type.as_str())
    }
}

/// Notifications of one import, in the order objects were rendered
#[derive(Debug, Clone, Default)]
pub struct NotificationCollection(Vec<Notification>);

impl NotificationCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notify(
        &mut self,
        notification_type: NotificationType,
        object: impl Into<String>,
        message: impl Into<String>,
    ) {
        self.0.push(Notification {
            notification_type,
            object: object.into(),
            message: message.into(),
        });
    }

    pub fn of_type(&self, nt: NotificationType) -> impl Iterator<Item = &Notification> {
        self.0.iter().filter(move |n| n.notification_type == nt)
    }

    pub fn has_type(&self, nt: NotificationType) -> bool {
        self.of_type(nt).next().is_some()
    }
}

impl Deref for NotificationCollection {
    type Target = [Notification];

    fn deref(&self) -> &[Notification] {
        &self.0
    }
}

impl<'a> IntoIterator for &'a NotificationCollection {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_by_type() {
        let mut c = NotificationCollection::new();
        c.notify(NotificationType::Warning, "datamask0", "refers to missing object 7");
        c.notify(NotificationType::NotSupported, "logo", "run-length encoded data");
        c.notify(NotificationType::Warning, "datamask0", "refers to missing object 9");

        assert_eq!(c.len(), 3);
        assert_eq!(c.of_type(NotificationType::Warning).count(), 2);
        assert!(c.has_type(NotificationType::NotSupported));
        assert_eq!(c[1].object, "logo");
    }

    #[test]
    fn test_display_names_object() {
        let mut c = NotificationCollection::new();
        c.notify(NotificationType::NotSupported, "logo", "run-length encoded data");
        assert_eq!(c[0].to_string(), "logo: run-length encoded data (not supported)");
    }
}
