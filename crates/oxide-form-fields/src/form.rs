//! In-memory form context.

use std::collections::HashMap;

use tracing::debug;

use crate::context::FormContext;
use crate::error::{FieldError, Result};
use crate::state::{FieldChange, FieldChanged, FieldMeta, FieldValue, Subscription};
use crate::widgets::FieldView;

/// Identifies a subscriber registered with a [`FormState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriberId(u64);

#[derive(Debug, Clone)]
struct Subscriber {
    id: SubscriberId,
    field: String,
    subscription: Subscription,
}

/// A minimal form context holding values and validation metadata.
///
/// It stores what the host hands it and runs no validation. Every
/// mutation returns the subscribers that must re-render.
#[derive(Debug, Default)]
pub struct FormState {
    values: HashMap<String, FieldValue>,
    meta: HashMap<String, FieldMeta>,
    subscribers: Vec<Subscriber>,
    next_id: u64,
}

impl FormState {
    /// Creates an empty form state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an initial value.
    #[must_use]
    pub fn with_value(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }

    /// Sets initial metadata.
    #[must_use]
    pub fn with_meta(mut self, name: impl Into<String>, meta: FieldMeta) -> Self {
        self.meta.insert(name.into(), meta);
        self
    }

    /// Registers interest in part of a field's state.
    pub fn subscribe(
        &mut self,
        name: impl Into<String>,
        subscription: Subscription,
    ) -> SubscriberId {
        let id = SubscriberId(self.next_id);
        self.next_id += 1;
        self.subscribers.push(Subscriber {
            id,
            field: name.into(),
            subscription,
        });
        id
    }

    /// Registers a view with its declared subscription.
    pub fn subscribe_view<V: FieldView + ?Sized>(&mut self, view: &V) -> SubscriberId {
        self.subscribe(view.name(), view.subscription())
    }

    /// Removes a subscriber. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriberId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|s| s.id != id);
        self.subscribers.len() != before
    }

    /// Applies a change emitted by a view.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::TypeMismatch`] when the field already holds
    /// a value of a different kind.
    pub fn apply(&mut self, change: FieldChanged) -> Result<Vec<SubscriberId>> {
        let FieldChanged { name, value } = change;

        if let Some(current) = self.values.get(&name) {
            if current.kind() != value.kind() {
                return Err(FieldError::TypeMismatch {
                    field: name,
                    expected: current.kind(),
                });
            }
            if *current == value {
                return Ok(Vec::new());
            }
        }

        debug!(field = %name, value = ?value, "applying field change");
        self.values.insert(name.clone(), value);
        Ok(self.notify(
            &name,
            FieldChange {
                value: true,
                ..FieldChange::NONE
            },
        ))
    }

    /// Sets the touched flag.
    pub fn set_touched(&mut self, name: &str, touched: bool) -> Vec<SubscriberId> {
        let meta = self.meta.entry(name.to_string()).or_default();
        if meta.touched == touched {
            return Vec::new();
        }
        meta.touched = touched;
        self.notify(
            name,
            FieldChange {
                touched: true,
                ..FieldChange::NONE
            },
        )
    }

    /// Sets or clears the validation error.
    pub fn set_error(&mut self, name: &str, error: Option<String>) -> Vec<SubscriberId> {
        let meta = self.meta.entry(name.to_string()).or_default();
        if meta.error == error {
            return Vec::new();
        }
        meta.error = error;
        self.notify(
            name,
            FieldChange {
                error: true,
                ..FieldChange::NONE
            },
        )
    }

    fn notify(&self, name: &str, change: FieldChange) -> Vec<SubscriberId> {
        let ids: Vec<_> = self
            .subscribers
            .iter()
            .filter(|s| s.field == name && s.subscription.is_affected_by(change))
            .map(|s| s.id)
            .collect();
        debug!(field = name, notified = ids.len(), "field state changed");
        ids
    }
}

impl FormContext for FormState {
    fn value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name)
    }

    fn meta(&self, name: &str) -> Option<&FieldMeta> {
        self.meta.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_notifies_value_subscribers_only() {
        let mut form = FormState::new();
        let value_sub = form.subscribe("agree", Subscription::VALUE);
        let meta_sub = form.subscribe("agree", Subscription::META);
        let other = form.subscribe("other", Subscription::ALL);

        let notified = form.apply(FieldChanged::new("agree", true)).unwrap();
        assert_eq!(notified, vec![value_sub]);
        assert!(!notified.contains(&meta_sub));
        assert!(!notified.contains(&other));
        assert_eq!(form.value("agree"), Some(&FieldValue::Bool(true)));
    }

    #[test]
    fn test_apply_same_value_notifies_nobody() {
        let mut form = FormState::new().with_value("agree", true);
        form.subscribe("agree", Subscription::VALUE);
        let notified = form.apply(FieldChanged::new("agree", true)).unwrap();
        assert!(notified.is_empty());
    }

    #[test]
    fn test_apply_type_mismatch() {
        let mut form = FormState::new().with_value("email", "a@example.com");
        let err = form.apply(FieldChanged::new("email", true)).unwrap_err();
        assert!(matches!(
            err,
            FieldError::TypeMismatch {
                expected: "text",
                ..
            }
        ));
        assert_eq!(form.value("email"), Some(&FieldValue::from("a@example.com")));
    }

    #[test]
    fn test_meta_updates_notify_meta_subscribers() {
        let mut form = FormState::new();
        let meta_sub = form.subscribe("agree", Subscription::META);
        form.subscribe("agree", Subscription::VALUE);

        assert_eq!(form.set_touched("agree", true), vec![meta_sub]);
        assert!(form.set_touched("agree", true).is_empty());
        assert_eq!(
            form.set_error("agree", Some("Required".to_string())),
            vec![meta_sub]
        );
        assert_eq!(
            form.meta("agree"),
            Some(&FieldMeta::new().touched().error("Required"))
        );
    }

    #[test]
    fn test_unsubscribe() {
        let mut form = FormState::new();
        let id = form.subscribe("agree", Subscription::ALL);
        assert!(form.unsubscribe(id));
        assert!(!form.unsubscribe(id));
        assert!(form.set_touched("agree", true).is_empty());
    }
}
