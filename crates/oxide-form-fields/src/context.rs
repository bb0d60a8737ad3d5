//! The form context seen by field views.

use crate::state::{FieldMeta, FieldValue, Subscription};

/// Read access to an externally owned form's field state.
///
/// Implemented by whatever tracks values and validation for a form.
/// Views never write through this trait; they emit
/// [`FieldChanged`](crate::FieldChanged) messages instead.
pub trait FormContext {
    /// Returns the current value of a field.
    fn value(&self, name: &str) -> Option<&FieldValue>;

    /// Returns the validation metadata of a field.
    fn meta(&self, name: &str) -> Option<&FieldMeta>;
}

/// A view's window onto one field, masked by its subscription.
///
/// Parts the view did not subscribe to read as blank: `value` is
/// `None`, `touched` is `false`, `error` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldProps<'a> {
    /// The field name.
    pub name: &'a str,
    /// The field value, if subscribed and present.
    pub value: Option<&'a FieldValue>,
    /// The touched flag, if subscribed.
    pub touched: bool,
    /// The validation error, if subscribed and present.
    pub error: Option<&'a str>,
}

impl<'a> FieldProps<'a> {
    /// Reads `name` from `ctx`, keeping only the subscribed parts.
    pub fn masked<C>(ctx: &'a C, name: &'a str, subscription: Subscription) -> Self
    where
        C: FormContext + ?Sized,
    {
        let meta = ctx.meta(name);
        Self {
            name,
            value: if subscription.value {
                ctx.value(name)
            } else {
                None
            },
            touched: subscription.touched && meta.is_some_and(|m| m.touched),
            error: if subscription.error {
                meta.and_then(|m| m.error.as_deref())
            } else {
                None
            },
        }
    }

    /// Returns the error to display: only once touched, and never empty.
    pub fn visible_error(&self) -> Option<&'a str> {
        if !self.touched {
            return None;
        }
        self.error.filter(|e| !e.is_empty())
    }

    /// Returns whether the field holds `Bool(true)`.
    pub fn is_checked(&self) -> bool {
        matches!(self.value, Some(FieldValue::Bool(true)))
    }
}
