//! # oxide-form-fields
//!
//! Stateless form-field views rendered as HTML fragments.
//!
//! This crate provides:
//! - [`ErrorField`](widgets::ErrorField): a field's error text, shown once
//!   the field is touched
//! - [`CheckboxField`](widgets::CheckboxField): a checkbox with a label and
//!   an optional sublabel
//! - [`FormContext`]: the read-only view of an externally owned form
//! - [`FormState`]: a minimal in-memory form context
//!
//! Views never mutate form state. They read a [`FieldProps`] masked by
//! their [`Subscription`] and emit [`FieldChanged`] messages that the
//! context applies.
//!
//! ## Quick Start
//!
//! ```rust
//! use oxide_form_fields::widgets::{render_field, CheckboxField, ErrorField};
//! use oxide_form_fields::{FieldMeta, FormState};
//!
//! let form = FormState::new()
//!     .with_value("agree", false)
//!     .with_meta("agree", FieldMeta::new().touched().error("Required"));
//!
//! let checkbox = CheckboxField::new("agree", "I agree")
//!     .sublabel("You must accept the terms");
//! let error = ErrorField::new("agree").class_names("text-red-600");
//!
//! let checkbox_html = render_field(&form, &checkbox).unwrap();
//! assert!(checkbox_html.contains(r#"type="checkbox""#));
//!
//! let error_html = render_field(&form, &error).unwrap();
//! assert!(error_html.contains("Required"));
//! ```
//!
//! ## Message Passing
//!
//! ```rust
//! use oxide_form_fields::widgets::{render_field, CheckboxField, FieldView};
//! use oxide_form_fields::{FieldProps, FormState};
//!
//! let mut form = FormState::new();
//! let checkbox = CheckboxField::new("subscribe", "Subscribe");
//! let subscriber = form.subscribe_view(&checkbox);
//!
//! let props = FieldProps::masked(&form, "subscribe", checkbox.subscription());
//! let change = checkbox.toggle(&props);
//!
//! let notified = form.apply(change).unwrap();
//! assert_eq!(notified, vec![subscriber]);
//! assert!(render_field(&form, &checkbox).unwrap().contains("checked"));
//! ```
//!
//! ## Themes
//!
//! ```rust
//! use oxide_form_fields::CheckboxTheme;
//! use oxide_form_fields::widgets::CheckboxField;
//!
//! let theme = CheckboxTheme::from_json(r#"{"input": "form-check-input"}"#).unwrap();
//! let checkbox = CheckboxField::new("subscribe", "Subscribe").theme(theme);
//! ```

mod context;
mod error;
mod form;
mod state;
mod theme;
pub mod widgets;

pub use context::{FieldProps, FormContext};
pub use error::{FieldError, Result};
pub use form::{FormState, SubscriberId};
pub use state::{FieldChange, FieldChanged, FieldMeta, FieldValue, Subscription};
pub use theme::CheckboxTheme;
