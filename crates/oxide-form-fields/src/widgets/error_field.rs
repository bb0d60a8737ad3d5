//! Error text for a single field.

use ironhtml::typed::Element;
use ironhtml_elements::Span;

use super::FieldView;
use crate::context::FieldProps;
use crate::state::Subscription;

/// Shows a field's validation error once the field has been touched.
///
/// Subscribes to `touched` and `error` only, so value changes never
/// re-render it.
#[derive(Debug, Clone)]
pub struct ErrorField {
    name: String,
    class_names: Option<String>,
}

impl ErrorField {
    /// Creates an error view for the named field.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            class_names: None,
        }
    }

    /// Sets the class attribute of the rendered `<span>`.
    #[must_use]
    pub fn class_names(mut self, class_names: impl Into<String>) -> Self {
        self.class_names = Some(class_names.into());
        self
    }
}

impl FieldView for ErrorField {
    fn name(&self) -> &str {
        &self.name
    }

    fn subscription(&self) -> Subscription {
        Subscription::META
    }

    fn render(&self, props: &FieldProps<'_>) -> Option<String> {
        let error = props.visible_error()?;
        let class_names = self.class_names.as_deref();

        let html = Element::<Span>::new()
            .when(class_names.is_some(), |s| s.class(class_names.unwrap_or("")))
            .text(error)
            .render();
        Some(html)
    }
}
