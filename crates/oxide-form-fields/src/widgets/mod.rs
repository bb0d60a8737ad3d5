//! Field views that render HTML fragments.

mod checkbox;
mod error_field;

pub use checkbox::CheckboxField;
pub use error_field::ErrorField;

use tracing::trace;

use crate::context::{FieldProps, FormContext};
use crate::state::{FieldChange, Subscription};

/// A stateless view over one named field.
///
/// Rendering must be a pure function of the props and the view's own
/// presentation attributes.
pub trait FieldView: Send + Sync {
    /// The field name the view is bound to.
    fn name(&self) -> &str;

    /// The parts of the field state the view reads.
    fn subscription(&self) -> Subscription;

    /// Renders the view, or `None` when there is nothing to show.
    fn render(&self, props: &FieldProps<'_>) -> Option<String>;

    /// Returns whether a change to the field requires a re-render.
    fn needs_render(&self, change: FieldChange) -> bool {
        self.subscription().is_affected_by(change)
    }
}

/// Renders `view` against `ctx`, exposing only what it subscribed to.
pub fn render_field<C, V>(ctx: &C, view: &V) -> Option<String>
where
    C: FormContext + ?Sized,
    V: FieldView + ?Sized,
{
    let props = FieldProps::masked(ctx, view.name(), view.subscription());
    let html = view.render(&props);
    trace!(field = view.name(), rendered = html.is_some(), "rendered field");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FieldMeta, FormState};

    #[test]
    fn test_render_field_masks_by_subscription() {
        struct Probe;

        impl FieldView for Probe {
            fn name(&self) -> &str {
                "agree"
            }

            fn subscription(&self) -> Subscription {
                Subscription::META
            }

            fn render(&self, props: &FieldProps<'_>) -> Option<String> {
                Some(format!("{:?}|{}", props.value, props.touched))
            }
        }

        let ctx = FormState::new()
            .with_value("agree", true)
            .with_meta("agree", FieldMeta::new().touched());
        assert_eq!(render_field(&ctx, &Probe).as_deref(), Some("None|true"));
    }

    #[test]
    fn test_needs_render_follows_subscription() {
        let error = ErrorField::new("agree");
        let checkbox = CheckboxField::new("agree", "Agree");
        let value_change = FieldChange {
            value: true,
            ..FieldChange::NONE
        };
        assert!(!error.needs_render(value_change));
        assert!(checkbox.needs_render(value_change));
    }

    #[test]
    fn test_views_are_object_safe() {
        let views: Vec<Box<dyn FieldView>> = vec![
            Box::new(CheckboxField::new("agree", "I agree")),
            Box::new(ErrorField::new("agree")),
        ];
        let ctx = FormState::new().with_value("agree", false);
        let rendered: Vec<_> = views
            .iter()
            .filter_map(|v| render_field(&ctx, v.as_ref()))
            .collect();
        assert_eq!(rendered.len(), 1);
    }
}
