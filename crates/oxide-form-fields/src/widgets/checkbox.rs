//! Labeled checkbox view.

use std::collections::HashMap;

use ironhtml::typed::Element;
use ironhtml_elements::{Div, Input, Label, P};

use super::FieldView;
use crate::context::FieldProps;
use crate::error::{FieldError, Result};
use crate::state::{FieldChanged, Subscription};
use crate::theme::CheckboxTheme;

/// A checkbox with a label and an optional sublabel.
///
/// The field name doubles as the input's `id`, so it must be unique per
/// page.
#[derive(Debug, Clone)]
pub struct CheckboxField {
    name: String,
    label: String,
    sublabel: Option<String>,
    theme: CheckboxTheme,
}

impl CheckboxField {
    /// Creates a checkbox bound to `name`.
    pub fn new(name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            sublabel: None,
            theme: CheckboxTheme::default(),
        }
    }

    /// Sets the secondary descriptive text.
    #[must_use]
    pub fn sublabel(mut self, sublabel: impl Into<String>) -> Self {
        self.sublabel = Some(sublabel.into());
        self
    }

    /// Replaces the class names.
    #[must_use]
    pub fn theme(mut self, theme: CheckboxTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Returns the change a click produces from the rendered state.
    pub fn toggle(&self, props: &FieldProps<'_>) -> FieldChanged {
        self.set_checked(!props.is_checked())
    }

    /// Returns the change that sets the checkbox to `checked`.
    pub fn set_checked(&self, checked: bool) -> FieldChanged {
        FieldChanged::new(&self.name, checked)
    }

    /// Reads the checkbox from urlencoded form data.
    ///
    /// Browsers omit unchecked boxes, so a missing key means `false`.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::InvalidValue`] when the submitted value is
    /// not one of `true`, `on`, `1`, `false`, `off`, `0` or empty.
    pub fn from_submission(&self, data: &HashMap<String, String>) -> Result<FieldChanged> {
        let Some(raw) = data.get(&self.name) else {
            return Ok(self.set_checked(false));
        };

        let checked = match raw.trim().to_ascii_lowercase().as_str() {
            "true" | "on" | "1" => true,
            "" | "false" | "off" | "0" => false,
            _ => {
                return Err(FieldError::InvalidValue {
                    field: self.name.clone(),
                    value: raw.clone(),
                })
            }
        };
        Ok(self.set_checked(checked))
    }
}

impl FieldView for CheckboxField {
    fn name(&self) -> &str {
        &self.name
    }

    fn subscription(&self) -> Subscription {
        Subscription::VALUE
    }

    fn render(&self, props: &FieldProps<'_>) -> Option<String> {
        let name = self.name.as_str();
        let theme = &self.theme;
        let checked = props.is_checked();
        let sublabel = self.sublabel.as_deref();

        let html = Element::<Div>::new()
            .class(theme.wrapper.as_str())
            .child::<Div, _>(|d| {
                d.class(theme.control.as_str()).child::<Input, _>(|i| {
                    let input = i
                        .attr("type", "checkbox")
                        .id(name)
                        .attr("name", name)
                        .attr("value", "true")
                        .class(theme.input.as_str());
                    if checked {
                        input.bool_attr("checked")
                    } else {
                        input
                    }
                })
            })
            .child::<Div, _>(|d| {
                d.class(theme.text.as_str())
                    .child::<Label, _>(|l| {
                        l.attr("for", name)
                            .class(theme.label.as_str())
                            .text(self.label.as_str())
                    })
                    .when(sublabel.is_some(), |d| {
                        d.child::<P, _>(|p| {
                            p.class(theme.sublabel.as_str())
                                .text(sublabel.unwrap_or(""))
                        })
                    })
            })
            .render();
        Some(html)
    }
}
