//! Field state shared between views and the form context.

/// Validation metadata for a single field.
///
/// Owned and written by the form context; views only read it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMeta {
    /// Whether the user has interacted with the field.
    pub touched: bool,
    /// The current validation error, if any.
    pub error: Option<String>,
}

impl FieldMeta {
    /// Creates untouched metadata without an error.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the field as touched.
    #[must_use]
    pub fn touched(mut self) -> Self {
        self.touched = true;
        self
    }

    /// Sets the validation error.
    #[must_use]
    pub fn error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }
}

/// The value a form context holds for a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A checkbox value.
    Bool(bool),
    /// Any textual value.
    Text(String),
}

impl FieldValue {
    /// Returns the boolean value, if this is a checkbox value.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            Self::Text(_) => None,
        }
    }

    /// Returns a short name for the kind of value.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Bool(_) => "bool",
            Self::Text(_) => "text",
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// A request from a view to change a field's value.
///
/// Views emit these; only the form context applies them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldChanged {
    /// The field name.
    pub name: String,
    /// The requested value.
    pub value: FieldValue,
}

impl FieldChanged {
    /// Creates a new change message.
    pub fn new(name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// The parts of a field's state a view reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Subscription {
    /// Reads the field value.
    pub value: bool,
    /// Reads the touched flag.
    pub touched: bool,
    /// Reads the validation error.
    pub error: bool,
}

impl Subscription {
    /// Everything.
    pub const ALL: Self = Self {
        value: true,
        touched: true,
        error: true,
    };

    /// The value only.
    pub const VALUE: Self = Self {
        value: true,
        touched: false,
        error: false,
    };

    /// Touched flag and error, without the value.
    pub const META: Self = Self {
        value: false,
        touched: true,
        error: true,
    };

    /// Returns whether a view with this subscription must re-render.
    pub const fn is_affected_by(&self, change: FieldChange) -> bool {
        (self.value && change.value)
            || (self.touched && change.touched)
            || (self.error && change.error)
    }
}

/// The parts of a field's state that a mutation actually changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldChange {
    /// The value changed.
    pub value: bool,
    /// The touched flag changed.
    pub touched: bool,
    /// The validation error changed.
    pub error: bool,
}

impl FieldChange {
    /// No change.
    pub const NONE: Self = Self {
        value: false,
        touched: false,
        error: false,
    };

    /// Returns whether nothing changed.
    pub const fn is_empty(&self) -> bool {
        !(self.value || self.touched || self.error)
    }
}
