//! Element payloads marshalled by widget calls.

use serde::{Deserialize, Serialize};

/// A clickable button.
///
/// Buttons double as form submit controls: the submit button a form block
/// creates on scope exit is a `Button` with `is_form_submitter` set and an
/// id equal to the form's id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    /// Content-derived widget identity.
    pub id: String,
    /// The button label.
    pub label: String,
    /// The value reported before the button is first clicked.
    pub default: bool,
    /// Whether this button submits an enclosing form.
    pub is_form_submitter: bool,
    /// The enclosing form's id, or empty.
    pub form_id: String,
}

/// A boolean checkbox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkbox {
    /// Content-derived widget identity.
    pub id: String,
    /// The checkbox label.
    pub label: String,
    /// The initial checked state.
    pub default: bool,
    /// The enclosing form's id, or empty.
    pub form_id: String,
}

/// A numeric slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slider {
    /// Content-derived widget identity.
    pub id: String,
    /// The slider label.
    pub label: String,
    /// Lower bound.
    pub min: f64,
    /// Upper bound.
    pub max: f64,
    /// The initial value.
    pub value: f64,
    /// The enclosing form's id, or empty.
    pub form_id: String,
}

/// A single-line text input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextInput {
    /// Content-derived widget identity.
    pub id: String,
    /// The input label.
    pub label: String,
    /// The initial text.
    pub default: String,
    /// The enclosing form's id, or empty.
    pub form_id: String,
}

/// Enumerates all element payloads a run can produce.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Button(Button),
    Checkbox(Checkbox),
    Slider(Slider),
    TextInput(TextInput),
}

impl Element {
    /// Returns the element's kind tag, as used for widget identity.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Button(_) => "button",
            Self::Checkbox(_) => "checkbox",
            Self::Slider(_) => "slider",
            Self::TextInput(_) => "text_input",
        }
    }

    /// Returns the element's widget id.
    pub fn id(&self) -> &str {
        match self {
            Self::Button(e) => &e.id,
            Self::Checkbox(e) => &e.id,
            Self::Slider(e) => &e.id,
            Self::TextInput(e) => &e.id,
        }
    }

    /// Returns the id of the form this element belongs to, or the empty
    /// string if it is not inside a form.
    pub fn form_id(&self) -> &str {
        match self {
            Self::Button(e) => &e.form_id,
            Self::Checkbox(e) => &e.form_id,
            Self::Slider(e) => &e.form_id,
            Self::TextInput(e) => &e.form_id,
        }
    }
}
