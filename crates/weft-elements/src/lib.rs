//! # weft-elements
//!
//! Element construction for the weft framework: forms, input widgets, and
//! layout blocks, all as extension traits on
//! [`Container`](weft_runtime::Container).
//!
//! ## Modules
//!
//! - [`form`] - Form scoping: implicit membership resolution, the form
//!   registry, and the scoped form block
//! - [`widgets`] - Input widgets (checkbox, button, slider, text input)
//! - [`layout`] - Layout blocks (container, columns)

pub mod form;
pub mod layout;
pub mod widgets;

pub use form::{is_in_form, resolve_form_id, Form, FormExt};
pub use layout::LayoutExt;
pub use widgets::WidgetExt;
