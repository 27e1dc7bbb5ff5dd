//! Input widgets.
//!
//! Each widget call marshals a payload with its content-derived id and the
//! id of the enclosing form (empty when there is none), enqueues the delta,
//! and returns the widget's default value. Value buffering and release on
//! submit happen in the host, outside this crate.

use weft_core::identity::widget_id;
use weft_core::{WeftError, WeftResult};
use weft_proto::{Button, Checkbox, Element, Slider, TextInput};
use weft_runtime::{Container, RunContext};

use crate::form::{is_in_form, resolve_form_id};

/// Extension trait for creating input widgets on a container.
pub trait WidgetExt {
    /// Creates a checkbox. Returns its initial state.
    fn checkbox(
        &self,
        ctx: &mut RunContext,
        label: &str,
        default: bool,
        key: Option<&str>,
    ) -> WeftResult<bool>;

    /// Creates a button. Returns `false` (the unclicked state).
    ///
    /// # Errors
    ///
    /// Plain buttons are not allowed inside forms; a form's only button is
    /// the submit button its block creates on exit.
    fn button(&self, ctx: &mut RunContext, label: &str, key: Option<&str>) -> WeftResult<bool>;

    /// Creates a numeric slider. Returns its initial value.
    fn slider(
        &self,
        ctx: &mut RunContext,
        label: &str,
        min: f64,
        max: f64,
        value: f64,
        key: Option<&str>,
    ) -> WeftResult<f64>;

    /// Creates a single-line text input. Returns its initial text.
    fn text_input(
        &self,
        ctx: &mut RunContext,
        label: &str,
        default: &str,
        key: Option<&str>,
    ) -> WeftResult<String>;
}

impl WidgetExt for Container {
    fn checkbox(
        &self,
        ctx: &mut RunContext,
        label: &str,
        default: bool,
        key: Option<&str>,
    ) -> WeftResult<bool> {
        let mut payload = Checkbox {
            id: String::new(),
            label: label.to_string(),
            default,
            form_id: resolve_form_id(Some(ctx), self),
        };
        payload.id = widget_id("checkbox", &payload, key)?;
        self.active(ctx).element(ctx, Element::Checkbox(payload));
        Ok(default)
    }

    fn button(&self, ctx: &mut RunContext, label: &str, key: Option<&str>) -> WeftResult<bool> {
        if is_in_form(Some(ctx), self) {
            return Err(WeftError::ApiUsage(
                "Button can't be used in a form.".to_string(),
            ));
        }
        let mut payload = Button {
            id: String::new(),
            label: label.to_string(),
            default: false,
            is_form_submitter: false,
            form_id: String::new(),
        };
        payload.id = widget_id("button", &payload, key)?;
        self.active(ctx).element(ctx, Element::Button(payload));
        Ok(false)
    }

    fn slider(
        &self,
        ctx: &mut RunContext,
        label: &str,
        min: f64,
        max: f64,
        value: f64,
        key: Option<&str>,
    ) -> WeftResult<f64> {
        if min > max {
            return Err(WeftError::ApiUsage(format!(
                "Slider `min` ({min}) must not be greater than `max` ({max})."
            )));
        }
        if value < min || value > max {
            return Err(WeftError::ApiUsage(format!(
                "Slider value {value} is outside the [{min}, {max}] range."
            )));
        }
        let mut payload = Slider {
            id: String::new(),
            label: label.to_string(),
            min,
            max,
            value,
            form_id: resolve_form_id(Some(ctx), self),
        };
        payload.id = widget_id("slider", &payload, key)?;
        self.active(ctx).element(ctx, Element::Slider(payload));
        Ok(value)
    }

    fn text_input(
        &self,
        ctx: &mut RunContext,
        label: &str,
        default: &str,
        key: Option<&str>,
    ) -> WeftResult<String> {
        let mut payload = TextInput {
            id: String::new(),
            label: label.to_string(),
            default: default.to_string(),
            form_id: resolve_form_id(Some(ctx), self),
        };
        payload.id = widget_id("text_input", &payload, key)?;
        self.active(ctx).element(ctx, Element::TextInput(payload));
        Ok(default.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_runtime::RootContainer;

    fn fixture() -> (RunContext, Container) {
        (RunContext::new(), Container::new_root(RootContainer::Main))
    }

    #[test]
    fn test_checkbox_marshals_id_and_empty_form_id() {
        let (mut ctx, main) = fixture();
        main.checkbox(&mut ctx, "agree", true, None).unwrap();
        let element = ctx.last_delta().unwrap().element().unwrap();
        assert_eq!(element.kind(), "checkbox");
        assert!(element.id().starts_with("checkbox-"));
        assert_eq!(element.form_id(), "");
    }

    #[test]
    fn test_widgets_return_their_defaults() {
        let (mut ctx, main) = fixture();
        assert!(main.checkbox(&mut ctx, "agree", true, None).unwrap());
        assert!(!main.button(&mut ctx, "go", None).unwrap());
        let value = main.slider(&mut ctx, "n", 0.0, 10.0, 5.0, None).unwrap();
        assert!((value - 5.0).abs() < f64::EPSILON);
        assert_eq!(
            main.text_input(&mut ctx, "name", "ada", None).unwrap(),
            "ada"
        );
    }

    #[test]
    fn test_slider_rejects_bad_bounds() {
        let (mut ctx, main) = fixture();
        let err = main.slider(&mut ctx, "n", 10.0, 0.0, 5.0, None).unwrap_err();
        assert!(matches!(err, WeftError::ApiUsage(_)));
        let err = main.slider(&mut ctx, "n", 0.0, 10.0, 11.0, None).unwrap_err();
        assert!(err.to_string().contains("outside"));
        assert!(ctx.deltas().is_empty());
    }

    #[test]
    fn test_key_distinguishes_identical_widgets() {
        let (mut ctx, main) = fixture();
        main.checkbox(&mut ctx, "agree", false, Some("a")).unwrap();
        main.checkbox(&mut ctx, "agree", false, Some("b")).unwrap();
        let ids: Vec<_> = ctx
            .deltas()
            .iter()
            .map(|d| d.element().unwrap().id().to_string())
            .collect();
        assert_ne!(ids[0], ids[1]);
    }
}
