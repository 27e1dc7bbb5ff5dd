//! Form scoping.
//!
//! A form groups input widgets so their values are committed together when
//! its submit button is pressed, instead of triggering a rerun on every
//! interaction. Widgets never name their form: membership is resolved
//! implicitly from where the widget's output lands, via
//! [`resolve_form_id`].
//!
//! Two rules decide membership:
//!
//! 1. A call arriving on the main root handle belongs to the innermost
//!    open scoped block that carries form data (the ambient stack).
//! 2. A call on any other handle belongs to whatever form that handle was
//!    created inside, captured as an attached [`FormData`] reference at
//!    creation time. A handle created outside a form therefore stays
//!    form-free even when invoked while a form block is open, and a handle
//!    created inside one keeps producing form-scoped children after the
//!    block has exited.
//!
//! The side panel is exempt from rule 1: its content is never implicitly
//! subordinate to a form entered via the main flow.

use std::sync::Arc;

use weft_core::identity::widget_id;
use weft_core::{WeftError, WeftResult};
use weft_proto::{Block, Button, Element};
use weft_runtime::{Container, FormData, RootContainer, RunContext};

/// Finds the form enclosing `container`, if any.
pub(crate) fn current_form(
    ctx: Option<&RunContext>,
    container: &Container,
) -> Option<Arc<FormData>> {
    // Side panel content never joins a main-flow form.
    if container.root() == RootContainer::Side {
        return container.form_data();
    }

    let Some(ctx) = ctx else {
        return container.form_data();
    };

    if container.is_main_root() && !ctx.stack().is_empty() {
        // Invoked via the main flow: scan the open scoped blocks from the
        // innermost outwards for one that carries form data.
        for open in ctx.stack().iter().rev() {
            if let Some(data) = open.form_data() {
                return Some(data);
            }
        }
    }

    container.form_data()
}

/// Returns the id of the form `container` currently belongs to, or the
/// empty string when it is not inside a form.
///
/// The empty string, never an absent value, is what widget payloads carry
/// in their `form_id` field. The function is pure: it reads only the given
/// context snapshot and the container's own attached data.
pub fn resolve_form_id(ctx: Option<&RunContext>, container: &Container) -> String {
    current_form(ctx, container).map_or_else(String::new, |data| data.form_id.clone())
}

/// `true` if `container` is currently inside a form block.
pub fn is_in_form(ctx: Option<&RunContext>, container: &Container) -> bool {
    current_form(ctx, container).is_some()
}

/// Computes a form's id from its submit button.
///
/// A form's id equals its submit button's widget id. The real button is
/// only created when the form block exits, so a stand-in descriptor is
/// hashed here; the button later reuses the stored id instead of
/// recomputing it.
fn build_form_id(submit_label: &str, key: Option<&str>) -> WeftResult<String> {
    let button = Button {
        id: String::new(),
        label: submit_label.to_string(),
        default: false,
        is_form_submitter: true,
        form_id: String::new(),
    };
    widget_id("button", &button, key)
}

fn duplicate_form_message(key: Option<&str>) -> String {
    key.map_or_else(
        || {
            "There are multiple identical forms with the same generated key.\n\
             \n\
             When a form is created, it's assigned an internal key based on its\n\
             structure. Multiple forms with an identical structure will result\n\
             in the same internal key, which causes this error.\n\
             \n\
             To fix this error, please pass a unique `key` argument to `form`."
                .to_string()
        },
        |key| {
            format!(
                "There are multiple identical forms with `key='{key}'`.\n\
                 \n\
                 To fix this, please make sure that the `key` argument is unique\n\
                 for each form you create."
            )
        },
    )
}

/// Extension trait for creating forms.
pub trait FormExt {
    /// Creates a form block under this container.
    ///
    /// The submit button is created automatically when the form's scope
    /// exits, labelled `submit_label`. Identically-structured forms collide
    /// on their generated id; pass a `key` to disambiguate them.
    ///
    /// # Errors
    ///
    /// - [`WeftError::NestedForm`] when called inside another form's block.
    /// - [`WeftError::DuplicateForm`] when a form with the same identity
    ///   was already created this run.
    fn form(
        &self,
        ctx: &mut RunContext,
        submit_label: &str,
        key: Option<&str>,
    ) -> WeftResult<Form>;
}

impl FormExt for Container {
    fn form(
        &self,
        ctx: &mut RunContext,
        submit_label: &str,
        key: Option<&str>,
    ) -> WeftResult<Form> {
        // Validate before touching any state, so a failed call leaves the
        // registry, the tree, and the delta queue unchanged.
        if is_in_form(Some(ctx), self) {
            return Err(WeftError::NestedForm);
        }

        let form_id = build_form_id(submit_label, key)?;
        if !ctx.register_form_id(&form_id) {
            return Err(WeftError::DuplicateForm(duplicate_form_message(key)));
        }
        tracing::debug!(%form_id, "registered form");

        let data = Arc::new(FormData::new(form_id.clone(), submit_label, key));
        let parent = self.active(ctx);
        let container = parent.block(ctx, Block::form(form_id), Some(Arc::clone(&data)));
        Ok(Form { container, data })
    }
}

/// A created form: its root block container plus the stored form data.
#[derive(Debug, Clone)]
pub struct Form {
    container: Container,
    data: Arc<FormData>,
}

impl Form {
    /// The form's root block container.
    pub const fn container(&self) -> &Container {
        &self.container
    }

    /// The form's stored data.
    pub fn data(&self) -> &FormData {
        &self.data
    }

    /// The form's id.
    pub fn id(&self) -> &str {
        &self.data.form_id
    }

    /// Runs `f` with the form's block as the innermost open scope, then
    /// creates the form's submit button.
    ///
    /// The button reuses the id computed at form creation, so the form's id
    /// and its submit button's id are the same value by construction.
    pub fn scope<T>(
        &self,
        ctx: &mut RunContext,
        f: impl FnOnce(&mut RunContext) -> WeftResult<T>,
    ) -> WeftResult<T> {
        let result = self.container.scope(ctx, f)?;

        let button = Button {
            id: self.data.form_id.clone(),
            label: self.data.submit_label.clone(),
            default: false,
            is_form_submitter: true,
            form_id: self.data.form_id.clone(),
        };
        self.container.element(ctx, Element::Button(button));
        Ok(result)
    }
}
