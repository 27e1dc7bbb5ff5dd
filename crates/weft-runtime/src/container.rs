//! The container tree.
//!
//! A [`Container`] is a cheap cloneable handle naming one grouping node of
//! the UI tree. Handles created from the same node share state, so a handle
//! captured in one place and used in another still appends children to the
//! same node. Form membership is fixed at creation: a container either
//! carries an attached [`FormData`] (its own, if it is a form's root block,
//! or a shared reference inherited from the enclosing form) or it carries
//! none, forever.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use weft_proto::{Block, Delta, DeltaOp, Element};

use crate::context::RunContext;

/// The two permanently-present root containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RootContainer {
    /// The main script flow.
    Main,
    /// The persistent side panel. Content placed here is never implicitly
    /// subordinate to a form entered via the main flow.
    Side,
}

impl RootContainer {
    /// The root's index, used as the first component of tree paths.
    pub const fn index(self) -> u32 {
        match self {
            Self::Main => 0,
            Self::Side => 1,
        }
    }
}

/// Form data attached to a form's root block container.
///
/// Immutable once created. Containers created inside the form share the
/// same `Arc<FormData>`, which is what keeps their children form-scoped
/// after the form's block has exited.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    /// The form's unique, content-derived identifier.
    pub form_id: String,
    /// The label for the submit button created when the form block exits.
    pub submit_label: String,
    /// The optional key for the submit button.
    pub submit_key: Option<String>,
}

impl FormData {
    /// Creates form data for a newly registered form.
    pub fn new(
        form_id: impl Into<String>,
        submit_label: impl Into<String>,
        submit_key: Option<&str>,
    ) -> Self {
        Self {
            form_id: form_id.into(),
            submit_label: submit_label.into(),
            submit_key: submit_key.map(str::to_string),
        }
    }
}

#[derive(Debug)]
struct ContainerNode {
    root: RootContainer,
    path: Vec<u32>,
    form_data: Option<Arc<FormData>>,
    next_child: AtomicU32,
}

/// A handle to one node of the UI tree.
///
/// Cloning a `Container` yields another handle to the same node; child
/// indices are assigned from a shared counter.
#[derive(Debug, Clone)]
pub struct Container {
    node: Arc<ContainerNode>,
}

impl PartialEq for Container {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.node, &other.node)
    }
}

impl Container {
    /// Creates the handle for a root container.
    ///
    /// Called once per root at run start; everything else in the tree is
    /// created through [`Container::block`].
    pub fn new_root(root: RootContainer) -> Self {
        Self {
            node: Arc::new(ContainerNode {
                root,
                path: vec![root.index()],
                form_data: None,
                next_child: AtomicU32::new(0),
            }),
        }
    }

    /// The root container this node lives under.
    pub fn root(&self) -> RootContainer {
        self.node.root
    }

    /// The node's tree path. The first component is the root index.
    pub fn path(&self) -> &[u32] {
        &self.node.path
    }

    /// `true` if this handle is the main flow's root container itself.
    ///
    /// Element calls arriving on the main root are redirected to the
    /// innermost open scope; calls on any other handle are not.
    pub fn is_main_root(&self) -> bool {
        self.node.root == RootContainer::Main && self.node.path.len() == 1
    }

    /// The form data attached to this container at creation, if any.
    pub fn form_data(&self) -> Option<Arc<FormData>> {
        self.node.form_data.clone()
    }

    /// Resolves the container that actually receives output for a call on
    /// this handle.
    ///
    /// A call on the main root handle while scoped blocks are open attaches
    /// its output to the innermost open block. A call on any other handle,
    /// including the side root, attaches to that handle's own node.
    pub fn active(&self, ctx: &RunContext) -> Self {
        if self.is_main_root() {
            if let Some(top) = ctx.stack().last() {
                return top.clone();
            }
        }
        self.clone()
    }

    /// Block-creation primitive: creates a child block container.
    ///
    /// Enqueues the add-block delta and returns the new handle. The caller
    /// supplies the form data to attach, either the new form's own data or
    /// a reference to the enclosing form's.
    pub fn block(
        &self,
        ctx: &mut RunContext,
        descriptor: Block,
        form_data: Option<Arc<FormData>>,
    ) -> Self {
        let path = self.child_path();
        ctx.enqueue(Delta {
            path: path.clone(),
            op: DeltaOp::AddBlock(descriptor),
        });
        Self {
            node: Arc::new(ContainerNode {
                root: self.node.root,
                path,
                form_data,
                next_child: AtomicU32::new(0),
            }),
        }
    }

    /// Appends a leaf element under this container.
    pub fn element(&self, ctx: &mut RunContext, element: Element) {
        let path = self.child_path();
        ctx.enqueue(Delta {
            path,
            op: DeltaOp::NewElement(element),
        });
    }

    /// Runs `f` with this container as the innermost open scope.
    ///
    /// Pushes the container on the run's ambient stack, runs the closure
    /// with the same context, and pops. This is the `with`-block construct:
    /// the context is threaded through explicitly rather than discovered
    /// through any global.
    pub fn scope<T>(&self, ctx: &mut RunContext, f: impl FnOnce(&mut RunContext) -> T) -> T {
        ctx.push(self.clone());
        let result = f(ctx);
        ctx.pop();
        result
    }

    fn child_path(&self) -> Vec<u32> {
        let index = self.node.next_child.fetch_add(1, Ordering::Relaxed);
        let mut path = self.node.path.clone();
        path.push(index);
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_proto::{Checkbox, Element};

    fn checkbox(label: &str) -> Element {
        Element::Checkbox(Checkbox {
            id: String::new(),
            label: label.to_string(),
            default: false,
            form_id: String::new(),
        })
    }

    #[test]
    fn test_root_paths() {
        assert_eq!(Container::new_root(RootContainer::Main).path(), &[0]);
        assert_eq!(Container::new_root(RootContainer::Side).path(), &[1]);
    }

    #[test]
    fn test_child_paths_are_sequential() {
        let mut ctx = RunContext::new();
        let main = Container::new_root(RootContainer::Main);
        main.element(&mut ctx, checkbox("a"));
        main.element(&mut ctx, checkbox("b"));
        let paths: Vec<_> = ctx.deltas().iter().map(|d| d.path.clone()).collect();
        assert_eq!(paths, vec![vec![0, 0], vec![0, 1]]);
    }

    #[test]
    fn test_cloned_handles_share_the_child_counter() {
        let mut ctx = RunContext::new();
        let main = Container::new_root(RootContainer::Main);
        let alias = main.clone();
        main.element(&mut ctx, checkbox("a"));
        alias.element(&mut ctx, checkbox("b"));
        assert_eq!(ctx.deltas()[1].path, vec![0, 1]);
    }

    #[test]
    fn test_block_creation_enqueues_delta() {
        let mut ctx = RunContext::new();
        let main = Container::new_root(RootContainer::Main);
        let child = main.block(&mut ctx, Block::vertical(), None);
        assert_eq!(child.path(), &[0, 0]);
        assert!(ctx.deltas()[0].block().is_some());
        assert!(!child.is_main_root());
    }

    #[test]
    fn test_active_redirects_only_the_main_root() {
        let mut ctx = RunContext::new();
        let main = Container::new_root(RootContainer::Main);
        let side = Container::new_root(RootContainer::Side);
        let child = main.block(&mut ctx, Block::vertical(), None);

        child.scope(&mut ctx, |ctx| {
            assert_eq!(main.active(ctx), child);
            assert_eq!(side.active(ctx), side);
            assert_eq!(child.active(ctx), child);
        });
        assert_eq!(main.active(&ctx), main);
    }

    #[test]
    fn test_scope_restores_the_stack_on_exit() {
        let mut ctx = RunContext::new();
        let main = Container::new_root(RootContainer::Main);
        let outer = main.block(&mut ctx, Block::vertical(), None);
        let inner = main.block(&mut ctx, Block::vertical(), None);

        outer.scope(&mut ctx, |ctx| {
            assert_eq!(ctx.stack().len(), 1);
            inner.scope(ctx, |ctx| {
                assert_eq!(ctx.stack().len(), 2);
                assert_eq!(ctx.stack().last(), Some(&inner));
            });
            assert_eq!(ctx.stack().len(), 1);
            assert_eq!(ctx.stack().last(), Some(&outer));
        });
        assert!(ctx.stack().is_empty());
    }

    #[test]
    fn test_form_data_attachment() {
        let mut ctx = RunContext::new();
        let main = Container::new_root(RootContainer::Main);
        let data = Arc::new(FormData::new("button-abc", "Submit", None));
        let form_block = main.block(&mut ctx, Block::form("button-abc"), Some(Arc::clone(&data)));
        assert_eq!(form_block.form_data().unwrap().form_id, "button-abc");

        // A child created with the same Arc shares it.
        let child = form_block.block(&mut ctx, Block::vertical(), Some(data));
        assert!(Arc::ptr_eq(
            &child.form_data().unwrap(),
            &form_block.form_data().unwrap()
        ));
    }
}
