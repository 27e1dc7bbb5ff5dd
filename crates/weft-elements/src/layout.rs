//! Layout blocks.
//!
//! Containers and columns group other elements without producing a value.
//! A block created while a form is enclosing it inherits that form's data,
//! so widgets attached through its handle stay form-scoped wherever the
//! handle ends up being used.

use weft_core::{WeftError, WeftResult};
use weft_proto::Block;
use weft_runtime::{Container, RunContext};

use crate::form::current_form;

/// Extension trait for creating layout blocks on a container.
pub trait LayoutExt {
    /// Creates a plain vertical container block.
    fn container(&self, ctx: &mut RunContext) -> Container;

    /// Creates `count` side-by-side columns inside a horizontal row.
    ///
    /// # Errors
    ///
    /// Fails with [`WeftError::ApiUsage`] when `count` is zero.
    fn columns(&self, ctx: &mut RunContext, count: usize) -> WeftResult<Vec<Container>>;
}

impl LayoutExt for Container {
    fn container(&self, ctx: &mut RunContext) -> Container {
        let form = current_form(Some(ctx), self);
        self.active(ctx).block(ctx, Block::vertical(), form)
    }

    fn columns(&self, ctx: &mut RunContext, count: usize) -> WeftResult<Vec<Container>> {
        if count == 0 {
            return Err(WeftError::ApiUsage(
                "At least one column is required.".to_string(),
            ));
        }
        let form = current_form(Some(ctx), self);
        let row = self
            .active(ctx)
            .block(ctx, Block::horizontal(), form.clone());
        Ok((0..count)
            .map(|_| row.block(ctx, Block::vertical(), form.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use weft_proto::BlockKind;
    use weft_runtime::RootContainer;

    fn fixture() -> (RunContext, Container) {
        (RunContext::new(), Container::new_root(RootContainer::Main))
    }

    #[test]
    fn test_container_creates_a_vertical_block() {
        let (mut ctx, main) = fixture();
        let child = main.container(&mut ctx);
        assert_eq!(child.path(), &[0, 0]);
        assert_eq!(ctx.deltas()[0].block().unwrap().kind, BlockKind::Vertical);
        assert!(child.form_data().is_none());
    }

    #[test]
    fn test_columns_share_a_horizontal_row() {
        let (mut ctx, main) = fixture();
        let cols = main.columns(&mut ctx, 3).unwrap();
        assert_eq!(cols.len(), 3);
        assert_eq!(ctx.deltas()[0].block().unwrap().kind, BlockKind::Horizontal);
        // Columns are children of the row, not of the invoking container.
        assert_eq!(cols[0].path(), &[0, 0, 0]);
        assert_eq!(cols[2].path(), &[0, 0, 2]);
    }

    #[test]
    fn test_zero_columns_is_an_error() {
        let (mut ctx, main) = fixture();
        assert!(matches!(
            main.columns(&mut ctx, 0),
            Err(WeftError::ApiUsage(_))
        ));
        assert!(ctx.deltas().is_empty());
    }

    #[test]
    fn test_blocks_created_in_scope_attach_to_the_open_block() {
        let (mut ctx, main) = fixture();
        let outer = main.container(&mut ctx);
        let inner = outer.scope(&mut ctx, |ctx| main.container(ctx));
        assert_eq!(inner.path(), &[0, 0, 0]);
    }
}
