//! Iterative walkers over resolved ctree items.
//!
//! [`walk`] visits a tree in pre-order with an explicit stack (no
//! recursion), so deep trees such as long `else if` chains do not grow the
//! call stack. Children of a node are resolved only when the node is
//! expanded, and are visited in the order given by
//! [`HxCItem::children`]: owned expressions first, then nested statements.
//!
//! The visitor decides how the traversal continues through
//! [`WalkControl`]:
//!
//! ```
//! use hxctree::ctree::CTreeItem;
//! use hxctree::ctype::HxCType;
//! use hxctree::registry::resolve;
//! use hxctree::walker::{walk, WalkControl};
//!
//! let mul = CTreeItem::binary(
//!     HxCType::CotMul,
//!     0x10,
//!     CTreeItem::num(0x10, 6),
//!     CTreeItem::var(0x14, 0),
//! );
//! let stmt = CTreeItem::expr_stmt(mul);
//!
//! let mut names = Vec::new();
//! walk(resolve(&stmt).unwrap(), |item, depth| {
//!     names.push((depth, item.kind_name()));
//!     Ok(WalkControl::Continue)
//! })
//! .unwrap();
//!
//! assert_eq!(
//!     names,
//!     [(0, "CStmtExpr"), (1, "CExprMul"), (2, "CExprNum"), (2, "CExprVar")]
//! );
//! ```
use crate::{citem::HxCItem, ctype::HxCType, utils::HxResult};

/// Decision taken by a visitor after seeing a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WalkControl {
    /// Visit the children of the node.
    #[default]
    Continue,
    /// Do not visit the children of the node, keep walking its siblings.
    SkipChildren,
    /// Stop the whole traversal.
    Stop,
}

/// Walks the tree rooted at `root` in pre-order.
///
/// The visitor receives each item with its depth (the root has depth 0).
/// Errors returned by the visitor, or raised while resolving children,
/// abort the traversal and are returned.
pub fn walk<'a, F>(root: HxCItem<'a>, mut visitor: F) -> HxResult<()>
where
    F: FnMut(&HxCItem<'a>, usize) -> HxResult<WalkControl>,
{
    let mut stack = vec![(root, 0usize)];

    while let Some((item, depth)) = stack.pop() {
        match visitor(&item, depth)? {
            WalkControl::Continue => {}
            WalkControl::SkipChildren => continue,
            WalkControl::Stop => break,
        }

        // Reversed so that the first child is popped first.
        let children = item.children()?;
        stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
    }

    Ok(())
}

/// Collects, in pre-order, every item of the tree matching `predicate`.
pub fn collect_items<'a, P>(root: HxCItem<'a>, mut predicate: P) -> HxResult<Vec<HxCItem<'a>>>
where
    P: FnMut(&HxCItem<'a>) -> bool,
{
    let mut found = Vec::new();
    let mut stack = vec![root];

    while let Some(item) = stack.pop() {
        let children = item.children()?;
        stack.extend(children.into_iter().rev());
        if predicate(&item) {
            found.push(item);
        }
    }

    Ok(found)
}

/// Collects every item of the tree whose type is one of `types`.
pub fn items_of_type<'a>(root: HxCItem<'a>, types: &[HxCType]) -> HxResult<Vec<HxCItem<'a>>> {
    collect_items(root, |item| {
        item.ctype().is_some_and(|ctype| types.contains(&ctype))
    })
}

/// Returns the first item, in pre-order, matching `predicate`.
pub fn find<'a, P>(root: HxCItem<'a>, mut predicate: P) -> HxResult<Option<HxCItem<'a>>>
where
    P: FnMut(&HxCItem<'a>) -> bool,
{
    let mut stack = vec![root];

    while let Some(item) = stack.pop() {
        if predicate(&item) {
            return Ok(Some(item));
        }
        let children = item.children()?;
        stack.extend(children.into_iter().rev());
    }

    Ok(None)
}

/// Number of items in the tree rooted at `root`.
pub fn count_items(root: HxCItem<'_>) -> HxResult<usize> {
    let mut count = 0;
    walk(root, |_, _| {
        count += 1;
        Ok(WalkControl::Continue)
    })?;
    Ok(count)
}
