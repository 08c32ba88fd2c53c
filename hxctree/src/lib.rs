//! Typed object model over a decompiler's ctree.
//!
//! The decompiler (the collaborator) exposes its AST as opaque handles
//! ([`raw::RawCItem`]) carrying an address, an integer tag and a
//! kind-specific payload. This crate turns a handle into the typed wrapper
//! of its kind ([`registry::resolve`]) and exposes a uniform traversal
//! contract over the tree: expressions expose their operands
//! ([`cexpr::CExpr::ops`]), statements their nested statements and owned
//! expressions ([`cstmt::CStmt::st_childs`], [`cstmt::CStmt::expr_childs`]).
//!
//! Children are resolved lazily, one dispatch per access, and wrappers only
//! borrow the collaborator's nodes.
//!
//! ```
//! use hxctree::ctree::CTreeItem;
//! use hxctree::ctype::HxCType;
//! use hxctree::registry::resolve;
//!
//! let add = CTreeItem::binary(
//!     HxCType::CotAdd,
//!     0x1000,
//!     CTreeItem::num(0x1000, 2),
//!     CTreeItem::num(0x1004, 3),
//! );
//! let item = resolve(&add).unwrap();
//! assert!(item.is_expr());
//! assert_eq!(item.children().unwrap().len(), 2);
//! ```

/// Generates the wrapper struct of a concrete kind and the boilerplate
/// shared by every kind: tag association, construction, node base and
/// rendering. The kind-specific child accessors are implemented next to
/// each invocation.
macro_rules! citem_kind {
    (expr $(#[$meta:meta])* $name:ident => $ctype:ident) => {
        citem_kind!(@kind $(#[$meta])* $name => $ctype, Expr, fmt_cexpr);
    };
    (stmt $(#[$meta:meta])* $name:ident => $ctype:ident) => {
        citem_kind!(@kind $(#[$meta])* $name => $ctype, Stmt, fmt_cstmt);
    };
    (@kind $(#[$meta:meta])* $name:ident => $ctype:ident, $variant:ident, $fmt:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy)]
        pub struct $name<'a> {
            node: $crate::citem::CNode<'a>,
        }

        impl $crate::citem::CItemKind for $name<'_> {
            const TYPE_HANDLE: $crate::ctype::Tag = $crate::ctype::HxCType::$ctype.tag();
        }

        impl<'a> $crate::citem::ConcreteCItem<'a> for $name<'a> {
            fn wrap(node: $crate::citem::CNode<'a>) -> Self {
                Self { node }
            }

            fn into_item(self) -> $crate::citem::HxCItem<'a> {
                $crate::citem::HxCItem::$variant(Box::new(self))
            }
        }

        impl<'a> $crate::citem::CItem<'a> for $name<'a> {
            fn raw(&self) -> &'a dyn $crate::raw::RawCItem {
                self.node.raw()
            }

            fn kind_name(&self) -> &'static str {
                stringify!($name)
            }

            fn create_child(
                &self,
                item: &'a dyn $crate::raw::RawCItem,
            ) -> $crate::utils::HxResult<$crate::citem::HxCItem<'a>> {
                self.node.resolve(item)
            }
        }

        impl std::fmt::Display for $name<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                $crate::citem::$fmt(self, f)
            }
        }

        impl std::fmt::Debug for $name<'_> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(self, f)
            }
        }
    };
}

pub mod cexpr;
pub mod cfunc;
pub mod citem;
pub mod cstmt;
pub mod ctree;
pub mod ctype;
pub mod raw;
pub mod registry;
#[cfg(any(test, feature = "test-utils"))]
pub mod tests_utils;
pub mod utils;
pub mod walker;

pub extern crate inventory;

pub use citem::{CItem, HxCExpr, HxCItem, HxCStmt};
pub use ctype::{HxCType, Tag};
pub use registry::{DispatchRegistry, resolve};
pub use utils::{Error, HxResult};
