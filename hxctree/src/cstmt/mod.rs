//! Statement wrappers (`cinsn_t`).
//!
//! A statement can own nested statements ([`CStmt::st_childs`]) and
//! expressions ([`CStmt::expr_childs`]). Expressions nested inside child
//! statements are not reported by their parent.
use std::fmt;

use crate::{
    cexpr::CExprList,
    citem::{CItem, CNode, ConcreteCItem, HxCStmt},
    registry::CItemRegistration,
    utils::HxResult,
};

pub mod control;
pub mod simple;

pub use control::*;
pub use simple::*;

/// Nested statement list of a statement.
pub type CStmtList<'a> = Vec<HxCStmt<'a>>;

/// Capability set of ctree statements.
pub trait CStmt<'a>: CItem<'a> {
    /// Handle and registry backing this statement.
    fn node(&self) -> CNode<'a>;

    /// Statements directly nested in this one (body of a loop, branches of
    /// an `if`...). Empty for non-recursive statements.
    fn st_childs(&self) -> HxResult<CStmtList<'a>> {
        Ok(CStmtList::new())
    }

    /// Expressions directly owned by this statement (condition of a loop,
    /// returned value...).
    fn expr_childs(&self) -> HxResult<CExprList<'a>> {
        Ok(CExprList::new())
    }

    /// Kind-specific payload appended to the rendering.
    fn summary(&self) -> Option<String> {
        None
    }
}

impl<'a> dyn CStmt<'a> + 'a {
    /// Returns this statement as the concrete kind `K`, if it is one.
    pub fn downcast<K: ConcreteCItem<'a>>(&self) -> Option<K> {
        K::is_handling_type(self.tag()).then(|| K::wrap(self.node()))
    }
}

impl fmt::Debug for dyn CStmt<'_> + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Registrations of every statement kind of this crate.
pub(crate) fn kinds() -> impl Iterator<Item = CItemRegistration> {
    [simple::KINDS, control::KINDS]
        .into_iter()
        .flatten()
        .copied()
}
