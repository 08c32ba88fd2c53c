//! Expression wrappers (`cexpr_t`).
//!
//! [`CExpr`] is the capability set of every expression: on top of the node
//! base it exposes [`CExpr::ops`], the direct operand expressions in a
//! fixed, kind-defined order. Concrete kinds are grouped by shape:
//!
//! - [`leaf`]: literals, variables, helpers... (no operand);
//! - [`operators`]: unary, binary, ternary, member access and calls.
use std::fmt;

use crate::{
    citem::{CItem, CNode, ConcreteCItem, HxCExpr},
    registry::CItemRegistration,
    utils::HxResult,
};

pub mod leaf;
pub mod operators;

pub use leaf::*;
pub use operators::*;

/// Operand list of an expression.
pub type CExprList<'a> = Vec<HxCExpr<'a>>;

/// Capability set of ctree expressions.
pub trait CExpr<'a>: CItem<'a> {
    /// Handle and registry backing this expression.
    fn node(&self) -> CNode<'a>;

    /// Direct operand expressions of this expression.
    ///
    /// The order is fixed by the kind: left before right for binary
    /// operators, condition before branches for the ternary operator,
    /// callee before arguments for calls. Leaf kinds have no operand.
    fn ops(&self) -> HxResult<CExprList<'a>> {
        Ok(CExprList::new())
    }

    /// Kind-specific payload appended to the rendering (e.g. `value=2`).
    fn summary(&self) -> Option<String> {
        None
    }
}

impl<'a> dyn CExpr<'a> + 'a {
    /// Returns this expression as the concrete kind `K`, if it is one.
    pub fn downcast<K: ConcreteCItem<'a>>(&self) -> Option<K> {
        K::is_handling_type(self.tag()).then(|| K::wrap(self.node()))
    }
}

impl fmt::Debug for dyn CExpr<'_> + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Registrations of every expression kind of this crate.
pub(crate) fn kinds() -> impl Iterator<Item = CItemRegistration> {
    [
        leaf::KINDS,
        operators::UNARY_KINDS,
        operators::BINARY_KINDS,
        operators::MEMBER_KINDS,
        operators::OTHER_KINDS,
    ]
    .into_iter()
    .flatten()
    .copied()
}
