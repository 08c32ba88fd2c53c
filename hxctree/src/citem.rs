//! Capabilities shared by every ctree node.
//!
//! [`CItem`] is the node base implemented by expressions and statements
//! alike. [`CItemKind`] carries the type-level association between a
//! concrete kind and the tag it handles, and [`ConcreteCItem`] lets the
//! dispatch registry build a kind from a handle.
use std::fmt;

use strum::{EnumIs, EnumTryAs};

use crate::{
    cexpr::CExpr,
    cstmt::CStmt,
    ctype::{HxCType, Tag},
    raw::{Address, RawCItem},
    registry::DispatchRegistry,
    utils::{Error, HxResult},
};

/// A resolved expression of any concrete kind.
pub type HxCExpr<'a> = Box<dyn CExpr<'a> + 'a>;

/// A resolved statement of any concrete kind.
pub type HxCStmt<'a> = Box<dyn CStmt<'a> + 'a>;

/// Node base shared by every ctree item.
///
/// Every accessor reads through the underlying handle, nothing is cached.
pub trait CItem<'a>: fmt::Display {
    /// The collaborator's handle wrapped by this item.
    fn raw(&self) -> &'a dyn RawCItem;

    /// Name of the concrete kind (e.g. `CExprAdd`).
    fn kind_name(&self) -> &'static str;

    /// Address of the item. This may be [`BADADDR`](crate::raw::BADADDR)
    /// if the item has no equivalent address.
    fn ea(&self) -> Address {
        self.raw().ea()
    }

    /// Returns true if this item is an expression.
    fn is_expr(&self) -> bool {
        self.raw().is_expr()
    }

    /// Returns true if this item is a statement.
    fn is_statement(&self) -> bool {
        !self.is_expr()
    }

    /// Raw tag of the item.
    fn tag(&self) -> Tag {
        self.raw().op()
    }

    fn ctype(&self) -> Option<HxCType> {
        self.tag().ctype()
    }

    /// Builds the wrapper of a child handle of this item.
    ///
    /// Concrete kinds dispatch through the registry they were resolved with.
    /// The abstract base has no dispatch context and fails.
    fn create_child(&self, item: &'a dyn RawCItem) -> HxResult<HxCItem<'a>> {
        let _ = item;
        Err(Error::NotImplemented {
            method: "create_child",
            kind: self.kind_name(),
        })
    }
}

/// Type-level association between a kind and the tag it handles.
pub trait CItemKind {
    /// Tag handled by this kind. Abstract kinds keep [`Tag::NONE`].
    const TYPE_HANDLE: Tag = Tag::NONE;

    /// Returns true if this kind is the canonical wrapper for `tag`.
    ///
    /// Concrete kinds answer true for exactly their own tag, abstract kinds
    /// answer false for every tag.
    fn is_handling_type(tag: Tag) -> bool {
        Self::TYPE_HANDLE != Tag::NONE && Self::TYPE_HANDLE == tag
    }
}

/// A kind the dispatch registry can build.
pub trait ConcreteCItem<'a>: CItemKind + CItem<'a> + Sized {
    fn wrap(node: CNode<'a>) -> Self;

    fn into_item(self) -> HxCItem<'a>;
}

/// Non-owning view over one handle, bound to the registry it was resolved
/// through so that children are resolved the same way.
#[derive(Clone, Copy)]
pub struct CNode<'a> {
    item: &'a dyn RawCItem,
    registry: &'a DispatchRegistry,
}

impl<'a> CNode<'a> {
    pub fn new(item: &'a dyn RawCItem, registry: &'a DispatchRegistry) -> Self {
        Self { item, registry }
    }

    #[inline]
    pub fn raw(&self) -> &'a dyn RawCItem {
        self.item
    }

    #[inline]
    pub fn registry(&self) -> &'a DispatchRegistry {
        self.registry
    }

    pub fn resolve(&self, item: &'a dyn RawCItem) -> HxResult<HxCItem<'a>> {
        self.registry.resolve(item)
    }

    pub fn expr(&self, item: &'a dyn RawCItem) -> HxResult<HxCExpr<'a>> {
        self.registry.resolve_expr(item)
    }

    pub fn stmt(&self, item: &'a dyn RawCItem) -> HxResult<HxCStmt<'a>> {
        self.registry.resolve_stmt(item)
    }

    /// Error reported when the handle lacks `field`.
    pub fn missing(&self, kind: &'static str, field: &'static str) -> Error {
        Error::MissingField {
            kind,
            field,
            ea: self.item.ea(),
        }
    }

    pub fn required_expr(
        &self,
        kind: &'static str,
        field: &'static str,
        item: Option<&'a dyn RawCItem>,
    ) -> HxResult<HxCExpr<'a>> {
        self.expr(item.ok_or_else(|| self.missing(kind, field))?)
    }

    pub fn required_stmt(
        &self,
        kind: &'static str,
        field: &'static str,
        item: Option<&'a dyn RawCItem>,
    ) -> HxResult<HxCStmt<'a>> {
        self.stmt(item.ok_or_else(|| self.missing(kind, field))?)
    }

    pub fn optional_expr(&self, item: Option<&'a dyn RawCItem>) -> HxResult<Option<HxCExpr<'a>>> {
        item.map(|item| self.expr(item)).transpose()
    }

    pub fn optional_stmt(&self, item: Option<&'a dyn RawCItem>) -> HxResult<Option<HxCStmt<'a>>> {
        item.map(|item| self.stmt(item)).transpose()
    }
}

impl fmt::Debug for CNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CNode")
            .field("ea", &format_args!("0x{:X}", self.item.ea()))
            .field("tag", &self.item.op())
            .finish()
    }
}

/// The abstract node base as a value: address, tag and rendering over a
/// handle, without any dispatch context.
#[derive(Clone, Copy)]
pub struct AbstractCItem<'a> {
    item: &'a dyn RawCItem,
}

impl<'a> AbstractCItem<'a> {
    pub fn new(item: &'a dyn RawCItem) -> Self {
        Self { item }
    }
}

impl CItemKind for AbstractCItem<'_> {}

impl<'a> CItem<'a> for AbstractCItem<'a> {
    fn raw(&self) -> &'a dyn RawCItem {
        self.item
    }

    fn kind_name(&self) -> &'static str {
        "AbstractCItem"
    }
}

impl fmt::Display for AbstractCItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(ea=0x{:X})", self.kind_name(), self.ea())
    }
}

/// A resolved ctree item, either an expression or a statement.
#[derive(EnumIs, EnumTryAs)]
pub enum HxCItem<'a> {
    Expr(HxCExpr<'a>),
    Stmt(HxCStmt<'a>),
}

impl<'a> HxCItem<'a> {
    pub fn raw(&self) -> &'a dyn RawCItem {
        match self {
            HxCItem::Expr(expr) => expr.raw(),
            HxCItem::Stmt(stmt) => stmt.raw(),
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self {
            HxCItem::Expr(expr) => expr.kind_name(),
            HxCItem::Stmt(stmt) => stmt.kind_name(),
        }
    }

    pub fn ea(&self) -> Address {
        self.raw().ea()
    }

    pub fn tag(&self) -> Tag {
        self.raw().op()
    }

    pub fn ctype(&self) -> Option<HxCType> {
        self.tag().ctype()
    }

    /// Same as [`HxCItem::is_stmt`], named after the node base accessor.
    pub fn is_statement(&self) -> bool {
        self.is_stmt()
    }

    /// Direct children of the item.
    ///
    /// For expressions these are the operands. For statements, the owned
    /// expressions come first, then the nested statements.
    pub fn children(&self) -> HxResult<Vec<HxCItem<'a>>> {
        match self {
            HxCItem::Expr(expr) => Ok(expr.ops()?.into_iter().map(HxCItem::Expr).collect()),
            HxCItem::Stmt(stmt) => {
                let mut children: Vec<_> =
                    stmt.expr_childs()?.into_iter().map(HxCItem::Expr).collect();
                children.extend(stmt.st_childs()?.into_iter().map(HxCItem::Stmt));
                Ok(children)
            }
        }
    }
}

impl fmt::Display for HxCItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HxCItem::Expr(expr) => write!(f, "{}", expr),
            HxCItem::Stmt(stmt) => write!(f, "{}", stmt),
        }
    }
}

impl fmt::Debug for HxCItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

fn fmt_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: HxResult<Vec<T>>) -> fmt::Result {
    match items {
        Ok(items) => {
            write!(f, "[")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", item)?;
            }
            write!(f, "]")
        }
        Err(err) => write!(f, "<{}>", err),
    }
}

/// Renders `Kind(ea=0x..., ops=[...])`, followed by the kind summary.
pub(crate) fn fmt_cexpr<'a>(expr: &dyn CExpr<'a>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}(ea=0x{:X}, ops=", expr.kind_name(), expr.ea())?;
    fmt_list(f, expr.ops())?;
    if let Some(summary) = expr.summary() {
        write!(f, ", {}", summary)?;
    }
    write!(f, ")")
}

/// Renders `Kind(ea=0x..., st_childs=[...], expr_childs=[...])`, followed by
/// the kind summary.
pub(crate) fn fmt_cstmt<'a>(stmt: &dyn CStmt<'a>, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}(ea=0x{:X}, st_childs=", stmt.kind_name(), stmt.ea())?;
    fmt_list(f, stmt.st_childs())?;
    write!(f, ", expr_childs=")?;
    fmt_list(f, stmt.expr_childs())?;
    if let Some(summary) = stmt.summary() {
        write!(f, ", {}", summary)?;
    }
    write!(f, ")")
}
