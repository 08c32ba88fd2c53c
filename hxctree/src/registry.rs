//! Dispatch from a handle's tag to the wrapper of its concrete kind.
//!
//! Every concrete kind contributes a [`CItemRegistration`]. Kinds defined
//! by this crate are gathered from the kind tables of [`crate::cexpr`] and
//! [`crate::cstmt`]. Kinds defined elsewhere are collected through
//! `inventory` with [`register_citem!`](crate::register_citem) and take
//! over the tag of the built-in kind they specialize. The dispatcher itself
//! never names a kind.
//!
//! Registrations are validated when they enter a registry: a tag outside
//! the ctree tag space, a predicate answering for another tag or two kinds
//! claiming the same tag are rejected right away.
use std::{fmt, sync::LazyLock};

use log::{debug, trace};
use strum::IntoEnumIterator;

use crate::{
    citem::{AbstractCItem, CNode, HxCExpr, HxCItem, HxCStmt},
    ctype::{HxCType, Tag},
    raw::RawCItem,
    utils::{Error, HxResult, ItemClass},
};

/// Entry of the dispatch table for one concrete kind.
#[derive(Clone, Copy)]
pub struct CItemRegistration {
    /// Tag handled by the kind.
    pub tag: Tag,
    /// Name of the kind, used in diagnostics.
    pub name: &'static str,
    /// Builds the kind's wrapper around a handle.
    pub construct: for<'a> fn(CNode<'a>) -> HxCItem<'a>,
    /// The kind's [`is_handling_type`](crate::citem::CItemKind::is_handling_type).
    pub handles: fn(Tag) -> bool,
}
inventory::collect!(CItemRegistration);

impl fmt::Debug for CItemRegistration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CItemRegistration")
            .field("tag", &self.tag)
            .field("name", &self.name)
            .finish()
    }
}

/// Builds the [`CItemRegistration`] of a concrete kind.
///
/// The kind must be a type with a single lifetime parameter implementing
/// [`ConcreteCItem`](crate::citem::ConcreteCItem).
#[macro_export]
macro_rules! citem_registration {
    ($kind:ident) => {
        $crate::registry::CItemRegistration {
            tag: <$kind<'static> as $crate::citem::CItemKind>::TYPE_HANDLE,
            name: stringify!($kind),
            construct: {
                fn construct<'a>(node: $crate::citem::CNode<'a>) -> $crate::citem::HxCItem<'a> {
                    $crate::citem::ConcreteCItem::into_item(
                        <$kind<'a> as $crate::citem::ConcreteCItem<'a>>::wrap(node),
                    )
                }
                construct
            },
            handles: <$kind<'static> as $crate::citem::CItemKind>::is_handling_type,
        }
    };
}

/// Registers concrete kinds defined outside of this crate so that
/// [`DispatchRegistry::builtin`] picks them up.
///
/// A registered kind replaces the built-in kind of its tag. Registering two
/// kinds for the same tag makes the registry fail to build.
#[macro_export]
macro_rules! register_citem {
    ($($kind:ident),+ $(,)?) => {
        $(
            $crate::inventory::submit! {
                $crate::citem_registration!($kind)
            }
        )+
    };
}

/// Mapping from tag to the constructor of its concrete kind.
///
/// The table is dense over the ctree tag space, so resolution is a single
/// index. A registry is populated before any resolution happens and only
/// read afterwards.
pub struct DispatchRegistry {
    table: Vec<Option<CItemRegistration>>,
}

static GLOBAL: LazyLock<HxResult<DispatchRegistry>> = LazyLock::new(DispatchRegistry::builtin);

impl DispatchRegistry {
    /// Registry with no kind at all.
    pub fn empty() -> Self {
        Self {
            table: vec![None; HxCType::CIT_END as usize],
        }
    }

    /// Registry holding the kinds of this crate and every kind submitted
    /// with [`register_citem!`](crate::register_citem).
    pub fn builtin() -> HxResult<Self> {
        let mut registry =
            Self::from_registrations(crate::cexpr::kinds().chain(crate::cstmt::kinds()))?;

        let external = Self::from_registrations(
            inventory::iter::<CItemRegistration>.into_iter().copied(),
        )?;
        for registration in external.registrations() {
            if let Some(previous) = registry.replace(*registration)? {
                debug!(
                    "ctree kind `{}` replaces `{}` for tag {}",
                    registration.name, previous.name, registration.tag
                );
            }
        }

        debug!(
            "ctree dispatch registry built with {} kinds ({} kinds unsupported)",
            registry.len(),
            registry.missing_kinds().count()
        );
        Ok(registry)
    }

    pub fn from_registrations(
        registrations: impl IntoIterator<Item = CItemRegistration>,
    ) -> HxResult<Self> {
        let mut registry = Self::empty();
        for registration in registrations {
            registry.register(registration)?;
        }
        Ok(registry)
    }

    /// The process-wide registry, built on first use.
    pub fn try_global() -> HxResult<&'static DispatchRegistry> {
        GLOBAL.as_ref().map_err(Clone::clone)
    }

    /// The process-wide registry, built on first use.
    ///
    /// # Panics
    ///
    /// Panics if the registered kinds are inconsistent (see
    /// [`DispatchRegistry::register`]). This is a configuration error of the
    /// program, not a runtime condition.
    pub fn global() -> &'static DispatchRegistry {
        match DispatchRegistry::try_global() {
            Ok(registry) => registry,
            Err(err) => panic!("invalid ctree kind registration: {}", err),
        }
    }

    /// Adds a kind to the registry.
    ///
    /// Fails if the tag is outside of the ctree tag space, if the kind does
    /// not handle exactly its own tag, or if another kind already handles it.
    pub fn register(&mut self, registration: CItemRegistration) -> HxResult<()> {
        let index = self.validate(&registration)?;

        if let Some(existing) = &self.table[index] {
            return Err(Error::AmbiguousTag {
                tag: registration.tag,
                first: existing.name,
                second: registration.name,
            });
        }

        self.table[index] = Some(registration);
        Ok(())
    }

    /// Adds a kind to the registry, replacing the kind that handled its tag.
    /// Returns the replaced kind.
    ///
    /// The registration is validated as in [`DispatchRegistry::register`].
    pub fn replace(
        &mut self,
        registration: CItemRegistration,
    ) -> HxResult<Option<CItemRegistration>> {
        let index = self.validate(&registration)?;
        Ok(self.table[index].replace(registration))
    }

    /// Checks a registration against the tag space and returns its index in
    /// the table.
    fn validate(&self, registration: &CItemRegistration) -> HxResult<usize> {
        let CItemRegistration {
            tag, name, handles, ..
        } = *registration;

        let index = usize::try_from(tag.0)
            .ok()
            .filter(|index| *index < self.table.len())
            .ok_or(Error::InvalidTag { tag, name })?;

        let claimed = HxCType::iter().filter(|ctype| handles(ctype.tag())).count();
        if !handles(tag) || handles(Tag::NONE) || claimed != 1 {
            return Err(Error::InconsistentRegistration { tag, name });
        }

        Ok(index)
    }

    pub fn lookup(&self, tag: Tag) -> Option<&CItemRegistration> {
        usize::try_from(tag.0)
            .ok()
            .and_then(|index| self.table.get(index))
            .and_then(Option::as_ref)
    }

    /// Returns true if some kind handles `tag`.
    pub fn handles(&self, tag: Tag) -> bool {
        self.lookup(tag).is_some()
    }

    pub fn registrations(&self) -> impl Iterator<Item = &CItemRegistration> {
        self.table.iter().flatten()
    }

    /// Number of registered kinds.
    pub fn len(&self) -> usize {
        self.registrations().count()
    }

    pub fn is_empty(&self) -> bool {
        self.registrations().next().is_none()
    }

    /// Kinds of the ctree tag space with no registered wrapper.
    pub fn missing_kinds(&self) -> impl Iterator<Item = HxCType> + '_ {
        HxCType::iter().filter(|ctype| !self.handles(ctype.tag()))
    }

    /// Resolves a handle into the wrapper of its concrete kind.
    ///
    /// Fails with [`Error::UnsupportedTag`] if no kind handles the handle's
    /// tag, and with [`Error::ItemClassMismatch`] if the handle claims to be
    /// an expression while its tag denotes a statement (or the reverse).
    pub fn resolve<'a>(&'a self, item: &'a dyn RawCItem) -> HxResult<HxCItem<'a>> {
        let tag = item.op();
        let Some(registration) = self.lookup(tag) else {
            debug!("no ctree kind handles {}", AbstractCItem::new(item));
            return Err(Error::UnsupportedTag { tag });
        };

        if item.is_expr() != tag.is_expr() {
            return Err(Error::ItemClassMismatch {
                tag,
                ea: item.ea(),
                is_expr: item.is_expr(),
            });
        }

        trace!(
            "resolving tag {} at 0x{:X} as {}",
            tag,
            item.ea(),
            registration.name
        );
        let resolved = (registration.construct)(CNode::new(item, self));
        debug_assert_eq!(
            resolved.is_expr(),
            tag.is_expr(),
            "kind `{}` does not match the class of its tag",
            registration.name
        );
        Ok(resolved)
    }

    /// Resolves a handle that must be an expression.
    pub fn resolve_expr<'a>(&'a self, item: &'a dyn RawCItem) -> HxResult<HxCExpr<'a>> {
        match self.resolve(item)? {
            HxCItem::Expr(expr) => Ok(expr),
            HxCItem::Stmt(stmt) => Err(Error::UnexpectedItem {
                expected: ItemClass::Expression,
                tag: stmt.tag(),
                ea: stmt.ea(),
            }),
        }
    }

    /// Resolves a handle that must be a statement.
    pub fn resolve_stmt<'a>(&'a self, item: &'a dyn RawCItem) -> HxResult<HxCStmt<'a>> {
        match self.resolve(item)? {
            HxCItem::Stmt(stmt) => Ok(stmt),
            HxCItem::Expr(expr) => Err(Error::UnexpectedItem {
                expected: ItemClass::Statement,
                tag: expr.tag(),
                ea: expr.ea(),
            }),
        }
    }
}

impl Default for DispatchRegistry {
    fn default() -> Self {
        Self::empty()
    }
}

/// Resolves a handle with the process-wide registry.
///
/// This is the entry point turning a raw handle into a typed, recursively
/// walkable node. Children of the returned item are resolved with the same
/// registry.
pub fn resolve<'a>(item: &'a dyn RawCItem) -> HxResult<HxCItem<'a>> {
    DispatchRegistry::try_global()?.resolve(item)
}
