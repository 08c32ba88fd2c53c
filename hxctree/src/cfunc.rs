//! Decompiled function: entry point of a ctree.
use std::fmt;

use crate::{
    citem::{HxCItem, HxCStmt},
    ctype::HxCType,
    raw::{Address, RawCFunc},
    registry::DispatchRegistry,
    utils::HxResult,
    walker::{self, WalkControl},
};

/// A decompiled function, giving access to its typed ctree.
///
/// Like the node wrappers, this only borrows the collaborator's function:
/// the ctree is resolved again on every access.
#[derive(Clone, Copy)]
pub struct HxCFunc<'a> {
    func: &'a dyn RawCFunc,
    registry: &'a DispatchRegistry,
}

impl<'a> HxCFunc<'a> {
    /// Wraps a function, resolving its tree with the process-wide registry.
    pub fn new(func: &'a dyn RawCFunc) -> HxResult<Self> {
        Ok(Self::with_registry(func, DispatchRegistry::try_global()?))
    }

    pub fn with_registry(func: &'a dyn RawCFunc, registry: &'a DispatchRegistry) -> Self {
        Self { func, registry }
    }

    /// Entry address of the function.
    pub fn ea(&self) -> Address {
        self.func.entry_ea()
    }

    pub fn name(&self) -> &'a str {
        self.func.name()
    }

    pub fn registry(&self) -> &'a DispatchRegistry {
        self.registry
    }

    /// Root statement of the function, usually a block.
    pub fn root_node(&self) -> HxResult<HxCStmt<'a>> {
        self.registry.resolve_stmt(self.func.body())
    }

    fn root_item(&self) -> HxResult<HxCItem<'a>> {
        self.root_node().map(HxCItem::Stmt)
    }

    /// Walks the whole ctree of the function, see [`walker::walk`].
    pub fn walk<F>(&self, visitor: F) -> HxResult<()>
    where
        F: FnMut(&HxCItem<'a>, usize) -> HxResult<WalkControl>,
    {
        walker::walk(self.root_item()?, visitor)
    }

    /// Every item of the function whose type is one of `types`, in
    /// pre-order.
    pub fn items_of_type(&self, types: &[HxCType]) -> HxResult<Vec<HxCItem<'a>>> {
        walker::items_of_type(self.root_item()?, types)
    }

    /// First item of the function matching `predicate`.
    pub fn find<P>(&self, predicate: P) -> HxResult<Option<HxCItem<'a>>>
    where
        P: FnMut(&HxCItem<'a>) -> bool,
    {
        walker::find(self.root_item()?, predicate)
    }

    /// Number of items in the function's ctree, root included.
    pub fn count_items(&self) -> HxResult<usize> {
        walker::count_items(self.root_item()?)
    }
}

impl fmt::Display for HxCFunc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HxCFunc(name={}, ea=0x{:X})", self.name(), self.ea())
    }
}

impl fmt::Debug for HxCFunc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
