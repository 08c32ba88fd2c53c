//! Kinds defined outside of the crate and submitted with `register_citem!`.
use std::fmt;

use hxctree::{
    CItem, DispatchRegistry, HxCItem, HxCType, HxResult, Tag,
    cexpr::{CExpr, CExprHelper},
    citem::{CItemKind, CNode, ConcreteCItem},
    ctree::CTreeItem,
    raw::RawCItem,
    register_citem, resolve,
};
use strum::EnumCount;

/// Helper calls whose name is known to be a compiler intrinsic.
#[derive(Clone, Copy)]
struct Intrinsic<'a> {
    node: CNode<'a>,
}

impl Intrinsic<'_> {
    fn is_rotation(&self) -> bool {
        self.node
            .raw()
            .helper()
            .is_some_and(|name| name.starts_with("__RO"))
    }
}

impl CItemKind for Intrinsic<'_> {
    const TYPE_HANDLE: Tag = HxCType::CotHelper.tag();
}

impl<'a> ConcreteCItem<'a> for Intrinsic<'a> {
    fn wrap(node: CNode<'a>) -> Self {
        Self { node }
    }

    fn into_item(self) -> HxCItem<'a> {
        HxCItem::Expr(Box::new(self))
    }
}

impl<'a> CItem<'a> for Intrinsic<'a> {
    fn raw(&self) -> &'a dyn RawCItem {
        self.node.raw()
    }

    fn kind_name(&self) -> &'static str {
        "Intrinsic"
    }

    fn create_child(&self, item: &'a dyn RawCItem) -> HxResult<HxCItem<'a>> {
        self.node.resolve(item)
    }
}

impl<'a> CExpr<'a> for Intrinsic<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }

    fn summary(&self) -> Option<String> {
        Some(format!("rotation={}", self.is_rotation()))
    }
}

impl fmt::Display for Intrinsic<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Intrinsic(ea=0x{:X}, {})", self.ea(), self.summary().unwrap_or_default())
    }
}

register_citem!(Intrinsic);

#[test]
fn submitted_kind_replaces_builtin_kind() {
    let registry = DispatchRegistry::global();
    assert_eq!(registry.len(), HxCType::COUNT);
    assert_eq!(
        registry.lookup(HxCType::CotHelper.tag()).map(|registration| registration.name),
        Some("Intrinsic")
    );

    let handle = CTreeItem::helper(0x10, "__ROL4__");
    let item = resolve(&handle).unwrap();
    assert_eq!(item.kind_name(), "Intrinsic");
    assert_eq!(item.to_string(), "Intrinsic(ea=0x10, rotation=true)");

    let expr = item.try_as_expr().unwrap();
    let intrinsic = expr.downcast::<Intrinsic>().unwrap();
    assert!(intrinsic.is_rotation());

    // Tag-based downcast still gives access to the built-in accessors.
    let helper = expr.downcast::<CExprHelper>().unwrap();
    assert_eq!(helper.name().unwrap(), "__ROL4__");
}

#[test]
fn children_resolve_through_submitted_kind() {
    let handle = CTreeItem::call(
        0x20,
        CTreeItem::helper(0x20, "__ROR8__"),
        vec![CTreeItem::var(0x24, 0), CTreeItem::num(0x28, 3)],
    );
    let item = resolve(&handle).unwrap();
    let names: Vec<_> = item
        .children()
        .unwrap()
        .iter()
        .map(HxCItem::kind_name)
        .collect();
    assert_eq!(names, ["Intrinsic", "CExprVar", "CExprNum"]);
}

#[test]
fn explicit_registry_keeps_builtin_kind() {
    let registry = DispatchRegistry::from_registrations(
        DispatchRegistry::global()
            .registrations()
            .copied()
            .filter(|registration| registration.tag != HxCType::CotHelper.tag())
            .chain([hxctree::citem_registration!(CExprHelper)]),
    )
    .unwrap();

    let handle = CTreeItem::helper(0x10, "__ROL4__");
    assert_eq!(registry.resolve(&handle).unwrap().kind_name(), "CExprHelper");
}
