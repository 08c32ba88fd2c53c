use hxctree::{
    CItem, DispatchRegistry, Error, HxCType, Tag,
    cexpr::{CExprAdd, CExprNum},
    citem::{AbstractCItem, CItemKind},
    citem_registration,
    ctree::CTreeItem,
    cstmt::CStmtIf,
    raw::{Address, RawCItem},
    registry::CItemRegistration,
    resolve,
    tests_utils::{example_add, sample_item},
};
use strum::{EnumCount, IntoEnumIterator};

#[test]
fn every_tag_has_exactly_one_kind() {
    let registry = DispatchRegistry::global();

    assert_eq!(registry.len(), HxCType::COUNT);
    assert_eq!(registry.missing_kinds().count(), 0);

    for ctype in HxCType::iter() {
        let registration = registry
            .lookup(ctype.tag())
            .unwrap_or_else(|| panic!("no kind for {}", ctype.name()));
        assert_eq!(registration.tag, ctype.tag());
        assert!((registration.handles)(ctype.tag()));

        let claimed: Vec<_> = registry
            .registrations()
            .filter(|registration| (registration.handles)(ctype.tag()))
            .collect();
        assert_eq!(claimed.len(), 1, "{} claimed {} times", ctype.name(), claimed.len());
    }
}

#[test]
fn resolved_item_keeps_tag_and_class() {
    for ctype in HxCType::iter() {
        let handle = sample_item(ctype);
        let item = resolve(&handle).unwrap();

        assert_eq!(item.tag(), handle.op());
        assert_eq!(item.ctype(), Some(ctype));
        assert_eq!(item.ea(), handle.ea());
        assert_eq!(item.is_expr(), handle.op().0 <= HxCType::COT_LAST);
        assert_eq!(item.is_statement(), !item.is_expr());
    }
}

#[test]
fn kind_names_follow_the_tag_class() {
    for ctype in HxCType::iter() {
        let handle = sample_item(ctype);
        let item = resolve(&handle).unwrap();
        let prefix = if ctype.is_expr() { "CExpr" } else { "CStmt" };
        assert!(
            item.kind_name().starts_with(prefix),
            "{} resolved as {}",
            ctype.name(),
            item.kind_name()
        );
    }
}

#[test]
fn unknown_tag_is_unsupported() {
    let handle = CTreeItem::leaf(Tag(200), 0x10);
    let err = resolve(&handle).unwrap_err();
    assert_eq!(err, Error::UnsupportedTag { tag: Tag(200) });

    let handle = CTreeItem::leaf(Tag(HxCType::CIT_END), 0x10);
    assert!(resolve(&handle).unwrap_err().is_unsupported_tag());
}

#[test]
fn empty_registry_supports_nothing() {
    let registry = DispatchRegistry::empty();
    assert!(registry.is_empty());
    assert_eq!(registry.missing_kinds().count(), HxCType::COUNT);

    let handle = example_add();
    assert_eq!(
        registry.resolve(&handle).unwrap_err(),
        Error::UnsupportedTag {
            tag: HxCType::CotAdd.tag()
        }
    );
}

#[test]
fn duplicate_kind_is_ambiguous() {
    let mut registry = DispatchRegistry::builtin().unwrap();
    let err = registry.register(citem_registration!(CExprAdd)).unwrap_err();
    assert_eq!(
        err,
        Error::AmbiguousTag {
            tag: HxCType::CotAdd.tag(),
            first: "CExprAdd",
            second: "CExprAdd",
        }
    );
}

#[test]
fn registration_must_handle_only_its_tag() {
    let base = citem_registration!(CExprAdd);

    let greedy = CItemRegistration {
        handles: |_| true,
        ..base
    };
    let err = DispatchRegistry::empty().register(greedy).unwrap_err();
    assert!(err.is_inconsistent_registration());

    let blind = CItemRegistration {
        handles: |_| false,
        ..base
    };
    let err = DispatchRegistry::empty().register(blind).unwrap_err();
    assert_eq!(
        err,
        Error::InconsistentRegistration {
            tag: HxCType::CotAdd.tag(),
            name: "CExprAdd"
        }
    );
}

#[test]
fn registration_outside_tag_space_is_invalid() {
    let base = citem_registration!(CExprAdd);
    for tag in [Tag::NONE, Tag(HxCType::CIT_END), Tag(1000)] {
        let registration = CItemRegistration { tag, ..base };
        let err = DispatchRegistry::empty().register(registration).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidTag {
                tag,
                name: "CExprAdd"
            }
        );
    }
}

#[test]
fn replace_returns_previous_kind() {
    let mut registry = DispatchRegistry::from_registrations([citem_registration!(CExprAdd)]).unwrap();
    assert_eq!(registry.len(), 1);

    let previous = registry.replace(citem_registration!(CExprAdd)).unwrap();
    assert_eq!(previous.map(|registration| registration.name), Some("CExprAdd"));

    let previous = registry.replace(citem_registration!(CExprNum)).unwrap();
    assert!(previous.is_none());
    assert_eq!(registry.len(), 2);
}

#[test]
fn partial_registry_fails_on_missing_child_kind() {
    let registry = DispatchRegistry::from_registrations([citem_registration!(CExprAdd)]).unwrap();
    let handle = example_add();

    let item = registry.resolve(&handle).unwrap();
    assert_eq!(item.kind_name(), "CExprAdd");
    assert_eq!(
        item.children().unwrap_err(),
        Error::UnsupportedTag {
            tag: HxCType::CotNum.tag()
        }
    );
}

#[test]
fn type_handles_are_exclusive() {
    assert_eq!(CExprAdd::TYPE_HANDLE, HxCType::CotAdd.tag());
    assert!(CExprAdd::is_handling_type(HxCType::CotAdd.tag()));
    assert!(!CExprAdd::is_handling_type(HxCType::CotSub.tag()));
    assert!(CStmtIf::is_handling_type(HxCType::CitIf.tag()));
    assert!(!CStmtIf::is_handling_type(Tag::NONE));

    assert_eq!(AbstractCItem::TYPE_HANDLE, Tag::NONE);
    for ctype in HxCType::iter() {
        assert!(!AbstractCItem::is_handling_type(ctype.tag()));
    }
    assert!(!AbstractCItem::is_handling_type(Tag::NONE));
}

#[test]
fn abstract_item_cannot_create_children() {
    let handle = example_add();
    let item = AbstractCItem::new(&handle);

    assert_eq!(item.ea(), 0x1000);
    assert_eq!(item.tag(), HxCType::CotAdd.tag());
    assert!(item.is_expr());
    assert_eq!(item.to_string(), "AbstractCItem(ea=0x1000)");

    let child = handle.x().unwrap();
    assert_eq!(
        item.create_child(child).unwrap_err(),
        Error::NotImplemented {
            method: "create_child",
            kind: "AbstractCItem"
        }
    );
}

#[test]
fn concrete_item_creates_children() {
    let handle = example_add();
    let item = resolve(&handle).unwrap();
    let add = item.try_as_expr().unwrap();

    let child = add.create_child(handle.y().unwrap()).unwrap();
    assert_eq!(child.kind_name(), "CExprNum");
    assert_eq!(child.ea(), 0x1004);
}

/// Handle whose expression flag contradicts its tag.
struct Inconsistent {
    op: Tag,
}

impl RawCItem for Inconsistent {
    fn ea(&self) -> Address {
        0x42
    }

    fn op(&self) -> Tag {
        self.op
    }

    fn is_expr(&self) -> bool {
        !self.op.is_expr()
    }
}

#[test]
fn class_mismatch_is_reported() {
    for ctype in [HxCType::CotNum, HxCType::CitBreak] {
        let handle = Inconsistent { op: ctype.tag() };
        assert_eq!(
            resolve(&handle).unwrap_err(),
            Error::ItemClassMismatch {
                tag: ctype.tag(),
                ea: 0x42,
                is_expr: !ctype.is_expr(),
            }
        );
    }
}

#[test]
fn tag_rendering() {
    assert_eq!(HxCType::CotAdd.tag().to_string(), "CotAdd (35)");
    assert_eq!(Tag(200).to_string(), "200");
    assert_eq!(HxCType::CotAdd.description(), "x + y");
    assert_eq!(HxCType::from_tag(Tag(73)), Some(HxCType::CitIf));
    assert_eq!(HxCType::from_tag(Tag::NONE), None);
    assert_eq!(HxCType::COT_LAST, 69);
    assert_eq!(HxCType::CIT_END, 83);
}

#[test]
fn downcast_requires_matching_kind() {
    let handle = example_add();
    let item = resolve(&handle).unwrap();
    let expr = item.try_as_expr().unwrap();

    let add = expr.downcast::<CExprAdd>().unwrap();
    assert_eq!(add.x().unwrap().kind_name(), "CExprNum");
    assert!(expr.downcast::<CExprNum>().is_none());

    let rhs = add.y().unwrap();
    let num = rhs.downcast::<CExprNum>().unwrap();
    assert_eq!(num.value().unwrap(), 3);
}
