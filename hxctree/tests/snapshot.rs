use hxctree::{
    HxCType,
    cfunc::HxCFunc,
    ctree::{CTreeFunc, CTreeItem, CTreePayload},
    tests_utils::example_func,
};

#[test]
fn restored_function_resolves_like_the_original() {
    let original = example_func();
    let json = serde_json::to_string(&original).unwrap();
    let restored: CTreeFunc = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, original);

    let before = HxCFunc::new(&original).unwrap();
    let after = HxCFunc::new(&restored).unwrap();
    assert_eq!(after.name(), before.name());
    assert_eq!(after.count_items().unwrap(), before.count_items().unwrap());
    assert_eq!(
        after.root_node().unwrap().to_string(),
        before.root_node().unwrap().to_string()
    );
}

#[test]
fn snapshot_shape() {
    let item = CTreeItem::num(0x10, 7);
    let value = serde_json::to_value(&item).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "ea": 16,
            "op": HxCType::CotNum as i32,
            "payload": { "Num": 7 }
        })
    );

    let empty: CTreeItem = serde_json::from_value(serde_json::json!({
        "ea": 32,
        "op": HxCType::CitBreak as i32,
        "payload": "None"
    }))
    .unwrap();
    assert_eq!(empty.payload, CTreePayload::None);
    assert_eq!(empty, CTreeItem::leaf(HxCType::CitBreak, 32));
}
