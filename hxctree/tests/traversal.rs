use hxctree::{
    CItem, Error, HxCItem, HxCType,
    cexpr::{CExpr, CExprCall, CExprInsn, CExprMemPtr, CExprNum, CExprStr, CExprTern},
    cstmt::{CStmt, CStmtAsm, CStmtBlock, CStmtFor, CStmtGoto, CStmtIf, CStmtReturn, CStmtSwitch},
    ctree::{CTreeItem, CTreePayload},
    resolve,
    tests_utils::{example_add, example_if, sample_children_count, sample_item},
    utils::ItemClass,
};
use strum::IntoEnumIterator;

fn kind_names(items: &[HxCItem<'_>]) -> Vec<&'static str> {
    items.iter().map(HxCItem::kind_name).collect()
}

fn eas(items: &[HxCItem<'_>]) -> Vec<u64> {
    items.iter().map(HxCItem::ea).collect()
}

#[test]
fn add_has_two_literal_operands() {
    let handle = example_add();
    let item = resolve(&handle).unwrap();
    assert!(item.is_expr());
    assert_eq!(item.kind_name(), "CExprAdd");

    let expr = item.try_as_expr().unwrap();
    let ops = expr.ops().unwrap();
    assert_eq!(ops.len(), 2);

    let values: Vec<u64> = ops
        .iter()
        .map(|op| op.downcast::<CExprNum>().unwrap().value().unwrap())
        .collect();
    assert_eq!(values, [2, 3]);
    assert_eq!(ops[0].ea(), 0x1000);
    assert_eq!(ops[1].ea(), 0x1004);
}

#[test]
fn if_without_else_has_condition_and_branch() {
    let handle = example_if();
    let item = resolve(&handle).unwrap();
    assert!(item.is_statement());

    let stmt = item.try_as_stmt().unwrap();
    let expr_childs = stmt.expr_childs().unwrap();
    assert_eq!(expr_childs.len(), 1);
    assert_eq!(expr_childs[0].kind_name(), "CExprNe");

    let st_childs = stmt.st_childs().unwrap();
    assert_eq!(st_childs.len(), 1);
    assert_eq!(st_childs[0].kind_name(), "CStmtReturn");

    let if_stmt = stmt.downcast::<CStmtIf>().unwrap();
    assert!(!if_stmt.has_else());
    assert!(if_stmt.else_branch().unwrap().is_none());
}

#[test]
fn children_count_matches_kind_arity() {
    for ctype in HxCType::iter() {
        let handle = sample_item(ctype);
        let item = resolve(&handle).unwrap();
        let children = item.children().unwrap();
        assert_eq!(
            children.len(),
            sample_children_count(ctype),
            "unexpected children for {}",
            ctype.name()
        );
    }
}

#[test]
fn children_are_idempotent() {
    for ctype in HxCType::iter() {
        let handle = sample_item(ctype);
        let item = resolve(&handle).unwrap();

        let first = item.children().unwrap();
        let second = item.children().unwrap();
        assert_eq!(kind_names(&first), kind_names(&second));
        assert_eq!(eas(&first), eas(&second));
    }
}

#[test]
fn leaf_kinds_have_no_children() {
    use HxCType::*;

    for ctype in [
        CotEmpty, CotNum, CotFNum, CotStr, CotObj, CotVar, CotHelper, CotType, CotInsn, CitEmpty,
        CitBreak, CitContinue, CitGoto, CitAsm,
    ] {
        let handle = sample_item(ctype);
        match resolve(&handle).unwrap() {
            HxCItem::Expr(expr) => assert!(expr.ops().unwrap().is_empty()),
            HxCItem::Stmt(stmt) => {
                assert!(stmt.st_childs().unwrap().is_empty());
                assert!(stmt.expr_childs().unwrap().is_empty());
            }
        }
    }
}

#[test]
fn ternary_operands_in_order() {
    let handle = sample_item(HxCType::CotTern);
    let item = resolve(&handle).unwrap();
    let expr = item.try_as_expr().unwrap();
    let tern = expr.downcast::<CExprTern>().unwrap();

    let values: Vec<u64> = [tern.cond(), tern.then_expr(), tern.else_expr()]
        .into_iter()
        .map(|op| op.unwrap().downcast::<CExprNum>().unwrap().value().unwrap())
        .collect();
    assert_eq!(values, [1, 2, 3]);

    let ops = tern.ops().unwrap();
    assert_eq!(ops.len(), 3);
}

#[test]
fn call_lists_callee_then_arguments() {
    let handle = sample_item(HxCType::CotCall);
    let item = resolve(&handle).unwrap();
    let expr = item.try_as_expr().unwrap();
    let call = expr.downcast::<CExprCall>().unwrap();

    assert_eq!(call.arg_count(), 3);
    assert_eq!(call.callee().unwrap().kind_name(), "CExprObj");

    let ops = call.ops().unwrap();
    assert_eq!(ops[0].kind_name(), "CExprObj");
    assert!(ops[1..].iter().all(|op| op.kind_name() == "CExprNum"));
}

#[test]
fn member_access_keeps_offset() {
    let handle = sample_item(HxCType::CotMemPtr);
    let item = resolve(&handle).unwrap();
    let expr = item.try_as_expr().unwrap();
    let member = expr.downcast::<CExprMemPtr>().unwrap();

    assert_eq!(member.member_offset().unwrap(), 8);
    assert_eq!(member.x().unwrap().kind_name(), "CExprVar");
}

#[test]
fn insn_expression_exposes_its_statement() {
    let handle = sample_item(HxCType::CotInsn);
    let item = resolve(&handle).unwrap();
    let expr = item.try_as_expr().unwrap();
    let insn = expr.downcast::<CExprInsn>().unwrap();

    assert!(insn.ops().unwrap().is_empty());
    assert_eq!(insn.insn().unwrap().kind_name(), "CStmtExpr");
}

#[test]
fn literal_payloads() {
    let handle = CTreeItem::string(0x30, "hello");
    let item = resolve(&handle).unwrap();
    let expr = item.try_as_expr().unwrap();
    assert_eq!(expr.downcast::<CExprStr>().unwrap().value().unwrap(), "hello");
    assert_eq!(
        expr.to_string(),
        "CExprStr(ea=0x30, ops=[], value=\"hello\")"
    );
}

#[test]
fn for_loop_children() {
    let handle = sample_item(HxCType::CitFor);
    let item = resolve(&handle).unwrap();
    let stmt = item.try_as_stmt().unwrap();
    let for_stmt = stmt.downcast::<CStmtFor>().unwrap();

    let values: Vec<u64> = [for_stmt.init(), for_stmt.cond(), for_stmt.step()]
        .into_iter()
        .map(|op| op.unwrap().downcast::<CExprNum>().unwrap().value().unwrap())
        .collect();
    assert_eq!(values, [0, 1, 2]);
    assert_eq!(for_stmt.body().unwrap().kind_name(), "CStmtExpr");
    assert_eq!(for_stmt.expr_childs().unwrap().len(), 3);
    assert_eq!(for_stmt.st_childs().unwrap().len(), 1);
}

#[test]
fn block_statements_in_order() {
    let handle = sample_item(HxCType::CitBlock);
    let item = resolve(&handle).unwrap();
    let stmt = item.try_as_stmt().unwrap();
    let block = stmt.downcast::<CStmtBlock>().unwrap();

    assert_eq!(block.len(), 2);
    assert!(!block.is_empty());
    assert_eq!(block.get(1).unwrap().unwrap().kind_name(), "CStmtBreak");
    assert!(block.get(2).is_none());

    let names: Vec<_> = block
        .st_childs()
        .unwrap()
        .iter()
        .map(|stmt| stmt.kind_name())
        .collect();
    assert_eq!(names, ["CStmtExpr", "CStmtBreak"]);
}

#[test]
fn switch_cases() {
    let handle = sample_item(HxCType::CitSwitch);
    let item = resolve(&handle).unwrap();
    let stmt = item.try_as_stmt().unwrap();
    let switch = stmt.downcast::<CStmtSwitch>().unwrap();

    let cases = switch.cases().unwrap();
    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].values, [1, 2]);
    assert!(!cases[0].is_default());
    assert!(cases[1].is_default());
    assert_eq!(cases[1].body.kind_name(), "CStmtBreak");
    assert_eq!(switch.expr().unwrap().kind_name(), "CExprVar");
}

#[test]
fn simple_statement_payloads() {
    let handle = sample_item(HxCType::CitGoto);
    let item = resolve(&handle).unwrap();
    let stmt = item.try_as_stmt().unwrap();
    assert_eq!(stmt.downcast::<CStmtGoto>().unwrap().label().unwrap(), 7);

    let handle = sample_item(HxCType::CitAsm);
    let item = resolve(&handle).unwrap();
    let stmt = item.try_as_stmt().unwrap();
    let asm = stmt.downcast::<CStmtAsm>().unwrap();
    assert_eq!(asm.instructions().len(), 3);

    let handle = CTreeItem::return_stmt(0x60, None);
    let item = resolve(&handle).unwrap();
    let stmt = item.try_as_stmt().unwrap();
    assert!(stmt.downcast::<CStmtReturn>().unwrap().value().unwrap().is_none());
    assert!(stmt.expr_childs().unwrap().is_empty());
}

#[test]
fn missing_operand_is_reported() {
    let handle = CTreeItem::leaf(HxCType::CotAdd, 0x20);
    let item = resolve(&handle).unwrap();

    assert_eq!(
        item.children().unwrap_err(),
        Error::MissingField {
            kind: "CExprAdd",
            field: "x",
            ea: 0x20
        }
    );
    assert_eq!(
        item.to_string(),
        "CExprAdd(ea=0x20, ops=<Node `CExprAdd` at 0x20 has no `x`.>)"
    );
}

#[test]
fn statement_where_expression_expected() {
    let handle = CTreeItem::new(
        HxCType::CitExpr,
        0x10,
        CTreePayload::Expr(Box::new(CTreeItem::leaf(HxCType::CitBreak, 0x14))),
    );
    let item = resolve(&handle).unwrap();

    assert_eq!(
        item.children().unwrap_err(),
        Error::UnexpectedItem {
            expected: ItemClass::Expression,
            tag: HxCType::CitBreak.tag(),
            ea: 0x14
        }
    );
}

#[test]
fn rendering() {
    let handle = example_add();
    let item = resolve(&handle).unwrap();
    assert_eq!(
        item.to_string(),
        "CExprAdd(ea=0x1000, ops=[CExprNum(ea=0x1000, ops=[], value=2), \
         CExprNum(ea=0x1004, ops=[], value=3)])"
    );

    let handle = CTreeItem::block(0x10, vec![CTreeItem::leaf(HxCType::CitBreak, 0x14)]);
    let item = resolve(&handle).unwrap();
    assert_eq!(
        item.to_string(),
        "CStmtBlock(ea=0x10, st_childs=[CStmtBreak(ea=0x14, st_childs=[], expr_childs=[])], \
         expr_childs=[])"
    );
    assert_eq!(format!("{:?}", item), item.to_string());
}
