//! Sample ctrees for tests.
use crate::{
    ctree::{CTreeCase, CTreeFunc, CTreeItem},
    ctype::HxCType,
};

/// `2 + 3`
pub fn example_add() -> CTreeItem {
    CTreeItem::binary(
        HxCType::CotAdd,
        0x1000,
        CTreeItem::num(0x1000, 2),
        CTreeItem::num(0x1004, 3),
    )
}

/// `if (v0 != 0) return 1;`
pub fn example_if() -> CTreeItem {
    CTreeItem::if_stmt(
        0x2000,
        CTreeItem::binary(
            HxCType::CotNe,
            0x2000,
            CTreeItem::var(0x2000, 0),
            CTreeItem::num(0x2004, 0),
        ),
        CTreeItem::return_stmt(0x2008, Some(CTreeItem::num(0x2008, 1))),
        None,
    )
}

/// A well formed item of type `ctype`, with the children its kind expects.
pub fn sample_item(ctype: HxCType) -> CTreeItem {
    use HxCType::*;

    let ea = 0x4000 + ctype as u64 * 0x10;
    let num = |value| CTreeItem::num(ea + 4, value);
    let stmt = || CTreeItem::expr_stmt(CTreeItem::var(ea + 8, 1));

    match ctype {
        CotEmpty | CitEmpty | CitBreak | CitContinue => CTreeItem::leaf(ctype, ea),
        CotNum => CTreeItem::num(ea, 42),
        CotFNum => CTreeItem::fnum(ea, 1.5),
        CotStr => CTreeItem::string(ea, "hello"),
        CotObj => CTreeItem::obj(ea, 0x8000),
        CotVar => CTreeItem::var(ea, 3),
        CotHelper => CTreeItem::helper(ea, "__ROL4__"),
        CotType => CTreeItem::type_name(ea, "int"),
        CotInsn => CTreeItem::insn(ea, stmt()),
        CotFNeg | CotNeg | CotCast | CotLNot | CotBNot | CotPtr | CotRef | CotPostInc
        | CotPostDec | CotPreInc | CotPreDec | CotSizeof => CTreeItem::unary(ctype, ea, num(1)),
        CotMemRef | CotMemPtr => CTreeItem::member(ctype, ea, CTreeItem::var(ea, 2), 8),
        CotTern => CTreeItem::ternary(ea, num(1), num(2), num(3)),
        CotCall => CTreeItem::call(
            ea,
            CTreeItem::obj(ea, 0x8000),
            vec![num(1), num(2), num(3)],
        ),
        CitBlock => CTreeItem::block(ea, vec![stmt(), CTreeItem::leaf(CitBreak, ea + 12)]),
        CitExpr => stmt(),
        CitIf => CTreeItem::if_stmt(ea, num(1), stmt(), Some(CTreeItem::leaf(CitBreak, ea + 12))),
        CitFor => CTreeItem::for_stmt(ea, num(0), num(1), num(2), stmt()),
        CitWhile => CTreeItem::while_stmt(ea, num(1), stmt()),
        CitDo => CTreeItem::do_stmt(ea, stmt(), num(1)),
        CitSwitch => CTreeItem::switch_stmt(
            ea,
            CTreeItem::var(ea, 0),
            vec![
                CTreeCase {
                    values: vec![1, 2],
                    body: stmt(),
                },
                CTreeCase {
                    values: vec![],
                    body: CTreeItem::leaf(CitBreak, ea + 12),
                },
            ],
        ),
        CitReturn => CTreeItem::return_stmt(ea, Some(num(0))),
        CitGoto => CTreeItem::goto_stmt(ea, 7),
        CitAsm => CTreeItem::asm_stmt(ea, vec![ea, ea + 2, ea + 4]),
        // Binary operators
        _ => CTreeItem::binary(ctype, ea, num(1), num(2)),
    }
}

/// Number of direct children [`sample_item`] gives to an item of `ctype`.
pub fn sample_children_count(ctype: HxCType) -> usize {
    use HxCType::*;

    match ctype {
        CotEmpty | CitEmpty | CitBreak | CitContinue | CitGoto | CitAsm => 0,
        CotNum | CotFNum | CotStr | CotObj | CotVar | CotHelper | CotType | CotInsn => 0,
        CotFNeg | CotNeg | CotCast | CotLNot | CotBNot | CotPtr | CotRef | CotPostInc
        | CotPostDec | CotPreInc | CotPreDec | CotSizeof | CotMemRef | CotMemPtr => 1,
        CotTern => 3,
        CotCall => 4,
        CitExpr | CitReturn => 1,
        CitBlock | CitWhile | CitDo => 2,
        CitIf | CitSwitch => 3,
        CitFor => 4,
        _ => 2,
    }
}

/// ```c
/// int sum(int *v0, int v1)
/// {
///   int v2 = 0;
///   for (v3 = 0; v3 < v1; ++v3)
///   {
///     switch (v0[v3])
///     {
///       case 0: continue;
///       default: v2 += v0[v3];
///     }
///   }
///   if (v2 > 100)
///     log_overflow("overflow", v2);
///   else
///     v2 = -v2;
///   return v2;
/// }
/// ```
pub fn example_func() -> CTreeFunc {
    use HxCType::*;

    let var = |ea, idx| CTreeItem::var(ea, idx);
    let elem = |ea| CTreeItem::binary(CotIdx, ea, var(ea, 0), var(ea + 2, 3));

    let init = CTreeItem::expr_stmt(CTreeItem::binary(
        CotAsg,
        0x5000,
        var(0x5000, 2),
        CTreeItem::num(0x5004, 0),
    ));

    let switch = CTreeItem::switch_stmt(
        0x5020,
        elem(0x5020),
        vec![
            CTreeCase {
                values: vec![0],
                body: CTreeItem::leaf(CitContinue, 0x5028),
            },
            CTreeCase {
                values: vec![],
                body: CTreeItem::expr_stmt(CTreeItem::binary(
                    CotAsgAdd,
                    0x5030,
                    var(0x5030, 2),
                    elem(0x5034),
                )),
            },
        ],
    );

    let for_loop = CTreeItem::for_stmt(
        0x5010,
        CTreeItem::binary(CotAsg, 0x5010, var(0x5010, 3), CTreeItem::num(0x5014, 0)),
        CTreeItem::binary(CotSLt, 0x5018, var(0x5018, 3), var(0x501A, 1)),
        CTreeItem::unary(CotPreInc, 0x503C, var(0x503C, 3)),
        CTreeItem::block(0x5020, vec![switch]),
    );

    let check = CTreeItem::if_stmt(
        0x5040,
        CTreeItem::binary(CotSGt, 0x5040, var(0x5040, 2), CTreeItem::num(0x5044, 100)),
        CTreeItem::expr_stmt(CTreeItem::call(
            0x5048,
            CTreeItem::obj(0x5048, 0x9000),
            vec![CTreeItem::string(0x504C, "overflow"), var(0x5050, 2)],
        )),
        Some(CTreeItem::expr_stmt(CTreeItem::binary(
            CotAsg,
            0x5058,
            var(0x5058, 2),
            CTreeItem::unary(CotNeg, 0x505C, var(0x505C, 2)),
        ))),
    );

    let ret = CTreeItem::return_stmt(0x5060, Some(var(0x5060, 2)));

    CTreeFunc::new(
        0x5000,
        "sum",
        CTreeItem::block(0x5000, vec![init, for_loop, check, ret]),
    )
}
