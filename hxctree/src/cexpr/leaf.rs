//! Expressions without operands.
//!
//! Leaf kinds keep the default empty [`CExpr::ops`] and expose their
//! payload through dedicated accessors instead.
use crate::{
    cexpr::CExpr,
    citem::{CNode, HxCStmt},
    raw::Address,
    registry::CItemRegistration,
    utils::HxResult,
};

citem_kind!(expr
    /// Empty expression (`cot_empty`).
    CExprEmpty => CotEmpty);

impl<'a> CExpr<'a> for CExprEmpty<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }
}

citem_kind!(expr
    /// Integer literal (`cot_num`).
    CExprNum => CotNum);

impl CExprNum<'_> {
    /// Value of the literal.
    pub fn value(&self) -> HxResult<u64> {
        self.node
            .raw()
            .numval()
            .ok_or_else(|| self.node.missing("CExprNum", "numval"))
    }
}

impl<'a> CExpr<'a> for CExprNum<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }

    fn summary(&self) -> Option<String> {
        self.node.raw().numval().map(|value| format!("value={}", value))
    }
}

citem_kind!(expr
    /// Floating point literal (`cot_fnum`).
    CExprFNum => CotFNum);

impl CExprFNum<'_> {
    pub fn value(&self) -> HxResult<f64> {
        self.node
            .raw()
            .fpc()
            .ok_or_else(|| self.node.missing("CExprFNum", "fpc"))
    }
}

impl<'a> CExpr<'a> for CExprFNum<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }

    fn summary(&self) -> Option<String> {
        self.node.raw().fpc().map(|value| format!("value={}", value))
    }
}

citem_kind!(expr
    /// String literal (`cot_str`).
    CExprStr => CotStr);

impl<'a> CExprStr<'a> {
    pub fn value(&self) -> HxResult<&'a str> {
        self.node
            .raw()
            .string()
            .ok_or_else(|| self.node.missing("CExprStr", "string"))
    }
}

impl<'a> CExpr<'a> for CExprStr<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }

    fn summary(&self) -> Option<String> {
        self.node.raw().string().map(|value| format!("value={:?}", value))
    }
}

citem_kind!(expr
    /// Reference to a global object (`cot_obj`): a function, a global
    /// variable, an imported symbol...
    CExprObj => CotObj);

impl CExprObj<'_> {
    /// Address of the referenced object.
    pub fn obj_ea(&self) -> HxResult<Address> {
        self.node
            .raw()
            .obj_ea()
            .ok_or_else(|| self.node.missing("CExprObj", "obj_ea"))
    }
}

impl<'a> CExpr<'a> for CExprObj<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }

    fn summary(&self) -> Option<String> {
        self.node.raw().obj_ea().map(|ea| format!("obj_ea=0x{:X}", ea))
    }
}

citem_kind!(expr
    /// Local variable (`cot_var`).
    CExprVar => CotVar);

impl CExprVar<'_> {
    /// Index of the variable in the function's local variable list.
    pub fn index(&self) -> HxResult<u32> {
        self.node
            .raw()
            .var_idx()
            .ok_or_else(|| self.node.missing("CExprVar", "var_idx"))
    }
}

impl<'a> CExpr<'a> for CExprVar<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }

    fn summary(&self) -> Option<String> {
        self.node.raw().var_idx().map(|idx| format!("index={}", idx))
    }
}

citem_kind!(expr
    /// Statement used in place of an expression (`cot_insn`). Internal to
    /// the decompiler, rarely seen in final trees.
    CExprInsn => CotInsn);

impl<'a> CExprInsn<'a> {
    /// The embedded statement. It is not an operand, so [`CExpr::ops`]
    /// stays empty.
    pub fn insn(&self) -> HxResult<HxCStmt<'a>> {
        self.node
            .required_stmt("CExprInsn", "insn", self.node.raw().insn())
    }
}

impl<'a> CExpr<'a> for CExprInsn<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }
}

citem_kind!(expr
    /// Arbitrary name (`cot_helper`), e.g. compiler intrinsics such as
    /// `__ROL4__`.
    CExprHelper => CotHelper);

impl<'a> CExprHelper<'a> {
    pub fn name(&self) -> HxResult<&'a str> {
        self.node
            .raw()
            .helper()
            .ok_or_else(|| self.node.missing("CExprHelper", "helper"))
    }
}

impl<'a> CExpr<'a> for CExprHelper<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }

    fn summary(&self) -> Option<String> {
        self.node.raw().helper().map(|name| format!("name={}", name))
    }
}

citem_kind!(expr
    /// Arbitrary type (`cot_type`), used as operand of e.g. `sizeof`.
    CExprType => CotType);

impl<'a> CExprType<'a> {
    pub fn type_name(&self) -> HxResult<&'a str> {
        self.node
            .raw()
            .helper()
            .ok_or_else(|| self.node.missing("CExprType", "helper"))
    }
}

impl<'a> CExpr<'a> for CExprType<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }

    fn summary(&self) -> Option<String> {
        self.node.raw().helper().map(|name| format!("type={}", name))
    }
}

pub(crate) static KINDS: &[CItemRegistration] = &[
    crate::citem_registration!(CExprEmpty),
    crate::citem_registration!(CExprNum),
    crate::citem_registration!(CExprFNum),
    crate::citem_registration!(CExprStr),
    crate::citem_registration!(CExprObj),
    crate::citem_registration!(CExprVar),
    crate::citem_registration!(CExprInsn),
    crate::citem_registration!(CExprHelper),
    crate::citem_registration!(CExprType),
];
