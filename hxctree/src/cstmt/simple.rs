//! Statements without nested statements.
use crate::{
    cexpr::CExprList,
    citem::{CNode, HxCExpr},
    cstmt::CStmt,
    raw::Address,
    registry::CItemRegistration,
    utils::HxResult,
};

citem_kind!(stmt
    /// Empty statement (`cit_empty`).
    CStmtEmpty => CitEmpty);

impl<'a> CStmt<'a> for CStmtEmpty<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }
}

citem_kind!(stmt
    /// `break;`
    CStmtBreak => CitBreak);

impl<'a> CStmt<'a> for CStmtBreak<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }
}

citem_kind!(stmt
    /// `continue;`
    CStmtContinue => CitContinue);

impl<'a> CStmt<'a> for CStmtContinue<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }
}

citem_kind!(stmt
    /// Expression statement: `expr;`
    CStmtExpr => CitExpr);

impl<'a> CStmtExpr<'a> {
    pub fn expr(&self) -> HxResult<HxCExpr<'a>> {
        self.node
            .required_expr("CStmtExpr", "cexpr", self.node.raw().cexpr())
    }
}

impl<'a> CStmt<'a> for CStmtExpr<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }

    fn expr_childs(&self) -> HxResult<CExprList<'a>> {
        Ok(vec![self.expr()?])
    }
}

citem_kind!(stmt
    /// `return expr;` or `return;`
    CStmtReturn => CitReturn);

impl<'a> CStmtReturn<'a> {
    /// Returned value, `None` for functions returning `void`.
    pub fn value(&self) -> HxResult<Option<HxCExpr<'a>>> {
        self.node.optional_expr(self.node.raw().cexpr())
    }
}

impl<'a> CStmt<'a> for CStmtReturn<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }

    fn expr_childs(&self) -> HxResult<CExprList<'a>> {
        Ok(self.value()?.into_iter().collect())
    }
}

citem_kind!(stmt
    /// `goto LABEL_n;`
    CStmtGoto => CitGoto);

impl CStmtGoto<'_> {
    /// Number of the target label.
    pub fn label(&self) -> HxResult<i32> {
        self.node
            .raw()
            .label_num()
            .ok_or_else(|| self.node.missing("CStmtGoto", "label_num"))
    }
}

impl<'a> CStmt<'a> for CStmtGoto<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }

    fn summary(&self) -> Option<String> {
        self.node.raw().label_num().map(|label| format!("label={}", label))
    }
}

citem_kind!(stmt
    /// Inline assembly statement (`cit_asm`).
    CStmtAsm => CitAsm);

impl CStmtAsm<'_> {
    /// Addresses of the assembly instructions.
    pub fn instructions(&self) -> Vec<Address> {
        self.node.raw().asm_eas()
    }
}

impl<'a> CStmt<'a> for CStmtAsm<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }

    fn summary(&self) -> Option<String> {
        Some(format!("instructions={}", self.instructions().len()))
    }
}

pub(crate) static KINDS: &[CItemRegistration] = &[
    crate::citem_registration!(CStmtEmpty),
    crate::citem_registration!(CStmtBreak),
    crate::citem_registration!(CStmtContinue),
    crate::citem_registration!(CStmtExpr),
    crate::citem_registration!(CStmtReturn),
    crate::citem_registration!(CStmtGoto),
    crate::citem_registration!(CStmtAsm),
];
