//! Compound and control-flow statements.
use crate::{
    cexpr::CExprList,
    citem::{CNode, HxCExpr, HxCStmt},
    cstmt::{CStmt, CStmtList},
    registry::CItemRegistration,
    utils::HxResult,
};

citem_kind!(stmt
    /// Block statement: `{ ... }`
    CStmtBlock => CitBlock);

impl<'a> CStmtBlock<'a> {
    /// Number of statements in the block, without resolving them.
    pub fn len(&self) -> usize {
        self.node.raw().block().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Statement at `index` in the block.
    pub fn get(&self, index: usize) -> Option<HxResult<HxCStmt<'a>>> {
        self.node
            .raw()
            .block()
            .get(index)
            .map(|item| self.node.stmt(*item))
    }
}

impl<'a> CStmt<'a> for CStmtBlock<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }

    fn st_childs(&self) -> HxResult<CStmtList<'a>> {
        self.node
            .raw()
            .block()
            .into_iter()
            .map(|item| self.node.stmt(item))
            .collect()
    }
}

citem_kind!(stmt
    /// `if (cond) then else`
    CStmtIf => CitIf);

impl<'a> CStmtIf<'a> {
    pub fn cond(&self) -> HxResult<HxCExpr<'a>> {
        self.node
            .required_expr("CStmtIf", "cexpr", self.node.raw().cexpr())
    }

    pub fn then_branch(&self) -> HxResult<HxCStmt<'a>> {
        self.node
            .required_stmt("CStmtIf", "ithen", self.node.raw().ithen())
    }

    pub fn else_branch(&self) -> HxResult<Option<HxCStmt<'a>>> {
        self.node.optional_stmt(self.node.raw().ielse())
    }

    pub fn has_else(&self) -> bool {
        self.node.raw().ielse().is_some()
    }
}

impl<'a> CStmt<'a> for CStmtIf<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }

    fn st_childs(&self) -> HxResult<CStmtList<'a>> {
        let mut childs = vec![self.then_branch()?];
        childs.extend(self.else_branch()?);
        Ok(childs)
    }

    fn expr_childs(&self) -> HxResult<CExprList<'a>> {
        Ok(vec![self.cond()?])
    }
}

citem_kind!(stmt
    /// `for (init; cond; step) body`
    ///
    /// Missing clauses are reported by the decompiler as empty expressions,
    /// so the three expressions are always present.
    CStmtFor => CitFor);

impl<'a> CStmtFor<'a> {
    pub fn init(&self) -> HxResult<HxCExpr<'a>> {
        self.node
            .required_expr("CStmtFor", "init", self.node.raw().init())
    }

    pub fn cond(&self) -> HxResult<HxCExpr<'a>> {
        self.node
            .required_expr("CStmtFor", "cexpr", self.node.raw().cexpr())
    }

    pub fn step(&self) -> HxResult<HxCExpr<'a>> {
        self.node
            .required_expr("CStmtFor", "step", self.node.raw().step())
    }

    pub fn body(&self) -> HxResult<HxCStmt<'a>> {
        self.node
            .required_stmt("CStmtFor", "body", self.node.raw().body())
    }
}

impl<'a> CStmt<'a> for CStmtFor<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }

    fn st_childs(&self) -> HxResult<CStmtList<'a>> {
        Ok(vec![self.body()?])
    }

    fn expr_childs(&self) -> HxResult<CExprList<'a>> {
        Ok(vec![self.init()?, self.cond()?, self.step()?])
    }
}

citem_kind!(stmt
    /// `while (cond) body`
    CStmtWhile => CitWhile);

impl<'a> CStmtWhile<'a> {
    pub fn cond(&self) -> HxResult<HxCExpr<'a>> {
        self.node
            .required_expr("CStmtWhile", "cexpr", self.node.raw().cexpr())
    }

    pub fn body(&self) -> HxResult<HxCStmt<'a>> {
        self.node
            .required_stmt("CStmtWhile", "body", self.node.raw().body())
    }
}

impl<'a> CStmt<'a> for CStmtWhile<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }

    fn st_childs(&self) -> HxResult<CStmtList<'a>> {
        Ok(vec![self.body()?])
    }

    fn expr_childs(&self) -> HxResult<CExprList<'a>> {
        Ok(vec![self.cond()?])
    }
}

citem_kind!(stmt
    /// `do body while (cond);`
    CStmtDo => CitDo);

impl<'a> CStmtDo<'a> {
    pub fn cond(&self) -> HxResult<HxCExpr<'a>> {
        self.node
            .required_expr("CStmtDo", "cexpr", self.node.raw().cexpr())
    }

    pub fn body(&self) -> HxResult<HxCStmt<'a>> {
        self.node
            .required_stmt("CStmtDo", "body", self.node.raw().body())
    }
}

impl<'a> CStmt<'a> for CStmtDo<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }

    fn st_childs(&self) -> HxResult<CStmtList<'a>> {
        Ok(vec![self.body()?])
    }

    fn expr_childs(&self) -> HxResult<CExprList<'a>> {
        Ok(vec![self.cond()?])
    }
}

/// One `case` of a [`CStmtSwitch`].
pub struct CSwitchCase<'a> {
    /// Values selecting the case, empty for `default`.
    pub values: Vec<u64>,
    pub body: HxCStmt<'a>,
}

impl CSwitchCase<'_> {
    pub fn is_default(&self) -> bool {
        self.values.is_empty()
    }
}

citem_kind!(stmt
    /// `switch (expr) { case ...: ... }`
    CStmtSwitch => CitSwitch);

impl<'a> CStmtSwitch<'a> {
    /// Switched expression.
    pub fn expr(&self) -> HxResult<HxCExpr<'a>> {
        self.node
            .required_expr("CStmtSwitch", "cexpr", self.node.raw().cexpr())
    }

    /// Cases in the decompiler's order.
    pub fn cases(&self) -> HxResult<Vec<CSwitchCase<'a>>> {
        self.node
            .raw()
            .cases()
            .into_iter()
            .map(|case| {
                Ok(CSwitchCase {
                    body: self.node.stmt(case.body)?,
                    values: case.values,
                })
            })
            .collect()
    }
}

impl<'a> CStmt<'a> for CStmtSwitch<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }

    fn st_childs(&self) -> HxResult<CStmtList<'a>> {
        Ok(self.cases()?.into_iter().map(|case| case.body).collect())
    }

    fn expr_childs(&self) -> HxResult<CExprList<'a>> {
        Ok(vec![self.expr()?])
    }

    fn summary(&self) -> Option<String> {
        Some(format!("cases={}", self.node.raw().cases().len()))
    }
}

pub(crate) static KINDS: &[CItemRegistration] = &[
    crate::citem_registration!(CStmtBlock),
    crate::citem_registration!(CStmtIf),
    crate::citem_registration!(CStmtFor),
    crate::citem_registration!(CStmtWhile),
    crate::citem_registration!(CStmtDo),
    crate::citem_registration!(CStmtSwitch),
];
