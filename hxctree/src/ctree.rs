//! Owned ctree.
//!
//! [`CTreeItem`] holds a whole ctree in memory and implements the
//! collaborator interface ([`RawCItem`]), so that trees synthesized by a
//! tool, restored from a snapshot (with the `serde` feature) or built in
//! tests can be resolved like the decompiler's own nodes.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{
    ctype::{HxCType, Tag},
    raw::{Address, RawCFunc, RawCItem, RawCase},
};

/// Kind-specific content of a [`CTreeItem`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CTreePayload {
    #[default]
    None,

    /// Operands of unary (`x`), binary (`x`, `y`) and ternary (`x`, `y`,
    /// `z`) operators.
    Operands {
        x: Box<CTreeItem>,
        y: Option<Box<CTreeItem>>,
        z: Option<Box<CTreeItem>>,
    },
    Call {
        callee: Box<CTreeItem>,
        args: Vec<CTreeItem>,
    },
    Member {
        x: Box<CTreeItem>,
        m: u32,
    },
    Num(u64),
    FNum(f64),
    Str(String),
    Obj(Address),
    Var(u32),
    /// Helper name or type name.
    Helper(String),
    Insn(Box<CTreeItem>),

    Block(Vec<CTreeItem>),
    /// Expression of an expression-statement.
    Expr(Box<CTreeItem>),
    If {
        cond: Box<CTreeItem>,
        then: Box<CTreeItem>,
        otherwise: Option<Box<CTreeItem>>,
    },
    For {
        init: Box<CTreeItem>,
        cond: Box<CTreeItem>,
        step: Box<CTreeItem>,
        body: Box<CTreeItem>,
    },
    /// Body and condition of `while` and `do` loops.
    Loop {
        cond: Box<CTreeItem>,
        body: Box<CTreeItem>,
    },
    Switch {
        expr: Box<CTreeItem>,
        cases: Vec<CTreeCase>,
    },
    Return(Option<Box<CTreeItem>>),
    Goto(i32),
    Asm(Vec<Address>),
}

/// One case of a switch statement.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CTreeCase {
    /// Values of the case, empty for `default`.
    pub values: Vec<u64>,
    pub body: CTreeItem,
}

/// One node of an owned ctree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CTreeItem {
    pub ea: Address,
    pub op: Tag,
    pub payload: CTreePayload,
}

impl CTreeItem {
    pub fn new(op: impl Into<Tag>, ea: Address, payload: CTreePayload) -> Self {
        Self {
            ea,
            op: op.into(),
            payload,
        }
    }

    /// Node with no payload, e.g. `break`, `continue` or empty items.
    pub fn leaf(op: impl Into<Tag>, ea: Address) -> Self {
        Self::new(op, ea, CTreePayload::None)
    }

    pub fn num(ea: Address, value: u64) -> Self {
        Self::new(HxCType::CotNum, ea, CTreePayload::Num(value))
    }

    pub fn fnum(ea: Address, value: f64) -> Self {
        Self::new(HxCType::CotFNum, ea, CTreePayload::FNum(value))
    }

    pub fn string(ea: Address, value: impl Into<String>) -> Self {
        Self::new(HxCType::CotStr, ea, CTreePayload::Str(value.into()))
    }

    pub fn obj(ea: Address, obj_ea: Address) -> Self {
        Self::new(HxCType::CotObj, ea, CTreePayload::Obj(obj_ea))
    }

    pub fn var(ea: Address, index: u32) -> Self {
        Self::new(HxCType::CotVar, ea, CTreePayload::Var(index))
    }

    pub fn helper(ea: Address, name: impl Into<String>) -> Self {
        Self::new(HxCType::CotHelper, ea, CTreePayload::Helper(name.into()))
    }

    pub fn type_name(ea: Address, name: impl Into<String>) -> Self {
        Self::new(HxCType::CotType, ea, CTreePayload::Helper(name.into()))
    }

    pub fn insn(ea: Address, stmt: CTreeItem) -> Self {
        Self::new(HxCType::CotInsn, ea, CTreePayload::Insn(Box::new(stmt)))
    }

    pub fn unary(op: HxCType, ea: Address, x: CTreeItem) -> Self {
        Self::new(
            op,
            ea,
            CTreePayload::Operands {
                x: Box::new(x),
                y: None,
                z: None,
            },
        )
    }

    pub fn binary(op: HxCType, ea: Address, x: CTreeItem, y: CTreeItem) -> Self {
        Self::new(
            op,
            ea,
            CTreePayload::Operands {
                x: Box::new(x),
                y: Some(Box::new(y)),
                z: None,
            },
        )
    }

    pub fn ternary(ea: Address, x: CTreeItem, y: CTreeItem, z: CTreeItem) -> Self {
        Self::new(
            HxCType::CotTern,
            ea,
            CTreePayload::Operands {
                x: Box::new(x),
                y: Some(Box::new(y)),
                z: Some(Box::new(z)),
            },
        )
    }

    pub fn call(ea: Address, callee: CTreeItem, args: Vec<CTreeItem>) -> Self {
        Self::new(
            HxCType::CotCall,
            ea,
            CTreePayload::Call {
                callee: Box::new(callee),
                args,
            },
        )
    }

    /// `x.m` or `x->m`.
    pub fn member(op: HxCType, ea: Address, x: CTreeItem, m: u32) -> Self {
        Self::new(op, ea, CTreePayload::Member { x: Box::new(x), m })
    }

    pub fn block(ea: Address, stmts: Vec<CTreeItem>) -> Self {
        Self::new(HxCType::CitBlock, ea, CTreePayload::Block(stmts))
    }

    /// Expression-statement, located at the address of its expression.
    pub fn expr_stmt(expr: CTreeItem) -> Self {
        let ea = expr.ea;
        Self::new(HxCType::CitExpr, ea, CTreePayload::Expr(Box::new(expr)))
    }

    pub fn if_stmt(
        ea: Address,
        cond: CTreeItem,
        then: CTreeItem,
        otherwise: Option<CTreeItem>,
    ) -> Self {
        Self::new(
            HxCType::CitIf,
            ea,
            CTreePayload::If {
                cond: Box::new(cond),
                then: Box::new(then),
                otherwise: otherwise.map(Box::new),
            },
        )
    }

    pub fn for_stmt(
        ea: Address,
        init: CTreeItem,
        cond: CTreeItem,
        step: CTreeItem,
        body: CTreeItem,
    ) -> Self {
        Self::new(
            HxCType::CitFor,
            ea,
            CTreePayload::For {
                init: Box::new(init),
                cond: Box::new(cond),
                step: Box::new(step),
                body: Box::new(body),
            },
        )
    }

    pub fn while_stmt(ea: Address, cond: CTreeItem, body: CTreeItem) -> Self {
        Self::new(
            HxCType::CitWhile,
            ea,
            CTreePayload::Loop {
                cond: Box::new(cond),
                body: Box::new(body),
            },
        )
    }

    pub fn do_stmt(ea: Address, body: CTreeItem, cond: CTreeItem) -> Self {
        Self::new(
            HxCType::CitDo,
            ea,
            CTreePayload::Loop {
                cond: Box::new(cond),
                body: Box::new(body),
            },
        )
    }

    pub fn switch_stmt(ea: Address, expr: CTreeItem, cases: Vec<CTreeCase>) -> Self {
        Self::new(
            HxCType::CitSwitch,
            ea,
            CTreePayload::Switch {
                expr: Box::new(expr),
                cases,
            },
        )
    }

    pub fn return_stmt(ea: Address, value: Option<CTreeItem>) -> Self {
        Self::new(
            HxCType::CitReturn,
            ea,
            CTreePayload::Return(value.map(Box::new)),
        )
    }

    pub fn goto_stmt(ea: Address, label: i32) -> Self {
        Self::new(HxCType::CitGoto, ea, CTreePayload::Goto(label))
    }

    pub fn asm_stmt(ea: Address, instructions: Vec<Address>) -> Self {
        Self::new(HxCType::CitAsm, ea, CTreePayload::Asm(instructions))
    }

    /// Number of nodes in the tree rooted at this item.
    pub fn size(&self) -> usize {
        let children: usize = match &self.payload {
            CTreePayload::Operands { x, y, z } => {
                x.size() + y.as_ref().map_or(0, |y| y.size()) + z.as_ref().map_or(0, |z| z.size())
            }
            CTreePayload::Call { callee, args } => {
                callee.size() + args.iter().map(CTreeItem::size).sum::<usize>()
            }
            CTreePayload::Member { x, .. } | CTreePayload::Insn(x) | CTreePayload::Expr(x) => {
                x.size()
            }
            CTreePayload::Block(stmts) => stmts.iter().map(CTreeItem::size).sum(),
            CTreePayload::If {
                cond,
                then,
                otherwise,
            } => cond.size() + then.size() + otherwise.as_ref().map_or(0, |stmt| stmt.size()),
            CTreePayload::For {
                init,
                cond,
                step,
                body,
            } => init.size() + cond.size() + step.size() + body.size(),
            CTreePayload::Loop { cond, body } => cond.size() + body.size(),
            CTreePayload::Switch { expr, cases } => {
                expr.size() + cases.iter().map(|case| case.body.size()).sum::<usize>()
            }
            CTreePayload::Return(value) => value.as_ref().map_or(0, |value| value.size()),
            CTreePayload::None
            | CTreePayload::Num(_)
            | CTreePayload::FNum(_)
            | CTreePayload::Str(_)
            | CTreePayload::Obj(_)
            | CTreePayload::Var(_)
            | CTreePayload::Helper(_)
            | CTreePayload::Goto(_)
            | CTreePayload::Asm(_) => 0,
        };
        children + 1
    }
}

impl RawCItem for CTreeItem {
    fn ea(&self) -> Address {
        self.ea
    }

    fn op(&self) -> Tag {
        self.op
    }

    fn x(&self) -> Option<&dyn RawCItem> {
        match &self.payload {
            CTreePayload::Operands { x, .. }
            | CTreePayload::Member { x, .. }
            | CTreePayload::Call { callee: x, .. } => Some(&**x),
            _ => None,
        }
    }

    fn y(&self) -> Option<&dyn RawCItem> {
        match &self.payload {
            CTreePayload::Operands { y: Some(y), .. } => Some(&**y),
            _ => None,
        }
    }

    fn z(&self) -> Option<&dyn RawCItem> {
        match &self.payload {
            CTreePayload::Operands { z: Some(z), .. } => Some(&**z),
            _ => None,
        }
    }

    fn args(&self) -> Vec<&dyn RawCItem> {
        match &self.payload {
            CTreePayload::Call { args, .. } => args.iter().map(|arg| arg as &dyn RawCItem).collect(),
            _ => Vec::new(),
        }
    }

    fn insn(&self) -> Option<&dyn RawCItem> {
        match &self.payload {
            CTreePayload::Insn(stmt) => Some(&**stmt),
            _ => None,
        }
    }

    fn numval(&self) -> Option<u64> {
        match self.payload {
            CTreePayload::Num(value) => Some(value),
            _ => None,
        }
    }

    fn fpc(&self) -> Option<f64> {
        match self.payload {
            CTreePayload::FNum(value) => Some(value),
            _ => None,
        }
    }

    fn string(&self) -> Option<&str> {
        match &self.payload {
            CTreePayload::Str(value) => Some(value.as_str()),
            _ => None,
        }
    }

    fn obj_ea(&self) -> Option<Address> {
        match self.payload {
            CTreePayload::Obj(ea) => Some(ea),
            _ => None,
        }
    }

    fn var_idx(&self) -> Option<u32> {
        match self.payload {
            CTreePayload::Var(idx) => Some(idx),
            _ => None,
        }
    }

    fn helper(&self) -> Option<&str> {
        match &self.payload {
            CTreePayload::Helper(name) => Some(name.as_str()),
            _ => None,
        }
    }

    fn member(&self) -> Option<u32> {
        match self.payload {
            CTreePayload::Member { m, .. } => Some(m),
            _ => None,
        }
    }

    fn cexpr(&self) -> Option<&dyn RawCItem> {
        match &self.payload {
            CTreePayload::Expr(expr)
            | CTreePayload::If { cond: expr, .. }
            | CTreePayload::For { cond: expr, .. }
            | CTreePayload::Loop { cond: expr, .. }
            | CTreePayload::Switch { expr, .. }
            | CTreePayload::Return(Some(expr)) => Some(&**expr),
            _ => None,
        }
    }

    fn init(&self) -> Option<&dyn RawCItem> {
        match &self.payload {
            CTreePayload::For { init, .. } => Some(&**init),
            _ => None,
        }
    }

    fn step(&self) -> Option<&dyn RawCItem> {
        match &self.payload {
            CTreePayload::For { step, .. } => Some(&**step),
            _ => None,
        }
    }

    fn body(&self) -> Option<&dyn RawCItem> {
        match &self.payload {
            CTreePayload::For { body, .. } | CTreePayload::Loop { body, .. } => {
                Some(&**body)
            }
            _ => None,
        }
    }

    fn ithen(&self) -> Option<&dyn RawCItem> {
        match &self.payload {
            CTreePayload::If { then, .. } => Some(&**then),
            _ => None,
        }
    }

    fn ielse(&self) -> Option<&dyn RawCItem> {
        match &self.payload {
            CTreePayload::If {
                otherwise: Some(otherwise),
                ..
            } => Some(&**otherwise),
            _ => None,
        }
    }

    fn block(&self) -> Vec<&dyn RawCItem> {
        match &self.payload {
            CTreePayload::Block(stmts) => stmts.iter().map(|stmt| stmt as &dyn RawCItem).collect(),
            _ => Vec::new(),
        }
    }

    fn cases(&self) -> Vec<RawCase<'_>> {
        match &self.payload {
            CTreePayload::Switch { cases, .. } => cases
                .iter()
                .map(|case| RawCase {
                    values: case.values.clone(),
                    body: &case.body,
                })
                .collect(),
            _ => Vec::new(),
        }
    }

    fn label_num(&self) -> Option<i32> {
        match self.payload {
            CTreePayload::Goto(label) => Some(label),
            _ => None,
        }
    }

    fn asm_eas(&self) -> Vec<Address> {
        match &self.payload {
            CTreePayload::Asm(eas) => eas.clone(),
            _ => Vec::new(),
        }
    }
}

/// Owned decompiled function.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CTreeFunc {
    pub ea: Address,
    pub name: String,
    pub body: CTreeItem,
}

impl CTreeFunc {
    pub fn new(ea: Address, name: impl Into<String>, body: CTreeItem) -> Self {
        Self {
            ea,
            name: name.into(),
            body,
        }
    }
}

impl RawCFunc for CTreeFunc {
    fn entry_ea(&self) -> Address {
        self.ea
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn body(&self) -> &dyn RawCItem {
        &self.body
    }
}
