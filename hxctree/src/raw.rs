//! Interface of the decompilation collaborator.
//!
//! The decompiler owns the ctree for the duration of one analysis session
//! and hands out opaque node handles. This crate only reads them through
//! [`RawCItem`]; typed wrappers borrow the handles and must not outlive the
//! session that produced them.
//!
//! Accessors are grouped by the node shapes that use them. A collaborator
//! only needs to answer the ones relevant to the kinds it produces, the
//! others default to "absent".
use crate::ctype::Tag;

/// Address in the analysed binary.
pub type Address = u64;

/// Sentinel address for nodes with no equivalent address (e.g. nodes
/// synthesized by the decompiler).
pub const BADADDR: Address = u64::MAX;

/// One `case` of a switch statement as exposed by the collaborator.
pub struct RawCase<'a> {
    /// Values selecting this case. Empty for the `default` case.
    pub values: Vec<u64>,
    /// Statement executed for this case.
    pub body: &'a dyn RawCItem,
}

/// Opaque handle to one ctree node (`citem_t`).
pub trait RawCItem {
    /// Address of the node, [`BADADDR`] if it has none.
    fn ea(&self) -> Address;

    /// Raw tag of the node.
    fn op(&self) -> Tag;

    /// Returns true if the node is an expression (`cexpr_t`).
    fn is_expr(&self) -> bool {
        self.op().is_expr()
    }

    // Expression operands

    /// First operand of unary, binary, ternary, member and call nodes.
    fn x(&self) -> Option<&dyn RawCItem> {
        None
    }

    /// Second operand of binary and ternary nodes.
    fn y(&self) -> Option<&dyn RawCItem> {
        None
    }

    /// Third operand of ternary nodes.
    fn z(&self) -> Option<&dyn RawCItem> {
        None
    }

    /// Arguments of a call, in order.
    fn args(&self) -> Vec<&dyn RawCItem> {
        Vec::new()
    }

    /// Statement embedded in a `cot_insn` expression.
    fn insn(&self) -> Option<&dyn RawCItem> {
        None
    }

    // Expression payload

    fn numval(&self) -> Option<u64> {
        None
    }

    fn fpc(&self) -> Option<f64> {
        None
    }

    fn string(&self) -> Option<&str> {
        None
    }

    fn obj_ea(&self) -> Option<Address> {
        None
    }

    /// Index of the local variable in the function's variable list.
    fn var_idx(&self) -> Option<u32> {
        None
    }

    /// Name of a helper or of an arbitrary type.
    fn helper(&self) -> Option<&str> {
        None
    }

    /// Member offset of `x.m` and `x->m`.
    fn member(&self) -> Option<u32> {
        None
    }

    // Statement payload

    /// Expression owned by a statement: the expression of an
    /// expression-statement, the condition of `if`, `for`, `while`, `do`,
    /// the selector of `switch` and the value of `return`.
    fn cexpr(&self) -> Option<&dyn RawCItem> {
        None
    }

    /// Initialisation expression of a `for`.
    fn init(&self) -> Option<&dyn RawCItem> {
        None
    }

    /// Step expression of a `for`.
    fn step(&self) -> Option<&dyn RawCItem> {
        None
    }

    /// Body of a loop.
    fn body(&self) -> Option<&dyn RawCItem> {
        None
    }

    fn ithen(&self) -> Option<&dyn RawCItem> {
        None
    }

    fn ielse(&self) -> Option<&dyn RawCItem> {
        None
    }

    /// Statements of a block, in order.
    fn block(&self) -> Vec<&dyn RawCItem> {
        Vec::new()
    }

    fn cases(&self) -> Vec<RawCase<'_>> {
        Vec::new()
    }

    /// Target label of a `goto`.
    fn label_num(&self) -> Option<i32> {
        None
    }

    /// Instruction addresses of an `asm` statement.
    fn asm_eas(&self) -> Vec<Address> {
        Vec::new()
    }
}

/// Decompiled function as exposed by the collaborator (`cfunc_t`).
pub trait RawCFunc {
    /// Entry address of the function.
    fn entry_ea(&self) -> Address;

    fn name(&self) -> &str;

    /// Root statement of the function body.
    fn body(&self) -> &dyn RawCItem;
}
