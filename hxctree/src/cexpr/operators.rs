//! Operator expressions.
//!
//! Unary kinds expose `[x]`, binary kinds `[x, y]` (left before right),
//! member accesses `[x]`, the ternary operator `[x, y, z]` (condition,
//! then, else) and calls `[callee, args...]`.
use crate::{
    cexpr::{CExpr, CExprList},
    citem::{CNode, HxCExpr},
    registry::CItemRegistration,
    utils::HxResult,
};

macro_rules! unary_kinds {
    ($($(#[$meta:meta])* $name:ident => $ctype:ident;)+) => {
        $(
            citem_kind!(expr $(#[$meta])* $name => $ctype);

            impl<'a> $name<'a> {
                /// Operand of the operator.
                pub fn x(&self) -> HxResult<HxCExpr<'a>> {
                    self.node.required_expr(stringify!($name), "x", self.node.raw().x())
                }
            }

            impl<'a> CExpr<'a> for $name<'a> {
                fn node(&self) -> CNode<'a> {
                    self.node
                }

                fn ops(&self) -> HxResult<CExprList<'a>> {
                    Ok(vec![self.x()?])
                }
            }
        )+

        pub(crate) static UNARY_KINDS: &[CItemRegistration] = &[
            $(crate::citem_registration!($name),)+
        ];
    };
}

macro_rules! binary_kinds {
    ($($(#[$meta:meta])* $name:ident => $ctype:ident;)+) => {
        $(
            citem_kind!(expr $(#[$meta])* $name => $ctype);

            impl<'a> $name<'a> {
                /// Left operand.
                pub fn x(&self) -> HxResult<HxCExpr<'a>> {
                    self.node.required_expr(stringify!($name), "x", self.node.raw().x())
                }

                /// Right operand.
                pub fn y(&self) -> HxResult<HxCExpr<'a>> {
                    self.node.required_expr(stringify!($name), "y", self.node.raw().y())
                }
            }

            impl<'a> CExpr<'a> for $name<'a> {
                fn node(&self) -> CNode<'a> {
                    self.node
                }

                fn ops(&self) -> HxResult<CExprList<'a>> {
                    Ok(vec![self.x()?, self.y()?])
                }
            }
        )+

        pub(crate) static BINARY_KINDS: &[CItemRegistration] = &[
            $(crate::citem_registration!($name),)+
        ];
    };
}

macro_rules! member_kinds {
    ($($(#[$meta:meta])* $name:ident => $ctype:ident;)+) => {
        $(
            citem_kind!(expr $(#[$meta])* $name => $ctype);

            impl<'a> $name<'a> {
                /// Accessed object.
                pub fn x(&self) -> HxResult<HxCExpr<'a>> {
                    self.node.required_expr(stringify!($name), "x", self.node.raw().x())
                }

                /// Offset of the accessed member.
                pub fn member_offset(&self) -> HxResult<u32> {
                    self.node
                        .raw()
                        .member()
                        .ok_or_else(|| self.node.missing(stringify!($name), "m"))
                }
            }

            impl<'a> CExpr<'a> for $name<'a> {
                fn node(&self) -> CNode<'a> {
                    self.node
                }

                fn ops(&self) -> HxResult<CExprList<'a>> {
                    Ok(vec![self.x()?])
                }

                fn summary(&self) -> Option<String> {
                    self.node.raw().member().map(|m| format!("m={}", m))
                }
            }
        )+

        pub(crate) static MEMBER_KINDS: &[CItemRegistration] = &[
            $(crate::citem_registration!($name),)+
        ];
    };
}

unary_kinds! {
    /// `-x` on floating point values.
    CExprFNeg => CotFNeg;
    /// `-x`
    CExprNeg => CotNeg;
    /// `(type)x`
    CExprCast => CotCast;
    /// `!x`
    CExprLNot => CotLNot;
    /// `~x`
    CExprBNot => CotBNot;
    /// `*x`
    CExprPtr => CotPtr;
    /// `&x`
    CExprRef => CotRef;
    /// `x++`
    CExprPostInc => CotPostInc;
    /// `x--`
    CExprPostDec => CotPostDec;
    /// `++x`
    CExprPreInc => CotPreInc;
    /// `--x`
    CExprPreDec => CotPreDec;
    /// `sizeof(x)`
    CExprSizeof => CotSizeof;
}

binary_kinds! {
    /// `x, y`
    CExprComma => CotComma;
    /// `x = y`
    CExprAsg => CotAsg;
    /// `x |= y`
    CExprAsgBOr => CotAsgBOr;
    /// `x ^= y`
    CExprAsgXor => CotAsgXor;
    /// `x &= y`
    CExprAsgBAnd => CotAsgBAnd;
    /// `x += y`
    CExprAsgAdd => CotAsgAdd;
    /// `x -= y`
    CExprAsgSub => CotAsgSub;
    /// `x *= y`
    CExprAsgMul => CotAsgMul;
    /// `x >>= y` signed
    CExprAsgSShr => CotAsgSShr;
    /// `x >>= y` unsigned
    CExprAsgUShr => CotAsgUShr;
    /// `x <<= y`
    CExprAsgShl => CotAsgShl;
    /// `x /= y` signed
    CExprAsgSDiv => CotAsgSDiv;
    /// `x /= y` unsigned
    CExprAsgUDiv => CotAsgUDiv;
    /// `x %= y` signed
    CExprAsgSMod => CotAsgSMod;
    /// `x %= y` unsigned
    CExprAsgUMod => CotAsgUMod;
    /// `x || y`
    CExprLOr => CotLOr;
    /// `x && y`
    CExprLAnd => CotLAnd;
    /// `x | y`
    CExprBOr => CotBOr;
    /// `x ^ y`
    CExprXor => CotXor;
    /// `x & y`
    CExprBAnd => CotBAnd;
    /// `x == y`
    CExprEq => CotEq;
    /// `x != y`
    CExprNe => CotNe;
    /// `x >= y` signed or floating point
    CExprSGe => CotSGe;
    /// `x >= y` unsigned
    CExprUGe => CotUGe;
    /// `x <= y` signed or floating point
    CExprSLe => CotSLe;
    /// `x <= y` unsigned
    CExprULe => CotULe;
    /// `x > y` signed or floating point
    CExprSGt => CotSGt;
    /// `x > y` unsigned
    CExprUGt => CotUGt;
    /// `x < y` signed or floating point
    CExprSLt => CotSLt;
    /// `x < y` unsigned
    CExprULt => CotULt;
    /// `x >> y` signed
    CExprSShr => CotSShr;
    /// `x >> y` unsigned
    CExprUShr => CotUShr;
    /// `x << y`
    CExprShl => CotShl;
    /// `x + y`
    CExprAdd => CotAdd;
    /// `x - y`
    CExprSub => CotSub;
    /// `x * y`
    CExprMul => CotMul;
    /// `x / y` signed
    CExprSDiv => CotSDiv;
    /// `x / y` unsigned
    CExprUDiv => CotUDiv;
    /// `x % y` signed
    CExprSMod => CotSMod;
    /// `x % y` unsigned
    CExprUMod => CotUMod;
    /// `x + y` on floating point values
    CExprFAdd => CotFAdd;
    /// `x - y` on floating point values
    CExprFSub => CotFSub;
    /// `x * y` on floating point values
    CExprFMul => CotFMul;
    /// `x / y` on floating point values
    CExprFDiv => CotFDiv;
    /// `x[y]`
    CExprIdx => CotIdx;
}

member_kinds! {
    /// `x.m`
    CExprMemRef => CotMemRef;
    /// `x->m`
    CExprMemPtr => CotMemPtr;
}

citem_kind!(expr
    /// `x ? y : z`
    CExprTern => CotTern);

impl<'a> CExprTern<'a> {
    pub fn cond(&self) -> HxResult<HxCExpr<'a>> {
        self.node.required_expr("CExprTern", "x", self.node.raw().x())
    }

    pub fn then_expr(&self) -> HxResult<HxCExpr<'a>> {
        self.node.required_expr("CExprTern", "y", self.node.raw().y())
    }

    pub fn else_expr(&self) -> HxResult<HxCExpr<'a>> {
        self.node.required_expr("CExprTern", "z", self.node.raw().z())
    }
}

impl<'a> CExpr<'a> for CExprTern<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }

    fn ops(&self) -> HxResult<CExprList<'a>> {
        Ok(vec![self.cond()?, self.then_expr()?, self.else_expr()?])
    }
}

citem_kind!(expr
    /// `x(...)`
    CExprCall => CotCall);

impl<'a> CExprCall<'a> {
    /// The called expression, usually a [`CExprObj`](super::CExprObj) or a
    /// [`CExprHelper`](super::CExprHelper).
    pub fn callee(&self) -> HxResult<HxCExpr<'a>> {
        self.node.required_expr("CExprCall", "x", self.node.raw().x())
    }

    pub fn args(&self) -> HxResult<CExprList<'a>> {
        self.node
            .raw()
            .args()
            .into_iter()
            .map(|arg| self.node.expr(arg))
            .collect()
    }

    pub fn arg_count(&self) -> usize {
        self.node.raw().args().len()
    }
}

impl<'a> CExpr<'a> for CExprCall<'a> {
    fn node(&self) -> CNode<'a> {
        self.node
    }

    fn ops(&self) -> HxResult<CExprList<'a>> {
        let mut ops = vec![self.callee()?];
        ops.extend(self.args()?);
        Ok(ops)
    }
}

pub(crate) static OTHER_KINDS: &[CItemRegistration] = &[
    crate::citem_registration!(CExprTern),
    crate::citem_registration!(CExprCall),
];
