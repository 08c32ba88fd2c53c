//! Node-kind tags of the ctree.
//!
//! Every concrete ctree node carries an integer tag (`ctype_t` on the host
//! side). The tag space is closed and fixed by the host IR: tags up to and
//! including [`HxCType::COT_LAST`] are expressions (`cot_*`), the ones above
//! are statements (`cit_*`). This layer only consumes tags, it never mints
//! new ones.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use strum::{EnumCount, EnumIter, EnumMessage, FromRepr, IntoStaticStr};

/// Raw integer tag of a ctree node, as reported by the collaborator.
///
/// A tag is not necessarily a valid [`HxCType`]: a newer host IR may report
/// kinds this crate does not know yet. Use [`Tag::ctype`] to classify it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tag(pub i32);

impl Tag {
    /// Reserved "no tag" value, distinct from every real tag. Abstract kinds
    /// use it as their [`TYPE_HANDLE`](crate::citem::CItemKind::TYPE_HANDLE).
    pub const NONE: Tag = Tag(-1);

    /// Returns true if the tag denotes an expression kind.
    #[inline]
    pub const fn is_expr(self) -> bool {
        self.0 <= HxCType::COT_LAST
    }

    /// Returns true if the tag denotes a statement kind.
    #[inline]
    pub const fn is_stmt(self) -> bool {
        !self.is_expr()
    }

    /// Returns the known node kind for this tag, if any.
    #[inline]
    pub fn ctype(self) -> Option<HxCType> {
        HxCType::from_tag(self)
    }
}

impl From<HxCType> for Tag {
    fn from(value: HxCType) -> Self {
        value.tag()
    }
}

impl std::fmt::Display for Tag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.ctype() {
            Some(ctype) => write!(f, "{} ({})", ctype.name(), self.0),
            None => write!(f, "{}", self.0),
        }
    }
}

/// Every node kind of the ctree, numbered as the host IR numbers them.
///
/// The message attached to each variant is the C construct it stands for
/// (see [`HxCType::description`]).
#[repr(i32)]
#[derive(
    Debug,
    Clone,
    Copy,
    Hash,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    EnumIter,
    EnumCount,
    EnumMessage,
    FromRepr,
    IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum HxCType {
    #[strum(message = "empty expression")]
    CotEmpty = 0,
    #[strum(message = "x, y")]
    CotComma = 1,
    #[strum(message = "x = y")]
    CotAsg = 2,
    #[strum(message = "x |= y")]
    CotAsgBOr = 3,
    #[strum(message = "x ^= y")]
    CotAsgXor = 4,
    #[strum(message = "x &= y")]
    CotAsgBAnd = 5,
    #[strum(message = "x += y")]
    CotAsgAdd = 6,
    #[strum(message = "x -= y")]
    CotAsgSub = 7,
    #[strum(message = "x *= y")]
    CotAsgMul = 8,
    #[strum(message = "x >>= y signed")]
    CotAsgSShr = 9,
    #[strum(message = "x >>= y unsigned")]
    CotAsgUShr = 10,
    #[strum(message = "x <<= y")]
    CotAsgShl = 11,
    #[strum(message = "x /= y signed")]
    CotAsgSDiv = 12,
    #[strum(message = "x /= y unsigned")]
    CotAsgUDiv = 13,
    #[strum(message = "x %= y signed")]
    CotAsgSMod = 14,
    #[strum(message = "x %= y unsigned")]
    CotAsgUMod = 15,
    #[strum(message = "x ? y : z")]
    CotTern = 16,
    #[strum(message = "x || y")]
    CotLOr = 17,
    #[strum(message = "x && y")]
    CotLAnd = 18,
    #[strum(message = "x | y")]
    CotBOr = 19,
    #[strum(message = "x ^ y")]
    CotXor = 20,
    #[strum(message = "x & y")]
    CotBAnd = 21,
    #[strum(message = "x == y int or fpu")]
    CotEq = 22,
    #[strum(message = "x != y int or fpu")]
    CotNe = 23,
    #[strum(message = "x >= y signed or fpu")]
    CotSGe = 24,
    #[strum(message = "x >= y unsigned")]
    CotUGe = 25,
    #[strum(message = "x <= y signed or fpu")]
    CotSLe = 26,
    #[strum(message = "x <= y unsigned")]
    CotULe = 27,
    #[strum(message = "x > y signed or fpu")]
    CotSGt = 28,
    #[strum(message = "x > y unsigned")]
    CotUGt = 29,
    #[strum(message = "x < y signed or fpu")]
    CotSLt = 30,
    #[strum(message = "x < y unsigned")]
    CotULt = 31,
    #[strum(message = "x >> y signed")]
    CotSShr = 32,
    #[strum(message = "x >> y unsigned")]
    CotUShr = 33,
    #[strum(message = "x << y")]
    CotShl = 34,
    #[strum(message = "x + y")]
    CotAdd = 35,
    #[strum(message = "x - y")]
    CotSub = 36,
    #[strum(message = "x * y")]
    CotMul = 37,
    #[strum(message = "x / y signed")]
    CotSDiv = 38,
    #[strum(message = "x / y unsigned")]
    CotUDiv = 39,
    #[strum(message = "x % y signed")]
    CotSMod = 40,
    #[strum(message = "x % y unsigned")]
    CotUMod = 41,
    #[strum(message = "x + y fp")]
    CotFAdd = 42,
    #[strum(message = "x - y fp")]
    CotFSub = 43,
    #[strum(message = "x * y fp")]
    CotFMul = 44,
    #[strum(message = "x / y fp")]
    CotFDiv = 45,
    #[strum(message = "-x fp")]
    CotFNeg = 46,
    #[strum(message = "-x")]
    CotNeg = 47,
    #[strum(message = "(type)x")]
    CotCast = 48,
    #[strum(message = "!x")]
    CotLNot = 49,
    #[strum(message = "~x")]
    CotBNot = 50,
    #[strum(message = "*x")]
    CotPtr = 51,
    #[strum(message = "&x")]
    CotRef = 52,
    #[strum(message = "x++")]
    CotPostInc = 53,
    #[strum(message = "x--")]
    CotPostDec = 54,
    #[strum(message = "++x")]
    CotPreInc = 55,
    #[strum(message = "--x")]
    CotPreDec = 56,
    #[strum(message = "x(...)")]
    CotCall = 57,
    #[strum(message = "x[y]")]
    CotIdx = 58,
    #[strum(message = "x.m")]
    CotMemRef = 59,
    #[strum(message = "x->m")]
    CotMemPtr = 60,
    #[strum(message = "n")]
    CotNum = 61,
    #[strum(message = "fpc")]
    CotFNum = 62,
    #[strum(message = "string constant")]
    CotStr = 63,
    #[strum(message = "obj_ea")]
    CotObj = 64,
    #[strum(message = "v")]
    CotVar = 65,
    #[strum(message = "instruction in expression")]
    CotInsn = 66,
    #[strum(message = "sizeof(x)")]
    CotSizeof = 67,
    #[strum(message = "arbitrary name")]
    CotHelper = 68,
    #[strum(message = "arbitrary type")]
    CotType = 69,
    #[strum(message = "empty statement")]
    CitEmpty = 70,
    #[strum(message = "block-statement: { ... }")]
    CitBlock = 71,
    #[strum(message = "expression-statement: expr;")]
    CitExpr = 72,
    #[strum(message = "if-statement")]
    CitIf = 73,
    #[strum(message = "for-statement")]
    CitFor = 74,
    #[strum(message = "while-statement")]
    CitWhile = 75,
    #[strum(message = "do-statement")]
    CitDo = 76,
    #[strum(message = "switch-statement")]
    CitSwitch = 77,
    #[strum(message = "break-statement")]
    CitBreak = 78,
    #[strum(message = "continue-statement")]
    CitContinue = 79,
    #[strum(message = "return-statement")]
    CitReturn = 80,
    #[strum(message = "goto-statement")]
    CitGoto = 81,
    #[strum(message = "asm-statement")]
    CitAsm = 82,
}

impl HxCType {
    /// Last expression tag: everything up to it is a `cot_*`, everything
    /// after it is a `cit_*`.
    pub const COT_LAST: i32 = HxCType::CotType as i32;

    /// One past the last statement tag. Not a node kind.
    pub const CIT_END: i32 = HxCType::CitAsm as i32 + 1;

    /// Returns the tag of this kind.
    #[inline]
    pub const fn tag(self) -> Tag {
        Tag(self as i32)
    }

    /// Returns the kind denoted by `tag`, or `None` if the tag lies outside
    /// the known tag space.
    #[inline]
    pub fn from_tag(tag: Tag) -> Option<Self> {
        HxCType::from_repr(tag.0)
    }

    #[inline]
    pub const fn is_expr(self) -> bool {
        self.tag().is_expr()
    }

    #[inline]
    pub const fn is_stmt(self) -> bool {
        self.tag().is_stmt()
    }

    /// Symbolic name of the kind (e.g. `CotAdd`).
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// The C construct this kind stands for (e.g. `x + y`).
    pub fn description(self) -> &'static str {
        self.get_message().unwrap_or("")
    }
}
