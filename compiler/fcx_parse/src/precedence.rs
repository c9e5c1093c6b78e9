//! Binding power levels for the Pratt loop.
//!
//! Levels match the registry's 1..=12 precedence column, so a descriptor's
//! `precedence` converts directly with [`Precedence::from_level`].


/// Binding power, lowest first.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Precedence {
    None = 0,
    /// `,` and `:`
    Sequence = 1,
    Assignment = 2,
    Logical = 3,
    CombinedAssign = 4,
    Comparison = 5,
    Bitwise = 6,
    Additive = 7,
    Multiplicative = 8,
    ShiftRotate = 9,
    FieldLayout = 10,
    Unary = 11,
    Call = 12,
}

impl Precedence {
    /// The next tighter level. `Call` is the ceiling.
    #[must_use]
    pub const fn next(self) -> Precedence {
        match self {
            Precedence::None => Precedence::Sequence,
            Precedence::Sequence => Precedence::Assignment,
            Precedence::Assignment => Precedence::Logical,
            Precedence::Logical => Precedence::CombinedAssign,
            Precedence::CombinedAssign => Precedence::Comparison,
            Precedence::Comparison => Precedence::Bitwise,
            Precedence::Bitwise => Precedence::Additive,
            Precedence::Additive => Precedence::Multiplicative,
            Precedence::Multiplicative => Precedence::ShiftRotate,
            Precedence::ShiftRotate => Precedence::FieldLayout,
            Precedence::FieldLayout => Precedence::Unary,
            Precedence::Unary | Precedence::Call => Precedence::Call,
        }
    }

    /// Map a registry precedence level. Out-of-range levels clamp.
    pub const fn from_level(level: u8) -> Precedence {
        match level {
            0 => Precedence::None,
            1 => Precedence::Sequence,
            2 => Precedence::Assignment,
            3 => Precedence::Logical,
            4 => Precedence::CombinedAssign,
            5 => Precedence::Comparison,
            6 => Precedence::Bitwise,
            7 => Precedence::Additive,
            8 => Precedence::Multiplicative,
            9 => Precedence::ShiftRotate,
            10 => Precedence::FieldLayout,
            11 => Precedence::Unary,
            _ => Precedence::Call,
        }
    }

    #[inline]
    pub const fn level(self) -> u8 {
        self as u8
    }
}
