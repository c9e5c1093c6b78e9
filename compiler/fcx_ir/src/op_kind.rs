//! Operator kinds.
//!
//! `OpKind` is the closed set of operator meanings shared by the registry,
//! the trie, the lexer and the parser. Several symbols may share a kind
//! (`<<<` and `<<<<` both rotate left); every descriptor of a kind has the
//! same precedence and associativity.
//!
//! Compound assignments have their own kinds (`AddAssign`, `LShiftAssign`, ...)
//! so the parser never inspects symbol text to tell `+` from `+=`.

use crate::ast::{AtomicOpKind, MemoryOpKind, SyscallKind};

/// Operator meaning.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub enum OpKind {
    /// Less than / move backward: `<`.
    Lt,
    /// Logical left shift: `<<`.
    LShift,
    /// Rotate left: `<<<`, `<<<<`, `<<<<<`.
    RotateLeft,
    /// Greater than / move forward: `>`.
    Gt,
    /// Arithmetic right shift: `>>`.
    RShift,
    /// Logical right shift: `>>>`.
    LogicalRShift,
    /// Rotate right: `>>>>`, `>>>>>`.
    RotateRight,
    /// Pointer slice start: `</`, `<\`, `<:`, `<;`, ....
    SliceStart,
    /// Memory slice end: `/>`, `\>`, `:>`, `;>`, ....
    SliceEnd,
    /// Memory subrange: `</>`.
    SliceRange,
    /// Reverse slice: `>/<`.
    ReverseSlice,
    /// Pop from / pipe left: `<|`, `<|>>`.
    PopFrom,
    /// Push into / pipe right: `|>`, `||||`, `|>|`, `|><|`.
    PushInto,
    /// Assignment: `=`.
    Assign,
    /// Inferred assignment: `:=`.
    AssignInfer,
    /// Add assign: `+=`.
    AddAssign,
    /// Subtract assign: `-=`.
    SubAssign,
    /// Multiply assign: `*=`.
    MulAssign,
    /// Divide assign: `/=`.
    DivAssign,
    /// Modulo assign: `%=`.
    ModAssign,
    /// Bitwise AND assign: `&=`.
    AndAssign,
    /// Bitwise OR assign: `|=`.
    OrAssign,
    /// Bitwise XOR assign: `^=`.
    XorAssign,
    /// Left shift assign: `<<=`.
    LShiftAssign,
    /// Right shift assign: `>>=`.
    RShiftAssign,
    /// Logical right shift assign: `>>>=`.
    LogicalRShiftAssign,
    /// Rotate left assign: `<<<=`.
    RotateLeftAssign,
    /// Rotate right assign: `>>>>=`.
    RotateRightAssign,
    /// Compare and swap: `<=>`.
    Cas,
    /// Atomic swap: `<==>`, `<===>`.
    Swap,
    /// Less equal: `<=`, `<==`, `<===`.
    Le,
    /// Greater equal: `>=`, `==>`, `===>`.
    Ge,
    /// Equal: `==`.
    Eq,
    /// Not equal: `!=`.
    Ne,
    /// Pattern not equal: `<>`.
    PatternNe,
    /// Ranges overlap / volatile store: `><`.
    OverlapTest,
    /// Less equal or flag: `<=|`.
    LeOrFlag,
    /// Implies: `|=>`.
    Implies,
    /// Increment: `++`.
    Increment,
    /// Decrement: `--`.
    Decrement,
    /// Power / double multiply: `**`, `***`.
    Power,
    /// Push with shift: `>>|`, `>>>|`.
    PushShift,
    /// Pop with shift: `|<<`, `|<<<`.
    PopShift,
    /// Member access: `->`.
    Arrow,
    /// Reverse member access: `<-`, `<<-`, `<<--`, `<-<-`, ....
    ReverseLayout,
    /// Layout access: `->>`, `-->>`, `->->`, `-><<`.
    LayoutAccess,
    /// Store with persistence: `*/`.
    PersistStore,
    /// Load with persistence: `/*`.
    PersistLoad,
    /// Bitwise NOT move: `~>`, `<~`.
    NotMove,
    /// NOT volatile store: `~><~`.
    VolatileStore,
    /// NOT no-alias store: `<~>>`.
    NoAliasStore,
    /// Double NOT: `~~`.
    DoubleNot,
    /// Bitwise AND: `&`.
    BitAnd,
    /// Bitwise OR: `|`.
    BitOr,
    /// Bitwise XOR: `^`.
    BitXor,
    /// Bitwise NOT: `~`.
    BitNot,
    /// Bitfield extract: `&>`, `&|`, `&^`.
    BitfieldExtract,
    /// Bitfield insert: `&<`.
    BitfieldInsert,
    /// XOR extract: `^>`, `^<`, `>>^`, `^<<`, ....
    BitwiseRotateXor,
    /// Shift with mask: `<<&`, `&<<`, `&<<&`.
    ShiftMask,
    /// Extract with right shift: `&>>`, `&>>&`.
    ExtractRShift,
    /// OR AND: `|&`, `|^`, `|>>|`.
    OrMask,
    /// Logical AND: `&&`, `&&&`.
    LogicalAnd,
    /// Logical OR: `||`, `|||`.
    LogicalOr,
    /// Logical XOR: `^^`, `^^^`.
    LogicalXor,
    /// Allocate memory: `mem>`, `heap>`, `pool>`, `align>`, ....
    Allocate,
    /// Deallocate memory: `>mem`, `>heap`, `>pool`, `>align`, ....
    Deallocate,
    /// Stack allocation: `stack>`.
    StackAlloc,
    /// Stack deallocation: `>stack`.
    StackFree,
    /// At symbol: `@`.
    At,
    /// MMIO map address: `@>`, `@@`, `@@@`, `mmap>`.
    MmioMap,
    /// MMIO unmap: `<@`, `>mmap`.
    MmioUnmap,
    /// Atomic read: `!`.
    AtomicRead,
    /// Atomic write: `!!`, `=!`.
    AtomicWrite,
    /// Atomic triple op: `!!!`, `!!!!`, `!!!!!`.
    AtomicTriple,
    /// Atomic conditional: `!?`, `!!?`.
    AtomicCond,
    /// Error handle: `?!`.
    ErrorHandle,
    /// Atomic fetch add: `?!!`, `?!!?`, `!+=`.
    AtomicFetchAdd,
    /// Atomic XOR: `~!`, `!~`, `~!~`, `!^=`.
    AtomicXor,
    /// Atomic fence: `|!|`, `!|!`, `||!`, `!||`.
    AtomicFence,
    /// Full memory barrier: `!=>`, `<=!`, `!<>!`, `!><!`.
    BarrierFull,
    /// Release barrier: `!>`, `>!`.
    BarrierRelease,
    /// Acquire barrier: `<!`, `!<`.
    BarrierAcquire,
    /// Atomic sub assign: `!-=`.
    AtomicFetchSub,
    /// Atomic AND assign: `!&=`.
    AtomicAnd,
    /// Atomic OR assign: `!|=`.
    AtomicOr,
    /// Atomic left shift assign: `!<<=`.
    AtomicShl,
    /// Atomic right shift assign: `!>>=`.
    AtomicShr,
    /// Spawn thread: `spawn>`.
    Spawn,
    /// Write syscall: `$/`, `$/$`, `write>`.
    WriteSyscall,
    /// Read syscall: `/$`, `read>`.
    ReadSyscall,
    /// Raw syscall: `sys%`, `%sys`.
    RawSyscall,
    /// Inline assembly: `asm%`.
    InlineAsm,
    /// Syscall wrapper: `@sys`, `sys@`, `open>`, `close>`, ....
    SysWrapper,
    /// Privilege escalate: `#!`, `##`, `###`.
    PrivEscalate,
    /// Capability check: `!#`.
    CapabilityCheck,
    /// Resource query: `%$`, `%$%`, `%%`, `%%%`.
    ResourceQuery,
    /// Resource allocation: `$%`, `$%$`, `$$$`.
    ResourceAlloc,
    /// Encode to bytes: `/>/`, `/>/<`, `hex>`, `bin>`, ....
    EncodeBytes,
    /// Decode from bytes: `<\<`, `<\>\`.
    DecodeBytes,
    /// Print function: `print>`, `log>`, `debug>`, `error>`, ....
    PrintCompact,
    /// Scan function: `scan>`, `fmt>`.
    FormatPrint,
    /// Division: `/`.
    Div,
    /// Integer division: `//`.
    IntDiv,
    /// Fast reciprocal: `///`.
    FastRecip,
    /// Quad division: `////`.
    QuadDiv,
    /// Penta division: `/////`.
    PentaDiv,
    /// Modulo: `/%`, `%/`, `/%/`.
    ModDivisor,
    /// SIMD divide: `/|/`, `/||/`.
    SimdDiv,
    /// Parallel divide: `|/|`, `||/||`.
    ParallelDiv,
    /// Addition: `+`.
    Add,
    /// Subtraction: `-`.
    Sub,
    /// Multiplication: `*`.
    Mul,
    /// Multiply add: `+*`.
    MulAdd,
    /// Add multiply: `*+`.
    AddMul,
    /// Multiply subtract: `-*`.
    MulSub,
    /// Population count: `popcount>`.
    Popcount,
    /// Count leading zeros: `clz>`.
    Clz,
    /// Count trailing zeros: `ctz>`.
    Ctz,
    /// Byte swap endianness: `byteswap>`.
    Byteswap,
    /// Minimum: `<?`.
    Min,
    /// Maximum: `>?`.
    Max,
    /// Three-way compare: `<=>?`, `<~>`.
    ThreeWayCmp,
    /// Clamp between min max: `<|>`.
    Clamp,
    /// Less equal maybe: `<=?`.
    LeMaybe,
    /// Greater equal maybe: `>=?`.
    GeMaybe,
    /// Equal maybe: `==?`.
    EqMaybe,
    /// Not equal maybe: `!=?`.
    NeMaybe,
    /// Less than double check: `<??`.
    LtDouble,
    /// Greater than double check: `>??`.
    GtDouble,
    /// Compare with assert: `<=>!`.
    CmpAssert,
    /// Swap with assert: `<==>!`.
    SwapAssert,
    /// Square root: `sqrt>`.
    Sqrt,
    /// Reciprocal square root: `rsqrt>`.
    Rsqrt,
    /// Absolute value: `abs>`.
    Abs,
    /// Floor: `floor>`.
    Floor,
    /// Ceiling: `ceil>`.
    Ceil,
    /// Truncate: `trunc>`.
    Trunc,
    /// Round nearest: `round>`.
    Round,
    /// Prefetch memory: `prefetch>`.
    Prefetch,
    /// Prefetch for write: `prefetch_write>`.
    PrefetchWrite,
    /// Saturating add: `+|`.
    SatAdd,
    /// Saturating subtract: `-|`.
    SatSub,
    /// Saturating multiply: `*|`.
    SatMul,
    /// Wrapping add: `+%`.
    WrapAdd,
    /// Wrapping subtract: `-%`.
    WrapSub,
    /// Wrapping multiply: `*%`.
    WrapMul,
    /// Checked add: `+?`.
    CheckedAdd,
    /// Checked subtract: `-?`.
    CheckedSub,
    /// Checked multiply: `*?`.
    CheckedMul,
    /// Range exclusive: `..`.
    Range,
    /// Range inclusive: `..=`, `..>`.
    RangeInclusive,
    /// Range exclusive FCx: `..<`.
    RangeExclusive,
    /// Align up: `align_up>`.
    AlignUp,
    /// Align down: `align_down>`.
    AlignDown,
    /// Check alignment: `is_aligned?>`.
    IsAligned,
    /// Arena allocation: `arena>`.
    ArenaAlloc,
    /// Arena reset: `>arena`.
    ArenaFree,
    /// Slab allocation: `slab>`.
    SlabAlloc,
    /// Slab deallocation: `>slab`.
    SlabFree,
    /// Compile-time sizeof: `@sizeof>`.
    Sizeof,
    /// Compile-time alignof: `@alignof>`.
    Alignof,
    /// Compile-time offsetof: `@offsetof>`.
    Offsetof,
    /// Static assert: `@!`.
    StaticAssert,
    /// Conditional: `?`, `??`, `???`.
    Conditional,
    /// Scope resolution: `::`, `:::`.
    ScopeResolve,
    /// Double semicolon: `;;`.
    DoubleSemicolon,

    // Resolved by the disambiguation layer only; no symbol lexes to these.
    /// `name <=> fn(...) { ... }` function definition.
    FunctionDef,
    /// `<<` inside a syscall argument list.
    DirectInput,
    /// `>>` inside a syscall argument list.
    DirectOutput,
}

impl OpKind {
    /// Plain and compound assignment operators.
    pub const fn is_assignment(self) -> bool {
        matches!(
            self,
            OpKind::Assign
                | OpKind::AssignInfer
                | OpKind::AddAssign
                | OpKind::SubAssign
                | OpKind::MulAssign
                | OpKind::DivAssign
                | OpKind::ModAssign
                | OpKind::AndAssign
                | OpKind::OrAssign
                | OpKind::XorAssign
                | OpKind::LShiftAssign
                | OpKind::RShiftAssign
                | OpKind::LogicalRShiftAssign
                | OpKind::RotateLeftAssign
                | OpKind::RotateRightAssign
        )
    }

    /// Memory-management prefix operation, if this kind is one.
    ///
    /// Layout accessors (`->>`, `<-`) are infix and map separately through
    /// [`OpKind::is_layout_access`].
    pub const fn memory_op(self) -> Option<MemoryOpKind> {
        Some(match self {
            OpKind::Allocate => MemoryOpKind::Allocate,
            OpKind::Deallocate => MemoryOpKind::Deallocate,
            OpKind::StackAlloc => MemoryOpKind::StackAlloc,
            OpKind::StackFree => MemoryOpKind::StackFree,
            OpKind::MmioMap => MemoryOpKind::MmioMap,
            OpKind::MmioUnmap => MemoryOpKind::MmioUnmap,
            OpKind::ArenaAlloc => MemoryOpKind::ArenaAlloc,
            OpKind::ArenaFree => MemoryOpKind::ArenaReset,
            OpKind::SlabAlloc => MemoryOpKind::SlabAlloc,
            OpKind::SlabFree => MemoryOpKind::SlabFree,
            OpKind::AlignUp => MemoryOpKind::AlignUp,
            OpKind::AlignDown => MemoryOpKind::AlignDown,
            OpKind::IsAligned => MemoryOpKind::IsAligned,
            OpKind::Prefetch => MemoryOpKind::Prefetch,
            OpKind::PrefetchWrite => MemoryOpKind::PrefetchWrite,
            _ => return None,
        })
    }

    /// Infix structure-layout accessors (`->>`, `<-`, `-><<`, ...).
    pub const fn is_layout_access(self) -> bool {
        matches!(self, OpKind::LayoutAccess | OpKind::ReverseLayout)
    }

    /// Atomic or concurrency operation, if this kind is one.
    pub const fn atomic_op(self) -> Option<AtomicOpKind> {
        Some(match self {
            OpKind::AtomicRead => AtomicOpKind::Read,
            OpKind::AtomicWrite => AtomicOpKind::Write,
            OpKind::AtomicTriple => AtomicOpKind::Triple,
            OpKind::AtomicCond => AtomicOpKind::CondWrite,
            OpKind::AtomicFetchAdd => AtomicOpKind::FetchAdd,
            OpKind::AtomicFetchSub => AtomicOpKind::FetchSub,
            OpKind::AtomicXor => AtomicOpKind::Xor,
            OpKind::AtomicAnd => AtomicOpKind::And,
            OpKind::AtomicOr => AtomicOpKind::Or,
            OpKind::AtomicShl => AtomicOpKind::Shl,
            OpKind::AtomicShr => AtomicOpKind::Shr,
            OpKind::AtomicFence => AtomicOpKind::Fence,
            OpKind::BarrierFull => AtomicOpKind::BarrierFull,
            OpKind::BarrierRelease => AtomicOpKind::BarrierRelease,
            OpKind::BarrierAcquire => AtomicOpKind::BarrierAcquire,
            OpKind::Spawn => AtomicOpKind::Spawn,
            OpKind::Cas => AtomicOpKind::Cas,
            OpKind::Swap => AtomicOpKind::Swap,
            _ => return None,
        })
    }

    /// System-call family operation, if this kind is one.
    ///
    /// `asm%` is excluded; inline assembly has its own node.
    pub const fn syscall(self) -> Option<SyscallKind> {
        Some(match self {
            OpKind::WriteSyscall => SyscallKind::Write,
            OpKind::ReadSyscall => SyscallKind::Read,
            OpKind::RawSyscall => SyscallKind::Raw,
            OpKind::SysWrapper => SyscallKind::Wrapper,
            OpKind::PrivEscalate => SyscallKind::PrivEscalate,
            OpKind::CapabilityCheck => SyscallKind::CapabilityCheck,
            OpKind::ResourceQuery => SyscallKind::ResourceQuery,
            OpKind::ResourceAlloc => SyscallKind::ResourceAlloc,
            _ => return None,
        })
    }

    /// Print/format operators whose operand is parsed in format-string
    /// context.
    pub const fn is_format(self) -> bool {
        matches!(self, OpKind::PrintCompact | OpKind::FormatPrint)
    }

    /// Kinds produced only by disambiguation.
    pub const fn is_resolved_only(self) -> bool {
        matches!(
            self,
            OpKind::FunctionDef | OpKind::DirectInput | OpKind::DirectOutput
        )
    }
}
