//! The built-in operator table.
//!
//! One row per symbol, in catalog order. Suggestion lists for unknown
//! operators walk this order, so keep related symbols together.
//!
//! Symbols starting with `//` or `/*` are registered but never reach the
//! trie from source text: comment skipping runs first.

#![expect(
    clippy::enum_glob_use,
    reason = "one-line table rows need bare variant names"
)]

use fcx_ir::OpKind::*;

use super::Arity::*;
use super::Associativity::*;
use super::Direction::*;
use super::OperatorCategory::*;
use super::OperatorDescriptor;

#[expect(
    clippy::too_many_arguments,
    reason = "mirrors the table's column layout"
)]
pub(crate) const fn op(
    symbol: &'static str,
    kind: fcx_ir::OpKind,
    precedence: u8,
    assoc: super::Associativity,
    arity: super::Arity,
    category: super::OperatorCategory,
    semantics: &'static str,
    template: &'static str,
    direction: super::Direction,
) -> OperatorDescriptor {
    OperatorDescriptor {
        symbol,
        kind,
        precedence,
        assoc,
        arity,
        category,
        semantics,
        template,
        direction,
    }
}

pub(super) static OPERATORS: &[OperatorDescriptor] = &[
    op("<", Lt, 5, Left, Binary, ShiftRotate, "less than / move backward", "cmp %0, %1; setl %2", LeftFacing),
    op("<<", LShift, 9, Left, Binary, ShiftRotate, "logical left shift", "shl %0, %1", LeftFacing),
    op("<<<", RotateLeft, 9, Left, Binary, ShiftRotate, "rotate left", "rol %0, %1", LeftFacing),
    op("<<<<", RotateLeft, 9, Left, Binary, ShiftRotate, "quad rotate left", "rol %0, %1; rol %0, %1", LeftFacing),
    op("<<<<<", RotateLeft, 9, Left, Binary, ShiftRotate, "penta rotate left", "rol %0, %1; rol %0, %1; rol %0, %1", LeftFacing),
    op(">", Gt, 5, Left, Binary, ShiftRotate, "greater than / move forward", "cmp %0, %1; setg %2", RightFacing),
    op(">>", RShift, 9, Left, Binary, ShiftRotate, "arithmetic right shift", "sar %0, %1", RightFacing),
    op(">>>", LogicalRShift, 9, Left, Binary, ShiftRotate, "logical right shift", "shr %0, %1", RightFacing),
    op(">>>>", RotateRight, 9, Left, Binary, ShiftRotate, "rotate right", "ror %0, %1", RightFacing),
    op(">>>>>", RotateRight, 9, Left, Binary, ShiftRotate, "penta rotate right", "ror %0, %1; ror %0, %1; ror %0, %1", RightFacing),
    op("</", SliceStart, 9, Left, Binary, ShiftRotate, "pointer slice start", "add %0, %1", LeftFacing),
    op("/>", SliceEnd, 9, Left, Binary, ShiftRotate, "memory slice end", "add %0, %1", RightFacing),
    op("</>", SliceRange, 9, Left, Ternary, ShiftRotate, "memory subrange", "lea %0, [%1+%2]", Bidirectional),
    op(">/<", ReverseSlice, 9, Left, Binary, ShiftRotate, "reverse slice", "sub %0, %1", Bidirectional),
    op("<\\", SliceStart, 9, Left, Binary, ShiftRotate, "backslash slice start", "add %0, %1", LeftFacing),
    op("\\>", SliceEnd, 9, Left, Binary, ShiftRotate, "backslash slice end", "add %0, %1", RightFacing),
    op("<|", PopFrom, 7, Left, Binary, ShiftRotate, "pop from / pipe left", "pop %0", LeftFacing),
    op("|>", PushInto, 7, Left, Binary, ShiftRotate, "push into / pipe right", "push %1", RightFacing),
    op("<:", SliceStart, 9, Left, Binary, ShiftRotate, "colon slice start", "add %0, %1", LeftFacing),
    op(":>", SliceEnd, 9, Left, Binary, ShiftRotate, "colon slice end", "add %0, %1", RightFacing),
    op("<;", SliceStart, 9, Left, Binary, ShiftRotate, "semicolon slice start", "add %0, %1", LeftFacing),
    op(";>", SliceEnd, 9, Left, Binary, ShiftRotate, "semicolon slice end", "add %0, %1", RightFacing),
    op("?>", SliceEnd, 9, Left, Binary, ShiftRotate, "question slice end", "add %0, %1", RightFacing),
    op("<^", SliceStart, 9, Left, Binary, ShiftRotate, "caret slice start", "add %0, %1", LeftFacing),
    op("<%", SliceStart, 9, Left, Binary, ShiftRotate, "percent slice start", "add %0, %1", LeftFacing),
    op("%>", SliceEnd, 9, Left, Binary, ShiftRotate, "percent slice end", "add %0, %1", RightFacing),
    op("=", Assign, 2, Right, Binary, ArithAssign, "assignment", "mov %0, %1", RightFacing),
    op(":=", AssignInfer, 2, Right, Binary, ArithAssign, "inferred assignment", "mov %0, %1", RightFacing),
    op("+=", AddAssign, 2, Right, Binary, ArithAssign, "add assign", "add %0, %1", RightFacing),
    op("-=", SubAssign, 2, Right, Binary, ArithAssign, "subtract assign", "sub %0, %1", RightFacing),
    op("*=", MulAssign, 2, Right, Binary, ArithAssign, "multiply assign", "imul %0, %1", RightFacing),
    op("/=", DivAssign, 2, Right, Binary, ArithAssign, "divide assign", "div %1", RightFacing),
    op("%=", ModAssign, 2, Right, Binary, ArithAssign, "modulo assign", "div %1; mov %0, rdx", RightFacing),
    op("&=", AndAssign, 2, Right, Binary, ArithAssign, "bitwise AND assign", "and %0, %1", RightFacing),
    op("|=", OrAssign, 2, Right, Binary, ArithAssign, "bitwise OR assign", "or %0, %1", RightFacing),
    op("^=", XorAssign, 2, Right, Binary, ArithAssign, "bitwise XOR assign", "xor %0, %1", RightFacing),
    op("<<=", LShiftAssign, 2, Right, Binary, ArithAssign, "left shift assign", "shl %0, %1", LeftFacing),
    op(">>=", RShiftAssign, 2, Right, Binary, ArithAssign, "right shift assign", "sar %0, %1", RightFacing),
    op(">>>=", LogicalRShiftAssign, 2, Right, Binary, ArithAssign, "logical right shift assign", "shr %0, %1", RightFacing),
    op("<<<=", RotateLeftAssign, 2, Right, Binary, ArithAssign, "rotate left assign", "rol %0, %1", LeftFacing),
    op(">>>>=", RotateRightAssign, 2, Right, Binary, ArithAssign, "rotate right assign", "ror %0, %1", RightFacing),
    op("<=>", Cas, 4, Neither, Ternary, ArithAssign, "compare and swap", "lock cmpxchg %0, %2", Bidirectional),
    op("<==>", Swap, 4, Neither, Binary, ArithAssign, "atomic swap", "lock xchg %0, %1", Bidirectional),
    op("<===>", Swap, 4, Neither, Ternary, ArithAssign, "triple atomic swap", "lock cmpxchg %0, %2", Bidirectional),
    op("<=", Le, 5, Left, Binary, ArithAssign, "less equal", "cmp %0, %1; setle %2", LeftFacing),
    op(">=", Ge, 5, Left, Binary, ArithAssign, "greater equal", "cmp %0, %1; setge %2", RightFacing),
    op("==", Eq, 5, Left, Binary, ArithAssign, "equal", "cmp %0, %1; sete %2", Bidirectional),
    op("!=", Ne, 5, Left, Binary, ArithAssign, "not equal", "cmp %0, %1; setne %2", Bidirectional),
    op("<>", PatternNe, 5, Left, Binary, ArithAssign, "pattern not equal", "cmp %0, %1; setne %2", Bidirectional),
    op("><", OverlapTest, 5, Left, Binary, ArithAssign, "ranges overlap / volatile store", "call _fcx_overlap", Bidirectional),
    op("<=|", LeOrFlag, 5, Left, Binary, ArithAssign, "less equal or flag", "cmp %0, %1; setle %2; or %2, flag", LeftFacing),
    op("|=>", Implies, 5, Left, Binary, ArithAssign, "implies", "test %0, %0; jz skip; cmp %1, 1", RightFacing),
    op("<==", Le, 5, Left, Binary, ArithAssign, "pattern match equality", "call _fcx_pattern_match", LeftFacing),
    op("==>", Ge, 5, Left, Binary, ArithAssign, "deep equal", "call _fcx_deep_equal", RightFacing),
    op("<===", Le, 5, Left, Binary, ArithAssign, "triple pattern match", "call _fcx_triple_match", LeftFacing),
    op("===>", Ge, 5, Left, Binary, ArithAssign, "triple deep equal", "call _fcx_triple_deep", RightFacing),
    op("++", Increment, 11, Neither, Unary, ArithAssign, "increment", "inc %0", Bidirectional),
    op("--", Decrement, 11, Neither, Unary, ArithAssign, "decrement", "dec %0", Bidirectional),
    op("**", Power, 8, Left, Binary, ArithAssign, "power / double multiply", "call _fcx_power", Bidirectional),
    op("***", Power, 8, Left, Binary, ArithAssign, "triple multiply", "imul %0, %1; imul %0, %1", Bidirectional),
    op(">>|", PushShift, 7, Left, Binary, DataMovement, "push with shift", "shl %0, %1; push %0", RightFacing),
    op("|<<", PopShift, 7, Left, Binary, DataMovement, "pop with shift", "pop %0; shl %0, %1", LeftFacing),
    op(">>>|", PushShift, 7, Left, Binary, DataMovement, "triple push shift", "shr %0, %1; push %0", RightFacing),
    op("|<<<", PopShift, 7, Left, Binary, DataMovement, "triple pop shift", "pop %0; rol %0, %1", LeftFacing),
    op("||||", PushInto, 7, Left, Binary, DataMovement, "quad pipe", "call _fcx_quad_pipe", Bidirectional),
    op("|>|", PushInto, 7, Left, Binary, DataMovement, "pipe through", "call _fcx_pipe_through", Bidirectional),
    op("<|>>", PopFrom, 7, Left, Binary, DataMovement, "bidirectional pipe", "call _fcx_bi_pipe", Bidirectional),
    op("|><|", PushInto, 7, Left, Binary, DataMovement, "cross pipe", "call _fcx_cross_pipe", Bidirectional),
    op("->", Arrow, 10, Left, Binary, DataMovement, "member access", "lea %0, [%1+offset]", RightFacing),
    op("<-", ReverseLayout, 10, Left, Binary, DataMovement, "reverse member access", "lea %0, [%1-offset]", LeftFacing),
    op("->>", LayoutAccess, 10, Left, Binary, DataMovement, "layout access", "lea %0, [%1+offset]", RightFacing),
    op("<<-", ReverseLayout, 10, Left, Binary, DataMovement, "reverse layout", "lea %0, [%1-offset]", LeftFacing),
    op("-->>", LayoutAccess, 10, Left, Binary, DataMovement, "double layout access", "lea %0, [%1+offset*2]", RightFacing),
    op("<<--", ReverseLayout, 10, Left, Binary, DataMovement, "double reverse layout", "lea %0, [%1-offset*2]", LeftFacing),
    op("*/", PersistStore, 7, Left, Binary, DataMovement, "store with persistence", "mov %0, %1; mfence", RightFacing),
    op("/*", PersistLoad, 7, Left, Binary, DataMovement, "load with persistence", "lfence; mov %0, %1", LeftFacing),
    op("~>", NotMove, 7, Left, Binary, DataMovement, "bitwise NOT move", "not %1; mov %0, %1", RightFacing),
    op("<~", NotMove, 7, Left, Binary, DataMovement, "bitwise NOT move left", "not %0; mov %1, %0", LeftFacing),
    op("~><~", VolatileStore, 7, Left, Binary, DataMovement, "NOT volatile store", "not %1; mov %0, %1", Bidirectional),
    op("<~>>", NoAliasStore, 7, Left, Binary, DataMovement, "NOT no-alias store", "not %1; mov %0, %1", Bidirectional),
    op("~~", DoubleNot, 7, Left, Unary, DataMovement, "double NOT", "not %0; not %0", Bidirectional),
    op("&", BitAnd, 6, Left, Binary, Bitfield, "bitwise AND", "and %0, %1", Bidirectional),
    op("|", BitOr, 6, Left, Binary, Bitfield, "bitwise OR", "or %0, %1", Bidirectional),
    op("^", BitXor, 6, Left, Binary, Bitfield, "bitwise XOR", "xor %0, %1", Bidirectional),
    op("~", BitNot, 11, Neither, Unary, Bitfield, "bitwise NOT", "not %0", Bidirectional),
    op("&>", BitfieldExtract, 6, Left, Binary, Bitfield, "bitfield extract", "shr %0, %1; and %0, mask", RightFacing),
    op("&<", BitfieldInsert, 6, Left, Ternary, Bitfield, "bitfield insert", "shl %2, %1; or %0, %2", LeftFacing),
    op("^>", BitwiseRotateXor, 6, Left, Binary, Bitfield, "XOR extract", "xor %0, %1; shr %0, 1", RightFacing),
    op("^<", BitwiseRotateXor, 6, Left, Binary, Bitfield, "XOR insert", "shl %1, 1; xor %0, %1", LeftFacing),
    op("<<&", ShiftMask, 6, Left, Binary, Bitfield, "shift with mask", "shl %0, %1; and %0, mask", LeftFacing),
    op("&>>", ExtractRShift, 6, Left, Binary, Bitfield, "extract with right shift", "and %0, mask; shr %0, %1", RightFacing),
    op("&<<", ShiftMask, 6, Left, Binary, Bitfield, "mask with left shift", "and %0, mask; shl %0, %1", LeftFacing),
    op(">>^", BitwiseRotateXor, 6, Left, Binary, Bitfield, "right shift XOR", "shr %0, %1; xor %0, mask", RightFacing),
    op("^<<", BitwiseRotateXor, 6, Left, Binary, Bitfield, "XOR left shift", "xor %0, mask; shl %0, %1", LeftFacing),
    op("&|", BitfieldExtract, 6, Left, Binary, Bitfield, "AND OR", "and %0, %1; or %0, mask", Bidirectional),
    op("|&", OrMask, 6, Left, Binary, Bitfield, "OR AND", "or %0, %1; and %0, mask", Bidirectional),
    op("&^", BitfieldExtract, 6, Left, Binary, Bitfield, "AND XOR", "and %0, %1; xor %0, mask", Bidirectional),
    op("^&", BitwiseRotateXor, 6, Left, Binary, Bitfield, "XOR AND", "xor %0, %1; and %0, mask", Bidirectional),
    op("|^", OrMask, 6, Left, Binary, Bitfield, "OR XOR", "or %0, %1; xor %0, mask", Bidirectional),
    op("^|", BitwiseRotateXor, 6, Left, Binary, Bitfield, "XOR OR", "xor %0, %1; or %0, mask", Bidirectional),
    op("&&", LogicalAnd, 3, Left, Binary, Bitfield, "logical AND", "test %0, %0; jz end; test %1, %1", Bidirectional),
    op("||", LogicalOr, 3, Left, Binary, Bitfield, "logical OR", "test %0, %0; jnz end; test %1, %1", Bidirectional),
    op("^^", LogicalXor, 3, Left, Binary, Bitfield, "logical XOR", "test %0, %0; setnz al; test %1, %1; setnz bl; xor al, bl", Bidirectional),
    op("&&&", LogicalAnd, 3, Left, Ternary, Bitfield, "triple logical AND", "call _fcx_triple_and", Bidirectional),
    op("|||", LogicalOr, 3, Left, Ternary, Bitfield, "triple logical OR", "call _fcx_triple_or", Bidirectional),
    op("^^^", LogicalXor, 3, Left, Ternary, Bitfield, "triple logical XOR", "call _fcx_triple_xor", Bidirectional),
    op("&>>&", ExtractRShift, 6, Left, Ternary, Bitfield, "extract shift mask", "and %0, %2; shr %0, %1; and %0, mask", Bidirectional),
    op("&<<&", ShiftMask, 6, Left, Ternary, Bitfield, "mask shift mask", "and %0, %2; shl %0, %1; and %0, mask", Bidirectional),
    op("^>>^", BitwiseRotateXor, 6, Left, Ternary, Bitfield, "XOR shift XOR", "xor %0, %2; shr %0, %1; xor %0, mask", Bidirectional),
    op("^<<^", BitwiseRotateXor, 6, Left, Ternary, Bitfield, "XOR left shift XOR", "xor %0, %2; shl %0, %1; xor %0, mask", Bidirectional),
    op("|>>|", OrMask, 6, Left, Ternary, Bitfield, "OR shift OR", "or %0, %2; shr %0, %1; or %0, mask", Bidirectional),
    op("mem>", Allocate, 11, Neither, Binary, MemoryAlloc, "allocate memory", "call _fcx_alloc", RightFacing),
    op(">mem", Deallocate, 11, Neither, Unary, MemoryAlloc, "deallocate memory", "call _fcx_free", LeftFacing),
    op("stack>", StackAlloc, 11, Neither, Unary, MemoryAlloc, "stack allocation", "sub rsp, %0; mov %1, rsp", RightFacing),
    op(">stack", StackFree, 11, Neither, Unary, MemoryAlloc, "stack deallocation", "add rsp, %0", LeftFacing),
    op("heap>", Allocate, 11, Neither, Binary, MemoryAlloc, "heap allocation", "call _fcx_heap_alloc", RightFacing),
    op(">heap", Deallocate, 11, Neither, Unary, MemoryAlloc, "heap deallocation", "call _fcx_heap_free", LeftFacing),
    op("pool>", Allocate, 11, Neither, Binary, MemoryAlloc, "pool allocation", "call _fcx_pool_alloc", RightFacing),
    op(">pool", Deallocate, 11, Neither, Unary, MemoryAlloc, "pool deallocation", "call _fcx_pool_free", LeftFacing),
    op("@", At, 11, Neither, Unary, Special, "at symbol", "nop", Bidirectional),
    op("@>", MmioMap, 11, Neither, Unary, MemoryAlloc, "MMIO map address", "mov %0, %1", RightFacing),
    op("<@", MmioUnmap, 11, Neither, Unary, MemoryAlloc, "MMIO unmap", "mov %0, 0", LeftFacing),
    op("@@", MmioMap, 11, Neither, Binary, MemoryAlloc, "double MMIO map", "call _fcx_mmio_map", Bidirectional),
    op("@@@", MmioMap, 11, Neither, Ternary, MemoryAlloc, "triple MMIO map", "call _fcx_mmio_map_range", Bidirectional),
    op("->->", LayoutAccess, 10, Left, Ternary, MemoryAlloc, "chained layout access", "lea %0, [%1+%2]", RightFacing),
    op("<-<-", ReverseLayout, 10, Left, Ternary, MemoryAlloc, "chained reverse layout", "lea %0, [%1-%2]", LeftFacing),
    op("-><<", LayoutAccess, 10, Left, Binary, MemoryAlloc, "layout access with shift", "lea %0, [%1+offset]; shl %0, 1", Bidirectional),
    op(">>-<", ReverseLayout, 10, Left, Binary, MemoryAlloc, "shift reverse layout", "shr %1, 1; lea %0, [%1-offset]", Bidirectional),
    op("align>", Allocate, 11, Neither, Binary, MemoryAlloc, "aligned allocation", "call _fcx_aligned_alloc", RightFacing),
    op(">align", Deallocate, 11, Neither, Unary, MemoryAlloc, "aligned deallocation", "call _fcx_aligned_free", LeftFacing),
    op("page>", Allocate, 11, Neither, Unary, MemoryAlloc, "page allocation", "call _fcx_page_alloc", RightFacing),
    op(">page", Deallocate, 11, Neither, Unary, MemoryAlloc, "page deallocation", "call _fcx_page_free", LeftFacing),
    op("mmap>", MmioMap, 11, Neither, Ternary, MemoryAlloc, "memory map", "call _fcx_mmap", RightFacing),
    op(">mmap", MmioUnmap, 11, Neither, Unary, MemoryAlloc, "memory unmap", "call _fcx_munmap", LeftFacing),
    op("cache>", Allocate, 11, Neither, Binary, MemoryAlloc, "cache allocation", "call _fcx_cache_alloc", RightFacing),
    op("!", AtomicRead, 11, Neither, Unary, AtomicConcur, "atomic read", "mov %0, [%1]", Bidirectional),
    op("!!", AtomicWrite, 11, Neither, Binary, AtomicConcur, "atomic write", "lock xchg [%0], %1", Bidirectional),
    op("!!!", AtomicTriple, 11, Neither, Ternary, AtomicConcur, "atomic triple op", "lock cmpxchg [%0], %2", Bidirectional),
    op("!!!!", AtomicTriple, 11, Neither, Ternary, AtomicConcur, "quad atomic op", "call _fcx_quad_atomic", Bidirectional),
    op("!!!!!", AtomicTriple, 11, Neither, Ternary, AtomicConcur, "penta atomic op", "call _fcx_penta_atomic", Bidirectional),
    op("!?", AtomicCond, 11, Neither, Binary, AtomicConcur, "atomic conditional", "lock cmpxchg [%0], %1", Bidirectional),
    op("?!", ErrorHandle, 3, Right, Binary, AtomicConcur, "error handle", "test %0, %0; js error_handler", RightFacing),
    op("?!!", AtomicFetchAdd, 11, Neither, Binary, AtomicConcur, "atomic fetch add", "lock xadd [%0], %1", Bidirectional),
    op("!!?", AtomicCond, 11, Neither, Binary, AtomicConcur, "atomic write conditional", "lock cmpxchg [%0], %1", Bidirectional),
    op("?!!?", AtomicFetchAdd, 11, Neither, Ternary, AtomicConcur, "conditional fetch add", "call _fcx_cond_fetch_add", Bidirectional),
    op("~!", AtomicXor, 11, Neither, Binary, AtomicConcur, "atomic XOR", "lock xor [%0], %1", Bidirectional),
    op("!~", AtomicXor, 11, Neither, Binary, AtomicConcur, "atomic NOT", "lock not [%0]", Bidirectional),
    op("~!~", AtomicXor, 11, Neither, Binary, AtomicConcur, "atomic XOR NOT", "lock xor [%0], %1; lock not [%0]", Bidirectional),
    op("|!|", AtomicFence, 11, Neither, Unary, AtomicConcur, "atomic fence", "mfence", Bidirectional),
    op("!|!", AtomicFence, 11, Neither, Unary, AtomicConcur, "atomic barrier", "mfence", Bidirectional),
    op("||!", AtomicFence, 11, Neither, Unary, AtomicConcur, "OR atomic fence", "sfence", Bidirectional),
    op("!||", AtomicFence, 11, Neither, Unary, AtomicConcur, "atomic OR fence", "lfence", Bidirectional),
    op("!=>", BarrierFull, 11, Neither, Unary, AtomicConcur, "full memory barrier", "mfence", RightFacing),
    op("<=!", BarrierFull, 11, Neither, Unary, AtomicConcur, "reverse full barrier", "mfence", LeftFacing),
    op("!>", BarrierRelease, 11, Neither, Unary, AtomicConcur, "release barrier", "sfence", RightFacing),
    op("<!", BarrierAcquire, 11, Neither, Unary, AtomicConcur, "acquire barrier", "lfence", LeftFacing),
    op("!<", BarrierAcquire, 11, Neither, Unary, AtomicConcur, "acquire barrier alt", "lfence", LeftFacing),
    op(">!", BarrierRelease, 11, Neither, Unary, AtomicConcur, "release barrier alt", "sfence", RightFacing),
    op("!<>!", BarrierFull, 11, Neither, Unary, AtomicConcur, "bidirectional barrier", "mfence", Bidirectional),
    op("!><!", BarrierFull, 11, Neither, Unary, AtomicConcur, "cross barrier", "mfence", Bidirectional),
    op("=!", AtomicWrite, 11, Neither, Binary, AtomicConcur, "atomic assign", "lock xchg [%0], %1", Bidirectional),
    op("!+=", AtomicFetchAdd, 11, Neither, Binary, AtomicConcur, "atomic add assign", "lock xadd [%0], %1", Bidirectional),
    op("!-=", AtomicFetchSub, 11, Neither, Binary, AtomicConcur, "atomic sub assign", "neg %1; lock xadd [%0], %1", Bidirectional),
    op("!&=", AtomicAnd, 11, Neither, Binary, AtomicConcur, "atomic AND assign", "lock and [%0], %1", Bidirectional),
    op("!|=", AtomicOr, 11, Neither, Binary, AtomicConcur, "atomic OR assign", "lock or [%0], %1", Bidirectional),
    op("!^=", AtomicXor, 11, Neither, Binary, AtomicConcur, "atomic XOR assign", "lock xor [%0], %1", Bidirectional),
    op("!<<=", AtomicShl, 11, Neither, Binary, AtomicConcur, "atomic left shift assign", "call _fcx_atomic_shl", LeftFacing),
    op("!>>=", AtomicShr, 11, Neither, Binary, AtomicConcur, "atomic right shift assign", "call _fcx_atomic_shr", RightFacing),
    op("spawn>", Spawn, 11, Neither, Unary, AtomicConcur, "spawn thread", "call _fcx_spawn", RightFacing),
    op("$/", WriteSyscall, 11, Neither, Ternary, SyscallOs, "write syscall", "mov rax, 1; syscall", RightFacing),
    op("/$", ReadSyscall, 11, Neither, Ternary, SyscallOs, "read syscall", "mov rax, 0; syscall", LeftFacing),
    op("$/$", WriteSyscall, 11, Neither, Ternary, SyscallOs, "bidirectional syscall", "call _fcx_bi_syscall", Bidirectional),
    op("sys%", RawSyscall, 11, Neither, Nary, SyscallOs, "raw syscall", "mov rax, %0; syscall", Bidirectional),
    op("%sys", RawSyscall, 11, Neither, Nary, SyscallOs, "reverse raw syscall", "mov rax, %0; syscall", Bidirectional),
    op("asm%", InlineAsm, 11, Neither, Nary, SyscallOs, "inline assembly", "{asm}", Bidirectional),
    op("@sys", SysWrapper, 11, Neither, Nary, SyscallOs, "syscall wrapper", "call sys_wrapper", RightFacing),
    op("sys@", SysWrapper, 11, Neither, Nary, SyscallOs, "reverse syscall wrapper", "call sys_wrapper", LeftFacing),
    op("#!", PrivEscalate, 11, Neither, Unary, SyscallOs, "privilege escalate", "call _fcx_priv_escalate", RightFacing),
    op("!#", CapabilityCheck, 11, Neither, Unary, SyscallOs, "capability check", "call _fcx_cap_check", LeftFacing),
    op("##", PrivEscalate, 11, Neither, Binary, SyscallOs, "double privilege", "call _fcx_double_priv", Bidirectional),
    op("###", PrivEscalate, 11, Neither, Ternary, SyscallOs, "triple privilege", "call _fcx_triple_priv", Bidirectional),
    op("%$", ResourceQuery, 11, Neither, Unary, SyscallOs, "resource query", "call _fcx_res_query", RightFacing),
    op("$%", ResourceAlloc, 11, Neither, Binary, SyscallOs, "resource allocation", "call _fcx_res_alloc", LeftFacing),
    op("%$%", ResourceQuery, 11, Neither, Binary, SyscallOs, "resource query alloc", "call _fcx_res_query_alloc", Bidirectional),
    op("$%$", ResourceAlloc, 11, Neither, Binary, SyscallOs, "resource alloc query", "call _fcx_res_alloc_query", Bidirectional),
    op("$$$", ResourceAlloc, 11, Neither, Ternary, SyscallOs, "triple resource", "call _fcx_triple_res", Bidirectional),
    op("%%", ResourceQuery, 11, Neither, Binary, SyscallOs, "double query", "call _fcx_double_query", Bidirectional),
    op("%%%", ResourceQuery, 11, Neither, Ternary, SyscallOs, "triple query", "call _fcx_triple_query", Bidirectional),
    op("open>", SysWrapper, 11, Neither, Binary, SyscallOs, "open file", "call _fcx_open", RightFacing),
    op("close>", SysWrapper, 11, Neither, Unary, SyscallOs, "close file", "call _fcx_close", RightFacing),
    op("read>", ReadSyscall, 11, Neither, Ternary, SyscallOs, "read file", "call _fcx_read", RightFacing),
    op("write>", WriteSyscall, 11, Neither, Ternary, SyscallOs, "write file", "call _fcx_write", RightFacing),
    op("seek>", SysWrapper, 11, Neither, Ternary, SyscallOs, "seek file", "call _fcx_seek", RightFacing),
    op("stat>", SysWrapper, 11, Neither, Binary, SyscallOs, "stat file", "call _fcx_stat", RightFacing),
    op("mkdir>", SysWrapper, 11, Neither, Binary, SyscallOs, "make directory", "call _fcx_mkdir", RightFacing),
    op("rmdir>", SysWrapper, 11, Neither, Unary, SyscallOs, "remove directory", "call _fcx_rmdir", RightFacing),
    op("fork>", SysWrapper, 11, Neither, Unary, SyscallOs, "fork process", "call _fcx_fork", RightFacing),
    op("exec>", SysWrapper, 11, Neither, Nary, SyscallOs, "exec process", "call _fcx_exec", RightFacing),
    op("exit>", SysWrapper, 11, Neither, Unary, SyscallOs, "exit process", "call _fcx_exit", RightFacing),
    op("/>/", EncodeBytes, 11, Neither, Binary, IoFormat, "encode to bytes", "call _fcx_encode", Bidirectional),
    op("<\\<", DecodeBytes, 11, Neither, Binary, IoFormat, "decode from bytes", "call _fcx_decode", Bidirectional),
    op("/>/<", EncodeBytes, 11, Neither, Ternary, IoFormat, "encode decode", "call _fcx_encode_decode", Bidirectional),
    op("<\\>\\", DecodeBytes, 11, Neither, Ternary, IoFormat, "decode encode", "call _fcx_decode_encode", Bidirectional),
    op("print>", PrintCompact, 11, Neither, Unary, IoFormat, "print function", "call _fcx_print_func", RightFacing),
    op("scan>", FormatPrint, 11, Neither, Binary, IoFormat, "scan function", "call _fcx_scan_func", RightFacing),
    op("fmt>", FormatPrint, 11, Neither, Nary, IoFormat, "format function", "call _fcx_fmt_func", RightFacing),
    op("log>", PrintCompact, 11, Neither, Binary, IoFormat, "log function", "call _fcx_log_func", RightFacing),
    op("debug>", PrintCompact, 11, Neither, Unary, IoFormat, "debug function", "call _fcx_debug_func", RightFacing),
    op("error>", PrintCompact, 11, Neither, Unary, IoFormat, "error function", "call _fcx_error_func", RightFacing),
    op("warn>", PrintCompact, 11, Neither, Unary, IoFormat, "warning function", "call _fcx_warn_func", RightFacing),
    op("info>", PrintCompact, 11, Neither, Unary, IoFormat, "info function", "call _fcx_info_func", RightFacing),
    op("trace>", PrintCompact, 11, Neither, Unary, IoFormat, "trace function", "call _fcx_trace_func", RightFacing),
    op("hex>", EncodeBytes, 11, Neither, Unary, IoFormat, "hex encode", "call _fcx_hex_encode", RightFacing),
    op("bin>", EncodeBytes, 11, Neither, Unary, IoFormat, "binary encode", "call _fcx_bin_encode", RightFacing),
    op("oct>", EncodeBytes, 11, Neither, Unary, IoFormat, "octal encode", "call _fcx_oct_encode", RightFacing),
    op("dec>", EncodeBytes, 11, Neither, Unary, IoFormat, "decimal encode", "call _fcx_dec_encode", RightFacing),
    op("/", Div, 8, Left, Binary, ArithDense, "division", "div %1", Bidirectional),
    op("//", IntDiv, 8, Left, Binary, ArithDense, "integer division", "idiv %1", Bidirectional),
    op("///", FastRecip, 8, Left, Unary, ArithDense, "fast reciprocal", "rcpss %0, %1", Bidirectional),
    op("////", QuadDiv, 8, Left, Binary, ArithDense, "quad division", "call _fcx_quad_div", Bidirectional),
    op("/////", PentaDiv, 8, Left, Ternary, ArithDense, "penta division", "call _fcx_penta_div", Bidirectional),
    op("/%", ModDivisor, 8, Left, Binary, ArithDense, "modulo", "div %1; mov %0, rdx", Bidirectional),
    op("%/", ModDivisor, 8, Left, Binary, ArithDense, "reverse modulo", "div %0; mov %1, rdx", Bidirectional),
    op("/%/", ModDivisor, 8, Left, Ternary, ArithDense, "modulo division", "call _fcx_mod_div", Bidirectional),
    op("/|/", SimdDiv, 8, Left, Binary, ArithDense, "SIMD divide", "divps %0, %1", Bidirectional),
    op("|/|", ParallelDiv, 8, Left, Binary, ArithDense, "parallel divide", "call _fcx_parallel_div", Bidirectional),
    op("/||/", SimdDiv, 8, Left, Ternary, ArithDense, "SIMD parallel divide", "call _fcx_simd_parallel_div", Bidirectional),
    op("||/||", ParallelDiv, 8, Left, Ternary, ArithDense, "quad parallel divide", "call _fcx_quad_parallel_div", Bidirectional),
    op("+", Add, 7, Left, Binary, ArithDense, "addition", "add %0, %1", Bidirectional),
    op("-", Sub, 7, Left, Binary, ArithDense, "subtraction", "sub %0, %1", Bidirectional),
    op("*", Mul, 8, Left, Binary, ArithDense, "multiplication", "imul %0, %1", Bidirectional),
    op("+*", MulAdd, 8, Left, Ternary, ArithDense, "multiply add", "imul %1, %2; add %0, %1", Bidirectional),
    op("*+", AddMul, 8, Left, Ternary, ArithDense, "add multiply", "add %1, %2; imul %0, %1", Bidirectional),
    op("-*", MulSub, 8, Left, Ternary, ArithDense, "multiply subtract", "imul %1, %2; sub %0, %1", Bidirectional),
    op("popcount>", Popcount, 11, Neither, Unary, Bitfield, "population count", "popcnt %0, %1", RightFacing),
    op("clz>", Clz, 11, Neither, Unary, Bitfield, "count leading zeros", "lzcnt %0, %1", RightFacing),
    op("ctz>", Ctz, 11, Neither, Unary, Bitfield, "count trailing zeros", "tzcnt %0, %1", RightFacing),
    op("byteswap>", Byteswap, 11, Neither, Unary, Bitfield, "byte swap endianness", "bswap %0", RightFacing),
    op("<?", Min, 5, Left, Binary, Comparison, "minimum", "cmp %0, %1; cmovg %0, %1", LeftFacing),
    op(">?", Max, 5, Left, Binary, Comparison, "maximum", "cmp %0, %1; cmovl %0, %1", RightFacing),
    op("<=>?", ThreeWayCmp, 5, Left, Binary, Comparison, "three-way compare", "cmp %0, %1; setl al; setg bl; sub al, bl", Bidirectional),
    op("<~>", ThreeWayCmp, 5, Left, Binary, Comparison, "three-way compare alt", "cmp %0, %1; setl al; setg bl; sub al, bl", Bidirectional),
    op("<|>", Clamp, 5, Left, Ternary, Comparison, "clamp between min max", "cmp %0, %1; cmovl %0, %1; cmp %0, %2; cmovg %0, %2", Bidirectional),
    op("<=?", LeMaybe, 5, Left, Binary, Comparison, "less equal maybe", "cmp %0, %1; setle %2", LeftFacing),
    op(">=?", GeMaybe, 5, Left, Binary, Comparison, "greater equal maybe", "cmp %0, %1; setge %2", RightFacing),
    op("==?", EqMaybe, 5, Left, Binary, Comparison, "equal maybe", "cmp %0, %1; sete %2", Bidirectional),
    op("!=?", NeMaybe, 5, Left, Binary, Comparison, "not equal maybe", "cmp %0, %1; setne %2", Bidirectional),
    op("<??", LtDouble, 5, Left, Binary, Comparison, "less than double check", "cmp %0, %1; setl %2", LeftFacing),
    op(">??", GtDouble, 5, Left, Binary, Comparison, "greater than double check", "cmp %0, %1; setg %2", RightFacing),
    op("<=>!", CmpAssert, 5, Left, Binary, Comparison, "compare with assert", "cmp %0, %1; jne abort", Bidirectional),
    op("<==>!", SwapAssert, 5, Left, Binary, Comparison, "swap with assert", "lock xchg %0, %1; test %0, %0", Bidirectional),
    op("sqrt>", Sqrt, 11, Neither, Unary, ArithDense, "square root", "sqrtss %0, %1", RightFacing),
    op("rsqrt>", Rsqrt, 11, Neither, Unary, ArithDense, "reciprocal square root", "rsqrtss %0, %1", RightFacing),
    op("abs>", Abs, 11, Neither, Unary, ArithDense, "absolute value", "movaps %0, %1; andps %0, [abs_mask]", RightFacing),
    op("floor>", Floor, 11, Neither, Unary, ArithDense, "floor", "roundss %0, %1, 0x01", RightFacing),
    op("ceil>", Ceil, 11, Neither, Unary, ArithDense, "ceiling", "roundss %0, %1, 0x02", RightFacing),
    op("trunc>", Trunc, 11, Neither, Unary, ArithDense, "truncate", "roundss %0, %1, 0x03", RightFacing),
    op("round>", Round, 11, Neither, Unary, ArithDense, "round nearest", "roundss %0, %1, 0x00", RightFacing),
    op("prefetch>", Prefetch, 11, Neither, Unary, MemoryAlloc, "prefetch memory", "prefetcht0 [%0]", RightFacing),
    op("prefetch_write>", PrefetchWrite, 11, Neither, Unary, MemoryAlloc, "prefetch for write", "prefetchw [%0]", RightFacing),
    op("+|", SatAdd, 7, Left, Binary, ArithDense, "saturating add", "call _fcx_sat_add", Bidirectional),
    op("-|", SatSub, 7, Left, Binary, ArithDense, "saturating subtract", "call _fcx_sat_sub", Bidirectional),
    op("*|", SatMul, 8, Left, Binary, ArithDense, "saturating multiply", "call _fcx_sat_mul", Bidirectional),
    op("+%", WrapAdd, 7, Left, Binary, ArithDense, "wrapping add", "add %0, %1", Bidirectional),
    op("-%", WrapSub, 7, Left, Binary, ArithDense, "wrapping subtract", "sub %0, %1", Bidirectional),
    op("*%", WrapMul, 8, Left, Binary, ArithDense, "wrapping multiply", "imul %0, %1", Bidirectional),
    op("+?", CheckedAdd, 7, Left, Binary, ArithDense, "checked add", "add %0, %1; seto %2", Bidirectional),
    op("-?", CheckedSub, 7, Left, Binary, ArithDense, "checked subtract", "sub %0, %1; seto %2", Bidirectional),
    op("*?", CheckedMul, 8, Left, Binary, ArithDense, "checked multiply", "imul %0, %1; seto %2", Bidirectional),
    op("..", Range, 10, Left, Binary, Special, "range exclusive", "call _fcx_range_exclusive", Bidirectional),
    op("..=", RangeInclusive, 10, Left, Binary, Special, "range inclusive", "call _fcx_range_inclusive", Bidirectional),
    op("..<", RangeExclusive, 10, Left, Binary, ShiftRotate, "range exclusive FCx", "call _fcx_range_excl", LeftFacing),
    op("..>", RangeInclusive, 10, Left, Binary, ShiftRotate, "range inclusive FCx", "call _fcx_range_incl", RightFacing),
    op("align_up>", AlignUp, 11, Neither, Binary, MemoryAlloc, "align up", "add %0, %1; dec %0; and %0, ~(%1-1)", RightFacing),
    op("align_down>", AlignDown, 11, Neither, Binary, MemoryAlloc, "align down", "and %0, ~(%1-1)", RightFacing),
    op("is_aligned?>", IsAligned, 11, Neither, Binary, MemoryAlloc, "check alignment", "test %0, (%1-1); setz %2", RightFacing),
    op("arena>", ArenaAlloc, 11, Neither, Binary, MemoryAlloc, "arena allocation", "call _fcx_arena_alloc", RightFacing),
    op(">arena", ArenaFree, 11, Neither, Unary, MemoryAlloc, "arena reset", "call _fcx_arena_reset", LeftFacing),
    op("slab>", SlabAlloc, 11, Neither, Unary, MemoryAlloc, "slab allocation", "call _fcx_slab_alloc", RightFacing),
    op(">slab", SlabFree, 11, Neither, Unary, MemoryAlloc, "slab deallocation", "call _fcx_slab_free", LeftFacing),
    op("@sizeof>", Sizeof, 11, Neither, Unary, Special, "compile-time sizeof", "compile_time_const", RightFacing),
    op("@alignof>", Alignof, 11, Neither, Unary, Special, "compile-time alignof", "compile_time_const", RightFacing),
    op("@offsetof>", Offsetof, 11, Neither, Binary, Special, "compile-time offsetof", "compile_time_const", RightFacing),
    op("@!", StaticAssert, 11, Neither, Binary, Special, "static assert", "compile_time_check", RightFacing),
    op("?", Conditional, 3, Right, Ternary, Comparison, "conditional", "test %0, %0; cmovnz %1, %2", Bidirectional),
    op("??", Conditional, 3, Right, Ternary, Comparison, "double conditional", "call _fcx_double_cond", Bidirectional),
    op("???", Conditional, 3, Right, Ternary, Comparison, "triple conditional", "call _fcx_triple_cond", Bidirectional),
    op("::", ScopeResolve, 1, Right, Binary, ArithAssign, "scope resolution", "call _fcx_scope_resolve", Bidirectional),
    op(":::", ScopeResolve, 1, Right, Ternary, ArithAssign, "triple scope", "call _fcx_triple_scope", Bidirectional),
    op(";;", DoubleSemicolon, 1, Right, Binary, ArithAssign, "double semicolon", "nop", Bidirectional),
];
