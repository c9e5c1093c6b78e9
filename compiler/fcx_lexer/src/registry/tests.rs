use fcx_ir::OpKind;
use pretty_assertions::assert_eq;

use super::{
    test_descriptor, Arity, Associativity, Direction, OperatorCategory, OperatorDescriptor,
    OperatorRegistry, RegistryError,
};

#[test]
fn ships_full_catalog() {
    let registry = OperatorRegistry::new();
    assert_eq!(registry.count(), 290);
    assert_eq!(registry.iter().count(), 290);
}

#[test]
fn builtin_table_validates() {
    assert_eq!(OperatorRegistry::new().validate(), Ok(()));
}

#[test]
fn every_family_is_populated() {
    let registry = OperatorRegistry::new();
    for category in OperatorCategory::ALL {
        assert!(
            registry.category_count(category) > 0,
            "{category} has no operators"
        );
    }
    let total: usize = OperatorCategory::ALL
        .iter()
        .map(|&c| registry.category_count(c))
        .sum();
    assert_eq!(total, registry.count());
}

#[test]
fn lookup_by_symbol() {
    let registry = OperatorRegistry::new();

    let shl = registry.by_symbol("<<=").unwrap_or_else(|| panic!("`<<=` missing"));
    assert_eq!(shl.kind, OpKind::LShiftAssign);
    assert_eq!(shl.precedence, 2);
    assert_eq!(shl.assoc, Associativity::Right);
    assert_eq!(shl.len(), 3);

    let mem = registry.by_symbol("mem>").unwrap_or_else(|| panic!("`mem>` missing"));
    assert_eq!(mem.kind, OpKind::Allocate);
    assert_eq!(mem.category, OperatorCategory::MemoryAlloc);

    assert!(registry.by_symbol("<<<<<<").is_none());
    assert!(registry.by_symbol("").is_none());
}

#[test]
fn lookup_by_index() {
    let registry = OperatorRegistry::new();
    assert_eq!(registry.by_index(0).map(|d| d.symbol), Some("<"));
    assert!(registry.by_index(registry.count()).is_none());
}

#[test]
fn backslash_symbols_are_single_backslash() {
    let registry = OperatorRegistry::new();
    for symbol in ["<\\", "\\>", "<\\<", "<\\>\\"] {
        let desc = registry
            .by_symbol(symbol)
            .unwrap_or_else(|| panic!("`{symbol}` missing"));
        assert_eq!(desc.symbol.matches('\\').count(), symbol.matches('\\').count());
    }
    assert_eq!(registry.by_symbol("<\\").map(OperatorDescriptor::len), Some(2));
}

#[test]
fn primary_is_first_of_kind() {
    let registry = OperatorRegistry::new();
    assert_eq!(registry.primary(OpKind::RotateLeft).map(|d| d.symbol), Some("<<<"));
    assert_eq!(registry.primary(OpKind::Le).map(|d| d.symbol), Some("<="));
    assert_eq!(registry.primary(OpKind::Add).map(|d| d.symbol), Some("+"));
}

#[test]
fn resolved_only_kinds_have_no_primary() {
    let registry = OperatorRegistry::new();
    for kind in [OpKind::FunctionDef, OpKind::DirectInput, OpKind::DirectOutput] {
        assert!(kind.is_resolved_only());
        assert!(registry.primary(kind).is_none(), "{kind:?} has a descriptor");
    }
}

#[test]
fn kinds_agree_on_binding() {
    let registry = OperatorRegistry::new();
    for desc in registry.iter() {
        let primary = registry.primary(desc.kind).unwrap_or_else(|| panic!("{desc:?}"));
        assert_eq!(
            (primary.precedence, primary.assoc),
            (desc.precedence, desc.assoc),
            "`{}` vs `{}`",
            desc.symbol,
            primary.symbol
        );
    }
}

#[test]
fn assignments_bind_loosest_and_right() {
    let registry = OperatorRegistry::new();
    for desc in registry.iter().filter(|d| d.kind.is_assignment()) {
        assert_eq!(desc.precedence, 2, "`{}`", desc.symbol);
        assert_eq!(desc.assoc, Associativity::Right, "`{}`", desc.symbol);
    }
}

#[test]
fn inline_asm_template_is_placeholder() {
    let registry = OperatorRegistry::new();
    assert_eq!(registry.by_symbol("asm%").map(|d| d.template), Some("{asm}"));
}

#[test]
fn suggestions_share_first_byte() {
    let registry = OperatorRegistry::new();
    assert_eq!(registry.suggestions(b'<', 3), vec!["<", "<<", "<<<"]);
    assert_eq!(registry.suggestions(b'#', 10), vec!["#!", "##", "###"]);
    assert!(registry.suggestions(b'`', 3).is_empty());
    assert!(registry.suggestions(b'<', 0).is_empty());
}

#[test]
fn category_names() {
    assert_eq!(OperatorCategory::ShiftRotate.to_string(), "shift/rotate");
    assert_eq!(OperatorCategory::Special.name(), "special");
}

// Broken tables

static BAD_PRECEDENCE: &[OperatorDescriptor] = &[test_descriptor(
    "+",
    OpKind::Add,
    13,
    Associativity::Left,
    Arity::Binary,
    OperatorCategory::ArithDense,
    "add",
    "add %0, %1",
    Direction::Bidirectional,
)];

static DUPLICATE: &[OperatorDescriptor] = &[
    test_descriptor(
        "+",
        OpKind::Add,
        7,
        Associativity::Left,
        Arity::Binary,
        OperatorCategory::ArithDense,
        "add",
        "add %0, %1",
        Direction::Bidirectional,
    ),
    test_descriptor(
        "+",
        OpKind::Add,
        7,
        Associativity::Left,
        Arity::Binary,
        OperatorCategory::ArithDense,
        "add again",
        "add %0, %1",
        Direction::Bidirectional,
    ),
];

static SINGLE_FAMILY: &[OperatorDescriptor] = &[test_descriptor(
    "+",
    OpKind::Add,
    7,
    Associativity::Left,
    Arity::Binary,
    OperatorCategory::ArithDense,
    "add",
    "add %0, %1",
    Direction::Bidirectional,
)];

static TOO_LONG: &[OperatorDescriptor] = &[test_descriptor(
    "prefetch_write_now>",
    OpKind::PrefetchWrite,
    11,
    Associativity::Neither,
    Arity::Unary,
    OperatorCategory::MemoryAlloc,
    "prefetch",
    "prefetchw [%0]",
    Direction::RightFacing,
)];

#[test]
fn rejects_precedence_out_of_range() {
    let registry = OperatorRegistry::with_table(BAD_PRECEDENCE);
    assert_eq!(
        registry.validate(),
        Err(RegistryError::PrecedenceOutOfRange {
            symbol: "+",
            precedence: 13
        })
    );
}

#[test]
fn rejects_duplicate_symbol() {
    let registry = OperatorRegistry::with_table(DUPLICATE);
    assert_eq!(
        registry.validate(),
        Err(RegistryError::DuplicateSymbol {
            symbol: "+",
            first: 0,
            second: 1
        })
    );
    // The index keeps the first entry.
    assert_eq!(registry.by_symbol("+").map(|d| d.semantics), Some("add"));
}

#[test]
fn rejects_overlong_symbol() {
    let registry = OperatorRegistry::with_table(TOO_LONG);
    assert_eq!(
        registry.validate(),
        Err(RegistryError::SymbolLength {
            symbol: "prefetch_write_now>",
            len: 19
        })
    );
}

#[test]
fn rejects_missing_family() {
    let registry = OperatorRegistry::with_table(SINGLE_FAMILY);
    assert_eq!(
        registry.validate(),
        Err(RegistryError::EmptyCategory(OperatorCategory::ShiftRotate))
    );
}

#[test]
fn error_messages() {
    let err = RegistryError::DuplicateSymbol {
        symbol: "+",
        first: 0,
        second: 1,
    };
    assert_eq!(
        err.to_string(),
        "operator `+` is registered twice (entries 0 and 1)"
    );
    assert_eq!(
        RegistryError::EmptyCategory(OperatorCategory::Bitfield).to_string(),
        "operator family `bitfield` has no entries"
    );
}
