//! The `registry` command: dump the operator table.

use std::fmt::Write;

use fcx_lexer::{OperatorCategory, OperatorRegistry};

use super::{build_trie, CliOptions};


/// Print every registered operator and the per-category counts.
pub fn print_registry(options: &CliOptions) {
    let registry = OperatorRegistry::new();
    // Fails loudly on an inconsistent table before anything is printed.
    let trie = build_trie(&registry, options);
    print!("{}", registry_listing(trie.registry()));
}

/// One line per descriptor in catalog order, then a category summary.
pub fn registry_listing(registry: &OperatorRegistry) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Operator registry ({} operators):", registry.count());
    for desc in registry.iter() {
        let kind = format!("{:?}", desc.kind);
        let shape = format!("{:?}/{:?}", desc.arity, desc.assoc);
        let _ = writeln!(
            out,
            "  {:<8} {:<22} {:>2} {:<16} {}",
            desc.symbol, kind, desc.precedence, shape, desc.semantics
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "By category:");
    for category in OperatorCategory::ALL {
        let _ = writeln!(
            out,
            "  {:<24} {}",
            category.name(),
            registry.category_count(category)
        );
    }
    out
}
