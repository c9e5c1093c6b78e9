//! Greedy operator trie.
//!
//! Built once from an [`OperatorRegistry`] and shared by reference. Nodes
//! live in an arena; children are a sparse byte map because most nodes
//! have one or two successors out of the ~30 operator bytes.


use rustc_hash::FxHashMap;

use crate::registry::{OperatorDescriptor, OperatorRegistry};

/// Longest window the lexer hands to [`OperatorTrie::lookup_greedy`].
pub const MAX_WINDOW: usize = 20;

type NodeId = usize;

const ROOT: NodeId = 0;

#[derive(Clone, Debug, Default)]
struct Node {
    children: FxHashMap<u8, NodeId>,
    /// Registry index of the operator ending here.
    terminal: Option<usize>,
}

/// Trie construction failure.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TrieError {
    #[error("operator `{symbol}` inserted twice (registry entries {first} and {second})")]
    DuplicateSymbol {
        symbol: &'static str,
        first: usize,
        second: usize,
    },
}

/// Longest-match operator lookup over registry symbols.
#[derive(Clone, Debug)]
pub struct OperatorTrie {
    nodes: Vec<Node>,
    registry: OperatorRegistry,
}

impl OperatorTrie {
    /// Insert every registry symbol.
    pub fn build(registry: &OperatorRegistry) -> Result<Self, TrieError> {
        let mut nodes = vec![Node::default()];

        for (index, desc) in registry.iter().enumerate() {
            let mut current = ROOT;
            for &byte in desc.symbol.as_bytes() {
                current = match nodes[current].children.get(&byte) {
                    Some(&next) => next,
                    None => {
                        let next = nodes.len();
                        nodes.push(Node::default());
                        nodes[current].children.insert(byte, next);
                        next
                    }
                };
            }
            if let Some(first) = nodes[current].terminal {
                return Err(TrieError::DuplicateSymbol {
                    symbol: desc.symbol,
                    first,
                    second: index,
                });
            }
            nodes[current].terminal = Some(index);
        }

        tracing::debug!(nodes = nodes.len(), operators = registry.count(), "operator trie built");
        Ok(OperatorTrie {
            nodes,
            registry: registry.clone(),
        })
    }

    /// Longest registered symbol that prefixes `window`.
    ///
    /// Walks at most `min(max_len, window.len())` bytes and remembers the
    /// last terminal passed. Returns the descriptor and its length, or
    /// `(None, 0)` when no symbol matches.
    pub fn lookup_greedy(
        &self,
        window: &[u8],
        max_len: usize,
    ) -> (Option<&'static OperatorDescriptor>, usize) {
        let limit = max_len.min(window.len());
        let mut current = ROOT;
        let mut best = None;
        let mut best_len = 0;

        for (i, byte) in window[..limit].iter().enumerate() {
            let Some(&next) = self.nodes[current].children.get(byte) else {
                break;
            };
            current = next;
            if let Some(index) = self.nodes[current].terminal {
                best = self.registry.by_index(index);
                best_len = i + 1;
            }
        }

        match best {
            Some(desc) => (Some(desc), best_len),
            None => (None, 0),
        }
    }

    /// Number of arena nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// The registry this trie was built from.
    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }
}
