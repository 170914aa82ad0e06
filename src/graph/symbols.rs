use std::fmt::Debug;

use hashbrown::HashMap;

/// Dense identifier of a distinct vertex name inside one graph.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol {
    pub internal: usize,
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.internal)
    }
}

/// Maps vertex names to symbols, in first-seen order.
///
/// Equal names always map to the same symbol, so two positions holding the same
/// name share their arcs.
#[derive(Default)]
pub struct SymbolTable {
    by_name: HashMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        SymbolTable {
            by_name: HashMap::new(),
        }
    }

    /// Returns the symbol for `name`, allocating the next one if the name is new.
    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(&symbol) = self.by_name.get(name) {
            return symbol;
        }
        let symbol = Symbol {
            internal: self.by_name.len(),
        };
        self.by_name.insert(name.to_owned(), symbol);
        symbol
    }

    pub fn lookup(&self, name: &str) -> Option<Symbol> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Debug for SymbolTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymbolTable")
            .field("symbols", &self.by_name.len())
            .finish()
    }
}
