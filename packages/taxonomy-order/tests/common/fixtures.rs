//! Test fixture generators

use taxonomy_order::{ConceptId, ConceptSnapshot};

pub fn c(name: &str) -> ConceptId {
    ConceptId::named(name)
}

pub fn names(order: &[ConceptId]) -> Vec<String> {
    order.iter().map(ConceptId::to_string).collect()
}

/// Snapshot from `(used, user)` facts over `concepts`
pub fn snapshot_from_uses(concepts: &[&str], uses: &[(&str, &str)]) -> ConceptSnapshot {
    let mut snapshot = ConceptSnapshot::new().with_concepts(concepts.iter().copied());
    for &(used, user) in uses {
        let used = if used == "TOP" { ConceptId::Top } else { c(used) };
        snapshot.add_definition(c(user), [used]);
    }
    snapshot
}

/// Chain `C0 ← C1 ← ... ← Cn-1`: each concept's definition references its predecessor
pub fn chain(n: usize) -> ConceptSnapshot {
    let mut snapshot = ConceptSnapshot::new().with_concepts((0..n).map(|i| format!("C{i}")));
    for i in 1..n {
        snapshot.add_definition(c(&format!("C{i}")), [c(&format!("C{}", i - 1))]);
    }
    snapshot
}

/// One base concept referenced by `n` leaves
pub fn fan(n: usize) -> ConceptSnapshot {
    let mut snapshot = ConceptSnapshot::new().with_concepts(["Base"]);
    for i in 0..n {
        snapshot.add_definition(c(&format!("Leaf{i}")), [c("Base")]);
    }
    snapshot
}

/// `groups` disjoint rings of `size` concepts each, ring `g` referencing ring `g - 1`
pub fn rings(groups: usize, size: usize) -> ConceptSnapshot {
    let mut snapshot = ConceptSnapshot::new();
    for g in 0..groups {
        for i in 0..size {
            let next = (i + 1) % size;
            snapshot.add_definition(c(&format!("R{g}_{i}")), [c(&format!("R{g}_{next}"))]);
        }
        if g > 0 {
            snapshot.add_definition(c(&format!("R{g}_0")), [c(&format!("R{}_0", g - 1))]);
        }
    }
    snapshot
}
