//! Custom assertions for definition orders

use std::collections::HashMap;

use taxonomy_order::ConceptId;

/// TOP first, BOTTOM last, every expected concept exactly once
pub fn assert_complete(order: &[ConceptId], concepts: &[ConceptId]) {
    assert_eq!(order.first(), Some(&ConceptId::Top), "order must start with TOP: {order:?}");
    assert_eq!(order.last(), Some(&ConceptId::Bottom), "order must end with BOTTOM: {order:?}");

    let mut counts: HashMap<&ConceptId, usize> = HashMap::new();
    for concept in order {
        *counts.entry(concept).or_default() += 1;
    }
    for (concept, count) in &counts {
        assert_eq!(*count, 1, "{concept} appears {count} times in {order:?}");
    }
    for concept in concepts {
        assert!(counts.contains_key(concept), "{concept} missing from {order:?}");
    }
    assert_eq!(
        order.len(),
        concepts.iter().filter(|c| !c.is_top() && !c.is_bottom()).count() + 2,
        "unexpected concepts in {order:?}"
    );
}

pub fn position(order: &[ConceptId], concept: &ConceptId) -> usize {
    order
        .iter()
        .position(|c| c == concept)
        .unwrap_or_else(|| panic!("{concept} missing from {order:?}"))
}

/// `user` is emitted before `used`
pub fn assert_precedes(order: &[ConceptId], user: &ConceptId, used: &ConceptId) {
    let (u, v) = (position(order, user), position(order, used));
    assert!(u < v, "{user} (at {u}) should precede {used} (at {v}) in {order:?}");
}

/// Members occupy consecutive positions
pub fn assert_adjacent(order: &[ConceptId], members: &[ConceptId]) {
    let mut positions: Vec<usize> = members.iter().map(|m| position(order, m)).collect();
    positions.sort_unstable();
    for pair in positions.windows(2) {
        assert_eq!(pair[1], pair[0] + 1, "{members:?} not adjacent in {order:?}");
    }
}

/// Transitive closure over `n` vertices; `reach[a][b]` iff a path a → b exists
pub fn reachability(n: usize, edges: &[(usize, usize)]) -> Vec<Vec<bool>> {
    let mut reach = vec![vec![false; n]; n];
    for &(a, b) in edges {
        reach[a][b] = true;
    }
    for k in 0..n {
        for i in 0..n {
            if reach[i][k] {
                for j in 0..n {
                    if reach[k][j] {
                        reach[i][j] = true;
                    }
                }
            }
        }
    }
    reach
}
