//! Grouping of parallel transitions into shared rendered edges.
//!
//! Transitions with the same endpoints but different symbols share one arrow
//! and one comma-separated label. The grouping order is part of the public
//! contract: groups appear in first-seen `(from, to)` order and each group's
//! symbols keep the order they had in the transition list.

use super::{StateId, Symbol, Transition};
use serde::{Deserialize, Serialize};

/// Curvature offset applied to both arcs of a bidirectional pair.
///
/// Using one fixed constant for both directions guarantees the two arcs
/// bow away from each other and never overlap.
pub const BIDIRECTIONAL_CURVE: f64 = 25.0;

/// All transitions between one ordered pair of states.
///
/// A self-loop is not a separate type; renderers detect it with
/// [`TransitionGroup::is_self_loop`] and pick the loop path instead of an arc.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionGroup {
    pub from: StateId,
    pub to: StateId,
    /// Symbols in the order they appeared in the source transition list
    pub symbols: Vec<Symbol>,
}

impl TransitionGroup {
    /// Whether both endpoints are the same state.
    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }

    /// The comma-joined edge label, e.g. `"a,b"`.
    pub fn label(&self) -> String {
        let mut label = String::new();
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                label.push(',');
            }
            label.push(*symbol);
        }
        label
    }
}

/// Insertion-ordered mapping from `(from, to)` pairs to their groups.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransitionGroups(Vec<TransitionGroup>);

impl TransitionGroups {
    /// Iterate groups in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &TransitionGroup> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up the group for an ordered endpoint pair.
    pub fn get(&self, from: &str, to: &str) -> Option<&TransitionGroup> {
        self.0.iter().find(|g| g.from == from && g.to == to)
    }

    /// Whether a reverse-keyed group `(to, from)` also exists.
    ///
    /// Renderers use this to decide whether to curve the pair of arcs by
    /// [`BIDIRECTIONAL_CURVE`]. Self-loops are never bidirectional.
    pub fn is_bidirectional(&self, group: &TransitionGroup) -> bool {
        !group.is_self_loop() && self.get(&group.to, &group.from).is_some()
    }

    /// Expand back into individual transitions, preserving order.
    pub fn flatten(&self) -> Vec<Transition> {
        self.0
            .iter()
            .flat_map(|g| {
                g.symbols
                    .iter()
                    .map(|s| Transition::new(g.from.clone(), g.to.clone(), *s))
            })
            .collect()
    }
}

impl IntoIterator for TransitionGroups {
    type Item = TransitionGroup;
    type IntoIter = std::vec::IntoIter<TransitionGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Merge parallel transitions into labeled edge groups.
///
/// Pure and deterministic: the output depends only on the order and content
/// of `transitions`.
///
/// # Example
///
/// ```rust
/// use dfastage::automaton::{group_transitions, Transition};
///
/// let groups = group_transitions(&[
///     Transition::new("q0", "q1", 'a'),
///     Transition::new("q0", "q0", 'b'),
///     Transition::new("q0", "q1", 'b'),
/// ]);
///
/// assert_eq!(groups.len(), 2);
/// let q0_q1 = groups.get("q0", "q1").unwrap();
/// assert_eq!(q0_q1.symbols, vec!['a', 'b']);
/// assert!(groups.get("q0", "q0").unwrap().is_self_loop());
/// ```
pub fn group_transitions(transitions: &[Transition]) -> TransitionGroups {
    let mut groups: Vec<TransitionGroup> = Vec::new();

    for t in transitions {
        match groups.iter_mut().find(|g| g.from == t.from && g.to == t.to) {
            Some(group) => group.symbols.push(t.symbol),
            None => groups.push(TransitionGroup {
                from: t.from.clone(),
                to: t.to.clone(),
                symbols: vec![t.symbol],
            }),
        }
    }

    TransitionGroups(groups)
}
