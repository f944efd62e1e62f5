//! `SearchPath`: a persistent, structurally shared state sequence.
//!
//! A path is a reference-counted chain from the newest state back to the
//! start. Appending allocates one link and never touches the parent, so
//! every fringe entry owns an independent path value.

use std::rc::Rc;

use pancake_kernel::stack::state::StackState;

#[derive(Debug)]
struct PathLink {
    state: StackState,
    parent: Option<Rc<PathLink>>,
}

/// An ordered, non-empty sequence of states from a start state.
#[derive(Debug, Clone)]
pub struct SearchPath {
    head: Rc<PathLink>,
    state_count: usize,
}

impl SearchPath {
    /// A one-state path.
    #[must_use]
    pub fn root(state: StackState) -> Self {
        Self {
            head: Rc::new(PathLink {
                state,
                parent: None,
            }),
            state_count: 1,
        }
    }

    /// A new path equal to `self` followed by `state`. `self` is unchanged.
    #[must_use]
    pub fn push(&self, state: StackState) -> Self {
        Self {
            head: Rc::new(PathLink {
                state,
                parent: Some(Rc::clone(&self.head)),
            }),
            state_count: self.state_count + 1,
        }
    }

    /// The newest state.
    #[must_use]
    pub fn last(&self) -> &StackState {
        &self.head.state
    }

    /// Number of states on the path (at least 1).
    #[must_use]
    pub fn state_count(&self) -> usize {
        self.state_count
    }

    /// True if `state` appears anywhere on the path.
    #[must_use]
    pub fn contains(&self, state: &StackState) -> bool {
        self.iter_rev().any(|s| s == state)
    }

    /// States from newest to oldest.
    pub fn iter_rev(&self) -> impl Iterator<Item = &StackState> {
        std::iter::successors(Some(self.head.as_ref()), |&link| link.parent.as_deref())
            .map(|link| &link.state)
    }

    /// States from the start state to the newest.
    #[must_use]
    pub fn to_vec(&self) -> Vec<StackState> {
        let mut states: Vec<StackState> = self.iter_rev().copied().collect();
        states.reverse();
        states
    }
}
