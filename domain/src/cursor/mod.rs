//! The wizard cursor: which question is active, and which way we last moved.

/// Direction of the most recent cursor transition.
///
/// Pure presentation metadata (e.g. which way a slide animation runs).
/// Nothing correctness-relevant may read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransitionDirection {
    #[default]
    Forward,
    Backward,
}

/// Pointer to the currently displayed question.
///
/// State machine over `index ∈ [0, N-1]` where N is the catalog length.
/// Every transition moves exactly one position; there is deliberately no
/// jump-to-arbitrary-index operation, the wizard is linear.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardCursor {
    index: usize,
    len: usize,
    direction: TransitionDirection,
}

impl WizardCursor {
    /// Create a cursor over a catalog of `len` questions, positioned at the
    /// first one.
    ///
    /// # Panics
    /// Panics if `len` is zero; an empty catalog is rejected upstream.
    pub fn new(len: usize) -> Self {
        assert!(len > 0, "cursor requires a non-empty catalog");
        Self {
            index: 0,
            len,
            direction: TransitionDirection::default(),
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn direction(&self) -> TransitionDirection {
        self.direction
    }

    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    pub fn is_last(&self) -> bool {
        self.index == self.len - 1
    }

    /// Move one question forward. No-op at the last question.
    ///
    /// Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.direction = TransitionDirection::Forward;
        self.index += 1;
        true
    }

    /// Move one question backward. No-op at the first question.
    ///
    /// Returns whether the cursor moved.
    pub fn retreat(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.direction = TransitionDirection::Backward;
        self.index -= 1;
        true
    }

    /// Return to the first question. The direction is left as-is; it is
    /// unspecified after a reset.
    pub fn reset(&mut self) {
        self.index = 0;
    }
}
