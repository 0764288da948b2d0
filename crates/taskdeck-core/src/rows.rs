/*
[INPUT]:  List screen rebuilds, row toggle requests, UI ticks
[OUTPUT]: Per-row expansion flags and animated extra padding
[POS]:    List row view state - local to the list screen, never stored with tasks
[UPDATE]: When row expansion or animation behavior changes
*/

/// Extra padding (in terminal lines) an expanded row settles at.
pub const EXPANDED_PADDING: u16 = 2;

/// Expansion state for one rendered row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RowState {
    expanded: bool,
    padding: u16,
}

impl RowState {
    pub fn expanded(&self) -> bool {
        self.expanded
    }

    /// Current animated padding, between 0 and [`EXPANDED_PADDING`].
    pub fn padding(&self) -> u16 {
        self.padding
    }

    pub fn target_padding(&self) -> u16 {
        if self.expanded { EXPANDED_PADDING } else { 0 }
    }

    pub fn is_animating(&self) -> bool {
        self.padding != self.target_padding()
    }

    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    /// Moves padding one line toward its target. Returns whether it moved.
    pub fn tick(&mut self) -> bool {
        let target = self.target_padding();
        if self.padding < target {
            self.padding += 1;
            true
        } else if self.padding > target {
            self.padding -= 1;
            true
        } else {
            false
        }
    }
}

/// Row states for the list screen, indexed like the task store.
#[derive(Debug, Clone, Default)]
pub struct RowStates {
    rows: Vec<RowState>,
}

impl RowStates {
    pub fn new(len: usize) -> Self {
        let mut rows = Self::default();
        rows.rebuild(len);
        rows
    }

    /// Recreates every row collapsed.
    pub fn rebuild(&mut self, len: usize) {
        self.rows = vec![RowState::default(); len];
    }

    /// Flips row `index` only. Returns false when there is no such row.
    pub fn toggle(&mut self, index: usize) -> bool {
        match self.rows.get_mut(index) {
            Some(row) => {
                row.toggle();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, index: usize) -> Option<&RowState> {
        self.rows.get(index)
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.rows.get(index).is_some_and(RowState::expanded)
    }

    pub fn is_animating(&self) -> bool {
        self.rows.iter().any(RowState::is_animating)
    }

    /// Advances every row animation by one step.
    pub fn tick(&mut self) -> bool {
        self.rows
            .iter_mut()
            .fold(false, |moved, row| row.tick() || moved)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RowState> {
        self.rows.iter()
    }
}
