#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    Open,
    #[default]
    Closed,
}

/// Visibility of the collapsible mobile menu.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationMenu {
    state: MenuState,
}

impl NavigationMenu {
    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    pub fn toggle(&mut self) {
        self.state = match self.state {
            MenuState::Open => MenuState::Closed,
            MenuState::Closed => MenuState::Open,
        };
    }

    /// Collapses the menu; picking a destination always lands here.
    pub fn close(&mut self) {
        self.state = MenuState::Closed;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollState {
    #[default]
    AtTop,
    Scrolled,
}

impl ScrollState {
    pub fn from_offset(offset: f64, threshold: f64) -> Self {
        if offset > threshold {
            Self::Scrolled
        } else {
            Self::AtTop
        }
    }

    pub fn is_scrolled(self) -> bool {
        self == Self::Scrolled
    }
}

/// Folds a stream of vertical scroll offsets into a [`ScrollState`].
#[derive(Debug, Clone, Copy)]
pub struct ScrollObserver {
    threshold: f64,
    state: ScrollState,
}

impl ScrollObserver {
    pub fn new(threshold: f64) -> Self {
        Self {
            threshold,
            state: ScrollState::AtTop,
        }
    }

    pub fn state(&self) -> ScrollState {
        self.state
    }

    /// Returns true when the offset flipped the state.
    pub fn observe(&mut self, offset: f64) -> bool {
        let next = ScrollState::from_offset(offset, self.threshold);
        let changed = next != self.state;
        self.state = next;
        changed
    }
}
