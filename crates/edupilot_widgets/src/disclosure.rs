//! Single open/closed panel (mobile menu, chat window)

/// Open/closed toggle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Disclosure {
    open: bool,
}

impl Disclosure {
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the panel, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Returns `true` if the panel was closed before
    pub fn open(&mut self) -> bool {
        !std::mem::replace(&mut self.open, true)
    }

    /// Returns `true` if the panel was open before
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disclosure() {
        let mut panel = Disclosure::default();
        assert!(!panel.is_open());

        assert!(panel.toggle());
        assert!(!panel.open());
        assert!(panel.close());
        assert!(!panel.close());
        assert!(panel.open());
        assert!(panel.is_open());
    }
}
