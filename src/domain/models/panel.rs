/// Visibility of the side panel for one mounted shell.
///
/// Starts open on every mount; the toggle control is the only transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelVisibility {
    #[default]
    Open,
    Closed,
}

impl PanelVisibility {
    pub fn is_open(&self) -> bool {
        matches!(self, PanelVisibility::Open)
    }

    pub fn toggle(self) -> Self {
        match self {
            PanelVisibility::Open => PanelVisibility::Closed,
            PanelVisibility::Closed => PanelVisibility::Open,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelVisibility::Open => "open",
            PanelVisibility::Closed => "closed",
        }
    }

    /// Label for the toggle control (describes what a click does)
    pub fn toggle_label(&self) -> &'static str {
        match self {
            PanelVisibility::Open => "Hide navigation",
            PanelVisibility::Closed => "Show navigation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_open() {
        assert_eq!(PanelVisibility::default(), PanelVisibility::Open);
        assert!(PanelVisibility::default().is_open());
    }

    #[test]
    fn test_toggle_flips_each_state() {
        assert_eq!(PanelVisibility::Open.toggle(), PanelVisibility::Closed);
        assert_eq!(PanelVisibility::Closed.toggle(), PanelVisibility::Open);
    }

    #[test]
    fn test_toggle_sequence_open_closed_open() {
        let mounted = PanelVisibility::default();
        let once = mounted.toggle();
        let twice = once.toggle();
        assert!(mounted.is_open());
        assert!(!once.is_open());
        assert!(twice.is_open());
    }

    #[test]
    fn test_toggle_label_describes_next_state() {
        assert_eq!(PanelVisibility::Open.toggle_label(), "Hide navigation");
        assert_eq!(PanelVisibility::Closed.toggle_label(), "Show navigation");
    }
}
