/// Open/closed state of an overlay panel, carried by its inline `display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Open,
    Closed,
}

impl ModalState {
    pub fn display(self) -> &'static str {
        match self {
            Self::Open => "flex",
            Self::Closed => "none",
        }
    }

    /// Anything other than `flex` counts as closed, including an unset style.
    pub fn from_display(display: &str) -> Self {
        if display == Self::Open.display() {
            Self::Open
        } else {
            Self::Closed
        }
    }
}
