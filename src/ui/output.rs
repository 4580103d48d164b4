//! Output verbosity mode.

/// Output verbosity mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Also show how each device was resolved.
    Verbose,
    /// Show status, warnings and the guide.
    #[default]
    Normal,
    /// Show only warnings, errors and the guide.
    Quiet,
}

impl OutputMode {
    /// Check if this mode shows per-device detail.
    pub fn shows_details(&self) -> bool {
        matches!(self, Self::Verbose)
    }

    /// Check if this mode shows headers and success messages.
    pub fn shows_status(&self) -> bool {
        !matches!(self, Self::Quiet)
    }
}
