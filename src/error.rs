//! Errors reported by sweep control operations.

/// Conditions that stop a run request from taking effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SweepError {
    /// Run was requested before any pattern was selected.
    NoVcpSelected,
    /// The selected pattern produced no scan steps.
    EmptySequence,
}

impl std::fmt::Display for SweepError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SweepError::NoVcpSelected => write!(f, "Please select a VCP pattern first"),
            SweepError::EmptySequence => write!(f, "Pattern sequence is empty"),
        }
    }
}

impl std::error::Error for SweepError {}
