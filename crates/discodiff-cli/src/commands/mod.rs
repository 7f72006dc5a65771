pub mod diff;

/// How a successful command should exit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Exit 0
    Success,
    /// Exit 2; differences were found and `--fail-on-change` was set
    ChangesFound,
}
