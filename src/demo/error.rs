/// Error types for the demo-mode stage driver
#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    /// The backing fixture has no data for the requested stage. Callers
    /// fall back to the last known check-in state when one exists.
    #[error("No fixture data for stage {0}")]
    FixtureUnavailable(usize),

    #[error("Stage fixture is malformed: {0}")]
    FixtureDecode(#[from] serde_json::Error),
}

/// Result type alias for demo-mode operations
pub type DemoResult<T> = Result<T, DemoError>;
