// Session configuration

/// How the increase/decrease question is answered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionInput {
    /// First letter decides: `v...` is an increase, anything else a decrease
    #[default]
    Letter,
    /// Only the listed increase/decrease words are accepted; others re-prompt
    Explicit,
}

/// Session settings (defaults match the classic letter-based behaviour)
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    pub direction_input: DirectionInput,
}
