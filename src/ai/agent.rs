use crate::game::GameState;

/// Universal interface for move-selecting agents.
pub trait Agent {
    /// Select a column to play in the given state.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Clone the agent into a boxed trait object.
    fn clone_agent(&self) -> Box<dyn Agent>;
}
