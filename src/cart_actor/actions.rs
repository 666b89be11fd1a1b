use crate::domain::Game;

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Appends the game; duplicates are kept. Yields the new item count.
    Add(Game),
}
