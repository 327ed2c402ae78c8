/// Aggregated view of game progress, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub is_complete: bool,
}
