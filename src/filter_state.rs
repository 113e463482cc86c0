use super::models::Selection;

/// What the user currently asked to see.
///
/// `search` is kept exactly as typed; trimming and case folding happen where
/// it is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search: String,
    pub category: Selection,
}
