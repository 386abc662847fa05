//! Disambiguation policy
//!
//! Decides whether an acting command (open, convert) may act on its matches.

/// Maximum number of items acted on by a single `--all` batch
pub const BATCH_CAP: usize = 3;

/// What an acting command should do with its matches
#[derive(Debug, PartialEq, Eq)]
pub enum Selection<'a, T> {
    /// Nothing matched
    None,
    /// Exactly one match; act on it without confirmation
    Single(&'a T),
    /// Several matches and no `--all`; list them and ask for refinement
    Ambiguous(&'a [T]),
    /// `--all` was given; act on at most [`BATCH_CAP`] items in order
    Batch { items: &'a [T], total: usize },
}

impl<T> Selection<'_, T> {
    /// Whether the batch was cut short by the cap
    pub fn is_capped(&self) -> bool {
        matches!(self, Selection::Batch { items, total } if items.len() < *total)
    }
}

/// Apply the disambiguation policy to `items`
pub fn select<T>(items: &[T], act_on_all: bool) -> Selection<'_, T> {
    match (items, act_on_all) {
        ([], _) => Selection::None,
        ([single], false) => Selection::Single(single),
        (_, false) => Selection::Ambiguous(items),
        (_, true) => Selection::Batch {
            items: &items[..items.len().min(BATCH_CAP)],
            total: items.len(),
        },
    }
}
