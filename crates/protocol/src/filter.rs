//! Filter views over the task collection.

use serde::{Deserialize, Serialize};

/// A named predicate selecting which tasks to display.
///
/// Each filter corresponds to one retrieval endpoint on the server. The
/// most recently invoked filter is the *active* filter, indicated visually
/// on its corresponding control.
///
/// # Examples
///
/// ```
/// use taskboard_protocol::Filter;
///
/// assert_eq!(Filter::default(), Filter::All);
/// assert_eq!(Filter::Scheduled.label(), "Scheduled");
/// assert_eq!(Filter::ALL.len(), 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// The unfiltered collection.
    #[default]
    All,
    /// Only tasks with `completed = true`.
    Completed,
    /// Only tasks with `completed = false`.
    Incomplete,
    /// Tasks scheduled within the next seven days.
    Scheduled,
}

impl Filter {
    /// All filters in display order.
    pub const ALL: [Self; 4] = [Self::All, Self::Completed, Self::Incomplete, Self::Scheduled];

    /// Human-readable label for the filter control.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Completed => "Completed",
            Self::Incomplete => "Incomplete",
            Self::Scheduled => "Scheduled",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_is_all() {
        assert_eq!(Filter::default(), Filter::All);
    }

    #[test]
    fn labels_are_unique() {
        for (i, a) in Filter::ALL.iter().enumerate() {
            for b in &Filter::ALL[i + 1..] {
                assert_ne!(a.label(), b.label());
            }
        }
    }

    #[test]
    fn display_order_starts_with_all() {
        assert_eq!(Filter::ALL[0], Filter::All);
    }
}
