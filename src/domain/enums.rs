/// View selector controlling which sections are rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Filter {
    All,
    Active,
    Completed,
}

impl Filter {
    /// Whether the active section is rendered under this filter
    pub fn shows_active(&self) -> bool {
        matches!(self, Self::All | Self::Active)
    }

    /// Whether the completed section is rendered under this filter
    pub fn shows_completed(&self) -> bool {
        matches!(self, Self::All | Self::Completed)
    }

    /// Display label for the hint bar
    pub fn label(&self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
        }
    }

    /// Get all filters as a list
    pub fn all() -> &'static [Filter] {
        &[Filter::All, Filter::Active, Filter::Completed]
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    /// Typing into the add-task input bar
    AddingTask,
    /// Editing a task's text in place
    EditingTask,
}

/// Which section keyboard commands act on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Active,
    Completed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_visibility() {
        assert!(Filter::All.shows_active());
        assert!(Filter::All.shows_completed());
        assert!(Filter::Active.shows_active());
        assert!(!Filter::Active.shows_completed());
        assert!(!Filter::Completed.shows_active());
        assert!(Filter::Completed.shows_completed());
    }

    #[test]
    fn test_filter_labels() {
        assert_eq!(Filter::All.label(), "All");
        assert_eq!(Filter::Active.label(), "Active");
        assert_eq!(Filter::Completed.label(), "Completed");
    }

    #[test]
    fn test_filter_all_lists_every_variant() {
        assert_eq!(Filter::all().len(), 3);
    }
}
