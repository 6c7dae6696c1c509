//! Predefined workout tags offered by the creation form.

/// A selectable tag: the stored value and its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagOption {
    pub value: &'static str,
    pub label: &'static str,
}

pub const TAG_OPTIONS: &[TagOption] = &[
    TagOption { value: "push", label: "Push" },
    TagOption { value: "pull", label: "Pull" },
    TagOption { value: "legs", label: "Legs" },
    TagOption { value: "upper", label: "Upper" },
    TagOption { value: "lower", label: "Lower" },
    TagOption { value: "full-body", label: "Full Body" },
    TagOption { value: "cardio", label: "Cardio" },
    TagOption { value: "other", label: "Other" },
];

/// Tag options whose label contains `query`, ignoring case. An empty query
/// matches everything.
///
/// ```rust
/// use setlog_core::compose::filter_tags;
///
/// let matches: Vec<_> = filter_tags("bo").iter().map(|tag| tag.value).collect();
/// assert_eq!(matches, vec!["full-body"]);
/// ```
pub fn filter_tags(query: &str) -> Vec<&'static TagOption> {
    let query = query.to_lowercase();
    TAG_OPTIONS
        .iter()
        .filter(|tag| tag.label.to_lowercase().contains(&query))
        .collect()
}
