use learnpath_core::model::difficulty_class;

/// A pill label with its CSS modifier.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BadgeVm {
    pub label: String,
    pub class: String,
}

impl BadgeVm {
    /// Difficulty badge: the level as written, class lowercased.
    #[must_use]
    pub fn difficulty(level: &str) -> Self {
        Self {
            label: level.to_string(),
            class: difficulty_class(level),
        }
    }

    /// Knowledge-gap badge.
    #[must_use]
    pub fn gap(is_weak: bool) -> Self {
        let (label, class) = if is_weak {
            ("Weak Area", "high")
        } else {
            ("Strong", "low")
        };
        Self {
            label: label.to_string(),
            class: class.to_string(),
        }
    }

    /// Full `class` attribute value.
    #[must_use]
    pub fn css(&self) -> String {
        format!("badge badge-{}", self.class)
    }
}
