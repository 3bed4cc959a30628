use std::fmt;

/// Sentinel shown first in the category list.
pub const ALL_CATEGORIES: &str = "All";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Exact(String),
}

impl CategoryFilter {
    /// "All" (any case) maps to the sentinel, everything else is taken verbatim.
    pub fn from_input(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case(ALL_CATEGORIES) {
            CategoryFilter::All
        } else {
            CategoryFilter::Exact(s.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Exact(c) => c == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(ALL_CATEGORIES),
            CategoryFilter::Exact(c) => f.write_str(c),
        }
    }
}

/// Tri-state active filter: unset, active only, inactive only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    Any,
    Active,
    Inactive,
}

impl StatusFilter {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "all" | "any" => Some(StatusFilter::Any),
            "active" | "true" => Some(StatusFilter::Active),
            "inactive" | "false" => Some(StatusFilter::Inactive),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StatusFilter::Any => None,
            StatusFilter::Active => Some(true),
            StatusFilter::Inactive => Some(false),
        }
    }

    pub fn matches(&self, active: bool) -> bool {
        self.as_bool().is_none_or(|want| want == active)
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::Any => "All",
            StatusFilter::Active => "Active",
            StatusFilter::Inactive => "Inactive",
        }
    }
}
