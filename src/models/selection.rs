use std::fmt;

/// Marker value carried by the "All" button.
pub const ALL_KEY: &str = "all";

/// Category filter value: either no restriction or one category label.
///
/// Categories are open data taken from the catalog, so a named category is
/// any string. `All` is its own variant and never collides with a category
/// that happens to be called "all".
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    #[default]
    All,
    Category(String),
}

impl Selection {
    #[must_use]
    pub fn category(name: &str) -> Self {
        Self::Category(name.to_string())
    }

    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    #[must_use]
    pub fn matches(&self, category: &str) -> bool {
        match self {
            Self::All => true,
            Self::Category(name) => name == category,
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::All => ALL_KEY,
            Self::Category(name) => name,
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.key())
    }
}
