//! The three allocation categories

use std::fmt;

/// An allocation category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Market,
    Development,
    Sell,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 3] = [Field::Market, Field::Development, Field::Sell];

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Market => "Market",
            Self::Development => "Development",
            Self::Sell => "Sales",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Self::Market => Self::Development,
            Self::Development => Self::Sell,
            Self::Sell => Self::Market,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Market => Self::Sell,
            Self::Development => Self::Market,
            Self::Sell => Self::Development,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle() {
        for field in Field::ALL {
            assert_eq!(field.next().prev(), field);
        }
        assert_eq!(Field::Sell.next(), Field::Market);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Field::Sell.to_string(), "Sales");
        assert_eq!(Field::Development.label(), "Development");
    }
}
