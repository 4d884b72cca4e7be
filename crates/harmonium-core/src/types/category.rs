//! Search categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four independent search partitions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Songs,
    Artists,
    Albums,
    Playlists,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 4] = [Self::Songs, Self::Artists, Self::Albums, Self::Playlists];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Songs => "songs",
            Self::Artists => "artists",
            Self::Albums => "albums",
            Self::Playlists => "playlists",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Songs.to_string(), "songs");
        assert_eq!(Category::ALL.len(), 4);
    }
}
