//! Alliance colors.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The two alliances a team can be scheduled on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alliance {
    #[default]
    Blue,
    Red,
}

impl Alliance {
    /// The string form used in persisted JSON documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Red => "red",
        }
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Blue => f.write_str("Blue"),
            Self::Red => f.write_str("Red"),
        }
    }
}

impl Serialize for Alliance {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Alliance {
    /// Unknown color strings decode as blue rather than failing the document.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(if raw == "red" { Self::Red } else { Self::Blue })
    }
}
