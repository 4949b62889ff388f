use std::fmt;

/// Level-banded matchmaking bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// Levels below 21
    One,
    /// Levels 21 through 40
    Two,
    /// Level 41 and up
    Three,
}

impl Tier {
    pub fn for_level(level: i64) -> Self {
        if level < 21 {
            Self::One
        } else if level < 41 {
            Self::Two
        } else {
            Self::Three
        }
    }

    /// Value of the API's `battleLevel` parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::One => "1",
            Self::Two => "2",
            Self::Three => "3",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
