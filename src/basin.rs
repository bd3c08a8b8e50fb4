//! Ocean basin identification
use crate::ParsingError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Ocean basins covered by ATCF deck records, identified in the
/// deck by a two letter code ("AL", "EP", ...).
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Basin {
    /// North Atlantic ("AL")
    #[default]
    Atlantic,
    /// South Atlantic ("LS")
    SouthAtlantic,
    /// Eastern North Pacific ("EP")
    EasternPacific,
    /// Central North Pacific ("CP")
    CentralPacific,
    /// Western North Pacific ("WP")
    WesternPacific,
}

impl Basin {
    /// Returns the two letter basin code, as carried by deck records.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Atlantic => "AL",
            Self::SouthAtlantic => "LS",
            Self::EasternPacific => "EP",
            Self::CentralPacific => "CP",
            Self::WesternPacific => "WP",
        }
    }
    /// Returns the basin letter used as storm ID suffix,
    /// for example the 'L' of "09L".
    pub fn letter(&self) -> char {
        match self {
            Self::Atlantic => 'L',
            Self::SouthAtlantic => 'Q',
            Self::EasternPacific => 'E',
            Self::CentralPacific => 'C',
            Self::WesternPacific => 'W',
        }
    }
    /// Identifies a basin from its storm ID suffix letter.
    pub(crate) fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'L' => Some(Self::Atlantic),
            'Q' => Some(Self::SouthAtlantic),
            'E' => Some(Self::EasternPacific),
            'C' => Some(Self::CentralPacific),
            'W' => Some(Self::WesternPacific),
            _ => None,
        }
    }
}

impl std::fmt::Display for Basin {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl std::str::FromStr for Basin {
    type Err = ParsingError;
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.trim() {
            "AL" => Ok(Self::Atlantic),
            "LS" => Ok(Self::SouthAtlantic),
            "EP" => Ok(Self::EasternPacific),
            "CP" => Ok(Self::CentralPacific),
            "WP" => Ok(Self::WesternPacific),
            _ => Err(ParsingError::UnknownBasin(string.trim().to_string())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    #[test]
    fn from_str() {
        for (code, basin, letter) in [
            ("AL", Basin::Atlantic, 'L'),
            ("LS", Basin::SouthAtlantic, 'Q'),
            ("EP", Basin::EasternPacific, 'E'),
            ("CP", Basin::CentralPacific, 'C'),
            ("WP", Basin::WesternPacific, 'W'),
        ] {
            let parsed = Basin::from_str(code).unwrap();
            assert_eq!(parsed, basin);
            assert_eq!(parsed.code(), code);
            assert_eq!(parsed.letter(), letter);
            assert_eq!(Basin::from_letter(letter), Some(basin));
            assert_eq!(parsed.to_string(), code);
        }
        // fields arrive whitespace padded
        assert_eq!(Basin::from_str(" AL "), Ok(Basin::Atlantic));
    }
    #[test]
    fn unknown_code() {
        for code in ["IO", "SH", "", "al"] {
            assert!(
                Basin::from_str(code).is_err(),
                "basin \"{}\" should not be identified",
                code
            );
        }
    }
}
