//! Storm identification
use crate::{Basin, ParsingError};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// StormId identifies one tropical system: the annual storm number
/// and the originating basin, printed in the "09L" deck style.
#[derive(Default, Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StormId {
    /// Annual storm number: 01+ for depressions and named systems,
    /// 90+ for invest areas
    pub number: u8,
    /// Originating basin
    pub basin: Basin,
}

impl StormId {
    /// Builds a new StormId
    /// ```
    /// use atcf::prelude::*;
    /// use std::str::FromStr;
    ///
    /// let id = StormId::new(Basin::Atlantic, 9);
    /// assert_eq!(id.to_string(), "09L");
    /// assert_eq!(id, StormId::from_str("09L").unwrap());
    /// ```
    pub fn new(basin: Basin, number: u8) -> Self {
        Self { number, basin }
    }
    /// True if this system is an invest area rather than a
    /// numbered depression or storm.
    pub fn is_invest(&self) -> bool {
        self.number >= 90
    }
}

impl std::fmt::Display for StormId {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:02}{}", self.number, self.basin.letter())
    }
}

impl std::str::FromStr for StormId {
    type Err = ParsingError;
    /*
     * Parse StormId from the "<2-digit number><basin letter>" format.
     */
    fn from_str(string: &str) -> Result<Self, Self::Err> {
        let s = string.trim();
        let letter = s
            .chars()
            .next_back()
            .ok_or_else(|| ParsingError::StormId(s.to_string()))?;
        let basin =
            Basin::from_letter(letter).ok_or_else(|| ParsingError::StormId(s.to_string()))?;
        let number = s[..s.len() - letter.len_utf8()]
            .parse::<u8>()
            .map_err(|_| ParsingError::StormId(s.to_string()))?;
        Ok(Self { number, basin })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    #[test]
    fn from_str() {
        for (descriptor, expected) in [
            ("01L", StormId::new(Basin::Atlantic, 1)),
            ("09L", StormId::new(Basin::Atlantic, 9)),
            ("17E", StormId::new(Basin::EasternPacific, 17)),
            ("03C", StormId::new(Basin::CentralPacific, 3)),
            ("26W", StormId::new(Basin::WesternPacific, 26)),
            ("01Q", StormId::new(Basin::SouthAtlantic, 1)),
            ("97L", StormId::new(Basin::Atlantic, 97)),
            (" 09L ", StormId::new(Basin::Atlantic, 9)),
        ] {
            let id = StormId::from_str(descriptor);
            assert!(
                id.is_ok(),
                "failed to parse storm ID from \"{}\" - {:?}",
                descriptor,
                id.err().unwrap()
            );
            assert_eq!(id.unwrap(), expected);
        }
    }
    #[test]
    fn display_roundtrip() {
        let id = StormId::new(Basin::EasternPacific, 5);
        assert_eq!(id.to_string(), "05E");
        assert_eq!(StormId::from_str(&id.to_string()).unwrap(), id);
    }
    #[test]
    fn invests() {
        assert!(StormId::from_str("97L").unwrap().is_invest());
        assert!(!StormId::from_str("09L").unwrap().is_invest());
    }
    #[test]
    fn rejects_malformed() {
        for descriptor in ["", "9", "09X", "XXL", "300L"] {
            assert!(
                StormId::from_str(descriptor).is_err(),
                "storm ID \"{}\" should not parse",
                descriptor
            );
        }
    }
}
