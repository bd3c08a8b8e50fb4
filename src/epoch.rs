//! Compact deck timestamp helpers
use crate::ParsingError;
use hifitime::{Epoch, TimeScale};
use std::str::FromStr;

/// Parses an [Epoch] from the compact "YYYYMMDDHH" timestamp carried
/// by deck records (observation and initialization times).
pub fn parse_compact(content: &str) -> Result<Epoch, ParsingError> {
    let content = content.trim();
    if content.len() != 10 || !content.is_ascii() {
        return Err(ParsingError::Timestamp(content.to_string()));
    }
    let y = i32::from_str(&content[0..4])
        .or(Err(ParsingError::Timestamp(content.to_string())))?;
    let m = u8::from_str(&content[4..6])
        .or(Err(ParsingError::Timestamp(content.to_string())))?;
    let d = u8::from_str(&content[6..8])
        .or(Err(ParsingError::Timestamp(content.to_string())))?;
    let hh = u8::from_str(&content[8..10])
        .or(Err(ParsingError::Timestamp(content.to_string())))?;
    Epoch::maybe_from_gregorian(y, m, d, hh, 0, 0, 0, TimeScale::UTC)
        .or(Err(ParsingError::Timestamp(content.to_string())))
}

/// Formats an [Epoch] back to the compact "YYYYMMDDHH" deck timestamp.
pub fn format_compact(epoch: Epoch) -> String {
    let (y, m, d, hh, _, _, _) = epoch.to_gregorian_utc();
    format!("{:04}{:02}{:02}{:02}", y, m, d, hh)
}
