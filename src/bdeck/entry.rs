//! B-deck (best track) observation decoding.
use crate::{
    epoch::{format_compact, parse_compact},
    fields,
    wind_radii::{decode_radii, WindRadii},
    Basin, ParsingError, StormId,
};
use hifitime::Epoch;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Field positions in the b-deck schema.
pub(crate) mod layout {
    pub const BASIN: usize = 0;
    pub const NUMBER: usize = 1;
    pub const TIME: usize = 2;
    pub const LAT: usize = 6;
    pub const LON: usize = 7;
    pub const VMAX: usize = 8;
    pub const PMIN: usize = 9;
    pub const CLASSIFICATION: usize = 10;
    pub const POCI: usize = 17;
    pub const ROCI: usize = 18;
    pub const RMW: usize = 19;
    pub const MAXGUST: usize = 20;
    pub const EYE_DIAMETER: usize = 21;
    pub const NAME: usize = 27;
}

/// Storm name used when the deck never carried one.
pub(crate) const NONAME: &str = "NONAME";

/// One best track observation, decoded from all the deck lines
/// describing one synoptic time (one line per wind radii threshold).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BDeckEntry {
    /// Basin the storm is located in
    pub basin: Basin,
    /// Annual storm number, 90+ for invests
    pub number: u8,
    /// Observation time
    pub time: Epoch,
    /// Latitude (degrees north)
    pub lat: f64,
    /// Longitude (degrees, [-180, 180], west negative)
    pub lon: f64,
    /// Maximum sustained wind (kt)
    pub vmax: f64,
    /// Minimum central pressure (hPa)
    pub pmin: Option<f64>,
    /// Two letter storm classification ("TD", "TS", "HU", ...)
    pub classification: String,
    /// Storm name, "NONAME" if the deck line is too short to carry one
    pub name: String,
    /// Pressure of the outermost closed isobar (hPa)
    pub poci: Option<f64>,
    /// Radius of the outermost closed isobar (nm)
    pub roci: Option<f64>,
    /// Radius of maximum wind (nm)
    pub rmw: Option<f64>,
    /// Maximum wind gust (kt)
    pub maxgust: Option<f64>,
    /// Eye diameter (nm)
    pub eye_diameter: Option<f64>,
    /// 34 kt quadrant wind radii (nm)
    pub r34: WindRadii,
    /// 50 kt quadrant wind radii (nm)
    pub r50: WindRadii,
    /// 64 kt quadrant wind radii (nm)
    pub r64: WindRadii,
}

impl BDeckEntry {
    /// Decodes one observation from every deck line describing it.
    /// Scalar attributes come from the first line (all lines of a group
    /// agree on them); wind radii are merged across the whole group.
    pub fn from_lines(lines: &[String]) -> Result<Self, ParsingError> {
        let first = lines.first().ok_or(ParsingError::EmptyRecord)?;
        let fields = fields::split(first);

        let basin = Basin::from_str(fields::required(&fields, layout::BASIN)?)?;
        let number = fields::required(&fields, layout::NUMBER)?;
        let number = number
            .parse::<u8>()
            .map_err(|_| ParsingError::StormNumber(number.to_string()))?;
        let time = parse_compact(fields::required(&fields, layout::TIME)?)?;

        let lat = fields::parse_latitude(fields::required(&fields, layout::LAT)?)?;
        let lon = fields::parse_longitude(fields::required(&fields, layout::LON)?)?;
        let vmax = fields::parse_wind_speed(fields::required(&fields, layout::VMAX)?)?;
        let classification = fields::required(&fields, layout::CLASSIFICATION)?.to_string();

        // old decks are often truncated before the name field
        let name = match fields.get(layout::NAME) {
            Some(name) => name.to_string(),
            None => NONAME.to_string(),
        };

        let [r34, r50, r64] = decode_radii(lines)?;

        Ok(Self {
            basin,
            number,
            time,
            lat,
            lon,
            vmax,
            classification,
            name,
            pmin: fields::parse_optional(&fields, layout::PMIN)?,
            poci: fields::parse_optional(&fields, layout::POCI)?,
            roci: fields::parse_optional(&fields, layout::ROCI)?,
            rmw: fields::parse_optional(&fields, layout::RMW)?,
            maxgust: fields::parse_optional(&fields, layout::MAXGUST)?,
            eye_diameter: fields::parse_optional(&fields, layout::EYE_DIAMETER)?,
            r34,
            r50,
            r64,
        })
    }
    /// Storm this observation belongs to, like "09L".
    pub fn storm_id(&self) -> StormId {
        StormId::new(self.basin, self.number)
    }
}

impl std::fmt::Display for BDeckEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} {}", self.storm_id(), format_compact(self.time))
    }
}
