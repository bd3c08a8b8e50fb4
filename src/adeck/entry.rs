//! A-deck forecast entry decoding.
use crate::{
    epoch::{format_compact, parse_compact},
    fields,
    wind_radii::{decode_radii, WindRadii},
    Basin, ParsingError, StormId,
};
use hifitime::{Epoch, Unit};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Field positions in the a-deck schema.
pub(crate) mod layout {
    pub const BASIN: usize = 0;
    pub const NUMBER: usize = 1;
    pub const INIT: usize = 2;
    pub const MODEL: usize = 4;
    pub const FHOUR: usize = 5;
    pub const LAT: usize = 6;
    pub const LON: usize = 7;
    pub const VMAX: usize = 8;
    pub const PMIN: usize = 9;
    pub const POCI: usize = 17;
    pub const ROCI: usize = 18;
    pub const RMW: usize = 19;
}

/// One model forecast sample: a single storm, model, initialization
/// time and lead time, decoded from all the deck lines describing that
/// moment (one line per wind radii threshold).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ADeckEntry {
    /// Basin the storm is located in
    pub basin: Basin,
    /// Annual storm number, 90+ for invests
    pub number: u8,
    /// Forecast model name ("OFCL", "HWRF", ...)
    pub model: String,
    /// Model initialization time
    pub init: Epoch,
    /// Forecast hour (lead time)
    pub fhour: i32,
    /// Forecast valid time: init + lead time
    pub valid_time: Epoch,
    /// Latitude (degrees north)
    pub lat: f64,
    /// Longitude (degrees, [-180, 180], west negative)
    pub lon: f64,
    /// Maximum sustained wind (kt)
    pub vmax: f64,
    /// Minimum central pressure (hPa)
    pub pmin: Option<f64>,
    /// Pressure of the outermost closed isobar (hPa)
    pub poci: Option<f64>,
    /// Radius of the outermost closed isobar (nm)
    pub roci: Option<f64>,
    /// Radius of maximum wind (nm)
    pub rmw: Option<f64>,
    /// 34 kt quadrant wind radii (nm)
    pub r34: WindRadii,
    /// 50 kt quadrant wind radii (nm)
    pub r50: WindRadii,
    /// 64 kt quadrant wind radii (nm)
    pub r64: WindRadii,
}

impl ADeckEntry {
    /// Decodes one logical record from every deck line describing it.
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
        let model = fields::required(&fields, layout::MODEL)?.to_string();
        let init = parse_compact(fields::required(&fields, layout::INIT)?)?;
        let fhour = fields::required(&fields, layout::FHOUR)?;
        let fhour = fhour
            .parse::<i32>()
            .map_err(|_| ParsingError::ForecastHour(fhour.to_string()))?;

        let lat = fields::parse_latitude(fields::required(&fields, layout::LAT)?)?;
        let lon = fields::parse_longitude(fields::required(&fields, layout::LON)?)?;
        let vmax = fields::parse_wind_speed(fields::required(&fields, layout::VMAX)?)?;

        let [r34, r50, r64] = decode_radii(lines)?;

        Ok(Self {
            basin,
            number,
            model,
            init,
            fhour,
            valid_time: init + fhour as i64 * Unit::Hour,
            lat,
            lon,
            vmax,
            pmin: fields::parse_optional(&fields, layout::PMIN)?,
            poci: fields::parse_optional(&fields, layout::POCI)?,
            roci: fields::parse_optional(&fields, layout::ROCI)?,
            rmw: fields::parse_optional(&fields, layout::RMW)?,
            r34,
            r50,
            r64,
        })
    }
    /// Storm this forecast applies to, like "09L".
    pub fn storm_id(&self) -> StormId {
        StormId::new(self.basin, self.number)
    }
}

impl std::fmt::Display for ADeckEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {} {} +{:03}h",
            self.storm_id(),
            self.model,
            format_compact(self.init),
            self.fhour
        )
    }
}
