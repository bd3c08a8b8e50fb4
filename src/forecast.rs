//! Model forecast aggregate.
use crate::{adeck::ADeckEntry, epoch::format_compact, Basin, StormId, WindRadii};
use hifitime::Epoch;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Time ordered quadrant radii arrays for one wind threshold, parallel
/// to the aggregate's time axis. A radius the deck never reported is
/// NaN, never zero.
#[derive(Default, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RadiiArrays {
    /// Northeast quadrant radii (nm)
    pub ne: Vec<f64>,
    /// Southeast quadrant radii (nm)
    pub se: Vec<f64>,
    /// Southwest quadrant radii (nm)
    pub sw: Vec<f64>,
    /// Northwest quadrant radii (nm)
    pub nw: Vec<f64>,
}

impl RadiiArrays {
    pub(crate) fn push(&mut self, radii: &WindRadii) {
        self.ne.push(radii.ne.unwrap_or(f64::NAN));
        self.se.push(radii.se.unwrap_or(f64::NAN));
        self.sw.push(radii.sw.unwrap_or(f64::NAN));
        self.nw.push(radii.nw.unwrap_or(f64::NAN));
    }
}

/// Model forecast of track and intensity for one storm and one model
/// run: time ordered attribute arrays, all parallel to `fhour`.
/// Missing values are NaN, never zero. Equality and hashing consider
/// the run identity (storm, model, init) only.
#[derive(Default, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModelForecast {
    /// Storm the forecast applies to
    pub storm_id: StormId,
    /// Forecast model name
    pub model: String,
    /// Model initialization time
    pub init: Epoch,
    /// Forecast hours (lead times)
    pub fhour: Vec<i32>,
    /// Valid time per forecast hour
    pub valid_time: Vec<Epoch>,
    /// Basin per forecast hour
    pub basin: Vec<Basin>,
    /// Latitude (degrees north)
    pub lat: Vec<f64>,
    /// Longitude (degrees, [-180, 180], west negative)
    pub lon: Vec<f64>,
    /// Maximum sustained wind (kt)
    pub vmax: Vec<f64>,
    /// Minimum central pressure (hPa)
    pub pmin: Vec<f64>,
    /// Pressure of the outermost closed isobar (hPa)
    pub poci: Vec<f64>,
    /// Radius of the outermost closed isobar (nm)
    pub roci: Vec<f64>,
    /// Radius of maximum wind (nm)
    pub rmw: Vec<f64>,
    /// 34 kt quadrant wind radii (nm)
    pub r34: RadiiArrays,
    /// 50 kt quadrant wind radii (nm)
    pub r50: RadiiArrays,
    /// 64 kt quadrant wind radii (nm)
    pub r64: RadiiArrays,
}

impl ModelForecast {
    /*
     * Packs run entries into parallel attribute arrays, in valid time
     * order (stable: well formed decks keep their source order).
     * Identity attributes come from the newest entry, since metadata
     * corrections appear in later records.
     */
    pub(crate) fn from_entries(entries: &[ADeckEntry]) -> Self {
        let mut sorted: Vec<&ADeckEntry> = entries.iter().collect();
        sorted.sort_by_key(|entry| entry.valid_time);
        let mut forecast = Self::default();
        if let Some(newest) = sorted.last() {
            forecast.storm_id = newest.storm_id();
            forecast.model = newest.model.clone();
            forecast.init = newest.init;
        }
        for entry in sorted {
            forecast.fhour.push(entry.fhour);
            forecast.valid_time.push(entry.valid_time);
            forecast.basin.push(entry.basin);
            forecast.lat.push(entry.lat);
            forecast.lon.push(entry.lon);
            forecast.vmax.push(entry.vmax);
            forecast.pmin.push(entry.pmin.unwrap_or(f64::NAN));
            forecast.poci.push(entry.poci.unwrap_or(f64::NAN));
            forecast.roci.push(entry.roci.unwrap_or(f64::NAN));
            forecast.rmw.push(entry.rmw.unwrap_or(f64::NAN));
            forecast.r34.push(&entry.r34);
            forecast.r50.push(&entry.r50);
            forecast.r64.push(&entry.r64);
        }
        forecast
    }
    /// Number of forecast samples (lead times).
    pub fn nb_samples(&self) -> usize {
        self.fhour.len()
    }
    /// True if the forecast carries no samples.
    pub fn is_empty(&self) -> bool {
        self.fhour.is_empty()
    }
}

impl PartialEq for ModelForecast {
    fn eq(&self, rhs: &Self) -> bool {
        self.storm_id == rhs.storm_id && self.model == rhs.model && self.init == rhs.init
    }
}

impl Eq for ModelForecast {}

impl Hash for ModelForecast {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.storm_id.hash(state);
        self.model.hash(state);
        self.init.to_gregorian_utc().hash(state);
    }
}

impl std::fmt::Display for ModelForecast {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} forecast for {} initialized {}",
            self.model,
            self.storm_id,
            format_compact(self.init)
        )
    }
}
