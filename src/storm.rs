//! Best track storm aggregate.
use crate::{
    bdeck::BDeckEntry, epoch::format_compact, forecast::RadiiArrays, Basin, StormId,
};
use hifitime::Epoch;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Storm constructed from best track data: time ordered attribute
/// arrays, all parallel to `time`. Missing values are NaN, never zero.
/// Equality and hashing consider the storm identity (ID, name) only.
#[derive(Default, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Storm {
    /// Storm ID, like "09L"
    pub id: StormId,
    /// Storm name, "NONAME" when the deck never carried one
    pub name: String,
    /// Observation times
    pub time: Vec<Epoch>,
    /// Basin at each observation time
    pub basin: Vec<Basin>,
    /// Two letter classification code at each observation time
    pub classification: Vec<String>,
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
    /// Maximum wind gust (kt)
    pub maxgust: Vec<f64>,
    /// Eye diameter (nm)
    pub eye_diameter: Vec<f64>,
    /// 34 kt quadrant wind radii (nm)
    pub r34: RadiiArrays,
    /// 50 kt quadrant wind radii (nm)
    pub r50: RadiiArrays,
    /// 64 kt quadrant wind radii (nm)
    pub r64: RadiiArrays,
}

impl Storm {
    /*
     * Packs track entries into parallel attribute arrays, in
     * observation time order (stable: well formed decks keep their
     * source order). Identity attributes come from the newest entry,
     * since name corrections appear in later records.
     */
    pub(crate) fn from_entries(entries: &[BDeckEntry]) -> Self {
        let mut sorted: Vec<&BDeckEntry> = entries.iter().collect();
        sorted.sort_by_key(|entry| entry.time);
        let mut storm = Self::default();
        if let Some(newest) = sorted.last() {
            storm.id = newest.storm_id();
            storm.name = newest.name.clone();
        }
        for entry in sorted {
            storm.time.push(entry.time);
            storm.basin.push(entry.basin);
            storm.classification.push(entry.classification.clone());
            storm.lat.push(entry.lat);
            storm.lon.push(entry.lon);
            storm.vmax.push(entry.vmax);
            storm.pmin.push(entry.pmin.unwrap_or(f64::NAN));
            storm.poci.push(entry.poci.unwrap_or(f64::NAN));
            storm.roci.push(entry.roci.unwrap_or(f64::NAN));
            storm.rmw.push(entry.rmw.unwrap_or(f64::NAN));
            storm.maxgust.push(entry.maxgust.unwrap_or(f64::NAN));
            storm
                .eye_diameter
                .push(entry.eye_diameter.unwrap_or(f64::NAN));
            storm.r34.push(&entry.r34);
            storm.r50.push(&entry.r50);
            storm.r64.push(&entry.r64);
        }
        // potential tropical cyclones are named by their number word,
        // and so is a new system the deck errantly still calls INVEST
        let renamed = if storm.title() == "Potential Tropical Cyclone" {
            number_word(storm.id.number)
        } else if storm.id.number < 90 && storm.name == "INVEST" {
            number_word(storm.id.number)
        } else {
            None
        };
        if let Some(word) = renamed {
            storm.name = word.to_string();
        }
        storm
    }
    /// Number of best track observations.
    pub fn nb_observations(&self) -> usize {
        self.time.len()
    }
    /// True if the track carries no observations.
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
    /// Human title for this system, derived from its number and its
    /// classification history: "Hurricane", "Invest", "Potential
    /// Tropical Cyclone", "Remnants of", ...
    pub fn title(&self) -> &'static str {
        if self.id.number >= 90 {
            return "Invest";
        }
        let current = self
            .classification
            .last()
            .map(String::as_str)
            .unwrap_or("");
        match classification_title(current) {
            Some(title) if self.id.number < 70 => {
                if !self.was_tropical_cyclone() {
                    // never organized into a (sub)tropical cyclone yet
                    "Potential Tropical Cyclone"
                } else if !is_tropical_cyclone(current) {
                    "Remnants of"
                } else {
                    title
                }
            },
            _ => "Unknown Storm",
        }
    }
    fn was_tropical_cyclone(&self) -> bool {
        self.classification
            .iter()
            .any(|code| is_tropical_cyclone(code))
    }
}

impl PartialEq for Storm {
    fn eq(&self, rhs: &Self) -> bool {
        self.id == rhs.id && self.name == rhs.name
    }
}

impl Eq for Storm {}

impl Hash for Storm {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        self.name.hash(state);
    }
}

impl std::fmt::Display for Storm {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)?;
        if let Some(first) = self.time.first() {
            write!(f, " from {}", format_compact(*first))?;
        }
        if let Some(last) = self.time.last() {
            write!(f, " to {}", format_compact(*last))?;
        }
        Ok(())
    }
}

/// Classification codes describing a developed (sub)tropical cyclone.
fn is_tropical_cyclone(code: &str) -> bool {
    matches!(code, "TD" | "TS" | "HU" | "SD" | "SS" | "PT")
}

/// Long title for a two letter ATCF classification code.
pub fn classification_title(code: &str) -> Option<&'static str> {
    match code {
        "WV" | "LO" | "DB" => Some("Invest"),
        "TD" => Some("Tropical Depression"),
        "TS" => Some("Tropical Storm"),
        "HU" => Some("Hurricane"),
        "SD" => Some("Subtropical Depression"),
        "SS" => Some("Subtropical Storm"),
        "PT" => Some("Post-tropical Storm"),
        "EX" => Some("Extratropical Storm"),
        "XX" => Some("Unknown Storm"),
        _ => None,
    }
}

/// English word for an annual storm number, used to name systems that
/// have no proper name yet.
pub fn number_word(number: u8) -> Option<&'static str> {
    match number {
        1 => Some("ONE"),
        2 => Some("TWO"),
        3 => Some("THREE"),
        4 => Some("FOUR"),
        5 => Some("FIVE"),
        6 => Some("SIX"),
        7 => Some("SEVEN"),
        8 => Some("EIGHT"),
        9 => Some("NINE"),
        10 => Some("TEN"),
        11 => Some("ELEVEN"),
        12 => Some("TWELVE"),
        13 => Some("THIRTEEN"),
        14 => Some("FOURTEEN"),
        15 => Some("FIFTEEN"),
        16 => Some("SIXTEEN"),
        17 => Some("SEVENTEEN"),
        18 => Some("EIGHTEEN"),
        19 => Some("NINETEEN"),
        20 => Some("TWENTY"),
        21 => Some("TWENTYONE"),
        22 => Some("TWENTYTWO"),
        23 => Some("TWENTYTHREE"),
        24 => Some("TWENTYFOUR"),
        25 => Some("TWENTYFIVE"),
        26 => Some("TWENTYSIX"),
        27 => Some("TWENTYSEVEN"),
        28 => Some("TWENTYEIGHT"),
        29 => Some("TWENTYNINE"),
        30 => Some("THIRTY"),
        _ => None,
    }
}
