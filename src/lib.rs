//! ATCF tropical cyclone deck file parser.
//!
//! Parses the comma separated, fixed-position deck files produced by
//! operational tropical cyclone forecast centers:
//! - B-deck ("best track"): the post analysis observational record of
//!   one storm, decoded into a [Storm] with time ordered attribute arrays,
//! - A-deck: numerical model forecasts for one or more storms, models
//!   and initialization times, decoded into [ModelForecast]s.
//!
//! Several physical lines may describe one moment in time (one line per
//! wind radii threshold): lines are grouped into logical records first,
//! then decoded. A malformed record is reported and skipped, it never
//! aborts the rest of the deck.
#![cfg_attr(docsrs, feature(doc_cfg))]

use thiserror::Error;

mod adeck;
mod basin;
mod bdeck;
mod diagnostics;
mod epoch;
mod fields;
mod forecast;
mod grouper;
mod reader;
mod storm;
mod stormid;
mod wind_radii;

#[cfg(test)]
mod tests;

pub use adeck::{ADeck, ADeckEntry, ModelRunKey};
pub use basin::Basin;
pub use bdeck::{BDeck, BDeckEntry};
pub use diagnostics::{DiagnosticsSink, LogSink, SilentSink};
pub use epoch::{format_compact, parse_compact};
pub use forecast::{ModelForecast, RadiiArrays};
pub use storm::{classification_title, number_word, Storm};
pub use stormid::StormId;
pub use wind_radii::WindRadii;

pub mod prelude {
    pub use crate::{
        parse_compact, ADeck, ADeckEntry, BDeck, BDeckEntry, Basin, DiagnosticsSink, Error,
        LogSink, ModelForecast, ModelRunKey, ParsingError, SilentSink, Storm, StormId, WindRadii,
    };
    // Pub re-export
    pub use hifitime::{Duration, Epoch, TimeScale, Unit};
}

/// Record level decode errors. One malformed record is reported through
/// the injected [DiagnosticsSink] and dropped; the rest of the deck
/// still loads.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParsingError {
    #[error("unknown basin code \"{0}\"")]
    UnknownBasin(String),
    #[error("invalid storm ID \"{0}\"")]
    StormId(String),
    #[error("failed to parse storm number from \"{0}\"")]
    StormNumber(String),
    #[error("failed to parse timestamp from \"{0}\"")]
    Timestamp(String),
    #[error("failed to parse forecast hour from \"{0}\"")]
    ForecastHour(String),
    #[error("failed to parse latitude from \"{0}\"")]
    Latitude(String),
    #[error("failed to parse longitude from \"{0}\"")]
    Longitude(String),
    #[error("failed to parse wind speed from \"{0}\"")]
    WindSpeed(String),
    #[error("failed to parse wind radii threshold from \"{0}\"")]
    Threshold(String),
    #[error("failed to parse numeric field from \"{0}\"")]
    NumericField(String),
    #[error("record group is empty")]
    EmptyRecord,
    #[error("record is missing field #{0}")]
    MissingField(usize),
}

/// Deck level errors.
#[derive(Debug, Error)]
pub enum Error {
    #[error("file i/o error")]
    Io(#[from] std::io::Error),
    #[error("deck describes {0} storms: a storm ID filter is required")]
    AmbiguousStorm(usize),
    #[error("deck describes {0} models: a model filter is required")]
    AmbiguousModel(usize),
    #[error("deck describes {0} model runs: an init time filter is required")]
    AmbiguousInit(usize),
    #[error("no deck entries match the requested filters")]
    NoMatchingEntries,
}
