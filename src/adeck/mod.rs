//! A-deck: model forecast decks.
mod entry;

pub use entry::ADeckEntry;

use crate::{
    diagnostics::{DiagnosticsSink, LogSink},
    epoch::format_compact,
    fields,
    forecast::ModelForecast,
    grouper::group_records,
    reader::BufferedReader,
    Error, StormId,
};
use entry::layout;
use hifitime::Epoch;
use itertools::Itertools;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// [ADeck] run index: one model integration for one storm.
#[derive(Clone, Debug, PartialEq, PartialOrd, Eq, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ModelRunKey {
    /// Storm the run applies to
    pub storm_id: StormId,
    /// Forecast model name
    pub model: String,
    /// Model initialization time
    pub init: Epoch,
}

impl std::fmt::Display for ModelRunKey {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.storm_id,
            self.model,
            format_compact(self.init)
        )
    }
}

/// A-deck: every model forecast decoded from one ATCF a-deck source,
/// indexed per model run. Construction is eager and tolerant: a
/// malformed record is reported to the diagnostics sink and skipped,
/// everything else loads.
#[derive(Default, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ADeck {
    /// Decoded forecast entries per model run, in source order within
    /// each run.
    pub runs: BTreeMap<ModelRunKey, Vec<ADeckEntry>>,
    /// Number of records dropped because they failed to decode.
    pub rejected: usize,
}

impl ADeck {
    /// Parses an a-deck file, with possible seamless .gz decompression
    /// when compiled with the flate2 feature. Rejected records are
    /// reported through the `log` facade.
    pub fn from_file(path: &str) -> Result<Self, Error> {
        Self::from_path(Path::new(path))
    }
    /// See [Self::from_file].
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        Self::from_path_with_sink(path, &mut LogSink)
    }
    /// Parses an a-deck file, reporting every rejected record to the
    /// given diagnostics sink.
    pub fn from_path_with_sink(
        path: &Path,
        sink: &mut dyn DiagnosticsSink,
    ) -> Result<Self, Error> {
        let reader = BufferedReader::new(path)?;
        let mut lines = Vec::new();
        for line in reader.lines() {
            let line = line?;
            let trimmed = line.trim();
            if !trimmed.is_empty() {
                lines.push(trimmed.to_string());
            }
        }
        Ok(Self::from_raw_lines(lines, sink))
    }
    /// Parses an a-deck from in memory text, reporting every rejected
    /// record to the given diagnostics sink.
    pub fn from_content_with_sink(content: &str, sink: &mut dyn DiagnosticsSink) -> Self {
        let lines = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        Self::from_raw_lines(lines, sink)
    }
    /*
     * Group lines per (storm, model, init, lead time) then decode one
     * entry per group. The grouping key is finer than the run key so
     * that forecast hours stay separate until radii lines are merged.
     */
    fn from_raw_lines(lines: Vec<String>, sink: &mut dyn DiagnosticsSink) -> Self {
        let groups = group_records(lines, |line| {
            let fields = fields::split(line);
            let raw = |index: usize| fields.get(index).copied().unwrap_or("").to_string();
            (
                raw(layout::NUMBER),
                raw(layout::MODEL),
                raw(layout::INIT),
                raw(layout::FHOUR),
            )
        });
        let mut runs = BTreeMap::<ModelRunKey, Vec<ADeckEntry>>::new();
        let mut rejected = 0;
        for ((number, model, init, fhour), group) in &groups {
            match ADeckEntry::from_lines(group) {
                Ok(entry) => {
                    let key = ModelRunKey {
                        storm_id: entry.storm_id(),
                        model: entry.model.clone(),
                        init: entry.init,
                    };
                    runs.entry(key).or_default().push(entry);
                },
                Err(error) => {
                    rejected += 1;
                    let record = format!("{} {} {} +{}", number, model, init, fhour);
                    sink.record_rejected(&record, &error);
                },
            }
        }
        Self { runs, rejected }
    }
    /// Returns every decoded entry, walking the deck run by run.
    pub fn entries(&self) -> impl Iterator<Item = &ADeckEntry> + '_ {
        self.runs.values().flatten()
    }
    /// Total number of decoded entries.
    pub fn nb_entries(&self) -> usize {
        self.runs.values().map(Vec::len).sum()
    }
    /// Returns a unique iterator over the storms this deck describes.
    pub fn storms(&self) -> impl Iterator<Item = StormId> + '_ {
        self.runs.keys().map(|key| key.storm_id).unique()
    }
    /// Returns a unique iterator over the model names this deck carries.
    pub fn models(&self) -> impl Iterator<Item = &str> + '_ {
        self.runs.keys().map(|key| key.model.as_str()).unique()
    }
    /// Builds the [ModelForecast] for a single storm and model run.
    /// A filter may be omitted where the deck leaves no choice: a
    /// dimension that still spans several candidates without a filter
    /// is an ambiguity error, and filters matching nothing are a
    /// not-found error.
    pub fn forecast(
        &self,
        storm_id: Option<StormId>,
        model: Option<&str>,
        init: Option<Epoch>,
    ) -> Result<ModelForecast, Error> {
        let mut keys: Vec<&ModelRunKey> = self.runs.keys().collect();
        match storm_id {
            Some(id) => keys.retain(|key| key.storm_id == id),
            None => {
                let storms = keys.iter().map(|key| key.storm_id).unique().count();
                if storms > 1 {
                    return Err(Error::AmbiguousStorm(storms));
                }
            },
        }
        match model {
            Some(name) => keys.retain(|key| key.model == name),
            None => {
                let models = keys.iter().map(|key| key.model.as_str()).unique().count();
                if models > 1 {
                    return Err(Error::AmbiguousModel(models));
                }
            },
        }
        match init {
            Some(epoch) => keys.retain(|key| key.init == epoch),
            None => {
                let mut inits: Vec<Epoch> = keys.iter().map(|key| key.init).collect();
                inits.sort_unstable();
                inits.dedup();
                if inits.len() > 1 {
                    return Err(Error::AmbiguousInit(inits.len()));
                }
            },
        }
        let key = keys.first().copied().ok_or(Error::NoMatchingEntries)?;
        Ok(ModelForecast::from_entries(&self.runs[key]))
    }
    /// Builds one [ModelForecast] per model run in this deck.
    pub fn forecasts(&self) -> Vec<ModelForecast> {
        self.runs
            .values()
            .map(|entries| ModelForecast::from_entries(entries))
            .collect()
    }
}

impl FromStr for ADeck {
    type Err = Error;
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_content_with_sink(content, &mut LogSink))
    }
}

impl std::fmt::Display for ADeck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "a-deck with {} model runs from {} models for {} storms",
            self.runs.len(),
            self.models().count(),
            self.storms().count()
        )
    }
}
