//! B-deck: best track observation decks.
mod entry;

pub use entry::BDeckEntry;

use crate::{
    diagnostics::{DiagnosticsSink, LogSink},
    fields,
    grouper::group_records,
    reader::BufferedReader,
    storm::Storm,
    Error, StormId,
};
use entry::layout;
use std::collections::BTreeMap;
use std::io::BufRead;
use std::path::Path;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// B-deck: the best track observational record decoded from one ATCF
/// b-deck source, indexed per storm. Construction is eager and
/// tolerant: a malformed record is reported to the diagnostics sink
/// and skipped, everything else loads.
#[derive(Default, Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BDeck {
    /// Decoded observations per storm, in source order within each
    /// track.
    pub tracks: BTreeMap<StormId, Vec<BDeckEntry>>,
    /// Number of records dropped because they failed to decode.
    pub rejected: usize,
}

impl BDeck {
    /// Parses a b-deck file, with possible seamless .gz decompression
    /// when compiled with the flate2 feature. Rejected records are
    /// reported through the `log` facade.
    pub fn from_file(path: &str) -> Result<Self, Error> {
        Self::from_path(Path::new(path))
    }
    /// See [Self::from_file].
    pub fn from_path(path: &Path) -> Result<Self, Error> {
        Self::from_path_with_sink(path, &mut LogSink)
    }
    /// Parses a b-deck file, reporting every rejected record to the
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
    /// Parses a b-deck from in memory text, reporting every rejected
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
     * Group lines per observation time then decode one entry per
     * group. Several lines describe one synoptic time when several
     * wind radii thresholds are reported.
     */
    fn from_raw_lines(lines: Vec<String>, sink: &mut dyn DiagnosticsSink) -> Self {
        let groups = group_records(lines, |line| {
            let fields = fields::split(line);
            fields
                .get(layout::TIME)
                .copied()
                .unwrap_or("")
                .to_string()
        });
        let mut tracks = BTreeMap::<StormId, Vec<BDeckEntry>>::new();
        let mut rejected = 0;
        for (time, group) in &groups {
            match BDeckEntry::from_lines(group) {
                Ok(entry) => {
                    tracks.entry(entry.storm_id()).or_default().push(entry);
                },
                Err(error) => {
                    rejected += 1;
                    sink.record_rejected(time, &error);
                },
            }
        }
        Self { tracks, rejected }
    }
    /// Returns every decoded observation, walking the deck storm by
    /// storm.
    pub fn entries(&self) -> impl Iterator<Item = &BDeckEntry> + '_ {
        self.tracks.values().flatten()
    }
    /// Total number of decoded observations.
    pub fn nb_entries(&self) -> usize {
        self.tracks.values().map(Vec::len).sum()
    }
    /// Returns an iterator over the storms this deck describes.
    pub fn storm_ids(&self) -> impl Iterator<Item = StormId> + '_ {
        self.tracks.keys().copied()
    }
    /// Builds the [Storm] aggregate for one storm. The filter may be
    /// omitted when the deck describes a single storm; otherwise the
    /// selection is ambiguous.
    pub fn storm(&self, storm_id: Option<StormId>) -> Result<Storm, Error> {
        let entries = match storm_id {
            Some(id) => self.tracks.get(&id).ok_or(Error::NoMatchingEntries)?,
            None => {
                if self.tracks.len() > 1 {
                    return Err(Error::AmbiguousStorm(self.tracks.len()));
                }
                self.tracks.values().next().ok_or(Error::NoMatchingEntries)?
            },
        };
        Ok(Storm::from_entries(entries))
    }
    /// Convenience: the single storm this deck describes.
    pub fn as_storm(&self) -> Result<Storm, Error> {
        self.storm(None)
    }
    /// Builds one [Storm] per storm in this deck.
    pub fn storms(&self) -> Vec<Storm> {
        self.tracks
            .values()
            .map(|entries| Storm::from_entries(entries))
            .collect()
    }
}

impl FromStr for BDeck {
    type Err = Error;
    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_content_with_sink(content, &mut LogSink))
    }
}

impl std::fmt::Display for BDeck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "b-deck with {} observations for {} storms",
            self.nb_entries(),
            self.tracks.len()
        )
    }
}
