//! CSV input for a run.

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::LoadError;
use crate::model::condition::{AuxiliaryKind, Metric};
use crate::model::entity::{AuxiliaryEvent, Id, Participant};
use crate::pipeline::Roster;

pub const PLAYERS_FILE: &str = "level_a_players.csv";
pub const MESSAGES_FILE: &str = "level_b_messages.csv";
pub const SPENDS_FILE: &str = "level_b_spend.csv";

#[derive(Debug, Deserialize)]
struct PlayerRow {
    player_id: Id,
    historical_events_participated: u32,
    historical_points_earned: u64,
}

impl From<PlayerRow> for Participant {
    fn from(row: PlayerRow) -> Self {
        Participant {
            id: row.player_id,
            events: row.historical_events_participated,
            points: row.historical_points_earned,
        }
    }
}

#[derive(Debug, Deserialize)]
struct MessageRow {
    player_id: Id,
    text_length: i64,
}

#[derive(Debug, Deserialize)]
struct SpendRow {
    player_id: Id,
    points_spent: i64,
}

/// Where each input table lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    pub players: PathBuf,
    pub messages: PathBuf,
    pub spends: PathBuf,
}

impl DataFiles {
    pub fn in_dir(dir: &Path) -> DataFiles {
        DataFiles {
            players: dir.join(PLAYERS_FILE),
            messages: dir.join(MESSAGES_FILE),
            spends: dir.join(SPENDS_FILE),
        }
    }

    pub fn events(&self, kind: AuxiliaryKind) -> &Path {
        match kind {
            AuxiliaryKind::Messages => &self.messages,
            AuxiliaryKind::Spends => &self.spends,
        }
    }
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader)
}

pub fn read_participants<R: Read>(reader: R) -> Result<Vec<Participant>, csv::Error> {
    csv_reader(reader)
        .deserialize::<PlayerRow>()
        .map(|row| row.map(Participant::from))
        .collect()
}

pub fn read_events<R: Read>(kind: AuxiliaryKind, reader: R) -> Result<Vec<AuxiliaryEvent>, csv::Error> {
    let mut reader = csv_reader(reader);
    match kind {
        AuxiliaryKind::Messages => reader
            .deserialize::<MessageRow>()
            .map(|row| row.map(|r| AuxiliaryEvent { participant_id: r.player_id, quantity: r.text_length }))
            .collect(),
        AuxiliaryKind::Spends => reader
            .deserialize::<SpendRow>()
            .map(|row| row.map(|r| AuxiliaryEvent { participant_id: r.player_id, quantity: r.points_spent }))
            .collect(),
    }
}

/// Loads the players table and, if `metric` needs one, its auxiliary table.
///
/// A missing auxiliary file is not an error: the roster comes back without
/// events and the run scores everyone 0.
pub fn load_roster(files: &DataFiles, metric: Metric) -> Result<Roster, LoadError> {
    let participants = {
        let file = open(&files.players)?;
        read_participants(file).map_err(|source| LoadError::Csv { path: files.players.clone(), source })?
    };
    log::info!("Loaded {} participants from '{}'", participants.len(), files.players.display());

    let Some(kind) = metric.auxiliary() else {
        return Ok(Roster { participants, events: None });
    };

    let path = files.events(kind);
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("No {kind} file at '{}'", path.display());
            return Ok(Roster { participants, events: None });
        }
        Err(source) => return Err(LoadError::Io { path: path.to_path_buf(), source }),
    };
    let events = read_events(kind, file).map_err(|source| LoadError::Csv { path: path.to_path_buf(), source })?;
    log::info!("Loaded {} {kind} events from '{}'", events.len(), path.display());

    Ok(Roster { participants, events: Some(events) })
}

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::Io { path: path.to_path_buf(), source })
}
