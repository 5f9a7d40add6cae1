use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DraftError {
    #[error(
        "Cannot create {teams} teams with only {participants} players. Team count must be between 1 and {participants}"
    )]
    InvalidTeamCount { teams: usize, participants: usize },
}

/// Shared by the drafter and the aggregator so both reject the same inputs the same way.
pub fn check_team_count(teams: usize, participants: usize) -> Result<(), DraftError> {
    if teams == 0 || teams > participants {
        return Err(DraftError::InvalidTeamCount { teams, participants });
    }
    Ok(())
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unable to open '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unable to parse '{}'", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}
