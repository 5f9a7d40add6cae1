use std::time::Instant;

use crate::cache::{AuxiliaryIndex, ScoredParticipant};
use crate::draft::draft;
use crate::error::DraftError;
use crate::model::condition::Metric;
use crate::model::entity::{AuxiliaryEvent, Participant};
use crate::model::group::{Assignment, TeamSummary};
use crate::rank::rank;
use crate::summary::summarize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub teams: usize,
    pub metric: Metric,
}

/// Everything loaded for a run. `events` holds the auxiliary dataset the
/// metric asked for, if one was found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    pub participants: Vec<Participant>,
    pub events: Option<Vec<AuxiliaryEvent>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Participants in draft order, with their scores.
    pub ranked: Vec<ScoredParticipant>,
    /// Same order as `ranked`.
    pub assignments: Vec<Assignment>,
    pub summaries: Vec<TeamSummary>,
}

pub fn run(config: &Config, roster: &Roster) -> Result<Outcome, DraftError> {
    log::info!(
        "Assigning {} participants to {} teams by {}",
        roster.participants.len(),
        config.teams,
        config.metric
    );

    let index = build_index(config.metric, roster.events.as_deref());

    let start = Instant::now();
    let ranked = rank(&roster.participants, config.metric, &index);
    log::debug!("Ranked {} participants in {:.3}s", ranked.len(), start.elapsed().as_secs_f64());

    let assignments = draft(&ranked, config.teams)?;
    let summaries = summarize(&roster.participants, &assignments, config.teams, config.metric, &index)?;

    Ok(Outcome { ranked, assignments, summaries })
}

fn build_index(metric: Metric, events: Option<&[AuxiliaryEvent]>) -> AuxiliaryIndex {
    match (metric.auxiliary(), events) {
        (None, Some(events)) => {
            log::debug!("Ignoring {} auxiliary events, {} does not use them", events.len(), metric);
            AuxiliaryIndex::default()
        }
        (None, None) => AuxiliaryIndex::default(),
        (Some(kind), Some(events)) => {
            let index = AuxiliaryIndex::from(events);
            log::debug!("Indexed {} {} events for {} participants", events.len(), kind, index.len());
            index
        }
        (Some(kind), None) => {
            log::warn!("No {kind} data supplied for {metric}, every participant scores 0 and ties break by id");
            AuxiliaryIndex::default()
        }
    }
}
