use std::collections::HashMap;

use itertools::Itertools;

use crate::cache::AuxiliaryIndex;
use crate::error::{check_team_count, DraftError};
use crate::model::condition::{Metric, Score};
use crate::model::entity::{Id, Participant};
use crate::model::group::{Assignment, TeamNumber, TeamSummary};


/// Builds one summary per team, `1..=teams`, including teams nobody was drafted into.
pub fn summarize(
    participants: &[Participant],
    assignments: &[Assignment],
    teams: usize,
    metric: Metric,
    index: &AuxiliaryIndex,
) -> Result<Vec<TeamSummary>, DraftError> {
    check_team_count(teams, participants.len())?;

    let by_id: HashMap<Id, &Participant> = participants.iter().map(|p| (p.id, p)).collect();
    let mut rosters: Vec<Vec<&Participant>> = vec![Vec::new(); teams];
    for assignment in assignments {
        let Some(&participant) = by_id.get(&assignment.participant_id) else {
            log::warn!("Participant {} is assigned but was not loaded, skipping", assignment.participant_id);
            continue;
        };
        match assignment.team.checked_sub(1).and_then(|i| rosters.get_mut(i)) {
            Some(roster) => roster.push(participant),
            None => log::warn!(
                "Participant {} is assigned to team {} outside 1..={}, skipping",
                assignment.participant_id,
                assignment.team,
                teams
            ),
        }
    }

    Ok(rosters
        .iter()
        .enumerate()
        .map(|(i, members)| summarize_team(i + 1, members, metric, index))
        .collect())
}

fn summarize_team(
    team: TeamNumber,
    members: &[&Participant],
    metric: Metric,
    index: &AuxiliaryIndex,
) -> TeamSummary {
    if members.is_empty() {
        return TeamSummary::empty(team);
    }

    let scores: Vec<Score> = members.iter().map(|p| metric.score(p, index)).collect();
    let average_score = scores.iter().sum::<Score>() / scores.len() as Score;
    let total_points = members.iter().fold(0_u64, |total, p| total.saturating_add(p.points));
    let performance_range = match scores.iter().copied().minmax().into_option() {
        Some((min, max)) => format!("{:.0}-{:.0} {}", min.round(), max.round(), metric.unit()),
        None => "0-0".to_string(),
    };

    TeamSummary {
        team,
        size: members.len(),
        average_score,
        total_points,
        members: members.iter().map(|p| p.id).collect(),
        performance_range,
    }
}

/// Difference between the largest and the smallest team.
pub fn size_spread(summaries: &[TeamSummary]) -> usize {
    summaries
        .iter()
        .map(|summary| summary.size)
        .minmax()
        .into_option()
        .map_or(0, |(min, max)| max - min)
}
