use crate::cache::ScoredParticipant;
use crate::error::{check_team_count, DraftError};
use crate::model::group::{Assignment, TeamNumber};


/// Endless sequence of team numbers in snake-draft pick order:
/// `1, 2, .., n, n, .., 2, 1, 1, 2, ..`
#[derive(Debug, Clone)]
pub struct SnakeOrder {
    teams: usize,
    pick: usize,
}

impl SnakeOrder {
    pub fn new(teams: usize) -> SnakeOrder {
        assert!(teams > 0);
        SnakeOrder { teams, pick: 0 }
    }
}

impl Iterator for SnakeOrder {
    type Item = TeamNumber;

    fn next(&mut self) -> Option<TeamNumber> {
        let round = self.pick / self.teams;
        let position = self.pick % self.teams;
        self.pick += 1;
        let team_index = if round % 2 == 0 {
            position
        } else {
            self.teams - 1 - position
        };
        Some(team_index + 1)
    }
}

/// Deals `ranked` out to `teams` teams in snake order. Assignments come back
/// in pick order, one per ranked participant.
pub fn draft(ranked: &[ScoredParticipant], teams: usize) -> Result<Vec<Assignment>, DraftError> {
    check_team_count(teams, ranked.len())?;
    let assignments: Vec<Assignment> = ranked
        .iter()
        .zip(SnakeOrder::new(teams))
        .map(|(scored, team)| Assignment { participant_id: scored.id(), team })
        .collect();
    log::debug!("Drafted {} participants into {} teams", assignments.len(), teams);
    Ok(assignments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::AuxiliaryIndex;
    use crate::model::condition::Metric;
    use crate::model::entity::Participant;
    use crate::rank::rank;

    fn ranked(n: u32) -> Vec<ScoredParticipant> {
        let participants: Vec<Participant> = (1..=n)
            .map(|id| Participant { id, events: 1, points: u64::from(100 - id) })
            .collect();
        rank(&participants, Metric::EventsPerformance, &AuxiliaryIndex::default())
    }

    fn teams_of(assignments: &[Assignment]) -> Vec<TeamNumber> {
        assignments.iter().map(|a| a.team).collect()
    }

    #[test]
    fn snake_order_reverses_each_round() {
        let order: Vec<TeamNumber> = SnakeOrder::new(3).take(10).collect();
        assert_eq!(order, vec![1, 2, 3, 3, 2, 1, 1, 2, 3, 3]);
    }

    #[test]
    fn single_team_order_is_constant() {
        assert!(SnakeOrder::new(1).take(5).all(|team| team == 1));
    }

    #[test]
    fn drafts_reference_roster() {
        let participants: Vec<Participant> =
            [(1, 2, 200), (2, 1, 100), (3, 3, 300), (4, 1, 50), (5, 2, 150), (6, 1, 75)]
                .into_iter()
                .map(|(id, events, points)| Participant { id, events, points })
                .collect();
        let ranked = rank(&participants, Metric::EventsPerformance, &AuxiliaryIndex::default());

        let assignments = draft(&ranked, 2).unwrap();
        let pairs: Vec<(u32, TeamNumber)> = assignments.iter().map(|a| (a.participant_id, a.team)).collect();
        assert_eq!(pairs, vec![(1, 1), (2, 2), (3, 2), (6, 1), (5, 1), (4, 2)]);
    }

    #[test]
    fn uneven_roster_gives_extra_members_to_first_picks_of_last_round() {
        // 7 participants, 3 teams: final partial round is even, so it goes 1 -> 3
        let assignments = draft(&ranked(7), 3).unwrap();
        assert_eq!(teams_of(&assignments), vec![1, 2, 3, 3, 2, 1, 1]);

        // 5 participants, 3 teams: final partial round is odd, so it goes 3 -> 1
        let assignments = draft(&ranked(5), 3).unwrap();
        assert_eq!(teams_of(&assignments), vec![1, 2, 3, 3, 2]);
    }

    #[test]
    fn one_team_takes_everyone() {
        let assignments = draft(&ranked(5), 1).unwrap();
        assert_eq!(assignments.len(), 5);
        assert!(assignments.iter().all(|a| a.team == 1));
    }

    #[test]
    fn as_many_teams_as_participants() {
        let assignments = draft(&ranked(4), 4).unwrap();
        assert_eq!(teams_of(&assignments), vec![1, 2, 3, 4]);
    }

    #[test]
    fn too_many_teams_is_rejected() {
        assert_eq!(
            draft(&ranked(6), 10),
            Err(DraftError::InvalidTeamCount { teams: 10, participants: 6 })
        );
    }

    #[test]
    fn zero_teams_is_rejected() {
        assert_eq!(
            draft(&ranked(3), 0),
            Err(DraftError::InvalidTeamCount { teams: 0, participants: 3 })
        );
    }

    #[test]
    fn empty_roster_cannot_be_drafted() {
        assert!(draft(&[], 1).is_err());
    }
}
