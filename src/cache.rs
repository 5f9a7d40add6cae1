use std::collections::HashMap;

use crate::model::condition::{Metric, Score};
use crate::model::entity::{AuxiliaryEvent, Id, Participant};

/// Summed auxiliary quantity per participant, built once per run.
/// Totals saturate instead of overflowing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuxiliaryIndex(HashMap<Id, i64>);

impl AuxiliaryIndex {
    pub fn get(&self, id: Id) -> i64 {
        self.0.get(&id).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&[AuxiliaryEvent]> for AuxiliaryIndex {
    fn from(events: &[AuxiliaryEvent]) -> Self {
        events.iter().copied().collect()
    }
}

impl FromIterator<AuxiliaryEvent> for AuxiliaryIndex {
    fn from_iter<I: IntoIterator<Item = AuxiliaryEvent>>(events: I) -> Self {
        let mut totals = HashMap::new();
        for event in events {
            let total = totals.entry(event.participant_id).or_insert(0_i64);
            *total = total.saturating_add(event.quantity);
        }
        AuxiliaryIndex(totals)
    }
}

/// A participant together with its score under the active metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredParticipant {
    pub participant: Participant,
    pub score: Score,
}

impl ScoredParticipant {
    pub fn create(participant: Participant, metric: Metric, index: &AuxiliaryIndex) -> ScoredParticipant {
        let score = metric.score(&participant, index);
        ScoredParticipant { participant, score }
    }

    pub fn id(&self) -> Id {
        self.participant.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(participant_id: Id, quantity: i64) -> AuxiliaryEvent {
        AuxiliaryEvent { participant_id, quantity }
    }

    #[test]
    fn sums_events_per_participant() {
        let index = AuxiliaryIndex::from(&[event(1, 100), event(2, 5), event(1, 20)][..]);

        assert_eq!(index.len(), 2);
        assert_eq!(index.get(1), 120);
        assert_eq!(index.get(2), 5);
    }

    #[test]
    fn unknown_participant_reads_zero() {
        let index = AuxiliaryIndex::default();
        assert!(index.is_empty());
        assert_eq!(index.get(42), 0);
    }

    #[test]
    fn negative_quantities_reduce_the_total() {
        let index: AuxiliaryIndex = vec![event(1, 100), event(1, -30), event(2, -5)].into_iter().collect();
        assert_eq!(index.get(1), 70);
        assert_eq!(index.get(2), -5);
    }

    #[test]
    fn huge_totals_saturate() {
        let index: AuxiliaryIndex = vec![event(1, i64::MAX), event(1, 1), event(2, i64::MIN), event(2, -1)]
            .into_iter()
            .collect();
        assert_eq!(index.get(1), i64::MAX);
        assert_eq!(index.get(2), i64::MIN);
    }

    #[test]
    fn scored_participant_caches_metric_score() {
        let participant = Participant { id: 7, events: 4, points: 10 };
        let index: AuxiliaryIndex = vec![event(7, 300)].into_iter().collect();

        let by_events = ScoredParticipant::create(participant, Metric::EventsPerformance, &index);
        let by_spend = ScoredParticipant::create(participant, Metric::PointsSpent, &index);

        assert_eq!(by_events.id(), 7);
        assert_eq!(by_events.score, 2.5);
        assert_eq!(by_spend.score, 300.0);
    }
}
