use std::cmp::Ordering;

use itertools::Itertools;

use crate::cache::{AuxiliaryIndex, ScoredParticipant};
use crate::model::condition::Metric;
use crate::model::entity::Participant;


/// Orders participants by score descending, breaking ties by ascending id.
///
/// Ids are unique, so the result is a strict total order and the same input
/// always ranks the same way regardless of its original order.
pub fn rank(participants: &[Participant], metric: Metric, index: &AuxiliaryIndex) -> Vec<ScoredParticipant> {
    participants
        .iter()
        .map(|participant| ScoredParticipant::create(*participant, metric, index))
        .sorted_by(by_score_then_id)
        .collect()
}

fn by_score_then_id(a: &ScoredParticipant, b: &ScoredParticipant) -> Ordering {
    b.score.total_cmp(&a.score).then_with(|| a.id().cmp(&b.id()))
}
