pub mod entity {
    pub type Id = u32;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Participant {
        pub id: Id,
        pub events: u32,
        pub points: u64,
    }

    /// A message length or a spend amount attributed to one participant.
    /// Spends may be negative (refunds).
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct AuxiliaryEvent {
        pub participant_id: Id,
        pub quantity: i64,
    }
}


pub mod group {
    use super::condition::Score;
    use super::entity::Id;

    /// 1-indexed.
    pub type TeamNumber = usize;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Assignment {
        pub participant_id: Id,
        pub team: TeamNumber,
    }

    #[derive(Debug, Clone, PartialEq)]
    pub struct TeamSummary {
        pub team: TeamNumber,
        pub size: usize,
        pub average_score: Score,
        pub total_points: u64,
        /// Member ids in draft order.
        pub members: Vec<Id>,
        pub performance_range: String,
    }

    impl TeamSummary {
        pub fn empty(team: TeamNumber) -> TeamSummary {
            TeamSummary {
                team,
                size: 0,
                average_score: 0.0,
                total_points: 0,
                members: Vec::new(),
                performance_range: "0-0".to_string(),
            }
        }
    }
}

pub mod condition {
    use clap::ValueEnum;
    use strum::{Display, EnumIter};

    use super::entity::Participant;
    use crate::cache::AuxiliaryIndex;

    pub type Score = f64;

    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
    #[strum(serialize_all = "lowercase")]
    pub enum AuxiliaryKind {
        Messages,
        Spends,
    }

    /// The criterion participants are ranked by. Exactly one is active per run.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Display, EnumIter)]
    #[strum(serialize_all = "kebab-case")]
    pub enum Metric {
        /// Historical points divided by events participated
        #[value(alias = "events_performance")]
        EventsPerformance,

        /// Total length of the participant's messages
        #[value(alias = "messages_length")]
        MessagesLength,

        /// Total points the participant has spent
        #[value(alias = "points_spent")]
        PointsSpent,
    }

    impl Metric {
        pub fn auxiliary(self) -> Option<AuxiliaryKind> {
            match self {
                Metric::EventsPerformance => None,
                Metric::MessagesLength => Some(AuxiliaryKind::Messages),
                Metric::PointsSpent => Some(AuxiliaryKind::Spends),
            }
        }

        pub fn unit(self) -> &'static str {
            match self {
                Metric::EventsPerformance => "points/event",
                Metric::MessagesLength => "characters",
                Metric::PointsSpent => "points",
            }
        }

        pub fn description(self) -> &'static str {
            match self {
                Metric::EventsPerformance => "average points/event",
                Metric::MessagesLength => "total message length",
                Metric::PointsSpent => "total points spent",
            }
        }

        pub fn justification(self) -> &'static str {
            match self {
                Metric::EventsPerformance => "Teams balanced by average points per event",
                Metric::MessagesLength => "Teams balanced by total message length",
                Metric::PointsSpent => "Teams balanced by total points spent",
            }
        }

        /// Scores `participant`. Never fails: a participant without events scores 0,
        /// and so does one absent from `index`.
        pub fn score(self, participant: &Participant, index: &AuxiliaryIndex) -> Score {
            match self {
                Metric::EventsPerformance => {
                    if participant.events == 0 {
                        return 0.0;
                    }
                    participant.points as Score / Score::from(participant.events)
                }
                Metric::MessagesLength | Metric::PointsSpent => index.get(participant.id) as Score,
            }
        }
    }
}
