//! Balances a roster of participants into teams.
//!
//! Participants are scored by one [`Metric`], ranked by score (ties broken by
//! ascending id) and dealt out to teams in snake-draft order, so team sizes
//! never differ by more than one and every team gets a comparable share of
//! the strongest and weakest participants.

pub mod cache;
pub mod draft;
pub mod error;
pub mod loader;
pub mod model;
pub mod pipeline;
pub mod rank;
pub mod report;
pub mod summary;

pub use cache::{AuxiliaryIndex, ScoredParticipant};
pub use draft::draft;
pub use error::{DraftError, LoadError};
pub use model::condition::{AuxiliaryKind, Metric, Score};
pub use model::entity::{AuxiliaryEvent, Id, Participant};
pub use model::group::{Assignment, TeamNumber, TeamSummary};
pub use pipeline::{run, Config, Outcome, Roster};
pub use rank::rank;
pub use summary::summarize;
