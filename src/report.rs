use core::fmt::{self, Write};

use itertools::Itertools;

use crate::model::condition::{Metric, Score};
use crate::pipeline::Outcome;
use crate::summary::size_spread;

const RULE: &str = "------------------------------------------------------------------------------";

/// Renders the assignment list, the per-team summaries and the balance check.
pub fn generate<W: Write>(outcome: &Outcome, metric: Metric, writer: &mut W) -> fmt::Result {
    writeln!(writer, "\n=== PLAYER ASSIGNMENTS ===")?;
    writeln!(
        writer,
        "player_id -> new_team ({}) [events_participated, total_points]",
        metric.description()
    )?;
    writeln!(writer, "{RULE}")?;

    for (scored, assignment) in outcome.ranked.iter().zip(&outcome.assignments) {
        let participant = &scored.participant;
        writeln!(
            writer,
            "{} -> Team {} ({:.2}) [{}, {}]",
            assignment.participant_id, assignment.team, scored.score, participant.events, participant.points
        )?;
    }

    writeln!(writer, "\n=== TEAM SUMMARY ===")?;
    for summary in &outcome.summaries {
        writeln!(writer, "\nTeam {}:", summary.team)?;
        writeln!(writer, "  Size: {} players", summary.size)?;
        writeln!(writer, "  {}", average_line(metric, summary.average_score))?;
        writeln!(writer, "  Performance Range: {} (min-max)", summary.performance_range)?;
        writeln!(writer, "  Total points: {}", summary.total_points)?;
        writeln!(writer, "  Players: {}", summary.members.iter().join(", "))?;
        writeln!(writer, "  Justification: {}", metric.justification())?;
    }

    writeln!(writer, "\n=== BALANCE VERIFICATION ===")?;
    writeln!(
        writer,
        "Maximum size difference between teams: {} players",
        size_spread(&outcome.summaries)
    )
}

fn average_line(metric: Metric, average: Score) -> String {
    match metric {
        Metric::EventsPerformance => format!("Average points per event: {average:.2}"),
        Metric::MessagesLength => format!("Average message length: {average:.2} characters"),
        Metric::PointsSpent => format!("Average points spent: {average:.2} points"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::entity::{AuxiliaryEvent, Participant};
    use crate::pipeline::{run, Config, Roster};
    use strum::IntoEnumIterator;

    fn roster() -> Roster {
        let participants = [(1, 2, 200), (2, 1, 100), (3, 3, 300), (4, 1, 50), (5, 2, 150), (6, 1, 75)]
            .into_iter()
            .map(|(id, events, points)| Participant { id, events, points })
            .collect();
        let events = (1..=6).map(|participant_id| AuxiliaryEvent { participant_id, quantity: 10 }).collect();
        Roster { participants, events: Some(events) }
    }

    fn render(teams: usize, metric: Metric) -> String {
        let outcome = run(&Config { teams, metric }, &roster()).unwrap();
        let mut out = String::new();
        generate(&outcome, metric, &mut out).unwrap();
        out
    }

    #[test]
    fn renders_reference_run() {
        let out = render(2, Metric::EventsPerformance);

        assert!(out.contains("player_id -> new_team (average points/event) [events_participated, total_points]"));
        assert!(out.contains("1 -> Team 1 (100.00) [2, 200]\n"));
        assert!(out.contains("4 -> Team 2 (50.00) [1, 50]\n"));
        assert!(out.contains("\nTeam 1:\n  Size: 3 players\n  Average points per event: 83.33\n"));
        assert!(out.contains("  Performance Range: 75-100 points/event (min-max)\n"));
        assert!(out.contains("  Total points: 425\n  Players: 1, 6, 5\n"));
        assert!(out.contains("  Justification: Teams balanced by average points per event\n"));
        assert!(out.ends_with("Maximum size difference between teams: 0 players\n"));
    }

    #[test]
    fn lists_every_participant_once() {
        for metric in Metric::iter() {
            let out = render(4, metric);
            for id in 1..=6 {
                let prefix = format!("\n{id} -> Team ");
                assert_eq!(out.matches(&prefix).count(), 1, "{metric}: participant {id}");
            }
            assert!(out.ends_with("Maximum size difference between teams: 1 players\n"));
        }
    }

    #[test]
    fn average_line_follows_metric() {
        assert_eq!(average_line(Metric::MessagesLength, 12.5), "Average message length: 12.50 characters");
        assert_eq!(average_line(Metric::PointsSpent, 3.0), "Average points spent: 3.00 points");
    }
}
