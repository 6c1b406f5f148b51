//! Report/query layer: summaries, points tables, and text report export.
//!
//! Everything here reads tournament data through plain structures; player
//! display names come from a caller-supplied lookup so the layer stays
//! independent of where the roster lives.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::tournament::Tournament;

/// Headline facts about a tournament. `current_round` is `None` once the
/// tournament completed.
#[derive(Clone, Debug, Serialize)]
pub struct TournamentSummary {
    pub name: String,
    pub venue: String,
    pub from: String,
    pub to: String,
    pub number_of_rounds: u32,
    pub current_round: Option<usize>,
    pub completed: bool,
}

pub fn summary(tournament: &Tournament) -> TournamentSummary {
    let record = tournament.to_record();
    TournamentSummary {
        name: record.name,
        venue: record.venue,
        from: record.dates.from,
        to: record.dates.to,
        number_of_rounds: record.number_of_rounds,
        current_round: if tournament.is_completed() {
            None
        } else {
            Some(tournament.current_round_index())
        },
        completed: tournament.is_completed(),
    }
}

/// One standings row with the display name resolved.
#[derive(Clone, Debug, Serialize)]
pub struct PointsRow {
    pub player_id: String,
    pub player_name: String,
    pub points: f64,
}

pub fn points_table(
    tournament: &Tournament,
    resolve: impl Fn(&str) -> String,
) -> Vec<PointsRow> {
    tournament
        .standings()
        .into_iter()
        .map(|standing| PointsRow {
            player_name: resolve(&standing.player_id),
            player_id: standing.player_id,
            points: standing.points,
        })
        .collect()
}

/// Render the full text report: header, standings, then every round's
/// matches with their results.
pub fn render_report(tournament: &Tournament, resolve: impl Fn(&str) -> String) -> String {
    let info = summary(tournament);
    let mut lines = Vec::new();
    lines.push(format!("Tournament report: {}", info.name));
    lines.push(format!("Venue: {}", info.venue));
    lines.push(format!("From: {}", info.from));
    lines.push(format!("To: {}", info.to));
    lines.push(format!("Number of rounds: {}", info.number_of_rounds));
    lines.push(format!("Completed: {}", info.completed));
    lines.push(String::new());

    lines.push("Standings:".to_string());
    for (position, row) in points_table(tournament, &resolve).iter().enumerate() {
        lines.push(format!(
            "{}. {} - {} pts",
            position + 1,
            row.player_name,
            row.points
        ));
    }
    lines.push(String::new());

    lines.push("Rounds:".to_string());
    for (round_index, round) in tournament.rounds().iter().enumerate() {
        lines.push(format!("Round {}:", round_index + 1));
        for m in round.matches() {
            let result = if !m.is_completed() {
                "not completed".to_string()
            } else {
                match m.winner() {
                    None => "draw".to_string(),
                    Some(winner) => format!("winner: {}", resolve(winner)),
                }
            };
            lines.push(format!(
                "- {} vs {} ({result})",
                resolve(m.player_one()),
                resolve(m.player_two())
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// File-name slug for a tournament report.
fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// Write the text report to `<reports_dir>/<slug>-report.txt`, creating the
/// directory if needed. Returns the written path.
pub fn export_report(
    tournament: &Tournament,
    resolve: impl Fn(&str) -> String,
    reports_dir: &Path,
) -> io::Result<PathBuf> {
    fs::create_dir_all(reports_dir)?;
    let path = reports_dir.join(format!("{}-report.txt", slug(&tournament.name)));
    fs::write(&path, render_report(tournament, resolve))?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn sample() -> Tournament {
        let start = NaiveDate::from_ymd_opt(2026, 7, 4).unwrap();
        let end = NaiveDate::from_ymd_opt(2026, 7, 5).unwrap();
        let mut tournament = Tournament::new("Summer Blitz", "Dijon", start, end, 1).unwrap();
        tournament.register_player("AB11111").unwrap();
        tournament.register_player("CD22222").unwrap();
        tournament
    }

    #[test]
    fn test_summary_formats_dates_and_hides_round_when_completed() {
        let mut tournament = sample();
        let info = summary(&tournament);
        assert_eq!(info.from, "04-07-2026");
        assert_eq!(info.to, "05-07-2026");
        assert_eq!(info.current_round, Some(0));
        assert!(!info.completed);

        let mut rng = StdRng::seed_from_u64(0);
        tournament.advance_round(&mut rng).unwrap();
        tournament.set_match_result(1, 1, Some("AB11111")).unwrap();
        tournament.advance_round(&mut rng).unwrap();

        let info = summary(&tournament);
        assert!(info.completed);
        assert_eq!(info.current_round, None);
    }

    #[test]
    fn test_render_report_covers_every_match() {
        let mut tournament = sample();
        let mut rng = StdRng::seed_from_u64(1);
        tournament.advance_round(&mut rng).unwrap();

        let resolve = |id: &str| match id {
            "AB11111" => "Alice".to_string(),
            "CD22222" => "Boris".to_string(),
            other => other.to_string(),
        };

        let open = render_report(&tournament, resolve);
        assert!(open.contains("Tournament report: Summer Blitz"));
        assert!(open.contains("Round 1:"));
        assert!(open.contains("(not completed)"));

        tournament.set_match_result(1, 1, Some("AB11111")).unwrap();
        let decided = render_report(&tournament, resolve);
        assert!(decided.contains("(winner: Alice)"));

        tournament.set_match_result(1, 1, None).unwrap();
        let drawn = render_report(&tournament, resolve);
        assert!(drawn.contains("(draw)"));
        assert!(drawn.contains("1. Alice - 0.5 pts") || drawn.contains("1. Boris - 0.5 pts"));
    }

    #[test]
    fn test_export_report_writes_slugged_file() {
        let dir = tempfile::tempdir().unwrap();
        let reports = dir.path().join("reports");
        let path = export_report(&sample(), |id| id.to_string(), &reports).unwrap();

        assert!(path.ends_with("summer-blitz-report.txt"));
        let contents = fs::read_to_string(path).unwrap();
        assert!(contents.contains("Venue: Dijon"));
    }
}
