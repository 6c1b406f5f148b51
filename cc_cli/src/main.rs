//! Menu-driven frontend for the chess club record-keeper.
//!
//! Loads the club and tournament stores from the data directory, then loops
//! over a numbered menu: lookups, reports, round advancement, result
//! recording, and data entry. Every state-changing action saves the
//! affected tournament or club before returning to the menu.

mod config;
mod views;

use std::ffi::OsStr;
use std::io;
use std::path::PathBuf;

use anyhow::Error;
use chess_club::club::{normalize_birthday, normalize_chess_id, normalize_email};
use chess_club::{AdvanceOutcome, ClubManager, Tournament, TournamentManager, report};
use log::info;
use pico_args::Arguments;

use config::DataDirs;

const HELP: &str = "\
Manage a local chess club's tournaments

USAGE:
  cc_cli [OPTIONS]

OPTIONS:
  --data-dir   PATH        Data directory root  [default: env CHESS_DATA_DIR or data]

FLAGS:
  -h, --help               Print help information

ENVIRONMENT:
  CHESS_DATA_DIR           Data directory root holding clubs/, tournaments/, reports/
  RUST_LOG                 Log level filter (e.g. info, debug)
";

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();
    env_logger::init();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let data_dir: Option<PathBuf> = pargs.opt_value_from_str("--data-dir")?;
    let dirs = DataDirs::resolve(data_dir);
    dirs.ensure()?;

    let mut clubs = ClubManager::load(&dirs.clubs)?;
    let mut tournaments = TournamentManager::load(&dirs.tournaments)?;
    info!(
        "{} clubs and {} tournaments loaded from {}",
        clubs.len(),
        tournaments.len(),
        dirs.root.display()
    );

    loop {
        let choice = match views::show_menu() {
            Ok(choice) => choice,
            Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => break,
            Err(err) => return Err(err.into()),
        };
        match choice.as_str() {
            "1" => show_player(&clubs)?,
            "2" => show_tournament_info(&tournaments)?,
            "3" => show_points(&clubs, &tournaments)?,
            "4" => export_report(&clubs, &tournaments, &dirs)?,
            "5" => advance_round(&mut tournaments)?,
            "6" => record_result(&mut tournaments)?,
            "7" => create_tournament(&mut tournaments)?,
            "8" => add_player(&mut clubs)?,
            "x" | "X" => break,
            _ => views::show_message("Invalid choice."),
        }
    }
    Ok(())
}

/// Let the user pick a tournament from the store, optionally filtered by
/// completion state. Returns its store index.
fn choose_tournament(
    tournaments: &TournamentManager,
    completed: Option<bool>,
) -> io::Result<Option<usize>> {
    let entries = tournaments.list(completed);
    if entries.is_empty() {
        return Ok(None);
    }
    let labels: Vec<String> = entries
        .iter()
        .map(|(_, path, tournament)| {
            let file = path.file_name().and_then(OsStr::to_str).unwrap_or("?");
            format!("{} ({file})", tournament.name)
        })
        .collect();
    let pick = views::choose_from("Choose a tournament:", &labels)?;
    Ok(Some(entries[pick].0))
}

fn show_player(clubs: &ClubManager) -> io::Result<()> {
    let name = views::ask_non_empty("Player name")?;
    views::show_player(clubs.find_player_by_name(&name));
    Ok(())
}

fn show_tournament_info(tournaments: &TournamentManager) -> io::Result<()> {
    match choose_tournament(tournaments, None)? {
        None => views::show_message("No tournament found."),
        Some(index) => {
            if let Some((_, tournament)) = tournaments.get(index) {
                views::show_summary(&report::summary(tournament));
            }
        }
    }
    Ok(())
}

fn show_points(clubs: &ClubManager, tournaments: &TournamentManager) -> io::Result<()> {
    match choose_tournament(tournaments, Some(true))? {
        None => views::show_message("No completed tournament found."),
        Some(index) => {
            if let Some((_, tournament)) = tournaments.get(index) {
                let rows = report::points_table(tournament, |id| clubs.player_name(id));
                views::show_points(&tournament.name, &rows);
            }
        }
    }
    Ok(())
}

fn export_report(
    clubs: &ClubManager,
    tournaments: &TournamentManager,
    dirs: &DataDirs,
) -> Result<(), Error> {
    match choose_tournament(tournaments, None)? {
        None => views::show_message("No tournament found."),
        Some(index) => {
            if let Some((_, tournament)) = tournaments.get(index) {
                let path =
                    report::export_report(tournament, |id| clubs.player_name(id), &dirs.reports)?;
                views::show_message(&format!("Report written to {}", path.display()));
            }
        }
    }
    Ok(())
}

fn advance_round(tournaments: &mut TournamentManager) -> Result<(), Error> {
    let Some(index) = choose_tournament(tournaments, Some(false))? else {
        views::show_message("No in-progress tournament found.");
        return Ok(());
    };
    let Some(tournament) = tournaments.get_mut(index) else {
        return Ok(());
    };
    let outcome = tournament.advance_round(&mut rand::rng());
    match outcome {
        Ok(AdvanceOutcome::NewRound(number)) => {
            tournaments.save(index)?;
            views::show_message(&format!("Round {number} generated and saved."));
        }
        Ok(AdvanceOutcome::Completed) => {
            tournaments.save(index)?;
            views::show_message("Tournament is now completed.");
        }
        Ok(AdvanceOutcome::RoundInProgress) => {
            views::show_message("Current round is not fully completed yet.");
        }
        Ok(AdvanceOutcome::AlreadyCompleted) => {
            views::show_message("Tournament is already completed.");
        }
        Err(err) => views::show_message(&format!("Could not advance: {err}")),
    }
    Ok(())
}

fn record_result(tournaments: &mut TournamentManager) -> Result<(), Error> {
    let Some(index) = choose_tournament(tournaments, Some(false))? else {
        views::show_message("No in-progress tournament found.");
        return Ok(());
    };
    let round_number = views::ask_number("Round number")?;
    let match_number = views::ask_number("Match number")?;
    let winner = views::ask_optional("Winner chess ID (empty for a draw)")?;
    let (Some(round_number), Some(match_number)) = (round_number, match_number) else {
        views::show_message("Invalid round or match number.");
        return Ok(());
    };
    let Some(tournament) = tournaments.get_mut(index) else {
        return Ok(());
    };
    let result = tournament
        .set_match_result(round_number, match_number, winner.as_deref())
        .map(|_| ());
    match result {
        Ok(()) => {
            tournaments.save(index)?;
            views::show_message("Match result saved.");
        }
        Err(err) => views::show_message(&format!("Could not set result: {err}")),
    }
    Ok(())
}

fn create_tournament(tournaments: &mut TournamentManager) -> Result<(), Error> {
    let name = views::ask_non_empty("Tournament name")?;
    let venue = views::ask_non_empty("Venue")?;
    let start_date = views::ask_date("Start date (dd-mm-yyyy)")?;
    let end_date = views::ask_date("End date (dd-mm-yyyy)")?;
    let number_of_rounds = views::ask_positive_number("Number of rounds")?;

    let mut tournament = match Tournament::new(
        name.as_str(),
        venue.as_str(),
        start_date,
        end_date,
        number_of_rounds,
    ) {
        Ok(tournament) => tournament,
        Err(err) => {
            views::show_message(&format!("Could not create tournament: {err}"));
            return Ok(());
        }
    };

    loop {
        let Some(id) = views::ask_optional("Player chess ID (empty to stop)")? else {
            break;
        };
        match normalize_chess_id(&id) {
            Ok(id) => {
                if let Err(err) = tournament.register_player(id) {
                    views::show_message(&format!("{err}"));
                }
            }
            Err(err) => views::show_message(&format!("{err}")),
        }
    }
    let count = tournament.players().len();
    if count < 2 || count % 2 != 0 {
        views::show_message("Note: pairing needs an even number of players (at least 2).");
    }

    let file_name = format!("{}.json", name.to_lowercase().replace(' ', "-"));
    tournaments.create(tournament, &file_name)?;
    views::show_message(&format!("Tournament saved as {file_name}"));
    Ok(())
}

fn add_player(clubs: &mut ClubManager) -> Result<(), Error> {
    let labels: Vec<String> = clubs.clubs().map(|club| club.name.clone()).collect();
    if labels.is_empty() {
        views::show_message("No clubs found. Add a club file under the clubs directory first.");
        return Ok(());
    }
    let index = views::choose_from("Select a club:", &labels)?;
    let name = views::ask_non_empty("Player name")?;
    let email = views::ask_valid("Email address", normalize_email)?;
    let chess_id = views::ask_valid("Chess ID (XXNNNNN)", normalize_chess_id)?;
    let birthday = views::ask_valid("Birthday (dd-mm-yyyy)", normalize_birthday)?;

    match clubs.add_player(index, &name, &email, &chess_id, &birthday) {
        Ok(player) => {
            views::show_message(&format!("Added {} ({})", player.name, player.chess_id));
        }
        Err(err) => views::show_message(&format!("Could not add player: {err}")),
    }
    Ok(())
}
