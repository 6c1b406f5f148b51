//! Terminal prompts and printing for the menu flows.
//!
//! Every prompt loops until it gets something usable; a closed stdin
//! surfaces as `UnexpectedEof` so the caller can wind down cleanly.

use std::io::{self, Write};

use chess_club::club::ClubResult;
use chess_club::{Player, PointsRow, TournamentSummary};
use chrono::NaiveDate;

pub fn show_menu() -> io::Result<String> {
    println!("Select one:");
    println!("1 Look up a player by name");
    println!("2 Show a tournament's details");
    println!("3 Points of a completed tournament");
    println!("4 Export a tournament report");
    println!("5 Start or continue a round");
    println!("6 Record a match result");
    println!("7 Create a tournament");
    println!("8 Add a player to a club");
    println!("X Exit");
    prompt("Choice?")
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{label} ");
    io::stdout().flush()?;
    let mut value = String::new();
    let read = io::stdin().read_line(&mut value)?;
    if read == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
    }
    Ok(value.trim().to_string())
}

pub fn ask_non_empty(label: &str) -> io::Result<String> {
    loop {
        let value = prompt(&format!("{label}?"))?;
        if !value.is_empty() {
            return Ok(value);
        }
        println!("Please provide a value.");
    }
}

/// Empty input means "none" (e.g. a drawn match has no winner).
pub fn ask_optional(label: &str) -> io::Result<Option<String>> {
    let value = prompt(&format!("{label}?"))?;
    Ok(if value.is_empty() { None } else { Some(value) })
}

/// A number, or `None` when the input does not parse.
pub fn ask_number(label: &str) -> io::Result<Option<usize>> {
    let value = prompt(&format!("{label}?"))?;
    Ok(value.parse().ok())
}

pub fn ask_positive_number(label: &str) -> io::Result<u32> {
    loop {
        let value = prompt(&format!("{label}?"))?;
        match value.parse::<u32>() {
            Ok(number) if number > 0 => return Ok(number),
            _ => println!("Please provide a positive number."),
        }
    }
}

pub fn ask_date(label: &str) -> io::Result<NaiveDate> {
    loop {
        let value = prompt(&format!("{label}?"))?;
        match NaiveDate::parse_from_str(&value, chess_club::DATE_FORMAT) {
            Ok(date) => return Ok(date),
            Err(_) => println!("Please provide a valid date (dd-mm-yyyy)."),
        }
    }
}

/// Prompt until `validate` accepts the input, echoing its error otherwise.
pub fn ask_valid<T>(label: &str, validate: impl Fn(&str) -> ClubResult<T>) -> io::Result<T> {
    loop {
        let value = prompt(&format!("{label}?"))?;
        match validate(&value) {
            Ok(normalized) => return Ok(normalized),
            Err(err) => println!("{err}"),
        }
    }
}

/// Numbered pick from a non-empty list; returns the 0-based index.
pub fn choose_from(title: &str, labels: &[String]) -> io::Result<usize> {
    println!("{title}");
    for (index, label) in labels.iter().enumerate() {
        println!("{}. {label}", index + 1);
    }
    loop {
        let value = prompt("Number?")?;
        if let Ok(number) = value.parse::<usize>() {
            if (1..=labels.len()).contains(&number) {
                return Ok(number - 1);
            }
        }
        println!("Invalid choice.");
    }
}

pub fn show_message(message: &str) {
    println!("{message}");
}

pub fn show_player(player: Option<&Player>) {
    match player {
        None => println!("Player not found."),
        Some(player) => {
            println!("Name: {}", player.name);
            println!("Email: {}", player.email);
            println!("Chess ID: {}", player.chess_id);
            println!("Birthday: {}", player.birthday);
        }
    }
}

pub fn show_summary(info: &TournamentSummary) {
    println!("Name: {}", info.name);
    println!("Venue: {}", info.venue);
    println!("From: {}", info.from);
    println!("To: {}", info.to);
    println!("Number of rounds: {}", info.number_of_rounds);
    match info.current_round {
        Some(round) => println!("Current round: {round}"),
        None => println!("Current round: -"),
    }
    println!("Completed: {}", info.completed);
}

pub fn show_points(tournament_name: &str, rows: &[PointsRow]) {
    if rows.is_empty() {
        println!("No standings to show.");
        return;
    }
    println!("Points for {tournament_name}:");
    for (position, row) in rows.iter().enumerate() {
        println!("{}. {} - {} pts", position + 1, row.player_name, row.points);
    }
}
