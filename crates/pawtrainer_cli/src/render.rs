//! Plain-text views of tracker state.

use pawtrainer_core::env::parse_timestamp;
use pawtrainer_core::{AppState, Cue, CueBoard, CueStatus};

pub fn print_dogs(state: &AppState) {
    for dog in &state.dogs {
        let marker = if state.active_dog_id == Some(dog.id) { "*" } else { " " };
        match &dog.image_url {
            Some(url) => println!("{marker} {:>15}  {}  ({url})", dog.id, dog.name),
            None => println!("{marker} {:>15}  {}", dog.id, dog.name),
        }
    }
}

pub fn print_board(board: &CueBoard) {
    if board.is_empty() {
        println!("No cues added yet. Start by adding one!");
        return;
    }
    for status in CueStatus::ALL {
        let column = board.column(status);
        println!("== {} ({})", status.title(), column.len());
        for cue in column {
            println!("  {:>15}  {:<20}  {}", cue.id, cue.name, practiced_label(cue));
        }
    }
}

pub fn print_cue(cue: &Cue) {
    println!("{} [{}] {}", cue.name, cue.status.title(), practiced_label(cue));
}

fn practiced_label(cue: &Cue) -> String {
    match cue.last_practiced.as_deref() {
        None => "Never practiced".to_string(),
        Some(raw) => match parse_timestamp(raw) {
            Some(at) => format!(
                "Last practiced: {}-{:02}-{:02} at {:02}:{:02} UTC",
                at.year(),
                u8::from(at.month()),
                at.day(),
                at.hour(),
                at.minute()
            ),
            None => format!("Last practiced: {raw}"),
        },
    }
}
