#![cfg(feature = "std")]
//! Minimal console collaborators: a coordinate prompt and a plain-text
//! board printer.

use std::io::{self, Write};
use std::string::String;

use crate::board::Board;
use crate::common::ShotOutcome;
use crate::config::{in_bounds, BOARD_SIZE};
use crate::game::{PlayerView, ShotSource, ViewSink};

fn coord_to_string(x: u8, y: u8) -> String {
    let col = (b'A' + x) as char;
    std::format!("{}{}", col, y)
}

/// Parse a coordinate like `C7`: column letter A-J, then row number 0-9.
pub fn parse_coord(input: &str) -> Option<(u8, u8)> {
    let mut chars = input.trim().chars();
    let col_ch = chars.next()?.to_ascii_uppercase();
    if !col_ch.is_ascii_uppercase() {
        return None;
    }
    let x = (col_ch as u8).wrapping_sub(b'A');
    let row_str: String = chars.collect();
    let y: u8 = row_str.trim().parse().ok()?;
    if !in_bounds(x, y) {
        return None;
    }
    Some((x, y))
}

fn print_board(board: &Board) {
    std::print!("   ");
    for x in 0..BOARD_SIZE {
        std::print!(" {}", (b'A' + x) as char);
    }
    std::println!();
    for tile in board.tiles() {
        if tile.x == 0 {
            std::print!("{:2} ", tile.y);
        }
        std::print!(" {}", tile.occupant.symbol());
        if tile.x == BOARD_SIZE - 1 {
            std::println!();
        }
    }
}

/// Reads shot coordinates from stdin, re-prompting until a parseable
/// in-range coordinate arrives.
pub struct ConsoleInput;

impl ConsoleInput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleInput {
    fn default() -> Self {
        Self::new()
    }
}

impl ShotSource for ConsoleInput {
    fn next_shot(&mut self, view: &PlayerView<'_>) -> (u8, u8) {
        loop {
            std::print!("{}, fire (e.g. {}): ", view.name, coord_to_string(2, 7));
            io::stdout().flush().unwrap();
            let mut line = String::new();
            io::stdin().read_line(&mut line).unwrap();
            if let Some((x, y)) = parse_coord(&line) {
                return (x, y);
            }
            std::println!("Invalid coordinate");
        }
    }
}

/// Prints both boards and the latest outcome after every shot.
pub struct ConsoleView;

impl ConsoleView {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleView {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewSink for ConsoleView {
    fn render(&mut self, view: &PlayerView<'_>) {
        std::println!("\nPlayer is {} with score {}.", view.name, view.score);
        std::println!("Enemy waters:");
        print_board(view.observed);
        std::println!("Your fleet:");
        print_board(view.own);
        match view.last {
            Some(ShotOutcome::Hit(kind)) => {
                std::println!("You hit the enemy {}! Fire again...", kind.name())
            }
            Some(ShotOutcome::Miss) => std::println!("Sorry, you missed!"),
            Some(ShotOutcome::AlreadyHit) => {
                std::println!("You have already fired at those coordinates!")
            }
            None => {}
        }
    }
}
