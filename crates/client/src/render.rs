//! ASCII board rendering.
//!
//! Each cell shows its occupant followed by the items lying there. Drowned
//! knights are drawn in lowercase parentheses in the margin beside the edge
//! they stepped off.
use std::fmt::Write;

use arena_core::{Cell, GameConfig, GameState, KnightStatus, Position};

const SIZE: i32 = GameConfig::BOARD_SIZE as i32;
const MARGIN: usize = 8;
const CELL: usize = 6;

/// Renders the board as multi-line text.
pub fn render_board(state: &GameState) -> String {
    let mut out = String::new();
    let separator = format!("{}{}\n", " ".repeat(MARGIN), "-".repeat(CELL * SIZE as usize + 1));

    let north = margin_row(state, -1);
    if !north.trim().is_empty() {
        let _ = writeln!(out, "{north}");
    }

    out.push_str(&" ".repeat(MARGIN));
    for col in 0..SIZE {
        let _ = write!(out, "{:^width$}", col, width = CELL);
    }
    out.push('\n');
    out.push_str(&separator);

    for row in 0..SIZE {
        let _ = write!(out, "{:<4}{:>2}  ", drowned_marker(state, Position::new(row, -1)), row);
        for cell in state.board.row(row as usize) {
            let _ = write!(out, "|{:^width$}", cell_label(cell), width = CELL - 1);
        }
        out.push('|');

        let east = drowned_marker(state, Position::new(row, SIZE));
        if !east.is_empty() {
            let _ = write!(out, " {east}");
        }
        out.push('\n');
        out.push_str(&separator);
    }

    let south = margin_row(state, SIZE);
    if !south.trim().is_empty() {
        let _ = writeln!(out, "{south}");
    }

    out
}

/// Occupant then item glyphs, cut to the cell width with a trailing `+`.
fn cell_label(cell: &Cell) -> String {
    let glyphs: Vec<char> = cell
        .occupant()
        .map(|knight| knight.glyph())
        .into_iter()
        .chain(cell.items().iter().map(|item| item.glyph()))
        .collect();

    let width = CELL - 1;
    if glyphs.len() <= width {
        glyphs.into_iter().collect()
    } else {
        let mut label: String = glyphs[..width - 1].iter().collect();
        label.push('+');
        label
    }
}

/// Markers for knights that drowned off the northern or southern edge.
fn margin_row(state: &GameState, row: i32) -> String {
    let mut line = " ".repeat(MARGIN);
    for col in 0..SIZE {
        let marker = drowned_marker(state, Position::new(row, col));
        let _ = write!(line, "{:^width$}", marker, width = CELL);
    }
    line.trim_end().to_string()
}

/// `(r)` for every knight that drowned at `position`, empty otherwise.
fn drowned_marker(state: &GameState, position: Position) -> String {
    let glyphs: String = state
        .knights
        .iter()
        .filter(|knight| knight.status == KnightStatus::Drowned)
        .filter(|knight| knight.drowned_at == Some(position))
        .map(|knight| knight.id.glyph().to_ascii_lowercase())
        .collect();

    if glyphs.is_empty() {
        glyphs
    } else {
        format!("({glyphs})")
    }
}
