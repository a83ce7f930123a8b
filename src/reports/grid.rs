use comfy_table::presets::ASCII_FULL;
use comfy_table::{Cell, CellAlignment, Color, Table};
use lexiday::board::{Board, LetterState};

fn state_color(state: LetterState) -> Color {
    match state {
        LetterState::Correct => Color::Green,
        LetterState::Present => Color::Yellow,
        LetterState::Absent => Color::DarkGrey,
    }
}

pub fn print_board(name: &str, board: &Board) {
    println!("\nBoard: {}", name);
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    for row in board {
        let cells: Vec<Cell> = row
            .iter()
            .map(|tile| {
                let label = if tile.is_blank() {
                    " ".to_string()
                } else {
                    tile.letter.to_uppercase()
                };
                Cell::new(label)
                    .fg(state_color(tile.state))
                    .set_alignment(CellAlignment::Center)
            })
            .collect();
        table.add_row(cells);
    }
    println!("{}", table);

    let emoji: Vec<String> = board
        .iter()
        .map(|row| row.iter().map(|t| t.state.emoji()).collect())
        .collect();
    println!("{}", emoji.join("\n"));
}
