use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use lexiday::config::ScoringWeights;
use lexiday::leaderboard::RankedPlayer;
use lexiday::scorer::{PlayerStats, ScoreDetails, StatSpan};
use lexiday::WordOfDay;

pub fn score(stats: &PlayerStats, d: &ScoreDetails, w: &ScoringWeights) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Term").add_attribute(Attribute::Bold),
        Cell::new("Input"),
        Cell::new("Value"),
        Cell::new("Weight"),
    ]);

    table.add_row(vec![
        Cell::new("Guess"),
        Cell::new(stats.guess_score),
        Cell::new(format!("{:.4}", d.guess_norm)),
        Cell::new(format!("{:.2}", w.guess_weight)),
    ]);
    table.add_row(vec![
        Cell::new("Success"),
        Cell::new(format!("{:.1}%", stats.success_ratio)),
        Cell::new(format!("{:.4}", d.success_norm)),
        Cell::new(format!("{:.2}", w.success_weight)),
    ]);
    table.add_row(vec![
        Cell::new("Speed"),
        Cell::new(format!("{:.1}", stats.speed_score)),
        Cell::new(format!("{:.4}", d.speed_norm)),
        Cell::new(format!("{:.2}", w.speed_weight)),
    ]);
    table.add_row(vec![
        Cell::new("Base").add_attribute(Attribute::Bold),
        Cell::new(""),
        Cell::new(format!("{:.4}", d.base_score)).fg(Color::Cyan),
        Cell::new(format!("{:.2}", w.weight_sum())),
    ]);
    table.add_row(vec![
        Cell::new("Log Scale"),
        Cell::new(format!("{} games", stats.games_played)),
        Cell::new(format!("{:.4}", d.log_scale)),
        Cell::new(stats.stat_span.to_string()),
    ]);
    table.add_row(vec![
        Cell::new("Penalty").fg(Color::Red),
        Cell::new(""),
        Cell::new(format!("{:.4}", d.inverse_game_penalty)).fg(Color::Red),
        Cell::new(""),
    ]);
    table.add_row(vec![
        Cell::new("Final").add_attribute(Attribute::Bold),
        Cell::new(format!("x{:.0}", w.score_scale)),
        Cell::new(format!("{:.6}", d.final_score)),
        Cell::new(d.score).add_attribute(Attribute::Bold),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("\n{}", table);
}

pub fn leaderboard(ranked: &[RankedPlayer], span: StatSpan) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("#").add_attribute(Attribute::Bold),
        Cell::new("Player").add_attribute(Attribute::Bold),
        Cell::new("Games"),
        Cell::new("Score").fg(Color::Cyan),
    ]);

    for p in ranked {
        table.add_row(vec![
            Cell::new(p.rank),
            Cell::new(&p.name).add_attribute(Attribute::Bold),
            Cell::new(p.games_played),
            Cell::new(p.score).fg(Color::Cyan),
        ]);
    }

    for i in [0, 2, 3] {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("\n🏆 Leaderboard ({})", span);
    println!("{}", table);
}

pub fn word(w: &WordOfDay, list_len: usize) {
    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    table.add_row(vec![Cell::new("Date (UTC)"), Cell::new(w.date)]);
    table.add_row(vec![Cell::new("Day"), Cell::new(w.day_index)]);
    table.add_row(vec![
        Cell::new("Index"),
        Cell::new(format!("{} / {}", w.list_index, list_len)),
    ]);
    table.add_row(vec![
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new(&w.answer).fg(Color::Green),
    ]);
    println!("\n{}", table);
}
