// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use engine::{Engine, Mode, Recommendations};
use prettytable::{cell, format::consts::FORMAT_NO_LINESEP, row, Table};

/// Negative counts mean "nothing", the engine only takes unsigned counts
pub(crate) fn clamp_count(count: Option<i64>, default: usize) -> usize {
    match count {
        Some(count) if count <= 0 => 0,
        Some(count) => count as usize,
        None => default,
    }
}

pub(crate) fn genres_of(engine: &Engine, item: &str) -> String {
    engine
        .features_of(item)
        .map(|genres| genres.join("|"))
        .unwrap_or_default()
}

pub(crate) fn print_recommendations(engine: &Engine, recs: &Recommendations, explain: bool) {
    if recs.is_empty() {
        println!("No recommendations found for {}", recs.target);
        return;
    }

    match recs.mode {
        Mode::Collaborative => {
            println!("Recommendations for {}:", recs.target);
            for (i, rec) in recs.items.iter().enumerate() {
                println!("{}. {} (score {:.2})", i + 1, rec.item, rec.score);
            }
        }

        Mode::ContentBased => {
            println!("Movies similar to '{}':", recs.target);
            for (i, rec) in recs.items.iter().enumerate() {
                println!("{}. {} ({})", i + 1, rec.item, genres_of(engine, &rec.item));
            }
        }
    }

    if explain {
        let lines = engine.explain(recs);
        if !lines.is_empty() {
            println!("\nWhy these movies?");
            for line in lines {
                println!("{}", line);
            }
        }
    }
}

pub(crate) fn items_table(engine: &Engine) -> Table {
    let mut table = Table::new();
    table.set_titles(row!["title", "genre"]);

    for item in engine.items() {
        table.add_row(row![item, genres_of(engine, item)]);
    }

    table.set_format(*FORMAT_NO_LINESEP);
    table
}

pub(crate) fn ratings_table(ratings: &[(&str, f64)]) -> Table {
    let mut table = Table::new();

    for (item, rating) in ratings {
        table.add_row(row![item, rating]);
    }

    table.set_format(*FORMAT_NO_LINESEP);
    table
}
