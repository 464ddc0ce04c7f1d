// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod parser;
mod utils;

use anyhow::Error;
use clap::{App, Arg};
use config::Config;
use controller::{Controller, SearchBy, ToTable};
use engine::{parse_rating, Axis, Engine};
use parser::Statement;
use simple_movie::SimpleMovieController;
use simplelog::{LevelFilter, TermLogger, TerminalMode};

macro_rules! prompt {
    ($ed:ident) => {{
        use rustyline::error::ReadlineError;

        match $ed.readline(PROMPT) {
            Ok(line) => {
                $ed.add_history_entry(line.as_str());
                Ok(line)
            }

            Err(ReadlineError::Interrupted) => {
                continue;
            }

            Err(ReadlineError::Eof) => {
                println!("Exiting...Good bye!");
                break;
            }

            Err(e) => Err(e),
        }
    }};
}

const VERSION: &str = env!("CARGO_PKG_VERSION");
const PROMPT: &str = ">> ";

fn print_help() {
    println!("Main help:");
    println!("h | help                                 Shows this help");
    println!("q | quit                                 Quit");
    println!("v | version                              Shows the version");
    println!("users | items                            List users or movies");
    println!("query_user('<user>')                     Show a user");
    println!("query_item('<movie>')                    Show a movie");
    println!("query_ratings('<user>')                  Ratings given by a user");
    println!("unrated('<user>')                        Movies a user hasn't rated");
    println!("recommend_user('<user>'[, n][, explain]) Collaborative filtering");
    println!("recommend_item('<movie>'[, n][, explain]) Content based filtering");
    println!("similarity(users | items)                Similarity table");
    println!("rate('<movie>', '<user>', <1-5>)         Rate a movie");
}

fn execute(
    engine: &mut Engine,
    controller: &SimpleMovieController,
    config: &Config,
    statement: Statement,
) -> Result<(), Error> {
    match statement {
        Statement::QueryUser(user) => {
            for user in controller.users_by(&SearchBy::id(&user))? {
                println!("{}", user.to_table());
            }
        }

        Statement::QueryItem(item) => {
            for movie in controller.items_by(&SearchBy::name(&item))? {
                println!("{}", movie.to_table());
            }
        }

        Statement::QueryRatings(user) => {
            let ratings = engine.user_ratings(&user)?;
            if ratings.is_empty() {
                println!("No ratings found for id({})", user);
            } else {
                println!("{}", utils::ratings_table(&ratings));
            }
        }

        Statement::Unrated(user) => {
            let unrated = engine.unrated_items(&user)?;
            if unrated.is_empty() {
                println!("All movies have been rated by {}", user);
            } else {
                println!("Unrated movies: {}", unrated.join(", "));
            }
        }

        Statement::RecommendUser(user, count, explain) => {
            let count = utils::clamp_count(count, config.engine.default_count);
            let recs = engine.recommend_collaborative(&user, count)?;
            utils::print_recommendations(engine, &recs, explain);
        }

        Statement::RecommendItem(item, count, explain) => {
            let count = utils::clamp_count(count, config.engine.default_count);
            let recs = engine.recommend_content_based(&item, count)?;
            utils::print_recommendations(engine, &recs, explain);
        }

        Statement::Similarity(axis) => {
            let title = match axis {
                Axis::Users => "User-User Similarity",
                Axis::Items => "Movie-Genre Similarity",
            };

            println!("{}", title);
            println!("{}", engine.similarity_table(axis).to_table());
        }

        Statement::Rate(item, user, value) => {
            let value = parse_rating(&value, engine.rating_range())?;
            match engine.rate(&item, &user, value)? {
                Some(previous) => println!("Rated {} with {} (was {})", item, value, previous),
                None => println!("Rated {} with {}", item, value),
            }
        }
    }

    Ok(())
}

fn main() -> Result<(), Error> {
    let matches = App::new("movie-recommender")
        .version(VERSION)
        .about("Collaborative and content based movie recommendations")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("FILE")
                .help("TOML configuration file")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("movies")
                .long("movies")
                .value_name("CSV")
                .help("Movie catalog (title,genre)")
                .takes_value(true)
                .requires("ratings"),
        )
        .arg(
            Arg::with_name("ratings")
                .long("ratings")
                .value_name("CSV")
                .help("Rating table (title,<user>,...)")
                .takes_value(true)
                .requires("movies"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("Sets the level of verbosity"),
        )
        .get_matches();

    let level = match matches.occurrences_of("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    TermLogger::init(level, simplelog::Config::default(), TerminalMode::Mixed)?;

    let config = match matches.value_of("config") {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let controller = match (matches.value_of("movies"), matches.value_of("ratings")) {
        (Some(movies), Some(ratings)) => SimpleMovieController::from_paths(movies, ratings)?,
        _ => SimpleMovieController::new()?,
    };

    let mut engine = Engine::with_controller(&controller, &config)?;

    println!("Welcome to movie-recommender {}", VERSION);
    println!("Type 'help' to see the available statements");
    let mut rl = rustyline::Editor::<()>::new();

    loop {
        let opt: String = prompt!(rl)?;

        match opt.trim() {
            "?" | "h" | "help" => print_help(),

            "q" | "quit" => {
                println!("Bye!");
                break;
            }

            "v" | "version" => {
                println!("version: {}", VERSION);
            }

            "users" => println!("{}", engine.users().join(", ")),

            "items" => println!("{}", utils::items_table(&engine)),

            empty if empty.is_empty() => {}

            line => match parser::parse_line(line) {
                Some(stmt) => {
                    if let Err(e) = execute(&mut engine, &controller, &config, stmt) {
                        log::error!("Statement failed: {}", e);
                        println!("{}", e);
                    }
                }

                None => println!("Invalid syntax!"),
            },
        }
    }

    Ok(())
}
