// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod models;

use crate::models::{Movie, User};
use anyhow::Error;
use controller::{error::ErrorKind, Controller, MapedRatings, Ratings, SearchBy};
use std::{
    collections::{HashMap, HashSet},
    io::Read,
    path::Path,
};

const SAMPLE_MOVIES: &str = include_str!("../data/movies.csv");
const SAMPLE_RATINGS: &str = include_str!("../data/ratings.csv");

const MIN_SCORE: f64 = 1.0;
const MAX_SCORE: f64 = 5.0;

/// Movies with their genres plus a wide rating table, one column per user.
pub struct SimpleMovieController {
    movies: Vec<Movie>,
    users: Vec<User>,
    ratings: MapedRatings<String, String>,
}

impl SimpleMovieController {
    /// Load the bundled sample dataset
    pub fn new() -> Result<Self, Error> {
        Self::from_readers(SAMPLE_MOVIES.as_bytes(), SAMPLE_RATINGS.as_bytes())
    }

    pub fn from_paths(movies: impl AsRef<Path>, ratings: impl AsRef<Path>) -> Result<Self, Error> {
        let movies = std::fs::File::open(movies)?;
        let ratings = std::fs::File::open(ratings)?;
        Self::from_readers(movies, ratings)
    }

    pub fn from_readers<M: Read, R: Read>(movies: M, ratings: R) -> Result<Self, Error> {
        let movies = read_movies(movies)?;
        let (users, ratings) = read_ratings(ratings, &movies)?;

        log::debug!(
            "Loaded {} movies and {} users",
            movies.len(),
            users.len()
        );

        Ok(Self {
            movies,
            users,
            ratings,
        })
    }
}

fn line_of(record: &csv::StringRecord) -> u64 {
    record.position().map(|pos| pos.line()).unwrap_or_default()
}

fn read_movies<M: Read>(reader: M) -> Result<Vec<Movie>, Error> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .from_reader(reader);

    let mut seen = HashSet::new();
    let mut movies = Vec::new();

    for record in csv.records() {
        let record = record?;
        if record.len() < 2 {
            return Err(ErrorKind::MalformedRecord {
                line: line_of(&record),
                reason: "expected a title and a genre list".into(),
            }
            .into());
        }

        let movie = Movie::new(&record[0], &record[1]);
        if !seen.insert(movie.title.clone()) {
            return Err(ErrorKind::DuplicateEntity(movie.title).into());
        }

        movies.push(movie);
    }

    Ok(movies)
}

fn read_ratings<R: Read>(
    reader: R,
    movies: &[Movie],
) -> Result<(Vec<User>, MapedRatings<String, String>), Error> {
    let mut csv = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(b',')
        .from_reader(reader);

    let names: Vec<String> = csv
        .headers()?
        .iter()
        .skip(1)
        .map(|name| name.trim().to_string())
        .collect();

    let mut seen = HashSet::new();
    for name in &names {
        if !seen.insert(name.as_str()) {
            return Err(ErrorKind::DuplicateEntity(name.clone()).into());
        }
    }

    let known: HashSet<&str> = movies.iter().map(|movie| movie.title.as_str()).collect();
    let mut ratings: MapedRatings<String, String> = names
        .iter()
        .map(|name| (name.clone(), HashMap::new()))
        .collect();

    let mut rated = HashSet::new();
    for record in csv.records() {
        let record = record?;
        let line = line_of(&record);
        let title = record.get(0).map(str::trim).unwrap_or_default();

        if !known.contains(title) {
            return Err(ErrorKind::UnknownReference(title.into()).into());
        }

        // One row per movie, a repeated row would overwrite ratings
        if !rated.insert(title.to_string()) {
            return Err(ErrorKind::DuplicateEntity(title.into()).into());
        }

        for (name, cell) in names.iter().zip(record.iter().skip(1)) {
            let cell = cell.trim();
            if cell.is_empty() {
                continue;
            }

            let score: f64 = cell.parse().map_err(|_| ErrorKind::MalformedRecord {
                line,
                reason: format!("rating '{}' for {} isn't a number", cell, name),
            })?;

            if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
                return Err(ErrorKind::MalformedRecord {
                    line,
                    reason: format!("rating {} for {} is out of range", score, name),
                }
                .into());
            }

            if let Some(user_ratings) = ratings.get_mut(name) {
                user_ratings.insert(title.to_string(), score);
            }
        }
    }

    let users = names.into_iter().map(|name| User { name }).collect();

    Ok((users, ratings))
}

impl Controller for SimpleMovieController {
    type User = User;
    type Item = Movie;

    fn users(&self) -> Result<Vec<Self::User>, Error> {
        Ok(self.users.clone())
    }

    fn users_by(&self, by: &SearchBy) -> Result<Vec<Self::User>, Error> {
        let users: Vec<_> = match by {
            SearchBy::Id(id) | SearchBy::Name(id) => self
                .users
                .iter()
                .filter(|user| &user.name == id)
                .cloned()
                .collect(),
        };

        if users.is_empty() {
            match by {
                SearchBy::Id(id) => Err(ErrorKind::NotFoundById(id.clone()).into()),
                SearchBy::Name(name) => Err(ErrorKind::NotFoundByName(name.clone()).into()),
            }
        } else {
            Ok(users)
        }
    }

    fn items(&self) -> Result<Vec<Self::Item>, Error> {
        Ok(self.movies.clone())
    }

    fn items_by(&self, by: &SearchBy) -> Result<Vec<Self::Item>, Error> {
        let movies: Vec<_> = match by {
            SearchBy::Id(id) | SearchBy::Name(id) => self
                .movies
                .iter()
                .filter(|movie| &movie.title == id)
                .cloned()
                .collect(),
        };

        if movies.is_empty() {
            match by {
                SearchBy::Id(id) => Err(ErrorKind::NotFoundById(id.clone()).into()),
                SearchBy::Name(name) => Err(ErrorKind::NotFoundByName(name.clone()).into()),
            }
        } else {
            Ok(movies)
        }
    }

    fn all_users_ratings(&self) -> Result<MapedRatings<String, String>, Error> {
        Ok(self.ratings.clone())
    }

    fn user_ratings(&self, user: &Self::User) -> Result<Ratings<String>, Error> {
        self.ratings
            .get(&user.name)
            .cloned()
            .ok_or_else(|| ErrorKind::NotFoundById(user.name.clone()).into())
    }

    fn score_range(&self) -> (f64, f64) {
        (MIN_SCORE, MAX_SCORE)
    }
}
