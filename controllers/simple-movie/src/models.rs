// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use controller::{Entity, Featured};
use std::collections::HashMap;

pub const GENRE_SEPARATOR: char = '|';

#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub name: String,
}

impl Entity for User {
    type Id = String;

    fn get_id(&self) -> Self::Id {
        self.name.clone()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    pub title: String,
    pub genres: Vec<String>,
}

impl Movie {
    pub fn new(title: &str, genres: &str) -> Self {
        let genres = genres
            .split(GENRE_SEPARATOR)
            .map(str::trim)
            .filter(|genre| !genre.is_empty())
            .map(String::from)
            .collect();

        Self {
            title: title.trim().into(),
            genres,
        }
    }

    pub fn genre_string(&self) -> String {
        self.genres.join(&GENRE_SEPARATOR.to_string())
    }
}

impl Entity for Movie {
    type Id = String;

    fn get_id(&self) -> Self::Id {
        self.title.clone()
    }

    fn get_data(&self) -> HashMap<String, String> {
        let mut data = HashMap::new();
        data.insert("genre".into(), self.genre_string());
        data
    }
}

impl Featured for Movie {
    fn features(&self) -> Vec<String> {
        self.genres.clone()
    }
}
