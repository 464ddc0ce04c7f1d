// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::error::ErrorKind;
use controller::ToTable;
use prettytable::{format::consts::FORMAT_NO_LINESEP, Cell, Row, Table};
use std::collections::HashMap;

pub const MIN_RATING: f64 = 1.0;
pub const MAX_RATING: f64 = 5.0;

/// Parse a rating typed by someone, `range` is `(min, max)` inclusive.
pub fn parse_rating(value: &str, range: (f64, f64)) -> Result<f64, ErrorKind> {
    let (min, max) = range;
    match value.trim().parse::<f64>() {
        Ok(parsed) if (min..=max).contains(&parsed) => Ok(parsed),
        _ => Err(ErrorKind::InvalidRating {
            value: value.to_string(),
            min,
            max,
        }),
    }
}

pub(crate) fn index_of(ids: &[String]) -> HashMap<String, usize> {
    let mut index = HashMap::with_capacity(ids.len());
    for (pos, id) in ids.iter().enumerate() {
        index.entry(id.clone()).or_insert(pos);
    }

    index
}

pub(crate) fn dedup(ids: impl IntoIterator<Item = String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}

/// Items (rows) by users (columns), `None` is an unrated cell.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingMatrix {
    items: Vec<String>,
    users: Vec<String>,

    item_index: HashMap<String, usize>,
    user_index: HashMap<String, usize>,

    // Row major
    cells: Vec<Option<f64>>,
    range: (f64, f64),
}

impl RatingMatrix {
    /// Build a matrix without any rating, repeated identifiers are kept once.
    pub fn new<I, U>(items: I, users: U) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
        U: IntoIterator,
        U::Item: Into<String>,
    {
        let items = dedup(items.into_iter().map(Into::into));
        let users = dedup(users.into_iter().map(Into::into));

        Self {
            item_index: index_of(&items),
            user_index: index_of(&users),
            cells: vec![None; items.len() * users.len()],
            items,
            users,
            range: (MIN_RATING, MAX_RATING),
        }
    }

    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn users(&self) -> &[String] {
        &self.users
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    pub fn item_position(&self, item: &str) -> Result<usize, ErrorKind> {
        self.item_index
            .get(item)
            .copied()
            .ok_or_else(|| ErrorKind::UnknownItem(item.into()))
    }

    pub fn user_position(&self, user: &str) -> Result<usize, ErrorKind> {
        self.user_index
            .get(user)
            .copied()
            .ok_or_else(|| ErrorKind::UnknownUser(user.into()))
    }

    pub(crate) fn rating_at(&self, item: usize, user: usize) -> Option<f64> {
        self.cells[item * self.users.len() + user]
    }

    pub fn get(&self, item: &str, user: &str) -> Result<Option<f64>, ErrorKind> {
        let item = self.item_position(item)?;
        let user = self.user_position(user)?;
        Ok(self.rating_at(item, user))
    }

    pub fn is_rated(&self, item: &str, user: &str) -> Result<bool, ErrorKind> {
        self.get(item, user).map(|rating| rating.is_some())
    }

    /// Set a single cell, returns the rating it replaced. Nothing changes on error.
    pub fn set(&mut self, item: &str, user: &str, value: f64) -> Result<Option<f64>, ErrorKind> {
        let (min, max) = self.range;
        if !value.is_finite() || value < min || value > max {
            return Err(ErrorKind::InvalidRating {
                value: value.to_string(),
                min,
                max,
            });
        }

        let item = self.item_position(item)?;
        let user = self.user_position(user)?;

        let cell = &mut self.cells[item * self.users.len() + user];
        Ok(cell.replace(value))
    }

    /// Items the user hasn't rated yet, in catalog order
    pub fn unrated_items(&self, user: &str) -> Result<Vec<&str>, ErrorKind> {
        let user = self.user_position(user)?;

        Ok(self
            .items
            .iter()
            .enumerate()
            .filter(|(item, _)| self.rating_at(*item, user).is_none())
            .map(|(_, title)| title.as_str())
            .collect())
    }

    /// Ratings given by the user, in catalog order
    pub fn user_ratings(&self, user: &str) -> Result<Vec<(&str, f64)>, ErrorKind> {
        let user = self.user_position(user)?;

        Ok(self
            .items
            .iter()
            .enumerate()
            .filter_map(|(item, title)| Some((title.as_str(), self.rating_at(item, user)?)))
            .collect())
    }

    /// One vector per user over all items, unrated cells become zero.
    /// The matrix itself keeps them unrated.
    pub fn user_vectors(&self) -> Vec<Vec<f64>> {
        (0..self.users.len())
            .map(|user| {
                (0..self.items.len())
                    .map(|item| self.rating_at(item, user).unwrap_or(0.0))
                    .collect()
            })
            .collect()
    }
}

impl ToTable for RatingMatrix {
    fn to_table(&self) -> Table {
        let mut table = Table::new();

        let mut header = vec![Cell::new("")];
        header.extend(self.users.iter().map(|user| Cell::new(user)));
        table.set_titles(Row::new(header));

        for (item, title) in self.items.iter().enumerate() {
            let mut row = vec![Cell::new(title)];
            for user in 0..self.users.len() {
                let content = match self.rating_at(item, user) {
                    Some(rating) => rating.to_string(),
                    None => "-".into(),
                };

                row.push(Cell::new(&content));
            }

            table.add_row(Row::new(row));
        }

        table.set_format(*FORMAT_NO_LINESEP);
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::*;

    fn small_matrix() -> RatingMatrix {
        let mut matrix = RatingMatrix::new(vec!["Alien", "Heat", "Up"], vec!["ana", "bob"]);
        matrix.set("Alien", "ana", 5.).unwrap();
        matrix.set("Up", "ana", 2.).unwrap();
        matrix.set("Heat", "bob", 4.).unwrap();
        matrix
    }

    #[test]
    fn new_matrix_is_unrated() -> Result<(), ErrorKind> {
        let matrix = RatingMatrix::new(vec!["Alien", "Heat"], vec!["ana"]);

        assert_eq!(matrix.get("Alien", "ana")?, None);
        assert_eq!(matrix.get("Heat", "ana")?, None);
        assert!(!matrix.is_rated("Heat", "ana")?);

        Ok(())
    }

    #[test]
    fn repeated_identifiers_are_kept_once() {
        let matrix = RatingMatrix::new(vec!["Alien", "Alien", "Heat"], vec!["ana", "ana"]);

        assert_eq!(matrix.items(), &["Alien".to_string(), "Heat".to_string()]);
        assert_eq!(matrix.users(), &["ana".to_string()]);
    }

    #[test]
    fn set_and_read_back() -> Result<(), ErrorKind> {
        let mut matrix = small_matrix();

        assert_eq!(matrix.set("Heat", "ana", 3.)?, None);
        assert_eq!(matrix.get("Heat", "ana")?, Some(3.));

        // Overwrites unconditionally
        assert_eq!(matrix.set("Heat", "ana", 1.)?, Some(3.));
        assert_eq!(matrix.get("Heat", "ana")?, Some(1.));

        Ok(())
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let mut matrix = small_matrix();
        let before = matrix.clone();

        for value in &[0., 6., -1., 5.01, f64::NAN, f64::INFINITY] {
            match matrix.set("Heat", "ana", *value) {
                Err(ErrorKind::InvalidRating { .. }) => {}
                other => panic!("expected InvalidRating for {}, got {:?}", value, other),
            }
        }

        assert_eq!(matrix, before);
    }

    #[test]
    fn bounds_are_valid_ratings() -> Result<(), ErrorKind> {
        let mut matrix = small_matrix();

        matrix.set("Heat", "ana", 1.)?;
        matrix.set("Heat", "bob", 5.)?;

        Ok(())
    }

    #[test]
    fn unknown_identifiers() {
        let mut matrix = small_matrix();
        let before = matrix.clone();

        assert_eq!(
            matrix.set("Heat", "carl", 3.),
            Err(ErrorKind::UnknownUser("carl".into()))
        );
        assert_eq!(
            matrix.set("Jaws", "ana", 3.),
            Err(ErrorKind::UnknownItem("Jaws".into()))
        );
        assert_eq!(matrix.get("Jaws", "ana"), Err(ErrorKind::UnknownItem("Jaws".into())));
        assert_eq!(matrix, before);
    }

    #[test]
    fn custom_range() {
        let mut matrix = RatingMatrix::new(vec!["Alien"], vec!["ana"]).with_range(0.5, 10.);

        assert!(matrix.set("Alien", "ana", 0.5).is_ok());
        assert!(matrix.set("Alien", "ana", 10.).is_ok());
        assert!(matrix.set("Alien", "ana", 0.).is_err());
    }

    #[test]
    fn parse_rating_text() {
        let range = (MIN_RATING, MAX_RATING);

        assert_approx_eq!(parse_rating(" 3 ", range).unwrap(), 3.);
        assert_approx_eq!(parse_rating("4.5", range).unwrap(), 4.5);

        for text in &["five", "", "NaN", "7", "0.5"] {
            assert!(matches!(
                parse_rating(text, range),
                Err(ErrorKind::InvalidRating { .. })
            ));
        }
    }

    #[test]
    fn parse_rating_follows_matrix_range() {
        let mut matrix = RatingMatrix::new(vec!["Alien"], vec!["ana"]).with_range(0.5, 10.);

        let value = parse_rating("8", matrix.range()).unwrap();
        assert_eq!(matrix.set("Alien", "ana", value), Ok(None));
        assert_eq!(
            parse_rating("11", matrix.range()),
            Err(ErrorKind::InvalidRating {
                value: "11".into(),
                min: 0.5,
                max: 10.,
            })
        );
    }

    #[test]
    fn unrated_and_rated_in_catalog_order() -> Result<(), ErrorKind> {
        let matrix = small_matrix();

        assert_eq!(matrix.unrated_items("ana")?, vec!["Heat"]);
        assert_eq!(matrix.unrated_items("bob")?, vec!["Alien", "Up"]);
        assert_eq!(matrix.user_ratings("ana")?, vec![("Alien", 5.), ("Up", 2.)]);
        assert!(matrix.unrated_items("carl").is_err());

        Ok(())
    }

    #[test]
    fn user_vectors_fill_zeros() {
        let matrix = small_matrix();
        let vectors = matrix.user_vectors();

        assert_eq!(vectors, vec![vec![5., 0., 2.], vec![0., 4., 0.]]);
        // Only the copy is zero filled
        assert_eq!(matrix.get("Heat", "ana"), Ok(None));
    }

    #[test]
    fn table_marks_unrated_cells() {
        let table = small_matrix().to_table();

        assert_eq!(table.len(), 3);
        let cell = |r: usize, c: usize| {
            table
                .get_row(r)
                .and_then(|row| row.get_cell(c))
                .map(|cell| cell.get_content())
        };

        assert_eq!(cell(0, 0), Some("Alien".to_string()));
        assert_eq!(cell(0, 1), Some("5".to_string()));
        assert_eq!(cell(0, 2), Some("-".to_string()));
    }
}
