// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use thiserror::Error as DError;

#[derive(Debug, Clone, DError, PartialEq)]
pub enum ErrorKind {
    #[error("Couldn't found user with id({0})")]
    UnknownUser(String),

    #[error("Couldn't found item with id({0})")]
    UnknownItem(String),

    #[error("Invalid rating ({value}), expected a number between {min} and {max}")]
    InvalidRating { value: String, min: f64, max: f64 },
}
