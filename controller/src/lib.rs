// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

pub mod entity;
pub mod error;
pub mod searchby;

#[macro_export]
macro_rules! eid {
    ($e:ty) => {
        <$e as $crate::entity::Entity>::Id
    };
}

#[macro_export]
macro_rules! maped_ratings {
    ($u:ty => $v:ty) => {
        $crate::MapedRatings<$crate::eid!($u), $crate::eid!($v)>
    };
}

#[macro_export]
macro_rules! ratings {
    ($e:ty) => {
        $crate::Ratings<$crate::eid!($e)>
    }
}

use anyhow::Error;
use std::collections::HashMap;

pub use entity::{Entity, Featured, ToTable};
pub use searchby::SearchBy;

pub type Result<T> = std::result::Result<T, Error>;
pub type Ratings<I, Value = f64> = HashMap<I, Value>;
pub type MapedRatings<K, I, Value = f64> = HashMap<K, Ratings<I, Value>>;

/// A source of users, items and the ratings between them.
///
/// Entities are returned in the order the source stores them, callers
/// that need a deterministic order (e.g. to break ties) rely on it.
pub trait Controller {
    type User: Entity;
    type Item: Featured;

    /// Get all users
    fn users(&self) -> Result<Vec<Self::User>>;

    /// Get users that matched the search criteria by id or name
    fn users_by(&self, by: &SearchBy) -> Result<Vec<Self::User>>;

    /// Get all items
    fn items(&self) -> Result<Vec<Self::Item>>;

    /// Get items that matched the search criteria by id or name
    fn items_by(&self, by: &SearchBy) -> Result<Vec<Self::Item>>;

    /// Get all normal MapedRatings, i.e. maps User::Id => Item::Id
    #[allow(clippy::type_complexity)]
    fn all_users_ratings(&self) -> Result<maped_ratings!(Self::User => Self::Item)>;

    /// Get the ratings for the specified user
    fn user_ratings(&self, user: &Self::User) -> Result<ratings!(Self::Item)>;

    /// The controller score range, ex. (1.0, 5.0) is (min_rating, max_rating)
    fn score_range(&self) -> (f64, f64);
}
