// Copyright (C) 2020 Kevin Del Castillo Ramírez
//
// This file is part of recommend.
//
// recommend is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// recommend is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with recommend.  If not, see <http://www.gnu.org/licenses/>.

pub mod collaborative;
pub mod content;
pub mod distances;
pub mod error;
pub mod explanation;
pub mod feature_matrix;
pub mod knn;
pub mod maped_distance;
pub mod rating_matrix;
pub mod recommendation;
pub mod similarity_matrix;

use crate::{
    collaborative::CollaborativeRecommender, content::ContentRecommender, error::ErrorKind,
    explanation::ExplanationBuilder,
};
use anyhow::Error;
use config::Config;
use controller::{Controller, Entity, Featured};

pub use feature_matrix::FeatureMatrix;
pub use rating_matrix::{parse_rating, RatingMatrix};
pub use recommendation::{Mode, Recommendations};
pub use similarity_matrix::{SimilarityComputer, SimilarityTable};

/// Which entities a similarity table compares
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Axis {
    /// User against user over their ratings, unrated counts as zero
    Users,
    /// Item against item over their features
    Items,
}

/// Owns the rating and feature matrices and answers queries over them.
///
/// Nothing is cached between calls, so every query sees the latest ratings.
/// `rate` takes `&mut self`, readers and the writer can't overlap.
pub struct Engine {
    ratings: RatingMatrix,
    features: FeatureMatrix,

    computer: SimilarityComputer,
    neighborhood_size: usize,
    explainer: ExplanationBuilder,
}

impl Engine {
    pub fn new(ratings: RatingMatrix, features: FeatureMatrix, config: &Config) -> Self {
        Self {
            ratings,
            features,
            computer: SimilarityComputer::default(),
            neighborhood_size: config.engine.neighborhood_size,
            explainer: ExplanationBuilder::new(config.explain.precision),
        }
    }

    /// Load items, users and ratings from a controller
    pub fn with_controller<C>(controller: &C, config: &Config) -> Result<Self, Error>
    where
        C: Controller,
        <C::User as Entity>::Id: ToString,
        <C::Item as Entity>::Id: ToString,
    {
        let items = controller.items()?;
        let users = controller.users()?;

        let features = FeatureMatrix::from_catalog(
            items
                .iter()
                .map(|item| (item.get_id().to_string(), item.features())),
        );

        let (min, max) = controller.score_range();
        let mut ratings = RatingMatrix::new(
            items.iter().map(|item| item.get_id().to_string()),
            users.iter().map(|user| user.get_id().to_string()),
        )
        .with_range(min, max);

        for (user_id, user_ratings) in controller.all_users_ratings()? {
            let user_id = user_id.to_string();
            for (item_id, score) in user_ratings {
                ratings.set(&item_id.to_string(), &user_id, score)?;
            }
        }

        log::info!(
            "Engine ready with {} items, {} users and {} genres",
            ratings.items().len(),
            ratings.users().len(),
            features.labels().len()
        );

        Ok(Self::new(ratings, features, config))
    }

    pub fn ratings(&self) -> &RatingMatrix {
        &self.ratings
    }

    pub fn features(&self) -> &FeatureMatrix {
        &self.features
    }

    pub fn users(&self) -> &[String] {
        self.ratings.users()
    }

    pub fn items(&self) -> &[String] {
        self.ratings.items()
    }

    /// Accepted `(min, max)` ratings
    pub fn rating_range(&self) -> (f64, f64) {
        self.ratings.range()
    }

    pub fn unrated_items(&self, user: &str) -> Result<Vec<&str>, ErrorKind> {
        self.ratings.unrated_items(user)
    }

    pub fn user_ratings(&self, user: &str) -> Result<Vec<(&str, f64)>, ErrorKind> {
        self.ratings.user_ratings(user)
    }

    pub fn features_of(&self, item: &str) -> Result<Vec<&str>, ErrorKind> {
        self.features.features_of(item)
    }

    pub fn recommend_collaborative(
        &self,
        user: &str,
        count: usize,
    ) -> Result<Recommendations, ErrorKind> {
        CollaborativeRecommender::with_computer(
            &self.ratings,
            self.neighborhood_size,
            self.computer,
        )
        .recommend(user, count)
    }

    pub fn recommend_content_based(
        &self,
        item: &str,
        count: usize,
    ) -> Result<Recommendations, ErrorKind> {
        ContentRecommender::with_computer(&self.features, self.computer).recommend(item, count)
    }

    pub fn similarity_table(&self, axis: Axis) -> SimilarityTable {
        match axis {
            Axis::Users => self
                .computer
                .table(self.ratings.users(), &self.ratings.user_vectors()),
            Axis::Items => self
                .computer
                .table(self.features.items(), self.features.rows()),
        }
    }

    /// Set the rating of `user` for `item`, returns the rating it replaced
    pub fn rate(&mut self, item: &str, user: &str, value: f64) -> Result<Option<f64>, ErrorKind> {
        let previous = self.ratings.set(item, user, value)?;
        log::info!("{} rated {} with {}", user, item, value);
        Ok(previous)
    }

    pub fn explain(&self, recs: &Recommendations) -> Vec<String> {
        self.explainer.explain(recs)
    }
}
