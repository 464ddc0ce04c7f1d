// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::{
    error::ErrorKind,
    knn::MinHeapKnn,
    maped_distance::MapedDistance,
    rating_matrix::RatingMatrix,
    recommendation::{Contribution, Evidence, Mode, Neighbor, Recommendation, Recommendations},
    similarity_matrix::SimilarityComputer,
};

/// User based collaborative filtering over a rating matrix.
pub struct CollaborativeRecommender<'a> {
    ratings: &'a RatingMatrix,
    computer: SimilarityComputer,
    neighborhood_size: usize,
}

impl<'a> CollaborativeRecommender<'a> {
    pub fn new(ratings: &'a RatingMatrix, neighborhood_size: usize) -> Self {
        Self::with_computer(ratings, neighborhood_size, SimilarityComputer::default())
    }

    pub fn with_computer(
        ratings: &'a RatingMatrix,
        neighborhood_size: usize,
        computer: SimilarityComputer,
    ) -> Self {
        Self {
            ratings,
            computer,
            neighborhood_size,
        }
    }

    /// Most similar users to the one at `target`, best first.
    fn neighbors(&self, target: usize) -> Vec<MapedDistance> {
        let table = self
            .computer
            .table(self.ratings.users(), &self.ratings.user_vectors());

        let mut knn = MinHeapKnn::new(self.neighborhood_size);
        knn.update(
            table
                .row(target)
                .iter()
                .enumerate()
                .filter(|(user, _)| *user != target)
                .map(|(user, similarity)| MapedDistance(user, *similarity)),
        );

        knn.into_vec()
    }

    pub fn recommend(&self, user: &str, count: usize) -> Result<Recommendations, ErrorKind> {
        let target = self.ratings.user_position(user)?;
        let neighbors = self.neighbors(target);

        log::debug!(
            "Neighborhood of {}: {:?}",
            user,
            neighbors
                .iter()
                .map(|n| (&self.ratings.users()[n.position()], n.dist()))
                .collect::<Vec<_>>()
        );

        let mut scores = Vec::new();
        let mut evidence = vec![Vec::new(); self.ratings.items().len()];

        for item in 0..self.ratings.items().len() {
            if self.ratings.rating_at(item, target).is_some() {
                continue;
            }

            let mut rating_sum = 0.0;
            let mut sim_sum = 0.0;
            let mut contributions = Vec::new();

            for neighbor in &neighbors {
                if let Some(rating) = self.ratings.rating_at(item, neighbor.position()) {
                    rating_sum += rating * neighbor.dist();
                    sim_sum += neighbor.dist();

                    contributions.push(Contribution {
                        user: self.ratings.users()[neighbor.position()].clone(),
                        rating,
                        similarity: neighbor.dist(),
                    });
                }
            }

            // No neighbor rated it, it still ranks
            let score = if sim_sum > 0.0 {
                rating_sum / sim_sum
            } else {
                0.0
            };

            scores.push(MapedDistance(item, score));
            evidence[item] = contributions;
        }

        let mut knn = MinHeapKnn::new(count);
        knn.update(scores);

        let items = knn
            .into_vec()
            .into_iter()
            .map(|ranked| Recommendation {
                item: self.ratings.items()[ranked.position()].clone(),
                score: ranked.dist(),
                evidence: Evidence::Neighbors(std::mem::take(&mut evidence[ranked.position()])),
            })
            .collect();

        let neighbors = neighbors
            .into_iter()
            .map(|n| Neighbor {
                user: self.ratings.users()[n.position()].clone(),
                similarity: n.dist(),
            })
            .collect();

        Ok(Recommendations {
            mode: Mode::Collaborative,
            target: user.to_string(),
            neighbors,
            items,
        })
    }
}
