// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::{
    error::ErrorKind,
    feature_matrix::FeatureMatrix,
    knn::MinHeapKnn,
    maped_distance::MapedDistance,
    recommendation::{Evidence, Mode, Recommendation, Recommendations},
    similarity_matrix::SimilarityComputer,
};

/// Items whose features look the most like a reference item's.
pub struct ContentRecommender<'a> {
    features: &'a FeatureMatrix,
    computer: SimilarityComputer,
}

impl<'a> ContentRecommender<'a> {
    pub fn new(features: &'a FeatureMatrix) -> Self {
        Self::with_computer(features, SimilarityComputer::default())
    }

    pub fn with_computer(features: &'a FeatureMatrix, computer: SimilarityComputer) -> Self {
        Self { features, computer }
    }

    pub fn recommend(&self, item: &str, count: usize) -> Result<Recommendations, ErrorKind> {
        let target = self.features.item_position(item)?;
        let similarities = self
            .computer
            .row(self.features.row(target), self.features.rows());

        let mut knn = MinHeapKnn::new(count);
        knn.update(
            similarities
                .into_iter()
                .enumerate()
                .filter(|(other, _)| *other != target)
                .map(|(other, similarity)| MapedDistance(other, similarity)),
        );

        let items = knn
            .into_vec()
            .into_iter()
            .map(|ranked| {
                let shared = self
                    .features
                    .shared_features(target, ranked.position())
                    .into_iter()
                    .map(String::from)
                    .collect();

                Recommendation {
                    item: self.features.items()[ranked.position()].clone(),
                    score: ranked.dist(),
                    evidence: Evidence::SharedFeatures(shared),
                }
            })
            .collect();

        Ok(Recommendations {
            mode: Mode::ContentBased,
            target: item.to_string(),
            neighbors: Vec::new(),
            items,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::*;

    fn catalog() -> FeatureMatrix {
        FeatureMatrix::from_catalog(vec![
            ("Inception", vec!["Sci-Fi", "Thriller"]),
            ("The Dark Knight", vec!["Action", "Crime"]),
            ("Interstellar", vec!["Sci-Fi", "Drama"]),
            ("Arrival", vec!["Sci-Fi", "Thriller"]),
            ("Memento", vec!["Thriller", "Mystery"]),
        ])
    }

    #[test]
    fn unknown_item() {
        let features = catalog();

        assert_eq!(
            ContentRecommender::new(&features).recommend("Alien", 3),
            Err(ErrorKind::UnknownItem("Alien".into()))
        );
    }

    #[test]
    fn ranks_by_feature_similarity() -> Result<(), ErrorKind> {
        let features = catalog();
        let recs = ContentRecommender::new(&features).recommend("Inception", 4)?;

        assert_eq!(
            recs.titles(),
            vec!["Arrival", "Interstellar", "Memento", "The Dark Knight"]
        );
        assert_approx_eq!(recs.items[0].score, 1.);
        assert_approx_eq!(recs.items[1].score, 0.5);
        assert_approx_eq!(recs.items[3].score, 0.);

        Ok(())
    }

    #[test]
    fn never_recommends_itself() -> Result<(), ErrorKind> {
        let features = catalog();
        let recommender = ContentRecommender::new(&features);

        for item in features.items() {
            assert!(!recommender.recommend(item, 10)?.contains(item));
        }

        Ok(())
    }

    #[test]
    fn count_limits() -> Result<(), ErrorKind> {
        let features = catalog();
        let recommender = ContentRecommender::new(&features);

        assert!(recommender.recommend("Inception", 0)?.is_empty());
        assert_eq!(recommender.recommend("Inception", 100)?.len(), 4);

        Ok(())
    }

    #[test]
    fn keeps_shared_features() -> Result<(), ErrorKind> {
        let features = catalog();
        let recs = ContentRecommender::new(&features).recommend("Inception", 4)?;

        assert_eq!(
            recs.items[0].evidence,
            Evidence::SharedFeatures(vec!["Sci-Fi".into(), "Thriller".into()])
        );
        assert_eq!(
            recs.items[1].evidence,
            Evidence::SharedFeatures(vec!["Sci-Fi".into()])
        );
        assert_eq!(recs.items[3].evidence, Evidence::SharedFeatures(vec![]));

        Ok(())
    }
}
