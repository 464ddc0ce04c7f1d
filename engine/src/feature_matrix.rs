// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::{error::ErrorKind, rating_matrix::index_of};
use std::collections::{BTreeSet, HashMap, HashSet};

/// Items by a sorted vocabulary of labels, every cell is either 0 or 1.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    items: Vec<String>,
    item_index: HashMap<String, usize>,
    labels: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl FeatureMatrix {
    /// Build the matrix from `(item, tags)` pairs. The first occurrence of
    /// a repeated item wins.
    pub fn from_catalog<C, S, F, T>(catalog: C) -> Self
    where
        C: IntoIterator<Item = (S, F)>,
        S: Into<String>,
        F: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut items = Vec::new();
        let mut tag_sets: Vec<BTreeSet<String>> = Vec::new();
        let mut seen = HashSet::new();

        for (item, tags) in catalog {
            let item: String = item.into();
            if !seen.insert(item.clone()) {
                continue;
            }

            let tags = tags
                .into_iter()
                .map(|tag| tag.as_ref().trim().to_string())
                .filter(|tag| !tag.is_empty())
                .collect();

            items.push(item);
            tag_sets.push(tags);
        }

        let vocabulary: BTreeSet<&String> = tag_sets.iter().flatten().collect();
        let labels: Vec<String> = vocabulary.into_iter().cloned().collect();

        let rows: Vec<Vec<f64>> = tag_sets
            .iter()
            .map(|tags| {
                labels
                    .iter()
                    .map(|label| if tags.contains(label) { 1.0 } else { 0.0 })
                    .collect()
            })
            .collect();

        log::debug!(
            "Feature matrix with {} items and {} labels",
            items.len(),
            labels.len()
        );

        Self {
            item_index: index_of(&items),
            items,
            labels,
            rows,
        }
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn item_position(&self, item: &str) -> Result<usize, ErrorKind> {
        self.item_index
            .get(item)
            .copied()
            .ok_or_else(|| ErrorKind::UnknownItem(item.into()))
    }

    pub fn row(&self, item: usize) -> &[f64] {
        &self.rows[item]
    }

    pub fn features_of(&self, item: &str) -> Result<Vec<&str>, ErrorKind> {
        let item = self.item_position(item)?;
        Ok(self.shared_features(item, item))
    }

    /// Labels present on both items, in vocabulary order
    pub fn shared_features(&self, a: usize, b: usize) -> Vec<&str> {
        self.labels
            .iter()
            .zip(self.rows[a].iter().zip(&self.rows[b]))
            .filter(|(_, (x, y))| **x > 0.0 && **y > 0.0)
            .map(|(label, _)| label.as_str())
            .collect()
    }
}
