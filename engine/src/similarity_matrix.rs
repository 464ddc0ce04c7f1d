// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::{
    distances::{cosine_similarity, is_zero_vector},
    rating_matrix::index_of,
};
use controller::ToTable;
use prettytable::{format::consts::FORMAT_NO_LINESEP, Cell, Row, Table};
use std::collections::HashMap;

pub type Metric = fn(&[f64], &[f64]) -> f64;

/// Square and symmetric table of pairwise similarities between named rows.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityTable {
    ids: Vec<String>,
    index: HashMap<String, usize>,
    values: Vec<f64>,
}

impl SimilarityTable {
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn at(&self, a: usize, b: usize) -> f64 {
        self.values[a * self.ids.len() + b]
    }

    pub fn get(&self, a: &str, b: &str) -> Option<f64> {
        Some(self.at(self.position(a)?, self.position(b)?))
    }

    pub fn row(&self, a: usize) -> &[f64] {
        let n = self.ids.len();
        &self.values[a * n..(a + 1) * n]
    }
}

impl ToTable for SimilarityTable {
    fn to_table(&self) -> Table {
        let mut table = Table::new();

        let mut header = vec![Cell::new("")];
        header.extend(self.ids.iter().map(|id| Cell::new(id)));
        table.set_titles(Row::new(header));

        for (a, id) in self.ids.iter().enumerate() {
            let mut row = vec![Cell::new(id)];
            row.extend(
                self.row(a)
                    .iter()
                    .map(|value| Cell::new(&format!("{:.2}", value))),
            );

            table.add_row(Row::new(row));
        }

        table.set_format(*FORMAT_NO_LINESEP);
        table
    }
}

/// Pairwise similarity over row vectors, cosine unless told otherwise.
#[derive(Clone, Copy)]
pub struct SimilarityComputer {
    metric: Metric,
}

impl Default for SimilarityComputer {
    fn default() -> Self {
        Self::new(cosine_similarity::<f64>)
    }
}

impl SimilarityComputer {
    pub fn new(metric: Metric) -> Self {
        Self { metric }
    }

    /// Full table for `rows`, the i-th row is named by `ids[i]`.
    ///
    /// The diagonal is 1.0 for every non-zero row and 0.0 for a zero row.
    pub fn table<S: AsRef<str>>(&self, ids: &[S], rows: &[Vec<f64>]) -> SimilarityTable {
        debug_assert_eq!(ids.len(), rows.len());

        let ids: Vec<String> = ids.iter().map(|id| id.as_ref().to_string()).collect();
        let n = ids.len();
        let mut values = vec![0.0; n * n];

        for a in 0..n {
            values[a * n + a] = if is_zero_vector(&rows[a]) { 0.0 } else { 1.0 };

            for b in (a + 1)..n {
                let similarity = (self.metric)(&rows[a], &rows[b]);
                values[a * n + b] = similarity;
                values[b * n + a] = similarity;
            }
        }

        log::debug!("Computed a {}x{} similarity table", n, n);

        SimilarityTable {
            index: index_of(&ids),
            ids,
            values,
        }
    }

    /// Similarity of `target` against every row
    pub fn row(&self, target: &[f64], rows: &[Vec<f64>]) -> Vec<f64> {
        rows.iter().map(|row| (self.metric)(target, row)).collect()
    }
}
