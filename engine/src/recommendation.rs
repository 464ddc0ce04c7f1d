// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Mode {
    Collaborative,
    ContentBased,
}

/// One of the users closest to the target user
#[derive(Debug, Clone, PartialEq)]
pub struct Neighbor {
    pub user: String,
    pub similarity: f64,
}

/// A neighbor's rating that went into a collaborative score
#[derive(Debug, Clone, PartialEq)]
pub struct Contribution {
    pub user: String,
    pub rating: f64,
    pub similarity: f64,
}

/// What a score was computed from, kept so it can be explained later
#[derive(Debug, Clone, PartialEq)]
pub enum Evidence {
    Neighbors(Vec<Contribution>),
    SharedFeatures(Vec<String>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub item: String,
    pub score: f64,
    pub evidence: Evidence,
}

/// Ranked recommendations for a user or for an item, best first.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendations {
    pub mode: Mode,
    /// The user (collaborative) or reference item (content based)
    pub target: String,
    /// Empty for content based results
    pub neighbors: Vec<Neighbor>,
    pub items: Vec<Recommendation>,
}

impl Recommendations {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn titles(&self) -> Vec<&str> {
        self.items.iter().map(|rec| rec.item.as_str()).collect()
    }

    pub fn scores(&self) -> Vec<(&str, f64)> {
        self.items
            .iter()
            .map(|rec| (rec.item.as_str(), rec.score))
            .collect()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|rec| rec.item == item)
    }
}
