use std::cmp::Ordering;

/// A score attached to the position of a row in its source matrix.
///
/// Higher scores are greater; on equal scores the earlier position is
/// greater, so picking the greatest values keeps the original order on ties.
#[derive(Debug, Clone, Copy)]
pub struct MapedDistance(pub usize, pub f64);

impl MapedDistance {
    pub fn position(&self) -> usize {
        self.0
    }

    pub fn dist(&self) -> f64 {
        self.1
    }
}

impl PartialEq for MapedDistance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for MapedDistance {}

impl PartialOrd for MapedDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for MapedDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist()
            .partial_cmp(&other.dist())
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.position().cmp(&self.position()))
    }
}
