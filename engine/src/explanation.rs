// Copyright (c) 2020 White Leaf
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use crate::recommendation::{Evidence, Recommendations};

/// Turns the evidence stored in recommendations into readable lines.
#[derive(Debug, Clone, Copy)]
pub struct ExplanationBuilder {
    precision: usize,
}

impl Default for ExplanationBuilder {
    fn default() -> Self {
        Self::new(config::EXPLAIN_PRECISION)
    }
}

impl ExplanationBuilder {
    pub fn new(precision: usize) -> Self {
        Self { precision }
    }

    /// One line per recommended item, in ranking order. Collaborative
    /// items that no neighbor rated get no line.
    pub fn explain(&self, recs: &Recommendations) -> Vec<String> {
        recs.items
            .iter()
            .filter_map(|rec| match &rec.evidence {
                Evidence::Neighbors(contributions) if contributions.is_empty() => None,

                Evidence::Neighbors(contributions) => {
                    let details: Vec<_> = contributions
                        .iter()
                        .map(|c| {
                            format!(
                                "{} (rated {}, sim {:.*})",
                                c.user, c.rating, self.precision, c.similarity
                            )
                        })
                        .collect();

                    Some(format!(
                        "{}: recommendations influenced by {}",
                        rec.item,
                        details.join(", ")
                    ))
                }

                Evidence::SharedFeatures(shared) if shared.is_empty() => Some(format!(
                    "{}: shares no genres with {}",
                    rec.item, recs.target
                )),

                Evidence::SharedFeatures(shared) => Some(format!(
                    "{}: shares genres {} with {}",
                    rec.item,
                    shared.join(", "),
                    recs.target
                )),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::{Contribution, Mode, Recommendation};

    fn collaborative() -> Recommendations {
        Recommendations {
            mode: Mode::Collaborative,
            target: "User1".into(),
            neighbors: vec![],
            items: vec![
                Recommendation {
                    item: "Parasite".into(),
                    score: 4.49,
                    evidence: Evidence::Neighbors(vec![
                        Contribution {
                            user: "User4".into(),
                            rating: 4.,
                            similarity: 0.525_225,
                        },
                        Contribution {
                            user: "User3".into(),
                            rating: 5.,
                            similarity: 0.503_341,
                        },
                    ]),
                },
                Recommendation {
                    item: "Nowhere".into(),
                    score: 0.,
                    evidence: Evidence::Neighbors(vec![]),
                },
            ],
        }
    }

    #[test]
    fn collaborative_lines() {
        let lines = ExplanationBuilder::default().explain(&collaborative());

        assert_eq!(
            lines,
            vec![
                "Parasite: recommendations influenced by User4 (rated 4, sim 0.53), \
                 User3 (rated 5, sim 0.50)"
            ]
        );
    }

    #[test]
    fn precision_is_configurable() {
        let lines = ExplanationBuilder::new(4).explain(&collaborative());
        assert!(lines[0].contains("sim 0.5252"));
    }

    #[test]
    fn content_lines() {
        let recs = Recommendations {
            mode: Mode::ContentBased,
            target: "Inception".into(),
            neighbors: vec![],
            items: vec![
                Recommendation {
                    item: "Interstellar".into(),
                    score: 0.5,
                    evidence: Evidence::SharedFeatures(vec!["Sci-Fi".into()]),
                },
                Recommendation {
                    item: "Whiplash".into(),
                    score: 0.,
                    evidence: Evidence::SharedFeatures(vec![]),
                },
            ],
        };

        assert_eq!(
            ExplanationBuilder::default().explain(&recs),
            vec![
                "Interstellar: shares genres Sci-Fi with Inception",
                "Whiplash: shares no genres with Inception",
            ]
        );
    }
}
