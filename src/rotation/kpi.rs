//! Rotation quality metrics (KPIs).
//!
//! Computes mixing and stability indicators from a generated plan.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Distinct pairs | Pairs that shared a table at least once |
//! | Repeated pairs | Pairs that shared a table in more than one round |
//! | Max pair meetings | Most rounds any single pair spent together |
//! | Pair coverage | Distinct pairs / all possible pairs |
//! | Avg partners | Mean distinct tablemates per participant |
//! | Table changes | Seat moves between consecutive rounds |

use std::collections::{HashMap, HashSet};

use crate::models::GenerationResult;

/// Rotation performance indicators.
#[derive(Debug, Clone)]
pub struct RotationKpi {
    /// Pairs that met at least once.
    pub distinct_pairs: usize,
    /// Pairs that met in two or more rounds.
    pub repeated_pairs: usize,
    /// Highest number of rounds a single pair shared.
    pub max_pair_meetings: usize,
    /// Fraction of all possible pairs that met (0.0..1.0).
    pub pair_coverage: f64,
    /// Mean number of distinct partners per participant.
    pub avg_partners: f64,
    /// Fewest distinct partners of any participant.
    pub min_partners: usize,
    /// Times a participant's table differs from their previous round.
    pub table_changes: usize,
}

impl RotationKpi {
    /// Computes KPIs from a generated plan.
    pub fn calculate(result: &GenerationResult) -> Self {
        let mut pair_meetings: HashMap<(&str, &str), usize> = HashMap::new();
        let mut partners: HashMap<&str, HashSet<&str>> = HashMap::new();

        for round in &result.rounds {
            for table in &round.tables {
                for (i, a) in table.members.iter().enumerate() {
                    for b in &table.members[i + 1..] {
                        let key = if a <= b {
                            (a.as_str(), b.as_str())
                        } else {
                            (b.as_str(), a.as_str())
                        };
                        *pair_meetings.entry(key).or_insert(0) += 1;
                        partners.entry(key.0).or_default().insert(key.1);
                        partners.entry(key.1).or_default().insert(key.0);
                    }
                }
            }
        }

        let participants = result.participants();
        let n = participants.len();

        let distinct_pairs = pair_meetings.len();
        let repeated_pairs = pair_meetings.values().filter(|&&c| c > 1).count();
        let max_pair_meetings = pair_meetings.values().copied().max().unwrap_or(0);

        let possible_pairs = n * n.saturating_sub(1) / 2;
        let pair_coverage = if possible_pairs == 0 {
            0.0
        } else {
            distinct_pairs as f64 / possible_pairs as f64
        };

        let partner_counts: Vec<usize> = participants
            .iter()
            .map(|p| partners.get(p).map_or(0, HashSet::len))
            .collect();
        let avg_partners = if n == 0 {
            0.0
        } else {
            partner_counts.iter().sum::<usize>() as f64 / n as f64
        };
        let min_partners = partner_counts.iter().copied().min().unwrap_or(0);

        let table_changes: usize = result
            .rounds
            .windows(2)
            .map(|pair| {
                participants
                    .iter()
                    .filter(|p| pair[0].table_of(p) != pair[1].table_of(p))
                    .count()
            })
            .sum();

        Self {
            distinct_pairs,
            repeated_pairs,
            max_pair_meetings,
            pair_coverage,
            avg_partners,
            min_partners,
            table_changes,
        }
    }

    /// Whether no pair shared a table twice.
    pub fn is_repeat_free(&self) -> bool {
        self.repeated_pairs == 0
    }
}
