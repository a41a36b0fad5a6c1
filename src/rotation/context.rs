//! Call-scoped seating state.
//!
//! Everything the placement loop mutates lives here: who has already met
//! whom, where each participant sat last round, and the random source.
//! A fresh context is built per generation, so concurrent generations
//! share nothing.

use rand::seq::{index, SliceRandom};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;

/// Symmetric record of participants who already shared a table.
///
/// Indexed by participant position; grows monotonically.
#[derive(Debug, Clone, Default)]
pub struct MeetingHistory {
    met: Vec<HashSet<usize>>,
}

impl MeetingHistory {
    /// Creates an empty history for `participant_count` participants.
    pub fn new(participant_count: usize) -> Self {
        Self {
            met: vec![HashSet::new(); participant_count],
        }
    }

    /// Whether `a` and `b` have shared a table.
    pub fn has_met(&self, a: usize, b: usize) -> bool {
        self.met.get(a).is_some_and(|s| s.contains(&b))
    }

    /// Whether `p` has met any of `others`.
    pub fn has_met_any(&self, p: usize, others: &[usize]) -> bool {
        others.iter().any(|&o| self.has_met(p, o))
    }

    /// Records every pair of distinct occupants of one table.
    pub fn record_table(&mut self, occupants: &[usize]) {
        for &a in occupants {
            for &b in occupants {
                if a != b {
                    self.met[a].insert(b);
                }
            }
        }
    }

    /// Number of distinct partners `p` has met.
    pub fn partner_count(&self, p: usize) -> usize {
        self.met.get(p).map_or(0, HashSet::len)
    }
}

/// Mutable state of one generation call.
#[derive(Debug, Clone)]
pub struct SeatingContext {
    /// Meetings from completed rounds.
    pub history: MeetingHistory,
    /// Table index (0-based) each participant occupied last round.
    pub last_table: Vec<Option<usize>>,
    rng: ChaCha8Rng,
}

impl SeatingContext {
    /// Creates a context whose randomness is fully determined by `seed`.
    pub fn new(participant_count: usize, seed: u64) -> Self {
        Self {
            history: MeetingHistory::new(participant_count),
            last_table: vec![None; participant_count],
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Uniform random permutation of participant indices.
    pub fn visit_order(&mut self) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.last_table.len()).collect();
        order.shuffle(&mut self.rng);
        order
    }

    /// Per-table capacity for one round: `base` everywhere, plus one seat
    /// at `extra` tables drawn at random.
    pub fn round_capacities(&mut self, table_count: usize, base: usize, extra: usize) -> Vec<usize> {
        let mut capacities = vec![base; table_count];
        for table in index::sample(&mut self.rng, table_count, extra.min(table_count)).iter() {
            capacities[table] += 1;
        }
        capacities
    }

    /// Order in which tables are tried for participant `p`.
    ///
    /// Before any round: a random permutation of all tables. Afterwards:
    /// the tables within `±radius` of the previous seat (modulo
    /// `table_count`) in random order, then every other table in a
    /// separately shuffled order.
    pub fn candidate_tables(&mut self, p: usize, table_count: usize, radius: usize) -> Vec<usize> {
        let Some(last) = self.last_table.get(p).copied().flatten() else {
            let mut all: Vec<usize> = (0..table_count).collect();
            all.shuffle(&mut self.rng);
            return all;
        };

        let mut in_window = vec![false; table_count];
        let mut window = Vec::new();
        let radius = radius.min(table_count);
        for step in 0..=2 * radius {
            let table = (last + table_count + step - radius) % table_count;
            if !in_window[table] {
                in_window[table] = true;
                window.push(table);
            }
        }
        window.shuffle(&mut self.rng);

        let mut rest: Vec<usize> = (0..table_count).filter(|&t| !in_window[t]).collect();
        rest.shuffle(&mut self.rng);

        window.extend(rest);
        window
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_symmetric() {
        let mut history = MeetingHistory::new(4);
        history.record_table(&[0, 2, 3]);
        assert!(history.has_met(0, 2));
        assert!(history.has_met(2, 0));
        assert!(history.has_met(3, 2));
        assert!(!history.has_met(0, 1));
        assert!(!history.has_met(0, 0));
        assert_eq!(history.partner_count(0), 2);
        assert_eq!(history.partner_count(1), 0);
        assert!(!history.has_met_any(1, &[]));
        assert!(history.has_met_any(3, &[1, 0]));
    }

    #[test]
    fn test_visit_order_is_permutation() {
        let mut ctx = SeatingContext::new(20, 42);
        let mut order = ctx.visit_order();
        order.sort_unstable();
        assert_eq!(order, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_same_seed_same_draws() {
        let mut a = SeatingContext::new(30, 9);
        let mut b = SeatingContext::new(30, 9);
        assert_eq!(a.visit_order(), b.visit_order());
        assert_eq!(a.round_capacities(7, 4, 2), b.round_capacities(7, 4, 2));
    }

    #[test]
    fn test_round_capacities() {
        let mut ctx = SeatingContext::new(10, 1);
        let caps = ctx.round_capacities(4, 2, 2);
        assert_eq!(caps.iter().sum::<usize>(), 10);
        assert_eq!(caps.iter().filter(|&&c| c == 3).count(), 2);
        assert_eq!(caps.iter().filter(|&&c| c == 2).count(), 2);
    }

    #[test]
    fn test_first_round_candidates_cover_all_tables() {
        let mut ctx = SeatingContext::new(5, 3);
        let mut tables = ctx.candidate_tables(0, 8, 6);
        tables.sort_unstable();
        assert_eq!(tables, (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn test_proximity_window_first() {
        let mut ctx = SeatingContext::new(1, 5);
        ctx.last_table[0] = Some(10);
        let tables = ctx.candidate_tables(0, 20, 2);
        assert_eq!(tables.len(), 20);

        let mut window: Vec<usize> = tables[..5].to_vec();
        window.sort_unstable();
        assert_eq!(window, vec![8, 9, 10, 11, 12]);

        let mut all = tables.clone();
        all.sort_unstable();
        assert_eq!(all, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_proximity_window_wraps() {
        let mut ctx = SeatingContext::new(1, 5);
        ctx.last_table[0] = Some(0);
        let tables = ctx.candidate_tables(0, 10, 1);
        let mut window: Vec<usize> = tables[..3].to_vec();
        window.sort_unstable();
        assert_eq!(window, vec![0, 1, 9]);
    }

    #[test]
    fn test_radius_wider_than_tables() {
        let mut ctx = SeatingContext::new(1, 5);
        ctx.last_table[0] = Some(1);
        let mut tables = ctx.candidate_tables(0, 3, 6);
        tables.sort_unstable();
        assert_eq!(tables, vec![0, 1, 2]);
    }
}
