//! Round-count and capacity derivation.
//!
//! # Capacity
//! `base = n / t`, `extra = n mod t`. Each round, `extra` tables hold
//! `base + 1` participants and the rest hold `base`, so every seat is used.
//!
//! # Pigeonhole bound
//! Per round a participant meets at most `max_capacity - 1` new people and
//! there are only `n - 1` others, so at most
//! `floor((n - 1) / (max_capacity - 1))` rounds can avoid a repeat.
//!
//! # Round count
//! With a fixed round length the count is `floor(duration / length)`,
//! capped by the bound. With length 0 the count targets one round per
//! `auto_round_minutes` and the length is then stretched to fill the session.

use crate::config::RotationConfig;

/// Derived sizing of a rotation session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPlan {
    pub participant_count: usize,
    pub table_count: usize,
    /// Seats at a regular table (`n / t`).
    pub base_capacity: usize,
    /// Tables holding one extra seat each round (`n mod t`).
    pub extra_tables: usize,
    /// Largest table size in any round.
    pub max_capacity: usize,
    /// Rounds possible without a forced repeat meeting.
    pub max_theoretical_rounds: usize,
    /// Rounds to generate (always ≥ 1).
    pub rounds: usize,
    /// Effective round length in minutes.
    pub minutes_per_round: u64,
}

impl RotationPlan {
    /// Derives the plan for validated inputs.
    ///
    /// # Arguments
    /// * `participant_count` - Number of participants (≥ `table_count`).
    /// * `table_count` - Number of tables (≥ 1).
    /// * `session_minutes` - Total session duration.
    /// * `time_per_round` - Fixed round length, or 0 to derive it.
    pub fn derive(
        participant_count: usize,
        table_count: usize,
        session_minutes: u64,
        time_per_round: u64,
        config: &RotationConfig,
    ) -> Self {
        let tables = table_count.max(1);
        let base_capacity = participant_count / tables;
        let extra_tables = participant_count % tables;
        let max_capacity = if extra_tables > 0 {
            base_capacity + 1
        } else {
            base_capacity
        };
        let max_theoretical_rounds =
            Self::theoretical_bound(participant_count, max_capacity);

        let (rounds, minutes_per_round) = if time_per_round > 0 {
            let by_time = usize::try_from(session_minutes / time_per_round).unwrap_or(usize::MAX);
            (by_time.min(max_theoretical_rounds).max(1), time_per_round)
        } else {
            let step = u64::from(config.auto_round_minutes.max(1));
            let wanted = usize::try_from(session_minutes / step)
                .unwrap_or(usize::MAX)
                .max(1);
            let rounds = wanted.min(max_theoretical_rounds).max(1);
            let minutes = if rounds == 1 {
                session_minutes
            } else {
                session_minutes / rounds as u64
            };
            (rounds, minutes)
        };

        Self {
            participant_count,
            table_count: tables,
            base_capacity,
            extra_tables,
            max_capacity,
            max_theoretical_rounds,
            rounds,
            minutes_per_round,
        }
    }

    /// `floor((n - 1) / (max_capacity - 1))`, or 1 when tables seat at most one.
    pub fn theoretical_bound(participant_count: usize, max_capacity: usize) -> usize {
        if max_capacity <= 1 {
            1
        } else {
            (participant_count.saturating_sub(1) / (max_capacity - 1)).max(1)
        }
    }

    /// Total seats per round; always equals the participant count.
    pub fn seats_per_round(&self) -> usize {
        self.base_capacity * self.table_count + self.extra_tables
    }
}
