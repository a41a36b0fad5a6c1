//! Rotation (solution) model.
//!
//! A generation result is the full seating plan: for every round, the
//! members of every table. Query helpers answer the questions downstream
//! consumers ask of a plan: "where does this participant sit in round r",
//! "what is my itinerary", "who sits at table t over the session".

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::validation::RotationError;

/// The seating of one table during one round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableAssignment {
    /// 1-based table number, stable across rounds.
    pub table_id: usize,
    /// Display name (e.g. "Table 3").
    pub table_name: String,
    /// Participants seated at this table, in seating order.
    pub members: Vec<String>,
}

/// One discrete seating of all participants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    /// 1-based round number.
    pub round: usize,
    /// One entry per table, ordered by `table_id`.
    pub tables: Vec<TableAssignment>,
}

/// Summary of a generated plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationMetadata {
    pub participant_count: usize,
    pub table_count: usize,
    pub rounds_generated: usize,
    /// Effective round length (minutes), derived when the caller passed 0.
    pub minutes_per_round: u64,
    /// Base table capacity (`participant_count / table_count`).
    pub participants_per_table: usize,
    /// Pigeonhole bound on rounds without a forced repeat.
    pub max_theoretical_rounds: usize,
    /// Seed that reproduces this plan.
    pub seed: u64,
    /// Placements that had to ignore the meeting history.
    pub forced_placements: usize,
}

/// A complete rotation plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationResult {
    pub metadata: RotationMetadata,
    pub rounds: Vec<Round>,
}

/// Caller-facing response shape: either the plan or `{ "error": ... }`.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RotationResponse {
    /// Serializes as `{ "metadata": ..., "rounds": ... }`.
    Generated(GenerationResult),
    /// Serializes as `{ "error": "<message>" }`.
    Rejected { error: RotationError },
}

impl TableAssignment {
    /// Creates a table assignment.
    pub fn new(table_id: usize, table_name: impl Into<String>, members: Vec<String>) -> Self {
        Self {
            table_id,
            table_name: table_name.into(),
            members,
        }
    }

    /// Number of seated participants.
    #[inline]
    pub fn occupancy(&self) -> usize {
        self.members.len()
    }

    /// Whether `participant` sits here.
    pub fn seats(&self, participant: &str) -> bool {
        self.members.iter().any(|m| m == participant)
    }
}

impl Round {
    /// Creates a round.
    pub fn new(round: usize, tables: Vec<TableAssignment>) -> Self {
        Self { round, tables }
    }

    /// Table id of `participant` in this round.
    pub fn table_of(&self, participant: &str) -> Option<usize> {
        self.tables
            .iter()
            .find(|t| t.seats(participant))
            .map(|t| t.table_id)
    }

    /// Finds a table by id.
    pub fn table(&self, table_id: usize) -> Option<&TableAssignment> {
        self.tables.iter().find(|t| t.table_id == table_id)
    }

    /// Total seated participants.
    pub fn seated_count(&self) -> usize {
        self.tables.iter().map(TableAssignment::occupancy).sum()
    }
}

impl GenerationResult {
    /// Number of rounds.
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Finds a round by its 1-based number.
    pub fn round(&self, number: usize) -> Option<&Round> {
        self.rounds.iter().find(|r| r.round == number)
    }

    /// Table id of `participant` in round `round`.
    pub fn table_for(&self, participant: &str, round: usize) -> Option<usize> {
        self.round(round).and_then(|r| r.table_of(participant))
    }

    /// A participant's personal plan: `(round, table_id)` for every round
    /// they are seated in.
    pub fn itinerary(&self, participant: &str) -> Vec<(usize, usize)> {
        self.rounds
            .iter()
            .filter_map(|r| r.table_of(participant).map(|t| (r.round, t)))
            .collect()
    }

    /// Members of one physical table over the session (round → members).
    pub fn table_roster(&self, table_id: usize) -> BTreeMap<usize, Vec<String>> {
        self.rounds
            .iter()
            .filter_map(|r| r.table(table_id).map(|t| (r.round, t.members.clone())))
            .collect()
    }

    /// All participants, in first-round seating order.
    pub fn participants(&self) -> Vec<&str> {
        self.rounds
            .first()
            .map(|r| {
                r.tables
                    .iter()
                    .flat_map(|t| t.members.iter().map(String::as_str))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Round numbers grouped into pages of at most `size` (for printed
    /// rotation sheets). A `size` of zero yields a single page.
    pub fn round_chunks(&self, size: usize) -> Vec<Vec<usize>> {
        let numbers: Vec<usize> = self.rounds.iter().map(|r| r.round).collect();
        if numbers.is_empty() {
            return Vec::new();
        }
        let size = if size == 0 { numbers.len() } else { size };
        numbers.chunks(size).map(<[usize]>::to_vec).collect()
    }
}

impl From<Result<GenerationResult, RotationError>> for RotationResponse {
    fn from(outcome: Result<GenerationResult, RotationError>) -> Self {
        match outcome {
            Ok(result) => Self::Generated(result),
            Err(error) => Self::Rejected { error },
        }
    }
}

impl RotationResponse {
    /// Whether the request was rejected.
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(id: usize, members: &[&str]) -> TableAssignment {
        TableAssignment::new(
            id,
            format!("Table {id}"),
            members.iter().map(|m| m.to_string()).collect(),
        )
    }

    fn sample_result() -> GenerationResult {
        GenerationResult {
            metadata: RotationMetadata {
                participant_count: 4,
                table_count: 2,
                rounds_generated: 3,
                minutes_per_round: 10,
                participants_per_table: 2,
                max_theoretical_rounds: 3,
                seed: 7,
                forced_placements: 0,
            },
            rounds: vec![
                Round::new(1, vec![table(1, &["A", "B"]), table(2, &["C", "D"])]),
                Round::new(2, vec![table(1, &["A", "C"]), table(2, &["B", "D"])]),
                Round::new(3, vec![table(1, &["B", "C"]), table(2, &["A", "D"])]),
            ],
        }
    }

    #[test]
    fn test_table_for() {
        let result = sample_result();
        assert_eq!(result.table_for("A", 1), Some(1));
        assert_eq!(result.table_for("A", 3), Some(2));
        assert_eq!(result.table_for("Z", 1), None);
        assert_eq!(result.table_for("A", 9), None);
    }

    #[test]
    fn test_itinerary() {
        let result = sample_result();
        assert_eq!(result.itinerary("D"), vec![(1, 2), (2, 2), (3, 2)]);
        assert!(result.itinerary("nobody").is_empty());
    }

    #[test]
    fn test_table_roster() {
        let result = sample_result();
        let roster = result.table_roster(1);
        assert_eq!(roster.len(), 3);
        assert_eq!(roster[&2], vec!["A".to_string(), "C".to_string()]);
        assert!(result.table_roster(5).is_empty());
    }

    #[test]
    fn test_participants_and_counts() {
        let result = sample_result();
        assert_eq!(result.participants(), vec!["A", "B", "C", "D"]);
        assert_eq!(result.round_count(), 3);
        assert_eq!(result.rounds[0].seated_count(), 4);
    }

    #[test]
    fn test_round_chunks() {
        let result = sample_result();
        assert_eq!(result.round_chunks(2), vec![vec![1, 2], vec![3]]);
        assert_eq!(result.round_chunks(6), vec![vec![1, 2, 3]]);
        assert_eq!(result.round_chunks(0), vec![vec![1, 2, 3]]);
    }

    #[test]
    fn test_response_shapes() {
        let ok = RotationResponse::from(Ok(sample_result()));
        let json = serde_json::to_value(&ok).unwrap();
        assert_eq!(json["metadata"]["rounds_generated"], 3);
        assert_eq!(json["rounds"][0]["tables"][1]["table_name"], "Table 2");
        assert!(!ok.is_error());

        let err = RotationResponse::from(Err(RotationError::MoreTablesThanParticipants));
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "more tables than participants" }));
        assert!(err.is_error());
    }

    #[test]
    fn test_result_roundtrip_json() {
        let result = sample_result();
        let text = serde_json::to_string(&result).unwrap();
        let back: GenerationResult = serde_json::from_str(&text).unwrap();
        assert_eq!(back, result);
    }
}
