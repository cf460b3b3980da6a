//! Predicted match results and league standings
//!
//! Payloads of the per-simulation read endpoints. The sync core never looks
//! inside these; they are decoded for presentation only.

use serde::{Deserialize, Serialize};

/// Outcome of a single match, predicted or actual.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    HomeWin,
    Draw,
    AwayWin,
}

/// Model confidence for each possible outcome of a match.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeProbabilities {
    pub home_win: f64,
    pub draw: f64,
    pub away_win: f64,
}

/// A single predicted fixture within a simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPrediction {
    pub date: String,
    pub home_id: String,
    pub away_id: String,
    pub prediction: MatchOutcome,
    /// Real-world result, present once the fixture has been played.
    #[serde(default)]
    pub actual: Option<MatchOutcome>,
    pub probabilities: OutcomeProbabilities,
}

/// One row of the simulated final league table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Standing {
    pub position: u32,
    pub team_id: String,
    pub played: u32,
    pub won: u32,
    pub drew: u32,
    pub lost: u32,
    pub points: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_prediction_wire_format() {
        let m: MatchPrediction = serde_json::from_str(
            r#"{
                "date": "01-01-2026",
                "homeId": "ARS",
                "awayId": "LIV",
                "prediction": "draw",
                "probabilities": {"homeWin": 0.25, "draw": 0.5, "awayWin": 0.25}
            }"#,
        )
        .unwrap();
        assert_eq!(m.home_id, "ARS");
        assert_eq!(m.prediction, MatchOutcome::Draw);
        assert_eq!(m.actual, None);
        assert_eq!(m.probabilities.home_win, 0.25);
    }

    #[test]
    fn test_standing_wire_format() {
        let s: Standing = serde_json::from_str(
            r#"{"position": 1, "teamId": "ARS", "played": 38, "won": 25, "drew": 8, "lost": 5, "points": 83}"#,
        )
        .unwrap();
        assert_eq!(s.team_id, "ARS");
        assert_eq!(s.points, 83);
    }
}
