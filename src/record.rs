// src/record.rs
use crate::schema::{coerce_f64, coerce_int, fmt_f64, fmt_int, WIDTH};

/// One season-competition row of the shooting table, typed.
/// Field order is column order (see `schema::COLUMNS`).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeasonRecord {
    pub season: String,
    pub age: Option<i64>,
    pub squad: String,
    pub country: String,
    pub competition: String,
    pub league_rank: String,
    pub matches_played_90s: Option<f64>,
    pub goals: Option<f64>,
    pub shots: Option<f64>,
    pub shots_on_target: Option<f64>,
    pub shots_on_target_pct: Option<f64>,
    pub shots_per_90: Option<f64>,
    pub shots_on_target_per_90: Option<f64>,
    pub goals_per_shot: Option<f64>,
    pub goals_per_shot_on_target: Option<f64>,
    pub avg_shot_distance: Option<f64>,
    pub free_kick_goals: Option<f64>,
    pub penalty_goals: Option<f64>,
    pub penalty_attempts: Option<f64>,
    pub xg: Option<f64>,
    pub npxg: Option<f64>,
    pub npxg_per_shot: Option<f64>,
    pub goals_minus_xg: Option<f64>,
    pub np_goals_minus_xg: Option<f64>,
    pub matches: String,
}

impl SeasonRecord {
    /// Build from one row of cells. Missing cells read as empty; numeric
    /// cells that don't parse become `None`.
    pub fn from_cells(cells: &[String]) -> Self {
        let text = |i: usize| cells.get(i).cloned().unwrap_or_default();
        let num = |i: usize| cells.get(i).and_then(|c| coerce_f64(c));

        Self {
            season: text(0),
            age: cells.get(1).and_then(|c| coerce_int(c)),
            squad: text(2),
            country: text(3),
            competition: text(4),
            league_rank: text(5),
            matches_played_90s: num(6),
            goals: num(7),
            shots: num(8),
            shots_on_target: num(9),
            shots_on_target_pct: num(10),
            shots_per_90: num(11),
            shots_on_target_per_90: num(12),
            goals_per_shot: num(13),
            goals_per_shot_on_target: num(14),
            avg_shot_distance: num(15),
            free_kick_goals: num(16),
            penalty_goals: num(17),
            penalty_attempts: num(18),
            xg: num(19),
            npxg: num(20),
            npxg_per_shot: num(21),
            goals_minus_xg: num(22),
            np_goals_minus_xg: num(23),
            matches: text(24),
        }
    }

    pub fn to_cells(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(WIDTH);
        out.push(self.season.clone());
        out.push(fmt_int(self.age));
        out.push(self.squad.clone());
        out.push(self.country.clone());
        out.push(self.competition.clone());
        out.push(self.league_rank.clone());
        out.extend(self.metrics().into_iter().map(fmt_f64));
        out.push(self.matches.clone());
        out
    }

    /// The 18 float columns, in column order (`Minutes_90s` … `npG_minus_xG`).
    pub fn metrics(&self) -> [Option<f64>; 18] {
        [
            self.matches_played_90s,
            self.goals,
            self.shots,
            self.shots_on_target,
            self.shots_on_target_pct,
            self.shots_per_90,
            self.shots_on_target_per_90,
            self.goals_per_shot,
            self.goals_per_shot_on_target,
            self.avg_shot_distance,
            self.free_kick_goals,
            self.penalty_goals,
            self.penalty_attempts,
            self.xg,
            self.npxg,
            self.npxg_per_shot,
            self.goals_minus_xg,
            self.np_goals_minus_xg,
        ]
    }
}
