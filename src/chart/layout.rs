// src/chart/layout.rs
//
// Geometry of a grouped bar chart in data units. Group `i` puts series `s`
// at x = i + s * BAR_WIDTH; the group's tick sits between its bars.

pub const BAR_WIDTH: f64 = 0.4;
/// Value labels sit this far above the bar top (data units).
pub const LABEL_OFFSET: f64 = 0.1;

/// Upper bound on y ticks; a 1/2/5 step over any finite range stays well below it.
pub const MAX_Y_TICKS: usize = 32;

pub type Rgb = [u8; 3];

pub const DODGER_BLUE: Rgb = [30, 144, 255];
pub const ORANGE: Rgb = [255, 165, 0];
pub const BLUE: Rgb = [0, 0, 255];
pub const DARK_ORANGE: Rgb = [255, 140, 0];

#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub fill: Rgb,
    pub label: Rgb,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Group {
    pub label: String,
    /// One value per series; `None` draws nothing.
    pub values: [Option<f64>; 2],
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: [Series; 2],
    pub groups: Vec<Group>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Bar {
    pub group: usize,
    pub series: usize,
    pub center: f64,
    pub height: f64,
    /// Value with one decimal, drawn at `height + LABEL_OFFSET`.
    pub label: String,
}

impl ChartSpec {
    pub fn goals_vs_xg(title: impl Into<String>, groups: Vec<Group>) -> Self {
        Self {
            title: title.into(),
            x_label: s!("Season"),
            y_label: s!("Count"),
            series: [
                Series { name: s!("Goals"), fill: DODGER_BLUE, label: BLUE },
                Series { name: s!("Expected Goals (xG)"), fill: ORANGE, label: DARK_ORANGE },
            ],
            groups,
        }
    }

    /// Bars in drawing order: group by group, series by series.
    pub fn bars(&self) -> Vec<Bar> {
        let mut out = Vec::with_capacity(self.groups.len() * 2);
        for (gi, g) in self.groups.iter().enumerate() {
            for (si, v) in g.values.iter().enumerate() {
                let Some(v) = *v else { continue };
                out.push(Bar {
                    group: gi,
                    series: si,
                    center: gi as f64 + si as f64 * BAR_WIDTH,
                    height: v,
                    label: format!("{v:.1}"),
                });
            }
        }
        out
    }

    /// Tick position and label per group, centred between its two bars.
    pub fn ticks(&self) -> Vec<(f64, &str)> {
        self.groups
            .iter()
            .enumerate()
            .map(|(i, g)| (i as f64 + BAR_WIDTH / 2.0, g.label.as_str()))
            .collect()
    }

    /// Visible x range with a 5% margin either side.
    pub fn x_range(&self) -> (f64, f64) {
        let lo = -BAR_WIDTH / 2.0;
        let hi = (self.groups.len().max(1) - 1) as f64 + BAR_WIDTH * 1.5;
        let pad = (hi - lo) * 0.05;
        (lo - pad, hi + pad)
    }

    /// Visible y range; starts at 0 (or the lowest negative value) and leaves
    /// headroom above the tallest bar for its label. Always finite, even for
    /// values near `f64::MAX`.
    pub fn y_range(&self) -> (f64, f64) {
        let values = || self.groups.iter().flat_map(|g| g.values.iter().flatten().copied());
        let max = values().filter(|v| v.is_finite()).fold(0.0_f64, f64::max);
        let min = values().filter(|v| v.is_finite()).fold(0.0_f64, f64::min);
        let hi = if max <= 0.0 { 1.0 } else { ((max + LABEL_OFFSET) * 1.12).min(f64::MAX) };
        let lo = if min < 0.0 { (min * 1.12).max(f64::MIN) } else { 0.0 };
        (lo, hi)
    }

    /// Round tick values covering the y range (1/2/5 × 10^k steps), at most
    /// `MAX_Y_TICKS` of them.
    pub fn y_ticks(&self) -> Vec<f64> {
        let (lo, hi) = self.y_range();
        // halves first: hi - lo overflows when both ends are huge
        let step = nice_step(hi / 6.0 - lo / 6.0);
        let mut out = Vec::new();
        let mut t = (lo / step).ceil() * step;
        while t.is_finite() && t <= hi + 1e-9 && out.len() < MAX_Y_TICKS {
            // avoid "-0.0"
            out.push(if t.abs() < 1e-9 { 0.0 } else { t });
            t += step;
        }
        out
    }
}

fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() { return 1.0; }
    let mag = 10f64.powi(raw.log10().floor() as i32);
    let norm = raw / mag;
    let mult = if norm <= 1.0 { 1.0 } else if norm <= 2.0 { 2.0 } else if norm <= 5.0 { 5.0 } else { 10.0 };
    mult * mag
}

/// Tick text: integers without decimals, otherwise one decimal.
pub fn tick_label(v: f64) -> String {
    if (v - v.round()).abs() < 1e-9 { format!("{}", v.round() as i64) } else { format!("{v:.1}") }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(groups: Vec<Group>) -> ChartSpec {
        ChartSpec::goals_vs_xg("Test", groups)
    }

    fn group(label: &str, g: Option<f64>, xg: Option<f64>) -> Group {
        Group { label: s!(label), values: [g, xg] }
    }

    #[test]
    fn one_season_one_pair() {
        let c = spec(vec![group("2023-2024", Some(7.0), Some(5.3))]);
        let bars = c.bars();
        assert_eq!(bars.len(), 2);
        assert_eq!(bars[0].center, 0.0);
        assert_eq!(bars[0].label, "7.0");
        assert_eq!(bars[1].center, 0.4);
        assert_eq!(bars[1].label, "5.3");
        assert_eq!(c.ticks(), vec![(0.2, "2023-2024")]);
    }

    #[test]
    fn null_values_draw_no_bar_but_keep_tick() {
        let c = spec(vec![
            group("2023-2024", None, Some(2.04)),
            group("2024-2025", Some(9.0), None),
        ]);
        let bars = c.bars();
        assert_eq!(bars.len(), 2);
        assert_eq!((bars[0].group, bars[0].series, bars[0].label.as_str()), (0, 1, "2.0"));
        assert_eq!((bars[1].group, bars[1].series), (1, 0));
        assert_eq!(c.ticks().len(), 2);
    }

    #[test]
    fn ranges_cover_bars() {
        let c = spec(vec![group("a", Some(9.0), Some(8.2)), group("b", Some(3.0), Some(4.5))]);
        let (x0, x1) = c.x_range();
        assert!(x0 < -0.2 && x1 > 1.6);
        let (y0, y1) = c.y_range();
        assert_eq!(y0, 0.0);
        assert!(y1 > 9.1);
        let ticks = c.y_ticks();
        assert_eq!(ticks.first().copied(), Some(0.0));
        assert!(ticks.windows(2).all(|w| w[1] > w[0]));
        assert!(*ticks.last().unwrap() <= y1);
    }

    #[test]
    fn empty_chart_has_unit_range() {
        let c = spec(vec![]);
        assert!(c.bars().is_empty());
        assert_eq!(c.y_range(), (0.0, 1.0));
        assert!(c.x_range().0 < c.x_range().1);
    }

    #[test]
    fn huge_values_keep_a_finite_range() {
        let c = spec(vec![group("2023-2024", Some(1.7e308), Some(5.3))]);
        let (y0, y1) = c.y_range();
        assert_eq!(y0, 0.0);
        assert!(y1.is_finite() && y1 >= 1.7e308);
        let ticks = c.y_ticks();
        assert!(!ticks.is_empty() && ticks.len() <= MAX_Y_TICKS);
        assert!(ticks.iter().all(|t| t.is_finite()));

        let c = spec(vec![group("2023-2024", Some(-1.7e308), Some(1.7e308))]);
        let (y0, y1) = c.y_range();
        assert!(y0.is_finite() && y1.is_finite() && y0 < 0.0);
        let ticks = c.y_ticks();
        assert!(!ticks.is_empty() && ticks.len() <= MAX_Y_TICKS);
    }

    #[test]
    fn nice_steps() {
        assert_eq!(nice_step(0.9), 1.0);
        assert_eq!(nice_step(1.7), 2.0);
        assert_eq!(nice_step(3.1), 5.0);
        assert!((nice_step(0.03) - 0.05).abs() < 1e-12);
        assert_eq!(tick_label(2.0), "2");
        assert_eq!(tick_label(0.5), "0.5");
    }
}
