use std::fmt;

/// Qualitative severity band for a metric percentile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Low => "low",
            Level::Moderate => "moderate",
            Level::High => "high",
            Level::VeryHigh => "very high",
        }
    }

    /// Form used for td class names ("very high" -> "very-high").
    pub fn css_class(&self) -> &'static str {
        match self {
            Level::VeryHigh => "very-high",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Short-term trend direction read off the 7/14-day percent changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrendDirection {
    Rising,
    Falling,
    Flat,
    Erratic,
}

impl TrendDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendDirection::Rising => "rising",
            TrendDirection::Falling => "falling",
            TrendDirection::Flat => "flat",
            TrendDirection::Erratic => "erratic",
        }
    }
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Bands are closed on their upper end; the top band is open upward.
/// Input is assumed already clamped to 0-100, so out-of-range values just
/// land in an end band.
pub fn classify_level(percentile: f64) -> Level {
    if percentile <= 25.0 {
        Level::Low
    } else if percentile <= 50.0 {
        Level::Moderate
    } else if percentile <= 75.0 {
        Level::High
    } else {
        Level::VeryHigh
    }
}

/// Erratic is checked first: when the 7d and 14d changes point strongly in
/// opposite directions (one past +10, the other past -10), it wins over a
/// directional read. A missing delta never satisfies a comparison, so it
/// falls through to flat.
pub fn classify_trend(d7_pct: Option<f64>, d14_pct: Option<f64>) -> TrendDirection {
    if let (Some(d7), Some(d14)) = (d7_pct, d14_pct) {
        if (d7 > 10.0 && d14 < -10.0) || (d7 < -10.0 && d14 > 10.0) {
            return TrendDirection::Erratic;
        }
    }

    match d7_pct {
        Some(d7) if d7 >= 2.5 => TrendDirection::Rising,
        Some(d7) if d7 <= -2.5 => TrendDirection::Falling,
        _ => TrendDirection::Flat,
    }
}

/// English ordinal suffix; 11th-13th are the irregular cases.
pub fn ordinal_suffix(n: i64) -> &'static str {
    match n.abs() % 100 {
        11..=13 => "th",
        rem => match rem % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    }
}
