use chrono::Duration;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Named lookback used to bound a visitor count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeWindow {
    #[default]
    Now,
    Hour,
    Day,
    Week,
    Month,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown window '{requested}', valid options are: {}", .valid_options.join(", "))]
pub struct UnknownWindowError {
    pub requested: String,
    pub valid_options: Vec<&'static str>,
}

impl TimeWindow {
    pub const ALL: [TimeWindow; 5] = [
        TimeWindow::Now,
        TimeWindow::Hour,
        TimeWindow::Day,
        TimeWindow::Week,
        TimeWindow::Month,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TimeWindow::Now => "now",
            TimeWindow::Hour => "hour",
            TimeWindow::Day => "day",
            TimeWindow::Week => "week",
            TimeWindow::Month => "month",
        }
    }

    /// A month is counted as 30 days so every window is a fixed span.
    pub fn duration(&self) -> Duration {
        match self {
            TimeWindow::Now => Duration::minutes(15),
            TimeWindow::Hour => Duration::hours(1),
            TimeWindow::Day => Duration::days(1),
            TimeWindow::Week => Duration::weeks(1),
            TimeWindow::Month => Duration::days(30),
        }
    }

    pub fn largest() -> TimeWindow {
        TimeWindow::Month
    }

    /// Window names in lexical order.
    pub fn valid_names() -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Self::ALL.iter().map(|w| w.as_str()).collect();
        names.sort_unstable();
        names
    }

    /// Missing or empty names select `now`; anything else must match exactly.
    pub fn resolve(name: Option<&str>) -> Result<Self, UnknownWindowError> {
        match name {
            None | Some("") => Ok(TimeWindow::Now),
            Some(name) => name.parse(),
        }
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeWindow {
    type Err = UnknownWindowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|w| w.as_str() == s)
            .ok_or_else(|| UnknownWindowError {
                requested: s.to_string(),
                valid_options: Self::valid_names(),
            })
    }
}
