use crate::{
    equation::{Config, Method},
    scan::ScanConfig,
};

/// How a report chooses its starting data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum StartSelection {
    /// Always solve from the problem's own starts.
    Given,

    /// Use the scanned intervals when there are more of them than the
    /// problem lists brackets: each interval becomes a bracket and a secant
    /// pair, and its midpoint a Newton guess.
    #[default]
    PreferDetected,
}

/// Everything a [`ProblemReport`](super::ProblemReport) needs besides the problem.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ReportConfig {
    pub bisection: Config,
    pub newton: Config,
    pub secant: Config,
    pub scan: ScanConfig,
    pub selection: StartSelection,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            bisection: Config::bisection(),
            newton: Config::newton(),
            secant: Config::secant(),
            scan: ScanConfig::default(),
            selection: StartSelection::default(),
        }
    }
}

impl ReportConfig {
    /// Returns the solver config for `method`.
    #[must_use]
    pub fn solver(&self, method: Method) -> &Config {
        match method {
            Method::Bisection => &self.bisection,
            Method::Newton => &self.newton,
            Method::Secant => &self.secant,
        }
    }
}
