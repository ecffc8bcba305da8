use std::fmt;

/// Stages of the startup sequence, in order. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Started,
    BalanceChecked,
    AnalysisAnnounced,
    Idle,
}

impl Stage {
    /// The stage that follows this one. `Idle` is terminal.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Started => Self::BalanceChecked,
            Self::BalanceChecked => Self::AnalysisAnnounced,
            Self::AnalysisAnnounced | Self::Idle => Self::Idle,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Started => "started",
            Self::BalanceChecked => "balance_checked",
            Self::AnalysisAnnounced => "analysis_announced",
            Self::Idle => "idle",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stages_advance_linearly() {
        let mut stage = Stage::Started;
        let mut seen = vec![stage];
        while stage != Stage::Idle {
            stage = stage.next();
            seen.push(stage);
        }
        assert_eq!(
            seen,
            vec![
                Stage::Started,
                Stage::BalanceChecked,
                Stage::AnalysisAnnounced,
                Stage::Idle
            ]
        );
        assert_eq!(Stage::Idle.next(), Stage::Idle);
    }
}
