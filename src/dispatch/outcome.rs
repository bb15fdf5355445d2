use std::time::Duration;

/// Terminal result of a job.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum RequestOutcome {
    Success { body: String },
    Failure { message: String },
}

impl RequestOutcome {
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Success { body } => Some(body),
            Self::Failure { .. } => None,
        }
    }

    #[must_use]
    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Self::Success { .. } => None,
            Self::Failure { message } => Some(message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    #[must_use]
    pub fn from_outcomes(outcomes: &[RequestOutcome], elapsed: Duration) -> Self {
        let succeeded = outcomes
            .iter()
            .filter(|outcome| outcome.is_success())
            .count();
        Self {
            total: outcomes.len(),
            succeeded,
            failed: outcomes.len().saturating_sub(succeeded),
            elapsed,
        }
    }
}
