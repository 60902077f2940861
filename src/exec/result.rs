// src/exec/result.rs

/// Message reported when sbt exits with status 0.
pub const SUCCESS: &str = "Build success";

/// Message reported for every other outcome.
pub const FAILURE: &str = "Build failure";

/// Final outcome of one task execution.
///
/// A `Failure` without a cause means sbt ran and reported a failed build; a
/// cause means the process could not be run or supervised at all.
#[derive(Debug)]
pub enum ExecutionResult {
    Success {
        message: String,
    },
    Failure {
        message: String,
        cause: Option<anyhow::Error>,
    },
}

impl ExecutionResult {
    pub fn success(message: impl Into<String>) -> Self {
        ExecutionResult::Success {
            message: message.into(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        ExecutionResult::Failure {
            message: message.into(),
            cause: None,
        }
    }

    pub fn failure_with_cause(message: impl Into<String>, cause: anyhow::Error) -> Self {
        ExecutionResult::Failure {
            message: message.into(),
            cause: Some(cause),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ExecutionResult::Success { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            ExecutionResult::Success { message } | ExecutionResult::Failure { message, .. } => {
                message
            }
        }
    }

    pub fn cause(&self) -> Option<&anyhow::Error> {
        match self {
            ExecutionResult::Failure { cause, .. } => cause.as_ref(),
            ExecutionResult::Success { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_follow_the_variant() {
        let ok = ExecutionResult::success(SUCCESS);
        assert!(ok.is_success());
        assert_eq!(ok.message(), "Build success");
        assert!(ok.cause().is_none());

        let failed = ExecutionResult::failure(FAILURE);
        assert!(!failed.is_success());
        assert!(failed.cause().is_none());

        let crashed = ExecutionResult::failure_with_cause(FAILURE, anyhow::anyhow!("boom"));
        assert_eq!(crashed.message(), "Build failure");
        assert_eq!(crashed.cause().map(|e| e.to_string()).as_deref(), Some("boom"));
    }
}
