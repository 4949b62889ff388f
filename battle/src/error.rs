use thiserror::Error;

/// Errors that abort an automation run
#[derive(Error, Debug)]
pub enum AutomationError {
    #[error("No opponent candidates returned for creature {creature}")]
    EmptyCandidateSet { creature: String },

    #[error("Entry fee payment declined for creature {creature}")]
    PaymentDeclined { creature: String },

    #[error("{call} failed for creature {creature}: {source}")]
    Call {
        call: &'static str,
        creature: String,
        #[source]
        source: anyhow::Error,
    },

    #[error("{call} failed: {source}")]
    AccountCall {
        call: &'static str,
        #[source]
        source: anyhow::Error,
    },
}

impl AutomationError {
    pub(crate) fn call(call: &'static str, creature: &str, source: anyhow::Error) -> Self {
        Self::Call {
            call,
            creature: creature.to_string(),
            source,
        }
    }

    pub(crate) fn account(call: &'static str, source: anyhow::Error) -> Self {
        Self::AccountCall { call, source }
    }
}
