/// Creation- and close-time input validation failures.
///
/// These block the triggering operation and are meant to surface inline;
/// they never leave partial state behind.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("requester name must not be empty")]
    EmptyName,

    #[error("requester email '{email}' is not a valid address")]
    BadEmail { email: String },

    #[error("close rationale must not be empty")]
    EmptyRationale,

    #[error("status '{status}' must be set through the close operation")]
    CloseRequired { status: String },

    #[error("SLA window for {kind} must be at least one day")]
    NonPositiveSla { kind: String },

    #[error("due date {due_at} precedes submission time {submitted_at}")]
    DueBeforeSubmitted { submitted_at: String, due_at: String },
}
