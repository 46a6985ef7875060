/// What a cancel request did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The operator was still composing; the session is idle again.
    Abandoned,
    /// A dispatch is running and has been asked to stop. The session turns
    /// idle once the dispatcher notices and finalizes.
    Signalled,
}
