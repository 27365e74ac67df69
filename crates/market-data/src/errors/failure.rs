/// Classification for retry policy.
///
/// Used to determine how the history service responds to a provider error.
///
/// # Behavior Summary
///
/// | Class | Retry Once? | Ends As |
/// |-------|-------------|---------|
/// | `Terminal` | No | empty series + warning |
/// | `Transient` | Yes | empty series + warning if the retry also fails |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FailureKind {
    /// Never retry - bad symbol, empty period, or a response shape that
    /// cannot be normalized. The request is fundamentally unanswerable and
    /// retrying won't help.
    Terminal,

    /// The provider hiccuped (network failure, timeout, upstream error).
    /// One bounded retry is attempted before the fetch degrades to an
    /// empty series. There is no provider chain to fail over to, so the
    /// retry targets the same provider.
    Transient,
}
