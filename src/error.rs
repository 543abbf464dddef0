//! Error types for sink binding.
use thiserror::Error;

/// Returned when a sink is bound to a registry that already holds one.
///
/// The rejected sink is dropped, not handed back. A second bind is a startup
/// misconfiguration and callers should surface it rather than retry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("log sink already bound; bind must be called exactly once during startup")]
pub struct AlreadyBoundError;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn already_bound_display_mentions_single_bind() {
        let msg = AlreadyBoundError.to_string();
        assert!(msg.contains("already bound"));
        assert!(msg.contains("exactly once"));
    }

    #[test]
    fn already_bound_is_std_error() {
        let err: Box<dyn std::error::Error + Send + Sync> = Box::new(AlreadyBoundError);
        assert!(err.source().is_none());
    }
}
