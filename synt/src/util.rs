use synt_core::SyntError;

/// Collapse the errors of a multi-source retrieval into a single outcome.
///
/// Rules:
/// - No errors (every source answered empty or not-found) → `NotFound(what)`.
/// - Every attempted source timed out → `AllSourcesTimedOut(capability)`.
/// - Else → `AllSourcesFailed(errors)`.
pub fn collapse_errors(
    capability: &str,
    attempted: usize,
    errors: Vec<SyntError>,
    not_found_what: String,
) -> SyntError {
    if errors.is_empty() {
        return SyntError::not_found(not_found_what);
    }
    if errors.len() == attempted
        && errors
            .iter()
            .all(|e| matches!(e, SyntError::SourceTimeout { .. }))
    {
        return SyntError::AllSourcesTimedOut {
            capability: capability.to_string(),
        };
    }
    SyntError::AllSourcesFailed(errors)
}
