/// Repository as reported by the registry service. The URI is whatever
/// the provider returned on creation; the provider owns the lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryDescriptor {
    pub name: String,
    pub uri: Option<String>,
}

/// Outcome of an ensure call. Provider failures travel as the `Err` arm
/// of the surrounding `Result` so callers branch on outcome rather than
/// on caught error types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnsureOutcome {
    Created(RepositoryDescriptor),
    AlreadyExists,
}
