use thiserror::Error;

/// Everything that can go wrong while configuring or laying out a tree.
///
/// All variants are configuration or programmer errors. Layout itself is
/// deterministic, so a failed pass is fixed by correcting the input rather
/// than by retrying.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// A padding side or gap direction was negative or not finite.
    #[error("invalid spacing: {field} = {value} (must be a finite value >= 0)")]
    InvalidSpacing { field: &'static str, value: f32 },

    /// A direction / position / alignment tag that is not recognised.
    #[error("unknown {kind} `{tag}`")]
    UnknownStrategy { kind: &'static str, tag: String },

    #[error("child index {index} out of range (container has {len} children)")]
    IndexOutOfRange { index: usize, len: usize },

    /// Sibling identities must be unique within one parent.
    #[error("container `{parent}` already has a child named `{name}`")]
    DuplicateIdentity { parent: String, name: String },

    #[error("no container at path `{0}`")]
    UnknownPath(String),

    #[error("invalid layout description: {0}")]
    Description(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, LayoutError>;
