use std::fmt;

/// A path that cannot be tessellated.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum TessellateError {
    /// The path has no points.
    EmptyPath,
    /// The point at `index` has a NaN or infinite coordinate.
    NonFinitePoint { index: usize },
}

impl fmt::Display for TessellateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TessellateError::EmptyPath => write!(f, "cannot tessellate an empty path"),
            TessellateError::NonFinitePoint { index } => {
                write!(f, "path point {index} has a non-finite coordinate")
            }
        }
    }
}

impl std::error::Error for TessellateError {}
