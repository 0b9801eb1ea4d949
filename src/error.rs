//! Unified error types for the shuffler.

use std::fmt;

// ---------------------------------------------------------------------------
// PartitionError
// ---------------------------------------------------------------------------

/// Contract violations when the partitioner is called with unusable input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionError {
    /// Fewer than two names were supplied.
    TooFewNames { count: usize },
    /// Fewer than two groups were requested.
    TooFewGroups { groups: usize },
    /// More groups were requested than there are names to fill them.
    TooManyGroups { groups: usize, names: usize },
}

impl fmt::Display for PartitionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewNames { count } => {
                write!(f, "invalid argument: need at least 2 names, got {count}")
            }
            Self::TooFewGroups { groups } => {
                write!(f, "invalid argument: need at least 2 groups, got {groups}")
            }
            Self::TooManyGroups { groups, names } => write!(
                f,
                "invalid argument: {groups} groups requested for only {names} names"
            ),
        }
    }
}

impl std::error::Error for PartitionError {}

// ---------------------------------------------------------------------------
// AppError
// ---------------------------------------------------------------------------

/// Fatal errors that abort an interactive run.
#[derive(Debug)]
pub enum AppError {
    /// Terminal read/write failure.
    Io(std::io::Error),
    /// The core rejected its input.
    Partition(PartitionError),
    /// Standard input ended before a prompt was answered.
    InputClosed,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "io: {e}"),
            Self::Partition(e) => write!(f, "partition: {e}"),
            Self::InputClosed => write!(f, "input closed before all questions were answered"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Partition(e) => Some(e),
            Self::InputClosed => None,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<PartitionError> for AppError {
    fn from(e: PartitionError) -> Self {
        Self::Partition(e)
    }
}
