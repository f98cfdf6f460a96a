//! Container errors.

use derive_more::{Display, Error};

/// Why a bounded container refused an operation.
///
/// Both cases are expected during normal play. The controller turns them into
/// outcomes; they are never fatal.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerError {
    /// Removal attempted on a container holding nothing.
    #[display("container is empty")]
    Empty,
    /// Insertion attempted on a container at capacity.
    #[display("container is full")]
    Full,
}
