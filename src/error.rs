use thiserror::Error;

/// Error types for `GrowVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum GrowVecError {
    /// Index is beyond the current vector length
    #[error("Index out of range: index {index} is beyond vector length {length}")]
    OutOfRange {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// The allocator could not provide storage for the requested capacity
    #[error("Allocation failure: no storage for a capacity of {capacity} elements")]
    AllocationFailure {
        /// Element capacity that was requested
        capacity: usize,
    },
}
