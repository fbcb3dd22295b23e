use std::error::Error;
use std::fmt::{self, Display, Formatter};

/// The error signalled when an operation that needs at least one element is invoked
/// on the empty list.
#[derive(Debug, PartialEq, Eq)]
pub struct EmptyList;

impl Display for EmptyList {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Operation requires a non-empty list!")
    }
}

impl Error for EmptyList {}
