use crate::util::error::EmptyList;

pub(crate) trait ResultExtension<T> {
    /// A method similar to [`Result::unwrap`], except that it panics with the message
    /// of the error itself. Backs the panicking twin of each `try_` operation.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;
}

impl<T> ResultExtension<T> for Result<T, EmptyList> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }
}
