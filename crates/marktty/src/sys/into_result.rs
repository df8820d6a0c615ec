use std::io::Result;

/// Trait to determine whether a status code is an error.
pub(crate) trait IsError {
    /// Determine if this value is an error.
    fn is_error(&self) -> bool;
}

macro_rules! is_error {
    ($source:ty) => {
        impl IsError for $source {
            #[inline]
            fn is_error(&self) -> bool {
                *self == -1
            }
        }
    };
}

is_error!(i32);
is_error!(isize);

/// Trait to convert a status code into a Rust result.
///
/// Unix system calls signal failure by returning -1 and setting `errno`,
/// which this trait turns into the last OS error.
pub(crate) trait IntoResult {
    /// The target type.
    type Target;

    /// Convert this status code into a Rust result.
    fn into_result(self) -> Result<Self::Target>;
}

macro_rules! into_result {
    ($source:ty, $target:ty) => {
        impl IntoResult for $source {
            type Target = $target;

            fn into_result(self) -> Result<Self::Target> {
                if self.is_error() {
                    Err(std::io::Error::last_os_error())
                } else {
                    Ok(self as Self::Target)
                }
            }
        }
    };
}

into_result!(i32, u32);
into_result!(isize, usize);

#[cfg(test)]
mod test {
    use super::IntoResult;

    #[test]
    fn test_into_result() {
        assert_eq!(0_i32.into_result().ok(), Some(0_u32));
        assert_eq!(42_isize.into_result().ok(), Some(42_usize));
        assert!((-1_i32).into_result().is_err());
        assert!((-1_isize).into_result().is_err());
    }
}
