//! Utility macros shared by the client crate.

/// Returns early with `$error` when `$predicate` does not hold.
///
/// Works like `assert!`, but hands back an error instead of panicking,
/// which keeps validation inside functions returning `Result`.
///
/// # Example
///
/// ```ignore
/// ensure!(!host.is_empty(), UrlError::MissingHost);
/// ```
macro_rules! ensure {
    ($predicate:expr, $error:expr) => {
        if !$predicate {
            return Err($error);
        }
    };
}

pub(crate) use ensure;
