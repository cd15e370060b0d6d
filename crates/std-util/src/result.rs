/// Unwraps an `Err`, panicking with the `Ok` value otherwise.
///
/// An optional predicate (any `fn(&E) -> bool`, e.g. `Error::is_type_resolution`)
/// is checked against the error before it is returned.
#[macro_export]
macro_rules! assert_err {
    ($e:expr) => {
        match $e {
            Err(e) => e,
            actual => panic!("expected `Err`; actual={:?}", actual),
        }
    };
    ($e:expr, $pred:expr) => {
        match $e {
            Err(e) => {
                assert!(
                    ($pred)(&e),
                    "error did not satisfy `{}`; actual={:?}",
                    stringify!($pred),
                    e
                );
                e
            }
            actual => panic!(
                "expected `Err` satisfying `{}`; actual={:?}",
                stringify!($pred),
                actual
            ),
        }
    };
}

#[macro_export]
macro_rules! assert_ok {
    ($e:expr) => {
        match $e {
            Ok(v) => v,
            Err(e) => panic!("expected `Ok`; error={}", e),
        }
    };
}
