/// Unwraps the error of a `Result`, panicking with the `Ok` value otherwise.
///
/// Extra arguments are formatted into the panic message.
#[macro_export]
macro_rules! assert_err {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Err(err) => err,
            Ok(actual) => {
                #[allow(unused_mut)]
                let mut msg = format!("expected `Err`; actual=Ok({:?})", actual);
                $( msg = format!("{}; {}", msg, format_args!($($t)*)); )?
                panic!("{}", msg);
            }
        }
    };
}

/// Unwraps the value of a `Result`, panicking with the error otherwise.
///
/// Extra arguments are formatted into the panic message.
#[macro_export]
macro_rules! assert_ok {
    ($e:expr $(, $($t:tt)* )?) => {
        match $e {
            Ok(value) => value,
            Err(err) => {
                #[allow(unused_mut)]
                let mut msg = format!("expected `Ok`; actual=Err({})", err);
                $( msg = format!("{}; {}", msg, format_args!($($t)*)); )?
                panic!("{}", msg);
            }
        }
    };
}
