use std::fmt::{Display, Formatter};

use cosmwasm_std::StdError;
use error_stack::{report, Context, Report};
use thiserror::Error;

use crate::loggable::LoggableError;

/// The top-level error type contract entry points return to the cosmwasm runtime.
/// The runtime only surfaces a string rendering, so the underlying report is
/// carried along for callers (and tests) that need to inspect the failure chain.
#[derive(Debug)]
pub struct ContractError {
    pub report: Report<Error>,
}

#[derive(Error, Debug)]
#[error("contract error")]
pub struct Error;

impl Display for ContractError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", LoggableError::from(&self.report))
    }
}

impl std::error::Error for ContractError {}

impl From<StdError> for ContractError {
    fn from(err: StdError) -> Self {
        ContractError {
            report: report!(err).change_context(Error),
        }
    }
}

impl<T> From<Report<T>> for ContractError
where
    T: Context,
{
    fn from(report: Report<T>) -> Self {
        ContractError {
            report: report.change_context(Error),
        }
    }
}

/// Checks that a report contains the given error variant anywhere in its frame stack.
#[macro_export]
macro_rules! err_contains {
    ($report:expr, $error_type:ty, $pattern:pat $(if $guard:expr)? $(,)?) => {
        matches!($report.downcast_ref::<$error_type>(), Some($pattern) $(if $guard)?)
    };
}

/// Asserts that a result is an error whose report contains the given error variant.
/// Accepts results carrying a [`ContractError`], a `Report`, or anything else
/// convertible into [`ContractError`].
#[macro_export]
macro_rules! assert_err_contains {
    ($expression:expr, $error_type:ty, $pattern:pat $(if $guard:expr)? $(,)?) => {
        match $expression {
            Ok(_) => panic!("expected an error, but the call succeeded"),
            Err(err) => {
                let err = $crate::error::ContractError::from(err);
                assert!(
                    $crate::err_contains!(err.report, $error_type, $pattern $(if $guard)?),
                    "error report does not contain the expected variant: {:?}",
                    err.report
                );
            }
        }
    };
}
