/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */

use std::fmt;

use aws_smithy_runtime_api::client::result::SdkError;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;

/// A boxed error that is `Send` and `Sync`.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Errors returned by this library
///
/// NOTE: Use [`aws_smithy_types::error::display::DisplayErrorContext`] or similar to display
/// the entire error cause/source chain.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: BoxError,
}

/// General categories of operation errors.
#[derive(Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Operation input validation issues
    InputInvalid,

    /// The named repository, branch, commit, document, folder, or user does not exist
    NotFound,

    /// The service rejected the call due to request rate limits
    Throttled,

    /// The service endpoint could not be reached (DNS resolution or connection failure)
    EndpointUnreachable,

    /// Any other error returned by the service
    Service,

    /// Some kind of internal runtime issue (e.g. task failure, poisoned mutex, etc)
    RuntimeError,
}

impl Error {
    /// Creates a new [`Error`] from a known kind of error as well as an arbitrary error source.
    pub fn new<E>(kind: ErrorKind, err: E) -> Error
    where
        E: Into<BoxError>,
    {
        Error {
            kind,
            source: err.into(),
        }
    }

    /// Returns the corresponding [`ErrorKind`] for this error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::InputInvalid => write!(f, "invalid input"),
            ErrorKind::NotFound => write!(f, "resource not found"),
            ErrorKind::Throttled => write!(f, "request throttled by the service"),
            ErrorKind::EndpointUnreachable => {
                write!(f, "unable to reach the service endpoint")
            }
            ErrorKind::Service => write!(f, "service error"),
            ErrorKind::RuntimeError => write!(f, "runtime error"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.source.as_ref())
    }
}

impl From<tokio::task::JoinError> for Error {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::new(ErrorKind::RuntimeError, value)
    }
}

impl From<aws_smithy_types::error::operation::BuildError> for Error {
    fn from(value: aws_smithy_types::error::operation::BuildError) -> Self {
        Self::new(ErrorKind::InputInvalid, value)
    }
}

pub(crate) fn invalid_input<E>(err: E) -> Error
where
    E: Into<BoxError>,
{
    Error::new(ErrorKind::InputInvalid, err)
}

/// Service error codes that map to [`ErrorKind::NotFound`].
const NOT_FOUND_CODES: &[&str] = &[
    "RepositoryDoesNotExistException",
    "BranchDoesNotExistException",
    "CommitDoesNotExistException",
    "CommitIdDoesNotExistException",
    "PullRequestDoesNotExistException",
    "EntityNotExistsException",
];

impl<E, R> From<SdkError<E, R>> for Error
where
    E: std::error::Error + ProvideErrorMetadata + Send + Sync + 'static,
    R: Send + Sync + fmt::Debug + 'static,
{
    fn from(value: SdkError<E, R>) -> Self {
        let kind = match value.code() {
            Some(code) if NOT_FOUND_CODES.contains(&code) => ErrorKind::NotFound,
            Some("ThrottlingException" | "TooManyRequestsException") => ErrorKind::Throttled,
            _ => match &value {
                // Unwrap the dispatch failure to distinguish "could not resolve or
                // reach the endpoint" from an error the service actually returned.
                SdkError::DispatchFailure(failure) => match failure.as_connector_error() {
                    Some(conn) if conn.is_io() || conn.is_timeout() => {
                        ErrorKind::EndpointUnreachable
                    }
                    _ => ErrorKind::Service,
                },
                _ => ErrorKind::Service,
            },
        };

        Error::new(kind, value)
    }
}

/// A response was missing a payload the service contract guarantees.
pub(crate) fn missing_field(field: &'static str) -> Error {
    Error::new(
        ErrorKind::Service,
        format!("service response missing expected field `{field}`"),
    )
}

#[cfg(test)]
mod tests {
    use aws_sdk_codecommit::operation::get_repository::GetRepositoryError;
    use aws_smithy_mocks::{mock, mock_client};
    use aws_smithy_runtime_api::client::result::{ConnectorError, SdkError};
    use aws_smithy_types::error::ErrorMetadata;

    use super::{Error, ErrorKind};
    use crate::test_util::client_with_codecommit;

    fn generic(code: &str) -> GetRepositoryError {
        GetRepositoryError::generic(ErrorMetadata::builder().code(code).build())
    }

    #[tokio::test]
    async fn test_throttling_code_maps_to_throttled() {
        let rule = mock!(aws_sdk_codecommit::Client::get_repository)
            .then_error(|| generic("ThrottlingException"));
        let client = client_with_codecommit(mock_client!(aws_sdk_codecommit, &[&rule]));

        let err = client
            .get_repository()
            .repository_name("demo")
            .send()
            .await
            .unwrap_err();

        assert_eq!(err.kind(), &ErrorKind::Throttled);
    }

    #[test]
    fn test_too_many_requests_code_maps_to_throttled() {
        let sdk_err: SdkError<GetRepositoryError, ()> =
            SdkError::service_error(generic("TooManyRequestsException"), ());

        assert_eq!(Error::from(sdk_err).kind(), &ErrorKind::Throttled);
    }

    #[test]
    fn test_io_dispatch_failure_maps_to_endpoint_unreachable() {
        let sdk_err: SdkError<GetRepositoryError, ()> =
            SdkError::dispatch_failure(ConnectorError::io("failed to resolve host".into()));

        assert_eq!(
            Error::from(sdk_err).kind(),
            &ErrorKind::EndpointUnreachable
        );
    }

    #[test]
    fn test_timeout_dispatch_failure_maps_to_endpoint_unreachable() {
        let sdk_err: SdkError<GetRepositoryError, ()> =
            SdkError::dispatch_failure(ConnectorError::timeout("connect timed out".into()));

        assert_eq!(
            Error::from(sdk_err).kind(),
            &ErrorKind::EndpointUnreachable
        );
    }

    #[test]
    fn test_other_dispatch_failure_maps_to_service() {
        let sdk_err: SdkError<GetRepositoryError, ()> =
            SdkError::dispatch_failure(ConnectorError::user("request signing failed".into()));

        assert_eq!(Error::from(sdk_err).kind(), &ErrorKind::Service);
    }

    #[test]
    fn test_unrecognized_service_code_maps_to_service() {
        let sdk_err: SdkError<GetRepositoryError, ()> =
            SdkError::service_error(generic("EncryptionKeyAccessDeniedException"), ());

        assert_eq!(Error::from(sdk_err).kind(), &ErrorKind::Service);
    }
}
