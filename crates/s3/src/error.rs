//! SDK error classification
//!
//! Maps aws-sdk-s3 errors onto ss-core error kinds while keeping the
//! provider's own message for display.

use aws_sdk_s3::error::{DisplayErrorContext, ProvideErrorMetadata, SdkError};
use ss_core::Error;

/// Convert an SDK error into an ss-core error
pub fn map_sdk_error<E, R>(err: SdkError<E, R>) -> Error
where
    E: ProvideErrorMetadata + std::error::Error + Send + Sync + 'static,
    R: std::fmt::Debug + Send + Sync + 'static,
{
    if matches!(err, SdkError::DispatchFailure(_) | SdkError::TimeoutError(_)) {
        return Error::Network(DisplayErrorContext(&err).to_string());
    }

    match err.as_service_error() {
        Some(service) => {
            let code = service.code();
            let message = match (code, service.message()) {
                (Some(code), Some(message)) => format!("{code}: {message}"),
                (Some(code), None) => code.to_string(),
                (None, Some(message)) => message.to_string(),
                (None, None) => DisplayErrorContext(&err).to_string(),
            };
            classify(code, message)
        }
        None => Error::General(DisplayErrorContext(&err).to_string()),
    }
}

/// Pick an error kind from an S3 error code
pub fn classify(code: Option<&str>, message: String) -> Error {
    match code {
        Some("NoSuchBucket" | "NoSuchKey" | "NotFound") => Error::NotFound(message),
        Some(
            "AccessDenied" | "InvalidAccessKeyId" | "SignatureDoesNotMatch" | "ExpiredToken"
            | "InvalidToken",
        ) => Error::Auth(message),
        Some("BucketAlreadyExists" | "BucketAlreadyOwnedByYou" | "BucketNotEmpty") => {
            Error::Conflict(message)
        }
        Some("SlowDown" | "ServiceUnavailable" | "RequestTimeout" | "InternalError") => {
            Error::Network(message)
        }
        _ => Error::General(message),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_not_found() {
        let err = classify(Some("NoSuchBucket"), "NoSuchBucket: gone".into());
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(err.exit_code(), 5);

        assert!(matches!(
            classify(Some("NoSuchKey"), String::new()),
            Error::NotFound(_)
        ));
    }

    #[test]
    fn test_classify_auth() {
        for code in ["AccessDenied", "InvalidAccessKeyId", "SignatureDoesNotMatch"] {
            assert!(matches!(classify(Some(code), code.into()), Error::Auth(_)));
        }
    }

    #[test]
    fn test_classify_conflict() {
        let err = classify(Some("BucketAlreadyOwnedByYou"), "owned".into());
        assert!(matches!(err, Error::Conflict(_)));
        assert!(matches!(
            classify(Some("BucketNotEmpty"), "not empty".into()),
            Error::Conflict(_)
        ));
    }

    #[test]
    fn test_classify_keeps_message() {
        let err = classify(
            Some("InvalidLocationConstraint"),
            "InvalidLocationConstraint: The specified location-constraint is not valid".into(),
        );
        assert!(matches!(err, Error::General(_)));
        assert_eq!(
            err.to_string(),
            "InvalidLocationConstraint: The specified location-constraint is not valid"
        );
    }

    #[test]
    fn test_classify_unknown_code() {
        assert!(matches!(classify(None, "boom".into()), Error::General(_)));
        assert!(matches!(
            classify(Some("SlowDown"), "slow".into()),
            Error::Network(_)
        ));
    }
}
