//! Wire-code bridge for the cross-process hand-off
//!
//! The host app answers the delivery call with a fixed string code per
//! rejection kind. Codes the validator also produces map straight back onto
//! [`ValidationError`]; two codes exist only on the delivery side, and
//! anything unrecognized is re-raised unchanged rather than swallowed.

use crate::models::ValidationError;
use thiserror::Error;

pub const FILE_NOT_FOUND: &str = "FILE_NOT_FOUND";
pub const NUM_OUTSIDE_ALLOWABLE_RANGE: &str = "NUM_OUTSIDE_ALLOWABLE_RANGE";
pub const UNSUPPORTED_IMAGE_FORMAT: &str = "UNSUPPORTED_IMAGE_FORMAT";
pub const IMAGE_TOO_BIG: &str = "IMAGE_TOO_BIG";
pub const INCORRECT_IMAGE_SIZE: &str = "INCORRECT_IMAGE_SIZE";
pub const ANIMATED_IMAGES_NOT_SUPPORTED: &str = "ANIMATED_IMAGES_NOT_SUPPORTED";
pub const TOO_MANY_EMOJIS: &str = "TOO_MANY_EMOJIS";
pub const EMPTY_STRING: &str = "EMPTY_STRING";
pub const STRING_TOO_LONG: &str = "STRING_TOO_LONG";
pub const ALREADY_ADDED: &str = "ALREADY_ADDED";
pub const CANCELLED: &str = "CANCELLED";

/// Typed outcome of a failed delivery call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DeliveryError {
    /// The host app rejected the pack for a reason the validator models.
    #[error(transparent)]
    Validation(ValidationError),

    /// The pack is already installed in the host app.
    #[error("{0}")]
    AlreadyAdded(String),

    /// The user backed out of the host app's confirmation dialog.
    #[error("{0}")]
    Cancelled(String),

    /// A code this crate does not know; carried through unchanged.
    #[error("{code}: {message}")]
    Unrecognized { code: String, message: String },
}

impl DeliveryError {
    /// Map a (code, message) pair coming back from the host app.
    pub fn from_code(code: &str, message: impl Into<String>) -> Self {
        let message = message.into();
        match code {
            FILE_NOT_FOUND => Self::Validation(ValidationError::FileNotFound(message)),
            NUM_OUTSIDE_ALLOWABLE_RANGE => {
                Self::Validation(ValidationError::OutsideAllowableRange(message))
            }
            UNSUPPORTED_IMAGE_FORMAT => {
                Self::Validation(ValidationError::UnsupportedImageFormat(message))
            }
            IMAGE_TOO_BIG => Self::Validation(ValidationError::ImageTooBig(message)),
            INCORRECT_IMAGE_SIZE => {
                Self::Validation(ValidationError::IncorrectImageSize(message))
            }
            ANIMATED_IMAGES_NOT_SUPPORTED => {
                Self::Validation(ValidationError::AnimatedImagesNotSupported(message))
            }
            TOO_MANY_EMOJIS => Self::Validation(ValidationError::TooManyEmojis(message)),
            EMPTY_STRING => Self::Validation(ValidationError::EmptyString(message)),
            STRING_TOO_LONG => Self::Validation(ValidationError::StringTooLong(message)),
            ALREADY_ADDED => Self::AlreadyAdded(message),
            CANCELLED => Self::Cancelled(message),
            other => Self::Unrecognized {
                code: other.to_string(),
                message,
            },
        }
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Validation(e) => e.code(),
            Self::AlreadyAdded(_) => ALREADY_ADDED,
            Self::Cancelled(_) => CANCELLED,
            Self::Unrecognized { code, .. } => code,
        }
    }
}
