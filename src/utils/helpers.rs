//! String checks shared by the validators

use crate::models::ValidationError;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Full-string charset for pack identifiers: letters, digits, _ . , ' - and whitespace
    static ref IDENTIFIER_PATTERN: Regex = Regex::new(
        r"^[A-Za-z0-9_.,'\s-]+$"
    ).unwrap();

    // Same shape as Android's Patterns.EMAIL_ADDRESS
    static ref EMAIL_PATTERN: Regex = Regex::new(
        r"^[A-Za-z0-9+._%\-]{1,256}@[A-Za-z0-9][A-Za-z0-9\-]{0,64}(\.[A-Za-z0-9][A-Za-z0-9\-]{0,25})+$"
    ).unwrap();
}

/// Reject identifiers with characters outside the allowed set, or any `..`.
pub fn check_string_validity(string: &str) -> Result<(), ValidationError> {
    if !IDENTIFIER_PATTERN.is_match(string) {
        return Err(ValidationError::Other(format!(
            "{} contains invalid characters, allowed characters are a to z, A to Z, _ , ' - . and space character",
            string
        )));
    }
    if string.contains("..") {
        return Err(ValidationError::Other(format!("{} cannot contain ..", string)));
    }
    Ok(())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Internal path markers an asset handle may carry in place of separators.
pub const ASSET_DIR_MARKER: &str = "mzn_ad_";
pub const FILES_DIR_MARKER: &str = "mzn_fd_";

/// Rewrite internal path markers back to the platform separator before a
/// file name reaches an error message.
pub fn display_file_name(file_name: &str) -> String {
    let separator = std::path::MAIN_SEPARATOR.to_string();
    file_name
        .replace(ASSET_DIR_MARKER, &separator)
        .replace(FILES_DIR_MARKER, &separator)
}
