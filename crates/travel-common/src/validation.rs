//! Input checks shared by request DTOs and the upload path

use std::borrow::Cow;

use travel_core::DomainError;
use validator::ValidationError;

const PHONE_MIN_LEN: usize = 7;
const PHONE_MAX_LEN: usize = 20;

/// Digits, spaces and `+ - ( )`, 7-20 characters with at least 7 digits
pub fn is_valid_phone(phone: &str) -> bool {
    let phone = phone.trim();
    let len = phone.chars().count();
    if !(PHONE_MIN_LEN..=PHONE_MAX_LEN).contains(&len) {
        return false;
    }
    if !phone
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
    {
        return false;
    }
    phone.chars().filter(char::is_ascii_digit).count() >= PHONE_MIN_LEN
}

/// `validator` adapter for [`is_valid_phone`]
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    if is_valid_phone(phone) {
        Ok(())
    } else {
        Err(ValidationError::new("phone").with_message(Cow::Borrowed("Invalid phone number")))
    }
}

/// Image formats accepted for upload, identified by content rather than name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Jpeg,
    Png,
    Webp,
    Gif,
}

impl ImageKind {
    /// Sniff the format from the leading magic bytes
    pub fn detect(bytes: &[u8]) -> Option<Self> {
        match bytes {
            [0xFF, 0xD8, 0xFF, ..] => Some(Self::Jpeg),
            [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, ..] => Some(Self::Png),
            [b'G', b'I', b'F', b'8', b'7' | b'9', b'a', ..] => Some(Self::Gif),
            [b'R', b'I', b'F', b'F', _, _, _, _, b'W', b'E', b'B', b'P', ..] => Some(Self::Webp),
            _ => None,
        }
    }

    pub fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Webp => "image/webp",
            Self::Gif => "image/gif",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            Self::Jpeg => "jpg",
            Self::Png => "png",
            Self::Webp => "webp",
            Self::Gif => "gif",
        }
    }
}

/// Validate an uploaded image and return its detected format
///
/// Size is checked first, then content. A declared content type, when
/// present, must be an image type; the bytes decide which one.
pub fn inspect_image(
    bytes: &[u8],
    declared: Option<&str>,
    max_bytes: usize,
) -> Result<ImageKind, DomainError> {
    if bytes.is_empty() {
        return Err(DomainError::ValidationError("Uploaded file is empty".to_string()));
    }
    if bytes.len() > max_bytes {
        return Err(DomainError::ImageTooLarge { max_bytes });
    }
    if let Some(declared) = declared {
        if !declared.starts_with("image/") && declared != "application/octet-stream" {
            return Err(DomainError::UnsupportedImageType(declared.to_string()));
        }
    }
    ImageKind::detect(bytes).ok_or_else(|| {
        DomainError::UnsupportedImageType(declared.unwrap_or("unknown").to_string())
    })
}
