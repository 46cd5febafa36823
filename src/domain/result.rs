//! Result type alias for Artboard

use super::errors::ArtboardError;

/// Result type alias for Artboard operations
///
/// # Examples
///
/// ```
/// use artboard::domain::result::Result;
/// use artboard::domain::errors::ArtboardError;
///
/// fn example_function() -> Result<String> {
///     Ok("success".to_string())
/// }
///
/// fn failing_function() -> Result<()> {
///     Err(ArtboardError::Validation("Invalid input".to_string()))
/// }
/// ```
pub type Result<T> = std::result::Result<T, ArtboardError>;
