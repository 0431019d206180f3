//! Macro for implementing Display and FromStr for status enums
//!
//! Status values cross the host boundary as lowercase strings (`"processing"`,
//! `"on"`), so every status enum gets the same pair of conversions.
//!
//! # Example
//!
//! ```rust
//! use usersync_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum PageState {
//!     Processing,
//!     Finished,
//! }
//!
//! impl_domain_status_conversions!(PageState {
//!     Processing => "processing",
//!     Finished => "finished",
//! });
//!
//! assert_eq!(PageState::Finished.to_string(), "finished");
//! ```

/// Implements Display and FromStr traits for status enums
///
/// - Display writes the mapped lowercase string
/// - FromStr parses case-insensitively and names the enum in its error
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => write!(f, $str),)+
                }
            }
        }

        impl std::str::FromStr for $enum_name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_lowercase().as_str() {
                    $($str => Ok(Self::$variant),)+
                    _ => Err(format!("Invalid {}: {}", stringify!($enum_name), s)),
                }
            }
        }
    };
}
