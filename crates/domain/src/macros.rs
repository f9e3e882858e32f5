//! Macro for implementing Display and FromStr for string-backed enums
//!
//! Used by the calendar view mode, navigation step and store backend so the
//! CLI, config files and stored values all share one spelling per variant.
//!
//! # Example
//!
//! ```rust
//! use shiftcal_domain::impl_domain_status_conversions;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! pub enum Layout {
//!     Month,
//!     Week,
//! }
//!
//! impl_domain_status_conversions!(Layout {
//!     Month => "month",
//!     Week => "week",
//! });
//!
//! assert_eq!("WEEK".parse::<Layout>().unwrap(), Layout::Week);
//! ```

/// Implements Display and FromStr traits for string-backed enums
///
/// - Display: writes the mapped lowercase string
/// - FromStr: case-insensitive parse, error names the enum
#[macro_export]
macro_rules! impl_domain_status_conversions {
    ($enum_name:ident { $($variant:ident => $str:expr),+ $(,)? }) => {
        impl std::fmt::Display for $enum_name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match self {
                    $(Self::$variant => f.write_str($str),)+
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

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use crate::types::{Step, ViewMode};

    #[test]
    fn test_display_conversion() {
        assert_eq!(ViewMode::Month.to_string(), "month");
        assert_eq!(ViewMode::Week.to_string(), "week");
        assert_eq!(Step::Previous.to_string(), "previous");
    }

    #[test]
    fn test_fromstr_mixed_case() {
        assert_eq!(ViewMode::from_str("Month").unwrap(), ViewMode::Month);
        assert_eq!(ViewMode::from_str("WEEK").unwrap(), ViewMode::Week);
        assert_eq!(Step::from_str("NeXt").unwrap(), Step::Next);
    }

    #[test]
    fn test_fromstr_invalid() {
        let result = ViewMode::from_str("year");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid ViewMode: year"));
        assert!(ViewMode::from_str("").is_err());
    }

    #[test]
    fn test_roundtrip() {
        for mode in [ViewMode::Month, ViewMode::Week] {
            assert_eq!(ViewMode::from_str(&mode.to_string()).unwrap(), mode);
        }
    }
}
