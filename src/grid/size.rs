//! Standard grid size spec parsing (`4W x 2H`).

use regex::Regex;
use std::sync::OnceLock;

use crate::config::DEFAULT_GRID_DIVISIONS;

static ACROSS_RE: OnceLock<Regex> = OnceLock::new();
static DOWN_RE: OnceLock<Regex> = OnceLock::new();

fn across_re() -> &'static Regex {
    ACROSS_RE.get_or_init(|| Regex::new(r"(?i)(\d+)w").expect("invalid regex pattern"))
}

fn down_re() -> &'static Regex {
    DOWN_RE.get_or_init(|| Regex::new(r"(?i)(\d+)h").expect("invalid regex pattern"))
}

/// Grid divisions: lites across the width and down the height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    /// Lites across the width (`W`).
    pub across: u32,
    /// Lites down the height (`H`).
    pub down: u32,
}

impl Default for GridSize {
    fn default() -> Self {
        Self {
            across: DEFAULT_GRID_DIVISIONS,
            down: DEFAULT_GRID_DIVISIONS,
        }
    }
}

impl GridSize {
    /// Parse a free-form size spec. Each axis is matched independently and
    /// falls back to the default when absent.
    pub fn parse(spec: Option<&str>) -> Self {
        let Some(spec) = spec else {
            return Self::default();
        };
        Self {
            across: capture(across_re(), spec).unwrap_or(DEFAULT_GRID_DIVISIONS),
            down: capture(down_re(), spec).unwrap_or(DEFAULT_GRID_DIVISIONS),
        }
    }

    /// Whether the spec names both axes explicitly.
    pub fn is_explicit(spec: &str) -> bool {
        across_re().is_match(spec) && down_re().is_match(spec)
    }
}

fn capture(re: &Regex, spec: &str) -> Option<u32> {
    re.captures(spec)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_axes() {
        assert_eq!(GridSize::parse(Some("4w x 2h")), GridSize { across: 4, down: 2 });
        assert_eq!(GridSize::parse(Some("4W X 2H")), GridSize { across: 4, down: 2 });
        assert_eq!(GridSize::parse(Some("  4W  x  2H ")), GridSize { across: 4, down: 2 });
    }

    #[test]
    fn test_axis_letter_must_follow_digits() {
        assert_eq!(GridSize::parse(Some("4w x 2 h")), GridSize { across: 4, down: 3 });
        assert_eq!(GridSize::parse(Some("4 W x 2H")), GridSize { across: 3, down: 2 });
        assert!(!GridSize::is_explicit("4 w x 2 h"));
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(GridSize::parse(None), GridSize::default());
        assert_eq!(GridSize::parse(Some("")), GridSize { across: 3, down: 3 });
        assert_eq!(GridSize::parse(Some("6w")), GridSize { across: 6, down: 3 });
        assert_eq!(GridSize::parse(Some("2h")), GridSize { across: 3, down: 2 });
    }

    #[test]
    fn test_parse_order_independent() {
        assert_eq!(GridSize::parse(Some("2h x 5w")), GridSize { across: 5, down: 2 });
    }

    #[test]
    fn test_parse_overflow_falls_back() {
        let size = GridSize::parse(Some("99999999999w x 2h"));
        assert_eq!(size, GridSize { across: 3, down: 2 });
    }

    #[test]
    fn test_is_explicit() {
        assert!(GridSize::is_explicit("3w x 3h"));
        assert!(!GridSize::is_explicit("3 lites"));
    }
}
