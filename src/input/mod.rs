//! Parsing and validation of the two interactive answers.
//!
//! Validation failures are recoverable: their `Display` text is the message
//! shown before the question is asked again.

pub mod ask;

use crate::partition::{MIN_GROUPS, MIN_NAMES};
use crate::tui::text::blank_controls;
use std::fmt;

/// Why an answer was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The names answer held no non-blank entries.
    NoNames,
    /// The names answer held a single entry.
    SingleName,
    /// The group answer was not an integer above zero.
    NotPositive,
    /// More groups than names.
    TooManyGroups { names: usize },
    /// Exactly one group.
    SingleGroup,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoNames => write!(f, "Please enter at least one name"),
            Self::SingleName => write!(f, "Please enter at least two names to shuffle"),
            Self::NotPositive => write!(f, "Please enter a positive number"),
            Self::TooManyGroups { names } => write!(
                f,
                "Number of groups can't be larger than the number of names ({names})"
            ),
            Self::SingleGroup => write!(f, "Please enter at least 2 groups for shuffling"),
        }
    }
}

impl std::error::Error for ValidationError {}

/// Split a comma-separated answer into trimmed, non-empty names.
///
/// Control characters inside a name become spaces.
pub fn parse_names(input: &str) -> Result<Vec<String>, ValidationError> {
    let names: Vec<String> = blank_controls(input)
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();
    match names.len() {
        0 => Err(ValidationError::NoNames),
        n if n < MIN_NAMES => Err(ValidationError::SingleName),
        _ => Ok(names),
    }
}

/// Suggested group count: `min(ceil(n / 3), floor(n / 2))`.
pub fn default_group_count(name_count: usize) -> usize {
    name_count.div_ceil(3).min(name_count / 2)
}

/// Parse the group answer; a blank answer takes `default`.
///
/// The default is validated like any typed answer.
pub fn parse_group_count(
    input: &str,
    name_count: usize,
    default: usize,
) -> Result<usize, ValidationError> {
    let trimmed = input.trim();
    let requested = if trimmed.is_empty() {
        i64::try_from(default).map_err(|_| ValidationError::NotPositive)?
    } else {
        trimmed
            .parse::<i64>()
            .map_err(|_| ValidationError::NotPositive)?
    };
    if requested <= 0 {
        return Err(ValidationError::NotPositive);
    }
    let groups = usize::try_from(requested).map_err(|_| ValidationError::NotPositive)?;
    if groups > name_count {
        return Err(ValidationError::TooManyGroups { names: name_count });
    }
    if groups < MIN_GROUPS {
        return Err(ValidationError::SingleGroup);
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_trimmed_and_blanks_dropped() {
        let names = parse_names("  Ann, Bob ,, ,Cid ").expect("valid");
        assert_eq!(names, vec!["Ann", "Bob", "Cid"]);
    }

    #[test]
    fn control_characters_inside_names_become_spaces() {
        let names = parse_names("Ann\tLee,\u{1b}[1mBo\t").expect("valid");
        assert_eq!(names, vec!["Ann Lee", "[1mBo"]);
        assert_eq!(parse_names("\t,\u{1b}"), Err(ValidationError::NoNames));
    }

    #[test]
    fn duplicate_names_are_kept() {
        let names = parse_names("Sam,Sam").expect("valid");
        assert_eq!(names, vec!["Sam", "Sam"]);
    }

    #[test]
    fn empty_and_single_name_answers_are_rejected() {
        assert_eq!(parse_names(""), Err(ValidationError::NoNames));
        assert_eq!(parse_names(" , ,"), Err(ValidationError::NoNames));
        assert_eq!(parse_names("solo"), Err(ValidationError::SingleName));
        assert_eq!(
            ValidationError::SingleName.to_string(),
            "Please enter at least two names to shuffle"
        );
    }

    #[test]
    fn default_group_count_matches_formula() {
        assert_eq!(default_group_count(2), 1);
        assert_eq!(default_group_count(4), 2);
        assert_eq!(default_group_count(7), 3);
        assert_eq!(default_group_count(9), 3);
        assert_eq!(default_group_count(10), 4);
    }

    #[test]
    fn group_count_accepts_valid_answers() {
        assert_eq!(parse_group_count("3", 7, 3), Ok(3));
        assert_eq!(parse_group_count(" 7 ", 7, 3), Ok(7));
        assert_eq!(parse_group_count("", 7, 3), Ok(3));
    }

    #[test]
    fn group_count_rejections_carry_specific_messages() {
        assert_eq!(
            parse_group_count("abc", 5, 2),
            Err(ValidationError::NotPositive)
        );
        assert_eq!(parse_group_count("0", 5, 2), Err(ValidationError::NotPositive));
        assert_eq!(parse_group_count("-2", 5, 2), Err(ValidationError::NotPositive));
        assert_eq!(
            parse_group_count("6", 5, 2),
            Err(ValidationError::TooManyGroups { names: 5 })
        );
        assert_eq!(parse_group_count("1", 5, 2), Err(ValidationError::SingleGroup));
        assert_eq!(
            ValidationError::SingleGroup.to_string(),
            "Please enter at least 2 groups for shuffling"
        );
        assert_eq!(
            ValidationError::TooManyGroups { names: 5 }.to_string(),
            "Number of groups can't be larger than the number of names (5)"
        );
    }

    #[test]
    fn blank_answer_with_unusable_default_is_rejected() {
        // Two names suggest a single group, which is not allowed.
        let default = default_group_count(2);
        assert_eq!(
            parse_group_count("", 2, default),
            Err(ValidationError::SingleGroup)
        );
    }
}
