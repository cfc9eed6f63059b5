use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Error;

/// A naming convention used for variables, functions, types, keys and other identifiers.
///
/// The variants are declared in a fixed order, available as [`Convention::ALL`]. Where more than
/// one convention accepts a name, detection and inference both settle on the earliest variant in
/// this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Convention {
    /// Examples: `user`, `camelCase`, `greatestCommonFactor`
    CamelCase,
    /// Examples: `user`, `snake_case`, `greatest_common_factor`
    SnakeCase,
    /// Examples: `USER`, `SCREAMING_SNAKE_CASE`, `GREATEST_COMMON_FACTOR`
    ScreamingSnakeCase,
    /// Examples: `User`, `PascalCase`, `GreatestCommonFactor`
    PascalCase,
    /// Examples: `user`, `kebab-case`, `greatest-common-factor`
    KebabCase,
}

static CAMEL_CASE: Lazy<Regex> = Lazy::new(|| compile(Convention::CamelCase));
static SNAKE_CASE: Lazy<Regex> = Lazy::new(|| compile(Convention::SnakeCase));
static SCREAMING_SNAKE_CASE: Lazy<Regex> =
    Lazy::new(|| compile(Convention::ScreamingSnakeCase));
static PASCAL_CASE: Lazy<Regex> = Lazy::new(|| compile(Convention::PascalCase));
static KEBAB_CASE: Lazy<Regex> = Lazy::new(|| compile(Convention::KebabCase));

fn compile(convention: Convention) -> Regex {
    Regex::new(convention.pattern()).expect("convention patterns are valid regular expressions")
}

/// Normalized labels accepted by [`Convention::parse`].
const ALIASES: &[(&str, Convention)] = &[
    ("camel", Convention::CamelCase),
    ("camelcase", Convention::CamelCase),
    ("pascal", Convention::PascalCase),
    ("pascalcase", Convention::PascalCase),
    ("snake", Convention::SnakeCase),
    ("snakecase", Convention::SnakeCase),
    ("screaming", Convention::ScreamingSnakeCase),
    ("screamingsnake", Convention::ScreamingSnakeCase),
    ("screamingsnakecase", Convention::ScreamingSnakeCase),
    ("kebab", Convention::KebabCase),
    ("kebabcase", Convention::KebabCase),
];

impl Convention {
    /// All conventions, in the order used to break ties.
    pub const ALL: [Convention; 5] = [
        Convention::CamelCase,
        Convention::SnakeCase,
        Convention::ScreamingSnakeCase,
        Convention::PascalCase,
        Convention::KebabCase,
    ];

    /// The textual identifier of this convention, written in the convention itself.
    pub fn as_str(self) -> &'static str {
        match self {
            Convention::CamelCase => "camelCase",
            Convention::SnakeCase => "snake_case",
            Convention::ScreamingSnakeCase => "SCREAMING_SNAKE_CASE",
            Convention::PascalCase => "PascalCase",
            Convention::KebabCase => "kebab-case",
        }
    }

    /// The anchored regular expression matched by names following this convention.
    pub fn pattern(self) -> &'static str {
        match self {
            Convention::CamelCase => r"^[a-z]+([A-Z][a-z0-9]*)*$",
            Convention::SnakeCase => r"^[a-z]+(_[a-z0-9]+)*$",
            Convention::ScreamingSnakeCase => r"^[A-Z]+(_[A-Z0-9]+)*$",
            Convention::PascalCase => r"^([A-Z][a-z0-9]+)+$",
            Convention::KebabCase => r"^[a-z]+(-[a-z0-9]+)*$",
        }
    }

    /// The compiled form of [`pattern`](Convention::pattern).
    pub fn regex(self) -> &'static Regex {
        match self {
            Convention::CamelCase => &CAMEL_CASE,
            Convention::SnakeCase => &SNAKE_CASE,
            Convention::ScreamingSnakeCase => &SCREAMING_SNAKE_CASE,
            Convention::PascalCase => &PASCAL_CASE,
            Convention::KebabCase => &KEBAB_CASE,
        }
    }

    /// Returns true if `name` follows this convention.
    ///
    /// # Examples
    ///
    /// ```
    /// use namecase::Convention;
    ///
    /// assert!(Convention::SnakeCase.validate("greatest_common_factor"));
    /// assert!(!Convention::SnakeCase.validate("greatest_common_factor_"));
    /// ```
    pub fn validate(self, name: &str) -> bool {
        self.regex().is_match(name)
    }

    /// Parses the name of a convention, such as `camelCase`, `snake` or `SCREAMING SNAKE CASE`.
    ///
    /// Case, punctuation, whitespace and any other characters outside `a-z` are ignored, so
    /// `" PaS-CaL "` and `"[pas][cal][case]"` both name [`Convention::PascalCase`].
    ///
    /// # Errors
    ///
    /// Returns an error if the label does not name a known convention.
    pub fn parse(label: &str) -> Result<Self, Error> {
        let normalized: String = label
            .chars()
            .map(|ch| ch.to_ascii_lowercase())
            .filter(|ch| ch.is_ascii_lowercase())
            .collect();

        ALIASES
            .iter()
            .find(|(alias, _)| *alias == normalized)
            .map(|&(_, convention)| convention)
            .ok_or_else(|| Error::unknown_convention_name(label))
    }
}

impl FromStr for Convention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Convention::parse(s)
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[test]
fn identifiers_follow_their_own_convention() {
    for convention in Convention::ALL {
        let identifier = convention.as_str();
        assert_eq!(Convention::parse(identifier).unwrap(), convention);
        assert!(convention.validate(identifier), "{}", identifier);
    }
}
