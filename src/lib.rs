//! Detection, validation, conversion and inference of identifier naming conventions.
//!
//! Five conventions are supported, listed by [`Convention`]: `camelCase`, `snake_case`,
//! `SCREAMING_SNAKE_CASE`, `PascalCase` and `kebab-case`.
//!
//! # Examples
//!
//! Detect the convention of a single name, and convert it to another one:
//!
//! ```
//! use namecase::{Convention, Name};
//!
//! let name = Name::detect("intermediate_action_button")?;
//! assert_eq!(name.convention(), Convention::SnakeCase);
//! assert_eq!(name.convert_to(Convention::PascalCase).as_str(), "IntermediateActionButton");
//! # Ok::<(), namecase::Error>(())
//! ```
//!
//! Infer the convention used by the keys of a map:
//!
//! ```
//! use std::collections::BTreeMap;
//!
//! use namecase::Convention;
//!
//! let data = BTreeMap::from([("INCOMING", "math"), ("PI_VALUE", "3.14")]);
//! assert_eq!(Convention::infer_from_data(&data)?, Convention::ScreamingSnakeCase);
//! # Ok::<(), namecase::Error>(())
//! ```
//!
//! Where more than one convention accepts a name, the first one in [`Convention::ALL`] wins. A
//! single lowercase word such as `user` is therefore reported as camel case.
//!
//! ### Error messages
//!
//! [`Error`] implements [`miette::Diagnostic`], so returning a [`miette::Result`] renders errors
//! with an additional hint on how to fix the input.
#![warn(missing_debug_implementations, missing_docs)]
#![deny(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(html_root_url = "https://docs.rs/namecase/0.1.0/")]

mod case;
mod convention;
mod convert;
mod error;
mod infer;
mod name;
#[cfg(test)]
mod tests;

pub use self::convention::Convention;
pub use self::error::Error;
pub use self::name::Name;

/// Returns true if `name` follows `convention`.
///
/// This is equivalent to [`Convention::validate`].
pub fn validate(convention: Convention, name: &str) -> bool {
    convention.validate(name)
}

/// Parses the name of a convention, ignoring case and any characters outside `a-z`.
///
/// This is equivalent to [`Convention::parse`].
///
/// # Errors
///
/// Returns an error if the label does not name a known convention.
pub fn parse_convention_name(label: &str) -> Result<Convention, Error> {
    Convention::parse(label)
}

/// Detects the convention followed by `name`.
///
/// This is equivalent to [`Name::detect`].
///
/// # Errors
///
/// Returns an error if no convention accepts the name.
pub fn detect(name: &str) -> Result<Name, Error> {
    Name::detect(name)
}

/// Converts a name to another convention.
///
/// This is equivalent to [`Name::convert_to`].
pub fn convert_to(name: &Name, convention: Convention) -> Name {
    name.convert_to(convention)
}

/// Infers the convention followed by every name in a collection.
///
/// This is equivalent to [`Convention::infer_from_list`].
///
/// # Errors
///
/// Returns an error if no convention accepts all of the names.
pub fn infer_from_list<I, S>(names: I) -> Result<Convention, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Convention::infer_from_list(names)
}

/// Infers the convention followed by every key of a map, ignoring its values.
///
/// This is equivalent to [`Convention::infer_from_data`].
///
/// # Errors
///
/// Returns an error if no convention accepts all of the keys.
pub fn infer_from_data<I, K, V>(data: I) -> Result<Convention, Error>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
{
    Convention::infer_from_data(data)
}
