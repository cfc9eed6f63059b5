use std::{fmt, str::FromStr};

use crate::{convert::convert, error::Error, Convention};

/// A name tagged with the naming convention it follows.
///
/// A `Name` is never empty and never starts or ends with whitespace. It is not modified after
/// construction: [`convert_to`](Name::convert_to) returns a new instance.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Name {
    convention: Convention,
    name: String,
}

impl Name {
    /// Creates a new [`Name`] following the given convention.
    ///
    /// The name is not checked against the convention's pattern. Use [`Name::detect`] to find a
    /// convention the name actually follows.
    ///
    /// Leading and trailing whitespace is any Unicode whitespace, including no-break spaces, as
    /// well as the NUL character.
    ///
    /// # Errors
    ///
    /// Returns an error if `name` is empty, or has leading or trailing whitespace.
    pub fn new(convention: Convention, name: impl Into<String>) -> Result<Self, Error> {
        let name = name.into();
        if name.is_empty() || name.trim_matches(is_padding) != name {
            return Err(Error::unprocessable_name(name));
        }

        Ok(Name { convention, name })
    }

    /// Detects the convention followed by `name`.
    ///
    /// Conventions are tried in the order of [`Convention::ALL`], and the first one whose pattern
    /// matches is used. For example, `"user"` is detected as camel case, even though it is also
    /// valid snake case and kebab case.
    ///
    /// # Examples
    ///
    /// ```
    /// use namecase::{Convention, Name};
    ///
    /// let name = Name::detect("greatest_common_factor").unwrap();
    /// assert_eq!(name.convention(), Convention::SnakeCase);
    ///
    /// assert!(Name::detect("dot.com").is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if no convention accepts the name.
    pub fn detect(name: &str) -> Result<Self, Error> {
        Convention::ALL
            .into_iter()
            .find(|convention| convention.validate(name))
            .map(|convention| Name {
                convention,
                name: name.to_owned(),
            })
            .ok_or_else(|| Error::undetermined_convention(name))
    }

    /// The convention this name follows.
    pub fn convention(&self) -> Convention {
        self.convention
    }

    /// The name itself.
    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// Consumes this [`Name`], returning the underlying string.
    pub fn into_string(self) -> String {
        self.name
    }

    /// Converts this name to another convention.
    ///
    /// Converting to the name's own convention returns an identical name. The result is not
    /// validated against the target convention's pattern; a name that does not follow its own
    /// convention produces unspecified output.
    ///
    /// # Examples
    ///
    /// ```
    /// use namecase::{Convention, Name};
    ///
    /// let name = Name::detect("myVarName").unwrap();
    /// assert_eq!(name.convert_to(Convention::KebabCase).as_str(), "my-var-name");
    /// assert_eq!(name.convert_to(Convention::ScreamingSnakeCase).as_str(), "MY_VAR_NAME");
    /// ```
    pub fn convert_to(&self, convention: Convention) -> Name {
        Name {
            convention,
            name: convert(&self.name, self.convention, convention),
        }
    }
}

fn is_padding(ch: char) -> bool {
    ch.is_whitespace() || ch == '\0'
}

impl FromStr for Name {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Name::detect(s)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.name
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.into_string()
    }
}
