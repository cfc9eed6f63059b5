use std::fmt;

use miette::Diagnostic;
use thiserror::Error;

/// An error that can occur when parsing, detecting or inferring naming conventions.
#[derive(Diagnostic, Error)]
#[error(transparent)]
#[diagnostic(transparent)]
pub struct Error {
    kind: Box<ErrorKind>,
}

#[derive(Debug, Diagnostic, Error, PartialEq, Eq)]
pub(crate) enum ErrorKind {
    #[error("unknown convention name: '{name}'")]
    #[diagnostic(help(
        "possible values are 'camel', 'pascal', 'snake', 'screaming' and 'kebab', optionally suffixed with 'case'"
    ))]
    UnknownConventionName { name: String },
    #[error("unable to determine used convention: '{context}'")]
    #[diagnostic(help(
        "every name must consist of ASCII letters and digits separated by '_', '-' or capital letters, and all names in a collection must follow the same convention"
    ))]
    UnableToDetermineUsedConvention { context: String },
    #[error("supplied variable name cannot be processed: '{name}'")]
    #[diagnostic(help("names may not be empty or start or end with whitespace"))]
    UnprocessableVariableName { name: String },
}

impl Error {
    pub(crate) fn from_kind(kind: ErrorKind) -> Self {
        Error {
            kind: Box::new(kind),
        }
    }

    pub(crate) fn unknown_convention_name(name: &str) -> Self {
        Error::from_kind(ErrorKind::UnknownConventionName {
            name: name.to_owned(),
        })
    }

    pub(crate) fn undetermined_convention(context: impl Into<String>) -> Self {
        Error::from_kind(ErrorKind::UnableToDetermineUsedConvention {
            context: context.into(),
        })
    }

    pub(crate) fn unprocessable_name(name: impl Into<String>) -> Self {
        Error::from_kind(ErrorKind::UnprocessableVariableName { name: name.into() })
    }

    #[cfg(test)]
    pub(crate) fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// The input that caused this error.
    ///
    /// This is the supplied convention label, the offending name, or, when a whole collection was
    /// rejected, its names joined by `", "`.
    pub fn input(&self) -> &str {
        match &*self.kind {
            ErrorKind::UnknownConventionName { name }
            | ErrorKind::UnprocessableVariableName { name } => name,
            ErrorKind::UnableToDetermineUsedConvention { context } => context,
        }
    }

    /// Returns true if a convention label did not match any known alias.
    pub fn is_unknown_convention_name(&self) -> bool {
        matches!(&*self.kind, ErrorKind::UnknownConventionName { .. })
    }

    /// Returns true if no single convention could be found for a name or collection of names.
    pub fn is_undetermined_convention(&self) -> bool {
        matches!(
            &*self.kind,
            ErrorKind::UnableToDetermineUsedConvention { .. }
        )
    }

    /// Returns true if a [`Name`](crate::Name) was constructed from an empty or padded string.
    pub fn is_unprocessable_name(&self) -> bool {
        matches!(&*self.kind, ErrorKind::UnprocessableVariableName { .. })
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}

#[test]
fn fmt_debug_unknown_convention_name() {
    let err = Error::unknown_convention_name("crab-case");

    assert!(err.is_unknown_convention_name());
    assert_eq!(err.input(), "crab-case");
    assert_eq!(format!("{:?}", err), "unknown convention name: 'crab-case'");
}

#[test]
fn fmt_debug_undetermined_convention() {
    let err = Error::undetermined_convention("camelCase, PascalCase");

    assert!(err.is_undetermined_convention());
    assert!(!err.is_unprocessable_name());
    assert_eq!(err.input(), "camelCase, PascalCase");
    assert_eq!(
        format!("{:?}", err),
        "unable to determine used convention: 'camelCase, PascalCase'"
    );
}
