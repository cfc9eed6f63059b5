use insta::assert_snapshot;

use crate::{
    error::{Error, ErrorKind},
    Convention, Name,
};

#[test]
fn unknown_convention_name() {
    let err = Convention::parse("camilaCase").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::UnknownConventionName {
            name: "camilaCase".to_owned()
        }
    );
    assert_snapshot!(err.to_string(), @"unknown convention name: 'camilaCase'");
}

#[test]
fn undetermined_convention() {
    let err = Name::detect("who?where").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::UnableToDetermineUsedConvention {
            context: "who?where".to_owned()
        }
    );
    assert_snapshot!(err.to_string(), @"unable to determine used convention: 'who?where'");
}

#[test]
fn unprocessable_variable_name() {
    let err = Name::new(Convention::CamelCase, " var ").unwrap_err();
    assert_eq!(
        err.kind(),
        &ErrorKind::UnprocessableVariableName {
            name: " var ".to_owned()
        }
    );
    assert_snapshot!(err.to_string(), @"supplied variable name cannot be processed: ' var '");
}

#[test]
fn undetermined_collection() {
    let err = Convention::infer_from_list(["snake_case", "SNAKE_CASE"]).unwrap_err();
    assert_snapshot!(err.to_string(), @"unable to determine used convention: 'snake_case, SNAKE_CASE'");
}

#[test]
fn diagnostics_have_help() {
    use miette::Diagnostic;

    let errors: [Error; 3] = [
        Convention::parse("crab-case").unwrap_err(),
        Name::detect("").unwrap_err(),
        Name::new(Convention::KebabCase, "").unwrap_err(),
    ];
    for err in &errors {
        assert!(err.help().is_some(), "{:?}", err);
    }
}

#[test]
fn convert_to_same_convention_is_identity() {
    for name in ["myVarName", "my_var_name", "MY_VAR_NAME", "MyVarName", "my-var-name"] {
        let name = Name::detect(name).unwrap();
        assert_eq!(name.convert_to(name.convention()), name);
    }
}

#[test]
fn detected_names_keep_their_text() {
    let name: Name = "has_admin_privileges".parse().unwrap();
    assert_eq!(name.convention(), Convention::SnakeCase);
    assert_eq!(name.to_string(), "has_admin_privileges");
    assert_eq!(String::from(name), "has_admin_privileges");
}

#[test]
fn undetermined_collection_help() {
    use miette::Diagnostic;

    let err = Convention::infer_from_list(["kebab-case", "snake_case"]).unwrap_err();
    let help = err.help().map(|help| help.to_string());
    assert_snapshot!(help.unwrap_or_default(), @"every name must consist of ASCII letters and digits separated by '_', '-' or capital letters, and all names in a collection must follow the same convention");
}
