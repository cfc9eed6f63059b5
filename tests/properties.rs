use namecase::{detect, validate, Convention, Name};
use proptest::prelude::*;

const CAMEL_CASE: &str = "[a-z]{1,6}([A-Z][a-z0-9]{0,6}){0,4}";
const SNAKE_CASE: &str = "[a-z]{1,6}(_[a-z0-9]{1,6}){0,4}";
const SCREAMING_SNAKE_CASE: &str = "[A-Z]{1,6}(_[A-Z0-9]{1,6}){0,4}";
const PASCAL_CASE: &str = "([A-Z][a-z0-9]{1,6}){1,5}";
const KEBAB_CASE: &str = "[a-z]{1,6}(-[a-z0-9]{1,6}){0,4}";

fn named(convention: Convention, name: String) -> Name {
    Name::new(convention, name).unwrap()
}

fn any_name() -> impl Strategy<Value = Name> {
    prop_oneof![
        CAMEL_CASE.prop_map(|name| named(Convention::CamelCase, name)),
        SNAKE_CASE.prop_map(|name| named(Convention::SnakeCase, name)),
        SCREAMING_SNAKE_CASE.prop_map(|name| named(Convention::ScreamingSnakeCase, name)),
        PASCAL_CASE.prop_map(|name| named(Convention::PascalCase, name)),
        KEBAB_CASE.prop_map(|name| named(Convention::KebabCase, name)),
    ]
}

fn separated_name() -> impl Strategy<Value = Name> {
    prop_oneof![
        SNAKE_CASE.prop_map(|name| named(Convention::SnakeCase, name)),
        SCREAMING_SNAKE_CASE.prop_map(|name| named(Convention::ScreamingSnakeCase, name)),
        KEBAB_CASE.prop_map(|name| named(Convention::KebabCase, name)),
    ]
}

proptest! {
    #[test]
    fn valid_names_are_detected(name in any_name()) {
        prop_assert!(validate(name.convention(), name.as_str()));

        let detected = detect(name.as_str()).unwrap();
        prop_assert!(detected.convention() <= name.convention());
        prop_assert!(detected.convention().validate(name.as_str()));
        prop_assert_eq!(detected.as_str(), name.as_str());
    }

    #[test]
    fn convert_to_self_is_identity(name in any_name()) {
        prop_assert_eq!(name.convert_to(name.convention()), name);
    }

    #[test]
    fn snake_case_round_trip(name in separated_name()) {
        let snake = name.convert_to(Convention::SnakeCase);
        prop_assert!(Convention::SnakeCase.validate(snake.as_str()));
        prop_assert_eq!(snake.convert_to(name.convention()), name);
    }

    #[test]
    fn camel_pascal_round_trip(name in CAMEL_CASE) {
        let camel = named(Convention::CamelCase, name);
        let pascal = camel.convert_to(Convention::PascalCase);
        prop_assert_eq!(pascal.convert_to(Convention::CamelCase), camel);
    }

    #[test]
    fn pascal_camel_round_trip(name in PASCAL_CASE) {
        let pascal = named(Convention::PascalCase, name);
        let camel = pascal.convert_to(Convention::CamelCase);
        prop_assert_eq!(camel.convert_to(Convention::PascalCase), pascal);
    }

    #[test]
    fn separated_names_convert_to_valid_names(name in separated_name()) {
        // Single letter words such as `a_b` have no valid pascal case form.
        for convention in [
            Convention::CamelCase,
            Convention::SnakeCase,
            Convention::ScreamingSnakeCase,
            Convention::KebabCase,
        ] {
            let converted = name.convert_to(convention);
            prop_assert!(
                convention.validate(converted.as_str()),
                "{} => {}", name, converted
            );
        }
    }
}
