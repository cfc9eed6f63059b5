use crate::{case, Convention};

/// Rewrites `name`, assumed to follow `from`, into the `to` convention.
///
/// Snake case is the pivot for every separated convention. Only conversions between camel and
/// pascal case bypass it, by changing the case of the first character alone.
pub(crate) fn convert(name: &str, from: Convention, to: Convention) -> String {
    use Convention::*;

    match (from, to) {
        (CamelCase, CamelCase)
        | (SnakeCase, SnakeCase)
        | (ScreamingSnakeCase, ScreamingSnakeCase)
        | (PascalCase, PascalCase)
        | (KebabCase, KebabCase) => name.to_owned(),

        (CamelCase, PascalCase) => case::uppercase_first(name),
        (PascalCase, CamelCase) => case::lowercase_first(name),
        (CamelCase | PascalCase, SnakeCase) => case::split_words(name, '_'),
        (CamelCase | PascalCase, KebabCase) => case::split_words(name, '-'),
        (CamelCase | PascalCase, ScreamingSnakeCase) => {
            case::split_words(name, '_').to_ascii_uppercase()
        }

        (SnakeCase, PascalCase) => case::to_pascal_case(name),
        (SnakeCase, CamelCase) => case::lowercase_first(&case::to_pascal_case(name)),
        (SnakeCase, KebabCase) => name.replace('_', "-"),
        (SnakeCase, ScreamingSnakeCase) => name.to_ascii_uppercase(),

        (ScreamingSnakeCase, SnakeCase) => name.to_ascii_lowercase(),
        (ScreamingSnakeCase, CamelCase | PascalCase | KebabCase) => {
            convert(&name.to_ascii_lowercase(), SnakeCase, to)
        }

        (KebabCase, SnakeCase) => name.replace('-', "_"),
        (KebabCase, CamelCase | PascalCase | ScreamingSnakeCase) => {
            convert(&name.replace('-', "_"), SnakeCase, to)
        }
    }
}
