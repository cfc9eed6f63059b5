use crate::{error::Error, Convention};

impl Convention {
    /// Infers the convention followed by every name in a collection.
    ///
    /// Each convention in [`Convention::ALL`] is checked against every name, and the first
    /// convention accepting them all is returned. An empty collection excludes nothing, so it
    /// yields [`Convention::CamelCase`].
    ///
    /// # Examples
    ///
    /// ```
    /// use namecase::Convention;
    ///
    /// let convention = Convention::infer_from_list(["in-the-air", "in-private"]).unwrap();
    /// assert_eq!(convention, Convention::KebabCase);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if no convention accepts all of the names.
    pub fn infer_from_list<I, S>(names: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = names.into_iter().collect();

        let mut candidates = Convention::ALL.to_vec();
        for convention in Convention::ALL {
            if !names.iter().all(|name| convention.validate(name.as_ref())) {
                candidates.retain(|&candidate| candidate != convention);
            }

            if candidates.is_empty() {
                return Err(Error::undetermined_convention(join(&names)));
            }
        }

        Ok(candidates[0])
    }

    /// Infers the convention followed by every key of a map, ignoring its values.
    ///
    /// This accepts any iterator of key-value pairs, such as `&HashMap<String, V>` or
    /// `&BTreeMap<&str, V>`. See [`Convention::infer_from_list`] for details.
    ///
    /// # Errors
    ///
    /// Returns an error if no convention accepts all of the keys.
    pub fn infer_from_data<I, K, V>(data: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
    {
        Convention::infer_from_list(data.into_iter().map(|(key, _)| key))
    }

    /// Infers the convention followed by the keys of a JSON object.
    ///
    /// A JSON array is treated as a map keyed by its indices, so any non-empty array is rejected;
    /// use [`Convention::infer_from_list`] to infer the convention of a list of names. An empty
    /// array, like an empty object, yields [`Convention::CamelCase`].
    ///
    /// # Errors
    ///
    /// Returns an error if no convention accepts all of the keys, if `data` is a non-empty array,
    /// or if `data` is neither an object nor an array. In the latter two cases the error input is
    /// the offending key or value tagged with its JSON type, for example `(number) 0`.
    #[cfg(feature = "json")]
    #[cfg_attr(docsrs, doc(cfg(feature = "json")))]
    pub fn infer_from_json(data: &serde_json::Value) -> Result<Self, Error> {
        use serde_json::Value;

        match data {
            Value::Object(map) => Convention::infer_from_data(map),
            Value::Array(items) if items.is_empty() => {
                Convention::infer_from_list(Vec::<&str>::new())
            }
            Value::Array(_) => Err(Error::undetermined_convention(json_type_tagged(
                &Value::from(0u64),
            ))),
            _ => Err(Error::undetermined_convention(json_type_tagged(data))),
        }
    }
}

fn join<S: AsRef<str>>(names: &[S]) -> String {
    names
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<&str>>()
        .join(", ")
}

#[cfg(feature = "json")]
fn json_type_tagged(value: &serde_json::Value) -> String {
    use serde_json::Value;

    let ty = match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    };
    format!("({}) {}", ty, value)
}

#[test]
fn empty_collection_is_camel_case() {
    assert_eq!(
        Convention::infer_from_list(Vec::<String>::new()).unwrap(),
        Convention::CamelCase
    );
}

#[test]
fn rejected_collection_lists_every_name() {
    let err = Convention::infer_from_list(["camelCase", "PascalCase"]).unwrap_err();
    assert!(err.is_undetermined_convention());
    assert_eq!(err.input(), "camelCase, PascalCase");
}
