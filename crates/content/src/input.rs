use std::collections::{BTreeMap, HashMap};

use sequenceit_shared::{Error, Result};
use validator::{ValidationError, ValidationErrors};

use crate::{
    record::{ResultItem, Value},
    schema::{Field, FieldKind, Schema},
};

/// Raw urlencoded form values keyed by field name.
pub type FormData = HashMap<String, String>;

/// Form values converted to typed column values.
#[derive(Debug, Clone, PartialEq)]
pub struct Input {
    pub values: BTreeMap<&'static str, Value>,
    pub published: Option<bool>,
}

/// Validates every schema field and collects all failures, keyed by field
/// name, before returning.
pub fn parse(schema: &Schema, form: &FormData) -> Result<Input> {
    let mut values = BTreeMap::new();
    let mut errors = ValidationErrors::new();

    for field in schema.fields {
        match parse_field(field, form.get(field.name).map(String::as_str)) {
            Ok(value) => {
                values.insert(field.name, value);
            }
            Err(error) => errors.add(field.name, error),
        }
    }

    if !errors.is_empty() {
        return Err(Error::Validate(errors));
    }

    let published = schema.has_published.then(|| {
        form.get("published")
            .is_some_and(|v| matches!(v.as_str(), "on" | "true" | "1"))
    });

    Ok(Input { values, published })
}

fn parse_field(field: &Field, raw: Option<&str>) -> std::result::Result<Value, ValidationError> {
    let raw = raw.map(|v| v.replace("\r\n", "\n")).unwrap_or_default();
    let mut raw = raw.trim();

    if raw.is_empty() {
        raw = field.default.unwrap_or_default();
    }

    if raw.is_empty() {
        if field.required {
            return Err(fail("required", format!("{} is required", field.label)));
        }

        return Ok(match field.kind {
            FieldKind::List => Value::List(vec![]),
            FieldKind::Results => Value::Results(vec![]),
            _ => Value::Null,
        });
    }

    if let Some(max_len) = field.max_len
        && raw.chars().count() > max_len
    {
        return Err(fail(
            "length",
            format!("{} must be at most {max_len} characters", field.label),
        ));
    }

    match field.kind {
        FieldKind::Text | FieldKind::LongText => Ok(Value::Text(raw.to_owned())),
        FieldKind::Url => match url::Url::parse(raw) {
            Ok(url) if matches!(url.scheme(), "http" | "https") => Ok(Value::Text(raw.to_owned())),
            _ => Err(fail(
                "url",
                format!("{} must be a valid http(s) URL", field.label),
            )),
        },
        FieldKind::Integer => raw.parse::<i64>().map(Value::Integer).map_err(|_| {
            fail("integer", format!("{} must be a whole number", field.label))
        }),
        FieldKind::Rating => match raw.parse::<i64>() {
            Ok(v) if (1..=5).contains(&v) => Ok(Value::Integer(v)),
            _ => Err(fail(
                "range",
                format!("{} must be between 1 and 5", field.label),
            )),
        },
        FieldKind::Choice(options) => {
            if options.contains(&raw) {
                Ok(Value::Text(raw.to_owned()))
            } else {
                Err(fail(
                    "choice",
                    format!("{} must be one of: {}", field.label, options.join(", ")),
                ))
            }
        }
        FieldKind::List => Ok(Value::List(
            raw.split([',', '\n'])
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_owned)
                .collect(),
        )),
        FieldKind::Results => {
            let mut items = vec![];
            for line in raw.lines().map(str::trim).filter(|l| !l.is_empty()) {
                let mut parts = line.split('|').map(str::trim);
                let metric = parts.next().unwrap_or_default();
                let value = parts.next().unwrap_or_default();
                let icon = parts.next().unwrap_or_default();

                if metric.is_empty() || value.is_empty() {
                    return Err(fail(
                        "results",
                        format!("{}: each line needs metric|value|icon", field.label),
                    ));
                }

                items.push(ResultItem {
                    metric: metric.to_owned(),
                    value: value.to_owned(),
                    icon: icon.to_owned(),
                });
            }

            Ok(Value::Results(items))
        }
    }
}

fn fail(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema;

    fn form(pairs: &[(&str, &str)]) -> FormData {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn codes(err: Error) -> Vec<(String, String)> {
        let Error::Validate(errors) = err else {
            panic!("expected validation error");
        };

        let mut codes = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| errs.iter().map(move |e| (field.to_string(), e.code.to_string())))
            .collect::<Vec<_>>();
        codes.sort();
        codes
    }

    #[test]
    fn collects_every_failing_field() {
        let err = parse(
            &schema::TESTIMONIALS,
            &form(&[("rating", "9"), ("image_url", "ftp://x")]),
        )
        .unwrap_err();

        assert_eq!(
            codes(err),
            vec![
                ("content".to_owned(), "required".to_owned()),
                ("image_url".to_owned(), "url".to_owned()),
                ("name".to_owned(), "required".to_owned()),
                ("rating".to_owned(), "range".to_owned()),
                ("role".to_owned(), "required".to_owned()),
            ]
        );
    }

    #[test]
    fn lists_split_on_commas_and_newlines() {
        let input = parse(
            &schema::PROJECTS,
            &form(&[
                ("title", "  Site  "),
                ("technologies", "Rust, axum\n\n SQLite ,"),
            ]),
        )
        .unwrap();

        assert_eq!(input.values["title"], Value::Text("Site".to_owned()));
        assert_eq!(
            input.values["technologies"],
            Value::List(vec!["Rust".into(), "axum".into(), "SQLite".into()])
        );
        assert_eq!(input.values["live_url"], Value::Null);
        assert_eq!(input.published, None);
    }

    #[test]
    fn results_parse_pipe_separated_lines() {
        let input = parse(
            &schema::CASE_STUDIES,
            &form(&[
                ("title", "Migration"),
                ("client", "Acme"),
                ("results", "Uptime|99.9%|activity\r\nCost|-40%"),
                ("published", "on"),
            ]),
        )
        .unwrap();

        assert_eq!(
            input.values["results"],
            Value::Results(vec![
                ResultItem {
                    metric: "Uptime".into(),
                    value: "99.9%".into(),
                    icon: "activity".into()
                },
                ResultItem {
                    metric: "Cost".into(),
                    value: "-40%".into(),
                    icon: String::new()
                },
            ])
        );
        assert_eq!(input.published, Some(true));
    }

    #[test]
    fn choice_and_defaults() {
        let err = parse(
            &schema::FAQS,
            &form(&[("question", "Why?"), ("answer", "Because"), ("category", "Misc")]),
        )
        .unwrap_err();
        assert_eq!(codes(err), vec![("category".to_owned(), "choice".to_owned())]);

        let input = parse(
            &schema::FAQS,
            &form(&[("question", "Why?"), ("answer", "Because"), ("category", "General")]),
        )
        .unwrap();
        assert_eq!(input.values["order_index"], Value::Integer(0));
        assert_eq!(input.published, Some(false));
    }

    #[test]
    fn max_length_is_enforced() {
        let long = "x".repeat(151);
        let err = parse(&schema::BENEFITS, &form(&[("title", &long), ("description", "d")]))
            .unwrap_err();

        assert_eq!(codes(err), vec![("title".to_owned(), "length".to_owned())]);
    }
}
