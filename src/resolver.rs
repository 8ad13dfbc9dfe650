//! Turns raw config or prompt input into a validated [`ParameterSet`].
//! Config mode and interactive mode both go through [`resolve`], so they share the same
//! validation rules.

use crate::error::{Error, Result};
use crate::params::{ParamValue, ParameterSet, RawParams};
use crate::schema::FieldSpec;
use log::debug;

/// Splits a comma separated list option into trimmed tokens.
///
/// Empty tokens are kept as-is (`"a,"` gives `["a", ""]`). A blank input gives an
/// empty list.
pub fn parse_list_option(raw: &str) -> Vec<String> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|token| token.trim().to_string()).collect()
}

/// Resolves `raw` against `schema`.
///
/// Schema fields are inserted first, in schema order. Keys the schema does not know
/// (the common fields for instance) are passed through afterwards. A `year` that
/// parses as an integer is stored as one.
///
/// # Errors
/// * `Error::MissingRequiredField` for the first required field that is absent or blank
pub fn resolve(schema: &[FieldSpec], raw: &RawParams) -> Result<ParameterSet> {
    let mut params = ParameterSet::new();

    for field in schema {
        let value = raw.get(field.name).map(String::as_str);
        let value = match value {
            Some(v) if !v.trim().is_empty() => v,
            _ if field.required => {
                return Err(Error::MissingRequiredField { field: field.name.to_string() })
            }
            Some(v) => v,
            None => field.default,
        };

        let resolved = if field.list {
            ParamValue::List(parse_list_option(value))
        } else {
            ParamValue::Str(value.to_string())
        };
        debug!("Resolved '{}' = '{}'", field.name, resolved);
        params.insert(field.name, resolved);
    }

    for (key, value) in raw {
        if params.contains(key) {
            continue;
        }
        match (key.as_str(), value.trim().parse::<i64>()) {
            ("year", Ok(year)) => params.insert(key.as_str(), year),
            _ => params.insert(key.as_str(), value.as_str()),
        }
    }

    Ok(params)
}
