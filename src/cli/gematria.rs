use crate::error::Result;
use crate::gematria::{gematria_value, Schema};
use serde::Serialize;
use std::path::Path;

#[derive(Debug, Clone, Copy, Default)]
pub struct GematriaOptions {
    /// Specific schema, or None to report all six.
    pub schema: Option<Schema>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
pub struct GematriaValue {
    pub schema: Schema,
    pub value: u64,
}

/// Gematria values of a text file, per schema or across all schemas.
pub fn run_gematria(path: &Path, options: &GematriaOptions) -> Result<String> {
    let text = std::fs::read_to_string(path)?;
    let values = gematria_values(&text, options.schema);

    if options.json {
        return Ok(serde_json::to_string_pretty(&values)?);
    }

    let mut output = String::new();
    output.push_str("Cipherlens Gematria\n");
    output.push_str("===================\n\n");
    output.push_str(&format!("File: {}\n\n", path.display()));
    for entry in &values {
        output.push_str(&format!("{:<20} {}\n", entry.schema.name(), entry.value));
    }
    Ok(output)
}

pub fn gematria_values(text: &str, schema: Option<Schema>) -> Vec<GematriaValue> {
    let schemas: Vec<Schema> = match schema {
        Some(s) => vec![s],
        None => Schema::ALL.to_vec(),
    };
    schemas
        .into_iter()
        .map(|schema| GematriaValue {
            schema,
            value: gematria_value(text, schema),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_schema() {
        let values = gematria_values("ABC", Some(Schema::Pythagorean));
        assert_eq!(values.len(), 1);
        assert_eq!(values[0].value, 6);
    }

    #[test]
    fn test_all_schemas_reported() {
        let values = gematria_values("ABC", None);
        assert_eq!(values.len(), 6);
    }
}
