//! Initial parameter values from a record's schemas.

use shitsukan_types::{ParameterSchema, ParameterValue};

/// One value per schema, in schema order: the declared default if present,
/// otherwise the baseline of the schema's value domain.
///
/// Pure and deterministic; calling it again on the same schemas yields the
/// same values.
pub fn derive_defaults(schemas: &[ParameterSchema]) -> Vec<ParameterValue> {
    schemas
        .iter()
        .map(|schema| ParameterValue {
            id: schema.id.clone(),
            value: schema.initial_value(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use shitsukan_types::ValueDomain;

    fn schemas() -> Vec<ParameterSchema> {
        vec![
            ParameterSchema::new("roughness").with_default(0.5),
            ParameterSchema::new("tiling")
                .with_domain(ValueDomain::Range { min: 1.0, max: 16.0, step: Some(1.0) }),
            ParameterSchema::new("finish")
                .with_domain(ValueDomain::Choice { options: vec![json!("matte"), json!("satin")] }),
            ParameterSchema::new("dirt").with_domain(ValueDomain::Toggle),
            ParameterSchema::new("anything"),
        ]
    }

    #[test]
    fn test_declared_default_wins() {
        let values = derive_defaults(&schemas());
        assert_eq!(values[0], ParameterValue::new("roughness", 0.5));
    }

    #[test]
    fn test_domain_baselines_fill_missing_defaults() {
        let values = derive_defaults(&schemas());
        assert_eq!(values[1].value, json!(1.0));
        assert_eq!(values[2].value, json!("matte"));
        assert_eq!(values[3].value, json!(false));
        assert_eq!(values[4].value, Value::Null);
    }

    #[test]
    fn test_order_and_ids_follow_schemas() {
        let schemas = schemas();
        let values = derive_defaults(&schemas);
        let ids: Vec<_> = values.iter().map(|v| v.id.as_str()).collect();
        let expected: Vec<_> = schemas.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_idempotent() {
        let schemas = schemas();
        assert_eq!(derive_defaults(&schemas), derive_defaults(&schemas));
    }

    #[test]
    fn test_empty_schemas() {
        assert!(derive_defaults(&[]).is_empty());
    }
}
