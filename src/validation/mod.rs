//! Form validation engine, independent of any rendering or transport layer.
//! A [`RuleSet`] maps field names to ordered lists of rules; validation walks
//! each field's rules in declared order and records the first failing
//! message, so a field never carries more than one error at a time. Fields
//! not named by the rule set are never inspected. The engine returns reports
//! instead of errors: validation failure is an expected outcome, not a fault.

pub mod forms;
pub mod rules;

use std::collections::HashMap;
use std::fmt;

/// One check for one field: a predicate over the raw input value and the
/// message to show when the predicate fails.
pub struct Rule {
    message: String,
    check: Box<dyn Fn(Option<&str>) -> bool + Send + Sync>,
}

impl Rule {
    pub fn new(
        message: impl Into<String>,
        check: impl Fn(Option<&str>) -> bool + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            check: Box::new(check),
        }
    }

    #[must_use]
    pub fn passes(&self, value: Option<&str>) -> bool {
        (self.check)(value)
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Rule")
            .field("message", &self.message)
            .finish_non_exhaustive()
    }
}

/// Ordered field-to-rules mapping. Field order is the declaration order,
/// which keeps error rendering deterministic.
#[derive(Debug, Default)]
pub struct RuleSet {
    fields: Vec<(String, Vec<Rule>)>,
}

impl RuleSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn field(mut self, name: impl Into<String>, rules: Vec<Rule>) -> Self {
        self.fields.push((name.into(), rules));
        self
    }

    pub fn fields(&self) -> impl Iterator<Item = (&str, &[Rule])> {
        self.fields
            .iter()
            .map(|(name, rules)| (name.as_str(), rules.as_slice()))
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }
}

/// Outcome of validating one record: per-field messages keyed by field name.
/// `is_valid` holds exactly when the error map is empty.
#[derive(Clone, Debug)]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: HashMap<String, String>,
}

impl ValidationReport {
    fn from_errors(errors: HashMap<String, String>) -> Self {
        Self {
            is_valid: errors.is_empty(),
            errors,
        }
    }

    #[must_use]
    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }
}

/// Validates `values` against `rules`. Rules run in declared order per field
/// and stop at the first failure; absent fields are passed to the rules as
/// `None` so `required` can reject them while format checks pass vacuously.
#[must_use]
pub fn validate_form(values: &HashMap<String, String>, rules: &RuleSet) -> ValidationReport {
    let mut errors = HashMap::new();

    for (field, field_rules) in rules.fields() {
        let value = values.get(field).map(String::as_str);
        for rule in field_rules {
            if !rule.passes(value) {
                errors.insert(field.to_string(), rule.message().to_string());
                break;
            }
        }
    }

    ValidationReport::from_errors(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    fn demo_rules() -> RuleSet {
        RuleSet::new().field(
            "code",
            vec![
                Rule::new("Code is required", rules::required),
                Rule::new("Code must be at least 3 characters", |v| {
                    rules::min_length(v, 3)
                }),
            ],
        )
    }

    #[test]
    fn first_failing_rule_wins() {
        let report = validate_form(&values(&[("code", "")]), &demo_rules());
        assert!(!report.is_valid);
        assert_eq!(report.error("code"), Some("Code is required"));

        let report = validate_form(&values(&[("code", "ab")]), &demo_rules());
        assert_eq!(report.error("code"), Some("Code must be at least 3 characters"));
    }

    #[test]
    fn valid_record_has_empty_error_map() {
        let report = validate_form(&values(&[("code", "abc")]), &demo_rules());
        assert!(report.is_valid);
        assert!(report.errors.is_empty());
    }

    #[test]
    fn fields_outside_the_rule_set_are_ignored() {
        let report = validate_form(
            &values(&[("code", "abc"), ("scratch", "!!!!")]),
            &demo_rules(),
        );
        assert!(report.is_valid);
    }

    #[test]
    fn absent_field_is_validated_as_missing() {
        let report = validate_form(&HashMap::new(), &demo_rules());
        assert_eq!(report.error("code"), Some("Code is required"));
    }

    #[test]
    fn at_most_one_error_per_field() {
        // Empty input fails both rules; only the first message is kept.
        let report = validate_form(&HashMap::new(), &demo_rules());
        assert_eq!(report.errors.len(), 1);
    }

    #[test]
    fn rule_set_preserves_declaration_order() {
        let set = RuleSet::new()
            .field("b", vec![])
            .field("a", vec![])
            .field("c", vec![]);
        let names: Vec<&str> = set.field_names().collect();
        assert_eq!(names, ["b", "a", "c"]);
    }
}
