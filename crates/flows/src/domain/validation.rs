//! Validation Engine
//!
//! Declarative schema validation for form field sets. A schema is an ordered
//! list of fields, each with an ordered list of rules; evaluation
//! short-circuits per field on the first failing rule but always evaluates
//! every field, so callers can surface all errors at once.
//!
//! Pure and deterministic: no side effects, never panics on any input.

use std::collections::BTreeMap;

/// A single validation rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rule {
    /// Value must not be empty or whitespace-only
    Required,
    /// Value must have a `local@domain.tld` shape (no network verification)
    EmailFormat,
    /// Trimmed value must be at least this many characters
    MinLength(usize),
    /// Value must equal the named field's value exactly
    EqualsField(&'static str),
}

/// Why a field failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    Required,
    EmailFormat,
    MinLength { min: usize },
    FieldMismatch { other: &'static str },
}

/// Field values as submitted by the presentation layer
#[derive(Debug, Clone, Default)]
pub struct FormValues(BTreeMap<&'static str, String>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, field: &'static str, value: impl Into<String>) -> Self {
        self.0.insert(field, value.into());
        self
    }

    /// Value of a field; missing fields read as empty
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map_or("", String::as_str)
    }
}

/// Failing fields mapped to the first violated rule of each
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationErrors(BTreeMap<&'static str, Violation>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<&Violation> {
        self.0.get(field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Violation)> {
        self.0.iter().map(|(field, violation)| (*field, violation))
    }
}

/// Ordered set of field validators
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<(&'static str, Vec<Rule>)>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: &'static str, rules: impl IntoIterator<Item = Rule>) -> Self {
        self.fields.push((name, rules.into_iter().collect()));
        self
    }

    /// Evaluate every field against its rules, in declaration order
    pub fn validate(&self, values: &FormValues) -> Result<(), ValidationErrors> {
        let mut errors = BTreeMap::new();

        for (field, rules) in &self.fields {
            let value = values.get(field);
            for rule in rules {
                if let Some(violation) = check_rule(rule, value, values) {
                    errors.insert(*field, violation);
                    break; // first failing rule wins for this field
                }
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(errors))
        }
    }
}

fn check_rule(rule: &Rule, value: &str, values: &FormValues) -> Option<Violation> {
    match rule {
        Rule::Required => value.trim().is_empty().then_some(Violation::Required),
        Rule::EmailFormat => (!is_valid_email(value)).then_some(Violation::EmailFormat),
        Rule::MinLength(min) => (value.trim().chars().count() < *min)
            .then_some(Violation::MinLength { min: *min }),
        Rule::EqualsField(other) => {
            (value != values.get(other)).then_some(Violation::FieldMismatch { other: *other })
        }
    }
}

/// Basic email shape check, no network verification
fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.len() > 64 {
        return false;
    }

    if domain.is_empty() || !domain.contains('.') || domain.contains('@') {
        return false;
    }

    if !domain
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
    {
        return false;
    }

    // No leading/trailing dot or hyphen in the domain
    if domain.starts_with('.') || domain.ends_with('.') {
        return false;
    }
    if domain.starts_with('-') || domain.ends_with('-') {
        return false;
    }

    true
}
