//! Typed validation rules.

use crate::errors::{RuleError, RuleResult};
use crate::validators;
use formguard_core::ControlKind;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// A single named validation rule with its typed parameter.
///
/// Boolean-parameter rules compare the configured expectation against the
/// predicate outcome, so `IsDigit(false)` reads "must not be digits only".
/// That negation is intentional, not a quirk.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    MinLength(usize),
    MaxLength(usize),
    EqualsLength(usize),
    MinNumber(f64),
    MaxNumber(f64),
    IsDigit(bool),
    IsEmail(bool),
    IsName(bool),
    IsEnglish(bool),
    IsKorean(bool),
    IsValidBirth(bool),
    IsTruthy(bool),
}

impl Rule {
    /// Rule name as it appears in loosely-typed configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::MinLength(_) => "minLength",
            Rule::MaxLength(_) => "maxLength",
            Rule::EqualsLength(_) => "equalsLength",
            Rule::MinNumber(_) => "minNumber",
            Rule::MaxNumber(_) => "maxNumber",
            Rule::IsDigit(_) => "isDigit",
            Rule::IsEmail(_) => "isEmail",
            Rule::IsName(_) => "isName",
            Rule::IsEnglish(_) => "isEnglish",
            Rule::IsKorean(_) => "isKorean",
            Rule::IsValidBirth(_) => "isValidBirth",
            Rule::IsTruthy(_) => "isTruthy",
        }
    }

    /// Whether the rule participates in validation for this control kind.
    ///
    /// Selection controls only honor `IsTruthy`; other rules are skipped,
    /// not failed.
    pub fn applies_to(&self, kind: ControlKind) -> bool {
        match kind {
            ControlKind::Text => true,
            ControlKind::Selection => matches!(self, Rule::IsTruthy(_)),
        }
    }

    /// Evaluate the rule against a raw value.
    pub fn evaluate(&self, value: &str) -> bool {
        match *self {
            Rule::MinLength(len) => validators::min_length(value, len),
            Rule::MaxLength(len) => validators::max_length(value, len),
            Rule::EqualsLength(len) => validators::equals_length(value, len),
            Rule::MinNumber(min) => validators::min_number(value, min),
            Rule::MaxNumber(max) => validators::max_number(value, max),
            Rule::IsDigit(expected) => expected == validators::is_digit(value),
            Rule::IsEmail(expected) => expected == validators::is_email(value),
            Rule::IsName(expected) => expected == validators::is_name(value),
            Rule::IsEnglish(expected) => expected == validators::is_english(value),
            Rule::IsKorean(expected) => expected == validators::is_korean(value),
            Rule::IsValidBirth(expected) => expected == validators::is_valid_birth(value),
            Rule::IsTruthy(expected) => expected == validators::is_truthy(value),
        }
    }

    /// Build a typed rule from a raw `{name: parameter}` pair.
    ///
    /// Parameters are checked here, at configuration time, never during
    /// evaluation.
    pub fn parse(name: &str, value: &Value) -> RuleResult<Rule> {
        match name {
            "minLength" => Ok(Rule::MinLength(length_param(name, value)?)),
            "maxLength" => Ok(Rule::MaxLength(length_param(name, value)?)),
            "equalsLength" => Ok(Rule::EqualsLength(length_param(name, value)?)),
            "minNumber" => Ok(Rule::MinNumber(number_param(name, value)?)),
            "maxNumber" => Ok(Rule::MaxNumber(number_param(name, value)?)),
            "isDigit" => Ok(Rule::IsDigit(flag_param(name, value)?)),
            "isEmail" => Ok(Rule::IsEmail(flag_param(name, value)?)),
            "isName" => Ok(Rule::IsName(flag_param(name, value)?)),
            "isEnglish" => Ok(Rule::IsEnglish(flag_param(name, value)?)),
            "isKorean" => Ok(Rule::IsKorean(flag_param(name, value)?)),
            "isValidBirth" => Ok(Rule::IsValidBirth(flag_param(name, value)?)),
            "isTruthy" => Ok(Rule::IsTruthy(flag_param(name, value)?)),
            other => Err(RuleError::UnknownRule(other.to_string())),
        }
    }
}

fn length_param(rule: &str, value: &Value) -> RuleResult<usize> {
    value
        .as_u64()
        .map(|n| n as usize)
        .ok_or_else(|| RuleError::InvalidParameter {
            rule: rule.to_string(),
            expected: "a non-negative integer",
        })
}

fn number_param(rule: &str, value: &Value) -> RuleResult<f64> {
    value.as_f64().ok_or_else(|| RuleError::InvalidParameter {
        rule: rule.to_string(),
        expected: "a number",
    })
}

fn flag_param(rule: &str, value: &Value) -> RuleResult<bool> {
    value.as_bool().ok_or_else(|| RuleError::InvalidParameter {
        rule: rule.to_string(),
        expected: "a boolean",
    })
}

/// Custom predicate over the raw value.
pub type CustomRule = Arc<dyn Fn(&str) -> bool + Send + Sync>;

/// Ordered collection of rules for one field.
///
/// A field passes only when every applicable rule passes. An empty set is
/// valid for any non-empty value.
#[derive(Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
    custom: Vec<CustomRule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a typed rule.
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn min_length(self, len: usize) -> Self {
        self.rule(Rule::MinLength(len))
    }

    pub fn max_length(self, len: usize) -> Self {
        self.rule(Rule::MaxLength(len))
    }

    pub fn equals_length(self, len: usize) -> Self {
        self.rule(Rule::EqualsLength(len))
    }

    pub fn min_number(self, min: f64) -> Self {
        self.rule(Rule::MinNumber(min))
    }

    pub fn max_number(self, max: f64) -> Self {
        self.rule(Rule::MaxNumber(max))
    }

    pub fn is_digit(self, expected: bool) -> Self {
        self.rule(Rule::IsDigit(expected))
    }

    pub fn is_email(self, expected: bool) -> Self {
        self.rule(Rule::IsEmail(expected))
    }

    pub fn is_name(self, expected: bool) -> Self {
        self.rule(Rule::IsName(expected))
    }

    pub fn is_english(self, expected: bool) -> Self {
        self.rule(Rule::IsEnglish(expected))
    }

    pub fn is_korean(self, expected: bool) -> Self {
        self.rule(Rule::IsKorean(expected))
    }

    pub fn is_valid_birth(self, expected: bool) -> Self {
        self.rule(Rule::IsValidBirth(expected))
    }

    pub fn is_truthy(self, expected: bool) -> Self {
        self.rule(Rule::IsTruthy(expected))
    }

    /// Add a custom predicate, applied to every control kind.
    pub fn custom<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        self.custom.push(Arc::new(predicate));
        self
    }

    /// Build a rule set from a loosely-typed `{rule: parameter}` map.
    pub fn parse(options: &serde_json::Map<String, Value>) -> RuleResult<Self> {
        let mut set = Self::new();
        for (name, value) in options {
            set.rules.push(Rule::parse(name, value)?);
        }
        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.rules.len() + self.custom.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.custom.is_empty()
    }

    /// Evaluate every applicable rule: logical AND over the set.
    pub fn evaluate(&self, kind: ControlKind, value: &str) -> bool {
        self.rules
            .iter()
            .filter(|rule| rule.applies_to(kind))
            .all(|rule| rule.evaluate(value))
            && self.custom.iter().all(|predicate| predicate(value))
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("rules", &self.rules)
            .field("custom", &self.custom.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_set_is_valid() {
        let rules = RuleSet::new();
        assert!(rules.evaluate(ControlKind::Text, "anything"));
    }

    #[test]
    fn test_logical_and_over_rules() {
        let rules = RuleSet::new().min_length(3).is_digit(true);
        assert!(rules.evaluate(ControlKind::Text, "1234"));
        assert!(!rules.evaluate(ControlKind::Text, "12"));
        assert!(!rules.evaluate(ControlKind::Text, "abcd"));
    }

    #[test]
    fn test_negated_predicate() {
        let rules = RuleSet::new().is_digit(false);
        assert!(rules.evaluate(ControlKind::Text, "abcd"));
        assert!(!rules.evaluate(ControlKind::Text, "1234"));
    }

    #[test]
    fn test_selection_skips_non_truthy_rules() {
        let rules = RuleSet::new().min_length(10).is_truthy(true);
        assert!(rules.evaluate(ControlKind::Selection, "opt"));
        assert!(!rules.evaluate(ControlKind::Text, "opt"));
    }

    #[test]
    fn test_custom_rule() {
        let rules = RuleSet::new().custom(|value| value.starts_with("ok"));
        assert!(rules.evaluate(ControlKind::Text, "ok then"));
        assert!(!rules.evaluate(ControlKind::Text, "nope"));
    }

    #[test]
    fn test_parse_typed_rules() {
        assert_eq!(
            Rule::parse("minLength", &json!(5)),
            Ok(Rule::MinLength(5))
        );
        assert_eq!(
            Rule::parse("isKorean", &json!(true)),
            Ok(Rule::IsKorean(true))
        );
        assert_eq!(
            Rule::parse("maxNumber", &json!(10.5)),
            Ok(Rule::MaxNumber(10.5))
        );
    }

    #[test]
    fn test_parse_rejects_unknown_rule() {
        assert_eq!(
            Rule::parse("isShouting", &json!(true)),
            Err(RuleError::UnknownRule("isShouting".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_wrong_parameter_type() {
        let err = Rule::parse("minLength", &json!(true)).unwrap_err();
        assert!(matches!(err, RuleError::InvalidParameter { .. }));

        let err = Rule::parse("isDigit", &json!(3)).unwrap_err();
        assert!(matches!(err, RuleError::InvalidParameter { .. }));
    }

    #[test]
    fn test_parse_option_map() {
        let options = json!({ "minLength": 2, "isDigit": true });
        let rules = RuleSet::parse(options.as_object().unwrap()).unwrap();
        assert_eq!(rules.len(), 2);
        assert!(rules.evaluate(ControlKind::Text, "42"));
        assert!(!rules.evaluate(ControlKind::Text, "4"));
    }

    #[test]
    fn test_rule_names_round_trip() {
        let rule = Rule::EqualsLength(6);
        assert_eq!(Rule::parse(rule.name(), &json!(6)), Ok(rule));
    }
}
