// Rust guideline compliant 2026-10-12

//! Multi-key sort engine.
//!
//! A [`RuleSet`] is an ordered list of [`SortRule`]s in which every key occurs
//! at most once. [`order`] ranks a task slice lexicographically over the rules
//! without touching the input; ties that no rule breaks keep their original
//! relative order.

use crate::{Error, Result, SortDirection, SortKey, SortRule, Task};
use icu_collator::{Collator, CollatorOptions, Strength};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Ordered set of sort rules keyed by [`SortKey`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SortRule>", into = "Vec<SortRule>")]
pub struct RuleSet {
    rules: Vec<SortRule>,
}

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the rules in priority order.
    #[must_use]
    pub fn rules(&self) -> &[SortRule] {
        &self.rules
    }

    /// Returns the rule for `key`, if any.
    #[must_use]
    pub fn get(&self, key: SortKey) -> Option<&SortRule> {
        self.rules.iter().find(|rule| rule.key == key)
    }

    /// Returns true if a rule for `key` is present.
    #[must_use]
    pub fn contains(&self, key: SortKey) -> bool {
        self.get(key).is_some()
    }

    /// Returns the number of rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if there are no rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Parses a comma-separated rule list such as `metric:asc,name:desc`.
    ///
    /// A key without a direction sorts ascending. Blank input yields an empty
    /// set; a repeated key keeps its first occurrence.
    ///
    /// # Errors
    ///
    /// Returns an error if a key or direction is not recognised.
    pub fn parse(input: &str) -> Result<Self> {
        let mut rules = RuleSet::new();

        for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            let (key, direction) = match part.split_once(':') {
                Some((key, direction)) => (SortKey::parse(key)?, SortDirection::parse(direction)?),
                None => (SortKey::parse(part)?, SortDirection::Ascending),
            };

            if !rules.contains(key) {
                rules.rules.push(SortRule { key, direction });
            }
        }

        Ok(rules)
    }
}

impl TryFrom<Vec<SortRule>> for RuleSet {
    type Error = Error;

    fn try_from(rules: Vec<SortRule>) -> Result<Self> {
        for (index, rule) in rules.iter().enumerate() {
            if rules[..index].iter().any(|earlier| earlier.key == rule.key) {
                return Err(Error::InvalidInput(format!(
                    "Sort key listed more than once: {}",
                    rule.key.as_str()
                )));
            }
        }
        Ok(Self { rules })
    }
}

impl From<RuleSet> for Vec<SortRule> {
    fn from(set: RuleSet) -> Self {
        set.rules
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .rules
            .iter()
            .map(|rule| {
                let direction = match rule.direction {
                    SortDirection::Ascending => "asc",
                    SortDirection::Descending => "desc",
                };
                format!("{}:{}", rule.key.as_str(), direction)
            })
            .collect();
        f.write_str(&parts.join(","))
    }
}

/// Appends an ascending rule for `key` unless the key is already present.
#[must_use]
pub fn add_rule(rules: &RuleSet, key: SortKey) -> RuleSet {
    let mut next = rules.clone();
    if !next.contains(key) {
        next.rules.push(SortRule::ascending(key));
    }
    next
}

/// Removes the rule for `key`, if present.
#[must_use]
pub fn remove_rule(rules: &RuleSet, key: SortKey) -> RuleSet {
    let mut next = rules.clone();
    next.rules.retain(|rule| rule.key != key);
    next
}

/// Flips the direction of the rule for `key`, if present.
#[must_use]
pub fn toggle_direction(rules: &RuleSet, key: SortKey) -> RuleSet {
    let mut next = rules.clone();
    for rule in next.rules.iter_mut().filter(|rule| rule.key == key) {
        rule.direction = rule.direction.flipped();
    }
    next
}

/// Keys that can still be added, in declaration order.
#[must_use]
pub fn available_keys(rules: &RuleSet) -> Vec<SortKey> {
    SortKey::ALL
        .into_iter()
        .filter(|key| !rules.contains(*key))
        .collect()
}

/// Returns `tasks` ranked by `rules`.
///
/// The sort is stable, so an empty rule set returns the input order.
#[must_use]
pub fn order(tasks: &[Task], rules: &RuleSet) -> Vec<Task> {
    let mut sorted = tasks.to_vec();
    sorted.sort_by(|a, b| compare_tasks(a, b, rules));
    sorted
}

/// Compares two tasks rule by rule.
///
/// Equality under one rule defers to the next; `Equal` means no rule
/// distinguishes the pair.
#[must_use]
pub fn compare_tasks(a: &Task, b: &Task, rules: &RuleSet) -> Ordering {
    for rule in &rules.rules {
        let ordering = compare_values(&SortValue::of(a, rule.key), &SortValue::of(b, rule.key));
        let ordering = match rule.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        };
        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// A task attribute as seen by the comparator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SortValue<'a> {
    /// Boolean flag.
    Bool(bool),
    /// Numeric value.
    Number(f64),
    /// Free text.
    Text(&'a str),
}

impl<'a> SortValue<'a> {
    /// Extracts the value of `key` from `task`.
    #[must_use]
    pub fn of(task: &'a Task, key: SortKey) -> Self {
        match key {
            SortKey::Name => SortValue::Text(&task.name),
            SortKey::Metric => SortValue::Number(task.metric),
            SortKey::Finished => SortValue::Bool(task.finished),
            SortKey::Deleted => SortValue::Bool(task.deleted),
        }
    }
}

impl fmt::Display for SortValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortValue::Bool(value) => write!(f, "{}", value),
            SortValue::Number(value) => write!(f, "{}", value),
            SortValue::Text(value) => f.write_str(value),
        }
    }
}

/// Compares two attribute values.
///
/// Booleans order `false < true`, numbers by sign of their difference, and
/// every other pairing by [`locale_compare`] of the textual forms.
#[must_use]
pub fn compare_values(a: &SortValue<'_>, b: &SortValue<'_>) -> Ordering {
    match (a, b) {
        (SortValue::Bool(x), SortValue::Bool(y)) => x.cmp(y),
        (SortValue::Number(x), SortValue::Number(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        (SortValue::Text(x), SortValue::Text(y)) => locale_compare(x, y),
        _ => locale_compare(&a.to_string(), &b.to_string()),
    }
}

thread_local! {
    static COLLATOR: Option<Collator> = root_collator();
}

fn root_collator() -> Option<Collator> {
    let mut options = CollatorOptions::new();
    options.strength = Some(Strength::Tertiary);
    match Collator::try_new(&Default::default(), options) {
        Ok(collator) => Some(collator),
        Err(err) => {
            tracing::warn!(error = %err, "root collator unavailable, falling back to caseless comparison");
            None
        }
    }
}

/// Locale-aware text comparison under the root collation.
///
/// Accented letters sort next to their base letter and, on an otherwise equal
/// pair, lowercase sorts before uppercase.
#[must_use]
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => caseless_compare(a, b),
    })
}

fn caseless_compare(a: &str, b: &str) -> Ordering {
    let caseless = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    caseless.then_with(|| b.cmp(a))
}
