//! Filter conditions evaluated against records.

use super::record::Record;
use super::value::Value;
use crate::error::{Error, Result};

/// A filter condition.
///
/// ```
/// use console_lib::query::Filter;
///
/// let filter = Filter::eq("status", "active")
///     .and_also(Filter::ne("plan", "free"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Filter {
    /// Matches every record.
    #[default]
    All,
    Eq(String, Value),
    Ne(String, Value),
    /// Case-insensitive substring match on a text field.
    Contains(String, String),
    And(Vec<Filter>),
    Or(Vec<Filter>),
}

impl Filter {
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Eq(field.into(), value.into())
    }

    pub fn ne(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Filter::Ne(field.into(), value.into())
    }

    pub fn contains(field: impl Into<String>, value: impl Into<String>) -> Self {
        Filter::Contains(field.into(), value.into())
    }

    pub fn and(filters: impl IntoIterator<Item = Filter>) -> Self {
        Filter::And(filters.into_iter().collect())
    }

    pub fn or(filters: impl IntoIterator<Item = Filter>) -> Self {
        Filter::Or(filters.into_iter().collect())
    }

    /// Combines this filter with another using logical AND.
    ///
    /// `All` is the identity, so chaining from `Filter::All` adds no extra level.
    pub fn and_also(self, other: Filter) -> Self {
        match (self, other) {
            (Filter::All, other) => other,
            (this, Filter::All) => this,
            (Filter::And(mut filters), other) => {
                filters.push(other);
                Filter::And(filters)
            }
            (this, other) => Filter::And(vec![this, other]),
        }
    }

    /// Combines this filter with another using logical OR.
    pub fn or_else(self, other: Filter) -> Self {
        match self {
            Filter::Or(mut filters) => {
                filters.push(other);
                Filter::Or(filters)
            }
            _ => Filter::Or(vec![self, other]),
        }
    }

    /// Check every referenced field exists on `R`.
    pub fn validate<R: Record>(&self) -> Result<()> {
        match self {
            Filter::All => Ok(()),
            Filter::Eq(field, _) | Filter::Ne(field, _) | Filter::Contains(field, _) => {
                check_field::<R>(field)
            }
            Filter::And(filters) | Filter::Or(filters) => {
                filters.iter().try_for_each(|f| f.validate::<R>())
            }
        }
    }

    /// Evaluate against a record. Call [`Filter::validate`] first; unknown
    /// fields read as null here.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        let read = |field: &str| record.field(field).unwrap_or(Value::Null);
        match self {
            Filter::All => true,
            Filter::Eq(field, value) => read(field) == *value,
            Filter::Ne(field, value) => read(field) != *value,
            Filter::Contains(field, needle) => match read(field) {
                Value::Text(text) => text.to_lowercase().contains(&needle.to_lowercase()),
                _ => false,
            },
            Filter::And(filters) => filters.iter().all(|f| f.matches(record)),
            Filter::Or(filters) => filters.iter().any(|f| f.matches(record)),
        }
    }
}

pub(crate) fn check_field<R: Record>(field: &str) -> Result<()> {
    if R::FIELDS.contains(&field) {
        Ok(())
    } else {
        Err(Error::UnknownField {
            record: R::NAME,
            field: field.to_string(),
        })
    }
}
