//! Ordering of query results.

use std::cmp::Ordering;

use super::record::Record;
use super::value::Value;

/// Sort direction for ordering results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Asc,
    Desc,
}

/// Ordering of query results. Later fields break ties in earlier ones.
///
/// ```
/// use console_lib::query::OrderBy;
///
/// let order = OrderBy::desc("created_at").then_asc("name");
/// assert_eq!(order.fields().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OrderBy {
    fields: Vec<(String, Direction)>,
}

impl OrderBy {
    pub fn new(field: impl Into<String>, direction: Direction) -> Self {
        Self {
            fields: vec![(field.into(), direction)],
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, Direction::Asc)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, Direction::Desc)
    }

    pub fn then_asc(mut self, field: impl Into<String>) -> Self {
        self.fields.push((field.into(), Direction::Asc));
        self
    }

    pub fn then_desc(mut self, field: impl Into<String>) -> Self {
        self.fields.push((field.into(), Direction::Desc));
        self
    }

    pub fn fields(&self) -> &[(String, Direction)] {
        &self.fields
    }

    pub(crate) fn compare<R: Record>(&self, a: &R, b: &R) -> Ordering {
        for (field, direction) in &self.fields {
            let left = a.field(field).unwrap_or(Value::Null);
            let right = b.field(field).unwrap_or(Value::Null);
            let ordering = match direction {
                Direction::Asc => left.cmp(&right),
                Direction::Desc => right.cmp(&left),
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}
