//! The immutable array value.
//!
//! Every operation that looks like a mutation returns a new [`Array`]; the
//! receiver and all arrays derived from it earlier stay valid and unchanged.
//! Elements are shared handles, so copying an array never copies the values
//! it holds.

mod attributes;
mod traversal;


use crate::runtime::value::Value;
use crate::runtime::{RuntimeError, RuntimeResult};
use itertools::Itertools;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

pub use traversal::{COMPARATOR, EACH, MAP, MAPI, REDUCE, REDUCEI};

#[derive(Debug, Clone)]
pub struct Array {
    items: Arc<[Value]>,
}

impl Array {
    pub fn empty() -> Self {
        Self {
            items: Arc::from(Vec::new()),
        }
    }

    /// Wraps `elements` in order, as given.
    pub fn of(elements: impl IntoIterator<Item = Value>) -> Self {
        elements.into_iter().collect()
    }

    pub fn length(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }

    /// True when both arrays are backed by the same storage.
    pub fn shares_storage(&self, other: &Array) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }

    fn position(&self, index: i64) -> Option<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&position| position < self.items.len())
    }

    pub fn get(&self, index: i64) -> RuntimeResult<Value> {
        match self.position(index) {
            Some(position) => Ok(self.items[position].clone()),
            None => Err(RuntimeError::index_out_of_range(format!(
                "Cannot get the element at index {} of {}: index out of bounds",
                index, self
            ))),
        }
    }

    pub fn append(&self, value: Value) -> Array {
        self.iter().cloned().chain(std::iter::once(value)).collect()
    }

    /// Appends every element of `other` when it reads as a sequence,
    /// otherwise appends `other` itself as a single element.
    ///
    /// An empty sequence yields this very array, not a copy.
    pub fn append_all(&self, other: &Value) -> Array {
        match other.as_sequence() {
            Some(elements) if elements.is_empty() => self.clone(),
            Some(elements) => self.iter().cloned().chain(elements).collect(),
            None => {
                debug!(
                    value = %other,
                    "append_all argument is not sequence-like, appending it as one element"
                );
                self.append(other.clone())
            }
        }
    }

    pub fn replace(&self, index: i64, value: Value) -> RuntimeResult<Array> {
        let Some(position) = self.position(index) else {
            return Err(RuntimeError::index_out_of_range(format!(
                "Cannot replace the element at index {} of {} with {}: index out of bounds",
                index, self, value
            )));
        };

        let mut items = self.items.to_vec();
        items[position] = value;
        Ok(Array::from(items))
    }

    pub fn remove(&self, index: i64) -> RuntimeResult<Array> {
        let Some(position) = self.position(index) else {
            return Err(RuntimeError::index_out_of_range(format!(
                "Cannot remove the element at index {} of {}: index out of bounds",
                index, self
            )));
        };

        Ok(self.items[..position]
            .iter()
            .chain(&self.items[position + 1..])
            .cloned()
            .collect())
    }
}

impl Default for Array {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Vec<Value>> for Array {
    fn from(items: Vec<Value>) -> Self {
        Self {
            items: Arc::from(items),
        }
    }
}

impl FromIterator<Value> for Array {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl PartialEq for Array {
    fn eq(&self, other: &Self) -> bool {
        self.shares_storage(other) || self.items == other.items
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "array([{}])", self.iter().join(", "))
    }
}
