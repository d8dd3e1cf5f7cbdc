//! Callback-driven algorithms over [`Array`].
//!
//! Callbacks run strictly in index order, one at a time, and the first failure
//! aborts the traversal.

use super::Array;
use crate::runtime::object::Callback;
use crate::runtime::value::Value;
use crate::runtime::RuntimeResult;
use itertools::Itertools;
use std::slice;
use tracing::debug;

/// Entry attribute of evaluators passed to [`Array::each`].
pub const EACH: &str = "each";
/// Entry attribute of mappers passed to [`Array::map`].
pub const MAP: &str = "map";
/// Entry attribute of mappers passed to [`Array::mapi`].
pub const MAPI: &str = "mapi";
/// Entry attribute of reducers passed to [`Array::reduce`].
pub const REDUCE: &str = "reduce";
/// Entry attribute of reducers passed to [`Array::reducei`].
pub const REDUCEI: &str = "reducei";
/// Entry attribute of comparators passed to [`Array::min`].
pub const COMPARATOR: &str = "comparator";

fn index_value(index: usize) -> Value {
    Value::Int(index as i64)
}

impl Array {
    /// Evaluates `evaluator.each(element)` for every element and dataizes each
    /// result, discarding it. Always yields `true` once the traversal is done.
    pub fn each<C: Callback + ?Sized>(&self, evaluator: &C) -> RuntimeResult<bool> {
        debug!(length = self.length(), "array.each");
        for element in self {
            evaluator.invoke(EACH, slice::from_ref(element))?.force()?;
        }
        Ok(true)
    }

    /// Builds a new array from `mapper.map(element)`.
    pub fn map<C: Callback + ?Sized>(&self, mapper: &C) -> RuntimeResult<Array> {
        debug!(length = self.length(), "array.map");
        self.iter()
            .map(|element| mapper.invoke(MAP, slice::from_ref(element)))
            .collect()
    }

    /// Builds a new array from `mapper.mapi(element, index)`.
    pub fn mapi<C: Callback + ?Sized>(&self, mapper: &C) -> RuntimeResult<Array> {
        debug!(length = self.length(), "array.mapi");
        self.iter()
            .enumerate()
            .map(|(i, element)| mapper.invoke(MAPI, &[element.clone(), index_value(i)]))
            .collect()
    }

    /// Left fold with `reducer.reduce(accumulator, element)`.
    pub fn reduce<C: Callback + ?Sized>(&self, initial: Value, reducer: &C) -> RuntimeResult<Value> {
        debug!(length = self.length(), "array.reduce");
        self.iter().try_fold(initial, |accumulator, element| {
            reducer.invoke(REDUCE, &[accumulator, element.clone()])
        })
    }

    /// Left fold with `reducer.reducei(accumulator, element, index)`.
    pub fn reducei<C: Callback + ?Sized>(&self, initial: Value, reducer: &C) -> RuntimeResult<Value> {
        debug!(length = self.length(), "array.reducei");
        self.iter()
            .enumerate()
            .try_fold(initial, |accumulator, (i, element)| {
                reducer.invoke(REDUCEI, &[accumulator, element.clone(), index_value(i)])
            })
    }

    /// Index of the first minimal element, or `-1` when there is none.
    ///
    /// The comparator is called as `comparator(min, min_index, candidate,
    /// candidate_index)`. A result of `1` makes the candidate the new minimum;
    /// any other non-zero result only records that the elements differ. An
    /// array whose comparisons all return `0` has no minimum. A single element
    /// is its own minimum and the comparator is never called.
    pub fn min<C: Callback + ?Sized>(&self, comparator: &C) -> RuntimeResult<i64> {
        match self.length() {
            0 => return Ok(-1),
            1 => return Ok(0),
            _ => {}
        }

        let mut min_index = 0;
        let mut all_equal = true;
        for (i, candidate) in self.iter().enumerate().skip(1) {
            let code = comparator
                .invoke(
                    COMPARATOR,
                    &[
                        self.as_slice()[min_index].clone(),
                        index_value(min_index),
                        candidate.clone(),
                        index_value(i),
                    ],
                )?
                .to_int()?;

            if code != 0 {
                all_equal = false;
            }
            if code == 1 {
                min_index = i;
            }
        }

        if all_equal {
            Ok(-1)
        } else {
            Ok(min_index as i64)
        }
    }

    /// Every 2-combination of positions, as tuples, in the order
    /// `(0, 1), (0, 2), .., (0, n-1), (1, 2), .., (n-2, n-1)`.
    pub fn pairs(&self) -> Array {
        self.iter()
            .tuple_combinations::<(&Value, &Value)>()
            .map(|(first, second)| Value::tuple(first.clone(), second.clone()))
            .collect()
    }
}
