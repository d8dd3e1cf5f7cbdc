//! A closure-backed host object for tests.

use crate::runtime::object::Object;
use crate::runtime::value::Value;
use crate::runtime::{Array, RuntimeResult};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex};

type Handler = Box<dyn Fn(&[Value]) -> RuntimeResult<Value> + Send + Sync>;

/// Answers attributes from registered closures and records every lookup.
pub struct Evaluator {
    name: String,
    handlers: HashMap<String, Handler>,
    decoratee: Option<Value>,
    calls: Mutex<Vec<(String, Vec<Value>)>>,
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluator").field("name", &self.name).finish()
    }
}

impl Evaluator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handlers: HashMap::new(),
            decoratee: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn on(
        mut self,
        attribute: impl Into<String>,
        handler: impl Fn(&[Value]) -> RuntimeResult<Value> + Send + Sync + 'static,
    ) -> Self {
        self.handlers.insert(attribute.into(), Box::new(handler));
        self
    }

    pub fn decorating(mut self, value: Value) -> Self {
        self.decoratee = Some(value);
        self
    }

    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    pub fn calls(&self) -> Vec<(String, Vec<Value>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl Object for Evaluator {
    fn name(&self) -> &str {
        &self.name
    }

    fn attribute(&self, attribute: &str, args: &[Value]) -> RuntimeResult<Option<Value>> {
        self.calls
            .lock()
            .unwrap()
            .push((attribute.to_string(), args.to_vec()));
        self.handlers
            .get(attribute)
            .map(|handler| handler(args))
            .transpose()
    }

    fn decoratee(&self) -> RuntimeResult<Option<Value>> {
        Ok(self.decoratee.clone())
    }
}

pub fn ints(values: &[i64]) -> Array {
    values.iter().copied().map(Value::Int).collect()
}

/// `comparator(a, _, b, _)` returning the sign of `a - b`.
pub fn numeric_comparator() -> Evaluator {
    Evaluator::new("numeric").on("comparator", |args| {
        let a = args[0].to_int()?;
        let b = args[2].to_int()?;
        Ok(Value::Int((a - b).signum()))
    })
}

/// `reduce(acc, x)` / `reducei(acc, x, _)` returning `acc + x`.
pub fn adder() -> Evaluator {
    let add = |args: &[Value]| -> RuntimeResult<Value> {
        Ok(Value::Int(args[0].to_int()? + args[1].to_int()?))
    };
    Evaluator::new("adder").on("reduce", add).on("reducei", add)
}
