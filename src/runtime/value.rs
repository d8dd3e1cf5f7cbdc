use super::builtin_registry;
use super::builtins::array::Array;
use super::object::Object;
use super::{RuntimeError, RuntimeResult};
use std::fmt;
use std::sync::Arc;

/// A handle to a runtime value.
///
/// Cloning is cheap: every heap-backed variant is reference counted, so the
/// same element can sit in many arrays and tuples at once.
#[derive(Debug, Clone)]
pub enum Value {
    Int(i64),
    Float(f64),
    Boolean(bool),
    String(Arc<str>),
    Array(Array),
    Tuple(Arc<[Value; 2]>),
    /// A registered builtin singleton such as `random`.
    Builtin(&'static str),
    /// An object owned by the host object model.
    Object(Arc<dyn Object>),
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            // Host objects have identity, not structure
            (Value::Object(a), Value::Object(b)) => {
                Arc::as_ptr(a) as *const () == Arc::as_ptr(b) as *const ()
            }
            _ => false,
        }
    }
}

impl Value {
    pub fn string(s: impl Into<Arc<str>>) -> Self {
        Value::String(s.into())
    }

    pub fn tuple(first: Value, second: Value) -> Self {
        Value::Tuple(Arc::new([first, second]))
    }

    pub fn object(object: impl Object + 'static) -> Self {
        Value::Object(Arc::new(object))
    }

    /// The builtin owner whose attributes this value exposes.
    pub fn type_name(&self) -> &str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Boolean(_) => "bool",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Tuple(_) => "tuple",
            Value::Builtin(name) => name,
            Value::Object(object) => object.name(),
        }
    }

    /// Resolves an attribute by name.
    ///
    /// Host objects answer for themselves and hand attributes they do not
    /// define to their decoratee. Every other value is dispatched through the
    /// builtin registry under its type name.
    pub fn attribute(&self, name: &str, args: &[Value]) -> RuntimeResult<Value> {
        let mut current = self.clone();
        loop {
            let object = match &current {
                Value::Object(object) => Arc::clone(object),
                native => return builtin_registry::dispatch(native.type_name(), name, native, args),
            };

            if let Some(value) = object.attribute(name, args)? {
                return Ok(value);
            }

            match object.decoratee()? {
                Some(decoratee) => current = decoratee,
                None => {
                    return Err(RuntimeError::resolution(format!(
                        "Attribute '{}' not found on {}",
                        name,
                        object.name()
                    )))
                }
            }
        }
    }

    /// Follows the decoratee chain of host objects.
    pub fn decorated(&self) -> RuntimeResult<Value> {
        let mut current = self.clone();
        while let Value::Object(object) = &current {
            match object.decoratee()? {
                Some(next) => current = next,
                None => break,
            }
        }
        Ok(current)
    }

    /// Forces this value down to a native value.
    pub fn force(&self) -> RuntimeResult<Value> {
        match self.decorated()? {
            Value::Object(object) => Err(RuntimeError::resolution(format!(
                "object '{}' cannot be dataized: it decorates nothing",
                object.name()
            ))),
            value => Ok(value),
        }
    }

    pub fn to_int(&self) -> RuntimeResult<i64> {
        match self.force()? {
            Value::Int(i) => Ok(i),
            other => Err(RuntimeError::conversion(format!(
                "expected an int, got {} {}",
                other.type_name(),
                other
            ))),
        }
    }

    pub fn to_float(&self) -> RuntimeResult<f64> {
        match self.force()? {
            Value::Float(f) => Ok(f),
            other => Err(RuntimeError::conversion(format!(
                "expected a float, got {} {}",
                other.type_name(),
                other
            ))),
        }
    }

    pub fn to_bool(&self) -> RuntimeResult<bool> {
        match self.force()? {
            Value::Boolean(b) => Ok(b),
            other => Err(RuntimeError::conversion(format!(
                "expected a bool, got {} {}",
                other.type_name(),
                other
            ))),
        }
    }

    /// The textual data of this value: raw text for strings, the printed form
    /// for everything else.
    pub fn data_string(&self) -> RuntimeResult<String> {
        match self.force()? {
            Value::String(s) => Ok(s.to_string()),
            other => Ok(other.to_string()),
        }
    }

    /// Reads this value as a sequence through its `length` and `get`
    /// attributes.
    ///
    /// Returns `None` when any part of the lookup fails. A non-positive length
    /// reads as an empty sequence.
    pub fn as_sequence(&self) -> Option<Vec<Value>> {
        if let Value::Array(array) = self {
            return Some(array.iter().cloned().collect());
        }

        let length = self
            .attribute("length", &[])
            .and_then(|length| length.to_int())
            .ok()?;

        (0..length)
            .map(|i| self.attribute("get", &[Value::Int(i)]))
            .collect::<RuntimeResult<Vec<_>>>()
            .ok()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::String(s) => write!(f, "\"{}\"", s),
            Value::Array(array) => write!(f, "{}", array),
            Value::Tuple(pair) => write!(f, "tuple({}, {})", pair[0], pair[1]),
            Value::Builtin(name) => write!(f, "{}", name),
            Value::Object(object) => write!(f, "{}", object.name()),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s.into())
    }
}

impl From<Array> for Value {
    fn from(array: Array) -> Self {
        Value::Array(array)
    }
}
