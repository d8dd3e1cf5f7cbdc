//! The seam between builtin values and the host object model.
//!
//! Builtins never look inside foreign objects. They resolve attributes by name
//! through [`Object::attribute`] and drive callbacks through [`Callback`].

use super::value::Value;
use super::RuntimeResult;
use std::fmt;

/// A host object reachable by attribute lookup.
pub trait Object: fmt::Debug + Send + Sync {
    /// Name used when the object is printed.
    fn name(&self) -> &str;

    /// Resolves `attribute` on this object, binding `args` to its free
    /// attributes by position.
    ///
    /// `Ok(None)` means the object does not define the attribute itself;
    /// [`Value::attribute`] then looks it up on the decoratee.
    fn attribute(&self, attribute: &str, args: &[Value]) -> RuntimeResult<Option<Value>>;

    /// The object this one decorates, if any.
    ///
    /// Forcing and attribute lookup follow this chain until it reaches a
    /// native value.
    fn decoratee(&self) -> RuntimeResult<Option<Value>> {
        Ok(None)
    }
}

/// Invokes a named entry attribute with positional arguments and returns the
/// decorated result.
///
/// Evaluator, mapper, reducer and comparator objects are all driven through
/// this one method; the entry name selects the behaviour.
pub trait Callback {
    fn invoke(&self, entry: &str, args: &[Value]) -> RuntimeResult<Value>;
}

impl Callback for Value {
    fn invoke(&self, entry: &str, args: &[Value]) -> RuntimeResult<Value> {
        self.attribute(entry, args)?.decorated()
    }
}

impl<F> Callback for F
where
    F: Fn(&str, &[Value]) -> RuntimeResult<Value>,
{
    fn invoke(&self, entry: &str, args: &[Value]) -> RuntimeResult<Value> {
        self(entry, args)
    }
}
