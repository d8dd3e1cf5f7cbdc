use super::value::Value;
use super::{RuntimeError, RuntimeResult};
use std::collections::HashMap;

/// A native attribute implementation: receives the value it was resolved on
/// and the positional arguments.
pub type BuiltinMethod = fn(&Value, &[Value]) -> RuntimeResult<Value>;

/// A method slot of a builtin, with the parameter names it was declared with.
#[derive(Debug, Clone, Copy)]
pub struct MethodEntry {
    pub params: &'static [&'static str],
    /// The last parameter collects any remaining arguments.
    pub variadic: bool,
    pub doc: &'static str,
    pub method: BuiltinMethod,
}

impl MethodEntry {
    pub fn accepts(&self, argc: usize) -> bool {
        if self.variadic {
            argc + 1 >= self.params.len()
        } else {
            argc == self.params.len()
        }
    }

    /// Renders the parameter list, e.g. `index, value` or `..strings`.
    pub fn signature(&self) -> String {
        let last = self.params.len().saturating_sub(1);
        self.params
            .iter()
            .enumerate()
            .map(|(i, name)| {
                if self.variadic && i == last {
                    format!("..{}", name)
                } else {
                    name.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// The attribute table of one builtin type or singleton.
#[derive(Debug, Clone)]
pub struct BuiltinStruct {
    pub name: String,
    pub fields: HashMap<String, Value>,
    pub methods: HashMap<String, MethodEntry>,
}

impl BuiltinStruct {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: HashMap::new(),
            methods: HashMap::new(),
        }
    }

    pub fn add_field(&mut self, name: impl Into<String>, value: Value) {
        self.fields.insert(name.into(), value);
    }

    pub fn add_method(&mut self, name: impl Into<String>, entry: MethodEntry) {
        self.methods.insert(name.into(), entry);
    }

    /// Resolves `attribute` against this table with `this` as the receiver.
    ///
    /// Fields shadow methods and take no arguments.
    pub fn call(&self, attribute: &str, this: &Value, args: &[Value]) -> RuntimeResult<Value> {
        if let Some(value) = self.fields.get(attribute) {
            if !args.is_empty() {
                return Err(RuntimeError::resolution(format!(
                    "'{}.{}' takes no arguments, got {}",
                    self.name,
                    attribute,
                    args.len()
                )));
            }
            return Ok(value.clone());
        }

        if let Some(entry) = self.methods.get(attribute) {
            if !entry.accepts(args.len()) {
                return Err(RuntimeError::resolution(format!(
                    "'{}.{}({})' cannot be applied to {} argument(s)",
                    self.name,
                    attribute,
                    entry.signature(),
                    args.len()
                )));
            }
            (entry.method)(this, args)
        } else {
            Err(RuntimeError::resolution(format!(
                "Attribute '{}' not found on builtin '{}'",
                attribute, self.name
            )))
        }
    }
}
