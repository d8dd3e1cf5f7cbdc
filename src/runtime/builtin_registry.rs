use crate::runtime::builtin::{BuiltinMethod, BuiltinStruct, MethodEntry};
use crate::runtime::value::Value;
use crate::runtime::{RuntimeError, RuntimeResult};
use lazy_static::lazy_static;
use std::collections::HashMap;
use tracing::{debug, trace};

/// A factory function that creates a builtin
pub type BuiltinFactory = fn() -> BuiltinStruct;

/// A registered builtin singleton with its name and factory function
pub struct BuiltinRegistration {
    pub name: &'static str,
    pub factory: BuiltinFactory,
}

impl BuiltinRegistration {
    pub const fn new(name: &'static str, factory: BuiltinFactory) -> Self {
        Self { name, factory }
    }
}

/// One native attribute, submitted by `#[eo_builtin(owner.name(params..))]`.
pub struct MethodRegistration {
    pub owner: &'static str,
    pub name: &'static str,
    pub params: &'static [&'static str],
    pub variadic: bool,
    pub doc: &'static str,
    pub method: BuiltinMethod,
}

// This allows builtins to be collected at compile time
inventory::collect!(BuiltinRegistration);
inventory::collect!(MethodRegistration);

/// Submit a builtin registration to the inventory
#[macro_export]
macro_rules! submit_builtin {
    ($name:expr, $factory:expr) => {
        inventory::submit! {
            $crate::runtime::builtin_registry::BuiltinRegistration::new($name, $factory)
        }
    };
}

lazy_static! {
    static ref BUILTINS: HashMap<&'static str, BuiltinStruct> = collect_builtins();
}

fn collect_builtins() -> HashMap<&'static str, BuiltinStruct> {
    let mut builtins = HashMap::new();

    for registration in inventory::iter::<BuiltinRegistration> {
        builtins.insert(registration.name, (registration.factory)());
    }

    for registration in inventory::iter::<MethodRegistration> {
        builtins
            .entry(registration.owner)
            .or_insert_with(|| BuiltinStruct::new(registration.owner))
            .add_method(
                registration.name,
                MethodEntry {
                    params: registration.params,
                    variadic: registration.variadic,
                    doc: registration.doc,
                    method: registration.method,
                },
            );
    }

    debug!(count = builtins.len(), "builtin registry initialised");
    builtins
}

/// Every registered builtin, keyed by owner name.
pub fn builtins() -> &'static HashMap<&'static str, BuiltinStruct> {
    &BUILTINS
}

pub fn builtin(name: &str) -> Option<&'static BuiltinStruct> {
    BUILTINS.get(name)
}

/// Resolves `attribute` on a native value whose builtin owner is `owner`.
pub fn dispatch(owner: &str, attribute: &str, this: &Value, args: &[Value]) -> RuntimeResult<Value> {
    trace!(owner, attribute, argc = args.len(), "dispatching builtin attribute");
    match builtin(owner) {
        Some(table) => table.call(attribute, this, args),
        None => Err(RuntimeError::resolution(format!(
            "Attribute '{}' not found on {}",
            attribute, owner
        ))),
    }
}
