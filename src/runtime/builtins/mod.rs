pub mod array;
pub mod ieee754;
pub mod random;
pub mod string;

use crate::runtime::builtin_registry::BuiltinRegistration;
use crate::runtime::value::Value;

/// The builtin singletons (`random`, `ieee754`, ...) as (name, value) pairs,
/// ready to be bound as globals by a host.
pub fn init_builtins() -> Vec<(String, Value)> {
    let mut builtins = Vec::new();

    for registration in inventory::iter::<BuiltinRegistration> {
        builtins.push((registration.name.to_string(), Value::Builtin(registration.name)));
    }

    // Native types such as array and string are reached through their
    // values, not through a global.

    builtins.sort_by(|a, b| a.0.cmp(&b.0));
    builtins
}
