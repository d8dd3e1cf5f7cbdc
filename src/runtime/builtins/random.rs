use crate::runtime::builtin::BuiltinStruct;
use crate::runtime::value::Value;
use crate::runtime::{RuntimeError, RuntimeResult};
use eo_builtin_macros::eo_builtin;
use rand::Rng;

/// Generate a random integer in range [min, max)
/// @param min: int
/// @param max: int
/// @return int
#[eo_builtin(random.int(min, max))]
fn random_int(_this: &Value, args: &[Value]) -> RuntimeResult<Value> {
    let min = args[0].to_int()?;
    let max = args[1].to_int()?;

    if max <= min {
        return Err(RuntimeError::invalid_argument(format!(
            "random.int() max ({}) must be greater than min ({})",
            max, min
        )));
    }

    Ok(Value::Int(rand::thread_rng().gen_range(min..max)))
}

pub fn create_random_builtin() -> BuiltinStruct {
    BuiltinStruct::new("random")
}

// Register the builtin automatically
crate::submit_builtin!("random", create_random_builtin);
