use super::Array;
use crate::runtime::value::Value;
use crate::runtime::{RuntimeError, RuntimeResult};
use eo_builtin_macros::eo_builtin;

fn this_array<'a>(this: &'a Value, attribute: &str) -> RuntimeResult<&'a Array> {
    match this {
        Value::Array(arr) => Ok(arr),
        other => Err(RuntimeError::resolution(format!(
            "{}() can only be called on arrays, not on {}",
            attribute,
            other.type_name()
        ))),
    }
}

/// Number of elements in the array
/// @return int
#[eo_builtin(array.length)]
fn array_length(this: &Value, _args: &[Value]) -> RuntimeResult<Value> {
    let arr = this_array(this, "length")?;
    Ok(Value::Int(arr.length() as i64))
}

/// Whether the array has no elements
/// @return bool
#[eo_builtin(array.is_empty)]
fn array_is_empty(this: &Value, _args: &[Value]) -> RuntimeResult<Value> {
    let arr = this_array(this, "is_empty")?;
    Ok(Value::Boolean(arr.is_empty()))
}

/// Element at a 0-based index
/// @param index: int
/// @return any
#[eo_builtin(array.get(index))]
fn array_get(this: &Value, args: &[Value]) -> RuntimeResult<Value> {
    let arr = this_array(this, "get")?;
    arr.get(args[0].to_int()?)
}

/// A copy of the array with a value added at the end
/// @param value: any
/// @return array
#[eo_builtin(array.append(value))]
fn array_append(this: &Value, args: &[Value]) -> RuntimeResult<Value> {
    let arr = this_array(this, "append")?;
    Ok(Value::Array(arr.append(args[0].clone())))
}

/// A copy of the array followed by every element of another sequence.
/// Anything that is not sequence-like is appended as a single element.
/// @param other: any
/// @return array
#[eo_builtin(array.append_all(other))]
fn array_append_all(this: &Value, args: &[Value]) -> RuntimeResult<Value> {
    let arr = this_array(this, "append_all")?;
    Ok(Value::Array(arr.append_all(&args[0])))
}

/// A copy of the array with the element at an index replaced
/// @param index: int
/// @param value: any
/// @return array
#[eo_builtin(array.replace(index, value))]
fn array_replace(this: &Value, args: &[Value]) -> RuntimeResult<Value> {
    let arr = this_array(this, "replace")?;
    let index = args[0].to_int()?;
    Ok(Value::Array(arr.replace(index, args[1].clone())?))
}

/// A copy of the array without the element at an index
/// @param index: int
/// @return array
#[eo_builtin(array.remove(index))]
fn array_remove(this: &Value, args: &[Value]) -> RuntimeResult<Value> {
    let arr = this_array(this, "remove")?;
    Ok(Value::Array(arr.remove(args[0].to_int()?)?))
}

/// Dataizes `evaluator.each(element)` for every element; evaluates to true
/// @param evaluator: object with `each`
/// @return bool
#[eo_builtin(array.each(evaluator))]
fn array_each(this: &Value, args: &[Value]) -> RuntimeResult<Value> {
    let arr = this_array(this, "each")?;
    Ok(Value::Boolean(arr.each(&args[0])?))
}

/// Transforms every element with `mapper.map(element)`
/// @param mapper: object with `map`
/// @return array
#[eo_builtin(array.map(mapper))]
fn array_map(this: &Value, args: &[Value]) -> RuntimeResult<Value> {
    let arr = this_array(this, "map")?;
    Ok(Value::Array(arr.map(&args[0])?))
}

/// Transforms every element with `mapper.mapi(element, index)`
/// @param mapper: object with `mapi`
/// @return array
#[eo_builtin(array.mapi(mapper))]
fn array_mapi(this: &Value, args: &[Value]) -> RuntimeResult<Value> {
    let arr = this_array(this, "mapi")?;
    Ok(Value::Array(arr.mapi(&args[0])?))
}

/// Folds the array from the left with `reducer.reduce(accumulator, element)`
/// @param accumulator: any
/// @param reducer: object with `reduce`
/// @return any
#[eo_builtin(array.reduce(accumulator, reducer))]
fn array_reduce(this: &Value, args: &[Value]) -> RuntimeResult<Value> {
    let arr = this_array(this, "reduce")?;
    arr.reduce(args[0].clone(), &args[1])
}

/// Folds the array from the left with `reducer.reducei(accumulator, element, index)`
/// @param accumulator: any
/// @param reducer: object with `reducei`
/// @return any
#[eo_builtin(array.reducei(accumulator, reducer))]
fn array_reducei(this: &Value, args: &[Value]) -> RuntimeResult<Value> {
    let arr = this_array(this, "reducei")?;
    arr.reducei(args[0].clone(), &args[1])
}

/// Index of the first minimal element according to
/// `comparator.comparator(a, a_index, b, b_index)`, or -1 if there is none
/// @param comparator: object with `comparator`
/// @return int
#[eo_builtin(array.min(comparator))]
fn array_min(this: &Value, args: &[Value]) -> RuntimeResult<Value> {
    let arr = this_array(this, "min")?;
    Ok(Value::Int(arr.min(&args[0])?))
}

/// Every unordered pair of elements, as tuples
/// @return array
#[eo_builtin(array.pairs)]
fn array_pairs(this: &Value, _args: &[Value]) -> RuntimeResult<Value> {
    let arr = this_array(this, "pairs")?;
    Ok(Value::Array(arr.pairs()))
}
