use crate::runtime::builtins::array::Array;
use crate::runtime::value::Value;
use crate::runtime::{RuntimeError, RuntimeResult};
use eo_builtin_macros::eo_builtin;

fn this_string<'a>(this: &'a Value, attribute: &str) -> RuntimeResult<&'a str> {
    match this {
        Value::String(s) => Ok(&**s),
        other => Err(RuntimeError::resolution(format!(
            "{}() can only be called on strings, not on {}",
            attribute,
            other.type_name()
        ))),
    }
}

/// Concatenate the data of every argument onto the string
/// @param strings: any...
/// @return string
#[eo_builtin(string.append(..strings))]
fn string_append(this: &Value, args: &[Value]) -> RuntimeResult<Value> {
    let mut result = this_string(this, "append")?.to_string();
    for arg in args {
        result.push_str(&arg.data_string()?);
    }
    Ok(Value::string(result))
}

/// Characters from `begin` (inclusive) to `end` (exclusive)
/// @param begin: int
/// @param end: int
/// @return string
#[eo_builtin(string.substring(begin, end))]
fn string_substring(this: &Value, args: &[Value]) -> RuntimeResult<Value> {
    let s = this_string(this, "substring")?;
    let begin = args[0].to_int()?;
    let end = args[1].to_int()?;

    let chars: Vec<char> = s.chars().collect();
    if begin < 0 || end > chars.len() as i64 || begin > end {
        return Err(RuntimeError::index_out_of_range(format!(
            "Cannot take the substring [{}, {}) of {}: index out of bounds",
            begin, end, this
        )));
    }

    Ok(Value::string(
        chars[begin as usize..end as usize].iter().collect::<String>(),
    ))
}

/// Trim whitespace from both ends of a string
/// @return string
#[eo_builtin(string.trim)]
fn string_trim(this: &Value, _args: &[Value]) -> RuntimeResult<Value> {
    let s = this_string(this, "trim")?;
    Ok(Value::string(s.trim()))
}

/// Split a string by a separator. Empty pieces between two separators are
/// kept; an empty piece at either end is dropped.
/// @param separator: string
/// @return array
#[eo_builtin(string.split(separator))]
fn string_split(this: &Value, args: &[Value]) -> RuntimeResult<Value> {
    let s = this_string(this, "split")?;
    let separator = args[0].data_string()?;
    if separator.is_empty() {
        return Err(RuntimeError::invalid_argument(
            "split() separator must not be empty",
        ));
    }

    let mut pieces: Vec<&str> = s.split(separator.as_str()).collect();
    if pieces.last().is_some_and(|piece| piece.is_empty()) {
        pieces.pop();
    }
    if pieces.first().is_some_and(|piece| piece.is_empty()) {
        pieces.remove(0);
    }

    Ok(Value::Array(pieces.into_iter().map(Value::from).collect::<Array>()))
}

/// Parse the string as an integer
/// @return int
#[eo_builtin(string.to_int)]
fn string_to_int(this: &Value, _args: &[Value]) -> RuntimeResult<Value> {
    let s = this_string(this, "to_int")?;
    s.parse::<i64>()
        .map(Value::Int)
        .map_err(|e| RuntimeError::conversion(format!("Cannot convert {} to int: {}", this, e)))
}

/// Parse the string as a float
/// @return float
#[eo_builtin(string.to_float)]
fn string_to_float(this: &Value, _args: &[Value]) -> RuntimeResult<Value> {
    let s = this_string(this, "to_float")?;
    s.parse::<f64>()
        .map(Value::Float)
        .map_err(|e| RuntimeError::conversion(format!("Cannot convert {} to float: {}", this, e)))
}

/// Compare the string with the data of another value
/// @param other: any
/// @return bool
#[eo_builtin(string.eq(other))]
fn string_eq(this: &Value, args: &[Value]) -> RuntimeResult<Value> {
    let s = this_string(this, "eq")?;
    Ok(Value::Boolean(s == args[0].data_string()?))
}
