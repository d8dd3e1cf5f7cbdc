//! IEEE 754 special values.

use crate::runtime::builtin::BuiltinStruct;
use crate::runtime::value::Value;

pub fn create_ieee754_builtin() -> BuiltinStruct {
    let mut ieee754 = BuiltinStruct::new("ieee754");

    ieee754.add_field("nan", Value::Float(f64::NAN));
    ieee754.add_field("infinity", Value::Float(f64::INFINITY));

    ieee754
}

crate::submit_builtin!("ieee754", create_ieee754_builtin);
