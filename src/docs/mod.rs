//! Reference documentation for the registered builtins, built from the
//! registry rather than from source files.

pub mod terminal;

use crate::runtime::builtin::BuiltinStruct;
use crate::runtime::builtin_registry;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
pub struct BuiltinDoc {
    pub name: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub fields: BTreeMap<String, FieldDoc>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub methods: BTreeMap<String, MethodDoc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FieldDoc {
    #[serde(rename = "type")]
    pub field_type: String,
    pub value: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct MethodDoc {
    pub params: Vec<String>,
    pub variadic: bool,
    pub documentation: String,
}

impl From<&BuiltinStruct> for BuiltinDoc {
    fn from(builtin: &BuiltinStruct) -> Self {
        let fields = builtin
            .fields
            .iter()
            .map(|(name, value)| {
                (
                    name.clone(),
                    FieldDoc {
                        field_type: value.type_name().to_string(),
                        value: value.to_string(),
                    },
                )
            })
            .collect();

        let methods = builtin
            .methods
            .iter()
            .map(|(name, entry)| {
                (
                    name.clone(),
                    MethodDoc {
                        params: entry.params.iter().map(|p| p.to_string()).collect(),
                        variadic: entry.variadic,
                        documentation: entry.doc.to_string(),
                    },
                )
            })
            .collect();

        BuiltinDoc {
            name: builtin.name.clone(),
            fields,
            methods,
        }
    }
}

impl MethodDoc {
    pub fn signature(&self) -> String {
        let last = self.params.len().saturating_sub(1);
        self.params
            .iter()
            .enumerate()
            .map(|(i, p)| {
                if self.variadic && i == last {
                    format!("..{}", p)
                } else {
                    p.clone()
                }
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Documentation for every registered builtin, keyed by name.
pub fn catalog() -> BTreeMap<String, BuiltinDoc> {
    builtin_registry::builtins()
        .iter()
        .map(|(name, builtin)| (name.to_string(), BuiltinDoc::from(builtin)))
        .collect()
}

/// Documentation for one builtin. `str` is accepted for `string`.
pub fn lookup(topic: &str) -> Option<BuiltinDoc> {
    let topic = match topic {
        "str" => "string",
        other => other,
    };
    builtin_registry::builtin(topic).map(BuiltinDoc::from)
}
