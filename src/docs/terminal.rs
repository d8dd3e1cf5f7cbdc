use crate::docs::{BuiltinDoc, MethodDoc};
use crate::runtime::builtins::init_builtins;
use owo_colors::OwoColorize;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Manual-page style rendering of one builtin.
pub fn render_builtin(doc: &BuiltinDoc) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", "NAME".bright_green().bold());
    let _ = writeln!(
        out,
        "    {} - {}\n",
        doc.name.bright_white().bold(),
        "Built-in".bright_black()
    );

    if !doc.fields.is_empty() {
        let _ = writeln!(out, "{}", "FIELDS".bright_green().bold());
        for (name, field) in &doc.fields {
            let _ = writeln!(
                out,
                "    {} : {}",
                name.bright_yellow(),
                field.field_type.bright_blue()
            );
            let _ = writeln!(out, "        = {}\n", field.value);
        }
    }

    if !doc.methods.is_empty() {
        let _ = writeln!(out, "{}", "METHODS".bright_green().bold());
        for (name, method) in &doc.methods {
            render_method(&mut out, name, method);
        }
    }

    out
}

fn render_method(out: &mut String, name: &str, method: &MethodDoc) {
    let _ = writeln!(
        out,
        "    {}({})",
        name.bright_yellow(),
        method.signature().bright_blue()
    );
    if method.documentation.is_empty() {
        let _ = writeln!(out, "        {}\n", "No documentation available.".dimmed());
    } else {
        for line in method.documentation.lines() {
            let _ = writeln!(out, "        {}", line);
        }
        out.push('\n');
    }
}

/// The topic index shown by `docs` without a topic: value types first, then
/// the singletons a host binds as globals.
pub fn render_topics(catalog: &BTreeMap<String, BuiltinDoc>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", "BUILTINS".bright_green().bold());

    let singleton_names: Vec<String> =
        init_builtins().into_iter().map(|(name, _)| name).collect();
    let types: Vec<&str> = catalog
        .keys()
        .map(String::as_str)
        .filter(|name| !singleton_names.iter().any(|s| s == name))
        .collect();
    let singletons: Vec<&str> = singleton_names
        .iter()
        .map(String::as_str)
        .filter(|name| catalog.contains_key(*name))
        .collect();

    for (heading, names) in [("TYPES", types), ("SINGLETONS", singletons)] {
        if names.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n  {}", heading.bright_white().bold());
        for chunk in names.chunks(5) {
            let _ = writeln!(out, "    {}", chunk.join(", "));
        }
    }

    let _ = writeln!(
        out,
        "\n{}",
        "Run `eo-runtime docs <topic>` for details.".dimmed()
    );
    out
}
