//! Validates the bundled Fluent files at compile time: every file parses,
//! every locale defines the same message ids, and each message uses the
//! same variables in every locale.

use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::process;

use fluent_syntax::ast::{Entry, Expression, InlineExpression, Pattern, PatternElement};
use fluent_syntax::parser::parse;

type Messages = BTreeMap<String, BTreeSet<String>>;

fn extract_messages_and_params(content: &str) -> Result<Messages, String> {
    let resource = parse(content).map_err(|(_, errors)| format!("Parse errors: {errors:?}"))?;

    let mut messages = BTreeMap::new();
    for entry in resource.body {
        if let Entry::Message(message) = entry {
            let mut params = BTreeSet::new();
            if let Some(Pattern { elements }) = &message.value {
                params_in_pattern(elements, &mut params);
            }
            messages.insert(message.id.name.to_string(), params);
        }
    }
    Ok(messages)
}

fn params_in_pattern(elements: &[PatternElement<&str>], params: &mut BTreeSet<String>) {
    for element in elements {
        if let PatternElement::Placeable { expression } = element {
            params_in_expression(expression, params);
        }
    }
}

fn params_in_expression(expression: &Expression<&str>, params: &mut BTreeSet<String>) {
    match expression {
        Expression::Select { selector, variants } => {
            params_in_inline(selector, params);
            for variant in variants {
                params_in_pattern(&variant.value.elements, params);
            }
        }
        Expression::Inline(inline) => params_in_inline(inline, params),
    }
}

fn params_in_inline(expression: &InlineExpression<&str>, params: &mut BTreeSet<String>) {
    match expression {
        InlineExpression::VariableReference { id } => {
            params.insert(id.name.to_string());
        }
        InlineExpression::FunctionReference { arguments, .. } => {
            for arg in &arguments.positional {
                params_in_inline(arg, params);
            }
            for arg in &arguments.named {
                params_in_inline(&arg.value, params);
            }
        }
        InlineExpression::Placeable { expression } => params_in_expression(expression, params),
        _ => {}
    }
}

fn find_locale_files() -> Result<BTreeMap<String, PathBuf>, String> {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").map_err(|_| "CARGO_MANIFEST_DIR not set")?;
    let locales_dir = Path::new(&manifest_dir).join("locales");

    let mut files = BTreeMap::new();
    let entries = fs::read_dir(&locales_dir)
        .map_err(|e| format!("Failed to read {}: {e}", locales_dir.display()))?;
    for entry in entries {
        let path = entry.map_err(|e| e.to_string())?.path();
        let main = path.join("main.ftl");
        if let (true, Some(name)) = (main.exists(), path.file_name().and_then(|n| n.to_str())) {
            files.insert(name.to_string(), main);
        }
    }

    if files.is_empty() {
        return Err("No locale files found".to_string());
    }
    Ok(files)
}

fn validate_locales() -> Result<(), String> {
    println!("cargo:rerun-if-changed=locales");

    let mut all = BTreeMap::new();
    for (locale, path) in find_locale_files()? {
        let content = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        let messages = extract_messages_and_params(&content)
            .map_err(|e| format!("{locale}: {e}"))?;
        all.insert(locale, messages);
    }

    let Some((reference_locale, reference)) = all.iter().next() else {
        return Ok(());
    };

    let mut errors = Vec::new();
    for (locale, messages) in all.iter().skip(1) {
        for (key, params) in reference {
            match messages.get(key) {
                None => errors.push(format!("{locale}: missing message '{key}'")),
                Some(found) if found != params => errors.push(format!(
                    "{locale}: '{key}' uses {found:?}, {reference_locale} uses {params:?}"
                )),
                Some(_) => {}
            }
        }
        for key in messages.keys().filter(|k| !reference.contains_key(*k)) {
            errors.push(format!("{locale}: extra message '{key}'"));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors.join("\n"))
    }
}

fn main() {
    if let Err(e) = validate_locales() {
        eprintln!("Locale validation failed:\n{e}");
        process::exit(1);
    }
}
