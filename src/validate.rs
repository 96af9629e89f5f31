//! Structural validation of a Decision Model Package directory.
//!
//! Checks that a package has the files DMP v0.1 requires and that they are
//! shaped correctly. Nothing in the package is executed: Python sources are
//! only scanned line by line for unindented `def` statements outside
//! triple-quoted strings. They are not parsed, so Python syntax errors are
//! not reported here.
//!
//! The decision card's frontmatter is parsed as real YAML here, unlike the
//! catalog builder, because authors are expected to publish compliant
//! metadata (lists of authors and tags included).

use anyhow::Result;
use serde_yaml_ng::Value;
use std::collections::HashSet;
use std::path::Path;
use tracing::debug;

pub const REQUIRED_FILES: [&str; 5] = [
    "model.py",
    "instance_schema.json",
    "solver.yaml",
    "evaluate.py",
    "decision_card.md",
];

/// JSON Schema drafts an instance schema may declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SchemaDialect {
    Draft7,
    Draft202012,
}

impl SchemaDialect {
    /// Picks the draft named in a `$schema` URI.
    fn detect(schema_uri: &str) -> Option<Self> {
        if schema_uri.contains("draft-07") {
            Some(Self::Draft7)
        } else if schema_uri.contains("2020-12") {
            Some(Self::Draft202012)
        } else {
            None
        }
    }

    /// Checks `schema` against this draft's meta-schema.
    fn check_schema(self, schema: &serde_json::Value) -> std::result::Result<(), String> {
        let result = match self {
            Self::Draft7 => jsonschema::draft7::meta::validate(schema),
            Self::Draft202012 => jsonschema::draft202012::meta::validate(schema),
        };
        result.map_err(|e| e.to_string())
    }
}

const TRIPLE_QUOTES: [&str; 2] = ["\"\"\"", "'''"];

const REQUIRED_CARD_FIELDS: [&str; 7] = [
    "name",
    "version",
    "decision_model_package_version",
    "problem_class",
    "license",
    "authors",
    "tags",
];

/// Validate the package at `root`, returning every problem found.
///
/// An empty vector means the package looks compliant.
pub fn validate_package(root: &Path) -> Vec<String> {
    if !root.exists() {
        return vec![format!("Package root does not exist: {}", root.display())];
    }
    if !root.is_dir() {
        return vec![format!("Package root is not a directory: {}", root.display())];
    }

    let mut errors = Vec::new();
    validate_required_files(root, &mut errors);
    validate_instance_schema(root, &mut errors);
    validate_functions(root, "model.py", &["create_model", "solve"], &mut errors);
    validate_functions(
        root,
        "evaluate.py",
        &["evaluate", "check_feasibility"],
        &mut errors,
    );
    validate_decision_card(root, &mut errors);

    debug!(root = %root.display(), problems = errors.len(), "package validated");
    errors
}

/// CLI entry point. Prints a report and fails when problems were found.
pub fn run_validate(root: &Path) -> Result<()> {
    let errors = validate_package(root);

    if errors.is_empty() {
        println!("DMP validation passed: package appears compliant with v0.1 requirements.");
        return Ok(());
    }

    println!("DMP validation failed with the following issues:");
    for error in &errors {
        println!("- {}", error);
    }
    anyhow::bail!("{} validation issue(s) in {}", errors.len(), root.display())
}

fn validate_required_files(root: &Path, errors: &mut Vec<String>) {
    for filename in REQUIRED_FILES {
        if !root.join(filename).exists() {
            errors.push(format!("Missing required file: {}", filename));
        }
    }
}

fn validate_instance_schema(root: &Path, errors: &mut Vec<String>) {
    let path = root.join("instance_schema.json");
    if !path.exists() {
        return;
    }

    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            errors.push(format!("Failed to read instance_schema.json: {}", e));
            return;
        }
    };

    let schema: serde_json::Value = match serde_json::from_str(&content) {
        Ok(v) => v,
        Err(e) => {
            errors.push(format!(
                "instance_schema.json is not valid JSON: {} (line {})",
                e,
                e.line()
            ));
            return;
        }
    };

    let Some(object) = schema.as_object() else {
        errors.push("instance_schema.json must be a JSON object".to_string());
        return;
    };

    let Some(schema_uri) = object.get("$schema").and_then(|v| v.as_str()) else {
        errors.push("instance_schema.json must declare a $schema string".to_string());
        return;
    };

    let Some(dialect) = SchemaDialect::detect(schema_uri) else {
        errors.push(
            "instance_schema.json declares an unsupported $schema; supported: draft-07, draft 2020-12"
                .to_string(),
        );
        return;
    };

    if let Err(e) = dialect.check_schema(&schema) {
        errors.push(format!("instance_schema.json is not valid JSON Schema: {}", e));
    }
}

fn validate_functions(root: &Path, filename: &str, required: &[&str], errors: &mut Vec<String>) {
    let path = root.join(filename);
    if !path.exists() {
        return;
    }

    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            errors.push(format!("Failed to read {}: {}", filename, e));
            return;
        }
    };

    let defined = top_level_functions(&content);
    for name in required {
        if !defined.contains(name) {
            errors.push(format!(
                "{} must define top-level function: {}()",
                filename, name
            ));
        }
    }
}

/// Names of unindented `def name(...)` definitions, ignoring lines that sit
/// inside a triple-quoted string.
fn top_level_functions(source: &str) -> HashSet<&str> {
    let mut names = HashSet::new();
    let mut open_quote = None;
    for line in source.lines() {
        let inside_string = open_quote.is_some();
        open_quote = track_triple_quotes(line, open_quote);
        if inside_string {
            continue;
        }
        let Some(rest) = line.strip_prefix("def ") else {
            continue;
        };
        if let Some(name) = rest.split('(').next().map(str::trim) {
            if !name.is_empty() {
                names.insert(name);
            }
        }
    }
    names
}

/// Which triple quote, if any, is still open at the end of `line`.
fn track_triple_quotes(line: &str, mut open: Option<&'static str>) -> Option<&'static str> {
    let mut rest = line;
    loop {
        match open {
            Some(quote) => match rest.find(quote) {
                Some(i) => {
                    rest = &rest[i + quote.len()..];
                    open = None;
                }
                None => return open,
            },
            None => {
                let next = TRIPLE_QUOTES
                    .iter()
                    .filter_map(|q| rest.find(q).map(|i| (i, *q)))
                    .min_by_key(|(i, _)| *i);
                match next {
                    Some((i, quote)) => {
                        rest = &rest[i + quote.len()..];
                        open = Some(quote);
                    }
                    None => return None,
                }
            }
        }
    }
}

fn validate_decision_card(root: &Path, errors: &mut Vec<String>) {
    let path = root.join("decision_card.md");
    if !path.exists() {
        return;
    }

    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            errors.push(format!("Failed to read decision_card.md: {}", e));
            return;
        }
    };

    let data = match card_metadata(&content) {
        Ok(data) => data,
        Err(message) => {
            errors.push(message);
            return;
        }
    };

    let Some(fields) = data.as_mapping() else {
        errors.push("decision_card.md front matter must be a YAML mapping".to_string());
        return;
    };

    for field in REQUIRED_CARD_FIELDS {
        if !fields.contains_key(field) {
            errors.push(format!(
                "decision_card.md front matter missing required field: {}",
                field
            ));
        }
    }

    if let Some(dmp_version) = present(&data, "decision_model_package_version") {
        if dmp_version.as_str() != Some("0.1") {
            errors.push("decision_model_package_version must be '0.1'".to_string());
        }
    }

    if let Some(version) = present(&data, "version") {
        let valid = version
            .as_str()
            .is_some_and(|v| semver::Version::parse(v).is_ok());
        if !valid {
            errors.push(
                "version must be a SemVer-like string (e.g. 1.2.3 or 1.2.3-alpha)".to_string(),
            );
        }
    }

    if let Some(authors) = present(&data, "authors") {
        match authors.as_sequence() {
            Some(list) if !list.is_empty() => {
                for (index, author) in list.iter().enumerate() {
                    let index = index + 1;
                    if !author.is_mapping() {
                        errors.push(format!("authors[{}] must be a mapping", index));
                        continue;
                    }
                    let has_name = author
                        .get("name")
                        .and_then(Value::as_str)
                        .is_some_and(|n| !n.trim().is_empty());
                    if !has_name {
                        errors.push(format!("authors[{}].name must be a non-empty string", index));
                    }
                }
            }
            _ => errors.push("authors must be a non-empty list".to_string()),
        }
    }

    if let Some(tags) = present(&data, "tags") {
        match tags.as_sequence() {
            Some(list) if !list.is_empty() => {
                for (index, tag) in list.iter().enumerate() {
                    let ok = tag.as_str().is_some_and(|t| !t.trim().is_empty());
                    if !ok {
                        errors.push(format!("tags[{}] must be a non-empty string", index + 1));
                    }
                }
            }
            _ => errors.push("tags must be a non-empty list of strings".to_string()),
        }
    }
}

/// A card field that is set to something other than YAML null.
fn present<'a>(data: &'a Value, key: &str) -> Option<&'a Value> {
    data.get(key).filter(|v| !v.is_null())
}

/// Parse the leading `---` block as YAML. `...` also closes the block.
fn card_metadata(content: &str) -> std::result::Result<Value, String> {
    let lines: Vec<&str> = content.lines().collect();
    if lines.first().map(|l| l.trim()) != Some("---") {
        return Err("decision_card.md must start with YAML front matter (---)".to_string());
    }

    let end = lines
        .iter()
        .skip(1)
        .position(|l| matches!(l.trim(), "---" | "..."))
        .map(|i| i + 1)
        .ok_or_else(|| "decision_card.md front matter is not terminated with ---".to_string())?;

    let block = lines[1..end].join("\n");
    serde_yaml_ng::from_str(&block)
        .map_err(|e| format!("decision_card.md front matter is invalid YAML: {}", e))
}
