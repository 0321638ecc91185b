//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{LexisArgs, OutputFormat};
use crate::error::Result;
use crate::spelling::{DictionaryStats, Verification};

/// Result structure for word checks.
#[derive(Debug, Serialize, Deserialize)]
pub struct CheckResults {
    pub dictionary: String,
    pub word_count: usize,
    pub results: Vec<Verification>,
    pub known: usize,
    pub duration_us: u64,
}

/// Result structure for dictionary validation.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationResult {
    pub dictionary: String,
    pub word_count: usize,
    pub valid: bool,
    pub first_violation: Option<usize>,
    pub message: Option<String>,
}

/// Dictionary statistics.
#[derive(Debug, Serialize, Deserialize)]
pub struct StatsResult {
    pub dictionary: String,
    #[serde(flatten)]
    pub stats: DictionaryStats,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &LexisArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
        OutputFormat::Csv => output_csv(result, args),
        OutputFormat::Yaml => output_yaml(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &LexisArgs) -> Result<()> {
    if args.verbosity() > 1 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;

    if value.get("results").is_some_and(|r| r.is_array()) {
        output_check_results_human(&value, args)
    } else {
        output_generic_human(&value, args)
    }
}

/// Output word check results in human format.
fn output_check_results_human(value: &serde_json::Value, args: &LexisArgs) -> Result<()> {
    let Some(obj) = value.as_object() else {
        return Ok(());
    };

    if let Some(results) = obj.get("results").and_then(|r| r.as_array()) {
        for result in results {
            let original = result.get("original").and_then(|o| o.as_str()).unwrap_or("");
            let known = result.get("known").and_then(|k| k.as_bool()).unwrap_or(false);
            let shown = result
                .get("corrected")
                .and_then(|c| c.as_str())
                .unwrap_or(original);
            let status = match (known, shown == original) {
                (true, _) => "known",
                (false, true) => "unknown",
                (false, false) => "corrected",
            };
            println!("{original} -> {shown} ({status})");
        }
    }

    if args.verbosity() > 0 {
        println!();
        if let (Some(known), Some(total)) = (
            obj.get("known").and_then(|k| k.as_u64()),
            obj.get("results").and_then(|r| r.as_array()).map(Vec::len),
        ) {
            println!("Known words: {known}/{total}");
        }
        if let Some(duration) = obj.get("duration_us").and_then(|d| d.as_u64()) {
            println!("Lookup time: {duration}\u{b5}s");
        }
    }
    Ok(())
}

/// Output a flat result in human format, one field per line.
fn output_generic_human(value: &serde_json::Value, _args: &LexisArgs) -> Result<()> {
    if let Some(obj) = value.as_object() {
        for (key, val) in obj {
            let formatted_val = format_value(val);
            println!("{key}: {formatted_val}");
        }
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &LexisArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Output in CSV format.
///
/// Word checks become one row per word; other results become key/value rows.
fn output_csv<T: Serialize>(result: &T, _args: &LexisArgs) -> Result<()> {
    let value = serde_json::to_value(result)?;
    let Some(obj) = value.as_object() else {
        return Ok(());
    };

    if let Some(rows) = obj.get("results").and_then(|r| r.as_array()) {
        for (i, row) in rows.iter().filter_map(|r| r.as_object()).enumerate() {
            if i == 0 {
                let headers: Vec<&str> = row.keys().map(String::as_str).collect();
                println!("{}", headers.join(","));
            }
            let values: Vec<String> = row.values().map(format_csv_value).collect();
            println!("{}", values.join(","));
        }
    } else {
        println!("key,value");
        for (key, val) in obj {
            let formatted_csv_value = format_csv_value(val);
            println!("{key},{formatted_csv_value}");
        }
    }

    Ok(())
}

/// Output in YAML format.
fn output_yaml<T: Serialize>(result: &T, _args: &LexisArgs) -> Result<()> {
    let value = serde_json::to_value(result)?;
    if let Some(obj) = value.as_object() {
        print_yaml_map(obj, "");
    }
    Ok(())
}

/// Print a map of scalars and arrays of flat maps as YAML.
fn print_yaml_map(obj: &serde_json::Map<String, serde_json::Value>, indent: &str) {
    for (key, val) in obj {
        match val.as_array() {
            Some(items) => {
                println!("{indent}{key}:");
                for item in items.iter().filter_map(|i| i.as_object()) {
                    let mut prefix = "- ";
                    for (item_key, item_val) in item {
                        let formatted = format_yaml_value(item_val);
                        println!("{indent}  {prefix}{item_key}: {formatted}");
                        prefix = "  ";
                    }
                }
            }
            None => {
                let formatted = format_yaml_value(val);
                println!("{indent}{key}: {formatted}");
            }
        }
    }
}

/// Format a scalar for YAML output, quoting strings YAML would misread.
fn format_yaml_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) if s.is_empty() || s.contains([':', '#', '"', '\\']) => {
            serde_json::Value::String(s.clone()).to_string()
        }
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Format a scalar for human output.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

/// Format a scalar for CSV output.
fn format_csv_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) if s.contains([',', '"', '\n']) => {
            format!("\"{}\"", s.replace('"', "\"\""))
        }
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_csv_value() {
        assert_eq!(format_csv_value(&json!("test")), "test");
        assert_eq!(format_csv_value(&json!("a,b")), "\"a,b\"");
        assert_eq!(format_csv_value(&json!("say \"hi\"")), "\"say \"\"hi\"\"\"");
        assert_eq!(format_csv_value(&json!(42)), "42");
        assert_eq!(format_csv_value(&json!(true)), "true");
        assert_eq!(format_csv_value(&serde_json::Value::Null), "");
    }

    #[test]
    fn test_format_value() {
        assert_eq!(format_value(&json!("test")), "test");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!(false)), "false");
        assert_eq!(format_value(&json!(2.5)), "2.5");
        assert_eq!(format_value(&serde_json::Value::Null), "-");
    }

    #[test]
    fn test_format_yaml_value() {
        assert_eq!(format_yaml_value(&json!("cat")), "cat");
        assert_eq!(
            format_yaml_value(&json!("cta -> cat: corrected")),
            "\"cta -> cat: corrected\""
        );
        assert_eq!(format_yaml_value(&json!("")), "\"\"");
        assert_eq!(format_yaml_value(&json!(3)), "3");
        assert_eq!(format_yaml_value(&serde_json::Value::Null), "null");
    }

    #[test]
    fn test_stats_result_is_flattened() {
        let result = StatsResult {
            dictionary: "words.txt".to_string(),
            stats: DictionaryStats {
                word_count: 2,
                min_length: 2,
                max_length: 3,
                average_length: 2.5,
                first_word: Some("an".to_string()),
                last_word: Some("and".to_string()),
            },
        };

        let value = serde_json::to_value(&result).unwrap();
        assert_eq!(value["dictionary"], json!("words.txt"));
        assert_eq!(value["word_count"], json!(2));
        assert_eq!(value["last_word"], json!("and"));
    }
}
