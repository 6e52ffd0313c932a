use serde::Serialize;
use serde_json::{Map, Value};

use crate::cli::OutputFormat;

pub mod table;

use table::{TableOptions, render_table};

/// Render a serializable response to a string in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        OutputFormat::Table => render_value_table(&serde_json::to_value(value)?),
        OutputFormat::Raw => Ok(serde_json::to_string(value)?),
    }
}

/// Print a serializable response in the requested format.
pub fn output<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    let rendered = render(value, format)?;
    println!("{rendered}");
    Ok(())
}

fn render_value_table(value: &Value) -> anyhow::Result<String> {
    let options = TableOptions::from_env();
    Ok(match value {
        Value::Array(items) => render_array_table(items, options),
        Value::Object(map) => render_object_table(map, options),
        scalar => render_table(&["value"], &[vec![value_to_cell(scalar)]], options),
    })
}

/// Scalar fields as a key/value table, then one titled table per nested array.
fn render_object_table(map: &Map<String, Value>, options: TableOptions) -> String {
    let (nested, scalars): (Vec<_>, Vec<_>) =
        map.iter().partition(|(_, value)| value.is_array());

    let rows = scalars
        .into_iter()
        .map(|(key, value)| vec![key.clone(), value_to_cell(value)])
        .collect::<Vec<_>>();
    let mut sections = vec![render_table(&["field", "value"], &rows, options)];

    for (key, value) in nested {
        let items = value.as_array().map_or(&[][..], Vec::as_slice);
        sections.push(format!("\n{key}:\n{}", render_array_table(items, options)));
    }
    sections.join("\n")
}

fn render_array_table(items: &[Value], options: TableOptions) -> String {
    if items.is_empty() {
        return String::from("(no rows)");
    }

    if !items.iter().all(Value::is_object) {
        let rows = items
            .iter()
            .map(|item| vec![value_to_cell(item)])
            .collect::<Vec<_>>();
        return render_table(&["value"], &rows, options);
    }

    let mut headers = Vec::<&str>::new();
    for map in items.iter().filter_map(Value::as_object) {
        for key in map.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }
    headers.sort_unstable();

    let rows = items
        .iter()
        .filter_map(Value::as_object)
        .map(|map| {
            headers
                .iter()
                .map(|header| map.get(*header).map_or_else(|| String::from("-"), value_to_cell))
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    render_table(&headers, &rows, options)
}

fn value_to_cell(value: &Value) -> String {
    match value {
        Value::Null => String::from("-"),
        Value::Bool(v) => v.to_string(),
        Value::Number(v) => v.to_string(),
        Value::String(v) => v.clone(),
        other => serde_json::to_string(other).unwrap_or_else(|_| String::from("<invalid-json>")),
    }
}

#[cfg(test)]
mod tests {
    use proj_core::entities::{Project, Step};
    use rust_decimal::Decimal;

    use super::render;
    use crate::cli::OutputFormat;

    fn deck() -> Project {
        Project {
            id: Some(1),
            name: "Deck".into(),
            estimated_hours: Some(Decimal::new(1000, 2)),
            steps: vec![Step {
                id: Some(5),
                project_id: 1,
                text: "Dig holes".into(),
                order: 1,
            }],
            ..Project::default()
        }
    }

    #[test]
    fn json_render_keeps_decimal_text() {
        let out = render(&deck(), OutputFormat::Json).expect("json render should work");
        let parsed: serde_json::Value = serde_json::from_str(&out).expect("json should parse");
        assert_eq!(parsed["name"], "Deck");
        assert_eq!(parsed["estimated_hours"], "10.00");
        assert_eq!(parsed["steps"][0]["text"], "Dig holes");
    }

    #[test]
    fn raw_render_is_single_line_json() {
        let out = render(&deck(), OutputFormat::Raw).expect("raw render should work");
        assert!(!out.contains('\n'));
    }

    #[test]
    fn table_render_for_project_lists_fields_and_children() {
        let out = render(&deck(), OutputFormat::Table).expect("table render should work");

        assert!(out.lines().next().is_some_and(|line| line.starts_with("field")));
        assert!(out.contains("estimated_hours  10.00"));
        assert!(
            out.lines()
                .any(|line| line.starts_with("notes ") && line.ends_with('-'))
        );
        assert!(out.contains("steps:"));
        assert!(out.contains("Dig holes"));
        assert!(out.contains("materials:\n(no rows)"));
    }

    #[test]
    fn table_render_for_empty_list() {
        let out = render(&Vec::<Project>::new(), OutputFormat::Table).unwrap();
        assert_eq!(out, "(no rows)");
    }
}
