use clap::ValueEnum;
use probe_lib::TestResult;
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

fn render_text_from_model<T: Serialize + ?Sized>(model: &T) -> String {
    let value = serde_json::to_value(model).unwrap_or(Value::Null);
    render_value(&value, 0)
}

fn render_value(value: &Value, indent: usize) -> String {
    let pad = " ".repeat(indent);
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => format!("{pad}{b}\n"),
        Value::Number(n) => format!("{pad}{n}\n"),
        Value::String(s) => {
            let mut out = String::new();
            for line in s.lines() {
                out.push_str(&format!("{pad}{line}\n"));
            }
            if out.is_empty() {
                out.push_str(&format!("{pad}\n"));
            }
            out
        }
        Value::Array(arr) => {
            let mut s = String::new();
            for item in arr {
                match item {
                    Value::Array(_) | Value::Object(_) => {
                        s.push_str(&format!("{pad}-\n"));
                        s.push_str(&render_value(item, indent + 2));
                    }
                    _ => {
                        let rendered = render_value(item, 0);
                        s.push_str(&format!("{}- {}\n", pad, rendered.trim_end()));
                    }
                }
            }
            s
        }
        Value::Object(map) => {
            let mut s = String::new();
            for (k, v) in map {
                match v {
                    Value::Null => {}
                    Value::Array(_) | Value::Object(_) => {
                        s.push_str(&format!("{pad}{k}:\n"));
                        s.push_str(&render_value(v, indent + 2));
                    }
                    Value::String(str_val) if str_val.contains('\n') => {
                        s.push_str(&format!("{pad}{k}:\n"));
                        s.push_str(&render_value(v, indent + 2));
                    }
                    _ => {
                        let v_str = match v {
                            Value::String(str_val) => str_val.clone(),
                            value => value.to_string(),
                        };
                        s.push_str(&format!("{pad}{k}: {v_str}\n"));
                    }
                }
            }
            s
        }
    }
}

/// Response body for display: JSON pretty-printed, text as received.
fn render_body(data: &Value) -> String {
    match data {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_default(),
    }
}

pub struct Formatter {
    engine: OutputFormat,
}

impl Formatter {
    pub fn new(engine: OutputFormat) -> Self {
        Self { engine }
    }

    pub fn format<T: Serialize>(&self, model: &T) -> String {
        match self.engine {
            OutputFormat::Text => render_text_from_model(model),
            OutputFormat::Json => serde_json::to_string_pretty(model).unwrap_or_default(),
        }
    }

    pub fn format_list<T: Serialize>(&self, list: &[T], empty_msg: &str) -> String {
        match self.engine {
            OutputFormat::Text => {
                if list.is_empty() {
                    format!("{empty_msg}\n")
                } else {
                    render_text_from_model(list)
                }
            }
            OutputFormat::Json => {
                let mut out =
                    serde_json::to_string_pretty(list).unwrap_or_else(|_| "[]".to_string());
                out.push('\n');
                out
            }
        }
    }

    /// Status badge, duration badge, headers, then the body.
    pub fn format_result(&self, result: &TestResult) -> String {
        match self.engine {
            OutputFormat::Text => {
                let mut out = format!(
                    "status: {} ({})\n",
                    result.status_line(),
                    result.status_class()
                );
                out.push_str(&format!("duration: {} ms\n", result.duration_ms));
                out.push_str(&format!("timestamp: {}\n", result.timestamp));
                if !result.headers.is_empty() {
                    out.push_str("headers:\n");
                    for (key, value) in result.headers.iter() {
                        out.push_str(&format!("  {key}: {value}\n"));
                    }
                }
                out.push_str("body:\n");
                let body = render_body(&result.data);
                out.push_str(&body);
                if !body.ends_with('\n') {
                    out.push('\n');
                }
                out
            }
            OutputFormat::Json => {
                let mut out = serde_json::to_string_pretty(result).unwrap_or_default();
                out.push('\n');
                out
            }
        }
    }
}

pub fn get_formatter(output_format: &OutputFormat) -> Formatter {
    Formatter::new(*output_format)
}
