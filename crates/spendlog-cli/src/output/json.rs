use std::io;

use serde::Serialize;
use serde_json::{Value, json};
use spendlog_client::{LedgerError, SuccessEnvelope};

const JSON_VERSION: &str = "v1";

pub fn render_success_json(success: &SuccessEnvelope) -> io::Result<String> {
    let value = match success.command.as_str() {
        // Lists are emitted as bare row arrays.
        "txn list" | "category list" => success
            .data
            .get("rows")
            .cloned()
            .unwrap_or_else(|| Value::Array(Vec::new())),
        "txn add" | "txn edit" | "txn remove" | "summary" | "chart breakdown"
        | "chart monthly" => json!({
            "ok": true,
            "version": JSON_VERSION,
            "data": success.data.clone()
        }),
        _ => {
            return Err(io::Error::other(format!(
                "JSON output is not supported for command `{}`",
                success.command
            )));
        }
    };

    serialize_json_pretty(&value)
}

pub fn render_error_json(error: &LedgerError) -> io::Result<String> {
    let payload = json!({
        "error": {
            "code": error.code,
            "message": error.message,
            "recovery_steps": error.recovery_steps,
        }
    });
    serialize_json_pretty(&payload)
}

fn serialize_json_pretty<T>(value: &T) -> io::Result<String>
where
    T: Serialize,
{
    serde_json::to_string_pretty(value).map_err(io::Error::other)
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use spendlog_client::{LedgerError, SuccessEnvelope};

    use super::{render_error_json, render_success_json};

    fn success(command: &str, data: Value) -> SuccessEnvelope {
        SuccessEnvelope {
            ok: true,
            command: command.to_string(),
            version: "0.1.0".to_string(),
            data,
        }
    }

    #[test]
    fn txn_list_json_returns_raw_row_array() {
        let payload = success(
            "txn list",
            json!({
                "filters": {"category": "all", "year": null, "month": null},
                "total": 1,
                "years": ["2024"],
                "rows": [{"txn_id": "txn_1", "amount": 40.0}]
            }),
        );

        let rendered = render_success_json(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert!(value.is_array());
                assert_eq!(value[0]["txn_id"], Value::String("txn_1".to_string()));
            }
        }
    }

    #[test]
    fn summary_json_uses_structured_envelope() {
        let payload = success(
            "summary",
            json!({
                "transaction_count": 2,
                "main": {"income": 100.0, "expense": 40.0, "balance": 60.0},
                "excluded": {"income": 0.0, "expense": 0.0, "balance": 0.0}
            }),
        );

        let rendered = render_success_json(&payload);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(value["ok"], Value::Bool(true));
                assert_eq!(value["version"], Value::String("v1".to_string()));
                assert_eq!(value["data"]["main"]["balance"], Value::from(60.0));
            }
        }
    }

    #[test]
    fn runtime_error_json_uses_universal_shape() {
        let error = LedgerError::new("not_found", "missing", vec!["run txn list".to_string()]);
        let rendered = render_error_json(&error);
        assert!(rendered.is_ok());
        if let Ok(text) = rendered {
            let parsed: Result<Value, _> = serde_json::from_str(&text);
            assert!(parsed.is_ok());
            if let Ok(value) = parsed {
                assert_eq!(
                    value["error"]["code"],
                    Value::String("not_found".to_string())
                );
                assert!(value.get("ok").is_none());
            }
        }
    }
}
