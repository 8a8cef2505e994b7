//! Wishlist RPC Server: JSON-RPC over stdin/stdout for an external UI shell.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"destination.add", "params":{"name":"Kyoto"}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":{"code":"...","message":"..."}}

use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use std::sync::Mutex;

use serde_json::{json, Value};

use travel_wishlist::app::App;
use travel_wishlist::logging;
use travel_wishlist::rpc_handler::handle_method;
use travel_wishlist::services::settings_engine::SettingsEngineTrait;

fn write_line(out: &mut impl Write, value: &Value) -> io::Result<()> {
    writeln!(out, "{}", value)?;
    out.flush()
}

fn serve(app: &Mutex<App>) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    write_line(
        &mut stdout,
        &json!({"event": "ready", "version": env!("CARGO_PKG_VERSION")}),
    )?;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let req: Value = match serde_json::from_str(&line) {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!(error = %e, "unparseable request");
                let err = json!({"id": null, "error": {"code": "parse_error", "message": e.to_string()}});
                write_line(&mut stdout, &err)?;
                continue;
            }
        };

        let id = req.get("id").cloned().unwrap_or(Value::Null);
        let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
        let params = req.get("params").cloned().unwrap_or(json!({}));

        let response = match handle_method(app, method, &params) {
            Ok(val) => json!({"id": id, "result": val}),
            Err(err) => {
                tracing::warn!(method, code = %err.code, "request failed: {}", err.message);
                json!({"id": id, "error": err})
            }
        };
        write_line(&mut stdout, &response)?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let log = logging::init();
    let app = match App::open(None, None) {
        Ok(app) => app,
        Err(e) => {
            tracing::error!(error = %e, "failed to initialize wishlist");
            eprintln!("wishlist-rpc: {}", e);
            return ExitCode::FAILURE;
        }
    };
    log.apply_level(&app.settings_engine.get_settings().logging.level);
    tracing::info!(config = app.settings_engine.get_config_path(), "wishlist-rpc started");

    let app = Mutex::new(app);
    match serve(&app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "stdio channel failed");
            ExitCode::FAILURE
        }
    }
}
