use crate::common::error::ScriptError;
use mlua::{Lua, Value};

/// Conventional entry function a script may define to receive the input
/// string and return a result.
pub const ENTRY_FUNCTION: &str = "run_automation";

/// Luau heap limit per invocation.
pub const SCRIPT_MEMORY_LIMIT_BYTES: usize = 16 * 1024 * 1024;

/// Returned when a script has no entry function (or its entry returns nil).
const DEFAULT_SUCCESS_MESSAGE: &str = "Script executed successfully";

/// Build a fresh sandboxed Luau runtime for a single invocation.
///
/// Each run gets its own VM, so symbols defined by one script are never
/// observable by a later run. The `host` table is the only API exposed
/// beyond the sandboxed standard library.
fn build_runtime() -> Result<Lua, mlua::Error> {
    let lua = Lua::new();
    lua.sandbox(true)?;
    lua.set_memory_limit(SCRIPT_MEMORY_LIMIT_BYTES)?;

    let host = lua.create_table()?;
    host.set(
        "log",
        lua.create_function(|_, message: String| {
            let _ = crate::logging::write_domain_log("script", &message);
            Ok(())
        })?,
    )?;
    lua.globals().set("host", host)?;

    Ok(lua)
}

/// Evaluate script source and, if `run_automation` is defined afterward,
/// call it with the input string and return its textual result.
///
/// There is deliberately no timeout: a blocking script blocks the call,
/// matching the synchronous bridge contract.
pub fn evaluate(name: &str, source: &str, input: &str) -> Result<String, ScriptError> {
    let lua = build_runtime()?;

    lua.load(source).set_name(name).exec()?;

    let entry: Option<mlua::Function> = lua.globals().get(ENTRY_FUNCTION)?;
    let entry = match entry {
        Some(f) => f,
        None => return Ok(DEFAULT_SUCCESS_MESSAGE.to_string()),
    };

    let value = entry.call::<Value>(input.to_string())?;
    let text = match value {
        Value::Nil => DEFAULT_SUCCESS_MESSAGE.to_string(),
        Value::String(s) => s.to_string_lossy(),
        other => lua
            .coerce_string(other)?
            .map(|s| s.to_string_lossy())
            .unwrap_or_else(|| DEFAULT_SUCCESS_MESSAGE.to_string()),
    };

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_result_is_returned() {
        let out = evaluate(
            "t",
            "function run_automation(input)\n  return \"got: \" .. input\nend",
            "hello",
        )
        .unwrap();
        assert_eq!(out, "got: hello");
    }

    #[test]
    fn test_numeric_result_is_stringified() {
        let out = evaluate("t", "function run_automation(input)\n  return 7\nend", "").unwrap();
        assert_eq!(out, "7");
    }

    #[test]
    fn test_no_entry_function_yields_fixed_message() {
        let out = evaluate("t", "local x = 1", "").unwrap();
        assert_eq!(out, DEFAULT_SUCCESS_MESSAGE);
    }

    #[test]
    fn test_nil_result_yields_fixed_message() {
        let out = evaluate("t", "function run_automation(input)\nend", "").unwrap();
        assert_eq!(out, DEFAULT_SUCCESS_MESSAGE);
    }

    #[test]
    fn test_top_level_error_is_reported() {
        let err = evaluate("t", "error(\"boom\")", "").unwrap_err();
        assert!(matches!(err, ScriptError::Runtime(_)));
        assert!(err.to_string().contains("boom"));
    }

    #[test]
    fn test_entry_error_is_reported() {
        let err = evaluate(
            "t",
            "function run_automation(input)\n  error(\"inside\")\nend",
            "",
        )
        .unwrap_err();
        assert!(err.to_string().contains("inside"));
    }

    #[test]
    fn test_globals_do_not_leak_between_runs() {
        let first = evaluate(
            "a",
            "leak = 42\nfunction run_automation(input)\n  return tostring(leak)\nend",
            "",
        )
        .unwrap();
        assert_eq!(first, "42");

        let second = evaluate(
            "b",
            "function run_automation(input)\n  return tostring(leak)\nend",
            "",
        )
        .unwrap();
        assert_eq!(second, "nil");
    }

    #[test]
    fn test_host_log_is_callable() {
        // write_domain_log fails silently when the logger thread is absent;
        // the call itself must not raise inside the script.
        let out = evaluate(
            "t",
            "host.log(\"from script\")\nfunction run_automation(input)\n  return \"done\"\nend",
            "",
        )
        .unwrap();
        assert_eq!(out, "done");
    }
}
