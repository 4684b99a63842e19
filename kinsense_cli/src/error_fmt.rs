//! Human-readable error descriptions and structured JSON error formatting.

use kinsense_core::error::{AbortReason, MotionError};

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    // Typed matches first
    if let Some(me) = err.downcast_ref::<MotionError>() {
        return match me {
            MotionError::Abort(AbortReason::Cancelled) => {
                "What happened: The run was cancelled by the operator.\nLikely causes: Ctrl-C or an external shutdown signal.\nHow to fix: Nothing to fix; start a new run when ready.".to_string()
            }
            MotionError::HardwareFault(msg) => format!(
                "What happened: A sensor reported a hardware fault ({msg}).\nLikely causes: Wrong GPIO pin number, wiring/power issues, or insufficient GPIO permissions.\nHow to fix: Check [pins] in the config, verify the sensor wiring, and ensure the process may access GPIO."
            ),
            MotionError::Hardware(msg) => format!(
                "What happened: A sensor read failed ({msg}).\nLikely causes: Sensor disconnected mid-run or a transient bus error.\nHow to fix: Re-seat the sensor connections and rerun; use --log-level=debug for the raw error."
            ),
            MotionError::Config(msg) => format!(
                "What happened: Invalid configuration ({msg}).\nLikely causes: Missing or out-of-range values in the TOML.\nHow to fix: Edit the config file, then rerun. See README for a sample."
            ),
            MotionError::State(msg) => format!(
                "What happened: The measurement produced an unusable result ({msg}).\nLikely causes: Presence edges closer together than one poll tick, or sensor chatter.\nHow to fix: Lower timing.presence_poll_ms or check the sensor mounting."
            ),
        };
    }

    // String-based heuristics for errors coming from init or config. Walk the
    // whole chain so context wrappers do not hide the root message.
    let msg = err
        .chain()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(": ");
    let lower = msg.to_ascii_lowercase();

    if lower.contains("gpio") {
        return "What happened: Failed to initialize a GPIO pin.\nLikely causes: Incorrect pin number or insufficient GPIO permissions.\nHow to fix: Fix the [pins] values in the config; ensure the process has permission to access GPIO.".to_string();
    }

    if lower.contains("must be") || lower.contains("unreasonably large") {
        return format!(
            "What happened: Configuration is invalid ({msg}).\nLikely causes: Out-of-range values in the TOML.\nHow to fix: Edit the named key in the config file and try again."
        );
    }

    // Generic fallback
    let mut cause = String::new();
    if let Some(src) = err.source() {
        cause = format!(" Cause: {src}");
    }
    format!(
        "Something went wrong.{cause}\nHow to fix: Re-run with --log-level=debug for details. Original: {msg}"
    )
}

/// Map errors to stable exit codes: cancellation maps to 130 (SIGINT
/// convention), everything else returns 1.
pub fn exit_code_for_error(err: &eyre::Report) -> i32 {
    if let Some(MotionError::Abort(AbortReason::Cancelled)) = err.downcast_ref::<MotionError>() {
        return 130;
    }
    1
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    use serde_json::json;

    let reason = match err.downcast_ref::<MotionError>() {
        Some(MotionError::Abort(AbortReason::Cancelled)) => "Cancelled",
        Some(MotionError::Hardware(_)) => "Hardware",
        Some(MotionError::HardwareFault(_)) => "HardwareFault",
        Some(MotionError::Config(_)) => "Config",
        Some(MotionError::State(_)) => "State",
        None => "Error",
    };
    json!({ "reason": reason, "message": humanize(err) }).to_string()
}
