use std::time::Duration;

use super::parsers::{parse_bool_env, parse_duration_value};
use super::*;
use crate::error::ValidationError;

#[test]
fn parse_args_defaults_match_fixed_demo_values() -> Result<(), String> {
    let args = parse_test_args(["reqgate"]).map_err(|err| err.to_string())?;

    let expected_no_color = std::env::var("NO_COLOR")
        .ok()
        .and_then(|value| parse_bool_env(&value).ok())
        .unwrap_or(false);

    let checks = [
        (args.url == "https://httpbin.org/get", "Unexpected url"),
        (args.requests.get() == 100, "Unexpected requests"),
        (args.max_inflight.get() == 5, "Unexpected max_inflight"),
        (args.max_idle == 50, "Unexpected max_idle"),
        (args.preview_chars == 20, "Unexpected preview_chars"),
        (args.request_timeout.is_none(), "Expected no request timeout"),
        (args.connect_timeout.is_none(), "Expected no connect timeout"),
        (!args.insecure, "Expected TLS verification to stay enabled"),
        (!args.verbose, "Expected verbose to be false"),
        (args.no_color == expected_no_color, "Unexpected no_color"),
        (args.config.is_none(), "Expected config to be None"),
    ];
    for (ok, message) in checks {
        if !ok {
            return Err(message.to_owned());
        }
    }
    Ok(())
}

#[test]
fn parse_args_limits_and_aliases() -> Result<(), String> {
    let args = parse_test_args([
        "reqgate",
        "-u",
        "http://localhost:8080/get",
        "-n",
        "12",
        "--max-connections",
        "3",
        "--max-keepalive",
        "7",
        "--preview-chars",
        "4",
        "--timeout",
        "250ms",
        "--connect-timeout",
        "2s",
        "-k",
    ])
    .map_err(|err| err.to_string())?;

    if args.url != "http://localhost:8080/get" {
        return Err(format!("Unexpected url: {}", args.url));
    }
    if args.requests.get() != 12 {
        return Err(format!("Unexpected requests: {}", args.requests));
    }
    if args.max_inflight.get() != 3 {
        return Err(format!("Unexpected max_inflight: {}", args.max_inflight));
    }
    if args.max_idle != 7 {
        return Err(format!("Unexpected max_idle: {}", args.max_idle));
    }
    if args.preview_chars != 4 {
        return Err(format!("Unexpected preview_chars: {}", args.preview_chars));
    }
    if args.request_timeout != Some(Duration::from_millis(250)) {
        return Err(format!("Unexpected timeout: {:?}", args.request_timeout));
    }
    if args.connect_timeout != Some(Duration::from_secs(2)) {
        return Err(format!(
            "Unexpected connect timeout: {:?}",
            args.connect_timeout
        ));
    }
    if !args.insecure {
        return Err("Expected insecure to be set".to_owned());
    }
    Ok(())
}

#[test]
fn parse_args_rejects_zero_inflight() -> Result<(), String> {
    match parse_test_args(["reqgate", "--max-inflight", "0"]) {
        Ok(_) => Err("Expected error for max-inflight=0".to_owned()),
        Err(_) => Ok(()),
    }
}

#[test]
fn parse_args_rejects_zero_requests() -> Result<(), String> {
    match parse_test_args(["reqgate", "-n", "0"]) {
        Ok(_) => Err("Expected error for requests=0".to_owned()),
        Err(_) => Ok(()),
    }
}

#[test]
fn parse_duration_value_units() -> Result<(), String> {
    let cases = [
        ("15ms", Duration::from_millis(15)),
        ("3", Duration::from_secs(3)),
        ("3s", Duration::from_secs(3)),
        ("2m", Duration::from_secs(120)),
        ("1h", Duration::from_secs(3600)),
    ];
    for (input, expected) in cases {
        let parsed = parse_duration_value(input).map_err(|err| err.to_string())?;
        if parsed != expected {
            return Err(format!("{} parsed to {:?}", input, parsed));
        }
    }
    Ok(())
}

#[test]
fn parse_duration_value_rejects_bad_input() -> Result<(), String> {
    if !matches!(parse_duration_value(""), Err(ValidationError::DurationEmpty)) {
        return Err("Expected DurationEmpty".to_owned());
    }
    if !matches!(
        parse_duration_value("ms"),
        Err(ValidationError::InvalidDurationFormat { .. })
    ) {
        return Err("Expected InvalidDurationFormat".to_owned());
    }
    if !matches!(
        parse_duration_value("5d"),
        Err(ValidationError::InvalidDurationUnit { .. })
    ) {
        return Err("Expected InvalidDurationUnit".to_owned());
    }
    if !matches!(parse_duration_value("0ms"), Err(ValidationError::DurationZero)) {
        return Err("Expected DurationZero".to_owned());
    }
    Ok(())
}

#[test]
fn positive_usize_rejects_zero() -> Result<(), String> {
    match PositiveUsize::try_from(0) {
        Err(ValidationError::ValueTooSmall { min: 1 }) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(value) => Err(format!("Expected rejection, got {}", value)),
    }
}

#[test]
fn parse_args_bounds_max_inflight_to_gate_limit() -> Result<(), String> {
    let too_large = usize::MAX.to_string();
    if parse_test_args(["reqgate", "-c", too_large.as_str()]).is_ok() {
        return Err("Expected error for max-inflight above the gate limit".to_owned());
    }

    let at_limit = MAX_INFLIGHT_LIMIT.to_string();
    let args = parse_test_args(["reqgate", "-c", at_limit.as_str()])
        .map_err(|err| err.to_string())?;
    if args.max_inflight.get() != MAX_INFLIGHT_LIMIT {
        return Err(format!("Unexpected max_inflight: {}", args.max_inflight));
    }
    Ok(())
}

#[test]
fn positive_usize_ensure_at_most() -> Result<(), String> {
    let value = PositiveUsize::try_from(8).map_err(|err| err.to_string())?;
    if value.ensure_at_most(8).is_err() {
        return Err("8 should be within a limit of 8".to_owned());
    }
    match value.ensure_at_most(7) {
        Err(ValidationError::ValueTooLarge { max: 7 }) => Ok(()),
        Err(err) => Err(format!("Unexpected error: {}", err)),
        Ok(value) => Err(format!("Expected rejection, got {}", value)),
    }
}
