use crate::utils::error::{FarmaError, Result};
use std::ops::RangeInclusive;
use url::Url;

/// Bounds for `directory.timeout_seconds`. The directory answers a single
/// small GET, so anything past two minutes is a misconfiguration.
pub const TIMEOUT_SECONDS: RangeInclusive<u64> = 1..=120;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: impl ToString, reason: impl Into<String>) -> FarmaError {
    FarmaError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// Accepts only absolute `http`/`https` URLs with a host.
pub fn validate_http_url(field_name: &str, url_str: &str) -> Result<()> {
    let url = Url::parse(url_str.trim())
        .map_err(|e| invalid(field_name, url_str, format!("not a URL: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field_name,
            url_str,
            format!("scheme {:?} is not http or https", url.scheme()),
        ));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid(field_name, url_str, "missing host"));
    }

    Ok(())
}

pub fn validate_timeout_seconds(field_name: &str, seconds: u64) -> Result<()> {
    if TIMEOUT_SECONDS.contains(&seconds) {
        Ok(())
    } else {
        Err(invalid(
            field_name,
            seconds,
            format!(
                "must be between {} and {} seconds",
                TIMEOUT_SECONDS.start(),
                TIMEOUT_SECONDS.end()
            ),
        ))
    }
}

pub fn validate_not_blank(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(invalid(field_name, value, "must not be blank"));
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(invalid(
            field_name,
            value,
            format!("allowed values: {}", allowed.join(", ")),
        ));
    }
    Ok(())
}
