//! Shared CLI helpers.

use std::io::Read;

use anyhow::Result;
use chrono_tz::Tz;
use daygrid_core::event::parse_timezone;

/// Resolve the timezone: explicit flag, then the system zone, then UTC.
pub fn resolve_timezone(arg: Option<&str>) -> Result<Tz> {
    match arg {
        Some(name) => Ok(parse_timezone(name)?),
        None => {
            let name = iana_time_zone::get_timezone().unwrap_or_else(|_| "UTC".to_string());
            Ok(name.parse().unwrap_or(chrono_tz::UTC))
        }
    }
}

/// Read events JSON from a file path, or from stdin when the path is "-"
/// or omitted.
pub fn read_input(file: Option<&str>) -> Result<String> {
    match file {
        Some(path) if path != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}
