//! Device timezone detection.
//!
//! Sources are tried in order: the `TZ` environment variable, `/etc/timezone`,
//! then the target of the `/etc/localtime` symlink.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono_tz::Tz;

const TIMEZONE_FILE: &str = "/etc/timezone";
const LOCALTIME_LINK: &str = "/etc/localtime";
const ZONEINFO_MARKER: &str = "zoneinfo/";

/// Detect the IANA id of the device's timezone.
pub fn detect_device_zone_id() -> Result<String> {
    if let Some(id) = std::env::var("TZ")
        .ok()
        .and_then(|value| zone_from_tz_variable(&value))
    {
        return Ok(id);
    }

    if let Some(id) = fs::read_to_string(TIMEZONE_FILE)
        .ok()
        .and_then(|contents| validated(contents.trim()))
    {
        return Ok(id);
    }

    zone_from_localtime_link(Path::new(LOCALTIME_LINK))
}

fn zone_from_tz_variable(value: &str) -> Option<String> {
    validated(value.trim().trim_start_matches(':'))
}

fn zone_from_localtime_link(path: &Path) -> Result<String> {
    let target = fs::read_link(path)
        .with_context(|| format!("Failed to read timezone link {}", path.display()))?;
    let target = target.to_string_lossy();

    let Some(index) = target.find(ZONEINFO_MARKER) else {
        bail!("{} does not point into a zoneinfo directory", path.display());
    };

    let id = &target[index + ZONEINFO_MARKER.len()..];
    validated(id).with_context(|| format!("Unknown timezone '{id}' behind {}", path.display()))
}

fn validated(id: &str) -> Option<String> {
    if id.is_empty() {
        return None;
    }
    id.parse::<Tz>().ok().map(|zone| zone.name().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_tz_variable_forms() {
        assert_eq!(
            zone_from_tz_variable("Europe/Berlin"),
            Some("Europe/Berlin".to_string())
        );
        assert_eq!(
            zone_from_tz_variable(":America/Chicago"),
            Some("America/Chicago".to_string())
        );
        assert_eq!(zone_from_tz_variable("EST5EDT,M3.2.0,M11.1.0"), None);
        assert_eq!(zone_from_tz_variable(""), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_localtime_symlink_target() {
        let dir = tempdir().unwrap();
        let zoneinfo = dir.path().join("usr/share/zoneinfo/Asia");
        fs::create_dir_all(&zoneinfo).unwrap();
        let target = zoneinfo.join("Tokyo");
        fs::write(&target, b"").unwrap();

        let link = dir.path().join("localtime");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        assert_eq!(zone_from_localtime_link(&link).unwrap(), "Asia/Tokyo");
    }

    #[test]
    fn test_localtime_must_be_a_link() {
        let dir = tempdir().unwrap();
        let plain = dir.path().join("localtime");
        fs::write(&plain, b"TZif").unwrap();

        assert!(zone_from_localtime_link(&plain).is_err());
    }
}
