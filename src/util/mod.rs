//! Small helpers: opening URLs in the default browser and formatting
//! millisecond timestamps.

use chrono::DateTime;

/// What: Open a URL in the user's default browser (new browsing context).
///
/// Inputs:
/// - `url`: URL string to open.
///
/// Output:
/// - No return value; spawns a background process to open the URL.
///
/// Details:
/// - On Windows, uses `cmd /c start`, with fallback to `PowerShell` `Start-Process`.
/// - On Unix-like systems, uses `xdg-open` (Linux) or `open` (macOS).
/// - Spawns the command in a background thread and ignores errors.
/// - During tests, this is a no-op to avoid opening real browser windows.
#[cfg_attr(test, allow(unused_variables))]
#[allow(clippy::missing_const_for_fn)]
pub fn open_url(url: &str) {
    #[cfg(not(test))]
    {
        let url = url.to_string();
        std::thread::spawn(move || {
            #[cfg(target_os = "windows")]
            {
                let _ = std::process::Command::new("cmd")
                    .args(["/c", "start", "", &url])
                    .stdin(std::process::Stdio::null())
                    .stdout(std::process::Stdio::null())
                    .stderr(std::process::Stdio::null())
                    .spawn()
                    .or_else(|_| {
                        std::process::Command::new("powershell")
                            .args(["-Command", &format!("Start-Process '{url}'")])
                            .stdin(std::process::Stdio::null())
                            .stdout(std::process::Stdio::null())
                            .stderr(std::process::Stdio::null())
                            .spawn()
                    });
            }
            #[cfg(not(target_os = "windows"))]
            {
                let _ = std::process::Command::new("xdg-open")
                    .arg(&url)
                    .stdin(std::process::Stdio::null())
                    .stdout(std::process::Stdio::null())
                    .stderr(std::process::Stdio::null())
                    .spawn()
                    .or_else(|_| {
                        std::process::Command::new("open")
                            .arg(&url)
                            .stdin(std::process::Stdio::null())
                            .stdout(std::process::Stdio::null())
                            .stderr(std::process::Stdio::null())
                            .spawn()
                    });
            }
        });
    }
}

/// What: Format milliseconds since the Unix epoch as a short UTC date.
///
/// Inputs:
/// - `millis`: Timestamp in milliseconds (the server's `CreateAt` field).
///
/// Output:
/// - `Mon-DD-YYYY` (e.g., `Aug-07-2023`), or an empty string for
///   non-positive or unrepresentable values.
#[must_use]
pub fn millis_to_date(millis: i64) -> String {
    if millis <= 0 {
        return String::new();
    }
    DateTime::from_timestamp(millis / 1000, 0)
        .map(|dt| dt.format("%b-%d-%Y").to_string())
        .unwrap_or_default()
}

/// What: Format seconds since the Unix epoch as a UTC date-time string.
///
/// Inputs:
/// - `secs`: Timestamp in seconds.
///
/// Output:
/// - `YYYY-MM-DD HH:MM:SS` (UTC), or an empty string when unrepresentable.
#[must_use]
pub fn ts_to_datetime(secs: i64) -> String {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// What: Millisecond timestamps format to the status-table date shape.
    ///
    /// - Input: Epoch, a known date, and non-positive values
    /// - Output: `Mon-DD-YYYY` strings; empty for zero and negatives
    #[test]
    fn millis_to_date_formats() {
        assert_eq!(millis_to_date(0), "");
        assert_eq!(millis_to_date(-5), "");
        assert_eq!(millis_to_date(1000), "Jan-01-1970");
        // 2023-08-07 00:00:00 UTC
        assert_eq!(millis_to_date(1_691_366_400_000), "Aug-07-2023");
    }

    /// What: Second timestamps format as full date-times.
    ///
    /// - Input: Epoch and a leap-day timestamp
    /// - Output: Correct UTC strings
    #[test]
    fn ts_to_datetime_formats() {
        assert_eq!(ts_to_datetime(0), "1970-01-01 00:00:00");
        assert_eq!(ts_to_datetime(951_782_400), "2000-02-29 00:00:00");
    }
}
