//! Actor identity printed after the timestamp.

use once_cell::sync::Lazy;

/// Placeholder used when no user name can be determined.
pub const UNKNOWN_ACTOR: &str = "unknown";

static CURRENT_USER: Lazy<String> = Lazy::new(lookup_username);

/// Name of the user running this process.
///
/// Resolved once per process and cached.
pub fn username() -> &'static str {
    CURRENT_USER.as_str()
}

fn lookup_username() -> String {
    ["USER", "USERNAME", "LOGNAME"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .map(|name| name.trim().to_string())
        .find(|name| !name.is_empty())
        .or_else(home_dir_name)
        .unwrap_or_else(|| UNKNOWN_ACTOR.to_string())
}

// Last component of the home directory, e.g. /home/alice -> alice.
fn home_dir_name() -> Option<String> {
    dirs::home_dir()?
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
}
