use std::env;

use once_cell::sync::Lazy;

pub static DEBUG_ENABLED: Lazy<bool> = Lazy::new(|| {
    env::var("PSEUDO_DEBUG").map_or(false, |log_level| log_level.eq("true") || log_level.eq("1"))
});

/// Appends `details` to `message` only when debug output is enabled,
/// keeping error causes short in normal runs.
///
/// # Arguments
///
/// * `message` - The main message.
/// * `details` - Extra context shown in debug mode.
pub fn debug_message<M, D>(message: M, details: D) -> String
where
    M: AsRef<str>,
    D: AsRef<str>,
{
    if *DEBUG_ENABLED {
        format!("{}{}", message.as_ref(), details.as_ref())
    } else {
        message.as_ref().to_string()
    }
}

/// Logs a debug message to stderr with optional formatted arguments.
///
/// Output goes to stderr so it never mixes with the pseudo-localized text
/// written on stdout.
///
/// # Examples
///
/// ```
/// use pseudo::debug;
///
/// // Printed in yellow only when PSEUDO_DEBUG is "true" or "1"
/// debug!("Library loaded");
/// debug!("Mode {} with {} stages", "XA", 3);
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:expr) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", nu_ansi_term::Color::Yellow.paint(format!("{}", $fmt)));
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", nu_ansi_term::Color::Yellow.paint(format!($fmt, $($arg)*)));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_message_details_follow_flag() {
        let message = debug_message("cannot read", " [path] /tmp/pseudo.toml");
        if *DEBUG_ENABLED {
            assert_eq!(message, "cannot read [path] /tmp/pseudo.toml");
        } else {
            assert_eq!(message, "cannot read");
        }
    }
}
