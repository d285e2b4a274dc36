#![forbid(unsafe_code)]

//! Debug tracing of layout passes controlled by an environment variable.
//!
//! Set `UGRID_DEBUG_TRACE=1` (or `true`) to print one line per measure and
//! arrange pass to stderr. The variable is read once; afterwards every check
//! is a single static bool load.
//!
//! ```ignore
//! ugrid_core::debug_trace!("measure rows={} cols={}", rows, cols);
//! ```

use std::sync::LazyLock;
use std::time::Instant;

/// Environment variable enabling stderr pass traces.
pub const ENV_DEBUG_TRACE: &str = "UGRID_DEBUG_TRACE";

static DEBUG_TRACE_ENABLED: LazyLock<bool> =
    LazyLock::new(|| flag_from_env_with(|key| std::env::var(key).ok()));

static START_TIME: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Resolve the trace flag through a custom environment lookup (for tests).
pub fn flag_from_env_with<F>(get_env: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    get_env(ENV_DEBUG_TRACE)
        .map(|v| {
            let v = v.trim();
            v == "1" || v.eq_ignore_ascii_case("true")
        })
        .unwrap_or(false)
}

/// Whether pass tracing is enabled for this process.
#[inline]
pub fn is_enabled() -> bool {
    *DEBUG_TRACE_ENABLED
}

/// Milliseconds since the first trace check.
#[inline]
pub fn elapsed_ms() -> u64 {
    START_TIME.elapsed().as_millis() as u64
}

/// Print a timestamped line to stderr when `UGRID_DEBUG_TRACE` is set.
#[macro_export]
macro_rules! debug_trace {
    ($($arg:tt)*) => {
        if $crate::debug_trace::is_enabled() {
            eprintln!(
                "[UGRID {:>8}ms] {}",
                $crate::debug_trace::elapsed_ms(),
                format_args!($($arg)*)
            );
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env(value: Option<&'static str>) -> impl Fn(&str) -> Option<String> {
        move |key| {
            assert_eq!(key, ENV_DEBUG_TRACE);
            value.map(str::to_owned)
        }
    }

    #[test]
    fn flag_accepts_one_and_true() {
        assert!(flag_from_env_with(env(Some("1"))));
        assert!(flag_from_env_with(env(Some("true"))));
        assert!(flag_from_env_with(env(Some(" TRUE "))));
    }

    #[test]
    fn flag_rejects_everything_else() {
        assert!(!flag_from_env_with(env(None)));
        assert!(!flag_from_env_with(env(Some("0"))));
        assert!(!flag_from_env_with(env(Some("yes"))));
        assert!(!flag_from_env_with(env(Some(""))));
    }

    #[test]
    fn macro_compiles_when_disabled_or_enabled() {
        debug_trace!("pass {} of {}", 1, 2);
        let _ = elapsed_ms();
    }
}
