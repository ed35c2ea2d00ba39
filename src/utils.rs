use crate::types::Coords;
use tracing_subscriber::{EnvFilter, fmt};

#[macro_export]
macro_rules! dlog {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*);
    };
}

/// Initialize colorful logging.
///
/// Default level is INFO.
/// - `-v` => DEBUG
/// - `-vv` => TRACE
/// - `-q` => WARN
/// - `-qq` => ERROR
///
/// `RUST_LOG` overrides everything (e.g. `RUST_LOG=trace`).
pub fn init_logging(verbose: u8, quiet: u8) {
    let net = i16::from(verbose) - i16::from(quiet);
    let level = match net {
        i16::MIN..=-2 => "error",
        -1 => "warn",
        0 => "info",
        1 => "debug",
        2..=i16::MAX => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("warn,maptrack={level}")));

    let show_src = matches!(level, "debug" | "trace");

    fmt()
        .with_env_filter(filter)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339())
        .with_target(true)
        .with_level(true)
        .with_file(show_src)
        .with_line_number(show_src)
        .compact()
        .init();
}

/// Reads a form field as a number.
///
/// Surrounding whitespace is ignored and an empty field reads as `0`.
/// Anything unparsable comes back as NaN, so it fails a finiteness check.
pub fn parse_number(field: &str) -> f64 {
    let s = field.trim();
    if s.is_empty() {
        return 0.0;
    }
    s.parse().unwrap_or(f64::NAN)
}

pub fn maps_link(c: Coords) -> String {
    format!("https://www.google.com/maps/@{},{}", c.lat, c.lng)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_number_coerces_like_a_form() {
        assert_eq!(parse_number("5.2"), 5.2);
        assert_eq!(parse_number("  24 "), 24.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("   "), 0.0);
        assert_eq!(parse_number("-1"), -1.0);
        assert!(parse_number("abc").is_nan());
        assert!(parse_number("1,5").is_nan());
    }

    #[test]
    fn maps_link_format() {
        assert_eq!(
            maps_link(Coords::new(51.5, -0.1)),
            "https://www.google.com/maps/@51.5,-0.1"
        );
    }
}
