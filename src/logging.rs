use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize structured logging for embedders and tests.
///
/// `level` is a tracing filter directive ("debug", "minroute=trace", ...);
/// the `MINROUTE_LOG` environment variable takes precedence when set.
pub fn init_tracing(
    level: Option<&str>,
    log_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("MINROUTE_LOG"))
        .unwrap_or_else(|_| {
            let level = level.unwrap_or("warn");
            EnvFilter::new(if level.contains('=') {
                level.to_string()
            } else {
                format!("minroute={}", level)
            })
        });

    let registry = tracing_subscriber::registry().with(filter);

    if log_json {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_ansi(false)
                    .with_span_events(
                        tracing_subscriber::fmt::format::FmtSpan::NEW
                            | tracing_subscriber::fmt::format::FmtSpan::CLOSE,
                    ),
            )
            .try_init()?;
    } else {
        registry
            .with(
                fmt::layer()
                    .compact()
                    .with_target(false)
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_once() {
        init_tracing(Some("debug"), false).unwrap();
        // A second global subscriber cannot be installed
        assert!(init_tracing(Some("trace"), true).is_err());
    }
}
