#[cfg(feature = "logging")]
use std::path::Path;

/// Sends all log records at or above `min_level` to `log_file`.
#[cfg(feature = "logging")]
pub fn init_logger(min_level: log::LevelFilter, log_file: &Path) -> Result<(), fern::InitError> {
    fern::Dispatch::new()
        .format(|out, message, record| {
            // Local time is only reliable on single-threaded processes, so stick to UTC.
            let offset = time::OffsetDateTime::now_utc();

            out.finish(format_args!(
                "{}[{}][{}] {}",
                offset
                    .format(&time::macros::format_description!(
                        // "[[" escapes a bracket, so this prints "[date][time]".
                        "[[[year]-[month]-[day]][[[hour]:[minute]:[second][subsecond digits:9]]"
                    ))
                    .unwrap_or_default(),
                record.target(),
                record.level(),
                message
            ))
        })
        .level(min_level)
        .chain(fern::log_file(log_file)?)
        .apply()?;

    Ok(())
}
