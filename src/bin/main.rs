use anyhow::{Context, Result};
use localdf::{collection::disks::StatvfsQuery, options};

fn main() -> Result<()> {
    let args = options::args::get_args();

    if let Some(log_file) = args.log_file() {
        #[cfg(feature = "logging")]
        {
            localdf::utils::logging::init_logger(log::LevelFilter::Trace, log_file)
                .context("Unable to set up the log file.")?;
        }

        #[cfg(not(feature = "logging"))]
        {
            eprintln!(
                "Ignoring '--log-file {}', logging support was not built in.",
                log_file.display()
            );
        }
    }

    let config = options::read_config(args.config_location().map(|path| path.as_path()))
        .context("Unable to properly parse the config file.")?;
    let scanner = options::init_scanner(&args, &config, StatvfsQuery)
        .context("Found an issue while setting up the disk scan.")?;

    let aggregate = scanner.scan();

    println!("total: {}", aggregate.total);
    println!("free: {}", aggregate.free);

    Ok(())
}
