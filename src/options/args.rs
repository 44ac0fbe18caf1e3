//! Argument parsing via clap.

use std::path::PathBuf;

use clap::*;
use indoc::indoc;

const TEMPLATE: &str = indoc! {
    "{name} {version}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "localdf [OPTIONS]";

/// The arguments for localdf.
#[derive(Parser, Debug, Default)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    about = crate_description!(),
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct Args {
    #[arg(
        short = 'C',
        long,
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    If not set, the built-in defaults are used."
    )]
    pub(crate) config_location: Option<PathBuf>,

    #[arg(
        short = 'm',
        long,
        value_name = "PATH",
        help = "Sets the mount table to scan.",
        long_help = "Sets the mount table to scan, overriding the config file. Defaults to /proc/mounts."
    )]
    pub(crate) mounts: Option<PathBuf>,

    #[arg(
        long,
        value_name = "PATH",
        help = "Writes debug logs to the given file.",
        long_help = "Writes debug logs to the given file. Only available if built with the \
                    'logging' feature."
    )]
    pub(crate) log_file: Option<PathBuf>,
}

impl Args {
    #[inline]
    pub fn config_location(&self) -> Option<&PathBuf> {
        self.config_location.as_ref()
    }

    #[inline]
    pub fn log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }
}

/// Returns the parsed arguments.
pub fn get_args() -> Args {
    Args::parse()
}
