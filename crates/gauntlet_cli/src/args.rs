//! the args for running gauntlet

use clap::{value_parser, ArgAction, ValueEnum};
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;

/// The args struct
#[derive(Debug, clap::Parser)]
#[clap(author, version, about = "Transforms location records into view models")]
pub struct Args {
    #[command(flatten)]
    logging: LoggingArgs,

    /// JSON files, each containing an array of records
    #[clap(required = true, value_name = "record file", value_hint = clap::ValueHint::FilePath)]
    pub files: Vec<PathBuf>,
    /// What to do with records that could not be transformed
    #[clap(long = "on-err", env = "GAUNTLET_ON_ERR", value_enum, default_value_t = OnErr::Log)]
    pub on_err: OnErr,
}

impl Args {
    pub fn logging(&self) -> &LoggingArgs {
        &self.logging
    }
}

/// How failed records are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OnErr {
    /// Drop failed records silently
    Ignore,
    /// Drop failed records, logging a warning for each
    Log,
    /// Stop at the first failed record
    Fail,
    /// Emit `null` in place of each failed record
    Default,
}

/// Common way to set logging levels
#[derive(Debug, Clone, Copy, clap::Args)]
pub struct LoggingArgs {
    #[clap(short = 'v', value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    #[clap(short = 'q', value_parser = value_parser!(u8).range(0..=2), action = ArgAction::Count, conflicts_with = "verbose")]
    quiet: u8,
}

impl LoggingArgs {
    /// Gets the logging level based on whether `-v[v]` or `-q[q]` has been used,
    pub fn log_level_filter(&self) -> LevelFilter {
        let sum = self.verbose as i8 - self.quiet as i8;
        match sum {
            ..=-2 => LevelFilter::OFF,
            -1 => LevelFilter::ERROR,
            0 => LevelFilter::INFO,
            1 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::{CommandFactory, Parser};
    use std::ffi::OsStr;
    use std::path::Path;

    #[test]
    fn test_args_parsing() {
        let test = "gauntlet records.json more.json";
        let args = Args::try_parse_from(test.split(" ")).expect("could not parse test string");
        assert_eq!(args.files[0], Path::new("records.json"));
        assert_eq!(args.files[1], Path::new("more.json"));
    }

    #[test]
    fn test_on_err_parsing() {
        let test = "gauntlet records.json --on-err default";
        let args = Args::try_parse_from(test.split(" ")).expect("could not parse test string");
        assert_eq!(args.on_err, OnErr::Default);
    }

    #[test]
    fn test_on_err_defaults_to_log() {
        let command = Args::command();
        let on_err = command
            .get_arguments()
            .find(|arg| arg.get_id() == "on_err")
            .expect("on_err argument should exist");
        let defaults = on_err
            .get_default_values()
            .iter()
            .map(|value| value.to_str())
            .collect::<Vec<_>>();
        assert_eq!(defaults, [Some("log")]);
        assert_eq!(on_err.get_env(), Some(OsStr::new("GAUNTLET_ON_ERR")));
    }

    #[test]
    fn test_files_required() {
        assert!(Args::try_parse_from(["gauntlet"]).is_err());
    }

    #[test]
    fn test_log_levels() {
        let args = Args::try_parse_from("gauntlet -vv records.json".split(" "))
            .expect("could not parse test string");
        assert_eq!(args.logging().log_level_filter(), LevelFilter::TRACE);
        let args = Args::try_parse_from("gauntlet -q records.json".split(" "))
            .expect("could not parse test string");
        assert_eq!(args.logging().log_level_filter(), LevelFilter::ERROR);
        let args = Args::try_parse_from("gauntlet -qq records.json".split(" "))
            .expect("could not parse test string");
        assert_eq!(args.logging().log_level_filter(), LevelFilter::OFF);
        let args = Args::try_parse_from("gauntlet records.json".split(" "))
            .expect("could not parse test string");
        assert_eq!(args.logging().log_level_filter(), LevelFilter::INFO);
        assert!(Args::try_parse_from("gauntlet -v -q records.json".split(" ")).is_err());
    }
}
