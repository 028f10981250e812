//! Command line options for sayyes

use std::path::PathBuf;

use clap::Parser;
use log::LevelFilter;

use crate::error::{Error, Result};

#[derive(Parser, Debug)]
#[command(name = "sayyes")]
#[command(about = "Asks a question in your terminal and celebrates a yes with fireworks", long_about = None)]
#[command(version)]
#[command(after_help = "Press 'y' or click [ Yes ] to answer. Press 'q', ESC, or Ctrl+C to exit.")]
pub struct Cli {
    /// Background color as hex (e.g. --bg-color 1a1b26)
    #[arg(long, value_name = "RRGGBB", value_parser = parse_hex_color)]
    pub bg_color: Option<(u8, u8, u8)>,

    /// Seed for the random generator, for reproducible bursts
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write log output to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Verbosity level (can be repeated for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Level to force on the logger, if any.
    ///
    /// Stderr shares the terminal with the alternate screen, so without a log
    /// file the session never logs below `warn`.
    pub fn log_level(&self) -> Option<LevelFilter> {
        if self.log_file.is_none() {
            return Some(LevelFilter::Warn);
        }
        match self.verbose {
            0 => None,
            1 => Some(LevelFilter::Info),
            2 => Some(LevelFilter::Debug),
            _ => Some(LevelFilter::Trace),
        }
    }
}

pub fn parse_hex_color(hex: &str) -> Result<(u8, u8, u8)> {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::InvalidColor(hex.to_string()));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| Error::InvalidColor(hex.to_string()))
    };

    Ok((channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_hex_with_and_without_hash() {
        assert_eq!(parse_hex_color("1a1b26").unwrap(), (0x1a, 0x1b, 0x26));
        assert_eq!(parse_hex_color("#FF8000").unwrap(), (255, 128, 0));
    }

    #[test]
    fn rejects_malformed_colors() {
        for bad in ["", "12345", "1234567", "gg0000", "#ééé", "+1+2+3", "-1-2-3", "12 456"] {
            assert!(
                matches!(parse_hex_color(bad), Err(Error::InvalidColor(_))),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn cli_accepts_all_options() {
        let cli = Cli::try_parse_from([
            "sayyes",
            "--bg-color",
            "000010",
            "--seed",
            "42",
            "--log-file",
            "sayyes.log",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.bg_color, Some((0, 0, 0x10)));
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.log_file, Some(PathBuf::from("sayyes.log")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn verbose_logging_needs_a_log_file() {
        let cli = Cli::try_parse_from(["sayyes", "-vvv"]).unwrap();
        assert_eq!(cli.log_level(), Some(LevelFilter::Warn));

        let cli = Cli::try_parse_from(["sayyes"]).unwrap();
        assert_eq!(cli.log_level(), Some(LevelFilter::Warn));
    }

    #[test]
    fn log_file_honors_verbosity() {
        let level = |args: &[&str]| {
            let mut argv = vec!["sayyes", "--log-file", "sayyes.log"];
            argv.extend_from_slice(args);
            Cli::try_parse_from(argv).unwrap().log_level()
        };

        assert_eq!(level(&[]), None);
        assert_eq!(level(&["-v"]), Some(LevelFilter::Info));
        assert_eq!(level(&["-vv"]), Some(LevelFilter::Debug));
        assert_eq!(level(&["-vvvv"]), Some(LevelFilter::Trace));
    }

    #[test]
    fn cli_rejects_bad_color() {
        assert!(Cli::try_parse_from(["sayyes", "--bg-color", "nope"]).is_err());
    }
}
