use clap::{Arg, ArgAction, ArgMatches, Command};

/// Options for one run of the walkthrough.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Seed for the example inputs. `None` draws one from the OS.
    pub seed: Option<u64>,
    pub pause: bool,
    /// Decimals printed for real-valued results. `None` prints them as-is.
    pub precision: Option<usize>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: None,
            pause: true,
            precision: None,
        }
    }
}

pub fn command() -> Command {
    Command::new("matrix_walkthrough")
        .version(clap::crate_version!())
        .about("Worked examples of matrix-vector products, linearity and transposes")
        .arg(
            Arg::new("seed")
                .long("seed")
                .short('s')
                .help("Seed for the randomly generated example inputs")
                .value_parser(clap::value_parser!(u64)),
        )
        .arg(
            Arg::new("no_pause")
                .long("no-pause")
                .help("Exit without waiting for Enter")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("precision")
                .long("precision")
                .short('p')
                .help("Number of decimals printed for real-valued results")
                .value_parser(clap::value_parser!(usize)),
        )
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            seed: matches.get_one::<u64>("seed").copied(),
            pause: !matches.get_flag("no_pause"),
            precision: matches.get_one::<usize>("precision").copied(),
        }
    }
}
