/* ************************************************************************ **
** This file is part of matscratch, and is licensed under EITHER the MIT    **
** license or the Apache 2.0 license, at your option.                       **
**                                                                          **
**     http://www.apache.org/licenses/LICENSE-2.0                           **
**     http://opensource.org/licenses/MIT                                   **
** ************************************************************************ */

use crate::FailResult;
use crate::config::Settings;
use crate::self_test::{SelfTest, Report, run_self_tests};
use crate::ui::logging::GlobalLogger;

use clap::{App, Arg, ArgMatches};
use std::ffi::OsStr;
use std::path::PathBuf;

fn wrap_result_main<F>(main: F)
where F: FnOnce() -> FailResult<()>,
{
    main().unwrap_or_else(|e| {
        // until the logger is installed, `error!` goes nowhere
        let have_logger = log::max_level() != log::LevelFilter::Off;
        let report = |msg: &dyn std::fmt::Display| match have_logger {
            true => error!("{}", msg),
            false => eprintln!("error: {}", msg),
        };

        for cause in e.iter_chain() {
            report(&cause);
        }

        if std::env::var_os("RUST_BACKTRACE") == Some(OsStr::new("1").to_owned()) {
            report(&e.backtrace());
        }
        std::process::exit(1);
    });
}

/// Parsed command line of `matscratch-selftest`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SelfTestArgs {
    pub config: Option<PathBuf>,
    pub only: Vec<SelfTest>,
    pub log_file: Option<PathBuf>,
    pub verbosity: i32,
}

impl SelfTestArgs {
    pub fn clap_app<'a, 'b>() -> App<'a, 'b> {
        App::new("matscratch-selftest")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Checks the identity and 4x4 product functions against known values.")
            .args(&[
                Arg::with_name("config")
                    .short("c").long("config")
                    .takes_value(true).value_name("CONFIG")
                    .help("YAML settings file. Defaults are used for anything not specified."),
                Arg::with_name("only")
                    .long("only")
                    .takes_value(true).value_name("TEST")
                    .multiple(true).number_of_values(1)
                    .possible_values(&["identity", "mult"])
                    .help("Run only this test. May be given more than once."),
                Arg::with_name("log")
                    .long("log")
                    .takes_value(true).value_name("FILE")
                    .help("Also write the log to this file."),
                Arg::with_name("verbose")
                    .short("v").long("verbose")
                    .multiple(true)
                    .help("Show more detail about each test."),
            ])
    }

    pub fn from_matches(m: &ArgMatches) -> FailResult<Self>
    { Ok(SelfTestArgs {
        config: m.value_of_os("config").map(PathBuf::from),
        only: match m.values_of("only") {
            Some(values) => values.map(|s| s.parse::<SelfTest>()).collect::<FailResult<Vec<_>>>()?,
            None => vec![],
        },
        log_file: m.value_of_os("log").map(PathBuf::from),
        verbosity: m.occurrences_of("verbose") as i32,
    })}
}

/// Everything `matscratch-selftest` does after logging is set up.
pub fn run_selftest(args: &SelfTestArgs) -> FailResult<Report>
{
    let settings = match args.config {
        Some(ref path) => {
            info!("reading config from '{}'", path.display());
            Settings::load(path)?
        },
        None => Settings::default(),
    };
    Ok(run_self_tests(&settings, &args.only))
}

pub fn selftest() {
    wrap_result_main(|| {
        let matches = SelfTestArgs::clap_app().get_matches();
        let args = SelfTestArgs::from_matches(&matches)?;

        let mut logger = GlobalLogger::default();
        logger.verbosity(args.verbosity);
        if let Some(ref path) = args.log_file {
            logger.path(path);
        }
        logger.apply()?;

        let report = run_selftest(&args)?;
        if !report.is_success() {
            bail!("{} of {} self-tests failed", report.failed.len(), report.num_run());
        }
        Ok(())
    });
}
