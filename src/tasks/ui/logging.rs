use crate::FailResult;
use crate::ui::color::gpaint;
use failure::ResultExt;

use log::{Level, LevelFilter};
use std::fmt;
use std::path::{Path, PathBuf};

/// Builder-style setup for logging
#[derive(Debug, Clone, Default)]
pub struct GlobalLogger {
    path: Option<PathBuf>,
    verbosity: Verbosity,
}

impl GlobalLogger {
    /// Also write the log to this file (in addition to stdout).
    pub fn path<P: AsRef<Path>>(&mut self, path: P) -> &mut Self
    { self.path = Some(path.as_ref().to_owned()); self }

    /// Any integer will be accepted; the level will be truncated
    /// to the most extreme value supported.
    pub fn verbosity(&mut self, level: i32) -> &mut Self
    {
        self.verbosity = match level {
            l if l <= 0 => Verbosity::Default,
            1 => Verbosity::Loud,
            _ => Verbosity::Louder,
        };
        self
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum Verbosity { Default, Loud, Louder }

impl Default for Verbosity {
    fn default() -> Self { Verbosity::Default }
}

impl Verbosity {
    fn own_crate_level(self) -> LevelFilter
    { match self {
        Verbosity::Default => LevelFilter::Info,
        Verbosity::Loud => LevelFilter::Debug,
        Verbosity::Louder => LevelFilter::Trace,
    }}
}

impl GlobalLogger {
    /// NOTE: The `log` crate only accepts one global logger, so this
    ///       returns an error if called a second time.
    pub fn apply(&mut self) -> FailResult<()>
    {
        use std::time::Instant;

        let start = Instant::now();
        let mut fern = fern::Dispatch::new();
        fern = fern.format(move |out, message, record| {
                let t = start.elapsed();
                out.finish(format_args!("[{:>4}.{:03}s][{}][{}] {}",
                    t.as_secs(),
                    t.subsec_millis(),
                    record.target(),
                    ColorizedLevel(record.level()),
                    message))
            })
            .level(LevelFilter::Warn)
            .level_for("matscratch_tasks", self.verbosity.own_crate_level())
            .level_for("matscratch", self.verbosity.own_crate_level())
            .chain(std::io::stdout());

        if let Some(path) = self.path.as_ref() {
            let file = fern::log_file(path)
                .with_context(|_| format!("while opening log file: '{}'", path.display()))?;
            fern = fern.chain(file);
        }

        fern.apply()?;
        Ok(())
    }
}

#[derive(Debug, Copy, Clone)]
pub struct ColorizedLevel(pub Level);
impl fmt::Display for ColorizedLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let style = match self.0 {
            Level::Error => ansi_term::Colour::Red.bold(),
            Level::Warn  => ansi_term::Colour::Red.normal(),
            Level::Info  => ansi_term::Colour::Cyan.bold(),
            Level::Debug => ansi_term::Colour::Yellow.dimmed(),
            Level::Trace => ansi_term::Colour::Cyan.normal(),
        };
        write!(f, "{}", gpaint::<_, Level>(style, self.0))
    }
}
