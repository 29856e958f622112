//! The global configuration of where and how statistics are written.

use std::fmt::Debug;
use std::fmt::Display;
use std::fmt::Formatter;
use std::io::stdout;
use std::io::Write;
use std::sync::OnceLock;
use std::sync::RwLock;

use convert_case::Case;
use convert_case::Casing;

/// How statistics are written: every statistic is written as `{prefix} {name}={value}`, with the
/// name in the configured casing, optionally followed by a closing line once a block of
/// statistics is complete.
pub struct StatisticOptions {
    statistic_prefix: &'static str,
    after_statistics: Option<&'static str>,
    statistics_casing: Option<Case>,
    statistics_writer: Box<dyn Write + Send + Sync>,
}

impl Debug for StatisticOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatisticOptions")
            .field("statistic_prefix", &self.statistic_prefix)
            .field("after_statistics", &self.after_statistics)
            .field("statistics_casing", &self.statistics_casing)
            .finish_non_exhaustive()
    }
}

static STATISTIC_OPTIONS: OnceLock<RwLock<StatisticOptions>> = OnceLock::new();

/// Enables the logging of statistics.
///
/// Only the first call has an effect. When no writer is provided, statistics are written to
/// stdout.
pub fn configure_statistic_logging(
    prefix: &'static str,
    after: Option<&'static str>,
    casing: Option<Case>,
    writer: Option<Box<dyn Write + Send + Sync>>,
) {
    let _ = STATISTIC_OPTIONS.get_or_init(|| {
        RwLock::new(StatisticOptions {
            statistic_prefix: prefix,
            after_statistics: after,
            statistics_casing: casing,
            statistics_writer: writer.unwrap_or_else(|| Box::new(stdout())),
        })
    });
}

/// Writes the statistic `name` with `value` if statistic logging has been configured.
pub fn log_statistic(name: impl Display, value: impl Display) {
    let Some(options) = STATISTIC_OPTIONS.get() else {
        return;
    };
    let Ok(mut options) = options.write() else {
        return;
    };

    let name = match options.statistics_casing {
        Some(casing) => name.to_string().to_case(casing),
        None => name.to_string(),
    };
    let prefix = options.statistic_prefix;
    let _ = writeln!(options.statistics_writer, "{prefix} {name}={value}");
}

/// Writes the closing line of a block of statistics, if one is configured.
pub fn log_statistic_postfix() {
    let Some(options) = STATISTIC_OPTIONS.get() else {
        return;
    };
    let Ok(mut options) = options.write() else {
        return;
    };

    if let Some(postfix) = options.after_statistics {
        let _ = writeln!(options.statistics_writer, "{postfix}");
    }
}

/// Whether [`configure_statistic_logging`] has been called.
pub fn should_log_statistics() -> bool {
    STATISTIC_OPTIONS.get().is_some()
}
