//! Statistics gathered during search and the facilities for writing them out.
//!
//! Statistics are only written once [`configure_statistic_logging`] has been called; every
//! statistic is written on its own line as `{prefix} {name}={value}`.
mod search_statistics;
mod statistic_logger;
mod statistic_logging;

use std::fmt::Display;
use std::fmt::Write;

pub use search_statistics::SearchStatistics;
pub use statistic_logger::StatisticLogger;
pub use statistic_logging::configure_statistic_logging;
pub use statistic_logging::log_statistic;
pub use statistic_logging::log_statistic_postfix;
pub use statistic_logging::should_log_statistics;
pub use statistic_logging::StatisticOptions;

/// A value (or a group of values) which can be written through a [`StatisticLogger`].
///
/// See [`create_statistics_struct!`](crate::create_statistics_struct) for deriving it on a struct
/// of counters.
pub trait Statistic {
    fn log(&self, statistic_logger: StatisticLogger);
}

impl<Value: Display> Statistic for Value {
    fn log(&self, mut statistic_logger: StatisticLogger) {
        let _ = write!(statistic_logger, "{self}");
    }
}

/// Creates a struct of statistics in which every field is logged under the name of the field.
///
/// # Example
/// ```rust
/// # use quince_core::create_statistics_struct;
/// create_statistics_struct!(
///     /// Counts the calls.
///     pub CallStatistics {
///         num_calls: u64,
///     }
/// );
///
/// let statistics = CallStatistics::default();
/// assert_eq!(statistics.num_calls, 0);
/// ```
#[macro_export]
macro_rules! create_statistics_struct {
    ($(#[$struct_documentation:meta])* $visibility:vis $name:ident {
        $($(#[$field_documentation:meta])* $field:ident : $type:ty),+ $(,)?
    }) => {
        $(#[$struct_documentation])*
        #[derive(Clone, Copy, Debug, Default, PartialEq)]
        $visibility struct $name {
            $($(#[$field_documentation])* pub $field: $type),+
        }

        impl $crate::statistics::Statistic for $name {
            fn log(&self, statistic_logger: $crate::statistics::StatisticLogger) {
                $($crate::statistics::Statistic::log(
                    &self.$field,
                    statistic_logger.attach_to_prefix(stringify!($field)),
                );)+
            }
        }
    };
}
