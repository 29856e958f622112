use std::fmt::Display;

use super::statistic_logging::log_statistic;

/// Writes statistics under a name prefix, e.g. the prefix `gac` turns the statistic `num_calls`
/// into `gac_num_calls`.
#[derive(Clone, Debug, Default)]
pub struct StatisticLogger {
    name_prefix: String,
}

impl StatisticLogger {
    pub fn new(name_prefix: impl Display) -> Self {
        Self {
            name_prefix: name_prefix.to_string(),
        }
    }

    /// A logger whose prefix is the prefix of `self` extended with `addition`.
    pub fn attach_to_prefix(&self, addition: impl Display) -> Self {
        let name_prefix = if self.name_prefix.is_empty() {
            addition.to_string()
        } else {
            format!("{}_{addition}", self.name_prefix)
        };
        Self { name_prefix }
    }

    pub fn name_prefix(&self) -> &str {
        &self.name_prefix
    }
}

impl std::fmt::Write for StatisticLogger {
    fn write_str(&mut self, s: &str) -> std::fmt::Result {
        log_statistic(&self.name_prefix, s);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_are_joined() {
        let logger = StatisticLogger::new("search").attach_to_prefix("num_decisions");

        assert_eq!(logger.name_prefix(), "search_num_decisions");
    }

    #[test]
    fn empty_prefix_is_not_joined() {
        let logger = StatisticLogger::default().attach_to_prefix("num_deadends");

        assert_eq!(logger.name_prefix(), "num_deadends");
    }
}
