//! Leveled assertions for contract violations by callers of the solver.
//!
//! The level is [`QUINCE_ASSERT_SIMPLE`] by default. Tests and builds with the `debug-checks`
//! feature run at [`QUINCE_ASSERT_ADVANCED`], which enables checks that scan prune lists and
//! domains and are too expensive for normal use.

#[cfg(all(not(test), not(feature = "debug-checks")))]
pub(crate) const QUINCE_ASSERT_LEVEL_DEFINITION: u8 = QUINCE_ASSERT_SIMPLE;

#[cfg(any(test, feature = "debug-checks"))]
pub(crate) const QUINCE_ASSERT_LEVEL_DEFINITION: u8 = QUINCE_ASSERT_ADVANCED;

pub(crate) const QUINCE_ASSERT_SIMPLE: u8 = 1;
pub(crate) const QUINCE_ASSERT_MODERATE: u8 = 2;
pub(crate) const QUINCE_ASSERT_ADVANCED: u8 = 3;

macro_rules! print_quince_assert_warning_message {
    () => {
        if $crate::quince_asserts::QUINCE_ASSERT_LEVEL_DEFINITION
            >= $crate::quince_asserts::QUINCE_ASSERT_MODERATE
        {
            log::warn!(
                "Potential performance degradation: the Quince assert level is set to {}, expensive checks on prune lists are active.",
                $crate::quince_asserts::QUINCE_ASSERT_LEVEL_DEFINITION
            );
        };
    };
}

macro_rules! quince_assert_simple {
    ($($arg:tt)*) => {
        if $crate::quince_asserts::QUINCE_ASSERT_LEVEL_DEFINITION >= $crate::quince_asserts::QUINCE_ASSERT_SIMPLE {
            assert!($($arg)*);
        }
    };
}

macro_rules! quince_assert_eq_simple {
    ($($arg:tt)*) => {
        if $crate::quince_asserts::QUINCE_ASSERT_LEVEL_DEFINITION >= $crate::quince_asserts::QUINCE_ASSERT_SIMPLE {
            assert_eq!($($arg)*);
        }
    };
}

macro_rules! quince_assert_moderate {
    ($($arg:tt)*) => {
        if $crate::quince_asserts::QUINCE_ASSERT_LEVEL_DEFINITION >= $crate::quince_asserts::QUINCE_ASSERT_MODERATE {
            assert!($($arg)*);
        }
    };
}

macro_rules! quince_assert_advanced {
    ($($arg:tt)*) => {
        if $crate::quince_asserts::QUINCE_ASSERT_LEVEL_DEFINITION >= $crate::quince_asserts::QUINCE_ASSERT_ADVANCED {
            assert!($($arg)*);
        }
    };
}

pub(crate) use print_quince_assert_warning_message;
pub(crate) use quince_assert_advanced;
pub(crate) use quince_assert_eq_simple;
pub(crate) use quince_assert_moderate;
pub(crate) use quince_assert_simple;
