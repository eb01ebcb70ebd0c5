//! This module implements `IntervalError`.

use alloc::borrow::Cow;
use alloc::format;
use core::fmt;

/// `IntervalError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// An interval violated one of its construction invariants.
    #[default]
    InvalidInterval,
    /// A required argument was missing, empty or out of range.
    InvalidArgument,
    /// A range did not intersect the month it was removed from.
    NotContained,
    /// An internal invariant was broken.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInterval => "InvalidInterval",
            Self::InvalidArgument => "InvalidArgument",
            Self::NotContained => "NotContained",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `calendar_intervals`.
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalError {
    kind: ErrorKind,
    msg: ErrorMessageOrOwned,
}

#[derive(Debug, Clone, PartialEq)]
enum ErrorMessageOrOwned {
    Static(ErrorMessage),
    Owned(Cow<'static, str>),
}

impl ErrorMessageOrOwned {
    fn as_str(&self) -> &str {
        match self {
            Self::Static(msg) => msg.to_str(),
            Self::Owned(msg) => msg,
        }
    }
}

impl IntervalError {
    #[inline]
    #[must_use]
    const fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: ErrorMessageOrOwned::Static(ErrorMessage::None),
        }
    }

    /// Create an invalid interval error.
    #[inline]
    #[must_use]
    pub const fn invalid_interval() -> Self {
        Self::new(ErrorKind::InvalidInterval)
    }

    /// Create an invalid argument error.
    #[inline]
    #[must_use]
    pub const fn invalid_argument() -> Self {
        Self::new(ErrorKind::InvalidArgument)
    }

    /// Create a not contained error.
    #[inline]
    #[must_use]
    pub const fn not_contained() -> Self {
        Self::new(ErrorKind::NotContained)
    }

    /// Create an assertion error.
    #[inline]
    #[must_use]
    pub const fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// Add a message to the error.
    #[inline]
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = ErrorMessageOrOwned::Owned(msg.into());
        self
    }

    /// Add a predefined message to the error.
    #[inline]
    #[must_use]
    pub fn with_enum(mut self, msg: ErrorMessage) -> Self {
        self.msg = ErrorMessageOrOwned::Static(msg);
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        self.msg.as_str()
    }

    /// Extracts the error message.
    #[inline]
    #[must_use]
    pub fn into_message(self) -> Cow<'static, str> {
        match self.msg {
            ErrorMessageOrOwned::Static(msg) => Cow::Borrowed(msg.to_str()),
            ErrorMessageOrOwned::Owned(msg) => msg,
        }
    }
}

impl fmt::Display for IntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.as_str();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl core::error::Error for IntervalError {}

/// Predefined error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorMessage {
    // Interval invariants
    StartAfterEnd,
    IntervalOutOfBounds,
    DayIntervalNotSingleDay,
    MonthIntervalNotSingleMonth,

    // Arguments
    DateOutOfRange,
    InvalidDate,
    InvalidTime,
    OffsetOutOfRange,
    EmptyRemovalList,
    ZeroChunkSize,
    ZeroStride,
    InvalidStep,
    NonFiniteValue,
    MinGreaterThanMax,
    SystemTimeUnavailable,

    // Month removal
    RangeNotInMonth,

    None,
}

impl ErrorMessage {
    pub fn to_str(self) -> &'static str {
        match self {
            Self::StartAfterEnd => "start date is later than end date",
            Self::IntervalOutOfBounds => "interval is outside of the supported date bounds",
            Self::DayIntervalNotSingleDay => "day interval must start and end on the same day",
            Self::MonthIntervalNotSingleMonth => {
                "month interval must start and end in the same month"
            }
            Self::DateOutOfRange => "date is outside of the representable range",
            Self::InvalidDate => "calendar date does not exist",
            Self::InvalidTime => "time of day is not valid",
            Self::OffsetOutOfRange => "UTC offset must be within +/-14 hours",
            Self::EmptyRemovalList => "ranges to remove must not be empty",
            Self::ZeroChunkSize => "chunk size must be at least one day",
            Self::ZeroStride => "stride must be greater than zero",
            Self::InvalidStep => "step must be a positive finite number",
            Self::NonFiniteValue => "range bounds must be finite numbers",
            Self::MinGreaterThanMax => "min must not be greater than max",
            Self::SystemTimeUnavailable => "error fetching system time",
            Self::RangeNotInMonth => "range is not included in this month",
            Self::None => "",
        }
    }
}

/// Builds the message used when a removal range does not touch a month.
pub(crate) fn range_not_in_month_message(range: &str, month: &str) -> Cow<'static, str> {
    Cow::Owned(format!(
        "{}: {range} does not intersect {month}",
        ErrorMessage::RangeNotInMonth.to_str()
    ))
}
