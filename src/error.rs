//! # Decode Failures
//!
//! Every accessor returns `eyre::Result`. The four failure classes a caller
//! may want to tell apart are carried as a typed [`DecodeError`] inside the
//! report:
//!
//! | Kind | Raised when |
//! |------|-------------|
//! | `Format` | text does not match the date-time, decimal, duration or GUID grammar |
//! | `Range` | a Julian Date falls outside the representable calendar, or a checked narrowing overflows |
//! | `Cast` | the requested type cannot be assigned from the cell |
//! | `Invariant` | the probe reported a storage class this crate does not know |
//!
//! ```ignore
//! match reader.get::<Decimal>(0) {
//!     Err(report) if DecodeErrorKind::of(&report) == Some(DecodeErrorKind::Format) => { ... }
//!     other => { ... }
//! }
//! ```
//!
//! Contract errors (ordinal out of range, undersized bulk buffer) are plain
//! `eyre` errors without a `DecodeError`.

pub use eyre::{Report, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorKind {
    Format,
    Range,
    Cast,
    Invariant,
}

impl DecodeErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            DecodeErrorKind::Format => "format",
            DecodeErrorKind::Range => "range",
            DecodeErrorKind::Cast => "cast",
            DecodeErrorKind::Invariant => "invariant",
        }
    }

    /// Returns the decode failure class carried by `report`, if any.
    pub fn of(report: &Report) -> Option<Self> {
        report.downcast_ref::<DecodeError>().map(|e| e.kind)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeError {
    pub kind: DecodeErrorKind,
    pub message: String,
}

impl DecodeError {
    pub fn kind(&self) -> DecodeErrorKind {
        self.kind
    }
}

impl std::fmt::Display for DecodeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failure: {}", self.kind.name(), self.message)
    }
}

impl std::error::Error for DecodeError {}

fn report(kind: DecodeErrorKind, message: String) -> Report {
    match kind {
        DecodeErrorKind::Invariant => tracing::error!(kind = kind.name(), "{}", message),
        _ => tracing::debug!(kind = kind.name(), "{}", message),
    }
    Report::new(DecodeError { kind, message })
}

pub fn format_failure(message: impl Into<String>) -> Report {
    report(DecodeErrorKind::Format, message.into())
}

pub fn range_failure(message: impl Into<String>) -> Report {
    report(DecodeErrorKind::Range, message.into())
}

pub fn cast_failure(message: impl Into<String>) -> Report {
    report(DecodeErrorKind::Cast, message.into())
}

pub fn invariant_violation(message: impl Into<String>) -> Report {
    report(DecodeErrorKind::Invariant, message.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_survives_report() {
        let err = format_failure("bad decimal 'x'");
        assert_eq!(DecodeErrorKind::of(&err), Some(DecodeErrorKind::Format));
        assert_eq!(err.to_string(), "format failure: bad decimal 'x'");
    }

    #[test]
    fn test_plain_report_has_no_kind() {
        let err = eyre::eyre!("ordinal 4 out of range");
        assert_eq!(DecodeErrorKind::of(&err), None);
    }

    #[test]
    fn test_kind_survives_context() {
        use eyre::WrapErr;
        let res: eyre::Result<()> = Err(cast_failure("nope"));
        let err = res.wrap_err("reading column 2").unwrap_err();
        assert_eq!(DecodeErrorKind::of(&err), Some(DecodeErrorKind::Cast));
    }
}
