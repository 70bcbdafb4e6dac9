//! User feedback derived from outcomes. The core never shows anything itself;
//! front ends turn these into toasts, log lines or terminal output.

use std::fmt;

use crate::codec::DecodeError;
use crate::gate::RejectReason;
use crate::scanner::ScanOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: NoticeLevel::Info, message: message.into() }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.level {
            NoticeLevel::Success => "ok",
            NoticeLevel::Error => "error",
            NoticeLevel::Info => "info",
        };
        write!(f, "[{}] {}", tag, self.message)
    }
}

impl From<&ScanOutcome> for Notice {
    fn from(outcome: &ScanOutcome) -> Self {
        match outcome {
            ScanOutcome::Applied(_) => Notice::success("Product scanned successfully"),
            ScanOutcome::Rejected { reason: RejectReason::ScanLimitReached, .. } => {
                Notice::error("Scan limit reached for this product")
            }
            ScanOutcome::Rejected { reason: RejectReason::OutOfStock, .. } => {
                Notice::error("Product out of stock")
            }
            ScanOutcome::NotFound { .. } => Notice::error("Product not found"),
            ScanOutcome::Invalid(DecodeError::Malformed(_)) => Notice::error("Invalid QR code data"),
            ScanOutcome::Invalid(DecodeError::MissingField(field)) => {
                Notice::error(format!("Invalid QR code data: missing {}", field))
            }
        }
    }
}
