//! QR code validation flow for the admin scanner.
//!
//! The scanner moves through `Idle -> Scanning -> Detected -> Finished` and
//! back to `Idle` on rescan. [`ScanSession`] owns that state explicitly;
//! each transition returns the [`ScanEffect`]s the caller must perform
//! (open or stop the camera, alert, post the validation request).
//!
//! Frame capture and QR decoding happen outside this crate. The caller
//! feeds decoded payloads into [`ScanSession::detect`] and the backend's
//! reply into [`ScanSession::resolve`].

mod error;
mod result;
mod session;

pub use error::{ScanError, ScanResult};
pub use result::{ResultView, Tone, ValidationResult};
pub use session::{validation_path, ScanEffect, ScanSession, ScanState, CAMERA_ERROR_MESSAGE};
