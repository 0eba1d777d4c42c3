//! Scan session state machine.

use crate::error::{ScanError, ScanResult};
use crate::result::ValidationResult;
use tracing::{debug, info, warn};

/// Alert shown when the camera cannot be opened.
pub const CAMERA_ERROR_MESSAGE: &str =
    "Não foi possível acessar a câmera. Verifique as permissões.";

/// Path for validating (and redeeming) a scanned QR code.
#[must_use]
pub fn validation_path(hash: &str) -> String {
    format!("/api/validar/{hash}")
}

/// Where the scanner currently is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanState {
    /// Waiting for the admin to open the camera.
    Idle,
    /// Camera open, looking for a QR code in each frame.
    Scanning,
    /// A code was read and is being validated.
    Detected { hash: String },
    /// Validation finished; the result panel is visible.
    Finished(ValidationResult),
}

impl ScanState {
    /// Short name used in errors and logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Scanning => "scanning",
            Self::Detected { .. } => "validating",
            Self::Finished(_) => "showing a result",
        }
    }
}

/// Side effects the caller performs after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEffect {
    /// Request the rear camera and start feeding frames.
    OpenCamera,
    /// Stop every track of the camera stream.
    StopCamera,
    /// Show a blocking alert.
    Alert(String),
    /// `POST` to this path to validate the detected code.
    Validate { path: String },
}

/// The scanner's explicit state.
#[derive(Debug, Clone)]
pub struct ScanSession {
    state: ScanState,
    camera_open: bool,
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ScanSession {
    /// Creates an idle session.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: ScanState::Idle,
            camera_open: false,
        }
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &ScanState {
        &self.state
    }

    /// Returns true while frames should be decoded.
    #[must_use]
    pub fn is_scanning(&self) -> bool {
        self.state == ScanState::Scanning
    }

    /// Returns true if a camera stream is held.
    #[must_use]
    pub fn camera_open(&self) -> bool {
        self.camera_open
    }

    fn invalid(&self, action: &'static str) -> ScanError {
        ScanError::InvalidTransition {
            from: self.state.name(),
            action,
        }
    }

    fn release_camera(&mut self, effects: &mut Vec<ScanEffect>) {
        if self.camera_open {
            self.camera_open = false;
            effects.push(ScanEffect::StopCamera);
        }
    }

    /// Opens the camera and starts scanning.
    ///
    /// # Errors
    ///
    /// Only allowed from `Idle`.
    pub fn start(&mut self) -> ScanResult<Vec<ScanEffect>> {
        if self.state != ScanState::Idle {
            return Err(self.invalid("start scanning"));
        }
        self.state = ScanState::Scanning;
        self.camera_open = true;
        debug!("scan started");
        Ok(vec![ScanEffect::OpenCamera])
    }

    /// The camera could not be opened; returns to `Idle`.
    ///
    /// # Errors
    ///
    /// Only allowed while `Scanning`.
    pub fn camera_failed(&mut self, reason: &str) -> ScanResult<Vec<ScanEffect>> {
        if self.state != ScanState::Scanning {
            return Err(self.invalid("report a camera failure"));
        }
        warn!(reason, "camera unavailable");
        let mut effects = Vec::new();
        self.release_camera(&mut effects);
        effects.push(ScanEffect::Alert(CAMERA_ERROR_MESSAGE.to_string()));
        self.state = ScanState::Idle;
        Ok(effects)
    }

    /// Feeds a decoded QR payload.
    ///
    /// Only the first detection while `Scanning` counts: it stops the camera
    /// and requests validation. Detections in any other state, and blank
    /// payloads, are ignored and produce no effects.
    pub fn detect(&mut self, payload: &str) -> Vec<ScanEffect> {
        let hash = payload.trim();
        if self.state != ScanState::Scanning || hash.is_empty() {
            debug!(state = self.state.name(), "detection ignored");
            return Vec::new();
        }
        info!(hash, "QR code detected");
        let mut effects = Vec::new();
        self.release_camera(&mut effects);
        effects.push(ScanEffect::Validate {
            path: validation_path(hash),
        });
        self.state = ScanState::Detected {
            hash: hash.to_string(),
        };
        effects
    }

    /// Records the backend's reply to the validation request.
    ///
    /// # Errors
    ///
    /// Only allowed in `Detected`.
    pub fn resolve(&mut self, status: u16, body: &str) -> ScanResult<ValidationResult> {
        self.finish("record a validation result", || {
            ValidationResult::from_response(status, body)
        })
    }

    /// Records that the validation request never got an answer.
    ///
    /// # Errors
    ///
    /// Only allowed in `Detected`.
    pub fn resolve_unreachable(&mut self) -> ScanResult<ValidationResult> {
        self.finish("record a transport failure", || ValidationResult::Unreachable)
    }

    fn finish(
        &mut self,
        action: &'static str,
        result: impl FnOnce() -> ValidationResult,
    ) -> ScanResult<ValidationResult> {
        let ScanState::Detected { hash } = &self.state else {
            return Err(self.invalid(action));
        };
        let result = result();
        info!(hash = %hash, valid = result.is_valid(), "QR code validation finished");
        self.state = ScanState::Finished(result.clone());
        Ok(result)
    }

    /// Resets to `Idle` from any state, stopping the camera if needed.
    pub fn rescan(&mut self) -> Vec<ScanEffect> {
        let mut effects = Vec::new();
        self.release_camera(&mut effects);
        self.state = ScanState::Idle;
        debug!("scan reset");
        effects
    }
}
