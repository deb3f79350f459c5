/// Session state machine
///
/// `Session` owns everything the UI renders: the uploaded image, the edit
/// result, the prompt, the busy flag and the last error. All mutation goes
/// through the transitions below; `update` in `main.rs` calls them and the
/// view is derived from the result.
///
/// Idle ──upload──► Ready ──submit──► Submitting ──finish──► Ready
///   ▲                 │                   │
///   └──────reset──────┴───────reset───────┘

use tracing::{debug, info, warn};

use super::data::{EditResult, UploadedImage};
use crate::error::EditError;

/// Shown when submit is attempted without an image or a prompt
pub const VALIDATION_MESSAGE: &str = "Please upload an image and describe the edit you want.";

/// Shown when the service answered but produced no image part
pub const NO_IMAGE_MESSAGE: &str = "No image was returned by the API.";

/// What the edit request client resolves to: the base64 image, no image, or an error
pub type EditOutcome = Result<Option<String>, EditError>;

/// Coarse state derived from the session fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No image loaded
    Idle,
    /// Image loaded, nothing in flight
    Ready,
    /// Edit request in flight
    Submitting,
}

/// Everything the request client needs for one submission
#[derive(Clone, PartialEq)]
pub struct EditJob {
    /// Identifies the submission; the resolution must carry it back
    pub token: u64,
    pub image_base64: String,
    pub mime_type: String,
    pub prompt: String,
}

impl std::fmt::Debug for EditJob {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditJob")
            .field("token", &self.token)
            .field("image_base64_len", &self.image_base64.len())
            .field("mime_type", &self.mime_type)
            .field("prompt_len", &self.prompt.len())
            .finish()
    }
}

/// Application session state
#[derive(Debug, Default)]
pub struct Session {
    image: Option<UploadedImage>,
    result: Option<EditResult>,
    prompt: String,
    last_error: Option<String>,
    /// Token of the request currently in flight
    in_flight: Option<u64>,
    /// Last token handed out. Never reset, so stale tokens stay stale.
    last_token: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        match (&self.image, self.in_flight) {
            (_, Some(_)) => Phase::Submitting,
            (Some(_), None) => Phase::Ready,
            (None, None) => Phase::Idle,
        }
    }

    pub fn image(&self) -> Option<&UploadedImage> {
        self.image.as_ref()
    }

    pub fn result(&self) -> Option<&EditResult> {
        self.result.as_ref()
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    fn has_prompt(&self) -> bool {
        !self.prompt.is_empty()
    }

    /// Whether a submit right now would dispatch a request
    pub fn can_submit(&self) -> bool {
        self.phase() == Phase::Ready && self.has_prompt()
    }

    /// Store a newly supplied image, replacing any previous one
    ///
    /// Valid in `Idle` and `Ready`. Returns false (and changes nothing)
    /// while a request is in flight.
    pub fn upload_image(&mut self, image: UploadedImage) -> bool {
        if self.is_busy() {
            warn!("⚠️  Ignoring new image {} while an edit is in flight", image.file_name);
            return false;
        }

        info!(
            "🖼️  Loaded {} ({}, {} bytes)",
            image.file_name,
            image.mime_type,
            image.bytes.len()
        );

        // Replacing the Option drops the previous image and its display handle
        self.image = Some(image);
        self.result = None;
        self.last_error = None;
        true
    }

    /// Update the prompt text. Only valid in `Ready`.
    pub fn set_prompt(&mut self, text: String) -> bool {
        if self.phase() != Phase::Ready {
            return false;
        }
        self.prompt = text;
        true
    }

    /// Try to start an edit
    ///
    /// Returns the job to execute when the submission is accepted. A second
    /// submit while one is in flight is rejected outright. A submit without
    /// an image or a prompt records a validation error and returns `None`.
    pub fn submit(&mut self) -> Option<EditJob> {
        if self.is_busy() {
            debug!("Submit rejected: request {:?} already in flight", self.in_flight);
            return None;
        }

        let image = match (&self.image, self.has_prompt()) {
            (Some(image), true) => image,
            _ => {
                self.last_error = Some(VALIDATION_MESSAGE.to_string());
                return None;
            }
        };

        self.last_token += 1;
        let job = EditJob {
            token: self.last_token,
            image_base64: image.base64.clone(),
            mime_type: image.mime_type.clone(),
            prompt: self.prompt.clone(),
        };

        self.in_flight = Some(job.token);
        self.last_error = None;
        self.result = None;

        info!("✨ Submitting edit #{} ({} chars)", job.token, job.prompt.len());
        Some(job)
    }

    /// Apply the resolution of the request identified by `token`
    ///
    /// Returns false when the resolution is stale (the session was reset or
    /// the token is unknown) and was discarded.
    pub fn finish(&mut self, token: u64, outcome: EditOutcome) -> bool {
        if self.in_flight != Some(token) {
            debug!("Discarding stale edit result #{}", token);
            return false;
        }
        self.in_flight = None;

        match outcome {
            Ok(Some(base64)) => match EditResult::from_base64(base64) {
                Ok(result) => {
                    info!("✅ Edit #{} complete", token);
                    self.result = Some(result);
                    self.last_error = None;
                }
                Err(e) => {
                    warn!("⚠️  Edit #{} returned an undecodable image: {}", token, e);
                    self.last_error = Some(EditError::Decode(format!("invalid image data: {}", e)).to_string());
                }
            },
            Ok(None) => {
                warn!("⚠️  Edit #{} returned no image", token);
                self.last_error = Some(NO_IMAGE_MESSAGE.to_string());
            }
            Err(e) => {
                warn!("❌ Edit #{} failed: {}", token, e);
                self.last_error = Some(e.to_string());
            }
        }

        true
    }

    /// Return to `Idle` from any state
    ///
    /// A request still in flight is not cancelled; its resolution will be
    /// discarded by `finish` because its token no longer matches.
    pub fn reset(&mut self) {
        if let Some(token) = self.in_flight {
            debug!("Reset while edit #{} in flight", token);
        }

        self.image = None;
        self.result = None;
        self.prompt.clear();
        self.last_error = None;
        self.in_flight = None;
    }
}
