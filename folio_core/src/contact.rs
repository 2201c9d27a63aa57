//! Simulated contact form.
//!
//! Nothing leaves the machine: a submission is validated, waits a fixed
//! delay, and resolves with a thank-you note.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::{CONTACT_ACKNOWLEDGEMENT, CONTACT_SUBMIT_DELAY_MS};
use crate::utils::error::{validation_error, FolioError};

/// Field values entered by the visitor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    /// Checks the same rules a browser would enforce on the form inputs.
    pub fn validate(&self) -> Result<(), FolioError> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(validation_error(field, "this field is required"));
            }
        }

        match self.email.trim().split_once('@') {
            Some((local, domain)) if !local.is_empty() && !domain.is_empty() && !domain.contains('@') => Ok(()),
            _ => Err(validation_error("email", "expected an address like name@example.com")),
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Acknowledgement {
    pub message: String,
}

/// Accepts submissions one at a time after a fixed delay.
#[derive(Debug, Clone)]
pub struct ContactDesk {
    delay: Duration,
    in_flight: Arc<AtomicBool>,
}

impl Default for ContactDesk {
    fn default() -> Self {
        Self::new(Duration::from_millis(CONTACT_SUBMIT_DELAY_MS))
    }
}

/// Clears the in-flight flag even if the submit future is dropped.
struct InFlightGuard(Arc<AtomicBool>);

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

impl ContactDesk {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Validates and "sends" the form. On success the form is cleared.
    pub async fn submit(&self, form: &mut ContactForm) -> Result<Acknowledgement, FolioError> {
        form.validate()?;

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return Err(FolioError::SubmissionInFlight);
        }
        let _guard = InFlightGuard(Arc::clone(&self.in_flight));

        tracing::debug!(subject = %form.subject, "simulating contact submission");
        tokio::time::sleep(self.delay).await;

        form.clear();
        Ok(Acknowledgement {
            message: CONTACT_ACKNOWLEDGEMENT.to_string(),
        })
    }
}
