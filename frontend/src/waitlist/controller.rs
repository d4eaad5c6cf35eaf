//! Submission lifecycle for the early access form.
//!
//! The controller is the only owner of the draft and of the submission
//! state. Submitting is split into [`FormController::begin_submit`] and
//! [`FormController::complete_submit`] so a UI can flip the state
//! synchronously and await the request without holding a borrow;
//! [`submit`] runs both halves against the configured client.

use std::cell::RefCell;

use thiserror::Error;

use crate::config::WaitlistConfig;
use crate::utils::console;
use crate::waitlist::client::{HttpWaitlistClient, SubmitError, WaitlistClient, WaitlistSignupRequest};
use crate::waitlist::draft::{FieldUpdate, SignupDraft};

pub const SUCCESS_MESSAGE: &str = "Welcome to the waitlist! We'll be in touch soon.";
pub const CONFLICT_MESSAGE: &str = "This email is already on our waitlist";
pub const TRANSIENT_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmissionState {
    Editing,
    Submitting,
    /// Terminal for the rest of the visit.
    Submitted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your email address")]
    MissingEmail,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Please select your role")]
    MissingRole,
    #[error("Please select your biggest fundraising pain")]
    MissingPain,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A toast-style message for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn success(message: &str) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.to_string(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }
}

impl From<ValidationError> for Notice {
    fn from(e: ValidationError) -> Self {
        Notice::error(e.to_string())
    }
}

/// Result of trying to start a submission.
#[derive(Clone, Debug, PartialEq)]
pub enum SubmitStart {
    /// State is now `Submitting`; send exactly this payload once.
    Ready(WaitlistSignupRequest),
    /// A required field is missing; nothing was sent.
    Invalid(ValidationError),
    /// Already submitting or submitted.
    Ignored,
}

/// `local@domain.tld` shape: one `@`, no spaces, a dotted domain without
/// empty labels.
pub fn looks_like_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

pub fn validate(draft: &SignupDraft) -> Result<(), ValidationError> {
    let email = draft.email.trim();
    if email.is_empty() {
        return Err(ValidationError::MissingEmail);
    }
    if !looks_like_email(email) {
        return Err(ValidationError::InvalidEmail);
    }
    if draft.role.is_none() {
        return Err(ValidationError::MissingRole);
    }
    if draft.biggest_pain.is_none() {
        return Err(ValidationError::MissingPain);
    }
    Ok(())
}

fn build_request(draft: &SignupDraft) -> Result<WaitlistSignupRequest, ValidationError> {
    validate(draft)?;
    let role = draft.role.ok_or(ValidationError::MissingRole)?;
    let pain = draft.biggest_pain.ok_or(ValidationError::MissingPain)?;
    let detailed_pain = Some(draft.detailed_pain.trim())
        .filter(|text| !text.is_empty())
        .map(str::to_string);

    Ok(WaitlistSignupRequest {
        email: draft.email.trim().to_string(),
        role,
        founder_stage: draft.founder_stage,
        funding_stage: draft.funding_stage,
        biggest_pain: pain.as_str().to_string(),
        detailed_pain,
    })
}

pub struct FormController<C> {
    client: C,
    draft: SignupDraft,
    state: SubmissionState,
}

impl FormController<HttpWaitlistClient> {
    pub fn from_config(config: &WaitlistConfig) -> Self {
        Self::new(HttpWaitlistClient::new(config))
    }
}

impl<C: WaitlistClient> FormController<C> {
    pub fn new(client: C) -> Self {
        Self {
            client,
            draft: SignupDraft::default(),
            state: SubmissionState::Editing,
        }
    }

    pub fn draft(&self) -> &SignupDraft {
        &self.draft
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn is_submitting(&self) -> bool {
        self.state == SubmissionState::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.state == SubmissionState::Submitted
    }

    /// Returns false when the draft is frozen by a confirmed signup.
    pub fn update_field(&mut self, update: FieldUpdate) -> bool {
        if self.is_submitted() {
            return false;
        }
        self.draft.apply(update);
        true
    }

    pub fn begin_submit(&mut self) -> SubmitStart {
        if self.state != SubmissionState::Editing {
            console::log("Ignoring submit while the form is not editable");
            return SubmitStart::Ignored;
        }
        match build_request(&self.draft) {
            Ok(request) => {
                self.state = SubmissionState::Submitting;
                SubmitStart::Ready(request)
            }
            Err(e) => SubmitStart::Invalid(e),
        }
    }

    /// Applies the outcome of the request started by `begin_submit`.
    pub fn complete_submit(&mut self, outcome: Result<(), SubmitError>) -> Option<Notice> {
        if self.state != SubmissionState::Submitting {
            return None;
        }
        let notice = match outcome {
            Ok(()) => {
                self.state = SubmissionState::Submitted;
                Notice::success(SUCCESS_MESSAGE)
            }
            Err(SubmitError::Conflict) => {
                self.state = SubmissionState::Editing;
                Notice::error(CONFLICT_MESSAGE)
            }
            Err(SubmitError::Transient(cause)) => {
                console::log(&format!("Waitlist signup failed: {}", cause));
                self.state = SubmissionState::Editing;
                Notice::error(TRANSIENT_MESSAGE)
            }
        };
        Some(notice)
    }
}

/// Validates, sends at most one request and settles the state of a
/// controller shared with the UI. The borrow is released while the request
/// is in flight; `on_submitting` runs once the state is `Submitting`.
/// `None` means the call was ignored because a submission is in flight or
/// already confirmed.
pub async fn submit<C>(form: &RefCell<FormController<C>>, on_submitting: impl FnOnce()) -> Option<Notice>
where
    C: WaitlistClient + Clone,
{
    let start = form.borrow_mut().begin_submit();
    let request = match start {
        SubmitStart::Ignored => return None,
        SubmitStart::Invalid(e) => return Some(Notice::from(e)),
        SubmitStart::Ready(request) => request,
    };
    on_submitting();

    let client = form.borrow().client().clone();
    let outcome = client.join(&request).await;
    form.borrow_mut().complete_submit(outcome)
}
