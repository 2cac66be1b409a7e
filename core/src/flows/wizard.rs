//! Personality test wizard.
//!
//! Walks one question at a time through a fetched question set, stops at
//! the first premium question when the visitor has no paid access, and
//! posts the collected answers as one batch.
//!
//! ```text
//! Loading ──fetch ok──▶ InProgress ◀──back── PremiumLock
//!    │  │                  │   └──next (premium, denied)──▶┘
//!    │  └─zero questions─▶ Empty                          │
//!    └─fetch failed─▶ Failed ──retry──▶ Loading           │
//!                          │ submit                       │ submit
//!                          ▼                              ▼
//!                       Submitting ──ok──▶ Completed(result)
//!                          └──error──▶ back to where submit came from
//! ```
//!
//! Async operations are split in a `begin_*` half that validates and
//! changes state and a `finish_*` half that applies the backend outcome,
//! so a UI can render the intermediate state. [`TestWizard::load`] and
//! [`TestWizard::submit`] combine them for callers that hold the wizard
//! across the await.

use std::collections::HashMap;

use log::{debug, warn};

use crate::api::Backend;
use crate::config::PRICING_ROUTE;
use crate::error::{ApiError, ApiResult, ValidationError, WizardError, WizardResult};
use crate::models::{Answer, Question, QuestionSet, TestResult, TestSubmission};

// =============================================================================
// Access Policy
// =============================================================================

/// Decides whether premium questions are unlocked.
#[allow(async_fn_in_trait)]
pub trait AccessPolicy {
    async fn has_premium_access(&self) -> bool;
}

/// Nobody gets premium questions.
#[derive(Debug, Clone, Copy, Default)]
pub struct DenyAll;

impl AccessPolicy for DenyAll {
    async fn has_premium_access(&self) -> bool {
        false
    }
}

/// Asks the backend's entitlement endpoint. Any failure denies.
pub struct BackendAccess<'a, B> {
    backend: &'a B,
}

impl<'a, B: Backend> BackendAccess<'a, B> {
    pub fn new(backend: &'a B) -> Self {
        Self { backend }
    }
}

impl<B: Backend> AccessPolicy for BackendAccess<'_, B> {
    async fn has_premium_access(&self) -> bool {
        match self.backend.test_access().await {
            Ok(access) => access.can_take_paid_test,
            Err(ApiError::Unauthorized) => false,
            Err(e) => {
                warn!("access check failed, denying premium: {}", e);
                false
            }
        }
    }
}

// =============================================================================
// State
// =============================================================================

/// Where a submission was started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resume {
    InProgress,
    PremiumLock,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WizardState {
    Loading,
    InProgress,
    PremiumLock,
    Submitting(Resume),
    Completed(TestResult),
    Empty,
    Failed(ApiError),
}

impl WizardState {
    pub fn name(&self) -> &'static str {
        match self {
            WizardState::Loading => "loading",
            WizardState::InProgress => "in progress",
            WizardState::PremiumLock => "at the premium lock",
            WizardState::Submitting(_) => "submitting",
            WizardState::Completed(_) => "completed",
            WizardState::Empty => "empty",
            WizardState::Failed(_) => "failed",
        }
    }
}

/// Outcome of [`TestWizard::next`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Moved(usize),
    Locked,
    AtEnd,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestWizard {
    test_type: String,
    premium_access: bool,
    questions: Vec<Question>,
    index: usize,
    answers: HashMap<String, usize>,
    state: WizardState,
}

impl TestWizard {
    /// Wizard waiting for its question set.
    pub fn loading(test_type: &str, premium_access: bool) -> Self {
        Self {
            test_type: test_type.to_string(),
            premium_access,
            questions: Vec::new(),
            index: 0,
            answers: HashMap::new(),
            state: WizardState::Loading,
        }
    }

    /// Apply the question fetch outcome.
    pub fn finish_load(&mut self, result: ApiResult<QuestionSet>) {
        match result {
            Ok(set) => {
                let mut questions = set.questions;
                questions.sort_by_key(|q| q.order);
                self.questions = questions;
                self.index = 0;
                self.answers.clear();
                self.state = if self.questions.is_empty() {
                    WizardState::Empty
                } else {
                    WizardState::InProgress
                };
                debug!(
                    "wizard: {} questions loaded for {} ({})",
                    self.questions.len(),
                    self.test_type,
                    self.state.name()
                );
            }
            Err(e) => {
                warn!("wizard: failed to load questions: {}", e);
                self.state = WizardState::Failed(e);
            }
        }
    }

    /// Resolve access, fetch questions and return the ready wizard.
    pub async fn load<B: Backend, P: AccessPolicy>(
        backend: &B,
        policy: &P,
        test_type: &str,
    ) -> Self {
        let premium_access = policy.has_premium_access().await;
        let mut wizard = Self::loading(test_type, premium_access);
        wizard.finish_load(backend.questions(test_type, premium_access).await);
        wizard
    }

    /// Re-enter `Loading` after a failure.
    pub fn retry(&mut self) -> WizardResult<()> {
        match self.state {
            WizardState::Failed(_) => {
                self.state = WizardState::Loading;
                Ok(())
            }
            _ => Err(self.invalid("retry")),
        }
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    pub fn test_type(&self) -> &str {
        &self.test_type
    }

    pub fn state(&self) -> &WizardState {
        &self.state
    }

    pub fn has_premium_access(&self) -> bool {
        self.premium_access
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn current(&self) -> Option<&Question> {
        self.questions.get(self.index)
    }

    /// Selected option for a question.
    pub fn answer(&self, question_id: &str) -> Option<usize> {
        self.answers.get(question_id).copied()
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// `(index + 1) / N`, or 0 with no questions.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            0.0
        } else {
            (self.index + 1) as f64 / self.questions.len() as f64
        }
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 >= self.questions.len()
    }

    /// Free questions still lacking an answer.
    pub fn unanswered_free(&self) -> usize {
        self.questions
            .iter()
            .filter(|q| !q.is_premium && !self.answers.contains_key(&q.id))
            .count()
    }

    /// Where the upgrade button leads.
    pub fn upgrade_target(&self) -> &'static str {
        PRICING_ROUTE
    }

    fn invalid(&self, action: &'static str) -> WizardError {
        WizardError::InvalidState {
            action,
            state: self.state.name(),
        }
    }

    fn require_in_progress(&self, action: &'static str) -> WizardResult<()> {
        match self.state {
            WizardState::InProgress => Ok(()),
            _ => Err(self.invalid(action)),
        }
    }

    // -------------------------------------------------------------------------
    // Navigation
    // -------------------------------------------------------------------------

    /// Answer the current question.
    pub fn select(&mut self, option: usize) -> WizardResult<()> {
        self.require_in_progress("answer")?;
        let question = self.current().ok_or_else(|| self.invalid("answer"))?;
        if option >= question.options.len() {
            return Err(ValidationError::InvalidOption {
                question_id: question.id.clone(),
                option,
            }
            .into());
        }
        let id = question.id.clone();
        self.answers.insert(id, option);
        Ok(())
    }

    pub fn next(&mut self) -> WizardResult<Advance> {
        self.require_in_progress("advance")?;
        let target = self.index + 1;
        let Some(question) = self.questions.get(target) else {
            return Ok(Advance::AtEnd);
        };
        if question.is_premium && !self.premium_access {
            debug!("wizard: premium question at {} is locked", target);
            self.state = WizardState::PremiumLock;
            return Ok(Advance::Locked);
        }
        self.index = target;
        Ok(Advance::Moved(target))
    }

    /// Step back. Returns false at the first question.
    pub fn previous(&mut self) -> WizardResult<bool> {
        self.require_in_progress("go back")?;
        if self.index == 0 {
            return Ok(false);
        }
        self.index -= 1;
        Ok(true)
    }

    /// Leave the premium lock, keeping answers and position.
    pub fn back_to_questions(&mut self) -> WizardResult<()> {
        match self.state {
            WizardState::PremiumLock => {
                self.state = WizardState::InProgress;
                Ok(())
            }
            _ => Err(self.invalid("return to questions")),
        }
    }

    // -------------------------------------------------------------------------
    // Submission
    // -------------------------------------------------------------------------

    /// Validate, enter `Submitting` and return the request body.
    pub fn begin_submit(&mut self) -> WizardResult<TestSubmission> {
        let resume = match self.state {
            WizardState::InProgress => Resume::InProgress,
            WizardState::PremiumLock => Resume::PremiumLock,
            _ => return Err(self.invalid("submit")),
        };

        let missing = self.unanswered_free();
        if missing > 0 {
            return Err(ValidationError::UnansweredQuestions(missing).into());
        }

        let answers = self
            .questions
            .iter()
            .filter_map(|q| {
                self.answers.get(&q.id).map(|&selected_option| Answer {
                    question_id: q.id.clone(),
                    selected_option,
                })
            })
            .collect();

        self.state = WizardState::Submitting(resume);
        debug!("wizard: submitting {} answers", self.answers.len());
        Ok(TestSubmission {
            test_type: self.test_type.clone(),
            answers,
        })
    }

    /// Apply the submission outcome. On error the wizard returns to the
    /// state the submission started from.
    pub fn finish_submit(&mut self, result: ApiResult<TestResult>) -> WizardResult<&TestResult> {
        let WizardState::Submitting(resume) = self.state else {
            return Err(self.invalid("finish submitting"));
        };
        match result {
            Ok(result) => {
                self.state = WizardState::Completed(result);
                self.result().ok_or_else(|| self.invalid("finish submitting"))
            }
            Err(e) => {
                warn!("wizard: submission failed: {}", e);
                self.state = match resume {
                    Resume::InProgress => WizardState::InProgress,
                    Resume::PremiumLock => WizardState::PremiumLock,
                };
                Err(e.into())
            }
        }
    }

    pub async fn submit<B: Backend>(&mut self, backend: &B) -> WizardResult<&TestResult> {
        let submission = self.begin_submit()?;
        let result = backend.submit_test(&submission).await;
        self.finish_submit(result)
    }

    /// The result once completed.
    pub fn result(&self) -> Option<&TestResult> {
        match &self.state {
            WizardState::Completed(result) => Some(result),
            _ => None,
        }
    }
}
