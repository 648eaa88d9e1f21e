//! AI-assisted text: professional summary, description rewrites, job tailoring.
//!
//! Each action is gated by its own in-flight flag. A second request for an
//! action that is still outstanding is rejected, never queued.

use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tracing::{info, warn};

use crate::editor::ResumeStore;
use crate::llm_client::{ApiKey, LlmError, TextCompletion};
use crate::models::resume::ResumeData;

const SUMMARY_SYSTEM: &str = "You are a professional resume writer. Create compelling, concise \
professional summaries that highlight key achievements and skills.";

const DESCRIPTION_SYSTEM: &str = "You are a professional resume writer. Improve job descriptions \
to be more impactful and ATS-friendly while maintaining accuracy.";

const TAILORING_SYSTEM: &str = "You are a professional resume consultant. Analyze job descriptions \
and suggest improvements to resumes to better match the requirements.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Summary,
    Description,
    Tailoring,
}

impl Action {
    fn slot(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("{0:?} generation already in progress")]
    AlreadyGenerating(Action),

    #[error("no API key configured")]
    MissingCredential,

    #[error("completion request failed: {0}")]
    Completion(LlmError),

    #[error("completion returned no text")]
    EmptyResponse,
}

impl From<LlmError> for GenerationError {
    fn from(e: LlmError) -> Self {
        match e {
            LlmError::EmptyContent => GenerationError::EmptyResponse,
            other => GenerationError::Completion(other),
        }
    }
}

impl GenerationError {
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerationError::AlreadyGenerating(_) => "Generation is already in progress.",
            GenerationError::MissingCredential => "Please set your API key in settings first.",
            GenerationError::Completion(_) | GenerationError::EmptyResponse => {
                "Failed to generate AI text. Please check your API key and try again."
            }
        }
    }
}

/// Builds the fixed summary prompt from name, roles, education and skills.
pub fn build_summary_prompt(data: &ResumeData) -> String {
    let experience = data
        .experience
        .iter()
        .map(|e| format!("{} at {}", e.position, e.company))
        .collect::<Vec<_>>()
        .join(", ");
    let education = data
        .education
        .iter()
        .map(|e| format!("{} in {} from {}", e.degree, e.field, e.institution))
        .collect::<Vec<_>>()
        .join(", ");
    let skills = data
        .skills
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Create a professional summary for a resume based on the following information:\n\
         \n\
         Name: {name}\n\
         Experience: {experience}\n\
         Education: {education}\n\
         Skills: {skills}\n\
         \n\
         Write a compelling 2-3 sentence professional summary that highlights key \
         achievements and value proposition.",
        name = data.personal_info.name,
    )
}

pub fn build_description_prompt(description: &str, context: &str) -> String {
    format!("Context: {context}\n\nImprove this description: {description}")
}

pub fn build_tailoring_prompt(data: &ResumeData, job_description: &str) -> String {
    let skills = data
        .skills
        .iter()
        .map(|s| s.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Job Description:\n{job_description}\n\n\
         Current Resume Summary:\n{summary}\n\n\
         Current Skills:\n{skills}\n\n\
         Suggest specific improvements to better match this job posting. Focus on:\n\
         1. Keywords to include\n\
         2. Skills to emphasize\n\
         3. Summary improvements\n\
         4. Experience descriptions that should be enhanced\n\n\
         Provide actionable suggestions in bullet points.",
        summary = data.summary,
    )
}

/// Clears its action's in-flight flag on drop, including when the future is cancelled.
struct InFlight<'a>(&'a AtomicBool);

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

pub struct SummaryGenerator<C> {
    completion: C,
    in_flight: [AtomicBool; 3],
}

impl<C: TextCompletion> SummaryGenerator<C> {
    pub fn new(completion: C) -> Self {
        Self {
            completion,
            in_flight: Default::default(),
        }
    }

    pub fn is_generating(&self, action: Action) -> bool {
        self.in_flight[action.slot()].load(Ordering::Acquire)
    }

    fn begin(&self, action: Action) -> Result<InFlight<'_>, GenerationError> {
        let flag = &self.in_flight[action.slot()];
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| GenerationError::AlreadyGenerating(action))?;
        Ok(InFlight(flag))
    }

    async fn run(
        &self,
        action: Action,
        credential: Option<&ApiKey>,
        system: &str,
        prompt: &str,
    ) -> Result<String, GenerationError> {
        let credential = credential.ok_or(GenerationError::MissingCredential)?;
        let _guard = self.begin(action)?;
        let text = self.completion.complete(credential, system, prompt).await?;
        if text.trim().is_empty() {
            return Err(GenerationError::EmptyResponse);
        }
        Ok(text)
    }

    /// Returns the model's summary text verbatim.
    pub async fn generate_summary(
        &self,
        data: &ResumeData,
        credential: Option<&ApiKey>,
    ) -> Result<String, GenerationError> {
        let prompt = build_summary_prompt(data);
        self.run(Action::Summary, credential, SUMMARY_SYSTEM, &prompt).await
    }

    /// Generates from the store's current snapshot and replaces only the
    /// summary field once the text arrives. On failure the store is untouched.
    pub async fn generate_into(&self, store: &ResumeStore, credential: Option<&ApiKey>) -> Result<(), GenerationError> {
        let snapshot = store.snapshot();
        match self.generate_summary(&snapshot, credential).await {
            Ok(summary) => {
                info!(chars = summary.len(), "generated summary");
                store.set_summary(summary);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "summary generation failed");
                Err(e)
            }
        }
    }

    /// Rewrites an experience description. An empty reply keeps the original.
    pub async fn improve_description(
        &self,
        description: &str,
        context: &str,
        credential: Option<&ApiKey>,
    ) -> Result<String, GenerationError> {
        let prompt = build_description_prompt(description, context);
        match self.run(Action::Description, credential, DESCRIPTION_SYSTEM, &prompt).await {
            Err(GenerationError::EmptyResponse) => Ok(description.to_string()),
            other => other,
        }
    }

    /// Suggestions for matching `job_description`. Nothing in the résumé is changed.
    pub async fn suggest_tailoring(
        &self,
        data: &ResumeData,
        job_description: &str,
        credential: Option<&ApiKey>,
    ) -> Result<String, GenerationError> {
        let prompt = build_tailoring_prompt(data, job_description);
        self.run(Action::Tailoring, credential, TAILORING_SYSTEM, &prompt).await
    }
}
