//! Onboarding catalog: the fixed sequence of introductory slides shown to
//! new users.
//!
//! The catalog is built once at startup, either from the builtin table or
//! from a JSON file, and is never mutated afterwards.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// One slide in the onboarding sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnboardingStep {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// Absolute URL of the slide illustration.
    pub image: String,
}

/// Wire payload for `GET /api/onboarding`.
///
/// `total_steps` is always derived from `steps`; use
/// [`OnboardingCatalog::content`] to build one.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingContent<'a> {
    pub steps: &'a [OnboardingStep],
    pub total_steps: usize,
}

/// Validated, immutable list of onboarding steps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OnboardingCatalog {
    steps: Vec<OnboardingStep>,
}

// ---------------------------------------------------------------------------
// Builtin content
// ---------------------------------------------------------------------------

/// (id, title, description, image)
const BUILTIN_STEPS: &[(u32, &str, &str, &str)] = &[
    (
        1,
        "Welcome to RelooMate",
        "Find your perfect student housing match with our AI-powered platform. \
         Connect with compatible roommates and discover amazing properties.",
        "https://images.pexels.com/photos/276724/pexels-photo-276724.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
    (
        2,
        "Smart Matching System",
        "Our advanced algorithm considers your lifestyle, study habits, and preferences \
         to match you with the most compatible roommates and housing options.",
        "https://images.pexels.com/photos/7947663/pexels-photo-7947663.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
    (
        3,
        "Safe & Secure Platform",
        "All users are verified students. Chat safely, schedule visits, and sign leases \
         with confidence through our secure platform.",
        "https://images.pexels.com/photos/5935794/pexels-photo-5935794.jpeg?auto=compress&cs=tinysrgb&w=800",
    ),
];

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

impl OnboardingCatalog {
    /// The catalog compiled into the binary.
    pub fn builtin() -> Self {
        let steps = BUILTIN_STEPS
            .iter()
            .map(|&(id, title, description, image)| OnboardingStep {
                id,
                title: title.to_string(),
                description: description.to_string(),
                image: image.to_string(),
            })
            .collect();
        Self { steps }
    }

    /// Build a catalog from an explicit list of steps, validating it.
    pub fn new(steps: Vec<OnboardingStep>) -> Result<Self, CoreError> {
        validate_steps(&steps)?;
        Ok(Self { steps })
    }

    /// Parse a JSON array of steps (`[{"id":1,"title":..}, ..]`).
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let steps: Vec<OnboardingStep> = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("Malformed onboarding catalog: {e}")))?;
        Self::new(steps)
    }

    /// Load a catalog from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            CoreError::Internal(format!(
                "Failed to read onboarding catalog {}: {e}",
                path.display()
            ))
        })?;
        Self::from_json(&json)
    }

    pub fn steps(&self) -> &[OnboardingStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Response payload with `total_steps` matching the step count.
    pub fn content(&self) -> OnboardingContent<'_> {
        OnboardingContent {
            steps: &self.steps,
            total_steps: self.steps.len(),
        }
    }
}

impl Default for OnboardingCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Check that the list is non-empty, ids are positive and unique, and every
/// step has a title and an image.
pub fn validate_steps(steps: &[OnboardingStep]) -> Result<(), CoreError> {
    if steps.is_empty() {
        return Err(CoreError::Validation(
            "Onboarding catalog must contain at least one step".to_string(),
        ));
    }

    let mut seen = HashSet::with_capacity(steps.len());
    for step in steps {
        if step.id == 0 {
            return Err(CoreError::Validation(
                "Onboarding step id must be a positive integer".to_string(),
            ));
        }
        if !seen.insert(step.id) {
            return Err(CoreError::Validation(format!(
                "Duplicate onboarding step id {}",
                step.id
            )));
        }
        if step.title.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "Onboarding step {} has an empty title",
                step.id
            )));
        }
        if step.image.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "Onboarding step {} has an empty image URL",
                step.id
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
