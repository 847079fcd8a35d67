use crate::core::clock::Clock;
use crate::core::experience::{assess_experience, ExperienceOutcome};
use crate::domain::PortfolioData;
use serde::Serialize;
use std::collections::BTreeSet;

/// Headline figures for a portfolio.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioSummary {
    pub name: String,
    pub companies: usize,
    pub projects: usize,
    pub technologies: usize,
    pub certifications: usize,
    pub gpa: Option<String>,
    pub work_experience: ExperienceOutcome,
    pub project_experience: ExperienceOutcome,
    pub education_years: ExperienceOutcome,
}

impl PortfolioSummary {
    pub fn from_portfolio<C: Clock + ?Sized>(data: &PortfolioData, clock: &C) -> Self {
        let companies: BTreeSet<String> = data
            .work_experience
            .iter()
            .map(|w| w.company.trim().to_lowercase())
            .filter(|c| !c.is_empty())
            .collect();

        Self {
            name: data.personal_info.name.clone(),
            companies: companies.len(),
            projects: data.projects.len(),
            technologies: data.technologies().len(),
            certifications: data.certifications.len(),
            gpa: data.gpa().map(str::to_string),
            work_experience: assess_experience(Some(data.work_experience.as_slice()), clock),
            project_experience: assess_experience(Some(data.projects.as_slice()), clock),
            education_years: assess_experience(Some(data.education.as_slice()), clock),
        }
    }
}
