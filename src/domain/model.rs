use serde::{Deserialize, Serialize};

/// Anything carrying a free-text period such as `"Dec 2023 - Apr 2024"`.
pub trait HasPeriod {
    fn period(&self) -> &str;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeriodRecord {
    pub period: String,
}

impl PeriodRecord {
    pub fn new(period: impl Into<String>) -> Self {
        Self {
            period: period.into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub phone: String,
    pub email: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub github: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub objective: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub period: String,
    pub degree: String,
    pub institution: String,
    pub gpa: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperience {
    pub company: String,
    pub period: String,
    pub position: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: String,
    pub period: String,
    pub role: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    pub live_demo: Option<String>,
    pub github: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    pub programming_languages: Vec<String>,
    pub frontend: Vec<String>,
    pub backend: Vec<String>,
    pub databases: Vec<String>,
    pub devops: Vec<String>,
    pub vcs: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub name: String,
    pub date: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Award {
    pub name: String,
    pub period: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reference {
    pub name: String,
    pub position: String,
    pub email: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioData {
    pub personal_info: PersonalInfo,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub skills: Skills,
    #[serde(default)]
    pub certifications: Vec<Certification>,
    #[serde(default)]
    pub awards: Vec<Award>,
    #[serde(default)]
    pub references: Vec<Reference>,
}

impl PortfolioData {
    /// Distinct technologies across all projects, in first-seen order.
    pub fn technologies(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for tech in self.projects.iter().flat_map(|p| p.technologies.iter()) {
            if !seen.contains(&tech.as_str()) {
                seen.push(tech.as_str());
            }
        }
        seen
    }

    /// Projects listing `tech` among their technologies (exact match).
    pub fn projects_using(&self, tech: &str) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| p.technologies.iter().any(|t| t == tech))
            .collect()
    }

    /// GPA of the first education entry that reports one.
    pub fn gpa(&self) -> Option<&str> {
        self.education.iter().find_map(|e| e.gpa.as_deref())
    }
}

impl HasPeriod for PeriodRecord {
    fn period(&self) -> &str {
        &self.period
    }
}

impl HasPeriod for WorkExperience {
    fn period(&self) -> &str {
        &self.period
    }
}

impl HasPeriod for Project {
    fn period(&self) -> &str {
        &self.period
    }
}

impl HasPeriod for Education {
    fn period(&self) -> &str {
        &self.period
    }
}

impl HasPeriod for String {
    fn period(&self) -> &str {
        self
    }
}

impl HasPeriod for &str {
    fn period(&self) -> &str {
        self
    }
}

/// Record types whose period can be labelled in a report.
pub trait Labelled: HasPeriod {
    fn label(&self) -> &str;
}

impl Labelled for WorkExperience {
    fn label(&self) -> &str {
        &self.company
    }
}

impl Labelled for Project {
    fn label(&self) -> &str {
        &self.name
    }
}

impl Labelled for Education {
    fn label(&self) -> &str {
        &self.institution
    }
}

impl Labelled for PeriodRecord {
    fn label(&self) -> &str {
        &self.period
    }
}
