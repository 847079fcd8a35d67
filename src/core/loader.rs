use crate::adapters::local::LocalSource;
use crate::core::PortfolioSource;
use crate::domain::{DataFormat, PortfolioData};
use crate::utils::error::{PortfolioError, Result};
use crate::utils::validation::{
    validate_email, validate_non_empty_string, validate_optional_url, validate_url, Validate,
};
use std::path::Path;

impl PortfolioData {
    /// 從檔案載入 (依副檔名判斷 TOML 或 JSON)
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        load_portfolio(&LocalSource::new(path.as_ref()))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }
}

pub fn load_portfolio<S: PortfolioSource>(source: &S) -> Result<PortfolioData> {
    let (bytes, format) = source.read_portfolio()?;
    tracing::debug!(
        "Read {} bytes of {:?} from {}",
        bytes.len(),
        format,
        source.location().display()
    );

    let data = match format {
        DataFormat::Json => serde_json::from_slice(&bytes)?,
        DataFormat::Toml => {
            let content = String::from_utf8(bytes).map_err(|e| {
                PortfolioError::ConfigValidationError {
                    field: "data".to_string(),
                    message: format!("Data file is not valid UTF-8: {}", e),
                }
            })?;
            PortfolioData::from_toml_str(&content)?
        }
    };

    tracing::info!(
        "📄 Loaded portfolio: {} work entries, {} projects, {} education entries",
        data.work_experience.len(),
        data.projects.len(),
        data.education.len()
    );
    Ok(data)
}

impl Validate for PortfolioData {
    fn validate(&self) -> Result<()> {
        let info = &self.personal_info;
        validate_non_empty_string("personalInfo.name", &info.name)?;
        validate_email("personalInfo.email", &info.email)?;
        validate_optional_url("personalInfo.github", Some(info.github.as_str()))?;
        validate_optional_url("personalInfo.linkedin", Some(info.linkedin.as_str()))?;

        for (i, project) in self.projects.iter().enumerate() {
            validate_non_empty_string(&format!("projects[{}].name", i), &project.name)?;
            validate_optional_url(&format!("projects[{}].liveDemo", i), project.live_demo.as_deref())?;
            validate_optional_url(&format!("projects[{}].github", i), project.github.as_deref())?;
        }

        for (i, cert) in self.certifications.iter().enumerate() {
            validate_url(&format!("certifications[{}].url", i), &cert.url)?;
        }

        for (i, reference) in self.references.iter().enumerate() {
            validate_email(&format!("references[{}].email", i), &reference.email)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL_TOML: &str = r#"
[personalInfo]
name = "Test Person"
title = "Software Engineer"
email = "test@example.com"
github = "https://github.com/test"

[[workExperience]]
company = "Axpara"
period = "Sep 2022 - Nov 2023"
position = "Frontend Developer"
responsibilities = ["Built things."]
"#;

    #[test]
    fn test_parse_toml_portfolio() {
        let data = PortfolioData::from_toml_str(MINIMAL_TOML).unwrap();
        assert_eq!(data.personal_info.name, "Test Person");
        assert_eq!(data.work_experience.len(), 1);
        assert_eq!(data.work_experience[0].period, "Sep 2022 - Nov 2023");
        assert!(data.projects.is_empty());
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_parse_json_portfolio_with_camel_case_keys() {
        let json = r#"{
            "personalInfo": {"name": "A", "title": "B", "email": "a@b.co", "linkedin": ""},
            "projects": [{
                "name": "P",
                "period": "Jan 2023 - Feb 2023",
                "role": "Leader",
                "technologies": ["Next.js"],
                "liveDemo": "https://example.com/demo"
            }],
            "skills": {"programmingLanguages": ["TypeScript"]}
        }"#;
        let data = PortfolioData::from_json_str(json).unwrap();
        assert_eq!(data.projects[0].live_demo.as_deref(), Some("https://example.com/demo"));
        assert_eq!(data.skills.programming_languages, vec!["TypeScript"]);
        assert!(data.validate().is_ok());
    }

    #[test]
    fn test_missing_personal_info_is_an_error() {
        let err = PortfolioData::from_toml_str("[[workExperience]]\ncompany = \"X\"\n").unwrap_err();
        assert!(matches!(err, PortfolioError::TomlError(_)));
    }

    #[test]
    fn test_validation_rejects_bad_email_and_urls() {
        let mut data = PortfolioData::from_toml_str(MINIMAL_TOML).unwrap();
        data.personal_info.email = "not-an-email".to_string();
        assert!(data.validate().is_err());

        let mut data = PortfolioData::from_toml_str(MINIMAL_TOML).unwrap();
        data.personal_info.github = "github.com/test".to_string();
        assert!(data.validate().is_err());
    }
}
