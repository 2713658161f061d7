// config.rs — Per-pass inputs.
//
// Built once at the start of a pass from the action inputs and passed by
// reference through catalog construction, rendering and dispatch.

use wra_report::ReportTemplates;

use crate::error::ActionError;

/// The action inputs of one pass.
#[derive(Clone, PartialEq, Eq)]
pub struct ActionConfig {
    /// API credential, handed to the transport only.
    pub token: String,
    /// Exact artifact name to select; `None` disables selection.
    pub artifact_name: Option<String>,
    /// Raw `report-on` value, validated at dispatch time.
    pub report_on: String,
    pub templates: ReportTemplates,
    /// Skip reporting and outputs when the run has no artifacts.
    pub ignore_empty: bool,
}

impl ActionConfig {
    /// Interpret a boolean action input. Only the literal `"true"` is true.
    pub fn flag(value: &str) -> bool {
        value == "true"
    }

    /// Treat an empty `artifact-name` input as absent.
    pub fn optional(value: &str) -> Option<String> {
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }
}

impl std::fmt::Debug for ActionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionConfig")
            .field("token", &if self.token.is_empty() { "" } else { "***" })
            .field("artifact_name", &self.artifact_name)
            .field("report_on", &self.report_on)
            .field("templates", &self.templates)
            .field("ignore_empty", &self.ignore_empty)
            .finish()
    }
}

/// The `owner/repo` the run belongs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repository {
    pub owner: String,
    pub repo: String,
}

impl std::str::FromStr for Repository {
    type Err = ActionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(Repository {
                    owner: owner.to_string(),
                    repo: repo.to_string(),
                })
            }
            _ => Err(ActionError::Precondition(format!(
                "repository must be given as 'owner/repo', got '{}'",
                s
            ))),
        }
    }
}

impl std::fmt::Display for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_literal_true_is_true() {
        assert!(ActionConfig::flag("true"));
        for value in ["", "false", "TRUE", "True", "1", "yes", " true"] {
            assert!(!ActionConfig::flag(value), "{:?} should be false", value);
        }
    }

    #[test]
    fn empty_artifact_name_is_absent() {
        assert_eq!(ActionConfig::optional(""), None);
        assert_eq!(ActionConfig::optional("build"), Some("build".to_string()));
    }

    #[test]
    fn debug_redacts_token() {
        let config = ActionConfig {
            token: "ghs_secret".into(),
            artifact_name: None,
            report_on: "none".into(),
            templates: ReportTemplates::default(),
            ignore_empty: false,
        };
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("ghs_secret"));
        assert!(rendered.contains("***"));
    }

    #[test]
    fn repository_parses_owner_and_name() {
        let repository: Repository = "acme/widgets".parse().unwrap();
        assert_eq!(repository.owner, "acme");
        assert_eq!(repository.repo, "widgets");
        assert_eq!(repository.to_string(), "acme/widgets");
    }

    #[test]
    fn malformed_repository_is_a_precondition_error() {
        for bad in ["", "acme", "/widgets", "acme/", "acme/widgets/extra"] {
            assert!(
                matches!(bad.parse::<Repository>(), Err(ActionError::Precondition(_))),
                "{:?} should be rejected",
                bad
            );
        }
    }
}
