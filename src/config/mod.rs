//! Console configuration loading and management
//!
//! ```yaml
//! default_page_size: 10
//! pages:
//!   prescriptions:
//!     page_size: 20
//!     default_sort: date_issued:desc
//!   inventory:
//!     search_fields: [name, supplier]
//!   staff:
//!     access: admin_or_role:manager
//! ```

use crate::core::auth::AccessPolicy;
use crate::core::error::ConfigError;
use crate::core::pagination::DEFAULT_PAGE_SIZE;
use crate::core::sort::SortSpec;
use crate::pages::ConsolePage;
use anyhow::Result;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

/// Settings for one list page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PageConfig {
    /// Rows per page
    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100))]
    pub page_size: usize,

    /// Fields the search box looks at; the record's own list when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_fields: Option<Vec<String>>,

    /// Sort applied when the page opens
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<SortSpec>,

    /// Overrides who may open the page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub access: Option<AccessPolicy>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            search_fields: None,
            default_sort: None,
            access: None,
        }
    }
}

/// Complete configuration for the console
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Page size for pages without their own entry
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_page_size: Option<usize>,

    /// Per-page settings keyed by page name
    #[serde(default)]
    pub pages: IndexMap<String, PageConfig>,
}

impl ConsoleConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check page names and values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(size) = self.default_page_size.filter(|size| !(1..=100).contains(size)) {
            return Err(ConfigError::InvalidPage {
                page: "default".to_string(),
                message: format!("page_size {size} is outside 1..=100"),
            });
        }

        for (name, page) in &self.pages {
            let invalid = |message: String| ConfigError::InvalidPage {
                page: name.clone(),
                message,
            };

            name.parse::<ConsolePage>().map_err(invalid)?;
            page.validate().map_err(|errors| invalid(errors.to_string()))?;
            if page.search_fields.as_ref().is_some_and(|fields| fields.is_empty()) {
                return Err(invalid("search_fields must not be empty".to_string()));
            }
        }

        Ok(())
    }

    /// Combine several configurations; later entries win page by page
    pub fn merge(configs: impl IntoIterator<Item = ConsoleConfig>) -> ConsoleConfig {
        let mut merged = ConsoleConfig::default();
        for config in configs {
            if config.default_page_size.is_some() {
                merged.default_page_size = config.default_page_size;
            }
            merged.pages.extend(config.pages);
        }
        merged
    }

    /// Settings for a page, falling back to defaults
    pub fn page_config(&self, page: ConsolePage) -> PageConfig {
        self.pages.get(page.as_str()).cloned().unwrap_or_else(|| PageConfig {
            page_size: self.default_page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            ..PageConfig::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_page_uses_defaults() {
        let config = ConsoleConfig::default();
        let page = config.page_config(ConsolePage::Inventory);
        assert_eq!(page.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(page.search_fields, None);
        assert_eq!(page.default_sort, None);
    }

    #[test]
    fn test_parse_page_settings() {
        let config = ConsoleConfig::from_yaml_str(
            r#"
default_page_size: 25
pages:
  prescriptions:
    page_size: 20
    default_sort: date_issued:desc
  staff:
    access: admin_or_role:manager
"#,
        )
        .unwrap();

        let rx = config.page_config(ConsolePage::Prescriptions);
        assert_eq!(rx.page_size, 20);
        assert_eq!(rx.default_sort, Some(SortSpec::desc("date_issued")));

        let staff = config.page_config(ConsolePage::Staff);
        assert_eq!(staff.page_size, DEFAULT_PAGE_SIZE);
        assert!(staff.access.is_some());

        assert_eq!(config.page_config(ConsolePage::Patients).page_size, 25);
    }

    #[test]
    fn test_rejects_out_of_range_page_size() {
        let err = ConsoleConfig::from_yaml_str("pages:\n  inventory:\n    page_size: 0\n").unwrap_err();
        assert!(err.to_string().contains("inventory"));

        assert!(ConsoleConfig::from_yaml_str("default_page_size: 500\n").is_err());
    }

    #[test]
    fn test_rejects_unknown_page() {
        let err = ConsoleConfig::from_yaml_str("pages:\n  billing: {}\n").unwrap_err();
        assert!(err.to_string().contains("billing"));
    }

    #[test]
    fn test_merge_later_wins() {
        let base = ConsoleConfig::from_yaml_str(
            "default_page_size: 10\npages:\n  inventory:\n    page_size: 5\n  messages:\n    page_size: 15\n",
        )
        .unwrap();
        let local = ConsoleConfig::from_yaml_str("pages:\n  inventory:\n    page_size: 50\n").unwrap();

        let merged = ConsoleConfig::merge([base, local]);
        assert_eq!(merged.default_page_size, Some(10));
        assert_eq!(merged.page_config(ConsolePage::Inventory).page_size, 50);
        assert_eq!(merged.page_config(ConsolePage::Messages).page_size, 15);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = ConsoleConfig::from_yaml_str("pages:\n  vendors:\n    default_sort: name\n").unwrap();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(ConsoleConfig::from_yaml_str(&yaml).unwrap(), config);
    }
}
