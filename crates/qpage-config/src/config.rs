use std::{env, fs, path::PathBuf};

use documented::{Documented, DocumentedFields};
use qpage_aql::is_identifier;
use qpage_core::{
    AllOf, AllowList, FieldPattern, PageDefaults, Paginator, StrictDirections, DEFAULT_PAGE,
    DEFAULT_PAGE_SIZE,
};
use serde::{Deserialize, Serialize};
use toml_edit::DocumentMut;
use tracing::{debug, info};

use crate::{
    annotations::annotate_toml_table,
    error::{ConfigError, Result},
    utils::xdg_config_home,
};

/// Pagination settings
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, Documented, DocumentedFields)]
pub struct Config {
    /// Loop variable that sort fields are qualified with.
    /// Default: doc
    pub variable: Option<String>,

    /// Page number used when a request does not name one.
    /// Default: 1
    pub default_page: Option<u64>,

    /// Page size used when a request names neither `limit` nor `per_page`.
    /// Default: 30
    pub default_page_size: Option<u64>,

    /// Upper bound for the page size. Larger requests are clamped.
    /// Default: unlimited
    pub max_page_size: Option<u64>,

    /// Fields that may be sorted on. When unset, any field is accepted.
    pub sort_fields: Option<Vec<String>>,

    /// Reject sort directions other than `asc` and `desc`.
    /// Default: false
    pub strict_directions: Option<bool>,

    /// Regular expression every sort field must match.
    pub field_pattern: Option<String>,
}

/// Location of the configuration file.
///
/// `QPAGE_CONFIG` wins over `$XDG_CONFIG_HOME/qpage/config.toml`.
pub fn config_path() -> PathBuf {
    match env::var("QPAGE_CONFIG") {
        Ok(path) => PathBuf::from(path),
        Err(_) => xdg_config_home().join("qpage").join("config.toml"),
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}

impl Config {
    pub fn default_config() -> Self {
        Self {
            variable: Some("doc".to_string()),
            default_page: Some(DEFAULT_PAGE),
            default_page_size: Some(DEFAULT_PAGE_SIZE),
            max_page_size: None,
            sort_fields: None,
            strict_directions: Some(false),
            field_pattern: None,
        }
    }

    /// Loads the configuration from [`config_path`].
    pub fn new() -> Result<Self> {
        Self::load(config_path())
    }

    /// Loads the configuration from `path`.
    /// If the file does not exist, the default configuration is used.
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let mut config = match fs::read_to_string(&path) {
            Ok(content) => {
                debug!("loading configuration from {}", path.display());
                toml::from_str(&content)?
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!("{} not found, using defaults", path.display());
                Self::default_config()
            }
            Err(err) => return Err(ConfigError::IoError(err)),
        };

        config.resolve()?;

        Ok(config)
    }

    /// Fills unset values with defaults and checks the rest.
    pub fn resolve(&mut self) -> Result<()> {
        let variable = self.variable.get_or_insert_with(|| "doc".to_string());
        if !is_identifier(variable) {
            return Err(ConfigError::InvalidVariable(variable.clone()));
        }

        if *self.default_page.get_or_insert(DEFAULT_PAGE) == 0 {
            return Err(ConfigError::ZeroValue("default_page"));
        }
        if *self.default_page_size.get_or_insert(DEFAULT_PAGE_SIZE) == 0 {
            return Err(ConfigError::ZeroValue("default_page_size"));
        }
        if self.max_page_size == Some(0) {
            return Err(ConfigError::ZeroValue("max_page_size"));
        }
        self.strict_directions.get_or_insert(false);

        if let Some(ref pattern) = self.field_pattern {
            FieldPattern::new(pattern).map_err(|err| ConfigError::InvalidFieldPattern {
                pattern: pattern.clone(),
                reason: err.to_string(),
            })?;
        }

        Ok(())
    }

    pub fn variable(&self) -> &str {
        self.variable.as_deref().unwrap_or("doc")
    }

    pub fn page_defaults(&self) -> PageDefaults {
        PageDefaults {
            page: self.default_page.unwrap_or(DEFAULT_PAGE),
            page_size: self.default_page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }

    /// Builds a [`Paginator`] enforcing this configuration.
    pub fn paginator(&self) -> Result<Paginator> {
        let mut paginator = Paginator::new().with_defaults(self.page_defaults());
        if let Some(max) = self.max_page_size {
            paginator = paginator.with_max_page_size(max);
        }

        let strict = self.strict_directions.unwrap_or(false);
        let mut validators = AllOf::new();

        if let Some(ref fields) = self.sort_fields {
            validators = validators.with(AllowList::new(fields.clone()).strict_directions(strict));
        } else if strict {
            validators = validators.with(StrictDirections);
        }

        if let Some(ref pattern) = self.field_pattern {
            let pattern =
                FieldPattern::new(pattern).map_err(|err| ConfigError::InvalidFieldPattern {
                    pattern: pattern.clone(),
                    reason: err.to_string(),
                })?;
            validators = validators.with(pattern);
        }

        if !validators.is_empty() {
            paginator = paginator.with_validator(validators);
        }

        Ok(paginator)
    }

    pub fn save(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let serialized = toml::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, serialized)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }

    pub fn to_annotated_document(&self) -> Result<DocumentMut> {
        let toml_string = toml::to_string_pretty(self)?;
        let mut doc = toml_string.parse::<DocumentMut>()?;

        annotate_toml_table::<Config>(doc.as_table_mut(), true)?;

        Ok(doc)
    }
}

/// Writes the annotated default configuration to `path`.
pub fn generate_default_config(path: impl Into<PathBuf>) -> Result<()> {
    let path = path.into();

    if path.exists() {
        return Err(ConfigError::ConfigAlreadyExists);
    }

    let annotated_doc = Config::default_config().to_annotated_document()?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&path, annotated_doc.to_string())?;
    info!(
        "Default configuration file generated with documentation at: {}",
        path.display()
    );
    Ok(())
}
