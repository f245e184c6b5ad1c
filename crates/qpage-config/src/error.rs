use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum ConfigError {
    #[error("TOML serialization error: {0}")]
    #[diagnostic(
        code(qpage_config::toml_serialize),
        help("Check your configuration structure for invalid values")
    )]
    TomlSerError(#[from] toml::ser::Error),

    #[error("TOML deserialization error: {0}")]
    #[diagnostic(
        code(qpage_config::toml_deserialize),
        help("Check your config.toml syntax and structure")
    )]
    TomlDeError(#[from] toml::de::Error),

    #[error("Configuration file already exists")]
    #[diagnostic(
        code(qpage_config::already_exists),
        help("Remove the existing config file or use a different location")
    )]
    ConfigAlreadyExists,

    #[error("`{0}` must be greater than zero")]
    #[diagnostic(
        code(qpage_config::zero_value),
        help("Pages are numbered from 1 and must hold at least one record")
    )]
    ZeroValue(&'static str),

    #[error("Invalid field pattern `{pattern}`: {reason}")]
    #[diagnostic(
        code(qpage_config::invalid_field_pattern),
        help("`field_pattern` must be a valid regular expression")
    )]
    InvalidFieldPattern { pattern: String, reason: String },

    #[error("Invalid loop variable: {0}")]
    #[diagnostic(
        code(qpage_config::invalid_variable),
        help("Use a plain identifier such as `doc`")
    )]
    InvalidVariable(String),

    #[error("IO error: {0}")]
    #[diagnostic(code(qpage_config::io))]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    #[diagnostic(code(qpage_config::toml))]
    Toml(#[from] toml_edit::TomlError),

    #[error("Encountered unexpected TOML item: {0}")]
    #[diagnostic(code(qpage_config::unexpected_toml_item))]
    UnexpectedTomlItem(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
