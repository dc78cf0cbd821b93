use crate::core::ConfigProvider;
use crate::domain::ports::{DEFAULT_NOT_FOUND_TXT, DEFAULT_TO_UNFOLLOW_CSV, DEFAULT_TO_UNFOLLOW_TXT};
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::{validate_distinct, validate_file_name, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    pub run: Option<RunConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    pub given: String,
    /// Leave out to skip verification against a following list.
    pub following: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_dir")]
    pub dir: String,
    pub to_unfollow_txt: Option<String>,
    pub to_unfollow_csv: Option<String>,
    pub not_found_txt: Option<String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: default_output_dir(),
            to_unfollow_txt: None,
            to_unfollow_csv: None,
            not_found_txt: None,
        }
    }
}

fn default_output_dir() -> String {
    "output".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RunConfig {
    pub dry_run: Option<bool>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| PlannerError::ConfigError {
            message: format!("cannot read {}: {}", path.as_ref().display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PlannerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unknown variables stay as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PlannerError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn set_dry_run(&mut self, dry_run: bool) {
        self.run.get_or_insert_with(RunConfig::default).dry_run = Some(dry_run);
    }
}

impl ConfigProvider for TomlConfig {
    fn given_path(&self) -> &str {
        &self.input.given
    }

    fn following_path(&self) -> Option<&str> {
        self.input.following.as_deref()
    }

    fn output_dir(&self) -> &str {
        &self.output.dir
    }

    fn to_unfollow_txt(&self) -> &str {
        self.output
            .to_unfollow_txt
            .as_deref()
            .unwrap_or(DEFAULT_TO_UNFOLLOW_TXT)
    }

    fn to_unfollow_csv(&self) -> &str {
        self.output
            .to_unfollow_csv
            .as_deref()
            .unwrap_or(DEFAULT_TO_UNFOLLOW_CSV)
    }

    fn not_found_txt(&self) -> &str {
        self.output
            .not_found_txt
            .as_deref()
            .unwrap_or(DEFAULT_NOT_FOUND_TXT)
    }

    fn dry_run(&self) -> bool {
        self.run
            .as_ref()
            .and_then(|r| r.dry_run)
            .unwrap_or(false)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input.given", &self.input.given)?;
        if let Some(following) = &self.input.following {
            validate_path("input.following", following)?;
        }
        validate_path("output.dir", &self.output.dir)?;

        validate_file_name("output.to_unfollow_txt", self.to_unfollow_txt())?;
        validate_file_name("output.to_unfollow_csv", self.to_unfollow_csv())?;
        validate_file_name("output.not_found_txt", self.not_found_txt())?;
        validate_distinct(
            "output",
            &[self.to_unfollow_txt(), self.to_unfollow_csv(), self.not_found_txt()],
        )
    }
}
