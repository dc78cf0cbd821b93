pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "unfollow-planner")]
#[command(about = "Plan which accounts to unfollow from a list of usernames")]
pub struct CliConfig {
    /// Usernames you want to unfollow, one per line
    #[arg(long, default_value = "data/given_list.txt")]
    pub given: String,

    /// Accounts you currently follow; skipped if the file does not exist
    #[arg(long, default_value = "data/following.txt")]
    pub following: String,

    #[arg(long, help = "Do not cross-check against the following list")]
    pub no_following: bool,

    #[arg(long, default_value = "output")]
    pub output_dir: String,

    /// TOML configuration file; replaces the path options above
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, help = "Show the plan without writing any files")]
    pub dry_run: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn given_path(&self) -> &str {
        &self.given
    }

    fn following_path(&self) -> Option<&str> {
        if self.no_following {
            None
        } else {
            Some(&self.following)
        }
    }

    fn output_dir(&self) -> &str {
        &self.output_dir
    }

    fn dry_run(&self) -> bool {
        self.dry_run
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("given", &self.given)?;
        if !self.no_following {
            validate_path("following", &self.following)?;
        }
        validate_path("output_dir", &self.output_dir)?;
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        Ok(())
    }
}
