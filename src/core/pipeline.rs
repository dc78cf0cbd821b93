use crate::core::reader::{decode_list, parse_usernames};
use crate::core::writer::{write_lines, write_table};
use crate::core::{planner, ConfigProvider, ExtractedLists, Pipeline, Plan, Storage, UsernameList};
use crate::utils::error::{PlannerError, Result};
use std::path::Path;

pub struct UnfollowPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> UnfollowPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    async fn read_list(&self, path: &str) -> Result<UsernameList> {
        let bytes = self.storage.read_file(path).await?;
        let text = decode_list(path, &bytes)?;
        let list = parse_usernames(text);
        tracing::debug!("Parsed {} username(s) from {}", list.len(), path);
        Ok(list)
    }

    async fn read_following(&self) -> Result<Option<UsernameList>> {
        let Some(path) = self.config.following_path() else {
            tracing::info!("Verification disabled, all given usernames will be included");
            return Ok(None);
        };

        if !self.storage.exists(path).await {
            tracing::warn!(
                "No following list found ({}). Skipping verification, all given usernames will be included.",
                path
            );
            return Ok(None);
        }

        let following = self.read_list(path).await?;
        tracing::info!("Following list loaded: {} account(s).", following.len());
        Ok(Some(following))
    }

    fn output_file(&self, name: &str) -> String {
        Path::new(self.config.output_dir())
            .join(name)
            .to_string_lossy()
            .into_owned()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for UnfollowPipeline<S, C> {
    async fn extract(&self) -> Result<ExtractedLists> {
        let given = self.config.given_path();
        if !self.storage.exists(given).await {
            return Err(PlannerError::MissingInput {
                path: given.to_string(),
            });
        }

        let wanted = self.read_list(given).await?;
        // An empty wanted list ends the run, so the following list is never opened.
        if wanted.is_empty() {
            return Ok(ExtractedLists {
                wanted,
                following: None,
            });
        }

        let following = self.read_following().await?;
        Ok(ExtractedLists { wanted, following })
    }

    async fn transform(&self, lists: ExtractedLists) -> Result<Plan> {
        let plan = planner::plan(&lists.wanted, lists.following.as_deref());
        tracing::debug!(
            "Planned {} to unfollow, {} not found",
            plan.to_unfollow.len(),
            plan.not_found.len()
        );
        Ok(plan)
    }

    async fn load(&self, plan: &Plan) -> Result<Vec<String>> {
        let mut written = Vec::new();

        let txt = self.output_file(self.config.to_unfollow_txt());
        write_lines(&self.storage, &txt, &plan.to_unfollow).await?;
        written.push(txt);

        let csv = self.output_file(self.config.to_unfollow_csv());
        write_table(&self.storage, &csv, &plan.to_unfollow).await?;
        written.push(csv);

        if plan.verified && !plan.not_found.is_empty() {
            let not_found = self.output_file(self.config.not_found_txt());
            write_lines(&self.storage, &not_found, &plan.not_found).await?;
            written.push(not_found);
        }

        Ok(written)
    }

    fn given_path(&self) -> &str {
        self.config.given_path()
    }

    fn dry_run(&self) -> bool {
        self.config.dry_run()
    }
}
