use crate::core::{Pipeline, RunReport};
use crate::utils::error::Result;

pub struct PlannerEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PlannerEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in order. An empty wanted list ends
    /// the run before planning; a dry run ends it before anything is written.
    pub async fn run(&self) -> Result<RunReport> {
        tracing::info!("Reading username lists...");
        let lists = self.pipeline.extract().await?;
        tracing::info!("Read {} username(s) from the given list", lists.wanted.len());

        if lists.wanted.is_empty() {
            tracing::info!("No usernames found, nothing to do");
            return Ok(RunReport::NothingToDo {
                given_path: self.pipeline.given_path().to_string(),
            });
        }

        let following_count = lists.following.as_ref().map(Vec::len);

        tracing::info!("Planning...");
        let plan = self.pipeline.transform(lists).await?;

        if self.pipeline.dry_run() {
            tracing::info!("Dry run, no files written");
            return Ok(RunReport::DryRun {
                plan,
                following_count,
            });
        }

        tracing::info!("Writing output files...");
        let written = self.pipeline.load(&plan).await?;
        for path in &written {
            tracing::info!("Wrote {}", path);
        }

        Ok(RunReport::Completed {
            plan,
            following_count,
            written,
        })
    }
}
