use crate::domain::model::{ExtractedLists, Plan};
use crate::utils::error::Result;
use async_trait::async_trait;

pub const DEFAULT_TO_UNFOLLOW_TXT: &str = "to_unfollow.txt";
pub const DEFAULT_TO_UNFOLLOW_CSV: &str = "to_unfollow.csv";
pub const DEFAULT_NOT_FOUND_TXT: &str = "not_found.txt";

pub trait Storage: Send + Sync {
    fn exists(&self, path: &str) -> impl std::future::Future<Output = bool> + Send;
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    /// Replaces whatever is stored at `path`, creating parent directories.
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn given_path(&self) -> &str;
    fn following_path(&self) -> Option<&str>;
    fn output_dir(&self) -> &str;

    fn to_unfollow_txt(&self) -> &str {
        DEFAULT_TO_UNFOLLOW_TXT
    }

    fn to_unfollow_csv(&self) -> &str {
        DEFAULT_TO_UNFOLLOW_CSV
    }

    fn not_found_txt(&self) -> &str {
        DEFAULT_NOT_FOUND_TXT
    }

    fn dry_run(&self) -> bool {
        false
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<ExtractedLists>;
    async fn transform(&self, lists: ExtractedLists) -> Result<Plan>;
    /// Writes the plan's artifacts and returns the paths written.
    async fn load(&self, plan: &Plan) -> Result<Vec<String>>;
    /// Where the wanted list is read from, for reporting.
    fn given_path(&self) -> &str;
    fn dry_run(&self) -> bool;
}
