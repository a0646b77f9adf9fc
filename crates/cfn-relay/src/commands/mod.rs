use async_trait::async_trait;
use eyre::Result;

pub mod lambda;
pub mod replay;

// The Lambda runtime future is not `Send`, so neither are commands.
#[async_trait(?Send)]
pub trait Command {
    async fn execute(&self) -> Result<()>;
}
