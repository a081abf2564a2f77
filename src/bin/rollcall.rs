use anyhow::Result;
use rollcall::cli;

// Main function
#[tokio::main]
async fn main() -> Result<()> {
    let (config, action) = cli::start()?;

    action.execute(&config).await?;

    Ok(())
}
