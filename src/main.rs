use anyhow::Result;
use yumbal::app::handler;

#[tokio::main]
async fn main() -> Result<()> {
    handler::init().await
}
