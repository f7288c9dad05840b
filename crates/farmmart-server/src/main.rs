#[tokio::main]
async fn main() -> anyhow::Result<()> {
    farmmart_server::start_server().await
}
