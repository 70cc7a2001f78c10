use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    smartlife::cli::run().await
}
