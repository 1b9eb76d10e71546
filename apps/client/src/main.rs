#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    flashcards_client::run().await
}
