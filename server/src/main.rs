#[tokio::main]
async fn main() -> anyhow::Result<()> {
    food_kanban_server::start_server().await
}
