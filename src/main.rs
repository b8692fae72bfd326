#[tokio::main]
async fn main() {
    taste_tribe_be::start_server().await;
}
