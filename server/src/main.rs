#[tokio::main]
async fn main() {
    cybershield_server::start_server().await;
}
