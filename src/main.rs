// Simulates one recording session from the command line.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let seconds = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 3,
    };
    studio_recorder_lib::run(seconds).await
}
