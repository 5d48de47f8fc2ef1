//! Print account information and statistics.
//!
//! Run with:
//! RMU_CLIENT_ID=... RMU_API_PASSWORD=... cargo run --example account_overview

use rmu_rs::{ApiVersion, ClientConfig, RmuClient};

#[tokio::main]
async fn main() -> rmu_rs::Result<()> {
    tracing_subscriber::fmt::init();

    let client_id = std::env::var("RMU_CLIENT_ID")
        .expect("RMU_CLIENT_ID environment variable required");
    let api_password = std::env::var("RMU_API_PASSWORD")
        .expect("RMU_API_PASSWORD environment variable required");
    let version = match std::env::var("RMU_API_VERSION").as_deref() {
        Ok("1") | Ok("v1") => ApiVersion::V1,
        _ => ApiVersion::V2,
    };

    println!("Connecting to RMU {version}...");

    // V1 fails here if the credentials are rejected; V2 records it.
    let client =
        RmuClient::connect_with_config(client_id, api_password, ClientConfig::for_version(version))
            .await?;
    if client.is_failed() {
        eprintln!("RMU rejected the credentials");
        return Ok(());
    }

    let info = client.get_api_info().await?;
    println!("API info:\n{info:#}");

    let stats = client.get_statistics().await?;
    println!("Statistics:\n{stats:#}");

    println!("Downloads: {}", RmuClient::get_rmu_link("account/downloads"));
    Ok(())
}
