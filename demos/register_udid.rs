//! Register a device with RMU.
//!
//! This example validates input locally, registers the UDID and then
//! looks up its status by transaction ID.
//!
//! Run with:
//! RMU_CLIENT_ID=... RMU_API_PASSWORD=... \
//!     cargo run --example register_udid -- user@example.com <udid> REG order-1001

use rmu_rs::api::StatusQuery;
use rmu_rs::models::RegistrationFailure;
use rmu_rs::RmuClient;

#[tokio::main]
async fn main() -> rmu_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let client_id = std::env::var("RMU_CLIENT_ID")
        .expect("RMU_CLIENT_ID environment variable required");
    let api_password = std::env::var("RMU_API_PASSWORD")
        .expect("RMU_API_PASSWORD environment variable required");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let [email, udid, kind, transaction_id] = args.as_slice() else {
        eprintln!("usage: register_udid <email> <udid> <CERT|REG> <transaction-id>");
        std::process::exit(2);
    };

    if !RmuClient::validate_udid(udid) {
        eprintln!("{udid} is not a valid UDID");
        std::process::exit(1);
    }

    let client = RmuClient::connect(client_id, api_password).await?;
    if client.is_failed() {
        eprintln!("RMU rejected the credentials");
        std::process::exit(1);
    }

    match client.register_udid(email, udid, kind, transaction_id).await {
        Ok(result) => println!("Registered: {result}"),
        Err(err) => {
            let failure = RegistrationFailure::from(&err);
            println!("{}", serde_json::to_string_pretty(&failure)?);
            return Ok(());
        }
    }

    let status = client
        .get_status(&StatusQuery::new().transaction_id(transaction_id.as_str()))
        .await?;
    println!("Status: {status:#}");

    Ok(())
}
