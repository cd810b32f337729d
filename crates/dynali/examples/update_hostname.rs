//! Point a Dynali hostname at this machine's public IP and print its status.
//!
//! Run with: cargo run -p dynali --example update_hostname -- <hostname> <username> <password>

use dynali::{DynaliClient, Result, AUTODETECT_IP};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [hostname, username, password] = args.as_slice() else {
        eprintln!("usage: update_hostname <hostname> <username> <password>");
        std::process::exit(2);
    };

    let client = DynaliClient::new()?;

    println!("=== My IP ===");
    println!("Your IP: {}", client.my_ip().await?);
    println!();

    println!("=== Update ===");
    client.update(hostname, username, password, AUTODETECT_IP).await?;
    println!("{hostname} updated");
    println!();

    println!("=== Status ===");
    let status = client.status(hostname, username, password).await?;
    println!("Hostname: {}", status.hostname());
    println!("IP: {}", status.ip());
    println!("State: {} ({})", status.state(), status.status_message());
    println!("Created: {}", status.creation_date());
    println!("Last update: {}", status.last_update_date());
    println!("Expires: {}", status.expiry_date());
    println!("Checked at: {}", status.status_check_date());

    Ok(())
}
