//! Debug script to inspect the raw search response from a backend
//!
//! Usage: cargo run --example debug_search -- [base-url] [name]

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);
    let base_url = args
        .next()
        .unwrap_or_else(|| "http://127.0.0.1:5000".to_string());
    let name = args.next().unwrap_or_else(|| "Greta Gerwig".to_string());

    let url = creditsearch_core::url::build_search_url(&base_url)?;
    println!("Posting {{\"name\": {:?}}} to {}...\n", name, url);

    let response = reqwest::Client::new()
        .post(url)
        .json(&serde_json::json!({ "name": name }))
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;

    std::fs::write("debug_search.json", &body)?;
    println!("Status: {}", status);
    println!("Body saved to debug_search.json");

    match serde_json::from_str::<Vec<creditsearch_core::Credit>>(&body) {
        Ok(credits) => {
            println!("\n=== {} credits ===\n", credits.len());
            for card in creditsearch_core::build_cards(&credits) {
                println!("{}", card);
            }
        }
        Err(e) => println!("\nBody is not a credit list: {}", e),
    }

    Ok(())
}
