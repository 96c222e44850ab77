use anyhow::Result;

use rs_pest_client::client::PestApiClient;
use rs_pest_client::config::Config;
use rs_pest_client::endpoint::{OUTBREAK_PATH, WEEK_PATH};
use rs_pest_client::models::{OutbreakFeatures, WeekQuery};

async fn probe_raw(client: &reqwest::Client, url: &str, body: serde_json::Value) -> Result<()> {
    println!("📡 POST {}", url);
    println!("Request body: {}", body);

    let response = client.post(url).json(&body).send().await?;

    let status = response.status();
    println!("Response Status: {}", status);

    let text = response.text().await?;
    println!("\n📄 Raw Response Content:");
    println!("{}", "─".repeat(60));
    println!("{}", text);
    println!("{}", "─".repeat(60));

    if !status.is_success() {
        println!("❌ Backend answered with an error status");
    } else {
        println!("✅ Response received ({} bytes)", text.len());
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    println!("🚀 Pest Prediction Backend Probe");
    println!("{}", "=".repeat(50));

    let config = Config::global();
    println!(
        "Target: {}",
        if config.api_url.is_empty() {
            "<unset, using local dev proxy>"
        } else {
            config.api_url.as_str()
        }
    );
    println!("Set PESTWATCH_API_URL to probe a deployed backend\n");

    let raw = reqwest::Client::new();

    println!("🔧 Probe 1: raw week prediction");
    let week_url = config.endpoint(WEEK_PATH);
    if let Err(error) = probe_raw(&raw, &week_url, serde_json::json!({ "week": "25" })).await {
        println!("❌ Probe failed: {}", error);
        println!("💡 Hint: is the backend running? A free-tier deployment can");
        println!("   need up to 2 minutes to cold start on the first request");
    }

    println!("\n{}", "─".repeat(40));
    println!("🔧 Probe 2: raw outbreak prediction");
    let outbreak_url = config.endpoint(OUTBREAK_PATH);
    let sample = serde_json::json!({
        "feature1": "Light trap",
        "feature2": "34",
        "feature3": "21",
        "feature4": "78",
        "feature5": "Godavari",
    });
    if let Err(error) = probe_raw(&raw, &outbreak_url, sample).await {
        println!("❌ Probe failed: {}", error);
    }

    println!("\n{}", "─".repeat(40));
    println!("🔧 Probe 3: typed client, week prediction");
    let client = PestApiClient::new(config.clone())?;
    match client.predict_week(&WeekQuery::new("25")).await {
        Ok(text) => println!("✅ Surfaced text: {}", text),
        Err(error) => println!("❌ Typed call failed: {}", error),
    }

    println!("\n{}", "─".repeat(40));
    println!("🔧 Probe 4: typed client, outbreak prediction");
    let features = OutbreakFeatures {
        feature1: "Light trap".to_string(),
        feature2: "34".to_string(),
        feature3: "21".to_string(),
        feature4: "78".to_string(),
        feature5: "Godavari".to_string(),
    };
    match client.predict_outbreak(&features).await {
        Ok(text) => println!("✅ Surfaced text: {}", text),
        Err(error) => println!("❌ Typed call failed: {}", error),
    }

    println!("\n{}", "=".repeat(50));
    println!("🏁 Probe completed!");

    Ok(())
}
