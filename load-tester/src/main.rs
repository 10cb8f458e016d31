use std::process::ExitCode;
use std::time::{Duration, Instant};

use futures_util::future::join_all;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

struct Sample {
    url: String,
    elapsed_ms: u128,
    outcome: Result<(u16, String), String>,
}

async fn fetch(client: &reqwest::Client, url: String) -> Sample {
    let start = Instant::now();
    let outcome = match client.get(&url).send().await {
        Ok(response) => {
            let status = response.status().as_u16();
            response
                .text()
                .await
                .map(|body| (status, body))
                .map_err(|err| err.to_string())
        }
        Err(err) => Err(err.to_string()),
    };
    Sample {
        url,
        elapsed_ms: start.elapsed().as_millis(),
        outcome,
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let urls: Vec<String> = std::env::args().skip(1).collect();
    if urls.is_empty() {
        eprintln!("usage: apiprobe-load-tester <url>...");
        return ExitCode::from(2);
    }

    let client = match reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build() {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Failed to build HTTP client: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let started = Instant::now();
    let samples = join_all(urls.into_iter().map(|url| fetch(&client, url))).await;

    let mut succeeded: usize = 0;
    let mut failed: usize = 0;
    for sample in &samples {
        match &sample.outcome {
            Ok((status, body)) => {
                succeeded = succeeded.saturating_add(1);
                println!("Response from {} [{}]: {}", sample.url, status, body.trim());
                println!("  Time: {} ms", sample.elapsed_ms);
            }
            Err(message) => {
                failed = failed.saturating_add(1);
                println!("Error fetching {}: {}", sample.url, message);
                println!("  Time: {} ms", sample.elapsed_ms);
            }
        }
    }

    println!("Total requests: {}", samples.len());
    println!("Succeeded: {}", succeeded);
    println!("Failed: {}", failed);
    println!("Total time: {} ms", started.elapsed().as_millis());
    ExitCode::SUCCESS
}
