use clap::{Parser, Subcommand};
use reqwest::header::CONTENT_TYPE;
use reqwest::Method;
use serde_json::Value;

use funky_router::Flavor;

#[derive(Parser)]
#[command(name = "probe")]
#[command(about = "Send arbitrary-method requests to the demo servers", long_about = None)]
struct Cli {
    /// Base URL. Defaults to localhost on the flavor's usual port.
    #[arg(short, long)]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send one request and print the response
    Send {
        /// Method token, sent exactly as written (e.g. FUNKYTOWN)
        method: String,
        /// Request path (e.g. /api/v1/funkytown)
        path: String,
        /// Request body
        #[arg(short, long)]
        data: Option<String>,
    },
    /// Hit every catalog endpoint of a flavor and report the statuses
    Sweep {
        #[arg(value_enum)]
        flavor: Flavor,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Send { method, path, data } => {
            let base = cli
                .url
                .unwrap_or_else(|| format!("http://localhost:{}", Flavor::NetHttp.default_port()));
            let method = Method::from_bytes(method.as_bytes())?;
            let mut request = client.request(method, format!("{base}{path}"));
            if let Some(data) = data {
                request = request.header(CONTENT_TYPE, "application/json").body(data);
            }
            print_response(request.send().await?).await?;
        }
        Commands::Sweep { flavor } => {
            let base = cli
                .url
                .unwrap_or_else(|| format!("http://localhost:{}", flavor.default_port()));
            let table = flavor
                .route_table()
                .map_err(|errors| format!("{flavor} catalog is invalid: {errors:?}"))?;

            for route in table.routes() {
                let methods: Vec<String> = if route.methods().is_any() {
                    vec!["GET".into(), "FUNKYTOWN".into()]
                } else {
                    route.methods().methods().iter().map(ToString::to_string).collect()
                };

                for method in methods {
                    let res = client
                        .request(Method::from_bytes(method.as_bytes())?, format!("{base}{}", route.path()))
                        .header(CONTENT_TYPE, "application/json")
                        .body(r#"{"probe":true}"#)
                        .send()
                        .await?;
                    println!("{:<10} {:<32} {}", method, route.path(), res.status());
                }
            }
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    println!("Status: {}", status);
    if let Some(content_type) = res.headers().get(CONTENT_TYPE) {
        println!("Content-Type: {}", content_type.to_str().unwrap_or("<binary>"));
    }

    let text = res.text().await?;
    if text.is_empty() {
        return Ok(());
    }
    match serde_json::from_str::<Value>(&text) {
        Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
        Err(_) => println!("{}", text),
    }
    Ok(())
}
