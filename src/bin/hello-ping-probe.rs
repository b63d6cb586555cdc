use std::process::ExitCode;

use clap::{Parser, Subcommand};
use hello_ping::{HELLO_BODY, PING_BODY};

#[derive(Parser)]
#[command(name = "hello-ping-probe")]
#[command(about = "Probe a running hello-ping instance", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://127.0.0.1:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// GET / and print the response
    Hello,
    /// GET /ping and print the response
    Ping,
    /// GET both routes and verify their bodies
    Check,
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::Hello => {
            let res = client.get(format!("{}/", base)).send().await?;
            print_response(res).await?;
        }
        Commands::Ping => {
            let res = client.get(format!("{}/ping", base)).send().await?;
            print_response(res).await?;
        }
        Commands::Check => {
            let mut healthy = true;
            for (path, expected) in [("/", HELLO_BODY), ("/ping", PING_BODY)] {
                let res = client.get(format!("{}{}", base, path)).send().await?;
                let status = res.status();
                let body = res.text().await?;

                if status.is_success() && body == expected {
                    println!("ok    GET {} -> {} {:?}", path, status, body);
                } else {
                    println!("FAIL  GET {} -> {} {:?} (expected {:?})", path, status, body, expected);
                    healthy = false;
                }
            }
            if !healthy {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    let body = res.text().await?;
    if !status.is_success() {
        eprintln!("Error: server returned status {}", status);
        eprintln!("Response: {}", body);
        return Ok(());
    }

    println!("{}", body);
    Ok(())
}
