// src/main.rs
use std::process::ExitCode;

use dotenvy::dotenv;
use inventory_tracker::view::{self, Command};
use inventory_tracker::{ClientConfig, HttpProductService, ProductViewModel};
use tokio::io::{stdin, AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Initialize logging; stdout belongs to the rendered view
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("inventory_tracker=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    // Load environment variables
    dotenv().ok();

    let config = match ClientConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(base_url = %config.base_url, "Using product service");

    let service = HttpProductService::new(&config);
    let mut vm = ProductViewModel::mount(service, &config).await;
    print!("{}", view::render(&vm.snapshot()));

    let mut lines = BufReader::new(stdin()).lines();
    loop {
        let Some(line) = prompt(&mut lines, "> ").await else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match view::parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{e}\n{}", view::HELP);
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => println!("{}", view::HELP),
            Command::List => print!("{}", view::render(&vm.snapshot())),
            Command::Refresh => {
                vm.load().await;
                print!("{}", view::render(&vm.snapshot()));
            }
            Command::Set(field) => {
                view::apply_field(vm.draft_mut(), field);
                print!("{}", view::render_draft(vm.draft()));
            }
            Command::ShowDraft => print!("{}", view::render_draft(vm.draft())),
            Command::Submit => {
                vm.submit().await;
                print!("{}", view::render(&vm.snapshot()));
            }
            Command::Remove(id) => {
                let lines = &mut lines;
                vm.remove(id, |label| async move {
                    let answer = prompt(lines, &format!("Delete \"{label}\"? [y/N] ")).await;
                    matches!(
                        answer.map(|a| a.trim().to_ascii_lowercase()).as_deref(),
                        Some("y" | "yes")
                    )
                })
                .await;
                print!("{}", view::render(&vm.snapshot()));
            }
            Command::Dismiss => {
                vm.dismiss_error();
                print!("{}", view::render(&vm.snapshot()));
            }
            Command::Stats => match vm.fetch_stats().await {
                Some(stats) => print!("{}", view::render_stats(&stats, &vm.derive_totals())),
                None => print!("{}", view::render(&vm.snapshot())),
            },
            Command::Health => match vm.check_health().await {
                Some(health) => print!("{}", view::render_health(&health)),
                None => print!("{}", view::render(&vm.snapshot())),
            },
        }
    }

    ExitCode::SUCCESS
}

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, text: &str) -> Option<String> {
    use std::io::Write;

    print!("{text}");
    let _ = std::io::stdout().flush();
    match lines.next_line().await {
        Ok(line) => line,
        Err(e) => {
            tracing::error!(error = %e, "Failed to read input");
            None
        }
    }
}
