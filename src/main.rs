use clap::Parser;
use colored::*;
use std::io::{self, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

use cosmos_sky::cli::{self, Args, Command};
use cosmos_sky::client::{ClientError, CosmosClient, IssStatus};
use cosmos_sky::cooldown::CooldownGate;
use cosmos_sky::toast::{toast, ToastKind};
use cosmos_sky::{events, validate, view};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let base_url = cli::resolve_base_url(args.base_url.as_deref());
    let client = CosmosClient::new(base_url);
    let mut gate = CooldownGate::new();
    let html = args.html.as_deref();

    let ok = match args.command {
        Command::Iss { city } => run_iss(&client, &mut gate, &city, html).await,
        Command::Analyze { image } => run_analyze(&client, &mut gate, &image, html).await,
        Command::Chat { message: Some(msg) } => {
            run_chat_once(&client, &mut gate, &msg, html).await
        }
        Command::Chat { message: None } => run_chat_loop(&client, &mut gate, html).await,
        Command::DarkSky { city } => run_dark_sky(&client, &mut gate, &city, html).await,
        Command::Events => run_events(html),
    };

    if !ok {
        std::process::exit(1);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

async fn run_iss(
    client: &CosmosClient,
    gate: &mut CooldownGate,
    city: &str,
    html: Option<&Path>,
) -> bool {
    let city = city.trim();
    if city.is_empty() {
        toast(ToastKind::Warning, "Please enter a city name");
        return false;
    }
    if !pass_gate(gate) {
        return false;
    }

    eprintln!("{}", "  Tracking ISS position...".dimmed());
    match client.iss_status(city).await {
        Ok(status) => {
            print_iss(&status);
            toast(ToastKind::Success, "ISS location updated!");
            write_report(html, "ISS Tracker", &view::iss_result(&status));
            true
        }
        Err(err) => failure(&err, html, "ISS Tracker"),
    }
}

async fn run_analyze(
    client: &CosmosClient,
    gate: &mut CooldownGate,
    image: &Path,
    html: Option<&Path>,
) -> bool {
    // Pre-flight checks run before the gate ever ticks or a byte is sent
    let img = match validate::inspect(image) {
        Ok(img) => img,
        Err(err) => {
            toast(ToastKind::Warning, &err.to_string());
            return false;
        }
    };
    if !pass_gate(gate) {
        return false;
    }

    toast(
        ToastKind::Info,
        &format!("{} ({:.2} MB) - Ready for analysis", img.file_name(), img.size_mb()),
    );
    eprintln!("{}", "  AI is analyzing your sky image...".dimmed());

    match client.analyze_image(&img).await {
        Ok(content) => {
            println!("{content}");
            toast(ToastKind::Success, "Analysis complete!");
            write_report(html, "Sky Analysis", &view::markdown_section(&content));
            true
        }
        Err(err) => failure(&err, html, "Sky Analysis"),
    }
}

async fn run_chat_once(
    client: &CosmosClient,
    gate: &mut CooldownGate,
    message: &str,
    html: Option<&Path>,
) -> bool {
    if !pass_gate(gate) {
        return false;
    }
    let message = message.trim();
    if message.is_empty() {
        return true;
    }

    eprintln!("{}", "  CosmosAI is thinking...".dimmed());
    match client.chat(message).await {
        Ok(reply) => {
            println!("{reply}");
            write_report(html, "Astronomy Chat", &view::chat_exchange(message, &reply));
            true
        }
        Err(err) => failure(&err, html, "Astronomy Chat"),
    }
}

async fn run_chat_loop(
    client: &CosmosClient,
    gate: &mut CooldownGate,
    html: Option<&Path>,
) -> bool {
    eprintln!(
        "{}",
        "  Astronomy chat. Type a question; 'exit' or 'quit' to leave.".bright_blue()
    );

    let mut transcript = String::new();
    let stdin = io::stdin();
    loop {
        eprint!("{}", "you> ".bright_cyan());
        let _ = io::stderr().flush();

        let mut line = String::new();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let msg = line.trim();
        if msg.is_empty() {
            continue;
        }
        if msg.eq_ignore_ascii_case("exit") || msg.eq_ignore_ascii_case("quit") {
            break;
        }
        if !pass_gate(gate) {
            continue;
        }

        eprintln!("{}", "  CosmosAI is thinking...".dimmed());
        match client.chat(msg).await {
            Ok(reply) => {
                println!("{} {}", "cosmos>".bright_blue(), reply);
                transcript.push_str(&view::chat_exchange(msg, &reply));
                transcript.push('\n');
            }
            Err(err) => {
                // A failed turn is shown and the session continues
                let _ = failure(&err, None, "");
            }
        }
    }

    if !transcript.is_empty() {
        write_report(html, "Astronomy Chat", &transcript);
    }
    true
}

async fn run_dark_sky(
    client: &CosmosClient,
    gate: &mut CooldownGate,
    city: &str,
    html: Option<&Path>,
) -> bool {
    let city = city.trim();
    if city.is_empty() {
        toast(ToastKind::Warning, "Please enter a city name");
        return false;
    }
    if !pass_gate(gate) {
        return false;
    }

    eprintln!(
        "{}",
        format!("  Finding stargazing locations near {city}...").dimmed()
    );
    match client.dark_sky(city).await {
        Ok(suggestion) => {
            println!("{suggestion}");
            toast(ToastKind::Success, "Locations found!");
            write_report(html, "Dark Sky Finder", &view::markdown_section(&suggestion));
            true
        }
        Err(err) => failure(&err, html, "Dark Sky Finder"),
    }
}

fn run_events(html: Option<&Path>) -> bool {
    for ev in events::EVENTS_2026 {
        println!(
            "  {}  {}\n      {}",
            ev.date.yellow(),
            ev.name.bright_white().bold(),
            ev.desc.dimmed()
        );
    }
    write_report(html, "2026 Astronomy Calendar", &view::events_table(events::EVENTS_2026));
    true
}

// ---------------------------------------------------------------------------
// Shared plumbing
// ---------------------------------------------------------------------------

/// Check the cooldown gate, toasting the remaining wait on rejection.
fn pass_gate(gate: &mut CooldownGate) -> bool {
    match gate.check() {
        Ok(()) => true,
        Err(remaining) => {
            toast(
                ToastKind::Warning,
                &format!("Please wait {remaining} second(s)..."),
            );
            false
        }
    }
}

fn print_iss(status: &IssStatus) {
    let headline = if status.visible {
        status.status_text.bright_green().bold()
    } else {
        status.status_text.bright_yellow().bold()
    };
    println!("\n  {headline}");
    println!("  Distance:     {:.1} km", status.distance_km);
    println!(
        "  ISS position: {:.2}°, {:.2}°",
        status.iss_coords.latitude, status.iss_coords.longitude
    );
    println!(
        "  {}",
        "ISS is visible when within ~1500km, in darkness, and weather permits".dimmed()
    );
}

/// Report a failed backend call: inline message plus a toast, and an error
/// page if an HTML report was requested. Always returns false.
fn failure(err: &ClientError, html: Option<&Path>, title: &str) -> bool {
    let inline = match err {
        ClientError::Validation(msg) | ClientError::Api(msg) => msg.clone(),
        ClientError::Transport(e) => {
            tracing::warn!(error = %e, "transport failure");
            "Connection error. Please try again.".to_string()
        }
    };
    eprintln!("  {}", inline.bright_red());
    let kind = match err {
        ClientError::Validation(_) => ToastKind::Warning,
        _ => ToastKind::Error,
    };
    toast(kind, "Request failed");
    write_report(html, title, &view::error_block(&inline));
    false
}

/// Write a standalone HTML report when `--html` was given.
fn write_report(html: Option<&Path>, title: &str, body: &str) {
    let Some(path) = html else { return };
    match std::fs::write(path, view::page(title, body)) {
        Ok(()) => toast(
            ToastKind::Info,
            &format!("Report written to {}", path.display()),
        ),
        Err(e) => toast(
            ToastKind::Error,
            &format!("Could not write {}: {e}", path.display()),
        ),
    }
}
