use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use whiteboard::chat::{ChatMessage, ChatPanel, MessageLog};
use whiteboard::{Config, DrawingSurface, script};

#[derive(Parser, Debug)]
#[command(name = "whiteboard")]
#[command(version, about = "Headless whiteboard: replay drawing gestures and export PNG")]
struct Cli {
    /// Replay a JSON gesture script against a blank board
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write the final board to this PNG file
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Use this config file instead of ~/.config/whiteboard/config.toml
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override the canvas width
    #[arg(long, value_name = "PIXELS")]
    width: Option<i32>,

    /// Override the canvas height
    #[arg(long, value_name = "PIXELS")]
    height: Option<i32>,

    /// Send a chat message and wait for the simulated reply
    #[arg(long, value_name = "TEXT")]
    chat: Option<String>,
}

/// Prints chat messages as they arrive.
struct StdoutMessageLog;

impl MessageLog for StdoutMessageLog {
    fn on_message(&self, message: &ChatMessage) {
        println!(
            "[{}] {}: {}",
            message.sent_at.format("%H:%M:%S"),
            message.author,
            message.body
        );
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(width) = cli.width {
        config.canvas.width = width;
    }
    if let Some(height) = cli.height {
        config.canvas.height = height;
    }
    config.validate_and_clamp();

    Ok(config)
}

fn run_script(config: &Config, script_path: &Path, output: Option<&Path>) -> Result<()> {
    let steps = script::load_script(script_path)?;
    let export_settings = config.export_settings();

    let mut surface =
        DrawingSurface::new(config.surface_settings()).context("Failed to create drawing surface")?;
    let mut written = script::replay(&mut surface, &steps, &export_settings)?;

    if let Some(output) = output {
        written.push(surface.export_png_to(output)?);
    } else if written.is_empty() {
        written.push(surface.export_png(&export_settings)?);
    }

    log::info!(
        "Replayed {} steps: {} shape(s), {} history entries",
        steps.len(),
        surface.shapes().len(),
        surface.history().len()
    );
    for path in written {
        println!("Exported {}", path.display());
    }
    Ok(())
}

async fn run_chat(config: &Config, text: &str) -> Result<()> {
    let panel = ChatPanel::new(config.chat_settings(), Arc::new(StdoutMessageLog));

    match panel.send(text).await {
        Some(reply) => reply.await.context("Chat reply task failed")?,
        None => log::warn!("Chat message is empty, nothing sent"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    if cli.script.is_none() && cli.chat.is_none() {
        // No actions: show usage
        println!("whiteboard: Headless whiteboard drawing surface");
        println!();
        println!("Usage:");
        println!("  whiteboard --script gestures.json [--output board.png]");
        println!("  whiteboard --chat \"hello\"");
        println!("  whiteboard --help");
        println!();
        println!("Config file: ~/.config/whiteboard/config.toml (or --config FILE)");
        return Ok(());
    }

    let config = load_config(&cli)?;

    if let Some(script_path) = &cli.script {
        run_script(&config, script_path, cli.output.as_deref())?;
    }

    if let Some(text) = &cli.chat {
        run_chat(&config, text).await?;
    }

    Ok(())
}
