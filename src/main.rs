use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use color_eyre::Result;
use cpuview::app::App;
use cpuview::config::{self, load_config, load_config_from_path};
use cpuview::event::{Event, EventHandler};
use cpuview::format::{format_ghz, format_gib, format_uptime};
use cpuview::system::collector::Collector;
use cpuview::ui;

#[derive(Parser)]
#[command(
    name = "cpuview",
    about = "TUI system information panel: CPU, memory, and host identity"
)]
struct Cli {
    /// Path to config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Refresh rate in milliseconds
    #[arg(long)]
    refresh_rate: Option<u64>,

    /// Theme: dark, light, mono
    #[arg(long)]
    theme: Option<String>,

    /// Print a one-shot snapshot to stdout and exit.
    #[arg(long, default_value_t = false)]
    dump: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let config = load_config_for_cli(&cli);

    if cli.dump {
        return run_dump();
    }

    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let result = run(&mut terminal, config).await;

    ratatui::restore();

    result
}

async fn run(terminal: &mut ratatui::DefaultTerminal, config: config::Config) -> Result<()> {
    let tick_rate = Duration::from_millis(config.general.refresh_rate_ms.max(100));
    let mut app = App::new(config);
    let mut events = EventHandler::new(tick_rate);

    terminal.draw(|frame| ui::draw(frame, &app))?;

    while app.running {
        if let Some(event) = events.next().await {
            match event {
                Event::Key(key) => {
                    if key.kind == crossterm::event::KeyEventKind::Press {
                        let action = app.map_key(key);
                        app.dispatch(action);
                    }
                }
                Event::Tick => app.refresh_data(),
                Event::Resize => {}
            }
            terminal.draw(|frame| ui::draw(frame, &app))?;
        }
    }

    Ok(())
}

fn load_config_for_cli(cli: &Cli) -> config::Config {
    let mut config = match &cli.config {
        Some(path) => load_config_from_path(path),
        None => load_config(),
    };

    if let Some(rate) = cli.refresh_rate {
        config.general.refresh_rate_ms = rate;
    }
    if let Some(ref theme) = cli.theme {
        config.general.theme = theme.clone();
    }

    config
}

fn run_dump() -> Result<()> {
    let collector = Collector::new();
    let snapshot = collector.snapshot();

    println!(
        "CPU:       {}",
        snapshot.cpu_model.as_deref().unwrap_or("Unknown")
    );
    println!(
        "Topology:  {} cores, {} threads",
        snapshot.cpu_cores, snapshot.cpu_threads
    );
    println!("Frequency: {}", format_ghz(snapshot.cpu_frequency_ghz));
    println!(
        "Memory:    {} used / {} total ({} free)",
        format_gib(snapshot.memory_used_gib),
        format_gib(snapshot.memory_total_gib),
        format_gib(snapshot.memory_free_gib)
    );
    println!(
        "Host:      {}",
        snapshot.hostname.as_deref().unwrap_or("-")
    );
    println!("Kernel:    {}", snapshot.kernel.as_deref().unwrap_or("-"));
    println!("OS:        {}", snapshot.os.as_deref().unwrap_or("-"));
    println!("Uptime:    {}", format_uptime(snapshot.uptime_seconds));

    let stale = collector.last_report().stale_count();
    if stale > 0 {
        println!("({stale} sources unavailable, showing defaults)");
    }

    Ok(())
}
