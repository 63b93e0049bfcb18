//! walletux - Wallet UX Review Browser
//!
//! A TUI for browsing and comparing UX reviews of crypto wallets.
//!
//! Features:
//! - Searchable, sortable comparison grid
//! - Detail pages with scores, strengths and issues
//! - Previous/next navigation between wallets
//! - Screenshot viewer with keyboard navigation
//!
//! Usage: walletux [--wallet <slug>] [--catalog <path>] [--sort <key>] [--list [--json]]

mod app;
mod catalog;
mod compare;
mod config;
mod gallery;
mod logging;
mod routing;
mod types;
mod ui;

use anyhow::{bail, Context, Result};
use app::App;
use catalog::Catalog;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use std::io::stdout;
use std::path::PathBuf;
use std::time::Duration;
use types::SortKey;

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct Args {
    help: bool,
    version: bool,
    list: bool,
    json: bool,
    wallet: Option<String>,
    catalog: Option<PathBuf>,
    sort: Option<SortKey>,
}

impl Args {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut parsed = Args::default();
        let mut iter = args.into_iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.help = true,
                "-v" | "--version" => parsed.version = true,
                "-l" | "--list" => parsed.list = true,
                "--json" => parsed.json = true,
                "-w" | "--wallet" => {
                    parsed.wallet = Some(iter.next().context("--wallet needs a slug")?);
                }
                "-c" | "--catalog" => {
                    let path = iter.next().context("--catalog needs a path")?;
                    parsed.catalog = Some(PathBuf::from(path));
                }
                "-s" | "--sort" => {
                    let key = iter.next().context("--sort needs a key")?;
                    match SortKey::parse(&key) {
                        Some(sort) => parsed.sort = Some(sort),
                        None => bail!(
                            "Unknown sort key '{}' (expected overall, onboarding, design or ux)",
                            key
                        ),
                    }
                }
                other => bail!("Unknown argument '{}' (see --help)", other),
            }
        }

        if parsed.json && !parsed.list {
            bail!("--json only applies to --list");
        }

        Ok(parsed)
    }
}

fn main() -> Result<()> {
    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(2);
        }
    };

    if args.help {
        print_help();
        return Ok(());
    }

    if args.version {
        println!("walletux {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    match logging::init() {
        Ok(path) => tracing::info!(log = ?path, "walletux {} starting", env!("CARGO_PKG_VERSION")),
        Err(e) => eprintln!("Warning: logging disabled: {:#}", e),
    }

    if let Err(e) = run(args) {
        tracing::error!(error = %format!("{:#}", e), "exiting with error");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn print_help() {
    println!(
        r#"walletux - Wallet UX Review Browser

USAGE:
    walletux [OPTIONS]

OPTIONS:
    -w, --wallet <SLUG>    Open a wallet's detail page (e.g. trust-wallet)
    -c, --catalog <PATH>   Load reviews from a TOML or JSON catalog file
    -s, --sort <KEY>       Initial sort: overall, onboarding, design, ux
    -l, --list             Print every wallet page and exit
        --json             With --list, print JSON
    -h, --help             Print help information
    -v, --version          Print version information

KEYBINDINGS:
    h/j/k/l          Move between cards
    Enter            Open details / open screenshot
    /                Search wallets or features
    s / S            Cycle sort order
    [ / ]            Previous / next wallet
    1-9              Open screenshot directly
    ← / →            Browse screenshots
    Esc              Close viewer / back
    t                Cycle theme
    c                Cycle grid columns
    ?                Help
    q                Quit

CONFIG:
    ~/.config/walletux/config.toml

LOGS:
    <cache dir>/walletux/walletux.log (filter with WALLETUX_LOG)
"#
    );
}

fn run(args: Args) -> Result<()> {
    let config = config::Config::load().context("Failed to load configuration")?;

    let catalog_path = args.catalog.clone().or_else(|| config.catalog.clone());
    let catalog = match &catalog_path {
        Some(path) => catalog::load_catalog(path)?,
        None => Catalog::builtin(),
    };
    if catalog.is_empty() {
        tracing::warn!("catalog has no wallets");
    }

    if args.list {
        return print_routes(&catalog, args.json);
    }

    let mut app = App::new(config, catalog);
    if let Some(sort) = args.sort {
        app.sort = sort;
    }
    if let Some(slug) = &args.wallet {
        app.navigate_to_slug(slug);
    }

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let result = main_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    tracing::info!("walletux exiting");
    result
}

/// Print every detail page route, like a static site's page list
fn print_routes(catalog: &Catalog, json: bool) -> Result<()> {
    let routes = routing::static_routes(catalog.wallets());

    if json {
        let out = serde_json::to_string_pretty(&routes).context("Failed to serialize routes")?;
        println!("{}", out);
    } else {
        for route in &routes {
            println!("/wallet/{:<24} {}", route.slug, route.meta.title);
        }
    }
    Ok(())
}

fn main_loop<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        let size = terminal.size()?;
        app.resize(size.width);

        terminal.draw(|frame| {
            ui::render(frame, app);
        })?;

        app.tick();

        // Poll for events with timeout (for flash expiry)
        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                // Only handle key press events (not release)
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key)?,
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
