//! Order Book Viz - Main binary
//!
//! Seeds a simulated exchange with resting orders and renders windowed
//! snapshots of the book as side-by-side terminal heatmaps. Each snapshot is
//! a dense table of signed order sizes: buy-side levels shade warm,
//! sell-side levels shade cool, empty slots stay blank.
//!
//! # Headless Mode
//!
//! Run `--headless` to skip the terminal UI and log table statistics
//! instead. Useful for CI and quick sanity checks.

mod config;

use std::io::{self, Stdout};

use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use exchange::Exchange;
use heatmap::{BookPanel, BookTable, RenderOptions, SnapshotParams};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing_subscriber::EnvFilter;
use types::{Price, Quantity};

pub use config::VizConfig;

/// Order Book Viz - order book snapshots as terminal heatmaps
#[derive(Parser, Debug)]
#[command(name = "orderbook-viz")]
#[command(about = "Renders simulated order book snapshots as heatmaps")]
#[command(version)]
struct Args {
    /// Run without the terminal UI and log table statistics
    #[arg(long, env = "VIZ_HEADLESS")]
    headless: bool,

    /// Number of price points to show
    #[arg(long, env = "VIZ_N_PRICES")]
    n_prices: Option<usize>,

    /// Number of order slots to show per price
    #[arg(long, env = "VIZ_N_ORDERS")]
    n_orders: Option<usize>,

    /// Center the price window on this tick
    #[arg(long, env = "VIZ_MID_PRICE")]
    mid_price: Option<i64>,

    /// Number of snapshots to render side by side
    #[arg(long, env = "VIZ_PANELS")]
    panels: Option<usize>,

    /// Panel grid columns
    #[arg(long, env = "VIZ_GRID_COLS")]
    sx: Option<usize>,

    /// Panel grid rows
    #[arg(long, env = "VIZ_GRID_ROWS")]
    sy: Option<usize>,

    /// Cell width scale factor
    #[arg(long, env = "VIZ_FIGSCALE")]
    figscale: Option<f64>,

    /// Annotate populated cells with their absolute size
    #[arg(long, env = "VIZ_ANNOT")]
    annot: bool,

    /// Base rng seed for book seeding
    #[arg(long, env = "VIZ_SEED")]
    seed: Option<u64>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Book Seeding
// ─────────────────────────────────────────────────────────────────────────────

/// Populate an exchange with random resting orders.
///
/// Each price level fills independently with `fill_probability`; a filled
/// level gets 1..=max_orders_per_level orders with sizes in the configured
/// range. The buy/sell split follows from the level's price alone.
fn seed_exchange(config: &VizConfig, seed: u64) -> Exchange {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut ex = Exchange::new(config.min_price, config.max_price, config.buy_max_ind);

    for tick in config.min_price.raw()..=config.max_price.raw() {
        if rng.r#gen::<f64>() >= config.fill_probability {
            continue;
        }
        let orders = rng.gen_range(1..=config.max_orders_per_level);
        for _ in 0..orders {
            let qty = rng.gen_range(config.min_quantity..=config.max_quantity);
            ex.place_order(Price(tick), Quantity(qty))
                .expect("seeded order inside the tracked range");
        }
    }

    tracing::debug!(
        seed,
        orders = ex.order_count(),
        volume = %ex.total_volume(),
        "book seeded"
    );
    ex
}

/// Build one snapshot table (and title) per panel.
///
/// Panel `n` seeds its own book with `seed + n`, so side-by-side panels show
/// comparable but distinct books.
fn build_tables(config: &VizConfig, base_seed: u64) -> (Vec<BookTable>, Vec<String>) {
    let params = SnapshotParams::new()
        .n_prices(config.n_prices)
        .n_orders(config.n_orders)
        .mid_price(config.mid_price);

    let mut tables = Vec::with_capacity(config.panels);
    let mut titles = Vec::with_capacity(config.panels);
    for n in 0..config.panels {
        let seed = base_seed + n as u64;
        let ex = seed_exchange(config, seed);
        tables.push(BookTable::from_exchange(&ex, &params));
        titles.push(format!("book (seed {})", seed));
    }
    (tables, titles)
}

// ─────────────────────────────────────────────────────────────────────────────
// Terminal Shell
// ─────────────────────────────────────────────────────────────────────────────

/// Initialize the terminal for rendering.
fn init_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Terminal::new(backend)
}

/// Restore the terminal to normal state.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run the terminal UI until the user quits.
fn run_tui(config: &VizConfig) -> io::Result<()> {
    let mut terminal = init_terminal()?;
    let result = run_tui_loop(config, &mut terminal);
    restore_terminal(&mut terminal)?;
    result
}

/// Draw/redraw loop: `q`/`Esc` quits, `r` reseeds the books.
fn run_tui_loop(
    config: &VizConfig,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> io::Result<()> {
    let mut base_seed = config.seed;
    let (mut tables, mut titles) = build_tables(config, base_seed);

    loop {
        terminal.draw(|frame| {
            let panel = BookPanel::new(&tables)
                .grid(config.sx, config.sy)
                .figscale(config.figscale)
                .titles(&titles)
                .options(RenderOptions::new().annot(config.annot));
            frame.render_widget(panel, frame.area());
        })?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                KeyCode::Char('r') => {
                    base_seed += config.panels as u64;
                    (tables, titles) = build_tables(config, base_seed);
                }
                _ => {}
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Headless Mode
// ─────────────────────────────────────────────────────────────────────────────

/// Build the tables and log their statistics instead of drawing.
fn run_headless(config: &VizConfig) {
    let (tables, titles) = build_tables(config, config.seed);

    for (table, title) in tables.iter().zip(&titles) {
        tracing::info!(
            title = %title,
            rows = table.n_rows(),
            cols = table.n_cols(),
            populated = table.populated_cells(),
            max_abs = table.max_abs(),
            "table built"
        );
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    // Build config with CLI/env overrides
    let mut config = VizConfig::default();
    if let Some(n) = args.n_prices {
        config.n_prices = n;
    }
    if let Some(n) = args.n_orders {
        config.n_orders = n;
    }
    if let Some(tick) = args.mid_price {
        config.mid_price = Price(tick);
    }
    if let Some(panels) = args.panels {
        config = config.panels(panels);
    }
    let (sx, sy) = (args.sx.unwrap_or(config.sx), args.sy.unwrap_or(config.sy));
    config = config.grid(sx, sy);
    if let Some(figscale) = args.figscale {
        config.figscale = figscale;
    }
    if args.annot {
        config.annot = true;
    }
    if let Some(seed) = args.seed {
        config.seed = seed;
    }

    // The snapshot builder leaves bounds to the caller; check them here.
    if !config.window_in_range() {
        eprintln!(
            "error: window {}..{} leaves the tracked range {}..{}",
            config.window_lo(),
            config.window_hi(),
            config.min_price,
            config.max_price
        );
        std::process::exit(2);
    }
    if config.panels > config.grid_capacity() {
        eprintln!(
            "error: {} panels do not fit a {}x{} grid",
            config.panels, config.sx, config.sy
        );
        std::process::exit(2);
    }

    // Print config summary
    eprintln!("╔══════════════════════════════════════════════════════════╗");
    eprintln!(
        "║  Order Book Viz - {}                            ║",
        if args.headless {
            "Headless Mode"
        } else {
            "TUI Mode     "
        }
    );
    eprintln!("╠══════════════════════════════════════════════════════════╣");
    eprintln!(
        "║  Window: {} .. {}  ({} rows x {} slots)          ║",
        config.window_lo(),
        config.window_hi(),
        config.n_prices + 1,
        config.n_orders
    );
    eprintln!(
        "║  Panels: {}  in a {}x{} grid   │  Seed: {:<6}            ║",
        config.panels, config.sx, config.sy, config.seed
    );
    eprintln!("╚══════════════════════════════════════════════════════════╝");
    eprintln!();

    if args.headless {
        run_headless(&config);
    } else {
        eprintln!("  q Quit  │  r Reseed");
        eprintln!();
        if let Err(e) = run_tui(&config) {
            eprintln!("TUI error: {}", e);
        }
    }
}
