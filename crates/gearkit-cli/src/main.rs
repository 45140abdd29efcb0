use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use gearkit_catalog::{GearHome, save_catalog};
use gearkit_core::{
    Bundle, Engine, IntentData, Preferences, ShopSession, SkillLevel, SliderKind, Style, Tier,
    bundle_summary, format_price, inference_message, weather_context, why_this_works,
};
use serde::Serialize;

#[derive(Parser)]
#[command(name = "gearkit", about = "Ski gear bundle recommendations")]
struct Cli {
    /// Catalog file (.toml or .json) instead of the home catalog
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Heuristics file (.toml) instead of the home config
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose debug output
    #[arg(long, global = true)]
    verbose: bool,

    #[command(flatten)]
    intent: IntentArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct IntentArgs {
    #[arg(long, global = true, default_value = "skiing")]
    activity: String,

    #[arg(long, global = true, default_value = "Whistler")]
    location: String,

    #[arg(long, global = true, default_value = "January")]
    month: String,

    /// beginner, intermediate or advanced
    #[arg(long, global = true, default_value = "beginner")]
    skill: SkillLevel,

    #[arg(long, global = true, default_value = "Unisex")]
    gender: String,

    #[arg(long, global = true, default_value = "M")]
    size: String,

    /// Trip budget in dollars, must be positive
    #[arg(long, global = true, default_value_t = 500.0)]
    budget: f64,
}

impl IntentArgs {
    fn to_intent(&self) -> Result<IntentData> {
        if !self.budget.is_finite() || self.budget <= 0.0 {
            bail!("budget must be a positive amount, got {}", self.budget);
        }
        Ok(IntentData {
            activity: self.activity.clone(),
            location: self.location.clone(),
            month: self.month.clone(),
            skill_level: self.skill,
            gender: self.gender.clone(),
            size: self.size.clone(),
            budget: self.budget,
        })
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Recommend a bundle for the trip
    Bundle {
        /// Print the bundle as JSON
        #[arg(long)]
        json: bool,
    },

    /// Re-tune the bundle with the vibe and budget sliders
    Adjust {
        /// Vibe priority, 0 (performance) to 100 (refined)
        #[arg(long)]
        vibe: f64,

        /// Budget priority, 0 (value) to 100 (quality)
        #[arg(long = "budget-priority")]
        budget_priority: f64,

        /// Which slider moved: vibe or budget
        #[arg(long, default_value = "budget")]
        changed: SliderKind,
    },

    /// List alternatives for an item against the recommended bundle
    Alternatives {
        /// Catalog item id
        item: String,
    },

    /// Show every catalog item with its tier
    Tiers,

    /// Add the recommended bundle to the cart and print the checkout payload
    Checkout,

    /// Write the active catalog to a .toml or .json file
    ExportCatalog {
        /// Output file path
        path: PathBuf,
    },
}

fn open_engine(cli: &Cli) -> Result<Engine> {
    let base_dir = std::env::var("GEARKIT_HOME").ok().map(PathBuf::from);
    let home = GearHome::open(base_dir.as_deref()).context("failed to open gearkit home")?;
    home.open_engine(cli.catalog.as_deref(), cli.config.as_deref())
        .context("failed to load catalog")
}

fn init_tracing(verbose: bool) {
    use tracing_subscriber::EnvFilter;

    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let intent = cli.intent.to_intent()?;
    let engine = open_engine(&cli)?;

    match &cli.command {
        Commands::Bundle { json } => cmd_bundle(&engine, intent, *json),
        Commands::Adjust {
            vibe,
            budget_priority,
            changed,
        } => cmd_adjust(&engine, intent, *vibe, *budget_priority, *changed),
        Commands::Alternatives { item } => cmd_alternatives(&engine, intent, item),
        Commands::Tiers => cmd_tiers(&engine),
        Commands::Checkout => cmd_checkout(&engine, intent),
        Commands::ExportCatalog { path } => cmd_export_catalog(&engine, path),
    }
}

// ---------------------------------------------------------------------------
// Output
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct BundleView {
    style: Style,
    weather: String,
    summary: String,
    inference: String,
    items: Vec<ItemView>,
    total: f64,
    original_price: f64,
    savings: f64,
    why_this_works: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ItemView {
    id: String,
    name: String,
    brand: String,
    category: String,
    price: f64,
    original_price: f64,
    tier: Tier,
    rationale: String,
}

fn item_views(engine: &Engine, bundle: &Bundle) -> Vec<ItemView> {
    bundle
        .items()
        .iter()
        .map(|b| ItemView {
            id: b.item.id.clone(),
            name: b.item.name.clone(),
            brand: b.item.brand.clone(),
            category: b.item.category.label(),
            price: b.item.price,
            original_price: b.item.original_price,
            tier: engine.product_tier(&b.item),
            rationale: b.rationale.clone(),
        })
        .collect()
}

fn print_items(items: &[ItemView]) {
    if items.is_empty() {
        println!("(no items found)");
        return;
    }
    for item in items {
        println!(
            "{:<11} {} ({}) {} [{}]",
            item.category,
            item.name,
            item.brand,
            format_price(item.price),
            item.tier
        );
        println!("            {}", item.rationale);
    }
}

fn print_totals(bundle: &Bundle) {
    println!(
        "total: {}  (was {}, you save {})",
        format_price(bundle.total_price()),
        format_price(bundle.original_price()),
        format_price(bundle.savings())
    );
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_bundle(engine: &Engine, intent: IntentData, json: bool) -> Result<()> {
    let session = ShopSession::start(engine, intent);
    let intent = session.intent();
    let bundle = session.bundle();
    let weather = weather_context(&intent.month, &intent.location);

    let view = BundleView {
        style: session.style(),
        weather: format!("{} {}", weather.icon, weather.label),
        summary: bundle_summary(session.style(), &intent.activity, intent.budget),
        inference: inference_message(intent),
        items: item_views(engine, bundle),
        total: bundle.total_price(),
        original_price: bundle.original_price(),
        savings: bundle.savings(),
        why_this_works: why_this_works(intent, session.style(), bundle),
    };

    if json {
        let out = serde_json::to_string_pretty(&view).context("failed to serialize bundle")?;
        println!("{out}");
        return Ok(());
    }

    println!("{}", view.weather);
    println!("{} bundle: {}", view.style, view.summary);
    println!("{}", view.inference);
    println!();
    print_items(&view.items);
    println!();
    print_totals(bundle);
    println!();
    println!("why this works: {}", view.why_this_works);
    Ok(())
}

fn cmd_adjust(
    engine: &Engine,
    intent: IntentData,
    vibe: f64,
    budget_priority: f64,
    changed: SliderKind,
) -> Result<()> {
    if !(0.0..=100.0).contains(&vibe) || !(0.0..=100.0).contains(&budget_priority) {
        bail!("slider values must be between 0 and 100");
    }
    let session = ShopSession::start(engine, intent);
    let preferences = Preferences {
        budget: session.intent().budget,
        size: session.intent().size.clone(),
    };

    println!(
        "before: {} bundle, {}",
        session.style(),
        format_price(session.bundle().total_price())
    );
    let adjustment =
        engine.adjust_bundle(session.bundle(), vibe, budget_priority, &preferences, changed);
    println!(
        "after:  {} bundle, {}",
        adjustment.style,
        format_price(adjustment.bundle.total_price())
    );
    println!("{}", adjustment.message());
    println!();
    print_items(&item_views(engine, &adjustment.bundle));
    println!();
    print_totals(&adjustment.bundle);
    Ok(())
}

fn cmd_alternatives(engine: &Engine, intent: IntentData, id: &str) -> Result<()> {
    let session = ShopSession::start(engine, intent);
    let alternatives = session
        .alternatives_for(id)
        .with_context(|| format!("cannot list alternatives for {id}"))?;

    if alternatives.is_empty() {
        println!("no alternatives available");
        return Ok(());
    }
    for alt in &alternatives {
        println!(
            "{:<16} {} ({}) {}",
            alt.tradeoff,
            alt.item.name,
            alt.item.id,
            format_price(alt.item.price)
        );
    }
    Ok(())
}

fn cmd_tiers(engine: &Engine) -> Result<()> {
    for item in engine.catalog().iter() {
        println!(
            "{:<12} {:<11} {:<9} {:>8}  {}",
            item.id,
            item.category.label(),
            engine.product_tier(item).as_str(),
            format_price(item.price),
            item.name
        );
    }
    Ok(())
}

fn cmd_checkout(engine: &Engine, intent: IntentData) -> Result<()> {
    let mut session = ShopSession::start(engine, intent);
    session.add_to_cart();
    let snapshot = session.checkout().context("checkout failed")?;
    if snapshot.is_empty() {
        eprintln!("no items found");
    }
    let out = serde_json::to_string_pretty(&snapshot).context("failed to serialize checkout")?;
    println!("{out}");
    Ok(())
}

fn cmd_export_catalog(engine: &Engine, path: &Path) -> Result<()> {
    save_catalog(engine.catalog(), path)
        .with_context(|| format!("failed to export catalog to {}", path.display()))?;
    println!(
        "exported {} items to {}",
        engine.catalog().len(),
        path.display()
    );
    Ok(())
}
