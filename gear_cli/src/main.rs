use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use gear_cli::input::{parse_flame, parse_potential, parse_stat_keys};
use gear_cli::output::{render_breakdown, render_report, render_totals};
use gear_core::{
    breakdown, compose_stats, compose_stats_with_potential, potential_stats, Comparison,
    EnhancementConfig, EquipCategory, EquipmentSlot, FlameLine, InputLimits, ItemDefinition,
    PotentialEntry, ReferenceTables, StarForceQuery, StarForceVariant, StatKey,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Gear stat composition and comparison")]
struct Cli {
    /// Directory holding gear, flames, potential and set_effects data files.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Only show stats that matter to this class (see classes data file).
    #[arg(long)]
    class: Option<String>,

    /// Comma-separated stat codes to show, e.g. `luk,watk,bossDmg`.
    #[arg(long)]
    keys: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose the stats of one item configuration.
    Compose {
        /// Gear id from the gear data file.
        #[arg(long)]
        gear: String,
        /// Star-force level.
        #[arg(long, default_value_t = 0)]
        stars: u32,
        /// Flame line as STAT=VALUE (repeatable, up to 4).
        #[arg(long = "flame", value_parser = parse_flame)]
        flames: Vec<FlameLine>,
        /// Potential line as LINE[:RANK][=VALUE] (repeatable, up to 3).
        #[arg(long = "pot", value_parser = parse_potential)]
        potentials: Vec<PotentialEntry>,
        /// Number of equipped pieces of the item's set.
        #[arg(long, default_value_t = 0)]
        set_pieces: u32,
        /// Fold potential into the headline stats.
        #[arg(long)]
        with_potential: bool,
        /// Show the contribution of every source.
        #[arg(long)]
        breakdown: bool,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Look up the star-force bonus for an arbitrary item shape.
    Lookup {
        #[arg(long)]
        level: u32,
        #[arg(long)]
        stars: u32,
        #[arg(long, default_value = "armor")]
        category: EquipCategory,
        #[arg(long, default_value = "hat")]
        slot: EquipmentSlot,
        #[arg(long, default_value = "normal")]
        variant: StarForceVariant,
        /// Base weapon attack is above zero (weapons only).
        #[arg(long)]
        watk: bool,
        /// Base magic attack is above zero (weapons only).
        #[arg(long)]
        matt: bool,
    },
    /// Evaluate a comparison session file (TOML or JSON).
    Compare {
        file: PathBuf,
        /// Print JSON instead of text.
        #[arg(long)]
        json: bool,
    },
    /// List gear, optionally for one slot.
    List {
        #[arg(long)]
        slot: Option<EquipmentSlot>,
    },
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match &cli.command {
        Command::Compose {
            gear,
            stars,
            flames,
            potentials,
            set_pieces,
            with_potential,
            breakdown,
            json,
        } => {
            let tables = load_tables(&cli.data_dir)?;
            let config = EnhancementConfig {
                star_count: *stars,
                flame_lines: flames.clone(),
                pot_lines: potentials.clone(),
                set_piece_count: *set_pieces,
            };
            let opts = ComposeOptions {
                with_potential: *with_potential,
                breakdown: *breakdown,
                json: *json,
            };
            handle_compose(&cli, &tables, gear, &config, opts)
        }
        Command::Lookup {
            level,
            stars,
            category,
            slot,
            variant,
            watk,
            matt,
        } => {
            let tables = load_tables(&cli.data_dir)?;
            let query = StarForceQuery {
                level: *level,
                star_count: *stars,
                category: *category,
                has_weapon_attack: *watk,
                has_magic_attack: *matt,
                slot: *slot,
                variant: *variant,
                max_stars_override: None,
            };
            let keys = stat_keys(&cli, &tables)?;
            println!("{}", render_totals(&tables.starforce.lookup(&query), &keys));
            Ok(())
        }
        Command::Compare { file, json } => {
            let tables = load_tables(&cli.data_dir)?;
            handle_compare(&cli, &tables, file, *json)
        }
        Command::List { slot } => {
            let tables = load_tables(&cli.data_dir)?;
            handle_list(&cli, &tables, *slot)
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ComposeOptions {
    with_potential: bool,
    breakdown: bool,
    json: bool,
}

fn load_tables(dir: &Path) -> Result<ReferenceTables> {
    ReferenceTables::load_from_dir(dir)
        .with_context(|| format!("failed to load reference data from {}", dir.display()))
}

/// Keys to display: `--keys` wins over `--class`, default is every key.
fn stat_keys(cli: &Cli, tables: &ReferenceTables) -> Result<Vec<StatKey>> {
    if let Some(keys) = &cli.keys {
        return parse_stat_keys(keys).context("invalid --keys");
    }
    Ok(match &cli.class {
        Some(class) => tables.classes.stat_keys_for(class),
        None => Vec::new(),
    })
}

fn handle_compose(
    cli: &Cli,
    tables: &ReferenceTables,
    gear_id: &str,
    config: &EnhancementConfig,
    opts: ComposeOptions,
) -> Result<()> {
    let item = tables
        .items
        .get(gear_id)
        .with_context(|| format!("unknown gear id `{gear_id}`"))?;
    let config = config.sanitized(item, tables, &InputLimits::default());
    tracing::debug!(gear = gear_id, ?config, "composing");

    let stats = if opts.with_potential {
        compose_stats_with_potential(item, &config, tables)
    } else {
        compose_stats(item, &config, tables)
    };
    let potential = potential_stats(&config, tables);

    if opts.json {
        let value = serde_json::json!({
            "gear": item.id,
            "config": config,
            "stats": stats,
            "potential": potential,
        });
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    let keys = stat_keys(cli, tables)?;
    let name = if item.name.is_empty() { &item.id } else { &item.name };
    println!("{name} ({}, level {}, {} stars)", item.slot, item.level, config.star_count);
    if opts.breakdown {
        println!("{}", render_breakdown(&breakdown(item, &config, tables), &keys));
    }
    println!("total      {}", render_totals(&stats, &keys));
    if !opts.with_potential {
        println!("potential  {}", render_totals(&potential, &keys));
    }
    Ok(())
}

fn handle_compare(cli: &Cli, tables: &ReferenceTables, file: &Path, json: bool) -> Result<()> {
    let comparison = Comparison::load(file)
        .with_context(|| format!("failed to load comparison from {}", file.display()))?;
    let report = comparison.evaluate(tables);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", render_report(&report, &stat_keys(cli, tables)?));
    }
    Ok(())
}

fn handle_list(cli: &Cli, tables: &ReferenceTables, slot: Option<EquipmentSlot>) -> Result<()> {
    let job_class = cli
        .class
        .as_deref()
        .and_then(|class| tables.classes.job_class_for(class));
    let items: Vec<&ItemDefinition> = match slot {
        Some(slot) => tables.items.for_slot_and_class(slot, job_class).collect(),
        None => tables
            .items
            .iter()
            .filter(|item| job_class.map_or(true, |job| item.usable_by(job)))
            .collect(),
    };
    for item in items {
        println!(
            "{:<28} {:<8} lv{:<4} max {:>2}*  {}",
            item.id,
            item.slot.as_str(),
            item.level,
            tables.max_stars(item),
            item.name
        );
    }
    Ok(())
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
