//! Print the counters of one creature
//!
//! Usage: cargo run --example counters -- <data-dir> <creature-id>
//!
//! Names come from `dictionary.json` in the data directory when present.

use std::env;
use std::process;

use anyhow::{Context, Result};
use counterdex_data::load_dictionary;
use counterdex_engine::{CreatureId, DataSet, KeyTranslator, Pokedex, Translate};

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let (Some(dir), Some(id)) = (args.next(), args.next()) else {
        eprintln!("Usage: counters <data-dir> <creature-id>");
        process::exit(2);
    };
    let id: u32 = id
        .parse()
        .with_context(|| format!("Invalid creature id: {}", id))?;

    let data = DataSet::load_dir(&dir)?;
    let pokedex = Pokedex::from_data(&data)
        .context("Reference data is inconsistent")?;
    let dictionary = load_dictionary(&dir)?;
    let locale: &dyn Translate = if dictionary.is_empty() {
        &KeyTranslator
    } else {
        &dictionary
    };

    let defender = pokedex
        .creature(CreatureId(id))
        .with_context(|| format!("No creature with id {}", id))?;
    let counters = pokedex.counters(defender.id())?;

    let name = locale.translate(defender.key());
    println!("\n=== Counters for {} ===\n", name);

    if counters.is_empty() {
        println!("No counters found.");
        return Ok(());
    }

    for counter in &counters {
        println!(
            "{:>5} CP  {:<16} {:<20} [{}] x{:.3}",
            counter.required_cp,
            locale.translate(&counter.attacker_key),
            locale.translate(&counter.best_move.key),
            locale.translate(&counter.best_move.type_key),
            counter.efficiency,
        );
    }

    println!("\nTotal: {} counters", counters.len());
    Ok(())
}
