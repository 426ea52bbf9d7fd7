use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};

use joback::validate::{self, Outcome, Record};
use joback::{db::CompoundDatabase, Joback};

use crate::cli::{EstimateArgs, ValidateArgs};

pub fn estimate(args: &EstimateArgs) -> Result<()> {
    let est = Joback::new(args.smiles.as_str())
        .with_context(|| format!("cannot estimate properties for '{}'", args.smiles))?;
    let t = args.temperature;

    println!("structure:       {}", est.notation());
    println!("groups:          {}", est.counts());
    println!("atoms (incl. H): {}", est.atom_count());
    println!();
    print_property("Tb", est.tb(), "K");
    print_property("Tm", est.tm(), "K");
    print_property("Tc", est.tc(None), "K");
    print_property("Pc", est.pc(), "Pa");
    print_property("Vc", est.vc(), "m^3/mol");
    print_property("Hf", est.hf(), "J/mol");
    print_property("Gf", est.gf(), "J/mol");
    print_property("Hfus", est.hfus(), "J/mol");
    print_property("Hvap", est.hvap(), "J/mol");
    print_property(&format!("Cp({t} K)"), est.cpig(t), "J/(mol*K)");
    print_property(&format!("mu({t} K)"), est.mul(t), "Pa*s");
    Ok(())
}

fn print_property(label: &str, value: std::result::Result<f64, joback::Error>, unit: &str) {
    match value {
        Ok(v) => println!("{label:<12} {v:.6e} {unit}"),
        Err(err) => {
            log::debug!("{label}: {err}");
            println!("{label:<12} n/a");
        }
    }
}

pub fn validate(args: &ValidateArgs) -> Result<()> {
    let mut db = CompoundDatabase::embedded();
    if let Some(path) = &args.input {
        let added = db
            .load_from_file(path)
            .with_context(|| format!("cannot load compounds from {}", path.display()))?;
        println!("loaded {added} compounds from {}", path.display());
    } else if args.all {
        db.load_all();
    } else {
        for _ in 0..args.batches {
            if db.load_next_batch() == 0 {
                break;
            }
        }
    }

    let bar = if args.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(db.len() as u64);
        bar.set_style(ProgressStyle::with_template(
            "{bar:40} {pos}/{len} {msg}",
        )?);
        bar
    };

    let mut records: Vec<Record> = Vec::with_capacity(db.len());
    for entry in db.iter() {
        bar.set_message(entry.cas.clone());
        records.push(validate::validate_entry(entry));
        bar.inc(1);
    }
    bar.finish_and_clear();

    let mut complete = 0usize;
    let mut incomplete = 0usize;
    let mut failed = 0usize;
    for record in &records {
        match &record.outcome {
            Outcome::Decomposed(frag) if frag.complete => complete += 1,
            Outcome::Decomposed(_) => incomplete += 1,
            Outcome::Failed(_) => failed += 1,
        }
    }

    validate::write_report_file(&args.output, &records)
        .with_context(|| format!("cannot write report to {}", args.output.display()))?;

    println!(
        "{} compounds: {complete} complete, {incomplete} incomplete, {failed} failed",
        records.len()
    );
    println!("report written to {}", args.output.display());
    Ok(())
}
