use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use firms_lookup::Column;

/// Write a deterministic sample FIRMS code list for local development.
#[derive(Parser, Debug)]
#[command(name = "generate_sample")]
struct Args {
    /// Output CSV path
    #[arg(default_value = "data/firm_codes.csv")]
    path: PathBuf,

    /// Number of data rows
    #[arg(default_value = "500")]
    rows: usize,
}

/// Seeded splitmix64 stream, so every run writes the same file.
struct SampleRng(u64);

impl SampleRng {
    fn below(&mut self, n: usize) -> usize {
        self.0 = self.0.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        ((z ^ (z >> 31)) % n as u64) as usize
    }

    fn pick<'a>(&mut self, items: &[&'a str]) -> &'a str {
        items[self.below(items.len())]
    }
}

const NAME_WORDS: &[&str] = &[
    "Pacific", "Harbor", "Gateway", "Summit", "Liberty", "Coastal", "Atlas", "Meridian",
];
const NAME_SUFFIXES: &[&str] = &[
    "Logistics", "Warehousing", "Freight", "Distribution", "Container Station", "Storage",
];
const FACILITY_TYPES: &[&str] = &[
    "Container Freight Station",
    "Bonded Warehouse",
    "Foreign Trade Zone",
    "Centralized Examination Station",
    "Container Yard",
];
const STREETS: &[&str] = &["Harbor Blvd", "Terminal Way", "Industrial Pkwy", "Airport Rd", "Pier St"];
// (city, state, zip prefix)
const CITIES: &[(&str, &str, &str)] = &[
    ("Long Beach", "CA", "908"),
    ("Oakland", "CA", "946"),
    ("Newark", "NJ", "071"),
    ("Savannah", "GA", "314"),
    ("Houston", "TX", "770"),
    ("Seattle", "WA", "981"),
    ("Miami", "FL", "331"),
];
const STATUSES: &[&str] = &["ACTIVE", "ACTIVE", "ACTIVE", "DEACTIVATED"];

fn main() -> Result<()> {
    let args = Args::parse();
    let mut rng = SampleRng(42);

    if let Some(parent) = args.path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let mut writer = csv::Writer::from_path(&args.path)
        .with_context(|| format!("creating {}", args.path.display()))?;

    writer.write_record(Column::ALL.iter().map(|c| c.display_name()))?;

    for i in 0..args.rows {
        let letter = (b'A' + rng.below(26) as u8) as char;
        let (city, state, zip_prefix) = CITIES[rng.below(CITIES.len())];
        let name = format!("{} {}", rng.pick(NAME_WORDS), rng.pick(NAME_SUFFIXES));
        let address = format!("{} {}", 1 + rng.below(9999), rng.pick(STREETS));
        let zip = format!("{zip_prefix}{:02}", rng.below(100));

        writer.write_record([
            format!("{letter}{:03}", i % 1000).as_str(),
            name.as_str(),
            rng.pick(FACILITY_TYPES),
            address.as_str(),
            city,
            state,
            zip.as_str(),
            "US",
            rng.pick(STATUSES),
        ])?;
    }
    writer.flush()?;

    println!("Wrote {} FIRMS records to {}", args.rows, args.path.display());
    Ok(())
}
