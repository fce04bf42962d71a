//! Loads a delimited crime-record file, bulk-loads a splay index, and
//! serves sample queries from it side by side with the standard library's
//! balanced map.
//!
//! Usage: `cargo run --example crime_report [path/to/CleanedCrimeData.csv]`

use std::{collections::BTreeMap, env, error::Error, fs::File, io::BufReader, time::Instant};

use crimedex::prelude::*;

const RECORD_LIMIT: usize = 500;
const PREVIEW_ROWS: usize = 20;

fn main() -> Result<(), Box<dyn Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "CleanedCrimeData.csv".to_owned());
    let file = File::open(&path).map_err(|error| format!("{path}: {error}"))?;
    let records = read_records(BufReader::new(file), RECORD_LIMIT)?;

    let balanced: BTreeMap<u32, CrimeRecord> = records.iter().cloned().collect();
    let mut splayed: SplayMap<u32, CrimeRecord> = SplayMap::from_sorted(records.clone());

    for (number, record) in records.iter().take(PREVIEW_ROWS) {
        println!("Record #: {number:>3} || {record}");
    }
    println!(
        "... {} records indexed, tree height {}",
        splayed.len(),
        splayed.height()
    );

    let probe = records.len() as u32 / 2;

    let splay_started = Instant::now();
    let from_splay = splayed.find(&probe).cloned();
    let splay_elapsed = splay_started.elapsed();

    let balanced_started = Instant::now();
    let from_balanced = balanced.get(&probe).cloned();
    let balanced_elapsed = balanced_started.elapsed();

    assert_eq!(from_splay, from_balanced);
    println!();
    println!(
        "record #{probe} via splay tree in {splay_elapsed:?}, key at root afterwards: {:?}",
        splayed.root_key()
    );
    println!("record #{probe} via balanced map in {balanced_elapsed:?}");
    if let Some(record) = from_splay {
        println!("  {record}");
    }

    let query = normalize_query("700 W 7th St");
    let mut matches = 0usize;
    splayed.for_each(|_, record| {
        if normalize_query(&record.location).contains(&query) {
            matches += 1;
        }
    });
    println!();
    println!("{matches} records match location query `{query}`");

    Ok(())
}
