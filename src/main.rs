use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

mod models;
mod setlist;


use crate::models::{Position, SetlistFilters, SetlistSettings, Song};
use crate::setlist::SetlistGenerator;
use crate::setlist::utils::SetlistNaming;

#[derive(Parser)]
#[command(name = "setlist-generator")]
#[command(about = "Setlist generator for a band's song pool")]
#[command(version)]
struct Args {
    /// Path to the song pool JSON file (array of songs)
    #[arg(short = 's', long = "songs", default_value = "songs.json")]
    songs_file: String,

    /// Number of sets to generate
    #[arg(short = 'c', long = "set-count", default_value_t = 2)]
    set_count: usize,

    /// Target length per set, in minutes
    #[arg(short = 'l', long = "set-length", default_value_t = 45)]
    set_length: u32,

    /// Exclude cover songs
    #[arg(long = "no-covers")]
    no_covers: bool,

    /// Use cover songs only
    #[arg(long = "only-covers")]
    only_covers: bool,

    /// Exclude ballads (songs rated tempo 1 or unrated)
    #[arg(long = "no-ballads")]
    no_ballads: bool,

    /// Seed for the random source (reproducible output)
    #[arg(long = "seed")]
    seed: Option<u64>,

    /// Name for the generated setlist
    #[arg(short = 'n', long = "name")]
    name: Option<String>,

    /// Write the set -> song-id mapping to this JSON file
    #[arg(short = 'o', long = "output")]
    output: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Validate that the song pool file exists before proceeding
    if !std::path::Path::new(&args.songs_file).exists() {
        eprintln!("Error: Song pool file '{}' not found.", args.songs_file);
        eprintln!("Please ensure the file exists or specify a different file with --songs.");
        return Err(anyhow::anyhow!(
            "Song pool file '{}' not found",
            args.songs_file
        ));
    }

    println!("Loading song pool from: {}", args.songs_file);
    let songs = match Song::load_all_from_file(&args.songs_file) {
        Ok(songs) => {
            println!("Loaded {} songs", songs.len());
            songs
        }
        Err(e) => {
            eprintln!("Failed to load song pool: {e}");
            return Err(anyhow::anyhow!("Failed to load song pool: {}", e));
        }
    };

    let settings = SetlistSettings {
        filters: SetlistFilters {
            no_covers: args.no_covers,
            only_covers: args.only_covers,
            no_ballads: args.no_ballads,
        },
        set_count: args.set_count,
        set_length: args.set_length,
    };

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    println!(
        "\nGenerating {} set(s) of {} minutes...",
        settings.set_count, settings.set_length
    );
    let name = args.name.unwrap_or_else(SetlistNaming::default_name);
    let generator = SetlistGenerator::new(settings);
    let generated = generator.generate(songs, Some(name), &mut rng)?;

    // Display generation results
    println!("\n{}", generated.name);
    println!("{}", "=".repeat(generated.name.len()));

    for (i, set) in generated.sets.iter().enumerate() {
        let openers = set.iter().filter(|s| s.position == Position::Opener).count();
        let closers = set.iter().filter(|s| s.position == Position::Closer).count();
        let others = set.len() - openers - closers;

        println!(
            "\nSet {}: {} songs, {} minutes (openers: {}, others: {}, closers: {})",
            i + 1,
            set.len(),
            generated.set_length(i),
            openers,
            others,
            closers
        );

        if set.is_empty() {
            println!("   (no eligible songs)");
            continue;
        }

        for (n, song) in set.iter().enumerate() {
            let position_tag = match song.position {
                Position::Opener => " [opener]",
                Position::Closer => " [closer]",
                Position::Other => "",
            };
            let cover_tag = if song.is_cover { " (cover)" } else { "" };
            println!(
                "   {}. {} - {}m{}{}",
                n + 1,
                song.title,
                song.length,
                position_tag,
                cover_tag
            );
        }
    }

    // Hand the set-key -> song-id mapping to the caller's storage layer
    if let Some(path) = &args.output {
        let mapping: serde_json::Map<String, serde_json::Value> = generated
            .song_id_map()
            .into_iter()
            .map(|(key, ids)| (key, serde_json::json!(ids)))
            .collect();
        let json = serde_json::to_string_pretty(&serde_json::Value::Object(mapping))?;
        std::fs::write(path, json)?;
        println!("\nWrote set mapping to {path}");
    }

    Ok(())
}
