/// Complete cinedex catalog demo
///
/// Demonstrates the major catalog operations:
/// - Loading and finalizing records
/// - Exact and ranked queries
/// - Updates (re-load) and deletion
/// - Live backend switching
/// - Persistence round trip

use cinedex::core::catalog::CatalogIndex;
use cinedex::core::types::{Movie, Person};
use cinedex::map::MapKind;
use cinedex::persistence;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n╔═══════════════════════════════════════════════╗");
    println!("║        cinedex Catalog - Complete Demo        ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    // Step 1: Create catalog and load records
    println!("Step 1: LOAD - Indexing movies...");
    let mut catalog = CatalogIndex::new();
    catalog.load(create_movie(
        "Taxi Driver",
        1976,
        684_728,
        &["Robert De Niro", "Jodie Foster"],
        "Martin Scorsese",
    ));
    catalog.load(create_movie(
        "Heat",
        1995,
        700_000,
        &["Al Pacino", "Robert De Niro"],
        "Michael Mann",
    ));
    catalog.load(create_movie(
        "Pulp Fiction",
        1994,
        1_743_616,
        &["John Travolta", "Uma Thurman", "Samuel L. Jackson"],
        "Quentin Tarantino",
    ));
    catalog.finalize_load();
    println!("  Indexed {} movies\n", catalog.count_movies());

    // Step 2: Exact queries
    println!("Step 2: QUERY - Exact lookups...");
    if let Some(movie) = catalog.get_movie_by_title("taxi driver") {
        println!("  'taxi driver' -> {} ({})", movie.title(), movie.year());
    }
    for movie in catalog.by_director_exact("Martin Scorsese") {
        println!("  Scorsese directed: {}", movie.title());
    }
    for movie in catalog.by_year_exact(1995) {
        println!("  Released 1995: {}", movie.title());
    }
    println!();

    // Step 3: Ranked queries
    println!("Step 3: RANKINGS...");
    for movie in catalog.top_n_by_votes(3) {
        println!("  {:>9} votes  {}", movie.votes(), movie.title());
    }
    for person in catalog.top_n_by_activity(3) {
        println!("  active actor: {}", person.name());
    }
    println!();

    // Step 4: UPDATE - re-loading a title replaces the record
    println!("Step 4: UPDATE - Re-loading 'Heat' with fresh votes...");
    catalog.load(create_movie(
        "Heat",
        1995,
        712_345,
        &["Al Pacino", "Robert De Niro", "Val Kilmer"],
        "Michael Mann",
    ));
    catalog.finalize_load();
    let heat = catalog
        .get_movie_by_title("Heat")
        .expect("Heat was just re-loaded");
    println!("  Heat now has {} votes\n", heat.votes());

    // Step 5: DELETE
    println!("Step 5: DELETE - Removing 'Pulp Fiction'...");
    let deleted = catalog.delete_movie_by_title("Pulp Fiction");
    println!("  deleted: {}", deleted);
    println!(
        "  Uma Thurman still indexed: {}\n",
        catalog.get_person_by_name("Uma Thurman").is_some()
    );

    // Step 6: Live backend switch
    println!("Step 6: BACKEND - Switching to the sorted-array store...");
    let switched = catalog.set_map(MapKind::SortedArray);
    println!(
        "  switched: {}, movies still indexed: {}\n",
        switched,
        catalog.count_movies()
    );

    // Step 7: Persistence round trip
    println!("Step 7: PERSISTENCE - Round trip through the line format...");
    let path = std::env::temp_dir().join("cinedex_demo.txt");
    persistence::store_movies(&path, &catalog.all_movies())?;

    let mut restored = CatalogIndex::new();
    persistence::load_movies(&path, &mut |movie| restored.load(movie))?;
    restored.finalize_load();
    println!("  restored {} movies from {:?}\n", restored.count_movies(), path);

    // Step 8: Statistics
    println!("Step 8: STATISTICS:");
    println!("  ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    let stats = catalog.stats();
    println!("  Movies:          {}", stats.movies);
    println!("  People:          {}", stats.people);
    println!("  Collaborations:  {}", stats.collaborations);

    println!("\n╔════════════════════════════════════════╗");
    println!("║     All Catalog Operations Done!       ║");
    println!("╚════════════════════════════════════════╝\n");

    Ok(())
}

/// Helper to build a movie record
fn create_movie(title: &str, year: i32, votes: u64, cast: &[&str], director: &str) -> Movie {
    Movie::new(
        title,
        year,
        votes,
        cast.iter().map(|name| Person::new(name)).collect(),
        Person::new(director),
    )
}
