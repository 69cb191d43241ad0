/// Collaboration graph demo
///
/// Shows the graph queries driven by cast co-appearances:
/// - direct collaborators
/// - team discovery (BFS)
/// - maximum-score collaboration set (Prim-style)

use cinedex::core::catalog::CatalogIndex;
use cinedex::core::types::{Movie, Person};

fn main() {
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
        "Casino",
        1995,
        560_000,
        &["Robert De Niro", "Sharon Stone", "Joe Pesci"],
        "Martin Scorsese",
    ));
    catalog.load(create_movie(
        "The Irishman",
        2019,
        430_000,
        &["Robert De Niro", "Al Pacino", "Joe Pesci"],
        "Martin Scorsese",
    ));
    catalog.finalize_load();

    let de_niro = Person::new("Robert De Niro");

    println!("Direct collaborators of {}:", de_niro.name());
    for person in catalog.direct_collaborators_of(&de_niro) {
        println!("  {}", person.name());
    }
    println!();

    let foster = Person::new("Jodie Foster");
    println!("Team reachable from {}:", foster.name());
    for person in catalog.team_of(&foster) {
        println!("  {}", person.name());
    }
    println!();

    println!("Maximum-score collaborations in De Niro's team:");
    let mut edges = catalog.maximize_collaborations_in_the_team_of(&de_niro);
    edges.sort_by(|a, b| b.score().partial_cmp(&a.score()).unwrap_or(std::cmp::Ordering::Equal));
    for edge in &edges {
        println!(
            "  {} / {}  (score {:.0}, {} shared movies)",
            edge.actor_a().name(),
            edge.actor_b().name(),
            edge.score(),
            edge.count_movies()
        );
    }
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
