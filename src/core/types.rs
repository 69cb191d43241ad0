use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::hash::{Hash, Hasher};

/// Collapses runs of whitespace to single spaces and trims the ends.
/// Record identity is defined over this form.
pub(crate) fn collapse_whitespace(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-insensitive comparison of two already-collapsed strings.
pub(crate) fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

/// Lookup key for the catalog stores: trimmed, whitespace-collapsed, lowercased.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NameKey(String);

impl NameKey {
    /// Lowercases per character, the same mapping the identity comparisons
    /// use. `str::to_lowercase` is context-sensitive (final sigma) and would
    /// split equal names across distinct keys.
    pub fn new(raw: &str) -> Self {
        NameKey(
            collapse_whitespace(raw)
                .chars()
                .flat_map(char::to_lowercase)
                .collect(),
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A person, identified by name (case-insensitive). Display casing is preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Person {
    name: String,
}

impl Person {
    pub fn new(name: &str) -> Self {
        Person {
            name: collapse_whitespace(name),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn key(&self) -> NameKey {
        NameKey::new(&self.name)
    }
}

impl From<String> for Person {
    fn from(name: String) -> Self {
        Person::new(&name)
    }
}

impl From<Person> for String {
    fn from(person: Person) -> Self {
        person.name
    }
}

impl PartialEq for Person {
    fn eq(&self, other: &Self) -> bool {
        cmp_ignore_case(&self.name, &other.name) == Ordering::Equal
    }
}

impl Eq for Person {}

impl PartialOrd for Person {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Person {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_ignore_case(&self.name, &other.name)
    }
}

impl Hash for Person {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.name.chars().flat_map(char::to_lowercase) {
            c.hash(state);
        }
    }
}

/// A movie record, identified by title (case-insensitive).
/// Immutable once constructed; the catalog only ever moves it between indices.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "MovieData", into = "MovieData")]
pub struct Movie {
    title: String,
    year: i32,
    votes: u64,
    cast: Vec<Person>,
    director: Person,
}

impl Movie {
    pub fn new(title: &str, year: i32, votes: u64, cast: Vec<Person>, director: Person) -> Self {
        Movie {
            title: collapse_whitespace(title),
            year,
            votes,
            cast,
            director,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn votes(&self) -> u64 {
        self.votes
    }

    /// Cast in listing order, not alphabetical.
    pub fn cast(&self) -> &[Person] {
        &self.cast
    }

    pub fn director(&self) -> &Person {
        &self.director
    }

    pub fn key(&self) -> NameKey {
        NameKey::new(&self.title)
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        cmp_ignore_case(&self.title, &other.title) == Ordering::Equal
    }
}

impl Eq for Movie {}

impl PartialOrd for Movie {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Movie {
    fn cmp(&self, other: &Self) -> Ordering {
        cmp_ignore_case(&self.title, &other.title)
    }
}

impl Hash for Movie {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.title.chars().flat_map(char::to_lowercase) {
            c.hash(state);
        }
    }
}

/// Raw serialization shape. Deserializing through it funnels every record
/// through the normalizing constructors.
#[derive(Serialize, Deserialize)]
struct MovieData {
    title: String,
    year: i32,
    votes: u64,
    cast: Vec<Person>,
    director: Person,
}

impl From<MovieData> for Movie {
    fn from(data: MovieData) -> Self {
        Movie::new(&data.title, data.year, data.votes, data.cast, data.director)
    }
}

impl From<Movie> for MovieData {
    fn from(movie: Movie) -> Self {
        MovieData {
            title: movie.title,
            year: movie.year,
            votes: movie.votes,
            cast: movie.cast,
            director: movie.director,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn person_name_is_trimmed_and_collapsed() {
        let person = Person::new("  Robert   De  Niro ");
        assert_eq!(person.name(), "Robert De Niro");
    }

    #[test]
    fn person_identity_ignores_case() {
        let a = Person::new("Robert De Niro");
        let b = Person::new("robert de niro");
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a.cmp(&b), Ordering::Equal);
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn final_sigma_names_share_one_key() {
        // word-final 'Σ' lowercases to 'ς' under str::to_lowercase but to
        // 'σ' under char::to_lowercase; identity and keys must agree
        let a = Person::new("ΝΙΚΟΣ");
        let b = Person::new("νικοσ");
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_eq!(a.key(), b.key());
    }

    #[test]
    fn movie_identity_is_title_only() {
        let a = Movie::new("Taxi  Driver", 1976, 684728, vec![], Person::new("Scorsese"));
        let b = Movie::new("taxi driver", 0, 0, vec![], Person::new("Nobody"));
        assert_eq!(a, b);
        assert_eq!(a.title(), "Taxi Driver");
    }

    #[test]
    fn movie_json_round_trip_normalizes() {
        let json = r#"{"title":" Pulp   Fiction ","year":1994,"votes":1743616,"cast":["John Travolta","Uma Thurman"],"director":"Quentin  Tarantino"}"#;
        let movie: Movie = serde_json::from_str(json).unwrap();
        assert_eq!(movie.title(), "Pulp Fiction");
        assert_eq!(movie.director().name(), "Quentin Tarantino");
        assert_eq!(movie.cast().len(), 2);

        let back = serde_json::to_string(&movie).unwrap();
        assert!(back.contains("\"Pulp Fiction\""));
        assert!(back.contains("\"John Travolta\""));
    }
}
