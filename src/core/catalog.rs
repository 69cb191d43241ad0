use crate::array::DynamicArray;
use crate::core::config::CatalogConfig;
use crate::core::types::{Movie, NameKey, Person};
use crate::graph::{Collaboration, CollaborationGraph};
use crate::map::{MapKind, OpenAddressingMap, SortedArrayMap, Store};
use crate::sort::{SortKind, Sorter};
use std::cmp::Ordering;
use std::hash::Hash;
use std::rc::Rc;

/// Aggregate counts, mostly for dashboards and smoke checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub movies: usize,
    pub people: usize,
    pub collaborations: usize,
}

fn new_store<K, V>(kind: MapKind) -> Box<dyn Store<K, V>>
where
    K: Hash + Eq + Ord + 'static,
    V: 'static,
{
    match kind {
        MapKind::OpenAddressing => Box::new(OpenAddressingMap::new()),
        MapKind::SortedArray => Box::new(SortedArrayMap::new()),
    }
}

/// Drains a store into a fresh backend of the requested kind.
fn migrate<K, V>(store: &mut Box<dyn Store<K, V>>, kind: MapKind)
where
    K: Hash + Eq + Ord + 'static,
    V: 'static,
{
    let entries = store.drain();
    *store = new_store(kind);
    for (key, value) in entries {
        store.put(key, value);
    }
}

fn title_order(a: &Rc<Movie>, b: &Rc<Movie>) -> Ordering {
    a.cmp(b)
}

/// Votes descending, title ascending on ties. Total over distinct titles.
fn votes_rank_order(a: &Rc<Movie>, b: &Rc<Movie>) -> Ordering {
    b.votes().cmp(&a.votes()).then_with(|| a.cmp(b))
}

/// Year descending, title ascending on ties.
fn recency_rank_order(a: &Rc<Movie>, b: &Rc<Movie>) -> Ordering {
    b.year().cmp(&a.year()).then_with(|| a.cmp(b))
}

/// Cast list with duplicate credits of the same person dropped,
/// in listing order.
fn unique_cast(movie: &Movie) -> Vec<&Person> {
    let mut seen: Vec<&Person> = Vec::new();
    for actor in movie.cast() {
        if !seen.contains(&actor) {
            seen.push(actor);
        }
    }
    seen
}

/// Removes one movie from a ranked projection or bucket. Between a batch of
/// loads and the next [`CatalogIndex::finalize_load`] the array is not yet
/// ordered, so a failed binary search falls back to a linear scan.
fn remove_from_rank(
    rank: &mut DynamicArray<Rc<Movie>>,
    movie: &Rc<Movie>,
    cmp: &dyn Fn(&Rc<Movie>, &Rc<Movie>) -> Ordering,
) {
    if rank.binary_remove(movie, cmp) {
        return;
    }
    let index = rank
        .iter()
        .position(|entry| entry == movie)
        .expect("movie missing from a projection it was indexed in");
    rank.remove_at(index);
}

/// The catalog facade: one movie store, one person store, secondary indices
/// by director, actor and year, ranked projections, and the collaboration
/// graph. Every index shares the same `Rc<Movie>` records.
///
/// Loading is two-phase: [`load`](Self::load) per record, then one
/// [`finalize_load`](Self::finalize_load) to sort buckets and projections.
/// Queries and deletions expect a finalized catalog.
pub struct CatalogIndex {
    map_kind: MapKind,
    sorter: Sorter,
    movies: Box<dyn Store<NameKey, Rc<Movie>>>,
    people: Box<dyn Store<NameKey, Person>>,
    by_director: Box<dyn Store<NameKey, DynamicArray<Rc<Movie>>>>,
    by_actor: Box<dyn Store<NameKey, DynamicArray<Rc<Movie>>>>,
    by_year: Box<dyn Store<i32, DynamicArray<Rc<Movie>>>>,
    by_votes_rank: DynamicArray<Rc<Movie>>,
    by_recency_rank: DynamicArray<Rc<Movie>>,
    by_activity_rank: DynamicArray<Person>,
    graph: CollaborationGraph,
}

impl CatalogIndex {
    pub fn new() -> Self {
        Self::with_config(CatalogConfig::default())
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        CatalogIndex {
            map_kind: config.map,
            sorter: Sorter::new(config.sort),
            movies: new_store(config.map),
            people: new_store(config.map),
            by_director: new_store(config.map),
            by_actor: new_store(config.map),
            by_year: new_store(config.map),
            by_votes_rank: DynamicArray::new(),
            by_recency_rank: DynamicArray::new(),
            by_activity_rank: DynamicArray::new(),
            graph: CollaborationGraph::new(),
        }
    }

    /// Indexes one record. A record with an already-present title replaces
    /// the old one: the old record is fully deleted first, so every index
    /// stays coherent.
    pub fn load(&mut self, movie: Movie) {
        let key = movie.key();
        if self.movies.contains(&key) {
            self.delete_movie_by_title(movie.title());
        }

        let movie = Rc::new(movie);
        self.movies.put(key, movie.clone());

        let director = movie.director().clone();
        self.people.put(director.key(), director.clone());
        self.by_director
            .get_or_insert_with(director.key(), &mut DynamicArray::new)
            .append(movie.clone());

        self.by_year
            .get_or_insert_with(movie.year(), &mut DynamicArray::new)
            .append(movie.clone());

        let cast = unique_cast(&movie);
        for actor in &cast {
            self.people.put(actor.key(), (*actor).clone());
            self.by_actor
                .get_or_insert_with(actor.key(), &mut DynamicArray::new)
                .append(movie.clone());
        }
        for i in 0..cast.len() {
            for j in (i + 1)..cast.len() {
                self.graph.add_collaboration(&movie, cast[i], cast[j]);
            }
        }

        self.by_votes_rank.append(movie.clone());
        self.by_recency_rank.append(movie);
    }

    /// Sorts every bucket and projection with the active strategy and
    /// rebuilds the activity ranking. Call once after a batch of loads.
    pub fn finalize_load(&mut self) {
        self.by_votes_rank.sort_with(&mut self.sorter, &votes_rank_order);
        self.by_recency_rank
            .sort_with(&mut self.sorter, &recency_rank_order);

        for (_, bucket) in self.by_director.iter_mut() {
            bucket.sort_with(&mut self.sorter, &title_order);
        }
        for (_, bucket) in self.by_actor.iter_mut() {
            bucket.sort_with(&mut self.sorter, &title_order);
        }
        for (_, bucket) in self.by_year.iter_mut() {
            bucket.sort_with(&mut self.sorter, &title_order);
        }

        self.rebuild_activity_rank();
    }

    /// Activity is the number of movies a person acted in. People who only
    /// ever directed carry no acting activity and are left out.
    fn rebuild_activity_rank(&mut self) {
        self.by_activity_rank.clear();
        for (key, _) in self.by_actor.iter() {
            let person = self
                .people
                .get(key)
                .expect("actor bucket references a person missing from the store")
                .clone();
            self.by_activity_rank.append(person);
        }

        let by_actor = &self.by_actor;
        let activity_order = |a: &Person, b: &Person| {
            let activity = |p: &Person| {
                by_actor
                    .get(&p.key())
                    .expect("ranked person has no actor bucket")
                    .len()
            };
            activity(b).cmp(&activity(a)).then_with(|| a.cmp(b))
        };
        self.by_activity_rank
            .sort_with(&mut self.sorter, &activity_order);
    }

    /// Unindexes the record with this title from every store, bucket,
    /// projection and from the collaboration graph. Returns false for an
    /// absent title; deleting twice is a no-op.
    pub fn delete_movie_by_title(&mut self, title: &str) -> bool {
        let key = NameKey::new(title);
        let Some(movie) = self.movies.remove(&key) else {
            return false;
        };

        remove_from_rank(&mut self.by_votes_rank, &movie, &votes_rank_order);
        remove_from_rank(&mut self.by_recency_rank, &movie, &recency_rank_order);

        let director_key = movie.director().key();
        let emptied = {
            let bucket = self
                .by_director
                .get_mut(&director_key)
                .expect("director bucket missing for an indexed movie");
            remove_from_rank(bucket, &movie, &title_order);
            bucket.is_empty()
        };
        if emptied {
            self.by_director.remove(&director_key);
        }
        self.drop_person_if_idle(&director_key);

        let emptied = {
            let bucket = self
                .by_year
                .get_mut(&movie.year())
                .expect("year bucket missing for an indexed movie");
            remove_from_rank(bucket, &movie, &title_order);
            bucket.is_empty()
        };
        if emptied {
            self.by_year.remove(&movie.year());
        }

        let cast = unique_cast(&movie);
        for actor in &cast {
            let actor_key = actor.key();
            let emptied = {
                let bucket = self
                    .by_actor
                    .get_mut(&actor_key)
                    .expect("actor bucket missing for an indexed movie");
                remove_from_rank(bucket, &movie, &title_order);
                bucket.is_empty()
            };
            if emptied {
                self.by_actor.remove(&actor_key);
            }
            self.drop_person_if_idle(&actor_key);
        }

        for i in 0..cast.len() {
            for j in (i + 1)..cast.len() {
                self.graph.remove_collaboration(&movie, cast[i], cast[j]);
            }
        }

        self.rebuild_activity_rank();
        true
    }

    /// A person stays in the store only while some movie still references
    /// them, in either role.
    fn drop_person_if_idle(&mut self, key: &NameKey) {
        if !self.by_director.contains(key) && !self.by_actor.contains(key) {
            self.people.remove(key);
        }
    }

    /// Swaps every store onto a new map backend, keeping all entries.
    /// Returns false when `kind` is already active.
    pub fn set_map(&mut self, kind: MapKind) -> bool {
        if kind == self.map_kind {
            return false;
        }

        migrate(&mut self.movies, kind);
        migrate(&mut self.people, kind);
        migrate(&mut self.by_director, kind);
        migrate(&mut self.by_actor, kind);
        migrate(&mut self.by_year, kind);
        self.map_kind = kind;
        true
    }

    /// Swaps the sorting strategy used from the next sort on. Returns false
    /// when `kind` is already active.
    pub fn set_sort(&mut self, kind: SortKind) -> bool {
        if kind == self.sorter.kind() {
            return false;
        }
        self.sorter = Sorter::new(kind);
        true
    }

    pub fn map_kind(&self) -> MapKind {
        self.map_kind
    }

    pub fn sort_kind(&self) -> SortKind {
        self.sorter.kind()
    }

    pub fn clear(&mut self) {
        self.movies.clear();
        self.people.clear();
        self.by_director.clear();
        self.by_actor.clear();
        self.by_year.clear();
        self.by_votes_rank.clear();
        self.by_recency_rank.clear();
        self.by_activity_rank.clear();
        self.graph.clear();
    }

    pub fn count_movies(&self) -> usize {
        self.movies.len()
    }

    pub fn count_people(&self) -> usize {
        self.people.len()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            movies: self.movies.len(),
            people: self.people.len(),
            collaborations: self.graph.count_collaborations(),
        }
    }

    pub fn get_movie_by_title(&self, title: &str) -> Option<Rc<Movie>> {
        self.movies.get(&NameKey::new(title)).cloned()
    }

    pub fn get_person_by_name(&self, name: &str) -> Option<Person> {
        self.people.get(&NameKey::new(name)).cloned()
    }

    pub fn all_movies(&self) -> Vec<Rc<Movie>> {
        self.movies.iter().map(|(_, movie)| movie.clone()).collect()
    }

    pub fn all_people(&self) -> Vec<Person> {
        self.people.iter().map(|(_, person)| person.clone()).collect()
    }

    /// Substring title search, case-insensitive, in recency-rank order.
    pub fn by_title_contains(&self, needle: &str) -> Vec<Rc<Movie>> {
        let needle = needle.to_lowercase();
        self.by_recency_rank
            .iter()
            .filter(|movie| movie.title().to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }

    /// Movies of one year, title-ordered.
    pub fn by_year_exact(&self, year: i32) -> Vec<Rc<Movie>> {
        self.by_year
            .get(&year)
            .map(|bucket| bucket.as_slice().to_vec())
            .unwrap_or_default()
    }

    /// Movies directed by this person, title-ordered.
    pub fn by_director_exact(&self, name: &str) -> Vec<Rc<Movie>> {
        self.by_director
            .get(&NameKey::new(name))
            .map(|bucket| bucket.as_slice().to_vec())
            .unwrap_or_default()
    }

    /// Movies this person acted in, title-ordered.
    pub fn by_actor_exact(&self, name: &str) -> Vec<Rc<Movie>> {
        self.by_actor
            .get(&NameKey::new(name))
            .map(|bucket| bucket.as_slice().to_vec())
            .unwrap_or_default()
    }

    /// The `n` most voted movies; votes descending, title ascending on ties.
    /// `n` past the catalog size clamps.
    pub fn top_n_by_votes(&self, n: usize) -> Vec<Rc<Movie>> {
        self.by_votes_rank.slice(0, n.min(self.by_votes_rank.len()))
    }

    /// The `n` most recent movies; year descending, title ascending on ties.
    pub fn top_n_by_year(&self, n: usize) -> Vec<Rc<Movie>> {
        self.by_recency_rank
            .slice(0, n.min(self.by_recency_rank.len()))
    }

    /// The `n` most active actors; movie count descending, name ascending on
    /// ties. Directors with no acting credits do not appear.
    pub fn top_n_by_activity(&self, n: usize) -> Vec<Person> {
        self.by_activity_rank
            .slice(0, n.min(self.by_activity_rank.len()))
    }

    pub fn collaborations(&self) -> &CollaborationGraph {
        &self.graph
    }

    pub fn direct_collaborators_of(&self, person: &Person) -> Vec<Person> {
        self.graph.direct_collaborators_of(person)
    }

    pub fn team_of(&self, person: &Person) -> Vec<Person> {
        self.graph.team_of(person)
    }

    pub fn maximize_collaborations_in_the_team_of(&self, person: &Person) -> Vec<Collaboration> {
        self.graph.maximize_collaborations_in_the_team_of(person)
    }
}

impl Default for CatalogIndex {
    fn default() -> Self {
        Self::new()
    }
}
