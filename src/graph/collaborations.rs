use crate::array::DynamicArray;
use crate::core::types::{Movie, NameKey, Person};
use crate::map::{OpenAddressingMap, Store};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};
use std::rc::Rc;

/// Canonical identity of an unordered pair of people: endpoints are stored
/// name-ascending, so `(A, B)` and `(B, A)` produce the same key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey {
    first: NameKey,
    second: NameKey,
}

impl PairKey {
    pub fn new(a: &Person, b: &Person) -> Self {
        let (ka, kb) = (a.key(), b.key());
        if ka <= kb {
            PairKey { first: ka, second: kb }
        } else {
            PairKey { first: kb, second: ka }
        }
    }
}

/// "These two people acted together", aggregated over every shared movie.
#[derive(Debug, Clone)]
pub struct Collaboration {
    actor_a: Person,
    actor_b: Person,
    movies: DynamicArray<Rc<Movie>>,
}

impl Collaboration {
    fn new(actor_a: Person, actor_b: Person) -> Self {
        Collaboration {
            actor_a,
            actor_b,
            movies: DynamicArray::new(),
        }
    }

    pub fn actor_a(&self) -> &Person {
        &self.actor_a
    }

    pub fn actor_b(&self) -> &Person {
        &self.actor_b
    }

    /// The endpoint that is not `person`.
    pub fn other(&self, person: &Person) -> &Person {
        if self.actor_a == *person {
            &self.actor_b
        } else {
            &self.actor_a
        }
    }

    pub fn movies(&self) -> &[Rc<Movie>] {
        self.movies.as_slice()
    }

    pub fn count_movies(&self) -> usize {
        self.movies.len()
    }

    /// Mean vote count over the shared movies. The graph removes a
    /// collaboration the instant its movie set empties, so this is never
    /// evaluated over zero movies.
    pub fn score(&self) -> f64 {
        let total: u64 = self.movies.iter().map(|movie| movie.votes()).sum();
        total as f64 / self.movies.len() as f64
    }

    fn add_movie(&mut self, movie: Rc<Movie>) {
        self.movies.binary_insert(movie, &title_order);
    }

    fn remove_movie(&mut self, movie: &Rc<Movie>) {
        self.movies.binary_remove(movie, &title_order);
    }
}

fn title_order(a: &Rc<Movie>, b: &Rc<Movie>) -> Ordering {
    a.cmp(b)
}

fn pair_order(a: &PairKey, b: &PairKey) -> Ordering {
    a.cmp(b)
}

/// Heap entry for the max-priority growth in
/// [`CollaborationGraph::maximize_collaborations_in_the_team_of`].
/// Superseded entries are left in the heap and popped harmlessly.
struct ScoredPerson {
    person: Person,
    score: f64,
}

impl PartialEq for ScoredPerson {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl Eq for ScoredPerson {}

impl PartialOrd for ScoredPerson {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.score.partial_cmp(&other.score)
    }
}

impl Ord for ScoredPerson {
    fn cmp(&self, other: &Self) -> Ordering {
        self.partial_cmp(other).unwrap_or(Ordering::Equal)
    }
}

/// Actor-collaboration graph: a collaboration store keyed by the unordered
/// pair, plus an adjacency store listing every pair a person takes part in.
pub struct CollaborationGraph {
    collaborations: OpenAddressingMap<PairKey, Collaboration>,
    adjacency: OpenAddressingMap<NameKey, DynamicArray<PairKey>>,
}

impl CollaborationGraph {
    pub fn new() -> Self {
        CollaborationGraph {
            collaborations: OpenAddressingMap::new(),
            adjacency: OpenAddressingMap::new(),
        }
    }

    /// Records that `a` and `b` appear together in `movie`. Called once per
    /// unordered cast pair on load. Self-pairs are ignored.
    pub fn add_collaboration(&mut self, movie: &Rc<Movie>, a: &Person, b: &Person) {
        if a == b {
            return;
        }

        let key = PairKey::new(a, b);
        let collaboration = self
            .collaborations
            .get_or_insert_with(key.clone(), &mut || {
                Collaboration::new(a.clone(), b.clone())
            });
        collaboration.add_movie(movie.clone());

        self.adjacency
            .get_or_insert_with(a.key(), &mut DynamicArray::new)
            .binary_insert(key.clone(), &pair_order);
        self.adjacency
            .get_or_insert_with(b.key(), &mut DynamicArray::new)
            .binary_insert(key, &pair_order);
    }

    /// Retracts `movie` from the pair's collaboration. The collaboration and
    /// its adjacency entries survive while any other shared movie remains;
    /// once the movie set empties, everything about the pair is dropped.
    pub fn remove_collaboration(&mut self, movie: &Rc<Movie>, a: &Person, b: &Person) {
        if a == b {
            return;
        }

        let key = PairKey::new(a, b);
        let emptied = {
            let collaboration = self
                .collaborations
                .get_mut(&key)
                .expect("collaboration missing for a loaded cast pair");
            collaboration.remove_movie(movie);
            collaboration.count_movies() == 0
        };

        if !emptied {
            return;
        }

        self.collaborations.remove(&key);
        for endpoint in [a.key(), b.key()] {
            let drop_entry = {
                let links = self
                    .adjacency
                    .get_mut(&endpoint)
                    .expect("adjacency entry missing for a collaboration endpoint");
                links.binary_remove(&key, &pair_order);
                links.is_empty()
            };
            if drop_entry {
                self.adjacency.remove(&endpoint);
            }
        }
    }

    pub fn clear(&mut self) {
        self.collaborations.clear();
        self.adjacency.clear();
    }

    pub fn count_collaborations(&self) -> usize {
        self.collaborations.len()
    }

    pub fn collaboration_of(&self, a: &Person, b: &Person) -> Option<&Collaboration> {
        self.collaborations.get(&PairKey::new(a, b))
    }

    /// The other endpoint of every collaboration `person` takes part in.
    pub fn direct_collaborators_of(&self, person: &Person) -> Vec<Person> {
        let Some(links) = self.adjacency.get(&person.key()) else {
            return Vec::new();
        };

        links
            .iter()
            .map(|pair| {
                self.collaborations
                    .get(pair)
                    .expect("adjacency references a collaboration missing from the store")
                    .other(person)
                    .clone()
            })
            .collect()
    }

    /// The stored display form of `person`, when the graph knows them.
    /// Someone without collaborations keeps the caller's form.
    fn canonical_endpoint(&self, person: &Person) -> Person {
        let Some(links) = self.adjacency.get(&person.key()) else {
            return person.clone();
        };
        let pair = links.get(0).expect("adjacency entry is never empty");
        let collaboration = self
            .collaborations
            .get(pair)
            .expect("adjacency references a collaboration missing from the store");
        if collaboration.actor_a() == person {
            collaboration.actor_a().clone()
        } else {
            collaboration.actor_b().clone()
        }
    }

    /// Everyone reachable from `person` over collaborations, in FIFO
    /// breadth-first discovery order. The start person is always included,
    /// in the display form the catalog stores.
    pub fn team_of(&self, person: &Person) -> Vec<Person> {
        let mut visited: OpenAddressingMap<NameKey, ()> = OpenAddressingMap::new();
        let mut to_visit = VecDeque::new();
        let mut team = Vec::new();

        visited.put(person.key(), ());
        to_visit.push_back(self.canonical_endpoint(person));

        while let Some(current) = to_visit.pop_front() {
            for collaborator in self.direct_collaborators_of(&current) {
                if !visited.contains(&collaborator.key()) {
                    visited.put(collaborator.key(), ());
                    to_visit.push_back(collaborator);
                }
            }
            team.push(current);
        }

        team
    }

    /// Greedy maximum-weight spanning growth (Prim-style) over the component
    /// containing `person`, weighting each edge by its collaboration score.
    ///
    /// The result keeps every edge that was ever the best-known link for some
    /// node, even when a later edge supersedes it. Deliberately so: this
    /// reproduces the long-standing observable behavior, and downstreams may
    /// rely on seeing the locally-optimal edges.
    pub fn maximize_collaborations_in_the_team_of(&self, person: &Person) -> Vec<Collaboration> {
        let mut best_score: OpenAddressingMap<NameKey, f64> = OpenAddressingMap::new();
        let mut best_edges: OpenAddressingMap<PairKey, Collaboration> = OpenAddressingMap::new();
        let mut queue = BinaryHeap::new();

        // Vote counts are non-negative and a collaboration always holds at
        // least one movie, so every real score beats the seed of 0.
        best_score.put(person.key(), 0.0);
        queue.push(ScoredPerson {
            person: person.clone(),
            score: 0.0,
        });

        while let Some(ScoredPerson { person: current, .. }) = queue.pop() {
            for colleague in self.direct_collaborators_of(&current) {
                let key = PairKey::new(&current, &colleague);
                let collaboration = self
                    .collaborations
                    .get(&key)
                    .expect("adjacency references a collaboration missing from the store");
                let score = collaboration.score();

                let improves = match best_score.get(&colleague.key()) {
                    None => true,
                    // strict: an equal score does not supersede
                    Some(known) => score > *known,
                };

                if improves {
                    best_score.put(colleague.key(), score);
                    queue.push(ScoredPerson {
                        person: colleague.clone(),
                        score,
                    });
                    best_edges.put(key, collaboration.clone());
                }
            }
        }

        best_edges.drain().into_iter().map(|(_, c)| c).collect()
    }
}

impl Default for CollaborationGraph {
    fn default() -> Self {
        Self::new()
    }
}
