pub mod core;
pub mod map;
pub mod array;
pub mod sort;
pub mod graph;
pub mod persistence;

pub use crate::core::{CatalogConfig, CatalogIndex, CatalogStats, Movie, Person};

/*
┌─────────────────────────────────────────────────────────────────────────────┐
│                         CINEDEX STRUCT ARCHITECTURE                          │
└─────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────────── CORE LAYER ───────────────────────────────────┐
│                                                                              │
│  ┌────────────────────────────────────────────────────────────────────┐    │
│  │                        struct CatalogIndex                          │    │
│  │  ┌──────────────────────────────────────────────────────────────┐ │    │
│  │  │ map_kind: MapKind                // Active store backend     │ │    │
│  │  │ sorter: Sorter                   // Active sort strategy     │ │    │
│  │  │ movies: Box<dyn Store<NameKey, Rc<Movie>>>                   │ │    │
│  │  │ people: Box<dyn Store<NameKey, Person>>                      │ │    │
│  │  │ by_director / by_actor: Box<dyn Store<NameKey, bucket>>      │ │    │
│  │  │ by_year: Box<dyn Store<i32, bucket>>                         │ │    │
│  │  │ by_votes_rank / by_recency_rank: DynamicArray<Rc<Movie>>     │ │    │
│  │  │ by_activity_rank: DynamicArray<Person>                       │ │    │
│  │  │ graph: CollaborationGraph                                    │ │    │
│  │  └──────────────────────────────────────────────────────────────┘ │    │
│  └────────────────────────────────────────────────────────────────────┘    │
│                                                                              │
│  ┌──────────────────┐  ┌──────────────────┐  ┌───────────────────────┐    │
│  │ struct Movie     │  │ struct Person    │  │ struct CatalogConfig  │    │
│  │ • title (id)     │  │ • name (id)      │  │ • map: MapKind        │    │
│  │ • year, votes    │  │ case-insensitive │  │ • sort: SortKind      │    │
│  │ • cast, director │  │ identity         │  └───────────────────────┘    │
│  └──────────────────┘  └──────────────────┘  ┌───────────────────────┐    │
│  ┌──────────────────┐  ┌──────────────────┐  │ struct CatalogStats   │    │
│  │ struct NameKey   │  │ Error/ErrorKind  │  │ • movies, people,     │    │
│  │ • normalized key │  │ • kind + context │  │   collaborations      │    │
│  └──────────────────┘  └──────────────────┘  └───────────────────────┘    │
└──────────────────────────────────────────────────────────────────────────────┘

┌──────────────────────────── STRUCTURE LAYER ────────────────────────────────┐
│                                                                              │
│  ┌─────────────────────────┐  ┌─────────────────────────────────────────┐  │
│  │ trait Store<K, V>       │  │ struct DynamicArray<T>                  │  │
│  │ • put/get/remove/drain  │  │ • append/insert_at/remove_at/slice      │  │
│  │ • object safe           │  │ • sort_with / binary_insert / _remove   │  │
│  └─────────────────────────┘  └─────────────────────────────────────────┘  │
│  ┌─────────────────────────┐  ┌──────────────────────┐  ┌──────────────┐  │
│  │ OpenAddressingMap<K, V> │  │ SortedArrayMap<K, V> │  │ enum Sorter  │  │
│  │ • linear probing        │  │ • parallel vectors   │  │ • Quick(rng) │  │
│  │ • Slot::Tombstone       │  │ • binary search      │  │ • Selection  │  │
│  └─────────────────────────┘  └──────────────────────┘  └──────────────┘  │
└──────────────────────────────────────────────────────────────────────────────┘

┌───────────────────────────── GRAPH LAYER ───────────────────────────────────┐
│                                                                              │
│  ┌──────────────────────────┐  ┌────────────────────────────────────────┐  │
│  │ struct CollaborationGraph│  │ struct Collaboration                   │  │
│  │ • PairKey → Collaboration│  │ • actor_a, actor_b                     │  │
│  │ • name → [PairKey]       │  │ • movies (title-sorted), score()       │  │
│  │ • team_of (BFS)          │  └────────────────────────────────────────┘  │
│  │ • maximize… (Prim-style) │  ┌────────────────────────────────────────┐  │
│  └──────────────────────────┘  │ struct PairKey  // canonical unordered │  │
│                                 └────────────────────────────────────────┘  │
└──────────────────────────────────────────────────────────────────────────────┘

┌────────────────────────── RELATIONSHIPS ────────────────────────────────────┐
│                                                                              │
│  CatalogIndex ──owns──> Store backends ──selected_by──> MapKind             │
│     │                                                                        │
│     ├──owns──> DynamicArray projections ──sorted_by──> Sorter               │
│     │                                                                        │
│     ├──shares──> Rc<Movie> across every index                               │
│     │                                                                        │
│     └──owns──> CollaborationGraph ──aggregates──> Collaboration             │
│                                                                              │
│  persistence ──parses/writes──> Movie ──feeds──> CatalogIndex::load          │
│                                                                              │
└──────────────────────────────────────────────────────────────────────────────┘
*/
