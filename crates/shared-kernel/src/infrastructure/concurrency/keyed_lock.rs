// crates/shared-kernel/src/infrastructure/concurrency/keyed_lock.rs

//! # KeyedLock - Exclusion mutuelle par clé
//!
//! Sérialise les opérations asynchrones qui portent sur la même clé, tout en
//! laissant les clés distinctes s'exécuter en parallèle. Utilisé pour garder
//! une seule création de profil en vol par username : le premier appelant fait
//! le travail, les suivants retrouvent le résultat en base une fois le verrou
//! relâché.
//!
//! Les cellules sont retirées de la map dès qu'elles n'ont plus de waiter,
//! la map ne grandit donc pas avec le nombre de clés vues.

use std::future::Future;
use std::hash::Hash;
use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::Mutex;

pub struct KeyedLock<K> {
    cells: DashMap<K, Arc<Mutex<()>>>,
}

impl<K> Default for KeyedLock<K>
where
    K: Eq + Hash + Clone,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> KeyedLock<K>
where
    K: Eq + Hash + Clone,
{
    pub fn new() -> Self {
        Self {
            cells: DashMap::new(),
        }
    }

    /// Exécute `op` en détenant le verrou associé à `key`.
    pub async fn run<T, F, Fut>(&self, key: K, op: F) -> T
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = T>,
    {
        // Check-and-insert atomique ; la référence d'entrée est relâchée
        // avant le .await pour ne pas bloquer les autres clés du shard.
        let cell = self.cells.entry(key.clone()).or_default().clone();

        let guard = cell.lock().await;
        let out = op().await;
        drop(guard);

        // 2 références = la map + notre clone local : plus aucun waiter
        self.cells.remove_if(&key, |_, c| Arc::strong_count(c) <= 2);

        out
    }
}
