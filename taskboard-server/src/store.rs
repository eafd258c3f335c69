//! In-memory entity store
//!
//! Each entity type lives in its own table guarded by its own
//! `parking_lot::RwLock`, so reads of one type never wait on writes to
//! another. Locks are never held across tables.
//!
//! The store does no validation and enforces no cross-table consistency:
//! deleting a board leaves its lists in place, and deleting a list leaves
//! its cards in place.

use std::collections::HashMap;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::models::{Board, Card, List};

/// One keyed collection behind a read/write lock.
#[derive(Debug)]
struct Table<T> {
    rows: RwLock<HashMap<Uuid, T>>,
}

impl<T> Default for Table<T> {
    fn default() -> Self {
        Self {
            rows: RwLock::new(HashMap::new()),
        }
    }
}

impl<T: Clone> Table<T> {
    /// Insert, silently replacing any row with the same id.
    fn insert(&self, id: Uuid, row: T) {
        self.rows.write().insert(id, row);
    }

    fn get(&self, id: &Uuid) -> Option<T> {
        self.rows.read().get(id).cloned()
    }

    fn snapshot(&self) -> Vec<T> {
        self.rows.read().values().cloned().collect()
    }

    /// Linear scan; there is no secondary index.
    fn filter(&self, pred: impl Fn(&T) -> bool) -> Vec<T> {
        self.rows
            .read()
            .values()
            .filter(|row| pred(row))
            .cloned()
            .collect()
    }

    fn remove(&self, id: &Uuid) -> Option<T> {
        self.rows.write().remove(id)
    }

    fn len(&self) -> usize {
        self.rows.read().len()
    }
}

/// Shared store for boards, lists and cards.
///
/// Handed to the HTTP layer as `Arc<Store>`; there is no global instance.
#[derive(Debug, Default)]
pub struct Store {
    boards: Table<Board>,
    lists: Table<List>,
    cards: Table<Card>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    // Boards

    pub fn create_board(&self, board: Board) {
        self.boards.insert(board.id, board);
    }

    pub fn get_board(&self, id: &Uuid) -> Option<Board> {
        self.boards.get(id)
    }

    pub fn all_boards(&self) -> Vec<Board> {
        self.boards.snapshot()
    }

    /// Remove a board. Returns the removed record, `None` if it was absent.
    pub fn delete_board(&self, id: &Uuid) -> Option<Board> {
        self.boards.remove(id)
    }

    pub fn board_count(&self) -> usize {
        self.boards.len()
    }

    // Lists

    pub fn create_list(&self, list: List) {
        self.lists.insert(list.id, list);
    }

    pub fn get_list(&self, id: &Uuid) -> Option<List> {
        self.lists.get(id)
    }

    pub fn all_lists(&self) -> Vec<List> {
        self.lists.snapshot()
    }

    /// Lists whose `board_id` matches, in no particular order.
    pub fn lists_by_board(&self, board_id: &Uuid) -> Vec<List> {
        self.lists.filter(|list| list.board_id == *board_id)
    }

    pub fn delete_list(&self, id: &Uuid) -> Option<List> {
        self.lists.remove(id)
    }

    pub fn list_count(&self) -> usize {
        self.lists.len()
    }

    // Cards

    pub fn create_card(&self, card: Card) {
        self.cards.insert(card.id, card);
    }

    pub fn get_card(&self, id: &Uuid) -> Option<Card> {
        self.cards.get(id)
    }

    pub fn all_cards(&self) -> Vec<Card> {
        self.cards.snapshot()
    }

    /// Cards whose `list_id` matches, in no particular order.
    pub fn cards_by_list(&self, list_id: &Uuid) -> Vec<Card> {
        self.cards.filter(|card| card.list_id == *list_id)
    }

    pub fn delete_card(&self, id: &Uuid) -> Option<Card> {
        self.cards.remove(id)
    }

    pub fn card_count(&self) -> usize {
        self.cards.len()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::sync::Arc;
    use std::thread;

    use chrono::Utc;

    use super::*;
    use crate::models::{NewBoard, NewCard, NewList};

    fn board(name: &str) -> Board {
        NewBoard {
            name: name.into(),
            ..Default::default()
        }
        .into_board(Utc::now())
    }

    fn list(board_id: Uuid, name: &str) -> List {
        NewList {
            name: name.into(),
            ..Default::default()
        }
        .into_list(board_id, Utc::now())
    }

    fn card(list_id: Uuid, title: &str) -> Card {
        NewCard {
            title: title.into(),
            ..Default::default()
        }
        .into_card(list_id, Utc::now())
    }

    #[test]
    fn create_then_get_round_trips() {
        let store = Store::new();
        let b = board("Sprint");
        store.create_board(b.clone());

        assert_eq!(store.get_board(&b.id), Some(b));
        assert_eq!(store.board_count(), 1);
    }

    #[test]
    fn get_missing_is_none() {
        let store = Store::new();
        assert!(store.get_board(&Uuid::new_v4()).is_none());
        assert!(store.get_list(&Uuid::new_v4()).is_none());
        assert!(store.get_card(&Uuid::new_v4()).is_none());
    }

    #[test]
    fn create_overwrites_on_collision() {
        let store = Store::new();
        let mut b = board("first");
        store.create_board(b.clone());
        b.name = "second".into();
        store.create_board(b.clone());

        assert_eq!(store.board_count(), 1);
        assert_eq!(store.get_board(&b.id).unwrap().name, "second");
    }

    #[test]
    fn delete_is_idempotent() {
        let store = Store::new();
        let b = board("Sprint");
        store.create_board(b.clone());

        assert_eq!(store.delete_board(&b.id), Some(b.clone()));
        assert_eq!(store.delete_board(&b.id), None);
        assert_eq!(store.board_count(), 0);
    }

    #[test]
    fn lists_by_board_filters_on_parent() {
        let store = Store::new();
        let x = Uuid::new_v4();
        let y = Uuid::new_v4();

        let a = list(x, "a");
        let other = list(y, "other");
        let b = list(x, "b");
        store.create_list(a.clone());
        store.create_list(other.clone());
        store.create_list(b.clone());

        let ids: HashSet<Uuid> = store.lists_by_board(&x).into_iter().map(|l| l.id).collect();
        assert_eq!(ids, HashSet::from([a.id, b.id]));
        assert_eq!(store.all_lists().len(), 3);
        assert_eq!(store.lists_by_board(&y), vec![other]);
        assert!(store.lists_by_board(&Uuid::new_v4()).is_empty());
    }

    #[test]
    fn cards_by_list_filters_on_parent() {
        let store = Store::new();
        let l = Uuid::new_v4();
        store.create_card(card(l, "one"));
        store.create_card(card(l, "two"));
        store.create_card(card(Uuid::new_v4(), "elsewhere"));

        assert_eq!(store.cards_by_list(&l).len(), 2);
        assert_eq!(store.all_cards().len(), 3);
    }

    #[test]
    fn no_cascade_on_delete() {
        let store = Store::new();
        let b = board("Sprint");
        let l = list(b.id, "Todo");
        let c = card(l.id, "Task");
        store.create_board(b.clone());
        store.create_list(l.clone());
        store.create_card(c.clone());

        store.delete_board(&b.id);
        assert_eq!(store.lists_by_board(&b.id), vec![l.clone()]);

        store.delete_list(&l.id);
        assert_eq!(store.get_card(&c.id), Some(c.clone()));
        assert_eq!(store.delete_card(&c.id), Some(c));
    }

    #[test]
    fn snapshots_are_detached() {
        let store = Store::new();
        store.create_board(board("a"));
        let snapshot = store.all_boards();
        store.create_board(board("b"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.all_boards().len(), 2);
    }

    #[test]
    fn concurrent_creates_are_not_lost() {
        const THREADS: usize = 8;
        const PER_THREAD: usize = 250;

        let store = Arc::new(Store::new());
        let handles: Vec<_> = (0..THREADS)
            .map(|t| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let mut ids = Vec::with_capacity(PER_THREAD);
                    for i in 0..PER_THREAD {
                        let b = board(&format!("{t}-{i}"));
                        ids.push(b.id);
                        store.create_board(b);
                        // interleave reads on another table
                        let _ = store.lists_by_board(&ids[0]);
                    }
                    ids
                })
            })
            .collect();

        let ids: Vec<Uuid> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();

        assert_eq!(store.board_count(), THREADS * PER_THREAD);
        assert!(ids.iter().all(|id| store.get_board(id).is_some()));
    }
}
