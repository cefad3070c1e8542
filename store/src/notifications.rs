//! # Notifications store
//!
//! An ordered, most-recent-first list of notification records with per-entry
//! read state. Session-only: unlike favorites and the session user, nothing
//! here is persisted: a reload starts again from the seeded samples.
//!
//! Ids are assigned from a monotonic counter starting above the seed ids, so
//! [`add`](NotificationsStore::add) can never collide within a session.
//! The unread count is recomputed from the list on every call; there is no
//! separate counter to drift out of sync.

use serde::{Deserialize, Serialize};

use crate::models::ItemId;

/// What a notification is about. `Trending` is the only variant that points
/// at an item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum NotificationKind {
    Trending {
        #[serde(rename = "itemId")]
        item_id: ItemId,
        #[serde(skip_serializing_if = "Option::is_none")]
        image: Option<String>,
    },
    Update,
    System,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub title: String,
    pub message: String,
    /// Display string ("1 hour ago"), not a sortable timestamp.
    pub date: String,
    pub read: bool,
    #[serde(flatten)]
    pub kind: NotificationKind,
}

/// A notification as submitted by a user action, before the store assigns
/// `id` and `read`.
#[derive(Clone, Debug, PartialEq)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub date: String,
    pub kind: NotificationKind,
}

pub struct NotificationsStore {
    items: Vec<Notification>,
    next_id: u64,
}

impl NotificationsStore {
    /// A store seeded with the fixed sample records.
    pub fn new() -> Self {
        let items = sample_notifications();
        let next_id = items.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        Self { items, next_id }
    }

    /// An empty store. Used by tests that care about exact contents.
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Assign the next id, mark unread, prepend. Returns the new entry's id.
    pub fn add(&mut self, new: NewNotification) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.insert(
            0,
            Notification {
                id,
                title: new.title,
                message: new.message,
                date: new.date,
                read: false,
                kind: new.kind,
            },
        );
        id
    }

    /// Mark one entry read. No-op if the id is absent.
    pub fn mark_as_read(&mut self, id: u64) {
        if let Some(entry) = self.items.iter_mut().find(|n| n.id == id) {
            entry.read = true;
        }
    }

    /// Mark every entry read.
    pub fn mark_all_as_read(&mut self) {
        for entry in &mut self.items {
            entry.read = true;
        }
    }

    /// Remove one entry. No-op if the id is absent.
    pub fn clear(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    /// Live recomputation over the current list.
    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Entries, most recent first.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }
}

impl Default for NotificationsStore {
    fn default() -> Self {
        Self::new()
    }
}

fn sample_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: 1,
            title: "New trending item!".to_string(),
            message: "MacBook Pro is now trending in Electronics category".to_string(),
            date: "1 hour ago".to_string(),
            read: false,
            kind: NotificationKind::Trending {
                item_id: ItemId::Number(1),
                image: Some(
                    "https://images.unsplash.com/photo-1517336714731-489689fd1ca8?auto=format&fit=crop&w=2626&q=80"
                        .to_string(),
                ),
            },
        },
        Notification {
            id: 2,
            title: "Welcome to CampusMarket!".to_string(),
            message: "Start buying and selling items with your fellow students".to_string(),
            date: "1 day ago".to_string(),
            read: false,
            kind: NotificationKind::System,
        },
        Notification {
            id: 3,
            title: "New in Books category".to_string(),
            message: "Check out the latest textbooks added this week".to_string(),
            date: "2 days ago".to_string(),
            read: false,
            kind: NotificationKind::Update,
        },
        Notification {
            id: 4,
            title: "Verification complete".to_string(),
            message: "Your account has been successfully verified".to_string(),
            date: "3 days ago".to_string(),
            read: true,
            kind: NotificationKind::System,
        },
        Notification {
            id: 5,
            title: "Bluetooth Headphones trending".to_string(),
            message: "Bluetooth Headphones has become popular in Electronics".to_string(),
            date: "4 hours ago".to_string(),
            read: false,
            kind: NotificationKind::Trending {
                item_id: ItemId::Number(4),
                image: Some(
                    "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?auto=format&fit=crop&w=2670&q=80"
                        .to_string(),
                ),
            },
        },
        Notification {
            id: 6,
            title: "Website Maintenance".to_string(),
            message: "CampusMarket will undergo maintenance this weekend".to_string(),
            date: "5 hours ago".to_string(),
            read: false,
            kind: NotificationKind::Update,
        },
        Notification {
            id: 7,
            title: "Psychology Notes Popular".to_string(),
            message: "Psychology 101 Notes is getting lots of views".to_string(),
            date: "1 day ago".to_string(),
            read: false,
            kind: NotificationKind::Trending {
                item_id: ItemId::Number(6),
                image: Some(
                    "https://images.unsplash.com/photo-1532153955177-f59af40d6472?auto=format&fit=crop&w=2670&q=80"
                        .to_string(),
                ),
            },
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trending(n: u64) -> NewNotification {
        NewNotification {
            title: format!("Item {n} trending"),
            message: format!("Item {n} is getting attention"),
            date: "Just now".to_string(),
            kind: NotificationKind::Trending {
                item_id: ItemId::Number(n),
                image: None,
            },
        }
    }

    #[test]
    fn seeded_store_matches_samples() {
        let store = NotificationsStore::new();
        assert_eq!(store.items().len(), 7);
        // Only the "Verification complete" sample starts read.
        assert_eq!(store.unread_count(), 6);
    }

    #[test]
    fn add_prepends_unread_with_fresh_id() {
        let mut store = NotificationsStore::new();
        let id = store.add(trending(42));

        let first = &store.items()[0];
        assert_eq!(first.id, id);
        assert!(!first.read);
        assert_eq!(first.title, "Item 42 trending");

        // Fresh id never collides with a seed id.
        assert!(store.items()[1..].iter().all(|n| n.id != id));
    }

    #[test]
    fn ids_never_collide_within_a_session() {
        let mut store = NotificationsStore::new();
        let mut seen: std::collections::HashSet<u64> =
            store.items().iter().map(|n| n.id).collect();

        for n in 0..100 {
            let id = store.add(trending(n));
            assert!(seen.insert(id), "id {id} was assigned twice");
        }
    }

    #[test]
    fn unread_count_equals_live_recomputation() {
        let mut store = NotificationsStore::empty();

        let a = store.add(trending(1));
        let b = store.add(trending(2));
        store.add(trending(3));
        assert_eq!(store.unread_count(), 3);

        store.mark_as_read(a);
        assert_eq!(store.unread_count(), 2);

        // Marking the same entry again changes nothing.
        store.mark_as_read(a);
        assert_eq!(store.unread_count(), 2);

        store.clear(b);
        assert_eq!(store.unread_count(), 1);

        store.mark_all_as_read();
        assert_eq!(store.unread_count(), 0);

        let recount = store.items().iter().filter(|n| !n.read).count();
        assert_eq!(store.unread_count(), recount);
    }

    #[test]
    fn absent_ids_are_silent_noops() {
        let mut store = NotificationsStore::empty();
        store.add(trending(1));

        store.mark_as_read(999);
        store.clear(999);

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.unread_count(), 1);
    }

    #[test]
    fn list_order_is_reverse_chronological() {
        let mut store = NotificationsStore::empty();
        let first = store.add(trending(1));
        let second = store.add(trending(2));
        let third = store.add(trending(3));

        let ids: Vec<u64> = store.items().iter().map(|n| n.id).collect();
        assert_eq!(ids, vec![third, second, first]);
    }

    #[test]
    fn kind_serializes_tagged() {
        let n = Notification {
            id: 9,
            title: "t".to_string(),
            message: "m".to_string(),
            date: "now".to_string(),
            read: false,
            kind: NotificationKind::Trending {
                item_id: ItemId::Number(3),
                image: None,
            },
        };
        let json = serde_json::to_string(&n).unwrap();
        assert!(json.contains(r#""type":"trending""#));
        assert!(json.contains(r#""itemId":3"#));

        let system = serde_json::to_string(&NotificationKind::System).unwrap();
        assert_eq!(system, r#"{"type":"system"}"#);
    }
}
