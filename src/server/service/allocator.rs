//! Serial number allocation.
//!
//! A serial number is drawn from a collection's ranges, checked against the active set
//! (inscribed items and reservations younger than a day) and persisted as a new item while
//! the collection's lock is held, so concurrent requests in this process never receive the
//! same number.

use std::{
    collections::{BTreeSet, HashSet},
    sync::Arc,
};

use dashmap::DashMap;
use dioxus_logger::tracing;
use rand::Rng;
use sea_orm::DatabaseConnection;
use tokio::sync::Mutex;

use crate::server::{
    data::{audit::AllocationLogEntry, item::ItemRepository},
    error::{allocator::AllocatorError, ledger::LedgerError, Error},
    model::{
        db::{CollectionModel, ItemModel},
        ledger::SerialRangeBounds,
    },
    service::{audit::AuditLog, ledger::LedgerService},
    util::time::{now, reservation_cutoff},
};

/// Upper bound on random draws per allocation.
const MAX_RANDOM_ATTEMPTS: u64 = 10_000;
/// Largest serial space whose free values may be listed in full.
const MAX_ENUMERATED_SPACE: u64 = 1_000_000;

/// Per-collection allocation locks, shared by all requests of the process.
#[derive(Clone, Default)]
pub struct CollectionLocks {
    locks: Arc<DashMap<i32, Arc<Mutex<()>>>>,
}

impl CollectionLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock guarding allocations for `collection_id`, created on first use.
    pub fn lock_for(&self, collection_id: i32) -> Arc<Mutex<()>> {
        self.locks.entry(collection_id).or_default().clone()
    }
}

/// How serial numbers of a collection are rendered.
#[derive(Clone, Debug, PartialEq)]
pub enum SerialFormat {
    /// One range whose start has 3 or more digits, values padded to 6 digits
    Single(SerialRangeBounds),
    /// One value per range, each padded to 2 digits and concatenated
    Segmented(Vec<SerialRangeBounds>),
}

impl SerialFormat {
    pub fn from_ranges(ranges: Vec<SerialRangeBounds>) -> Self {
        match ranges.as_slice() {
            [range] if range.start >= 100 => Self::Single(*range),
            _ => Self::Segmented(ranges),
        }
    }

    /// Number of distinct draws, `None` on overflow.
    pub fn space(&self) -> Option<u64> {
        match self {
            Self::Single(range) => range.size(),
            Self::Segmented(ranges) => ranges
                .iter()
                .try_fold(1u64, |space, range| space.checked_mul(range.size()?)),
        }
    }

    pub fn draw<R: Rng>(&self, rng: &mut R) -> String {
        match self {
            Self::Single(range) => format!("{:06}", rng.random_range(range.start..=range.end)),
            Self::Segmented(ranges) => ranges
                .iter()
                .map(|range| format!("{:02}", rng.random_range(range.start..=range.end)))
                .collect(),
        }
    }

    /// Every serial number of the format, deduplicated and sorted.
    fn enumerate(&self) -> BTreeSet<String> {
        match self {
            Self::Single(range) => (range.start..=range.end)
                .map(|value| format!("{:06}", value))
                .collect(),
            Self::Segmented(ranges) => {
                let mut serials = vec![String::new()];
                for range in ranges {
                    serials = serials
                        .iter()
                        .flat_map(|prefix| {
                            (range.start..=range.end)
                                .map(move |value| format!("{}{:02}", prefix, value))
                        })
                        .collect();
                }
                serials.into_iter().collect()
            }
        }
    }
}

/// Pick a serial number outside `active`.
///
/// Draws uniformly at random until a free value comes up. Once the active set fills half the
/// space, or the draws run out, the free values are listed and one is chosen uniformly.
/// Returns `None` when nothing is free or the space is too large to list.
pub fn pick_serial<R: Rng>(
    format: &SerialFormat,
    active: &HashSet<String>,
    rng: &mut R,
) -> Option<String> {
    let space = format.space()?;
    let dense = (active.len() as u64).saturating_mul(2) >= space;

    if !dense {
        let attempts = space.saturating_mul(10).min(MAX_RANDOM_ATTEMPTS);
        for _ in 0..attempts {
            let candidate = format.draw(rng);
            if !active.contains(&candidate) {
                return Some(candidate);
            }
        }
    }

    if space > MAX_ENUMERATED_SPACE {
        return None;
    }

    let free: Vec<String> = format
        .enumerate()
        .into_iter()
        .filter(|serial| !active.contains(serial))
        .collect();

    if free.is_empty() {
        return None;
    }

    let index = rng.random_range(0..free.len());
    free.into_iter().nth(index)
}

pub struct SerialAllocator<'a> {
    db: &'a DatabaseConnection,
    locks: &'a CollectionLocks,
}

impl<'a> SerialAllocator<'a> {
    pub fn new(db: &'a DatabaseConnection, locks: &'a CollectionLocks) -> Self {
        Self { db, locks }
    }

    /// Reserve a free serial number for `collection`, returning the created item.
    ///
    /// # Returns
    /// - `Ok(ItemModel)` - Reservation with the allocated serial number
    /// - `Err(Error::LedgerError)` - Collection has no ranges or a malformed range value
    /// - `Err(Error::AllocatorError)` - No free serial number could be found
    /// - `Err(Error::DbErr)` - Loading the active set or inserting the item failed
    pub async fn allocate(&self, collection: &CollectionModel) -> Result<ItemModel, Error> {
        let result = self.allocate_locked(collection).await;

        let entry = match &result {
            Ok(item) => AllocationLogEntry {
                ticker: collection.coin_ticker.clone(),
                collection_id: collection.id,
                sn: Some(item.sn.clone()),
                ok: true,
                error: None,
            },
            Err(e) => AllocationLogEntry {
                ticker: collection.coin_ticker.clone(),
                collection_id: collection.id,
                sn: None,
                ok: false,
                error: Some(e.to_string()),
            },
        };
        AuditLog::new(self.db).record_allocation(entry).await;

        result
    }

    async fn allocate_locked(&self, collection: &CollectionModel) -> Result<ItemModel, Error> {
        let lock = self.locks.lock_for(collection.id);
        let _guard = lock.lock().await;

        let ranges = LedgerService::new(self.db).ranges(collection.id).await?;
        if ranges.is_empty() {
            return Err(LedgerError::NoRanges(collection.id).into());
        }

        let format = SerialFormat::from_ranges(ranges);
        let space = format
            .space()
            .ok_or(LedgerError::SupplyOverflow(collection.id))?;

        let item_repo = ItemRepository::new(self.db);
        let active: HashSet<String> = item_repo
            .get_active_sns(collection.id, reservation_cutoff(now()))
            .await?
            .into_iter()
            .collect();

        let sn = {
            let mut rng = rand::rng();
            pick_serial(&format, &active, &mut rng)
        };

        let Some(sn) = sn else {
            return Err(AllocatorError::RangeExhausted {
                collection_id: collection.id,
                active: active.len(),
                space,
            }
            .into());
        };

        let item = item_repo.create(collection.id, sn, now()).await?;

        tracing::debug!(
            collection_id = collection.id,
            sn = %item.sn,
            "Allocated serial number"
        );

        Ok(item)
    }
}
