//! Operator session state

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared::commerce::ScanLine;

/// Cached display name for one scanned line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CachedName {
    pub name: String,
    pub product_id: Option<i64>,
}

/// Product-name reconciliation cache.
///
/// Scan responses carry product names; subsequent cart reads return ids
/// only. The cache keeps `line item id -> {name, product id}` from scan
/// time so reads can recover names by product id (line ids differ in shape
/// between the write and read paths, so they are useless as lookup keys).
/// A BTreeMap keeps "first match" deterministic: ascending line item id.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductNameCache {
    entries: BTreeMap<i64, CachedName>,
}

impl ProductNameCache {
    pub fn remember(
        &mut self,
        line_item_id: i64,
        name: impl Into<String>,
        product_id: Option<i64>,
    ) {
        self.entries.insert(
            line_item_id,
            CachedName {
                name: name.into(),
                product_id,
            },
        );
    }

    /// Store every named line of a scan response. Lines without an item id
    /// or a name have nothing to contribute and are skipped.
    pub fn remember_scanned(&mut self, lines: &[ScanLine]) {
        for line in lines {
            if let (Some(item_id), Some(name)) = (line.item_id, line.product_name.as_deref()) {
                self.remember(item_id, name, line.product_id);
            }
        }
    }

    /// First cached name recorded against this product id. Entries without
    /// a product id never match.
    pub fn find_by_product(&self, product_id: i64) -> Option<&str> {
        self.entries
            .values()
            .find(|entry| entry.product_id == Some(product_id))
            .map(|entry| entry.name.as_str())
    }

    /// Resolve a display name for a read-side line, falling back to the
    /// deterministic placeholders.
    pub fn display_name(&self, product_id: Option<i64>) -> String {
        match product_id {
            Some(id) => self
                .find_by_product(id)
                .map(str::to_string)
                .unwrap_or_else(|| format!("Product #{}", id)),
            None => "Unknown product".to_string(),
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One operator's session: identity context forwarded on every commerce
/// call, the current cart reference and the name cache. Passed explicitly
/// into every orchestrator operation; the handler layer owns loading and
/// persisting it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorSession {
    pub id: Uuid,
    pub user_id: i64,
    pub shop_id: i64,
    pub station_id: i64,
    pub auth_token: Option<String>,
    current_cart_id: Option<i64>,
    #[serde(default)]
    names: ProductNameCache,
    pub created_at: DateTime<Utc>,
}

impl OperatorSession {
    pub fn new(
        id: Uuid,
        user_id: i64,
        shop_id: i64,
        station_id: i64,
        auth_token: Option<String>,
    ) -> Self {
        Self {
            id,
            user_id,
            shop_id,
            station_id,
            auth_token,
            current_cart_id: None,
            names: ProductNameCache::default(),
            created_at: Utc::now(),
        }
    }

    pub fn token(&self) -> Option<&str> {
        self.auth_token.as_deref()
    }

    pub fn current_cart_id(&self) -> Option<i64> {
        self.current_cart_id
    }

    pub fn has_active_cart(&self) -> bool {
        self.current_cart_id.is_some()
    }

    /// Point the session at a cart. The remote's choice of cart id is
    /// authoritative, so any previous reference is overwritten.
    pub fn set_current_cart(&mut self, cart_id: i64) {
        self.current_cart_id = Some(cart_id);
    }

    pub fn clear_current_cart(&mut self) {
        self.current_cart_id = None;
    }

    pub fn names(&self) -> &ProductNameCache {
        &self.names
    }

    pub fn names_mut(&mut self) -> &mut ProductNameCache {
        &mut self.names
    }
}
