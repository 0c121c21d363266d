//! Collector - walks the Federal Register listing and rewrites the orders file.

use chrono::Local;
use federal_register_client::{DocumentQuery, FederalRegisterClient};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::common::{empty_object, OrderRecord};
use crate::kernel::{OrderStore, StoreError};

pub struct Collector {
    client: FederalRegisterClient,
    store: OrderStore,
}

impl Collector {
    pub fn new(client: FederalRegisterClient, store: OrderStore) -> Self {
        Self { client, store }
    }

    pub fn store(&self) -> &OrderStore {
        &self.store
    }

    /// Every executive order signed on or after `start_date`, in listing order.
    ///
    /// Pagination stops at the first empty page or the first failed page.
    /// A failed page truncates the collection; there is no retry.
    pub async fn fetch_all_orders(&self, start_date: &str) -> Vec<Value> {
        let query = DocumentQuery::executive_orders_since(start_date);
        let mut orders = Vec::new();
        let mut page = 1;

        loop {
            match self.client.list_documents(&query, page).await {
                Ok(listing) if listing.is_empty() => {
                    debug!(page, "Empty listing page, stopping");
                    break;
                }
                Ok(listing) => orders.extend(listing.results),
                Err(e) => {
                    warn!(page, error = %e, "Listing page failed, stopping pagination");
                    break;
                }
            }
            page += 1;
        }

        orders
    }

    /// Detail payload for one document, `{}` when the fetch fails.
    pub async fn fetch_details(&self, document_number: &str) -> Value {
        match self.client.document(document_number).await {
            Ok(detail) => detail,
            Err(e) => {
                debug!(document_number, error = %e, "Detail fetch failed, using empty detail");
                empty_object()
            }
        }
    }

    /// Fetch the listing, enrich each entry with its details, and replace the
    /// orders file. Returns the number of records written.
    pub async fn save_orders(&self, start_date: &str) -> Result<usize, StoreError> {
        let orders = self.fetch_all_orders(start_date).await;
        let mut records = Vec::with_capacity(orders.len());

        for order in orders {
            let document_number = order
                .get("document_number")
                .and_then(Value::as_str)
                .map(str::to_string);

            let details = match &document_number {
                Some(number) => self.fetch_details(number).await,
                None => {
                    warn!("Listing entry without document_number, skipping detail fetch");
                    empty_object()
                }
            };

            records.push(OrderRecord::collected(order, details, Local::now().naive_local()));

            if let Some(number) = document_number {
                info!("Processed order {}", number);
            }
        }

        self.store.put_all(&records).await?;
        info!(
            "Saved {} orders to {}",
            records.len(),
            self.store.path().display()
        );

        Ok(records.len())
    }
}
