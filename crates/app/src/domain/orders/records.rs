//! Order Records

use dbesto::{
    CatalogItemUuid, CustomerRef, OrderLine, OrderRecord, OrderSnapshot, OrderStatus, OrderUuid,
};
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;
use uuid::Uuid;

use crate::store::lenient;

/// Order document as stored in the `orders` collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct OrderDocument {
    pub uuid: Uuid,
    pub lines: Vec<OrderLineDocument>,

    #[serde(deserialize_with = "lenient::amount")]
    pub total_amount: u64,

    pub submitted_at: Timestamp,
    pub status: Option<String>,
    pub customer_id: String,
    pub customer_email: String,
}

impl Default for OrderDocument {
    fn default() -> Self {
        Self {
            uuid: Uuid::nil(),
            lines: Vec::new(),
            total_amount: 0,
            submitted_at: Timestamp::UNIX_EPOCH,
            status: None,
            customer_id: String::new(),
            customer_email: String::new(),
        }
    }
}

/// Line of an [`OrderDocument`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct OrderLineDocument {
    pub item: Uuid,
    pub title: String,

    #[serde(deserialize_with = "lenient::amount")]
    pub price: u64,

    #[serde(deserialize_with = "lenient::count")]
    pub quantity: u32,

    #[serde(deserialize_with = "lenient::amount")]
    pub line_total: u64,
}

/// Why a stored order document could not be read back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UnreadableOrder {
    MissingId,
    UnknownStatus(String),
}

impl OrderDocument {
    /// A missing status reads as pending; an unrecognised one is rejected.
    pub(crate) fn into_record(self) -> Result<OrderRecord, UnreadableOrder> {
        if self.uuid.is_nil() {
            return Err(UnreadableOrder::MissingId);
        }

        let status = match self.status {
            Some(status) => status
                .parse::<OrderStatus>()
                .map_err(|_| UnreadableOrder::UnknownStatus(status))?,
            None => OrderStatus::Pending,
        };

        Ok(OrderRecord {
            uuid: OrderUuid::from_uuid(self.uuid),
            snapshot: OrderSnapshot {
                lines: self.lines.into_iter().map(OrderLine::from).collect(),
                total_amount: self.total_amount,
                submitted_at: self.submitted_at,
            },
            status,
            customer: CustomerRef {
                uid: self.customer_id,
                email: self.customer_email,
            },
        })
    }
}

impl From<&OrderRecord> for OrderDocument {
    fn from(record: &OrderRecord) -> Self {
        Self {
            uuid: record.uuid.into_uuid(),
            lines: record
                .snapshot
                .lines
                .iter()
                .map(OrderLineDocument::from)
                .collect(),
            total_amount: record.snapshot.total_amount,
            submitted_at: record.snapshot.submitted_at,
            status: Some(record.status.as_str().to_string()),
            customer_id: record.customer.uid.clone(),
            customer_email: record.customer.email.clone(),
        }
    }
}

impl From<OrderLineDocument> for OrderLine {
    fn from(line: OrderLineDocument) -> Self {
        Self {
            item: CatalogItemUuid::from_uuid(line.item),
            title: line.title,
            price: line.price,
            quantity: line.quantity,
            line_total: line.line_total,
        }
    }
}

impl From<&OrderLine> for OrderLineDocument {
    fn from(line: &OrderLine) -> Self {
        Self {
            item: line.item.into_uuid(),
            title: line.title.clone(),
            price: line.price,
            quantity: line.quantity,
            line_total: line.line_total,
        }
    }
}

/// Read an `orders` listing one document at a time, skipping documents that
/// cannot be read or carry no usable id or status.
pub(crate) fn order_records(documents: Vec<Value>) -> Vec<OrderRecord> {
    documents
        .into_iter()
        .filter_map(|value| {
            let document = serde_json::from_value::<OrderDocument>(value)
                .inspect_err(|error| warn!(%error, "skipping unreadable order document"))
                .ok()?;

            let uuid = document.uuid;

            document
                .into_record()
                .inspect_err(|reason| warn!(%uuid, ?reason, "skipping unreadable order"))
                .ok()
        })
        .collect()
}

/// Body of a status update.
#[derive(Debug, Serialize)]
pub(crate) struct StatusPatch {
    pub status: &'static str,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn reads_a_full_document() -> TestResult {
        let uuid = Uuid::now_v7();
        let item = Uuid::now_v7();

        let document: OrderDocument = serde_json::from_value(json!({
            "uuid": uuid,
            "lines": [
                { "item": item, "title": "Americano", "price": 1000, "quantity": 2, "lineTotal": 2000 }
            ],
            "totalAmount": 2000,
            "submittedAt": "2026-10-18T09:30:00Z",
            "status": "completed",
            "customerId": "user-1",
            "customerEmail": "ana@example.com",
        }))?;

        let record = document.into_record().map_err(|e| format!("{e:?}"))?;

        assert_eq!(record.uuid.into_uuid(), uuid);
        assert_eq!(record.status, OrderStatus::Completed);
        assert_eq!(record.snapshot.total_amount, 2_000);
        assert_eq!(record.snapshot.submitted_at, "2026-10-18T09:30:00Z".parse::<Timestamp>()?);
        assert_eq!(record.customer.email, "ana@example.com");
        assert_eq!(
            record.snapshot.lines.first().map(|line| line.item.into_uuid()),
            Some(item)
        );

        Ok(())
    }

    #[test]
    fn missing_status_reads_as_pending() -> TestResult {
        let document: OrderDocument = serde_json::from_value(json!({ "uuid": Uuid::now_v7() }))?;

        let record = document.into_record().map_err(|e| format!("{e:?}"))?;

        assert_eq!(record.status, OrderStatus::Pending);
        assert_eq!(record.snapshot.submitted_at, Timestamp::UNIX_EPOCH);
        assert!(record.snapshot.lines.is_empty());

        Ok(())
    }

    #[test]
    fn unknown_status_is_rejected() -> TestResult {
        let document: OrderDocument = serde_json::from_value(json!({
            "uuid": Uuid::now_v7(),
            "status": "shipped",
        }))?;

        assert_eq!(
            document.into_record(),
            Err(UnreadableOrder::UnknownStatus("shipped".to_string()))
        );

        Ok(())
    }

    #[test]
    fn missing_id_is_rejected() -> TestResult {
        let document: OrderDocument = serde_json::from_value(json!({ "totalAmount": 10 }))?;

        assert_eq!(document.into_record(), Err(UnreadableOrder::MissingId));

        Ok(())
    }

    #[test]
    fn serializes_with_camel_case_names() -> TestResult {
        let document = OrderDocument {
            uuid: Uuid::now_v7(),
            total_amount: 4_500,
            status: Some("pending".to_string()),
            ..OrderDocument::default()
        };

        let value = serde_json::to_value(&document)?;

        assert_eq!(value["totalAmount"], json!(4500));
        assert_eq!(value["status"], json!("pending"));
        assert!(value.get("submittedAt").is_some(), "submittedAt missing");

        Ok(())
    }

    #[test]
    fn listing_keeps_readable_documents_around_bad_ones() {
        let pending = Uuid::now_v7();
        let negative_total = Uuid::now_v7();

        let records = order_records(vec![
            json!({ "uuid": pending, "status": "pending" }),
            json!({ "uuid": negative_total, "totalAmount": -1 }),
            json!({ "uuid": Uuid::now_v7(), "status": "shipped" }),
            json!({ "uuid": Uuid::now_v7(), "submittedAt": "yesterday" }),
            json!({ "status": "pending" }),
            json!(42),
        ]);

        let uuids: Vec<_> = records.iter().map(|record| record.uuid.into_uuid()).collect();

        assert_eq!(uuids, [pending, negative_total]);
        assert_eq!(
            records.get(1).map(|record| record.snapshot.total_amount),
            Some(0)
        );
    }

    #[test]
    fn line_numbers_are_read_leniently() -> TestResult {
        let document: OrderDocument = serde_json::from_value(json!({
            "uuid": Uuid::now_v7(),
            "lines": [
                { "item": Uuid::now_v7(), "title": "Latte", "price": "4500", "quantity": "2", "lineTotal": 9000 },
                { "item": Uuid::now_v7(), "title": "Mocha", "price": -5, "quantity": null },
            ],
            "totalAmount": "9000",
        }))?;

        let record = document.into_record().map_err(|e| format!("{e:?}"))?;
        let lines: Vec<_> = record
            .snapshot
            .lines
            .iter()
            .map(|line| (line.price, line.quantity, line.line_total))
            .collect();

        assert_eq!(lines, [(4_500, 2, 9_000), (0, 0, 0)]);
        assert_eq!(record.snapshot.total_amount, 9_000);

        Ok(())
    }
}
