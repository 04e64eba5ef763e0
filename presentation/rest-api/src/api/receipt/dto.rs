use poem_openapi::Object;

use business::domain::receipt::model::{NewReceiptProps, Receipt, ReceiptItem};

/// Missing fields decode as empty values; malformed ones only cost points.
#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ProcessReceiptRequest {
    /// Retailer or store name
    #[oai(default)]
    pub retailer: String,
    /// Purchase date, `YYYY-MM-DD`
    #[oai(default)]
    pub purchase_date: String,
    /// Purchase time, 24-hour `HH:MM`
    #[oai(default)]
    pub purchase_time: String,
    /// Purchased items
    #[oai(default)]
    pub items: Vec<ReceiptItemRequest>,
    /// Total amount paid, e.g. "35.35"
    #[oai(default)]
    pub total: String,
}

#[derive(Debug, Clone, Object)]
#[oai(rename_all = "camelCase")]
pub struct ReceiptItemRequest {
    /// Short product description
    #[oai(default)]
    pub short_description: String,
    /// Item price, e.g. "6.49"
    #[oai(default)]
    pub price: String,
}

impl From<ReceiptItemRequest> for ReceiptItem {
    fn from(item: ReceiptItemRequest) -> Self {
        ReceiptItem::new(item.short_description, item.price)
    }
}

impl From<ProcessReceiptRequest> for Receipt {
    fn from(request: ProcessReceiptRequest) -> Self {
        Receipt::new(NewReceiptProps {
            retailer: request.retailer,
            purchase_date: request.purchase_date,
            purchase_time: request.purchase_time,
            items: request.items.into_iter().map(|i| i.into()).collect(),
            total: request.total,
        })
    }
}

#[derive(Debug, Clone, Object)]
pub struct ProcessReceiptResponseBody {
    /// Identifier to query points with
    pub id: String,
}

#[derive(Debug, Clone, Object)]
pub struct PointsResponseBody {
    /// Points awarded to the receipt
    pub points: u64,
}
