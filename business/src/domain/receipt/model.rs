/// A line on a receipt. Fields are kept as submitted; the price is only
/// interpreted when points are calculated.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReceiptItem {
    pub short_description: String,
    pub price: String,
}

impl ReceiptItem {
    pub fn new(short_description: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
            price: price.into(),
        }
    }
}

/// A submitted purchase receipt.
///
/// No validation happens on construction: malformed dates, times or amounts
/// are accepted and simply earn fewer points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Receipt {
    pub retailer: String,
    /// `YYYY-MM-DD`
    pub purchase_date: String,
    /// `HH:MM`, 24h clock
    pub purchase_time: String,
    pub items: Vec<ReceiptItem>,
    pub total: String,
}

pub struct NewReceiptProps {
    pub retailer: String,
    pub purchase_date: String,
    pub purchase_time: String,
    pub items: Vec<ReceiptItem>,
    pub total: String,
}

impl Receipt {
    pub fn new(props: NewReceiptProps) -> Self {
        Self {
            retailer: props.retailer,
            purchase_date: props.purchase_date,
            purchase_time: props.purchase_time,
            items: props.items,
            total: props.total,
        }
    }
}
