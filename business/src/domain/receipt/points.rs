use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};

use super::model::Receipt;

const ROUND_DOLLAR_POINTS: u64 = 50;
const QUARTER_MULTIPLE_POINTS: u64 = 25;
const QUARTER: f64 = 0.25;
const POINTS_PER_ITEM_PAIR: u64 = 5;
const DESCRIPTION_LENGTH_DIVISOR: usize = 3;
const DESCRIPTION_PRICE_MULTIPLIER: f64 = 0.2;
const ODD_DAY_POINTS: u64 = 6;
const AFTERNOON_POINTS: u64 = 10;
const AFTERNOON_START_HOUR: u32 = 14;
const AFTERNOON_END_HOUR: u32 = 16;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";
// '9' stands for any ASCII digit; chrono alone accepts unpadded fields.
const DATE_SHAPE: &str = "9999-99-99";
const TIME_SHAPE: &str = "99:99";

/// A field that could not be interpreted while scoring.
/// The rule it feeds contributes nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringAnomaly {
    UnparseableTotal(String),
    UnparseablePrice(String),
    UnparseableDate(String),
    UnparseableTime(String),
}

impl std::fmt::Display for ScoringAnomaly {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoringAnomaly::UnparseableTotal(v) => write!(f, "unparseable total {:?}", v),
            ScoringAnomaly::UnparseablePrice(v) => write!(f, "unparseable item price {:?}", v),
            ScoringAnomaly::UnparseableDate(v) => write!(f, "unparseable purchase date {:?}", v),
            ScoringAnomaly::UnparseableTime(v) => write!(f, "unparseable purchase time {:?}", v),
        }
    }
}

/// Per-rule contributions for a receipt.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointsBreakdown {
    pub retailer_name: u64,
    pub round_dollar_total: u64,
    pub quarter_multiple_total: u64,
    pub item_pairs: u64,
    pub item_descriptions: u64,
    pub odd_purchase_day: u64,
    pub afternoon_purchase: u64,
    pub anomalies: Vec<ScoringAnomaly>,
}

impl PointsBreakdown {
    pub fn total(&self) -> u64 {
        [
            self.round_dollar_total,
            self.quarter_multiple_total,
            self.item_pairs,
            self.item_descriptions,
            self.odd_purchase_day,
            self.afternoon_purchase,
        ]
        .into_iter()
        .fold(self.retailer_name, u64::saturating_add)
    }
}

/// Calculates the points awarded for a receipt.
pub fn calculate_points(receipt: &Receipt) -> u64 {
    breakdown(receipt).total()
}

/// Applies every rule to the receipt and records what each one contributed.
///
/// Business rules:
/// - One point per character in the retailer name (all characters count)
/// - 50 points if the total has no cents
/// - 25 points if the total is a multiple of 0.25
/// - 5 points for every two items
/// - ceil(price * 0.2) for each item whose trimmed description length is a multiple of 3
/// - 6 points if the purchase day is odd
/// - 10 points if the purchase time is from 14:00 up to (not including) 16:00
///
/// Fields that fail to parse never fail the calculation; they are reported
/// in `anomalies` and their rule adds nothing.
pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    let mut result = PointsBreakdown {
        retailer_name: retailer_name_points(&receipt.retailer),
        item_pairs: item_pair_points(receipt.items.len()),
        ..Default::default()
    };

    match parse_amount(&receipt.total) {
        Some(total) => {
            result.round_dollar_total = round_dollar_points(total);
            result.quarter_multiple_total = quarter_multiple_points(total);
        }
        None => result
            .anomalies
            .push(ScoringAnomaly::UnparseableTotal(receipt.total.clone())),
    }

    for item in &receipt.items {
        if !description_qualifies(&item.short_description) {
            continue;
        }
        match parse_amount(&item.price) {
            Some(price) => {
                result.item_descriptions = result
                    .item_descriptions
                    .saturating_add(description_price_points(price))
            }
            None => result
                .anomalies
                .push(ScoringAnomaly::UnparseablePrice(item.price.clone())),
        }
    }

    match parse_date(&receipt.purchase_date) {
        Some(date) => result.odd_purchase_day = odd_day_points(date.day()),
        None => result
            .anomalies
            .push(ScoringAnomaly::UnparseableDate(receipt.purchase_date.clone())),
    }

    match parse_time(&receipt.purchase_time) {
        Some(time) => result.afternoon_purchase = afternoon_points(time.hour()),
        None => result
            .anomalies
            .push(ScoringAnomaly::UnparseableTime(receipt.purchase_time.clone())),
    }

    result
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn has_shape(raw: &str, shape: &str) -> bool {
    raw.len() == shape.len()
        && raw.bytes().zip(shape.bytes()).all(|(c, s)| match s {
            b'9' => c.is_ascii_digit(),
            _ => c == s,
        })
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if !has_shape(raw, DATE_SHAPE) {
        return None;
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT).ok()
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    if !has_shape(raw, TIME_SHAPE) {
        return None;
    }
    NaiveTime::parse_from_str(raw, TIME_FORMAT).ok()
}

pub fn retailer_name_points(retailer: &str) -> u64 {
    retailer.chars().count() as u64
}

pub fn round_dollar_points(total: f64) -> u64 {
    if total == total.floor() {
        ROUND_DOLLAR_POINTS
    } else {
        0
    }
}

/// Checked with the floating-point remainder of the parsed total.
pub fn quarter_multiple_points(total: f64) -> u64 {
    if total % QUARTER == 0.0 {
        QUARTER_MULTIPLE_POINTS
    } else {
        0
    }
}

pub fn item_pair_points(item_count: usize) -> u64 {
    (item_count / 2) as u64 * POINTS_PER_ITEM_PAIR
}

/// Empty (or all-whitespace) descriptions have length 0 and qualify.
pub fn description_qualifies(short_description: &str) -> bool {
    short_description.trim().chars().count() % DESCRIPTION_LENGTH_DIVISOR == 0
}

pub fn description_price_points(price: f64) -> u64 {
    (price * DESCRIPTION_PRICE_MULTIPLIER).ceil().max(0.0) as u64
}

pub fn odd_day_points(day: u32) -> u64 {
    if day % 2 == 1 { ODD_DAY_POINTS } else { 0 }
}

pub fn afternoon_points(hour: u32) -> u64 {
    if (AFTERNOON_START_HOUR..AFTERNOON_END_HOUR).contains(&hour) {
        AFTERNOON_POINTS
    } else {
        0
    }
}
