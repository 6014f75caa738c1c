//! Display strings for prices and the shareable plain-text estimate.

use chrono::NaiveDate;

use super::delivery::round_trip;
use super::models::{DeliveryFee, Yen};
use super::requests::Selection;
use super::responses::QuoteResult;

const RULE: &str = "━━━━━━━━━━━━━━━━━";

/// Public subsidy per campaign day, billed to the election board rather than the buyer.
pub const PUBLIC_SUBSIDY_PER_DAY: Yen = 16_100;

pub const FREE_LABEL: &str = "無料";
pub const CONSULTATION_LABEL: &str = "要相談";

/// Insert a comma every three digits: `1234567` → `"1,234,567"`.
pub fn group_thousands(amount: Yen) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Inline amount, as used in chips and the estimate text: `¥16,500`.
pub fn yen(amount: Yen) -> String {
    format!("¥{}", group_thousands(amount))
}

/// Price display with a separating space.
///
/// # Examples
/// ```
/// use senkyocar_quote::pricing::labels::format_yen;
///
/// assert_eq!(format_yen(10000), "¥ 10,000");
/// assert_eq!(format_yen(0), "¥ 0");
/// ```
pub fn format_yen(amount: Yen) -> String {
    format!("¥ {}", group_thousands(amount))
}

pub fn format_yen_tax_included(amount: Yen) -> String {
    format!("{}（税込）", format_yen(amount))
}

/// One-way delivery label: free, a price, or consultation. Never conflated.
pub fn delivery_fee_label(fee: DeliveryFee) -> String {
    match fee {
        DeliveryFee::Consultation => CONSULTATION_LABEL.to_string(),
        DeliveryFee::Fee(0) => FREE_LABEL.to_string(),
        DeliveryFee::Fee(amount) => yen(amount),
    }
}

/// Round-trip delivery label.
pub fn delivery_round_trip_label(fee: DeliveryFee) -> String {
    match fee {
        DeliveryFee::Consultation => CONSULTATION_LABEL.to_string(),
        DeliveryFee::Fee(0) => FREE_LABEL.to_string(),
        DeliveryFee::Fee(_) => yen(round_trip(fee)),
    }
}

/// `2026年4月1日`
pub fn format_issue_date(date: NaiveDate) -> String {
    date.format("%Y年%-m月%-d日").to_string()
}

/// Round-trip delivery line of a computed quote: 要相談, 無料, or the yen amount.
pub fn quote_delivery_label(quote: &QuoteResult) -> String {
    if quote.delivery.is_consultation {
        CONSULTATION_LABEL.to_string()
    } else if quote.delivery_price == 0 {
        FREE_LABEL.to_string()
    } else {
        yen(quote.delivery_price)
    }
}

/// Render the plain-text estimate shared over chat, mail, or clipboard.
///
/// # Arguments
/// * `selection` - The selection the quote was computed from
/// * `quote` - The computed quote
/// * `issued_on` - Date printed at the foot of the estimate
pub fn estimate_text(selection: &Selection, quote: &QuoteResult, issued_on: NaiveDate) -> String {
    let delivery = quote_delivery_label(quote);

    let mut lines = vec![
        "【選挙カーレンタルラボ お見積り】".to_string(),
        RULE.to_string(),
        format!("■ 選挙区分: {}", selection.election_category.label()),
        format!("■ 車両クラス: {}", selection.vehicle_class.label()),
        format!("■ 車種: {}", selection.vehicle_type().name()),
        RULE.to_string(),
        "【料金内訳】".to_string(),
        format!("・車両基本料金: {}", yen(quote.subs.car_price)),
        format!("・アンプ: {}", yen(quote.subs.amp_size)),
        format!("・回転灯: {}", yen(quote.subs.signal_light)),
        format!("・登壇台: {}", yen(quote.subs.taking_platform)),
        RULE.to_string(),
        "【オプション小計】".to_string(),
        yen(quote.option_total_price),
    ];

    if quote.options.body_wrapping_consultation {
        lines.push("※ボディラッピングは別途ご相談".to_string());
    }

    lines.extend([
        RULE.to_string(),
        "【配送料金（往復）】".to_string(),
        delivery,
        RULE.to_string(),
        "【合計金額】".to_string(),
        format!("{}（税込）", yen(quote.total_price)),
        RULE.to_string(),
        format!(
            "※公費負担額({}/日)は別途選管へ請求",
            yen(PUBLIC_SUBSIDY_PER_DAY)
        ),
        format!("発行日: {}", format_issue_date(issued_on)),
        String::new(),
        "詳細・お問い合わせはこちら:".to_string(),
        "https://senkyocar-labo.com/".to_string(),
    ]);

    lines.join("\n")
}
