//! Transactional email content
//!
//! Rendered HTML for the two post-payment emails: the customer receipt
//! and the admin alert. Keep the markup inline and simple; the provider
//! handles delivery.

use shared::models::{BusinessDetails, SelectionEntry, Totals};

/// Customer receipt: subject + html body
pub fn receipt(
    business: &BusinessDetails,
    entries: &[SelectionEntry],
    totals: &Totals,
    payment_id: &str,
) -> (String, String) {
    let subject = "Order Confirmation - Zboost".to_string();
    let html = format!(
        "<h2>Thank you, {name}!</h2>\
         <p>We have received your advance payment of <strong>₹{advance}</strong>.</p>\
         {items}\
         <p>Project total: <strong>₹{total}</strong></p>\
         <p>Payment reference: {payment_id}</p>\
         <p>Our team will reach out within one business day to kick things off.</p>",
        name = business.business_name,
        advance = totals.advance_amount,
        items = line_items(entries),
        total = totals.total,
        payment_id = payment_id,
    );
    (subject, html)
}

/// Admin alert: subject + html body
pub fn admin_alert(
    business: &BusinessDetails,
    entries: &[SelectionEntry],
    totals: &Totals,
) -> (String, String) {
    let subject = format!("New Order: {}", business.business_name);
    let website = business.website.as_deref().unwrap_or("-");
    let html = format!(
        "<h2>New paid onboarding</h2>\
         <p><strong>{name}</strong><br>\
         {email} / {phone}<br>\
         Website: {website}</p>\
         {items}\
         <p>Total ₹{total}, advance received ₹{advance}</p>",
        name = business.business_name,
        email = business.email,
        phone = business.phone,
        website = website,
        items = line_items(entries),
        total = totals.total,
        advance = totals.advance_amount,
    );
    (subject, html)
}

/// Selected services as a two-column table
fn line_items(entries: &[SelectionEntry]) -> String {
    let mut rows = String::new();
    for entry in entries {
        rows.push_str(&format!(
            "<tr><td>{}</td><td align=\"right\">₹{}</td></tr>",
            entry.name(),
            entry.price()
        ));
    }
    format!("<table width=\"100%\">{rows}</table>")
}
