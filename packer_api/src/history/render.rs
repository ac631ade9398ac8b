use packer_history::CalculationRecord;

use crate::calculator::render::escape_html;

pub fn history_fragment(records: &[CalculationRecord]) -> String {
    let mut html = String::from("<div class='history-container'>");
    html.push_str("<h3>Recent Calculations</h3>");

    if records.is_empty() {
        html.push_str("<p>No history yet.</p>");
    } else {
        html.push_str("<table class='history-table'>");
        html.push_str("<tr><th>Date</th><th>Packs</th><th>Amount</th><th>Total</th></tr>");
        for record in records {
            html.push_str("<tr>");
            html.push_str(&format!(
                "<td>{}</td>",
                record.created_at.strftime("%Y-%m-%d %H:%M")
            ));
            html.push_str(&format!("<td>{}</td>", escape_html(&record.pack_sizes)));
            html.push_str(&format!("<td>{}</td>", record.amount));
            html.push_str(&format!("<td>{}</td>", record.total));
            html.push_str("</tr>");
        }
        html.push_str("</table>");
    }

    html.push_str("</div>");
    html
}
