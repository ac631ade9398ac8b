use packer_optimizer::Allocation;

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

pub fn error_fragment(message: &str) -> String {
    format!("<div class='error'>{}</div>", escape_html(message))
}

pub fn allocation_fragment(amount: i64, allocation: &Allocation) -> String {
    let mut html = String::from("<div class='result-success'>");
    html.push_str(&format!("<h3>Results for {amount} items:</h3>"));
    html.push_str("<table class='result-table'>");
    html.push_str("<tr><th>Pack Size</th><th>Quantity</th></tr>");

    for (size, count) in allocation.iter_descending() {
        html.push_str(&format!("<tr><td>{size}</td><td>{count}</td></tr>"));
    }

    html.push_str("</table>");
    html.push_str(&format!(
        "<p class='total'>Total items: <strong>{}</strong></p>",
        allocation.total()
    ));
    html.push_str("</div>");

    html
}

#[cfg(test)]
mod tests {
    use packer_optimizer::optimize;

    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html("<script>alert('x') & \"y\"</script>"),
            "&lt;script&gt;alert(&#39;x&#39;) &amp; &quot;y&quot;&lt;/script&gt;"
        );
    }

    #[test]
    fn test_error_fragment() {
        assert_eq!(
            error_fragment("Invalid pack size: <b>"),
            "<div class='error'>Invalid pack size: &lt;b&gt;</div>"
        );
    }

    #[test]
    fn test_allocation_fragment() {
        let allocation = optimize(&[23, 31, 53], 500_000).unwrap();
        let html = allocation_fragment(500_000, &allocation);

        assert_eq!(
            html,
            "<div class='result-success'>\
             <h3>Results for 500000 items:</h3>\
             <table class='result-table'>\
             <tr><th>Pack Size</th><th>Quantity</th></tr>\
             <tr><td>53</td><td>9429</td></tr>\
             <tr><td>31</td><td>7</td></tr>\
             <tr><td>23</td><td>2</td></tr>\
             </table>\
             <p class='total'>Total items: <strong>500000</strong></p>\
             </div>"
        );
    }
}
