//! Static page template the rendered tables are embedded into.
//!
//! The template performs no logic; it receives pre-rendered table markup and
//! a formatted timestamp.

const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
    <title>Stock & ETF Prices</title>
    <style>
        body { font-family: Arial, sans-serif; background: #f7f7f7; margin: 40px; }
        h2 { color: #333; }
        table { border-collapse: collapse; width: 80%; margin-bottom: 40px; background: #fff; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
        th { background: #4CAF50; color: white; cursor: pointer; }
        tr:nth-child(even) { background: #f2f2f2; }
        .generated { color: #777; font-size: 0.85em; }
    </style>
</head>
<body>
{{sections}}
    <p class="generated">Generated at {{timestamp}}</p>
</body>
</html>
"#;

/// Assemble the full page: one heading-plus-table section per ticker group,
/// followed by the generated-at line.
pub fn render_page(sections: &[(String, String)], timestamp: &str) -> String {
    let mut body = String::new();
    for (label, table) in sections {
        body.push_str(&format!("    <h2>Prices for {}</h2>\n    {}\n", label, table));
    }
    PAGE_TEMPLATE
        .replace("{{sections}}", body.trim_end())
        .replace("{{timestamp}}", timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_embeds_sections_and_timestamp() {
        let sections = vec![
            ("Companies".to_string(), "<table>c</table>".to_string()),
            ("ETFs".to_string(), "<table>e</table>".to_string()),
        ];
        let page = render_page(&sections, "2026-08-08 09:00:00");

        assert!(page.contains("<h2>Prices for Companies</h2>"));
        assert!(page.contains("<h2>Prices for ETFs</h2>"));
        assert!(page.contains("<table>c</table>"));
        assert!(page.contains("<table>e</table>"));
        assert!(page.contains("Generated at 2026-08-08 09:00:00"));
        assert!(!page.contains("{{"));
    }
}
