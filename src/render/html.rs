//! Standalone HTML report.
//!
//! The document mirrors the text report: a summary table, the global
//! subnet counts, and one table per POP. Each subnet row takes its label
//! from the subnet detail itself, so a skipped level can never shift the
//! labels of its neighbours.

use crate::plan::Plan;

const STYLE: &str = r"        body { font-family: Arial, sans-serif; margin: 20px; }
        h1 { color: #333; }
        table { border-collapse: collapse; width: 100%; margin-bottom: 20px; }
        th, td { border: 1px solid #ddd; padding: 8px; text-align: left; }
        th { background-color: #f2f2f2; }
        .pop { margin-bottom: 30px; }
        .pop-header { background-color: #e6f7ff; padding: 10px; margin-bottom: 10px; }
        .count { color: #666; font-size: 0.9em; }";

/// Render the plan as a complete HTML document
pub fn render(plan: &Plan) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("<!DOCTYPE html>".to_string());
    lines.push("<html>".to_string());
    lines.push("<head>".to_string());
    lines.push("    <title>IPv6 Address Plan</title>".to_string());
    lines.push(format!("    <style>\n{}\n    </style>", STYLE));
    lines.push("</head>".to_string());
    lines.push("<body>".to_string());
    lines.push("    <h1>IPv6 Address Plan</h1>".to_string());

    lines.push("    <table>".to_string());
    lines.push(format!(
        "        <tr><th>Base Subnet</th><td>{}</td></tr>",
        escape(&plan.base_subnet)
    ));
    lines.push(format!(
        "        <tr><th>Number of POPs</th><td>{}</td></tr>",
        plan.pop_count
    ));
    lines.push(format!(
        "        <tr><th>Preferred POP subnet size</th><td>/{}</td></tr>",
        plan.preferred_size
    ));
    lines.push(format!(
        "        <tr><th>Subnet levels</th><td>{}</td></tr>",
        plan.subnet_levels
            .iter()
            .map(|level| format!("/{}", level))
            .collect::<Vec<_>>()
            .join(" ")
    ));
    lines.push("    </table>".to_string());

    lines.push("    <h2>Global Subnet Counts</h2>".to_string());
    lines.push("    <table>".to_string());
    lines.push("        <tr><th>Prefix Size</th><th>Available Subnets</th></tr>".to_string());
    for count in &plan.subnet_counts {
        lines.push(format!(
            "        <tr><td>/{}</td><td>{}</td></tr>",
            count.prefix_size, count.available
        ));
    }
    lines.push("    </table>".to_string());

    lines.push("    <h2>POP Allocations</h2>".to_string());
    for pop in &plan.pop_allocations {
        lines.push("    <div class=\"pop\">".to_string());
        lines.push(format!(
            "        <div class=\"pop-header\"><strong>POP {}:</strong> {}</div>",
            pop.pop_number,
            escape(&pop.pop_subnet)
        ));
        lines.push("        <table>".to_string());
        lines.push("            <tr><th>Level</th><th>Subnet</th><th>Available</th></tr>".to_string());
        for subnet in &pop.subnets {
            lines.push(format!(
                "            <tr><td>{}</td><td>{}</td><td>{}</td></tr>",
                escape(&subnet.label),
                escape(&subnet.cidr),
                subnet.available
            ));
        }
        lines.push("        </table>".to_string());
        lines.push("    </div>".to_string());
    }

    lines.push("</body>".to_string());
    lines.push("</html>".to_string());

    lines.join("\n") + "\n"
}

/// Minimal HTML escaping for text placed inside elements
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::build_plan;

    #[test]
    fn test_html_document_structure() {
        let base = "3fff:db8::/32".parse().unwrap();
        let (plan, _) = build_plan(base, 2, 40, &[48, 64]).unwrap();
        let html = render(&plan);

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</html>\n"));
        assert!(html.contains("<title>IPv6 Address Plan</title>"));
        assert!(html.contains("<tr><th>Base Subnet</th><td>3fff:db8::/32</td></tr>"));
        assert!(html.contains("<tr><td>/48</td><td>65536</td></tr>"));
        assert!(html.contains("<strong>POP 2:</strong> 3fff:db8:8000::/40"));
        assert!(html.contains("<tr><td>Level 1 (/48)</td><td>3fff:db8::/48</td><td>256</td></tr>"));
    }

    #[test]
    fn test_html_labels_stay_with_their_rows() {
        let base = "3fff::/20".parse().unwrap();
        let (plan, _) = build_plan(base, 1, 36, &[32, 44, 64]).unwrap();
        let html = render(&plan);

        // The /32 level is skipped; its label must not leak onto the /44 row
        assert!(html.contains("<tr><td>Level 2 (/44)</td>"));
        assert!(html.contains("<tr><td>Level 3 (/64)</td>"));
        assert!(!html.contains("Level 1"));
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape("a<b>&c"), "a&lt;b&gt;&amp;c");
    }
}
