//! Human-readable text report.

use crate::plan::Plan;

/// Render the plan as the plain-text hierarchy dump
pub fn render(plan: &Plan) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("This tool is not intended to provide a comprehensive address plan.".to_string());
    lines.push(
        "It should be used to generate a top level hierarchy of IPv6 address plans.".to_string(),
    );
    lines.push("IPv6 Address Plan".to_string());
    lines.push(format!("Base Subnet: {}", plan.base_subnet));
    lines.push(format!("Number of POPs: {}", plan.pop_count));
    lines.push(format!("Preferred POP subnet size: /{}", plan.preferred_size));
    lines.push(format!(
        "Subnet levels: {}",
        plan.subnet_levels
            .iter()
            .map(|level| format!("/{}", level))
            .collect::<Vec<_>>()
            .join(", ")
    ));

    lines.push(String::new());
    lines.push("Global Subnet Counts:".to_string());
    for count in &plan.subnet_counts {
        lines.push(format!(
            "  /{}: {} available subnets",
            count.prefix_size, count.available
        ));
    }

    lines.push(String::new());
    lines.push("POP Allocations:".to_string());
    for pop in &plan.pop_allocations {
        lines.push(String::new());
        lines.push(format!("POP {}: {}", pop.pop_number, pop.pop_subnet));
        for subnet in &pop.subnets {
            lines.push(format!(
                "  {}: {} (Available: {})",
                subnet.label, subnet.cidr, subnet.available
            ));
        }
    }

    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::build_plan;

    #[test]
    fn test_text_report_structure() {
        let base = "3fff:db8::/32".parse().unwrap();
        let (plan, _) = build_plan(base, 2, 40, &[48, 64]).unwrap();
        let report = render(&plan);

        assert!(report.contains("Base Subnet: 3fff:db8::/32"));
        assert!(report.contains("Number of POPs: 2"));
        assert!(report.contains("Preferred POP subnet size: /40"));
        assert!(report.contains("Subnet levels: /48, /64"));
        assert!(report.contains("  /48: 65536 available subnets"));
        assert!(report.contains("POP 1: 3fff:db8::/40"));
        assert!(report.contains("POP 2: 3fff:db8:8000::/40"));
        assert!(report.contains("  Level 1 (/48): 3fff:db8::/48 (Available: 256)"));
    }

    #[test]
    fn test_text_report_labels_follow_skips() {
        let base = "3fff::/20".parse().unwrap();
        let (plan, _) = build_plan(base, 1, 36, &[32, 44]).unwrap();
        let report = render(&plan);

        // The skipped /32 leaves a numbering gap, not a renumbered list
        assert!(!report.contains("Level 1"));
        assert!(report.contains("Level 2 (/44)"));
    }
}
