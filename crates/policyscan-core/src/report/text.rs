//! Human-readable text report.

use crate::analysis::Finding;

const RULE: &str =
    "================================================================================";

/// Per-section toggles for the text report. All sections are on by default.
#[derive(Debug, Clone)]
pub struct ReportSections {
    pub urls: bool,
    pub domains: bool,
    pub emails: bool,
    pub technologies: bool,
    pub cloud: bool,
    pub api_references: bool,
    pub third_party_services: bool,
    pub data_sharing: bool,
}

impl Default for ReportSections {
    fn default() -> Self {
        Self {
            urls: true,
            domains: true,
            emails: true,
            technologies: true,
            cloud: true,
            api_references: true,
            third_party_services: true,
            data_sharing: true,
        }
    }
}

/// Render a finding as a fixed-order text report.
///
/// Section order: statistics, URLs, domains, emails, technologies, cloud
/// info, API references, third-party services, data-sharing mentions.
/// Sections whose collection is empty are omitted. Formatting uses fixed
/// ASCII separators and is locale-independent.
pub fn text_report(finding: &Finding, sections: &ReportSections) -> String {
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("POLICY ANALYSIS REPORT: {}\n", finding.company_name));
    out.push_str(RULE);
    out.push_str("\n\n");

    out.push_str("Document Statistics:\n");
    out.push_str(&format!("  - Analyzed At: {} (unix ms)\n", finding.analysis_timestamp));
    out.push_str(&format!("  - Length: {} characters\n", group_thousands(finding.document_length)));
    out.push_str(&format!("  - Word Count: {} words\n\n", group_thousands(finding.word_count)));

    if sections.urls && !finding.urls.is_empty() {
        push_list(&mut out, &format!("URLs Found ({})", finding.urls.len()), &finding.urls);
    }
    if sections.domains && !finding.domains.is_empty() {
        push_list(&mut out, &format!("Domains Found ({})", finding.domains.len()), &finding.domains);
    }
    if sections.emails && !finding.emails.is_empty() {
        push_list(&mut out, &format!("Contact Emails ({})", finding.emails.len()), &finding.emails);
    }

    if sections.technologies && !finding.technologies.is_empty() {
        out.push_str("Technologies Detected:\n");
        for (category, keywords) in &finding.technologies {
            out.push_str(&format!("  {category}:\n"));
            for keyword in keywords {
                out.push_str(&format!("    - {keyword}\n"));
            }
        }
        out.push('\n');
    }

    if sections.cloud && !finding.cloud_info.is_empty() {
        out.push_str("Cloud Platform Usage:\n");
        push_sublist(&mut out, "Services", &finding.cloud_info.services);
        push_sublist(&mut out, "Programs", &finding.cloud_info.programs);
        push_sublist(&mut out, "Certifications", &finding.cloud_info.certifications);
        out.push('\n');
    }

    if sections.api_references && !finding.api_references.is_empty() {
        let header = format!("API References ({})", finding.api_references.len());
        out.push_str(&format!("{header}:\n"));
        for snippet in &finding.api_references {
            out.push_str(&format!("  - ...{snippet}...\n"));
        }
        out.push('\n');
    }

    if sections.third_party_services && !finding.third_party_services.is_empty() {
        push_list(
            &mut out,
            &format!("Third-Party Services ({})", finding.third_party_services.len()),
            &finding.third_party_services,
        );
    }
    if sections.data_sharing && !finding.data_sharing_mentions.is_empty() {
        push_list(
            &mut out,
            &format!("Data Sharing Mentions ({})", finding.data_sharing_mentions.len()),
            &finding.data_sharing_mentions,
        );
    }

    out.push_str(RULE);
    out.push('\n');
    out
}

fn push_list(out: &mut String, header: &str, items: &[String]) {
    out.push_str(&format!("{header}:\n"));
    for item in items {
        out.push_str(&format!("  - {item}\n"));
    }
    out.push('\n');
}

fn push_sublist(out: &mut String, header: &str, items: &[String]) {
    if items.is_empty() {
        return;
    }
    out.push_str(&format!("  {header} ({}):\n", items.len()));
    for item in items {
        out.push_str(&format!("    - {item}\n"));
    }
}

/// Group digits in threes with commas: 1234567 -> "1,234,567".
fn group_thousands(value: usize) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, ch) in digits.chars().enumerate() {
        if position > 0 && (digits.len() - position) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::PolicyAnalyzer;
    use crate::config::{resolve, ConfigDefaults, ConfigOverrides};

    fn finding(text: &str) -> Finding {
        let config = resolve(ConfigDefaults::builtin(), &ConfigOverrides::default()).unwrap();
        PolicyAnalyzer::new(config).unwrap().analyze(text, Some("Acme"))
    }

    #[test]
    fn report_has_fixed_sections() {
        let report = text_report(
            &finding("We use AWS. Visit https://example.com. Contact privacy@example.com."),
            &ReportSections::default(),
        );
        assert!(report.contains("POLICY ANALYSIS REPORT: Acme"));
        assert!(report.contains("Document Statistics:"));
        assert!(report.contains("Analyzed At:"));
        assert!(report.contains("URLs Found (1):"));
        assert!(report.contains("Technologies Detected:"));
        // Section order: statistics before URLs before technologies.
        let stats = report.find("Document Statistics").unwrap();
        let urls = report.find("URLs Found").unwrap();
        let techs = report.find("Technologies Detected").unwrap();
        assert!(stats < urls && urls < techs);
    }

    #[test]
    fn empty_sections_are_omitted() {
        let report = text_report(&finding("nothing interesting here"), &ReportSections::default());
        assert!(!report.contains("URLs Found"));
        assert!(!report.contains("Cloud Platform Usage"));
        assert!(!report.contains("Data Sharing Mentions"));
    }

    #[test]
    fn toggles_suppress_sections() {
        let sections = ReportSections { urls: false, ..Default::default() };
        let report = text_report(&finding("Visit https://example.com."), &sections);
        assert!(!report.contains("URLs Found"));
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
