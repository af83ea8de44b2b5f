//! JSON report output.

use crate::analysis::Finding;

/// Serialize a finding as pretty-printed JSON.
pub fn json_report(finding: &Finding) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(finding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::PolicyAnalyzer;
    use crate::config::{resolve, ConfigDefaults, ConfigOverrides};

    #[test]
    fn round_trips_through_serde() {
        let config = resolve(ConfigDefaults::builtin(), &ConfigOverrides::default()).unwrap();
        let analyzer = PolicyAnalyzer::new(config).unwrap();
        let finding = analyzer.analyze("We use AWS. Contact privacy@example.com.", Some("Acme"));

        let rendered = json_report(&finding).unwrap();
        let parsed: Finding = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed.company_name, "Acme");
        assert_eq!(parsed.emails, finding.emails);
        assert_eq!(parsed.technologies, finding.technologies);
    }
}
