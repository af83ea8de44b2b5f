//! Built-in keyword taxonomy and cloud vocabularies.
//!
//! Constructed as an explicit value and passed into the resolver; there is no
//! process-global mutable table.

use std::collections::BTreeMap;

/// Default configuration values before overrides are applied.
#[derive(Debug, Clone)]
pub struct ConfigDefaults {
    /// Built-in keyword taxonomy (platforms, languages, frameworks,
    /// databases, services, ai_ml, bots).
    pub tech_keywords: BTreeMap<String, Vec<String>>,
    /// Google Cloud service names.
    pub gcp_services: Vec<String>,
    /// Google Cloud program/community names.
    pub gcp_programs: Vec<String>,
    /// Certification pattern sources, compiled by the resolver.
    pub cloud_cert_patterns: Vec<String>,
    /// Matching is case-insensitive by default.
    pub case_sensitive: bool,
}

fn keywords(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl ConfigDefaults {
    /// The built-in default taxonomy.
    pub fn builtin() -> Self {
        let mut tech_keywords = BTreeMap::new();
        tech_keywords.insert(
            "platforms".to_string(),
            keywords(&[
                "github", "gitlab", "bitbucket", "aws", "azure", "gcp", "google cloud",
                "heroku", "netlify", "vercel", "cloudflare", "firebase",
            ]),
        );
        tech_keywords.insert(
            "languages".to_string(),
            keywords(&[
                "python", "javascript", "java", "ruby", "php", "go", "rust", "typescript",
                "c++", "c#", "swift", "kotlin",
            ]),
        );
        tech_keywords.insert(
            "frameworks".to_string(),
            keywords(&[
                "react", "angular", "vue", "django", "flask", "express", "spring", "rails",
                "laravel", "nextjs", "nuxt", "svelte",
            ]),
        );
        tech_keywords.insert(
            "databases".to_string(),
            keywords(&[
                "mysql", "postgresql", "mongodb", "redis", "elasticsearch", "dynamodb",
                "cassandra", "sqlite", "oracle", "sql server",
            ]),
        );
        tech_keywords.insert(
            "services".to_string(),
            keywords(&[
                "stripe", "paypal", "twilio", "sendgrid", "mailchimp", "zendesk",
                "intercom", "segment", "analytics", "google analytics", "mixpanel",
            ]),
        );
        tech_keywords.insert(
            "ai_ml".to_string(),
            keywords(&[
                "openai", "chatgpt", "gpt", "claude", "gemini", "machine learning",
                "artificial intelligence", "neural network", "deep learning", "nlp",
            ]),
        );
        tech_keywords.insert(
            "bots".to_string(),
            keywords(&[
                "chatbot", "bot", "automated system", "automation", "crawler", "spider",
            ]),
        );

        Self {
            tech_keywords,
            gcp_services: keywords(&[
                "cloud functions", "cloud run", "compute engine", "kubernetes engine",
                "gke", "app engine", "cloud storage", "cloud sql", "cloud firestore",
                "cloud spanner", "bigquery", "dataflow", "pub/sub", "vertex ai",
                "cloud vision", "cloud speech", "cloud natural language", "cloud build",
                "artifact registry", "cloud logging", "cloud monitoring",
            ]),
            gcp_programs: keywords(&[
                "google cloud developer", "google cloud innovator", "gcp developer",
                "gcp innovator", "google developer group", "cloud innovators",
            ]),
            cloud_cert_patterns: keywords(&[
                r"professional\s+cloud\s+[a-z]+",
                r"associate\s+cloud\s+engineer",
                r"professional\s+data\s+engineer",
                r"google\s+cloud\s+certified",
                r"gcp\s+certified",
            ]),
            case_sensitive: false,
        }
    }
}

impl Default for ConfigDefaults {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_categories_present() {
        let defaults = ConfigDefaults::builtin();
        for category in ["platforms", "languages", "frameworks", "databases", "services", "ai_ml", "bots"] {
            assert!(defaults.tech_keywords.contains_key(category), "missing {category}");
        }
    }

    #[test]
    fn builtin_cert_patterns_compile() {
        for pattern in ConfigDefaults::builtin().cloud_cert_patterns {
            assert!(regex::RegexBuilder::new(&pattern).case_insensitive(true).build().is_ok());
        }
    }
}
