//! Cloud provider detection — services, programs, and certifications.

use aho_corasick::AhoCorasick;
use regex::Regex;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::config::ResolvedConfig;
use crate::errors::ConfigError;

/// Cloud provider usage found in a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CloudInfo {
    /// Configured service names found in the text.
    pub services: Vec<String>,
    /// Configured program/community names found in the text.
    pub programs: Vec<String>,
    /// Certification phrases matched by the configured patterns.
    pub certifications: Vec<String>,
}

impl CloudInfo {
    pub fn is_empty(&self) -> bool {
        self.services.is_empty() && self.programs.is_empty() && self.certifications.is_empty()
    }
}

/// Detects cloud services, programs, and certifications in three independent
/// passes over the text.
pub struct CloudDetector {
    services: AhoCorasick,
    service_names: Vec<String>,
    programs: AhoCorasick,
    program_names: Vec<String>,
    cert_patterns: Vec<Regex>,
}

impl CloudDetector {
    pub fn new(config: &ResolvedConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            services: build_vocabulary(&config.cloud_services)?,
            service_names: config.cloud_services.clone(),
            programs: build_vocabulary(&config.cloud_programs)?,
            program_names: config.cloud_programs.clone(),
            cert_patterns: config.cloud_cert_patterns.clone(),
        })
    }

    /// Scan `text` for cloud information. Matching is case-insensitive
    /// regardless of the keyword case policy; services and programs report
    /// the configured literal in configured order.
    pub fn detect(&self, text: &str) -> CloudInfo {
        CloudInfo {
            services: scan_vocabulary(&self.services, &self.service_names, text),
            programs: scan_vocabulary(&self.programs, &self.program_names, text),
            certifications: self.scan_certifications(text),
        }
    }

    /// Each pattern is tried independently; a pattern may match several
    /// times but each distinct span contributes once.
    fn scan_certifications(&self, text: &str) -> Vec<String> {
        let mut seen = FxHashSet::default();
        let mut certifications = Vec::new();
        for pattern in &self.cert_patterns {
            for mat in pattern.find_iter(text) {
                let span = mat.as_str().trim();
                if span.is_empty() {
                    continue;
                }
                if seen.insert(span.to_lowercase()) {
                    certifications.push(span.to_string());
                }
            }
        }
        certifications
    }
}

fn build_vocabulary(names: &[String]) -> Result<AhoCorasick, ConfigError> {
    AhoCorasick::builder()
        .ascii_case_insensitive(true)
        .build(names)
        .map_err(|err| ConfigError::Automaton { message: err.to_string() })
}

fn scan_vocabulary(automaton: &AhoCorasick, names: &[String], text: &str) -> Vec<String> {
    let mut matched = FxHashSet::default();
    for hit in automaton.find_overlapping_iter(text) {
        matched.insert(hit.pattern().as_usize());
    }
    names
        .iter()
        .enumerate()
        .filter(|(id, _)| matched.contains(id))
        .map(|(_, name)| name.clone())
        .collect()
}
