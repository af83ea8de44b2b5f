//! Third-party service detection at sentence level.

use rustc_hash::FxHashSet;

use super::sentences;

/// Upper bound on reported third-party services per document.
pub const MAX_THIRD_PARTY_SERVICES: usize = 20;

/// Curated provider vocabulary: brand name to human-readable description.
/// Narrower than the general `services` keyword category.
static SERVICE_PROVIDERS: &[(&str, &str)] = &[
    ("stripe", "Stripe for payments"),
    ("paypal", "PayPal for payments"),
    ("braintree", "Braintree for payments"),
    ("twilio", "Twilio for SMS and voice"),
    ("sendgrid", "SendGrid for email delivery"),
    ("mailgun", "Mailgun for email delivery"),
    ("mailchimp", "Mailchimp for email marketing"),
    ("zendesk", "Zendesk for customer support"),
    ("intercom", "Intercom for customer messaging"),
    ("salesforce", "Salesforce for CRM"),
    ("hubspot", "HubSpot for marketing and CRM"),
    ("segment", "Segment for event routing"),
    ("google analytics", "Google Analytics for web analytics"),
    ("mixpanel", "Mixpanel for product analytics"),
    ("amplitude", "Amplitude for product analytics"),
    ("hotjar", "Hotjar for session analytics"),
    ("cloudflare", "Cloudflare for CDN and security"),
    ("fastly", "Fastly for CDN"),
    ("auth0", "Auth0 for authentication"),
    ("okta", "Okta for identity management"),
    ("datadog", "Datadog for monitoring"),
    ("sentry", "Sentry for error tracking"),
];

/// Scan sentences for known service providers and report each provider's
/// description once, in first-matching-sentence order, capped at
/// [`MAX_THIRD_PARTY_SERVICES`].
pub fn detect_third_party_services(text: &str) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut services = Vec::new();
    'sentences: for sentence in sentences::split(text) {
        let lowered = sentence.to_lowercase();
        for (brand, description) in SERVICE_PROVIDERS {
            if lowered.contains(brand) && seen.insert(*brand) {
                services.push(description.to_string());
                if services.len() == MAX_THIRD_PARTY_SERVICES {
                    break 'sentences;
                }
            }
        }
    }
    services
}
