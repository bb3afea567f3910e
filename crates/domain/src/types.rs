//! Wire-level response types
//!
//! Every PCO read endpoint returns a `{data, links, meta}` envelope. These
//! types name exactly the fields the client reads and let serde ignore the
//! rest, so new server-side keys never break deserialization.

use serde::Deserialize;
use serde_json::{Map, Value};

/// Response envelope returned by every PCO endpoint that yields a body.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope {
    /// A single resource or a page of resources, depending on the endpoint.
    #[serde(default)]
    pub data: Option<Document>,
    #[serde(default)]
    pub links: Links,
    /// Paging metadata; opaque to the client.
    #[serde(default)]
    pub meta: Option<Value>,
}

impl Envelope {
    /// Extract the single resource from a `get`/`create`/`update` response.
    pub fn into_one(self) -> Option<Resource> {
        match self.data {
            Some(Document::One(resource)) => Some(*resource),
            Some(Document::Many(mut resources)) => {
                if resources.is_empty() {
                    None
                } else {
                    Some(resources.remove(0))
                }
            }
            None => None,
        }
    }

    /// Extract the resource list from a list response. A missing or single
    /// `data` value becomes the obvious list.
    pub fn into_many(self) -> Vec<Resource> {
        match self.data {
            Some(Document::One(resource)) => vec![*resource],
            Some(Document::Many(resources)) => resources,
            None => Vec::new(),
        }
    }

    /// The absolute URL of the next page, if the server supplied one.
    pub fn next_link(&self) -> Option<&str> {
        self.links.next.as_deref().filter(|s| !s.is_empty())
    }
}

/// The `data` field: one resource for single-entity endpoints, a sequence
/// for list endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Document {
    Many(Vec<Resource>),
    One(Box<Resource>),
}

/// Pagination links; only `next` is consumed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Links {
    #[serde(default)]
    pub next: Option<String>,
}

/// An opaque entity record (person, email, field datum, episode, ...).
///
/// The client never validates or mutates the attribute shape; facades read
/// `id` and individual attributes where an operation requires it.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Resource {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub attributes: Map<String, Value>,
    #[serde(default)]
    pub relationships: Option<Value>,
}

impl Resource {
    /// The entity id, or empty string when the server omitted it.
    pub fn id_str(&self) -> &str {
        self.id.as_deref().unwrap_or("")
    }

    /// Raw attribute lookup.
    pub fn attr(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// String attribute lookup; non-string and missing values yield `None`.
    pub fn attr_str(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_list_envelope_with_next_link() {
        let body = r#"{
            "links": {"self": "https://api.example.com/people/v2/people",
                      "next": "https://api.example.com/people/v2/people?offset=100"},
            "data": [
                {"type": "Person", "id": "1", "attributes": {"name": "Ada"}},
                {"type": "Person", "id": "2", "attributes": {"name": "Grace"}}
            ],
            "meta": {"total_count": 2}
        }"#;

        let envelope: Envelope = serde_json::from_str(body).unwrap();
        assert_eq!(envelope.next_link(), Some("https://api.example.com/people/v2/people?offset=100"));

        let people = envelope.into_many();
        assert_eq!(people.len(), 2);
        assert_eq!(people[0].id_str(), "1");
        assert_eq!(people[1].attr_str("name"), Some("Grace"));
    }

    #[test]
    fn parses_single_resource_envelope() {
        let body = r#"{
            "data": {"type": "Email", "id": "11121",
                     "attributes": {"address": "ada@example.com", "primary": true}}
        }"#;

        let envelope: Envelope = serde_json::from_str(body).unwrap();
        assert!(envelope.next_link().is_none());

        let email = envelope.into_one().unwrap();
        assert_eq!(email.kind.as_deref(), Some("Email"));
        assert_eq!(email.attr_str("address"), Some("ada@example.com"));
        assert_eq!(email.attr("primary"), Some(&serde_json::json!(true)));
    }

    #[test]
    fn tolerates_unknown_fields_and_missing_sections() {
        // Forward compatibility: extra keys anywhere must not fail parsing.
        let body = r#"{
            "data": [{"type": "Household", "id": "7", "attributes": {},
                      "relationships": {"people": {"data": []}},
                      "brand_new_key": 42}],
            "links": {"prev": "x", "unknown": null},
            "included": []
        }"#;

        let envelope: Envelope = serde_json::from_str(body).unwrap();
        assert!(envelope.next_link().is_none());
        assert_eq!(envelope.into_many().len(), 1);
    }

    #[test]
    fn empty_envelope_yields_no_resources() {
        let envelope: Envelope = serde_json::from_str("{}").unwrap();
        assert!(envelope.next_link().is_none());
        assert!(envelope.clone().into_one().is_none());
        assert!(envelope.into_many().is_empty());
    }

    #[test]
    fn empty_next_link_is_treated_as_absent() {
        let body = r#"{"data": [], "links": {"next": ""}}"#;
        let envelope: Envelope = serde_json::from_str(body).unwrap();
        assert!(envelope.next_link().is_none());
    }
}
