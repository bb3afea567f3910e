//! Request descriptors and URL resolution
//!
//! A [`RequestDescriptor`] names everything one HTTP call needs: verb, path
//! (relative to the client's resource base, or an absolute URL), query
//! parameters, and an optional JSON body.

use reqwest::Method;
use serde_json::Value;

/// Description of a single API call, independent of the client executing it.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: Method,
    /// Path relative to the resource base, or an absolute URL (pagination
    /// `next` links are replayed through the same call path verbatim).
    pub path: String,
    pub params: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl RequestDescriptor {
    fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), params: Vec::new(), body: None }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        let mut descriptor = Self::new(Method::POST, path);
        descriptor.body = Some(body);
        descriptor
    }

    pub fn patch(path: impl Into<String>, body: Value) -> Self {
        let mut descriptor = Self::new(Method::PATCH, path);
        descriptor.body = Some(body);
        descriptor
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append one query parameter.
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.push((key.into(), value.to_string()));
        self
    }

    /// Append query parameters from a slice of pairs.
    pub fn with_params(mut self, params: &[(&str, &str)]) -> Self {
        self.params.extend(params.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())));
        self
    }
}

/// Resolve the absolute URL for a call.
///
/// Absolute paths are used verbatim; relative paths are joined under
/// `{api_root}/{resource_base}/` with exactly one separator.
pub(crate) fn resolve_url(api_root: &str, resource_base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}/{}",
        api_root.trim_end_matches('/'),
        resource_base.trim_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_urls_pass_through_unchanged() {
        let next = "https://api.planningcenteronline.com/people/v2/people?offset=100&per_page=100";
        assert_eq!(resolve_url("https://api.planningcenteronline.com", "people/v2", next), next);

        let http = "http://localhost:9999/people/v2/people";
        assert_eq!(resolve_url("https://api.planningcenteronline.com", "people/v2", http), http);
    }

    #[test]
    fn relative_paths_join_with_single_separators() {
        let root = "https://api.planningcenteronline.com";
        assert_eq!(
            resolve_url(root, "people/v2", "people"),
            "https://api.planningcenteronline.com/people/v2/people"
        );
        assert_eq!(
            resolve_url(root, "people/v2", "/people/123/emails"),
            "https://api.planningcenteronline.com/people/v2/people/123/emails"
        );
        // A trailing slash on the root must not double up.
        assert_eq!(
            resolve_url("https://api.planningcenteronline.com/", "publishing/v2", "channels"),
            "https://api.planningcenteronline.com/publishing/v2/channels"
        );
    }

    #[test]
    fn descriptor_builders_set_verb_and_body() {
        let get = RequestDescriptor::get("people").param("per_page", 25);
        assert_eq!(get.method, Method::GET);
        assert_eq!(get.params, vec![("per_page".to_string(), "25".to_string())]);
        assert!(get.body.is_none());

        let post = RequestDescriptor::post("episodes", serde_json::json!({"data": {}}));
        assert_eq!(post.method, Method::POST);
        assert!(post.body.is_some());

        let delete = RequestDescriptor::delete("people/1");
        assert_eq!(delete.method, Method::DELETE);
        assert!(delete.body.is_none());
    }
}
