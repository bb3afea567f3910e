//! People facade
//!
//! Typed convenience operations over the People product (`people/v2`):
//! people, addresses, emails, phone numbers, custom field definitions and
//! data, households, plus a few derived lookups workflows depend on. Every
//! listing routes through the pagination engine; every single get unwraps
//! the envelope's `data` field.

use pcokit_domain::constants::PEOPLE_BASE;
use pcokit_domain::{PcoError, Resource, Result};
use serde_json::json;

use crate::auth::{self, Credentials};
use crate::client::ResourceClient;
use crate::request::RequestDescriptor;

/// A built-in person field (present on every person, not a custom
/// definition).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltInField {
    pub name: &'static str,
    pub slug: &'static str,
    pub data_type: &'static str,
}

/// The editable built-in fields of a person record.
pub const BUILT_IN_FIELDS: &[BuiltInField] = &[
    BuiltInField { name: "First Name", slug: "first_name", data_type: "string" },
    BuiltInField { name: "Middle Name", slug: "middle_name", data_type: "string" },
    BuiltInField { name: "Last Name", slug: "last_name", data_type: "string" },
    BuiltInField { name: "Nickname", slug: "nickname", data_type: "string" },
    BuiltInField { name: "Birthdate", slug: "birthdate", data_type: "date" },
    BuiltInField { name: "Anniversary", slug: "anniversary", data_type: "date" },
    BuiltInField { name: "Gender", slug: "gender", data_type: "string" },
    BuiltInField { name: "Grade", slug: "grade", data_type: "integer" },
    BuiltInField { name: "Child", slug: "child", data_type: "boolean" },
    BuiltInField { name: "Graduation Year", slug: "graduation_year", data_type: "integer" },
    BuiltInField { name: "Medical Notes", slug: "medical_notes", data_type: "text" },
    BuiltInField { name: "Membership", slug: "membership", data_type: "string" },
    BuiltInField { name: "Status", slug: "status", data_type: "string" },
    BuiltInField { name: "School Type", slug: "school_type", data_type: "string" },
    BuiltInField {
        name: "Passed Background Check",
        slug: "passed_background_check",
        data_type: "boolean",
    },
];

/// Look up a built-in field by display name (case-insensitive).
pub fn built_in_field_by_name(name: &str) -> Option<&'static BuiltInField> {
    BUILT_IN_FIELDS.iter().find(|f| f.name.eq_ignore_ascii_case(name))
}

/// Typed client for the People product.
pub struct PeopleClient {
    client: ResourceClient,
}

impl PeopleClient {
    /// Create a client against the production API root.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_api_root(credentials, auth::api_root())
    }

    /// Create a client against a specific API root (tests, proxies).
    pub fn with_api_root(credentials: Credentials, api_root: impl Into<String>) -> Result<Self> {
        let client = ResourceClient::builder()
            .api_root(api_root)
            .resource_base(PEOPLE_BASE)
            .credentials(credentials)
            .build()?;
        Ok(Self { client })
    }

    /// Create a client with credentials resolved from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(Credentials::from_env()?)
    }

    // People

    /// List all people matching `params` (e.g. `where[search_name]`,
    /// `where[status]`, `order`). Paginated.
    pub async fn people(&self, params: &[(&str, &str)]) -> Result<Vec<Resource>> {
        self.client.collect(RequestDescriptor::get("people").with_params(params)).await
    }

    /// Get a single person by id.
    pub async fn person(&self, person_id: &str, params: &[(&str, &str)]) -> Result<Resource> {
        self.client.get_one(&format!("people/{}", person_id), params).await
    }

    /// Delete a person. An already-absent person surfaces as a request
    /// failure.
    pub async fn delete_person(&self, person_id: &str) -> Result<()> {
        self.client.delete(&format!("people/{}", person_id)).await
    }

    /// All person ids, in server order.
    pub async fn all_person_ids(&self) -> Result<Vec<String>> {
        let people = self.people(&[]).await?;
        Ok(people.iter().map(|p| p.id_str().to_string()).collect())
    }

    // Addresses / emails / phone numbers

    pub async fn addresses_for_person(&self, person_id: &str) -> Result<Vec<Resource>> {
        self.client.collect(RequestDescriptor::get(format!("people/{}/addresses", person_id))).await
    }

    pub async fn address(&self, address_id: &str) -> Result<Resource> {
        self.client.get_one(&format!("addresses/{}", address_id), &[]).await
    }

    pub async fn emails_for_person(&self, person_id: &str) -> Result<Vec<Resource>> {
        self.client.collect(RequestDescriptor::get(format!("people/{}/emails", person_id))).await
    }

    pub async fn email(&self, email_id: &str) -> Result<Resource> {
        self.client.get_one(&format!("emails/{}", email_id), &[]).await
    }

    pub async fn phone_numbers_for_person(&self, person_id: &str) -> Result<Vec<Resource>> {
        self.client
            .collect(RequestDescriptor::get(format!("people/{}/phone_numbers", person_id)))
            .await
    }

    pub async fn phone_number(&self, phone_id: &str) -> Result<Resource> {
        self.client.get_one(&format!("phone_numbers/{}", phone_id), &[]).await
    }

    // Field definitions

    /// List custom field definitions. Paginated.
    pub async fn field_definitions(&self, params: &[(&str, &str)]) -> Result<Vec<Resource>> {
        self.client.collect(RequestDescriptor::get("field_definitions").with_params(params)).await
    }

    pub async fn field_definition(&self, field_id: &str) -> Result<Resource> {
        self.client.get_one(&format!("field_definitions/{}", field_id), &[]).await
    }

    /// Resolve a custom field definition's id by display name.
    ///
    /// # Errors
    /// `PcoError::NotFound` when no definition carries that name; this is
    /// a domain-level miss, distinct from any transport failure.
    pub async fn field_definition_id(&self, field_name: &str) -> Result<String> {
        let definitions = self.field_definitions(&[("where[name]", field_name)]).await?;
        definitions
            .first()
            .map(|d| d.id_str().to_string())
            .ok_or_else(|| PcoError::NotFound(format!("field definition '{}'", field_name)))
    }

    // Field data

    /// List custom field data across people. Paginated.
    pub async fn field_data(&self, params: &[(&str, &str)]) -> Result<Vec<Resource>> {
        self.client.collect(RequestDescriptor::get("field_data").with_params(params)).await
    }

    pub async fn field_datum(&self, field_data_id: &str) -> Result<Resource> {
        self.client.get_one(&format!("field_data/{}", field_data_id), &[]).await
    }

    /// All data recorded against one field definition.
    pub async fn field_data_by_definition(&self, field_definition_id: &str) -> Result<Vec<Resource>> {
        self.field_data(&[("where[field_definition_id]", field_definition_id)]).await
    }

    /// Field data for one person, optionally filtered.
    pub async fn field_data_for_person(
        &self,
        person_id: &str,
        params: &[(&str, &str)],
    ) -> Result<Vec<Resource>> {
        self.client
            .collect(
                RequestDescriptor::get(format!("people/{}/field_data", person_id))
                    .with_params(params),
            )
            .await
    }

    /// Record a field value for a person.
    pub async fn create_field_datum(
        &self,
        person_id: &str,
        field_definition_id: &str,
        value: &str,
    ) -> Result<Resource> {
        self.client
            .create(
                &format!("people/{}/field_data", person_id),
                json!({ "field_definition_id": field_definition_id, "value": value }),
            )
            .await
    }

    /// Replace an existing field value.
    pub async fn update_field_datum(
        &self,
        field_data_id: &str,
        field_definition_id: &str,
        value: &str,
    ) -> Result<Resource> {
        self.client
            .update(
                &format!("field_data/{}", field_data_id),
                json!({ "field_definition_id": field_definition_id, "value": value }),
            )
            .await
    }

    pub async fn delete_field_datum(&self, field_data_id: &str) -> Result<()> {
        self.client.delete(&format!("field_data/{}", field_data_id)).await
    }

    // Households and specialized listings

    pub async fn households(&self, params: &[(&str, &str)]) -> Result<Vec<Resource>> {
        self.client.collect(RequestDescriptor::get("households").with_params(params)).await
    }

    pub async fn household(&self, household_id: &str, params: &[(&str, &str)]) -> Result<Resource> {
        self.client.get_one(&format!("households/{}", household_id), params).await
    }

    /// Upcoming birthdays. Paginated.
    pub async fn birthdays(&self, params: &[(&str, &str)]) -> Result<Vec<Resource>> {
        self.client.collect(RequestDescriptor::get("birthdays").with_params(params)).await
    }

    /// Upcoming anniversaries. Paginated.
    pub async fn anniversaries(&self, params: &[(&str, &str)]) -> Result<Vec<Resource>> {
        self.client.collect(RequestDescriptor::get("anniversaries").with_params(params)).await
    }

    // Derived lookups

    /// Search for a person by display name and surface the first match's
    /// first email address and phone number.
    ///
    /// Zero matches is a designed soft-fail: returns `("", "")` without an
    /// error, unlike a transport failure which propagates.
    pub async fn search_contact(&self, search_name: &str) -> Result<(String, String)> {
        let people =
            self.people(&[("where[search_name]", search_name), ("per_page", "1")]).await?;
        let Some(person) = people.first() else {
            return Ok((String::new(), String::new()));
        };
        let person_id = person.id_str().to_string();

        let emails = self.emails_for_person(&person_id).await?;
        let email =
            emails.first().and_then(|e| e.attr_str("address")).unwrap_or_default().to_string();

        let phones = self.phone_numbers_for_person(&person_id).await?;
        let phone =
            phones.first().and_then(|p| p.attr_str("number")).unwrap_or_default().to_string();

        Ok((email, phone))
    }
}
