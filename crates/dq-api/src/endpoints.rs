//! Endpoint layout of the metadata service.

use dq_model::FieldId;

/// Service URLs derived from a single base URL.
///
/// Field-update URLs keep their trailing slash; the service routes PATCH
/// requests that way.
#[derive(Debug, Clone)]
pub struct ApiEndpoints {
    extra_metadata: String,
    update_field: String,
}

impl ApiEndpoints {
    pub fn new(base_url: &str) -> Self {
        let base = base_url.trim_end_matches('/');
        Self {
            extra_metadata: format!("{base}/extra-metadata/"),
            update_field: format!("{base}/update-field/"),
        }
    }

    /// Listing of all extra-metadata items.
    pub fn extra_metadata(&self) -> &str {
        &self.extra_metadata
    }

    /// PATCH target for one governance field.
    pub fn update_field(&self, field: FieldId) -> String {
        format!("{}{field}/", self.update_field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let plain = ApiEndpoints::new("https://svc.example.com/api");
        let slashed = ApiEndpoints::new("https://svc.example.com/api/");

        assert_eq!(plain.extra_metadata(), slashed.extra_metadata());
        assert_eq!(
            plain.extra_metadata(),
            "https://svc.example.com/api/extra-metadata/"
        );
    }

    #[test]
    fn update_field_url_embeds_the_field_id() {
        let endpoints = ApiEndpoints::new("https://svc.example.com/api");
        assert_eq!(
            endpoints.update_field(FieldId::new(42)),
            "https://svc.example.com/api/update-field/42/"
        );
    }
}
