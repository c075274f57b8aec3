//! Shared form infrastructure: the [`PortalForm`] trait.

use url::form_urlencoded;

/// Trait implemented by every outbound request body. The portal's AJAX
/// handlers read `application/x-www-form-urlencoded` POST fields.
pub trait PortalForm {
    /// Field name/value pairs in the order they are sent. Optional fields
    /// that are unset are left out rather than sent empty.
    fn to_pairs(&self) -> Vec<(&'static str, String)>;

    /// URL-encodes [`PortalForm::to_pairs`] into a request body.
    fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.to_pairs())
            .finish()
    }
}
