use serde::Serialize;

/// A request/response mapping template pair for one resolver.
///
/// The text is opaque to the transform; it is interpreted by the backend
/// that executes the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MappingTemplatePair {
    pub request: String,
    pub response: String,
}

impl MappingTemplatePair {
    pub fn new(request: impl Into<String>, response: impl Into<String>) -> MappingTemplatePair {
        MappingTemplatePair {
            request: request.into(),
            response: response.into(),
        }
    }
}
