use crate::domain::{entities::descriptor::ApplicationDescriptor, error::DomainError};

/// Structural checks on input, run before any platform dispatch.
pub struct DomainValidator;

impl DomainValidator {
    /// A descriptor must name its backend platform. Everything else is
    /// optional here; an empty `name` counts as absent downstream.
    pub fn validate_descriptor(descriptor: &ApplicationDescriptor) -> Result<(), DomainError> {
        if descriptor.backend_platform.trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "backendPlatform",
            });
        }
        Ok(())
    }
}
