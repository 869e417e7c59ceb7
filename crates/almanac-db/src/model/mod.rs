pub mod occurrence;
pub mod template;

pub use occurrence::Occurrence;
pub use template::{EventTemplate, NewEventTemplate, TemplateChanges};
