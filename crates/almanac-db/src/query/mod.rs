pub mod template_query;
pub mod text_match;


pub use template_query::TemplateQuery;
