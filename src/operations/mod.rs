//! Operations module
//!
//! One operation group per API resource. All groups share the same
//! [`OperationOptions`](base::OperationOptions): transport, endpoints and the
//! access token provider.
//!
//! # Listings
//!
//! Paged listings return an [`EntityListIterator`](crate::pagination::EntityListIterator)
//! right away; nothing is requested until the first element is pulled.
//! The service's `_links.next.href` is followed verbatim for later pages.

mod base;
mod imodel;
mod params;
mod result;
mod run;
mod suppression_rule;
mod template;
mod url;

pub(crate) use base::OperationOptions;
pub use clash_test::TestOperations;
pub use imodel::IModelOperations;
pub use params::*;
pub use result::ResultOperations;
pub use run::RunOperations;
pub use suppression_rule::SuppressionRuleOperations;
pub use template::TemplateOperations;
pub use url::{CollectionUrlParams, ProjectUrlParams, UrlFormatter};

#[cfg(test)]
mod tests;
