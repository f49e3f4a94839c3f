//! API entity types
//!
//! Request and response shapes of the Clash Detection API, plus the
//! named version listing borrowed from the iModels API.

mod common;
mod imodel;
mod named_version;
mod result;
mod run;
mod suppression_rule;
mod template;

pub use clash_test::*;
pub use common::{
    AdvancedSettings, AllUserMetadata, ClassKey, CollectionLinks, CollectionResponse,
    ElementSetCriteria, Link, PropertyExpression, PropertyKey, SuppressionRuleParameters,
    UserMetadata, ValueObject,
};
pub use imodel::*;
pub use named_version::*;
pub use result::*;
pub use run::*;
pub use suppression_rule::*;
pub use template::*;
