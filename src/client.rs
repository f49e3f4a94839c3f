//! Clash Detection API client
//!
//! Entry point of the crate. Owns the transport and endpoint configuration
//! and hands out one operation group per API resource.
//!
//! ```rust,ignore
//! use clash_detection_client::{ClashDetectionClient, ClientOptions, GetTestListParams};
//! use clash_detection_client::pagination::take;
//!
//! let client = ClashDetectionClient::new(
//!     ClientOptions::builder().access_token("Bearer ey...").build(),
//! )?;
//! let mut tests = client.tests().list(GetTestListParams::default())?;
//! let first_ten = take(&mut tests, 10).await?;
//! ```

use crate::config::ClientOptions;
use crate::error::Result;
use crate::http::{HttpClient, RestClient};
use crate::operations::{
    IModelOperations, OperationOptions, ResultOperations, RunOperations,
    SuppressionRuleOperations, TemplateOperations, TestOperations, UrlFormatter,
};
use std::sync::Arc;
use tracing::debug;

/// Client for the Clash Detection API
#[derive(Debug, Clone)]
pub struct ClashDetectionClient {
    templates: TemplateOperations,
    rules: SuppressionRuleOperations,
    tests: TestOperations,
    runs: RunOperations,
    results: ResultOperations,
    imodel: IModelOperations,
}

impl ClashDetectionClient {
    /// Create a client, falling back to the reqwest transport when none is configured
    pub fn new(options: ClientOptions) -> Result<Self> {
        options.api.validate()?;

        let rest_client: Arc<dyn RestClient> = match options.rest_client {
            Some(client) => client,
            None => Arc::new(HttpClient::new()?),
        };
        debug!(
            "Creating Clash Detection client for {} ({})",
            options.api.base_url, options.api.version
        );

        let operation_options = Arc::new(OperationOptions {
            rest_client,
            urls: UrlFormatter::new(&options.api),
            api: options.api,
            access_token_provider: options.access_token_provider,
        });

        Ok(Self {
            templates: TemplateOperations::new(Arc::clone(&operation_options)),
            rules: SuppressionRuleOperations::new(Arc::clone(&operation_options)),
            tests: TestOperations::new(Arc::clone(&operation_options)),
            runs: RunOperations::new(Arc::clone(&operation_options)),
            results: ResultOperations::new(Arc::clone(&operation_options)),
            imodel: IModelOperations::new(operation_options),
        })
    }

    /// Suppression rule template operations
    pub fn templates(&self) -> &TemplateOperations {
        &self.templates
    }

    /// Suppression rule operations
    pub fn rules(&self) -> &SuppressionRuleOperations {
        &self.rules
    }

    /// Test operations
    pub fn tests(&self) -> &TestOperations {
        &self.tests
    }

    /// Run operations
    pub fn runs(&self) -> &RunOperations {
        &self.runs
    }

    /// Result operations
    pub fn results(&self) -> &ResultOperations {
        &self.results
    }

    /// iModel metadata operations
    pub fn imodel(&self) -> &IModelOperations {
        &self.imodel
    }
}
