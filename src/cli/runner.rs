//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::client::ClashDetectionClient;
use crate::config::ClientOptions;
use crate::error::Result;
use crate::operations::{
    CollectionUrlParams, GetIModelMetadataParams, GetResultParams, GetRunListParams,
    GetSuppressionRuleListParams, GetTemplateListParams, GetTestListParams, ProjectUrlParams,
    RunTestParams,
};
use crate::pagination::{take, to_array, EntityIterator};
use serde::Serialize;
use tracing::{debug, warn};

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = self.build_client()?;

        match &self.cli.command {
            Commands::Templates => {
                let templates = client.templates().list(GetTemplateListParams {
                    access_token: None,
                    url_params: self.collection_params(),
                })?;
                self.output_list(&self.collect(templates).await?)
            }
            Commands::Rules { representation } => {
                let params = GetSuppressionRuleListParams {
                    url_params: self.collection_params(),
                    ..GetSuppressionRuleListParams::default()
                };
                if *representation {
                    let rules = client.rules().list_representation(params)?;
                    self.output_list(&self.collect(rules).await?)
                } else {
                    let rules = client.rules().list_minimal(params)?;
                    self.output_list(&self.collect(rules).await?)
                }
            }
            Commands::Tests => {
                let tests = client.tests().list(GetTestListParams {
                    url_params: self.collection_params(),
                    ..GetTestListParams::default()
                })?;
                self.output_list(&self.collect(tests).await?)
            }
            Commands::Runs { representation } => {
                let params = GetRunListParams {
                    access_token: None,
                    url_params: self.collection_params(),
                };
                if *representation {
                    let runs = client.runs().list_representation(params).await?;
                    self.output_list(&self.limited(runs))
                } else {
                    let runs = client.runs().list_minimal(params).await?;
                    self.output_list(&self.limited(runs))
                }
            }
            Commands::Result { result_id } => {
                let result = client
                    .results()
                    .get(GetResultParams {
                        access_token: None,
                        result_id: result_id.clone(),
                    })
                    .await?;
                self.output(&result)
            }
            Commands::SchemaInfo { imodel_id } => {
                let info = client
                    .imodel()
                    .get_schema_info(self.metadata_params(imodel_id))
                    .await?;
                self.output(&info)
            }
            Commands::ModelsAndCategories { imodel_id } => {
                let metadata = client
                    .imodel()
                    .get_models_and_categories(self.metadata_params(imodel_id))
                    .await?;
                self.output(&metadata)
            }
            Commands::RunTest {
                test_id,
                imodel_id,
                named_version,
            } => {
                let run = client
                    .tests()
                    .run_test(RunTestParams {
                        test_id: test_id.clone(),
                        imodel_id: imodel_id.clone(),
                        named_version_id: named_version.clone(),
                        ..RunTestParams::default()
                    })
                    .await?;
                if run.is_none() {
                    warn!("iModel {imodel_id} has no named versions; no run was started");
                }
                self.output(&run)
            }
        }
    }

    fn build_client(&self) -> Result<ClashDetectionClient> {
        let mut builder = ClientOptions::builder();
        if let Some(url) = &self.cli.base_url {
            builder = builder.base_url(url.as_str());
        }
        if let Some(token) = &self.cli.access_token {
            builder = builder.access_token(token.as_str());
        }
        ClashDetectionClient::new(builder.build())
    }

    fn collection_params(&self) -> Option<CollectionUrlParams> {
        self.cli.project.as_ref().map(|project| CollectionUrlParams {
            project_id: project.clone(),
            top: self.cli.top,
        })
    }

    fn metadata_params(&self, imodel_id: &str) -> GetIModelMetadataParams {
        GetIModelMetadataParams {
            access_token: None,
            imodel_id: imodel_id.to_string(),
            url_params: self.cli.project.as_deref().map(ProjectUrlParams::new),
        }
    }

    /// Drain a listing, honoring `--limit`
    async fn collect<I: EntityIterator>(&self, mut iterator: I) -> Result<Vec<I::Item>> {
        let items = match self.cli.limit {
            Some(limit) => take(&mut iterator, limit).await?,
            None => to_array(&mut iterator).await?,
        };
        debug!("Collected {} entities", items.len());
        Ok(items)
    }

    /// Apply `--limit` to an unpaged listing
    fn limited<T>(&self, mut items: Vec<T>) -> Vec<T> {
        if let Some(limit) = self.cli.limit {
            items.truncate(limit);
        }
        items
    }

    fn output_list<T: Serialize>(&self, items: &[T]) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => {
                for item in items {
                    println!("{}", serde_json::to_string(item)?);
                }
            }
            OutputFormat::Pretty => println!("{}", serde_json::to_string_pretty(items)?),
        }
        Ok(())
    }

    fn output<T: Serialize>(&self, value: &T) -> Result<()> {
        let text = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{text}");
        Ok(())
    }
}
