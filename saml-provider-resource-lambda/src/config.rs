//! Runtime configuration, read from the Lambda environment

use clap::Parser;

#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(
    name = "bootstrap",
    version,
    about = "CloudFormation custom resource handler for IAM SAML providers"
)]
pub struct Config {
    /// env_logger filter directives, e.g. `info` or `saml_provider_resource=debug`
    #[arg(long, env = "SAML_PROVIDER_LOG_LEVEL", default_value = "debug")]
    pub log_level: String,

    /// Override the IAM endpoint, for testing against a local stack
    #[arg(long, env = "SAML_PROVIDER_IAM_ENDPOINT_URL")]
    pub iam_endpoint_url: Option<String>,
}
