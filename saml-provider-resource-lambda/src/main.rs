//! Lambda entry point for the SAML provider custom resource.

mod config;

use clap::Parser;
use config::Config;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use log::{error, info};
use saml_provider_resource::{
    handle_event, HttpResponseSender, InvocationContext, LifecycleEvent, LifecycleHandler,
    ProviderOutcome,
};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = Config::parse();

    env_logger::Builder::new()
        .parse_filters(&config.log_level)
        .format_timestamp_millis()
        .init();

    let http = reqwest::Client::new();

    // A failed client build is kept and answered per invocation, so that
    // CloudFormation still gets a FAILED response instead of a timeout.
    let handler = LifecycleHandler::from_env(http.clone(), config.iam_endpoint_url.as_deref()).await;
    if let Err(e) = &handler {
        error!("{}", e);
    }
    let sender = HttpResponseSender::new(http);

    info!("Starting SAML provider custom resource handler");

    let handler = &handler;
    let sender = &sender;
    lambda_runtime::run(service_fn(move |event: LambdaEvent<LifecycleEvent>| async move {
        let context = InvocationContext::new(event.context.env_config.log_stream.clone());
        let outcome: ProviderOutcome = handle_event(handler, sender, &event.payload, &context)
            .await
            .map_err(Error::from)?;
        Ok::<_, Error>(outcome)
    }))
    .await
}
