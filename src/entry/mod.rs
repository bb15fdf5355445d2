use std::sync::Arc;

use clap::{ArgMatches, CommandFactory, FromArgMatches};
use tracing::debug;

use reqgate::app::run_batch;
use reqgate::args::FetchArgs;
use reqgate::config::{apply_config, load_config};
use reqgate::dispatch::{DispatchConfig, build_jobs, repeat_url};
use reqgate::error::AppResult;
use reqgate::http::{ClientSettings, ReqwestTransport};
use reqgate::sinks::{ConsoleSink, print_summary};

pub(crate) fn run() -> AppResult<()> {
    let (mut args, matches) = parse_args()?;

    if let Some(config) = load_config(args.config.as_deref())? {
        apply_config(&mut args, &matches, &config)?;
    }

    crate::system::logger::init_logging(args.verbose, args.no_color);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(&args))
}

fn parse_args() -> AppResult<(FetchArgs, ArgMatches)> {
    let matches = FetchArgs::command().get_matches();
    let args = FetchArgs::from_arg_matches(&matches)?;
    Ok((args, matches))
}

async fn run_async(args: &FetchArgs) -> AppResult<()> {
    let jobs = build_jobs(&repeat_url(&args.url, args.requests)?)?;
    let config = DispatchConfig {
        max_inflight: args.max_inflight,
        max_idle_reusable: args.max_idle,
    };
    debug!("Resolved limits: {:?}", config);

    let settings = ClientSettings {
        max_idle_per_host: config.max_idle_reusable,
        request_timeout: args.request_timeout,
        connect_timeout: args.connect_timeout,
        insecure: args.insecure,
    };

    // One client for the whole batch; dropped once every job has finished.
    let transport = Arc::new(ReqwestTransport::new(&settings)?);
    let sink = Arc::new(ConsoleSink::new(args.preview_chars));
    let report = run_batch(jobs, &config, Arc::clone(&transport), sink).await?;
    drop(transport);

    print_summary(&report.summary);
    Ok(())
}
