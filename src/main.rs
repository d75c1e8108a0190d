//! x-harvester - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use x_harvester::{
    api::XApi,
    cli::Args,
    config::{default_config_path, normalize_handles, validate_config, validate_handles, Config},
    download::{build_jobs, harvest, DownloadDispatcher, HarvestState},
    error::{exit_codes, Error, Result},
    fs::folder_name,
    media::EngagementFilter,
    output::{
        create_item_bar, create_spinner, print_account, print_banner, print_config_summary,
        print_error, print_harvest_stats, print_info, print_success, print_warning,
    },
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_)
                | Error::ConfigValidation { .. }
                | Error::MissingConfig(_)
                | Error::TomlParse(_)
                | Error::InvalidFilename(_) => ExitCode::from(exit_codes::CONFIG_ERROR as u8),
                Error::Authentication(_)
                | Error::Api(_)
                | Error::Lookup(_)
                | Error::AccountNotFound(_)
                | Error::RateLimited(_)
                | Error::Fetch(_) => ExitCode::from(exit_codes::API_ERROR as u8),
                Error::Dispatch { .. } => ExitCode::from(exit_codes::DISPATCH_ERROR as u8),
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    print_banner();

    // Load configuration
    let config_path = args.config.clone().unwrap_or_else(default_config_path);
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    validate_config(&config)?;
    validate_handles(&args.handle)?;

    let handles = normalize_handles(&args.handle);
    let folder = folder_name(&handles)?;

    print_config_summary(
        &handles,
        config.harvest.likes_threshold,
        config.harvest.dig,
        &config.downloader.endpoint,
    );

    // Resolve the account; nothing to harvest without it.
    let api = XApi::new(&config.api.bearer_token, &config.api.host, config.api_timeout())?;
    let account = api.lookup_account(&handles).await?;
    print_account(&account);

    let mut state = HarvestState::new(folder.clone(), account.id.clone());

    // Walk the timeline
    let spinner = create_spinner("Reading timeline...", !args.quiet);
    let engagement = EngagementFilter::new(config.harvest.likes_threshold);
    let outcome = harvest(
        &api,
        &account,
        &config.timeline_options(),
        &engagement,
        config.harvest.dig,
        &mut state,
    )
    .await;
    spinner.finish_and_clear();

    if let Some(e) = &outcome.error {
        print_warning(&format!(
            "Timeline stopped early for {}: {}",
            account.id, e
        ));
    }
    print_info(&format!("Collected {} media item(s)", outcome.media.len()));

    // Hand everything collected to the download agent
    let (jobs, skipped) = build_jobs(&outcome.media, &folder, &config.downloader.url_suffix);
    state.jobs_skipped += skipped;

    let dispatcher = DownloadDispatcher::new(&config.downloader);
    let bar = create_item_bar(jobs.len() as u64, "Queueing", !args.quiet);
    let results = dispatcher.dispatch_all(&jobs, |_| bar.inc(1)).await;
    bar.finish_and_clear();

    for outcome in &results {
        state.record_dispatch(&outcome.result);
    }

    print_harvest_stats(&state);

    if state.jobs_failed > 0 {
        return Err(Error::Dispatch {
            url: config.downloader.endpoint.clone(),
            message: format!(
                "{} of {} job(s) failed",
                state.jobs_failed,
                state.jobs_attempted()
            ),
        });
    }

    if let Some(e) = outcome.error {
        return Err(e);
    }

    print_success("Download completed.");
    Ok(())
}
