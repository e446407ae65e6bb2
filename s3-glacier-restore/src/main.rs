/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0
 */
use std::process::ExitCode;
use std::time::Duration;

use aws_sdk_s3::error::DisplayErrorContext;
use clap::Parser;
use s3_glacier_restore::error::Error;
use s3_glacier_restore::types::{RestoreCodeMapping, Tier, DEFAULT_POLL_INTERVAL};
use tracing::{debug_span, Instrument};
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, Clone, clap::Parser)]
#[command(name = "s3-glacier-restore")]
#[command(about = "Restores archived S3 objects and checks on their restore status.")]
struct Args {
    /// Bucket holding the archived objects
    #[arg(short, long, required = true)]
    bucket: String,

    /// Only consider keys beginning with this prefix
    #[arg(short, long, default_value = "")]
    prefix: String,

    /// Do not print progress messages
    #[arg(short, long, default_value_t = false, action = clap::ArgAction::SetTrue)]
    quiet: bool,

    /// Access key to use instead of the default credential chain
    #[arg(long)]
    aws_access_key_id: Option<String>,

    /// Secret key paired with --aws-access-key-id
    #[arg(long)]
    aws_secret_access_key: Option<String>,

    /// Session token for temporary credentials
    #[arg(long)]
    aws_session_token: Option<String>,

    /// Report RestoreAlreadyInProgress as "in progress" and every other error code as a failure
    #[arg(long, default_value_t = false, action = clap::ArgAction::SetTrue)]
    direct_code_mapping: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, clap::Subcommand)]
enum Command {
    /// Request the restore of a single object
    #[command(alias = "restore-single-object")]
    RestoreObject {
        /// Key of the archived object
        key: String,

        #[command(flatten)]
        params: RestoreArgs,
    },

    /// Request the restore of every object under the prefix
    RestoreObjects {
        #[command(flatten)]
        params: RestoreArgs,
    },

    /// Check whether a single object has been restored
    IsObjectRestored {
        /// Key of the object to check
        key: String,
    },

    /// Wait until every object under the prefix has been restored
    CheckRestoreStatus {
        /// Seconds to sleep between two checks of the same object
        #[arg(long, default_value_t = DEFAULT_POLL_INTERVAL.as_secs())]
        sleep_seconds: u64,

        /// Give up on an object after this many checks
        #[arg(long)]
        max_attempts: Option<u32>,
    },
}

#[derive(Debug, Clone, clap::Args)]
struct RestoreArgs {
    /// Number of days the restored copy stays available
    #[arg(short, long, default_value_t = s3_glacier_restore::DEFAULT_RESTORE_DAYS)]
    days: i32,

    /// Retrieval tier
    #[arg(short, long, value_enum, default_value_t = TierArg::Standard)]
    tier: TierArg,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum TierArg {
    #[value(name = "Standard")]
    Standard,
    #[value(name = "Bulk")]
    Bulk,
    #[value(name = "Expedited")]
    Expedited,
}

impl From<TierArg> for Tier {
    fn from(value: TierArg) -> Self {
        match value {
            TierArg::Standard => Tier::Standard,
            TierArg::Bulk => Tier::Bulk,
            TierArg::Expedited => Tier::Expedited,
        }
    }
}

async fn client_from_args(args: &Args) -> Result<s3_glacier_restore::Client, Error> {
    let code_mapping = if args.direct_code_mapping {
        RestoreCodeMapping::Direct
    } else {
        RestoreCodeMapping::Inverted
    };

    let mut loader = s3_glacier_restore::from_env()
        .bucket(&args.bucket)
        .prefix(&args.prefix)
        .code_mapping(code_mapping)
        .access_key_id(args.aws_access_key_id.clone())
        .secret_access_key(args.aws_secret_access_key.clone())
        .session_token(args.aws_session_token.clone());
    if args.quiet {
        loader = loader.quiet();
    }

    let config = loader.load().await?;
    Ok(s3_glacier_restore::Client::new(config))
}

async fn do_restore_object(
    client: &s3_glacier_restore::Client,
    key: &str,
    params: &RestoreArgs,
) -> Result<(), Error> {
    let output = client
        .restore_object()
        .key(key)
        .days(params.days)
        .tier(params.tier.into())
        .send()
        .await?;
    output.into_outcome().into_result()
}

async fn do_restore_objects(
    client: &s3_glacier_restore::Client,
    params: &RestoreArgs,
) -> Result<(), Error> {
    let output = client
        .restore_objects()
        .days(params.days)
        .tier(params.tier.into())
        .send()
        .await?;

    println!(
        "restore requested: {}, already in progress: {}, failed: {}",
        output.successful().len(),
        output.restore_in_progress().len(),
        output.failed().len()
    );
    for failed in output.failed() {
        println!(
            "  {}: {}",
            failed.object().key().unwrap_or_default(),
            DisplayErrorContext(failed.error())
        );
    }
    Ok(())
}

async fn do_is_object_restored(
    client: &s3_glacier_restore::Client,
    key: &str,
) -> Result<(), Error> {
    if client.is_object_restored(key).await? {
        println!("Object ready!");
    } else {
        println!("Restore in progress...");
    }
    Ok(())
}

async fn do_check_restore_status(
    client: &s3_glacier_restore::Client,
    sleep_seconds: u64,
    max_attempts: Option<u32>,
) -> Result<(), Error> {
    println!(
        "Checking status of bucket. This operation can take some time if there are too many files."
    );

    let output = client
        .wait_for_restore()
        .interval(Duration::from_secs(sleep_seconds))
        .set_max_attempts(max_attempts)
        .send()
        .await?;
    tracing::debug!("wait output: {output:?}");
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    if !args.quiet {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::builder()
                    .with_default_directive(LevelFilter::INFO.into())
                    .from_env_lossy(),
            )
            .init();
    }

    let result = run(args).instrument(debug_span!("s3-glacier-restore")).await;

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", DisplayErrorContext(&err));
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> Result<(), Error> {
    let client = client_from_args(&args).await?;

    match &args.command {
        Command::RestoreObject { key, params } => do_restore_object(&client, key, params).await,
        Command::RestoreObjects { params } => do_restore_objects(&client, params).await,
        Command::IsObjectRestored { key } => do_is_object_restored(&client, key).await,
        Command::CheckRestoreStatus {
            sleep_seconds,
            max_attempts,
        } => do_check_restore_status(&client, *sleep_seconds, *max_attempts).await,
    }
}
