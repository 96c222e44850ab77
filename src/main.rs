use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info, warn};

use rs_pest_client::app::{create_client, init_tracing};
use rs_pest_client::client::PestApiClient;
use rs_pest_client::handlers::{run_detection, run_outbreak_prediction, run_week_prediction};
use rs_pest_client::models::{OutbreakFeatures, PestImage, WeekQuery};
use rs_pest_client::state::Submission;

#[derive(Parser)]
#[command(name = "pestwatch")]
#[command(about = "Crop pest detection and outbreak prediction client", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

// Field arguments default to empty strings so the form validation decides
// what is missing, not the argument parser.
#[derive(Subcommand)]
enum Commands {
    /// Detect pests on a crop image
    Detect {
        /// Image file to upload (png, jpg, jpeg, gif, bmp)
        image: PathBuf,

        /// Save the annotated image the backend produced to this file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Predict outbreak risk from survey features
    Predict {
        /// Collection type (e.g. light trap)
        #[arg(long, default_value = "")]
        collection_type: String,

        /// Maximum temperature
        #[arg(long, default_value = "")]
        max_temp: String,

        /// Minimum temperature
        #[arg(long, default_value = "")]
        min_temp: String,

        /// Relative humidity
        #[arg(long, default_value = "")]
        humidity: String,

        /// Geography / location
        #[arg(long, default_value = "")]
        geography: String,
    },

    /// Predict pest activity for a week of the year
    Week {
        /// Week number (1-52)
        week: String,
    },
}

#[tokio::main]
async fn main() {
    init_tracing();

    let cli = Cli::parse();

    let client = match create_client() {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to create backend client: {}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Detect { image, output } => {
            let image = PestImage::new(image);
            let submission = run_detection(&client, &image).await;
            let report = match submission.result() {
                Some(report) => report.clone(),
                None => fail(&submission),
            };

            println!("{}", report.pest_class);
            println!("{}", report.suggestion);

            match (report.annotated_image.as_deref(), output) {
                (Some(path), Some(dest)) => {
                    if let Err(e) = client.fetch_annotated_image(path, &dest).await {
                        error!("Failed to download annotated image: {}", e);
                        std::process::exit(1);
                    }
                    println!("Annotated image saved to {}", dest.display());
                }
                (Some(path), None) => info!("Annotated image available at {}", path),
                (None, Some(_)) => warn!("The backend returned no annotated image to download"),
                (None, None) => {}
            }
        }
        Commands::Predict {
            collection_type,
            max_temp,
            min_temp,
            humidity,
            geography,
        } => {
            let features = OutbreakFeatures {
                feature1: collection_type,
                feature2: max_temp,
                feature3: min_temp,
                feature4: humidity,
                feature5: geography,
            };
            print_prediction(run_outbreak_prediction(&client, &features).await);
        }
        Commands::Week { week } => {
            let query = WeekQuery::new(week);
            print_week_prediction(&client, query).await;
        }
    }
}

async fn print_week_prediction(client: &PestApiClient, query: WeekQuery) {
    let week = query.week.trim().to_string();
    let submission = run_week_prediction(client, &query).await;
    match submission.result() {
        Some(text) => {
            println!("Prediction for week {week}:");
            println!("{text}");
        }
        None => fail(&submission),
    }
}

fn print_prediction(submission: Submission<String>) {
    match submission.result() {
        Some(text) => println!("{text}"),
        None => fail(&submission),
    }
}

fn fail<T>(submission: &Submission<T>) -> ! {
    let message = submission.error().unwrap_or("Submission did not complete");
    error!("{}", message);
    std::process::exit(1);
}
