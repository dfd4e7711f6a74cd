//! Command line front end for the security monitor.
//!
//! Usage:
//!   security-monitor status
//!   security-monitor arm armed-home
//!   security-monitor sensor add "front door" door
//!   security-monitor sensor activate "front door" door
//!   security-monitor scan --cat true
//!   security-monitor simulate --interval 2
//!
//! Every command loads the JSON state file, applies one operation, saves and
//! prints the resulting state.

use clap::{Parser, Subcommand};
use log::{error, info};
use parking_lot::Mutex;
use security_monitor::config::{self, Config};
use security_monitor::data::{ArmingStatus, JsonFileRepository, Sensor, SensorType};
use security_monitor::image::{CameraFrame, FakeImageService, FixedImageService, ImageService};
use security_monitor::input::simulation::{run_camera_simulation, run_sensor_simulation};
use security_monitor::service::{StatusListener, StatusLog};
use security_monitor::{Result, SecurityService};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::signal;
use tokio::time::Duration;

#[derive(Parser)]
#[command(name = "security-monitor")]
#[command(about = "Home security monitoring simulator")]
struct Cli {
    /// State file holding sensors and status values
    #[arg(long, env = "SECURITY_STATE_FILE")]
    state_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print arming status, alarm status and sensors
    Status,
    /// Set the arming status (disarmed, armed-home, armed-away)
    Arm { status: ArmingStatus },
    /// Manage sensors
    Sensor {
        #[command(subcommand)]
        action: SensorAction,
    },
    /// Classify a camera frame
    Scan {
        /// Raw frame file; a blank frame is used when omitted
        #[arg(long)]
        file: Option<PathBuf>,

        /// Skip the classifier and use this verdict
        #[arg(long)]
        cat: Option<bool>,
    },
    /// Randomly toggle sensors and scan frames until Ctrl+C
    Simulate {
        /// Seconds between simulated events
        #[arg(long)]
        interval: Option<u64>,

        /// Also feed camera frames to the classifier
        #[arg(long)]
        camera: bool,
    },
}

#[derive(Subcommand)]
enum SensorAction {
    /// Register a sensor
    Add { name: String, kind: SensorType },
    /// Unregister a sensor
    Remove { name: String, kind: SensorType },
    /// Mark a sensor active
    Activate { name: String, kind: SensorType },
    /// Mark a sensor inactive
    Deactivate { name: String, kind: SensorType },
}

fn init_logger() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();
}

type Service = SecurityService<JsonFileRepository>;

fn build_service(config: &Config, image_service: Box<dyn ImageService>) -> Result<Service> {
    let repository = JsonFileRepository::open(&config.storage.state_file)?;
    Ok(SecurityService::new(repository, image_service)
        .with_confidence_threshold(config.image.confidence_threshold))
}

fn print_state(service: &Service) {
    let arming = service.arming_status();
    let alarm = service.alarm_status();
    println!("Arming: {} ({})", arming, arming.description());
    println!("Alarm:  {} ({})", alarm, alarm.description());
    let sensors = service.sensors();
    if sensors.is_empty() {
        println!("Sensors: none");
        return;
    }
    println!("Sensors:");
    for sensor in sensors {
        println!(
            "  {:<20} {:<7} {}",
            sensor.name(),
            sensor.kind(),
            if sensor.is_active() { "active" } else { "inactive" }
        );
    }
}

fn run_command(service: &mut Service, command: Commands) -> Result<()> {
    match command {
        Commands::Status | Commands::Simulate { .. } => Ok(()),
        Commands::Arm { status } => service.set_arming_status(status),
        Commands::Sensor { action } => match action {
            SensorAction::Add { name, kind } => service.add_sensor(Sensor::new(name, kind)),
            SensorAction::Remove { name, kind } => service.remove_sensor(&Sensor::new(name, kind)),
            SensorAction::Activate { name, kind } => {
                service.change_sensor_activation(&Sensor::new(name, kind), true)
            }
            SensorAction::Deactivate { name, kind } => {
                service.change_sensor_activation(&Sensor::new(name, kind), false)
            }
        },
        Commands::Scan { file, .. } => {
            let frame = match file {
                Some(path) => CameraFrame::from_file(&path)?,
                None => CameraFrame::blank(240, 240),
            };
            service.process_image(&frame).map(|_| ())
        }
    }
}

async fn simulate(service: Service, period: Duration, camera: bool) {
    let service = Arc::new(Mutex::new(service));
    let sensor_task = run_sensor_simulation(service.clone(), period);
    let camera_task = camera.then(|| run_camera_simulation(service.clone(), period));

    info!("Simulation running, press Ctrl+C to exit");
    match signal::ctrl_c().await {
        Ok(()) => info!("Received shutdown signal"),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }

    sensor_task.abort();
    if let Some(task) = camera_task {
        task.abort();
    }
    print_state(&service.lock());
}

#[tokio::main]
async fn main() {
    config::load_dotenv();
    init_logger();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(path) = cli.state_file {
        config.storage.state_file = path;
    }

    let image_service: Box<dyn ImageService> = match &cli.command {
        Commands::Scan { cat: Some(cat), .. } => Box::new(FixedImageService::new(*cat)),
        _ => Box::new(FakeImageService::new()),
    };

    let mut service = match build_service(&config, image_service) {
        Ok(service) => service,
        Err(e) => {
            error!(
                "Failed to open state file {}: {}",
                config.storage.state_file.display(),
                e
            );
            std::process::exit(1);
        }
    };

    if let Commands::Simulate { interval, camera } = cli.command {
        let secs = interval.unwrap_or(config.simulation.interval_secs).max(1);
        simulate(service, Duration::from_secs(secs), camera).await;
        return;
    }

    let log = Arc::new(StatusLog::new(32));
    let listener: Arc<dyn StatusListener> = log.clone();
    service.add_status_listener(listener);

    if let Err(e) = run_command(&mut service, cli.command) {
        error!("{}", e);
        std::process::exit(1);
    }

    for event in log.events() {
        println!("{}", event);
    }
    print_state(&service);
}
