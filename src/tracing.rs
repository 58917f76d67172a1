use crate::Status;
use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::{
    fmt::writer::MakeWriterExt, layer::SubscriberExt, util::SubscriberInitExt, Layer,
};

pub struct Tracing;

impl Tracing {
    /// Human readable logs on stderr.
    pub fn setup(name: &str) -> Result<(), Status> {
        match tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::Layer::new()
                    .with_target(false)
                    .with_writer(std::io::stderr.with_max_level(Level::INFO))
                    .with_filter(LevelFilter::INFO),
            )
            .try_init()
        {
            Ok(()) => Ok(()),
            Err(e) => {
                eprintln!("{name}: {e}");
                Err(Status::new("Failed to setup tracing", e))
            }
        }
    }

    /// Stackdriver formatted JSON logs on stderr.
    pub fn setup_prod(name: &str) -> Result<(), Status> {
        match tracing_subscriber::registry()
            .with(
                tracing_stackdriver::layer()
                    .with_writer(std::io::stderr.with_max_level(Level::INFO)),
            )
            .try_init()
        {
            Ok(()) => Ok(()),
            Err(e) => {
                eprintln!("{name}: {e}");
                Err(Status::new("Failed to setup tracing", e))
            }
        }
    }
}
