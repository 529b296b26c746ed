use {
    clap::Parser,
    color_eyre::Report,
    eyre::WrapErr as _,
    skelshot::{json, Pose, HUMANOID},
    std::path::PathBuf,
};

/// Captures a humanoid skeleton snapshot from a pose file and prints
/// it as a JSON document.
#[derive(Debug, Parser)]
#[command(name = "skelshot")]
struct Opts {
    /// RON pose file with world-space bone positions.
    pose: PathBuf,

    /// Write the JSON document here instead of stdout.
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn main() -> Result<(), Report> {
    color_eyre::install()?;
    install_tracing();

    let opts = Opts::parse();

    let pose = Pose::load(&opts.pose).wrap_err_with(|| {
        format!("failed to load pose `{}`", opts.pose.display())
    })?;

    if pose.bones.is_empty() {
        tracing::warn!(
            "`{}` maps no humanoid bones",
            opts.pose.display(),
        );
        return Ok(());
    }

    let snapshot = skelshot::capture(&HUMANOID, &pose, pose.origin());
    let document = json::render(&snapshot);

    tracing::info!(
        "captured {} of {} bones",
        snapshot.mapped_count(),
        snapshot.node_count(),
    );

    match &opts.out {
        Some(path) => {
            std::fs::write(path, &document).wrap_err_with(|| {
                format!("failed to write `{}`", path.display())
            })?
        }
        None => println!("{}", document),
    }

    Ok(())
}

fn install_tracing() {
    use tracing_subscriber::{
        layer::SubscriberExt as _, util::SubscriberInitExt as _,
        EnvFilter,
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_error::ErrorLayer::default())
        .init();
}
