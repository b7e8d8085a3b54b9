//cargo run --release --features cli --bin cubemap -- to-erp faces/patch_1 patch_1_erp.jpg
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, Args};
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cubemap::{cmp_to_erp, erp_to_cmp_with, CubeFace, CubeFaceSet, FaceExtraction, Interpolation};
use cubemap::utils::{read_image, write_image};

/// Convert between cube map faces and equirectangular panoramas
#[derive(Parser)]
#[command(name = "cubemap", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose logging (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Worker threads, 0 = one per core
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Join six faces <prefix>_face_1 .. <prefix>_face_6 into one panorama
    #[command(name = "to-erp")]
    ToErp(ToErpArgs),

    /// Split a panorama into six faces <prefix>_face_1 .. <prefix>_face_6
    #[command(name = "to-cubemap")]
    ToCubemap(ToCubemapArgs),
}

#[derive(Args)]
struct ToErpArgs {
    /// Face file prefix, faces are read from <prefix>_face_<n>.<ext>
    prefix: String,
    /// Output panorama file
    output: String,
    /// Face file extension
    #[arg(long, default_value = "jpg")]
    ext: String,
}

#[derive(Args)]
struct ToCubemapArgs {
    /// Input panorama file
    input: String,
    /// Output prefix, faces are written to <prefix>_face_<n>.<ext>
    prefix: String,
    /// Face height (default: panorama height / 2)
    #[arg(long)]
    height: Option<usize>,
    /// Face width (default: panorama width / 4)
    #[arg(long)]
    width: Option<usize>,
    /// Resampling: nearest, bilinear or bicubic
    #[arg(long, default_value_t = Interpolation::Bicubic)]
    interpolation: Interpolation,
    /// Face file extension
    #[arg(long, default_value = "jpg")]
    ext: String,
}

/* Faces are numbered from 1 on disk, in CubeFace order */
fn face_path(prefix: &str, face: CubeFace, ext: &str) -> String {
    format!("{}_face_{}.{}", prefix, face.index() + 1, ext)
}

fn init_logging(verbose: u8) {
    let default_level = match verbose { 0 => "info", 1 => "debug", _ => "trace" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

fn to_erp(args: ToErpArgs) -> Result<()> {
    let faces = CubeFace::ALL.iter().map(|&face| {
        let path = face_path(&args.prefix, face, &args.ext);
        read_image(&path).with_context(|| format!("Failed to read {face} face from {path}"))
    }).collect::<Result<Vec<_>>>()?;
    let faces = CubeFaceSet::from_vec(faces)?;

    let start = Instant::now();
    let pano = cmp_to_erp(&faces)?;
    info!(width = pano.width, height = pano.height, "Panorama built in {:.2?}", start.elapsed());

    write_image(&args.output, &pano).with_context(|| format!("Failed to write {}", args.output))?;
    info!("Wrote {}", args.output);
    Ok(())
}

fn to_cubemap(args: ToCubemapArgs) -> Result<()> {
    let pano = read_image(&args.input).with_context(|| format!("Failed to read {}", args.input))?;

    let mut options = FaceExtraction::new().with_interpolation(args.interpolation);
    if let Some(height) = args.height { options = options.with_height(height); }
    if let Some(width) = args.width { options = options.with_width(width); }

    let start = Instant::now();
    let faces = erp_to_cmp_with(&pano, &options)?;
    let (width, height) = faces.face_dimensions();
    info!(width, height, "Faces rendered in {:.2?}", start.elapsed());

    for (face, image) in faces.iter() {
        let path = face_path(&args.prefix, face, &args.ext);
        write_image(&path, image).with_context(|| format!("Failed to write {face} face to {path}"))?;
        info!("Wrote {face} face to {path}");
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    match cli.command {
        Commands::ToErp(args) => to_erp(args),
        Commands::ToCubemap(args) => to_cubemap(args),
    }
}
