use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;

use prismgen::config::{OutlineSpec, PrismSpec, SceneConfig};
use prismgen::geometry::{is_clockwise, reverse_winding};
use prismgen::mesh::{Mesh, extrude_polygon, stl::estimate_stl_size, validate_mesh, write_stl};

/// Extrude 2D outlines into flat-shaded 3D prism meshes
///
/// Examples:
///   # A 2x4 box, 1 unit tall
///   prismgen --width 2 --length 4 --height 1 -o box.stl
///
///   # A cylinder approximated by 12 segments
///   prismgen --radius 1 --height 2 -o puck.stl
///
///   # A whole scene from a config file
///   prismgen --config scene.toml
#[derive(Parser, Debug)]
#[command(name = "prismgen")]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a scene file (optional, auto-searches prismgen.toml if not provided)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Rectangle width (use with --length)
    #[arg(long, requires = "length")]
    width: Option<f32>,

    /// Rectangle length (use with --width)
    #[arg(long, requires = "width")]
    length: Option<f32>,

    /// Circle radius
    #[arg(long, conflicts_with = "width")]
    radius: Option<f32>,

    /// Circle segment count
    #[arg(long, default_value = "12")]
    segments: usize,

    /// Extrusion height, split symmetrically around the outline plane
    #[arg(long, default_value = "1.0")]
    height: f32,

    /// Output STL file path
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scene = if let Some(ref config_path) = args.config {
        if config_path.exists() {
            SceneConfig::from_path(config_path)?
        } else {
            bail!("Scene file not found: {:?}", config_path);
        }
    } else if let Some(shape) = shape_from_args(&args) {
        SceneConfig {
            output: None,
            prisms: vec![PrismSpec {
                shape,
                height: args.height,
                translation: [0.0; 3],
                rotation: [0.0, 0.0, 0.0, 1.0],
            }],
        }
    } else if let Some(scene) = SceneConfig::load() {
        scene
    } else {
        bail!("Must provide --config, --width/--length, or --radius (or a prismgen.toml)");
    };

    if scene.prisms.is_empty() {
        bail!("Scene contains no prisms");
    }

    let output_path = args
        .output
        .clone()
        .or_else(|| scene.output.clone())
        .unwrap_or_else(|| PathBuf::from("prism.stl"));

    println!("prismgen - Prism Mesh Generator");
    println!("===============================");
    println!();

    if args.verbose {
        println!("Configuration:");
        println!("  Prisms: {}", scene.prisms.len());
        println!("  Output: {}", output_path.display());
        println!();
    }

    let mut combined = Mesh::new();
    for (i, prism) in scene.prisms.iter().enumerate() {
        let outline = prism.shape.outline();
        // Explicit point lists carry no winding guarantee; fix the order
        // here rather than rejecting the scene.
        let outline = if is_clockwise(&outline) {
            outline
        } else {
            reverse_winding(&outline)
        };

        let mesh = extrude_polygon(&outline, prism.height, &prism.placement())
            .with_context(|| format!("Prism {} rejected", i))?;

        if args.verbose {
            println!(
                "  Prism {}: {} outline vertices -> {} triangles",
                i,
                outline.len(),
                mesh.triangle_count()
            );
        }

        combined.vertices.extend_from_slice(&mesh.vertices);
        combined.normals.extend_from_slice(&mesh.normals);
    }

    let report = validate_mesh(&combined);
    if report.has_issues() {
        for warning in &report.warnings {
            eprintln!("Warning: {}", warning);
        }
    }
    if args.verbose {
        println!("  {}", report.summary());
        println!();
    }

    write_stl(&output_path, &combined)?;

    println!(
        "Wrote {} triangles to {} ({} bytes)",
        combined.triangle_count(),
        output_path.display(),
        estimate_stl_size(combined.triangle_count())
    );

    Ok(())
}

fn shape_from_args(args: &Args) -> Option<OutlineSpec> {
    if let (Some(width), Some(length)) = (args.width, args.length) {
        Some(OutlineSpec::Rectangle { width, length })
    } else {
        args.radius.map(|radius| OutlineSpec::Circle {
            radius,
            segments: args.segments,
        })
    }
}
