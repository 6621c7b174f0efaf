use clap::Parser;
use escape_explorer::config::ExplorerConfig;
use escape_explorer::controllers::cli::render_to_file::CliRenderController;
use escape_explorer::controllers::interactive::ViewCommand;
use escape_explorer::core::colouring::presets::PalettePreset;
use escape_explorer::core::fractals::kernel_source::KernelSource;
use escape_explorer::core::fractals::variant::FractalVariant;
use escape_explorer::core::view::presets::ViewPreset;
use escape_explorer::presenters::file::ppm::PpmFilePresenter;
use log::info;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "escape_explorer")]
#[command(about = "Renders a view of an escape-time fractal to a PPM image")]
struct Args {
    /// TOML configuration file; command line options override it
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    width: Option<u32>,

    #[arg(long)]
    height: Option<u32>,

    /// mandelbrot, rk1, rk2, rk3, rk4 or rk3twist
    #[arg(long)]
    variant: Option<FractalVariant>,

    /// ugly, classic or victorian
    #[arg(long)]
    palette: Option<PalettePreset>,

    /// home, about, info or contact
    #[arg(long)]
    view: Option<ViewPreset>,

    /// Render the Julia set for this constant, given as `re,im`
    #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
    julia: Option<(f64, f64)>,

    #[arg(long)]
    colour_by_magnitude: bool,

    /// Drag by a screen delta `dx,dy` after moving to the view
    #[arg(long, value_parser = parse_pair, allow_hyphen_values = true)]
    pan: Option<(f64, f64)>,

    /// Scroll wheel delta; positive zooms out
    #[arg(long, allow_hyphen_values = true)]
    scroll: Option<f64>,

    /// Rotation in degrees
    #[arg(long, allow_hyphen_values = true)]
    rotate: Option<f64>,

    #[arg(short, long, default_value = "output/fractal.ppm")]
    output: PathBuf,

    /// Print the generated shader source and exit
    #[arg(long)]
    emit_shader: bool,
}

impl Args {
    fn apply_overrides(&self, config: &mut ExplorerConfig) {
        if let Some(width) = self.width {
            config.output.width = width;
        }
        if let Some(height) = self.height {
            config.output.height = height;
        }
        if let Some(variant) = self.variant {
            config.render.variant = variant;
        }
        if let Some(preset) = self.palette {
            config.palette.preset = preset;
            config.palette.colours = None;
        }
        if let Some(preset) = self.view {
            config.view.preset = preset;
            config.view.zoom = None;
            config.view.center = None;
            config.view.angle = None;
        }
        if let Some((real, imag)) = self.julia {
            config.render.render_julia_set = true;
            config.render.julia_constant = [real, imag];
        }
        if self.colour_by_magnitude {
            config.render.colour_by_index = false;
        }
    }

    fn commands(&self) -> Vec<ViewCommand> {
        let mut commands = Vec::new();

        if let Some((dx, dy)) = self.pan {
            commands.push(ViewCommand::Pan { dx, dy });
        }
        if let Some(delta_y) = self.scroll {
            commands.push(ViewCommand::Zoom { delta_y });
        }
        if let Some(degrees) = self.rotate {
            commands.push(ViewCommand::Rotate { degrees });
        }

        commands
    }
}

fn parse_pair(value: &str) -> Result<(f64, f64), String> {
    let (first, second) = value
        .split_once(',')
        .ok_or_else(|| format!("expected two comma separated numbers, got '{value}'"))?;

    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid number '{}': {e}", part.trim()))
    };

    Ok((parse(first)?, parse(second)?))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ExplorerConfig::load(path)?,
        None => ExplorerConfig::default(),
    };
    args.apply_overrides(&mut config);

    let settings = config.validate()?;

    if args.emit_shader {
        let kernel = KernelSource::generate(settings.variant, settings.precision)?;
        println!("// vertex\n{}\n// fragment\n{}", kernel.vertex, kernel.fragment);
        return Ok(());
    }

    info!(
        "Rendering {} at {}x{}",
        settings.variant,
        settings.viewport.width(),
        settings.viewport.height()
    );

    let mut controller = CliRenderController::new(PpmFilePresenter::new());
    controller.generate(settings, &args.commands())?;
    controller.write(&args.output)?;

    Ok(())
}
