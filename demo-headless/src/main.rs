use clap::{Parser, Subcommand, ValueEnum};
use heat_encoding_core::{
    css_linear_gradient, gradient_stops, EncodingConfig, EncodingError, FixtureGenerator,
    Fraction, HeatEncoder, HeatSample, ViewPreset,
};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Heat visual encoding demo
#[derive(Parser, Debug)]
#[command(name = "heat-encoding-demo")]
#[command(about = "Encode urban heat observations as colors and heights", long_about = None)]
struct Args {
    /// JSON encoding configuration (defaults to the thermal surface view)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode one sample
    Encode {
        /// Surface temperature in °C
        #[arg(short, long, default_value_t = 35.0)]
        value: f64,

        /// SUHII (omit for temperature-only encoding)
        #[arg(short, long)]
        secondary: Option<f64>,

        /// Land-use class label
        #[arg(long)]
        class: Option<String>,
    },

    /// Print a color table across a view's domain
    Ramp {
        #[arg(long, value_enum, default_value_t = View::Surface)]
        view: View,

        /// Number of rows
        #[arg(short = 'n', long, default_value_t = 11)]
        steps: u32,
    },

    /// Print a seeded monthly series as a CSS gradient
    Gradient {
        /// District name ("industrial" runs warmer, "center" swings wider)
        #[arg(short, long, default_value = "City Center")]
        district: String,

        /// Heat-island intensity added to every month (suhii · 2 °C)
        #[arg(long)]
        suhii: Option<f64>,

        /// Random seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },

    /// List land-use class colors
    Classes,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum View {
    /// Configured ramp over the configured primary domain
    Surface,
    /// SUHII 1.2-3.0, green → red
    Suhii,
    /// Ground sensors 20-45 °C, green → red
    Ground,
    /// Ground/satellite gap 0-10 °C, green → red
    Difference,
    /// Vulnerability score 0-1, green → red
    Vulnerability,
    /// District extrusions 25-50 °C, green → yellow → red
    District,
    /// Time-control legend 0-40 °C, five steps
    Legend,
}

impl View {
    fn preset(self, config: &EncodingConfig) -> ViewPreset {
        match self {
            View::Surface => ViewPreset::new(config.primary_domain, config.ramp.clone()),
            View::Suhii => ViewPreset::suhii_class_view(),
            View::Ground => ViewPreset::ground_sensor(),
            View::Difference => ViewPreset::temperature_difference(),
            View::Vulnerability => ViewPreset::vulnerability(),
            View::District => ViewPreset::district(),
            View::Legend => ViewPreset::legend(),
        }
    }
}

fn main() -> Result<(), EncodingError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            info!("Loading encoding config from {}", path.display());
            EncodingConfig::from_file(path)?
        }
        None => EncodingConfig::default(),
    };

    match args.command {
        Command::Encode {
            value,
            secondary,
            class,
        } => encode(config, value, secondary, class),
        Command::Ramp { view, steps } => {
            ramp(&view.preset(&config), steps, config.alpha);
            Ok(())
        }
        Command::Gradient {
            district,
            suhii,
            seed,
        } => gradient(&district, suhii, seed),
        Command::Classes => {
            classes(&config);
            Ok(())
        }
    }
}

fn encode(
    config: EncodingConfig,
    value: f64,
    secondary: Option<f64>,
    class: Option<String>,
) -> Result<(), EncodingError> {
    let encoder = HeatEncoder::new(config)?;
    let sample = HeatSample {
        value,
        secondary,
        class_label: class,
    };
    let encoding = encoder.encode(&sample)?;

    println!("=== Heat Encoding ===\n");
    println!("Value:      {value:.2}");
    match secondary {
        Some(s) => println!("Secondary:  {s:.2}"),
        None => println!("Secondary:  (none)"),
    }
    println!("Intensity:  {:.4}", *encoding.intensity);
    println!(
        "Fill:       {} {}",
        encoding.fill.rgb().to_hex(),
        encoding.fill.to_css()
    );
    println!("Elevation:  {:.1}", encoding.elevation);
    if let Some(color) = encoding.class_color {
        println!(
            "Class:      {} {}",
            sample.class_label.as_deref().unwrap_or_default(),
            color.to_hex()
        );
    }
    println!(
        "SUHII view: {}",
        encoder.encode_suhii_class_view(&sample)?.to_css()
    );
    Ok(())
}

fn ramp(preset: &ViewPreset, steps: u32, alpha: u8) {
    let steps = steps.max(2);
    println!(
        "=== Ramp over [{}, {}] ===\n",
        preset.domain.min(),
        preset.domain.max()
    );
    println!("{:>10}  {:>6}  {:<8}  css", "value", "t", "hex");
    for i in 0..steps {
        let t = Fraction::new(f64::from(i) / f64::from(steps - 1));
        let value = preset.domain.denormalize(t);
        let color = preset.ramp.color_for(t, alpha);
        println!(
            "{value:>10.2}  {:>6.3}  {:<8}  {}",
            *t,
            color.rgb().to_hex(),
            color.to_css()
        );
    }
}

fn gradient(district: &str, suhii: Option<f64>, seed: u64) -> Result<(), EncodingError> {
    let mut generator = FixtureGenerator::new(seed);
    let mut series = generator.district_temperatures(district).to_vec();
    if let Some(suhii) = suhii {
        series = FixtureGenerator::suhii_adjusted(&series, suhii);
    }

    println!("=== {district} (seed {seed}) ===\n");
    let months = series
        .iter()
        .map(|t| format!("{t:.1}"))
        .collect::<Vec<_>>()
        .join(", ");
    println!("Monthly °C: {months}");

    let stops = gradient_stops(&series, &ViewPreset::legend())?;
    println!("\n{}", css_linear_gradient(&stops));
    Ok(())
}

fn classes(config: &EncodingConfig) {
    println!("=== Land-use classes ===\n");
    for (label, color) in config.class_table.legend() {
        println!("{}  {label}", color.to_hex());
    }
    println!("{}  (fallback)", config.class_table.fallback().to_hex());
}
