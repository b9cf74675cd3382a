use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use fractal_viewer::{
    Complex, DEFAULT_HEIGHT, DEFAULT_MAX_ITERATIONS, DEFAULT_PICTURES_DIR, DEFAULT_WIDTH,
    DEFAULT_ZOOM_FACTOR, Dimensions, InputEvent, PngDirectorySink, Point, SessionConfig,
    SessionController,
};

/// Render one escape-time fractal frame to <pictures>/image_<n>.png.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    width: u32,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    height: u32,

    /// 0 Mandelbrot, 1 Mandelbrot Julia, 2 Burning Ship, 3 Burning Ship Julia
    #[arg(long, default_value_t = 0)]
    mode: u32,

    #[arg(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: u32,

    #[arg(long, default_value_t = DEFAULT_ZOOM_FACTOR)]
    zoom_factor: f64,

    /// Julia parameter as `re,im`
    #[arg(long, value_parser = parse_complex, default_value = "0,0", allow_hyphen_values = true)]
    julia: Complex,

    /// Scroll-in steps at the frame center before rendering
    #[arg(long, default_value_t = 0)]
    zoom_in: u32,

    #[arg(long, default_value = DEFAULT_PICTURES_DIR)]
    pictures: PathBuf,
}

fn parse_complex(value: &str) -> Result<Complex, String> {
    let (real, imag) = value
        .split_once(',')
        .ok_or_else(|| format!("expected `re,im`, got `{}`", value))?;
    let real = real.trim().parse::<f64>().map_err(|err| err.to_string())?;
    let imag = imag.trim().parse::<f64>().map_err(|err| err.to_string())?;

    Ok(Complex::new(real, imag))
}

fn run(args: &Args) -> Result<Option<PathBuf>, Box<dyn Error>> {
    let config = SessionConfig {
        dimensions: Dimensions::new(args.width, args.height)?,
        max_iterations: args.max_iterations,
        zoom_factor: args.zoom_factor,
        pictures_dir: args.pictures.clone(),
        initial_mode: args.mode,
        julia_param: args.julia,
    };

    fs::create_dir_all(&config.pictures_dir)?;

    let sink = PngDirectorySink::new(&config.pictures_dir);
    let mut controller = SessionController::new(&config, sink)?;
    let center = Point {
        x: (args.width / 2) as i32,
        y: (args.height / 2) as i32,
    };

    for _ in 0..args.zoom_in {
        controller.handle_event(InputEvent::Scrolled {
            pointer: center,
            delta: 1.0,
        })?;
    }

    if !controller.regenerate_if_needed() {
        log::warn!("mode {} selects no fractal, nothing rendered", args.mode);
        return Ok(None);
    }

    log::info!("{}", controller.state().status_line());

    Ok(controller.save()?)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    run(&args)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_for(pictures: &std::path::Path, extra: &[&str]) -> Args {
        let pictures = pictures.to_string_lossy().into_owned();
        let mut argv = vec![
            "fractal_viewer",
            "--width",
            "48",
            "--height",
            "32",
            "--pictures",
            pictures.as_str(),
        ];
        argv.extend_from_slice(extra);

        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_parse_complex() {
        assert_eq!(parse_complex("-0.8, 0.156"), Ok(Complex::new(-0.8, 0.156)));
        assert!(parse_complex("0.3").is_err());
        assert!(parse_complex("a,b").is_err());
    }

    #[test]
    fn test_defaults_match_session_defaults() {
        let args = Args::try_parse_from(["fractal_viewer"]).unwrap();

        assert_eq!(args.width, 800);
        assert_eq!(args.height, 800);
        assert_eq!(args.max_iterations, 255);
        assert_eq!(args.zoom_factor, 1.1);
        assert_eq!(args.julia, Complex::ZERO);
        assert_eq!(args.pictures, PathBuf::from("./pictures"));
    }

    #[test]
    fn test_negative_julia_parameter_parses() {
        let args = Args::try_parse_from(["fractal_viewer", "--julia", "-0.7,0.27"]).unwrap();

        assert_eq!(args.julia, Complex::new(-0.7, 0.27));
    }

    #[test]
    fn test_run_writes_sequential_images() {
        let dir = tempfile::tempdir().unwrap();
        let pictures = dir.path().join("pictures");

        let first = run(&args_for(&pictures, &["--mode", "3", "--zoom-in", "4"])).unwrap();
        let second = run(&args_for(&pictures, &[])).unwrap();

        assert_eq!(first, Some(pictures.join("image_0.png")));
        assert_eq!(second, Some(pictures.join("image_1.png")));
        assert_eq!(
            image::image_dimensions(pictures.join("image_0.png")).unwrap(),
            (48, 32)
        );
    }

    #[test]
    fn test_run_with_unknown_mode_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();

        let result = run(&args_for(dir.path(), &["--mode", "9"])).unwrap();

        assert_eq!(result, None);
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_run_rejects_zero_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let mut args = args_for(dir.path(), &[]);
        args.width = 0;

        assert!(run(&args).is_err());
    }
}
