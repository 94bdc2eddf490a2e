use argh::FromArgs;
use std::time::{Duration, Instant};

use blurbench::image::{Image, ImageSize};
use blurbench::imgproc::{
    filter::{
        convolve_fft, convolve_separable, convolve_spatial, gaussian_kernel_1d, gaussian_kernel_2d,
    },
    metrics::{l1_loss, mse},
    synthetic::checkerboard_with_noise,
};

#[derive(FromArgs)]
/// Denoise a synthetic noisy image with three gaussian blur strategies and
/// compare their wall time and outputs
struct Args {
    /// the image width in pixels
    #[argh(option, default = "512")]
    width: usize,

    /// the image height in pixels
    #[argh(option, default = "512")]
    height: usize,

    /// the gaussian kernel size, odd
    #[argh(option, default = "7")]
    kernel_size: usize,

    /// the sigma of the gaussian kernel
    #[argh(option, default = "2.0")]
    sigma: f32,

    /// the rayon thread count, 0 for the default
    #[argh(option, default = "0")]
    threads: usize,

    /// the noise generator seed
    #[argh(option, default = "42")]
    seed: u64,
}

fn as_millis(duration: Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    // size the global thread pool once, before any convolution runs
    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()?;
    }

    let size = ImageSize {
        width: args.width,
        height: args.height,
    };

    log::info!(
        "image {}, kernel {}x{} sigma {}, {} threads",
        size,
        args.kernel_size,
        args.kernel_size,
        args.sigma,
        rayon::current_num_threads()
    );

    let src = checkerboard_with_noise(size, 50, 50.0, 200.0, 25.0, args.seed)?;

    let kernel_2d = gaussian_kernel_2d(args.kernel_size, args.sigma)?;
    let kernel_1d = gaussian_kernel_1d(args.kernel_size, args.sigma)?;

    log::info!("running spatial convolution");
    let mut out_spatial = Image::from_size_val(size, 0.0)?;
    let start = Instant::now();
    convolve_spatial(&src, &mut out_spatial, &kernel_2d)?;
    let time_spatial = start.elapsed();

    log::info!("running separable convolution");
    let mut out_separable = Image::from_size_val(size, 0.0)?;
    let start = Instant::now();
    convolve_separable(&src, &mut out_separable, &kernel_1d)?;
    let time_separable = start.elapsed();

    log::info!("running fft convolution");
    let mut out_fft = Image::from_size_val(size, 0.0)?;
    let start = Instant::now();
    convolve_fft(&src, &mut out_fft, &kernel_2d)?;
    let time_fft = start.elapsed();

    println!(
        "gaussian blur {}x{}, kernel {}x{}, sigma {}",
        size.width, size.height, args.kernel_size, args.kernel_size, args.sigma
    );
    println!();
    println!("method     time (ms)   speedup");
    println!(
        "spatial    {:>9.2}   {:>6.1}x",
        as_millis(time_spatial),
        1.0
    );
    println!(
        "separable  {:>9.2}   {:>6.1}x",
        as_millis(time_separable),
        as_millis(time_spatial) / as_millis(time_separable)
    );
    println!(
        "fft        {:>9.2}   {:>6.1}x",
        as_millis(time_fft),
        as_millis(time_spatial) / as_millis(time_fft)
    );
    println!();

    let diff_separable = l1_loss(&out_spatial, &out_separable)?;
    let diff_fft = l1_loss(&out_spatial, &out_fft)?;
    println!(
        "separable vs spatial: mean abs diff {:.6}, mse {:.6}",
        diff_separable,
        mse(&out_spatial, &out_separable)?
    );
    println!(
        "fft vs spatial:       mean abs diff {:.6}, mse {:.6}",
        diff_fft,
        mse(&out_spatial, &out_fft)?
    );

    if diff_separable < 0.01 && diff_fft < 0.1 {
        println!("the three methods produce equivalent results");
    } else {
        println!("warning: results diverge beyond the expected tolerances");
    }

    Ok(())
}
