use anyhow::Context;
use canvas_gradient::coords::Vec2;
use canvas_gradient::host::{GradientHandle, PlatformObject};
use canvas_gradient::logging::{LoggingConfig, init_logging};
use canvas_gradient::paint::Paint;
use canvas_gradient::raster;
use canvas_gradient::{GradientKind, Rgba};

/// Characters from dark to light for the terminal preview.
const RAMP: &[u8] = b" .:-=+*#%@";

const PREVIEW_W: u32 = 48;
const PREVIEW_H: u32 = 12;

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║          CANVAS GRADIENT PREVIEW       ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();

    let linear = GradientHandle::create_linear(0.0, 0.0, f64::from(PREVIEW_W), 0.0);
    linear.add_color_stop(0.0, "black")?;
    linear.add_color_stop(1.0, "#ffffff")?;
    linear.add_color_stop(0.5, "rgb(255 0 0 / 50%)")?;

    let cx = f64::from(PREVIEW_W) / 2.0;
    let cy = f64::from(PREVIEW_H) / 2.0;

    let radial = GradientHandle::create_radial(cx, cy, 0.0, cx, cy, cx);
    radial.add_color_stop(0.0, "white")?;
    radial.add_color_stop(1.0, "hsl(240, 100%, 10%)")?;

    let conic = GradientHandle::create_conic(0.0, cx, cy);
    conic.add_color_stop(0.0, "black")?;
    conic.add_color_stop(1.0, "white")?;

    // Rejected stops leave the gradient untouched.
    for (offset, color) in [(1.5, "red"), (0.3, "not-a-color")] {
        if let Err(err) = conic.add_color_stop(offset, color) {
            log::warn!("{} rejected stop ({offset}, {color:?}): {err}", conic.interface_name());
        }
    }

    for handle in [&linear, &radial, &conic] {
        print_samples(handle);
        print_preview(handle).with_context(|| format!("previewing {:?} gradient", handle.kind()))?;
    }

    Ok(())
}

fn print_samples(handle: &GradientHandle) {
    let line: Vec<String> = (0..=4)
        .map(|i| {
            let t = f64::from(i) / 4.0;
            let c = handle.sample(t);
            format!("{t:.2}=#{:02x}{:02x}{:02x}{:02x}", c.r, c.g, c.b, c.a)
        })
        .collect();
    println!("  {:?}  {}", handle.kind(), line.join("  "));
}

fn print_preview(handle: &GradientHandle) -> anyhow::Result<()> {
    let paint = Paint::from(handle.snapshot());
    let pixels = raster::fill_pixels(&paint, PREVIEW_W, PREVIEW_H);
    anyhow::ensure!(
        raster::as_bytes(&pixels).len() == (PREVIEW_W * PREVIEW_H * 4) as usize,
        "unexpected pixel buffer size"
    );

    println!();
    for row in pixels.chunks(PREVIEW_W as usize) {
        let text: String = row.iter().map(|&c| ramp_char(c)).collect();
        println!("    {text}");
    }
    println!();

    if handle.kind() == GradientKind::Conic {
        let edge = raster::shade(&paint, Vec2::new(0.0, f64::from(PREVIEW_H) / 2.0));
        log::info!("conic west edge: {edge:?}");
    }
    Ok(())
}

/// Maps a color's alpha-weighted luminance onto `RAMP`.
fn ramp_char(c: Rgba) -> char {
    let luma = (0.2126 * f64::from(c.r) + 0.7152 * f64::from(c.g) + 0.0722 * f64::from(c.b)) / 255.0;
    let level = luma * f64::from(c.a) / 255.0;
    let idx = ((level * (RAMP.len() - 1) as f64).round() as usize).min(RAMP.len() - 1);
    char::from(RAMP[idx])
}
