use cyto::rendering::{RENDERER_CANVAS, Renderer, Surface, SurfaceRegistry};
use cyto::shapes;
use cyto::sketch::{Sketch, SketchHost};
use std::env;
use std::process;

/// Demo sketch: background, a few gated shapes, one deferred path.
struct DemoSketch;

impl Sketch for DemoSketch {
    fn setup(&mut self, renderer: &mut Renderer) {
        renderer.apply_background("#101018");
        renderer.set_line_width(2.0);
    }

    fn draw(&mut self, renderer: &mut Renderer, frame: u64) {
        let t = frame as f32;

        // Fill-only shapes: stroke stays disabled.
        renderer.no_stroke();
        renderer.fill_with("#ff4040");
        shapes::rect(renderer, 40.0 + t * 4.0, 60.0, 120.0, 80.0);

        renderer.fill_with("#40c070");
        shapes::circle(renderer, 420.0, 160.0 + t * 3.0, 50.0);

        // Stroke-only wave across the surface.
        renderer.no_fill();
        renderer.stroke_with("#f0e040");
        renderer.begin_path();
        renderer.move_to(0.0, 360.0);
        renderer.quadratic_curve_to(160.0, 300.0 - t * 2.0, 320.0, 360.0);
        renderer.quadratic_curve_to(480.0, 420.0 + t * 2.0, 640.0, 360.0);
        renderer.stroke();

        // Both gates open.
        renderer.fill_with("#3060c0");
        renderer.stroke_with("#ffffff");
        shapes::triangle(renderer, 320.0, 40.0, 360.0, 110.0, 280.0, 110.0);
    }
}

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Cyto demo renderer");
        eprintln!("Usage: {} <output.png> [frames]", args[0]);
        process::exit(1);
    }

    let output_path = &args[1];
    let frames: u64 = match args.get(2) {
        Some(n) => match n.parse() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("Error: invalid frame count '{}'", n);
                process::exit(1);
            }
        },
        None => 8,
    };

    let mut registry = SurfaceRegistry::new();
    let surface = match Surface::new(640, 480) {
        Ok(surface) => surface,
        Err(err) => {
            eprintln!("Error: {}", err);
            process::exit(1);
        }
    };
    registry.register("main", surface);

    let renderer = Renderer::new(RENDERER_CANVAS, "main", &mut registry);
    if !renderer.is_active() {
        process::exit(1);
    }

    let mut host = SketchHost::new(renderer);
    let drawn = host.start(&mut DemoSketch, frames);
    println!("Rendered {} frame(s)", drawn);

    let pixmap = host
        .renderer()
        .surface()
        .expect("active renderer has a surface")
        .pixmap();
    if let Err(err) = pixmap.save_png(output_path) {
        eprintln!("Error: failed to write {}: {}", output_path, err);
        process::exit(1);
    }
    println!("Wrote {}", output_path);
}
