#[cfg(feature = "cairo-backend")]
fn main() {
    use std::fs::File;

    use geoclock_rs::api::{ChartEngine, ChartEngineConfig};
    use geoclock_rs::core::Viewport;
    use geoclock_rs::render::CairoRenderer;

    let _ = geoclock_rs::telemetry::init_tracing_with_filter("debug");

    let viewport = Viewport::new(800, 800);
    let renderer = match CairoRenderer::new(800, 800) {
        Ok(renderer) => renderer,
        Err(err) => {
            eprintln!("failed to create renderer: {err}");
            return;
        }
    };

    let result = ChartEngine::new(renderer, ChartEngineConfig::new(viewport))
        .and_then(|mut engine| {
            engine.render()?;
            Ok(engine.into_renderer())
        })
        .and_then(|mut renderer| {
            let mut file = File::create("earth_clock.png")
                .map_err(|err| geoclock_rs::ClockError::Backend(err.to_string()))?;
            renderer.write_png(&mut file)
        });

    match result {
        Ok(()) => println!("wrote earth_clock.png"),
        Err(err) => eprintln!("failed to render clock: {err}"),
    }
}

#[cfg(not(feature = "cairo-backend"))]
fn main() {
    println!("run with: cargo run --features cairo-backend --example headless_clock_png");
}
