use livewire::{
    GridPoint, Rgb, RgbImage, ScissorsError, SelectionSession, SessionOptions, SmoothingOptions,
};

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), ScissorsError> {
    // Demo stub: draws a bright disc on a dark background, drops four
    // anchors on its rim and closes the selection.
    let (w, h) = (160usize, 120usize);
    let (cy, cx, radius) = (60.0f64, 80.0f64, 40.0f64);
    let mut img = RgbImage::filled(w, h, Rgb::new(20, 24, 30));
    for y in 0..h {
        for x in 0..w {
            let (dy, dx) = (y as f64 - cy, x as f64 - cx);
            if (dy * dy + dx * dx).sqrt() <= radius {
                img.set(x, y, Rgb::new(230, 210, 190));
            }
        }
    }

    let options = SessionOptions::default().with_smoothing(SmoothingOptions::new(5, 1.0));
    let mut session = SelectionSession::new(img, options)?;
    for anchor in [(20, 80), (60, 120), (100, 80), (60, 40)] {
        session.place_anchor(GridPoint::from(anchor))?;
    }
    let boundary = session.close()?;

    println!(
        "boundary points={} cost={:.3e} graph_ms={:.3}",
        boundary.len(),
        session.boundary_cost(),
        session.graph().build_ms()
    );
    Ok(())
}
