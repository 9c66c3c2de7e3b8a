fn main() -> Result<(), Box<dyn std::error::Error>> {
    let presenter = fractal_viewer::PpmFilePresenter::new();
    let mut controller = fractal_viewer::CliController::new(presenter);

    controller.generate()?;
    controller.write("output/mandelbrot.ppm")?;

    Ok(())
}
