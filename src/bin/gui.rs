fn main() {
    fractal_viewer::run_gui();
}
