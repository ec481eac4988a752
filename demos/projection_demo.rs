use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    vidplot::example_apps::run_projection_demo(std::env::args().skip(1))
}
