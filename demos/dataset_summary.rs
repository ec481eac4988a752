use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    vidplot::example_apps::run_dataset_summary(std::env::args().skip(1))
}
