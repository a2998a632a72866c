//! `freelook [OPTIONS.toml]`: open a window and fly the camera with
//! WASD + mouse. Set `RUST_LOG=trace` to see the camera pose per frame.

use std::path::Path;

use freelook::{Options, Viewer};

fn main() {
    env_logger::init();

    let options = match std::env::args().nth(1) {
        Some(path) => match Options::load(Path::new(&path)) {
            Ok(options) => options,
            Err(e) => {
                log::error!("{e}");
                std::process::exit(1);
            }
        },
        None => Options::default(),
    };

    if let Err(e) = Viewer::builder().with_options(options).build().run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
