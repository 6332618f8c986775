// SPDX-License-Identifier: MPL-2.0
use std::path::PathBuf;
use vitrina::app::{self, Flags};
use vitrina::listing::Listing;

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    let config_dir: Option<PathBuf> = args.opt_value_from_str("--config-dir").unwrap_or(None);
    let listing_path: Option<PathBuf> = args
        .finish()
        .into_iter()
        .next()
        .map(PathBuf::from);

    let listing = match listing_path {
        Some(path) => match Listing::load_from_path(&path) {
            Ok(listing) => listing,
            Err(err) => {
                eprintln!("Failed to load listing {}: {}", path.display(), err);
                std::process::exit(1);
            }
        },
        None => Listing::default(),
    };

    let catalog = match listing.catalog() {
        Ok(catalog) => catalog,
        Err(err) => {
            eprintln!("Invalid image catalog: {}", err);
            std::process::exit(1);
        }
    };

    app::run(Flags {
        listing,
        catalog,
        config_dir,
    })
}
