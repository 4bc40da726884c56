// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

#[macro_use]
extern crate clap;

use seamcarve::{CarveRequest, SeamCarver};
use std::process;

use clap::{App, Arg, ArgMatches};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn is_dimension(v: String) -> Result<(), String> {
    v.parse::<u32>()
        .map(|_| ())
        .map_err(|_| format!("'{}' is not a pixel count", v))
}

fn run(matches: &ArgMatches) -> Result<(), failure::Error> {
    let input = matches.value_of("input").unwrap_or_default();
    let output = matches.value_of("output").unwrap_or_default();
    let newwidth = value_t!(matches, "width", u32)?;
    let newheight = value_t!(matches, "height", u32)?;

    let image = image::open(input)?.to_rgb();
    let request = CarveRequest::from_targets(image.dimensions(), (newwidth, newheight))?;
    info!(
        "Remove {} columns and {} rows from the image.",
        request.width_delta, request.height_delta
    );

    let carved = SeamCarver::new(&image).carve(request)?;

    info!("Saving new image as {}", output);
    carved.save(output)?;
    info!("All done.");
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let matches = App::new("seamcarve")
        .version(crate_version!())
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("input")
                .help("The image to shrink")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("width")
                .help("The new width, no wider than the input")
                .required(true)
                .validator(is_dimension)
                .index(2),
        )
        .arg(
            Arg::with_name("height")
                .help("The new height, no taller than the input")
                .required(true)
                .validator(is_dimension)
                .index(3),
        )
        .arg(
            Arg::with_name("output")
                .help("Where to write the result; the format follows the extension")
                .required(true)
                .index(4),
        )
        .get_matches();

    if let Err(err) = run(&matches) {
        error!("{}", err);
        process::exit(1);
    }
}
