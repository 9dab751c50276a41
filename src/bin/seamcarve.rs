use seamcarver::{carve_to, energy_to_image, SeamCarver};
use std::io;
use std::process;

extern crate clap;
extern crate image;

use clap::{App, Arg, ArgMatches};
use failure::Error;
use image::pnm::{PNMEncoder, PNMSubtype, SampleEncoding};
use image::ColorType;
use tracing_subscriber::EnvFilter;

fn dimension(matches: &ArgMatches, name: &str, current: u32) -> Result<u32, Error> {
    match matches.value_of(name) {
        Some(value) => Ok(value.parse::<u32>()?),
        None => Ok(current),
    }
}

fn init_logging(verbosity: u64) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let input = matches.value_of("image").unwrap();
    let source = image::open(input)?;
    let mut carver = SeamCarver::new(&source)?;

    if matches.is_present("energy") {
        let map = energy_to_image(&carver);
        let (width, height) = map.dimensions();
        return match matches.value_of("output") {
            Some(path) => Ok(map.save(path)?),
            None => Ok(PNMEncoder::new(io::stdout())
                .with_subtype(PNMSubtype::Graymap(SampleEncoding::Binary))
                .encode(map.into_raw().as_slice(), width, height, ColorType::Gray(8))?),
        };
    }

    let newwidth = dimension(matches, "width", carver.width())?;
    let newheight = dimension(matches, "height", carver.height())?;
    carve_to(&mut carver, newwidth, newheight)?;

    let carved = carver.to_image();
    let (width, height) = carved.dimensions();
    match matches.value_of("output") {
        Some(path) => carved.save(path)?,
        None => PNMEncoder::new(io::stdout())
            .with_subtype(PNMSubtype::Pixmap(SampleEncoding::Binary))
            .encode(carved.into_raw().as_slice(), width, height, ColorType::RGB(8))?,
    }
    Ok(())
}

fn main() {
    let matches = App::new("seamcarve")
        .version("0.1.0")
        .author("Elf M. Sternberg <elf.sternberg@gmail.com>")
        .about("Content-aware image resizing by seam carving")
        .arg(
            Arg::with_name("image")
                .help("The image to carve")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::with_name("width")
                .long("width")
                .takes_value(true)
                .value_name("PIXELS")
                .help("Target width (defaults to the current width)"),
        )
        .arg(
            Arg::with_name("height")
                .long("height")
                .takes_value(true)
                .value_name("PIXELS")
                .help("Target height (defaults to the current height)"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .value_name("FILE")
                .help("Where to write the result; binary PNM on stdout if absent"),
        )
        .arg(
            Arg::with_name("energy")
                .short("e")
                .long("energy")
                .help("Write the energy map of the image instead of carving it"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .multiple(true)
                .help("More logging; repeat for more"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    if let Err(err) = run(&matches) {
        eprintln!("seamcarve: {}", err);
        process::exit(1);
    }
}
