/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::{value_parser, Arg, ArgAction, ArgGroup, Command};

#[rustfmt::skip]
pub fn create_cmd_args() -> Command {
    Command::new("pixkit")
        .about("Decode an image, transform it and encode the result")
        .arg(Arg::new("in")
            .short('i')
            .long("input")
            .help("Input file to read data from")
            .required(true))
        .arg(Arg::new("out")
            .short('o')
            .long("output")
            .help("Output to write the data to, the extension picks the format")
            .required_unless_present("probe"))
        .arg(Arg::new("quality")
            .long("quality")
            .help("Quality of jpeg output, between 1 and 100")
            .default_value("90")
            .value_parser(value_parser!(u8).range(1..=100)))
        .arg(Arg::new("all-yes")
            .short('y')
            .long("yes")
            .action(ArgAction::SetTrue)
            .help("Overwrite the output file if it exists"))
        .arg(Arg::new("probe")
            .long("probe")
            .action(ArgAction::SetTrue)
            .help("Print information about the input as json and exit"))
        .arg(Arg::new("debug")
            .long("debug")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display debug information and higher"))
        .arg(Arg::new("trace")
            .long("trace")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display very verbose information"))
        .arg(Arg::new("warn")
            .long("warn")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display warnings and errors"))
        .arg(Arg::new("info")
            .long("info")
            .action(ArgAction::SetTrue)
            .help_heading("LOGGING")
            .help("Display information about the decoding options"))
        .args(add_operations())
        .group(ArgGroup::new("operations")
            .args(OPERATIONS)
            .multiple(true))
}

/// Every argument that adds an operation, operations run in the order
/// they appear on the command line
pub const OPERATIONS: [&str; 13] = [
    "grayscale", "sepia", "brightness", "contrast", "threshold", "low-pass", "high-pass", "otsu",
    "hough", "resize", "crop", "add", "subtract"
];

#[rustfmt::skip]
fn add_operations() -> [Arg; 13] {
    [
        Arg::new("grayscale")
            .long("grayscale")
            .help_heading("OPERATIONS")
            .action(ArgAction::SetTrue)
            .help("Convert the image to grayscale")
            .long_help("Replace the RGB channels of every pixel with its luma, the image keeps its channel count"),
        Arg::new("sepia")
            .long("sepia")
            .help_heading("OPERATIONS")
            .action(ArgAction::SetTrue)
            .help("Apply a sepia tone to the image"),
        Arg::new("brightness")
            .long("brightness")
            .help_heading("OPERATIONS")
            .help("Add a value to every sample, negative values darken the image")
            .value_name("delta")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(i32)),
        Arg::new("contrast")
            .long("contrast")
            .help_heading("OPERATIONS")
            .help("Scale samples away from (>1.0) or towards (<1.0) the midpoint")
            .value_name("factor")
            .allow_negative_numbers(true)
            .value_parser(value_parser!(f32)),
        Arg::new("threshold")
            .long("threshold")
            .help_heading("OPERATIONS")
            .help("Set samples at or above the value to 255 and the rest to 0")
            .value_name("value")
            .value_parser(value_parser!(u8)),
        Arg::new("low-pass")
            .long("low-pass")
            .help_heading("OPERATIONS")
            .help("Blur the image with a box filter of the given size")
            .value_name("size")
            .value_parser(value_parser!(usize)),
        Arg::new("high-pass")
            .long("high-pass")
            .help_heading("OPERATIONS")
            .help("Highlight edges with a 3x3 high pass kernel")
            .long_help("Highlight edges with a 3x3 high pass kernel\nThe kernel size is accepted but the kernel is always 3x3")
            .value_name("size")
            .value_parser(value_parser!(usize)),
        Arg::new("otsu")
            .long("otsu")
            .help_heading("OPERATIONS")
            .action(ArgAction::SetTrue)
            .help("Binarize the image with a threshold picked by Otsu's method"),
        Arg::new("hough")
            .long("hough")
            .help_heading("OPERATIONS")
            .action(ArgAction::SetTrue)
            .help("Hough line transform, currently passes the image through unchanged"),
        Arg::new("resize")
            .long("resize")
            .help_heading("OPERATIONS")
            .help("Resize the image with nearest neighbour sampling")
            .num_args(2)
            .value_names(["width", "height"])
            .value_parser(value_parser!(usize)),
        Arg::new("crop")
            .long("crop")
            .help_heading("OPERATIONS")
            .help("Keep the top left part of the image")
            .num_args(2)
            .value_names(["width", "height"])
            .value_parser(value_parser!(usize)),
        Arg::new("add")
            .long("add")
            .help_heading("OPERATIONS")
            .help("Add another image to this one")
            .long_help("Add another image to this one, sample by sample\nImages of different sizes are both resized to the smaller width and height")
            .value_name("file"),
        Arg::new("subtract")
            .long("subtract")
            .help_heading("OPERATIONS")
            .help("Subtract another image from this one")
            .long_help("Subtract another image from this one, sample by sample\nImages of different sizes are both resized to the smaller width and height")
            .value_name("file")
    ]
}
