/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use pixkit_core::errors::PixelErrors;
use pixkit_io::codecs::ImageFormat;

use crate::serde::ImageInfo;

/// Probe the input file, decode it and print information about it to standard output.
pub fn probe_input_files(args: &ArgMatches) -> Result<(), PixelErrors> {
    let Some(in_file) = args.get_one::<String>("in") else {
        return Err(PixelErrors::GenericStr("No input file to probe"));
    };
    let data = std::fs::read(in_file)?;

    let format = ImageFormat::guess_format(&data).ok_or_else(|| {
        PixelErrors::DecodeErrors(format!("Unknown image format for {in_file:?}"))
    })?;
    let image = format.decode(&data)?;

    let info = ImageInfo {
        file:       in_file,
        size:       data.len() as u64,
        format:     format.name(),
        width:      image.width(),
        height:     image.height(),
        channels:   image.channels(),
        colorspace: image.colorspace().map(|x| format!("{x:?}"))
    };
    let json = serde_json::to_string_pretty(&info)
        .map_err(|e| PixelErrors::GenericString(format!("Could not serialize: {e}")))?;

    println!("{json}");
    Ok(())
}
