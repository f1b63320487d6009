/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::path::Path;

use clap::ArgMatches;
use log::{debug, info};
use pixkit_core::errors::PixelErrors;
use pixkit_core::pipelines::Pipeline;
use pixkit_io::file_io::{save, ImageFile};

use crate::cmd_parsers::global_options::CmdOptions;
use crate::cmd_parsers::{fill_args, operations};
use crate::probe_files::probe_input_files;

pub(crate) fn create_and_exec_workflow_from_cmd(
    args: &ArgMatches, cmd_opts: &CmdOptions
) -> Result<(), PixelErrors> {
    if args.get_flag("probe") {
        return probe_input_files(args);
    }
    info!("Creating workflows from input");

    let in_file = args
        .get_one::<String>("in")
        .ok_or(PixelErrors::GenericStr("No input file"))?;
    let out_file = args
        .get_one::<String>("out")
        .ok_or(PixelErrors::GenericStr("No output file"))?;

    verify_file_paths(Path::new(in_file), Path::new(out_file), cmd_opts)?;

    let mut workflow = Pipeline::new();
    workflow.chain_decoder(ImageFile::new(in_file));

    for argument in fill_args(args) {
        operations::parse_options(&mut workflow, &argument, args)?;
    }

    workflow.advance_to_end()?;

    for image in workflow.images() {
        debug!("Saving {:?} image to {out_file:?}", image.dimensions());
        save(image, out_file, cmd_opts.jpeg_quality)?;
    }
    Ok(())
}

fn verify_file_paths(in_path: &Path, out_path: &Path, cmd_opts: &CmdOptions) -> Result<(), PixelErrors> {
    if in_path == out_path {
        return Err(PixelErrors::GenericString(format!(
            "Cannot use {in_path:?} as both input and output"
        )));
    }

    if !in_path.exists() {
        return Err(PixelErrors::GenericString(format!(
            "Path {in_path:?}, does not exist"
        )));
    }

    if !in_path.is_file() {
        return Err(PixelErrors::GenericString(format!(
            "Path {in_path:?} is not a file"
        )));
    }

    if out_path.exists() {
        if cmd_opts.override_files {
            info!("Overwriting path {out_path:?}");
        } else {
            return Err(PixelErrors::GenericString(format!(
                "File {out_path:?} exists, pass --yes to overwrite it"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use pixkit_core::buffer::PixelBuffer;
    use pixkit_core::errors::PixelErrors;
    use pixkit_io::file_io::{open, save_png};

    use crate::cmd_args::create_cmd_args;
    use crate::cmd_parsers::global_options::{parse_options, CmdOptions};
    use crate::workflow::{create_and_exec_workflow_from_cmd, verify_file_paths};

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("pixkit-bin-{}-{name}", std::process::id()))
    }

    #[test]
    fn refuses_to_overwrite_without_yes() {
        let input = temp_path("verify-in.png");
        let output = temp_path("verify-out.png");
        save_png(&PixelBuffer::fill(1, 2, 2, 1).unwrap(), &input).unwrap();
        save_png(&PixelBuffer::fill(1, 2, 2, 1).unwrap(), &output).unwrap();

        let mut options = CmdOptions::new();
        assert!(verify_file_paths(&input, &output, &options).is_err());

        options.override_files = true;
        assert!(verify_file_paths(&input, &output, &options).is_ok());
        assert!(verify_file_paths(&input, &input, &options).is_err());

        std::fs::remove_file(&input).unwrap();
        std::fs::remove_file(&output).unwrap();
    }

    #[test]
    fn missing_input_is_rejected() {
        let options = CmdOptions::new();
        let result = verify_file_paths(Path::new("/no/such/pixkit.png"), &temp_path("x.png"), &options);
        assert!(result.is_err());
    }

    #[test]
    fn runs_operations_and_saves() {
        let input = temp_path("workflow-in.png");
        let other = temp_path("workflow-other.png");
        let output = temp_path("workflow-out.png");

        save_png(&PixelBuffer::fill(100, 6, 4, 3).unwrap(), &input).unwrap();
        save_png(&PixelBuffer::fill(50, 3, 8, 3).unwrap(), &other).unwrap();

        let matches = create_cmd_args()
            .try_get_matches_from([
                "pixkit",
                "-i",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "--subtract",
                other.to_str().unwrap(),
                "--brightness",
                "5"
            ])
            .unwrap();
        let options = parse_options(&matches);

        create_and_exec_workflow_from_cmd(&matches, &options).unwrap();
        let result = open(&output).unwrap();

        for path in [&input, &other, &output] {
            std::fs::remove_file(path).unwrap();
        }
        assert_eq!(result.dimensions(), (3, 4));
        assert!(result.data().iter().all(|x| *x == 55));
    }

    #[test]
    fn probe_does_not_write() {
        let input = temp_path("probe-in.png");
        let output = temp_path("probe-out.png");
        save_png(&PixelBuffer::fill(20, 5, 3, 4).unwrap(), &input).unwrap();

        let matches = create_cmd_args()
            .try_get_matches_from(["pixkit", "-i", input.to_str().unwrap(), "--probe"])
            .unwrap();
        let options = parse_options(&matches);
        assert!(create_and_exec_workflow_from_cmd(&matches, &options).is_ok());

        let matches = create_cmd_args()
            .try_get_matches_from([
                "pixkit",
                "-i",
                input.to_str().unwrap(),
                "-o",
                output.to_str().unwrap(),
                "--probe",
                "--grayscale"
            ])
            .unwrap();
        let options = parse_options(&matches);
        assert!(create_and_exec_workflow_from_cmd(&matches, &options).is_ok());

        std::fs::remove_file(&input).unwrap();
        assert!(!output.exists());
    }

    #[test]
    fn probe_unknown_format() {
        let input = temp_path("probe-unknown.ppm");
        std::fs::write(&input, b"P6\n2 2\n255\n").unwrap();

        let matches = create_cmd_args()
            .try_get_matches_from(["pixkit", "-i", input.to_str().unwrap(), "--probe"])
            .unwrap();
        let options = parse_options(&matches);
        let result = create_and_exec_workflow_from_cmd(&matches, &options);

        std::fs::remove_file(&input).unwrap();
        assert!(matches!(result, Err(PixelErrors::DecodeErrors(_))));
    }
}
