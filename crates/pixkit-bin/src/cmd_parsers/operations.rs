/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::ArgMatches;
use log::{debug, info};
use pixkit_core::errors::PixelErrors;
use pixkit_core::pipelines::Pipeline;
use pixkit_core::traits::IntoImage;
use pixkit_procs::arithmetic::CombineMode;
use pixkit_procs::brighten::Brighten;
use pixkit_procs::color_matrix::ColorMatrix;
use pixkit_procs::contrast::Contrast;
use pixkit_procs::crop::Crop;
use pixkit_procs::grayscale::RgbToGrayScale;
use pixkit_procs::high_pass::HighPass;
use pixkit_procs::hough::HoughTransform;
use pixkit_procs::low_pass::LowPass;
use pixkit_procs::otsu::OtsuThreshold;
use pixkit_procs::resize::{Resize, ResizeMethod};
use pixkit_procs::threshold::Threshold;

use crate::combine::FitAndCombine;

/// Add the operation named by `argument` to the pipeline
///
/// Arguments that are not operations are ignored
pub fn parse_options<T: IntoImage>(
    workflow: &mut Pipeline<T>, argument: &str, args: &ArgMatches
) -> Result<(), PixelErrors> {
    if argument == "grayscale" {
        debug!("Added grayscale operation");
        workflow.chain_operations(Box::new(RgbToGrayScale::new()));
    } else if argument == "sepia" {
        debug!("Added sepia operation");
        workflow.chain_operations(Box::new(ColorMatrix::sepia()));
    } else if argument == "brightness" {
        let value = *get_value::<i32>(args, argument)?;
        debug!("Added brightness operation with {value}");
        workflow.chain_operations(Box::new(Brighten::new(value)));
    } else if argument == "contrast" {
        let factor = *get_value::<f32>(args, argument)?;
        debug!("Added contrast operation with factor {factor}");
        workflow.chain_operations(Box::new(Contrast::new(factor)));
    } else if argument == "threshold" {
        let value = *get_value::<u8>(args, argument)?;
        debug!("Added threshold operation with value {value}");
        workflow.chain_operations(Box::new(Threshold::new(value)));
    } else if argument == "low-pass" {
        let size = *get_value::<usize>(args, argument)?;
        debug!("Added low pass filter with size {size}");
        workflow.chain_operations(Box::new(LowPass::new(size)));
    } else if argument == "high-pass" {
        let size = *get_value::<usize>(args, argument)?;
        debug!("Added high pass filter with size {size}");
        workflow.chain_operations(Box::new(HighPass::new(size)));
    } else if argument == "otsu" {
        debug!("Added otsu threshold operation");
        workflow.chain_operations(Box::new(OtsuThreshold::new()));
    } else if argument == "hough" {
        debug!("Added hough transform operation");
        workflow.chain_operations(Box::new(HoughTransform::new()));
    } else if argument == "resize" {
        let [width, height] = get_pair(args, argument)?;
        debug!("Added resize operation with width={width} height={height}");
        workflow.chain_operations(Box::new(Resize::new(
            width,
            height,
            ResizeMethod::NearestNeighbor
        )));
    } else if argument == "crop" {
        let [width, height] = get_pair(args, argument)?;
        debug!("Added crop operation with width={width} height={height}");
        workflow.chain_operations(Box::new(Crop::new(width, height)));
    } else if argument == "add" || argument == "subtract" {
        let mode = CombineMode::from_string_result(argument)?;
        let file = get_value::<String>(args, argument)?;

        info!("Reading {file:?} for {argument}");
        let operand = pixkit_io::file_io::open(file)?;

        debug!("Added {argument} operation with {file:?}");
        workflow.chain_operations(Box::new(FitAndCombine::new(operand, mode)));
    }
    Ok(())
}

fn get_value<'a, T>(args: &'a ArgMatches, argument: &str) -> Result<&'a T, PixelErrors>
where
    T: std::any::Any + Clone + Send + Sync + 'static
{
    args.get_one::<T>(argument)
        .ok_or_else(|| PixelErrors::GenericString(format!("Missing value for {argument}")))
}

fn get_pair(args: &ArgMatches, argument: &str) -> Result<[usize; 2], PixelErrors> {
    let values: Vec<usize> = args
        .get_many::<usize>(argument)
        .map(|x| x.copied().collect())
        .unwrap_or_default();

    match values[..] {
        [width, height] => Ok([width, height]),
        _ => Err(PixelErrors::GenericString(format!(
            "{argument} expects a width and a height, got {} values",
            values.len()
        )))
    }
}
