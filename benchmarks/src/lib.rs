/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use nanorand::Rng;
use pixkit_core::buffer::PixelBuffer;

pub const BENCH_WIDTH: usize = 1920;
pub const BENCH_HEIGHT: usize = 1080;

/// A noisy image used as input for every benchmark
///
/// The seed is fixed so runs are comparable
pub fn sample_image(channels: usize) -> PixelBuffer {
    let mut rng = nanorand::WyRand::new_seed(0x5eed);
    let mut pixels = vec![0_u8; BENCH_WIDTH * BENCH_HEIGHT * channels];
    rng.fill(&mut pixels);

    match PixelBuffer::new(pixels, BENCH_WIDTH, BENCH_HEIGHT, channels) {
        Ok(image) => image,
        Err(e) => panic!("could not create sample image: {e:?}")
    }
}
