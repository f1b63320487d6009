/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use clap::parser::ValueSource;
use clap::ArgMatches;

pub mod global_options;
pub mod operations;

/// Fill arguments into a Vec according to the
/// order which they were specified in the command line
pub fn fill_args(options: &ArgMatches) -> Vec<String> {
    let mut map = Vec::with_capacity(20);

    for id in options.ids() {
        if options.try_get_many::<clap::Id>(id.as_str()).is_ok() {
            // ignore groups
            continue;
        }

        if options.value_source(id.as_str()) != Some(ValueSource::CommandLine) {
            // ignore things not passed via command line
            continue;
        }
        // every argument passed on the command line has an index
        if let Some(index) = options.index_of(id.as_str()) {
            map.push((index, id.to_string()));
        }
    }
    map.sort_by_key(|(index, _)| *index);

    map.into_iter().map(|(_, argument)| argument).collect()
}
