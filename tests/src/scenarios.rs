/*
 * Copyright (c) 2023.
 *
 * This software is free software;
 *
 * You can redistribute it or modify it under terms of the MIT, Apache License or Zlib license
 */

use std::fs::read;

use crate::{encode, vectors_path, TestEntry};

#[test]
#[allow(clippy::uninlined_format_args)]
fn test_scenarios() {
    let file = vectors_path().join("scenarios.json");

    let json_file = read(file).unwrap();

    let entries: Vec<TestEntry> = serde_json::from_slice(&json_file).unwrap();
    assert!(!entries.is_empty());

    let mut failed = Vec::new();

    for entry in &entries {
        let output = encode(
            &entry.pixel_data(),
            entry.width,
            entry.height,
            entry.colorspace.to_colorspace(),
            entry.descriptor.to_descriptor()
        );

        if output != entry.expected {
            // report error
            let err = format!(
                "Output mismatch for {}\nExpected {:?}\nbut found {:?}\nConfig:{:#?}",
                entry.name, entry.expected, output, entry
            );
            eprintln!("{}\n", err);
            failed.push(entry.name.clone());
        }
    }
    if !failed.is_empty() {
        panic!("Scenarios failed: {:?}", failed);
    }
}
