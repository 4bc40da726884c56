// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use assert_cmd::prelude::*;
use image::{Rgb, RgbImage};
use predicates::prelude::*;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

fn write_sample(path: &Path, width: u32, height: u32) {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x * 23) as u8, (y * 41) as u8, ((x + y) * 13) as u8])
    })
    .save(path)
    .unwrap();
}

#[test]
fn shrinks_an_image_to_the_requested_size() {
    let dir = tempdir().unwrap();
    let (input, output) = (dir.path().join("in.png"), dir.path().join("out.png"));
    write_sample(&input, 10, 8);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg("7")
        .arg("6")
        .arg(&output)
        .assert()
        .success();

    assert!(predicate::path::exists().eval(&output));
    let carved = image::open(&output).unwrap().to_rgb();
    assert_eq!(carved.dimensions(), (7, 6));
}

#[test]
fn refuses_to_grow_an_image() {
    let dir = tempdir().unwrap();
    let (input, output) = (dir.path().join("in.png"), dir.path().join("out.png"));
    write_sample(&input, 10, 8);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg("11")
        .arg("8")
        .arg(&output)
        .assert()
        .failure();

    assert!(predicate::path::missing().eval(&output));
}

#[test]
fn refuses_a_zero_target() {
    let dir = tempdir().unwrap();
    let (input, output) = (dir.path().join("in.png"), dir.path().join("out.png"));
    write_sample(&input, 4, 4);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg("0")
        .arg("4")
        .arg(&output)
        .assert()
        .failure();

    assert!(predicate::path::missing().eval(&output));
}

#[test]
fn refuses_dimensions_that_are_not_numbers() {
    let dir = tempdir().unwrap();
    let (input, output) = (dir.path().join("in.png"), dir.path().join("out.png"));
    write_sample(&input, 4, 4);

    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(&input)
        .arg("wide")
        .arg("4")
        .arg(&output)
        .assert()
        .failure();
}

#[test]
fn reports_a_missing_input() {
    let dir = tempdir().unwrap();
    Command::cargo_bin("seamcarve")
        .unwrap()
        .arg(dir.path().join("nowhere.png"))
        .arg("2")
        .arg("2")
        .arg(dir.path().join("out.png"))
        .assert()
        .failure();
}
