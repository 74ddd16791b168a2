// Copyright 2026 the Vantage Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use vantage_imaging::Bitmap;

const EDGE: u32 = 20;

/// Light gray background of the texture.
const LIGHT: [u8; 4] = [0xc0, 0xc0, 0xc0, 0xff];
/// Mid gray of the two marked quadrants.
const MID: [u8; 4] = [0x80, 0x80, 0x80, 0xff];

/// Builds the transparency-hint texture tiled behind the image in
/// [`Background::Checker`](vantage_view::Background::Checker) mode.
///
/// A 20x20 bitmap split into four 10x10 quadrants: mid gray at top-left and
/// bottom-right, light gray elsewhere. The viewer generates it once at
/// construction and treats it as immutable.
#[must_use]
pub fn checker_texture() -> Bitmap {
    let half = EDGE / 2;
    let mut data = Vec::with_capacity((EDGE * EDGE * 4) as usize);
    for y in 0..EDGE {
        for x in 0..EDGE {
            let top_left = x < half && y < half;
            let bottom_right = x >= half && y >= half;
            let px = if top_left || bottom_right { MID } else { LIGHT };
            data.extend_from_slice(&px);
        }
    }
    Bitmap::from_rgba8(EDGE, EDGE, data)
}
